//! Host document state management.

use crate::config::HostConfig;
use crate::gate::{ReadyAction, ReadyHost};
use crate::lifecycle;
use crate::loader::DocumentLoader;
use anyhow::Error;
use log::trace;
use serde::Serialize;
use url::Url;

/// Document load state as hosted code observes it.
///
/// The readiness gate only distinguishes `Loading` from the rest; the
/// three-valued shape matches the environment this host stands in for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadyState {
    /// Deferred structural setup is still in progress.
    Loading,
    /// Setup has completed; the ready event is being delivered.
    Interactive,
    /// The document has fully settled.
    Complete,
}

impl ReadyState {
    /// True iff the document has left its initial loading phase.
    #[inline]
    #[must_use]
    pub const fn is_ready(self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Stable lowercase name used in snapshots and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Interactive => "interactive",
            Self::Complete => "complete",
        }
    }
}

/// Lifecycle event flags for the host document.
#[derive(Default)]
struct LifecycleFlags {
    /// Whether the one-shot ready event has been delivered.
    ready_event_fired: bool,
}

/// JSON-serializable view of the host's lifecycle, for telemetry and tests.
#[derive(Serialize)]
struct LifecycleSnapshot<'host> {
    url: &'host str,
    ready_state: &'static str,
    ready_event_fired: bool,
    pending_listeners: usize,
}

/// A simulated hosting document.
///
/// Owns the load lifecycle: a tick-driven [`DocumentLoader`], the current
/// [`ReadyState`], and the queue of single-shot ready listeners. Progress is
/// made by driving [`PageHost::update`] cooperatively; nothing here blocks.
pub struct PageHost {
    /// Current document URL.
    url: Url,
    /// Loader for deferred structural setup; `None` once loading finished.
    loader: Option<DocumentLoader>,
    /// Load state as hosted code observes it.
    ready_state: ReadyState,
    /// Lifecycle event flags.
    lifecycle: LifecycleFlags,
    /// Single-shot listeners awaiting the ready event.
    ready_listeners: Vec<ReadyAction>,
    /// Whether to emit a lifecycle snapshot line per tick.
    telemetry_enabled: bool,
}

impl PageHost {
    /// Create a host whose document is still loading, with the loader built
    /// from `config` (`parse_ticks`, or stalled when configured to never
    /// complete).
    #[must_use]
    pub fn new(url: Url, config: &HostConfig) -> Self {
        let loader = match config.parse_ticks {
            Some(ticks) => DocumentLoader::with_ticks(ticks),
            None => DocumentLoader::stalled(),
        };
        Self {
            url,
            loader: Some(loader),
            ready_state: ReadyState::Loading,
            lifecycle: LifecycleFlags::default(),
            ready_listeners: Vec::new(),
            telemetry_enabled: config.telemetry_enabled,
        }
    }

    /// Create a host whose document finished loading before any caller could
    /// observe it; the ready event is considered already delivered.
    #[must_use]
    pub fn new_ready(url: Url) -> Self {
        Self {
            url,
            loader: None,
            ready_state: ReadyState::Complete,
            lifecycle: LifecycleFlags {
                ready_event_fired: true,
            },
            ready_listeners: Vec::new(),
            telemetry_enabled: false,
        }
    }

    /// Returns the current document URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the current load state.
    #[must_use]
    pub const fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Number of listeners still awaiting the ready event.
    #[must_use]
    pub fn pending_listeners(&self) -> usize {
        self.ready_listeners.len()
    }

    /// Run a single cooperative update tick.
    ///
    /// Polls the loader; once it has finished, finalizes it, moves the state
    /// through `Interactive` while the ready event is delivered, and settles
    /// to `Complete` within the same tick.
    ///
    /// # Errors
    ///
    /// Returns an error if load finalization or snapshot encoding fails.
    pub async fn update(&mut self) -> Result<(), Error> {
        if let Some(loader) = self.loader.as_mut() {
            loader.poll_progress();
        }

        let finalized = lifecycle::finalize_loading_if_needed(&mut self.loader).await?;
        if finalized {
            self.ready_state = ReadyState::Interactive;
        }

        lifecycle::dispatch_ready_if_needed(
            self.loader.as_ref(),
            &mut self.lifecycle.ready_event_fired,
            &mut self.ready_listeners,
        );

        if finalized {
            self.ready_state = ReadyState::Complete;
        }

        if self.telemetry_enabled {
            log::info!("PageHost: {}", self.lifecycle_snapshot_string()?);
        }
        Ok(())
    }

    /// Return a JSON snapshot of the host's lifecycle.
    ///
    /// # Errors
    ///
    /// Returns an error if snapshot serialization fails.
    pub fn lifecycle_snapshot_string(&self) -> Result<String, Error> {
        let snapshot = LifecycleSnapshot {
            url: self.url.as_str(),
            ready_state: self.ready_state.as_str(),
            ready_event_fired: self.lifecycle.ready_event_fired,
            pending_listeners: self.ready_listeners.len(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }
}

impl ReadyHost for PageHost {
    #[inline]
    fn is_ready(&self) -> bool {
        self.ready_state.is_ready()
    }

    fn on_ready_once(&mut self, action: ReadyAction) {
        if self.lifecycle.ready_event_fired {
            trace!("PageHost: ready event already fired, discarding listener");
            return;
        }
        self.ready_listeners.push(action);
    }
}
