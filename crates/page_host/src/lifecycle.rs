//! Load finalization and ready-event dispatch helpers.

use crate::gate::ReadyAction;
use crate::loader::DocumentLoader;
use anyhow::{Error, anyhow};
use log::{info, trace};

/// Finalize document loading if the loader has finished.
///
/// Returns true when the loader was consumed by this call.
///
/// # Errors
///
/// Returns an error if the loader refuses finalization.
pub(crate) async fn finalize_loading_if_needed(
    loader: &mut Option<DocumentLoader>,
) -> Result<bool, Error> {
    if loader.as_ref().is_some_and(DocumentLoader::is_finished) {
        let loader_inst = loader
            .take()
            .ok_or_else(|| anyhow!("Loader is finished and None!"))?;
        trace!("PageHost: loader finished, finalizing document");
        loader_inst.finish().await?;
        return Ok(true);
    }
    Ok(false)
}

/// Dispatch the ready event if loading has completed and it has not fired yet.
///
/// The fired flag is the host's single-delivery guarantee: it is set before
/// listeners run, so redispatch attempts (and registrations made while
/// listeners are running) observe the event as already delivered.
pub(crate) fn dispatch_ready_if_needed(
    loader: Option<&DocumentLoader>,
    ready_event_fired: &mut bool,
    ready_listeners: &mut Vec<ReadyAction>,
) {
    if loader.is_none() && !*ready_event_fired {
        info!(
            "PageHost: dispatching ready event to {} listener(s)",
            ready_listeners.len()
        );
        *ready_event_fired = true;
        for action in ready_listeners.drain(..) {
            action();
        }
    }
}
