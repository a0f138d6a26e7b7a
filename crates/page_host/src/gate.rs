//! Readiness gate over a host document.
//!
//! The gate is the single entry point hosted code uses to sequence itself
//! behind document load: hand it an action, and the action runs exactly once,
//! inline when the document is already ready, otherwise on the host's
//! one-shot ready event.

use log::trace;

/// A deferred follow-up action. Runs at most once; the host owns it until
/// the ready event fires or the host is torn down.
pub type ReadyAction = Box<dyn FnOnce() + Send>;

/// Minimal capability a hosting document exposes to the gate: a readable
/// ready state and a one-shot subscription keyed to the ready event.
///
/// Implementations guarantee single delivery for listeners registered here;
/// the gate relies on that guarantee rather than adding a guard of its own.
pub trait ReadyHost {
    /// True iff the document has left its initial loading phase.
    fn is_ready(&self) -> bool;

    /// Register a single-shot listener for the ready event. Listeners
    /// registered after the event has fired are discarded, mirroring the
    /// host environment's event semantics.
    fn on_ready_once(&mut self, action: ReadyAction);
}

/// Run `action` once the host document is ready.
///
/// If the host is already ready the action is invoked synchronously, in the
/// calling turn, before this function returns. Otherwise it is registered on
/// the host's one-shot ready event and runs exactly once when that fires.
/// Fire-and-forget: there is no output and nothing to cancel.
pub fn run_when_ready<H>(host: &mut H, action: impl FnOnce() + Send + 'static)
where
    H: ReadyHost + ?Sized,
{
    if host.is_ready() {
        trace!("gate: host already ready, running action inline");
        action();
    } else {
        trace!("gate: host still loading, deferring action to ready event");
        host.on_ready_once(Box::new(action));
    }
}
