//! Host-document readiness primitives.
//!
//! This crate models the one question hosted code asks of its document: has
//! deferred structural setup finished, and if not, call me back exactly once
//! when it has. It provides the [`gate::ReadyHost`] capability, the
//! [`gate::run_when_ready`] readiness gate over it, and [`state::PageHost`],
//! a simulated hosting document whose load lifecycle is driven by cooperative
//! `update()` ticks so the whole flow stays deterministic under test.

pub mod config;
pub mod gate;
mod lifecycle;
pub mod loader;
pub mod state;

pub use config::HostConfig;
pub use gate::{ReadyAction, ReadyHost, run_when_ready};
pub use loader::DocumentLoader;
pub use state::{PageHost, ReadyState};
