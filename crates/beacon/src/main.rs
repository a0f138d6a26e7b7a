//! Demo host runner.
//!
//! Builds a simulated hosting document, registers the readiness gate with
//! the scripting banner action, and drives cooperative update ticks until
//! the document is ready (or the configured tick ceiling is reached when the
//! loader stalls). The observable result of a successful run is one line on
//! the diagnostic channel: `This user has JavaScript enabled!`.

use anyhow::Error;
use console::{Console, scripting_enabled_banner};
use log::{info, warn};
use page_host::config::HostConfig;
use page_host::gate::run_when_ready;
use page_host::state::PageHost;
use std::env;
use tokio::runtime::Runtime;
use tokio::time::sleep;
use url::Url;

pub fn main() -> Result<(), Error> {
    env_logger::init();

    let config = HostConfig::from_env();
    let url = match env::args().nth(1) {
        Some(raw) => Url::parse(&raw)?,
        None => Url::parse("beacon://demo")?,
    };

    let runtime = Runtime::new()?;
    runtime.block_on(drive(url, &config))
}

/// Drive the host until ready, the way a real embedder ticks its pages.
async fn drive(url: Url, config: &HostConfig) -> Result<(), Error> {
    let mut host = PageHost::new(url, config);

    let console = Console::log_backed();
    run_when_ready(&mut host, move || console.log(scripting_enabled_banner()));

    let mut ticks = 0u32;
    while !host.ready_state().is_ready() && ticks < config.max_ticks {
        host.update().await?;
        ticks = ticks.saturating_add(1);
        if !host.ready_state().is_ready() {
            sleep(config.tick_interval()).await;
        }
    }

    if host.ready_state().is_ready() {
        info!("beacon: {} ready after {ticks} tick(s)", host.url());
    } else {
        warn!("beacon: {} still loading after {ticks} tick(s); giving up the wait", host.url());
    }
    Ok(())
}
