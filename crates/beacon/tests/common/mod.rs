#![allow(dead_code)]
use anyhow::Result;
use console::{BufferSink, Console, DiagnosticSink, scripting_enabled_banner};
use page_host::config::HostConfig;
use page_host::state::PageHost;
use std::sync::Arc;
use tokio::runtime::Runtime;
use url::Url;

/// URL every test host is loaded under.
pub fn demo_url() -> Result<Url> {
    Ok(Url::parse("beacon://demo")?)
}

/// Config for a host that finishes loading after `parse_ticks` update ticks,
/// or never (`None`).
pub fn loading_config(parse_ticks: Option<u32>) -> HostConfig {
    HostConfig {
        parse_ticks,
        ..HostConfig::default()
    }
}

/// A console whose output lands in a capturable buffer.
pub fn capture_console() -> (Console, Arc<BufferSink>) {
    let sink = Arc::new(BufferSink::default());
    (Console::new(Arc::clone(&sink) as Arc<dyn DiagnosticSink>), sink)
}

/// The action hosted code performs on document ready.
pub fn banner_action(console: &Console) -> impl FnOnce() + Send + 'static {
    let console = console.clone();
    move || console.log(scripting_enabled_banner())
}

/// Drive update ticks until the host reports ready, up to `max_ticks`.
pub fn drive_until_ready(runtime: &Runtime, host: &mut PageHost, max_ticks: u32) -> Result<bool> {
    for _ in 0..max_ticks {
        runtime.block_on(host.update())?;
        if host.ready_state().is_ready() {
            return Ok(true);
        }
    }
    Ok(false)
}
