use anyhow::Result;
use console::scripting_enabled_banner;
use page_host::gate::run_when_ready;
use page_host::state::PageHost;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

mod common;

#[test]
fn deferred_action_waits_for_the_ready_event() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let runtime = Runtime::new()?;
    let (console, sink) = common::capture_console();
    let mut host = PageHost::new(common::demo_url()?, &common::loading_config(Some(3)));

    run_when_ready(&mut host, common::banner_action(&console));
    assert!(sink.is_empty(), "action must not run while loading");

    let started = Instant::now();
    // Two non-finishing ticks spaced 5ms apart: the line must not appear.
    for _ in 0..2 {
        runtime.block_on(host.update())?;
        assert!(sink.is_empty(), "action ran before the ready event");
        std::thread::sleep(Duration::from_millis(5));
    }

    // The third tick finishes loading and delivers the ready event.
    runtime.block_on(host.update())?;
    assert!(started.elapsed() >= Duration::from_millis(5));
    assert_eq!(sink.count_matching(scripting_enabled_banner()), 1);
    Ok(())
}

#[test]
fn redispatch_ticks_never_rerun_the_action() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let runtime = Runtime::new()?;
    let (console, sink) = common::capture_console();
    let mut host = PageHost::new(common::demo_url()?, &common::loading_config(Some(1)));

    run_when_ready(&mut host, common::banner_action(&console));
    let finished = common::drive_until_ready(&runtime, &mut host, 8)?;
    assert!(finished, "host never became ready");
    assert_eq!(sink.count_matching(scripting_enabled_banner()), 1);

    // A few more ticks for safety: the one-shot event must not redeliver.
    for _ in 0..6 {
        runtime.block_on(host.update())?;
    }
    assert_eq!(sink.count_matching(scripting_enabled_banner()), 1);
    Ok(())
}

#[test]
fn every_listener_queued_while_loading_runs_exactly_once() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let runtime = Runtime::new()?;
    let (console, sink) = common::capture_console();
    let mut host = PageHost::new(common::demo_url()?, &common::loading_config(Some(2)));

    for _ in 0..4 {
        run_when_ready(&mut host, common::banner_action(&console));
    }
    assert_eq!(host.pending_listeners(), 4);

    let finished = common::drive_until_ready(&runtime, &mut host, 8)?;
    assert!(finished, "host never became ready");
    assert_eq!(sink.count_matching(scripting_enabled_banner()), 4);
    assert_eq!(host.pending_listeners(), 0);
    Ok(())
}
