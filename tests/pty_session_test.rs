// Real pty shell bound to a vt100 surface
#![cfg(unix)]

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::timeout;

use teachterm::session::{Session, SessionEvent, SessionOptions, SessionState, CLOSED_NOTICE};
use teachterm::shell::{ChannelEvent, PtyShell, ShellCapability};
use teachterm::surface::{TermSize, VtSurface};

fn script_options(script: &str) -> SessionOptions {
    SessionOptions {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        environment: vec![("TERM".to_string(), "xterm-256color".to_string())],
        ..SessionOptions::default()
    }
}

/// Feed channel events into the session until the channel closes
async fn pump_until_closed(
    session: &mut Session<VtSurface>,
    rx: &mut mpsc::UnboundedReceiver<ChannelEvent>,
) {
    loop {
        let event = timeout(Duration::from_secs(10), rx.recv())
            .await
            .expect("timed out waiting for shell")
            .expect("event channel dropped before close");
        let closed = matches!(event, ChannelEvent::Closed(_));
        session.handle(SessionEvent::Channel(event), Instant::now());
        if closed {
            return;
        }
    }
}

fn screen_contents(session: &Session<VtSurface>) -> String {
    session
        .surface()
        .map(|s| s.screen().contents())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_shell_output_renders_and_exit_goes_inert() {
    let mut session = Session::new(
        ShellCapability::Remote(Arc::new(PtyShell::new())),
        script_options("printf 'hello from pty'; exit 4"),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    session.open(VtSurface::new(TermSize::new(24, 80), 100).unwrap(), tx);
    assert_eq!(session.state(), SessionState::Live);

    pump_until_closed(&mut session, &mut rx).await;

    assert_eq!(session.state(), SessionState::Inert);
    let contents = screen_contents(&session);
    assert!(contents.contains("hello from pty"), "screen was {contents:?}");
    assert!(contents.contains(CLOSED_NOTICE));
    assert!(!contents.contains("[錯誤]"));
}

#[tokio::test]
async fn test_keystrokes_reach_real_shell() {
    let mut session = Session::new(
        ShellCapability::Remote(Arc::new(PtyShell::new())),
        script_options("read line; printf 'got:%s\\n' \"$line\""),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    session.open(VtSurface::new(TermSize::new(24, 80), 100).unwrap(), tx);

    for chunk in [&b"ping"[..], b" -c 1", b"\r"] {
        session.handle(SessionEvent::Keystroke(chunk.to_vec()), Instant::now());
    }
    pump_until_closed(&mut session, &mut rx).await;

    let contents = screen_contents(&session);
    assert!(contents.contains("got:ping -c 1"), "screen was {contents:?}");
}

#[tokio::test]
async fn test_teardown_stops_a_running_shell() {
    let mut session = Session::new(
        ShellCapability::Remote(Arc::new(PtyShell::new())),
        script_options("sleep 30"),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    session.open(VtSurface::new(TermSize::new(24, 80), 100).unwrap(), tx);

    session.teardown();
    assert_eq!(session.state(), SessionState::TornDown);

    let closed = timeout(Duration::from_secs(10), async {
        while let Some(event) = rx.recv().await {
            if let ChannelEvent::Closed(closed) = event {
                return Some(closed);
            }
        }
        None
    })
    .await
    .expect("shell did not exit after teardown");
    assert!(closed.is_some());
}
