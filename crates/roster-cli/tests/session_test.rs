//! Integration tests for the terminal input loop.

use std::sync::Arc;

use roster_cli::config::Settings;
use roster_cli::messages;
use roster_cli::session;
use roster_cli::state::AppState;
use roster_draw::application::sequencer::RevealSequencer;
use roster_draw::domain::events::{DrawEvent, DrawEventKind};
use roster_test_support::{InstantTimer, MockRng, fixed_clock};
use tokio::sync::mpsc::UnboundedReceiver;

fn test_state() -> (AppState, UnboundedReceiver<DrawEvent>) {
    let settings = Settings::default();
    let (sequencer, events) = RevealSequencer::new(
        settings.draw,
        MockRng,
        Arc::new(fixed_clock()),
        Arc::new(InstantTimer::new()),
    );
    (AppState::new(sequencer, settings), events)
}

/// Feeds `input` to the session and returns what it wrote.
async fn run_session(state: &AppState, input: &str) -> String {
    let mut out = Vec::new();
    session::run(state, input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

/// Receives events until the draw finishes or fails.
async fn until_settled(events: &mut UnboundedReceiver<DrawEvent>) -> Vec<DrawEventKind> {
    let mut kinds = Vec::new();
    while let Some(event) = events.recv().await {
        let done = matches!(
            event.kind,
            DrawEventKind::Finished { .. } | DrawEventKind::Failed { .. }
        );
        kinds.push(event.kind);
        if done {
            break;
        }
    }
    kinds
}

fn pending(events: &mut UnboundedReceiver<DrawEvent>) -> Vec<DrawEventKind> {
    let mut kinds = Vec::new();
    while let Ok(event) = events.try_recv() {
        kinds.push(event.kind);
    }
    kinds
}

#[tokio::test]
async fn test_enter_starts_a_draw() {
    let (state, mut events) = test_state();

    let written = run_session(&state, "\n").await;

    assert!(written.is_empty());
    let kinds = until_settled(&mut events).await;
    assert_eq!(kinds.first(), Some(&DrawEventKind::Started));
    assert_eq!(
        kinds.last(),
        Some(&DrawEventKind::Finished {
            values: vec![1, 2, 3, 4, 5]
        })
    );
}

#[tokio::test]
async fn test_repeated_draw_keys_start_one_draw() {
    let (state, mut events) = test_state();

    run_session(&state, "\n \nd\n").await;

    let kinds = until_settled(&mut events).await;
    let started = kinds
        .iter()
        .filter(|k| **k == DrawEventKind::Started)
        .count();
    assert_eq!(started, 1);
    assert!(pending(&mut events).is_empty());
}

#[tokio::test]
async fn test_reset_without_result_explains_and_emits_nothing() {
    let (state, mut events) = test_state();

    let written = run_session(&state, "r\n").await;

    assert!(written.contains(messages::NOTHING_TO_RESET));
    assert!(pending(&mut events).is_empty());
}

#[tokio::test]
async fn test_confirmed_reset_clears_the_draw() {
    let (state, mut events) = test_state();
    run_session(&state, "\n").await;
    until_settled(&mut events).await;
    assert!(state.sequencer.snapshot().has_result());

    let written = run_session(&state, "r\ny\n").await;

    assert!(written.contains(messages::CONFIRM_RESET));
    assert_eq!(pending(&mut events), vec![DrawEventKind::Cleared]);
    assert!(state.sequencer.snapshot().values.is_empty());
}

#[tokio::test]
async fn test_declined_reset_keeps_the_draw() {
    let (state, mut events) = test_state();
    run_session(&state, "\n").await;
    until_settled(&mut events).await;

    let written = run_session(&state, "r\nn\n").await;

    assert!(written.contains(messages::RESET_CANCELLED));
    assert!(pending(&mut events).is_empty());
    assert_eq!(state.sequencer.snapshot().values, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_picking_a_number_shows_the_fairness_notice() {
    let (state, _events) = test_state();

    let written = run_session(&state, "7\n").await;

    assert!(written.contains("7번"));
    assert!(written.contains(messages::PICK_NOTICE));
}

#[tokio::test]
async fn test_picking_during_a_draw_is_silent() {
    let (state, mut events) = test_state();

    let written = run_session(&state, "\n7\n").await;

    assert!(!written.contains(messages::PICK_NOTICE));
    until_settled(&mut events).await;
}

#[tokio::test]
async fn test_out_of_pool_number_and_gibberish_are_unknown() {
    let (state, _events) = test_state();

    let written = run_session(&state, "42\nxyz\n").await;

    assert!(written.contains("`42`"));
    assert!(written.contains("`xyz`"));
}

#[tokio::test]
async fn test_help_and_quit() {
    let (state, mut events) = test_state();

    let written = run_session(&state, "h\nq\n\n").await;

    assert!(written.contains("1-25번 중 5명이 랜덤 선택됩니다"));
    // The draw key after `q` is never read.
    assert!(pending(&mut events).is_empty());
}
