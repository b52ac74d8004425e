use super::*;

fn running(step: u32, interval: u32) -> CaptureSession {
    let mut session = CaptureSession::default();
    session.start(CapturePlan::new(step, interval).unwrap()).unwrap();
    session
}

/// Drive the loop the way the page does, with every rotate succeeding.
fn run_to_end(session: &mut CaptureSession) -> u32 {
    let mut calls = 0;
    while let Some(_degrees) = session.next_step() {
        calls += 1;
        session.record_photo(format!("/static/photos/{calls}.jpg"));
    }
    calls
}

// =============================================================
// Plan
// =============================================================

#[test]
fn plan_counts_floor_of_full_turn() {
    assert_eq!(CapturePlan::new(15, 5).unwrap().total_steps, 24);
    assert_eq!(CapturePlan::new(7, 1).unwrap().total_steps, 51);
    assert_eq!(CapturePlan::new(360, 1).unwrap().total_steps, 1);
}

#[test]
fn plan_rejects_zero_and_oversized_steps() {
    assert_eq!(CapturePlan::new(0, 5), Err(CaptureError::InvalidStep(0)));
    assert_eq!(CapturePlan::new(361, 5), Err(CaptureError::InvalidStep(361)));
}

#[test]
fn plan_parse_reads_text_inputs() {
    let plan = CapturePlan::parse(" 30 ", "2").unwrap();
    assert_eq!(plan, CapturePlan { step_degrees: 30, interval_secs: 2, total_steps: 12 });
    assert_eq!(CapturePlan::parse("x", "2"), Err(CaptureError::NotANumber { field: "Rotation step" }));
    assert_eq!(CapturePlan::parse("30", ""), Err(CaptureError::NotANumber { field: "Interval" }));
}

#[test]
fn manual_degrees_validation() {
    assert_eq!(parse_manual_degrees("90"), Ok(90));
    assert_eq!(parse_manual_degrees("0"), Err(CaptureError::InvalidStep(0)));
    assert!(parse_manual_degrees("ninety").is_err());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn idle_has_no_steps() {
    let mut session = CaptureSession::default();
    assert_eq!(session.phase(), &CapturePhase::Idle);
    assert_eq!(session.next_step(), None);
    assert!(!session.request_stop());
}

#[test]
fn full_run_issues_one_call_per_step_then_completes() {
    let mut session = running(90, 0);
    assert_eq!(run_to_end(&mut session), 4);
    assert_eq!(session.phase(), &CapturePhase::Complete);
    assert_eq!(session.completed(), 4);
    assert_eq!(session.latest_photo(), Some("/static/photos/4.jpg"));
    assert_eq!(session.status_text(), "Rotation complete!");
}

#[test]
fn start_while_running_is_rejected() {
    let mut session = running(90, 0);
    let again = session.start(CapturePlan::new(45, 0).unwrap());
    assert_eq!(again, Err(CaptureError::AlreadyRunning));
    assert_eq!(session.total(), 4);
}

#[test]
fn stop_takes_effect_before_next_step() {
    let mut session = running(90, 0);
    assert_eq!(session.next_step(), Some(90));
    session.record_photo("a.jpg".to_owned());
    assert!(session.request_stop());
    assert!(session.is_stopping());
    assert_eq!(session.status_text(), "Stopping rotation...");
    assert_eq!(session.next_step(), None);
    assert_eq!(session.phase(), &CapturePhase::Aborted);
    assert_eq!(session.completed(), 1);
}

#[test]
fn error_halts_remaining_steps() {
    let mut session = running(90, 0);
    session.next_step();
    session.record_error("Rotation failed".to_owned());
    assert_eq!(session.phase(), &CapturePhase::Errored("Rotation failed".to_owned()));
    assert_eq!(session.next_step(), None);
    assert_eq!(session.status_text(), "Error: Rotation failed");
}

#[test]
fn stop_after_completion_is_ignored() {
    let mut session = running(180, 0);
    run_to_end(&mut session);
    assert!(!session.request_stop());
    assert_eq!(session.phase(), &CapturePhase::Complete);
}

#[test]
fn terminal_state_allows_restart() {
    let mut session = running(180, 0);
    session.request_stop();
    session.next_step();
    assert_eq!(session.phase(), &CapturePhase::Aborted);
    session.start(CapturePlan::new(120, 0).unwrap()).unwrap();
    assert!(session.is_running());
    assert_eq!(session.completed(), 0);
    assert_eq!(run_to_end(&mut session), 3);
}

#[test]
fn reset_returns_to_idle_only_from_terminal() {
    let mut session = running(180, 0);
    session.reset();
    assert!(session.is_running());
    run_to_end(&mut session);
    session.reset();
    assert_eq!(session.phase(), &CapturePhase::Idle);
}

#[test]
fn finished_covers_every_terminal_phase() {
    let mut session = CaptureSession::default();
    assert!(!session.is_finished());

    let mut done = running(180, 0);
    assert!(!done.is_finished());
    run_to_end(&mut done);
    assert!(done.is_finished());

    session.start(CapturePlan::new(90, 0).unwrap()).unwrap();
    session.request_stop();
    session.next_step();
    assert!(session.is_finished());

    let mut failed = running(90, 0);
    failed.next_step();
    failed.record_error("serial port busy".into());
    assert!(failed.is_finished());
}

#[test]
fn clearing_a_finished_run_blanks_status_but_keeps_preview() {
    let mut session = running(180, 0);
    run_to_end(&mut session);
    assert_eq!(session.status_text(), "Rotation complete!");
    let photo = session.latest_photo().map(str::to_owned);

    session.reset();
    assert!(!session.is_finished());
    assert_eq!(session.status_text(), "");
    assert_eq!(session.completed(), 0);
    assert_eq!(session.bar_class(), "progress__bar");
    assert_eq!(session.latest_photo().map(str::to_owned), photo);
}

// =============================================================
// Progress display
// =============================================================

#[test]
fn status_text_reports_progress() {
    let mut session = running(15, 5);
    assert_eq!(session.status_text(), "Rotation started...");
    session.next_step();
    session.record_photo("p.jpg".to_owned());
    assert_eq!(session.status_text(), "Photo 1 of 24");
    assert_eq!(session.interval_secs(), 5);
}

#[test]
fn should_wait_skips_after_last_photo() {
    let mut session = running(180, 1);
    session.next_step();
    session.record_photo("1.jpg".to_owned());
    assert!(session.should_wait());
    session.next_step();
    session.record_photo("2.jpg".to_owned());
    assert!(!session.should_wait());
}

#[test]
fn bar_class_tracks_phase() {
    let mut session = running(180, 0);
    assert!(session.bar_class().contains("animated"));
    session.record_error("x".to_owned());
    assert!(session.bar_class().contains("danger"));
}

#[test]
fn manual_photo_updates_preview_without_running() {
    let mut session = CaptureSession::default();
    session.set_latest_photo("/static/photos/manual.jpg".to_owned());
    assert_eq!(session.latest_photo(), Some("/static/photos/manual.jpg"));
    assert_eq!(session.phase(), &CapturePhase::Idle);
}
