#![allow(clippy::float_cmp)]

use super::*;

fn project(images: Option<Vec<&str>>) -> Project {
    Project {
        id: "p1".to_owned(),
        name: Some("Teapot".to_owned()),
        description: None,
        created: Some(1),
        images: images.map(|list| list.into_iter().map(str::to_owned).collect()),
        image_count: None,
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_demo_shows_sample_frames() {
    let mut state = ViewerState::default();
    state.begin_load();
    state.load_demo();
    assert!(!state.loading);
    assert_eq!(state.core.len(), 36);
    assert_eq!(state.title(), "Demo");
    assert!(state.has_frames());
}

#[test]
fn finish_load_populates_project_frames() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(vec!["a.jpg", "b.jpg", "c.jpg"]))));
    assert_eq!(state.core.len(), 3);
    assert_eq!(state.core.current_url(), Some("/static/projects/p1/a.jpg"));
    assert_eq!(state.title(), "Teapot");
    assert!(state.error.is_none());
}

#[test]
fn empty_images_reports_no_images() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(Vec::new()))));
    assert_eq!(state.error.as_deref(), Some(NO_IMAGES_MESSAGE));
    assert!(!state.has_frames());
    assert_eq!(state.title(), "Teapot");
}

#[test]
fn missing_images_field_reports_no_images() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(None)));
    assert_eq!(state.error.as_deref(), Some(NO_IMAGES_MESSAGE));
}

#[test]
fn fetch_failure_sets_error_panel_text() {
    let mut state = ViewerState::default();
    state.begin_load();
    state.finish_load(Err(ApiError::Status { status: 404, message: "Project not found".to_owned() }));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Could not load project: Project not found"));
}

#[test]
fn reload_stops_running_auto_rotate() {
    let mut state = ViewerState::default();
    state.load_demo();
    state.core.start_auto_rotate();
    let actions = state.finish_load(Ok(project(Some(vec!["a.jpg"]))));
    assert!(actions.contains(&Action::StopTimer));
    assert!(!state.core.is_auto_rotating());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn position_label_is_one_based() {
    let mut state = ViewerState::default();
    assert_eq!(state.position_label(), "0 / 0");
    state.finish_load(Ok(project(Some(vec!["a.jpg", "b.jpg"]))));
    state.core.advance();
    assert_eq!(state.position_label(), "2 / 2");
}

#[test]
fn slider_fraction_tracks_index() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(vec!["a", "b", "c", "d", "e"]))));
    assert_eq!(state.slider_fraction(), 0.0);
    state.core.show(2);
    assert_eq!(state.slider_fraction(), 0.5);
    state.core.show(4);
    assert_eq!(state.slider_fraction(), 1.0);
}

#[test]
fn slider_fraction_single_frame_is_zero() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(vec!["a"]))));
    assert_eq!(state.slider_fraction(), 0.0);
}

#[test]
fn timer_actions_filters_render_actions() {
    let actions = vec![
        Action::StopTimer,
        Action::ShowFrame { index: 0 },
        Action::ZoomChanged(1.0),
        Action::StartTimer { period_ms: 100 },
    ];
    assert_eq!(timer_actions(actions), vec![Action::StopTimer, Action::StartTimer { period_ms: 100 }]);
}

// =============================================================
// Thumbnails
// =============================================================

#[test]
fn frame_urls_are_stable_while_navigating() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(vec!["a.jpg", "b.jpg", "c.jpg"]))));
    let before = state.frame_urls();

    state.core.start_auto_rotate();
    state.core.tick();
    state.core.on_drag_start(100.0);
    state.core.on_drag_move(90.0);
    state.core.on_drag_end();
    state.core.zoom_in();
    state.core.show(2);

    assert_eq!(state.core.current_index(), 2);
    assert_eq!(state.frame_urls(), before);
}

#[test]
fn frame_urls_change_when_a_new_set_loads() {
    let mut state = ViewerState::default();
    state.finish_load(Ok(project(Some(vec!["a.jpg"]))));
    let first = state.frame_urls();
    state.load_demo();
    assert_ne!(state.frame_urls(), first);
    assert_eq!(state.frame_urls().len(), 36);
}
