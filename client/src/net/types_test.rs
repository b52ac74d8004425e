use super::*;

// =============================================================
// Project
// =============================================================

#[test]
fn project_deserializes_full_payload() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "name": "Sneaker",
        "description": "white",
        "created": 1_700_000_000,
        "images": ["000.jpg", "001.jpg"]
    }))
    .unwrap();
    assert_eq!(project.display_name(), "Sneaker");
    assert_eq!(project.created, Some(1_700_000_000));
    assert_eq!(project.frame_count(), 2);
    assert_eq!(project.thumbnail_url().as_deref(), Some("/static/projects/p1/000.jpg"));
}

#[test]
fn project_tolerates_missing_optional_fields() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p2" })).unwrap();
    assert_eq!(project.display_name(), "p2");
    assert_eq!(project.created, None);
    assert_eq!(project.frame_count(), 0);
    assert_eq!(project.thumbnail_url(), None);
}

#[test]
fn project_blank_name_falls_back_to_id() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p3", "name": "  " })).unwrap();
    assert_eq!(project.display_name(), "p3");
}

#[test]
fn project_created_accepts_float_seconds() {
    let project: Project =
        serde_json::from_value(serde_json::json!({ "id": "p", "created": 1_700_000_000.75 })).unwrap();
    assert_eq!(project.created, Some(1_700_000_000));
}

#[test]
fn project_created_accepts_iso_string() {
    let project: Project =
        serde_json::from_value(serde_json::json!({ "id": "p", "created": "2023-11-14T22:13:20Z" })).unwrap();
    assert_eq!(project.created, Some(1_700_000_000));
}

#[test]
fn project_created_null_is_none() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p", "created": null })).unwrap();
    assert_eq!(project.created, None);
}

#[test]
fn project_created_unparseable_string_is_unknown() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p", "created": "soon" })).unwrap();
    assert_eq!(project.created, None);
}

#[test]
fn project_created_unexpected_type_is_unknown() {
    let project: Project =
        serde_json::from_value(serde_json::json!({ "id": "p", "created": { "at": 1 } })).unwrap();
    assert_eq!(project.created, None);
}

#[test]
fn project_list_survives_one_bad_timestamp() {
    let projects: Vec<Project> = serde_json::from_str(
        r#"[{"id":"a","created":1700000000},{"id":"b","created":"unknown"},{"id":"c","created":[1]}]"#,
    )
    .unwrap();
    let created: Vec<_> = projects.iter().map(|p| (p.id.as_str(), p.created)).collect();
    assert_eq!(created, vec![("a", Some(1_700_000_000)), ("b", None), ("c", None)]);
}

#[test]
fn project_image_count_used_when_images_absent() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p", "image_count": 24 })).unwrap();
    assert_eq!(project.frame_count(), 24);
}

#[test]
fn project_empty_images_has_no_thumbnail() {
    let project: Project = serde_json::from_value(serde_json::json!({ "id": "p", "images": [] })).unwrap();
    assert_eq!(project.frame_count(), 0);
    assert_eq!(project.thumbnail_url(), None);
}

// =============================================================
// Config
// =============================================================

#[test]
fn config_defaults_match_backend_defaults() {
    let config = Config::default();
    assert_eq!(config.camera.device_path, "/dev/video0");
    assert_eq!(config.camera.kind, CameraKind::Webcam);
    assert_eq!(config.camera.resolution, Resolution { width: 1280, height: 720 });
    assert_eq!(config.arduino.port, "/dev/ttyACM0");
    assert_eq!(config.arduino.baudrate, 9600);
    assert_eq!(config.rotation.default_degrees, 15);
    assert_eq!(config.rotation.default_interval, 5);
    assert!(config.simulator.enabled);
}

#[test]
fn config_serializes_camera_kind_as_type() {
    let value = serde_json::to_value(Config::default()).unwrap();
    assert_eq!(value["camera"]["type"], "webcam");
    assert_eq!(value["arduino"]["baudrate"], 9600);
    assert_eq!(value["simulator"]["enabled"], true);
}

#[test]
fn partial_config_fills_defaults() {
    let config: Config = serde_json::from_value(serde_json::json!({
        "camera": { "type": "gphoto2" },
        "rotation": { "default_degrees": 30 }
    }))
    .unwrap();
    assert_eq!(config.camera.kind, CameraKind::Gphoto2);
    assert_eq!(config.camera.device_path, "/dev/video0");
    assert_eq!(config.rotation.default_degrees, 30);
    assert_eq!(config.rotation.default_interval, 5);
    assert_eq!(config.arduino, ArduinoConfig::default());
}

#[test]
fn camera_kind_parse_and_str_agree() {
    for kind in [CameraKind::Webcam, CameraKind::Gphoto2] {
        assert_eq!(CameraKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(CameraKind::parse("dslr"), None);
}

// =============================================================
// Devices / responses
// =============================================================

#[test]
fn devices_deserialize_nested_lists() {
    let devices: Devices = serde_json::from_value(serde_json::json!({
        "cameras": { "webcams": ["/dev/video0"], "gphoto2": ["Canon EOS"] },
        "arduinos": [{ "port": "/dev/ttyACM0", "description": "Arduino Uno" }]
    }))
    .unwrap();
    assert_eq!(devices.cameras.webcams, vec!["/dev/video0".to_owned()]);
    assert_eq!(devices.cameras.gphoto2, vec!["Canon EOS".to_owned()]);
    assert_eq!(devices.arduinos[0].description, "Arduino Uno");
}

#[test]
fn devices_empty_object_is_default() {
    let devices: Devices = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(devices, Devices::default());
}

#[test]
fn status_response_prefers_error_field() {
    let resp: StatusResponse =
        serde_json::from_value(serde_json::json!({ "error": "Project not found", "message": "x" })).unwrap();
    assert!(resp.is_error());
    assert_eq!(resp.server_message(), Some("Project not found"));
}

#[test]
fn status_response_error_status_without_error_field() {
    let resp: StatusResponse =
        serde_json::from_value(serde_json::json!({ "status": "error", "message": "disk full" })).unwrap();
    assert!(resp.is_error());
    assert_eq!(resp.server_message(), Some("disk full"));
}

#[test]
fn status_response_success_with_url() {
    let resp: StatusResponse =
        serde_json::from_value(serde_json::json!({ "status": "success", "url": "/viewer?project=p1" })).unwrap();
    assert!(!resp.is_error());
    assert_eq!(resp.url.as_deref(), Some("/viewer?project=p1"));
}
