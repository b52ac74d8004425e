use super::*;
use crate::net::types::{DetectedCameras, SerialPort};

fn devices() -> Devices {
    Devices {
        cameras: DetectedCameras {
            webcams: vec!["/dev/video0".to_owned(), "/dev/video2".to_owned()],
            gphoto2: vec!["Nikon DSC D3200".to_owned()],
        },
        arduinos: vec![
            SerialPort { port: "/dev/ttyACM0".to_owned(), description: "Arduino Uno".to_owned() },
            SerialPort { port: "/dev/ttyUSB0".to_owned(), description: String::new() },
        ],
    }
}

#[test]
fn webcam_options_use_path_as_value_and_label() {
    let options = webcam_options(&devices());
    assert_eq!(options.len(), 2);
    assert_eq!(options[1], DeviceOption { value: "/dev/video2".to_owned(), label: "/dev/video2".to_owned() });
}

#[test]
fn gphoto2_options_list_camera_names() {
    assert_eq!(gphoto2_options(&devices())[0].label, "Nikon DSC D3200");
}

#[test]
fn serial_options_include_description_when_present() {
    let options = serial_options(&devices());
    assert_eq!(options[0].label, "/dev/ttyACM0 - Arduino Uno");
    assert_eq!(options[0].value, "/dev/ttyACM0");
    assert_eq!(options[1].label, "/dev/ttyUSB0");
}

#[test]
fn no_devices_yield_empty_lists() {
    let empty = Devices::default();
    assert!(webcam_options(&empty).is_empty());
    assert!(gphoto2_options(&empty).is_empty());
    assert!(serial_options(&empty).is_empty());
}
