use super::*;
use crate::core::{Action, Gesture};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: Creates test config with known content
fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("libinput-gestures.conf");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

const CONFIG: &str = r#"# Test configuration
gesture swipe up 3 xdotool key super+Up
gesture swipe down 3 xdotool key super+Down
device all

# Duplicate: later line wins
gesture swipe up 3 xdotool key super+Page_Up
gesture pinch in 2 notify-send "pinch in"
"#;

fn controller_for(path: PathBuf) -> Controller {
    Controller::new(ConfigStore::new(path))
}

fn shortcut(gesture: Gesture, fingers: u32, combo: &str) -> Binding {
    Binding {
        gesture,
        fingers,
        action: Action::Shortcut(combo.to_string()),
    }
}

#[test]
fn test_load_bindings() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let set = controller_for(config_path).load().unwrap();

    assert_eq!(set.len(), 3, "Duplicate swipe up collapses to one binding");
    assert_eq!(
        set.get(BindingKey { gesture: Gesture::SwipeUp, fingers: 3 }),
        Some(&shortcut(Gesture::SwipeUp, 3, "super+Page_Up"))
    );
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let set = controller_for(temp_dir.path().join("missing.conf")).load().unwrap();
    assert!(set.is_empty());
}

#[test]
fn test_load_malformed_is_parse_error() {
    let (_temp_dir, config_path) =
        create_test_config("gesture swipe sideways 3 xdotool key F1\n");

    match controller_for(config_path).load() {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("Expected Parse error, got: {:?}", other),
    }
}

#[test]
fn test_upsert_twice_leaves_one_binding() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path);

    let first = shortcut(Gesture::SwipeLeft, 4, "ctrl+alt+Left");
    controller.upsert(controller.load().unwrap(), &first).unwrap();

    let second = Binding {
        gesture: Gesture::SwipeLeft,
        fingers: 4,
        action: Action::Command("notify-send left".to_string()),
    };
    controller.upsert(controller.load().unwrap(), &second).unwrap();

    let set = controller.load().unwrap();
    let matching = set
        .bindings()
        .iter()
        .filter(|b| b.key() == second.key())
        .collect::<Vec<_>>();
    assert_eq!(matching, vec![&second]);
}

#[test]
fn test_upsert_preserves_comments_and_directives() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path.clone());

    controller
        .upsert(controller.load().unwrap(), &shortcut(Gesture::PinchOut, 2, "F5"))
        .unwrap();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.starts_with("# Test configuration\ndevice all\n\n# Duplicate: later line wins\n"));
    assert!(content.ends_with("gesture pinch out\t2 xdotool key F5\n"));
}

#[test]
fn test_upsert_replaces_duplicates() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path.clone());

    controller
        .upsert(controller.load().unwrap(), &shortcut(Gesture::SwipeUp, 3, "F1"))
        .unwrap();

    let content = fs::read_to_string(&config_path).unwrap();
    assert_eq!(content.matches("gesture swipe up").count(), 1);
    assert!(controller.load().unwrap().superseded_lines().is_empty());
}

#[test]
fn test_invalid_upsert_writes_nothing() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path.clone());

    let bad = Binding {
        gesture: Gesture::SwipeUp,
        fingers: 3,
        action: Action::Command("xdotool type hi".to_string()),
    };
    let result = controller.upsert(controller.load().unwrap(), &bad);

    assert!(matches!(result, Err(ConfigError::Validation(_))));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), CONFIG);
}

#[test]
fn test_delete_binding() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path.clone());
    let key = BindingKey { gesture: Gesture::SwipeUp, fingers: 3 };

    let removed = controller.delete(controller.load().unwrap(), key).unwrap();
    assert!(removed);

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(!content.contains("gesture swipe up"));
    assert!(content.contains("# Duplicate: later line wins\n"));
    assert_eq!(controller.load().unwrap().len(), 2);
}

#[test]
fn test_delete_unbound_key_leaves_file() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = controller_for(config_path.clone());
    let key = BindingKey { gesture: Gesture::PinchClockwise, fingers: 2 };

    let removed = controller.delete(controller.load().unwrap(), key).unwrap();

    assert!(!removed);
    assert_eq!(fs::read_to_string(&config_path).unwrap(), CONFIG);
}

#[test]
fn test_repair_then_load() {
    let (_temp_dir, config_path) = create_test_config(
        "# ok\ngesture swipe up 3 xdotool key a\ndevice touchpad extra\nbogus\n",
    );
    let controller = controller_for(config_path.clone());

    assert!(controller.load().is_err());

    let report = controller.repair().unwrap();
    assert_eq!(report.dropped.len(), 2);
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "# ok\ngesture swipe up 3 xdotool key a\n"
    );
    assert_eq!(controller.load().unwrap().len(), 1);
}

#[test]
fn test_repair_clean_config_does_not_write() {
    let (_temp_dir, config_path) = create_test_config(CONFIG);
    let controller = Controller::new(ConfigStore::new(config_path).with_backups());

    let report = controller.repair().unwrap();

    assert!(report.is_clean());
    assert!(controller.store().list_backups().unwrap().is_empty());
}

#[test]
fn test_repair_with_backup_keeps_dropped_lines_recoverable() {
    let original = "gesture swipe up 3 xdotool key a\nbogus\n";
    let (_temp_dir, config_path) = create_test_config(original);
    let controller = Controller::new(ConfigStore::new(config_path).with_backups());

    controller.repair().unwrap();

    let backups = controller.store().list_backups().unwrap();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap(), original);
}
