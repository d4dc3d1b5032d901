//! Deselection, deletion and the editor's external inputs.

use super::*;

/// Three non-overlapping squares "a", "b", "c".
fn abc() -> Harness {
    Harness::with_value(vec![square("a", 0.0), square("b", 0.2), square("c", 0.4)])
}

/// Pixel centre of `square(_, offset)` in the 400x300 box.
fn centre(offset: f32) -> (f32, f32) {
    ((offset + 0.05) * 400.0, (offset + 0.05) * 300.0)
}

#[test]
fn test_delete_selected_hotspot() {
    let mut harness = abc();
    harness.click_body("b", centre(0.2));

    harness.editor.handle_cycle([key_up(Key::Delete)]);

    assert_eq!(harness.keys(), vec!["a", "c"]);
    assert_eq!(harness.report_count(), 1);
    let report = harness.last_report().unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].key.as_str(), "a");
    assert_eq!(report[1].key.as_str(), "c");
    assert!(harness.editor.spot_state(&"b".into()).is_none());
}

#[test]
fn test_delete_ignored_without_selection() {
    let mut harness = abc();
    harness.editor.handle_cycle([key_up(Key::Delete)]);
    assert_eq!(harness.keys(), vec!["a", "b", "c"]);
    assert_eq!(harness.report_count(), 0);
}

#[test]
fn test_other_keys_do_not_delete() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    harness.editor.handle_cycle([
        key_up(Key::Backspace),
        key_up(Key::Char('d')),
        Event::KeyPressed {
            key: Key::Delete,
            modifiers: Modifiers::none(),
        },
    ]);
    assert_eq!(harness.editor.value().len(), 3);
}

#[test]
fn test_configured_delete_keys() {
    let config = crate::config::EditorConfig {
        keybindings: crate::config::KeyBindingsConfig {
            delete: vec![Key::Backspace],
            ..Default::default()
        },
        ..Default::default()
    };
    let mut harness = Harness::with_editor(HotspotEditor::with_config(config).unwrap());
    harness.editor.set_value(Some(vec![square("a", 0.0)]));
    harness.click_body("a", centre(0.0));

    harness.editor.handle_cycle([key_up(Key::Delete)]);
    assert_eq!(harness.editor.value().len(), 1);

    harness.editor.handle_cycle([key_up(Key::Backspace)]);
    assert!(harness.editor.value().is_empty());
}

#[test]
fn test_delete_waits_for_drag_to_finish() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    let (x, y) = centre(0.0);

    harness.editor.handle_event(press(x, y, body("a")));
    harness
        .editor
        .handle_event(move_to(x + 4.0, y, Modifiers::none(), body("a")));
    harness.editor.handle_event(key_up(Key::Delete));
    assert_eq!(harness.editor.value().len(), 3);

    harness.editor.handle_event(release(x + 4.0, y, body("a")));
    harness.editor.end_cycle();
    harness.editor.handle_cycle([key_up(Key::Delete)]);
    assert_eq!(harness.keys(), vec!["b", "c"]);
}

#[test]
fn test_delete_ignored_while_pressed_before_any_move() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    let (x, y) = centre(0.0);

    harness.editor.handle_event(press(x, y, body("a")));
    harness.editor.handle_event(key_up(Key::Delete));
    assert_eq!(harness.editor.value().len(), 3);
    assert_eq!(
        harness.editor.spot_state(&"a".into()),
        Some(crate::editing::SpotState::SelectedDragging)
    );
    assert_eq!(harness.report_count(), 0);
}

#[test]
fn test_delete_releases_global_observers() {
    let mut harness = abc();
    harness.click_body("c", centre(0.4));
    harness.editor.handle_cycle([key_up(Key::Delete)]);

    // The deleted hotspot no longer reacts to anything
    harness.editor.handle_cycle([click(390.0, 290.0, PointerTarget::Container)]);
    harness.editor.handle_cycle([key_up(Key::Delete)]);
    assert_eq!(harness.keys(), vec!["a", "b"]);
    assert_eq!(harness.report_count(), 1);
}

#[test]
fn test_outside_click_deselects() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    assert!(harness.is_selected("a"));

    harness
        .editor
        .handle_cycle([click(390.0, 290.0, PointerTarget::Container)]);
    assert!(!harness.is_selected("a"));
}

#[test]
fn test_click_outside_editor_deselects() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    harness
        .editor
        .handle_cycle([click(900.0, 900.0, PointerTarget::Nothing)]);
    assert!(!harness.is_selected("a"));
}

#[test]
fn test_selecting_another_hotspot_deselects_the_first() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    harness.click_body("b", centre(0.2));

    assert!(!harness.is_selected("a"));
    assert!(harness.is_selected("b"));
    assert_eq!(harness.editor.selected_keys(), vec![HotspotKey::from("b")]);
}

#[test]
fn test_outside_click_ignored_during_drag() {
    let mut harness = abc();
    harness.click_body("a", centre(0.0));
    let (x, y) = centre(0.0);

    harness.editor.handle_event(press(x, y, body("a")));
    harness
        .editor
        .handle_event(move_to(x + 8.0, y, Modifiers::none(), body("a")));
    harness
        .editor
        .handle_event(click(390.0, 290.0, PointerTarget::Container));
    assert!(harness.is_selected("a"));
}

#[test]
fn test_no_image_ignores_input() {
    let mut harness = abc();
    harness.editor.set_image(None);

    harness.draw((100.0, 50.0), (300.0, 150.0));
    harness.click_body("a", centre(0.0));
    harness.editor.handle_cycle([key_up(Key::Delete)]);

    assert!(harness.editor.preview().is_none());
    assert_eq!(harness.report_count(), 0);
    assert_eq!(harness.editor.value().len(), 3);
    assert!(harness.editor.spot_state(&"a".into()).is_none());

    // Restoring the image brings every hotspot back, unselected
    harness.editor.set_image(Some(ImageRef::new("scene.png")));
    assert!(!harness.is_selected("a"));
    harness.click_body("a", centre(0.0));
    assert!(harness.is_selected("a"));
}

#[test]
fn test_clearing_image_cancels_drawing() {
    let mut harness = Harness::new();
    harness
        .editor
        .handle_cycle([press(10.0, 10.0, PointerTarget::Container)]);
    harness.editor.set_image(None);
    harness.editor.set_image(Some(ImageRef::new("other.png")));

    harness
        .editor
        .handle_cycle([release(300.0, 200.0, PointerTarget::Container)]);
    assert!(harness.editor.value().is_empty());
}

#[test]
fn test_absent_value_is_empty() {
    let mut harness = abc();
    harness.editor.set_value(None);
    assert!(harness.editor.value().is_empty());
    assert_eq!(harness.report_count(), 0);
}

#[test]
fn test_set_value_keeps_selection_of_surviving_keys() {
    let mut harness = abc();
    harness.click_body("b", centre(0.2));

    // Host echoes the collection back with "a" removed
    harness
        .editor
        .set_value(Some(vec![square("b", 0.2), square("c", 0.4)]));
    assert!(harness.is_selected("b"));
    assert!(harness.editor.spot_state(&"a".into()).is_none());
}

#[test]
fn test_reported_value_serializes_as_key_value_pairs() {
    let mut harness = Harness::new();
    harness.draw((100.0, 50.0), (300.0, 150.0));

    let json = serde_json::to_value(harness.last_report().unwrap()).unwrap();
    assert_eq!(json[0]["key"], "hotspot-1");
    assert_eq!(json[0]["value"].as_array().map(Vec::len), Some(4));
    assert_eq!(json[0]["value"][2][0], 0.75);
}
