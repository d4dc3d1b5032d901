//! Scripted hotspot editing session.
//!
//! Replays draw, select, resize, move and delete gestures against a 400x300 image
//! and prints every collection the editor reports. Pass a config file path as the
//! first argument to override the defaults.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use hotspot::{
    Corner, EditorConfig, Event, Hotspot, HotspotEditor, HotspotKey, ImageRef, Key, Modifiers,
    MouseButton, Point, PointerTarget, Rectangle, SequentialKeys,
};

fn press(x: f32, y: f32, target: PointerTarget) -> Event<PointerTarget> {
    Event::PointerPressed {
        button: MouseButton::Left,
        position: Point::new(x, y),
        target,
    }
}

fn drag_to(x: f32, y: f32, modifiers: Modifiers, target: PointerTarget) -> Event<PointerTarget> {
    Event::PointerMoved {
        position: Point::new(x, y),
        modifiers,
        target,
    }
}

fn release(x: f32, y: f32, target: PointerTarget) -> Event<PointerTarget> {
    Event::PointerReleased {
        button: MouseButton::Left,
        position: Point::new(x, y),
        target,
    }
}

fn click(x: f32, y: f32, target: PointerTarget) -> Event<PointerTarget> {
    Event::Click {
        button: MouseButton::Left,
        position: Point::new(x, y),
        target,
    }
}

fn load_config() -> EditorConfig {
    let Some(path) = std::env::args().nth(1) else {
        return EditorConfig::default();
    };
    match EditorConfig::load_from_path(Path::new(&path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {}: {}", path, e);
            EditorConfig::default()
        }
    }
}

fn main() {
    let config = load_config();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .init();
    log::info!("Log level: {}", config.log_level.name());

    let reports: Rc<RefCell<Vec<Vec<Hotspot>>>> = Rc::default();
    let sink = Rc::clone(&reports);

    let editor = match HotspotEditor::with_config(config) {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    let mut editor = editor
        .on_change(move |value| sink.borrow_mut().push(value))
        .with_key_generator(SequentialKeys::default());
    editor.set_image(Some(ImageRef::new("demo.png")));
    editor.set_bounds(Rectangle::new(0.0, 0.0, 400.0, 300.0));

    let key = HotspotKey::new("hotspot-1");
    let body = || PointerTarget::Body("hotspot-1".into());
    let none = Modifiers::none();

    // Draw (100,50) -> (300,150)
    editor.handle_cycle([press(100.0, 50.0, PointerTarget::Container)]);
    editor.handle_cycle([drag_to(200.0, 100.0, none, PointerTarget::Container)]);
    if let Some(preview) = editor.preview() {
        log::info!("Preview {}: {:?}", preview.key, preview.value.points());
    }
    editor.handle_cycle([drag_to(300.0, 150.0, none, PointerTarget::Container)]);
    editor.handle_cycle([release(300.0, 150.0, PointerTarget::Container)]);

    // Select
    editor.handle_cycle([
        press(200.0, 100.0, body()),
        release(200.0, 100.0, body()),
        click(200.0, 100.0, body()),
    ]);
    log::info!("Selected: {}", editor.is_selected(&key));

    // Coupled resize of the bottom-right corner by (0.1, 0.05)
    let handle = PointerTarget::Handle("hotspot-1".into(), Corner::BottomRight);
    editor.handle_cycle([press(300.0, 150.0, handle.clone())]);
    editor.handle_cycle([drag_to(340.0, 165.0, none, handle.clone())]);
    editor.handle_cycle([
        release(340.0, 165.0, handle.clone()),
        click(340.0, 165.0, handle),
    ]);

    // Free resize of the top-left corner
    let handle = PointerTarget::Handle("hotspot-1".into(), Corner::TopLeft);
    editor.handle_cycle([press(100.0, 50.0, handle.clone())]);
    editor.handle_cycle([drag_to(80.0, 40.0, Modifiers::shift(), handle.clone())]);
    editor.handle_cycle([
        release(80.0, 40.0, handle.clone()),
        click(80.0, 40.0, handle),
    ]);

    // Move
    editor.handle_cycle([press(200.0, 100.0, body())]);
    editor.handle_cycle([drag_to(220.0, 130.0, none, body())]);
    editor.handle_cycle([release(220.0, 130.0, body()), click(220.0, 130.0, body())]);
    log::info!("Still selected after move: {}", editor.is_selected(&key));

    // Delete
    editor.handle_cycle([Event::KeyReleased {
        key: Key::Delete,
        modifiers: none,
    }]);

    for (i, value) in reports.borrow().iter().enumerate() {
        match serde_json::to_string(value) {
            Ok(json) => println!("change {}: {}", i + 1, json),
            Err(e) => eprintln!("Failed to serialize change {}: {}", i + 1, e),
        }
    }
}
