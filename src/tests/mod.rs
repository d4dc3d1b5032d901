//! Scenario tests for the hotspot editor.
//!
//! These drive a [`HotspotEditor`] through the event sequences a host produces for
//! real gestures and check both the editor state and the reported collections.

mod lifecycle_tests;

use std::cell::RefCell;
use std::rc::Rc;

use hotspot_input::{Event, Key, Modifiers, MouseButton, Point, Rectangle};

use crate::editor::{HotspotEditor, ImageRef};
use crate::hit_test::PointerTarget;
use crate::keys::SequentialKeys;
use crate::model::{Corner, Hotspot, HotspotKey, Quad};

const EPSILON: f32 = 0.0001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_point(p: Point, x: f32, y: f32) -> bool {
    approx_eq(p.x, x) && approx_eq(p.y, y)
}

/// Image box used by every scenario.
fn bounds() -> Rectangle {
    Rectangle::new(0.0, 0.0, 400.0, 300.0)
}

/// Square hotspot with its top-left corner at `(offset, offset)`.
fn square(key: &str, offset: f32) -> Hotspot {
    Hotspot::new(
        key,
        Quad::from([
            [offset, offset],
            [offset + 0.1, offset],
            [offset + 0.1, offset + 0.1],
            [offset, offset + 0.1],
        ]),
    )
}

fn body(key: &str) -> PointerTarget {
    PointerTarget::Body(key.into())
}

fn handle(key: &str, corner: Corner) -> PointerTarget {
    PointerTarget::Handle(key.into(), corner)
}

fn press(x: f32, y: f32, target: PointerTarget) -> Event<PointerTarget> {
    Event::PointerPressed {
        button: MouseButton::Left,
        position: Point::new(x, y),
        target,
    }
}

fn move_to(x: f32, y: f32, modifiers: Modifiers, target: PointerTarget) -> Event<PointerTarget> {
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

fn leave(x: f32, y: f32, target: PointerTarget) -> Event<PointerTarget> {
    Event::PointerLeft {
        position: Point::new(x, y),
        target,
    }
}

fn key_up(key: Key) -> Event<PointerTarget> {
    Event::KeyReleased {
        key,
        modifiers: Modifiers::none(),
    }
}

/// Editor over a 400x300 image with sequential keys and recorded reports.
struct Harness {
    editor: HotspotEditor,
    reports: Rc<RefCell<Vec<Vec<Hotspot>>>>,
}

impl Harness {
    fn new() -> Self {
        Self::with_editor(HotspotEditor::new())
    }

    fn with_editor(editor: HotspotEditor) -> Self {
        let reports: Rc<RefCell<Vec<Vec<Hotspot>>>> = Rc::default();
        let sink = Rc::clone(&reports);
        let mut editor = editor
            .with_key_generator(SequentialKeys::default())
            .on_change(move |value| sink.borrow_mut().push(value));
        editor.set_image(Some(ImageRef::new("scene.png")));
        editor.set_bounds(bounds());
        Self { editor, reports }
    }

    fn with_value(value: Vec<Hotspot>) -> Self {
        let mut harness = Self::new();
        harness.editor.set_value(Some(value));
        harness
    }

    fn report_count(&self) -> usize {
        self.reports.borrow().len()
    }

    fn last_report(&self) -> Option<Vec<Hotspot>> {
        self.reports.borrow().last().cloned()
    }

    fn quad(&self, key: &str) -> Quad {
        self.editor
            .collection()
            .get(&HotspotKey::from(key))
            .map(|h| h.value)
            .unwrap_or_else(|| panic!("no hotspot {}", key))
    }

    fn keys(&self) -> Vec<String> {
        self.editor
            .value()
            .iter()
            .map(|h| h.key.as_str().to_string())
            .collect()
    }

    /// Full drag over the container: press, move, release and the trailing click.
    fn draw(&mut self, from: (f32, f32), to: (f32, f32)) {
        let none = Modifiers::none();
        self.editor
            .handle_cycle([press(from.0, from.1, PointerTarget::Container)]);
        self.editor
            .handle_cycle([move_to(to.0, to.1, none, PointerTarget::Container)]);
        self.editor.handle_cycle([
            release(to.0, to.1, PointerTarget::Container),
            click(to.0, to.1, PointerTarget::Container),
        ]);
    }

    /// Click on a hotspot body without moving.
    fn click_body(&mut self, key: &str, at: (f32, f32)) {
        self.editor.handle_cycle([
            press(at.0, at.1, body(key)),
            release(at.0, at.1, body(key)),
            click(at.0, at.1, body(key)),
        ]);
    }

    /// Drag from `from` to `to` in one move, starting on `target`.
    fn drag(
        &mut self,
        target: PointerTarget,
        from: (f32, f32),
        to: (f32, f32),
        modifiers: Modifiers,
    ) {
        self.editor
            .handle_cycle([press(from.0, from.1, target.clone())]);
        self.editor
            .handle_cycle([move_to(to.0, to.1, modifiers, target.clone())]);
        self.editor.handle_cycle([
            release(to.0, to.1, target.clone()),
            click(to.0, to.1, target),
        ]);
    }

    fn is_selected(&self, key: &str) -> bool {
        self.editor.is_selected(&key.into())
    }
}
