use glam::Vec2;
use islet_core::controls::{HeldKeys, SketchKey};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Accumulated input state read each frame by the application. One writer
/// (the winit event loop) and one reader (the frame builder), serialized on
/// the same thread.
pub struct InputState {
    cursor: Vec2,
    raise_held: bool,
    lower_held: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            raise_held: false,
            lower_held: false,
        }
    }

    /// Latest cursor position in canvas pixels.
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Navigation keys currently held, polled once per frame.
    pub fn held_keys(&self) -> HeldKeys {
        HeldKeys {
            raise_falloff: self.raise_held,
            lower_falloff: self.lower_held,
        }
    }

    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x as f32, y as f32);
    }

    /// Process one keyboard event. Arrow keys update held state; discrete
    /// sketch keys fire once per physical press (OS key repeat is ignored).
    pub fn on_key_event(&mut self, event: &KeyEvent) -> Option<SketchKey> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let pressed = event.state == ElementState::Pressed;

        match code {
            KeyCode::ArrowUp => {
                self.raise_held = pressed;
                None
            }
            KeyCode::ArrowDown => {
                self.lower_held = pressed;
                None
            }
            _ if pressed && !event.repeat => {
                keycode_char(code).and_then(SketchKey::from_char)
            }
            _ => None,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Character identity of the discrete sketch keys.
fn keycode_char(code: KeyCode) -> Option<char> {
    match code {
        KeyCode::KeyH => Some('h'),
        KeyCode::KeyS => Some('s'),
        KeyCode::KeyW => Some('w'),
        KeyCode::KeyC => Some('c'),
        KeyCode::KeyF => Some('f'),
        KeyCode::KeyO => Some('o'),
        KeyCode::KeyZ => Some('z'),
        KeyCode::KeyM => Some('m'),
        _ => None,
    }
}
