//! Window events reduced to what the editor reacts to.
//!
//! `winit` reports button presses without a position, so [`InputAdapter`] keeps
//! the last cursor position and attaches it to presses.

use cgmath::Vector2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::ModifiersState,
};

/// Pixel deltas from touchpads are scaled down to roughly one line per notch
const PIXELS_PER_LINE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    MouseDown {
        button: MouseButton,
        position: Vector2<f32>,
    },
    MouseUp {
        button: MouseButton,
    },
    /// Cursor position in window pixels, Y down
    MouseMove {
        position: Vector2<f32>,
    },
    /// Positive scrolls away from the user
    Scroll {
        delta: f32,
    },
    Modifiers {
        shift: bool,
    },
    Resized {
        width: u32,
        height: u32,
    },
}

/// Tracks cursor position so button events can carry it
#[derive(Debug)]
pub struct InputAdapter {
    cursor: Vector2<f32>,
    shift: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self {
            cursor: Vector2::new(0.0, 0.0),
            shift: false,
        }
    }

    pub fn cursor(&self) -> Vector2<f32> {
        self.cursor
    }

    pub fn is_shift_held(&self) -> bool {
        self.shift
    }

    /// Translate a window event, or `None` if the editor ignores it
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(self.on_cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => Some(self.on_mouse_input(*state, *button)),
            WindowEvent::MouseWheel { delta, .. } => Some(self.on_wheel(*delta)),
            WindowEvent::ModifiersChanged(modifiers) => self.on_modifiers(modifiers.state()),
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }

    pub fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        self.cursor = Vector2::new(position.x as f32, position.y as f32);
        InputEvent::MouseMove { position: self.cursor }
    }

    pub fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) -> InputEvent {
        match state {
            ElementState::Pressed => InputEvent::MouseDown {
                button,
                position: self.cursor,
            },
            ElementState::Released => InputEvent::MouseUp { button },
        }
    }

    pub fn on_wheel(&mut self, delta: MouseScrollDelta) -> InputEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
        InputEvent::Scroll { delta }
    }

    /// Only reports a change of the shift key
    pub fn on_modifiers(&mut self, state: ModifiersState) -> Option<InputEvent> {
        let shift = state.shift_key();
        if shift == self.shift {
            return None;
        }
        self.shift = shift;
        Some(InputEvent::Modifiers { shift })
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_carries_last_cursor() {
        let mut adapter = InputAdapter::new();
        adapter.on_cursor_moved(PhysicalPosition::new(120.0, 45.5));
        assert_eq!(
            adapter.on_mouse_input(ElementState::Pressed, MouseButton::Left),
            InputEvent::MouseDown {
                button: MouseButton::Left,
                position: Vector2::new(120.0, 45.5)
            }
        );
        assert_eq!(
            adapter.on_mouse_input(ElementState::Released, MouseButton::Left),
            InputEvent::MouseUp {
                button: MouseButton::Left
            }
        );
    }

    #[test]
    fn test_wheel_deltas() {
        let mut adapter = InputAdapter::new();
        assert_eq!(
            adapter.on_wheel(MouseScrollDelta::LineDelta(0.0, 2.0)),
            InputEvent::Scroll { delta: 2.0 }
        );
        assert_eq!(
            adapter.on_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0))),
            InputEvent::Scroll { delta: -0.5 }
        );
    }

    #[test]
    fn test_shift_changes_only() {
        let mut adapter = InputAdapter::new();
        assert_eq!(adapter.on_modifiers(ModifiersState::empty()), None);
        assert_eq!(
            adapter.on_modifiers(ModifiersState::SHIFT),
            Some(InputEvent::Modifiers { shift: true })
        );
        assert_eq!(adapter.on_modifiers(ModifiersState::SHIFT | ModifiersState::CONTROL), None);
        assert!(adapter.is_shift_held());
        assert_eq!(
            adapter.on_modifiers(ModifiersState::CONTROL),
            Some(InputEvent::Modifiers { shift: false })
        );
    }

    #[test]
    fn test_resize_event() {
        let mut adapter = InputAdapter::new();
        let event = WindowEvent::Resized(winit::dpi::PhysicalSize::new(640, 480));
        assert_eq!(
            adapter.translate(&event),
            Some(InputEvent::Resized {
                width: 640,
                height: 480
            })
        );
        assert_eq!(adapter.translate(&WindowEvent::CloseRequested), None);
    }
}
