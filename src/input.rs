use bitflags::bitflags;
use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, NamedKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    fn from_winit(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::Left),
            MouseButton::Middle => Some(Self::Middle),
            MouseButton::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// One viewport input event. Positions are physical window pixels; button
/// and wheel events use the last reported pointer position.
#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerMoved { position: Vec2 },
    PointerButton { button: PointerButton, pressed: bool },
    /// Positive is a zoom-in tick.
    Wheel { delta: f32 },
    Key { key: Key, pressed: bool },
    PointerLeft,
    Other,
}

impl InputEvent {
    pub fn from_window_event(ev: &WindowEvent) -> Self {
        match ev {
            WindowEvent::CursorMoved { position, .. } => {
                InputEvent::PointerMoved { position: Vec2::new(position.x as f32, position.y as f32) }
            }
            WindowEvent::MouseInput { state, button, .. } => match PointerButton::from_winit(*button) {
                Some(button) => InputEvent::PointerButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                },
                None => InputEvent::Other,
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let d = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                InputEvent::Wheel { delta: d }
            }
            WindowEvent::KeyboardInput { event, .. } => InputEvent::Key {
                key: event.logical_key.clone(),
                pressed: event.state == ElementState::Pressed,
            },
            WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
            _ => InputEvent::Other,
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Modifier and space state tracked across keydown/keyup pairs. Several keys
/// can be held at once, so this is driven by transitions, never polled.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierTracker {
    modifiers: Modifiers,
    space_held: bool,
}

impl ModifierTracker {
    pub fn apply_key(&mut self, key: &Key, pressed: bool) {
        let flag = match key {
            Key::Named(NamedKey::Shift) => Some(Modifiers::SHIFT),
            Key::Named(NamedKey::Control) => Some(Modifiers::CONTROL),
            Key::Named(NamedKey::Alt) => Some(Modifiers::ALT),
            Key::Named(NamedKey::Super) => Some(Modifiers::META),
            Key::Named(NamedKey::Space) => {
                self.space_held = pressed;
                None
            }
            _ => None,
        };
        if let Some(flag) = flag {
            self.modifiers.set(flag, pressed);
        }
    }

    /// Focus loss drops keyup events; the host calls this to avoid stuck keys.
    pub fn clear(&mut self) {
        self.modifiers = Modifiers::empty();
        self.space_held = false;
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn shift_held(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn ctrl_held(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }

    pub fn alt_held(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    pub fn command_held(&self) -> bool {
        self.modifiers.intersects(Modifiers::CONTROL | Modifiers::META)
    }

    pub fn space_held(&self) -> bool {
        self.space_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_track_across_overlapping_holds() {
        let mut tracker = ModifierTracker::default();
        tracker.apply_key(&Key::Named(NamedKey::Shift), true);
        tracker.apply_key(&Key::Named(NamedKey::Space), true);
        tracker.apply_key(&Key::Named(NamedKey::Control), true);
        assert!(tracker.shift_held() && tracker.ctrl_held() && tracker.space_held());

        tracker.apply_key(&Key::Named(NamedKey::Shift), false);
        assert!(!tracker.shift_held());
        assert!(tracker.ctrl_held() && tracker.space_held());

        tracker.apply_key(&Key::Named(NamedKey::Space), false);
        assert!(!tracker.space_held());
    }

    #[test]
    fn clear_releases_everything() {
        let mut tracker = ModifierTracker::default();
        tracker.apply_key(&Key::Named(NamedKey::Alt), true);
        tracker.apply_key(&Key::Named(NamedKey::Space), true);
        tracker.clear();
        assert_eq!(tracker.modifiers(), Modifiers::empty());
        assert!(!tracker.space_held());
    }
}
