//! Input translation
//!
//! Scenes and widgets never see raw SDL2 events. The frame loop drains the
//! event pump once per tick and converts each event into an [`InputEvent`],
//! dropping everything the game does not react to.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Keys the scenes care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Return,
    Space,
    Other,
}

impl From<Keycode> for Key {
    fn from(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Escape => Key::Escape,
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Left => Key::Left,
            Keycode::Right => Key::Right,
            Keycode::Return | Keycode::KpEnter => Key::Return,
            Keycode::Space => Key::Space,
            _ => Key::Other,
        }
    }
}

/// A backend-neutral input event
///
/// Pointer coordinates are in logical screen space. Only the left mouse
/// button produces `PointerDown`/`PointerUp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    PointerDown { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    PointerMove { x: i32, y: i32 },
}

impl InputEvent {
    /// Converts one SDL2 event, or `None` if the game ignores it
    pub fn from_sdl(event: &Event) -> Option<Self> {
        match *event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(InputEvent::KeyDown(Key::from(keycode))),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(InputEvent::PointerDown { x, y }),
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(InputEvent::PointerUp { x, y }),
            Event::MouseMotion { x, y, .. } => Some(InputEvent::PointerMove { x, y }),
            _ => None,
        }
    }

    pub fn is_key(&self, key: Key) -> bool {
        matches!(self, InputEvent::KeyDown(k) if *k == key)
    }
}

/// Drains every pending SDL2 event into a list of input events
pub fn poll_events(event_pump: &mut EventPump) -> Vec<InputEvent> {
    event_pump
        .poll_iter()
        .filter_map(|event| InputEvent::from_sdl(&event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(
            InputEvent::from_sdl(&key_down(Keycode::Escape)),
            Some(InputEvent::KeyDown(Key::Escape))
        );
        assert_eq!(
            InputEvent::from_sdl(&key_down(Keycode::Return)),
            Some(InputEvent::KeyDown(Key::Return))
        );
        assert_eq!(
            InputEvent::from_sdl(&key_down(Keycode::A)),
            Some(InputEvent::KeyDown(Key::Other))
        );
    }

    #[test]
    fn test_quit_translation() {
        let quit = Event::Quit { timestamp: 0 };
        assert_eq!(InputEvent::from_sdl(&quit), Some(InputEvent::Quit));
    }

    #[test]
    fn test_only_left_button_is_a_pointer() {
        let left = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 10,
            y: 20,
        };
        let right = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 10,
            y: 20,
        };
        assert_eq!(
            InputEvent::from_sdl(&left),
            Some(InputEvent::PointerUp { x: 10, y: 20 })
        );
        assert_eq!(InputEvent::from_sdl(&right), None);
    }

    #[test]
    fn test_is_key() {
        let event = InputEvent::KeyDown(Key::Space);
        assert!(event.is_key(Key::Space));
        assert!(!event.is_key(Key::Return));
        assert!(!InputEvent::Quit.is_key(Key::Escape));
    }
}
