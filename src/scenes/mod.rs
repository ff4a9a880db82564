//! Game scenes
//!
//! - [`MenuScene`] - Title screen with campaign, settings and exit
//! - [`MatchScene`] - Gameplay placeholder
//! - [`SettingsScene`] - Volume slider and save
//! - [`PauseScene`] - In-game overlay menu
//! - [`CountdownScene`] - 3-2-1 overlay before play resumes
//! - [`DialogueScene`] - Scripted conversation

pub mod countdown;
pub mod dialogue;
pub mod match_scene;
pub mod menu;
pub mod pause;
pub mod settings_scene;

pub use countdown::CountdownScene;
pub use dialogue::DialogueScene;
pub use match_scene::MatchScene;
pub use menu::{MenuAction, MenuScene};
pub use pause::{PauseAction, PauseScene};
pub use settings_scene::{SettingsAction, SettingsScene};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::audio::AudioContext;
    use crate::config::GameConfig;
    use crate::input::InputEvent;
    use crate::scene::Services;
    use crate::settings::SettingsStore;

    /// Services with a muted audio context and a settings file in a temp dir
    pub fn services() -> (tempfile::TempDir, Services) {
        let dir = tempfile::tempdir().unwrap();
        let services = Services::new(
            AudioContext::muted(0.5),
            SettingsStore::new(dir.path().join("settings.json")),
            GameConfig::default(),
        );
        (dir, services)
    }

    /// Press and release at the same point
    pub fn click(x: i32, y: i32) -> Vec<InputEvent> {
        vec![
            InputEvent::PointerDown { x, y },
            InputEvent::PointerUp { x, y },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::services;
    use super::*;
    use crate::director::Director;
    use crate::input::{InputEvent, Key};
    use crate::scene::{Scene, SceneKind};
    use crate::surface::recording::{DrawOp, RecordingSurface};
    use sdl2::pixels::Color;

    fn key(key: Key) -> InputEvent {
        InputEvent::KeyDown(key)
    }

    #[test]
    fn test_menu_to_match_pause_countdown_and_back() {
        let (_dir, mut services) = services();
        let mut director = Director::new();
        director
            .push(Box::new(MenuScene::new(&services.config)))
            .unwrap();

        let mut tick = |director: &mut Director, events: &[InputEvent], dt: f32| {
            let mut surface = RecordingSurface::new(800, 600);
            director
                .tick(events, dt, &mut surface, &mut services)
                .unwrap();
            surface
        };

        // Select "CAMPAIGN MODE" and activate it
        tick(&mut director, &[key(Key::Down), key(Key::Return)], 16.0);
        assert_eq!(director.kinds(), vec![SceneKind::Menu, SceneKind::Match]);

        tick(&mut director, &[key(Key::Escape)], 16.0);
        assert_eq!(
            director.kinds(),
            vec![SceneKind::Menu, SceneKind::Match, SceneKind::Pause]
        );

        // The match is still drawn beneath the pause overlay
        let surface = tick(&mut director, &[], 16.0);
        let ball = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Circle(100, 300, 20, _)));
        let dim = surface
            .ops
            .iter()
            .position(|op| *op == DrawOp::Fill(None, Color::RGBA(0, 0, 0, 180)));
        assert!(ball.is_some() && dim.is_some());
        assert!(ball < dim);

        // Resume: the pause menu is replaced by the countdown
        tick(&mut director, &[key(Key::Escape)], 16.0);
        assert_eq!(
            director.kinds(),
            vec![SceneKind::Menu, SceneKind::Match, SceneKind::Countdown]
        );
        assert!(director.top().unwrap().is_overlay());

        tick(&mut director, &[], 1000.0);
        tick(&mut director, &[key(Key::Escape)], 1000.0);
        assert_eq!(director.depth(), 3);

        tick(&mut director, &[], 1000.0);
        assert_eq!(director.kinds(), vec![SceneKind::Menu, SceneKind::Match]);

        // The match runs on its own again
        let surface = tick(&mut director, &[], 16.0);
        assert_eq!(surface.fills_with(Color::RGBA(0, 0, 0, 100)), 0);
        assert_eq!(surface.fills_with(Color::RGBA(0, 0, 0, 180)), 0);
    }

    #[test]
    fn test_exit_to_menu_from_pause() {
        let (_dir, mut services) = services();
        let mut director = Director::new();
        director
            .push(Box::new(MenuScene::new(&services.config)))
            .unwrap();
        director
            .push(Box::new(MatchScene::new(&services.config)))
            .unwrap();
        director
            .push(Box::new(PauseScene::new(&services.config)))
            .unwrap();

        // Up from nothing selects the last button, "EXIT TO MAIN MENU"
        let mut surface = RecordingSurface::new(800, 600);
        director
            .tick(&[key(Key::Up), key(Key::Return)], 16.0, &mut surface, &mut services)
            .unwrap();
        assert_eq!(director.kinds(), vec![SceneKind::Menu]);
    }

    #[test]
    fn test_settings_volume_survives_return_to_menu() {
        let (_dir, mut services) = services();
        let mut director = Director::new();
        director
            .push(Box::new(MenuScene::new(&services.config)))
            .unwrap();
        director
            .push(Box::new(SettingsScene::new(&services.config, &services.settings)))
            .unwrap();

        let mut surface = RecordingSurface::new(800, 600);
        director
            .tick(
                &[key(Key::Down), key(Key::Right), key(Key::Escape)],
                16.0,
                &mut surface,
                &mut services,
            )
            .unwrap();

        assert_eq!(director.kinds(), vec![SceneKind::Menu]);
        assert_eq!(services.audio.volume(), 0.6);
        // Not saved, so the file still holds nothing
        assert_eq!(services.settings.get_volume(), 0.5);
    }

    #[test]
    fn test_menu_exit_empties_stack() {
        let (_dir, mut services) = services();
        let mut director = Director::new();
        director
            .push(Box::new(MenuScene::new(&services.config)))
            .unwrap();

        let mut surface = RecordingSurface::new(800, 600);
        director
            .tick(&[key(Key::Escape)], 16.0, &mut surface, &mut services)
            .unwrap();
        assert!(director.is_empty());
        // Nothing drawn for a frame that empties the stack
        assert!(surface.ops.is_empty());
    }
}
