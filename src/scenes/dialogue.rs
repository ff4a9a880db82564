//! Dialogue scene: plays a script, then returns to whatever is beneath

use crate::dialogue::{Advance, DialogueBox, DialogueError, DialogueManager, DialogueScript};
use crate::input::{InputEvent, Key};
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::surface::{Renderable, Surface};
use sdl2::pixels::Color;
use std::path::Path;

pub struct DialogueScene {
    manager: DialogueManager,
    ui: DialogueBox,
    closed: bool,
}

impl DialogueScene {
    pub fn new(script: DialogueScript) -> Self {
        let mut scene = DialogueScene {
            manager: DialogueManager::new(script),
            ui: DialogueBox::new(),
            closed: false,
        };
        scene.refresh_portrait();
        scene
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DialogueError> {
        Ok(DialogueScene::new(DialogueScript::load(path)?))
    }

    pub fn manager(&self) -> &DialogueManager {
        &self.manager
    }

    fn refresh_portrait(&mut self) {
        let portrait = self.manager.current_line().and_then(|l| l.portrait.as_deref());
        self.ui.set_portrait(portrait);
    }

    fn close(&mut self, ctx: &mut SceneContext) {
        if !self.closed {
            self.closed = true;
            ctx.pop();
        }
    }
}

impl EventHandler for DialogueScene {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        for event in events {
            if !(event.is_key(Key::Space) || event.is_key(Key::Return)) {
                continue;
            }

            match self.manager.advance() {
                Advance::Continued => {}
                Advance::Next => self.refresh_portrait(),
                Advance::Finished => self.close(ctx),
            }
        }
    }
}

impl Updatable for DialogueScene {
    fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        self.manager.update(dt / 1000.0);
        // Scripts without lines end straight away
        if self.manager.is_done() {
            self.close(ctx);
        }
    }
}

impl Renderable for DialogueScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, Color::RGB(0, 0, 0))?;

        let Some(line) = self.manager.current_line() else {
            return Ok(());
        };
        self.ui.draw(
            surface,
            line.name.as_deref(),
            self.manager.shown_text(),
            self.manager.is_line_complete(),
        )
    }
}

impl Scene for DialogueScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Dialogue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueLine;
    use crate::scenes::test_support::services;

    fn script() -> DialogueScript {
        let mut first = DialogueLine::new("Welcome to the pitch");
        first.portrait = Some("portraits/coach.png".to_string());
        let second = DialogueLine::new("Good luck");
        DialogueScript {
            lines: vec![first, second],
        }
    }

    fn space() -> InputEvent {
        InputEvent::KeyDown(Key::Space)
    }

    #[test]
    fn test_first_portrait_loaded() {
        let scene = DialogueScene::new(script());
        assert_eq!(scene.ui.portrait(), Some("portraits/coach.png"));
    }

    #[test]
    fn test_update_uses_milliseconds() {
        let (_dir, mut services) = services();
        let mut scene = DialogueScene::new(script());
        let mut ctx = services.context();

        // 40 chars/sec for 100 ms
        scene.update(100.0, &mut ctx);
        assert_eq!(scene.manager().shown_text(), "Welc");
    }

    #[test]
    fn test_space_skips_then_advances_then_pops() {
        let (_dir, mut services) = services();
        let mut scene = DialogueScene::new(script());
        let mut ctx = services.context();

        scene.events(&[space()], &mut ctx);
        assert_eq!(scene.manager().line_index(), 0);
        assert!(scene.manager().is_line_complete());

        scene.events(&[InputEvent::KeyDown(Key::Return)], &mut ctx);
        assert_eq!(scene.manager().line_index(), 1);
        // The second line has no portrait
        assert_eq!(scene.ui.portrait(), None);
        assert!(ctx.pending().is_empty());

        scene.events(&[space(), space()], &mut ctx);
        assert_eq!(format!("{:?}", ctx.pending()), "[Pop]");

        // Done scripts do not pop twice
        scene.update(16.0, &mut ctx);
        scene.events(&[space()], &mut ctx);
        assert_eq!(ctx.pending().len(), 1);
    }

    #[test]
    fn test_empty_script_pops_on_first_update() {
        let (_dir, mut services) = services();
        let mut scene = DialogueScene::new(DialogueScript::default());
        let mut ctx = services.context();
        scene.update(16.0, &mut ctx);
        assert_eq!(format!("{:?}", ctx.pending()), "[Pop]");
    }

    #[test]
    fn test_other_keys_ignored() {
        let (_dir, mut services) = services();
        let mut scene = DialogueScene::new(script());
        let mut ctx = services.context();
        scene.events(&[InputEvent::KeyDown(Key::Escape)], &mut ctx);
        assert_eq!(scene.manager().char_index(), 0.0);
    }
}
