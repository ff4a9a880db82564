//! Match scene
//!
//! Placeholder for gameplay: a blinking ball on a black field. Escape opens
//! the pause menu on top of it.

use super::PauseScene;
use crate::config::GameConfig;
use crate::input::{InputEvent, Key};
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::surface::{Renderable, Surface};
use crate::text::draw_text;
use sdl2::pixels::Color;

const BALL_RADIUS: i32 = 20;
const BLINK_MS: f32 = 1000.0;

pub struct MatchScene {
    ball: (i32, i32),
    ball_visible: bool,
    blink_timer: f32,
    text_y: i32,
}

impl MatchScene {
    pub fn new(config: &GameConfig) -> Self {
        let half_height = config.screen_height as i32 / 2;
        MatchScene {
            ball: (100, half_height),
            ball_visible: true,
            blink_timer: 0.0,
            text_y: half_height - 100,
        }
    }

    pub fn is_ball_visible(&self) -> bool {
        self.ball_visible
    }
}

impl EventHandler for MatchScene {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        // One pause menu per batch, however many Escape presses it holds
        if events.iter().any(|event| event.is_key(Key::Escape)) {
            let pause = PauseScene::new(ctx.config);
            ctx.push(pause);
        }
    }
}

impl Updatable for MatchScene {
    fn update(&mut self, dt: f32, _ctx: &mut SceneContext) {
        self.blink_timer += dt;
        if self.blink_timer >= BLINK_MS {
            self.ball_visible = !self.ball_visible;
            self.blink_timer = 0.0;
        }
    }
}

impl Renderable for MatchScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, Color::RGB(0, 0, 0))?;

        if self.ball_visible {
            surface.fill_circle(self.ball.0, self.ball.1, BALL_RADIUS, Color::RGB(255, 255, 0))?;
        }

        draw_text(
            surface,
            "MATCH SCENE - PRESS ESC FOR MENU",
            20,
            self.text_y,
            Color::RGB(255, 255, 255),
            2,
        )
    }
}

impl Scene for MatchScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::test_support::services;
    use crate::surface::recording::{DrawOp, RecordingSurface};

    #[test]
    fn test_ball_blinks_every_second() {
        let (_dir, mut services) = services();
        let mut scene = MatchScene::new(&services.config);
        let mut ctx = services.context();

        scene.update(999.0, &mut ctx);
        assert!(scene.is_ball_visible());
        scene.update(1.0, &mut ctx);
        assert!(!scene.is_ball_visible());
        // Timer restarts from zero, leftover time is dropped
        scene.update(999.0, &mut ctx);
        assert!(!scene.is_ball_visible());
        scene.update(1.0, &mut ctx);
        assert!(scene.is_ball_visible());
    }

    #[test]
    fn test_escape_pushes_pause() {
        let (_dir, mut services) = services();
        let mut scene = MatchScene::new(&services.config);
        let mut ctx = services.context();

        scene.events(&[InputEvent::KeyDown(Key::Space)], &mut ctx);
        assert!(ctx.pending().is_empty());

        scene.events(&[InputEvent::KeyDown(Key::Escape)], &mut ctx);
        assert_eq!(format!("{:?}", ctx.pending()), "[Push(pause)]");
    }

    #[test]
    fn test_repeated_escape_in_one_batch_pushes_one_pause() {
        let (_dir, mut services) = services();
        let mut scene = MatchScene::new(&services.config);
        let mut ctx = services.context();

        scene.events(
            &[
                InputEvent::KeyDown(Key::Escape),
                InputEvent::KeyDown(Key::Escape),
            ],
            &mut ctx,
        );
        assert_eq!(format!("{:?}", ctx.pending()), "[Push(pause)]");
    }

    #[test]
    fn test_render_ball_position() {
        let (_dir, services) = services();
        let scene = MatchScene::new(&services.config);
        let mut surface = RecordingSurface::new(800, 600);
        scene.render(&mut surface).unwrap();

        assert_eq!(surface.ops[0], DrawOp::Fill(None, Color::RGB(0, 0, 0)));
        assert_eq!(surface.ops[1], DrawOp::Circle(100, 300, 20, Color::RGB(255, 255, 0)));
    }
}
