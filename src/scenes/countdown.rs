//! 3-2-1 overlay shown before play resumes

use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::surface::{Renderable, Surface};
use crate::text::draw_text_centered;
use sdl2::pixels::Color;

pub const COUNTDOWN_START: i32 = 3;
const STEP_MS: f32 = 1000.0;
const OVERLAY_ALPHA: u8 = 100;
const NUMBER_SCALE: u32 = 12;

pub struct CountdownScene {
    value: i32,
    elapsed: f32,
    finished: bool,
    center: (i32, i32),
}

impl CountdownScene {
    pub fn new(config: &GameConfig) -> Self {
        CountdownScene {
            value: COUNTDOWN_START,
            elapsed: 0.0,
            finished: false,
            center: (
                config.screen_width as i32 / 2,
                config.screen_height as i32 / 2,
            ),
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl EventHandler for CountdownScene {
    /// The countdown cannot be interrupted
    fn events(&mut self, _events: &[InputEvent], _ctx: &mut SceneContext) {}
}

impl Updatable for CountdownScene {
    fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        if self.finished {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= STEP_MS {
            self.elapsed -= STEP_MS;
            self.value -= 1;
        }

        if self.value <= 0 {
            self.finished = true;
            ctx.pop();
        }
    }
}

impl Renderable for CountdownScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, Color::RGBA(0, 0, 0, OVERLAY_ALPHA))?;
        if self.value > 0 {
            draw_text_centered(
                surface,
                &self.value.to_string(),
                self.center.0,
                self.center.1,
                Color::RGB(255, 255, 255),
                NUMBER_SCALE,
            )?;
        }
        Ok(())
    }
}

impl Scene for CountdownScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Countdown
    }

    fn is_overlay(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::test_support::services;

    #[test]
    fn test_pops_after_three_seconds() {
        let (_dir, mut services) = services();
        let mut countdown = CountdownScene::new(&services.config);

        for expected in [2, 1] {
            let mut ctx = services.context();
            countdown.update(1000.0, &mut ctx);
            assert!(ctx.pending().is_empty());
            assert_eq!(countdown.value(), expected);
        }

        let mut ctx = services.context();
        countdown.update(1000.0, &mut ctx);
        assert_eq!(format!("{:?}", ctx.pending()), "[Pop]");
    }

    #[test]
    fn test_accumulates_small_steps() {
        let (_dir, mut services) = services();
        let mut countdown = CountdownScene::new(&services.config);

        let mut ctx = services.context();
        for _ in 0..99 {
            countdown.update(10.0, &mut ctx);
        }
        assert_eq!(countdown.value(), 3);
        countdown.update(10.0, &mut ctx);
        assert_eq!(countdown.value(), 2);
    }

    #[test]
    fn test_single_pop_even_with_large_step() {
        let (_dir, mut services) = services();
        let mut countdown = CountdownScene::new(&services.config);

        let mut ctx = services.context();
        countdown.update(5000.0, &mut ctx);
        countdown.update(1000.0, &mut ctx);
        assert_eq!(ctx.pending().len(), 1);
    }

    #[test]
    fn test_is_overlay_and_ignores_input() {
        let (_dir, mut services) = services();
        let mut countdown = CountdownScene::new(&services.config);
        assert!(countdown.is_overlay());

        let mut ctx = services.context();
        countdown.events(&[InputEvent::Quit], &mut ctx);
        assert!(ctx.pending().is_empty());
    }
}
