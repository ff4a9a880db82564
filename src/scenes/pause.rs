//! In-game pause menu
//!
//! Overlay drawn on top of the match. Resuming goes through a countdown
//! so the player has time to get ready.

use super::{CountdownScene, SettingsScene};
use crate::config::GameConfig;
use crate::gui::{Button, GuiScreen};
use crate::input::{InputEvent, Key};
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::surface::{Renderable, Surface};
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const BUTTON_WIDTH: u32 = 240;

/// Configuration for pause menu appearance
#[derive(Debug, Clone)]
pub struct PauseStyle {
    pub panel_width: u32,
    pub panel_height: u32,
    pub overlay_alpha: u8,
    pub panel_color: Color,
    pub border_color: Color,
    pub title_color: Color,
}

impl Default for PauseStyle {
    fn default() -> Self {
        PauseStyle {
            panel_width: 300,
            panel_height: 350,
            overlay_alpha: 180,
            panel_color: Color::RGB(50, 50, 70),
            border_color: Color::RGB(255, 255, 255),
            title_color: Color::RGB(255, 255, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    Settings,
    ExitToMenu,
}

pub struct PauseScene {
    gui: GuiScreen<PauseAction>,
    panel: Rect,
    title_pos: (i32, i32),
    style: PauseStyle,
}

impl PauseScene {
    pub fn new(config: &GameConfig) -> Self {
        let style = PauseStyle::default();
        let cx = config.screen_width as i32 / 2;
        let cy = config.screen_height as i32 / 2;

        let mut gui = GuiScreen::new();
        for (bottom, label, action) in [
            (cy - 50, "RESUME GAME", PauseAction::Resume),
            (cy + 20, "SETTINGS", PauseAction::Settings),
            (cy + 90, "EXIT TO MAIN MENU", PauseAction::ExitToMenu),
        ] {
            gui.add(
                Button::anchored(0, bottom, label, action)
                    .centered_x(cx)
                    .with_width(BUTTON_WIDTH),
            );
        }

        let mut panel = Rect::new(0, 0, style.panel_width, style.panel_height);
        panel.center_on((cx, cy));

        PauseScene {
            gui,
            panel,
            title_pos: (cx, cy - 120),
            style,
        }
    }

    pub fn gui(&self) -> &GuiScreen<PauseAction> {
        &self.gui
    }

    fn resume(ctx: &mut SceneContext) {
        ctx.pop();
        let countdown = CountdownScene::new(ctx.config);
        ctx.push(countdown);
    }

    fn perform(action: PauseAction, ctx: &mut SceneContext) {
        match action {
            PauseAction::Resume => PauseScene::resume(ctx),
            PauseAction::Settings => {
                let settings = SettingsScene::new(ctx.config, ctx.settings);
                ctx.push(settings);
            }
            PauseAction::ExitToMenu => {
                // Leave the pause menu and the match beneath it
                ctx.pop();
                ctx.pop();
            }
        }
    }
}

impl EventHandler for PauseScene {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        if events.iter().any(|e| e.is_key(Key::Escape)) {
            PauseScene::resume(ctx);
            return;
        }

        for action in self.gui.events(events, ctx.audio) {
            PauseScene::perform(action, ctx);
        }
    }
}

impl Updatable for PauseScene {
    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}
}

impl Renderable for PauseScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, Color::RGBA(0, 0, 0, self.style.overlay_alpha))?;

        surface.fill_rect(Some(self.panel), self.style.panel_color)?;
        surface.stroke_rect(self.panel, self.style.border_color, 3)?;

        draw_text_centered(
            surface,
            "PAUSED",
            self.title_pos.0,
            self.title_pos.1,
            self.style.title_color,
            4,
        )?;

        self.gui.render(surface)
    }
}

impl Scene for PauseScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Pause
    }

    fn is_overlay(&self) -> bool {
        true
    }
}
