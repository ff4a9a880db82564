//! Main menu

use super::{MatchScene, SettingsScene};
use crate::assets::MAIN_MENU_BACKGROUND;
use crate::config::GameConfig;
use crate::gui::{Button, GuiScreen};
use crate::input::{InputEvent, Key};
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::surface::{Renderable, Surface};
use sdl2::pixels::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Exit,
    Settings,
}

pub struct MenuScene {
    gui: GuiScreen<MenuAction>,
}

impl MenuScene {
    pub fn new(config: &GameConfig) -> Self {
        let left = config.screen_width as i32 - 200;
        let height = config.screen_height as i32;

        let mut gui = GuiScreen::new().with_background(MAIN_MENU_BACKGROUND);
        gui.add(Button::anchored(left, height - 222, "CAMPAIGN MODE", MenuAction::Play));
        gui.add(Button::anchored(left, height - 78, "EXIT", MenuAction::Exit));
        gui.add(Button::anchored(left, height - 150, "SETTINGS", MenuAction::Settings));

        MenuScene { gui }
    }

    pub fn gui(&self) -> &GuiScreen<MenuAction> {
        &self.gui
    }
}

impl EventHandler for MenuScene {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        if events.iter().any(|e| e.is_key(Key::Escape)) {
            ctx.pop();
            return;
        }

        for action in self.gui.events(events, ctx.audio) {
            match action {
                MenuAction::Play => {
                    let scene = MatchScene::new(ctx.config);
                    ctx.push(scene);
                }
                MenuAction::Settings => {
                    let scene = SettingsScene::new(ctx.config, ctx.settings);
                    ctx.push(scene);
                }
                MenuAction::Exit => ctx.pop(),
            }
        }
    }
}

impl Updatable for MenuScene {
    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}
}

impl Renderable for MenuScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, Color::RGB(0, 0, 0))?;
        self.gui.render(surface)
    }
}

impl Scene for MenuScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Menu
    }
}
