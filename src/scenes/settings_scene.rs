//! Settings screen
//!
//! Volume slider and a save button. The slider drives the live volume every
//! frame; the value only reaches disk when the player saves.

use crate::config::GameConfig;
use crate::gui::{Button, GuiScreen, Slider, SLIDER_WIDTH};
use crate::input::{InputEvent, Key};
use crate::scene::{EventHandler, Scene, SceneContext, SceneKind, Updatable};
use crate::settings::{Settings, SettingsStore};
use crate::surface::{Renderable, Surface};
use crate::text::draw_text_centered;
use sdl2::pixels::Color;

const TITLE_Y: i32 = 50;
const SLIDER_Y: i32 = 200;
const LABEL_OFFSET: i32 = 40;
const SAVE_BUTTON_Y: i32 = 400;
const SAVE_MESSAGE_MS: f32 = 2000.0;

const BACKGROUND_COLOR: Color = Color::RGB(30, 30, 30);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
const SAVED_COLOR: Color = Color::RGB(100, 255, 100);
const FOOTER_COLOR: Color = Color::RGB(150, 150, 150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Volume,
    Save,
}

pub struct SettingsScene {
    gui: GuiScreen<SettingsAction>,
    slider: usize,
    /// Time the "saved" message has been visible
    save_message: Option<f32>,
    center_x: i32,
    footer_y: i32,
}

impl SettingsScene {
    pub fn new(config: &GameConfig, store: &SettingsStore) -> Self {
        let center_x = config.screen_width as i32 / 2;
        let saved_volume = store.get_volume();

        let mut gui = GuiScreen::new();
        let slider = gui.add(Slider::new(
            center_x - SLIDER_WIDTH as i32 / 2,
            SLIDER_Y,
            saved_volume,
            SettingsAction::Volume,
        ));
        gui.add(
            Button::anchored(0, SAVE_BUTTON_Y, "SAVE SETTINGS", SettingsAction::Save)
                .centered_x(center_x)
                .with_width(200),
        );

        SettingsScene {
            gui,
            slider,
            save_message: None,
            center_x,
            footer_y: config.screen_height as i32 - 50,
        }
    }

    pub fn volume(&self) -> f32 {
        self.gui.slider(self.slider).map_or(0.0, |s| s.value())
    }

    pub fn gui(&self) -> &GuiScreen<SettingsAction> {
        &self.gui
    }

    pub fn is_save_message_visible(&self) -> bool {
        self.save_message.is_some()
    }

    fn save(&mut self, store: &SettingsStore) {
        let settings = Settings {
            volume: self.volume(),
        };
        match store.save(&settings) {
            Ok(_) => self.save_message = Some(0.0),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}

impl EventHandler for SettingsScene {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext) {
        if events.iter().any(|e| e.is_key(Key::Escape)) {
            ctx.pop();
        }

        for action in self.gui.events(events, ctx.audio) {
            match action {
                SettingsAction::Save => self.save(ctx.settings),
                // The live volume follows the slider in update
                SettingsAction::Volume => {}
            }
        }
    }
}

impl Updatable for SettingsScene {
    fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        ctx.audio.set_volume(self.volume());

        if let Some(shown) = self.save_message.as_mut() {
            *shown += dt;
            if *shown >= SAVE_MESSAGE_MS {
                self.save_message = None;
            }
        }
    }
}

impl Renderable for SettingsScene {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill_rect(None, BACKGROUND_COLOR)?;

        draw_text_centered(surface, "SETTINGS", self.center_x, TITLE_Y, TEXT_COLOR, 4)?;
        draw_text_centered(
            surface,
            "VOLUME",
            self.center_x,
            SLIDER_Y - LABEL_OFFSET,
            TEXT_COLOR,
            2,
        )?;

        self.gui.render(surface)?;

        let percent = format!("{}%", (self.volume() * 100.0).round() as i32);
        draw_text_centered(
            surface,
            &percent,
            self.center_x,
            SLIDER_Y + LABEL_OFFSET,
            TEXT_COLOR,
            2,
        )?;

        if self.save_message.is_some() {
            draw_text_centered(
                surface,
                "SETTINGS SAVED!",
                self.center_x,
                SAVE_BUTTON_Y + 60,
                SAVED_COLOR,
                2,
            )?;
        }

        draw_text_centered(
            surface,
            "PRESS ESC TO RETURN",
            self.center_x,
            self.footer_y,
            FOOTER_COLOR,
            2,
        )
    }
}

impl Scene for SettingsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Settings
    }
}
