//! Dialogue box rendering

use crate::surface::Surface;
use crate::text::{draw_text, line_height, text_width, wrap_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub const PORTRAIT_SIZE: u32 = 96;
const PADDING: i32 = 10;
const TEXT_SCALE: u32 = 2;
const CONTINUE_HINT: &str = "PRESS SPACE TO CONTINUE...";

/// Configuration for dialogue box appearance
#[derive(Debug, Clone)]
pub struct DialogueStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub name_color: Color,
    pub hint_color: Color,
}

impl Default for DialogueStyle {
    fn default() -> Self {
        DialogueStyle {
            background_color: Color::RGB(20, 20, 20),
            border_color: Color::RGB(80, 80, 80),
            text_color: Color::RGB(255, 255, 255),
            name_color: Color::RGB(200, 200, 50),
            hint_color: Color::RGB(150, 150, 150),
        }
    }
}

/// Box along the bottom of the screen with portrait, speaker and text
pub struct DialogueBox {
    portrait: Option<String>,
    style: DialogueStyle,
}

impl Default for DialogueBox {
    fn default() -> Self {
        DialogueBox::new()
    }
}

impl DialogueBox {
    pub fn new() -> Self {
        DialogueBox {
            portrait: None,
            style: DialogueStyle::default(),
        }
    }

    /// Image key of the portrait to show; `None` clears it
    pub fn set_portrait(&mut self, portrait: Option<&str>) {
        self.portrait = portrait.map(str::to_string);
    }

    pub fn portrait(&self) -> Option<&str> {
        self.portrait.as_deref()
    }

    /// Box rectangle for a surface of the given size
    pub fn box_rect(width: u32, height: u32) -> Rect {
        Rect::new(
            50,
            height as i32 - 170,
            width.saturating_sub(100),
            140,
        )
    }

    /// Draws the box; the hint appears once the line is fully revealed
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        name: Option<&str>,
        text: &str,
        complete: bool,
    ) -> Result<(), String> {
        let (width, height) = surface.size();
        let bounds = DialogueBox::box_rect(width, height);

        surface.fill_rect(Some(bounds), self.style.background_color)?;
        surface.stroke_rect(bounds, self.style.border_color, 2)?;

        let mut x = bounds.x() + PADDING;
        let mut y = bounds.y() + PADDING;

        if let Some(key) = &self.portrait {
            let dst = Rect::new(x, y, PORTRAIT_SIZE, PORTRAIT_SIZE);
            // Missing portraits leave the text where it would otherwise start
            if surface.draw_image(key, Some(dst))? {
                x += PORTRAIT_SIZE as i32 + PADDING;
            }
        }

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            draw_text(surface, name, x, y, self.style.name_color, TEXT_SCALE)?;
            y += line_height(TEXT_SCALE) as i32 + 6;
        }

        let max_width = (bounds.right() - x - PADDING).max(0) as u32;
        for line in wrap_text(text, max_width, TEXT_SCALE) {
            draw_text(surface, &line, x, y, self.style.text_color, TEXT_SCALE)?;
            y += line_height(TEXT_SCALE) as i32 + 2;
        }

        if complete {
            let hint_x = bounds.right() - text_width(CONTINUE_HINT, 1) as i32 - 15;
            let hint_y = bounds.bottom() - line_height(1) as i32 - 10;
            draw_text(surface, CONTINUE_HINT, hint_x, hint_y, self.style.hint_color, 1)?;
        }

        Ok(())
    }
}
