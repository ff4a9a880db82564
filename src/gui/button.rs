//! Button widget
//!
//! A filled rectangle with a border and an optional centred label. The
//! button does not know what it does: it carries an action value that the
//! owning [`GuiScreen`](super::GuiScreen) hands back to the scene when a click
//! completes.

use crate::surface::Surface;
use crate::text::draw_text_centered;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Default button size in pixels
pub const BUTTON_SIZE: (u32, u32) = (160, 48);

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub color: Color,
    pub hover_color: Color,
    pub border_color: Color,
    pub border_thickness: u32,
    pub label_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            color: Color::RGB(255, 255, 255),
            hover_color: Color::RGB(255, 255, 0),
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 2,
            label_scale: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button<A> {
    rect: Rect,
    label: Option<String>,
    action: A,
    hover: bool,
    style: ButtonStyle,
}

impl<A: Copy> Button<A> {
    pub fn new(rect: Rect, label: Option<&str>, action: A) -> Self {
        Button {
            rect,
            label: label.map(str::to_string),
            action,
            hover: false,
            style: ButtonStyle::default(),
        }
    }

    /// Default-sized button whose bottom-left corner sits at (`left`, `bottom`)
    pub fn anchored(left: i32, bottom: i32, label: &str, action: A) -> Self {
        let (w, h) = BUTTON_SIZE;
        Button::new(
            Rect::new(left, bottom - h as i32, w, h),
            Some(label),
            action,
        )
    }

    /// Moves the button horizontally so it is centred on `cx`
    pub fn centered_x(mut self, cx: i32) -> Self {
        self.rect.center_on((cx, self.rect.center().y()));
        self
    }

    /// Overrides the width, keeping the centre
    pub fn with_width(mut self, width: u32) -> Self {
        let center = self.rect.center();
        self.rect.set_width(width);
        self.rect.center_on(center);
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn action(&self) -> A {
        self.action
    }

    pub fn is_hover(&self) -> bool {
        self.hover
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.hover = hover;
    }

    /// Draws the button; `highlighted` is hover or keyboard selection
    pub fn render(&self, surface: &mut dyn Surface, highlighted: bool) -> Result<(), String> {
        let fill = if highlighted {
            self.style.hover_color
        } else {
            self.style.color
        };
        surface.fill_rect(Some(self.rect), fill)?;
        surface.stroke_rect(self.rect, self.style.border_color, self.style.border_thickness)?;

        if let Some(label) = &self.label {
            let center = self.rect.center();
            draw_text_centered(
                surface,
                label,
                center.x(),
                center.y(),
                self.style.border_color,
                self.style.label_scale,
            )?;
        }

        Ok(())
    }
}
