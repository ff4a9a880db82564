//! Slider widget
//!
//! A horizontal bar holding a value in `[0.0, 1.0]`. Pointer interaction
//! snaps the value to 10% steps; arrow keys move it one step at a time.

use crate::surface::Surface;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Number of discrete positions between 0.0 and 1.0
pub const SLIDER_STEPS: f32 = 10.0;

pub const SLIDER_WIDTH: u32 = 300;
pub const SLIDER_HEIGHT: u32 = 10;
pub const SLIDER_HANDLE_RADIUS: i32 = 15;

/// Configuration for slider appearance
#[derive(Debug, Clone)]
pub struct SliderStyle {
    /// Unfilled portion of the bar
    pub background_color: Color,
    /// Filled portion and inner handle
    pub fill_color: Color,
    pub handle_color: Color,
    /// Outline drawn when the slider has keyboard focus
    pub focus_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        SliderStyle {
            background_color: Color::RGB(100, 100, 100),
            fill_color: Color::RGB(50, 150, 255),
            handle_color: Color::RGB(255, 255, 255),
            focus_color: Color::RGB(255, 255, 0),
        }
    }
}

/// Snaps a raw fraction to the nearest step; ties go to the even step
pub fn quantize(raw: f32) -> f32 {
    (raw.clamp(0.0, 1.0) * SLIDER_STEPS).round_ties_even() / SLIDER_STEPS
}

#[derive(Debug, Clone)]
pub struct Slider<A> {
    bar: Rect,
    value: f32,
    dragging: bool,
    action: A,
    style: SliderStyle,
}

impl<A: Copy> Slider<A> {
    /// Creates a default-sized slider with its bar's top-left at (`x`, `y`)
    pub fn new(x: i32, y: i32, initial_value: f32, action: A) -> Self {
        Slider {
            bar: Rect::new(x, y, SLIDER_WIDTH, SLIDER_HEIGHT),
            value: initial_value.clamp(0.0, 1.0),
            dragging: false,
            action,
            style: SliderStyle::default(),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value programmatically, clamped but not snapped
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn action(&self) -> A {
        self.action
    }

    pub fn bar(&self) -> Rect {
        self.bar
    }

    pub fn handle_x(&self) -> i32 {
        self.bar.x() + (self.value * self.bar.width() as f32) as i32
    }

    /// Square hit zone around the handle centre
    fn handle_zone(&self) -> Rect {
        Rect::new(
            self.handle_x() - SLIDER_HANDLE_RADIUS,
            self.bar.y() - SLIDER_HANDLE_RADIUS + self.bar.height() as i32 / 2,
            (SLIDER_HANDLE_RADIUS * 2) as u32,
            (SLIDER_HANDLE_RADIUS * 2) as u32,
        )
    }

    /// True if (`x`, `y`) is on the bar or the handle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bar.contains_point((x, y)) || self.handle_zone().contains_point((x, y))
    }

    fn x_to_value(&self, x: i32) -> f32 {
        let relative = (x - self.bar.x()).clamp(0, self.bar.width() as i32);
        quantize(relative as f32 / self.bar.width() as f32)
    }

    /// Starts a drag if the pointer is on the slider; returns whether it did
    pub fn pointer_down(&mut self, x: i32, y: i32) -> bool {
        if self.contains(x, y) {
            self.dragging = true;
            self.value = self.x_to_value(x);
        }
        self.dragging
    }

    pub fn pointer_move(&mut self, x: i32) {
        if self.dragging {
            self.value = self.x_to_value(x);
        }
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Moves the value by `steps` tenths (negative = left), clamped to the range.
    /// Off-step values move by exactly that much and are not snapped.
    pub fn adjust(&mut self, steps: i32) {
        let scaled = self.value * SLIDER_STEPS;
        let next = if (scaled - scaled.round()).abs() < 1e-4 {
            // Stay on exact steps instead of accumulating float drift
            (scaled.round() + steps as f32) / SLIDER_STEPS
        } else {
            self.value + steps as f32 / SLIDER_STEPS
        };
        self.value = next.clamp(0.0, 1.0);
    }

    pub fn render(&self, surface: &mut dyn Surface, focused: bool) -> Result<(), String> {
        surface.fill_rect(Some(self.bar), self.style.background_color)?;

        let filled = (self.handle_x() - self.bar.x()) as u32;
        if filled > 0 {
            surface.fill_rect(
                Some(Rect::new(self.bar.x(), self.bar.y(), filled, self.bar.height())),
                self.style.fill_color,
            )?;
        }

        if focused {
            let outline = Rect::new(
                self.bar.x() - 4,
                self.bar.y() - 4,
                self.bar.width() + 8,
                self.bar.height() + 8,
            );
            surface.stroke_rect(outline, self.style.focus_color, 1)?;
        }

        let cy = self.bar.y() + self.bar.height() as i32 / 2;
        surface.fill_circle(self.handle_x(), cy, SLIDER_HANDLE_RADIUS, self.style.handle_color)?;
        surface.fill_circle(
            self.handle_x(),
            cy,
            SLIDER_HANDLE_RADIUS - 3,
            self.style.fill_color,
        )?;

        Ok(())
    }
}
