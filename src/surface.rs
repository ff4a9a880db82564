//! Drawing surface
//!
//! Scenes and widgets draw through the [`Surface`] trait instead of holding
//! an SDL2 canvas directly. The game renders into [`SdlSurface`]; tests render
//! into a recording surface and inspect the draw calls.

use crate::assets::AssetRegistry;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Primitive drawing operations needed by the GUI
pub trait Surface {
    /// Logical size in pixels
    fn size(&self) -> (u32, u32);

    /// Fills `rect` (or the whole surface); alpha < 255 blends
    fn fill_rect(&mut self, rect: Option<Rect>, color: Color) -> Result<(), String>;

    /// Outlines `rect`, growing inwards by `thickness` pixels
    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32) -> Result<(), String>;

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> Result<(), String>;

    /// Draws the image registered under `key`, stretched to `dst` (or the whole
    /// surface). Returns `Ok(false)` when the image is unavailable.
    fn draw_image(&mut self, key: &str, dst: Option<Rect>) -> Result<bool, String>;
}

/// Anything that can draw itself onto a surface
pub trait Renderable {
    fn render(&self, surface: &mut dyn Surface) -> Result<(), String>;
}

/// Surface backed by the window canvas and the asset registry
pub struct SdlSurface<'a, 't> {
    canvas: &'a mut Canvas<Window>,
    assets: &'a mut AssetRegistry<'t>,
}

impl<'a, 't> SdlSurface<'a, 't> {
    pub fn new(canvas: &'a mut Canvas<Window>, assets: &'a mut AssetRegistry<'t>) -> Self {
        SdlSurface { canvas, assets }
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl Surface for SdlSurface<'_, '_> {
    fn size(&self) -> (u32, u32) {
        let (w, h) = self.canvas.logical_size();
        if w == 0 || h == 0 {
            // No logical size set, fall back to the real output size
            self.canvas.output_size().unwrap_or((0, 0))
        } else {
            (w, h)
        }
    }

    fn fill_rect(&mut self, rect: Option<Rect>, color: Color) -> Result<(), String> {
        let blended = color.a < 255;
        if blended {
            self.canvas.set_blend_mode(BlendMode::Blend);
        }
        self.canvas.set_draw_color(color);
        let result = self.canvas.fill_rect(rect);
        if blended {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        result
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        for i in 0..thickness {
            let inset = i as i32;
            let w = rect.width().saturating_sub(2 * i);
            let h = rect.height().saturating_sub(2 * i);
            if w == 0 || h == 0 {
                break;
            }
            self.canvas
                .draw_rect(Rect::new(rect.x() + inset, rect.y() + inset, w, h))?;
        }
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        // One horizontal span per scanline
        for dy in -radius..=radius {
            let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
            self.canvas.fill_rect(Rect::new(
                cx - half,
                cy + dy,
                (2 * half + 1) as u32,
                1,
            ))?;
        }
        Ok(())
    }

    fn draw_image(&mut self, key: &str, dst: Option<Rect>) -> Result<bool, String> {
        match self.assets.image(key) {
            Some(texture) => {
                self.canvas.copy(texture, None, dst)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
