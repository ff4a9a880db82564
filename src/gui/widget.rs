//! Widget variants owned by a GUI screen

use super::button::Button;
use super::slider::Slider;
use crate::surface::Surface;
use sdl2::rect::Rect;

/// Point-in-rect test that counts the right and bottom edges as inside
pub fn contains_inclusive(rect: Rect, x: i32, y: i32) -> bool {
    x >= rect.left() && x <= rect.right() && y >= rect.top() && y <= rect.bottom()
}

/// One interactive element of a [`GuiScreen`](super::GuiScreen)
#[derive(Debug, Clone)]
pub enum Widget<A> {
    Button(Button<A>),
    Slider(Slider<A>),
}

impl<A: Copy> Widget<A> {
    pub fn action(&self) -> A {
        match self {
            Widget::Button(b) => b.action(),
            Widget::Slider(s) => s.action(),
        }
    }

    /// Point-in-widget test used for arming, release and hover
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match self {
            Widget::Button(b) => contains_inclusive(b.rect(), x, y),
            Widget::Slider(s) => s.contains(x, y),
        }
    }

    pub fn is_hover(&self) -> bool {
        match self {
            Widget::Button(b) => b.is_hover(),
            Widget::Slider(_) => false,
        }
    }

    pub fn set_hover(&mut self, hover: bool) {
        if let Widget::Button(b) = self {
            b.set_hover(hover);
        }
    }

    pub fn as_slider(&self) -> Option<&Slider<A>> {
        match self {
            Widget::Slider(s) => Some(s),
            Widget::Button(_) => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider<A>> {
        match self {
            Widget::Slider(s) => Some(s),
            Widget::Button(_) => None,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, selected: bool) -> Result<(), String> {
        match self {
            Widget::Button(b) => b.render(surface, selected || b.is_hover()),
            Widget::Slider(s) => s.render(surface, selected),
        }
    }
}

impl<A> From<Button<A>> for Widget<A> {
    fn from(button: Button<A>) -> Self {
        Widget::Button(button)
    }
}

impl<A> From<Slider<A>> for Widget<A> {
    fn from(slider: Slider<A>) -> Self {
        Widget::Slider(slider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges_are_inside() {
        let widget: Widget<()> = Button::new(Rect::new(10, 10, 20, 20), None, ()).into();
        assert!(widget.contains(10, 10));
        assert!(widget.contains(30, 30));
        assert!(!widget.contains(31, 30));
        assert!(!widget.contains(9, 20));
    }

    #[test]
    fn test_slider_exposes_value() {
        let mut widget: Widget<()> = Slider::new(0, 0, 0.4, ()).into();
        assert!(widget.as_slider().is_some());
        widget.as_slider_mut().unwrap().adjust(1);
        assert_eq!(widget.as_slider().unwrap().value(), 0.5);
        // Sliders have no hover state
        widget.set_hover(true);
        assert!(!widget.is_hover());
    }
}
