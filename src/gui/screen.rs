//! GUI screen: widget ownership, event dispatch and rendering
//!
//! A screen turns raw input into at most one action per logical interaction.
//! Pointer clicks complete only when the release lands on the widget that was
//! armed by the press; keyboard navigation moves a wrapping selection.

use super::slider::Slider;
use super::widget::Widget;
use crate::audio::{AudioContext, Sfx};
use crate::input::{InputEvent, Key};
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct GuiScreen<A> {
    widgets: Vec<Widget<A>>,
    background: Option<String>,
    armed: Option<usize>,
    selected: Option<usize>,
}

impl<A: Copy> Default for GuiScreen<A> {
    fn default() -> Self {
        GuiScreen::new()
    }
}

impl<A: Copy> GuiScreen<A> {
    pub fn new() -> Self {
        GuiScreen {
            widgets: Vec::new(),
            background: None,
            armed: None,
            selected: None,
        }
    }

    /// Sets the background image key, drawn stretched over the whole surface
    pub fn with_background(mut self, key: &str) -> Self {
        self.background = Some(key.to_string());
        self
    }

    /// Appends a widget and returns its index
    pub fn add(&mut self, widget: impl Into<Widget<A>>) -> usize {
        self.widgets.push(widget.into());
        self.widgets.len() - 1
    }

    pub fn widgets(&self) -> &[Widget<A>] {
        &self.widgets
    }

    pub fn slider(&self, index: usize) -> Option<&Slider<A>> {
        self.widgets.get(index).and_then(Widget::as_slider)
    }

    pub fn slider_mut(&mut self, index: usize) -> Option<&mut Slider<A>> {
        self.widgets.get_mut(index).and_then(Widget::as_slider_mut)
    }

    pub fn armed(&self) -> Option<usize> {
        self.armed
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        let count = self.widgets.len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        let count = self.widgets.len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        });
    }

    /// Index of the topmost widget under the point
    ///
    /// Later widgets draw over earlier ones, so the search runs back to front.
    pub fn widget_at(&self, x: i32, y: i32) -> Option<usize> {
        self.widgets.iter().rposition(|w| w.contains(x, y))
    }

    /// Dispatches a batch of events, returning the actions that fired in order
    pub fn events(&mut self, events: &[InputEvent], audio: &mut AudioContext) -> Vec<A> {
        events
            .iter()
            .filter_map(|event| self.handle_event(event, audio))
            .collect()
    }

    /// Dispatches one event; returns the action it completed, if any
    pub fn handle_event(&mut self, event: &InputEvent, audio: &mut AudioContext) -> Option<A> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.armed = self.widget_at(x, y);
                if let Some(slider) = self.armed.and_then(|i| self.slider_mut(i)) {
                    slider.pointer_down(x, y);
                }
                None
            }
            InputEvent::PointerUp { x, y } => {
                let released_on = self.widget_at(x, y);
                let armed = self.armed.take();
                for slider in self.widgets.iter_mut().filter_map(Widget::as_slider_mut) {
                    slider.pointer_up();
                }

                match (armed, released_on) {
                    (Some(a), Some(r)) if a == r => Some(self.fire(a, audio)),
                    _ => None,
                }
            }
            InputEvent::PointerMove { x, y } => {
                for widget in &mut self.widgets {
                    let inside = widget.contains(x, y);
                    widget.set_hover(inside);
                    if let Some(slider) = widget.as_slider_mut() {
                        slider.pointer_move(x);
                    }
                }
                None
            }
            InputEvent::KeyDown(Key::Down) => {
                self.select_next();
                None
            }
            InputEvent::KeyDown(Key::Up) => {
                self.select_previous();
                None
            }
            InputEvent::KeyDown(Key::Return) => {
                let selected = self.selected?;
                Some(self.fire(selected, audio))
            }
            InputEvent::KeyDown(Key::Left) => {
                self.adjust_selected(-1);
                None
            }
            InputEvent::KeyDown(Key::Right) => {
                self.adjust_selected(1);
                None
            }
            _ => None,
        }
    }

    fn adjust_selected(&mut self, steps: i32) {
        if let Some(slider) = self.selected.and_then(|i| self.slider_mut(i)) {
            slider.adjust(steps);
        }
    }

    fn fire(&self, index: usize, audio: &mut AudioContext) -> A {
        audio.play(Sfx::Click);
        self.widgets[index].action()
    }

    /// Background first, then widgets in insertion order
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        if let Some(key) = &self.background {
            surface.draw_image(key, None)?;
        }

        for (i, widget) in self.widgets.iter().enumerate() {
            widget.render(surface, self.selected == Some(i))?;
        }

        Ok(())
    }
}
