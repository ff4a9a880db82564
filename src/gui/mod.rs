//! Screen-Space GUI System
//!
//! Widgets render at fixed screen positions on top of the scene they belong
//! to. They are stateless between frames apart from hover, drag and
//! selection, and they never act on the game directly: a completed
//! interaction yields the widget's action value, which the owning scene
//! interprets.
//!
//! # Available Components
//!
//! - [`Button`] - Labelled rectangle, fires on click or Return
//! - [`Slider`] - Value in `[0, 1]` snapped to 10% steps
//! - [`GuiScreen`] - Ordered widget set with a background image
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use rocket_clash::gui::{Button, GuiScreen};
//!
//! #[derive(Clone, Copy)]
//! enum Action { Play }
//!
//! let mut screen = GuiScreen::new().with_background("gui/main_menu_bg.png");
//! screen.add(Button::anchored(600, 378, "PLAY", Action::Play));
//!
//! for action in screen.events(&events, &mut audio) {
//!     match action {
//!         Action::Play => { /* push the match scene */ }
//!     }
//! }
//! screen.render(&mut surface)?;
//! ```

pub mod button;
pub mod screen;
pub mod slider;
pub mod widget;

pub use button::{Button, ButtonStyle, BUTTON_SIZE};
pub use screen::GuiScreen;
pub use slider::{Slider, SliderStyle, SLIDER_WIDTH};
pub use widget::Widget;
