//! Dialogue System
//!
//! Line-by-line conversations loaded from JSON scripts and revealed with a
//! typewriter effect.
//!
//! # Architecture
//!
//! - `script`: file format (`DialogueScript`, `DialogueLine`) and `DialogueError`
//! - `manager`: reveal progress and line advancement (`DialogueManager`)
//! - `ui`: the on-screen box (`DialogueBox`)
//!
//! # Script Format
//!
//! ```json
//! {
//!   "lines": [
//!     { "name": "Coach", "portrait": "portraits/coach.png", "text": "Ready?" },
//!     { "text": "Kickoff!", "speed": 80 }
//!   ]
//! }
//! ```

pub mod manager;
pub mod script;
pub mod ui;

pub use manager::{Advance, DialogueManager, DEFAULT_REVEAL_SPEED};
pub use script::{DialogueError, DialogueLine, DialogueScript};
pub use ui::{DialogueBox, DialogueStyle};
