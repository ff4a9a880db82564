//! Rocket Clash - a 2D car-and-ball arcade game
//!
//! Core modules:
//! - `director`: scene stack and frame loop
//! - `scene`: scene capabilities and the command channel to the director
//! - `scenes`: menu, match, settings, pause, countdown and dialogue screens
//! - `gui`: buttons, sliders and the screens that own them
//! - `dialogue`: scripted conversations with a typewriter reveal
//! - `settings`: the persisted settings file
//! - `audio`, `assets`, `surface`, `input`, `platform`: SDL2-facing services

pub mod assets;
pub mod audio;
pub mod config;
pub mod dialogue;
pub mod director;
pub mod gui;
pub mod input;
pub mod platform;
pub mod scene;
pub mod scenes;
pub mod settings;
pub mod surface;
pub mod text;

pub use config::GameConfig;
pub use director::{Director, DirectorError};
pub use scene::{Scene, SceneContext, SceneKind, Services};
