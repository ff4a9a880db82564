//! Scene capabilities and the scene-to-director command channel
//!
//! A scene is anything that handles input, updates with elapsed time and
//! renders itself. Scenes never touch the scene stack directly; they queue
//! [`SceneCommand`]s on the [`SceneContext`] they are handed each tick, and
//! the director applies them once the tick has rendered.

use crate::audio::AudioContext;
use crate::config::GameConfig;
use crate::input::InputEvent;
use crate::settings::SettingsStore;
use crate::surface::Renderable;
use std::fmt;

/// Every scene type the game knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Menu,
    Match,
    Settings,
    Pause,
    Countdown,
    Dialogue,
}

impl SceneKind {
    pub fn all() -> [SceneKind; 6] {
        [
            SceneKind::Menu,
            SceneKind::Match,
            SceneKind::Settings,
            SceneKind::Pause,
            SceneKind::Countdown,
            SceneKind::Dialogue,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Menu => "menu",
            SceneKind::Match => "match",
            SceneKind::Settings => "settings",
            SceneKind::Pause => "pause",
            SceneKind::Countdown => "countdown",
            SceneKind::Dialogue => "dialogue",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives the input drained for the current tick
pub trait EventHandler {
    fn events(&mut self, events: &[InputEvent], ctx: &mut SceneContext);
}

/// Advances with elapsed time in milliseconds
pub trait Updatable {
    fn update(&mut self, dt: f32, ctx: &mut SceneContext);
}

pub trait Scene: EventHandler + Updatable + Renderable {
    fn kind(&self) -> SceneKind;

    /// Overlays are drawn on top of the scene beneath them
    fn is_overlay(&self) -> bool {
        false
    }
}

/// A stack change requested by a scene
pub enum SceneCommand {
    Push(Box<dyn Scene>),
    /// Same effect as `Push`: the current scene halts and stays beneath
    Replace(Box<dyn Scene>),
    Pop,
    ExitProgram,
}

impl fmt::Debug for SceneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneCommand::Push(scene) => write!(f, "Push({})", scene.kind()),
            SceneCommand::Replace(scene) => write!(f, "Replace({})", scene.kind()),
            SceneCommand::Pop => f.write_str("Pop"),
            SceneCommand::ExitProgram => f.write_str("ExitProgram"),
        }
    }
}

impl SceneCommand {
    /// Stack depth after applying `commands` to a stack of `depth` scenes
    pub fn resulting_depth(depth: usize, commands: &[SceneCommand]) -> usize {
        commands.iter().fold(depth, |depth, command| match command {
            SceneCommand::Push(_) | SceneCommand::Replace(_) => depth + 1,
            SceneCommand::Pop => depth.saturating_sub(1),
            SceneCommand::ExitProgram => 0,
        })
    }
}

/// Long-lived services shared by every scene
pub struct Services {
    pub audio: AudioContext,
    pub settings: SettingsStore,
    pub config: GameConfig,
}

impl Services {
    pub fn new(audio: AudioContext, settings: SettingsStore, config: GameConfig) -> Self {
        Services {
            audio,
            settings,
            config,
        }
    }

    pub fn context(&mut self) -> SceneContext<'_> {
        SceneContext {
            audio: &mut self.audio,
            settings: &self.settings,
            config: &self.config,
            commands: Vec::new(),
        }
    }
}

/// Per-tick handle given to the active scene
pub struct SceneContext<'a> {
    pub audio: &'a mut AudioContext,
    pub settings: &'a SettingsStore,
    pub config: &'a GameConfig,
    commands: Vec<SceneCommand>,
}

impl SceneContext<'_> {
    pub fn push(&mut self, scene: impl Scene + 'static) {
        self.commands.push(SceneCommand::Push(Box::new(scene)));
    }

    pub fn replace(&mut self, scene: impl Scene + 'static) {
        self.commands.push(SceneCommand::Replace(Box::new(scene)));
    }

    pub fn pop(&mut self) {
        self.commands.push(SceneCommand::Pop);
    }

    pub fn exit_program(&mut self) {
        self.commands.push(SceneCommand::ExitProgram);
    }

    /// Commands queued so far this tick
    pub fn pending(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<SceneCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    struct Dummy;

    impl EventHandler for Dummy {
        fn events(&mut self, _events: &[InputEvent], _ctx: &mut SceneContext) {}
    }

    impl Updatable for Dummy {
        fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) {}
    }

    impl Renderable for Dummy {
        fn render(&self, _surface: &mut dyn Surface) -> Result<(), String> {
            Ok(())
        }
    }

    impl Scene for Dummy {
        fn kind(&self) -> SceneKind {
            SceneKind::Match
        }
    }

    #[test]
    fn test_overlay_defaults_to_false() {
        assert!(!Dummy.is_overlay());
    }

    #[test]
    fn test_resulting_depth() {
        let commands = vec![
            SceneCommand::Pop,
            SceneCommand::Push(Box::new(Dummy)),
            SceneCommand::Replace(Box::new(Dummy)),
        ];
        assert_eq!(SceneCommand::resulting_depth(2, &commands), 3);
        assert_eq!(SceneCommand::resulting_depth(0, &[SceneCommand::Pop]), 0);
        assert_eq!(
            SceneCommand::resulting_depth(4, &[SceneCommand::ExitProgram]),
            0
        );
    }

    #[test]
    fn test_context_queues_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut services = Services::new(
            AudioContext::muted(0.5),
            SettingsStore::new(dir.path().join("settings.json")),
            GameConfig::default(),
        );

        let mut ctx = services.context();
        ctx.pop();
        ctx.push(Dummy);
        ctx.exit_program();
        assert_eq!(
            format!("{:?}", ctx.pending()),
            "[Pop, Push(match), ExitProgram]"
        );
        assert_eq!(ctx.into_commands().len(), 3);
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<&str> = SceneKind::all().iter().map(|k| k.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
