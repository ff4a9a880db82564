//! Director: the scene stack and the frame loop
//!
//! The top of the stack is the active scene. Each tick it receives the
//! drained input, updates, and renders; when it is an overlay, the scene
//! directly beneath it is rendered first (but not updated). Stack changes
//! requested during a tick are applied after that tick's render, so a frame
//! always shows the stack as it was when the tick began.

use crate::input::InputEvent;
use crate::scene::{Scene, SceneCommand, SceneKind, Services};
use crate::surface::Surface;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorError {
    /// A halt was requested on a scene this director was not set up to run
    UnrecognizedScene(SceneKind),
}

impl fmt::Display for DirectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectorError::UnrecognizedScene(kind) => {
                write!(f, "Unrecognized scene: {}", kind)
            }
        }
    }
}

impl std::error::Error for DirectorError {}

/// Window, input and presentation, as seen by the frame loop
pub trait Backend {
    /// Drains pending input
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Drops pending input without translating it
    fn clear_events(&mut self);

    fn surface(&mut self) -> &mut dyn Surface;

    /// Shows the finished frame and prepares the next one
    fn present(&mut self);
}

/// Frame limiter: sleeps out the rest of each frame and reports elapsed time
pub struct FrameClock {
    frame: Duration,
    max_frame_ms: f32,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, max_frame_ms: f32) -> Self {
        FrameClock {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            max_frame_ms,
            last: Instant::now(),
        }
    }

    /// Restarts timing so the next tick does not include idle time
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Waits for the frame to end and returns milliseconds since the last tick.
    ///
    /// The result is capped at `max_frame_ms` so a stall (window drag,
    /// debugger pause) does not arrive as one huge step; normal frames report
    /// their real duration, which is at least the 1000/fps target.
    pub fn tick(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if now < target {
            thread::sleep(target - now);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        (elapsed.as_secs_f32() * 1000.0).min(self.max_frame_ms)
    }
}

pub struct Director {
    stack: Vec<Box<dyn Scene>>,
    halted: bool,
    accepted: Vec<SceneKind>,
}

impl Default for Director {
    fn default() -> Self {
        Director::new()
    }
}

impl Director {
    /// A director that can run every scene kind
    pub fn new() -> Self {
        Director::accepting(&SceneKind::all())
    }

    /// A director restricted to the given scene kinds
    pub fn accepting(kinds: &[SceneKind]) -> Self {
        Director {
            stack: Vec::new(),
            halted: false,
            accepted: kinds.to_vec(),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&dyn Scene> {
        self.stack.last().map(|s| s.as_ref())
    }

    /// Kinds on the stack, bottom first
    pub fn kinds(&self) -> Vec<SceneKind> {
        self.stack.iter().map(|s| s.kind()).collect()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Signals the active scene's loop to stop
    fn halt(&mut self) -> Result<(), DirectorError> {
        if let Some(top) = self.stack.last() {
            let kind = top.kind();
            if !self.accepted.contains(&kind) {
                log::error!("Cannot halt {}: not a scene this director runs", kind);
                return Err(DirectorError::UnrecognizedScene(kind));
            }
        }
        self.halted = true;
        Ok(())
    }

    /// Halts the active scene and makes `scene` active from the next tick
    pub fn push(&mut self, scene: Box<dyn Scene>) -> Result<(), DirectorError> {
        self.halt()?;
        log::debug!("Push {}", scene.kind());
        self.stack.push(scene);
        Ok(())
    }

    /// Identical to [`push`](Self::push); the previous scene stays beneath
    pub fn replace(&mut self, scene: Box<dyn Scene>) -> Result<(), DirectorError> {
        self.push(scene)
    }

    /// Halts and removes the active scene
    pub fn pop(&mut self) -> Result<Option<Box<dyn Scene>>, DirectorError> {
        self.halt()?;
        let popped = self.stack.pop();
        if let Some(scene) = &popped {
            log::debug!("Pop {}", scene.kind());
        }
        Ok(popped)
    }

    /// Halts the active scene and clears the whole stack
    pub fn exit_program(&mut self) -> Result<(), DirectorError> {
        self.halt()?;
        log::info!("Exiting, dropping {} scene(s)", self.stack.len());
        self.stack.clear();
        Ok(())
    }

    pub fn apply(&mut self, commands: Vec<SceneCommand>) -> Result<(), DirectorError> {
        for command in commands {
            match command {
                SceneCommand::Push(scene) => self.push(scene)?,
                SceneCommand::Replace(scene) => self.replace(scene)?,
                SceneCommand::Pop => {
                    self.pop()?;
                }
                SceneCommand::ExitProgram => self.exit_program()?,
            }
        }
        Ok(())
    }

    /// Renders the top scene, with the one beneath first if the top is an overlay
    ///
    /// Render faults are logged and the frame continues.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Some(top) = self.stack.last() else {
            return;
        };

        if top.is_overlay() && self.stack.len() > 1 {
            let beneath = &self.stack[self.stack.len() - 2];
            if let Err(e) = beneath.render(surface) {
                log::error!("Rendering {} failed: {}", beneath.kind(), e);
            }
        }

        if let Err(e) = top.render(surface) {
            log::error!("Rendering {} failed: {}", top.kind(), e);
        }
    }

    /// One frame: events, update, render, then the requested stack changes
    pub fn tick(
        &mut self,
        events: &[InputEvent],
        dt: f32,
        surface: &mut dyn Surface,
        services: &mut Services,
    ) -> Result<(), DirectorError> {
        if events.contains(&InputEvent::Quit) {
            return self.exit_program();
        }

        let Some(top) = self.stack.last_mut() else {
            return Ok(());
        };

        let mut ctx = services.context();
        top.events(events, &mut ctx);
        top.update(dt, &mut ctx);
        let commands = ctx.into_commands();

        if SceneCommand::resulting_depth(self.stack.len(), &commands) > 0 {
            self.render(surface);
        }

        self.apply(commands)
    }

    /// Runs until the stack is empty
    pub fn run<B: Backend>(
        &mut self,
        backend: &mut B,
        services: &mut Services,
    ) -> Result<(), DirectorError> {
        let mut clock = FrameClock::new(services.config.fps, services.config.max_frame_ms);

        while let Some(top) = self.stack.last() {
            log::debug!("Running {} (depth {})", top.kind(), self.stack.len());
            self.halted = false;
            backend.clear_events();
            clock.reset();

            while !self.halted {
                let dt = clock.tick();
                let events = backend.poll_events();
                self.tick(&events, dt, backend.surface(), services)?;
                backend.present();
            }
        }

        log::info!("Scene stack empty");
        Ok(())
    }
}
