//! Typewriter-style progression through a dialogue script

use super::script::{DialogueLine, DialogueScript};

/// Characters revealed per second when a line sets no speed
pub const DEFAULT_REVEAL_SPEED: f32 = 40.0;

/// Outcome of [`DialogueManager::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current line was still typing and is now fully shown
    Continued,
    /// Moved on to the next line
    Next,
    /// There are no more lines
    Finished,
}

#[derive(Debug, Clone)]
pub struct DialogueManager {
    script: DialogueScript,
    default_speed: f32,
    current: usize,
    char_index: f32,
    done: bool,
}

impl DialogueManager {
    pub fn new(script: DialogueScript) -> Self {
        DialogueManager::with_speed(script, DEFAULT_REVEAL_SPEED)
    }

    pub fn with_speed(script: DialogueScript, default_speed: f32) -> Self {
        DialogueManager {
            script,
            default_speed,
            current: 0,
            char_index: 0.0,
            done: false,
        }
    }

    pub fn current_line(&self) -> Option<&DialogueLine> {
        self.script.lines.get(self.current)
    }

    pub fn line_index(&self) -> usize {
        self.current
    }

    pub fn char_index(&self) -> f32 {
        self.char_index
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Reveals more of the current line; `dt` is in seconds
    pub fn update(&mut self, dt: f32) {
        let Some(line) = self.current_line() else {
            self.done = true;
            return;
        };

        let speed = line.speed.unwrap_or(self.default_speed);
        let len = line.char_count() as f32;
        self.char_index = (self.char_index + speed * dt).min(len);
    }

    /// The revealed prefix of the current line
    pub fn shown_text(&self) -> &str {
        let Some(line) = self.current_line() else {
            return "";
        };

        let shown = self.char_index as usize;
        match line.text.char_indices().nth(shown) {
            Some((byte, _)) => &line.text[..byte],
            None => &line.text,
        }
    }

    pub fn is_line_complete(&self) -> bool {
        match self.current_line() {
            Some(line) => self.char_index as usize >= line.char_count(),
            None => true,
        }
    }

    /// Skips the typing of the current line, or moves to the next one
    pub fn advance(&mut self) -> Advance {
        let Some(line) = self.current_line() else {
            self.done = true;
            return Advance::Finished;
        };

        if !self.is_line_complete() {
            self.char_index = line.char_count() as f32;
            return Advance::Continued;
        }

        self.current += 1;
        self.char_index = 0.0;
        if self.current >= self.script.lines.len() {
            self.done = true;
            Advance::Finished
        } else {
            Advance::Next
        }
    }
}
