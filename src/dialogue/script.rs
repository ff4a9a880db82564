//! Dialogue script file format

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One line of dialogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub text: String,

    /// Speaker name shown above the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Image path for the speaker portrait
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,

    /// Reveal speed override in characters per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl DialogueLine {
    pub fn new(text: &str) -> Self {
        DialogueLine {
            text: text.to_string(),
            name: None,
            portrait: None,
            speed: None,
        }
    }

    /// Length in characters, not bytes
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueScript {
    #[serde(default)]
    pub lines: Vec<DialogueLine>,
}

#[derive(Debug)]
pub enum DialogueError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for DialogueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogueError::Io(e) => write!(f, "IO error: {}", e),
            DialogueError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for DialogueError {}

impl From<std::io::Error> for DialogueError {
    fn from(err: std::io::Error) -> Self {
        DialogueError::Io(err)
    }
}

impl From<serde_json::Error> for DialogueError {
    fn from(err: serde_json::Error) -> Self {
        DialogueError::Parse(err)
    }
}

impl DialogueScript {
    pub fn from_json(json: &str) -> Result<Self, DialogueError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DialogueError> {
        let path = path.as_ref();
        let script = DialogueScript::from_json(&fs::read_to_string(path)?)?;
        log::debug!("Loaded {} dialogue line(s) from {}", script.lines.len(), path.display());
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields() {
        let script = DialogueScript::from_json(
            r#"{ "lines": [
                { "text": "Hola", "name": "Coach", "portrait": "portraits/coach.png", "speed": 20 },
                { "text": "Ready?" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[0].name.as_deref(), Some("Coach"));
        assert_eq!(script.lines[0].speed, Some(20.0));
        assert_eq!(script.lines[1], DialogueLine::new("Ready?"));
    }

    #[test]
    fn test_missing_lines_is_empty() {
        let script = DialogueScript::from_json("{}").unwrap();
        assert!(script.lines.is_empty());
    }

    #[test]
    fn test_line_without_text_is_rejected() {
        let result = DialogueScript::from_json(r#"{ "lines": [ { "name": "Coach" } ] }"#);
        assert!(matches!(result, Err(DialogueError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = DialogueScript::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(DialogueError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intro.json");
        fs::write(&path, r#"{ "lines": [ { "text": "¡Gol!" } ] }"#).unwrap();

        let script = DialogueScript::load(&path).unwrap();
        assert_eq!(script.lines[0].char_count(), 5);
    }
}
