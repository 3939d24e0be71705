//! Where level text comes from.

use std::path::{Path, PathBuf};

use platformer_engine::{LevelError, LevelResult};

/// A source of level descriptor text. Read again on every restart.
pub trait LevelSource {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Fetch the full level text.
    fn load(&mut self) -> LevelResult<String>;
}

/// A level stored in a text file on disk.
#[derive(Debug, Clone)]
pub struct FileLevel {
    path: PathBuf,
    name: String,
}

impl FileLevel {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl LevelSource for FileLevel {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&mut self) -> LevelResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| LevelError::Unavailable {
            name: self.name.clone(),
            source,
        })
    }
}

/// A level held in memory, e.g. embedded with `include_str!` or built in tests.
#[derive(Debug, Clone)]
pub struct TextLevel {
    name: String,
    text: String,
}

impl TextLevel {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl LevelSource for TextLevel {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&mut self) -> LevelResult<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_level_reads_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Block 0 550 800 50").unwrap();
        let mut source = FileLevel::new(file.path());
        assert_eq!(source.load().unwrap(), "Block 0 550 800 50\n");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = FileLevel::new(dir.path().join("Map.txt"));
        match source.load() {
            Err(LevelError::Unavailable { name, .. }) => assert!(name.ends_with("Map.txt")),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
}
