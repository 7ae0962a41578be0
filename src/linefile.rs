//! Line-oriented access to one text file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineFileError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(windows)]
const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEP: &str = "\n";

/// A text file read and rewritten whole, line by line.
#[derive(Debug, Clone)]
pub struct LineFile {
    path: PathBuf,
}

impl LineFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Trimmed, non-blank lines. NotFound when the file is missing.
    pub fn read_lines(&self) -> Result<Vec<String>, LineFileError> {
        if !self.path.is_file() {
            return Err(LineFileError::NotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Raw file content, for display. NotFound when the file is missing.
    pub fn content(&self) -> Result<String, LineFileError> {
        if !self.path.is_file() {
            return Err(LineFileError::NotFound(self.path.clone()));
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Replace the whole file with the given lines. The full content is
    /// prepared in memory, then written in a single pass to a freshly
    /// truncated file under an exclusive lock; readers never see a
    /// half-written result.
    pub fn write_lines<I>(&self, lines: I) -> Result<(), LineFileError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push_str(LINE_SEP);
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        fs2::FileExt::lock_exclusive(&file)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Append lines after the existing content. Implemented as read-all
    /// plus write-all so the replace discipline matches write_lines. A
    /// missing file counts as empty and gets created.
    pub fn append_lines<I>(&self, lines: I) -> Result<(), LineFileError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut all = match self.read_lines() {
            Ok(existing) => existing,
            Err(LineFileError::NotFound(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        all.extend(lines);
        self.write_lines(all)
    }
}
