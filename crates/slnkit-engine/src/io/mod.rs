pub mod project_file;

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use slnkit_config::{LineEndingSetting, SaveConfig};

pub use project_file::{ProjectFile, ProjectFileLoader};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    CrLf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// How lines are written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    pub line_ending: LineEnding,
    pub byte_order_mark: bool,
}

impl Default for SaveOptions {
    /// CRLF and a byte order mark, as the toolchain writes manifests
    fn default() -> Self {
        Self {
            line_ending: LineEnding::CrLf,
            byte_order_mark: true,
        }
    }
}

impl From<&SaveConfig> for SaveOptions {
    fn from(config: &SaveConfig) -> Self {
        Self {
            line_ending: match config.line_ending {
                LineEndingSetting::Crlf => LineEnding::CrLf,
                LineEndingSetting::Lf => LineEnding::Lf,
            },
            byte_order_mark: config.byte_order_mark,
        }
    }
}

/// Where manifest lines come from and go to.
pub trait TextStorage {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, IoError>;

    fn write_lines(
        &self,
        path: &Path,
        lines: &[String],
        line_ending: LineEnding,
        byte_order_mark: bool,
    ) -> Result<(), IoError>;
}

/// [`TextStorage`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTextStorage;

impl TextStorage for FsTextStorage {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, IoError> {
        if !path.exists() {
            return Err(IoError::NotFound(path.to_path_buf()));
        }

        let mut bytes = Vec::new();
        File::open(path)?.read_to_end(&mut bytes)?;

        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        let text =
            std::str::from_utf8(body).map_err(|_| IoError::InvalidEncoding(path.to_path_buf()))?;

        Ok(split_lines(text))
    }

    fn write_lines(
        &self,
        path: &Path,
        lines: &[String],
        line_ending: LineEnding,
        byte_order_mark: bool,
    ) -> Result<(), IoError> {
        let mut writer = BufWriter::new(File::create(path)?);
        if byte_order_mark {
            writer.write_all(UTF8_BOM)?;
        }
        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(line_ending.as_str().as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Split on LF or CRLF. A trailing terminator does not produce an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
