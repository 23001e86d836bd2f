// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ast::Value;
use crate::lexer;
use crate::parser::Parser;
use crate::TomlError;

mod access;
mod builder;
mod conversion;
mod helpers;
mod node;

pub use node::{ConfigNode, Table};

/// Parse TOML text into a tree: comment stripping, grammar, tree building.
pub fn parse(content: &str) -> Result<Table, TomlError> {
    let stripped = lexer::strip_comments(content);
    let document = Parser::new(&stripped).parse_document()?;

    log::debug!(
        "parsed {} root values and {} key groups",
        document.root_values.len(),
        document.sections.len()
    );

    builder::build(document)
}

/// A parsed TOML configuration with typed, path-based access.
pub struct TomlConfig {
    root: Table,
    raw_content: String, // Store for error reporting
}

impl TomlConfig {
    /// Parse a TOML config from a string.
    ///
    /// # Example
    /// ```
    /// # use toml_cfg::TomlConfig;
    /// let config = TomlConfig::from_str("[server]\nport = 8080").unwrap();
    /// assert_eq!(config.get_int("server.port").unwrap(), 8080);
    /// ```
    pub fn from_str(content: &str) -> Result<Self, TomlError> {
        let root = parse(content)?;
        Ok(Self {
            root,
            raw_content: content.to_string(),
        })
    }

    /// Read everything from `reader` and parse it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TomlError> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| TomlError::FileError {
            message: format!("Failed to read input: {}", e),
            path: "<reader>".into(),
            hint: Some("Input must be valid UTF-8".into()),
            code: Some(301),
        })?;
        Self::from_str(&content)
    }

    /// Load a TOML config file. A leading `~/` is expanded to the home directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TomlError> {
        let path = expand_path(path.as_ref())?;

        let content = fs::read_to_string(&path).map_err(|e| TomlError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        log::debug!("loaded {} ({} bytes)", path.display(), content.len());
        Self::from_str(&content)
    }

    pub fn root(&self) -> &Table {
        &self.root
    }

    pub fn into_table(self) -> Table {
        self.root
    }
}

/// Expand "~/" against the home directory.
fn expand_path(raw_path: &Path) -> Result<PathBuf, TomlError> {
    let Some(rest) = raw_path.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(raw_path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| TomlError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw_path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}
