use std::fmt;

/// The main error type for TOML lexing, parsing and tree building.
#[derive(Debug, Clone, PartialEq)]
pub enum TomlError {
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedEof {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a string literal is not closed before the end of its line.
    UnclosedString {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for a backslash escape outside `\0 \t \n \r \" \\`.
    InvalidEscape {
        sequence: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a numeric literal does not fit its type.
    OutOfRange {
        literal: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the elements of an array do not share one kind.
    MixedArray {
        expected: String,
        found: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    DuplicateKey {
        key: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a key bound to a value is reused as a key group segment.
    KeyGroupConflict {
        key: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    RuntimeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl TomlError {
    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            TomlError::SyntaxError { line, .. }
            | TomlError::UnexpectedEof { line, .. }
            | TomlError::UnclosedString { line, .. }
            | TomlError::InvalidEscape { line, .. }
            | TomlError::OutOfRange { line, .. }
            | TomlError::MixedArray { line, .. } => Some(*line),
            TomlError::TypeError { line, .. } if *line > 0 => Some(*line),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            TomlError::SyntaxError { code, .. }
            | TomlError::UnexpectedEof { code, .. }
            | TomlError::UnclosedString { code, .. }
            | TomlError::InvalidEscape { code, .. }
            | TomlError::OutOfRange { code, .. }
            | TomlError::MixedArray { code, .. }
            | TomlError::DuplicateKey { code, .. }
            | TomlError::KeyGroupConflict { code, .. }
            | TomlError::NotFound { code, .. }
            | TomlError::TypeError { code, .. }
            | TomlError::FileError { code, .. }
            | TomlError::RuntimeError { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlError::SyntaxError { message, line, column, hint, code } =>
                write!(f, "[TOML] Syntax Error at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            TomlError::UnexpectedEof { message, line, column, hint, code } =>
                write!(f, "[TOML] Unexpected EOF at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            TomlError::UnclosedString { line, column, hint, code } =>
                write!(f, "[TOML] Unclosed string starting at {}:{}{}",
                    line, column, suffix(hint, code)),
            TomlError::InvalidEscape { sequence, line, column, hint, code } =>
                write!(f, "[TOML] Invalid escape sequence '{}' at {}:{}{}",
                    sequence, line, column, suffix(hint, code)),
            TomlError::OutOfRange { literal, line, column, hint, code } =>
                write!(f, "[TOML] Value '{}' out of range at {}:{}{}",
                    literal, line, column, suffix(hint, code)),
            TomlError::MixedArray { expected, found, line, column, hint, code } =>
                write!(f, "[TOML] Mixed array at {}:{}: expected {}, found {}{}",
                    line, column, expected, found, suffix(hint, code)),
            TomlError::DuplicateKey { key, path, hint, code } =>
                write!(f, "[TOML] Duplicate key '{}' under key group {}{}",
                    key, path, suffix(hint, code)),
            TomlError::KeyGroupConflict { key, path, hint, code } =>
                write!(f, "[TOML] Key '{}' under {} already defined, cannot be used as a key group{}",
                    key, path, suffix(hint, code)),
            TomlError::NotFound { path, hint, code } =>
                write!(f, "[TOML] Path '{}' not found{}",
                    path, suffix(hint, code)),
            TomlError::TypeError { message, line, hint, code } => {
                if *line > 0 {
                    write!(f, "[TOML] Type Error at line {}: {}{}", line, message, suffix(hint, code))
                } else {
                    write!(f, "[TOML] Type Error: {}{}", message, suffix(hint, code))
                }
            }
            TomlError::FileError { message, path, hint, code } =>
                write!(f, "[TOML] File Error '{}': {}{}",
                    path, message, suffix(hint, code)),
            TomlError::RuntimeError { message, hint, code } =>
                write!(f, "[TOML] Runtime Error: {}{}", message, suffix(hint, code)),
        }
    }
}

impl std::error::Error for TomlError {}
