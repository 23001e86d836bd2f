pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Document, Value, ValueKind};
pub use error::TomlError;
pub use config::{parse, ConfigNode, Table, TomlConfig};
