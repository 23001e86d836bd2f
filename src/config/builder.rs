use indexmap::map::Entry;

use super::node::{ConfigNode, Table};
use crate::ast::{Document, KeyValue};
use crate::TomlError;

const ROOT_PATH: &str = "(root)";

/// Materialize a parsed document into a tree.
///
/// Root values go in first, then every section in source order. Nothing is
/// ever overwritten: a repeated key or a value reused as a key group fails.
pub(crate) fn build(document: Document) -> Result<Table, TomlError> {
    let mut root = Table::new();
    insert_values(&mut root, document.root_values, ROOT_PATH)?;

    for section in document.sections {
        let path = section.path.join(".");
        let group = resolve_group(&mut root, &section.path)?;
        insert_values(group, section.values, &path)?;
    }

    Ok(root)
}

fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.join(".")
    }
}

/// Find the table for `path`, creating missing key groups on the way.
fn resolve_group<'t>(root: &'t mut Table, path: &[String]) -> Result<&'t mut Table, TomlError> {
    let mut current = root;

    for (depth, segment) in path.iter().enumerate() {
        let node = match current.entries_mut().entry(segment.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::trace!("creating key group {}", path[..=depth].join("."));
                entry.insert(ConfigNode::Table(Table::new()))
            }
        };

        current = match node {
            ConfigNode::Table(table) => table,
            ConfigNode::Value(_) => {
                return Err(TomlError::KeyGroupConflict {
                    key: segment.clone(),
                    path: dotted(&path[..depth]),
                    hint: Some(format!("'{}' holds a value, so [{}] cannot be a key group", segment, path.join("."))),
                    code: Some(311),
                });
            }
        };
    }

    Ok(current)
}

fn insert_values(table: &mut Table, values: Vec<KeyValue>, path: &str) -> Result<(), TomlError> {
    for KeyValue { key, value, line } in values {
        match table.entries_mut().entry(key) {
            Entry::Occupied(entry) => {
                return Err(TomlError::DuplicateKey {
                    key: entry.key().clone(),
                    path: path.to_string(),
                    hint: Some(format!("Second definition is on line {}", line)),
                    code: Some(310),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(ConfigNode::Value(value));
            }
        }
    }
    Ok(())
}
