use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::Value;

/// One entry of the configuration tree: a value, or a nested key group.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Value(Value),
    Table(Table),
}

/// An insertion-ordered mapping from keys to nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    entries: IndexMap<String, ConfigNode>,
}

impl ConfigNode {
    pub fn as_value(&self) -> Option<&Value> {
        if let ConfigNode::Value(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        if let ConfigNode::Table(table) = self {
            Some(table)
        } else {
            None
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, ConfigNode::Table(_))
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            ConfigNode::Value(value) => value.kind().to_string(),
            ConfigNode::Table(_) => "key group".to_string(),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.entries.get(key)
    }

    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(ConfigNode::as_value)
    }

    pub fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(ConfigNode::as_table)
    }

    /// Walk nested key groups segment by segment.
    ///
    /// Unlike dotted accessor paths this can reach keys that contain dots.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&ConfigNode> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for segment in parents {
            current = current.get_table(segment.as_ref())?;
        }
        current.get(last.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, ConfigNode> {
        self.entries.iter()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut IndexMap<String, ConfigNode> {
        &mut self.entries
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a ConfigNode);
    type IntoIter = Iter<'a, String, ConfigNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
