use chrono::{DateTime, Utc};

use super::*;

impl TomlConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use toml_cfg::TomlConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TomlConfig::from_str("[server]\nhost = \"localhost\"\nport = 8080")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// # assert_eq!((host.as_str(), port), ("localhost", 8080));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, TomlError>
    where
        T: TryFrom<Value, Error = TomlError>
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| {
            enhance_error_with_line_info(e, path, &self.raw_content)
        })
    }

    /// Get an optional typed value - returns `None` if key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, TomlError>
    where
        T: TryFrom<Value, Error = TomlError>
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(TomlError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = TomlError>
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the node at a dotted path, either a value or a key group.
    pub fn get_node(&self, path: &str) -> Result<&ConfigNode, TomlError> {
        let segments: Vec<&str> = path.split('.').collect();
        self.root.lookup(&segments).ok_or_else(|| TomlError::NotFound {
            path: path.to_string(),
            hint: Some("Check that the path exists in your config file".into()),
            code: Some(304),
        })
    }

    /// Get the raw `Value` at a dotted path.
    pub fn get_value(&self, path: &str) -> Result<&Value, TomlError> {
        match self.get_node(path)? {
            ConfigNode::Value(value) => Ok(value),
            node => Err(self.mismatch(path, "value", node)),
        }
    }

    pub fn get_string(&self, path: &str) -> Result<&str, TomlError> {
        match self.get_value(path)? {
            Value::String(s) => Ok(s.as_str()),
            other => Err(self.value_mismatch(path, "string", other)),
        }
    }

    pub fn get_int(&self, path: &str) -> Result<i64, TomlError> {
        match self.get_value(path)? {
            Value::Integer(n) => Ok(*n),
            other => Err(self.value_mismatch(path, "integer", other)),
        }
    }

    pub fn get_float(&self, path: &str) -> Result<f64, TomlError> {
        match self.get_value(path)? {
            Value::Float(n) => Ok(*n),
            other => Err(self.value_mismatch(path, "float", other)),
        }
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, TomlError> {
        match self.get_value(path)? {
            Value::Boolean(b) => Ok(*b),
            other => Err(self.value_mismatch(path, "boolean", other)),
        }
    }

    pub fn get_datetime(&self, path: &str) -> Result<DateTime<Utc>, TomlError> {
        match self.get_value(path)? {
            Value::DateTime(dt) => Ok(*dt),
            other => Err(self.value_mismatch(path, "datetime", other)),
        }
    }

    pub fn get_array(&self, path: &str) -> Result<&[Value], TomlError> {
        match self.get_value(path)? {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(self.value_mismatch(path, "array", other)),
        }
    }

    /// Get the key group at a dotted path; an empty path is the root.
    pub fn get_table(&self, path: &str) -> Result<&Table, TomlError> {
        if path.trim().is_empty() {
            return Ok(&self.root);
        }
        match self.get_node(path)? {
            ConfigNode::Table(table) => Ok(table),
            node => Err(self.mismatch(path, "key group", node)),
        }
    }

    /// Get all keys of the key group at `path`, in source order.
    ///
    /// # Examples
    /// ```
    /// # use toml_cfg::TomlConfig;
    /// let config = TomlConfig::from_str("[servers.alpha]\n[servers.beta]").unwrap();
    /// assert_eq!(config.get_keys("servers").unwrap(), vec!["alpha", "beta"]);
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, TomlError> {
        let table = self.get_table(path)?;
        Ok(table.keys().map(str::to_string).collect())
    }

    /// Check if a configuration path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_node(path).is_ok()
    }

    fn mismatch(&self, path: &str, expected: &str, node: &ConfigNode) -> TomlError {
        let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
        TomlError::TypeError {
            message: format!("Path '{}' is a {}, not a {}", path, node.type_name(), expected),
            line,
            hint: (line > 0).then(|| format!("Defined at: {}", snippet)),
            code: Some(306),
        }
    }

    fn value_mismatch(&self, path: &str, expected: &str, value: &Value) -> TomlError {
        let (line, snippet) = helpers::find_config_line(path, &self.raw_content);
        TomlError::TypeError {
            message: format!("Expected {} at '{}', got {} {}", expected, path, value.kind(), value),
            line,
            hint: (line > 0).then(|| format!("Defined at: {}", snippet)),
            code: Some(407),
        }
    }
}

/// Enhance type errors with line number information from the config file.
fn enhance_error_with_line_info(e: TomlError, path: &str, raw_content: &str) -> TomlError {
    match e {
        TomlError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                TomlError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                TomlError::TypeError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
