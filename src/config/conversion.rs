// Author: Dustin Pilgrim
// License: MIT

use chrono::{DateTime, Utc};

use crate::{TomlError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> TomlError {
    TomlError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.kind(), value),
        line: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Use a quoted string in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            _ => Err(type_error("float", &value, "Floats need a decimal point, e.g. 1.0", 402)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_error("integer", &value, "Use a whole number in your config", 402)),
        }
    }
}

// Narrower integers go through i64 and fail when the value does not fit.
macro_rules! narrow_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = TomlError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| TomlError::TypeError {
                        message: format!("Value {} does not fit in {}", n, stringify!($ty)),
                        line: 0,
                        hint: Some(format!(
                            "Use a value between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(403),
                    })
                }
            }
        )*
    };
}

narrow_integer!(i32, u16, u32, u64);

impl TryFrom<Value> for bool {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(type_error("boolean", &value, "Use true or false", 404)),
        }
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(dt) => Ok(dt),
            _ => Err(type_error("datetime", &value, "Datetimes look like 1979-05-27T07:32:00Z", 406)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = TomlError>,
{
    type Error = TomlError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) => arr.into_iter().map(T::try_from).collect(),
            _ => Err(type_error("array", &value, "Use an array [...] in your config", 405)),
        }
    }
}
