//! Raw record reader.
//!
//! [`Fields`] wraps one mapping from the input document. Each typed getter
//! removes its field (under either spelling), coerces and checks the value,
//! and trims strings. Whatever is left when the record is done is returned
//! by [`Fields::finish`] and carried through to the output unchanged.

use std::fmt;
use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;
use serde_json::{Map, Value};

use super::alias::to_external;
use super::error::ValidationError;
use super::net::parse_subnet;

/// Unrecognized key/value pairs of a record, emitted as given.
pub type Extra = Map<String, Value>;

const TRUE_WORDS: &[&str] = &["1", "on", "t", "true", "y", "yes"];
const FALSE_WORDS: &[&str] = &["0", "off", "f", "false", "n", "no"];

/// Location of a value in the configuration tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    /// Path of a top-level block.
    #[must_use]
    pub fn root(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Path of a named child. Children of the empty root are bare keys.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of a list element.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(document)")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

/// A configuration record that can be built from a raw mapping.
pub trait FromFields: Sized {
    /// Builds the record, consuming the fields it knows.
    ///
    /// # Errors
    ///
    /// Returns the first constraint the input violates.
    fn from_fields(fields: Fields) -> Result<Self, ValidationError>;

    /// Builds the record from a raw value located at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a mapping or fails validation.
    fn from_value(value: &Value, path: FieldPath) -> Result<Self, ValidationError> {
        Self::from_fields(Fields::from_value(value, path)?)
    }
}

/// Reader over one raw mapping.
#[derive(Debug)]
pub struct Fields {
    path: FieldPath,
    map: Map<String, Value>,
}

impl Fields {
    /// Wraps `value`, which must be a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] for any other JSON type.
    pub fn from_value(value: &Value, path: FieldPath) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self {
                path,
                map: map.clone(),
            }),
            other => Err(ValidationError::NotAnObject {
                path: path.into(),
                found: kind(other),
            }),
        }
    }

    /// Path of the record itself.
    #[must_use]
    pub const fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Path of one of the record's fields.
    #[must_use]
    pub fn path_of(&self, field: &str) -> FieldPath {
        self.path.child(&to_external(field))
    }

    /// Removes a field given in either spelling. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateField`] if both spellings are present.
    pub fn take(&mut self, field: &str) -> Result<Option<Value>, ValidationError> {
        let external = to_external(field);
        let internal_value = self.map.remove(field);
        let external_value = if external == field {
            None
        } else {
            self.map.remove(&*external)
        };

        match (internal_value, external_value) {
            (Some(_), Some(_)) => Err(ValidationError::DuplicateField {
                path: self.path_of(field).into(),
                internal: field.to_string(),
                external: external.into_owned(),
            }),
            (value, None) | (None, value) => Ok(value.filter(|v| !v.is_null())),
        }
    }

    /// Fails with [`ValidationError::MissingField`] when `value` is `None`.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn require<T>(&self, field: &str, value: Option<T>) -> Result<T, ValidationError> {
        value.ok_or_else(|| ValidationError::MissingField {
            path: self.path_of(field).into(),
        })
    }

    /// Reads a string, trimmed. Numbers are accepted and rendered as text.
    ///
    /// # Errors
    ///
    /// Returns an error for any other type.
    pub fn string(&mut self, field: &str) -> Result<Option<String>, ValidationError> {
        let path = self.path_of(field);
        self.take(field)?
            .map(|v| coerce_string(&v, &path))
            .transpose()
    }

    /// Reads a string restricted to `allowed`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidChoice`] for values outside the set.
    pub fn choice(
        &mut self,
        field: &str,
        allowed: &'static [&'static str],
    ) -> Result<Option<String>, ValidationError> {
        let path = self.path_of(field);
        match self.string(field)? {
            Some(value) if !allowed.contains(&value.as_str()) => {
                Err(ValidationError::InvalidChoice {
                    path: path.into(),
                    value,
                    allowed,
                })
            }
            other => Ok(other),
        }
    }

    /// Reads a non-negative 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns an error for non-integers and values outside `0..=u32::MAX`.
    pub fn non_negative(&mut self, field: &str) -> Result<Option<u32>, ValidationError> {
        self.bounded(field, 0, u32::MAX.into(), "must be a non-negative 32-bit integer")
            .map(|v| v.and_then(|n| u32::try_from(n).ok()))
    }

    /// Reads a positive 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns an error for non-integers and values outside `1..=u32::MAX`.
    pub fn positive(&mut self, field: &str) -> Result<Option<u32>, ValidationError> {
        self.bounded(field, 1, u32::MAX.into(), "must be a positive 32-bit integer")
            .map(|v| v.and_then(|n| u32::try_from(n).ok()))
    }

    /// Reads an integer within `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when the bound is violated.
    pub fn bounded(
        &mut self,
        field: &str,
        min: i64,
        max: i64,
        rule: &'static str,
    ) -> Result<Option<i64>, ValidationError> {
        let path = self.path_of(field);
        let Some(value) = self.take(field)? else {
            return Ok(None);
        };

        let n = coerce_integer(&value, &path)?;
        match i64::try_from(n) {
            Ok(n) if (min..=max).contains(&n) => Ok(Some(n)),
            _ => Err(ValidationError::OutOfRange {
                path: path.into(),
                value: n.to_string(),
                rule,
            }),
        }
    }

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// Returns an error for values that are not recognizably true or false.
    pub fn bool(&mut self, field: &str) -> Result<Option<bool>, ValidationError> {
        let path = self.path_of(field);
        self.take(field)?
            .map(|v| coerce_bool(&v, &path))
            .transpose()
    }

    /// Reads an IPv4 address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] for unparseable values.
    pub fn ipv4(&mut self, field: &str) -> Result<Option<Ipv4Addr>, ValidationError> {
        let path = self.path_of(field);
        self.take(field)?
            .map(|v| coerce_ipv4(&v, &path))
            .transpose()
    }

    /// Reads an IPv4 network in prefix or netmask notation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidNetwork`] for unparseable values.
    pub fn network(&mut self, field: &str) -> Result<Option<Ipv4Network>, ValidationError> {
        let path = self.path_of(field);
        let Some(text) = self.string(field)? else {
            return Ok(None);
        };

        parse_subnet(&text)
            .map(Some)
            .map_err(|reason| ValidationError::InvalidNetwork {
                path: path.into(),
                value: text,
                reason,
            })
    }

    /// Reads a list of strings, each trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a list or an entry is not a string.
    pub fn string_list(&mut self, field: &str) -> Result<Option<Vec<String>>, ValidationError> {
        self.list(field, coerce_string)
    }

    /// Reads a list of IPv4 addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a list or an entry is not an address.
    pub fn ipv4_list(&mut self, field: &str) -> Result<Option<Vec<Ipv4Addr>>, ValidationError> {
        self.list(field, coerce_ipv4)
    }

    /// Reads a free-form mapping, kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] for any other type.
    pub fn object(&mut self, field: &str) -> Result<Option<Map<String, Value>>, ValidationError> {
        let path = self.path_of(field);
        match self.take(field)? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(ValidationError::NotAnObject {
                path: path.into(),
                found: kind(&other),
            }),
        }
    }

    /// Reads a nested record.
    ///
    /// # Errors
    ///
    /// Propagates the nested record's validation error.
    pub fn record<T: FromFields>(&mut self, field: &str) -> Result<Option<T>, ValidationError> {
        let path = self.path_of(field);
        self.take(field)?
            .map(|v| T::from_value(&v, path))
            .transpose()
    }

    /// Reads a list of nested records.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a list or any element fails validation.
    pub fn records<T: FromFields>(&mut self, field: &str) -> Result<Option<Vec<T>>, ValidationError> {
        self.list(field, |v, path| T::from_value(v, path.clone()))
    }

    /// Returns the fields no getter claimed.
    #[must_use]
    pub fn finish(self) -> Extra {
        self.map
    }

    fn list<T>(
        &mut self,
        field: &str,
        item: impl Fn(&Value, &FieldPath) -> Result<T, ValidationError>,
    ) -> Result<Option<Vec<T>>, ValidationError> {
        let path = self.path_of(field);
        match self.take(field)? {
            None => Ok(None),
            Some(Value::Array(values)) => values
                .iter()
                .enumerate()
                .map(|(i, v)| item(v, &path.index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(mismatch(&path, "a list", &other)),
        }
    }
}

/// JSON type name of a value.
#[must_use]
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

pub(crate) fn mismatch(path: &FieldPath, expected: &'static str, value: &Value) -> ValidationError {
    let found = match value {
        Value::String(s) => format!("'{s}'"),
        Value::Number(n) => n.to_string(),
        other => kind(other).to_string(),
    };
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected,
        found,
    }
}

pub(crate) fn coerce_string(value: &Value, path: &FieldPath) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(mismatch(path, "a string", other)),
    }
}

/// Integers are read wider than any field so that overflow reports the
/// field's range instead of a type error.
#[allow(clippy::cast_possible_truncation)]
fn coerce_integer(value: &Value, path: &FieldPath) -> Result<i128, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                    .map(|f| f as i128)
            }),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| mismatch(path, "an integer", value))
}

fn coerce_bool(value: &Value, path: &FieldPath) -> Result<bool, ValidationError> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => {
            let word = s.trim().to_ascii_lowercase();
            if TRUE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if FALSE_WORDS.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    };
    parsed.ok_or_else(|| mismatch(path, "a boolean", value))
}

pub(crate) fn coerce_ipv4(value: &Value, path: &FieldPath) -> Result<Ipv4Addr, ValidationError> {
    let invalid = |text: String| ValidationError::InvalidAddress {
        path: path.to_string(),
        value: text,
    };

    match value {
        Value::String(s) => s.trim().parse().map_err(|_| invalid(s.trim().to_string())),
        Value::Number(n) => n
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .map(Ipv4Addr::from)
            .ok_or_else(|| invalid(n.to_string())),
        other => Err(mismatch(path, "an IPv4 address", other)),
    }
}
