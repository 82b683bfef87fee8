//! Address pools and the fields pools share with subnets.

use std::fmt;
use std::net::Ipv4Addr;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::error::ValidationError;
use super::fields::{Extra, FieldPath, Fields, FromFields, coerce_ipv4, mismatch};
use super::option::{OptionData, OptionDef};

/// An address range in the canonical `"<first> - <last>"` form.
///
/// Endpoints keep the order they were given in; ordering is the caller's
/// responsibility.
///
/// # Examples
///
/// ```
/// use kea_render::kea::PoolRange;
/// use serde_json::json;
///
/// let range = PoolRange::from_value(&json!("10.0.0.10-10.0.0.100")).unwrap();
/// assert_eq!(range.to_string(), "10.0.0.10 - 10.0.0.100");
///
/// let single = PoolRange::from_value(&json!(["10.0.0.7"])).unwrap();
/// assert_eq!(single.to_string(), "10.0.0.7 - 10.0.0.7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

impl PoolRange {
    /// Normalizes a string (`"a - b"`, `"a"`) or a list of one or two addresses.
    ///
    /// Errors are reported at the path `pool`; use [`PoolRange::read`] to
    /// report them at the value's real location.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPool`] for lists of the wrong length
    /// or entries that are not IPv4 addresses.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::read(value, &FieldPath::root("pool"))
    }

    /// Normalizes the pool value found at `path`.
    ///
    /// # Errors
    ///
    /// See [`PoolRange::from_value`].
    pub fn read(value: &Value, path: &FieldPath) -> Result<Self, ValidationError> {
        match value {
            Value::Array(entries) => Self::from_entries(entries, path),
            Value::String(text) => {
                let entries: Vec<Value> = text
                    .split('-')
                    .map(|part| Value::String(part.trim().to_string()))
                    .collect();
                Self::from_entries(&entries, path)
            }
            other => Err(mismatch(path, "an address range", other)),
        }
    }

    fn from_entries(entries: &[Value], path: &FieldPath) -> Result<Self, ValidationError> {
        if entries.is_empty() || entries.len() > 2 {
            return Err(ValidationError::InvalidPool {
                path: path.to_string(),
                reason: format!(
                    "pool list must hold one or two addresses, got {}",
                    entries.len()
                ),
            });
        }

        let addresses = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                coerce_ipv4(entry, &path.index(i)).map_err(|_| ValidationError::InvalidPool {
                    path: path.to_string(),
                    reason: format!("pool entry {entry} is not a valid IPv4 address"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let first = addresses[0];
        let last = addresses.get(1).copied().unwrap_or(first);
        Ok(Self { first, last })
    }
}

impl fmt::Display for PoolRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.last)
    }
}

impl Serialize for PoolRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fields accepted on both pools and subnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PoolCommon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_data: Option<Vec<OptionData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_def: Option<Vec<OptionDef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_client_classes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context: Option<Map<String, Value>>,
}

impl PoolCommon {
    /// Reads the shared fields out of a pool or subnet record.
    ///
    /// # Errors
    ///
    /// Propagates the first invalid field.
    pub fn read(fields: &mut Fields) -> Result<Self, ValidationError> {
        Ok(Self {
            option_data: fields.records("option_data")?,
            option_def: fields.records("option_def")?,
            server_hostname: fields.string("server_hostname")?,
            client_class: fields.string("client_class")?,
            require_client_classes: fields.string_list("require_client_classes")?,
            user_context: fields.object("user_context")?,
        })
    }
}

/// A dynamic address pool inside a subnet (`pools` entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pool4 {
    pub pool: PoolRange,
    #[serde(flatten)]
    pub common: PoolCommon,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for Pool4 {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let path = fields.path_of("pool");
        let raw = fields.take("pool")?;
        let pool = PoolRange::read(&fields.require("pool", raw)?, &path)?;
        let common = PoolCommon::read(&mut fields)?;

        Ok(Self {
            pool,
            common,
            extra: fields.finish(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn range(value: &Value) -> Result<PoolRange, ValidationError> {
        PoolRange::from_value(value)
    }

    mod normalization {
        use super::*;

        #[test]
        fn pair_keeps_given_order() {
            let r = range(&json!(["10.0.0.100", "10.0.0.10"])).unwrap();
            assert_eq!(r.to_string(), "10.0.0.100 - 10.0.0.10");
        }

        #[test]
        fn singleton_is_duplicated() {
            let r = range(&json!(["192.168.1.5"])).unwrap();
            assert_eq!(r.first, r.last);
            assert_eq!(r.to_string(), "192.168.1.5 - 192.168.1.5");
        }

        #[test]
        fn string_is_split_and_trimmed() {
            let r = range(&json!("  10.0.0.10 -   10.0.0.100 ")).unwrap();
            assert_eq!(r.to_string(), "10.0.0.10 - 10.0.0.100");
        }

        #[test]
        fn string_without_dash_is_single_address() {
            let r = range(&json!("172.16.0.1")).unwrap();
            assert_eq!(r.to_string(), "172.16.0.1 - 172.16.0.1");
        }

        #[test]
        fn canonical_form_is_stable() {
            let once = range(&json!("10.1.1.1-10.1.1.9")).unwrap();
            let twice = range(&json!(once.to_string())).unwrap();
            assert_eq!(once, twice);
        }
    }

    mod rejection {
        use super::*;

        #[test]
        fn empty_list_fails() {
            assert!(matches!(
                range(&json!([])),
                Err(ValidationError::InvalidPool { .. })
            ));
        }

        #[test]
        fn three_entries_fail() {
            assert!(matches!(
                range(&json!(["10.0.0.1", "10.0.0.2", "10.0.0.3"])),
                Err(ValidationError::InvalidPool { .. })
            ));
        }

        #[test]
        fn too_many_dashes_fail() {
            assert!(range(&json!("10.0.0.1-10.0.0.2-10.0.0.3")).is_err());
        }

        #[test]
        fn bad_entry_fails() {
            let err = range(&json!(["10.0.0.1", "10.0.0.256"])).unwrap_err();
            assert!(err.to_string().contains("not a valid IPv4 address"));
        }

        #[test]
        fn cidr_string_fails() {
            assert!(range(&json!("10.0.0.0/24")).is_err());
        }

        #[test]
        fn non_string_non_list_fails() {
            assert!(matches!(
                range(&json!({"from": "10.0.0.1"})),
                Err(ValidationError::TypeMismatch { .. })
            ));
        }
    }

    mod pool_record {
        use super::*;

        #[test]
        fn builds_with_common_fields() {
            let value = json!({
                "pool": ["10.0.0.10", "10.0.0.20"],
                "client-class": " printers ",
                "option_data": [{"name": "routers", "data": "10.0.0.1"}],
            });
            let pool = Pool4::from_value(&value, FieldPath::root("pool")).unwrap();

            assert_eq!(pool.pool.to_string(), "10.0.0.10 - 10.0.0.20");
            assert_eq!(pool.common.client_class.as_deref(), Some("printers"));
            assert_eq!(pool.common.option_data.as_ref().map(Vec::len), Some(1));
        }

        #[test]
        fn missing_pool_is_reported() {
            let err = Pool4::from_value(&json!({}), FieldPath::root("pools[0]")).unwrap_err();
            assert_eq!(err, ValidationError::MissingField {
                path: "pools[0].pool".to_string()
            });
        }

        #[test]
        fn error_path_names_the_field() {
            let err = Pool4::from_value(&json!({"pool": []}), FieldPath::root("p")).unwrap_err();
            assert_eq!(err.path(), "p.pool");
        }

        #[test]
        fn serializes_range_string_and_extras() {
            let value = json!({"pool": "10.0.0.10-10.0.0.100", "comment": "guests"});
            let pool = Pool4::from_value(&value, FieldPath::root("pool")).unwrap();

            assert_eq!(
                serde_json::to_value(&pool).unwrap(),
                json!({"pool": "10.0.0.10 - 10.0.0.100", "comment": "guests"})
            );
        }
    }
}
