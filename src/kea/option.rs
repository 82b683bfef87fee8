//! Option data, option definitions and client classes.

use serde::Serialize;

use super::catalog::{OPTION_DATA_TYPES, catalog, is_standard_space};
use super::error::ValidationError;
use super::fields::{Extra, Fields, FromFields};

/// Fields that identify an option; at least one must be set.
const IDENTITY: &[&str] = &["name", "code"];

/// Name, code and space shared by option data and definitions.
struct OptionIdentity {
    name: Option<String>,
    code: Option<u16>,
    space: Option<String>,
}

impl OptionIdentity {
    fn read(fields: &mut Fields) -> Result<Self, ValidationError> {
        let space = fields.string("space")?;
        let code_path = fields.path_of("code");
        let code = fields
            .bounded("code", 1, u16::MAX.into(), "must be between 1 and 65535")?
            .and_then(|c| u16::try_from(c).ok());

        if let Some(code) = code {
            if is_standard_space(space.as_deref()) && code > u16::from(u8::MAX) {
                return Err(ValidationError::OutOfRange {
                    path: code_path.into(),
                    value: code.to_string(),
                    rule: "must be between 1 and 255 in the dhcp4 space",
                });
            }
        }

        let name = fields.string("name")?.filter(|n| !n.is_empty());
        Ok(Self { name, code, space })
    }

    fn is_standard(&self) -> bool {
        is_standard_space(self.space.as_deref())
    }
}

/// A value for one option sent to clients (`option-data` entry).
///
/// Either `name` or `code` identifies the option; both may be given as long
/// as they agree with the standard option table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_format: Option<bool>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for OptionData {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let identity = OptionIdentity::read(&mut fields)?;
        let data = fields.string("data")?;
        let always_send = fields.bool("always_send")?;
        let csv_format = fields.bool("csv_format")?;

        check_identity(&fields, &identity)?;

        let OptionIdentity { name, code, space } = identity;
        Ok(Self {
            name,
            code,
            space,
            data,
            always_send,
            csv_format,
            extra: fields.finish(),
        })
    }
}

fn check_identity(fields: &Fields, identity: &OptionIdentity) -> Result<(), ValidationError> {
    let path = fields.path();
    match (&identity.name, identity.code) {
        (None, None) => Err(ValidationError::MissingIdentifier {
            path: path.to_string(),
            fields: IDENTITY,
        }),
        (Some(name), code) if identity.is_standard() => match catalog().by_name(name) {
            Some(standard) => match code {
                Some(code) if code != standard.code => Err(ValidationError::OptionMismatch {
                    path: path.to_string(),
                    name: name.clone(),
                    code,
                    expected: standard.code,
                }),
                _ => Ok(()),
            },
            None => {
                tracing::warn!(
                    "{path}: '{name}' is not a standard DHCPv4 option and needs a matching option-def"
                );
                Ok(())
            }
        },
        _ => Ok(()),
    }
}

/// Declaration of a custom option's format (`option-def` entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encapsulation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_types: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for OptionDef {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let identity = OptionIdentity::read(&mut fields)?;
        let data_type = fields.choice("type", OPTION_DATA_TYPES)?;
        let data_type = fields.require("type", data_type)?;
        let array = fields.bool("array")?;
        let encapsulation = fields.string("encapsulation")?;
        let record_types = fields.string("record_types")?;

        if let (Some(code), true) = (identity.code, identity.is_standard()) {
            if let Some(standard) = catalog().by_code(code) {
                return Err(ValidationError::StandardOptionRedefined {
                    path: fields.path().to_string(),
                    code,
                    standard: standard.name.as_str(),
                });
            }
        }

        let OptionIdentity { name, code, space } = identity;
        Ok(Self {
            name,
            code,
            space,
            data_type,
            array,
            encapsulation,
            record_types,
            extra: fields.finish(),
        })
    }
}

/// A named rule partitioning clients (`client-classes` entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientClass {
    pub name: String,
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_data: Option<Vec<OptionData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_def: Option<Vec<OptionDef>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FromFields for ClientClass {
    fn from_fields(mut fields: Fields) -> Result<Self, ValidationError> {
        let name = fields.string("name")?;
        let name = fields.require("name", name)?;
        let test = fields.string("test")?;
        let test = fields.require("test", test)?;
        let option_data = fields.records("option_data")?;
        let option_def = fields.records("option_def")?;

        Ok(Self {
            name,
            test,
            option_data,
            option_def,
            extra: fields.finish(),
        })
    }
}
