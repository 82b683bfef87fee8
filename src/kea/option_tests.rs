//! Tests for option data, option definitions and client classes.

use serde_json::{Value, json};

use super::fields::{FieldPath, FromFields};
use super::option::{ClientClass, OptionData, OptionDef};
use super::ValidationError;

fn option_data(value: &Value) -> Result<OptionData, ValidationError> {
    OptionData::from_value(value, FieldPath::root("option-data[0]"))
}

fn option_def(value: &Value) -> Result<OptionDef, ValidationError> {
    OptionDef::from_value(value, FieldPath::root("option-def[0]"))
}

mod identity {
    use super::*;

    #[test]
    fn name_alone_is_enough() {
        let option = option_data(&json!({"name": "domain-name-servers", "data": "10.0.0.53"})).unwrap();
        assert_eq!(option.name.as_deref(), Some("domain-name-servers"));
        assert_eq!(option.code, None);
    }

    #[test]
    fn code_alone_is_enough() {
        let option = option_data(&json!({"code": 6, "data": "10.0.0.53"})).unwrap();
        assert_eq!(option.code, Some(6));
        assert_eq!(option.name, None);
    }

    #[test]
    fn neither_name_nor_code_fails() {
        let err = option_data(&json!({"data": "10.0.0.53"})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingIdentifier { .. }));
        assert_eq!(err.path(), "option-data[0]");
    }

    #[test]
    fn blank_name_counts_as_unset() {
        let err = option_data(&json!({"name": "   ", "data": "x"})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingIdentifier { .. }));
    }

    #[test]
    fn matching_name_and_code_are_accepted() {
        let option = option_data(&json!({"name": "routers", "code": 3, "data": "10.0.0.1"})).unwrap();
        assert_eq!(option.name.as_deref(), Some("routers"));
        assert_eq!(option.code, Some(3));
    }

    #[test]
    fn mismatched_name_and_code_fail() {
        let err = option_data(&json!({"name": "routers", "code": 6})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OptionMismatch {
                path: "option-data[0]".to_string(),
                name: "routers".to_string(),
                code: 6,
                expected: 3,
            }
        );
    }

    #[test]
    fn custom_space_skips_catalog() {
        let option = option_data(&json!({"name": "routers", "code": 6, "space": "vendor-x"})).unwrap();
        assert_eq!(option.space.as_deref(), Some("vendor-x"));
    }

    #[test]
    fn unknown_standard_name_only_warns() {
        assert!(option_data(&json!({"name": "my-custom-option", "data": "1"})).is_ok());
    }

    #[test]
    fn code_above_255_fails_in_dhcp4_space() {
        let err = option_data(&json!({"code": 300})).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert_eq!(err.path(), "option-data[0].code");
    }

    #[test]
    fn code_above_255_allowed_in_other_spaces() {
        assert!(option_data(&json!({"code": 300, "space": "vendor-x"})).is_ok());
    }

    #[test]
    fn code_zero_fails() {
        assert!(matches!(
            option_data(&json!({"code": 0})),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}

mod option_data_fields {
    use super::*;

    #[test]
    fn flags_and_hyphenated_names() {
        let option = option_data(&json!({
            "name": "domain-name",
            "data": " example.org ",
            "always-send": true,
            "csv_format": "false",
        }))
        .unwrap();

        assert_eq!(option.data.as_deref(), Some("example.org"));
        assert_eq!(option.always_send, Some(true));
        assert_eq!(option.csv_format, Some(false));
    }

    #[test]
    fn serializes_without_absent_fields() {
        let option = option_data(&json!({"name": "routers", "data": "10.0.0.1", "always_send": true})).unwrap();
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({"name": "routers", "data": "10.0.0.1", "always-send": true})
        );
    }
}

mod definitions {
    use super::*;

    #[test]
    fn custom_definition_builds() {
        let def = option_def(&json!({
            "name": "site-id",
            "code": 224,
            "type": "uint32",
            "record_types": "",
            "array": false,
        }))
        .unwrap();

        assert_eq!(def.data_type, "uint32");
        assert_eq!(
            serde_json::to_value(&def).unwrap(),
            json!({"name": "site-id", "code": 224, "type": "uint32", "record-types": "", "array": false})
        );
    }

    #[test]
    fn type_is_required() {
        let err = option_def(&json!({"name": "site-id", "code": 224})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                path: "option-def[0].type".to_string()
            }
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            option_def(&json!({"name": "site-id", "code": 224, "type": "float"})),
            Err(ValidationError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn standard_code_cannot_be_redefined() {
        let err = option_def(&json!({"name": "my-routers", "code": 3, "type": "ipv4-address"})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::StandardOptionRedefined {
                path: "option-def[0]".to_string(),
                code: 3,
                standard: "routers",
            }
        );
    }

    #[test]
    fn standard_code_allowed_in_vendor_space() {
        assert!(
            option_def(&json!({"name": "tftp", "code": 3, "type": "string", "space": "vendor-x"}))
                .is_ok()
        );
    }
}

mod client_classes {
    use super::*;

    #[test]
    fn class_with_nested_options() {
        let class = ClientClass::from_value(
            &json!({
                "name": "voip",
                "test": "substring(option[60].hex,0,6) == 'Aastra'",
                "option-data": [{"name": "tftp-server-name", "data": "10.0.0.5"}],
            }),
            FieldPath::root("client-classes[0]"),
        )
        .unwrap();

        assert_eq!(class.name, "voip");
        assert_eq!(class.option_data.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_expression_is_required() {
        let err = ClientClass::from_value(&json!({"name": "voip"}), FieldPath::root("cc"))
            .unwrap_err();
        assert_eq!(err.path(), "cc.test");
    }

    #[test]
    fn nested_option_errors_carry_full_path() {
        let err = ClientClass::from_value(
            &json!({"name": "voip", "test": "true", "option_data": [{"data": "x"}]}),
            FieldPath::root("cc"),
        )
        .unwrap_err();
        assert_eq!(err.path(), "cc.option-data[0]");
    }
}
