//! Tests for subnets, relays and reservations.

use std::net::Ipv4Addr;

use serde_json::{Value, json};

use super::ValidationError;
use super::fields::{FieldPath, FromFields};
use super::subnet::{Relay4, Reservation4, Subnet4};

fn subnet(value: &Value) -> Result<Subnet4, ValidationError> {
    Subnet4::from_value(value, FieldPath::root("subnet4[0]"))
}

fn reservation(value: &Value) -> Result<Reservation4, ValidationError> {
    Reservation4::from_value(value, FieldPath::root("r"))
}

mod subnets {
    use super::*;

    #[test]
    fn minimal_subnet() {
        let s = subnet(&json!({"subnet": "10.0.0.0/24"})).unwrap();
        assert_eq!(s.subnet.to_string(), "10.0.0.0/24");
        assert!(s.pools.is_none());
    }

    #[test]
    fn subnet_is_required() {
        let err = subnet(&json!({"pools": []})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                path: "subnet4[0].subnet".to_string()
            }
        );
    }

    #[test]
    fn pools_are_normalized() {
        let s = subnet(&json!({
            "subnet": "10.0.0.0/24",
            "pools": [{"pool": "10.0.0.10-10.0.0.100"}, {"pool": ["10.0.0.200"]}],
        }))
        .unwrap();

        let pools: Vec<String> = s
            .pools
            .unwrap()
            .iter()
            .map(|p| p.pool.to_string())
            .collect();
        assert_eq!(pools, ["10.0.0.10 - 10.0.0.100", "10.0.0.200 - 10.0.0.200"]);
    }

    #[test]
    fn bad_pool_error_path() {
        let err = subnet(&json!({
            "subnet": "10.0.0.0/24",
            "pools": [{"pool": "10.0.0.10-10.0.0.20"}, {"pool": []}],
        }))
        .unwrap_err();
        assert_eq!(err.path(), "subnet4[0].pools[1].pool");
    }

    #[test]
    fn timers_and_lifetimes() {
        let s = subnet(&json!({
            "subnet": "192.168.0.0/16",
            "valid-lifetime": 7200,
            "min_valid_lifetime": "3600",
            "renew_timer": 1800,
            "rebind-timer": 3600,
            "authoritative": "true",
            "id": 12,
        }))
        .unwrap();

        assert_eq!(s.valid_lifetime, Some(7200));
        assert_eq!(s.min_valid_lifetime, Some(3600));
        assert_eq!(s.renew_timer, Some(1800));
        assert_eq!(s.rebind_timer, Some(3600));
        assert_eq!(s.authoritative, Some(true));
        assert_eq!(s.id, Some(12));
    }

    #[test]
    fn without_interface_no_key_is_emitted() {
        let s = subnet(&json!({"subnet": "10.0.0.0/24"})).unwrap();
        let value = serde_json::to_value(&s).unwrap();

        assert!(value.get("interface").is_none());
        assert_eq!(value, json!({"subnet": "10.0.0.0/24"}));
    }

    #[test]
    fn interface_and_common_fields_serialize_flat() {
        let s = subnet(&json!({
            "subnet": "10.0.0.0/24",
            "interface": " eth1 ",
            "require_client_classes": ["voip"],
            "user-context": {"site": "lab"},
            "option_data": [{"name": "routers", "data": "10.0.0.1"}],
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "subnet": "10.0.0.0/24",
                "interface": "eth1",
                "require-client-classes": ["voip"],
                "user-context": {"site": "lab"},
                "option-data": [{"name": "routers", "data": "10.0.0.1"}],
            })
        );
    }

    #[test]
    fn pool_outside_subnet_only_warns() {
        assert!(subnet(&json!({"subnet": "10.0.0.0/24", "pools": [{"pool": "10.1.0.1-10.1.0.9"}]})).is_ok());
    }
}

mod relays {
    use super::*;

    #[test]
    fn relay_addresses() {
        let relay = Relay4::from_value(
            &json!({"ip-addresses": ["10.0.0.1", "10.0.0.2"]}),
            FieldPath::root("relay"),
        )
        .unwrap();
        assert_eq!(
            relay.ip_addresses,
            [Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)]
        );
    }

    #[test]
    fn relay_addresses_are_required() {
        let err = Relay4::from_value(&json!({}), FieldPath::root("relay")).unwrap_err();
        assert_eq!(err.path(), "relay.ip-addresses");
    }

    #[test]
    fn relay_in_subnet() {
        let s = subnet(&json!({"subnet": "10.0.0.0/24", "relay": {"ip_addresses": ["10.9.9.9"]}})).unwrap();
        assert_eq!(
            serde_json::to_value(&s).unwrap()["relay"],
            json!({"ip-addresses": ["10.9.9.9"]})
        );
    }
}

mod reservations {
    use super::*;

    #[test]
    fn hardware_address_reservation() {
        let r = reservation(&json!({
            "hw-address": "aa:bb:cc:dd:ee:ff",
            "ip_address": "10.0.0.50",
            "hostname": "printer",
        }))
        .unwrap();

        assert_eq!(r.hw_address.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(r.ip_address, Some(Ipv4Addr::new(10, 0, 0, 50)));
    }

    #[test]
    fn identifier_is_required() {
        let err = reservation(&json!({"ip_address": "10.0.0.50"})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingIdentifier { .. }));
    }

    #[test]
    fn two_identifiers_conflict() {
        let err = reservation(&json!({"client_id": "01:aa", "circuit-id": "port-7"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "r: only one of client-id, circuit-id, duid, flex-id, hw-address may be set, got client-id, circuit-id"
        );
    }

    #[test]
    fn duid_reservation() {
        let r = reservation(&json!({"duid": "01:02:03:04", "ip-address": "10.0.0.5"})).unwrap();

        assert_eq!(r.duid.as_deref(), Some("01:02:03:04"));
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            json!({"duid": "01:02:03:04", "ip-address": "10.0.0.5"})
        );
    }

    #[test]
    fn flex_id_reservation_in_either_spelling() {
        let hyphen = reservation(&json!({"flex-id": "'port-1'", "hostname": "a"})).unwrap();
        let underscore = reservation(&json!({"flex_id": "'port-1'", "hostname": "a"})).unwrap();

        assert_eq!(hyphen, underscore);
        assert_eq!(
            serde_json::to_value(&hyphen).unwrap()["flex-id"],
            json!("'port-1'")
        );
    }

    #[test]
    fn duid_with_hardware_address_conflicts() {
        let err = reservation(&json!({"duid": "01:02", "hw-address": "aa:bb"})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Conflict { ref given, .. } if given == &["duid", "hw-address"]
        ));
    }

    #[test]
    fn extras_are_kept() {
        let r = reservation(&json!({"client-id": "01:aa", "next-server": "10.0.0.2"})).unwrap();
        assert_eq!(r.extra["next-server"], json!("10.0.0.2"));
    }

    #[test]
    fn bad_address_is_rejected() {
        let err = reservation(&json!({"hw_address": "aa:bb", "ip_address": "10.0.0.500"})).unwrap_err();
        assert_eq!(err.path(), "r.ip-address");
    }
}
