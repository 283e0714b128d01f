//! Type serialization tests for trellis-core

use trellis_core::*;

mod serialization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_round_trip() {
        let update = Update::new(
            Path::new(vec![
                PathElement::new("interfaces"),
                PathElement::new("interface").with_key("name", "eth0"),
                PathElement::new("state"),
                PathElement::new("counters"),
            ])
            .with_origin("openconfig"),
            TypedValue::Uint(1_234_567),
        );

        let json = serde_json::to_string(&update).unwrap();
        let parsed: Update = serde_json::from_str(&json).unwrap();

        assert_eq!(update, parsed);
    }

    #[test]
    fn test_every_value_variant_round_trips() {
        let values = vec![
            TypedValue::Empty,
            TypedValue::Int(-42),
            TypedValue::Uint(42),
            TypedValue::Float(42.42),
            TypedValue::Decimal(Decimal64::new(1234, 4)),
            TypedValue::Bool(false),
            TypedValue::String("forty-two".to_string()),
            TypedValue::Bytes(vec![0xde, 0xad]),
            TypedValue::Json(b"{\"a\":1}".to_vec()),
            TypedValue::JsonIetf(b"{\"a\":1}".to_vec()),
            TypedValue::LeafList(vec![TypedValue::Int(1), TypedValue::Int(2)]),
            TypedValue::Any(vec![1, 2, 3]),
        ];

        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let parsed: TypedValue = serde_json::from_str(&json).unwrap();
            assert_eq!(value, parsed, "round trip for {}", value.kind());
        }
    }

    #[test]
    fn test_variant_tags_are_snake_case() {
        let json = serde_json::to_string(&TypedValue::JsonIetf(b"{}".to_vec())).unwrap();
        assert!(json.contains("json_ietf"));

        let json = serde_json::to_string(&TypedValue::LeafList(vec![])).unwrap();
        assert!(json.contains("leaf_list"));
    }

    #[test]
    fn test_root_path_serializes_compactly() {
        assert_eq!(serde_json::to_string(&Path::root()).unwrap(), "{}");
    }

    #[test]
    fn test_path_deserializes_with_missing_fields() {
        let path: Path = serde_json::from_str("{}").unwrap();
        assert_eq!(path, Path::root());

        let path: Path =
            serde_json::from_str(r#"{"elements":[{"name":"a"}]}"#).unwrap();
        assert_eq!(path, Path::new(vec![PathElement::new("a")]));
    }
}

mod accessors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_names() {
        assert_eq!(TypedValue::Empty.kind(), "empty");
        assert_eq!(TypedValue::Decimal(Decimal64::new(0, 0)).kind(), "decimal");
        assert_eq!(TypedValue::LeafList(vec![]).kind(), "leaf_list");
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(TypedValue::String("x".to_string()).as_str(), Some("x"));
        assert_eq!(TypedValue::Int(-1).as_int(), Some(-1));
        assert_eq!(TypedValue::Uint(1).as_uint(), Some(1));
        assert_eq!(TypedValue::Bool(true).as_bool(), Some(true));

        assert_eq!(TypedValue::Int(-1).as_str(), None);
        assert_eq!(TypedValue::Empty.as_bool(), None);
    }

    #[test]
    fn test_path_len() {
        assert_eq!(Path::root().len(), 0);
        assert_eq!(
            Path::new(vec![PathElement::new("a"), PathElement::new("b")]).len(),
            2
        );
    }

    #[test]
    fn test_decimal_effective_value() {
        assert_eq!(Decimal64::new(1234, 2).to_f64(), 12.34);
        assert_eq!(Decimal64::new(1230, 1).to_f64(), Decimal64::new(123, 0).to_f64());
    }
}
