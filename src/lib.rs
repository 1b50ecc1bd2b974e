//! BOS — Binary Object Serialization.
//!
//! A compact, self-describing binary encoding for a JSON-like tagged value
//! tree: [`encode`] a [`Value`] to a contiguous byte buffer, [`decode`] a
//! byte buffer back into an equivalent tree. Numeric scalars use the
//! narrowest wire representation that fits their runtime value; see the
//! crate's wire-format notes in [`wire`] for the byte layout.

pub mod classify;
pub mod decode;
pub mod encode;
pub mod error;
pub mod json;
pub mod reader;
pub mod value;
pub mod wire;
pub mod writer;

#[cfg(feature = "python")]
pub mod py;

pub use decode::{decode, decode_with_depth};
pub use encode::{encode, encode_narrow_floats};
pub use error::{BosError, Result};
pub use value::{Kind, Object, Value};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Integer),
            any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(Value::Real),
            ".{0,16}".prop_map(Value::String),
            proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
                proptest::collection::vec((".{1,8}", inner), 0..8).prop_map(|pairs| {
                    let mut obj = Object::new();
                    for (k, v) in pairs {
                        obj.insert(k, v);
                    }
                    Value::Object(obj)
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_arbitrary_trees(value in arb_value()) {
            let bytes = encode(&value).unwrap();
            let declared = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
            prop_assert_eq!(declared as usize, bytes.len());
            prop_assert_eq!(bytes[4], wire_code(&value));

            let decoded = decode(&bytes).unwrap();
            prop_assert_eq!(decoded, value);
        }

        #[test]
        fn truncating_any_valid_buffer_fails(value in arb_value()) {
            let bytes = encode(&value).unwrap();
            if bytes.len() > 1 {
                let cut = bytes.len() - 1;
                prop_assert!(decode(&bytes[..cut]).is_err());
            }
        }
    }

    fn wire_code(value: &Value) -> u8 {
        use classify::{classify_int, classify_real};
        match value {
            Value::Null => wire::TYPE_NULL,
            Value::Bool(_) => wire::TYPE_BOOL,
            Value::Integer(v) => classify_int(*v).type_code(),
            Value::Real(v) => classify_real(*v, false).type_code(),
            Value::String(_) => wire::TYPE_STRING,
            Value::Bytes(_) => wire::TYPE_BYTES,
            Value::Array(_) => wire::TYPE_ARRAY,
            Value::Object(_) => wire::TYPE_OBJECT,
        }
    }
}
