//! The encoder (component C4): walks a [`Value`] tree and emits the wire
//! format described in §6.1.

use crate::classify::{classify_int, classify_real, IntWidth, RealWidth};
use crate::error::{BosError, Result};
use crate::value::Value;
use crate::wire::*;
use crate::writer::Writer;

/// Encodes `value` as the root of a BOS buffer (§4.4, steps 1–4).
///
/// Real values are encoded as `Float64` unless [`encode_narrow_floats`] is
/// used instead — §9's design note recommends this as the faithful
/// default, since narrowing to `Float32` is lossy and the original format
/// does not require it.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    encode_with(value, false)
}

/// Like [`encode`], but narrows `Real` values to `Float32` whenever they
/// round-trip within the §4.2 tolerance — matches the behavior the
/// original C implementation's test suite was written against.
pub fn encode_narrow_floats(value: &Value) -> Result<Vec<u8>> {
    encode_with(value, true)
}

fn encode_with(value: &Value, narrow_floats: bool) -> Result<Vec<u8>> {
    let mut w = Writer::new();
    let header = w.reserve(4);
    emit_value(&mut w, value, narrow_floats)?;
    let total = w.len() as u32;
    w.patch_u32_le(header, total);
    Ok(w.into_vec())
}

fn emit_value(w: &mut Writer, value: &Value, narrow_floats: bool) -> Result<()> {
    match value {
        Value::Null => w.append_u8(TYPE_NULL),
        Value::Bool(b) => {
            w.append_u8(TYPE_BOOL);
            w.append_bool(*b);
        }
        Value::Integer(v) => emit_int(w, *v),
        Value::Real(v) => emit_real(w, *v, narrow_floats),
        Value::String(s) => emit_varlen_payload(w, TYPE_STRING, s.as_bytes())?,
        Value::Bytes(b) => emit_varlen_payload(w, TYPE_BYTES, b)?,
        Value::Array(items) => {
            if items.len() > MAX_CONTAINER_LEN {
                return Err(BosError::ContainerTooLarge {
                    actual: items.len(),
                });
            }
            w.append_u8(TYPE_ARRAY);
            w.append_u8(items.len() as u8);
            for item in items {
                emit_value(w, item, narrow_floats)?;
            }
        }
        Value::Object(obj) => {
            if obj.len() > MAX_CONTAINER_LEN {
                return Err(BosError::ContainerTooLarge { actual: obj.len() });
            }
            w.append_u8(TYPE_OBJECT);
            w.append_u8(obj.len() as u8);
            for (key, val) in obj.iter() {
                let key_bytes = key.as_bytes();
                if key_bytes.len() > MAX_KEY_LEN {
                    return Err(BosError::KeyTooLong {
                        actual: key_bytes.len(),
                    });
                }
                w.append_u8(key_bytes.len() as u8);
                w.append_bytes(key_bytes);
                emit_value(w, val, narrow_floats)?;
            }
        }
    }
    Ok(())
}

fn emit_int(w: &mut Writer, v: i64) {
    let width = classify_int(v);
    w.append_u8(width.type_code());
    match width {
        IntWidth::Int8 => w.append_i8(v as i8),
        IntWidth::Int16 => w.append_i16_le(v as i16),
        IntWidth::Int32 => w.append_i32_le(v as i32),
        IntWidth::Int64 => w.append_i64_le(v),
        IntWidth::UInt8 => w.append_u8(v as u8),
        IntWidth::UInt16 => w.append_u16_le(v as u16),
        IntWidth::UInt32 => w.append_u32_le(v as u32),
        IntWidth::UInt64 => w.append_u64_le(v as u64),
    }
}

fn emit_real(w: &mut Writer, v: f64, narrow_floats: bool) {
    match classify_real(v, narrow_floats) {
        RealWidth::Float32 => {
            w.append_u8(RealWidth::Float32.type_code());
            w.append_f32_le(v as f32);
        }
        RealWidth::Float64 => {
            w.append_u8(RealWidth::Float64.type_code());
            w.append_f64_le(v);
        }
    }
}

fn emit_varlen_payload(w: &mut Writer, type_code: u8, data: &[u8]) -> Result<()> {
    w.append_u8(type_code);
    emit_varlen(w, data.len() as u64);
    w.append_bytes(data);
    Ok(())
}

fn emit_varlen(w: &mut Writer, size: u64) {
    if size as usize <= VARLEN_INLINE_MAX {
        w.append_u8(size as u8);
    } else if size <= u16::MAX as u64 {
        w.append_u8(VARLEN_U16);
        w.append_u16_le(size as u16);
    } else if size <= u32::MAX as u64 {
        w.append_u8(VARLEN_U32);
        w.append_u32_le(size as u32);
    } else {
        w.append_u8(VARLEN_U64);
        w.append_u64_le(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn s1_null() {
        assert_eq!(encode(&Value::Null).unwrap(), vec![5, 0, 0, 0, 0x00]);
    }

    #[test]
    fn s2_bool_true() {
        assert_eq!(
            encode(&Value::Bool(true)).unwrap(),
            vec![6, 0, 0, 0, 0x01, 0x01]
        );
    }

    #[test]
    fn s3_int8_negative_one() {
        let out = encode(&Value::Integer(-1)).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out[4], TYPE_INT8);
        assert_eq!(out[5], 0xFF);
    }

    #[test]
    fn s4_int16_minus_300() {
        let out = encode(&Value::Integer(-300)).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out[4], TYPE_INT16);
        assert_eq!(&out[5..7], &[0xD4, 0xFE]);
    }

    #[test]
    fn s5_int32() {
        let out = encode(&Value::Integer(-2_147_483_640)).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[4], TYPE_INT32);
    }

    #[test]
    fn s6_int64() {
        let out = encode(&Value::Integer(-1_099_511_627_775)).unwrap();
        assert_eq!(out.len(), 13);
        assert_eq!(out[4], TYPE_INT64);
    }

    #[test]
    fn s7_uint8() {
        let out = encode(&Value::Integer(255)).unwrap();
        assert_eq!(out.len(), 6);
        assert_eq!(out[4], TYPE_UINT8);
        assert_eq!(out[5], 0xFF);
    }

    #[test]
    fn s8_uint16() {
        let out = encode(&Value::Integer(4000)).unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out[4], TYPE_UINT16);
        assert_eq!(&out[5..7], &[0xA0, 0x0F]);
    }

    #[test]
    fn s9_uint32() {
        let out = encode(&Value::Integer(4_294_967_290)).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[4], TYPE_UINT32);
    }

    #[test]
    fn s10_uint64() {
        let out = encode(&Value::Integer(1_099_511_627_775)).unwrap();
        assert_eq!(out.len(), 13);
        assert_eq!(out[4], TYPE_UINT64);
    }

    #[test]
    fn s11_real_narrowed_to_float32() {
        let out = encode_narrow_floats(&Value::Real(5.5)).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out[4], TYPE_FLOAT32);
    }

    #[test]
    fn s12_string() {
        let out = encode(&Value::String("string".to_string())).unwrap();
        assert_eq!(out.len(), 12);
        assert_eq!(out[4], TYPE_STRING);
        assert_eq!(out[5], 6);
        assert_eq!(&out[6..12], b"string");
    }

    #[test]
    fn s13_bytes_300() {
        let payload = vec![0xABu8; 300];
        let out = encode(&Value::Bytes(payload.clone())).unwrap();
        assert_eq!(out.len(), 308);
        assert_eq!(out[4], TYPE_BYTES);
        assert_eq!(&out[5..8], &[0xFD, 0x2C, 0x01]);
        assert_eq!(&out[8..308], payload.as_slice());
    }

    #[test]
    fn s14_array_single_int() {
        let out = encode(&Value::Array(vec![Value::Integer(1)])).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(out[4], TYPE_ARRAY);
        assert_eq!(out[5], 1);
        assert_eq!(&out[6..8], &[TYPE_UINT8, 1]);
    }

    #[test]
    fn s15_object_single_key() {
        let mut obj = Object::new();
        obj.insert("key0", Value::Integer(1));
        let out = encode(&Value::Object(obj)).unwrap();
        assert_eq!(out.len(), 13);
        assert_eq!(out[4], TYPE_OBJECT);
        assert_eq!(out[5], 1);
        assert_eq!(out[6], 4);
        assert_eq!(&out[7..11], b"key0");
        assert_eq!(&out[11..13], &[TYPE_UINT8, 1]);
    }

    #[test]
    fn header_is_total_buffer_length() {
        let out = encode(&Value::Array(vec![Value::Integer(1), Value::Bool(true)])).unwrap();
        let declared = u32::from_le_bytes(out[0..4].try_into().unwrap());
        assert_eq!(declared as usize, out.len());
    }

    #[test]
    fn array_over_255_elements_is_rejected() {
        let items: Vec<Value> = (0..256).map(Value::Integer).collect();
        let err = encode(&Value::Array(items)).unwrap_err();
        assert_eq!(err, BosError::ContainerTooLarge { actual: 256 });
    }

    #[test]
    fn object_key_over_255_bytes_is_rejected() {
        let mut obj = Object::new();
        obj.insert("x".repeat(256), Value::Null);
        let err = encode(&Value::Object(obj)).unwrap_err();
        assert_eq!(err, BosError::KeyTooLong { actual: 256 });
    }
}
