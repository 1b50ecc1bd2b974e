//! The decoder (component C5): parses a BOS buffer into a [`Value`] tree,
//! per §4.5. Every read goes through [`Reader`], so any out-of-bounds
//! access surfaces as a typed [`BosError`] instead of a panic.

use crate::error::{BosError, Result};
use crate::reader::Reader;
use crate::value::{Object, Value};
use crate::wire::*;

/// Parses `bytes` into the root [`Value`] they encode.
///
/// Steps (§4.5): read the declared total size, parse the root value
/// starting at offset 4, then require the cursor to land exactly on the
/// declared size — anything else is `TruncatedInput` or `TrailingBytes`.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    decode_with_depth(bytes, DEFAULT_MAX_DEPTH)
}

/// Like [`decode`], but with an explicit recursion depth limit instead of
/// [`DEFAULT_MAX_DEPTH`].
pub fn decode_with_depth(bytes: &[u8], max_depth: usize) -> Result<Value> {
    let mut r = Reader::new(bytes);
    let declared = r.read_u32_le()? as usize;
    if bytes.len() < declared {
        return Err(BosError::TruncatedInput {
            offset: 0,
            needed: declared - bytes.len(),
        });
    }
    let value = read_value(&mut r, 0, max_depth)?;
    if r.pos() != declared {
        return Err(BosError::TrailingBytes {
            consumed: r.pos(),
            declared,
        });
    }
    Ok(value)
}

fn read_value(r: &mut Reader<'_>, depth: usize, max_depth: usize) -> Result<Value> {
    if depth > max_depth {
        return Err(BosError::DepthExceeded {
            limit: max_depth,
            offset: r.pos(),
        });
    }
    let tag_offset = r.pos();
    let code = r.read_u8()?;
    if code > TYPE_MAX {
        return Err(BosError::UnknownTypeCode {
            code,
            offset: tag_offset,
        });
    }
    match code {
        TYPE_NULL => Ok(Value::Null),
        TYPE_BOOL => {
            let byte = r.read_u8()?;
            match byte {
                0 => Ok(Value::Bool(false)),
                1 => Ok(Value::Bool(true)),
                other => Err(BosError::InvalidBoolean {
                    byte: other,
                    offset: tag_offset + 1,
                }),
            }
        }
        TYPE_INT8 => Ok(Value::Integer(r.read_i8()? as i64)),
        TYPE_INT16 => Ok(Value::Integer(r.read_i16_le()? as i64)),
        TYPE_INT32 => Ok(Value::Integer(r.read_i32_le()? as i64)),
        TYPE_INT64 => Ok(Value::Integer(r.read_i64_le()?)),
        TYPE_UINT8 => Ok(Value::Integer(r.read_u8()? as i64)),
        TYPE_UINT16 => Ok(Value::Integer(r.read_u16_le()? as i64)),
        TYPE_UINT32 => Ok(Value::Integer(r.read_u32_le()? as i64)),
        TYPE_UINT64 => {
            let v = r.read_u64_le()?;
            i64::try_from(v)
                .map(Value::Integer)
                .map_err(|_| BosError::Overflow { value: v as i128 })
        }
        TYPE_FLOAT32 => Ok(Value::Real(r.read_f32_le()? as f64)),
        TYPE_FLOAT64 => Ok(Value::Real(r.read_f64_le()?)),
        TYPE_STRING => {
            let len = read_varlen_len(r)?;
            let bytes = r.read_bytes(len)?;
            let s = String::from_utf8(bytes.to_vec())
                .map_err(|_| BosError::InvalidUtf8 { offset: tag_offset })?;
            Ok(Value::String(s))
        }
        TYPE_BYTES => {
            let len = read_varlen_len(r)?;
            Ok(Value::Bytes(r.read_bytes(len)?.to_vec()))
        }
        TYPE_ARRAY => {
            let count = r.read_u8()? as usize;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(read_value(r, depth + 1, max_depth)?);
            }
            Ok(Value::Array(items))
        }
        TYPE_OBJECT => {
            let count = r.read_u8()? as usize;
            let mut obj = Object::with_capacity(count);
            for _ in 0..count {
                let key_offset = r.pos();
                let key_len = r.read_u8()? as usize;
                let key_bytes = r.read_bytes(key_len)?;
                let key = String::from_utf8(key_bytes.to_vec())
                    .map_err(|_| BosError::InvalidUtf8 { offset: key_offset })?;
                let value = read_value(r, depth + 1, max_depth)?;
                if obj.contains_key(&key) {
                    return Err(BosError::DuplicateKey {
                        key,
                        offset: key_offset,
                    });
                }
                obj.push_raw(key, value);
            }
            Ok(Value::Object(obj))
        }
        _ => unreachable!("code <= TYPE_MAX is checked above and every such code has an arm"),
    }
}

fn read_varlen_len(r: &mut Reader<'_>) -> Result<usize> {
    let size = r.read_varlen()?;
    usize::try_from(size).map_err(|_| BosError::Overflow {
        value: size as i128,
    })
}
