//! Value codecs
//!
//! Every cacheable type has exactly one stored text form:
//!
//! | Type                 | Stored as                                  |
//! |----------------------|--------------------------------------------|
//! | `String`             | the string itself, no quoting              |
//! | `i32`, `i64`         | decimal text (what Redis `INCR` produces)  |
//! | `f32`, `f64`         | shortest round-trip decimal text           |
//! | `bool`               | `"1"` / `"0"`                              |
//! | `serde_json::Value`  | JSON text                                  |
//! | `Json<T>`            | JSON text of `T`                           |
//!
//! Booleans also decode from `t`/`true`/`TRUE`/`True` and their false
//! counterparts so values written by other Redis clients read back cleanly.

use super::errors::{CacheError, CacheResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode/decode between a Rust type and the text held by the store
pub trait ValueCodec: Sized {
    /// Stored text form of `self`
    fn encode(&self) -> CacheResult<String>;

    /// Parse stored text back into `Self`
    fn decode(raw: &str) -> CacheResult<Self>;
}

/// JSON-encode any serializable value
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> CacheResult<String> {
    serde_json::to_string(value).map_err(|e| CacheError::SerializationError(e.to_string()))
}

/// Decode JSON text into `T`
pub fn from_json<T: DeserializeOwned>(raw: &str) -> CacheResult<T> {
    serde_json::from_str(raw).map_err(|e| CacheError::DeserializationError(e.to_string()))
}

/// Codec adapter that stores any serde type as JSON
///
/// ```
/// use radcache::cache::{Json, ValueCodec};
///
/// let encoded = Json(vec![1, 2, 3]).encode().unwrap();
/// assert_eq!(encoded, "[1,2,3]");
/// let Json(back) = Json::<Vec<u8>>::decode(&encoded).unwrap();
/// assert_eq!(back, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Json<T>(pub T);

impl<T: Serialize + DeserializeOwned> ValueCodec for Json<T> {
    fn encode(&self) -> CacheResult<String> {
        to_json(&self.0)
    }

    fn decode(raw: &str) -> CacheResult<Self> {
        from_json(raw).map(Json)
    }
}

impl ValueCodec for serde_json::Value {
    fn encode(&self) -> CacheResult<String> {
        to_json(self)
    }

    fn decode(raw: &str) -> CacheResult<Self> {
        from_json(raw)
    }
}

impl ValueCodec for String {
    fn encode(&self) -> CacheResult<String> {
        Ok(self.clone())
    }

    fn decode(raw: &str) -> CacheResult<Self> {
        Ok(raw.to_string())
    }
}

impl ValueCodec for bool {
    fn encode(&self) -> CacheResult<String> {
        Ok(if *self { "1" } else { "0" }.to_string())
    }

    fn decode(raw: &str) -> CacheResult<Self> {
        match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            other => Err(CacheError::DeserializationError(format!(
                "expected bool, got {:?}",
                other
            ))),
        }
    }
}

macro_rules! display_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ValueCodec for $ty {
                fn encode(&self) -> CacheResult<String> {
                    Ok(self.to_string())
                }

                fn decode(raw: &str) -> CacheResult<Self> {
                    raw.parse::<$ty>().map_err(|e| {
                        CacheError::DeserializationError(format!(
                            "expected {}, got {:?}: {}",
                            stringify!($ty),
                            raw,
                            e
                        ))
                    })
                }
            }
        )+
    };
}

display_codec!(i32, i64, f32, f64);
