//! # 레코드 ↔ 매핑 변환
//!
//! 타입 있는 레코드를 문자열 키 매핑(`Mapping`)으로, 또는 그 반대로 변환합니다.
//! 해시 버킷에 레코드를 저장할 때와 읽어올 때 사용됩니다.
//!
//! ```rust,ignore
//! use crate::domain::mapping::{SerdeMapConverter, StructMapConverter};
//!
//! let converter = SerdeMapConverter;
//! let mapping = converter.to_mapping(&user)?;
//! let restored: User = converter.from_mapping(mapping)?;
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use crate::errors::{StoreError, StoreResult};

/// 문자열 키 → 임의 값 매핑
pub type Mapping = serde_json::Map<String, Value>;

/// 레코드 `T` 와 [`Mapping`] 사이의 양방향 변환기
pub trait StructMapConverter<T>: Send + Sync {
    /// 레코드를 매핑으로 변환합니다.
    fn to_mapping(&self, value: &T) -> StoreResult<Mapping>;

    /// 매핑을 레코드로 변환합니다. 형태가 맞지 않으면 `StoreError::Conversion`.
    fn from_mapping(&self, mapping: Mapping) -> StoreResult<T>;
}

/// `serde_json` 기반 변환기
///
/// `Serialize + DeserializeOwned` 를 구현한 모든 타입에 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeMapConverter;

impl<T> StructMapConverter<T> for SerdeMapConverter
where
    T: Serialize + DeserializeOwned,
{
    fn to_mapping(&self, value: &T) -> StoreResult<Mapping> {
        let value = serde_json::to_value(value)
            .map_err(|e| StoreError::Conversion(format!("Serialization failed: {}", e)))?;

        match value {
            Value::Object(mapping) => Ok(mapping),
            other => Err(StoreError::Conversion(format!(
                "expected an object, got {}",
                value_kind(&other)
            ))),
        }
    }

    fn from_mapping(&self, mapping: Mapping) -> StoreResult<T> {
        serde_json::from_value(Value::Object(mapping))
            .map_err(|e| StoreError::Conversion(format!("Deserialization failed: {}", e)))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
