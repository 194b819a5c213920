//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;
use crate::errors::{StoreError, StoreResult};

/// 필수 문자열 필드 검증 및 정리
///
/// 값이 없거나, 빈 문자열이거나, 공백만 있는 경우 `StoreError::InvalidInput` 을 반환하고,
/// 유효한 문자열인 경우 원래 값을 그대로 반환합니다. 저장 키로 쓰이므로 공백을 제거하지 않습니다.
///
/// # 인자
/// * `value` - 검증할 문자열 (없을 수 있음)
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string(Some("  Hello  "), "name").unwrap(), "  Hello  ");
/// assert!(validate_required_string(Some("   "), "name").is_err());
/// assert!(validate_required_string(None, "name").is_err());
/// ```
pub fn validate_required_string<'a>(value: Option<&'a str>, field_name: &str) -> StoreResult<&'a str> {
    match value {
        Some(value) if is_valid_string(value) => Ok(value),
        _ => Err(StoreError::InvalidInput(format!("{}은(는) 필수입니다", field_name))),
    }
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 텍스트로 보관할 선택적 필드를 위한 serde deserializer
///
/// 문자열은 그대로, 숫자와 불리언은 문자열로 변환해서 받습니다.
/// `null` 은 `None` 이 됩니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct User {
///     #[serde(default, deserialize_with = "deserialize_optional_text")]
///     age: Option<String>,
/// }
///
/// // JSON: {"age": 30}   → Some("30")
/// // JSON: {"age": "30"} → Some("30")
/// // JSON: {"age": null} → None
/// ```
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    let opt = Option::<Text>::deserialize(deserializer)?;
    Ok(opt.map(|text| match text {
        Text::Str(s) => s,
        Text::Int(n) => n.to_string(),
        Text::Float(n) => n.to_string(),
        Text::Bool(b) => b.to_string(),
    }))
}
