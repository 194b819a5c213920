//! User Entity Implementation

use serde::{Deserialize, Serialize};
use crate::utils::string_utils::deserialize_optional_text;

/// 사용자 레코드
///
/// `user` 해시 버킷 안에 `name` 을 필드 키로 저장됩니다.
/// 모든 필드는 비어 있을 수 있으며, `name` 이 비어 있으면 저장/조회 대상이 되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 숫자 식별자
    #[serde(default)]
    pub id: Option<i64>,
    /// 이름 (해시 버킷 내 조회 키)
    #[serde(default)]
    pub name: Option<String>,
    /// 성
    #[serde(default)]
    pub surname: Option<String>,
    /// 나이 (텍스트로 저장, 입력은 숫자도 허용)
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub age: Option<String>,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            surname: Some(surname.into()),
            age: Some(age.into()),
        }
    }
}
