//! Student Entity Implementation
//!
//! 학생 레코드와 입력 검증 규칙을 정의합니다.
//! 레코드 하나가 최상위 키 하나(`Student:{id}`)에 저장됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::is_valid_string;

/// 학생 레코드의 최상위 키 접두사
pub const STUDENT_KEY_PREFIX: &str = "Student";

/// 학생 레코드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Student {
    /// 학생 식별자 (공백 불가)
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,

    /// 학생 이름 (공백 불가)
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 입학 연도 (2018 이상)
    #[validate(range(min = 2018, message = "입학 연도는 2018년 이후여야 합니다"))]
    pub year: i32,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
        }
    }

    /// 이 학생이 저장되는 Redis 키
    pub fn key(&self) -> String {
        student_key(&self.id)
    }
}

/// 학생 ID 로 Redis 키를 생성합니다. ID 는 가공 없이 그대로 키가 됩니다.
pub fn student_key(id: &str) -> String {
    format!("{}:{}", STUDENT_KEY_PREFIX, id)
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("값이 비어 있을 수 없습니다".into()));
    }
    Ok(())
}
