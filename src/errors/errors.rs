//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 두 계층의 에러를 정의합니다.
//!
//! - [`StoreError`] - 저장소 계층의 실패 사유 (입력 오류, Redis 오류, 변환 오류)
//! - [`AppError`] - HTTP 응답으로 변환되는 애플리케이션 에러
//!
//! 저장소 계층은 실패를 호출자에게 panic 으로 전파하지 않고,
//! 항상 `Result<_, StoreError>` 로 실패 사유를 돌려줍니다.
//! "찾을 수 없음"은 에러가 아니라 `Ok(None)` 입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, StoreError};
//!
//! async fn load(store: &UserHashStore, name: &str) -> Result<User, AppError> {
//!     store.try_find_by_name(Some(name)).await?
//!         .ok_or_else(|| AppError::NotFound(format!("user '{}'", name)))
//! }
//! ```

use thiserror::Error;

/// 저장소 계층 실패 사유
///
/// `UserHashStore`, `StudentRepository`, `KeyValueStore` 구현체가 공통으로 사용합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// null 이거나 공백뿐인 키 등 잘못된 입력. 저장소에 접근하기 전에 거부됩니다.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Redis 연결, 명령 실행 등 저장소 통신 실패
    #[error("Store failure: {0}")]
    Store(String),

    /// 레코드 ↔ 매핑 변환 실패 (형태 불일치)
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Store(e.to_string())
    }
}

/// 편의성을 위한 저장소 Result 타입 별칭
pub type StoreResult<T> = Result<T, StoreError>;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// Redis 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 레코드 변환 에러 (500 Internal Server Error)
    #[error("Conversion error: {0}")]
    ConversionError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidInput(msg) => AppError::ValidationError(msg),
            StoreError::Store(msg) => AppError::RedisError(msg),
            StoreError::Conversion(msg) => AppError::ConversionError(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
