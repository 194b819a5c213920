//! 키-값 저장소 계층 모듈
//!
//! 리포지토리가 사용하는 좁은 저장소 인터페이스 [`KeyValueStore`] 와
//! Redis 구현체 [`RedisClient`](redis::RedisClient) 를 제공합니다.
//!
//! # 주요 기능
//!
//! - 해시 버킷 필드 단위 저장/조회 (HSET / HGET)
//! - 최상위 키 단위 저장/조회/삭제 (SET / GET / DEL)
//! - 매핑은 JSON 객체로 직렬화되어 저장됩니다
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{KeyValueStore, redis::RedisClient};
//!
//! let store = RedisClient::new(&RedisConfig::url()).await?;
//! store.hash_set("user", "Ana", &mapping).await?;
//! let stored = store.hash_get("user", "Ana").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use crate::domain::mapping::Mapping;
use crate::errors::{StoreError, StoreResult};

/// 리포지토리가 사용하는 키-값 저장소
///
/// 각 메서드는 원격 저장소의 명령 하나에 대응하며, 필드 단위로 원자적입니다.
/// 동일 필드에 대한 동시 쓰기는 마지막 쓰기가 남습니다.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `bucket` 해시의 `field` 에 매핑을 저장합니다. 기존 값은 덮어씁니다.
    async fn hash_set(&self, bucket: &str, field: &str, value: &Mapping) -> StoreResult<()>;

    /// `bucket` 해시의 `field` 값을 조회합니다. 필드가 없으면 `None`.
    async fn hash_get(&self, bucket: &str, field: &str) -> StoreResult<Option<Mapping>>;

    /// 최상위 키에 매핑을 저장합니다.
    async fn set_value(&self, key: &str, value: &Mapping) -> StoreResult<()>;

    /// 최상위 키의 매핑을 조회합니다. 키가 없으면 `None`.
    async fn get_value(&self, key: &str) -> StoreResult<Option<Mapping>>;

    /// 최상위 키를 삭제합니다. 실제로 삭제되었으면 `true`.
    async fn delete(&self, key: &str) -> StoreResult<bool>;
}

/// 매핑을 저장용 JSON 문자열로 인코딩합니다.
pub(crate) fn encode_mapping(value: &Mapping) -> StoreResult<String> {
    serde_json::to_string(value)
        .map_err(|e| StoreError::Conversion(format!("Serialization failed: {}", e)))
}

/// 저장된 JSON 문자열을 매핑으로 디코딩합니다. 객체가 아니면 변환 에러입니다.
pub(crate) fn decode_mapping(raw: &str) -> StoreResult<Mapping> {
    serde_json::from_str(raw)
        .map_err(|e| StoreError::Conversion(format!("Deserialization failed: {}", e)))
}
