//! # Redis 저장소 클라이언트 구현
//!
//! Redis 를 백엔드로 하는 [`KeyValueStore`] 구현체입니다.
//! 해시 필드와 최상위 키 모두 JSON 객체 문자열로 값을 저장합니다.
//!
//! ## 연결 관리
//!
//! 생성 시 만든 [`ConnectionManager`] 하나를 모든 요청이 복제해 공유합니다.
//! 멀티플렉싱된 단일 연결 위에서 동작하며, 연결이 끊기면 자동으로 재연결합니다.

use async_trait::async_trait;
use log::info;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use crate::caching::{KeyValueStore, decode_mapping, encode_mapping};
use crate::domain::mapping::Mapping;
use crate::errors::StoreResult;

/// Redis 클라이언트 래퍼
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new("redis://localhost:6379").await?;
/// redis.hash_set("user", "Ana", &mapping).await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 재연결을 관리하는 공유 연결
    connection: ConnectionManager,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 생성 시 PING 명령으로 Redis 서버의 가용성을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - 잘못된 URL 형식
    /// - Redis 서버에 연결할 수 없는 경우
    /// - 인증 실패
    pub async fn new(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url)?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut connection = client.get_connection_manager().await?;
        redis::cmd("PING").query_async::<()>(&mut connection).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStore for RedisClient {
    async fn hash_set(&self, bucket: &str, field: &str, value: &Mapping) -> StoreResult<()> {
        let json = encode_mapping(value)?;
        let mut conn = self.connection.clone();
        let _: () = conn.hset(bucket, field, json).await?;
        Ok(())
    }

    async fn hash_get(&self, bucket: &str, field: &str) -> StoreResult<Option<Mapping>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.hget(bucket, field).await?;

        value.as_deref().map(decode_mapping).transpose()
    }

    async fn set_value(&self, key: &str, value: &Mapping) -> StoreResult<()> {
        let json = encode_mapping(value)?;
        let mut conn = self.connection.clone();
        let _: () = conn.set(key, json).await?;
        Ok(())
    }

    async fn get_value(&self, key: &str) -> StoreResult<Option<Mapping>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;

        value.as_deref().map(decode_mapping).transpose()
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.connection.clone();
        let removed: u64 = conn.del(key).await?;
        Ok(removed > 0)
    }
}
