//! Redis 기반 사용자/학생 저장 서비스
//!
//! 사용자(`User`)는 공유 해시 버킷 `user` 에 이름을 필드 키로 저장하고,
//! 학생(`Student`)은 레코드마다 `Student:{id}` 키에 저장합니다.
//! 모든 의존성은 생성자 인자로 명시적으로 주입됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserHashStore, StudentRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  KeyValueStore  │ ← Redis (HSET/HGET, SET/GET/DEL)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bebigquery::caching::redis::RedisClient;
//! use bebigquery::domain::mapping::SerdeMapConverter;
//! use bebigquery::repositories::users::UserHashStore;
//!
//! let redis = Arc::new(RedisClient::new("redis://localhost:6379").await?);
//! let users = UserHashStore::new(redis, Arc::new(SerdeMapConverter));
//!
//! users.save(Some(&User::new(1, "Ana", "Lopez", "30"))).await;
//! let ana = users.find_by_name(Some("Ana")).await;
//! ```

pub mod caching;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod utils;
