//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙에서 관리합니다.
//! `.env` 파일은 바이너리 시작 시 `PROFILE` 에 따라 로드됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, RedisConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let redis_url = RedisConfig::url();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export REDIS_URL="redis://localhost:6379"
//! # 또는
//! export REDIS_HOST="localhost"
//! export REDIS_PORT="6379"
//! ```

pub mod data_config;

pub use data_config::*;
