//! 사용자 데이터 액세스 계층
//!
//! [`UserHashStore`](user_repo::UserHashStore) 는 모든 사용자를 `user` 해시 버킷 하나에
//! 이름을 필드 키로 저장합니다.

pub mod user_repo;

pub use user_repo::{USER_HASH_KEY, UserHashStore};
