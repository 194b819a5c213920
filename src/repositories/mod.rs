//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 [`KeyValueStore`](crate::caching::KeyValueStore) 를
//! 생성자 인자로 받습니다. 전역 싱글톤이나 자동 주입은 사용하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{students::StudentRepository, users::UserHashStore};
//!
//! let users = UserHashStore::new(store.clone(), Arc::new(SerdeMapConverter));
//! let students = StudentRepository::new(store, Arc::new(SerdeMapConverter));
//! ```

pub mod students;
pub mod users;
