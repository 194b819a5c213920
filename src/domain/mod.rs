//! # Domain Layer Module
//!
//! 저장소에 보관되는 도메인 레코드와 레코드 ↔ 매핑 변환 규칙을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - User, Student 레코드
//! └── mapping   - 타입 있는 레코드 ↔ 문자열 키 매핑 변환기
//!      │
//!      ▼
//! Repositories (UserHashStore, StudentRepository)
//!      │
//!      ▼
//! Caching (KeyValueStore / Redis)
//! ```

pub mod entities;
pub mod mapping;

pub use entities::*;
pub use mapping::*;
