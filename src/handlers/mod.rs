//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다.
//! 각 핸들러는 `web::Data` 로 주입된 저장소만 사용하며, 전역 상태를 읽지 않습니다.
//!
//! ```text
//! Handlers (이 모듈)        ← Web Layer
//!     │  web::Data<UserHashStore>, web::Data<StudentRepository>
//!     ▼
//! Repositories              ← Data Access Layer
//!     │  Arc<dyn KeyValueStore>
//!     ▼
//! Redis
//! ```

pub mod students;
pub mod users;
