//! Users Entity Module
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(1, "Ana", "Lopez", "30");
//! assert_eq!(user.name.as_deref(), Some("Ana"));
//! ```

pub mod user;

pub use user::User;
