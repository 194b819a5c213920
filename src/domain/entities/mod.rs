//! # Domain Entities Module
//!
//! Redis 에 저장되는 레코드들입니다.
//!
//! | 엔티티 | 저장 방식 | 키 |
//! |--------|-----------|----|
//! | [`User`](users::User) | 공유 해시 버킷의 필드 | `user` 버킷, 필드 = `name` |
//! | [`Student`](students::Student) | 레코드당 최상위 키 | `Student:{id}` |

pub mod students;
pub mod users;

pub use students::Student;
pub use users::User;
