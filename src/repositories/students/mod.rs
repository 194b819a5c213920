//! 학생 데이터 액세스 계층

pub mod student_repo;

pub use student_repo::StudentRepository;
