//! Students Entity Module

pub mod student;

pub use student::Student;
