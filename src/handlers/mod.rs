//! HTTP handlers for student CRUD and the greeting endpoint.

pub mod greeting;
pub mod student;
