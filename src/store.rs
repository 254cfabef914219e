//! Record store for students: the persistence contract and its argument checks.

mod postgres;

pub use postgres::{ensure_students_table, PgStudentStore};

use crate::error::AppError;
use crate::model::Student;
use async_trait::async_trait;

/// Persistence of student records.
///
/// `None` for `insert`/`update` stands for an absent body and is rejected with
/// [`AppError::InvalidArgument`], as is an empty `student_id`. Lookups that match
/// no row fail with [`AppError::NotFound`]. Each mutating call is a single commit.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All students, ascending by school.
    async fn list_all(&self) -> Result<Vec<Student>, AppError>;

    async fn get_by_id(&self, student_id: &str) -> Result<Student, AppError>;

    async fn insert(&self, student: Option<&Student>) -> Result<(), AppError>;

    /// Overwrites first name, last name and school of the row keyed by `student.student_id`.
    async fn update(&self, student: Option<&Student>) -> Result<(), AppError>;

    async fn delete(&self, student_id: &str) -> Result<(), AppError>;

    /// Round-trip to the backing database; used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}

pub fn require_id(student_id: &str) -> Result<&str, AppError> {
    if student_id.is_empty() {
        return Err(AppError::InvalidArgument("studentId is required".into()));
    }
    Ok(student_id)
}

pub fn require_student(student: Option<&Student>) -> Result<&Student, AppError> {
    student.ok_or_else(|| AppError::InvalidArgument("student is required".into()))
}

pub fn not_found(student_id: &str) -> AppError {
    AppError::NotFound(format!("student '{}'", student_id))
}
