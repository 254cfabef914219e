//! PostgreSQL-backed student store. Every call is one parameterized statement.
//! Reads retry transient failures; writes run once.

use super::{not_found, require_id, require_student, StudentStore};
use crate::config::StoreConfig;
use crate::db::{execute_once, retry_transient};
use crate::error::AppError;
use crate::model::Student;
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_ALL: &str =
    "SELECT student_id, first_name, last_name, school FROM students ORDER BY school ASC";
const SELECT_ONE: &str =
    "SELECT student_id, first_name, last_name, school FROM students WHERE student_id = $1";
const INSERT: &str =
    "INSERT INTO students (student_id, first_name, last_name, school) VALUES ($1, $2, $3, $4)";
const UPDATE: &str =
    "UPDATE students SET first_name = $2, last_name = $3, school = $4 WHERE student_id = $1";
const DELETE: &str = "DELETE FROM students WHERE student_id = $1";
const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        student_id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        school TEXT NOT NULL
    )
"#;

/// Create the students table if it does not exist yet. Idempotent.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: PgPool,
    config: StoreConfig,
}

impl PgStudentStore {
    pub fn new(pool: PgPool, config: StoreConfig) -> Self {
        Self { pool, config }
    }

    /// Connect using `config` (with its retry policy) and wrap the pool.
    pub async fn connect(config: StoreConfig) -> Result<Self, AppError> {
        let pool = crate::db::connect(&config).await?;
        Ok(Self::new(pool, config))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = SELECT_ALL, "query");
        let pool = &self.pool;
        retry_transient(&self.config, "list_all", move || {
            sqlx::query_as::<_, Student>(SELECT_ALL).fetch_all(pool)
        })
        .await
    }

    async fn get_by_id(&self, student_id: &str) -> Result<Student, AppError> {
        let student_id = require_id(student_id)?;
        tracing::debug!(sql = SELECT_ONE, student_id, "query");
        let pool = &self.pool;
        let row = retry_transient(&self.config, "get_by_id", move || {
            sqlx::query_as::<_, Student>(SELECT_ONE)
                .bind(student_id)
                .fetch_optional(pool)
        })
        .await?;
        row.ok_or_else(|| not_found(student_id))
    }

    async fn insert(&self, student: Option<&Student>) -> Result<(), AppError> {
        let student = require_student(student)?;
        tracing::debug!(sql = INSERT, student_id = %student.student_id, "query");
        let pool = &self.pool;
        execute_once("insert", move || {
            sqlx::query(INSERT)
                .bind(student.student_id.as_str())
                .bind(student.first_name.as_str())
                .bind(student.last_name.as_str())
                .bind(student.school.as_str())
                .execute(pool)
        })
        .await?;
        Ok(())
    }

    async fn update(&self, student: Option<&Student>) -> Result<(), AppError> {
        let student = require_student(student)?;
        tracing::debug!(sql = UPDATE, student_id = %student.student_id, "query");
        let pool = &self.pool;
        let result = execute_once("update", move || {
            sqlx::query(UPDATE)
                .bind(student.student_id.as_str())
                .bind(student.first_name.as_str())
                .bind(student.last_name.as_str())
                .bind(student.school.as_str())
                .execute(pool)
        })
        .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(&student.student_id));
        }
        Ok(())
    }

    async fn delete(&self, student_id: &str) -> Result<(), AppError> {
        let student_id = require_id(student_id)?;
        tracing::debug!(sql = DELETE, student_id, "query");
        let pool = &self.pool;
        let result = execute_once("delete", move || {
            sqlx::query(DELETE).bind(student_id).execute(pool)
        })
        .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(student_id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
