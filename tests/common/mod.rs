//! In-memory `StudentStore` for driving the router without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use student_api::store::{not_found, require_id, require_student};
use student_api::{app, AppError, AppState, Student, StudentStore};
use tower::ServiceExt;

#[derive(Default)]
pub struct MemoryStudentStore {
    rows: Mutex<Vec<Student>>,
    pub offline: AtomicBool,
}

impl MemoryStudentStore {
    pub fn snapshot(&self) -> Vec<Student> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>, AppError> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| a.school.cmp(&b.school));
        Ok(rows)
    }

    async fn get_by_id(&self, student_id: &str) -> Result<Student, AppError> {
        let student_id = require_id(student_id)?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.student_id == student_id)
            .cloned()
            .ok_or_else(|| not_found(student_id))
    }

    async fn insert(&self, student: Option<&Student>) -> Result<(), AppError> {
        let student = require_student(student)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|s| s.student_id == student.student_id) {
            return Err(AppError::Conflict(format!(
                "duplicate key '{}'",
                student.student_id
            )));
        }
        rows.push(student.clone());
        Ok(())
    }

    async fn update(&self, student: Option<&Student>) -> Result<(), AppError> {
        let student = require_student(student)?;
        let mut rows = self.rows.lock().unwrap();
        let current = rows
            .iter_mut()
            .find(|s| s.student_id == student.student_id)
            .ok_or_else(|| not_found(&student.student_id))?;
        current.first_name = student.first_name.clone();
        current.last_name = student.last_name.clone();
        current.school = student.school.clone();
        Ok(())
    }

    async fn delete(&self, student_id: &str) -> Result<(), AppError> {
        let student_id = require_id(student_id)?;
        let mut rows = self.rows.lock().unwrap();
        let idx = rows
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| not_found(student_id))?;
        rows.remove(idx);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub const TEST_BODY_LIMIT: usize = 64 * 1024;

pub fn test_app() -> (Router, Arc<MemoryStudentStore>) {
    let store = Arc::new(MemoryStudentStore::default());
    let router = app(AppState::new(store.clone()), TEST_BODY_LIMIT);
    (router, store)
}

/// Send one request; returns status and raw body bytes.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub fn student_json(id: &str, first: &str, last: &str, school: &str) -> String {
    serde_json::json!({
        "studentId": id,
        "firstName": first,
        "lastName": last,
        "school": school,
    })
    .to_string()
}
