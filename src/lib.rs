//! Student records REST service: a record store over PostgreSQL and the HTTP handlers in front of it.

pub mod codec;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{Settings, StoreConfig};
pub use error::{AppError, ConfigError};
pub use model::Student;
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_students_table, PgStudentStore, StudentStore};
