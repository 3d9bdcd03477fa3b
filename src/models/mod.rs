// src/models/mod.rs

//! Domain models for the showcase application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod de;
mod config;
mod mentor;
mod project;
mod session;
mod stats;
mod student;

// Re-export all public types
pub use category::Category;
pub use config::{ApiConfig, CatalogConfig, Config, FeedConfig};
pub use mentor::Mentor;
pub use project::{Author, PLACEHOLDER_COVER, PLACEHOLDER_USER_IMAGE, Project};
pub use session::{Session, SessionUser};
pub use stats::Stats;
pub use student::Student;
