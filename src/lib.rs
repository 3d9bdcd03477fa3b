// src/lib.rs

//! Showcase core library: catalog search and project feed aggregation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod render;
pub mod search;
pub mod ui;
pub mod utils;
