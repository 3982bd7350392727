pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod tiles;
// cmd and reports are binary modules, declared in main.rs.
