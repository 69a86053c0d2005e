// QBoard library: shared data-access layer for the questions board

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod telemetry;
