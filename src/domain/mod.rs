//! Core domain types and logic.

pub mod series;
pub mod optimal;
pub mod benchmark;
pub mod simulator;
pub mod indicator;
pub mod metrics;
pub mod config;
pub mod error;
