//! # vkoload-cli
//!
//! Freestanding entry point for the tracer launcher:
//! - configuration layering (flag > environment > default)
//! - structured JSONL launch events
//! - probe mode reporting loadability without invoking

#![forbid(unsafe_code)]

pub mod config;
pub mod probe;
pub mod structured_log;
