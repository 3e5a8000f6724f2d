//! Core types and configuration for recvcheck.
//!
//! This crate provides the foundational data structures used across all recvcheck crates:
//! - [`types`]: Function declarations, receiver bindings, and type expressions
//! - [`source`]: The [`GeneratedFileDetector`](source::GeneratedFileDetector) collaborator trait
//! - [`config`]: Configuration loading from `.recvcheck.json`

pub mod config;
pub mod source;
pub mod types;
