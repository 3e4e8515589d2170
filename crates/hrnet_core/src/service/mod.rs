//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, store and presentation into use-case APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod employee_service;
