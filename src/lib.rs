//! Havaplan Library
//!
//! This module exposes the rule engine and payload models for use in
//! integration tests.

pub mod activity;
pub mod advice;
pub mod cli;
pub mod data;
pub mod report;
pub mod suitability;
