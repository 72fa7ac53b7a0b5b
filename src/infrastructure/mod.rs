//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (e.g., ChatProvider, RecommendationBackend).

pub mod backend;
pub mod matrix;
pub mod webhook;
