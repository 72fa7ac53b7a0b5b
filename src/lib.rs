//! # Jukebox
//!
//! Chat relay that answers `!send` with music recommendations from an external backend
//! and posts a recommendation to a configured room on a runtime-adjustable schedule.
//!
//! Layout:
//! - Domain: Configuration, Types, Traits, Errors
//! - Infrastructure: Matrix, Recommendation Backend, Webhook
//! - Application: Router, Parsing, Orchestrator, Scheduler, Logging
//! - Interface: Command Handlers

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;

#[cfg(test)]
pub(crate) mod testing;
