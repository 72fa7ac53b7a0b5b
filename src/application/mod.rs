//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot.
//! This includes command parsing and routing, the recommendation pipeline, and the scheduler.

pub mod logging;
pub mod orchestrator;
pub mod parsing;
pub mod router;
pub mod scheduler;
