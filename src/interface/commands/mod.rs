//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., !setchannel, !send, !help).
//! These handlers are invoked by the Router.

pub mod help;
pub mod schedule;
pub mod send;
