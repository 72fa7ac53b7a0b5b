//! # Command Parsing
//!
//! Turns raw chat text into a closed `Command` value. Parsing happens once, up front,
//! so the router only matches on variants and malformed arguments never reach the backend.
//!
//! Bare commands (`!setchannel`, `!hello`, `!help`) are matched case-insensitively.
//! Commands taking an argument (`!setkeyword`, `!setinterval`, `!send`) are matched by prefix.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use crate::domain::config::MAX_INTERVAL;
use crate::strings::messages;

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(![A-Za-z]+)(?:\s+(.*))?$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetChannel,
    SetKeyword(String),
    SetInterval(IntervalRequest),
    Send(String),
    Hello,
    Help,
    /// Recognized command with unusable arguments.
    Invalid(UsageError),
    Unrecognized,
}

/// A validated `!setinterval` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRequest {
    pub amount: u64,
    /// Unit as typed by the user (lowercased), used in the confirmation.
    pub unit: String,
    pub interval: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    EmptyKeyword,
    EmptySend,
    IntervalFormat,
    IntervalNumber,
    IntervalUnit,
}

impl UsageError {
    pub fn message(&self) -> &'static str {
        match self {
            UsageError::EmptyKeyword => messages::KEYWORD_USAGE,
            UsageError::EmptySend => messages::SEND_USAGE,
            UsageError::IntervalFormat => messages::INTERVAL_USAGE,
            UsageError::IntervalNumber => messages::INVALID_NUMBER,
            UsageError::IntervalUnit => messages::INVALID_UNIT,
        }
    }
}

pub fn parse_command(input: &str) -> Command {
    let msg = input.trim();
    let Some(caps) = COMMAND_RE.captures(msg) else {
        return Command::Unrecognized;
    };

    let head = caps.get(1).map_or("", |m| m.as_str());
    let args = caps.get(2).map_or("", |m| m.as_str().trim());

    match head {
        "!setkeyword" if args.is_empty() => Command::Invalid(UsageError::EmptyKeyword),
        "!setkeyword" => Command::SetKeyword(args.to_string()),
        "!setinterval" => match parse_interval(args) {
            Ok(request) => Command::SetInterval(request),
            Err(e) => Command::Invalid(e),
        },
        "!send" if args.is_empty() => Command::Invalid(UsageError::EmptySend),
        "!send" => Command::Send(args.to_string()),
        _ if args.is_empty() => match head.to_lowercase().as_str() {
            "!setchannel" => Command::SetChannel,
            "!hello" => Command::Hello,
            "!help" => Command::Help,
            _ => Command::Unrecognized,
        },
        _ => Command::Unrecognized,
    }
}

/// Parses `<n> <unit>` with `n >= 1` and unit in minutes/minute/hours/hour.
pub fn parse_interval(args: &str) -> Result<IntervalRequest, UsageError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [amount, unit] = parts.as_slice() else {
        return Err(UsageError::IntervalFormat);
    };

    let amount = match amount.parse::<i64>() {
        Ok(n) if n > 0 => n as u64,
        _ => return Err(UsageError::IntervalNumber),
    };

    let unit = unit.to_lowercase();
    let unit_secs: u64 = match unit.as_str() {
        "minutes" | "minute" => 60,
        "hours" | "hour" => 3600,
        _ => return Err(UsageError::IntervalUnit),
    };

    let interval = amount
        .checked_mul(unit_secs)
        .map(Duration::from_secs)
        .filter(|d| *d <= MAX_INTERVAL)
        .ok_or(UsageError::IntervalNumber)?;

    Ok(IntervalRequest {
        amount,
        unit,
        interval,
    })
}
