pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub const SHUTDOWN: &str = "Shutting down...";

pub fn shutdown_fail(err: &str) -> String {
    format!("Unable to listen for shutdown signal: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn invite_join_fail(room_id: &str, err: &str) -> String {
    format!("Failed to join room {room_id}: {err}")
}

pub const NO_DESTINATION: &str = "No destination channel set, skipping scheduled recommendation";

pub fn timer_armed(interval: &str, next_at: &str) -> String {
    format!("Recommendation timer armed: every {interval}, next at {next_at}")
}

pub const TIMER_RESTARTED: &str = "Recommendation timer restarted";

pub const TIMER_STOPPED: &str = "Recommendation timer stopped";

pub fn send_failed(channel_id: &str, err: &str) -> String {
    format!("Failed to send message to {channel_id}: {err}")
}
