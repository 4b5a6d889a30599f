use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// `HH:MM:SS up N sec` for a session started at `started_at`
pub fn execute_uptime(started_at: Instant) -> String {
    format_uptime(Local::now(), started_at.elapsed())
}

pub fn format_uptime(now: DateTime<Local>, elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64().round() as u64;
    format!("{} up {seconds} sec\n", now.format("%H:%M:%S"))
}
