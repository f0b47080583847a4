use chrono::{DateTime, Local};
use serde::Serialize;

/// Outcome of a clock action. Serialized as-is by the clock endpoints;
/// `line` is the string the attendance panel displays.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub status: &'static str,
    pub time: String,
}

impl ClockEvent {
    pub fn line(&self) -> String {
        format!("{} at {}", self.status, self.time)
    }
}

pub fn clock_in(now: DateTime<Local>) -> ClockEvent {
    ClockEvent {
        status: "Clocked in",
        time: format_time(now),
    }
}

pub fn clock_out(now: DateTime<Local>) -> ClockEvent {
    ClockEvent {
        status: "Clocked out",
        time: format_time(now),
    }
}

fn format_time(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}
