//! Synthetic operational log generation for the mock server

use chrono::{SecondsFormat, Utc};
use rand::{seq::SliceRandom, Rng};

use crate::domain::resources::ResourceKind;

pub const MOCK_LOG_LINES: usize = 200;
pub const MALFORMED_LOG_LINE: &str = "failed to start vm:123456(deleted)";
pub const LOG_ACTIONS: [&str; 6] = [
    "created", "started", "stopped", "deleted", "accessed", "updated",
];

pub fn generate_mock_logs<R: Rng>(rng: &mut R, line_count: usize) -> String {
    let mut lines: Vec<String> = (0..line_count)
        .map(|_| {
            let kind = ResourceKind::ALL
                .choose(rng)
                .copied()
                .unwrap_or(ResourceKind::Vm);
            let id: u32 = rng.gen_range(100_000..1_000_000);
            let action = LOG_ACTIONS.choose(rng).copied().unwrap_or("created");
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            format!("[{timestamp}] {kind}:{id} was {action}")
        })
        .collect();

    let insertion_point = if lines.is_empty() {
        0
    } else {
        rng.gen_range(0..lines.len())
    };
    lines.insert(insertion_point, MALFORMED_LOG_LINE.to_string());

    lines.join("\n")
}
