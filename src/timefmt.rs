//! Human-readable time labels shared by the length and elapsed displays.

/// Format whole seconds the way the transport labels show them:
/// `"42s"`, `"3m, 5s"`, `"1h, 1m, 1s"`.
pub fn format_seconds(total: u64) -> String {
    if total < 60 {
        return format!("{total}s");
    }

    let minutes = total / 60;
    let seconds = total % 60;
    if minutes < 60 {
        format!("{minutes}m, {seconds}s")
    } else {
        format!("{}h, {}m, {}s", minutes / 60, minutes % 60, seconds)
    }
}
