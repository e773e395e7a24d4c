use serde_json::Value;

/// Format a duration in seconds as a zero-padded `HH:MM:SS` string
pub fn convert_duration_to_time_string(duration: u64) -> String {
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Coerce the raw `file.duration` value into whole seconds.
///
/// Accepts JSON numbers and numeric strings. Fractions are truncated toward
/// zero. Anything missing, negative, non-finite or non-numeric becomes 0.
pub fn coerce_duration(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_seconds)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_seconds))
        }
        _ => None,
    }
    .unwrap_or(0)
}

fn whole_seconds(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}
