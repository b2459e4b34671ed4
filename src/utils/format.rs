//! Human-readable formatting helpers.

const SUFFIXES: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Format a byte count with binary units and one decimal.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for suffix in SUFFIXES {
        if value < 1024.0 {
            return format!("{:.1} {}", value, suffix);
        }
        value /= 1024.0;
    }
    format!("{:.1} EiB", value)
}
