//! File reading utilities

use crate::error::Result;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read first line of a file, trimmed.
/// Meant for single-line pseudo files like /proc/sys/kernel/hostname.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse a `KEY=value` file (os-release style) into a map. Values may be
/// double-quoted; quotes are stripped.
pub fn read_key_value_file<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    let mut map = HashMap::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}

/// Check if a file exists safely
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
