//! System identity structures

/// Distribution identity as read from os-release.
#[derive(Debug, Clone)]
pub struct DistroInfo {
    pub id: String,
    pub long_name: String,
    pub short_name: String,
}

impl Default for DistroInfo {
    fn default() -> Self {
        DistroInfo {
            id: "unknown".to_string(),
            long_name: "Unknown".to_string(),
            short_name: "Unknown".to_string(),
        }
    }
}

/// Desktop environment or window manager identity.
#[derive(Debug, Clone)]
pub struct DeWm {
    pub name: String,
    /// "DE" or "WM".
    pub kind: String,
    pub version: String,
}
