//! Distribution ascii art lookup.
//!
//! Art files may start with a `#/..;..` color header line and reference color
//! slots as `${1}`, `${2}` placeholders in their body.

use crate::config::Config;
use std::fs;
use std::path::Path;

const SYSTEM_ART_DIR: &str = "/usr/share/galefetch/ascii";

/// Art compiled into the binary for well-known distributions.
pub fn embedded_art(id: &str) -> Option<&'static str> {
    match id.to_lowercase().as_str() {
        "arch" => Some(include_str!("../ascii/arch.txt")),
        "ubuntu" => Some(include_str!("../ascii/ubuntu.txt")),
        "debian" => Some(include_str!("../ascii/debian.txt")),
        "fedora" => Some(include_str!("../ascii/fedora.txt")),
        "gentoo" => Some(include_str!("../ascii/gentoo.txt")),
        "void" => Some(include_str!("../ascii/void.txt")),
        "nixos" => Some(include_str!("../ascii/nixos.txt")),
        _ => None,
    }
}

fn trim_art(art: &str) -> String {
    art.trim_end_matches(|c| c == '\n' || c == '\t' || c == ' ').to_string()
}

/// Resolve the art to display. An explicit `ascii_path` wins, then art files
/// in the user and system config dirs named after the art id, then embedded
/// art, then a generic fallback.
pub fn load_art(config: &Config, distro_id: &str) -> String {
    if let Some(path) = config.ascii_path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        let expanded = shellexpand::tilde(path).to_string();
        if let Ok(art) = fs::read_to_string(&expanded) {
            return trim_art(&art);
        }
    }

    let id = if config.distro_ascii == "auto" {
        distro_id
    } else {
        config.distro_ascii.as_str()
    };

    if let Some(dir) = dirs::config_dir() {
        let user_path = dir.join("galefetch/ascii").join(id);
        if let Ok(art) = fs::read_to_string(&user_path) {
            return trim_art(&art);
        }
    }

    let system_path = Path::new(SYSTEM_ART_DIR).join(id);
    if let Ok(art) = fs::read_to_string(&system_path) {
        return trim_art(&art);
    }

    let art = embedded_art(id).unwrap_or(include_str!("../ascii/default.txt"));
    trim_art(art)
}
