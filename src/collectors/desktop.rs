//! Desktop environment, window manager and monitor detection.

use crate::data::{DeWm, Monitor};
use crate::utils::command::{run_command, run_shell};
use std::collections::HashSet;
use std::env;
use std::fs;

pub fn session_type() -> String {
    env::var("XDG_SESSION_TYPE").unwrap_or_default()
}

pub fn display_protocol() -> String {
    match session_type().as_str() {
        "x11" => "X11".to_string(),
        "wayland" => "Wayland".to_string(),
        _ => String::new(),
    }
}

struct DesktopEntry {
    process: &'static str,
    name: &'static str,
    kind: &'static str,
    /// Version probe: command plus the whitespace token of its first
    /// output line that carries the version.
    version: Option<(&'static str, usize)>,
}

const DESKTOPS: &[DesktopEntry] = &[
    DesktopEntry { process: "plasmashell", name: "KDE Plasma", kind: "DE", version: Some(("plasmashell --version", 1)) },
    DesktopEntry { process: "gnome-session", name: "Gnome", kind: "DE", version: Some(("gnome-shell --version", 2)) },
    DesktopEntry { process: "xfce4-session", name: "XFCE", kind: "DE", version: Some(("xfce4-session --version", 1)) },
    DesktopEntry { process: "cinnamon", name: "Cinnamon", kind: "DE", version: Some(("cinnamon --version", 1)) },
    DesktopEntry { process: "mate-panel", name: "MATE", kind: "DE", version: Some(("mate-about --version", 3)) },
    DesktopEntry { process: "lxsession", name: "LXDE", kind: "DE", version: None },
    DesktopEntry { process: "lxqt-session", name: "LXQt", kind: "DE", version: Some(("lxqt-session --version", 1)) },
    DesktopEntry { process: "i3", name: "i3", kind: "WM", version: Some(("i3 --version", 2)) },
    DesktopEntry { process: "sway", name: "Sway", kind: "WM", version: Some(("sway --version", 2)) },
    DesktopEntry { process: "bspwm", name: "Bspwm", kind: "WM", version: Some(("bspwm -v", 0)) },
    DesktopEntry { process: "Hyprland", name: "Hyprland", kind: "WM", version: Some(("hyprctl version", 2)) },
    DesktopEntry { process: "icewm-session", name: "IceWM", kind: "WM", version: Some(("icewm --version", 1)) },
];

/// Names of every running process, from /proc/<pid>/comm.
fn running_processes() -> HashSet<String> {
    let Ok(entries) = fs::read_dir("/proc") else {
        return HashSet::new();
    };

    entries
        .flatten()
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .map(|name| name.bytes().all(|b| b.is_ascii_digit()))
                .unwrap_or(false)
        })
        .filter_map(|entry| fs::read_to_string(entry.path().join("comm")).ok())
        .map(|comm| comm.trim().to_string())
        .collect()
}

/// Detect the running desktop environment or window manager by scanning the
/// process table. `None` when nothing recognizable is running.
pub fn de_wm() -> Option<DeWm> {
    let processes = running_processes();

    for entry in DESKTOPS {
        if !processes.contains(entry.process) {
            continue;
        }
        let version = entry
            .version
            .and_then(|(command, token)| {
                let output = run_shell(command, "/bin/sh");
                output
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(token))
                    .map(|v| v.trim_matches(|c| c == 'v' || c == ',').to_string())
            })
            .unwrap_or_default();

        return Some(DeWm {
            name: entry.name.to_string(),
            kind: entry.kind.to_string(),
            version,
        });
    }

    None
}

/// Connected monitor geometry via xrandr. Degrades to empty when no display
/// server is reachable.
pub fn monitors() -> Vec<Monitor> {
    if display_protocol().is_empty() {
        return Vec::new();
    }
    let Ok(output) = run_command("xrandr", &["--current"]) else {
        return Vec::new();
    };
    parse_xrandr_modes(&output)
}

/// Extract the active mode lines (the ones carrying a `*`).
fn parse_xrandr_modes(output: &str) -> Vec<Monitor> {
    let mut monitors = Vec::new();

    for line in output.lines() {
        if !line.starts_with(' ') || !line.contains('*') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(resolution) = tokens.next() else {
            continue;
        };
        let Some((width, height)) = resolution.split_once('x') else {
            continue;
        };
        let (Ok(width), Ok(height)) = (
            width.parse::<u32>(),
            height.trim_end_matches('i').parse::<u32>(),
        ) else {
            continue;
        };

        let refresh_rate = line
            .split_whitespace()
            .find(|token| token.contains('*'))
            .and_then(|token| {
                token
                    .trim_end_matches(|c| c == '*' || c == '+')
                    .parse::<f64>()
                    .ok()
            })
            .map(|rate| rate.round() as u32)
            .unwrap_or(0);

        monitors.push(Monitor {
            width,
            height,
            refresh_rate,
        });
    }

    monitors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xrandr_active_modes_only() {
        let output = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
DP-1 connected primary 1920x1080+0+0 (normal left inverted) 527mm x 296mm
   1920x1080     60.00*+  59.94
   1280x720      60.00    59.94
HDMI-1 disconnected (normal left inverted right x axis y axis)
";
        let monitors = parse_xrandr_modes(output);
        assert_eq!(monitors.len(), 1);
        assert_eq!(monitors[0].width, 1920);
        assert_eq!(monitors[0].height, 1080);
        assert_eq!(monitors[0].refresh_rate, 60);
    }
}
