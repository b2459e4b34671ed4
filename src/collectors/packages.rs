//! Package count collection across package managers.

use crate::collectors::system;
use crate::utils::command::{command_exists, run_shell};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

struct PackageManager {
    name: &'static str,
    executable: &'static str,
    counter: Counter,
}

enum Counter {
    /// Entries of a directory, optionally directories only.
    DirEntries { path: &'static str, dirs_only: bool },
    /// Lines of a file, optionally only those containing a marker.
    FileLines { path: &'static str, must_contain: &'static str },
    /// Lines printed by a shell command.
    CommandLines { command: &'static str },
    Portage,
    Flatpak,
    Snap,
}

const PACKAGE_MANAGERS: &[PackageManager] = &[
    PackageManager {
        name: "dpkg",
        executable: "dpkg",
        counter: Counter::FileLines {
            path: "/var/lib/dpkg/status",
            must_contain: "Status: install ok installed",
        },
    },
    PackageManager {
        name: "pacman",
        executable: "pacman",
        counter: Counter::DirEntries { path: "/var/lib/pacman/local/", dirs_only: true },
    },
    PackageManager {
        name: "rpm",
        executable: "rpm",
        counter: Counter::CommandLines { command: "rpm -qa" },
    },
    PackageManager {
        name: "xbps",
        executable: "xbps-query",
        counter: Counter::FileLines {
            path: "/var/db/xbps/pkgdb-0.38.plist",
            must_contain: "<string>installed</string>",
        },
    },
    PackageManager {
        name: "portage",
        executable: "emerge",
        counter: Counter::Portage,
    },
    PackageManager {
        name: "flatpak",
        executable: "flatpak",
        counter: Counter::Flatpak,
    },
    PackageManager {
        name: "snap",
        executable: "snap",
        counter: Counter::Snap,
    },
];

impl PackageManager {
    fn count(&self) -> usize {
        if !command_exists(self.executable) {
            return 0;
        }
        match &self.counter {
            Counter::DirEntries { path, dirs_only } => dir_entries(path, *dirs_only),
            Counter::FileLines { path, must_contain } => file_lines(path, must_contain),
            Counter::CommandLines { command } => command_lines(command),
            Counter::Portage => portage_packages(),
            Counter::Flatpak => flatpak_packages(),
            Counter::Snap => snap_packages(),
        }
    }
}

/// Summary of installed packages across every detected package manager,
/// e.g. "1042 (pacman) 13 (flatpak)".
pub fn installed_packages() -> String {
    let counts: Vec<(&str, usize)> = PACKAGE_MANAGERS
        .par_iter()
        .map(|pm| (pm.name, pm.count()))
        .collect();

    counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| format!("{} ({})", count, name))
        .collect::<Vec<String>>()
        .join(" ")
}

fn dir_entries(path: &str, dirs_only: bool) -> usize {
    let Ok(entries) = fs::read_dir(path) else {
        return 0;
    };
    entries
        .flatten()
        .filter(|entry| {
            !dirs_only || entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
        })
        .count()
}

fn file_lines(path: &str, must_contain: &str) -> usize {
    let Ok(content) = fs::read_to_string(path) else {
        return 0;
    };
    content
        .trim()
        .lines()
        .filter(|line| must_contain.is_empty() || line.contains(must_contain))
        .count()
}

fn command_lines(command: &str) -> usize {
    let output = run_shell(command, "/bin/sh");
    if output.is_empty() {
        return 0;
    }
    output.lines().count()
}

fn portage_packages() -> usize {
    let Ok(repos) = fs::read_dir("/var/db/pkg") else {
        return 0;
    };
    repos
        .flatten()
        .filter(|repo| repo.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|repo| dir_entries(&repo.path().to_string_lossy(), false))
        .sum()
}

fn flatpak_packages() -> usize {
    let arch = system::arch();
    let mut total = 0;

    for kind in ["app", "runtime"] {
        let dir = Path::new("/var/lib/flatpak").join(kind);
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".Locale") || name.ends_with(".Debug") {
                continue;
            }
            total += dir_entries(&entry.path().join(&arch).to_string_lossy(), false);
        }
    }

    total
}

fn snap_packages() -> usize {
    // Both snap dirs contain a "bin" entry next to the packages.
    for dir in ["/snap", "/var/lib/snapd/snap"] {
        let total = dir_entries(dir, true);
        if total > 0 {
            return total - 1;
        }
    }
    0
}
