//! System identity collection (distro, kernel, init, libc, shell).

use crate::data::DistroInfo;
use crate::utils::command::{run_command, run_shell};
use crate::utils::file::{file_exists, read_first_line, read_key_value_file};
use std::env;
use std::fs;

pub fn distro_info(name_override: Option<&str>) -> DistroInfo {
    let mut info = DistroInfo::default();

    if let Some(name) = name_override.map(str::trim).filter(|n| !n.is_empty()) {
        info.long_name = name.to_string();
        info.short_name = name.to_string();
    }

    // Bedrock Linux hides the real os-release behind its own prefix.
    let release_file = if env::var("BEDROCK_RESTRICT").unwrap_or_default().is_empty()
        && file_exists("/bedrock/etc/os-release")
    {
        "/bedrock/etc/os-release"
    } else if file_exists("/etc/os-release") {
        "/etc/os-release"
    } else {
        return info;
    };

    let Ok(release) = read_key_value_file(release_file) else {
        return info;
    };

    if let Some(id) = release.get("ID") {
        info.id = id.clone();
    }
    if let Some(long_name) = release.get("PRETTY_NAME") {
        if info.long_name == "Unknown" {
            info.long_name = long_name.clone();
        }
    }
    if let Some(short_name) = release.get("NAME") {
        if info.short_name == "Unknown" {
            info.short_name = short_name.clone();
        }
    }

    info
}

fn utsname() -> Option<libc::utsname> {
    let mut buf: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut buf) } == 0 {
        Some(buf)
    } else {
        None
    }
}

fn c_chars_to_string(field: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub fn arch() -> String {
    match utsname() {
        Some(uts) => c_chars_to_string(&uts.machine),
        None => "unknown".to_string(),
    }
}

pub fn kernel() -> (String, String) {
    match utsname() {
        Some(uts) => (
            c_chars_to_string(&uts.sysname),
            c_chars_to_string(&uts.release),
        ),
        None => ("unknown".to_string(), "unknown".to_string()),
    }
}

pub fn hostname() -> String {
    read_first_line("/proc/sys/kernel/hostname").unwrap_or_default()
}

/// Identify the init system from PID 1, with a version where one is cheap
/// to query.
pub fn init_system() -> String {
    // OpenRC runs under a plain init as PID 1, so check for it first.
    if file_exists("/usr/sbin/openrc") || file_exists("/sbin/openrc") {
        let version = run_shell("openrc --version", "/bin/sh");
        let version = version.split_whitespace().nth(2).unwrap_or("");
        return format!("OpenRC {}", version).trim_end().to_string();
    }

    let pid1 = read_first_line("/proc/1/comm").unwrap_or_default();
    match pid1.as_str() {
        "systemd" => {
            let version = run_shell("systemctl --version", "/bin/sh");
            let version = version
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("");
            format!("Systemd {}", version).trim_end().to_string()
        }
        "runit" => "Runit".to_string(),
        "dinit" => {
            let version = run_shell("dinit --version", "/bin/sh");
            let version = version
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(2))
                .map(|v| v.trim_end_matches('.'))
                .unwrap_or("");
            format!("Dinit {}", version).trim_end().to_string()
        }
        "" => String::new(),
        other => other.to_string(),
    }
}

/// Identify the C library by probing ldd.
pub fn libc_version() -> String {
    let Ok(probe) = run_command("ldd", &["/usr/bin/ls"]) else {
        return "Unknown".to_string();
    };

    if probe.contains("ld-musl") {
        // musl's ldd prints its version banner on stderr and exits non-zero.
        let output = run_shell("ldd 2>&1 || true", "/bin/sh");
        let version = output
            .lines()
            .nth(1)
            .map(|line| line.trim_start_matches("Version ").trim())
            .unwrap_or("");
        format!("Musl {}", version).trim_end().to_string()
    } else {
        match run_command("ldd", &["--version"]) {
            Ok(output) => {
                let version = output
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().last())
                    .unwrap_or("");
                format!("Glibc {}", version).trim_end().to_string()
            }
            Err(_) => "Glibc".to_string(),
        }
    }
}

/// Resolve the user's login shell from /etc/passwd and ask it for a version.
pub fn user_shell() -> String {
    let Ok(passwd) = fs::read_to_string("/etc/passwd") else {
        return String::new();
    };
    let uid = unsafe { libc::getuid() }.to_string();

    let mut shell_path = String::new();
    for line in passwd.lines() {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() >= 7 && fields[2] == uid {
            shell_path = fields[6].to_string();
        }
    }

    let shell_name = shell_path.rsplit('/').next().unwrap_or("");
    let version_line = |token: usize| {
        run_shell(&format!("{} --version", shell_path), "/bin/sh")
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(token))
            .unwrap_or("")
            .to_string()
    };

    match shell_name {
        "dash" => "Dash".to_string(),
        "bash" => {
            // "GNU bash, version 5.2.26(1)-release (...)"
            format!("Bash {}", version_line(3)).trim_end().to_string()
        }
        "zsh" => format!("Zsh {}", version_line(1)).trim_end().to_string(),
        "fish" => format!("Fish {}", version_line(2)).trim_end().to_string(),
        "nu" => format!("Nushell {}", run_shell(&format!("{} --version", shell_path), "/bin/sh"))
            .trim_end()
            .to_string(),
        _ => "Unknown".to_string(),
    }
}
