//! End-to-end render pipeline tests against a canned fact provider.

use galefetch::collectors::FactProvider;
use galefetch::color::strip_ansi;
use galefetch::compose::COLUMN_GAP;
use galefetch::config::{Config, ModuleEntry};
use galefetch::data::{Cpu, DeWm, DistroInfo, Gpu, MemoryInfo, Monitor, Partition};
use galefetch::display::render;
use galefetch::modules::ModuleRegistry;
use galefetch::value::Value;
use std::collections::BTreeMap;
use std::fs;

#[derive(Default)]
struct FakeFacts {
    hostname: String,
    memory: Option<MemoryInfo>,
    motherboard: String,
}

impl FactProvider for FakeFacts {
    fn distro(&self) -> DistroInfo {
        DistroInfo {
            id: "testos".to_string(),
            long_name: "Test OS 1.0".to_string(),
            short_name: "Test OS".to_string(),
        }
    }
    fn arch(&self) -> String {
        "x86_64".to_string()
    }
    fn kernel(&self) -> (String, String) {
        ("Linux".to_string(), "6.9.1".to_string())
    }
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
    fn installed_packages(&self) -> String {
        "7 (pacman)".to_string()
    }
    fn user_shell(&self) -> String {
        "Bash 5.2".to_string()
    }
    fn init_system(&self) -> String {
        "Systemd 255".to_string()
    }
    fn libc(&self) -> String {
        "Glibc 2.39".to_string()
    }
    fn motherboard(&self) -> String {
        self.motherboard.clone()
    }
    fn cpus(&self) -> Vec<Cpu> {
        Vec::new()
    }
    fn gpus(&self) -> Vec<Gpu> {
        Vec::new()
    }
    fn memory(&self) -> Option<MemoryInfo> {
        self.memory
    }
    fn partitions(&self) -> Vec<Partition> {
        Vec::new()
    }
    fn local_ip(&self) -> String {
        String::new()
    }
    fn session_type(&self) -> String {
        String::new()
    }
    fn display_protocol(&self) -> String {
        String::new()
    }
    fn de_wm(&self) -> Option<DeWm> {
        None
    }
    fn monitors(&self) -> Vec<Monitor> {
        Vec::new()
    }
    fn run_command(&self, command: &str, shell: &str) -> String {
        galefetch::utils::command::run_shell(command, shell)
    }
}

fn entry(name: &str) -> ModuleEntry {
    ModuleEntry {
        name: name.to_string(),
        format: None,
        data: None,
    }
}

/// Config pointing at a throwaway art file so the render does not depend on
/// the machine's installed art.
fn test_config(art: &str, modules: Vec<ModuleEntry>) -> (Config, std::path::PathBuf) {
    let mut path = std::env::temp_dir();
    path.push(format!("galefetch-art-{:?}", std::thread::current().id()));
    fs::write(&path, art).unwrap();

    let config = Config {
        ascii_path: Some(path.to_string_lossy().into_owned()),
        modules,
        ..Config::default()
    };
    (config, path)
}

#[test]
fn hostname_and_memory_end_to_end() {
    let (config, art_path) = test_config("#/1;2;3;4\nAA", vec![entry("hostname"), entry("memory")]);
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts {
        hostname: "box".to_string(),
        memory: Some(MemoryInfo {
            total: 8192,
            free: 1024,
            available: 2048,
        }),
        ..FakeFacts::default()
    };

    let output = render(&config, &registry, &facts, false).unwrap();
    let plain = strip_ansi(&output);
    let lines: Vec<&str> = plain.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("AA{}Hostname: box", " ".repeat(COLUMN_GAP)));
    assert!(lines[1].ends_with("Memory: 6144 MiB / 8192 MiB"));

    fs::remove_file(art_path).ok();
}

#[test]
fn output_follows_configuration_order() {
    let (config, art_path) = test_config(
        "X",
        vec![entry("kernel"), entry("hostname"), entry("distribution")],
    );
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts {
        hostname: "box".to_string(),
        ..FakeFacts::default()
    };

    let output = render(&config, &registry, &facts, false).unwrap();
    let plain = strip_ansi(&output);
    let lines: Vec<&str> = plain.lines().collect();

    assert!(lines[0].contains("Kernel: Linux 6.9.1"));
    assert!(lines[1].contains("Hostname: box"));
    assert!(lines[2].contains("Distribution: Test OS (x86_64)"));

    fs::remove_file(art_path).ok();
}

#[test]
fn unknown_modules_and_empty_output_are_skipped() {
    let (config, art_path) = test_config(
        "X",
        vec![
            entry("no_such_module"),
            entry("motherboard"), // fact missing -> empty -> no line
            entry("hostname"),
        ],
    );
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts {
        hostname: "box".to_string(),
        ..FakeFacts::default()
    };

    let output = render(&config, &registry, &facts, false).unwrap();
    let plain = strip_ansi(&output);

    assert_eq!(plain.lines().count(), 1);
    assert!(plain.lines().next().unwrap().contains("Hostname: box"));

    fs::remove_file(art_path).ok();
}

#[test]
fn custom_module_runs_shell_commands() {
    let mut data = BTreeMap::new();
    data.insert(
        "commands".to_string(),
        Value::List(vec![Value::String("echo hi".to_string())]),
    );
    let custom = ModuleEntry {
        name: "custom".to_string(),
        format: Some("$CMD_1".to_string()),
        data: Some(data),
    };
    let (config, art_path) = test_config("X", vec![custom]);
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts::default();

    let output = render(&config, &registry, &facts, false).unwrap();
    let plain = strip_ansi(&output);

    assert_eq!(plain.lines().next().unwrap(), format!("X{}hi", " ".repeat(COLUMN_GAP)));

    fs::remove_file(art_path).ok();
}

#[test]
fn art_header_colors_are_applied_and_carried() {
    let (config, art_path) = test_config(
        "#/9;2\n${1}AA\nBB",
        vec![entry("hostname")],
    );
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts {
        hostname: "box".to_string(),
        ..FakeFacts::default()
    };

    let output = render(&config, &registry, &facts, false).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    // Header line is stripped, slot 1 becomes the escape for color 9 and the
    // escape-free second art line re-asserts it.
    assert!(lines[0].starts_with("\x1b[38;5;9mAA"));
    assert!(lines[1].starts_with("\x1b[38;5;9mBB"));
    assert!(output.ends_with("\x1b[0m"));

    fs::remove_file(art_path).ok();
}

#[test]
fn malformed_art_header_is_a_startup_error() {
    let (config, art_path) = test_config("#/1;oops\nAA", vec![entry("hostname")]);
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts::default();

    assert!(render(&config, &registry, &facts, false).is_err());

    fs::remove_file(art_path).ok();
}

#[test]
fn row_count_is_max_of_art_and_content() {
    let (config, art_path) = test_config("A\nB\nC\nD", vec![entry("hostname")]);
    let registry = ModuleRegistry::builtin();
    let facts = FakeFacts {
        hostname: "box".to_string(),
        ..FakeFacts::default()
    };

    let output = render(&config, &registry, &facts, false).unwrap();
    assert_eq!(output.lines().count(), 4);

    fs::remove_file(art_path).ok();
}
