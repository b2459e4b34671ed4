//! Hardware information collection (CPU, GPU, memory, motherboard).

use crate::data::{Cpu, Gpu, MemoryInfo};
use crate::utils::command::run_command;
use std::collections::BTreeMap;
use std::fs;

/// Parse /proc/cpuinfo into one entry per physical package.
pub fn cpus() -> Vec<Cpu> {
    let Ok(cpuinfo) = fs::read_to_string("/proc/cpuinfo") else {
        return Vec::new();
    };

    // physical id -> package; BTreeMap keeps socket order stable.
    let mut packages: BTreeMap<u32, Cpu> = BTreeMap::new();
    let mut logical_counts: BTreeMap<u32, u32> = BTreeMap::new();

    for block in cpuinfo.split("\n\n") {
        let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
        for line in block.lines() {
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim(), value.trim());
            }
        }
        let Some(model) = fields.get("model name") else {
            continue;
        };

        let physical_id: u32 = fields
            .get("physical id")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        *logical_counts.entry(physical_id).or_insert(0) += 1;

        packages.entry(physical_id).or_insert_with(|| Cpu {
            vendor: fields.get("vendor_id").unwrap_or(&"").to_string(),
            model: model.to_string(),
            cores: fields
                .get("cpu cores")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            threads: fields
                .get("siblings")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        });
    }

    let mut cpus: Vec<Cpu> = Vec::new();
    for (physical_id, mut cpu) in packages {
        let logical = logical_counts.get(&physical_id).copied().unwrap_or(0);
        if cpu.threads == 0 {
            cpu.threads = logical;
        }
        if cpu.cores == 0 {
            cpu.cores = cpu.threads;
        }
        cpus.push(cpu);
    }
    cpus
}

/// List display adapters via `lspci -vmm`, falling back to sysfs vendor ids.
pub fn gpus() -> Vec<Gpu> {
    if let Ok(output) = run_command("lspci", &["-vmm"]) {
        let gpus = parse_lspci_gpus(&output);
        if !gpus.is_empty() {
            return gpus;
        }
    }
    sysfs_gpus()
}

fn parse_lspci_gpus(output: &str) -> Vec<Gpu> {
    let mut gpus = Vec::new();

    for record in output.split("\n\n") {
        let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
        for line in record.lines() {
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim(), value.trim());
            }
        }

        let class = fields.get("Class").copied().unwrap_or("");
        let is_display = class.contains("VGA")
            || class.contains("3D controller")
            || class.contains("Display controller");
        if !is_display {
            continue;
        }

        gpus.push(Gpu {
            vendor: fields.get("Vendor").unwrap_or(&"").to_string(),
            model: fields.get("Device").unwrap_or(&"").to_string(),
        });
    }

    gpus
}

fn sysfs_gpus() -> Vec<Gpu> {
    let Ok(entries) = fs::read_dir("/sys/class/drm") else {
        return Vec::new();
    };

    let mut cards: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with("card") && !name.contains('-'))
        .collect();
    cards.sort();

    let mut gpus = Vec::new();
    for card in cards {
        let vendor_path = format!("/sys/class/drm/{}/device/vendor", card);
        let Ok(vendor_id) = fs::read_to_string(&vendor_path) else {
            continue;
        };
        let vendor = match vendor_id.trim() {
            "0x8086" => "Intel Corporation",
            "0x10de" => "NVIDIA Corporation",
            "0x1002" => "Advanced Micro Devices, Inc.",
            other => other,
        };
        gpus.push(Gpu {
            vendor: vendor.to_string(),
            model: "Unknown".to_string(),
        });
    }
    gpus
}

/// Memory totals from /proc/meminfo, converted from KiB to MiB.
pub fn memory() -> Option<MemoryInfo> {
    let meminfo = fs::read_to_string("/proc/meminfo").ok()?;

    let mut info = MemoryInfo {
        total: 0,
        free: 0,
        available: 0,
    };

    for line in meminfo.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let kib: u64 = value
            .trim()
            .trim_end_matches(" kB")
            .trim()
            .parse()
            .unwrap_or(0);
        match key {
            "MemTotal" => info.total = kib / 1024,
            "MemFree" => info.free = kib / 1024,
            "MemAvailable" => info.available = kib / 1024,
            _ => {}
        }
    }

    Some(info)
}

/// Motherboard model from DMI, empty when the board does not expose one.
pub fn motherboard() -> String {
    fs::read_to_string("/sys/devices/virtual/dmi/id/board_name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
