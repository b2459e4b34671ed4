//! Built-in modules for hardware facts. The list-valued ones (cpus, gpus,
//! partitions, monitors) emit one line per element.

use super::{Module, ModuleRegistry};
use crate::collectors::FactProvider;
use crate::utils::format::format_bytes;
use crate::value::Value;
use std::collections::BTreeMap;

pub(super) fn register(registry: &mut ModuleRegistry) {
    registry.register(Module::new(
        "motherboard",
        "${3}Motherboard: ${4}$MOTHERBOARD",
        motherboard,
    ));
    registry.register(Module::new(
        "cpus",
        "${3}CPU: ${4}$CPU_MODEL ($CPU_THREADS threads)",
        cpus,
    ));
    registry.register(Module::new("gpus", "${3}GPU: ${4}$GPU_MODEL", gpus));
    registry.register(Module::new(
        "memory",
        "${3}Memory: ${4}$MEM_USED MiB / $MEM_TOTAL MiB",
        memory,
    ));
    registry.register(Module::new(
        "partitions",
        "${3}Partition ${PART_AUTONAME} (${PART_FS}): ${4}${PART_USED} / ${PART_TOTAL}",
        partitions,
    ));
    registry.register(Module::new(
        "monitors",
        "${3}Monitor: ${4}${MONITOR_WIDTH}x${MONITOR_HEIGHT} ${MONITOR_REFRESH_RATE}Hz",
        monitors,
    ));
}

fn motherboard(module: &Module, facts: &dyn FactProvider) -> String {
    let motherboard = facts.motherboard();
    if motherboard.is_empty() {
        return String::new();
    }

    module.expand_format(|name| match name {
        "MOTHERBOARD" => Some(motherboard.clone()),
        _ => None,
    })
}

fn cpus(module: &Module, facts: &dyn FactProvider) -> String {
    let hidden = module.data_integers("hidden_cpus");

    let mut out = String::new();
    let mut index = 0;
    for (position, cpu) in facts.cpus().into_iter().enumerate() {
        if hidden.contains(&(position as i64 + 1)) {
            continue;
        }
        index += 1;
        let line = module.expand_format(|name| match name {
            "CPU_NUM" => Some(index.to_string()),
            "CPU_VENDOR" => Some(cpu.vendor.clone()),
            "CPU_MODEL" => Some(cpu.model.clone()),
            "CPU_CORES" => Some(cpu.cores.to_string()),
            "CPU_THREADS" => Some(cpu.threads.to_string()),
            _ => None,
        });
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn gpus(module: &Module, facts: &dyn FactProvider) -> String {
    let hidden = module.data_integers("hidden_gpus");

    let mut out = String::new();
    let mut index = 0;
    for (position, gpu) in facts.gpus().into_iter().enumerate() {
        if hidden.contains(&(position as i64 + 1)) {
            continue;
        }
        index += 1;
        let line = module.expand_format(|name| match name {
            "GPU_NUM" => Some(index.to_string()),
            "GPU_VENDOR" => Some(gpu.vendor.clone()),
            "GPU_MODEL" => Some(gpu.model.clone()),
            _ => None,
        });
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn memory(module: &Module, facts: &dyn FactProvider) -> String {
    let Some(memory) = facts.memory() else {
        return String::new();
    };

    module.expand_format(|name| match name {
        "MEM_TOTAL" => Some(memory.total.to_string()),
        "MEM_AVAILABLE" => Some(memory.available.to_string()),
        "MEM_FREE" => Some(memory.free.to_string()),
        "MEM_USED" => Some(memory.total.saturating_sub(memory.available).to_string()),
        _ => None,
    })
}

fn partitions(module: &Module, facts: &dyn FactProvider) -> String {
    let hidden_partitions = module.data_strings("hidden_partitions");
    let hidden_filesystems = module.data_strings("hidden_filesystems");
    let (alternative_names, _) =
        module.get_data("alternative_names", &Value::Map(BTreeMap::new()));
    let alternative_names: BTreeMap<&str, &str> = alternative_names
        .as_map()
        .map(|map| {
            map.iter()
                .filter_map(|(device, name)| Some((device.as_str(), name.as_str()?)))
                .collect()
        })
        .unwrap_or_default();

    let mut out = String::new();
    let mut index = 0;
    for partition in facts.partitions() {
        if hidden_partitions.contains(&partition.device) {
            continue;
        }
        if hidden_filesystems.contains(&partition.fs_type) {
            continue;
        }
        index += 1;

        // Display name: configured alias, else label, else mountpoint.
        let autoname = alternative_names
            .get(partition.device.as_str())
            .map(|name| name.to_string())
            .or_else(|| (!partition.label.is_empty()).then(|| partition.label.clone()))
            .unwrap_or_else(|| partition.mount_point.clone());

        let line = module.expand_format(|name| match name {
            "PART_NUM" => Some(index.to_string()),
            "PART_FS" => Some(partition.fs_type.clone()),
            "PART_DEVICE" => Some(partition.device.clone()),
            "PART_AUTONAME" => Some(autoname.clone()),
            "PART_LABEL" => Some(partition.label.clone()),
            "PART_MOUNTPOINT" => Some(partition.mount_point.clone()),
            "PART_FREE" => Some(format_bytes(partition.free)),
            "PART_USED" => Some(format_bytes(partition.used)),
            "PART_TOTAL" => Some(format_bytes(partition.total)),
            _ => None,
        });
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn monitors(module: &Module, facts: &dyn FactProvider) -> String {
    let mut out = String::new();
    for (position, monitor) in facts.monitors().into_iter().enumerate() {
        let line = module.expand_format(|name| match name {
            "MONITOR_NUM" => Some((position + 1).to_string()),
            "MONITOR_WIDTH" => Some(monitor.width.to_string()),
            "MONITOR_HEIGHT" => Some(monitor.height.to_string()),
            "MONITOR_REFRESH_RATE" => Some(monitor.refresh_rate.to_string()),
            _ => None,
        });
        out.push_str(&line);
        out.push('\n');
    }
    out
}
