//! Mounted partition collection.

use crate::data::Partition;
use std::collections::HashMap;
use std::ffi::CString;
use std::fs;
use std::path::Path;

/// Map canonical device paths to their filesystem or partition labels.
/// Filesystem labels win over partition labels.
fn partition_labels() -> HashMap<String, String> {
    let read_labels = |dir: &str| -> Vec<(String, String)> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter_map(|entry| {
                let label = entry.file_name().into_string().ok()?;
                let device = fs::canonicalize(entry.path()).ok()?;
                Some((device.to_string_lossy().into_owned(), label))
            })
            .collect()
    };

    let (part_labels, fs_labels) = rayon::join(
        || read_labels("/dev/disk/by-partlabel"),
        || read_labels("/dev/disk/by-label"),
    );

    let mut labels = HashMap::new();
    for (device, label) in part_labels.into_iter().chain(fs_labels) {
        labels.insert(device, label);
    }
    labels
}

fn statvfs(mount_point: &str) -> Option<(u64, u64, u64)> {
    let path = CString::new(mount_point).ok()?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };

    if unsafe { libc::statvfs(path.as_ptr(), &mut stat) } != 0 {
        return None;
    }

    let block_size = stat.f_frsize as u64;
    let total = (stat.f_blocks as u64).wrapping_mul(block_size);
    let free = (stat.f_bfree as u64).wrapping_mul(block_size);
    Some((total, total.saturating_sub(free), free))
}

/// All mounted /dev-backed partitions with their sizes. Virtual filesystems
/// and repeated mounts of the same device are skipped.
pub fn mounted_partitions() -> Vec<Partition> {
    let Ok(mounts) = fs::read_to_string("/proc/mounts") else {
        return Vec::new();
    };
    let labels = partition_labels();

    let mut partitions: Vec<Partition> = Vec::new();
    for line in mounts.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }
        let (device, mount_point, fs_type) = (fields[0], fields[1], fields[2]);

        if !device.starts_with("/dev") {
            continue;
        }
        if partitions.iter().any(|p| p.device == device) {
            continue;
        }

        let Some((total, used, free)) = statvfs(mount_point) else {
            continue;
        };

        let canonical = fs::canonicalize(Path::new(device))
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| device.to_string());

        partitions.push(Partition {
            device: device.to_string(),
            mount_point: mount_point.to_string(),
            label: labels.get(&canonical).cloned().unwrap_or_default(),
            fs_type: fs_type.to_string(),
            total,
            used,
            free,
        });
    }

    partitions
}
