//! Hardware-specific information structures

/// One physical CPU package.
#[derive(Debug, Clone)]
pub struct Cpu {
    pub vendor: String,
    pub model: String,
    pub cores: u32,
    pub threads: u32,
}

/// One display adapter.
#[derive(Debug, Clone)]
pub struct Gpu {
    pub vendor: String,
    pub model: String,
}

/// Memory totals in MiB.
#[derive(Debug, Clone, Copy)]
pub struct MemoryInfo {
    pub total: u64,
    pub free: u64,
    pub available: u64,
}

/// One mounted block-device partition. Sizes in bytes.
#[derive(Debug, Clone)]
pub struct Partition {
    pub device: String,
    pub mount_point: String,
    pub label: String,
    pub fs_type: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// One connected monitor.
#[derive(Debug, Clone, Copy)]
pub struct Monitor {
    pub width: u32,
    pub height: u32,
    pub refresh_rate: u32,
}
