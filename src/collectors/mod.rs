//! Fact providers: best-effort queries against the running system.
//!
//! Modules reach the OS only through the [`FactProvider`] trait, so the
//! render pipeline can be driven by a fake provider in tests. Every method
//! degrades to a sentinel ("", empty vec, `None`) instead of propagating an
//! error into the caller.

pub mod desktop;
pub mod hardware;
pub mod network;
pub mod packages;
pub mod storage;
pub mod system;

use crate::config::Config;
use crate::data::{Cpu, DeWm, DistroInfo, Gpu, MemoryInfo, Monitor, Partition};
use crate::utils::command;

pub trait FactProvider {
    fn distro(&self) -> DistroInfo;
    fn arch(&self) -> String;
    /// Kernel name and release, e.g. ("Linux", "6.9.1-arch1-1").
    fn kernel(&self) -> (String, String);
    fn hostname(&self) -> String;
    /// Summary string like "1042 (pacman) 13 (flatpak)".
    fn installed_packages(&self) -> String;
    fn user_shell(&self) -> String;
    fn init_system(&self) -> String;
    fn libc(&self) -> String;
    /// Motherboard model, empty when undetectable.
    fn motherboard(&self) -> String;
    fn cpus(&self) -> Vec<Cpu>;
    fn gpus(&self) -> Vec<Gpu>;
    fn memory(&self) -> Option<MemoryInfo>;
    fn partitions(&self) -> Vec<Partition>;
    fn local_ip(&self) -> String;
    /// Raw session type from the environment ("x11", "wayland", "tty", "").
    fn session_type(&self) -> String;
    /// Pretty display protocol name ("X11", "Wayland") or empty.
    fn display_protocol(&self) -> String;
    fn de_wm(&self) -> Option<DeWm>;
    fn monitors(&self) -> Vec<Monitor>;
    /// Run `command` through `shell -c`; empty string on failure.
    fn run_command(&self, command: &str, shell: &str) -> String;
}

/// The live provider backed by /proc, /sys and shelled-out tools.
pub struct SystemProvider {
    distro_name: Option<String>,
    show_fs_type: bool,
}

impl SystemProvider {
    pub fn from_config(config: &Config) -> Self {
        SystemProvider {
            distro_name: config.distro_name.clone(),
            show_fs_type: config.show_fs_type,
        }
    }
}

impl FactProvider for SystemProvider {
    fn distro(&self) -> DistroInfo {
        system::distro_info(self.distro_name.as_deref())
    }

    fn arch(&self) -> String {
        system::arch()
    }

    fn kernel(&self) -> (String, String) {
        system::kernel()
    }

    fn hostname(&self) -> String {
        system::hostname()
    }

    fn installed_packages(&self) -> String {
        packages::installed_packages()
    }

    fn user_shell(&self) -> String {
        system::user_shell()
    }

    fn init_system(&self) -> String {
        system::init_system()
    }

    fn libc(&self) -> String {
        system::libc_version()
    }

    fn motherboard(&self) -> String {
        hardware::motherboard()
    }

    fn cpus(&self) -> Vec<Cpu> {
        hardware::cpus()
    }

    fn gpus(&self) -> Vec<Gpu> {
        hardware::gpus()
    }

    fn memory(&self) -> Option<MemoryInfo> {
        hardware::memory()
    }

    fn partitions(&self) -> Vec<Partition> {
        let mut partitions = storage::mounted_partitions();
        if !self.show_fs_type {
            for partition in &mut partitions {
                partition.fs_type.clear();
            }
        }
        partitions
    }

    fn local_ip(&self) -> String {
        network::local_ip()
    }

    fn session_type(&self) -> String {
        desktop::session_type()
    }

    fn display_protocol(&self) -> String {
        desktop::display_protocol()
    }

    fn de_wm(&self) -> Option<DeWm> {
        desktop::de_wm()
    }

    fn monitors(&self) -> Vec<Monitor> {
        desktop::monitors()
    }

    fn run_command(&self, cmd: &str, shell: &str) -> String {
        command::run_shell(cmd, shell)
    }
}
