//! Plain data carried from fact providers to modules.

pub mod hardware;
pub mod system;

pub use hardware::{Cpu, Gpu, MemoryInfo, Monitor, Partition};
pub use system::{DeWm, DistroInfo};
