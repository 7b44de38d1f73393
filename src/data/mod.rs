//! Data structures describing one collected snapshot

mod hardware;
mod system;

pub use hardware::HardwareInfo;
pub use system::{DesktopInfo, OsInfo, PackageInfo, StatusInfo, SystemInfo, UserInfo};

/// Fallback token for fields whose retrieval failed
pub const UNKNOWN: &str = "Unknown";

/// Fallback token for hardware that is legitimately absent on this machine
pub const NOT_APPLICABLE: &str = "N/A";
