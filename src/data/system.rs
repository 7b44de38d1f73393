//! System-wide information structures

use super::hardware::HardwareInfo;

/// Complete snapshot gathered by one ferrofetch run.
///
/// Built exactly once per invocation and never mutated afterwards. Every
/// field holds a non-empty string: real data, `"Unknown"` when retrieval
/// failed, or `"N/A"` for hardware this machine simply does not have.
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: OsInfo,
    pub hardware: HardwareInfo,
    pub desktop: DesktopInfo,
    pub packages: PackageInfo,
    pub status: StatusInfo,
    pub user: UserInfo,
}

/// Operating system identity
#[derive(Debug, Clone)]
pub struct OsInfo {
    pub name: String,
    pub version: String,
    pub build: String,
    pub kernel: String,
    pub architecture: String,
}

/// User and session information
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub username: String,
    pub hostname: String,
}

/// Desktop session information
#[derive(Debug, Clone)]
pub struct DesktopInfo {
    pub environment: String,
    pub window_manager: String,
    pub wm_theme: String,
    pub terminal: String,
    pub terminal_font: String,
    pub resolution: String,
}

/// Package management information
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub count: String,
}

/// Runtime status information
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub uptime: String,
    pub shell: String,
    pub load_average: String,
    pub battery: String,
}
