//! Field collection with per-field failure isolation
//!
//! Every retrieval function returns `Result<String>`; [`collect_all`]
//! converts each outcome into a display-ready value and can therefore
//! never fail or panic itself. A field whose source errors out, times
//! out, or produces an empty string resolves to its fallback token and
//! has no effect on any other field.

pub mod desktop;
pub mod hardware;
pub mod packages;
pub mod system;

use crate::data::{
    DesktopInfo, HardwareInfo, OsInfo, PackageInfo, StatusInfo, SystemInfo, UserInfo,
    NOT_APPLICABLE, UNKNOWN,
};
use crate::error::Result;

/// Reduce one retrieval result to a non-empty field value
fn field(result: Result<String>, fallback: &str) -> String {
    match result {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// Gather the complete snapshot. Independent field families run in
/// parallel; results are joined before returning, so the parallelism is
/// invisible to callers.
pub fn collect_all() -> SystemInfo {
    let ((os, user), ((hardware, desktop), (packages, status))) = rayon::join(
        || rayon::join(collect_os, collect_user),
        || {
            rayon::join(
                || rayon::join(collect_hardware, collect_desktop),
                || rayon::join(collect_packages, collect_status),
            )
        },
    );

    SystemInfo {
        os,
        hardware,
        desktop,
        packages,
        status,
        user,
    }
}

fn collect_os() -> OsInfo {
    OsInfo {
        name: field(system::os_name(), UNKNOWN),
        version: field(system::os_version(), UNKNOWN),
        build: field(system::os_build(), UNKNOWN),
        kernel: field(system::kernel_version(), UNKNOWN),
        architecture: field(system::architecture(), UNKNOWN),
    }
}

fn collect_user() -> UserInfo {
    UserInfo {
        username: field(system::username(), UNKNOWN),
        hostname: field(system::hostname(), UNKNOWN),
    }
}

fn collect_hardware() -> HardwareInfo {
    HardwareInfo {
        host_model: field(hardware::host_model(), UNKNOWN),
        cpu_model: field(hardware::cpu_model(), UNKNOWN),
        cpu_cores: field(hardware::cpu_cores(), UNKNOWN),
        gpu_model: field(hardware::gpu_model(), UNKNOWN),
        memory: field(hardware::memory(), UNKNOWN),
        disk: field(hardware::disk(), UNKNOWN),
        disk_encryption: field(hardware::disk_encryption(), UNKNOWN),
    }
}

fn collect_desktop() -> DesktopInfo {
    DesktopInfo {
        environment: field(desktop::desktop_environment(), UNKNOWN),
        window_manager: field(desktop::window_manager(), UNKNOWN),
        wm_theme: field(desktop::wm_theme(), UNKNOWN),
        terminal: field(desktop::terminal(), UNKNOWN),
        terminal_font: field(desktop::terminal_font(), UNKNOWN),
        resolution: field(desktop::resolution(), UNKNOWN),
    }
}

fn collect_packages() -> PackageInfo {
    PackageInfo {
        count: field(packages::package_count(), UNKNOWN),
    }
}

fn collect_status() -> StatusInfo {
    StatusInfo {
        uptime: field(system::uptime(), UNKNOWN),
        shell: field(system::shell(), UNKNOWN),
        load_average: field(system::load_average(), UNKNOWN),
        // A desktop machine without a battery is not a failure
        battery: field(system::battery(), NOT_APPLICABLE),
    }
}
