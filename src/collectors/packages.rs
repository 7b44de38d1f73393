//! Installed-package counting across package managers

use crate::error::{FetchError, Result};
use crate::utils::command::{command_exists, run_command};
use crate::utils::file::file_exists;
use std::fs;

/// Supported package managers for different Linux distributions
#[derive(Debug, Clone, Copy)]
enum PackageManager {
    Pacman,  // Arch Linux, Manjaro
    Dpkg,    // Debian, Ubuntu
    Rpm,     // Fedora, RHEL
    Xbps,    // Void Linux
    Portage, // Gentoo
    Nix,     // NixOS
}

impl PackageManager {
    fn label(self) -> &'static str {
        match self {
            PackageManager::Pacman => "pacman",
            PackageManager::Dpkg => "dpkg",
            PackageManager::Rpm => "rpm",
            PackageManager::Xbps => "xbps",
            PackageManager::Portage => "portage",
            PackageManager::Nix => "nix",
        }
    }
}

/// Count of installed packages labeled with the manager, e.g. "1432 (pacman)"
pub fn package_count() -> Result<String> {
    let manager = detect_package_manager()
        .ok_or_else(|| FetchError::Detection("No package manager found".to_string()))?;
    let count = count_for(manager)?;
    if count == 0 {
        return Err(FetchError::Detection("Empty package database".to_string()));
    }
    Ok(format!("{} ({})", count, manager.label()))
}

fn detect_package_manager() -> Option<PackageManager> {
    // File-based indicators first (cheaper than spawning anything),
    // most common systems checked first
    if file_exists("/var/lib/pacman/local") {
        Some(PackageManager::Pacman)
    } else if file_exists("/var/lib/dpkg/status") {
        Some(PackageManager::Dpkg)
    } else if file_exists("/var/lib/rpm") {
        Some(PackageManager::Rpm)
    } else if file_exists("/var/db/xbps") {
        Some(PackageManager::Xbps)
    } else if file_exists("/var/db/pkg") {
        Some(PackageManager::Portage)
    } else if command_exists("nix-store") {
        Some(PackageManager::Nix)
    } else {
        None
    }
}

fn count_for(manager: PackageManager) -> Result<usize> {
    match manager {
        PackageManager::Pacman => Ok(fs::read_dir("/var/lib/pacman/local")?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .count()),
        PackageManager::Dpkg => {
            let output = run_command("dpkg-query", &["-f", "${binary:Package}\n", "-W"])?;
            Ok(output.lines().filter(|line| !line.is_empty()).count())
        }
        PackageManager::Rpm => {
            let output = run_command("rpm", &["-qa"])?;
            Ok(output.lines().filter(|line| !line.is_empty()).count())
        }
        PackageManager::Xbps => {
            // Each installed package leaves a .plist in the xbps db
            let plists = fs::read_dir("/var/db/xbps")?
                .filter_map(|e| e.ok())
                .filter(|e| {
                    e.path()
                        .file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.ends_with(".plist"))
                        .unwrap_or(false)
                })
                .count();
            if plists > 0 {
                return Ok(plists);
            }
            let output = run_command("xbps-query", &["-l"])?;
            Ok(output.lines().count())
        }
        PackageManager::Portage => {
            // /var/db/pkg is category/package, so count second-level entries
            let mut count = 0;
            for entry in fs::read_dir("/var/db/pkg")?.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    if let Ok(sub_entries) = fs::read_dir(&path) {
                        count += sub_entries.count();
                    }
                }
            }
            Ok(count)
        }
        PackageManager::Nix => {
            let output = run_command(
                "nix-store",
                &["--query", "--requisites", "/run/current-system/sw"],
            )?;
            Ok(output.lines().count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_lowercase() {
        for manager in [
            PackageManager::Pacman,
            PackageManager::Dpkg,
            PackageManager::Rpm,
            PackageManager::Xbps,
            PackageManager::Portage,
            PackageManager::Nix,
        ] {
            let label = manager.label();
            assert!(!label.is_empty());
            assert_eq!(label, label.to_lowercase());
        }
    }
}
