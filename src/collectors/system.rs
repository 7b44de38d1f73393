//! OS identity, kernel, session and status retrieval

use crate::error::{FetchError, Result};
use crate::utils::command::run_command;
use crate::utils::file::{read_file_safe, read_first_line};
use crate::utils::parsing::{first_version_token, format_uptime, os_release_value};
use std::env;

pub fn os_name() -> Result<String> {
    let release = read_file_safe("/etc/os-release")?;
    os_release_value(&release, "PRETTY_NAME")
        .or_else(|| os_release_value(&release, "NAME"))
        .ok_or_else(|| FetchError::Detection("OS name not found".to_string()))
}

pub fn os_version() -> Result<String> {
    let release = read_file_safe("/etc/os-release")?;
    os_release_value(&release, "VERSION")
        .or_else(|| os_release_value(&release, "VERSION_ID"))
        .ok_or_else(|| FetchError::Detection("OS version not found".to_string()))
}

pub fn os_build() -> Result<String> {
    let release = read_file_safe("/etc/os-release")?;
    os_release_value(&release, "BUILD_ID")
        .or_else(|| os_release_value(&release, "VARIANT_ID"))
        .ok_or_else(|| FetchError::Detection("OS build not found".to_string()))
}

pub fn kernel_version() -> Result<String> {
    // /proc/version is a single line; third token is the release string
    if let Ok(version_info) = read_first_line("/proc/version") {
        if let Some(v) = version_info.split_whitespace().nth(2) {
            return Ok(v.to_string());
        }
    }
    run_command("uname", &["-r"])
}

pub fn architecture() -> Result<String> {
    Ok(env::consts::ARCH.to_string())
}

pub fn hostname() -> Result<String> {
    read_first_line("/proc/sys/kernel/hostname")
}

pub fn username() -> Result<String> {
    match env::var("USER") {
        Ok(user) if !user.is_empty() => Ok(user),
        _ => run_command("id", &["-un"]),
    }
}

pub fn uptime() -> Result<String> {
    let uptime_str = read_first_line("/proc/uptime")?;
    let secs: f64 = uptime_str
        .split_whitespace()
        .next()
        .unwrap_or("")
        .parse()
        .map_err(|_| FetchError::Parse("Unparseable /proc/uptime".to_string()))?;
    Ok(format_uptime(secs as u64))
}

/// Shell name plus version when the shell's `--version` banner is parseable
pub fn shell() -> Result<String> {
    let shell_path =
        env::var("SHELL").map_err(|_| FetchError::Detection("SHELL not set".to_string()))?;
    let name = shell_path
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| FetchError::Detection("Empty SHELL value".to_string()))?
        .to_string();

    // Version banners are free-form; degrade to the bare name on any surprise
    if let Ok(banner) = run_command(&shell_path, &["--version"]) {
        if let Some(version) = banner.lines().next().and_then(first_version_token) {
            return Ok(format!("{} {}", name, version));
        }
    }
    Ok(name)
}

pub fn load_average() -> Result<String> {
    let mut loads = [0f64; 3];
    let fetched = unsafe { libc::getloadavg(loads.as_mut_ptr(), 3) };
    if fetched == 3 {
        return Ok(format!("{:.2}, {:.2}, {:.2}", loads[0], loads[1], loads[2]));
    }

    let line = read_first_line("/proc/loadavg")?;
    let fields: Vec<&str> = line.split_whitespace().take(3).collect();
    if fields.len() == 3 {
        Ok(fields.join(", "))
    } else {
        Err(FetchError::Parse("Unparseable /proc/loadavg".to_string()))
    }
}

/// Battery charge and status from sysfs. Machines without a battery report
/// an error here; the collector maps that to "N/A".
pub fn battery() -> Result<String> {
    use std::fs;

    let entries = fs::read_dir("/sys/class/power_supply")?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with("BAT") {
            continue;
        }

        let battery_path = entry.path();
        if let (Ok(capacity), Ok(status)) = (
            fs::read_to_string(battery_path.join("capacity")),
            fs::read_to_string(battery_path.join("status")),
        ) {
            return Ok(format!("{}% ({})", capacity.trim(), status.trim()));
        }
    }

    Err(FetchError::Detection("No battery found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_is_always_available() {
        let arch = architecture().unwrap();
        assert!(!arch.is_empty());
    }

    #[test]
    fn uptime_is_human_readable() {
        let up = uptime().unwrap();
        assert!(up.ends_with('m'));
    }

    #[test]
    fn kernel_version_has_no_spaces() {
        let kernel = kernel_version().unwrap();
        assert!(!kernel.is_empty());
        assert!(!kernel.contains(' '));
    }

    #[test]
    fn load_average_has_three_values() {
        let loads = load_average().unwrap();
        assert_eq!(loads.split(", ").count(), 3);
    }
}
