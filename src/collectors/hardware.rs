//! Hardware retrieval (host model, CPU, GPU, memory, disk)

use crate::error::{FetchError, Result};
use crate::utils::command::run_command;
use crate::utils::file::{file_exists, read_trimmed};
use crate::utils::parsing::extract_after_colon;
use std::fs;

pub fn host_model() -> Result<String> {
    // DMI nodes cover ordinary PCs; device-tree covers ARM boards
    if let Ok(name) = read_trimmed("/sys/devices/virtual/dmi/id/product_name") {
        if !name.is_empty() {
            let version = read_trimmed("/sys/devices/virtual/dmi/id/product_version")
                .unwrap_or_default();
            if version.is_empty() || version.eq_ignore_ascii_case("none") {
                return Ok(name);
            }
            return Ok(format!("{} {}", name, version));
        }
    }

    let model = read_trimmed("/proc/device-tree/model")?;
    // device-tree strings are NUL-terminated
    Ok(model.trim_end_matches('\0').to_string())
}

pub fn cpu_model() -> Result<String> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    // Read line by line and stop at the first CPU's model name
    let file = File::open("/proc/cpuinfo")?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.starts_with("model name") {
            if let Some(model) = extract_after_colon(&line) {
                return Ok(model);
            }
        }
    }

    // ARM cpuinfo has no "model name"; ask lscpu instead
    let output = run_command("lscpu", &[])?;
    output
        .lines()
        .find(|l| l.starts_with("Model name"))
        .and_then(|l| extract_after_colon(l))
        .ok_or_else(|| FetchError::Detection("CPU model not found".to_string()))
}

/// Physical and logical core counts, e.g. "8 cores (16 threads)"
pub fn cpu_cores() -> Result<String> {
    let logical = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if logical <= 0 {
        return Err(FetchError::Detection("Processor count unavailable".to_string()));
    }

    if let Some(physical) = physical_core_count() {
        if physical > 0 && physical != logical as usize {
            return Ok(format!("{} cores ({} threads)", physical, logical));
        }
    }
    Ok(format!("{} threads", logical))
}

fn physical_core_count() -> Option<usize> {
    use std::collections::HashSet;

    let cpuinfo = fs::read_to_string("/proc/cpuinfo").ok()?;
    let mut cores: HashSet<(String, String)> = HashSet::new();
    let mut physical_id = String::new();

    for line in cpuinfo.lines() {
        if line.starts_with("physical id") {
            physical_id = extract_after_colon(line)?;
        } else if line.starts_with("core id") {
            cores.insert((physical_id.clone(), extract_after_colon(line)?));
        }
    }

    if cores.is_empty() {
        None
    } else {
        Some(cores.len())
    }
}

pub fn gpu_model() -> Result<String> {
    // Direct sysfs reading first (no subprocess)
    let mut gpus = Vec::new();
    if let Ok(entries) = fs::read_dir("/sys/class/drm") {
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with("card") || name.contains('-') {
                continue;
            }
            if let Ok(device_name) = read_trimmed(path.join("device/name")) {
                if !device_name.is_empty() {
                    gpus.push(device_name);
                }
            }
        }
    }
    if let Some(first) = gpus.into_iter().next() {
        return Ok(first);
    }

    // Fallback to lspci
    let output = run_command("lspci", &[])?;
    output
        .lines()
        .find(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .and_then(parse_gpu_from_lspci)
        .ok_or_else(|| FetchError::Detection("No GPU found".to_string()))
}

fn parse_gpu_from_lspci(line: &str) -> Option<String> {
    let colon_pos = line.rfind(": ").or_else(|| line.rfind(':'))?;
    let description = line[colon_pos + 1..].trim();
    let description = description.split(" (rev ").next().unwrap_or(description);

    // lspci puts the marketing name in the last bracket pair when it has one
    if let Some(start) = description.rfind('[') {
        if let Some(len) = description[start..].find(']') {
            let bracket = &description[start + 1..start + len];
            // Vendor tags like [AMD/ATI] have a bare slash; model ranges
            // ("RX 7700 XT / 7800 XT") space it out
            let vendor_tag = bracket.contains('/') && !bracket.contains(' ');
            if !vendor_tag && bracket.len() > 3 {
                return Some(bracket.to_string());
            }
        }
    }
    Some(description.trim().to_string())
}

/// Used and total memory, e.g. "7.48 GiB / 31.26 GiB"
pub fn memory() -> Result<String> {
    let meminfo = fs::read_to_string("/proc/meminfo")?;
    let total = meminfo_kib(&meminfo, "MemTotal")
        .ok_or_else(|| FetchError::Parse("MemTotal not found".to_string()))?;
    let available = meminfo_kib(&meminfo, "MemAvailable")
        .ok_or_else(|| FetchError::Parse("MemAvailable not found".to_string()))?;

    let used_gib = (total - available) / 1024.0 / 1024.0;
    let total_gib = total / 1024.0 / 1024.0;
    Ok(format!("{:.2} GiB / {:.2} GiB", used_gib, total_gib))
}

fn meminfo_kib(meminfo: &str, key: &str) -> Option<f64> {
    meminfo
        .lines()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|value| value.parse().ok())
}

/// Root filesystem usage, e.g. "212.4G / 467.9G (45%)"
pub fn disk() -> Result<String> {
    use std::ffi::CString;

    // statvfs syscall directly (faster than a df subprocess)
    unsafe {
        let path = CString::new("/").map_err(|_| FetchError::Parse("Bad path".to_string()))?;
        let mut stat: libc::statvfs = std::mem::zeroed();

        if libc::statvfs(path.as_ptr(), &mut stat) == 0 {
            let total_bytes = stat.f_blocks.wrapping_mul(stat.f_frsize as u64);
            let available_bytes = stat.f_bavail.wrapping_mul(stat.f_frsize as u64);
            let used_bytes = total_bytes.saturating_sub(available_bytes);

            if total_bytes > 0 {
                let percent = (used_bytes as f64 / total_bytes as f64 * 100.0) as u64;
                return Ok(format!(
                    "{} / {} ({}%)",
                    format_size(used_bytes),
                    format_size(total_bytes),
                    percent
                ));
            }
        }
    }

    // Fallback to df
    let output = run_command("df", &["-h", "/"])?;
    for line in output.lines().skip(1) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 5 {
            return Ok(format!("{} / {} ({})", parts[2], parts[1], parts[4]));
        }
    }

    Err(FetchError::Detection("Disk usage not found".to_string()))
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000_000 {
        format!("{:.1}T", bytes as f64 / 1_000_000_000_000.0)
    } else if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else {
        format!("{}K", bytes / 1024)
    }
}

/// Whether any block device is a dm-crypt mapping
pub fn disk_encryption() -> Result<String> {
    if let Ok(entries) = fs::read_dir("/sys/class/block") {
        let mut saw_dm = false;
        for entry in entries.flatten() {
            let name = entry.file_name();
            if !name.to_string_lossy().starts_with("dm-") {
                continue;
            }
            saw_dm = true;
            if let Ok(uuid) = read_trimmed(entry.path().join("dm/uuid")) {
                if uuid.starts_with("CRYPT-") {
                    return Ok("Encrypted (dm-crypt)".to_string());
                }
            }
        }
        if file_exists("/sys/class/block") && !saw_dm {
            return Ok("Not encrypted".to_string());
        }
    }

    // Fallback to lsblk
    let output = run_command("lsblk", &["-rno", "TYPE"])?;
    if output.lines().any(|t| t.trim() == "crypt") {
        Ok("Encrypted (dm-crypt)".to_string())
    } else {
        Ok("Not encrypted".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meminfo_parsing() {
        let sample = "MemTotal:       32658384 kB\nMemFree:         1477628 kB\nMemAvailable:   24532120 kB\n";
        assert_eq!(meminfo_kib(sample, "MemTotal"), Some(32_658_384.0));
        assert_eq!(meminfo_kib(sample, "MemAvailable"), Some(24_532_120.0));
        assert_eq!(meminfo_kib(sample, "SwapTotal"), None);
    }

    #[test]
    fn lspci_bracket_name_wins() {
        let line = "03:00.0 VGA compatible controller: Advanced Micro Devices, Inc. \
                    [AMD/ATI] Navi 32 [Radeon RX 7700 XT / 7800 XT] (rev c1)";
        let gpu = parse_gpu_from_lspci(line).unwrap();
        assert_eq!(gpu, "Radeon RX 7700 XT / 7800 XT");
    }

    #[test]
    fn lspci_plain_description_kept() {
        let line = "00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 620";
        let gpu = parse_gpu_from_lspci(line).unwrap();
        assert_eq!(gpu, "Intel Corporation UHD Graphics 620");
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "0K");
        assert_eq!(format_size(2_500_000), "2.5M");
        assert_eq!(format_size(250_000_000_000), "250.0G");
        assert_eq!(format_size(2_000_000_000_000), "2.0T");
    }

    #[test]
    fn memory_reads_on_linux() {
        let mem = memory().unwrap();
        assert!(mem.contains(" / "));
        assert!(mem.ends_with("GiB"));
    }
}
