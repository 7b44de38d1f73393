//! Rendering: field lines, art coloring and final output

pub mod art;
pub mod color;
pub mod layout;

use crate::config::Config;
use crate::data::SystemInfo;
use art::{art_lines, colorize_banded, DEFAULT_BANDS};
use color::{colorize, format_line_sep, LABEL_ROLE};
use layout::combine_art_and_info;

/// Display order when the config does not select fields
pub const DEFAULT_FIELDS: &[&str] = &[
    "os",
    "os_version",
    "os_build",
    "kernel",
    "arch",
    "host",
    "uptime",
    "packages",
    "shell",
    "resolution",
    "de",
    "wm",
    "wm_theme",
    "terminal",
    "terminal_font",
    "cpu",
    "cpu_cores",
    "gpu",
    "memory",
    "load",
    "disk",
    "disk_encryption",
    "battery",
];

/// Resolve a config field key to its label and value
fn field_entry<'a>(info: &'a SystemInfo, key: &str) -> Option<(&'static str, &'a str)> {
    Some(match key {
        "os" => ("OS", &info.os.name),
        "os_version" => ("OS Version", &info.os.version),
        "os_build" => ("OS Build", &info.os.build),
        "kernel" => ("Kernel", &info.os.kernel),
        "arch" => ("Arch", &info.os.architecture),
        "host" => ("Host", &info.hardware.host_model),
        "uptime" => ("Uptime", &info.status.uptime),
        "packages" => ("Packages", &info.packages.count),
        "shell" => ("Shell", &info.status.shell),
        "resolution" => ("Resolution", &info.desktop.resolution),
        "de" => ("DE", &info.desktop.environment),
        "wm" => ("WM", &info.desktop.window_manager),
        "wm_theme" => ("WM Theme", &info.desktop.wm_theme),
        "terminal" => ("Terminal", &info.desktop.terminal),
        "terminal_font" => ("Terminal Font", &info.desktop.terminal_font),
        "cpu" => ("CPU", &info.hardware.cpu_model),
        "cpu_cores" => ("CPU Cores", &info.hardware.cpu_cores),
        "gpu" => ("GPU", &info.hardware.gpu_model),
        "memory" => ("Memory", &info.hardware.memory),
        "load" => ("Load Average", &info.status.load_average),
        "disk" => ("Disk", &info.hardware.disk),
        "disk_encryption" => ("Disk Encryption", &info.hardware.disk_encryption),
        "battery" => ("Battery", &info.status.battery),
        _ => return None,
    })
}

/// Build the colorized info column for one snapshot
pub fn info_lines(config: &Config, info: &SystemInfo) -> Vec<String> {
    let separator = config.display.separator.as_deref().unwrap_or(": ");
    let selected: Vec<&str> = match &config.display.fields {
        Some(fields) => fields.iter().map(|s| s.as_str()).collect(),
        None => DEFAULT_FIELDS.to_vec(),
    };

    let mut lines = Vec::with_capacity(selected.len() + 1);
    lines.push(colorize(
        &format!("{}@{}", info.user.username, info.user.hostname),
        LABEL_ROLE,
    ));
    for key in selected {
        match field_entry(info, key) {
            Some((label, value)) => lines.push(format_line_sep(label, value, separator)),
            None => eprintln!("Warning: unknown field '{}' in config", key),
        }
    }
    lines
}

/// Render the full display to stdout
pub fn render(config: &Config, info: &SystemInfo) {
    let info_column = info_lines(config, info);
    let art_column = colorize_banded(&art_lines(), DEFAULT_BANDS);

    for line in combine_art_and_info(&art_column, &info_column) {
        println!("{}", line);
    }
}
