//! Desktop session retrieval (DE, WM, terminal, resolution)

use crate::error::{FetchError, Result};
use crate::utils::command::run_command;
use crate::utils::file::read_trimmed;
use std::env;
use std::fs;

pub fn desktop_environment() -> Result<String> {
    if let Ok(de) = env::var("XDG_CURRENT_DESKTOP").or_else(|_| env::var("DESKTOP_SESSION")) {
        if !de.is_empty() {
            return Ok(capitalize_first_letter(&de));
        }
    }
    if env::var("WAYLAND_DISPLAY").is_ok() {
        return Ok("Wayland".to_string());
    }
    Err(FetchError::Detection("No desktop session detected".to_string()))
}

/// Scan /proc comm names for a known window manager process.
/// Most WMs start early, so the scan is capped at the first 50 PIDs.
pub fn window_manager() -> Result<String> {
    let wm_names = [
        "sway",
        "hyprland",
        "kwin_wayland",
        "kwin_x11",
        "niri",
        "mutter",
        "xfwm4",
        "openbox",
        "i3",
        "bspwm",
        "awesome",
        "weston",
        "gnome-session",
    ];

    let entries = fs::read_dir("/proc")?;
    let mut count = 0;
    for entry in entries.flatten() {
        if count > 50 {
            break;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if name.parse::<u32>().is_err() {
            continue;
        }
        count += 1;

        if let Ok(comm) = fs::read_to_string(entry.path().join("comm")) {
            let cmd = comm.trim();
            for wm in &wm_names {
                if cmd == *wm || cmd.starts_with(wm) {
                    if cmd.starts_with("gnome-session") {
                        return Ok("Mutter".to_string());
                    }
                    return Ok(capitalize_first_letter(cmd));
                }
            }
        }
    }

    if let Ok(session) = env::var("XDG_SESSION_TYPE") {
        if !session.is_empty() {
            return Ok(capitalize_first_letter(&session));
        }
    }
    Err(FetchError::Detection("No window manager detected".to_string()))
}

pub fn wm_theme() -> Result<String> {
    let theme = run_command(
        "gsettings",
        &["get", "org.gnome.desktop.wm.preferences", "theme"],
    )?;
    let theme = theme.trim_matches('\'').trim();
    if theme.is_empty() {
        Err(FetchError::Detection("WM theme not set".to_string()))
    } else {
        Ok(theme.to_string())
    }
}

/// Walk the process tree upwards until a known terminal emulator appears
pub fn terminal() -> Result<String> {
    let known_terminals = [
        "alacritty",
        "kitty",
        "wezterm",
        "foot",
        "konsole",
        "gnome-terminal",
        "xterm",
        "urxvt",
        "st",
        "tilix",
        "terminator",
        "ghostty",
    ];

    let mut current_pid = parent_pid_of("self");
    // Bounded walk so a cyclic or very deep tree cannot loop forever
    for _ in 0..10 {
        let Some(pid) = current_pid else { break };
        let next_pid = parent_pid_of(&pid.to_string());

        if let Ok(exe_link) = fs::read_link(format!("/proc/{}/exe", pid)) {
            if let Some(exe_name) = exe_link.file_name().and_then(|n| n.to_str()) {
                let exe_lower = exe_name.to_lowercase();
                for term in &known_terminals {
                    if exe_lower == *term || exe_lower.starts_with(term) {
                        return Ok(capitalize_first_letter(term));
                    }
                }
            }
        }
        current_pid = next_pid;
    }

    // Not spawned from a recognized emulator; report the terminal type
    match env::var("TERM") {
        Ok(term) if !term.is_empty() => Ok(term.replace("xterm-", "")),
        _ => Err(FetchError::Detection("No terminal detected".to_string())),
    }
}

fn parent_pid_of(pid: &str) -> Option<u32> {
    let stat = fs::read_to_string(format!("/proc/{}/stat", pid)).ok()?;
    stat.split_whitespace().nth(3)?.parse().ok()
}

pub fn terminal_font() -> Result<String> {
    let font = run_command(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "monospace-font-name"],
    )?;
    let font = font.trim_matches('\'').trim();
    if font.is_empty() {
        Err(FetchError::Detection("Terminal font not set".to_string()))
    } else {
        Ok(font.to_string())
    }
}

/// Active display modes from DRM sysfs, e.g. "2560x1440, 1920x1080"
pub fn resolution() -> Result<String> {
    let mut modes = Vec::new();
    if let Ok(entries) = fs::read_dir("/sys/class/drm") {
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            // Connector directories look like card0-DP-1
            if !name.starts_with("card") || !name.contains('-') {
                continue;
            }
            if let Ok(mode_list) = read_trimmed(path.join("modes")) {
                if let Some(first) = mode_list.lines().next() {
                    if !first.is_empty() && !modes.contains(&first.to_string()) {
                        modes.push(first.to_string());
                    }
                }
            }
        }
    }
    if !modes.is_empty() {
        return Ok(modes.join(", "));
    }

    // Fallback to xrandr on X11 setups without readable DRM nodes
    let output = run_command("xrandr", &["--current"])?;
    for line in output.lines() {
        if line.contains('*') {
            if let Some(mode) = line.split_whitespace().next() {
                return Ok(mode.to_string());
            }
        }
    }
    Err(FetchError::Detection("No display mode found".to_string()))
}

pub fn capitalize_first_letter(s: &str) -> String {
    if let Some(first) = s.chars().next() {
        format!("{}{}", first.to_uppercase(), &s[first.len_utf8()..])
    } else {
        s.to_string()
    }
}
