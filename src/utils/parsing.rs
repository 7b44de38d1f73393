//! String parsing utilities

/// Extract value after the first colon, trimmed; None when missing or empty
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split(':')
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Look up `KEY=value` in /etc/os-release style content, stripping quotes
pub fn os_release_value(content: &str, key: &str) -> Option<String> {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(key) {
            if let Some(value) = rest.strip_prefix('=') {
                let value = value.trim().trim_matches('"');
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Format uptime from seconds into a short human-readable description
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {:02}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// First whitespace-separated token that starts with a digit.
/// Heuristic extraction of a version number from `--version` banners;
/// nonstandard banners simply yield None.
pub fn first_version_token(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .find(|tok| tok.starts_with(|c: char| c.is_ascii_digit()))
        .map(|tok| tok.trim_end_matches([',', ')']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_extraction() {
        assert_eq!(
            extract_after_colon("model name\t: AMD Ryzen 7 5800X"),
            Some("AMD Ryzen 7 5800X".to_string())
        );
        assert_eq!(extract_after_colon("no separator here"), None);
        assert_eq!(extract_after_colon("empty:   "), None);
    }

    #[test]
    fn os_release_lookup() {
        let content = "NAME=\"Arch Linux\"\nPRETTY_NAME=\"Arch Linux\"\nBUILD_ID=rolling\n";
        assert_eq!(
            os_release_value(content, "PRETTY_NAME"),
            Some("Arch Linux".to_string())
        );
        assert_eq!(os_release_value(content, "BUILD_ID"), Some("rolling".to_string()));
        assert_eq!(os_release_value(content, "VERSION_ID"), None);
        // NAME must not match PRETTY_NAME
        assert_eq!(os_release_value(content, "NAME"), Some("Arch Linux".to_string()));
    }

    #[test]
    fn uptime_formats() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3 * 3600 + 5 * 60), "3h 05m");
        assert_eq!(format_uptime(2 * 86_400 + 3600 + 60), "2d 1h 01m");
    }

    #[test]
    fn version_token_heuristics() {
        assert_eq!(
            first_version_token("GNU bash, version 5.2.26(1)-release"),
            Some("5.2.26(1)-release".to_string())
        );
        assert_eq!(first_version_token("zsh 5.9 (x86_64-pc-linux-gnu)"), Some("5.9".to_string()));
        assert_eq!(first_version_token("fish, version 3.7.1"), Some("3.7.1".to_string()));
        assert_eq!(first_version_token("no digits anywhere"), None);
        assert_eq!(first_version_token(""), None);
    }
}
