//! ANSI color roles and text colorization
//!
//! Every colorized string ends with [`RESET`], so no styling ever leaks
//! past a single value into the rest of the terminal session.

/// Shared reset sequence for all roles
pub const RESET: &str = "\x1b[0m";

/// Fixed set of color roles used across the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BoldCyan,
    BrightGreen,
    BrightYellow,
    BrightRed,
    BrightMagenta,
    Orange,
}

impl ColorRole {
    /// Canonical escape sequence that starts this role's styling
    pub fn code(self) -> &'static str {
        match self {
            ColorRole::Red => "\x1b[31m",
            ColorRole::Green => "\x1b[32m",
            ColorRole::Yellow => "\x1b[33m",
            ColorRole::Blue => "\x1b[34m",
            ColorRole::Magenta => "\x1b[35m",
            ColorRole::Cyan => "\x1b[36m",
            ColorRole::White => "\x1b[37m",
            ColorRole::BoldCyan => "\x1b[1;36m",
            ColorRole::BrightGreen => "\x1b[92m",
            ColorRole::BrightYellow => "\x1b[93m",
            ColorRole::BrightRed => "\x1b[91m",
            ColorRole::BrightMagenta => "\x1b[95m",
            // No dedicated ANSI orange; bright red is the usual stand-in
            ColorRole::Orange => "\x1b[38;5;208m",
        }
    }
}

/// Role used for field labels
pub const LABEL_ROLE: ColorRole = ColorRole::BoldCyan;
/// Role used for field values; must differ from [`LABEL_ROLE`]
pub const VALUE_ROLE: ColorRole = ColorRole::White;

/// Wrap `text` in the role's start sequence and the shared reset
pub fn colorize(text: &str, role: ColorRole) -> String {
    format!("{}{}{}", role.code(), text, RESET)
}

/// One "label: value" display line with label and value in distinct roles
pub fn format_line(label: &str, value: &str) -> String {
    format_line_sep(label, value, ": ")
}

pub(crate) fn format_line_sep(label: &str, value: &str, separator: &str) -> String {
    format!(
        "{}{}{}",
        colorize(label, LABEL_ROLE),
        separator,
        colorize(value, VALUE_ROLE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::layout::strip_ansi;

    const ALL_ROLES: [ColorRole; 13] = [
        ColorRole::Red,
        ColorRole::Green,
        ColorRole::Yellow,
        ColorRole::Blue,
        ColorRole::Magenta,
        ColorRole::Cyan,
        ColorRole::White,
        ColorRole::BoldCyan,
        ColorRole::BrightGreen,
        ColorRole::BrightYellow,
        ColorRole::BrightRed,
        ColorRole::BrightMagenta,
        ColorRole::Orange,
    ];

    #[test]
    fn colorize_wraps_and_resets() {
        for role in ALL_ROLES {
            let out = colorize("hello", role);
            assert!(out.starts_with(role.code()));
            assert!(out.contains("hello"));
            assert!(out.ends_with(RESET));
        }
    }

    #[test]
    fn colorize_empty_string_still_resets() {
        for role in ALL_ROLES {
            let out = colorize("", role);
            assert!(out.contains(role.code()));
            assert!(out.ends_with(RESET));
        }
    }

    #[test]
    fn colorize_precolored_input_keeps_reset_suffix() {
        let pre = colorize("inner", ColorRole::Red);
        let out = colorize(&pre, ColorRole::Blue);
        assert!(out.ends_with(RESET));
        assert!(out.contains(ColorRole::Blue.code()));
        assert!(out.contains(ColorRole::Red.code()));
    }

    #[test]
    fn label_and_value_roles_differ() {
        assert_ne!(LABEL_ROLE, VALUE_ROLE);
        assert_ne!(LABEL_ROLE.code(), VALUE_ROLE.code());
    }

    #[test]
    fn format_line_strips_to_plain_label_value() {
        let line = format_line("Kernel", "6.10.4-arch1-1");
        let plain = strip_ansi(&line);
        assert_eq!(plain, "Kernel: 6.10.4-arch1-1");
        assert_eq!(plain.matches(": ").count(), 1);
    }

    #[test]
    fn role_codes_are_unique() {
        for (i, a) in ALL_ROLES.iter().enumerate() {
            for b in &ALL_ROLES[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
