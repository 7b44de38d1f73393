//! Column layout combining art and info lines
//!
//! Width is measured on escape-stripped text so that lines with
//! different amounts of embedded styling still align on the same
//! visible column.

/// Spaces between the art column and the info column
pub const GUTTER: usize = 4;

/// Remove ANSI color sequences (`ESC [ digits/; m`).
///
/// The scan is total: a malformed or truncated sequence is not a
/// sequence at all and its bytes are kept literally.
pub fn strip_ansi(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\u{1b}' && i + 1 < chars.len() && chars[i + 1] == '[' {
            let mut j = i + 2;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == ';') {
                j += 1;
            }
            if j < chars.len() && chars[j] == 'm' {
                i = j + 1;
                continue;
            }
            // No 'm' terminator: keep everything literally
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Character count of a string with styling sequences removed
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Interleave art and info into one aligned column display.
///
/// Every art line is padded to the widest art line's visible width plus
/// [`GUTTER`] spaces before its info line is appended; once the art is
/// exhausted, blank padding keeps the info column in place. Output
/// length is `max(art.len(), info.len())`.
pub fn combine_art_and_info(art: &[String], info: &[String]) -> Vec<String> {
    let art_width = art.iter().map(|line| visible_width(line)).max().unwrap_or(0);
    let total = art.len().max(info.len());
    let mut lines = Vec::with_capacity(total);

    for i in 0..total {
        let art_line = art.get(i);
        let info_line = info.get(i);

        let mut line = String::new();
        match (art_line, info_line) {
            (Some(a), Some(inf)) => {
                line.push_str(a);
                line.push_str(&" ".repeat(art_width - visible_width(a) + GUTTER));
                line.push_str(inf);
            }
            (Some(a), None) => {
                // Info exhausted: art passes through unchanged
                line.push_str(a);
            }
            (None, Some(inf)) => {
                line.push_str(&" ".repeat(art_width + GUTTER));
                line.push_str(inf);
            }
            (None, None) => unreachable!(),
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::color::{colorize, format_line, ColorRole};

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strip_removes_color_sequences() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip_ansi("\x1b[1;36mbold cyan\x1b[0m tail"), "bold cyan tail");
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(strip_ansi(""), "");
    }

    #[test]
    fn strip_keeps_malformed_sequences_literally() {
        // Missing 'm' terminator
        assert_eq!(strip_ansi("\x1b[31x"), "\u{1b}[31x");
        // Truncated at end of string
        assert_eq!(strip_ansi("tail\x1b[31"), "tail\u{1b}[31");
        // Bare escape byte
        assert_eq!(strip_ansi("a\x1bb"), "a\u{1b}b");
        // One malformed sequence must not corrupt a later valid one
        assert_eq!(strip_ansi("\x1b[31x\x1b[32mok\x1b[0m"), "\u{1b}[31xok");
    }

    #[test]
    fn visible_width_ignores_styling() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(&colorize("hello", ColorRole::Green)), 5);
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width("\x1b[0m"), 0);
    }

    #[test]
    fn line_count_is_max_of_both() {
        let art = owned(&["a", "b", "c"]);
        let info = owned(&["1"]);
        assert_eq!(combine_art_and_info(&art, &info).len(), 3);
        assert_eq!(combine_art_and_info(&info, &art).len(), 3);
        assert_eq!(combine_art_and_info(&[], &[]).len(), 0);
    }

    #[test]
    fn info_column_is_aligned_regardless_of_styling() {
        let art = vec![
            colorize("##", ColorRole::Red),
            "####".to_string(),
            colorize("#", ColorRole::BrightYellow),
        ];
        let info = owned(&["one", "two", "three", "four"]);
        let art_width = 4;

        for (i, line) in combine_art_and_info(&art, &info).iter().enumerate() {
            let plain = strip_ansi(line);
            let column = plain.chars().count() - info[i].chars().count();
            assert_eq!(column, art_width + GUTTER);
            assert!(plain.ends_with(&info[i]));
        }
    }

    #[test]
    fn no_content_is_lost() {
        let art = vec![colorize("/\\", ColorRole::Cyan), "\\/".to_string()];
        let info = vec![format_line("OS", "Arch Linux")];
        let combined = combine_art_and_info(&art, &info);

        assert!(strip_ansi(&combined[0]).contains("/\\"));
        assert!(strip_ansi(&combined[0]).contains("OS: Arch Linux"));
        assert!(strip_ansi(&combined[1]).contains("\\/"));
    }

    #[test]
    fn empty_art_prefixes_info_with_gutter() {
        let info = owned(&["Info 1", "Info 2"]);
        let combined = combine_art_and_info(&[], &info);
        assert_eq!(combined, owned(&["    Info 1", "    Info 2"]));
    }

    #[test]
    fn empty_info_returns_art_unchanged() {
        let art = owned(&["Line 1", "Line 2"]);
        assert_eq!(combine_art_and_info(&art, &[]), art);
    }

    #[test]
    fn three_art_five_info_scenario() {
        let art = owned(&["Line 1", "Line 2", "Line 3"]);
        let info = owned(&["Info 1", "Info 2", "Info 3", "Info 4", "Info 5"]);
        let combined = combine_art_and_info(&art, &info);

        assert_eq!(combined.len(), 5);
        for i in 0..3 {
            assert_eq!(combined[i], format!("Line {}    Info {}", i + 1, i + 1));
        }
        // Art width 6 + gutter 4 = 10 leading spaces
        assert_eq!(combined[3], format!("{}Info 4", " ".repeat(10)));
        assert_eq!(combined[4], format!("{}Info 5", " ".repeat(10)));
    }
}
