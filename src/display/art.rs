//! Embedded ASCII art and art coloring

use super::color::{colorize, ColorRole};

const ART: &str = include_str!("../ascii/crab.txt");

/// Bands used for the default multi-color rendering; rows past the last
/// declared band keep the last band's role.
pub const DEFAULT_BANDS: &[(ColorRole, usize)] = &[
    (ColorRole::BrightRed, 2),
    (ColorRole::Red, 2),
    (ColorRole::Orange, 2),
];

/// The fixed art asset as owned lines. Deterministic; blank interior
/// rows are carried as a single space so every line stays non-empty.
pub fn art_lines() -> Vec<String> {
    ART.lines()
        .map(|line| {
            if line.is_empty() {
                " ".to_string()
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Apply one role to every line
pub fn colorize_flat(lines: &[String], role: ColorRole) -> Vec<String> {
    lines.iter().map(|line| colorize(line, role)).collect()
}

/// Apply contiguous color bands top to bottom
pub fn colorize_banded(lines: &[String], bands: &[(ColorRole, usize)]) -> Vec<String> {
    if bands.is_empty() {
        return lines.to_vec();
    }

    let mut out = Vec::with_capacity(lines.len());
    let mut band_idx = 0;
    let mut rows_left = bands[0].1;

    for line in lines {
        while rows_left == 0 && band_idx + 1 < bands.len() {
            band_idx += 1;
            rows_left = bands[band_idx].1;
        }
        out.push(colorize(line, bands[band_idx].0));
        rows_left = rows_left.saturating_sub(1);
    }
    out
}
