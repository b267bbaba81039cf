// file: src/color/colorizer.rs
// description: bold 256-color wrapping for level names and identifiers
// reference: https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit

use super::palette::HIGHLIGHTS;
use crate::models::Severity;
use lazy_static::lazy_static;
use regex::Regex;

pub const RESET_SEQ: &str = "\x1b[0m";
pub const BOLD_SEQ: &str = "\x1b[1m";

lazy_static! {
    static ref ANSI_PATTERN: Regex = Regex::new(
        r"\x1b\[[0-9;]*m"
    ).expect("ANSI_PATTERN regex is valid");
}

pub fn paint(text: &str, code: u8) -> String {
    format!("{BOLD_SEQ}\x1b[38;5;{code}m{text}{RESET_SEQ}")
}

pub fn color_index_for(identifier: &str) -> usize {
    HIGHLIGHTS.index_for(identifier)
}

/// Callers are expected to pass a bucket obtained from [`color_index_for`].
pub fn colorize(text: &str, bucket: usize) -> String {
    paint(text, HIGHLIGHTS.code(bucket))
}

pub fn colorize_identifier(identifier: &str) -> String {
    colorize(identifier, color_index_for(identifier))
}

pub fn colorize_level(severity: Severity) -> String {
    paint(severity.as_str(), severity.base_color().code())
}

pub fn strip_ansi(text: &str) -> String {
    ANSI_PATTERN.replace_all(text, "").into_owned()
}
