// file: src/color/palette.rs
// description: 256-color code tables used for deterministic highlighting
// reference: https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit

use lazy_static::lazy_static;

pub const HIGHLIGHT_FIRST: u8 = 20;
pub const HIGHLIGHT_LAST: u8 = 158;

lazy_static! {
    pub static ref HIGHLIGHTS: ColorTable = ColorTable::highlights();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl BaseColor {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Color codes used as a ring: key `k` maps to `codes[k mod len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    codes: Vec<u8>,
}

impl ColorTable {
    pub fn highlights() -> Self {
        Self {
            codes: (HIGHLIGHT_FIRST..=HIGHLIGHT_LAST).collect(),
        }
    }

    pub fn code(&self, bucket: usize) -> u8 {
        self.codes[bucket % self.codes.len()]
    }

    pub fn index_for(&self, identifier: &str) -> usize {
        let sum = identifier
            .chars()
            .fold(0u64, |acc, c| acc.wrapping_add(c as u64));
        (sum % self.codes.len() as u64) as usize
    }
}
