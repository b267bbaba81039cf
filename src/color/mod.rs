// file: src/color/mod.rs
// description: ANSI colorization module exports
// reference: internal module structure

pub mod colorizer;
pub mod palette;

pub use colorizer::{
    color_index_for, colorize, colorize_identifier, colorize_level, paint, strip_ansi,
};
pub use palette::{BaseColor, ColorTable, HIGHLIGHTS};
