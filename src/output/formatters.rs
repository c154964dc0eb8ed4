//! Formatting utilities for terminal output

use crate::core::{Classification, GuessResult, Tile};
use colored::{Color, ColoredString, Colorize};

/// Background color of a tile
#[must_use]
pub const fn tile_color(class: Classification) -> Color {
    match class {
        Classification::Sequence => Color::White,
        Classification::Correct => Color::Green,
        Classification::Misplaced => Color::Yellow,
        Classification::Incorrect => Color::Red,
        Classification::Empty => Color::Black,
        Classification::Undefined => Color::Magenta,
    }
}

/// Letter color that stays readable on `tile_color(class)`
#[must_use]
pub const fn tile_text_color(class: Classification) -> Color {
    match class {
        Classification::Empty | Classification::Incorrect => Color::BrightWhite,
        _ => Color::Black,
    }
}

/// One tile as an uppercase letter on its color
#[must_use]
pub fn paint_tile(tile: Tile) -> ColoredString {
    let class = tile.classification();
    format!(" {} ", char::from(tile.letter()).to_ascii_uppercase())
        .color(tile_text_color(class))
        .on_color(tile_color(class))
        .bold()
}

/// All tiles of a result, painted
#[must_use]
pub fn format_tiles(result: &GuessResult) -> String {
    result
        .tiles()
        .iter()
        .map(|&tile| paint_tile(tile).to_string())
        .collect()
}

/// A result as an emoji row, for plain-text history
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.pattern().to_emoji()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy of a guess as a bar relative to the pool's ceiling `log₂(n)`
#[must_use]
pub fn entropy_bar(entropy: f64, ceiling: f64, width: usize) -> String {
    create_progress_bar(entropy, ceiling, width)
}

/// Answer probability to two places, with `~` when it rounds down to zero
#[must_use]
pub fn format_probability(probability: f64) -> String {
    if probability > 0.0 && probability < 0.01 {
        format!("~{probability:.2}")
    } else {
        format!("{probability:.2}")
    }
}
