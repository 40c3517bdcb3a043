//! visual-width - Heuristic visual width of text for subtitle layout
//!
//! Widths are measured in units of a standard lowercase Latin letter:
//! CJK characters and emoji count 2.0 while thin punctuation counts a
//! fraction, and line totals round up to one decimal place. This is a
//! proportional-font heuristic for subtitle line fitting, not a
//! terminal cell count.
//!
//! # Measuring a Line
//! ```
//! use visual_width::calc;
//!
//! assert_eq!(calc("subtitle"), 6.0);
//! assert_eq!(calc("こんにちは"), 10.0);
//! assert_eq!(calc(""), 0.0);
//! ```
//!
//! # Rounding
//! ```
//! use visual_width::calc;
//!
//! // a single capital measures 1.15, rounded up to the next tenth
//! assert_eq!(calc("A"), 1.2);
//! ```
//!
//! # Per-Character Widths
//! ```
//! use visual_width::char_width;
//!
//! assert_eq!(char_width('i'), 0.4);
//! assert_eq!(char_width('m'), 1.3);
//! assert_eq!(char_width('中'), 2.0);
//! ```
//!
//! # Caching Repeated Lines
//! ```
//! use visual_width::{cached_calc, calc};
//!
//! let line = "Previously on...";
//! assert_eq!(cached_calc(line), calc(line));
//! ```
//!
//! # A Private Cache
//! ```
//! use visual_width::WidthCache;
//!
//! let mut cache = WidthCache::new(64);
//! let width = cache.calc("final episode");
//! assert_eq!(cache.calc("final episode"), width);
//! ```

mod cache;
mod classify;
mod east_asian;
mod error;
mod tables;

pub use cache::{cached_calc, WidthCache, DEFAULT_CACHE_CAPACITY};
pub use classify::char_width;
pub use east_asian::{east_asian_width, EastAsianWidth};
pub use error::WidthError;

/// Visual width of a string, in units of a standard lowercase letter.
///
/// Sums [`char_width`] over the characters of `text` and rounds the
/// total up to one decimal place, so a result of 3.1 means "wider than
/// 3.0, at most 3.1". Combining marks add nothing; every character is
/// classified on its own.
///
/// # Arguments
/// * `text` - The string to measure
///
/// # Returns
/// * Width in lowercase-letter units, always a non-negative multiple of 0.1
pub fn calc(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let total: f64 = text.chars().map(char_width).sum();
    (total * 10.0).ceil() / 10.0
}

/// Visual width of UTF-8 encoded bytes.
///
/// # Arguments
/// * `bytes` - The encoded string to measure
///
/// # Returns
/// * `Ok(f64)` - Visual width of the decoded text
/// * `Err(WidthError)` - Input is not valid UTF-8
pub fn calc_bytes(bytes: &[u8]) -> Result<f64, WidthError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(calc(text)),
        Err(err) => Err(WidthError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }),
    }
}
