//! Per-character width classification

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::east_asian::{east_asian_width, EastAsianWidth};
use crate::tables::{in_ranges, DOUBLE_WIDTH_BLOCKS};

// ===== ASCII width sets =====

/// Visibly thinner than the lowercase baseline.
const VERY_NARROW_CHARS: &[char] = &['i', 'l', 'I', '!', '|', '\'', '`', '.', ',', ':', ';'];

/// Somewhat thinner than the lowercase baseline.
const NARROW_CHARS: &[char] = &[
    'f', 'j', 't', 'r', '(', ')', '[', ']', '{', '}', '"', '/', '\\', '-',
];

/// Visibly wider than the lowercase baseline.
const WIDE_CHARS: &[char] = &['m', 'w', 'M', 'W', '@', '#', '%', '&', '*', '+', '='];

/// Heuristic visual width of one character, in units of a standard
/// lowercase Latin letter.
///
/// The first matching rule decides, so halfwidth katakana stay at 1.0
/// even though their block is otherwise double width, and the combining
/// kana voicing marks come out at 2.0 rather than 0.0.
///
/// # Examples
/// ```
/// use visual_width::char_width;
///
/// assert_eq!(char_width('i'), 0.4);
/// assert_eq!(char_width('A'), 1.15);
/// assert_eq!(char_width('中'), 2.0);
/// assert_eq!(char_width('\u{0301}'), 0.0); // combining acute accent
/// ```
pub fn char_width(c: char) -> f64 {
    if c.is_ascii() {
        return ascii_width(c);
    }

    let eaw = east_asian_width(c);
    match eaw {
        EastAsianWidth::Fullwidth | EastAsianWidth::Wide => return 2.0,
        EastAsianWidth::Halfwidth => return 1.0,
        _ => {}
    }

    // Combining marks, controls and format characters take no space of
    // their own.
    let category = c.general_category();
    if matches!(
        category,
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::Control
            | GeneralCategory::Format
    ) {
        return 0.0;
    }

    let cp = c as u32;
    if in_ranges(DOUBLE_WIDTH_BLOCKS, cp) {
        return 2.0;
    }

    // Ambiguous-width letters render slightly wide in the scripts that
    // subtitle fonts tune for.
    if eaw == EastAsianWidth::Ambiguous {
        let upper = category == GeneralCategory::UppercaseLetter;
        return match cp {
            0x0370..=0x03FF => {
                if upper {
                    1.1
                } else {
                    1.0
                }
            }
            0x0400..=0x04FF => {
                if upper {
                    1.15
                } else {
                    1.0
                }
            }
            0x0100..=0x017F => {
                if upper {
                    1.1
                } else {
                    1.0
                }
            }
            _ => 1.0,
        };
    }

    match c {
        '\u{0600}'..='\u{06FF}' => return 0.8, // Arabic
        '\u{0590}'..='\u{05FF}' => return 0.9, // Hebrew
        '\u{0E00}'..='\u{0E7F}' => return 0.9, // Thai
        '\u{0900}'..='\u{097F}' => return 0.9, // Devanagari
        _ => {}
    }

    match category {
        GeneralCategory::UppercaseLetter => 1.1,
        GeneralCategory::DecimalNumber => 0.9,
        _ => 1.0,
    }
}

fn ascii_width(c: char) -> f64 {
    if VERY_NARROW_CHARS.contains(&c) {
        return 0.4;
    }
    if NARROW_CHARS.contains(&c) {
        return 0.6;
    }
    if WIDE_CHARS.contains(&c) {
        return 1.3;
    }
    if c.is_ascii_digit() {
        return 0.9;
    }
    if c == ' ' {
        return 0.3;
    }
    if c == '\t' {
        return 2.0;
    }
    // I, M and W already matched above
    if c.is_ascii_uppercase() {
        return 1.15;
    }
    1.0
}
