//! Code point range tables shared by the width classifier

use std::cmp::Ordering;

/// Test whether `cp` falls inside any range of a table.
///
/// Ranges are inclusive on both ends and the table must be sorted and
/// non-overlapping (checked by the table tests).
pub(crate) fn in_ranges(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Blocks whose characters render at double width in subtitle fonts.
///
/// These are consulted after the East Asian Width property and the
/// zero-width mark check, so they pick up symbols the property leaves
/// narrow (stars, dingbats) and unassigned slots inside CJK blocks.
pub(crate) const DOUBLE_WIDTH_BLOCKS: &[(u32, u32)] = &[
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2FF0, 0x2FFF),   // ideographic description characters
    (0x3000, 0x303F),   // CJK symbols and punctuation
    (0x3040, 0x309F),   // hiragana
    (0x30A0, 0x30FF),   // katakana
    (0x3100, 0x312F),   // bopomofo
    (0x3130, 0x318F),   // hangul compatibility jamo
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA960, 0xA97F),   // hangul jamo extended-A
    (0xAC00, 0xD7AF),   // hangul syllables
    (0xD7B0, 0xD7FF),   // hangul jamo extended-B
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFE50, 0xFE6F),   // small form variants
    (0xFF00, 0xFFEF),   // halfwidth and fullwidth forms
    (0x1F300, 0x1F6FF), // symbols, pictographs and transport emoji
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x20000, 0x2A6DF), // CJK extension B
    (0x2A700, 0x2B73F), // CJK extension C
    (0x2B740, 0x2B81F), // CJK extension D
    (0x2B820, 0x2CEAF), // CJK extension E
    (0x2CEB0, 0x2EBEF), // CJK extension F
    (0x2EBF0, 0x2EE5F), // CJK extension I
    (0x2F800, 0x2FA1F), // CJK compatibility supplement
    (0x30000, 0x3134F), // CJK extension G
    (0x31350, 0x323AF), // CJK extension H
];
