//! East Asian Width property lookup (UAX #11)
//!
//! Range data extracted from `EastAsianWidth.txt` of Unicode 15.1. The
//! data file covers more than assigned characters: reserved code points
//! in the CJK ideograph blocks, and all of planes 2 and 3 up to U+2FFFD
//! and U+3FFFD, carry Wide. Unassigned code points outside those ranges
//! report [`EastAsianWidth::Neutral`].

use crate::tables::in_ranges;

/// East Asian Width property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastAsianWidth {
    /// Fullwidth (F) - compatibility variants of narrow characters
    Fullwidth,
    /// Halfwidth (H) - compatibility variants of wide characters
    Halfwidth,
    /// Wide (W) - naturally wide, CJK ideographs and kana
    Wide,
    /// Narrow (Na) - naturally narrow, basic Latin
    Narrow,
    /// Ambiguous (A) - wide in East Asian context, narrow elsewhere
    Ambiguous,
    /// Neutral (N) - everything else
    Neutral,
}

/// Fullwidth code points.
const FULLWIDTH: &[(u32, u32)] = &[
    (0x3000, 0x3000), // ideographic space
    (0xFF01, 0xFF60), // fullwidth ASCII and brackets
    (0xFFE0, 0xFFE6), // fullwidth signs
];

/// Halfwidth code points.
const HALFWIDTH: &[(u32, u32)] = &[
    (0x20A9, 0x20A9), // won sign
    (0xFF61, 0xFFBE), // halfwidth CJK punctuation, katakana, hangul
    (0xFFC2, 0xFFC7),
    (0xFFCA, 0xFFCF),
    (0xFFD2, 0xFFD7),
    (0xFFDA, 0xFFDC),
    (0xFFE8, 0xFFEE), // halfwidth forms and arrows
];

/// Narrow code points.
const NARROW: &[(u32, u32)] = &[
    (0x0020, 0x007E), // printable ASCII
    (0x00A2, 0x00A3),
    (0x00A5, 0x00A6),
    (0x00AC, 0x00AC),
    (0x00AF, 0x00AF),
    (0x27E6, 0x27ED), // mathematical white brackets
    (0x2985, 0x2986),
];

/// Wide code points.
const WIDE: &[(u32, u32)] = &[
    (0x1100, 0x115F), // Hangul Jamo leading consonants
    (0x231A, 0x231B),
    (0x2329, 0x232A),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653), // zodiac
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x2E80, 0x2E99), // CJK radicals supplement
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5), // Kangxi radicals
    (0x2FF0, 0x2FFF), // ideographic description characters
    (0x3001, 0x303E), // CJK punctuation
    (0x3041, 0x3096), // hiragana
    (0x3099, 0x30FF), // combining kana marks, katakana
    (0x3105, 0x312F), // bopomofo
    (0x3131, 0x318E), // hangul compatibility jamo
    (0x3190, 0x31E3), // kanbun, bopomofo extended, CJK strokes
    (0x31EF, 0x321E), // katakana phonetic extensions, enclosed CJK
    (0x3220, 0x3247),
    (0x3250, 0x4DBF), // enclosed CJK, CJK compatibility, extension A
    (0x4E00, 0xA48C), // CJK unified ideographs, Yi syllables
    (0xA490, 0xA4C6), // Yi radicals
    (0xA960, 0xA97C), // hangul jamo extended-A
    (0xAC00, 0xD7A3), // hangul syllables
    (0xF900, 0xFAFF), // CJK compatibility ideographs
    (0xFE10, 0xFE19), // vertical forms
    (0xFE30, 0xFE52), // CJK compatibility forms
    (0xFE54, 0xFE66), // small form variants
    (0xFE68, 0xFE6B),
    (0x16FE0, 0x16FE4), // Tangut and Nushu marks
    (0x16FF0, 0x16FF1),
    (0x17000, 0x187F7), // Tangut
    (0x18800, 0x18CD5), // Tangut components, Khitan small script
    (0x18D00, 0x18D08), // Tangut supplement
    (0x1AFF0, 0x1AFF3), // kana extended-B
    (0x1AFF5, 0x1AFFB),
    (0x1AFFD, 0x1AFFE),
    (0x1B000, 0x1B122), // kana supplement, hentaigana
    (0x1B132, 0x1B132),
    (0x1B150, 0x1B152),
    (0x1B155, 0x1B155),
    (0x1B164, 0x1B167),
    (0x1B170, 0x1B2FB), // Nushu
    (0x1F004, 0x1F004), // mahjong tile red dragon
    (0x1F0CF, 0x1F0CF), // playing card black joker
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F200, 0x1F202), // squared kana
    (0x1F210, 0x1F23B), // squared CJK
    (0x1F240, 0x1F248),
    (0x1F250, 0x1F251),
    (0x1F260, 0x1F265),
    (0x1F300, 0x1F320), // emoji with default emoji presentation
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA),
    (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC),
    (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4),
    (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC),
    (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6DF),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB), // colored circles and squares
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA88),
    (0x1FA90, 0x1FABD),
    (0x1FABF, 0x1FAC5),
    (0x1FACE, 0x1FADB),
    (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8),
    (0x20000, 0x2FFFD), // plane 2: ideograph extensions and reserved slots
    (0x30000, 0x3FFFD), // plane 3: ideograph extensions and reserved slots
];

/// Ambiguous code points.
const AMBIGUOUS: &[(u32, u32)] = &[
    (0x00A1, 0x00A1), // Latin-1 punctuation and letters
    (0x00A4, 0x00A4),
    (0x00A7, 0x00A8),
    (0x00AA, 0x00AA),
    (0x00AD, 0x00AE),
    (0x00B0, 0x00B4),
    (0x00B6, 0x00BA),
    (0x00BC, 0x00BF),
    (0x00C6, 0x00C6),
    (0x00D0, 0x00D0),
    (0x00D7, 0x00D8),
    (0x00DE, 0x00E1),
    (0x00E6, 0x00E6),
    (0x00E8, 0x00EA),
    (0x00EC, 0x00ED),
    (0x00F0, 0x00F0),
    (0x00F2, 0x00F3),
    (0x00F7, 0x00FA),
    (0x00FC, 0x00FC),
    (0x00FE, 0x00FE),
    (0x0101, 0x0101), // Latin extended-A subset
    (0x0111, 0x0111),
    (0x0113, 0x0113),
    (0x011B, 0x011B),
    (0x0126, 0x0127),
    (0x012B, 0x012B),
    (0x0131, 0x0133),
    (0x0138, 0x0138),
    (0x013F, 0x0142),
    (0x0144, 0x0144),
    (0x0148, 0x014B),
    (0x014D, 0x014D),
    (0x0152, 0x0153),
    (0x0166, 0x0167),
    (0x016B, 0x016B),
    (0x01CE, 0x01CE), // pinyin vowels with caron
    (0x01D0, 0x01D0),
    (0x01D2, 0x01D2),
    (0x01D4, 0x01D4),
    (0x01D6, 0x01D6),
    (0x01D8, 0x01D8),
    (0x01DA, 0x01DA),
    (0x01DC, 0x01DC),
    (0x0251, 0x0251),
    (0x0261, 0x0261),
    (0x02C4, 0x02C4), // modifier letters
    (0x02C7, 0x02C7),
    (0x02C9, 0x02CB),
    (0x02CD, 0x02CD),
    (0x02D0, 0x02D0),
    (0x02D8, 0x02DB),
    (0x02DD, 0x02DD),
    (0x02DF, 0x02DF),
    (0x0300, 0x036F), // combining diacritical marks
    (0x0391, 0x03A1), // Greek letters
    (0x03A3, 0x03A9),
    (0x03B1, 0x03C1),
    (0x03C3, 0x03C9),
    (0x0401, 0x0401), // Cyrillic letters
    (0x0410, 0x044F),
    (0x0451, 0x0451),
    (0x2010, 0x2010), // general punctuation subset
    (0x2013, 0x2016),
    (0x2018, 0x2019),
    (0x201C, 0x201D),
    (0x2020, 0x2022),
    (0x2024, 0x2027),
    (0x2030, 0x2030),
    (0x2032, 0x2033),
    (0x2035, 0x2035),
    (0x203B, 0x203B),
    (0x203E, 0x203E),
    (0x2074, 0x2074),
    (0x207F, 0x207F),
    (0x2081, 0x2084),
    (0x20AC, 0x20AC), // euro sign
    (0x2103, 0x2103), // letterlike symbols
    (0x2105, 0x2105),
    (0x2109, 0x2109),
    (0x2113, 0x2113),
    (0x2116, 0x2116),
    (0x2121, 0x2122),
    (0x2126, 0x2126),
    (0x212B, 0x212B),
    (0x2153, 0x2154),
    (0x215B, 0x215E),
    (0x2160, 0x216B), // Roman numerals
    (0x2170, 0x2179),
    (0x2189, 0x2189),
    (0x2190, 0x2199), // arrows
    (0x21B8, 0x21B9),
    (0x21D2, 0x21D2),
    (0x21D4, 0x21D4),
    (0x21E7, 0x21E7),
    (0x2200, 0x2200), // mathematical operators
    (0x2202, 0x2203),
    (0x2207, 0x2208),
    (0x220B, 0x220B),
    (0x220F, 0x220F),
    (0x2211, 0x2211),
    (0x2215, 0x2215),
    (0x221A, 0x221A),
    (0x221D, 0x2220),
    (0x2223, 0x2223),
    (0x2225, 0x2225),
    (0x2227, 0x222C),
    (0x222E, 0x222E),
    (0x2234, 0x2237),
    (0x223C, 0x223D),
    (0x2248, 0x2248),
    (0x224C, 0x224C),
    (0x2252, 0x2252),
    (0x2260, 0x2261),
    (0x2264, 0x2267),
    (0x226A, 0x226B),
    (0x226E, 0x226F),
    (0x2282, 0x2283),
    (0x2286, 0x2287),
    (0x2295, 0x2295),
    (0x2299, 0x2299),
    (0x22A5, 0x22A5),
    (0x22BF, 0x22BF),
    (0x2312, 0x2312),
    (0x2460, 0x24E9), // enclosed alphanumerics
    (0x24EB, 0x254B), // negative circled numbers, box drawing
    (0x2550, 0x2573),
    (0x2580, 0x258F), // block elements
    (0x2592, 0x2595),
    (0x25A0, 0x25A1), // geometric shapes subset
    (0x25A3, 0x25A9),
    (0x25B2, 0x25B3),
    (0x25B6, 0x25B7),
    (0x25BC, 0x25BD),
    (0x25C0, 0x25C1),
    (0x25C6, 0x25C8),
    (0x25CB, 0x25CB),
    (0x25CE, 0x25D1),
    (0x25E2, 0x25E5),
    (0x25EF, 0x25EF),
    (0x2605, 0x2606), // miscellaneous symbols subset
    (0x2609, 0x2609),
    (0x260E, 0x260F),
    (0x261C, 0x261C),
    (0x261E, 0x261E),
    (0x2640, 0x2640),
    (0x2642, 0x2642),
    (0x2660, 0x2661),
    (0x2663, 0x2665),
    (0x2667, 0x266A),
    (0x266C, 0x266D),
    (0x266F, 0x266F),
    (0x269E, 0x269F),
    (0x26BF, 0x26BF),
    (0x26C6, 0x26CD),
    (0x26CF, 0x26D3),
    (0x26D5, 0x26E1),
    (0x26E3, 0x26E3),
    (0x26E8, 0x26E9),
    (0x26EB, 0x26F1),
    (0x26F4, 0x26F4),
    (0x26F6, 0x26F9),
    (0x26FB, 0x26FC),
    (0x26FE, 0x26FF),
    (0x273D, 0x273D),
    (0x2776, 0x277F), // dingbat negative circled digits
    (0x2B56, 0x2B59),
    (0x3248, 0x324F), // circled numbers on black squares
    (0xE000, 0xF8FF), // private use area
    (0xFE00, 0xFE0F), // variation selectors
    (0xFFFD, 0xFFFD), // replacement character
    (0x1F100, 0x1F10A), // enclosed alphanumeric supplement
    (0x1F110, 0x1F12D),
    (0x1F130, 0x1F169),
    (0x1F170, 0x1F18D),
    (0x1F18F, 0x1F190),
    (0x1F19B, 0x1F1AC),
    (0xE0100, 0xE01EF), // variation selectors supplement
    (0xF0000, 0xFFFFD), // plane 15 private use
    (0x100000, 0x10FFFD), // plane 16 private use
];

/// Look up the East Asian Width property of a character.
pub fn east_asian_width(c: char) -> EastAsianWidth {
    let cp = c as u32;
    if in_ranges(WIDE, cp) {
        EastAsianWidth::Wide
    } else if in_ranges(NARROW, cp) {
        EastAsianWidth::Narrow
    } else if in_ranges(AMBIGUOUS, cp) {
        EastAsianWidth::Ambiguous
    } else if in_ranges(FULLWIDTH, cp) {
        EastAsianWidth::Fullwidth
    } else if in_ranges(HALFWIDTH, cp) {
        EastAsianWidth::Halfwidth
    } else {
        EastAsianWidth::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_value_per_class() {
        assert_eq!(east_asian_width('Ａ'), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width('ｱ'), EastAsianWidth::Halfwidth);
        assert_eq!(east_asian_width('中'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('A'), EastAsianWidth::Narrow);
        assert_eq!(east_asian_width('Æ'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('א'), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_block_boundaries() {
        assert_eq!(east_asian_width('\u{3000}'), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width('\u{3001}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{303F}'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('\u{4DBF}'), EastAsianWidth::Wide);
        // Yijing hexagrams sit between extension A and the main block
        assert_eq!(east_asian_width('\u{4DC0}'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('\u{4E00}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{FF60}'), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width('\u{FF61}'), EastAsianWidth::Halfwidth);
        assert_eq!(east_asian_width('\u{20A9}'), EastAsianWidth::Halfwidth);
    }

    #[test]
    fn test_combining_kana_marks_are_wide() {
        assert_eq!(east_asian_width('\u{3099}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{309A}'), EastAsianWidth::Wide);
    }

    #[test]
    fn test_ambiguous_letters() {
        assert_eq!(east_asian_width('Ω'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('Д'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('Ё'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('ł'), EastAsianWidth::Ambiguous);
        // U+0400 is Cyrillic but neutral width
        assert_eq!(east_asian_width('Ѐ'), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_reserved_cjk_slots_are_wide() {
        // reserved tail of the compatibility ideographs block
        assert_eq!(east_asian_width('\u{FA6E}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{FADA}'), EastAsianWidth::Wide);
        // reserved gap between CJK extensions B and C
        assert_eq!(east_asian_width('\u{2A6E0}'), EastAsianWidth::Wide);
        // unallocated stretches of planes 2 and 3
        assert_eq!(east_asian_width('\u{2F000}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{323B0}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{3FFFD}'), EastAsianWidth::Wide);
    }

    #[test]
    fn test_unassigned_elsewhere_is_neutral() {
        assert_eq!(east_asian_width('\u{0378}'), EastAsianWidth::Neutral);
        // Khitan small script stops at U+18CD5 in this data
        assert_eq!(east_asian_width('\u{18CFF}'), EastAsianWidth::Neutral);
        // the Wide default stops short of each plane's noncharacters
        assert_eq!(east_asian_width('\u{2FFFE}'), EastAsianWidth::Neutral);
    }

    #[test]
    fn test_emoji_presentation_is_wide() {
        assert_eq!(east_asian_width('⌚'), EastAsianWidth::Wide); // U+231A
        assert_eq!(east_asian_width('\u{1F680}'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('\u{1FAF0}'), EastAsianWidth::Wide);
        // regional indicators and xiangqi pieces are neutral
        assert_eq!(east_asian_width('\u{1F1E6}'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('\u{1FA60}'), EastAsianWidth::Neutral);
    }

    fn assert_table_valid(name: &str, table: &[(u32, u32)]) {
        let mut prev_hi = None;
        for &(lo, hi) in table {
            assert!(lo <= hi, "{}: empty range {:#X}..{:#X}", name, lo, hi);
            if let Some(prev) = prev_hi {
                assert!(lo > prev, "{}: range starting at {:#X} out of order", name, lo);
            }
            prev_hi = Some(hi);
        }
    }

    #[test]
    fn test_tables_sorted() {
        assert_table_valid("FULLWIDTH", FULLWIDTH);
        assert_table_valid("HALFWIDTH", HALFWIDTH);
        assert_table_valid("NARROW", NARROW);
        assert_table_valid("WIDE", WIDE);
        assert_table_valid("AMBIGUOUS", AMBIGUOUS);
    }

    #[test]
    fn test_tables_are_a_partition() {
        // a code point must carry at most one property value
        let mut all: Vec<(u32, u32)> = [FULLWIDTH, HALFWIDTH, NARROW, WIDE, AMBIGUOUS]
            .iter()
            .flat_map(|table| table.iter().copied())
            .collect();
        all.sort_unstable();
        for pair in all.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "tables overlap near {:#X}",
                pair[1].0
            );
        }
    }
}
