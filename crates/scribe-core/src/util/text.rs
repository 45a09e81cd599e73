//! Text helpers

/// Invisible and whitespace codepoints stripped by [`trim_blanks`], beyond
/// what an ordinary ASCII trim removes: C1 controls that render as nothing,
/// no-break and typographic spaces, joiners, directional marks, the BOM,
/// and interlinear annotation characters.
fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{0081}'
            | '\u{008D}'
            | '\u{0090}'
            | '\u{009D}'
            | '\u{00A0}'
            | '\u{00AD}'
            | '\u{0337}'
            | '\u{0338}'
            | '\u{115F}'
            | '\u{1160}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200F}'
            | '\u{2028}'..='\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{3164}'
            | '\u{FEFF}'
            | '\u{FFA0}'
            | '\u{FFF9}'..='\u{FFFB}'
    )
}

/// Trim the extended blank set from both ends of a string.
///
/// Covers characters that survive an ordinary trim but render as blank,
/// such as no-break spaces, zero-width characters, Hangul fillers, and the
/// byte-order mark. Characters inside the string are untouched.
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches(is_blank).trim()
}

/// The character for a Unicode codepoint, or `None` when the value is not
/// a valid scalar value.
pub fn unicode_char(code: u32) -> Option<char> {
    char::from_u32(code)
}
