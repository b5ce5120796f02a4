//! Pure text-splicing helpers shared by the input panels.

/// Insert `token` into `text` at a character position.
///
/// Positions are measured in characters (not bytes) to match egui's cursor
/// model. Out-of-range positions append at the end. Returns the new text and
/// the caret position immediately after the inserted token.
pub fn insert_at(text: &str, char_pos: usize, token: &str) -> (String, usize) {
    let total_chars = text.chars().count();
    let pos = char_pos.min(total_chars);
    let byte_pos = text
        .char_indices()
        .nth(pos)
        .map(|(index, _)| index)
        .unwrap_or(text.len());
    let mut next = String::with_capacity(text.len() + token.len());
    next.push_str(&text[..byte_pos]);
    next.push_str(token);
    next.push_str(&text[byte_pos..]);
    (next, pos + token.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_char_position_and_reports_caret() {
        let (next, caret) = insert_at("shop làm ăn", 5, "<mask>");
        assert_eq!(next, "shop <mask>làm ăn");
        assert_eq!(caret, 5 + "<mask>".chars().count());
    }

    #[test]
    fn insert_position_is_character_based_not_byte_based() {
        // "ăn" is multi-byte; position 1 must split between the two chars.
        let (next, caret) = insert_at("ăn", 1, "<mask>");
        assert_eq!(next, "ă<mask>n");
        assert_eq!(caret, 7);
    }

    #[test]
    fn out_of_range_position_appends() {
        let (next, caret) = insert_at("cái", 99, "<mask>");
        assert_eq!(next, "cái<mask>");
        assert_eq!(caret, "cái<mask>".chars().count());
    }
}
