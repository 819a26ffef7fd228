/// Characters that separate mark-scheme items: line breaks, question marks,
/// pipes and the bullet glyphs people paste from slides and PDFs.
pub const ITEM_DELIMITERS: [char; 8] = ['\n', '?', '|', '•', '·', '‣', '–', '-'];

/// Splits pasted mark-scheme text into trimmed, non-empty items, in input order.
pub fn parse_mark_scheme(raw: &str) -> Vec<String> {
    raw.split(ITEM_DELIMITERS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct MarkSchemeBuilder {
    pub raw: String,
    items: Vec<String>,
}

impl MarkSchemeBuilder {
    /// Re-parses `raw` and replaces the current list. Returns the item count.
    pub fn build(&mut self) -> usize {
        self.items = parse_mark_scheme(&self.raw);
        self.items.len()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_bullet_glyph() {
        let items = parse_mark_scheme("• One\n- Two\n– Three\n· Four\n‣ Five\nSix");
        assert_eq!(items, vec!["One", "Two", "Three", "Four", "Five", "Six"]);
    }

    #[test]
    fn delimiters_and_whitespace_only_yield_nothing() {
        assert!(parse_mark_scheme("").is_empty());
        assert!(parse_mark_scheme(" \n - | ? •\t·\r\n ‣ – ").is_empty());
    }

    #[test]
    fn keeps_first_occurrence_order_and_duplicates() {
        let items = parse_mark_scheme("Wash hands | Introduce self? Consent\nWash hands");
        assert_eq!(
            items,
            vec!["Wash hands", "Introduce self", "Consent", "Wash hands"]
        );
    }

    #[test]
    fn hyphenated_words_are_split_too() {
        // Every hyphen is a separator, including ones inside words.
        assert_eq!(parse_mark_scheme("A-E sweep"), vec!["A", "E sweep"]);
    }

    #[test]
    fn builder_replaces_previous_list() {
        let mut builder = MarkSchemeBuilder::default();
        builder.raw = "Introduce self\nConfirm identity".into();
        assert_eq!(builder.build(), 2);

        builder.raw = "Wash hands".into();
        assert_eq!(builder.build(), 1);
        assert_eq!(builder.items(), ["Wash hands".to_string()]);
    }
}
