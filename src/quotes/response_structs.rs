use serde::Deserialize;

use crate::{consts::MAX_PREFERRED_QUOTE_LEN, types::ParsedQuote};

/// A quote record as served by the quotes API.
#[derive(Deserialize, Debug, Clone)]
pub struct RawQuote {
    /// Upstream record id; tolerated absent and unused by the pipeline.
    #[serde(rename = "_id", default)]
    pub id: String,
    pub character: String,
    pub show: String,
    pub quote: String,
}

impl RawQuote {
    /// A record is usable when `quote` has visible text and both
    /// `character` and `show` are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.quote.trim().is_empty() && !self.character.is_empty() && !self.show.is_empty()
    }

    /// Whether the quote text fits the preferred display length.
    ///
    /// Length is counted in characters, not bytes.
    pub fn is_short(&self) -> bool {
        self.quote.chars().count() <= MAX_PREFERRED_QUOTE_LEN
    }
}

impl From<RawQuote> for ParsedQuote {
    fn from(record: RawQuote) -> Self {
        Self {
            quote: record.quote,
            author: record.character,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quote: &str) -> RawQuote {
        RawQuote {
            id: "1".to_string(),
            character: "Holo".to_string(),
            show: "Spice and Wolf".to_string(),
            quote: quote.to_string(),
        }
    }

    #[test]
    fn test_wire_id_maps_to_id() {
        let parsed: RawQuote = serde_json::from_str(
            r#"{"_id":"abc123","character":"Holo","show":"Spice and Wolf","quote":"hi"}"#,
        )
        .unwrap();
        assert_eq!(parsed.id, "abc123");
    }

    #[test]
    fn test_missing_id_defaults_to_empty() {
        let parsed: RawQuote =
            serde_json::from_str(r#"{"character":"Holo","show":"Spice and Wolf","quote":"hi"}"#)
                .unwrap();
        assert_eq!(parsed.id, "");
        assert!(parsed.is_valid());
    }

    #[test]
    fn test_blank_quote_is_invalid() {
        assert!(!record("").is_valid());
        assert!(!record("   ").is_valid());
    }

    #[test]
    fn test_empty_character_is_invalid() {
        let mut rec = record("hi");
        rec.character = String::new();
        assert!(!rec.is_valid());
    }

    #[test]
    fn test_empty_show_is_invalid() {
        let mut rec = record("hi");
        rec.show = String::new();
        assert!(!rec.is_valid());
    }

    #[test]
    fn test_complete_record_is_valid() {
        assert!(record("A good deal benefits both parties.").is_valid());
    }

    #[test]
    fn test_short_boundary_is_inclusive() {
        assert!(record(&"x".repeat(220)).is_short());
        assert!(!record(&"x".repeat(221)).is_short());
    }

    #[test]
    fn test_short_counts_characters_not_bytes() {
        // 220 three-byte characters: 660 bytes but still a short quote
        assert!(record(&"あ".repeat(220)).is_short());
    }

    #[test]
    fn test_reshape_keeps_quote_and_character_only() {
        let parsed = ParsedQuote::from(record("A good deal benefits both parties."));
        assert_eq!(parsed.quote, "A good deal benefits both parties.");
        assert_eq!(parsed.author, "Holo");
    }
}
