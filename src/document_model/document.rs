use super::snapshot::Snapshot;
use tracing::trace;

const SEPARATOR: char = ' ';

/// Characters stripped from both ends before the text is split into tokens.
/// Covers the separator itself plus ASCII control characters.
fn is_edge_filler(c: char) -> bool {
    c <= SEPARATOR
}

/// The single editable buffer of a session.
///
/// Text is treated as a flat run of space-separated tokens. Every insert and
/// delete leaves it ending in exactly one separator.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `new_text` followed by a single separator.
    pub fn insert_text(&mut self, new_text: &str) {
        self.text.push_str(new_text);
        self.text.push(SEPARATOR);
        trace!(len = self.text.len(), "inserted text");
    }

    /// Remove the last token equal to `word`, then rejoin the remaining
    /// tokens with single separators plus one trailing separator.
    ///
    /// A document left with no tokens becomes a lone separator, not an empty
    /// string. Runs of separators in the middle produce empty tokens which
    /// survive the rejoin untouched.
    pub fn delete_word(&mut self, word: &str) {
        let mut tokens: Vec<&str> = self.text.trim_matches(is_edge_filler).split(SEPARATOR).collect();

        if let Some(index) = tokens.iter().rposition(|token| *token == word) {
            tokens.remove(index);
            trace!(index, word, "removed token");
        }

        let mut rejoined = tokens.join(" ");
        rejoined.push(SEPARATOR);
        self.text = rejoined;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)]
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of non-empty tokens, for display.
    pub fn word_count(&self) -> usize {
        self.text.split(SEPARATOR).filter(|token| !token.is_empty()).count()
    }

    pub fn save(&self) -> Snapshot {
        Snapshot::new(self.text.clone())
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.text = snapshot.into_text();
    }
}
