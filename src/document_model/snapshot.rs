/// Immutable capture of the document text at one point in time.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    text: String,
}

impl Snapshot {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
