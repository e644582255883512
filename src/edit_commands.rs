use crate::document_model::{Document, History};
use tracing::debug;

/// A single reversible edit against a document and its history.
pub trait EditCommand {
    fn execute(&mut self);
    #[allow(dead_code)] // The menu undoes through the history directly
    fn undo(&mut self);
}

/// Shared undo path: step the history back and restore if it had anything.
fn undo_last(document: &mut Document, history: &mut History) {
    match history.undo(document.save()) {
        Some(previous) => document.restore(previous),
        None => debug!("command undo with empty history"),
    }
}

pub struct InsertCommand<'a> {
    document: &'a mut Document,
    history: &'a mut History,
    text: String,
}

impl<'a> InsertCommand<'a> {
    pub fn new(document: &'a mut Document, history: &'a mut History, text: impl Into<String>) -> Self {
        Self {
            document,
            history,
            text: text.into(),
        }
    }
}

impl EditCommand for InsertCommand<'_> {
    fn execute(&mut self) {
        debug!(text = %self.text, "insert");
        self.history.save_state(self.document.save());
        self.document.insert_text(&self.text);
    }

    fn undo(&mut self) {
        undo_last(self.document, self.history);
    }
}

pub struct DeleteWordCommand<'a> {
    document: &'a mut Document,
    history: &'a mut History,
    word: String,
}

impl<'a> DeleteWordCommand<'a> {
    pub fn new(document: &'a mut Document, history: &'a mut History, word: impl Into<String>) -> Self {
        Self {
            document,
            history,
            word: word.into(),
        }
    }
}

impl EditCommand for DeleteWordCommand<'_> {
    fn execute(&mut self) {
        debug!(word = %self.word, "delete word");
        self.history.save_state(self.document.save());
        self.document.delete_word(&self.word);
    }

    fn undo(&mut self) {
        undo_last(self.document, self.history);
    }
}
