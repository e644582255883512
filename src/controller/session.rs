use crate::config::RcConfig;
use crate::controller::menu_choice::MenuChoice;
use crate::document_model::{Document, History};
use crate::edit_commands::{DeleteWordCommand, EditCommand, InsertCommand};
use crossterm::style::{Color, Stylize, style};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Result of handling one menu selection
#[derive(Debug, PartialEq)]
pub enum SessionTransition {
    Stay,
    Quit,
}

/// Owns the document and its history for one interactive session.
pub struct SessionController {
    document: Document,
    history: History,
    color: bool,
    show_history: bool,
}

impl SessionController {
    pub fn new(config: &RcConfig) -> Self {
        let history = match config.undo_levels {
            Some(levels) => History::with_limit(levels),
            None => History::new(),
        };

        Self {
            document: Document::new(),
            history,
            color: config.color,
            show_history: config.show_history,
        }
    }

    #[allow(dead_code)]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[allow(dead_code)]
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn insert_text(&mut self, text: &str) {
        InsertCommand::new(&mut self.document, &mut self.history, text).execute();
    }

    pub fn delete_word(&mut self, word: &str) {
        DeleteWordCommand::new(&mut self.document, &mut self.history, word).execute();
    }

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.document.save()) {
            Some(previous) => {
                self.document.restore(previous);
                true
            }
            None => false,
        }
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.document.save()) {
            Some(next) => {
                self.document.restore(next);
                true
            }
            None => false,
        }
    }

    /// Run the menu loop until the user exits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        info!("session started");

        loop {
            self.render_menu(output)?;

            let Some(line) = read_line(input)? else {
                info!("input closed, ending session");
                writeln!(output)?;
                break;
            };

            let transition = match MenuChoice::parse(&line) {
                Some(choice) => self.handle_choice(choice, input, output)?,
                None => {
                    debug!(input = %line, "invalid menu option");
                    writeln!(output, "{}", self.paint("Invalid option!", Color::Red))?;
                    SessionTransition::Stay
                }
            };

            if transition == SessionTransition::Quit {
                break;
            }
        }

        info!(
            undo = self.history.undo_depth(),
            redo = self.history.redo_depth(),
            "session ended"
        );
        Ok(())
    }

    fn handle_choice<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<SessionTransition> {
        match choice {
            MenuChoice::InsertText => {
                write!(output, "Enter text: ")?;
                output.flush()?;
                match read_line(input)? {
                    Some(text) => self.insert_text(&text),
                    None => return Ok(SessionTransition::Quit),
                }
            }
            MenuChoice::DeleteWord => {
                write!(output, "Enter word to delete: ")?;
                output.flush()?;
                match read_line(input)? {
                    Some(word) => self.delete_word(&word),
                    None => return Ok(SessionTransition::Quit),
                }
            }
            MenuChoice::Undo => {
                if !self.undo() {
                    writeln!(output, "{}", self.paint("Nothing to undo!", Color::Yellow))?;
                }
            }
            MenuChoice::Redo => {
                if !self.redo() {
                    writeln!(output, "{}", self.paint("Nothing to redo!", Color::Yellow))?;
                }
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting...")?;
                return Ok(SessionTransition::Quit);
            }
        }

        Ok(SessionTransition::Stay)
    }

    fn render_menu<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output)?;
        writeln!(
            output,
            "{} {}",
            self.paint("Current Text:", Color::Cyan),
            self.document.text()
        )?;

        if self.show_history {
            writeln!(
                output,
                "History: {} undo / {} redo ({} words)",
                self.history.undo_depth(),
                self.history.redo_depth(),
                self.document.word_count()
            )?;
        }

        for choice in MenuChoice::ALL {
            writeln!(output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(output, "Choose option: ")?;
        output.flush()
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain_config() -> RcConfig {
        RcConfig {
            color: false,
            ..RcConfig::default()
        }
    }

    fn run_session(config: &RcConfig, script: &str) -> (SessionController, String) {
        let mut session = SessionController::new(config);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_insert_delete_and_undo_transcript() {
        let script = "1\nhello\n1\nworld\n2\nhello\n3\n5\n";
        let (session, output) = run_session(&plain_config(), script);

        assert_eq!(session.document().text(), "hello world ");
        assert!(output.contains("Current Text: hello \n"));
        assert!(output.contains("Current Text: world \n"));
        assert!(output.contains("Enter text: "));
        assert!(output.contains("Enter word to delete: "));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_menu_lists_every_option() {
        let (_, output) = run_session(&plain_config(), "5\n");
        assert!(output.contains("1. Insert Text\n2. Delete Word\n3. Undo\n4. Redo\n5. Exit\nChoose option: "));
    }

    #[test]
    fn test_nothing_to_undo_or_redo() {
        let (session, output) = run_session(&plain_config(), "3\n4\n5\n");
        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("Nothing to redo!"));
        assert_eq!(session.document().text(), "");
    }

    #[test]
    fn test_redo_after_undo() {
        let (session, output) = run_session(&plain_config(), "1\nx\n1\ny\n3\n4\n5\n");
        assert_eq!(session.document().text(), "x y ");
        assert!(!output.contains("Nothing to redo!"));
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let (session, output) = run_session(&plain_config(), "1\nx\n3\n1\ny\n4\n5\n");
        assert_eq!(session.document().text(), "y ");
        assert!(output.contains("Nothing to redo!"));
    }

    #[test]
    fn test_invalid_option_keeps_running() {
        let (session, output) = run_session(&plain_config(), "9\nabc\n1\nok\n5\n");
        assert_eq!(output.matches("Invalid option!").count(), 2);
        assert_eq!(session.document().text(), "ok ");
    }

    #[test]
    fn test_blank_and_trailing_text_choices_are_invalid() {
        let (session, output) = run_session(&plain_config(), "\n1 extra\n5\n");
        assert_eq!(output.matches("Invalid option!").count(), 2);
        assert_eq!(session.document().text(), "");
    }

    #[test]
    fn test_insert_keeps_line_verbatim() {
        let (session, _) = run_session(&plain_config(), "1\n  two words\r\n5\n");
        assert_eq!(session.document().text(), "  two words ");
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (session, output) = run_session(&plain_config(), "1\nhello\n");
        assert_eq!(session.document().text(), "hello ");
        assert!(!output.contains("Exiting..."));

        let (session, _) = run_session(&plain_config(), "1\n");
        assert_eq!(session.document().text(), "");
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_show_history_line() {
        let config = RcConfig {
            show_history: true,
            ..plain_config()
        };
        let (_, output) = run_session(&config, "1\na b\n3\n5\n");
        assert!(output.contains("History: 1 undo / 0 redo (2 words)"));
        assert!(output.contains("History: 0 undo / 1 redo (0 words)"));
    }

    #[test]
    fn test_undo_levels_from_config() {
        let config = RcConfig {
            undo_levels: Some(1),
            ..plain_config()
        };
        let mut session = SessionController::new(&config);
        session.insert_text("a");
        session.insert_text("b");

        assert!(session.undo());
        assert_eq!(session.document().text(), "a ");
        assert!(!session.undo());
        assert_eq!(session.document().text(), "a ");
    }

    #[test]
    fn test_colored_output_keeps_message_text() {
        let config = RcConfig::default();
        let (_, output) = run_session(&config, "3\n5\n");
        assert!(output.contains("Nothing to undo!"));
        assert!(output.contains("Exiting..."));
    }
}
