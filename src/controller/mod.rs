/// Controller subsystem - Handles all user input and command execution
///
/// The session controller runs the numbered menu and dispatches each
/// selection to an edit command or straight to the history.

pub mod menu_choice;
pub mod session;

// Re-export public interface
pub use session::SessionController;
