#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    InsertText,
    DeleteWord,
    Undo,
    Redo,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::InsertText,
        MenuChoice::DeleteWord,
        MenuChoice::Undo,
        MenuChoice::Redo,
        MenuChoice::Exit,
    ];

    /// Parse a numbered menu selection. Surrounding whitespace is allowed.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::InsertText),
            2 => Some(MenuChoice::DeleteWord),
            3 => Some(MenuChoice::Undo),
            4 => Some(MenuChoice::Redo),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            MenuChoice::InsertText => 1,
            MenuChoice::DeleteWord => 2,
            MenuChoice::Undo => 3,
            MenuChoice::Redo => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::InsertText => "Insert Text",
            MenuChoice::DeleteWord => "Delete Word",
            MenuChoice::Undo => "Undo",
            MenuChoice::Redo => "Redo",
            MenuChoice::Exit => "Exit",
        }
    }
}
