use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RC_FILE_NAME: &str = ".mementorc";
const MAX_UNDO_LEVELS: usize = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    /// `None` keeps every undo snapshot.
    pub undo_levels: Option<usize>,
    pub color: bool,
    pub show_history: bool,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            undo_levels: None,
            color: true,
            show_history: false,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .mementorc in:
    /// 1. Current directory
    /// 2. Home directory (~/.mementorc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Discover and load the RC file, falling back to defaults when there is
    /// none or it cannot be read.
    pub fn load_config() -> RcConfig {
        let Some(rc_path) = Self::get_rc_path() else {
            return RcConfig::default();
        };

        match Self::load_from_path(&rc_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %rc_path.display(), error = %e, "could not read rc file");
                RcConfig::default()
            }
        }
    }

    /// Load an explicitly named RC file.
    pub fn load_from_path(path: &Path) -> io::Result<RcConfig> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading rc file");

        let mut config = RcConfig::default();
        Self::parse_config_content(&content, &mut config);
        Ok(config)
    }

    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if let Some(stripped) = line.strip_prefix("set ") {
            match stripped.trim() {
                "color" => config.color = true,
                "nocolor" => config.color = false,
                "history" => config.show_history = true,
                "nohistory" => config.show_history = false,
                setting => match setting.strip_prefix("undolevels=") {
                    Some(value) => Self::apply_undo_levels(value, config),
                    None => warn!(setting, "unknown rc setting"),
                },
            }
        } else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            match key {
                "undolevels" | "undo_levels" => Self::apply_undo_levels(value, config),
                "color" => {
                    if let Some(flag) = parse_flag(value) {
                        config.color = flag;
                    }
                }
                "history" | "show_history" => {
                    if let Some(flag) = parse_flag(value) {
                        config.show_history = flag;
                    }
                }
                _ => warn!(key, "unknown rc setting"),
            }
        } else {
            warn!(line, "unparseable rc line");
        }
    }

    fn apply_undo_levels(value: &str, config: &mut RcConfig) {
        match value.parse::<usize>() {
            Ok(0) => config.undo_levels = None,
            Ok(levels) if levels <= MAX_UNDO_LEVELS => config.undo_levels = Some(levels),
            _ => warn!(value, "ignoring invalid undolevels"),
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# memento-pad configuration file (.mementorc)
# Lines starting with # or " are comments

set color               # Styled output (or set nocolor)
set nohistory           # Show undo/redo depth under the text (or set history)
set undolevels=0        # Undo snapshots to keep, 0 for unlimited

# Alternative key=value syntax:
# color=true
# show_history=false
# undo_levels=0
"#
        .to_string()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => {
            warn!(value, "ignoring invalid boolean");
            None
        }
    }
}
