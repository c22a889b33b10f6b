/// How the terminal driver prints state after each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Driver configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Output format for board state.
    pub output: OutputFormat,
    /// Render pieces as Unicode chess glyphs instead of letters.
    pub unicode: bool,
    /// Mark candidate squares of the selected piece.
    pub show_moves: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            output: lookup("CHESS_OUTPUT")
                .and_then(|v| OutputFormat::from_str_loose(&v))
                .unwrap_or(defaults.output),
            unicode: lookup("CHESS_UNICODE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.unicode),
            show_moves: lookup("CHESS_SHOW_MOVES")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_moves),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output: OutputFormat::Text,
            unicode: false,
            show_moves: true,
        }
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
