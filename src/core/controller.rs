use crate::core::command::CommandError;
use crate::core::domain::Configuration;

pub const EXIT_OK: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_PERSISTENCE: i32 = 2;
pub const EXIT_YEAR_PARSE: i32 = 3;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

// exit code and the message shown to the user
pub type CliError = (i32, String);

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (EXIT_REJECTED, err.to_string())
            }
            CommandError::NotFound { .. } => {
                (EXIT_REJECTED, err.to_string())
            }
            CommandError::Validation { ref reason_code, .. } => {
                if reason_code.as_deref() == Some("year_parse") {
                    (EXIT_YEAR_PARSE, err.to_string())
                } else {
                    (EXIT_REJECTED, err.to_string())
                }
            }
            CommandError::Persistence { .. } => {
                (EXIT_PERSISTENCE, err.to_string())
            }
            CommandError::Serialization { .. } => {
                (EXIT_PERSISTENCE, err.to_string())
            }
            CommandError::Warning { .. } => {
                (EXIT_OK, err.to_string())
            }
        }
    }
}
