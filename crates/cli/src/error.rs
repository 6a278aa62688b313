use thiserror::Error;

use stockroom_core::DomainError;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("console io failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ran out while a prompt was waiting for a value.
    #[error("unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    /// A value could not be parsed and the input mode does not reprompt.
    #[error("invalid {field}: '{input}' ({reason})")]
    Parse {
        field: &'static str,
        input: String,
        reason: String,
    },

    /// A domain error the console has no recovery for.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CliError {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
