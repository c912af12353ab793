//! Error taxonomy for option registration, parsing and retrieval.
//!
//! The four parse failures (`UnknownOption`, `MissingValue`, `InvalidChoice`,
//! `MissingRequiredOption`) carry the full usage text captured at the moment
//! of failure, so their `Display` output is a complete message a binary can
//! print as-is before terminating.

use std::fmt;

/// Every failure reported by [`crate::cli::registry::Registry`] and
/// [`crate::cli::parser::CmdLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdLineError {
    /// A token in flag position matches no registered flag or name.
    UnknownOption { option: String, usage: String },
    /// A flag is the last token, or is followed by another known flag/name.
    MissingValue { option: String, usage: String },
    /// The value given to an enumerated option is not one of its permitted values.
    InvalidChoice {
        option: String,
        value: String,
        usage: String,
    },
    /// A required option still has an empty value once every token was consumed.
    MissingRequiredOption { option: String, usage: String },
    /// An accessor was called with a name that resolves to no option.
    UnrecognizedOption { name: String },
    /// A flag or name collides with one that is already registered.
    DuplicateOption { token: String },
    /// Registration with an empty flag or name.
    EmptyOptionName,
    /// Strict retrieval could not parse the stored text as the requested type.
    InvalidValue {
        option: String,
        value: String,
        target: &'static str,
    },
    /// Writing into the output buffer failed while building text.
    FormatFailure,
}

impl CmdLineError {
    /// The option token the error refers to, when there is one.
    pub fn option(&self) -> Option<&str> {
        match self {
            CmdLineError::UnknownOption { option, .. }
            | CmdLineError::MissingValue { option, .. }
            | CmdLineError::InvalidChoice { option, .. }
            | CmdLineError::MissingRequiredOption { option, .. }
            | CmdLineError::InvalidValue { option, .. } => Some(option),
            CmdLineError::UnrecognizedOption { name } => Some(name),
            CmdLineError::DuplicateOption { token } => Some(token),
            CmdLineError::EmptyOptionName | CmdLineError::FormatFailure => None,
        }
    }

    /// The usage text attached to a parse failure.
    pub fn usage(&self) -> Option<&str> {
        match self {
            CmdLineError::UnknownOption { usage, .. }
            | CmdLineError::MissingValue { usage, .. }
            | CmdLineError::InvalidChoice { usage, .. }
            | CmdLineError::MissingRequiredOption { usage, .. } => Some(usage),
            _ => None,
        }
    }
}

impl fmt::Display for CmdLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmdLineError::UnknownOption { option, usage } => {
                write!(f, "Wrong Option name: {}. {}", option, usage)
            }
            CmdLineError::MissingValue { option, usage } => {
                write!(f, "Missing value of option: {}. {}", option, usage)
            }
            CmdLineError::InvalidChoice { option, value, usage } => {
                write!(f, "Wrong value of Option: {} ({}). {}", option, value, usage)
            }
            CmdLineError::MissingRequiredOption { option, usage } => {
                write!(f, "Missing Option: {}{}", option, usage)
            }
            CmdLineError::UnrecognizedOption { name } => {
                write!(f, "Can not distinguish option name: {}", name)
            }
            CmdLineError::DuplicateOption { token } => {
                write!(f, "Option already registered: {}", token)
            }
            CmdLineError::EmptyOptionName => {
                f.write_str("Option flag and name must not be empty")
            }
            CmdLineError::InvalidValue { option, value, target } => write!(
                f,
                "Invalid value of option {}: '{}' is not a valid {}",
                option, value, target
            ),
            CmdLineError::FormatFailure => f.write_str("Error during formatting."),
        }
    }
}

impl std::error::Error for CmdLineError {}

impl From<fmt::Error> for CmdLineError {
    fn from(_: fmt::Error) -> Self {
        CmdLineError::FormatFailure
    }
}
