use core::fmt;

/// Everything that can go wrong while decoding the referee's text
/// protocol. Any of these is fatal for the match: there is no partial
/// tick and no recovery (the driver surfaces the error and exits).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownEntityKind { tag: String },
    MissingField { field: &'static str },
    InvalidNumber { field: &'static str, value: String },
    InvalidTeamSide { value: i32 },
    MissingLine { expected: &'static str },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntityKind { tag } => {
                write!(f, "unknown entity kind tag: '{tag}'")
            }
            Self::MissingField { field } => {
                write!(f, "entity record is missing field '{field}'")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid number for field '{field}': '{value}'")
            }
            Self::InvalidTeamSide { value } => {
                write!(f, "team side must be 0 or 1, got {value}")
            }
            Self::MissingLine { expected } => {
                write!(f, "input ended while expecting {expected}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {}
