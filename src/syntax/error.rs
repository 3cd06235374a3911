//! Verdict and error types for syntax checking

use serde::Serialize;
use thiserror::Error;

/// Everything that can be wrong with a single line of assembly.
///
/// The `Display` impl of each variant is the message shown to users, so the
/// wording here is part of the validator's contract.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SyntaxError {
    /// The first field of the line is not a mnemonic we know about.
    #[error("Unknown instruction")]
    UnknownInstruction,

    /// The line has the wrong number of fields for its mnemonic.
    #[error("Invalid number of arguments")]
    ArityMismatch,

    /// A register operand is neither an ABI name nor register-shaped.
    #[error("Register {0} is unrecognized")]
    InvalidRegister(String),

    /// An immediate operand is not a decimal integer.
    #[error("Invalid immediate field - got {0}")]
    InvalidImmediateFormat(String),

    /// An immediate operand parsed, but falls outside of the inclusive range
    /// the instruction accepts.
    #[error("Immediate {token} out of valid range; must be within [{lower} : {upper}]")]
    ImmediateOutOfRange { token: String, lower: i64, upper: i64 },
}

/// The outcome of validating an operand or a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(SyntaxError),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The error that made this verdict fail, if any.
    pub fn error(&self) -> Option<&SyntaxError> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(e) => Some(e),
        }
    }

    /// The user-facing message for this verdict, or `None` if it passed.
    pub fn message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    pub fn into_result(self) -> Result<(), SyntaxError> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(e) => Err(e),
        }
    }
}

impl From<Result<(), SyntaxError>> for Verdict {
    fn from(res: Result<(), SyntaxError>) -> Self {
        match res {
            Ok(()) => Verdict::Valid,
            Err(e) => Verdict::Invalid(e),
        }
    }
}

impl From<SyntaxError> for Verdict {
    fn from(err: SyntaxError) -> Self {
        Verdict::Invalid(err)
    }
}
