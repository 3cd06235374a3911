//! Operand kinds and their validators

use crate::syntax::register::is_register;
use crate::syntax::{SyntaxError, Verdict};
use serde::Serialize;
use std::fmt;

/// The shape an instruction expects one of its operands to take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum OperandKind {
    /// An architectural register, by ABI name or number.
    Register,

    /// A decimal integer constant within an inclusive range.
    Immediate { lower: i64, upper: i64 },

    /// A branch or jump target.
    ///
    /// Targets are usually labels, which can't be resolved one line at a
    /// time, so any token is accepted.
    Offset,
}

impl OperandKind {
    /// Immediate operand that fits in a signed 12-bit field.
    pub const IMM12: OperandKind = OperandKind::Immediate {
        lower: -2048,
        upper: 2047,
    };

    /// Immediate operand that fits in a signed 32-bit word.
    pub const IMM32: OperandKind = OperandKind::Immediate {
        lower: i32::MIN as i64,
        upper: i32::MAX as i64,
    };

    /// Check a single operand token against this kind.
    pub fn validate(&self, token: &str) -> Verdict {
        let result = match self {
            OperandKind::Register => validate_register(token),
            OperandKind::Immediate { lower, upper } => validate_immediate(token, *lower, *upper),
            OperandKind::Offset => Ok(()),
        };

        result.into()
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Register => write!(f, "reg"),
            OperandKind::Immediate { lower, upper } => write!(f, "imm[{}:{}]", lower, upper),
            OperandKind::Offset => write!(f, "offset"),
        }
    }
}

fn validate_register(token: &str) -> Result<(), SyntaxError> {
    if is_register(token) {
        Ok(())
    } else {
        Err(SyntaxError::InvalidRegister(token.to_string()))
    }
}

fn validate_immediate(token: &str, lower: i64, upper: i64) -> Result<(), SyntaxError> {
    let value =
        parse_decimal(token).ok_or_else(|| SyntaxError::InvalidImmediateFormat(token.to_string()))?;

    if value < lower || value > upper {
        return Err(SyntaxError::ImmediateOutOfRange {
            token: token.to_string(),
            lower,
            upper,
        });
    }

    Ok(())
}

/// Parse a signed base-10 integer.
///
/// Accepts one optional leading sign and nothing but ASCII digits after it.
/// Values that don't fit an `i64` are rejected just like malformed ones.
pub fn parse_decimal(token: &str) -> Option<i64> {
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse::<i64>().ok()
}
