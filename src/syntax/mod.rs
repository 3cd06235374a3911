//! Line-at-a-time syntax checking for RISC-V assembly.
//!
//! A line is split into fields on spaces, commas, tabs and parentheses. A
//! leading field ending in `:` is a label definition and is set aside. The
//! first remaining field is the mnemonic, which selects an `InstructionRule`
//! from a `RuleTable`; the rule fixes how many fields the line must have and
//! what kind of operand each field must be.
//!
//! No context is carried between lines. Label references are never resolved,
//! which is why branch, jump and call targets accept any token.

mod error;
mod line;
mod operand;
mod register;
mod rule;


pub use error::{SyntaxError, Verdict};
pub use line::{check_line, is_delimiter, SourceLine};
pub use operand::OperandKind;
pub use register::{register_prefix_len, NAMED_REGISTERS};
pub use rule::{InstructionRule, RULES};
