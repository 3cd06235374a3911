//! Instruction rules and the table that holds them

use crate::syntax::line::SourceLine;
use crate::syntax::operand::OperandKind;
use crate::syntax::{SyntaxError, Verdict};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use OperandKind::{Offset, Register as Reg};

const IMM12: OperandKind = OperandKind::IMM12;
const IMM32: OperandKind = OperandKind::IMM32;

/// The expected syntax of one mnemonic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstructionRule {
    mnemonic: String,
    operands: Vec<OperandKind>,
}

impl InstructionRule {
    pub fn new(mnemonic: &str, operands: &[OperandKind]) -> Self {
        InstructionRule {
            mnemonic: mnemonic.to_string(),
            operands: operands.to_vec(),
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The number of fields a line using this rule must have, counting the
    /// mnemonic itself.
    pub fn expected_fields(&self) -> usize {
        self.operands.len() + 1
    }

    pub fn operands(&self) -> &[OperandKind] {
        &self.operands
    }

    /// Validate the operand fields of a line whose mnemonic matched this rule.
    ///
    /// `operands` excludes the mnemonic. Only the first failure is reported.
    pub fn check_operands(&self, operands: &[&str]) -> Verdict {
        if operands.len() + 1 != self.expected_fields() {
            return Verdict::Invalid(SyntaxError::ArityMismatch);
        }

        for (kind, token) in self.operands.iter().zip(operands) {
            if let Verdict::Invalid(e) = kind.validate(token) {
                return Verdict::Invalid(e);
            }
        }

        Verdict::Valid
    }
}

impl fmt::Display for InstructionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic)?;

        for (i, kind) in self.operands.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", kind)?;
            } else {
                write!(f, ", {}", kind)?;
            }
        }

        Ok(())
    }
}

/// Raised when a table is built with two rules for the same mnemonic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Mnemonic {0} was registered more than once")]
pub struct DuplicateMnemonic(pub String);

/// Collects rules until they are frozen into a `RuleTable`.
#[derive(Default, Debug)]
pub struct RuleTableBuilder {
    rules: Vec<InstructionRule>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one mnemonic.
    pub fn rule(mut self, mnemonic: &str, operands: &[OperandKind]) -> Self {
        self.rules.push(InstructionRule::new(mnemonic, operands));
        self
    }

    /// Register several mnemonics that share the same operand syntax.
    pub fn group(mut self, mnemonics: &[&str], operands: &[OperandKind]) -> Self {
        for mnemonic in mnemonics {
            self.rules.push(InstructionRule::new(mnemonic, operands));
        }

        self
    }

    pub fn build(self) -> Result<RuleTable, DuplicateMnemonic> {
        let mut rules = HashMap::with_capacity(self.rules.len());

        for rule in self.rules {
            if rules.contains_key(rule.mnemonic()) {
                return Err(DuplicateMnemonic(rule.mnemonic));
            }

            rules.insert(rule.mnemonic.clone(), rule);
        }

        Ok(RuleTable { rules })
    }
}

/// An immutable set of instruction rules, keyed by mnemonic.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: HashMap<String, InstructionRule>,
}

impl RuleTable {
    /// The rules for the base integer instructions and pseudo-instructions
    /// the editor understands.
    ///
    /// `beg` and `sext` are registered under those names (not `beq` and
    /// `sext.w`) to match the syntax existing sources were written against.
    pub fn builtin() -> RuleTableBuilder {
        RuleTableBuilder::new()
            .group(&["nop", "ecall"], &[])
            .group(&["call", "jr", "j"], &[Offset])
            .rule("li", &[Reg, IMM32])
            .group(
                &["mv", "not", "neg", "negw", "sext", "seqz", "snez", "sltz", "sgtz"],
                &[Reg, Reg],
            )
            .group(
                &["beg", "bne", "blt", "bge", "bltu", "bgeu"],
                &[Reg, Reg, Offset],
            )
            .group(
                &["addi", "slti", "sltiu", "xori", "ori", "andi", "slli", "srli", "srai"],
                &[Reg, Reg, IMM12],
            )
            // `rd, imm(rs)` is tokenized positionally, so the immediate sits
            // between the two registers.
            .group(&["lb", "lh", "lw", "lbu", "lhu"], &[Reg, IMM12, Reg])
            .group(
                &["add", "sub", "sll", "slt", "sltu", "xor", "srl", "sra", "or", "and"],
                &[Reg, Reg, Reg],
            )
            .group(&["sb", "sh", "sw"], &[Reg, IMM12, Reg])
    }

    pub fn get(&self, mnemonic: &str) -> Option<&InstructionRule> {
        self.rules.get(mnemonic)
    }

    /// Iterate all rules, sorted by mnemonic.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionRule> {
        let mut rules: Vec<&InstructionRule> = self.rules.values().collect();
        rules.sort_by(|a, b| a.mnemonic.cmp(&b.mnemonic));

        rules.into_iter()
    }

    /// Validate one line of source against this table.
    pub fn check_line(&self, line: &str) -> Verdict {
        self.check(&SourceLine::parse(line))
    }

    /// Validate an already tokenized line.
    pub fn check(&self, line: &SourceLine<'_>) -> Verdict {
        if line.is_blank() {
            return Verdict::Valid;
        }

        let mnemonic = line.mnemonic().unwrap_or_default();

        match self.get(mnemonic) {
            Some(rule) => rule.check_operands(line.operands()),
            None => Verdict::Invalid(SyntaxError::UnknownInstruction),
        }
    }
}

lazy_static! {
    /// The process-wide builtin rule table.
    pub static ref RULES: RuleTable = RuleTable::builtin()
        .build()
        .expect("Builtin rule table registers a mnemonic twice");
}
