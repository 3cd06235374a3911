//! List the instruction rule table

use crate::project::OutputFormat;
use crate::syntax::{InstructionRule, OperandKind, RULES};
use serde::Serialize;
use std::io;

/// One entry of the JSON rule listing.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct RuleListing<'a> {
    mnemonic: &'a str,
    expected_fields: usize,
    operands: &'a [OperandKind],
}

impl<'a> From<&'a InstructionRule> for RuleListing<'a> {
    fn from(rule: &'a InstructionRule) -> Self {
        RuleListing {
            mnemonic: rule.mnemonic(),
            expected_fields: rule.expected_fields(),
            operands: rule.operands(),
        }
    }
}

pub fn rules(format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for rule in RULES.iter() {
                println!("{:<36} {} field(s)", rule.to_string(), rule.expected_fields());
            }
        }
        OutputFormat::Json => {
            let rules: Vec<RuleListing<'_>> = RULES.iter().map(RuleListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
        }
    }

    Ok(())
}
