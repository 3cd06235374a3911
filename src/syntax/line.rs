//! Splitting a source line into fields

use crate::syntax::rule::RULES;
use crate::syntax::Verdict;

/// Characters that separate fields. Runs of them count as one separator.
pub static DELIMITERS: [char; 5] = [' ', ',', '\t', '(', ')'];

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Split a line into its non-empty fields.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(is_delimiter).filter(|f| !f.is_empty()).collect()
}

/// A line of source broken into fields, with any label definition set aside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    label: Option<&'a str>,
    fields: Vec<&'a str>,
}

impl<'a> SourceLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let mut fields = tokenize(line);
        let label = if fields.first().map_or(false, |f| f.ends_with(':')) {
            Some(fields.remove(0))
        } else {
            None
        };

        SourceLine { label, fields }
    }

    /// The label defined on this line, including its trailing colon.
    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    pub fn mnemonic(&self) -> Option<&'a str> {
        self.fields.first().copied()
    }

    /// All fields after the mnemonic.
    pub fn operands(&self) -> &[&'a str] {
        self.fields.get(1..).unwrap_or(&[])
    }

    /// Lines with no fields besides a label are not instructions.
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Validate one line of source against the builtin rule table.
pub fn check_line(line: &str) -> Verdict {
    RULES.check_line(line)
}
