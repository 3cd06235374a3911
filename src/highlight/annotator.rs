//! Annotated line representation

use crate::syntax::Verdict;
use serde::Serialize;
use std::fmt;

/// Enumeration of all possible annotations that can be applied to a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Delimiters, whitespace, and anything not otherwise recognized.
    Syntactic,

    /// A label definition at the start of the line.
    Label,

    /// An instruction mnemonic.
    Mnemonic,

    /// A register name.
    Register,

    /// An integer constant.
    Immediate,

    /// Everything from a `#` to the end of the line.
    Comment,

    /// The line failed to validate.
    Error,
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AnnotationKind::*;

        match self {
            Syntactic => write!(f, "syntactic"),
            Label => write!(f, "label"),
            Mnemonic => write!(f, "mnemonic"),
            Register => write!(f, "register"),
            Immediate => write!(f, "immediate"),
            Comment => write!(f, "comment"),
            Error => write!(f, "error"),
        }
    }
}

derive_serialize_from_display!(AnnotationKind);

/// An annotation that can be applied to text.
///
/// This structure does not contain span starts or ends, only a width in
/// bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Annotation {
    size: usize,
    kind: AnnotationKind,
}

/// A single annotated run of text, as handed to serializers.
#[derive(Serialize)]
struct Span<'a> {
    kind: AnnotationKind,
    text: &'a str,
}

/// A line of source, its verdict, and annotations covering all of its text.
#[derive(Clone, Debug)]
pub struct AnnotatedLine {
    text: String,
    verdict: Verdict,
    annotations: Vec<Annotation>,
}

impl AnnotatedLine {
    /// Annotate a line with one kind per byte of `text`.
    ///
    /// Runs of identical kinds are merged. Kinds must only change on `char`
    /// boundaries.
    pub(crate) fn from_byte_kinds(text: &str, verdict: Verdict, kinds: &[AnnotationKind]) -> Self {
        let mut annotations: Vec<Annotation> = Vec::new();

        for kind in kinds.iter().take(text.len()) {
            match annotations.last_mut() {
                Some(last) if last.kind == *kind => last.size += 1,
                _ => annotations.push(Annotation {
                    size: 1,
                    kind: *kind,
                }),
            }
        }

        AnnotatedLine {
            text: text.to_string(),
            verdict,
            annotations,
        }
    }

    /// Annotate the entire line with one kind.
    pub(crate) fn uniform(text: &str, verdict: Verdict, kind: AnnotationKind) -> Self {
        let annotations = if text.is_empty() {
            Vec::new()
        } else {
            vec![Annotation {
                size: text.len(),
                kind,
            }]
        };

        AnnotatedLine {
            text: text.to_string(),
            verdict,
            annotations,
        }
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Iterate annotations, in order, as the text they cover and their kind.
    pub fn iter_annotations<'a>(&'a self) -> impl 'a + Iterator<Item = (&'a str, AnnotationKind)> {
        let mut last_annotation_start = 0;

        self.annotations.iter().map(move |a| {
            let last_annotation_end = last_annotation_start + a.size;
            let strdat = self
                .text
                .get(last_annotation_start..last_annotation_end)
                .unwrap_or("");

            last_annotation_start = last_annotation_end;

            (strdat, a.kind)
        })
    }

    /// Produce a serializable form of this line's annotations.
    pub fn to_json(&self) -> serde_json::Value {
        let spans: Vec<Span<'_>> = self
            .iter_annotations()
            .map(|(text, kind)| Span { kind, text })
            .collect();

        serde_json::json!({
            "text": self.text,
            "message": self.verdict.message(),
            "spans": spans,
        })
    }
}

impl fmt::Display for AnnotatedLine {
    /// Render as `[kind:text]` runs, skipping plain syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (text, kind) in self.iter_annotations() {
            if kind == AnnotationKind::Syntactic {
                continue;
            }

            if !first {
                write!(f, " ")?;
            }

            write!(f, "[{}:{}]", kind, text)?;
            first = false;
        }

        if let Some(message) = self.verdict.message() {
            write!(f, " ; {}", message)?;
        }

        Ok(())
    }
}
