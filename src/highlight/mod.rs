//! Display annotations for assembly source.
//!
//! Lines that fail validation are annotated as a single error span carrying
//! the validator's message. Valid lines are classified by a series of passes,
//! each one overriding the annotations of the passes before it on the text it
//! matches.

mod annotator;

#[cfg(test)]
mod tests;

pub use annotator::{AnnotatedLine, AnnotationKind};

use crate::syntax::{check_line, is_delimiter, register_prefix_len, SourceLine, NAMED_REGISTERS};

/// Mnemonics highlighted as instructions.
///
/// This covers more of the instruction set than the validator knows about,
/// so that unsupported but real instructions still read as code.
pub static KEYWORDS: [&str; 67] = [
    "la", "rd", "lw", "lh", "lb", "sb", "sh", "sw", "nop", "li", "mv", "not", "neg", "negw",
    "sext.w", "seqz", "snez", "sltz", "sgtz", "beqz", "bnez", "blez", "bgez", "bltz", "bgtz",
    "bgt", "ble", "bgtu", "bleu", "j", "jal", "jr", "jalr", "ret", "call", "tail", "fence",
    "rdinstret", "rdcycle", "rdtime", "csrr", "csrw", "csrs", "csrc", "csrwi", "csrsi", "csrci",
    "auipc", "addi", "xori", "sub", "subw", "addiw", "sltiu", "sltu", "slt", "beq", "bne", "bge",
    "blt", "bltu", "bgeu", "srli", "slli", "or", "add", "ecall",
];

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn preceded_by(text: &str, at: usize, pred: impl Fn(char) -> bool) -> bool {
    text[..at].chars().next_back().map_or(false, pred)
}

/// Find every whole-word occurrence of `word` in `text`.
fn find_words<'a>(text: &'a str, word: &'a str) -> impl 'a + Iterator<Item = (usize, usize)> {
    text.match_indices(word).filter_map(move |(start, _)| {
        let end = start + word.len();
        let boundary_before = !preceded_by(text, start, is_word_char);
        let boundary_after = !text[end..].chars().next().map_or(false, is_word_char);

        if boundary_before && boundary_after {
            Some((start, end))
        } else {
            None
        }
    })
}

/// Find numbered registers: a class letter at the start of a word, plus up to
/// two digits.
fn find_registers(text: &str) -> Vec<(usize, usize)> {
    text.char_indices()
        .filter(|(i, _)| !preceded_by(text, *i, is_word_char))
        .filter_map(|(i, _)| register_prefix_len(&text[i..]).map(|len| (i, i + len)))
        .collect()
}

/// Find decimal integers, with an optional sign, that do not continue a word.
fn find_immediates(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let signed = (bytes[i] == b'-' || bytes[i] == b'+')
            && bytes.get(i + 1).map_or(false, |b| b.is_ascii_digit());
        let starts_number = signed || bytes[i].is_ascii_digit();

        if starts_number && !preceded_by(text, i, is_word_char) {
            let digits_start = if signed { i + 1 } else { i };
            let end = digits_start
                + bytes[digits_start..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();

            found.push((i, end));
            i = end;
        } else {
            i += 1;
        }
    }

    found
}

/// The byte range of the line's leading label definition, if any.
fn label_span(text: &str, line: &SourceLine<'_>) -> Option<(usize, usize)> {
    let label = line.label()?;
    let start = text.find(|c: char| !is_delimiter(c))?;

    Some((start, start + label.len()))
}

/// The byte range of the line's mnemonic field, if any.
fn mnemonic_span(text: &str, line: &SourceLine<'_>) -> Option<(usize, usize)> {
    let mnemonic = line.mnemonic()?;
    let search_from = label_span(text, line).map_or(0, |(_, end)| end);
    let start = search_from + text[search_from..].find(mnemonic)?;

    Some((start, start + mnemonic.len()))
}

fn paint(kinds: &mut [AnnotationKind], span: (usize, usize), kind: AnnotationKind) {
    for k in &mut kinds[span.0..span.1] {
        *k = kind;
    }
}

/// Validate and annotate one line of source.
pub fn highlight_line(text: &str) -> AnnotatedLine {
    let verdict = check_line(text);
    if !verdict.is_valid() {
        return AnnotatedLine::uniform(text, verdict, AnnotationKind::Error);
    }

    let line = SourceLine::parse(text);
    let mut kinds = vec![AnnotationKind::Syntactic; text.len()];

    if let Some(span) = label_span(text, &line) {
        paint(&mut kinds, span, AnnotationKind::Label);
    }

    if let Some(span) = mnemonic_span(text, &line) {
        paint(&mut kinds, span, AnnotationKind::Mnemonic);
    }

    for name in NAMED_REGISTERS.iter() {
        for span in find_words(text, name) {
            paint(&mut kinds, span, AnnotationKind::Register);
        }
    }

    for keyword in KEYWORDS.iter() {
        for span in find_words(text, keyword) {
            paint(&mut kinds, span, AnnotationKind::Mnemonic);
        }
    }

    for span in find_registers(text) {
        paint(&mut kinds, span, AnnotationKind::Register);
    }

    for span in find_immediates(text) {
        paint(&mut kinds, span, AnnotationKind::Immediate);
    }

    if let Some(start) = text.find('#') {
        paint(&mut kinds, (start, text.len()), AnnotationKind::Comment);
    }

    AnnotatedLine::from_byte_kinds(text, verdict, &kinds)
}
