//! Register name recognition

use std::collections::HashSet;

lazy_static! {
    /// Every register name defined by the standard calling convention.
    pub static ref ABI_NAMES: HashSet<&'static str> = [
        "zero", "ra", "sp", "gp", "tp", "fp",
        "t0", "t1", "t2", "t3", "t4", "t5", "t6",
        "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11",
        "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7",
    ]
    .iter()
    .copied()
    .collect();
}

/// Register names that are words rather than a letter and a number.
///
/// These are the ones the highlighter has to find by name, since they don't
/// fit `is_register_shaped`.
pub static NAMED_REGISTERS: [&str; 6] = ["zero", "ra", "sp", "gp", "tp", "fp"];

/// Letters that start a numbered register: argument, saved, temporary, and
/// raw `x` registers.
static REGISTER_CLASSES: [char; 4] = ['a', 's', 't', 'x'];

/// Determine if `token` starts with a register class letter followed by a
/// decimal digit.
///
/// Only the start of the token is examined, so `a0`, `t11`, `x31` and `a99`
/// all qualify, and so does anything that merely begins with one of them.
/// Register numbers are not bounds-checked.
pub fn is_register_shaped(token: &str) -> bool {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(class), Some(digit)) => REGISTER_CLASSES.contains(&class) && digit.is_ascii_digit(),
        _ => false,
    }
}

/// Determine if `token` names a register.
pub fn is_register(token: &str) -> bool {
    ABI_NAMES.contains(token) || is_register_shaped(token)
}

/// The length of the numbered-register match at the start of `word`, if any.
///
/// This is the class letter plus at most two digits.
pub fn register_prefix_len(word: &str) -> Option<usize> {
    if !is_register_shaped(word) {
        return None;
    }

    let digits = word[1..]
        .chars()
        .take(2)
        .take_while(|c| c.is_ascii_digit())
        .count();

    Some(1 + digits)
}
