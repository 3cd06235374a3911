//! CLI commands

mod check;
mod common;
mod highlight;
mod main;
mod rules;

#[cfg(test)]
mod tests;

pub use check::check;
pub use common::Command;
pub use highlight::highlight;
pub use main::main;
pub use rules::rules;
