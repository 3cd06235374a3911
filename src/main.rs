#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_plain;

mod cli;
mod highlight;
mod project;
mod syntax;

use std::io;

fn main() -> io::Result<()> {
    cli::main()
}
