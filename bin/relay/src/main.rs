#![doc = include_str!("../README.md")]

mod cli;
mod commands;
mod flags;

fn main() {
    use clap::Parser;

    relay_cli::backtrace::enable();
    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
