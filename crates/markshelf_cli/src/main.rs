//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `markshelf_core` linkage.
//! - Render a markdown file to HTML on stdout for quick local checks.

use std::process::ExitCode;

fn main() -> ExitCode {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(source) => {
                println!("{}", markshelf_core::render_markdown(&source));
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("markshelf: failed to read `{path}`: {err}");
                ExitCode::FAILURE
            }
        },
        None => {
            println!("markshelf_core version={}", markshelf_core::core_version());
            ExitCode::SUCCESS
        }
    }
}
