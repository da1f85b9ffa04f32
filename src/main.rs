#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rust_telex::utils::tracing::init_tracing;

#[cfg(windows)]
fn main() -> windows::core::Result<()> {
    init_tracing();

    let Some(_guard) = rust_telex::platform::win::helpers::single_instance_guard()? else {
        tracing::info!("another instance is running");
        return Ok(());
    };

    rust_telex::platform::win::run()
}

/// Offline mode: converts each whitespace separated word of every stdin line.
#[cfg(not(windows))]
fn main() -> std::io::Result<()> {
    use std::io::{BufRead, Write};

    init_tracing();

    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<String> = line
            .split_whitespace()
            .map(rust_telex_core::simulate)
            .collect();
        writeln!(out, "{}", words.join(" "))?;
    }

    Ok(())
}
