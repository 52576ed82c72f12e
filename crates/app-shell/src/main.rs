//! Line-oriented front end for the demo navigation flow
//!
//! Renders the current screen as text and maps simple commands onto the
//! shell's tap handlers: a tap index, `back`, or `quit`.

use anyhow::Result;
use app_shell::AppShell;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut shell = AppShell::new()?;
    info!("navigation demo started");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&shell, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "b" | "back" => {
                if !shell.back() {
                    writeln!(stdout, "(already at the first screen)")?;
                }
            }
            cmd => match cmd.parse::<usize>() {
                Ok(index) => {
                    let screen = shell.screen();
                    match screen.taps.get(index) {
                        Some(target) => {
                            let action = target.action.clone();
                            if let Err(err) = shell.tap(&action) {
                                writeln!(stdout, "navigation failed: {err}")?;
                            }
                        }
                        None => writeln!(stdout, "no tap target {index}")?,
                    }
                }
                Err(_) => writeln!(stdout, "commands: <tap index>, back, quit")?,
            },
        }
        render(&shell, &mut stdout)?;
    }

    Ok(())
}

fn render(shell: &AppShell, out: &mut impl Write) -> Result<()> {
    let screen = shell.screen();
    writeln!(out)?;
    writeln!(out, "== {} ==", screen.title)?;
    for (index, tap) in screen.taps.iter().enumerate() {
        writeln!(out, "  [{index}] {}", tap.label)?;
    }
    Ok(())
}
