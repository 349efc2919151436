//! User-facing notices on stderr. Errors always print; the rest honor quiet mode.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::{Stylize, style};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Prompts are skipped in quiet mode or when stdin is not a tty.
fn skip_prompt() -> bool {
    quiet() || unsafe { libc::isatty(0) } != 1
}

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Red error, never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

pub fn usage_hint() {
    if !quiet() {
        eprintln!("Try 'passgen --help' for more information.");
    }
}

/// Entropy summary for the request about to be generated.
pub fn entropy(bits: f64, strength: &str, source: &str, charset: usize) {
    if !quiet() {
        eprintln!(
            "{} {bits:.1} bits ({strength}) \u{2022} Source: {source} \u{2022} Charset: {charset} chars",
            style("Entropy:").bold()
        );
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        let noun = if count == 1 { "password" } else { "passwords" };
        eprintln!("*** -COPIED {count} {noun} TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Falls back silently when prompting is not possible.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}
