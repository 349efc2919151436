use crossterm::style::{Stylize, style};
use passgen::pass::{MAX_LENGTH, MIN_LENGTH};

use crate::settings::{CLASSES_VAR, LENGTH_VAR, NUMBER_VAR, SOURCE_VAR};
use crate::terminal::BoxWriter;

pub fn help_text() -> String {
    let mut w = BoxWriter::new("passgen");
    w.center("Password generator")
        .line("")
        .line(&format!("{}:", style("USAGE").underlined()))
        .line("  passgen [OPTIONS]")
        .line("")
        .line(&format!("{}:", style("OPTIONS").underlined()))
        .line(" Password:")
        .opt(
            "  -l, --length <N>",
            &format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH} (default: 12)"),
        )
        .opt(
            "  -c, --classes <LIST>",
            "Comma separated classes: lower, upper, digits, symbols (default: lower)",
        )
        .opt("      --lower", "Enable a-z")
        .opt("      --upper", "Enable A-Z")
        .opt("      --digits", "Enable 0-9")
        .opt("      --symbols", "Enable !@#$%^&*()_+")
        .opt("  -n, --number <N>", "How many to generate (default: 1)")
        .line("")
        .line(" Output:")
        .opt("  -b, --board", "Copy to clipboard instead of printing")
        .opt("  -e, --entropy", "Print the entropy estimate to stderr")
        .opt("  -q, --quiet", "Suppress warnings and notices")
        .line("")
        .line(" Randomness:")
        .opt(
            "      --fast",
            "Cycle-counter generator instead of the OS-seeded CSPRNG (not cryptographic)",
        )
        .line("")
        .line(" Settings:")
        .opt("  -d, --default", "Ignore PASSGEN_* environment variables")
        .line("")
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .rule()
        .line(&format!("{}:", style("ENVIRONMENT").underlined()))
        .opt(&format!("  {LENGTH_VAR}"), "Default length")
        .opt(&format!("  {CLASSES_VAR}"), "Default class list")
        .opt(&format!("  {NUMBER_VAR}"), "Default number of passwords")
        .opt(&format!("  {SOURCE_VAR}"), "os or cycle")
        .opt("  PASSGEN_LOG", "Log filter (default: warn)")
        .line("")
        .line(&format!("{}:", style("EXAMPLES").underlined()))
        .line("  passgen -l 16 -c lower,upper,digits")
        .line("  passgen -l 8 --digits -n 5")
        .line("  passgen -l 12 --lower --symbols -b")
        .line("");
    w.finish()
}

pub fn print_help() {
    print!("{}", help_text());
    crate::terminal::flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{BOX_WIDTH, console_width};

    #[test]
    fn help_fits_the_box() {
        let text = help_text();
        assert!(text.contains("--classes"));
        assert!(text.contains(LENGTH_VAR));
        for row in text.lines() {
            assert_eq!(console_width(row), BOX_WIDTH, "row {row:?}");
        }
    }
}
