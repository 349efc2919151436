//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use passgen::{GeneratedPassword, PasswordForm, pass};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::{CliFlags, ParseError, help, prompts};
use crate::settings::Settings;

/// Why the CLI stopped before or instead of printing passwords.
#[derive(Debug, PartialEq, Eq)]
pub enum Exit {
    /// Help, version or a user abort. Not an error.
    Done,
    /// Bad arguments or a request the generator rejected.
    Rejected,
    /// Passwords were generated but could not be handed over.
    Output,
}

impl Exit {
    pub fn code(&self) -> ExitCode {
        match self {
            Exit::Done => ExitCode::SUCCESS,
            Exit::Rejected => ExitCode::from(2),
            Exit::Output => ExitCode::FAILURE,
        }
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub clipboard: Option<ClipboardContext>,
    env_warnings: Vec<String>,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;

        let (settings, env_warnings) = if flags.default {
            (Settings::default(), Vec::new())
        } else {
            Settings::from_env()
        };

        Ok(Self {
            settings,
            flags,
            clipboard: None,
            env_warnings,
        })
    }

    /// Run CLI. `Err` carries early exits as well as failures.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        for warning in &self.env_warnings {
            prompts::warn(warning);
        }
        self.flags.apply_to(&mut self.settings);
        check_batch(self.flags.clipboard, self.settings.number_of_passwords)?;
        self.handle_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            help::print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) -> Result<(), Exit> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                self.settings.to_clipboard = true;
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    Ok(())
                } else {
                    Err(Exit::Done)
                }
            }
        }
    }

    /// The request exactly as the user supplied it.
    pub fn form(&self) -> PasswordForm {
        PasswordForm {
            length_text: self.settings.pass_length.clone(),
            classes: self.settings.classes.clone(),
        }
    }

    /// Validate, generate and hand the passwords to the clipboard or stdout.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let request = pass::validate(&self.form()).map_err(|e| {
            prompts::error(&e.to_string());
            Exit::Rejected
        })?;

        if self.settings.show_entropy {
            let bits = pass::entropy_bits(&request);
            prompts::entropy(
                bits,
                pass::strength(bits),
                &self.settings.source.describe(),
                pass::charset::size(request.classes()),
            );
        }

        let count = self.settings.number_of_passwords;
        let passwords = pass::stream(&request, self.settings.source)
            .map_err(|e| {
                prompts::error(&e.to_string());
                Exit::Rejected
            })?
            .take(count);

        if self.settings.to_clipboard {
            self.copy_to_clipboard(passwords)
        } else {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_lines(&mut out, passwords).map_err(|e| {
                prompts::error(&format!("Failed to write passwords: {e}"));
                Exit::Output
            })
        }
    }

    fn copy_to_clipboard(
        &mut self,
        passwords: impl Iterator<Item = GeneratedPassword>,
    ) -> Result<(), Exit> {
        let Some(ctx) = self.clipboard.as_mut() else {
            return Err(Exit::Output);
        };

        let (mut joined, count) = join_lines(passwords);
        match ctx.set_contents(std::mem::take(&mut *joined)) {
            Ok(()) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied(count);
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                Err(Exit::Output)
            }
        }
    }
}

/// Largest batch held in memory for the clipboard. Stdout output streams.
pub const CLIPBOARD_MAX: usize = 10_000;

fn check_batch(clipboard: bool, count: usize) -> Result<(), Exit> {
    if clipboard && count > CLIPBOARD_MAX {
        prompts::error(&format!(
            "at most {CLIPBOARD_MAX} passwords can go to the clipboard, got {count}"
        ));
        return Err(Exit::Rejected);
    }
    Ok(())
}

/// Join passwords with newlines into one wiped buffer.
fn join_lines(passwords: impl Iterator<Item = GeneratedPassword>) -> (Zeroizing<String>, usize) {
    let mut joined = Zeroizing::new(String::new());
    let mut count = 0;
    for password in passwords {
        if count > 0 {
            joined.push('\n');
        }
        joined.push_str(password.as_str());
        count += 1;
    }
    (joined, count)
}

/// Write one password per line, dropping each before the next is drawn.
fn write_lines<W: Write>(
    out: &mut W,
    passwords: impl Iterator<Item = GeneratedPassword>,
) -> std::io::Result<()> {
    for password in passwords {
        out.write_all(password.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen::{CharacterClass, ClassSet};

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(&args).unwrap()
    }

    #[test]
    fn default_flag_skips_environment() {
        let ctx = context(&["-d"]);
        assert_eq!(ctx.settings, Settings::default());
        assert!(ctx.env_warnings.is_empty());
    }

    #[test]
    fn form_reflects_flags() {
        let mut ctx = context(&["-d", "-l", " 9 ", "--upper", "--digits"]);
        ctx.flags.apply_to(&mut ctx.settings);
        assert_eq!(
            ctx.form(),
            PasswordForm {
                length_text: " 9 ".into(),
                classes: ClassSet::from([CharacterClass::Uppercase, CharacterClass::Digit]),
            }
        );
    }

    #[test]
    fn rejected_requests_exit_with_usage_code() {
        let mut ctx = context(&["-d", "-q", "-l", "2"]);
        assert_eq!(ctx.run(), Err(Exit::Rejected));

        let mut ctx = context(&["-d", "-q", "-l", "8", "-c", ""]);
        assert_eq!(ctx.run(), Err(Exit::Rejected));
    }

    #[test]
    fn clipboard_batch_is_bounded() {
        let mut ctx = context(&["-d", "-q", "-b", "-n", "18446744073709551615"]);
        assert_eq!(ctx.run(), Err(Exit::Rejected));
        assert!(ctx.clipboard.is_none());
        assert!(check_batch(true, CLIPBOARD_MAX).is_ok());
        assert!(check_batch(false, usize::MAX).is_ok());
    }

    /// Accepts `limit` lines, then fails like a closed pipe.
    struct ClosingPipe {
        lines: usize,
        limit: usize,
    }

    impl Write for ClosingPipe {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.lines == self.limit {
                return Err(std::io::ErrorKind::BrokenPipe.into());
            }
            self.lines += buf.iter().filter(|&&b| b == b'\n').count();
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn huge_counts_stream_to_the_writer() {
        let request = pass::validate(&PasswordForm::new("8", [CharacterClass::Lowercase])).unwrap();
        let passwords = pass::stream(&request, passgen::Source::Cycle)
            .unwrap()
            .take(usize::MAX);
        let mut pipe = ClosingPipe {
            lines: 0,
            limit: 500,
        };
        let err = write_lines(&mut pipe, passwords).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(pipe.lines, 500);
    }

    #[test]
    fn clipboard_text_is_newline_joined() {
        let request = pass::validate(&PasswordForm::new("4", [CharacterClass::Digit])).unwrap();
        let passwords = pass::stream(&request, passgen::Source::Os).unwrap().take(3);
        let (joined, count) = join_lines(passwords);
        assert_eq!(count, 3);
        let lines: Vec<&str> = joined.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 4));
        assert!(join_lines(std::iter::empty()).0.is_empty());
    }

    #[test]
    fn info_flags_stop_early() {
        let mut ctx = context(&["-v"]);
        assert_eq!(ctx.run(), Err(Exit::Done));
    }

    #[test]
    fn parse_errors_surface() {
        let args: Vec<String> = ["passgen", "--nope"].iter().map(|s| s.to_string()).collect();
        assert!(matches!(
            Context::new(&args),
            Err(ParseError::UnknownArg(_))
        ));
    }
}
