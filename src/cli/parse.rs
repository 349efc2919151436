use passgen::CharacterClass;
use passgen::pass::charset::{self, UnknownClass};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error(transparent)]
    UnknownClass(#[from] UnknownClass),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-d" | "--default" => flags.default = true,
            "-e" | "--entropy" => flags.entropy = true,
            "--fast" => flags.fast = true,
            "--lower" => enable(&mut flags, CharacterClass::Lowercase),
            "--upper" => enable(&mut flags, CharacterClass::Uppercase),
            "--digits" => enable(&mut flags, CharacterClass::Digit),
            "--symbols" => enable(&mut flags, CharacterClass::Symbol),
            "-l" | "--length" => {
                // Passed through as text; "-5" is a value here, not a flag.
                flags.length = Some(value(args, &mut i)?.to_string());
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                flags.number = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "-c" | "--classes" => {
                let list = charset::parse_list(value(args, &mut i)?)?;
                flags.classes.get_or_insert_default().extend(list);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn enable(flags: &mut CliFlags, class: CharacterClass) {
    flags.classes.get_or_insert_default().insert(class);
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}
