//! Character classes and alphabet building for password generation.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::ValidationError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

/// A category of characters that can be enabled for a password.
///
/// Declaration order is the order classes are concatenated into an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

/// Enabled classes. Iterates in declaration order regardless of insertion order.
pub type ClassSet = BTreeSet<CharacterClass>;

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed character set for this class.
    pub fn set(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn chars(self) -> std::str::Chars<'static> {
        self.set().chars()
    }

    /// Number of characters in this class.
    pub fn size(self) -> usize {
        self.set().chars().count()
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lower",
            CharacterClass::Uppercase => "upper",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character class '{0}' (expected lower, upper, digits or symbols)")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" | "special" => Ok(CharacterClass::Symbol),
            _ => Err(UnknownClass(s.trim().to_string())),
        }
    }
}

/// Parse a comma separated list of class names. Empty entries are skipped,
/// so `""` yields an empty set.
pub fn parse_list(list: &str) -> Result<ClassSet, UnknownClass> {
    list.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse::<CharacterClass>)
        .collect()
}

/// Characters eligible for sampling, in build order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Wrap an arbitrary character sequence, kept as given.
    pub fn from_chars(chars: Vec<char>) -> Self {
        Alphabet(chars)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl Deref for Alphabet {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

/// Build the alphabet for the enabled classes.
///
/// Sets are concatenated in [`CharacterClass::ALL`] order and never
/// deduplicated.
pub fn build(classes: &ClassSet) -> Result<Alphabet, ValidationError> {
    if classes.is_empty() {
        return Err(ValidationError::NoClassSelected);
    }

    let mut chars: Vec<char> = Vec::with_capacity(size(classes));
    for class in CharacterClass::ALL {
        if classes.contains(&class) {
            chars.extend(class.chars());
        }
    }

    Ok(Alphabet(chars))
}

/// Calculate the alphabet size (for entropy calculation).
pub fn size(classes: &ClassSet) -> usize {
    classes.iter().map(|class| class.size()).sum()
}
