//! Effective command-line configuration: defaults, then environment, then flags.

mod env;

use passgen::{CharacterClass, ClassSet, Source};

pub use env::{CLASSES_VAR, LENGTH_VAR, NUMBER_VAR, SOURCE_VAR};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Raw length text; the core validates it.
    pub pass_length: String,
    pub classes: ClassSet,
    pub number_of_passwords: usize,
    pub source: Source,
    pub show_entropy: bool,
    pub to_clipboard: bool,
}

impl Settings {
    /// Defaults overlaid with `PASSGEN_*` variables. Returns the warnings for
    /// values that were ignored.
    pub fn from_env() -> (Self, Vec<String>) {
        let mut settings = Settings::default();
        let warnings = env::load(&mut settings, |key| std::env::var(key).ok());
        (settings, warnings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: String::from("12"),
            classes: ClassSet::from([CharacterClass::Lowercase]),
            number_of_passwords: 1,
            source: Source::Os,
            show_entropy: false,
            to_clipboard: false,
        }
    }
}
