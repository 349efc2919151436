use passgen::ClassSet;

use crate::settings::Settings;

#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub default: bool,
    pub entropy: bool,
    pub fast: bool,
    pub length: Option<String>,
    pub number: Option<usize>,
    /// Union of `-c` lists and single-class flags; `None` when neither was given.
    pub classes: Option<ClassSet>,
}

impl CliFlags {
    /// Overlay explicit flags on `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(ref len) = self.length {
            settings.pass_length = len.clone();
        }
        if let Some(num) = self.number {
            settings.number_of_passwords = num;
        }
        if let Some(ref classes) = self.classes {
            settings.classes = classes.clone();
        }
        if self.fast {
            settings.source = passgen::Source::Cycle;
        }
        if self.entropy {
            settings.show_entropy = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen::{CharacterClass, Source};

    #[test]
    fn no_flags_keep_settings() {
        let mut settings = Settings::default();
        CliFlags::default().apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn explicit_flags_win() {
        let flags = CliFlags {
            length: Some("16".into()),
            number: Some(4),
            classes: Some(ClassSet::from([CharacterClass::Symbol])),
            fast: true,
            entropy: true,
            ..Default::default()
        };
        let mut settings = Settings::default();
        flags.apply_to(&mut settings);

        assert_eq!(settings.pass_length, "16");
        assert_eq!(settings.number_of_passwords, 4);
        assert_eq!(settings.classes, ClassSet::from([CharacterClass::Symbol]));
        assert_eq!(settings.source, Source::Cycle);
        assert!(settings.show_entropy);
    }

    #[test]
    fn empty_class_list_clears_defaults() {
        let flags = CliFlags {
            classes: Some(ClassSet::new()),
            ..Default::default()
        };
        let mut settings = Settings::default();
        flags.apply_to(&mut settings);
        assert!(settings.classes.is_empty());
    }
}
