//! Environment overrides.

use passgen::pass::charset;

use super::Settings;

pub const LENGTH_VAR: &str = "PASSGEN_LENGTH";
pub const CLASSES_VAR: &str = "PASSGEN_CLASSES";
pub const NUMBER_VAR: &str = "PASSGEN_NUMBER";
pub const SOURCE_VAR: &str = "PASSGEN_SOURCE";

/// Apply every variable `lookup` knows about. Unparseable values keep the
/// current setting and produce a warning.
pub fn load<F>(settings: &mut Settings, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(length) = lookup(LENGTH_VAR) {
        settings.pass_length = length;
    }

    if let Some(list) = lookup(CLASSES_VAR) {
        match charset::parse_list(&list) {
            Ok(classes) => settings.classes = classes,
            Err(e) => warnings.push(format!("Ignoring {CLASSES_VAR}: {e}")),
        }
    }

    if let Some(number) = lookup(NUMBER_VAR) {
        match number.trim().parse() {
            Ok(n) => settings.number_of_passwords = n,
            Err(_) => warnings.push(format!("Ignoring {NUMBER_VAR}: invalid number '{number}'")),
        }
    }

    if let Some(source) = lookup(SOURCE_VAR) {
        match source.parse() {
            Ok(s) => settings.source = s,
            Err(e) => warnings.push(format!("Ignoring {SOURCE_VAR}: {e}")),
        }
    }

    warnings
}
