//! Password generation from selectable character classes.
//!
//! ```no_run
//! use passgen::{CharacterClass, PasswordForm, generate};
//!
//! let form = PasswordForm::new("12", [CharacterClass::Lowercase, CharacterClass::Digit]);
//! match generate(&form) {
//!     Ok(password) => println!("{}", password.as_str()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod pass;
pub mod rng;

pub use pass::{
    CharacterClass, ClassSet, GeneratedPassword, PasswordForm, ValidationError, generate,
    generate_batch, generate_with,
};
pub use rng::Source;
