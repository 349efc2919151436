//! Password generation: validation, alphabet building and sampling.

pub mod charset;
mod error;
mod generate;
pub mod validate;

pub use charset::{Alphabet, CharacterClass, ClassSet};
pub use error::ValidationError;
pub use generate::{
    GeneratedPassword, Passwords, generate, generate_batch, generate_for, generate_with, sample,
    stream,
};
pub use validate::{GenerationRequest, MAX_LENGTH, MIN_LENGTH, PasswordForm, validate};

/// Password entropy in bits for a validated request.
pub fn entropy_bits(request: &GenerationRequest) -> f64 {
    calculate_entropy(request.length(), charset::size(request.classes()))
}

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
