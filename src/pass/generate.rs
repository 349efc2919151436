//! Password sampling.

use std::fmt;

use rand::{Rng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use super::charset::{self, Alphabet};
use super::validate::{GenerationRequest, PasswordForm, validate};
use super::ValidationError;
use crate::rng::{CycleRng, Source};

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedPassword(***)")
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validate a form and generate one password from the OS-seeded source.
pub fn generate(form: &PasswordForm) -> Result<GeneratedPassword, ValidationError> {
    generate_with(form, Source::default())
}

/// Validate a form and generate one password from `source`.
pub fn generate_with(
    form: &PasswordForm,
    source: Source,
) -> Result<GeneratedPassword, ValidationError> {
    let mut passwords = generate_batch(form, 1, source)?;
    Ok(passwords.remove(0))
}

/// Validate once, then generate `count` independent passwords.
pub fn generate_batch(
    form: &PasswordForm,
    count: usize,
    source: Source,
) -> Result<Vec<GeneratedPassword>, ValidationError> {
    let request = validate(form)?;
    generate_for(&request, count, source)
}

/// Generate `count` passwords for an already validated request.
pub fn generate_for(
    request: &GenerationRequest,
    count: usize,
    source: Source,
) -> Result<Vec<GeneratedPassword>, ValidationError> {
    Ok(stream(request, source)?.take(count).collect())
}

/// An endless run of passwords drawn from one RNG.
///
/// Each password is produced on demand, so callers that write them out one
/// at a time never hold more than one in memory.
pub struct Passwords {
    alphabet: Alphabet,
    length: usize,
    rng: Box<dyn RngCore + Send>,
}

impl Iterator for Passwords {
    type Item = GeneratedPassword;

    fn next(&mut self) -> Option<GeneratedPassword> {
        Some(sample(&self.alphabet, self.length, &mut *self.rng))
    }
}

/// Start a lazy run of passwords for an already validated request.
pub fn stream(
    request: &GenerationRequest,
    source: Source,
) -> Result<Passwords, ValidationError> {
    let alphabet = charset::build(request.classes())?;

    debug!(
        length = request.length(),
        alphabet = alphabet.len(),
        %source,
        "generating passwords"
    );

    let rng: Box<dyn RngCore + Send> = match source {
        Source::Os => Box::new(Source::os_rng()),
        Source::Cycle => Box::new(CycleRng::new()),
    };
    Ok(Passwords {
        alphabet,
        length: request.length(),
        rng,
    })
}

/// Draw `length` characters uniformly and independently from `alphabet`.
///
/// Every index is drawn from `0..alphabet.len()`; an empty alphabet yields an
/// empty password.
pub fn sample<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> GeneratedPassword {
    let mut buf = Zeroizing::new(String::with_capacity(length));
    if alphabet.is_empty() {
        return GeneratedPassword(buf);
    }
    for _ in 0..length {
        buf.push(random_char(alphabet, rng));
    }
    GeneratedPassword(buf)
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClass, ClassSet};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alphabet(classes: &[CharacterClass]) -> Alphabet {
        charset::build(&classes.iter().copied().collect()).unwrap()
    }

    #[test]
    fn lowercase_eight() {
        let form = PasswordForm::new("8", [CharacterClass::Lowercase]);
        let password = generate(&form).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn uppercase_and_digits_four() {
        let form = PasswordForm::new("4", [CharacterClass::Uppercase, CharacterClass::Digit]);
        let allowed = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        for source in [Source::Os, Source::Cycle] {
            for _ in 0..50 {
                let password = generate_with(&form, source).unwrap();
                assert_eq!(password.len(), 4);
                assert!(password.as_str().chars().all(|c| allowed.contains(c)));
            }
        }
    }

    #[test]
    fn invalid_requests_never_sample() {
        assert_eq!(
            generate(&PasswordForm::new("8", ClassSet::new())),
            Err(ValidationError::NoClassSelected)
        );
        assert!(matches!(
            generate(&PasswordForm::new("abc", [CharacterClass::Digit])),
            Err(ValidationError::InvalidLength { .. })
        ));
    }

    #[test]
    fn batch_has_requested_count() {
        let form = PasswordForm::new("12", CharacterClass::ALL);
        let passwords = generate_batch(&form, 25, Source::Os).unwrap();
        assert_eq!(passwords.len(), 25);
        assert!(passwords.iter().all(|p| p.len() == 12));
        assert!(generate_batch(&form, 0, Source::Os).unwrap().is_empty());
    }

    #[test]
    fn stream_is_lazy() {
        let request = validate(&PasswordForm::new("6", [CharacterClass::Digit])).unwrap();
        let mut run = stream(&request, Source::Cycle).unwrap();
        for password in run.by_ref().take(1_000) {
            assert_eq!(password.len(), 6);
            assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
        }
        // Unbounded counts are fine as long as nothing collects them.
        assert_eq!(run.take(usize::MAX).take(3).count(), 3);
    }

    #[test]
    fn single_char_alphabet_stays_in_bounds() {
        let single = Alphabet::from_chars(vec!['x']);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&single, 16, &mut rng).as_str(), "xxxxxxxxxxxxxxxx");
    }

    #[test]
    fn every_index_is_reachable() {
        let chars = alphabet(&[CharacterClass::Symbol]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 12];
        for _ in 0..500 {
            let c = random_char(&chars, &mut rng);
            let idx = chars.iter().position(|&x| x == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "first and last positions both drawn");
    }

    #[test]
    fn debug_is_redacted() {
        let mut rng = StdRng::seed_from_u64(3);
        let password = sample(&alphabet(&[CharacterClass::Lowercase]), 8, &mut rng);
        assert_eq!(format!("{password:?}"), "GeneratedPassword(***)");
    }

    /// Chi-squared statistic of `counts` against a uniform expectation.
    fn chi_squared(counts: &[usize], total: usize) -> f64 {
        let expected = total as f64 / counts.len() as f64;
        counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    #[test]
    fn positions_are_uniform() {
        const SAMPLES: usize = 12_000;
        let sets: [&[CharacterClass]; 4] = [
            &[CharacterClass::Digit],
            &[CharacterClass::Uppercase, CharacterClass::Digit],
            &[CharacterClass::Lowercase, CharacterClass::Uppercase, CharacterClass::Digit],
            &CharacterClass::ALL,
        ];
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for classes in sets {
            let chars = alphabet(classes);
            let n = chars.len();
            let length = 4;
            let mut counts = vec![vec![0usize; n]; length];

            for _ in 0..SAMPLES {
                let password = sample(&chars, length, &mut rng);
                for (pos, c) in password.as_str().chars().enumerate() {
                    let idx = chars.iter().position(|&x| x == c).unwrap();
                    counts[pos][idx] += 1;
                }
            }

            // Six standard deviations above the mean of chi-squared(n - 1).
            let df = (n - 1) as f64;
            let limit = df + 6.0 * (2.0 * df).sqrt();
            for (pos, tally) in counts.iter().enumerate() {
                let stat = chi_squared(tally, SAMPLES);
                assert!(
                    stat < limit,
                    "position {pos} of {n}-char alphabet: chi2 {stat:.1} >= {limit:.1}"
                );
            }
        }
    }
}
