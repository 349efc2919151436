//! Randomness sources backing the password sampler.

mod cycle;
mod hw;

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use cycle::CycleRng;

/// Where uniform draws come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    /// `StdRng` seeded from the operating system on every call.
    #[default]
    Os,
    /// [`CycleRng`], seeded from the CPU cycle counter.
    Cycle,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Os => "os",
            Source::Cycle => "cycle",
        }
    }

    /// Human readable description for entropy reports.
    pub fn describe(self) -> String {
        match self {
            Source::Os => "OS-seeded CSPRNG".to_string(),
            Source::Cycle => format!("{} cycle counter (not cryptographic)", hw::source_name()),
        }
    }

    /// Fresh generator for a single call.
    pub fn os_rng() -> StdRng {
        StdRng::from_os_rng()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown randomness source '{0}' (expected os or cycle)")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" | "csprng" => Ok(Source::Os),
            "cycle" | "fast" => Ok(Source::Cycle),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("os".parse::<Source>(), Ok(Source::Os));
        assert_eq!(" Cycle".parse::<Source>(), Ok(Source::Cycle));
        assert_eq!("fast".parse::<Source>(), Ok(Source::Cycle));
        assert!("dice".parse::<Source>().is_err());
    }

    #[test]
    fn default_is_os() {
        assert_eq!(Source::default(), Source::Os);
        assert_eq!(Source::default().to_string(), "os");
    }
}
