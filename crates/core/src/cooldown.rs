//! Re-interaction cooldown (`reinteract_after`) parsing.
//!
//! The option is either a fixed number of hours (`48`) or an inclusive range
//! (`50-80`). A range is drawn once when the policy is resolved and the result
//! stays fixed for the lifetime of the process.

use std::fmt;
use std::str::FromStr;

use rand::Rng as _;

use crate::constants::DEFAULT_REINTERACT_AFTER_HOURS;
use crate::error::CoreError;

/// Parsed but not yet drawn cooldown value, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownSpec {
    Fixed(u32),
    Range { min: u32, max: u32 },
}

impl CooldownSpec {
    /// Pick the concrete number of hours. Fixed values are returned as-is.
    #[must_use]
    pub fn draw(&self) -> u32 {
        match *self {
            Self::Fixed(hours) => hours,
            Self::Range { min, max } => rand::thread_rng().gen_range(min..=max),
        }
    }
}

impl FromStr for CooldownSpec {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidCooldown(s.to_owned());
        let trimmed = s.trim();
        match trimmed.split_once('-') {
            None => trimmed.parse().map(Self::Fixed).map_err(|_| invalid()),
            Some((min, max)) => {
                let min: u32 = min.trim().parse().map_err(|_| invalid())?;
                let max: u32 = max.trim().parse().map_err(|_| invalid())?;
                if min > max {
                    return Err(invalid());
                }
                Ok(Self::Range { min, max })
            },
        }
    }
}

impl fmt::Display for CooldownSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed(hours) => write!(f, "{hours}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Resolve a raw `reinteract_after` value into hours.
///
/// Unparseable input falls back to [`DEFAULT_REINTERACT_AFTER_HOURS`] with a warning
/// instead of aborting startup.
#[must_use]
pub fn resolve_reinteract_after(raw: &str) -> u32 {
    match raw.parse::<CooldownSpec>() {
        Ok(spec) => {
            let hours = spec.draw();
            tracing::info!(spec = %spec, hours, "Re-interact after {hours} hours");
            hours
        },
        Err(e) => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_REINTERACT_AFTER_HOURS,
                "{e}, using default"
            );
            DEFAULT_REINTERACT_AFTER_HOURS
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_number() {
        assert_eq!("48".parse::<CooldownSpec>().unwrap(), CooldownSpec::Fixed(48));
        assert_eq!(" 72 ".parse::<CooldownSpec>().unwrap(), CooldownSpec::Fixed(72));
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            "50-80".parse::<CooldownSpec>().unwrap(),
            CooldownSpec::Range { min: 50, max: 80 }
        );
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            "80-50".parse::<CooldownSpec>(),
            Err(CoreError::InvalidCooldown("80-50".to_owned()))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!("two days".parse::<CooldownSpec>().is_err());
        assert!("-5".parse::<CooldownSpec>().is_err());
        assert!("".parse::<CooldownSpec>().is_err());
    }

    #[test]
    fn range_draw_stays_in_bounds() {
        let spec = CooldownSpec::Range { min: 50, max: 55 };
        for _ in 0..200 {
            let hours = spec.draw();
            assert!((50..=55).contains(&hours), "drew {hours}");
        }
    }

    #[test]
    fn degenerate_range_draws_its_only_value() {
        assert_eq!(CooldownSpec::Range { min: 24, max: 24 }.draw(), 24);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(resolve_reinteract_after("soon"), DEFAULT_REINTERACT_AFTER_HOURS);
        assert_eq!(resolve_reinteract_after("12"), 12);
    }
}
