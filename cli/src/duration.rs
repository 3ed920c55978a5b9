//! Duration specs of the form `1w2d3h30m`: integer amounts with unit
//! suffixes, each unit at most once, in week/day/hour/minute order.
//!
//! Validation and conversion are two independent passes. The validator
//! enforces the full grammar (including unit order); the converter picks
//! out each unit on its own and sums whatever it finds, so it tolerates
//! input the validator rejects. Keep them decoupled.
use lazy_static::lazy_static;
use regex::Regex;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
/// A calendar day of 24 hours, not a working day.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// A calendar week of 7 days, not a working week.
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

lazy_static! {
    static ref DURATION_SPEC: Regex = Regex::new(r"^(\d+w)?(\d+d)?(\d+h)?(\d+m)?$").unwrap();
    static ref WEEKS: Regex = Regex::new(r"(\d+)w").unwrap();
    static ref DAYS: Regex = Regex::new(r"(\d+)d").unwrap();
    static ref HOURS: Regex = Regex::new(r"(\d+)h").unwrap();
    static ref MINUTES: Regex = Regex::new(r"(\d+)m").unwrap();
}

/// Checks the spec against the grammar. The empty string matches the
/// grammar but is rejected anyway.
pub fn is_valid(spec: &str) -> bool {
    !spec.is_empty() && DURATION_SPEC.is_match(spec)
}

/// Sums the unit components into seconds, treating an absent unit as zero.
/// Order-insensitive by construction; ordering is the validator's business.
/// Saturates rather than overflowing, so no operator input can panic here.
pub fn to_seconds(spec: &str) -> i64 {
    component(&WEEKS, spec)
        .saturating_mul(SECONDS_PER_WEEK)
        .saturating_add(component(&DAYS, spec).saturating_mul(SECONDS_PER_DAY))
        .saturating_add(component(&HOURS, spec).saturating_mul(SECONDS_PER_HOUR))
        .saturating_add(component(&MINUTES, spec).saturating_mul(SECONDS_PER_MINUTE))
}

fn component(unit: &Regex, spec: &str) -> i64 {
    unit.captures(spec)
        .and_then(|c| c.get(1))
        .map_or(0, |m| m.as_str().parse().unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_and_combined_units() {
        for spec in ["30m", "1h", "2h30m", "1d", "1w", "1w2d3h4m"] {
            assert!(is_valid(spec), "{spec} should be valid");
        }
    }

    #[test]
    fn rejects_garbage() {
        for spec in ["", "abc", "30x", "h", "1.5h", "1h 30m"] {
            assert!(!is_valid(spec), "{spec} should be invalid");
        }
    }

    #[test]
    fn rejects_units_out_of_order() {
        assert!(!is_valid("1h1w"));
        assert!(!is_valid("30m1h"));
    }

    #[test]
    fn converts_with_fixed_multipliers() {
        assert_eq!(to_seconds("1w"), 604_800);
        assert_eq!(to_seconds("1d"), 86_400);
        assert_eq!(to_seconds("2h30m"), 9_000);
        assert_eq!(to_seconds("30m"), 1_800);
        assert_eq!(to_seconds("1w1d1h1m"), 604_800 + 86_400 + 3_600 + 60);
    }

    #[test]
    fn conversion_ignores_unit_order() {
        // The validator rejects this spelling, but conversion still sums
        // each unit independently.
        assert!(!is_valid("1h1w"));
        assert_eq!(to_seconds("1h1w"), 604_800 + 3_600);
    }

    #[test]
    fn large_valid_specs_do_not_overflow() {
        // 3552 weeks validates, and its seconds exceed i32::MAX
        assert!(is_valid("3552w"));
        assert_eq!(to_seconds("3552w"), 3_552 * 604_800);
        assert!(to_seconds("3552w") > i64::from(i32::MAX));
    }

    #[test]
    fn absurd_amounts_saturate_instead_of_panicking() {
        let spec = "99999999999999999999w";
        assert!(is_valid(spec));
        assert_eq!(to_seconds(spec), i64::MAX);
    }

    #[test]
    fn absent_units_contribute_zero() {
        assert_eq!(to_seconds("1h"), 3_600);
        assert_eq!(to_seconds(""), 0);
    }
}
