use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is valid"));

/// Construction era a lighthouse is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EraBucket {
    Before1900,
    TwentiethCentury,
    Modern,
    Unknown,
}

impl EraBucket {
    pub const ALL: [EraBucket; 4] = [
        EraBucket::Before1900,
        EraBucket::TwentiethCentury,
        EraBucket::Modern,
        EraBucket::Unknown,
    ];

    /// Classify an optional construction year. Boundary years belong to the later era.
    pub fn from_year(year: Option<u32>) -> Self {
        match year {
            None => EraBucket::Unknown,
            Some(y) if y < 1900 => EraBucket::Before1900,
            Some(y) if y < 2000 => EraBucket::TwentiethCentury,
            Some(_) => EraBucket::Modern,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EraBucket::Before1900 => "Before 1900",
            EraBucket::TwentiethCentury => "1900s",
            EraBucket::Modern => "2000s+",
            EraBucket::Unknown => "Unknown",
        }
    }

    /// Inverse of [`label`](Self::label), for callers that only hold the display text.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }
}

impl fmt::Display for EraBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First run of four ASCII digits in a free-form date string.
pub fn extract_year(value: Option<&str>) -> Option<u32> {
    let value = value?;
    YEAR_PATTERN
        .find(value)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_four_digit_run() {
        assert_eq!(extract_year(Some("built 1888, restored 1975")), Some(1888));
        assert_eq!(extract_year(Some("1903-06-01T00:00:00Z")), Some(1903));
        assert_eq!(extract_year(Some("circa 1850 AD")), Some(1850));
    }

    #[test]
    fn longer_digit_runs_yield_their_first_four_digits() {
        assert_eq!(extract_year(Some("12345")), Some(1234));
    }

    #[test]
    fn implausible_years_are_accepted() {
        assert_eq!(extract_year(Some("9999")), Some(9999));
        assert_eq!(extract_year(Some("year 0001")), Some(1));
    }

    #[test]
    fn no_year_cases() {
        assert_eq!(extract_year(None), None);
        assert_eq!(extract_year(Some("")), None);
        assert_eq!(extract_year(Some("built in 88")), None);
        assert_eq!(extract_year(Some("19 05")), None);
        // Non-ASCII digits are not years.
        assert_eq!(extract_year(Some("١٩٠٥")), None);
    }

    #[test]
    fn bucket_thresholds() {
        assert_eq!(EraBucket::from_year(None), EraBucket::Unknown);
        assert_eq!(EraBucket::from_year(Some(0)), EraBucket::Before1900);
        assert_eq!(EraBucket::from_year(Some(1899)), EraBucket::Before1900);
        assert_eq!(EraBucket::from_year(Some(1900)), EraBucket::TwentiethCentury);
        assert_eq!(EraBucket::from_year(Some(1999)), EraBucket::TwentiethCentury);
        assert_eq!(EraBucket::from_year(Some(2000)), EraBucket::Modern);
        assert_eq!(EraBucket::from_year(Some(9999)), EraBucket::Modern);
    }

    #[test]
    fn labels_round_trip() {
        for bucket in EraBucket::ALL {
            assert_eq!(EraBucket::from_label(bucket.label()), Some(bucket));
        }
        assert_eq!(EraBucket::from_label("1800s"), None);
        assert_eq!(EraBucket::Before1900.to_string(), "Before 1900");
    }
}
