use std::sync::LazyLock;

use regex::Regex;

/// Grade labels in match order; the first label contained in the text wins.
const GRADE_LABELS: &[(&str, i8)] = &[
    ("pre-school", -1),
    ("pre-k", -1),
    ("kindergarten", 0),
    ("first grade", 1),
    ("second grade", 2),
    ("third grade", 3),
    ("fourth grade", 4),
    ("fifth grade", 5),
    ("sixth grade", 6),
    ("seventh grade", 7),
    ("eighth grade", 8),
    ("ninth grade", 9),
    ("tenth grade", 10),
    ("eleventh grade", 11),
    ("twelfth grade", 12),
];

/// First run of digits in free text.
#[allow(clippy::expect_used)]
static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+").expect("valid regex: RE_NUMBER")
});

/// Map a free-text school grade to the numeric scale (pre-K = -1 … twelfth = 12).
///
/// Returns `None` for empty text, for anyone who has graduated, and for text
/// with neither a known label nor an embedded number between 1 and 12.
pub fn map_grade(grade: &str) -> Option<i8> {
    let lower = grade.to_lowercase();
    if lower.is_empty() || lower.contains("graduated") {
        return None;
    }

    if let Some(&(_, value)) = GRADE_LABELS.iter().find(|(label, _)| lower.contains(label)) {
        return Some(value);
    }

    let number: i8 = RE_NUMBER.find(&lower)?.as_str().parse().ok()?;
    (1..=12).contains(&number).then_some(number)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn labels_map_to_scale() {
        assert_eq!(map_grade("Kindergarten"), Some(0));
        assert_eq!(map_grade("Third Grade"), Some(3));
        assert_eq!(map_grade("Pre-K"), Some(-1));
        assert_eq!(map_grade("Pre-School (3s)"), Some(-1));
        assert_eq!(map_grade("Twelfth Grade"), Some(12));
    }

    #[test]
    fn graduates_and_blanks_have_no_grade() {
        assert_eq!(map_grade("Graduated 2024"), None);
        assert_eq!(map_grade(""), None);
    }

    #[test]
    fn embedded_number_fallback() {
        assert_eq!(map_grade("Grade 7 Class"), Some(7));
        assert_eq!(map_grade("10th"), Some(10));
        assert_eq!(map_grade("Grade 13"), None);
        assert_eq!(map_grade("Class of 2031"), None);
        assert_eq!(map_grade("Grade 0"), None);
        assert_eq!(map_grade("Homeschool"), None);
    }
}
