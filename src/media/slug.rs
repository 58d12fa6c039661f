//! Exercise name slugification.
//!
//! The slug is the join key shared, by convention, between the exercise
//! media map and the muscle-group index: lowercase ASCII, hyphen-separated.
//! `"Stability Ball Russian Twist"` -> `"stability-ball-russian-twist"`.

use deunicode::deunicode;

/// Slugify a human-readable exercise name.
///
/// Unicode is transliterated to ASCII first, then every run of
/// non-alphanumeric characters collapses into a single hyphen, with no
/// leading or trailing hyphen left behind.
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name);

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_names() {
        assert_eq!(
            slugify("Stability Ball Russian Twist"),
            "stability-ball-russian-twist"
        );
        assert_eq!(slugify("Push-Up"), "push-up");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(slugify("90/90  Hip -- Switch!"), "90-90-hip-switch");
        assert_eq!(slugify("  (Barbell) Row  "), "barbell-row");
    }

    #[test]
    fn test_unicode_transliterates() {
        assert_eq!(slugify("Curtsey Squat à la Café"), "curtsey-squat-a-la-cafe");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---x---"), "x");
    }
}
