// SPDX-License-Identifier: MPL-2.0
//! Numeric-aware string ordering for file and folder names.
//!
//! Strings are compared in three passes, the way collation tables do:
//!
//! 1. Base characters. Runs of ASCII digits compare by value, so `"2"` sorts
//!    before `"10"`. Other characters are decomposed (NFD), stripped of
//!    accents and lower-cased. Punctuation and whitespace come before digits,
//!    digits before other numerals, and those before letters.
//! 2. Accents, only when the base characters are all equal (`e` before `é`).
//! 3. Case, only when everything else is equal (lowercase first).
//!
//! # Example
//!
//! ```
//! use folio_index::natural_sort::natural_cmp;
//! use std::cmp::Ordering;
//!
//! assert_eq!(natural_cmp("img2.png", "img10.png"), Ordering::Less);
//! assert_eq!(natural_cmp("B.png", "a.png"), Ordering::Greater);
//! assert_eq!(natural_cmp("école.png", "fin.png"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::iter::Peekable;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const CLASS_OTHER: u8 = 0;
const CLASS_DIGITS: u8 = 1;
const CLASS_NUMERAL: u8 = 2;
const CLASS_LETTER: u8 = 3;

/// Compares two strings using natural (numeric-aware) ordering.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = collation_units(a);
    let right = collation_units(b);

    compare_units(&left, &right, |l, r| l.primary.cmp(&r.primary))
        .then_with(|| compare_units(&left, &right, |l, r| l.accents.cmp(&r.accents)))
        .then_with(|| compare_units(&left, &right, |l, r| l.uppercase.cmp(&r.uppercase)))
}

/// One digit run, or one base character with the accents attached to it.
struct Unit {
    primary: Primary,
    accents: String,
    uppercase: bool,
}

#[derive(PartialEq, Eq)]
enum Primary {
    /// Digit run with leading zeros removed.
    Digits(String),
    Text { class: u8, folded: String },
}

impl Primary {
    fn class(&self) -> u8 {
        match self {
            Primary::Digits(_) => CLASS_DIGITS,
            Primary::Text { class, .. } => *class,
        }
    }
}

impl Ord for Primary {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Primary::Digits(a), Primary::Digits(b)) => compare_digit_runs(a, b),
            (Primary::Text { folded: a, .. }, Primary::Text { folded: b, .. }) => {
                self.class().cmp(&other.class()).then_with(|| a.cmp(b))
            }
            _ => self.class().cmp(&other.class()),
        }
    }
}

impl PartialOrd for Primary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// First unequal pair decides; otherwise the shorter sequence sorts first.
fn compare_units(
    left: &[Unit],
    right: &[Unit],
    cmp: impl Fn(&Unit, &Unit) -> Ordering,
) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(l, r)| cmp(l, r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| left.len().cmp(&right.len()))
}

fn collation_units(s: &str) -> Vec<Unit> {
    let mut chars = s.nfd().peekable();
    let mut units = Vec::new();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let run = take_digit_run(&mut chars);
            units.push(Unit {
                primary: Primary::Digits(run.trim_start_matches('0').to_string()),
                accents: String::new(),
                uppercase: false,
            });
            continue;
        }

        chars.next();
        let mut accents = String::new();
        // A mark with nothing before it stands on its own.
        if !is_combining_mark(c) {
            while let Some(mark) = chars.next_if(|&next| is_combining_mark(next)) {
                accents.push(mark);
            }
        }

        units.push(Unit {
            primary: Primary::Text {
                class: char_class(c),
                folded: c.to_lowercase().collect(),
            },
            accents,
            uppercase: c.is_uppercase(),
        });
    }

    units
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        CLASS_LETTER
    } else if c.is_numeric() {
        CLASS_NUMERAL
    } else {
        CLASS_OTHER
    }
}

fn take_digit_run<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

/// Compares zero-trimmed digit strings by value without parsing, so runs of
/// any length work.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(ToString::to_string).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn digit_runs_compare_by_value() {
        assert_eq!(sorted(&["10", "2", "1"]), vec!["1", "2", "10"]);
        assert_eq!(
            sorted(&["shot10.png", "shot2.png", "shot1.png"]),
            vec!["shot1.png", "shot2.png", "shot10.png"]
        );
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(natural_cmp("01", "1"), Ordering::Equal);
        assert_eq!(natural_cmp("02", "10"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
    }

    #[test]
    fn very_long_digit_runs_do_not_overflow() {
        let big = "123456789012345678901234567890";
        let bigger = "123456789012345678901234567891";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn letters_compare_case_insensitively() {
        assert_eq!(natural_cmp("apple.png", "Banana.png"), Ordering::Less);
        assert_eq!(natural_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn case_only_difference_puts_lowercase_first() {
        assert_eq!(natural_cmp("a.png", "A.png"), Ordering::Less);
        assert_eq!(natural_cmp("A.png", "a.png"), Ordering::Greater);
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        assert_eq!(natural_cmp("a.png", "a1.png"), Ordering::Less);
        assert_eq!(natural_cmp("a_b", "ab"), Ordering::Less);
        assert_eq!(natural_cmp("a1", "ab"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("cover", "cover-alt"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(natural_cmp("Über.png", "Zebra.png"), Ordering::Less);
        assert_eq!(natural_cmp("école.png", "fin.png"), Ordering::Less);
        assert_eq!(
            sorted(&["Zoo", "élan", "epic", "Eagle"]),
            vec!["Eagle", "élan", "epic", "Zoo"]
        );
    }

    #[test]
    fn accents_only_break_ties_between_equal_letters() {
        assert_eq!(natural_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(natural_cmp("résumé", "resume"), Ordering::Greater);
        assert_eq!(natural_cmp("résume", "resumé"), Ordering::Greater);
    }

    #[test]
    fn composed_and_decomposed_forms_are_equal() {
        assert_eq!(natural_cmp("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn ordering_is_antisymmetric() {
        let names = [
            "\u{212A}", "K", "k", "a", "A", "á", "Á", "01", "1", "a1", "a_b", "ab", "²", "2",
            "\u{301}", "", "ß", "SS", "Über", "uber", "img10.png", "img2.png",
        ];
        for a in names {
            for b in names {
                assert_eq!(
                    natural_cmp(a, b),
                    natural_cmp(b, a).reverse(),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn kelvin_sign_equals_capital_k() {
        assert_eq!(natural_cmp("\u{212A}", "K"), Ordering::Equal);
        assert_eq!(natural_cmp("\u{212A}", "k"), Ordering::Greater);
    }

    #[test]
    fn folder_orders_sort_numerically() {
        assert_eq!(sorted(&["2", "10", "1"]), vec!["1", "2", "10"]);
    }
}
