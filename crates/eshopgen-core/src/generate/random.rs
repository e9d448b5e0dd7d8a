//! Shared random-draw helpers used by the generator stages.

use chrono::{Duration as ChronoDuration, Months, NaiveDate};
use rand::Rng;

/// Weighted random selection from a static table of `(item, weight)` pairs.
///
/// Uses cumulative distribution for O(n) selection.
/// Edge cases:
/// - All weights zero → uniform fallback
/// - Negative weights → clamped to zero
/// - Single entry → always returns it
///
/// `choices` must not be empty.
pub fn weighted_pick<'a, T>(choices: &'a [(T, f64)], rng: &mut impl Rng) -> &'a T {
    if choices.len() == 1 {
        return &choices[0].0;
    }

    let total: f64 = choices.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return &choices[rng.random_range(0..choices.len())].0;
    }

    let roll: f64 = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (item, weight) in choices {
        cumulative += weight.max(0.0);
        if roll < cumulative {
            return item;
        }
    }

    // Rounding can leave roll == total
    &choices[choices.len() - 1].0
}

/// Uniformly pick a date in `[start, end]`, both inclusive.
///
/// An inverted range collapses to `start`.
pub fn date_between(rng: &mut impl Rng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    start + ChronoDuration::days(rng.random_range(0..=span))
}

/// The calendar date `years` years before `date`.
///
/// February 29 maps to February 28 in non-leap years.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(12 * years))
        .unwrap_or(NaiveDate::MIN)
}

/// Generate an EAN-8 barcode: seven random digits followed by the check digit.
pub fn ean8(rng: &mut impl Rng) -> String {
    let digits: Vec<u32> = (0..7).map(|_| rng.random_range(0..10)).collect();
    let check = ean8_check_digit(&digits);
    digits
        .iter()
        .chain(std::iter::once(&check))
        .map(|d| char::from_digit(*d, 10).unwrap_or('0'))
        .collect()
}

/// EAN check digit over seven payload digits (weights 3,1,3,1,3,1,3).
fn ean8_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10
}
