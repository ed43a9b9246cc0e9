//! IBAN syntax check.

use crate::error::{Code, Violation};
use crate::validation::{Validator, Verdict};

/// IBAN lengths per country, as published in the SWIFT IBAN registry.
/// Sorted by country code.
#[rustfmt::skip]
const COUNTRY_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20),
    ("BE", 16), ("BG", 22), ("BH", 22), ("BI", 27), ("BR", 29), ("BY", 28),
    ("CH", 21), ("CR", 22), ("CY", 28), ("CZ", 24), ("DE", 22), ("DJ", 27),
    ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24), ("FI", 18),
    ("FK", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23),
    ("GL", 18), ("GR", 27), ("GT", 28), ("HN", 28), ("HR", 21), ("HU", 28),
    ("IE", 22), ("IL", 23), ("IQ", 23), ("IS", 26), ("IT", 27), ("JO", 30),
    ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32), ("LI", 21), ("LT", 20),
    ("LU", 20), ("LV", 21), ("LY", 25), ("MC", 27), ("MD", 24), ("ME", 22),
    ("MK", 19), ("MN", 20), ("MR", 27), ("MT", 31), ("MU", 30), ("NI", 28),
    ("NL", 18), ("NO", 15), ("OM", 23), ("PK", 24), ("PL", 28), ("PS", 29),
    ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("RU", 33), ("SA", 24),
    ("SC", 31), ("SD", 18), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27),
    ("SO", 23), ("ST", 25), ("SV", 28), ("TL", 23), ("TN", 24), ("TR", 26),
    ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20), ("YE", 30),
];

/// Requires a structurally valid IBAN.
///
/// Spaces are ignored and letters may be in either case. The country code
/// must be known, the length must match the country, and the mod-97 check
/// digits must hold.
///
/// ```rust
/// use inquest::rules::Iban;
/// use inquest::Validator;
///
/// assert!(Iban.validate("NL91 ABNA 0417 1643 00").is_ok());
/// assert!(Iban.validate("NL91ABNA0417164301").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Iban;

impl<T> Validator<T> for Iban
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if is_valid(value.as_ref()) {
            Ok(())
        } else {
            Err(Violation::new(Code::Iban).into())
        }
    }
}

fn is_valid(raw: &str) -> bool {
    let iban: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if !iban.chars().all(|c| c.is_ascii_alphanumeric()) || iban.len() < 4 {
        return false;
    }

    let (country, rest) = iban.split_at(2);
    if !rest[..2].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let expected = COUNTRY_LENGTHS
        .binary_search_by(|(code, _)| (*code).cmp(country))
        .ok()
        .map(|i| COUNTRY_LENGTHS[i].1);
    if expected != Some(iban.len()) {
        return false;
    }

    checksum(&iban) == 1
}

/// Computes the mod-97 remainder of the rearranged IBAN.
fn checksum(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);
    tail.chars().chain(head.chars()).fold(0, |acc, c| {
        // Alphanumeric is checked by the caller, so base 36 covers every char.
        let digit = c.to_digit(36).unwrap_or(0);
        if digit >= 10 {
            (acc * 100 + digit) % 97
        } else {
            (acc * 10 + digit) % 97
        }
    })
}
