//! Sortable shelf-browse keys.
//!
//! A shelfkey is a string whose byte-lexical order matches the order the
//! corresponding call numbers are shelved in. Class numbers and cutter
//! digits are zero-padded so that numeric components compare numerically
//! even under plain string comparison, and everything is lower-cased to
//! match index-time case folding.
//!
//! The reverse shelfkey inverts that order (used to browse backward from a
//! given spot on the shelf): each character is complemented within a fixed
//! alphabet and the result is terminated and padded to a minimum width with
//! a high-sentinel character so shorter keys still invert correctly against
//! their extensions. Reverse keys are never decoded.

use lazy_static::lazy_static;

use crate::classifier::{parse_dewey, parse_lc, Cutter};
use crate::lopper::LOPPED_MARKER;
use crate::scheme::CallNumberType;

/// Width digit runs are padded to; wide enough for accession-style numbers
/// like `YBP1834690`.
const DIGIT_RUN_WIDTH: usize = 10;

/// Width cutter digits and class decimals are padded to. These are decimal
/// fractions, padded on the right, so the width only has to cover one run.
const CUTTER_FRACTION_WIDTH: usize = 6;

/// Width of the LC/Dewey integer class part.
const CLASS_INT_WIDTH: usize = 4;

/// Minimum length of reverse shelfkeys.
const REVERSE_KEY_WIDTH: usize = 50;

/// Pad character for reverse keys; sorts above every alphabet character.
const REVERSE_PAD: char = '~';

/// Every character a constructed shelfkey can contain, in ASCII order.
/// All of them are stable under lowercasing, so the complement of a
/// lower-cased key is itself a valid lower-cased key.
const ALPHABET: &str = " -./0123456789:abcdefghijklmnopqrstuvwxyz";

lazy_static! {
    /// ASCII complement table: `COMPLEMENT[c]` is the mirror of `c` within
    /// [`ALPHABET`], or `c` itself for characters outside it.
    static ref COMPLEMENT: [u8; 128] = {
        let bytes = ALPHABET.as_bytes();
        let mut table = [0u8; 128];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = u8::try_from(i).expect("ascii range");
        }
        for (i, &b) in bytes.iter().enumerate() {
            table[b as usize] = bytes[bytes.len() - 1 - i];
        }
        table
    };
}

/// Pad every maximal run of ASCII digits on the left with zeros to
/// [`DIGIT_RUN_WIDTH`]; longer runs pass through unchanged.
pub(crate) fn pad_digit_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + DIGIT_RUN_WIDTH);
    let mut run = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else {
            flush_digit_run(&mut out, &mut run);
            out.push(ch);
        }
    }
    flush_digit_run(&mut out, &mut run);
    out
}

fn flush_digit_run(out: &mut String, run: &mut String) {
    if !run.is_empty() {
        for _ in run.len()..DIGIT_RUN_WIDTH {
            out.push('0');
        }
        out.push_str(run);
        run.clear();
    }
}

/// Cutter digits are a decimal fraction: pad on the right so `.N36` sorts
/// before `.N4`.
fn cutter_key(cutter: &Cutter) -> String {
    format!(
        "{}{:0<width$}{}",
        cutter.letter.to_ascii_lowercase(),
        cutter.digits,
        cutter.tail.to_lowercase(),
        width = CUTTER_FRACTION_WIDTH
    )
}

/// Dates and volume designators after the cutters, digit runs padded left.
fn suffix_key(suffix: &str) -> Option<String> {
    let trimmed = suffix.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(pad_digit_runs(&trimmed.to_lowercase()))
    }
}

fn lc_shelfkey(callnum: &str) -> Option<String> {
    let lc = parse_lc(callnum)?;
    let mut parts = vec![format!(
        "{:<3}{:0>int_width$}.{:0<frac_width$}",
        lc.letters.to_lowercase(),
        lc.class_digits,
        lc.class_decimal,
        int_width = CLASS_INT_WIDTH,
        frac_width = CUTTER_FRACTION_WIDTH
    )];
    parts.extend(lc.cutters.iter().map(cutter_key));
    parts.extend(suffix_key(&lc.suffix));
    Some(parts.join(" "))
}

fn dewey_shelfkey(callnum: &str) -> Option<String> {
    let dewey = parse_dewey(callnum)?;
    let mut parts = vec![format!(
        "{:0>int_width$}.{:0<frac_width$}",
        dewey.class_digits,
        dewey.class_decimal,
        int_width = CLASS_INT_WIDTH,
        frac_width = CUTTER_FRACTION_WIDTH
    )];
    parts.push(cutter_key(&dewey.cutter));
    parts.extend(suffix_key(&dewey.suffix));
    Some(parts.join(" "))
}

/// Free-text normalization: lower-case with digit runs padded, so numeric
/// pieces of accession-style numbers compare numerically.
fn text_shelfkey(callnum: &str) -> String {
    pad_digit_runs(&callnum.to_lowercase())
}

/// Build the forward shelfkey for a (lopped) call number.
///
/// LC and Dewey numbers that fail their grammar degrade to the free-text
/// key, so every non-empty input produces a browsable key.
#[must_use]
pub fn shelfkey(callnum: &str, scheme: CallNumberType) -> String {
    let base = callnum.strip_suffix(LOPPED_MARKER).unwrap_or(callnum).trim();
    match scheme {
        CallNumberType::Lc => lc_shelfkey(base).unwrap_or_else(|| text_shelfkey(base)),
        CallNumberType::Dewey => dewey_shelfkey(base).unwrap_or_else(|| text_shelfkey(base)),
        CallNumberType::Sudoc | CallNumberType::Alphanum | CallNumberType::Other => {
            text_shelfkey(base)
        }
    }
}

/// Build the reverse shelfkey from a forward shelfkey.
///
/// Complements each character within the shelfkey alphabet, appends a `'~'`
/// terminator, and pads to [`REVERSE_KEY_WIDTH`] with `'~'`. The terminator
/// keeps a key that extends another inverting correctly even when both are
/// longer than the pad width. Characters outside the alphabet (only possible
/// in free-text keys) pass through unchanged.
#[must_use]
pub fn reverse_shelfkey(forward: &str) -> String {
    let mut out: String = forward
        .chars()
        .map(|c| {
            if c.is_ascii() {
                char::from(COMPLEMENT[c as usize])
            } else {
                c
            }
        })
        .collect();
    out.push(REVERSE_PAD);
    while out.chars().count() < REVERSE_KEY_WIDTH {
        out.push(REVERSE_PAD);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lc_key(cn: &str) -> String {
        shelfkey(cn, CallNumberType::Lc)
    }

    #[test]
    fn lc_keys_follow_shelf_order() {
        // literal pairs shelved in this order
        let shelved = [
            "D764.7 .K72 1990",
            "E184.S75 R47A V.1 1980",
            "F1356 .M464 2005",
            "M2 .C17 L3 2005",
            "M123 .M234",
            "ML171 .L38 2005",
            "QE538.8 .N36 1975-1977",
            "QE539.2 .P34 O77 2005",
            "U897 .C87 Z55 2001",
            "Z3871.Z8",
        ];
        for pair in shelved.windows(2) {
            assert!(
                lc_key(pair[0]) < lc_key(pair[1]),
                "{} should key before {}: {:?} vs {:?}",
                pair[0],
                pair[1],
                lc_key(pair[0]),
                lc_key(pair[1])
            );
        }
    }

    #[test]
    fn lc_class_number_compares_numerically() {
        assert!(lc_key("M2 .C17") < lc_key("M123 .M234"));
        assert!(lc_key("QE538.8 .N36") < lc_key("QE539.2 .P34"));
        // single-letter class shelves before two-letter class
        assert!(lc_key("Q100 .A1") < lc_key("QA50 .A1"));
    }

    #[test]
    fn cutter_digits_compare_as_decimal_fraction() {
        assert!(lc_key("E184 .S75") < lc_key("E184 .S8"));
        assert!(lc_key("E184 .S75") > lc_key("E184 .S7"));
        assert!(lc_key("E184 .S75 R47") < lc_key("E184 .S75 R47A"));
    }

    #[test]
    fn dewey_keys_follow_shelf_order() {
        let shelved = [
            "62 .B862 V.193",
            "159.32 .W211",
            "370.6 .N28 V.106:PT.1",
            "370.6 .N28 V.113:PT.1",
            "505 .N285B V.241-245 1973",
            "550.6 .U58P NO.1707",
            "968.006 .V274 SER.2:NO.42",
        ];
        for pair in shelved.windows(2) {
            let a = shelfkey(pair[0], CallNumberType::Dewey);
            let b = shelfkey(pair[1], CallNumberType::Dewey);
            assert!(a < b, "{} should key before {}: {a:?} vs {b:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn dewey_leading_zeros_do_not_matter() {
        assert_eq!(
            shelfkey("62 .B862 V.193", CallNumberType::Dewey),
            shelfkey("062 .B862 V.193", CallNumberType::Dewey)
        );
        assert_eq!(
            shelfkey("2 U73", CallNumberType::Dewey),
            shelfkey("002 U73", CallNumberType::Dewey)
        );
    }

    #[test]
    fn sudoc_numeric_runs_compare_numerically() {
        let a = shelfkey("I 19.66:979-981", CallNumberType::Sudoc);
        let b = shelfkey("I 19.76:97-600-C", CallNumberType::Sudoc);
        assert!(a < b, "{a:?} vs {b:?}");
    }

    #[test]
    fn alphanum_digit_runs_compare_numerically() {
        let a = shelfkey("ZDVD 2", CallNumberType::Alphanum);
        let b = shelfkey("ZDVD 10", CallNumberType::Alphanum);
        assert!(a < b, "{a:?} vs {b:?}");
        let a = shelfkey("MFICHE 3239", CallNumberType::Alphanum);
        let b = shelfkey("MFICHE 12000", CallNumberType::Alphanum);
        assert!(a < b);
    }

    #[test]
    fn keys_are_lowercase() {
        for (cn, scheme) in [
            ("QE538.8 .N36 1975-1977", CallNumberType::Lc),
            ("550.6 .U58P NO.1707", CallNumberType::Dewey),
            ("I 19.76:97-600-C", CallNumberType::Sudoc),
            ("ISHII SPRING 2009", CallNumberType::Alphanum),
        ] {
            let key = shelfkey(cn, scheme);
            assert_eq!(key, key.to_lowercase(), "{cn}");
        }
    }

    #[test]
    fn lopped_marker_is_stripped_before_keying() {
        assert_eq!(
            shelfkey("QE538.8 .N36 ...", CallNumberType::Lc),
            shelfkey("QE538.8 .N36", CallNumberType::Lc)
        );
    }

    #[test]
    fn invalid_lc_degrades_to_text_key() {
        let key = shelfkey("BAD", CallNumberType::Other);
        assert_eq!(key, "bad");
        // best-effort key for a string that fails the LC grammar
        let key = shelfkey("ORNL-6371", CallNumberType::Lc);
        assert_eq!(key, "ornl-0000006371");
    }

    #[test]
    fn long_digit_runs_compare_numerically() {
        let a = shelfkey("MFICHE 999999", CallNumberType::Alphanum);
        let b = shelfkey("MFICHE 1234567", CallNumberType::Alphanum);
        assert!(a < b, "{a:?} vs {b:?}");
        let a = shelfkey("YBP1834690", CallNumberType::Other);
        let b = shelfkey("YBP18346900", CallNumberType::Other);
        assert!(a < b, "{a:?} vs {b:?}");
    }

    #[test]
    fn reverse_key_inverts_forward_order() {
        let pairs = [
            ("D764.7 .K72 1990", "F1356 .M464 2005"),
            ("M2 .C17 L3 2005", "M123 .M234"),
            ("QE538.8 .N36 1975-1977", "QE539.2 .P34 O77 2005"),
        ];
        for (a, b) in pairs {
            let (fa, fb) = (lc_key(a), lc_key(b));
            assert!(fa < fb);
            assert!(
                reverse_shelfkey(&fa) > reverse_shelfkey(&fb),
                "reverse of {a} should sort after reverse of {b}"
            );
        }
    }

    #[test]
    fn reverse_key_handles_prefix_pairs() {
        // a key that is a strict prefix of another must still invert
        let short = "e 0184.000000 s750000";
        let long = "e 0184.000000 s750000 r470000a";
        assert!(short < long);
        assert!(reverse_shelfkey(short) > reverse_shelfkey(long));
    }

    #[test]
    fn reverse_key_inverts_prefix_pairs_past_pad_width() {
        // suffix-heavy keys exceed the pad width once digit runs are padded
        let short = lc_key("H8 .G55 V.40:NO.1-4 1999:JAN.-AUG.");
        let long = lc_key("H8 .G55 V.40:NO.1-4 1999:JAN.-AUG. SUPPL.");
        assert!(short.len() > REVERSE_KEY_WIDTH, "{short:?}");
        assert!(short < long);
        assert!(
            reverse_shelfkey(&short) > reverse_shelfkey(&long),
            "reverse of the shorter key should sort after reverse of its extension"
        );
    }

    #[test]
    fn reverse_key_padded_to_fixed_width() {
        let rev = reverse_shelfkey("m 0002.000000");
        assert_eq!(rev.chars().count(), 50);
        assert!(rev.ends_with('~'));
    }
}
