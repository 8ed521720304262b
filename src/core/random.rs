//! Random ids and tokens in base 36 (`0-9a-z`)
//!
//! Both are the base-36 digits of a random fraction in `[0, 1)`, rendered
//! with the shortest digit string that still identifies the double. Not
//! suitable for secrets.

use rand::Rng;

pub const RANDOM_ID_LEN: usize = 16;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RADIX: f64 = 36.0;

/// 16 characters, right-padded with `'0'` when the fraction has fewer digits.
pub fn random_id() -> String {
    random_id_from(&mut rand::thread_rng())
}

pub fn random_id_from<R: Rng>(rng: &mut R) -> String {
    let mut id = fraction_to_base36(rng.gen::<f64>());
    id.truncate(RANDOM_ID_LEN);
    while id.len() < RANDOM_ID_LEN {
        id.push('0');
    }
    id
}

/// Variable length; empty when the fraction is exactly zero.
pub fn random_token() -> String {
    random_token_from(&mut rand::thread_rng())
}

pub fn random_token_from<R: Rng>(rng: &mut R) -> String {
    fraction_to_base36(rng.gen::<f64>())
}

/// Base-36 digits after the radix point of `value` (expected in `[0, 1)`).
///
/// Digits are generated until the remaining fraction drops below half the
/// gap to the next double, then the last digit is rounded half-to-even with
/// carry. A carry out of the first digit leaves no fraction digits.
pub fn fraction_to_base36(value: f64) -> String {
    if !(0.0..1.0).contains(&value) {
        return String::new();
    }

    let mut fraction = value;
    let mut delta = (0.5 * (next_up(value) - value)).max(next_up(0.0));
    let mut digits: Vec<u8> = Vec::new();

    if fraction >= delta {
        loop {
            fraction *= RADIX;
            delta *= RADIX;
            let digit = fraction as u8;
            digits.push(digit);
            fraction -= f64::from(digit);

            let past_half = fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1);
            if past_half && fraction + delta > 1.0 {
                round_up(&mut digits);
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    digits.into_iter().map(|d| ALPHABET[usize::from(d)] as char).collect()
}

fn round_up(digits: &mut Vec<u8>) {
    while let Some(last) = digits.pop() {
        if last + 1 < ALPHABET.len() as u8 {
            digits.push(last + 1);
            return;
        }
    }
}

fn next_up(x: f64) -> f64 {
    f64::from_bits(x.to_bits() + 1)
}
