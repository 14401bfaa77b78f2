use strum::Display;
use thiserror::Error;

use crate::constants::snowman::{CODE_LENGTH, GLYPHS, VARIANT_MAX, VARIANT_MIN};

/// Raised when a code is not exactly eight digits of 1 to 4. The message
/// quotes the offending value verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid code '{0}'")]
pub struct InvalidCodeError(pub i64);

// Declaration order matches both the digit position in a code and the row in
// GLYPHS, so `part as usize` indexes either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Part {
    Hat,
    Nose,
    LeftEye,
    RightEye,
    LeftArm,
    RightArm,
    Torso,
    Base,
}

impl Part {
    // Caller guarantees the digit is in 1..=4
    fn fragment(self, digit: u8) -> &'static str {
        GLYPHS[self as usize][digit as usize - 1]
    }
}

/// Returns true iff `code`, written in decimal, has exactly eight digits and
/// every digit lies in 1..=4.
pub fn validate(code: i64) -> bool {
    // Exactly eight digits, no sign
    if !(10_000_000..=99_999_999).contains(&code) {
        return false;
    }

    let mut number = code;
    while number != 0 {
        if !(VARIANT_MIN..=VARIANT_MAX).contains(&(number % 10)) {
            return false;
        }
        number /= 10;
    }
    true
}

// Most significant digit first
fn split_digits(mut number: i64) -> [u8; CODE_LENGTH] {
    let mut digits = [0; CODE_LENGTH];
    for index in 0..CODE_LENGTH {
        digits[CODE_LENGTH - 1 - index] = (number % 10) as u8;
        number /= 10;
    }
    digits
}

/// Draws the snowman selected by `code` as a four-line picture. Each digit
/// picks the variant of one body part, most significant first: hat, nose,
/// left eye, right eye, left arm, right arm, torso, base. Whitespace within
/// the lines is cosmetic.
pub fn render(code: i64) -> Result<String, InvalidCodeError> {
    if !validate(code) {
        return Err(InvalidCodeError(code));
    }

    let digits = split_digits(code);
    let fragment = |part: Part| part.fragment(digits[part as usize]);

    // Arm fragments hold two halves: the upper one sits beside the face, the
    // lower one beside the torso.
    let left_arm = fragment(Part::LeftArm);
    let right_arm = fragment(Part::RightArm);

    let hat = format!(" {}", fragment(Part::Hat));
    let face = format!(
        "{}{}{}{}{}",
        &left_arm[..1],
        fragment(Part::LeftEye),
        fragment(Part::Nose),
        fragment(Part::RightEye),
        &right_arm[..1]
    );
    let torso = format!("{}{}{}", &left_arm[1..], fragment(Part::Torso), &right_arm[1..]);
    let base = format!(" {}", fragment(Part::Base));

    Ok([hat, face, torso, base].join("\n"))
}
