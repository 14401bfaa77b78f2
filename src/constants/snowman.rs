pub const CODE_LENGTH: usize = 8;

pub const VARIANT_MIN: i64 = 1;
pub const VARIANT_MAX: i64 = 4;

// One row per body part, one column per variant digit. Row order matches the
// digit positions of a code, most significant first.
pub const GLYPHS: [[&str; 4]; 8] = [
    ["_===_", "___.....", "_/_\\", "___(_*_)"], // hats
    [",", ".", "_", ""],                        // noses
    ["(.", "(o", "(O", "(-"],                   // left eyes
    [".)", "o)", "O)", "-)"],                   // right eyes
    [" <", "\\ ", " /", "  "],                  // left arms, upper then lower half
    [" >", "/ ", " \\", "  "],                  // right arms, upper then lower half
    ["( : )", "(] [)", "(> <)", "(   )"],       // torsos
    ["( : )", "(\" \")", "(___)", "(   )"],     // bases
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_eye_and_nose_fragments_fit_the_face() {
        for variant in 0..4 {
            assert_eq!(GLYPHS[2][variant].chars().count(), 2, "left eye variant {variant}");
            assert_eq!(GLYPHS[3][variant].chars().count(), 2, "right eye variant {variant}");
            assert!(GLYPHS[1][variant].chars().count() <= 1, "nose variant {variant}");
        }
    }

    #[test]
    fn test_arm_fragments_carry_two_halves() {
        for row in [4, 5] {
            for variant in 0..4 {
                assert_eq!(GLYPHS[row][variant].chars().count(), 2, "row {row} variant {variant}");
            }
        }
    }

    #[test]
    fn test_torso_and_base_fragments_are_five_wide() {
        for row in [6, 7] {
            for variant in 0..4 {
                assert_eq!(GLYPHS[row][variant].chars().count(), 5, "row {row} variant {variant}");
            }
        }
    }
}
