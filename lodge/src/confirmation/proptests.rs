//! Property-based tests for confirmation code generation.

use super::ConfirmationCode;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Codes are exactly the requested length
    #[test]
    fn generated_length_matches(length in 1usize..32) {
        let code = ConfirmationCode::generate(length);
        prop_assert_eq!(code.as_str().len(), length);
    }

    // Codes only ever contain the uppercase alphanumeric alphabet
    #[test]
    fn generated_alphabet(length in 1usize..32) {
        let code = ConfirmationCode::generate(length);
        prop_assert!(code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
