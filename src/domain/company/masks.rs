//! Input masks applied while fields are edited.
//!
//! A mask is a pattern where `0` and `9` are digit slots and every other
//! character is a literal. Literals are only emitted when a digit follows
//! them, so partially typed values render the way they were typed so far.
//! Digits beyond the last slot are appended unformatted, never dropped, so
//! validation always sees every digit that was sent.

use super::validators::digits_only;

/// `00.000.000/0000-00`
pub const CNPJ_MASK: &str = "00.000.000/0000-00";

/// `(00) 90000-0000`
pub const MOBILE_PHONE_MASK: &str = "(00) 90000-0000";

fn apply_mask(pattern: &str, raw: &str) -> String {
    let digits = digits_only(raw);
    let mut remaining = digits.chars().peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if remaining.peek().is_none() {
            break;
        }
        match slot {
            '0' | '9' => {
                if let Some(digit) = remaining.next() {
                    out.push(digit);
                }
            }
            literal => out.push(literal),
        }
    }

    out.extend(remaining);
    out
}

pub fn mask_cnpj(raw: &str) -> String {
    apply_mask(CNPJ_MASK, raw)
}

pub fn mask_mobile_phone(raw: &str) -> String {
    apply_mask(MOBILE_PHONE_MASK, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_cnpj_is_punctuated() {
        assert_eq!(mask_cnpj("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn partial_cnpj_stops_after_last_digit() {
        assert_eq!(mask_cnpj("112"), "11.2");
        assert_eq!(mask_cnpj("11"), "11");
        assert_eq!(mask_cnpj(""), "");
    }

    #[test]
    fn already_masked_cnpj_is_stable() {
        assert_eq!(mask_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn phone_mask_formats_mobile_numbers() {
        assert_eq!(mask_mobile_phone("84912345678"), "(84) 91234-5678");
        assert_eq!(mask_mobile_phone("8"), "(8");
        assert_eq!(mask_mobile_phone("849"), "(84) 9");
    }

    #[test]
    fn extra_digits_are_kept_after_the_mask() {
        assert_eq!(mask_mobile_phone("849123456789"), "(84) 91234-56789");
        assert_eq!(mask_mobile_phone("(11) 91111-11119"), "(11) 91111-11119");
        assert_eq!(mask_cnpj("112223330001819"), "11.222.333/0001-819");
    }

    proptest! {
        #[test]
        fn masking_is_idempotent(raw in "[0-9() ./-]{0,20}") {
            let once = mask_mobile_phone(&raw);
            prop_assert_eq!(mask_mobile_phone(&once), once.clone());
            let once = mask_cnpj(&raw);
            prop_assert_eq!(mask_cnpj(&once), once.clone());
        }

        #[test]
        fn masking_keeps_every_digit(raw in "[0-9]{0,20}") {
            prop_assert_eq!(digits_only(&mask_cnpj(&raw)), raw.clone());
            prop_assert_eq!(digits_only(&mask_mobile_phone(&raw)), raw);
        }
    }
}
