//! Standard AVS and CVV result code tables.

/// CVV codes that turn a declined response's message into the CVV description.
pub const CARD_CODE_ERRORS: [&str; 2] = ["N", "S"];

/// AVS codes that turn a declined response's message into the AVS description.
pub const AVS_ERRORS: [&str; 6] = ["A", "E", "N", "R", "W", "Z"];

const STREET_MATCHES: &str = "ABDHJMOQTVXY";
const STREET_MISMATCHES: &str = "CKLNPWZ";
const POSTAL_MATCHES: &str = "DHFJLMPQVWXYZ";
const POSTAL_MISMATCHES: &str = "ACKNO";

pub fn cvv_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "D" => "CVV check flagged transaction as suspicious",
        "I" => "CVV failed data validation check",
        "M" => "CVV matches",
        "N" => "CVV does not match",
        "P" => "CVV not processed",
        "S" => "CVV should have been present",
        "U" => "CVV request unable to be processed by issuer",
        "X" => "Card does not support verification",
        _ => return None,
    };
    Some(message)
}

pub fn avs_message(code: &str) -> Option<&'static str> {
    let message = match code {
        "A" => "Street address matches, but postal code does not match.",
        "B" => "Street address matches, but postal code not verified.",
        "C" => "Street address and postal code do not match.",
        "D" => "Street address and postal code match.",
        "E" => "AVS data is invalid or AVS is not allowed for this card type.",
        "F" => "Card member's name does not match, but billing postal code matches.",
        "G" => "Non-U.S. issuing bank does not support AVS.",
        "H" => "Card member's name does not match. Street address and postal code match.",
        "I" => "Address not verified.",
        "J" => {
            "Card member's name, billing address, and postal code match. Shipping information verified and chargeback protection guaranteed through the Fraud Protection Program."
        }
        "K" => "Card member's name matches but billing address and billing postal code do not match.",
        "L" => "Card member's name and billing postal code match, but billing address does not match.",
        "M" => "Street address and postal code match.",
        "N" => "Street address and postal code do not match.",
        "O" => "Card member's name and billing address match, but billing postal code does not match.",
        "P" => "Postal code matches, but street address not verified.",
        "Q" => {
            "Card member's name, billing address, and postal code match. Shipping information verified but chargeback protection not guaranteed."
        }
        "R" => "System unavailable.",
        "S" => "U.S.-issuing bank does not support AVS.",
        "T" => "Card member's name does not match, but street address matches.",
        "U" => "Address information unavailable.",
        "V" => "Card member's name, billing address, and billing postal code match.",
        "W" => "Street address does not match, but 9-digit postal code matches.",
        "X" => "Street address and 9-digit postal code match.",
        "Y" => "Street address and 5-digit postal code match.",
        "Z" => "Street address does not match, but 5-digit postal code matches.",
        _ => return None,
    };
    Some(message)
}

fn match_flag(code: &str, matches: &str, mismatches: &str) -> Option<bool> {
    let mut chars = code.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if matches.contains(c) {
        Some(true)
    } else if mismatches.contains(c) {
        Some(false)
    } else {
        None
    }
}

/// Whether the street address matched, `None` when the code does not say.
pub fn avs_street_match(code: &str) -> Option<bool> {
    match_flag(code, STREET_MATCHES, STREET_MISMATCHES)
}

/// Whether the postal code matched, `None` when the code does not say.
pub fn avs_postal_match(code: &str) -> Option<bool> {
    match_flag(code, POSTAL_MATCHES, POSTAL_MISMATCHES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_have_descriptions() {
        for code in CARD_CODE_ERRORS {
            assert!(cvv_message(code).is_some(), "missing CVV text for {code}");
        }
        for code in AVS_ERRORS {
            assert!(avs_message(code).is_some(), "missing AVS text for {code}");
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(cvv_message("0"), None);
        assert_eq!(avs_message(""), None);
        assert_eq!(avs_message("AB"), None);
    }

    #[test]
    fn test_match_flags() {
        assert_eq!(avs_street_match("Y"), Some(true));
        assert_eq!(avs_postal_match("Y"), Some(true));
        assert_eq!(avs_street_match("Z"), Some(false));
        assert_eq!(avs_postal_match("Z"), Some(true));
        assert_eq!(avs_street_match("A"), Some(true));
        assert_eq!(avs_postal_match("A"), Some(false));
        assert_eq!(avs_street_match("0"), None);
        assert_eq!(avs_postal_match("YY"), None);
    }
}
