use crate::error::GatewayError;
use serde::{Deserialize, Serialize};

/// Card expiration as entered by the cardholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDate {
    month: u8,
    year: u16,
}

impl ExpiryDate {
    pub fn new(month: u8, year: u16) -> Result<Self, GatewayError> {
        if (1..=12).contains(&month) {
            Ok(Self { month, year })
        } else {
            Err(GatewayError::ValidationError(format!(
                "Expiration month must be between 1 and 12, got {month}"
            )))
        }
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// `MMYY`: zero-padded month followed by the last two digits of the
    /// zero-padded four digit year.
    pub fn to_mmyy(&self) -> String {
        let year = format!("{:04}", self.year);
        let yy = year.get(2..4).unwrap_or_default();
        format!("{:02}{}", self.month, yy)
    }
}

/// A raw card as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub number: String,
    pub expiry: ExpiryDate,
    pub verification_value: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl CreditCard {
    /// `true` when the card carries a non-blank CVV.
    pub fn has_verification_value(&self) -> bool {
        self.verification_value
            .as_deref()
            .is_some_and(|cvv| !cvv.trim().is_empty())
    }

    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl Address {
    /// Single-line street as the gateway stores it: `"{1} {2} {city}, {state}"`.
    /// Missing parts collapse to empty strings, separators stay.
    pub fn street_line(&self) -> String {
        format!(
            "{} {} {}, {}",
            self.address1.as_deref().unwrap_or_default(),
            self.address2.as_deref().unwrap_or_default(),
            self.city.as_deref().unwrap_or_default(),
            self.state.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_mmyy() {
        assert_eq!(ExpiryDate::new(10, 2009).unwrap().to_mmyy(), "1009");
        assert_eq!(ExpiryDate::new(1, 2030).unwrap().to_mmyy(), "0130");
        assert_eq!(ExpiryDate::new(12, 2100).unwrap().to_mmyy(), "1200");
    }

    #[test]
    fn test_expiry_pads_short_year() {
        assert_eq!(ExpiryDate::new(3, 9).unwrap().to_mmyy(), "0309");
        assert_eq!(ExpiryDate::new(3, 15).unwrap().to_mmyy(), "0315");
    }

    #[test]
    fn test_expiry_is_always_four_chars() {
        for month in 1..=12 {
            for year in [1999_u16, 2000, 2009, 2024, 2099, 9999] {
                let mmyy = ExpiryDate::new(month, year).unwrap().to_mmyy();
                assert_eq!(mmyy.len(), 4, "{month}/{year} -> {mmyy}");
                assert_eq!(&mmyy[..2], format!("{month:02}"));
                assert_eq!(&mmyy[2..], format!("{:02}", year % 100));
            }
        }
    }

    #[test]
    fn test_expiry_rejects_bad_month() {
        assert!(matches!(
            ExpiryDate::new(0, 2020),
            Err(GatewayError::ValidationError(_))
        ));
        assert!(matches!(
            ExpiryDate::new(13, 2020),
            Err(GatewayError::ValidationError(_))
        ));
    }

    #[test]
    fn test_verification_value_presence() {
        let mut card = CreditCard {
            number: "4005550000000019".to_string(),
            expiry: ExpiryDate::new(1, 2030).unwrap(),
            verification_value: Some("123".to_string()),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        };
        assert!(card.has_verification_value());
        card.verification_value = Some("  ".to_string());
        assert!(!card.has_verification_value());
        card.verification_value = None;
        assert!(!card.has_verification_value());
        assert_eq!(card.name(), "John Doe");
    }

    #[test]
    fn test_street_line_keeps_separators() {
        let address = Address {
            address1: Some("456 My Street".to_string()),
            address2: Some("Apt 1".to_string()),
            city: Some("Ottawa".to_string()),
            state: Some("ON".to_string()),
            zip: Some("K1C2N6".to_string()),
        };
        assert_eq!(address.street_line(), "456 My Street Apt 1 Ottawa, ON");

        let partial = Address {
            address1: Some("1 Main".to_string()),
            ..Default::default()
        };
        assert_eq!(partial.street_line(), "1 Main  , ");
    }
}
