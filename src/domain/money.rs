use crate::error::GatewayError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A positive charge amount in whole currency units (dollars, not cents).
///
/// PayLeap expects amounts as fixed-point dollars, so no cents-to-dollars
/// division happens anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Rejects anything that would reach the gateway as `0000.00` or less,
    /// so sub-cent values fail here too.
    pub fn new(value: Decimal) -> Result<Self, GatewayError> {
        if round_to_cents(value) > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(GatewayError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Renders the amount the way the gateway reads it: two decimals,
    /// zero-padded to at least seven characters (`0001.00`).
    pub fn to_wire(&self) -> String {
        format!("{:07.2}", round_to_cents(self.0))
    }
}

fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl TryFrom<Decimal> for Amount {
    type Error = GatewayError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| GatewayError::ValidationError(format!("Invalid amount '{s}': {e}")))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(GatewayError::ValidationError(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(GatewayError::ValidationError(_))
        ));
    }

    #[test]
    fn test_sub_cent_amount_rejected() {
        assert!(matches!(
            Amount::new(dec!(0.001)),
            Err(GatewayError::ValidationError(_))
        ));
        assert!(matches!(
            Amount::new(dec!(0.004)),
            Err(GatewayError::ValidationError(_))
        ));
        assert_eq!(Amount::new(dec!(0.005)).unwrap().to_wire(), "0000.01");
    }

    #[test]
    fn test_wire_format_pads_to_seven_chars() {
        assert_eq!(Amount::new(dec!(1)).unwrap().to_wire(), "0001.00");
        assert_eq!(Amount::new(dec!(100)).unwrap().to_wire(), "0100.00");
        assert_eq!(Amount::new(dec!(1.04)).unwrap().to_wire(), "0001.04");
        assert_eq!(Amount::new(dec!(0.5)).unwrap().to_wire(), "0000.50");
    }

    #[test]
    fn test_wire_format_large_amount_keeps_two_decimals() {
        let wire = Amount::new(dec!(123456.7)).unwrap().to_wire();
        assert_eq!(wire, "123456.70");
    }

    #[test]
    fn test_wire_format_rounds_extra_precision() {
        assert_eq!(Amount::new(dec!(10.005)).unwrap().to_wire(), "0010.01");
        assert_eq!(Amount::new(dec!(10.004)).unwrap().to_wire(), "0010.00");
    }

    #[test]
    fn test_parse_from_str() {
        let amount: Amount = "12.50".parse().unwrap();
        assert_eq!(amount.value(), dec!(12.50));
        assert!("abc".parse::<Amount>().is_err());
        assert!("0".parse::<Amount>().is_err());
    }
}
