use super::card::Address;
use super::fields::RequestFields;
use super::money::Amount;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// The logical operation requested from the gateway.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum TransactionType {
    Auth,
    Sale,
    /// PayLeap's name for capturing a prior authorization.
    Force,
    Void,
    Return,
    /// Stores the card and returns a reusable account token.
    Tokenize,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "Auth",
            Self::Sale => "Sale",
            Self::Force => "Force",
            Self::Void => "Void",
            Self::Return => "Return",
            Self::Tokenize => "Tokenize",
        }
    }

    /// Value sent in `TransType`. Tokenization rides on an authorization and is
    /// told apart only by its `ExtData` flag.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Tokenize => Self::Auth.as_str(),
            other => other.as_str(),
        }
    }

    /// Void and Tokenize requests must not carry an `Amount` key at all.
    pub fn carries_amount(&self) -> bool {
        !matches!(self, Self::Void | Self::Tokenize)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service path appended to the mode's base URL.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Endpoint {
    ProcessCreditCard,
    ProcessWithToken,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::ProcessCreditCard => "ProcessCreditCard",
            Self::ProcessWithToken => "ProcessDebitOrCreditCardWithAccounttoken",
        }
    }
}

/// A fully mapped operation, ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub transaction: TransactionType,
    pub amount: Option<Amount>,
    pub fields: RequestFields,
    pub endpoint: Endpoint,
}

/// Optional order details accompanying a card operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionOptions {
    pub invoice: Option<String>,
    pub customer: Option<String>,
    pub billing_address: Option<Address>,
    pub address: Option<Address>,
}

impl TransactionOptions {
    /// Billing address first, then the general one.
    pub fn effective_address(&self) -> Option<&Address> {
        self.billing_address.as_ref().or(self.address.as_ref())
    }
}

/// Reference to a prior transaction, returned by every operation and fed back
/// into capture, void and credit.
///
/// Serializes with the gateway's own key names so callers can store it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorizationReference {
    #[serde(rename = "AuthCode", default)]
    pub auth_code: Option<String>,
    /// Last four digits of the card used on the original request.
    #[serde(rename = "CardNum", default)]
    pub card_num: Option<String>,
    #[serde(rename = "PNRef", default)]
    pub pn_ref: Option<String>,
}

impl AuthorizationReference {
    /// Parses a stored reference, yielding `None` instead of an error when it
    /// is not valid JSON. Capture and friends then go out with whatever is
    /// left and the gateway reports the failure.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(reference) => Some(reference),
            Err(e) => {
                warn!(error = %e, "discarding malformed authorization reference");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.auth_code.is_none() && self.card_num.is_none() && self.pn_ref.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_is_sent_as_auth() {
        assert_eq!(TransactionType::Tokenize.wire_name(), "Auth");
        assert_eq!(TransactionType::Force.wire_name(), "Force");
        assert_eq!(TransactionType::Tokenize.to_string(), "Tokenize");
    }

    #[test]
    fn test_amount_carrying_operations() {
        assert!(TransactionType::Auth.carries_amount());
        assert!(TransactionType::Sale.carries_amount());
        assert!(TransactionType::Force.carries_amount());
        assert!(TransactionType::Return.carries_amount());
        assert!(!TransactionType::Void.carries_amount());
        assert!(!TransactionType::Tokenize.carries_amount());
    }

    #[test]
    fn test_reference_uses_gateway_key_names() {
        let reference = AuthorizationReference {
            auth_code: Some("562".to_string()),
            card_num: Some("1002".to_string()),
            pn_ref: Some("331".to_string()),
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"AuthCode":"562","CardNum":"1002","PNRef":"331"}"#);
        assert_eq!(AuthorizationReference::parse_lenient(&json), Some(reference));
    }

    #[test]
    fn test_parse_lenient_tolerates_garbage_and_partials() {
        assert_eq!(AuthorizationReference::parse_lenient("not json"), None);
        assert_eq!(AuthorizationReference::parse_lenient("[1,2]"), None);

        let partial = AuthorizationReference::parse_lenient(r#"{"PNRef":"9"}"#).unwrap();
        assert_eq!(partial.pn_ref.as_deref(), Some("9"));
        assert!(partial.auth_code.is_none());
        assert!(AuthorizationReference::default().is_empty());
    }

    #[test]
    fn test_billing_address_preferred() {
        let billing = Address {
            zip: Some("11111".to_string()),
            ..Default::default()
        };
        let general = Address {
            zip: Some("22222".to_string()),
            ..Default::default()
        };
        let mut options = TransactionOptions {
            billing_address: Some(billing.clone()),
            address: Some(general.clone()),
            ..Default::default()
        };
        assert_eq!(options.effective_address(), Some(&billing));
        options.billing_address = None;
        assert_eq!(options.effective_address(), Some(&general));
    }
}
