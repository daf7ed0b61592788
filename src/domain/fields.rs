//! The gateway's request field vocabulary and the flat field map requests are
//! built from.

use std::collections::BTreeMap;

pub const USER_NAME: &str = "UserName";
pub const PASSWORD: &str = "Password";
pub const TRANS_TYPE: &str = "TransType";
pub const CARD_NUM: &str = "CardNum";
pub const EXP_DATE: &str = "ExpDate";
pub const MAG_DATA: &str = "MagData";
pub const NAME_ON_CARD: &str = "NameOnCard";
pub const AMOUNT: &str = "Amount";
pub const INV_NUM: &str = "InvNum";
pub const PN_REF: &str = "PNRef";
pub const ZIP: &str = "Zip";
pub const STREET: &str = "Street";
pub const CV_NUM: &str = "CVNum";
pub const EXT_DATA: &str = "ExtData";
pub const AUTH_CODE: &str = "AuthCode";
pub const ACCOUNT_TOKEN: &str = "accounttoken";

/// Fields the gateway requires on every request, even when blank.
///
/// `Amount` is deliberately absent: an empty amount breaks tokenization.
pub const DEFAULT_FIELDS: [&str; 13] = [
    USER_NAME,
    PASSWORD,
    TRANS_TYPE,
    CARD_NUM,
    EXP_DATE,
    MAG_DATA,
    NAME_ON_CARD,
    INV_NUM,
    PN_REF,
    ZIP,
    STREET,
    CV_NUM,
    EXT_DATA,
];

/// An immutable-by-convention set of request fields.
///
/// Every builder method consumes `self` and returns the extended map, so
/// mapping steps compose without sharing mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestFields(BTreeMap<&'static str, String>);

impl RequestFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The blank default field set.
    pub fn defaults() -> Self {
        DEFAULT_FIELDS
            .into_iter()
            .fold(Self::new(), |fields, name| fields.with(name, ""))
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(name, value.into());
        self
    }

    pub fn with_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Overlays `other` on top of `self`; `other` wins on conflicting keys.
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}
