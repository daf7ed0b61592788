//! Domain types for the PayLeap gateway: cards, amounts, the request field
//! vocabulary, parsed replies and the outbound transport port.

pub mod card;
pub mod codes;
pub mod credentials;
pub mod fields;
pub mod money;
pub mod operation;
pub mod ports;
pub mod response;
