//! Maps payment intents onto the gateway's flat field vocabulary.
//!
//! Every function is pure: it takes the abstract inputs and returns a fresh
//! `RequestFields`. Operation builders compose them with `merge`.

use crate::domain::card::CreditCard;
use crate::domain::fields::{
    ACCOUNT_TOKEN, AUTH_CODE, CARD_NUM, CV_NUM, EXP_DATE, EXT_DATA, INV_NUM, NAME_ON_CARD, PN_REF,
    RequestFields, STREET, ZIP,
};
use crate::domain::money::Amount;
use crate::domain::operation::{
    AuthorizationReference, Endpoint, OperationRequest, TransactionOptions, TransactionType,
};
use tracing::warn;

pub const CUSTOMER_TOKENIZATION_FLAG: &str = "<CustomerTokenization>T</CustomerTokenization>";
pub const CREDIT_CARD_ONLY_FLAG: &str = "<CreditCardOnly>T</CreditCardOnly>";

/// `CardNum`, `ExpDate`, `NameOnCard`, and `CVNum` when the card has one.
pub fn card_fields(card: &CreditCard) -> RequestFields {
    let fields = RequestFields::new()
        .with(CARD_NUM, card.number.as_str())
        .with(EXP_DATE, card.expiry.to_mmyy())
        .with(NAME_ON_CARD, card.name());

    if card.has_verification_value() {
        fields.with_opt(CV_NUM, card.verification_value.as_deref())
    } else {
        fields
    }
}

/// `Street` and `Zip`, or nothing at all when no address was given.
pub fn address_fields(options: &TransactionOptions) -> RequestFields {
    match options.effective_address() {
        Some(address) => RequestFields::new()
            .with(STREET, address.street_line())
            .with(ZIP, address.zip.as_deref().unwrap_or_default()),
        None => RequestFields::new(),
    }
}

pub fn invoice_fields(options: &TransactionOptions) -> RequestFields {
    RequestFields::new().with_opt(INV_NUM, options.invoice.as_deref())
}

/// Appends the customer id, if any, to an `ExtData` seed.
pub fn ext_data(seed: &str, options: &TransactionOptions) -> String {
    match options.customer.as_deref() {
        Some(customer) => format!("{seed}<CustomerID>{customer}</CustomerID>"),
        None => seed.to_string(),
    }
}

/// Prior-transaction fields. A missing reference, or one missing some parts,
/// yields a partial or empty map rather than an error: the gateway rejects the
/// request and that rejection becomes the caller's failure result.
pub fn reference_fields(
    reference: Option<&AuthorizationReference>,
    include_card: bool,
) -> RequestFields {
    let Some(reference) = reference else {
        warn!("no prior authorization supplied; sending an empty reference");
        return RequestFields::new();
    };
    if reference.is_empty() {
        warn!("prior authorization carries no fields; sending an empty reference");
    }

    // Missing parts still go out, blank.
    let fields = RequestFields::new()
        .with(AUTH_CODE, reference.auth_code.clone().unwrap_or_default())
        .with(PN_REF, reference.pn_ref.clone().unwrap_or_default());

    if include_card {
        fields.with(CARD_NUM, reference.card_num.clone().unwrap_or_default())
    } else {
        fields
    }
}

fn card_request(card: &CreditCard, options: &TransactionOptions) -> RequestFields {
    invoice_fields(options)
        .merge(card_fields(card))
        .merge(address_fields(options))
        .with(EXT_DATA, ext_data("", options))
}

pub fn authorize(amount: Amount, card: &CreditCard, options: &TransactionOptions) -> OperationRequest {
    OperationRequest {
        transaction: TransactionType::Auth,
        amount: Some(amount),
        fields: card_request(card, options),
        endpoint: Endpoint::ProcessCreditCard,
    }
}

pub fn purchase(amount: Amount, card: &CreditCard, options: &TransactionOptions) -> OperationRequest {
    OperationRequest {
        transaction: TransactionType::Sale,
        amount: Some(amount),
        fields: card_request(card, options),
        endpoint: Endpoint::ProcessCreditCard,
    }
}

/// Tokenization sends no invoice or customer data, only card and address.
pub fn tokenize(card: &CreditCard, options: &TransactionOptions) -> OperationRequest {
    let fields = RequestFields::new()
        .with(EXT_DATA, CUSTOMER_TOKENIZATION_FLAG)
        .merge(card_fields(card))
        .merge(address_fields(options));

    OperationRequest {
        transaction: TransactionType::Tokenize,
        amount: None,
        fields,
        endpoint: Endpoint::ProcessCreditCard,
    }
}

pub fn purchase_with_token(amount: Amount, token: &str) -> OperationRequest {
    let fields = RequestFields::new()
        .with(ACCOUNT_TOKEN, token)
        .with(CV_NUM, "")
        .with(EXT_DATA, CREDIT_CARD_ONLY_FLAG);

    OperationRequest {
        transaction: TransactionType::Sale,
        amount: Some(amount),
        fields,
        endpoint: Endpoint::ProcessWithToken,
    }
}

/// PayLeap captures through `Force`, and wants the last four card digits of
/// the original authorization alongside `PNRef`.
pub fn capture(amount: Amount, reference: Option<&AuthorizationReference>) -> OperationRequest {
    OperationRequest {
        transaction: TransactionType::Force,
        amount: Some(amount),
        fields: reference_fields(reference, true),
        endpoint: Endpoint::ProcessCreditCard,
    }
}

pub fn void(reference: Option<&AuthorizationReference>) -> OperationRequest {
    OperationRequest {
        transaction: TransactionType::Void,
        amount: None,
        fields: reference_fields(reference, false),
        endpoint: Endpoint::ProcessCreditCard,
    }
}

/// Refunds need the full card number and expiry again, not just the last four.
pub fn credit(
    amount: Amount,
    reference: Option<&AuthorizationReference>,
    card: &CreditCard,
) -> OperationRequest {
    let fields = reference_fields(reference, false)
        .with(CARD_NUM, card.number.as_str())
        .with(EXP_DATE, card.expiry.to_mmyy());

    OperationRequest {
        transaction: TransactionType::Return,
        amount: Some(amount),
        fields,
        endpoint: Endpoint::ProcessCreditCard,
    }
}
