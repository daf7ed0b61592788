use crate::application::encoder::{Endpoints, RequestEncoder};
use crate::application::{field_mapper, interpreter, parser};
use crate::domain::card::CreditCard;
use crate::domain::credentials::{GatewayCredentials, Mode};
use crate::domain::money::Amount;
use crate::domain::operation::{AuthorizationReference, OperationRequest, TransactionOptions};
use crate::domain::ports::TransportBox;
use crate::domain::response::NormalizedResult;
use crate::error::Result;
use crate::settings::GatewaySettings;
use tracing::{debug, info, instrument};

pub const DISPLAY_NAME: &str = "PayLeap";
pub const HOMEPAGE_URL: &str = "http://www.payleap.com/";
pub const SUPPORTED_COUNTRIES: [&str; 1] = ["US"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    MasterCard,
    AmericanExpress,
    Discover,
    Jcb,
    DinersClub,
}

pub const SUPPORTED_CARD_BRANDS: [CardBrand; 6] = [
    CardBrand::Visa,
    CardBrand::MasterCard,
    CardBrand::AmericanExpress,
    CardBrand::Discover,
    CardBrand::Jcb,
    CardBrand::DinersClub,
];

/// Client for the PayLeap transaction service.
///
/// `PayLeapGateway` owns the merchant credentials, the mode and the transport.
/// Each operation is independent: it maps its inputs, encodes them, posts
/// the body, parses the reply and interprets it. Nothing is shared between
/// calls, so one gateway can serve concurrent tasks.
pub struct PayLeapGateway {
    encoder: RequestEncoder,
    transport: TransportBox,
}

impl PayLeapGateway {
    /// Creates a gateway against the standard PayLeap hosts.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Merchant login, validated when built.
    /// * `mode` - Test (UAT) or live host.
    /// * `transport` - Outbound HTTP port.
    pub fn new(credentials: GatewayCredentials, mode: Mode, transport: TransportBox) -> Self {
        Self::with_endpoints(credentials, mode, Endpoints::default(), transport)
    }

    pub fn with_endpoints(
        credentials: GatewayCredentials,
        mode: Mode,
        endpoints: Endpoints,
        transport: TransportBox,
    ) -> Self {
        Self {
            encoder: RequestEncoder::new(credentials, mode, endpoints),
            transport,
        }
    }

    /// Fails with a validation error when the settings lack a login or password.
    pub fn from_settings(settings: &GatewaySettings, transport: TransportBox) -> Result<Self> {
        Ok(Self::with_endpoints(
            settings.credentials()?,
            settings.mode,
            settings.endpoints()?,
            transport,
        ))
    }

    pub fn mode(&self) -> Mode {
        self.encoder.mode()
    }

    pub fn is_test(&self) -> bool {
        self.mode().is_test()
    }

    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn authorize(
        &self,
        amount: Amount,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<NormalizedResult> {
        self.commit(field_mapper::authorize(amount, card, options))
            .await
    }

    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn purchase(
        &self,
        amount: Amount,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<NormalizedResult> {
        self.commit(field_mapper::purchase(amount, card, options))
            .await
    }

    /// Charges a card previously stored with [`tokenize`](Self::tokenize).
    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn purchase_with_token(&self, amount: Amount, token: &str) -> Result<NormalizedResult> {
        self.commit(field_mapper::purchase_with_token(amount, token))
            .await
    }

    #[instrument(skip_all)]
    pub async fn tokenize(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<NormalizedResult> {
        self.commit(field_mapper::tokenize(card, options)).await
    }

    /// Captures a prior authorization. A missing reference is not an error
    /// here; the gateway declines the request instead.
    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn capture(
        &self,
        amount: Amount,
        reference: Option<&AuthorizationReference>,
    ) -> Result<NormalizedResult> {
        self.commit(field_mapper::capture(amount, reference)).await
    }

    #[instrument(skip_all)]
    pub async fn void(&self, reference: Option<&AuthorizationReference>) -> Result<NormalizedResult> {
        self.commit(field_mapper::void(reference)).await
    }

    /// Refunds against a prior transaction; the full card is required again.
    #[instrument(skip_all, fields(amount = %amount))]
    pub async fn credit(
        &self,
        amount: Amount,
        reference: Option<&AuthorizationReference>,
        card: &CreditCard,
    ) -> Result<NormalizedResult> {
        self.commit(field_mapper::credit(amount, reference, card))
            .await
    }

    async fn commit(&self, request: OperationRequest) -> Result<NormalizedResult> {
        let encoded = self.encoder.encode(&request)?;

        debug!(
            url = %encoded.url,
            body = %encoded.redacted_body(),
            "posting to gateway"
        );

        let raw = self.transport.post(encoded.url.as_str(), &encoded.body).await?;
        let response = parser::parse(&raw);
        let result = interpreter::interpret(response, &request.fields, self.is_test());

        info!(
            transaction = %request.transaction,
            success = result.success,
            message = %result.message,
            "gateway responded"
        );

        Ok(result)
    }
}
