use crate::domain::credentials::{GatewayCredentials, Mode};
use crate::domain::fields::{AMOUNT, PASSWORD, RequestFields, TRANS_TYPE, USER_NAME};
use crate::domain::operation::{Endpoint, OperationRequest};
use crate::error::{GatewayError, Result};
use url::Url;

pub const TEST_URL: &str = "https://uat.payleap.com/TransactServices.svc/";
pub const LIVE_URL: &str = "https://secure1.payleap.com/TransactServices.svc/";

/// Base URLs for the two gateway environments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    test: Url,
    live: Url,
}

impl Endpoints {
    /// Both bases get a trailing slash so endpoint paths append rather than
    /// replace the last segment.
    pub fn new(test: Url, live: Url) -> Self {
        Self {
            test: with_trailing_slash(test),
            live: with_trailing_slash(live),
        }
    }

    pub fn parse(test: &str, live: &str) -> Result<Self> {
        Ok(Self::new(parse_url(test)?, parse_url(live)?))
    }

    pub fn base(&self, mode: Mode) -> &Url {
        match mode {
            Mode::Test => &self.test,
            Mode::Live => &self.live,
        }
    }

    pub fn url_for(&self, mode: Mode, endpoint: Endpoint) -> Result<Url> {
        self.base(mode).join(endpoint.path()).map_err(|e| {
            GatewayError::ValidationError(format!("Cannot build {} URL: {e}", endpoint.path()))
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            test: Url::parse(TEST_URL).expect("TEST_URL is a valid URL"),
            live: Url::parse(LIVE_URL).expect("LIVE_URL is a valid URL"),
        }
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| GatewayError::ValidationError(format!("Invalid URL '{raw}': {e}")))
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// The wire form of one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedRequest {
    pub url: Url,
    /// Form-encoded body, credentials included.
    pub body: String,
    /// Every field that went into `body`.
    pub fields: RequestFields,
}

impl EncodedRequest {
    /// The body with the password blanked out, for logs.
    /// Form body with the password masked, for logs. Empty if it cannot be encoded.
    pub fn redacted_body(&self) -> String {
        serialize(&self.fields.clone().with(PASSWORD, "[REDACTED]")).unwrap_or_default()
    }
}

/// Turns mapped operations into gateway requests for one merchant and mode.
#[derive(Debug, Clone)]
pub struct RequestEncoder {
    credentials: GatewayCredentials,
    mode: Mode,
    endpoints: Endpoints,
}

impl RequestEncoder {
    pub fn new(credentials: GatewayCredentials, mode: Mode, endpoints: Endpoints) -> Self {
        Self {
            credentials,
            mode,
            endpoints,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Defaults, then the mapped fields, then amount, `TransType` and the
    /// credentials, each layer overriding the previous one.
    pub fn fields(&self, request: &OperationRequest) -> RequestFields {
        let fields = RequestFields::defaults().merge(request.fields.clone());

        let fields = match request.amount {
            Some(amount) if request.transaction.carries_amount() => {
                fields.with(AMOUNT, amount.to_wire())
            }
            _ => fields,
        };

        fields
            .with(TRANS_TYPE, request.transaction.wire_name())
            .with(USER_NAME, self.credentials.login())
            .with(PASSWORD, self.credentials.password())
    }

    pub fn encode(&self, request: &OperationRequest) -> Result<EncodedRequest> {
        let fields = self.fields(request);
        let body = serialize(&fields)?;
        let url = self.endpoints.url_for(self.mode, request.endpoint)?;

        Ok(EncodedRequest { url, body, fields })
    }
}

/// `key=value` pairs joined with `&`, values form-encoded.
pub fn serialize(fields: &RequestFields) -> Result<String> {
    let pairs: Vec<(&str, &str)> = fields.iter().collect();
    Ok(serde_urlencoded::to_string(pairs)?)
}
