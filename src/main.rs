use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payleap::PayLeapGateway;
use payleap::domain::card::{Address, CreditCard, ExpiryDate};
use payleap::domain::fields::PASSWORD;
use payleap::domain::money::Amount;
use payleap::domain::operation::{AuthorizationReference, TransactionOptions};
use payleap::domain::response::NormalizedResult;
use payleap::infrastructure::http::HttpTransport;
use payleap::infrastructure::in_memory::RecordingTransport;
use payleap::settings::GatewaySettings;
use payleap::telemetry::{LogFormat, init_tracing};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (TOML). `PAYLEAP_*` environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the request instead of sending it to the gateway.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authorize an amount on a card
    Authorize {
        #[arg(long)]
        amount: Amount,
        #[command(flatten)]
        card: CardArgs,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Authorize and capture in one step
    Purchase {
        #[arg(long)]
        amount: Amount,
        #[command(flatten)]
        card: CardArgs,
        #[command(flatten)]
        order: OrderArgs,
    },
    /// Charge a stored account token
    PurchaseWithToken {
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        token: String,
    },
    /// Store a card and obtain an account token
    Tokenize {
        #[command(flatten)]
        card: CardArgs,
        #[command(flatten)]
        address: AddressArgs,
    },
    /// Capture a prior authorization
    Capture {
        #[arg(long)]
        amount: Amount,
        /// Authorization reference JSON, e.g. '{"AuthCode":"1","PNRef":"2","CardNum":"1234"}'
        #[arg(long)]
        authorization: Option<String>,
    },
    /// Void a prior transaction
    Void {
        #[arg(long)]
        authorization: Option<String>,
    },
    /// Refund against a prior transaction
    Credit {
        #[arg(long)]
        amount: Amount,
        #[arg(long)]
        authorization: Option<String>,
        #[command(flatten)]
        card: CardArgs,
    },
}

#[derive(Args)]
struct CardArgs {
    #[arg(long)]
    card_number: String,
    #[arg(long)]
    month: u8,
    #[arg(long)]
    year: u16,
    #[arg(long)]
    cvv: Option<String>,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
}

impl CardArgs {
    fn into_card(self) -> payleap::Result<CreditCard> {
        Ok(CreditCard {
            number: self.card_number,
            expiry: ExpiryDate::new(self.month, self.year)?,
            verification_value: self.cvv,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

#[derive(Args)]
struct AddressArgs {
    #[arg(long)]
    address1: Option<String>,
    #[arg(long)]
    address2: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    zip: Option<String>,
}

impl AddressArgs {
    fn into_address(self) -> Option<Address> {
        let address = Address {
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip: self.zip,
        };
        (address != Address::default()).then_some(address)
    }
}

#[derive(Args)]
struct OrderArgs {
    #[arg(long)]
    invoice: Option<String>,
    #[arg(long)]
    customer: Option<String>,
    #[command(flatten)]
    address: AddressArgs,
}

impl OrderArgs {
    fn into_options(self) -> TransactionOptions {
        TransactionOptions {
            invoice: self.invoice,
            customer: self.customer,
            billing_address: self.address.into_address(),
            address: None,
        }
    }
}

/// What `--dry-run` prints: the target and the decoded form, password hidden.
#[derive(Serialize)]
struct DryRun {
    url: String,
    fields: BTreeMap<String, String>,
}

fn reference(raw: Option<String>) -> Option<AuthorizationReference> {
    raw.as_deref().and_then(AuthorizationReference::parse_lenient)
}

async fn run(gateway: &PayLeapGateway, command: Command) -> payleap::Result<NormalizedResult> {
    match command {
        Command::Authorize {
            amount,
            card,
            order,
        } => {
            gateway
                .authorize(amount, &card.into_card()?, &order.into_options())
                .await
        }
        Command::Purchase {
            amount,
            card,
            order,
        } => {
            gateway
                .purchase(amount, &card.into_card()?, &order.into_options())
                .await
        }
        Command::PurchaseWithToken { amount, token } => {
            gateway.purchase_with_token(amount, &token).await
        }
        Command::Tokenize { card, address } => {
            let options = TransactionOptions {
                billing_address: address.into_address(),
                ..Default::default()
            };
            gateway.tokenize(&card.into_card()?, &options).await
        }
        Command::Capture {
            amount,
            authorization,
        } => gateway.capture(amount, reference(authorization).as_ref()).await,
        Command::Void { authorization } => gateway.void(reference(authorization).as_ref()).await,
        Command::Credit {
            amount,
            authorization,
            card,
        } => {
            gateway
                .credit(amount, reference(authorization).as_ref(), &card.into_card()?)
                .await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(LogFormat::from_env());
    let cli = Cli::parse();

    let settings = GatewaySettings::load(cli.config.as_deref()).into_diagnostic()?;

    if cli.dry_run {
        // Replay an empty body so the pipeline completes without a network call.
        let transport = RecordingTransport::new();
        transport.push_response("").await;
        let gateway =
            PayLeapGateway::from_settings(&settings, Box::new(transport.clone())).into_diagnostic()?;
        run(&gateway, cli.command).await.into_diagnostic()?;

        for request in transport.requests().await {
            let mut fields: BTreeMap<String, String> = request.form_fields().into_iter().collect();
            fields.insert(PASSWORD.to_string(), "[REDACTED]".to_string());
            let dry_run = DryRun {
                url: request.url,
                fields,
            };
            println!("{}", serde_json::to_string_pretty(&dry_run).into_diagnostic()?);
        }
        return Ok(());
    }

    let transport = HttpTransport::new(settings.timeout()).into_diagnostic()?;
    let gateway = PayLeapGateway::from_settings(&settings, Box::new(transport)).into_diagnostic()?;
    let result = run(&gateway, cli.command).await.into_diagnostic()?;

    println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);

    Ok(())
}
