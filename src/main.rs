use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystub::application::service::PaymentService;
use paystub::domain::identity::Identity;
use paystub::domain::money::Amount;
use paystub::domain::ports::PaymentProcessorBox;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Display name for the identity
    #[arg(default_value = "Alice Cooper")]
    name: String,

    /// Contact email for the identity
    #[arg(default_value = "alice@example.com")]
    email: String,

    /// Amount to charge
    #[arg(default_value = "150.0")]
    amount: Decimal,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout carries only the summary and result lines.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let identity = Identity::new(cli.name, cli.email);
    println!("{}", identity.summary());

    let amount = Amount::new(cli.amount).into_diagnostic()?;
    let processor: PaymentProcessorBox = Box::new(PaymentService::new());
    let result = processor.process(&identity, amount);
    println!("Payment result: {}", result);

    Ok(())
}
