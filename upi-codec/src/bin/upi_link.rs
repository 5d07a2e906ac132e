//! Command-line front end for building and auditing UPI payment links

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::str::FromStr;
use upi_codec::{CodecConfig, UpiCodec};

/// Build and audit `upi://pay` payment links
#[derive(Parser, Debug)]
#[command(name = "upi-link")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print a general payment link
    Encode(EncodeArgs),

    /// Print a link for paying an invoice
    Invoice(InvoiceArgs),

    /// Audit a link and print the report as JSON
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Clone)]
struct EncodeArgs {
    /// Payee handle, e.g. shop@upi
    handle: String,

    /// Payee display name
    name: String,

    /// Amount in INR
    #[arg(value_parser = parse_amount)]
    amount: Option<Decimal>,

    /// Transaction note
    note: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct InvoiceArgs {
    /// Payee handle, e.g. shop@upi
    handle: String,

    /// Payee display name
    name: String,

    /// Amount in INR
    #[arg(value_parser = parse_amount)]
    amount: Decimal,

    /// Invoice number, used as note and transaction reference
    invoice: String,

    /// Link to the invoice document
    receipt_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct ValidateArgs {
    /// Link to audit
    url: String,
}

fn parse_amount(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim()).map_err(|e| format!("invalid amount {:?}: {}", raw, e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CodecConfig::from_env().context("Failed to load codec config")?;
    tracing::debug!(?config, "Loaded codec config");

    run(&UpiCodec::new(config), cli.command)
}

fn run(codec: &UpiCodec, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Encode(args) => {
            let url = codec.general_payment_url(&args.handle, &args.name, args.amount, args.note.as_deref())?;
            println!("{}", url);
        }
        Command::Invoice(args) => {
            let url = codec.invoice_payment_url(
                &args.handle,
                &args.name,
                args.amount,
                &args.invoice,
                args.receipt_url.as_deref(),
            )?;
            println!("{}", url);
        }
        Command::Validate(args) => {
            let report = codec.validate(&args.url);
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_valid {
                tracing::info!(errors = report.errors.len(), "Link is invalid");
                bail!("link is invalid: {}", report.errors.join("; "));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_args() {
        let cli = Cli::try_parse_from(["upi-link", "encode", "shop@upi", "Shop", "12.5", "Thanks"]).unwrap();
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.handle, "shop@upi");
                assert_eq!(args.amount, Some(Decimal::new(125, 1)));
                assert_eq!(args.note.as_deref(), Some("Thanks"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_help_is_not_an_amount() {
        let err = Cli::try_parse_from(["upi-link", "encode", "shop@upi", "Shop", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_amount_rejected_at_parse() {
        let err = Cli::try_parse_from(["upi-link", "invoice", "shop@upi", "Shop", "ten", "INV-1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        let err = Cli::try_parse_from(["upi-link", "invoice", "shop@upi", "Shop"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_run_invoice() {
        let cli = Cli::try_parse_from(["upi-link", "invoice", "shop@upi", "Shop", "5", "INV-1"]).unwrap();
        assert!(run(&UpiCodec::default(), cli.command).is_ok());
    }

    #[test]
    fn test_invalid_link_returns_error() {
        let cli = Cli::try_parse_from(["upi-link", "validate", "upi://pay?pa=a@b&pn=X&am=0"]).unwrap();
        let err = run(&UpiCodec::default(), cli.command).unwrap_err();
        assert!(err.to_string().starts_with("link is invalid"));
    }
}
