//! bartool - Generate, validate, and parse RepairHQ barcode values
//!
//! This tool works purely on barcode strings: it issues new identifiers,
//! checks scanned values against an encoding, and splits scans into their
//! structural fields. Rendering is left to the label printer.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rhq_barcode::tools::{read_values, validate_batch};
use rhq_barcode::{Encoding, ParsedBarcode, check, format_inventory_barcode, generate, parse};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// RepairHQ barcode CLI tools
#[derive(Parser)]
#[command(name = "bartool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate fresh barcode values
    Generate {
        #[arg(long, value_enum)]
        encoding: EncodingArg,
        /// Seed the value with a fixed prefix
        #[arg(long, default_value = "")]
        prefix: String,
        /// How many values to emit
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Validate scanned values against one encoding
    Validate {
        #[arg(long, value_enum)]
        encoding: EncodingArg,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Classify scanned values and print their fields
    Parse {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Build inventory labels from a category and SKU
    Inventory {
        #[arg(long)]
        category: String,
        #[arg(long)]
        sku: String,
        /// How many labels to emit
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Validate a file of values, one per line
    BatchValidate {
        #[arg(long, value_enum)]
        encoding: EncodingArg,
        /// Input file (`#` comments and blank lines are skipped)
        #[arg(long)]
        input: PathBuf,
    },
}

/// Encoding names accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    /// 13-digit retail barcode with check digit
    #[value(name = "ean-13", alias = "EAN-13")]
    Ean13,
    /// 12-digit retail barcode with check digit
    #[value(name = "upc-a", alias = "UPC-A")]
    UpcA,
    /// Free-form alphanumeric barcode
    #[value(name = "code-128", alias = "CODE-128")]
    Code128,
    /// Free-form QR payload
    #[value(name = "qr", alias = "QR")]
    Qr,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Ean13 => Encoding::Ean13,
            EncodingArg::UpcA => Encoding::UpcA,
            EncodingArg::Code128 => Encoding::Code128,
            EncodingArg::Qr => Encoding::Qr,
        }
    }
}

/// Output format for parse results
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON document per value
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    match cli.command {
        Command::Generate {
            encoding,
            prefix,
            count,
        } => generate_cmd(encoding.into(), &prefix, count),
        Command::Validate { encoding, values } => validate_cmd(encoding.into(), &values),
        Command::Parse { format, values } => parse_cmd(format, &values),
        Command::Inventory {
            category,
            sku,
            count,
        } => inventory_cmd(&category, &sku, count),
        Command::BatchValidate { encoding, input } => batch_validate_cmd(encoding.into(), &input),
    }
}

fn generate_cmd(encoding: Encoding, prefix: &str, count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", generate(encoding, prefix));
    }
    Ok(())
}

fn validate_cmd(encoding: Encoding, values: &[String]) -> Result<()> {
    let mut invalid = 0usize;
    for value in values {
        match check(value, encoding) {
            Ok(()) => println!("{}: ok", value),
            Err(err) => {
                println!("{}: {}", value, err);
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        bail!("{} of {} values failed validation", invalid, values.len());
    }
    Ok(())
}

fn parse_cmd(format: OutputFormat, values: &[String]) -> Result<()> {
    for value in values {
        let parsed = parse(value);
        match format {
            OutputFormat::Text => print_parsed(value, parsed.as_ref()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&parsed)
                    .context("failed to serialize parse result")?;
                println!("{}", json);
            }
        }
    }
    Ok(())
}

fn print_parsed(value: &str, parsed: Option<&ParsedBarcode>) {
    match parsed {
        Some(ParsedBarcode::Ean13 {
            country_code,
            manufacturer_code,
            product_code,
            check_digit,
        }) => println!(
            "{}: EAN-13 country={} manufacturer={} product={} check={}",
            value, country_code, manufacturer_code, product_code, check_digit
        ),
        Some(ParsedBarcode::UpcA {
            manufacturer_code,
            product_code,
            check_digit,
        }) => println!(
            "{}: UPC-A manufacturer={} product={} check={}",
            value, manufacturer_code, product_code, check_digit
        ),
        Some(ParsedBarcode::Qr { url }) => println!("{}: QR url={}", value, url),
        Some(ParsedBarcode::Code128 { value: content }) => {
            println!("{}: CODE-128 value={}", value, content)
        }
        None => println!("{}: nothing to decode", value),
    }
}

fn inventory_cmd(category: &str, sku: &str, count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", format_inventory_barcode(category, sku));
    }
    Ok(())
}

fn batch_validate_cmd(encoding: Encoding, input: &Path) -> Result<()> {
    let values = read_values(input)
        .with_context(|| format!("failed to read values from {}", input.display()))?;
    if values.is_empty() {
        println!("No values found in {}", input.display());
        return Ok(());
    }

    let report = validate_batch(&values, encoding);
    for (value, err) in &report.failures {
        println!("{}: {}", value, err);
    }
    println!("{}/{} values valid", report.valid, report.total());

    if !report.all_valid() {
        bail!("{} values failed validation", report.failures.len());
    }
    Ok(())
}
