// ==========================================
// Termék önköltség-számítás - CLI entry point
// ==========================================
// Two modes: import a CSV cost sheet (overhead pools given as flags),
// or collect everything interactively the way the original worksheet
// tool did. Output is the two-table report or JSON.
// ==========================================

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use product_costing::cli::PromptSession;
use product_costing::config::AppConfig;
use product_costing::domain::cost::{CostBreakdown, CostInput};
use product_costing::domain::types::{CompanyBasis, OperatingBasis};
use product_costing::engine::CostingEngine;
use product_costing::importer::CostSheetImporter;
use product_costing::report::ReportRenderer;
use product_costing::{i18n, logging};

/// Product costing CLI
#[derive(Parser, Debug)]
#[command(name = "product-costing")]
#[command(version)]
#[command(about = "Allocates operating and company overhead across a product line")]
#[command(long_about = "Allocates operating and company overhead across a product line \
    and derives per-product and per-unit costs.\n\n\
    With --file, products are read from a CSV cost sheet and the overhead pools \
    must be given as flags. Without --file, all values are collected interactively.")]
struct Cli {
    /// CSV cost sheet (interactive prompts when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Report language (en/hu); interactive mode asks when omitted
    #[arg(short, long, env = "PRODUCT_COSTING_LANG")]
    locale: Option<String>,

    /// Operating overhead pool (required with --file)
    #[arg(long)]
    operating_overhead: Option<f64>,

    /// Company overhead pool (required with --file)
    #[arg(long)]
    company_overhead: Option<f64>,

    /// Allocation base for operating overhead (material/labor/other/direct)
    #[arg(long)]
    operating_basis: Option<String>,

    /// Allocation base for company overhead (restricted/direct)
    #[arg(long)]
    company_basis: Option<String>,

    /// Output format
    #[arg(short = 'F', long, default_value = "table", value_enum)]
    format: OutputFormat,

    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Two-table plain-text report
    Table,
    /// Machine-readable breakdown
    Json,
}

/// JSON payload: product labels plus the full breakdown.
#[derive(Serialize)]
struct JsonReport<'a> {
    products: &'a [String],
    operating_basis: OperatingBasis,
    company_basis: CompanyBasis,
    breakdown: &'a CostBreakdown,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    let mode = if cli.file.is_some() { "file" } else { "interactive" };
    tracing::info!(version = product_costing::VERSION, mode, "product costing started");

    // Basis flags are normalized (trim + lowercase) inside FromStr
    let operating_flag = cli
        .operating_basis
        .as_deref()
        .map(str::parse::<OperatingBasis>)
        .transpose()?;
    let company_flag = cli
        .company_basis
        .as_deref()
        .map(str::parse::<CompanyBasis>)
        .transpose()?;

    let (products, input, operating_basis, company_basis) = match &cli.file {
        Some(path) => {
            let language = match &cli.locale {
                Some(raw) => raw.parse()?,
                None => config.language,
            };
            i18n::set_language(language);

            let sheet = CostSheetImporter::new().import(path)?;
            let operating_overhead = cli
                .operating_overhead
                .context("--operating-overhead is required with --file")?;
            let company_overhead = cli
                .company_overhead
                .context("--company-overhead is required with --file")?;

            let products = sheet.products.clone();
            let input: CostInput = sheet.into_cost_input(operating_overhead, company_overhead);
            (
                products,
                input,
                operating_flag.unwrap_or(config.operating_basis),
                company_flag.unwrap_or(config.company_basis),
            )
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = PromptSession::new(stdin.lock(), stdout.lock());

            match &cli.locale {
                Some(raw) => i18n::set_language(raw.parse()?),
                None => {
                    session.read_language()?;
                }
            }

            let collected = session.collect(operating_flag, company_flag)?;
            (
                collected.products,
                collected.input,
                collected.operating_basis,
                collected.company_basis,
            )
        }
    };

    let engine = CostingEngine::new();
    let breakdown = engine.compute(&input, operating_basis, company_basis)?;

    match cli.format {
        OutputFormat::Table => {
            let renderer = ReportRenderer::new(config.decimal_places);
            println!();
            println!("{}", renderer.cost_breakdown_table(&products, &input, &breakdown));
            println!();
            println!("{}", renderer.unit_cost_table(&products, &breakdown));
        }
        OutputFormat::Json => {
            let report = JsonReport {
                products: &products,
                operating_basis,
                company_basis,
                breakdown: &breakdown,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
