use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use impex_parser::{
    parse_line_items, parse_shipment_lines, Catalog, DelimiterChoice, InvoiceLineItem,
    ParseSummary, ShipmentLine,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse pasted shipment and invoice spreadsheets", long_about = None)]
struct Cli {
    /// Option catalog (TOML or JSON); falls back to IMPEX_CATALOG
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse pasted shipment rows
    Shipments(PasteArgs),
    /// Parse pasted invoice line items
    LineItems(PasteArgs),
}

#[derive(Args, Debug)]
struct PasteArgs {
    /// File holding the pasted text; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// auto, comma, tab, semicolon, pipe or space
    #[arg(long, default_value = "auto")]
    delimiter: DelimiterChoice,
    /// Treat the first non-blank line as a header
    #[arg(long)]
    skip_header: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,
    /// Exit with status 2 when any row is flagged
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog)?;

    match cli.command {
        Command::Shipments(args) => handle_shipments(&catalog, &args),
        Command::LineItems(args) => handle_line_items(&catalog, &args),
    }
}

fn load_catalog(flag: Option<PathBuf>) -> Result<Catalog> {
    let path = flag.or_else(|| env::var_os("IMPEX_CATALOG").map(PathBuf::from));
    match path {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => {
            warn!("No catalog configured; option lookups will not resolve");
            Ok(Catalog::default())
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn handle_shipments(catalog: &Catalog, args: &PasteArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_ref())?;
    let options = catalog.parse_options(args.delimiter, args.skip_header);
    let lines = parse_shipment_lines(&text, &options);
    let summary = ParseSummary::from_lines(&lines);

    match args.output {
        OutputFormat::Json => print_json(&lines)?,
        OutputFormat::Table => println!("{}", shipment_table(&lines)),
    }

    Ok(finish(summary, args.strict))
}

fn handle_line_items(catalog: &Catalog, args: &PasteArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_ref())?;
    let options = catalog.line_item_options(args.delimiter, args.skip_header);
    let items = parse_line_items(&text, &options);
    let summary = ParseSummary::from_items(&items);

    match args.output {
        OutputFormat::Json => print_json(&items)?,
        OutputFormat::Table => println!("{}", line_item_table(&items)),
    }

    Ok(finish(summary, args.strict))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize rows")?;
    println!("{rendered}");
    Ok(())
}

fn finish(summary: ParseSummary, strict: bool) -> ExitCode {
    info!(
        total = summary.total,
        accepted = summary.accepted,
        flagged = summary.flagged,
        "Paste parsed"
    );
    if strict && summary.flagged > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn shipment_table(lines: &[ShipmentLine]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Layout", "Supplier", "Invoice", "Date", "Category", "Value", "Currency",
        "Incoterm", "Errors",
    ]);
    for (idx, line) in lines.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            line.format.to_string(),
            cell(line.supplier_id.as_deref()),
            cell(line.invoice_number.as_deref()),
            cell(line.invoice_date),
            cell(line.goods_category.as_deref()),
            cell(line.invoice_value),
            cell(line.invoice_currency.as_deref()),
            cell(line.incoterm.as_deref()),
            line.errors.join("; "),
        ]);
    }
    table
}

fn line_item_table(items: &[InvoiceLineItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Item", "Part No", "Name", "Qty", "Unit Price", "Total", "Errors",
    ]);
    for (idx, item) in items.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            cell(item.item_id.as_deref()),
            cell(item.part_number.as_deref()),
            cell(item.item_name.as_deref()),
            cell(item.quantity),
            cell(item.unit_price),
            cell(item.line_total()),
            item.errors.join("; "),
        ]);
    }
    table
}
