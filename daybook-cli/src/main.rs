use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use daybook_core::Chart;
use daybook_finance::{month, output_file_name, MonthSummary};
use daybook_ingest::{read_orders_csv, write_journal_csv};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod prompt;
mod report;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "daybook",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DAYBOOK_BUILD_SHA"), ")"),
    about = "Turn Shopify order exports into daily manual journals"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one month of orders into a journal import file (prompts for missing inputs)
    Convert {
        /// Shopify order export CSV
        #[arg(long)]
        input: Option<PathBuf>,

        /// Target month (1-12)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Target year
        #[arg(long, value_parser = clap::value_parser!(i32).range(2020..=2030))]
        year: Option<i32>,

        /// Output file (default: <output.dir>/monthly_journal_MM_YYYY.csv)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the month summary as JSON instead of the console report
        #[arg(long)]
        json: bool,
    },

    /// Show the payment routing table, posting accounts and tax rates
    Accounts,

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write ~/.daybook/config.toml with defaults if it does not exist
    Init,
    /// Print the effective config
    Show,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("DAYBOOK_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // only `config show` insists on a readable file
    let (cfg, cfg_err) = config::config_or_default(config::load_config());
    init_tracing(&cfg.report.log_level);
    if let Some(e) = &cfg_err {
        tracing::warn!(error = %format!("{e:#}"), "config not loaded, using defaults");
    }

    let chart = Chart::shopify_uae();

    match cli.command {
        Command::Convert {
            input,
            month,
            year,
            output,
            json,
        } => {
            let input = match input {
                Some(p) => p,
                None => prompt::input_path()?,
            };
            let month = match month {
                Some(m) => m,
                None => prompt::month()?,
            };
            let year = match year {
                Some(y) => y,
                None => prompt::year(chrono::Local::now().year())?,
            };
            let output = output.unwrap_or_else(|| cfg.output.dir.join(output_file_name(month, year)));

            convert(&chart, &cfg, ConvertArgs { input, month, year, output, json })?;
        }

        Command::Accounts => report::print_chart(&chart),

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                if let Some(e) = cfg_err {
                    return Err(e);
                }
                println!("# {}", state::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

struct ConvertArgs {
    input: PathBuf,
    month: u32,
    year: i32,
    output: PathBuf,
    json: bool,
}

fn convert(chart: &Chart, cfg: &config::Config, args: ConvertArgs) -> Result<()> {
    let orders = read_orders_csv(&args.input)?;
    tracing::info!(rows = orders.len(), input = %args.input.display(), "read order export");

    let journal = month::run(&orders, args.month, args.year, chart)
        .with_context(|| format!("converting {}", args.input.display()))?;

    write_journal_csv(&args.output, &journal.lines)?;

    let summary = MonthSummary::from_month(&journal);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let currency = &cfg.report.currency;
        report::print_days(&journal, currency);
        report::print_summary(&journal, &summary, &args.output, currency, cfg.report.preview_lines);
    }

    Ok(())
}
