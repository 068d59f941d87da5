//! Investment Calculator CLI
//!
//! Command-line front end for the SIP, SWP and lump-sum calculators

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use investment_calculator::calculator::{depletion_schedule, growth_schedule, write_schedule_csv};
use investment_calculator::render::format_amount;
use investment_calculator::scenario::{ScenarioPoint, SweepParameter};
use investment_calculator::{
    CalculatorMode, CalculatorShell, DisplayConfig, OutputFormat, ProjectionInput, Report,
    ScenarioRunner, Submission,
};

#[derive(Debug, Parser)]
#[command(name = "investment_calculator", version, about = "SIP, SWP and lump-sum investment calculator")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Currency symbol placed before amounts
    #[arg(long, global = true)]
    currency: Option<String>,

    /// JSON display configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Systematic investment plan: monthly contributions compounded monthly
    Sip {
        /// Monthly investment
        #[arg(long)]
        contribution: Option<String>,
        /// Expected annual return (%)
        #[arg(long)]
        rate: Option<String>,
        /// Investment duration (years)
        #[arg(long)]
        years: Option<String>,
        #[command(flatten)]
        schedule: ScheduleArgs,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Systematic withdrawal plan: monthly withdrawals from a compounding balance
    Swp {
        /// Initial investment
        #[arg(long)]
        initial: Option<String>,
        /// Monthly withdrawal
        #[arg(long)]
        withdrawal: Option<String>,
        /// Expected annual return (%)
        #[arg(long)]
        rate: Option<String>,
        /// Withdrawal duration (years)
        #[arg(long)]
        years: Option<String>,
        #[command(flatten)]
        schedule: ScheduleArgs,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// One-time investment compounded annually
    LumpSum {
        /// Principal amount
        #[arg(long)]
        principal: Option<String>,
        /// Expected annual return (%)
        #[arg(long)]
        rate: Option<String>,
        /// Investment duration (years, fractions allowed)
        #[arg(long)]
        years: Option<String>,
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
struct ScheduleArgs {
    /// Write the month-by-month schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Date of the first month in the schedule (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Args)]
struct SweepArgs {
    /// Also project at these annual rates, e.g. 6,8,10
    #[arg(long, value_delimiter = ',')]
    sweep_rates: Vec<f64>,

    /// Also project over these durations in years, e.g. 5,10,20
    #[arg(long, value_delimiter = ',')]
    sweep_years: Vec<f64>,
}

/// Mode, raw field text and the optional extras of a subcommand
fn collect(command: Command) -> (CalculatorMode, HashMap<String, String>, ScheduleArgs, SweepArgs) {
    let mut fields = HashMap::new();
    let mut put = |name: &str, value: Option<String>| {
        if let Some(value) = value {
            fields.insert(name.to_string(), value);
        }
    };

    match command {
        Command::Sip { contribution, rate, years, schedule, sweep } => {
            put("contribution", contribution);
            put("rate", rate);
            put("years", years);
            (CalculatorMode::Sip, fields, schedule, sweep)
        }
        Command::Swp { initial, withdrawal, rate, years, schedule, sweep } => {
            put("initial", initial);
            put("withdrawal", withdrawal);
            put("rate", rate);
            put("years", years);
            (CalculatorMode::Swp, fields, schedule, sweep)
        }
        Command::LumpSum { principal, rate, years, sweep } => {
            put("principal", principal);
            put("rate", rate);
            put("years", years);
            (CalculatorMode::LumpSum, fields, ScheduleArgs::default(), sweep)
        }
    }
}

fn load_config(cli: &Cli) -> Result<DisplayConfig> {
    let mut config = match &cli.config {
        Some(path) => DisplayConfig::from_json_path(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => DisplayConfig::default(),
    };
    if let Some(symbol) = &cli.currency {
        config = config.with_currency(symbol.clone());
    }
    Ok(config)
}

fn write_schedule(input: &ProjectionInput, args: &ScheduleArgs) -> Result<()> {
    let Some(path) = &args.schedule else {
        return Ok(());
    };

    if !input.mode().is_periodic() {
        bail!("{} has no monthly schedule", input.mode());
    }

    let rows = match input {
        ProjectionInput::Sip(i) => growth_schedule(i, args.start_date),
        ProjectionInput::Swp(i) => depletion_schedule(i, args.start_date),
        ProjectionInput::LumpSum(_) => Vec::new(),
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create schedule file {}", path.display()))?;
    write_schedule_csv(&rows, BufWriter::new(file))?;

    eprintln!("Schedule ({} months) written to: {}", rows.len(), path.display());
    Ok(())
}

fn print_sweep(
    parameter: SweepParameter,
    points: &[ScenarioPoint],
    config: &DisplayConfig,
    format: OutputFormat,
) -> Result<()> {
    if points.is_empty() {
        return Ok(());
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(points)?);
        return Ok(());
    }

    println!("\nSensitivity by {}:", parameter.label());
    println!("{:>18} {:>20}", parameter.label(), "Result");
    println!("{}", "-".repeat(39));
    for point in points {
        println!(
            "{:>18} {:>20}",
            format_amount(point.parameter, 2),
            format!("{}{}", config.currency_symbol, format_amount(point.result.headline(), 2)),
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let format = OutputFormat::from(cli.format);
    let (mode, fields, schedule, sweep) = collect(cli.command);

    let shell = CalculatorShell::new(config);
    let report: Report = match shell.calculate(mode, &fields)? {
        Submission::Calculated(report) => report,
        Submission::Skipped { missing } => {
            warn!("Nothing to calculate for {}", mode);
            println!("Nothing to calculate: missing {}", missing.join(", "));
            return Ok(());
        }
    };

    print!("{}", shell.renderer(format).render(&report)?);

    write_schedule(&report.input, &schedule)?;

    let runner = ScenarioRunner::new(report.input);
    if !sweep.sweep_rates.is_empty() {
        info!("Sweeping {} rates", sweep.sweep_rates.len());
        let points = runner.run_rates(&sweep.sweep_rates);
        print_sweep(SweepParameter::Rate, &points, shell.config(), format)?;
    }
    if !sweep.sweep_years.is_empty() {
        info!("Sweeping {} durations", sweep.sweep_years.len());
        let points = runner.run_durations(&sweep.sweep_years);
        print_sweep(SweepParameter::Years, &points, shell.config(), format)?;
    }

    Ok(())
}
