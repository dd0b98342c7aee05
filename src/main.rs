use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use petroleum_unit_converter::app::{self, AppError};
use petroleum_unit_converter::batch::BatchRequest;
use petroleum_unit_converter::config::{self, DEFAULT_CONFIG_PATH};
use petroleum_unit_converter::field_calcs;

/// Petroleum engineering unit converter.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all categories
    Categories,
    /// List the units of a category
    Units { category: String },
    /// Explain common petroleum units
    Glossary,
    /// Convert a single value
    Convert {
        category: String,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Multiplicative correction applied to linear categories
        #[arg(long, conflicts_with_all = ["pvt_pressure", "pvt_temp"])]
        correction: Option<f64>,
        /// Reservoir pressure [psia] for the GOR PVT correction
        #[arg(long, allow_negative_numbers = true)]
        pvt_pressure: Option<f64>,
        /// Reservoir temperature [°F] for the GOR PVT correction
        #[arg(long, allow_negative_numbers = true)]
        pvt_temp: Option<f64>,
    },
    /// Convert the `value` column of a CSV file
    Batch {
        category: String,
        from: String,
        to: String,
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 1.0)]
        correction: f64,
    },
    /// Drilling and reservoir field calculations
    Calc {
        #[command(subcommand)]
        calc: CalcCommand,
    },
    /// Interactive menu (default)
    Interactive,
}

#[derive(Debug, Subcommand)]
enum CalcCommand {
    /// Hydrostatic pressure [psi] = TVD × MW × 0.052
    Hydrostatic {
        #[arg(long)]
        tvd_ft: f64,
        #[arg(long)]
        mud_ppg: f64,
    },
    /// Drill pipe volume [bbl] = L × ID² / 1029.4
    PipeVolume {
        #[arg(long)]
        length_ft: f64,
        #[arg(long)]
        id_in: f64,
    },
    /// PVT correction factor = (P / 14.7) × ((T + 460) / 520)
    Pvt {
        #[arg(long)]
        pressure_psia: f64,
        #[arg(long, allow_negative_numbers = true)]
        temp_f: f64,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Categories => app::print_categories(),
        Command::Units { category } => app::print_units(&category)?,
        Command::Glossary => app::print_glossary(),
        Command::Convert {
            category,
            from,
            to,
            value,
            correction,
            pvt_pressure,
            pvt_temp,
        } => {
            let correction = app::resolve_correction(correction, pvt_pressure, pvt_temp)?;
            app::run_convert(&cfg, &category, &from, &to, value, correction)?;
        }
        Command::Batch {
            category,
            from,
            to,
            input,
            output,
            correction,
        } => {
            let request = BatchRequest {
                category: &category,
                from_unit: &from,
                to_unit: &to,
                correction,
            };
            app::run_batch(&input, output.as_deref(), &request)?;
        }
        Command::Calc { calc } => match calc {
            CalcCommand::Hydrostatic { tvd_ft, mud_ppg } => {
                let p = field_calcs::hydrostatic_pressure_psi(tvd_ft, mud_ppg)?;
                println!("Hydrostatic pressure: {p:.2} psi");
            }
            CalcCommand::PipeVolume { length_ft, id_in } => {
                let v = field_calcs::drill_pipe_volume_bbl(length_ft, id_in)?;
                println!("Drill pipe volume: {v:.2} bbl");
            }
            CalcCommand::Pvt {
                pressure_psia,
                temp_f,
            } => {
                let c = field_calcs::pvt_correction(pressure_psia, temp_f)?;
                println!("PVT correction factor: {c:.4}");
            }
        },
        Command::Interactive => app::run(&mut cfg, &cli.config)?,
    }
    Ok(())
}
