// Moat CLI
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use moat_analysis::io::{read_source, render, write_report};
use moat_analysis::{analyze, analyze_batch, AnalysisOptions};
use moat_core::config::{CliOverrides, MoatConfig, ReportFormat};
use moat_core::constants::VERSION;
use moat_core::errors::MoatErrorCode;
use moat_core::tracing::init_tracing;
use moat_core::Target;

#[derive(Parser)]
#[command(name = "moat")]
#[command(version = VERSION)]
#[command(
    about = "Bayesian quality-of-investment scoring over markdown financial tables",
    long_about = None
)]
struct Cli {
    /// Directory searched for moat.toml (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one security and write its evidence trace
    Analyze {
        /// Merged markdown report to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// 6-digit security code of the target row
        #[arg(short, long)]
        code: Option<String>,

        /// Display name for the report title
        #[arg(short, long)]
        name: Option<String>,

        /// Prior probability of Quality before any evidence
        #[arg(long, value_name = "P")]
        base_rate: Option<f64>,

        /// Output format (markdown or json)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Print non-fatal extraction diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze several securities over the same source, one report each
    Batch {
        /// Merged markdown report to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Security codes to analyze
        #[arg(short, long = "code", value_name = "CODE", required = true)]
        codes: Vec<String>,

        /// Prior probability of Quality before any evidence
        #[arg(long, value_name = "P")]
        base_rate: Option<f64>,

        /// Output format (markdown or json)
        #[arg(short, long)]
        format: Option<String>,

        /// Directory for <CODE>.md / <CODE>.json reports (defaults to stdout)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    match cli.command {
        Commands::Analyze {
            input,
            code,
            name,
            base_rate,
            format,
            output,
            verbose,
        } => {
            let overrides = CliOverrides {
                base_rate,
                target_code: code,
                target_name: name,
                report_format: format,
            };
            let config = load_config(&root, &overrides)?;
            let source = read_source(&input)?;
            let target = config.target();
            tracing::debug!(input = %input.display(), %target, "starting analysis");

            let result = analyze(&source, &target, &AnalysisOptions::from_config(&config));
            if verbose {
                for error in &result.errors {
                    eprintln!("{}", error.coded_string());
                }
            }

            let report = render(&result.data, config.report.effective_format()?)?;
            emit(output.as_deref(), &report)?;
        }

        Commands::Batch {
            input,
            codes,
            base_rate,
            format,
            output_dir,
        } => {
            let overrides = CliOverrides {
                base_rate,
                report_format: format,
                ..Default::default()
            };
            let config = load_config(&root, &overrides)?;
            let report_format = config.report.effective_format()?;

            let mut targets = Vec::with_capacity(codes.len());
            for code in codes {
                if !Target::is_valid_code(&code) {
                    bail!("{code:?} is not a 6-digit security code");
                }
                targets.push(Target::new(code.clone(), code));
            }

            let source = read_source(&input)?;
            let results = analyze_batch(&source, &targets, &AnalysisOptions::from_config(&config));

            if let Some(dir) = &output_dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            for result in &results {
                let report = render(&result.data, report_format)?;
                match &output_dir {
                    Some(dir) => {
                        let code = &result.data.target.code;
                        let file = format!("{code}.{}", extension(report_format));
                        write_report(&dir.join(file), &report)?;
                    }
                    None => emit(None, &report)?,
                }
            }
            tracing::info!(reports = results.len(), "batch complete");
        }
    }

    Ok(())
}

fn load_config(root: &Path, overrides: &CliOverrides) -> Result<MoatConfig> {
    MoatConfig::load(root, Some(overrides))
        .with_context(|| format!("Failed to load configuration from {}", root.display()))
}

fn extension(format: ReportFormat) -> &'static str {
    match format {
        ReportFormat::Markdown => "md",
        ReportFormat::Json => "json",
    }
}

fn emit(output: Option<&Path>, report: &str) -> Result<()> {
    match output {
        Some(path) => write_report(path, report)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(report.as_bytes())
                .context("Failed to write report to stdout")?;
            if !report.ends_with('\n') {
                writeln!(stdout).context("Failed to write report to stdout")?;
            }
        }
    }
    Ok(())
}
