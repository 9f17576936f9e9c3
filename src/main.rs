use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use sinerand::compare::GeneratorReport;
use sinerand::random::sine_rand::DEFAULT_CAPACITY;
use sinerand::{compare, CompareConfig, ComparisonReport, RunBoundary};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Boundary {
    Linear,
    Wrapping,
}

impl From<Boundary> for RunBoundary {
    fn from(value: Boundary) -> Self {
        match value {
            Boundary::Linear => RunBoundary::Linear,
            Boundary::Wrapping => RunBoundary::Wrapping,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sinerand",
    about = "Compare the sine PRNG with StdRng using runs and chi-squared tests"
)]
struct Cli {
    /// Seed of the sine generator (defaults to the current UNIX time).
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<f64>,

    /// Values drawn from each generator.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    samples: usize,

    /// Seed of the reference StdRng.
    #[arg(long, default_value_t = 0)]
    reference_seed: u64,

    /// Significance level of both tests.
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Run counting rule of the runs test.
    #[arg(long, value_enum, default_value_t = Boundary::Linear)]
    boundary: Boundary,

    /// Number of integer draws in [0, 10] to show.
    #[arg(long, default_value_t = 10)]
    ints: usize,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init()?;

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(time_seed);

    let config = CompareConfig {
        seed,
        reference_seed: cli.reference_seed,
        samples: cli.samples,
        alpha: cli.alpha,
        boundary: cli.boundary.into(),
        int_draws: cli.ints,
        ..CompareConfig::default()
    };
    info!(seed, samples = config.samples, "running comparison");

    let report = compare(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_console_table(&report);
    }

    if report.all_pass() {
        info!("both generators passed both tests");
    } else {
        warn!(
            sine_runs = report.sine.runs_pass,
            sine_chi_squared = report.sine.chi_squared_pass,
            std_runs = report.reference.runs_pass,
            std_chi_squared = report.reference.chi_squared_pass,
            "at least one test failed"
        );
    }

    Ok(())
}

fn time_seed() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(1.0)
}

fn print_console_table(report: &ComparisonReport) {
    println!(
        "Seed: {} | Samples: {} | alpha: {} | Runs: {:?}",
        report.config.seed, report.config.samples, report.config.alpha, report.config.boundary
    );
    println!(
        "{:<8} {:>10} {:>10} {:>6} {:>12} {:>10} {:>6}",
        "Gen", "|Z|", "p", "Pass", "Chi-squared", "p", "Pass"
    );
    println!("{}", "-".repeat(68));
    print_row(&report.reference);
    print_row(&report.sine);
    println!("{}", "-".repeat(68));
    println!(
        "{:<8} {:>10.4} {:>10} {:>6} {:>12.3} {:>10} {:>6}",
        "ref", report.z_critical, "", "", report.chi_squared_critical, "", ""
    );

    println!();
    println!("Histogram (10 bins):");
    println!("  std : {:?}", report.reference.histogram);
    println!("  sine: {:?}", report.sine.histogram);

    if !report.sample_ints.is_empty() {
        let ints: Vec<String> = report.sample_ints.iter().map(|v| v.to_string()).collect();
        println!();
        println!(
            "draw_int({}, {}): {}",
            report.config.int_min,
            report.config.int_max,
            ints.join(", ")
        );
    }
}

fn print_row(gen_report: &GeneratorReport) {
    println!(
        "{:<8} {:>10.4} {:>10.4} {:>6} {:>12.3} {:>10.4} {:>6}",
        gen_report.name,
        gen_report.runs.z_abs(),
        gen_report.runs_p_value,
        if gen_report.runs_pass { "yes" } else { "no" },
        gen_report.chi_squared,
        gen_report.chi_squared_p_value,
        if gen_report.chi_squared_pass { "yes" } else { "no" }
    );
}
