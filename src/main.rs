// Fitting Room Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/fitting-room-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/fitting-room-simulator --customers 25 --rooms 4 --items 3 --seed 42 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use fitting_room_simulator::benchmark::BenchmarkRunner;
use fitting_room_simulator::simulation::{prompt_scenarios, render_reports, LoggingConfig, LoggingGuard};
use fitting_room_simulator::types::config::{defaults, CliArgs};
use fitting_room_simulator::types::SimulationConfig;
use fitting_room_simulator::SimulationOrchestrator;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Keep the guard alive for the whole run so file logs are flushed on exit
    let _logging_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if args.benchmark {
        run_benchmark(args.benchmark_seed);
        return;
    }

    info!("Starting Fitting Room Simulator");

    let config = match load_configuration(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_simulation(config) {
        error!("Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    info!("Fitting Room Simulator completed successfully");
}

/// Initialize logging based on CLI flags
fn init_logging(args: &CliArgs) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    let mut logging = if args.debug {
        LoggingConfig::debug()
    } else if args.verbose {
        LoggingConfig::verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN)
    };

    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    logging.init()
}

/// Merge defaults, config file, CLI flags and (optionally) prompted scenarios, then validate
fn load_configuration(args: &CliArgs) -> anyhow::Result<SimulationConfig> {
    let mut config =
        SimulationConfig::from_cli_args(args.clone()).context("could not build configuration")?;

    if args.prompt {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        config.scenarios = prompt_scenarios(&mut input, &mut output, defaults::PROMPTED_SCENARIOS)
            .context("could not read scenarios")?;
    }

    config.validate().context("configuration validation failed")?;
    Ok(config)
}

/// Run every scenario and print the reports to stdout
fn run_simulation(config: SimulationConfig) -> anyhow::Result<()> {
    let format = config.get_output_format()?;

    let mut orchestrator = SimulationOrchestrator::new(config)?;
    info!(run_id = %orchestrator.run_id(), "Running {} scenarios", orchestrator.config().scenarios.len());

    let reports = orchestrator.run_all()?;
    let rendered = render_reports(&reports, format).context("could not render reports")?;
    println!("{}", rendered);
    Ok(())
}

/// Time every sort variant and print the results
fn run_benchmark(seed: Option<u64>) {
    info!("Starting merge sort benchmark");
    let mut runner = match seed {
        Some(seed) => BenchmarkRunner::with_seed(seed),
        None => BenchmarkRunner::new(),
    };

    let report = runner.run();
    println!("{}", report.render_text());
    if !report.all_sorted() {
        error!("At least one sort variant produced unordered output");
        process::exit(1);
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    for (index, scenario) in config.scenarios.iter().enumerate() {
        eprintln!(
            "  Scenario {}: {} customers, {} dressing rooms, items {}",
            index + 1,
            scenario.customers,
            scenario.rooms,
            scenario.item_policy()
        );
    }
    eprintln!("  Output Format: {}", config.output_format);
    eprintln!("  Show Customers: {}", config.show_customers);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
