//! Configuration structures for the fitting room simulator
//!
//! This module contains the scenario and run configuration, the command line
//! arguments, JSON configuration file loading and the validation logic applied
//! before any scenario is simulated.

use super::{ItemCountPolicy, OutputFormat};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults used when a scenario field is not supplied
pub mod defaults {
    /// Customers in a scenario built from partial CLI input
    pub const CUSTOMERS: usize = 10;

    /// Rooms in a scenario built from partial CLI input
    pub const ROOMS: usize = 3;

    /// Item setting in a scenario built from partial CLI input (random)
    pub const ITEMS: u32 = 0;

    /// Number of scenarios collected by the interactive prompt
    pub const PROMPTED_SCENARIOS: usize = 3;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fitting-room-simulator",
    version = "0.1.0",
    about = "Fitting Room Simulator - Simulates customers queueing for store fitting rooms",
    long_about = "Simulates customers sharing a fixed pool of fitting rooms. Each customer takes the room that frees up soonest, and usage time is drawn per item. Reports average items, usage time, wait time and total elapsed time per scenario.

EXAMPLES:
    # Run the three default scenarios
    fitting-room-simulator

    # Run a single scenario
    fitting-room-simulator --customers 25 --rooms 4 --items 3

    # Enter three scenarios interactively
    fitting-room-simulator --prompt

    # Reproducible run with JSON output
    fitting-room-simulator --seed 42 --output-format json

    # Compare the merge sort variants
    fitting-room-simulator --benchmark

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of customers in a single scenario
    #[arg(
        long,
        help = "Number of customers",
        long_help = "Number of customers in a single scenario. Replaces the configured scenario list. Must be greater than 0. Default: 10"
    )]
    pub customers: Option<usize>,

    /// Number of fitting rooms in a single scenario
    #[arg(
        long,
        help = "Number of fitting rooms",
        long_help = "Number of fitting rooms in a single scenario. Replaces the configured scenario list. Must be greater than 0. Default: 3"
    )]
    pub rooms: Option<usize>,

    /// Items per customer, 0 for random
    #[arg(
        long,
        help = "Items per customer (0 for random)",
        long_help = "Number of items each customer brings in. 0 draws a random count between 1 and 6 per customer; larger values are capped at 20. Default: 0"
    )]
    pub items: Option<u32>,

    /// Collect scenarios interactively
    #[arg(long, help = "Prompt for three scenarios on standard input")]
    pub prompt: bool,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for scenario reports
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for scenario reports. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Include the per-customer timeline in reports
    #[arg(long, help = "Include each customer's wait, enter and exit times")]
    pub show_customers: bool,

    /// Run the merge sort benchmark instead of the simulation
    #[arg(long, help = "Run the merge sort benchmark and exit")]
    pub benchmark: bool,

    /// Seed used for benchmark data
    #[arg(long, help = "Random seed for benchmark data")]
    pub benchmark_seed: Option<u64>,

    /// Directory for log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// A single scenario: how many customers, how many rooms, how many items each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of customers arriving, in order
    pub customers: usize,
    /// Number of fitting rooms
    pub rooms: usize,
    /// Item setting: 0 for random, otherwise a fixed count capped at 20
    #[serde(default)]
    pub items: u32,
}

impl ScenarioConfig {
    /// Create a new scenario
    pub fn new(customers: usize, rooms: usize, items: u32) -> Self {
        Self { customers, rooms, items }
    }

    /// Item-count policy derived from the numeric setting
    pub fn item_policy(&self) -> ItemCountPolicy {
        ItemCountPolicy::from_setting(self.items)
    }

    /// Validate this scenario; `number` is its 1-based position for error messages
    pub fn validate(&self, number: usize) -> Result<(), ConfigValidationError> {
        if self.customers == 0 {
            return Err(ConfigValidationError::InvalidCustomerCount {
                scenario: number,
                value: self.customers,
            });
        }
        if self.rooms == 0 {
            return Err(ConfigValidationError::InvalidRoomCount {
                scenario: number,
                value: self.rooms,
            });
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self { customers: defaults::CUSTOMERS, rooms: defaults::ROOMS, items: defaults::ITEMS }
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Scenarios to run in order
    pub scenarios: Option<Vec<ScenarioConfig>>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for scenario reports
    pub output_format: Option<String>,

    /// Include the per-customer timeline in reports
    pub show_customers: Option<bool>,
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scenarios to run in order
    pub scenarios: Vec<ScenarioConfig>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for scenario reports
    pub output_format: String,

    /// Include the per-customer timeline in reports
    pub show_customers: bool,
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    /// No scenarios to run
    #[error("At least one scenario is required")]
    NoScenarios,

    /// Customer count is invalid
    #[error("Scenario {scenario}: customer count must be greater than 0, got {value}")]
    InvalidCustomerCount {
        /// 1-based scenario number
        scenario: usize,
        /// The invalid count
        value: usize,
    },

    /// Room count is invalid
    #[error("Scenario {scenario}: room count must be greater than 0, got {value}")]
    InvalidRoomCount {
        /// 1-based scenario number
        scenario: usize,
        /// The invalid count
        value: usize,
    },

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scenarios: vec![
                ScenarioConfig::new(10, 3, 0),
                ScenarioConfig::new(20, 3, 0),
                ScenarioConfig::new(20, 3, 0),
            ],
            seed: None,
            output_format: "text".to_string(),
            show_customers: false,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            scenarios: config_file.scenarios.unwrap_or(defaults.scenarios),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            show_customers: config_file.show_customers.unwrap_or(defaults.show_customers),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        // Any scenario flag collapses the run to a single scenario
        if args.customers.is_some() || args.rooms.is_some() || args.items.is_some() {
            config.scenarios = vec![ScenarioConfig::new(
                args.customers.unwrap_or(defaults::CUSTOMERS),
                args.rooms.unwrap_or(defaults::ROOMS),
                args.items.unwrap_or(defaults::ITEMS),
            )];
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if args.show_customers {
            config.show_customers = true;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.scenarios.is_empty() {
            return Err(ConfigValidationError::NoScenarios);
        }

        for (index, scenario) in self.scenarios.iter().enumerate() {
            scenario.validate(index + 1)?;
        }

        self.get_output_format()?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }

    /// Total number of customers across all scenarios
    pub fn total_customers(&self) -> usize {
        self.scenarios.iter().map(|s| s.customers).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(
            config.scenarios,
            vec![
                ScenarioConfig::new(10, 3, 0),
                ScenarioConfig::new(20, 3, 0),
                ScenarioConfig::new(20, 3, 0),
            ]
        );
        assert!(config.seed.is_none());
        assert_eq!(config.output_format, "text");
        assert!(!config.show_customers);
        assert_eq!(config.total_customers(), 50);
        config.validate().unwrap();
    }

    #[test]
    fn test_scenario_flags_replace_scenario_list() {
        let config =
            SimulationConfig::from_cli_args(args(&["test", "--customers", "7"])).unwrap();
        assert_eq!(config.scenarios, vec![ScenarioConfig::new(7, 3, 0)]);

        let config = SimulationConfig::from_cli_args(args(&[
            "test", "--customers", "4", "--rooms", "2", "--items", "25",
        ]))
        .unwrap();
        assert_eq!(config.scenarios, vec![ScenarioConfig::new(4, 2, 25)]);
        assert_eq!(config.scenarios[0].item_policy(), ItemCountPolicy::Fixed(20));
    }

    #[test]
    fn test_validation_rejects_zero_rooms_and_customers() {
        let mut config = SimulationConfig::default();
        config.scenarios[1].rooms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidRoomCount { scenario: 2, value: 0 })
        );

        let mut config = SimulationConfig::default();
        config.scenarios[0].customers = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidCustomerCount { scenario: 1, value: 0 })
        );
    }

    #[test]
    fn test_validation_rejects_empty_scenarios_and_bad_format() {
        let config = SimulationConfig { scenarios: Vec::new(), ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::NoScenarios));

        let config =
            SimulationConfig { output_format: "xml".to_string(), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "scenarios": [
                { "customers": 5, "rooms": 1, "items": 2 },
                { "customers": 8, "rooms": 4 }
            ],
            "seed": 99
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();

        let config = SimulationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.scenarios,
            vec![ScenarioConfig::new(5, 1, 2), ScenarioConfig::new(8, 4, 0)]
        );
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.output_format, "text");
    }

    #[test]
    fn test_config_file_errors() {
        let missing = SimulationConfig::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

        let temp_file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let unsupported = SimulationConfig::from_file(temp_file.path());
        assert!(matches!(unsupported, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_cli_overrides_file_settings() {
        use std::io::Write;

        let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        temp_file
            .write_all(br#"{ "seed": 1, "output_format": "json" }"#)
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = SimulationConfig::from_cli_args(args(&[
            "test", "--config", path.as_str(), "--seed", "2", "--show-customers",
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.output_format, "json");
        assert!(config.show_customers);
        assert_eq!(config.scenarios.len(), 3);
    }

    #[test]
    fn test_print_json_round_trip() {
        let config = SimulationConfig { seed: Some(5), ..Default::default() };
        let json = config.print_json().unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenarios, config.scenarios);
        assert_eq!(back.seed, Some(5));
    }
}
