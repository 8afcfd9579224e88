/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{Arg, ArgMatches, Command};
use log::{debug, warn};
use std::path::Path;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{self, Config, DEFAULT_CONFIG_PATH};
use crate::shared::ConfigError;

/***************************************/
/*             Public API              */
/***************************************/
pub fn build_cli() -> Command<'static> {
    Command::new("elevator-sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates a single elevator car serving pickup requests in FIFO order")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("Configuration file [default: config.toml]"),
        )
        .arg(
            Arg::new("floors")
                .short('n')
                .long("floors")
                .value_name("N")
                .takes_value(true)
                .help("Number of floors in the building"),
        )
        .arg(
            Arg::new("travel-time")
                .short('t')
                .long("travel-time")
                .value_name("T")
                .takes_value(true)
                .help("Travel time per floor"),
        )
        .arg(
            Arg::new("pace-ms")
                .short('p')
                .long("pace-ms")
                .value_name("MS")
                .takes_value(true)
                .help("Delay in milliseconds after each floor move"),
        )
        .arg(
            Arg::new("request")
                .short('r')
                .long("request")
                .value_name("CALL:DEST,...")
                .takes_value(true)
                .multiple_occurrences(true)
                .allow_hyphen_values(true)
                .help("Pickup request, e.g. 6:2,9,1,31. Replaces the requests in the config file"),
        )
}

/// Loads the configuration file and applies command line overrides on top of it.
pub fn resolve_config(matches: &ArgMatches) -> Result<Config, ConfigError> {
    resolve_config_with_default(matches, Path::new(DEFAULT_CONFIG_PATH))
}

pub fn resolve_config_with_default(
    matches: &ArgMatches,
    default_path: &Path,
) -> Result<Config, ConfigError> {
    let mut config = load_config_or_default(matches.value_of("config").map(Path::new), default_path)?;

    apply_overrides(&mut config, matches)?;
    config.validate()?;
    Ok(config)
}

/// An explicitly given file must exist. A missing default file yields the built-in defaults.
pub fn load_config_or_default(
    explicit_path: Option<&Path>,
    default_path: &Path,
) -> Result<Config, ConfigError> {
    match explicit_path {
        Some(path) => config::load_config(path),
        None if default_path.exists() => config::load_config(default_path),
        None => {
            warn!("No {} found, using built-in defaults", default_path.display());
            Ok(Config::default())
        }
    }
}

pub fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> Result<(), ConfigError> {
    if let Some(n_floors) = parse_value(matches, "floors")? {
        config.building.n_floors = n_floors;
    }
    if let Some(travel_time) = parse_value(matches, "travel-time")? {
        config.building.travel_time_per_floor = travel_time;
    }
    if let Some(pacing) = parse_value(matches, "pace-ms")? {
        config.simulation.floor_pacing_ms = pacing;
    }
    if let Some(requests) = matches.values_of("request") {
        config.requests = requests
            .map(config::parse_request)
            .collect::<Result<Vec<_>, ConfigError>>()?;
        debug!("Using {} request(s) from the command line", config.requests.len());
    }
    Ok(())
}

fn parse_value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, ConfigError> {
    match matches.value_of(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("invalid value '{}' for --{}", value, name))),
        None => Ok(None),
    }
}
