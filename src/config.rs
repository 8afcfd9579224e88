/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ConfigError, Floor, Request};

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_N_FLOORS: i32 = 31;
pub const DEFAULT_TRAVEL_TIME_PER_FLOOR: u64 = 10;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub building: BuildingConfig,
    pub simulation: SimulationConfig,
    pub requests: Vec<Request>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub n_floors: i32,
    pub travel_time_per_floor: u64,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        BuildingConfig {
            n_floors: DEFAULT_N_FLOORS,
            travel_time_per_floor: DEFAULT_TRAVEL_TIME_PER_FLOOR,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub floor_pacing_ms: u64,
}

impl SimulationConfig {
    pub fn floor_pacing(&self) -> Duration {
        Duration::from_millis(self.floor_pacing_ms)
    }
}

/***************************************/
/*             Public API              */
/***************************************/
impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.building.n_floors <= 0 {
            return Err(ConfigError::Invalid(format!(
                "building.n_floors must be positive, got {}",
                self.building.n_floors
            )));
        }

        // The longest single leg runs from the ground floor to the top floor
        let longest_leg = (self.building.n_floors - 1) as u64;
        if longest_leg.checked_mul(self.building.travel_time_per_floor).is_none() {
            return Err(ConfigError::Invalid(format!(
                "building.travel_time_per_floor {} overflows a {} floor trip",
                self.building.travel_time_per_floor, self.building.n_floors
            )));
        }
        Ok(())
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml_str(&config_str)
}

/// Parses a request given as `<calling floor>:<floor>,<floor>,...`, e.g. `6:2,9,1,31`.
/// An empty destination list (`6:`) is accepted.
pub fn parse_request(text: &str) -> Result<Request, ConfigError> {
    let invalid = || ConfigError::InvalidRequest(text.to_string());

    let (calling, destinations) = text.split_once(':').ok_or_else(invalid)?;
    let calling_floor = calling.trim().parse::<Floor>().map_err(|_| invalid())?;

    let destinations = destinations.trim();
    if destinations.is_empty() {
        return Ok(Request::new(calling_floor, Vec::new()));
    }

    let destinations = destinations
        .split(',')
        .map(|floor| floor.trim().parse::<Floor>().map_err(|_| invalid()))
        .collect::<Result<Vec<Floor>, ConfigError>>()?;

    Ok(Request::new(calling_floor, destinations))
}
