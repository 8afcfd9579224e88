/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::path::PathBuf;
use thiserror::Error;

/***************************************/
/*             Error types             */
/***************************************/
#[derive(Debug, Error, PartialEq)]
pub enum ElevatorError {
    #[error("request queue is empty")]
    EmptyQueue,

    #[error("building must have at least one floor, got {0}")]
    InvalidFloorCount(i32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid request '{0}', expected <calling floor>:<floor>,<floor>,...")]
    InvalidRequest(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
