pub mod error;
pub mod macros;
pub mod structs;

pub use error::ConfigError;
pub use error::ElevatorError;
pub use structs::Floor;
pub use structs::Request;
pub use structs::TripResult;
