pub mod car;
pub mod pacing;
pub mod request_queue;

mod car_tests;

pub use car::ElevatorCar;
pub use pacing::{FloorMoveHook, NoPacing, SleepPacing};
pub use request_queue::RequestQueue;
