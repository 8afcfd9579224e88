/* 3rd party libraries */
use env_logger::Env;
use log::info;

/* Custom libraries */
use elevator::{ElevatorCar, RequestQueue, SleepPacing};

/* Modules */
mod cli;
mod config;
mod elevator;
mod shared;
mod simulation;

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load the configuration
    let matches = cli::build_cli().get_matches();
    let config = unwrap_or_exit!(cli::resolve_config(&matches));
    info!(
        "Building with {} floors, travel time {} per floor",
        config.building.n_floors, config.building.travel_time_per_floor
    );

    // Create the car, paced for console playback
    let car = unwrap_or_exit!(ElevatorCar::new(&config.building));
    let mut car = car.with_floor_move_hook(SleepPacing::new(config.simulation.floor_pacing()));

    // Queue the passenger calls
    let mut queue = RequestQueue::new();
    queue.extend(config.requests);

    // Elevator simulation loop
    simulation::run(&mut car, &mut queue, |trip| {
        if !trip.is_empty() {
            println!("{}", trip);
        }
    });
}
