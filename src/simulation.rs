/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::{ElevatorCar, RequestQueue};
use crate::shared::TripResult;

/// Serves every queued request in order, handing each trip to `report`.
/// Returns the number of requests processed.
pub fn run<F>(car: &mut ElevatorCar, queue: &mut RequestQueue, mut report: F) -> usize
where
    F: FnMut(&TripResult),
{
    info!("Starting simulation with {} queued request(s)", queue.len());

    let mut trips = 0;
    let mut total_time: u64 = 0;
    while !queue.is_empty() {
        let trip = car.process_next_request(queue);
        total_time = total_time.saturating_add(trip.elapsed_time);
        trips += 1;
        report(&trip);
    }

    info!("Served {} request(s) in {} time units", trips, total_time);
    trips
}
