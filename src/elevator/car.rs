/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::elevator::{FloorMoveHook, NoPacing, RequestQueue};
use crate::shared::{ElevatorError, Floor, TripResult};

/***************************************/
/*             Constants               */
/***************************************/
pub const GROUND_FLOOR: Floor = 1;

/**
 * A single elevator car serving one request at a time.
 *
 * Travelling to the calling floor for pickup is free. Only the legs between the calling
 * floor and each destination are billed, at `travel_time_per_floor` per floor of distance.
 * Destinations outside `1..=n_floors` are dropped without moving the car.
 *
 * # Fields
 * - `current_floor`:           Where the car is. Starts at the ground floor and is kept between requests.
 * - `n_floors`:                Highest reachable floor.
 * - `travel_time_per_floor`:   Cost of moving one floor.
 * - `floor_move_hook`:         Invoked after each billed move, e.g. for console pacing.
 */
pub struct ElevatorCar {
    current_floor: Floor,
    n_floors: Floor,
    travel_time_per_floor: u64,
    floor_move_hook: Box<dyn FloorMoveHook>,
}

impl ElevatorCar {
    pub fn new(config: &BuildingConfig) -> Result<ElevatorCar, ElevatorError> {
        if config.n_floors < GROUND_FLOOR {
            return Err(ElevatorError::InvalidFloorCount(config.n_floors));
        }

        Ok(ElevatorCar {
            current_floor: GROUND_FLOOR,
            n_floors: config.n_floors,
            travel_time_per_floor: config.travel_time_per_floor,
            floor_move_hook: Box::new(NoPacing),
        })
    }

    pub fn with_floor_move_hook<H: FloorMoveHook + 'static>(mut self, hook: H) -> ElevatorCar {
        self.floor_move_hook = Box::new(hook);
        self
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn n_floors(&self) -> Floor {
        self.n_floors
    }

    pub fn process_next_request(&mut self, queue: &mut RequestQueue) -> TripResult {
        // An empty queue is the only dequeue failure, and yields an empty trip
        let request = match queue.dequeue_oldest() {
            Ok(request) => request,
            Err(_) => return TripResult::default(),
        };

        info!("Traveling to floor {} for passenger pickup", request.calling_floor);
        self.current_floor = request.calling_floor;

        let mut trip = TripResult::default();
        for floor in request.destinations {
            if !self.is_valid_floor(floor) {
                debug!("Skipping floor {} outside 1..={}", floor, self.n_floors);
                continue;
            }

            info!("Traveling to floor {} from floor {}", floor, self.current_floor);
            let from = self.current_floor;
            let distance = self.move_to(floor);

            trip.visited_floors.push(floor);
            // Saturates instead of wrapping for extreme travel times
            let leg_time = distance.saturating_mul(self.travel_time_per_floor);
            trip.elapsed_time = trip.elapsed_time.saturating_add(leg_time);

            self.floor_move_hook.on_floor_move(from, floor);
        }

        trip
    }

    fn is_valid_floor(&self, floor: Floor) -> bool {
        (GROUND_FLOOR..=self.n_floors).contains(&floor)
    }

    // Returns the number of floors travelled.
    fn move_to(&mut self, floor: Floor) -> u64 {
        let distance = self.current_floor.abs_diff(floor);
        self.current_floor = floor;
        distance as u64
    }
}
