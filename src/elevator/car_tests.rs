/*
 * Unit tests for the elevator car
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_init
 * - test_car_invalid_floor_count
 * - test_car_empty_queue_is_noop
 * - test_car_free_pickup
 * - test_car_bounds_filtering
 * - test_car_empty_destinations
 * - test_car_zig_zag_cost
 * - test_car_custom_building
 * - test_car_two_requests_end_to_end
 * - test_car_extreme_travel_time_saturates
 * - test_car_hook_called_per_move
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::config::BuildingConfig;
    use crate::elevator::{ElevatorCar, FloorMoveHook, RequestQueue};
    use crate::shared::{ElevatorError, Floor, TripResult};

    fn setup_car() -> (ElevatorCar, RequestQueue) {
        // Default configuration: 31 floors, 10 per floor
        let config = BuildingConfig::default();

        (ElevatorCar::new(&config).unwrap(), RequestQueue::new())
    }

    struct RecordingHook {
        moves: Rc<RefCell<Vec<(Floor, Floor)>>>,
    }

    impl FloorMoveHook for RecordingHook {
        fn on_floor_move(&mut self, from: Floor, to: Floor) {
            self.moves.borrow_mut().push((from, to));
        }
    }

    #[test]
    fn test_car_init() {
        // Purpose: The car starts at the ground floor with the configured building size

        // Arrange
        let (car, _queue) = setup_car();

        // Assert
        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.n_floors(), 31);
    }

    #[test]
    fn test_car_invalid_floor_count() {
        // Purpose: A building without floors is rejected at construction

        for n_floors in [0, -4] {
            // Arrange
            let config = BuildingConfig {
                n_floors,
                travel_time_per_floor: 10,
            };

            // Act
            let result = ElevatorCar::new(&config);

            // Assert
            assert!(matches!(result, Err(ElevatorError::InvalidFloorCount(n)) if n == n_floors));
        }
    }

    #[test]
    fn test_car_empty_queue_is_noop() {
        // Purpose: Processing an empty queue returns an empty trip and leaves the car alone, every time

        // Arrange
        let (mut car, mut queue) = setup_car();

        for _ in 0..3 {
            // Act
            let trip = car.process_next_request(&mut queue);

            // Assert
            assert_eq!(
                trip,
                TripResult {
                    elapsed_time: 0,
                    visited_floors: vec![],
                }
            );
            assert_eq!(car.current_floor(), 1);
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn test_car_free_pickup() {
        // Purpose: Travel from the current floor to the calling floor is not billed

        // Arrange
        let (mut car, mut queue) = setup_car();
        queue.add_request(6, vec![2]);

        // Act
        let trip = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(trip.elapsed_time, 40);
        assert_eq!(trip.visited_floors, vec![2]);
        assert_eq!(car.current_floor(), 2);
    }

    #[test]
    fn test_car_bounds_filtering() {
        // Purpose: Floors outside the building are dropped without cost or movement

        // Arrange
        let (mut car, mut queue) = setup_car();
        queue.add_request(1, vec![0, 2, 32, 9]);

        // Act
        let trip = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(trip.visited_floors, vec![2, 9]);
        assert_eq!(trip.elapsed_time, (1 + 7) * 10);
        assert_eq!(car.current_floor(), 9);
    }

    #[test]
    fn test_car_empty_destinations() {
        // Purpose: A request without destinations costs nothing, but the car still moves to the calling floor

        // Arrange
        let (mut car, mut queue) = setup_car();
        queue.add_request(17, vec![]);
        queue.add_request(4, vec![-3, 40]);

        // Act
        let empty = car.process_next_request(&mut queue);
        let floor_after_empty = car.current_floor();
        let all_invalid = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(empty, TripResult::default());
        assert_eq!(floor_after_empty, 17);
        assert_eq!(all_invalid, TripResult::default());
        assert_eq!(car.current_floor(), 4);
    }

    #[test]
    fn test_car_zig_zag_cost() {
        // Purpose: Destinations are visited in the given order and every leg is billed by its distance

        // Arrange
        let (mut car, mut queue) = setup_car();
        queue.add_request(10, vec![20, 5, 5, 25, 1]);

        // Act
        let trip = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(trip.visited_floors, vec![20, 5, 5, 25, 1]);
        assert_eq!(trip.elapsed_time, (10 + 15 + 0 + 20 + 24) * 10);
    }

    #[test]
    fn test_car_custom_building() {
        // Purpose: Building size and travel time come from the configuration

        // Arrange
        let config = BuildingConfig {
            n_floors: 5,
            travel_time_per_floor: 3,
        };
        let mut car = ElevatorCar::new(&config).unwrap();
        let mut queue = RequestQueue::new();
        queue.add_request(2, vec![5, 6, 1]);

        // Act
        let trip = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(trip.visited_floors, vec![5, 1]);
        assert_eq!(trip.elapsed_time, (3 + 4) * 3);
    }

    #[test]
    fn test_car_two_requests_end_to_end() {
        // Purpose: Requests are served in order, and repositioning between requests is free

        // Arrange
        let (mut car, mut queue) = setup_car();
        queue.add_request(6, vec![2, 9, 1, 31]);
        queue.add_request(13, vec![3, 6, 9, 30, 17]);

        // Act
        let first = car.process_next_request(&mut queue);
        let floor_after_first = car.current_floor();
        let second = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(first.visited_floors, vec![2, 9, 1, 31]);
        assert_eq!(first.elapsed_time, 490);
        assert_eq!(floor_after_first, 31);
        assert_eq!(second.visited_floors, vec![3, 6, 9, 30, 17]);
        assert_eq!(second.elapsed_time, 500);
        assert_eq!(car.current_floor(), 17);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_car_extreme_travel_time_saturates() {
        // Purpose: A travel time too large for the trip sum caps the elapsed time instead of panicking

        // Arrange
        let config = BuildingConfig {
            n_floors: 31,
            travel_time_per_floor: u64::MAX / 2,
        };
        let mut car = ElevatorCar::new(&config).unwrap();
        let mut queue = RequestQueue::new();
        queue.add_request(1, vec![4]);
        queue.add_request(2, vec![3, 4, 5]);

        // Act
        let single_leg = car.process_next_request(&mut queue);
        let many_legs = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(single_leg.visited_floors, vec![4]);
        assert_eq!(single_leg.elapsed_time, u64::MAX);
        assert_eq!(many_legs.visited_floors, vec![3, 4, 5]);
        assert_eq!(many_legs.elapsed_time, u64::MAX);
        assert_eq!(car.current_floor(), 5);
    }

    #[test]
    fn test_car_hook_called_per_move() {
        // Purpose: The floor move hook sees every billed leg and nothing else

        // Arrange
        let moves = Rc::new(RefCell::new(Vec::new()));
        let (car, mut queue) = setup_car();
        let mut car = car.with_floor_move_hook(RecordingHook { moves: moves.clone() });
        queue.add_request(6, vec![2, 0, 9]);

        // Act
        let trip = car.process_next_request(&mut queue);

        // Assert
        assert_eq!(*moves.borrow(), vec![(6, 2), (2, 9)]);
        assert_eq!(trip.elapsed_time, (4 + 7) * 10);
    }
}
