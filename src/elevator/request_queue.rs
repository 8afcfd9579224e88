/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::{HashMap, VecDeque};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorError, Floor, Request};

/**
 * Pending pickup requests, served first-in-first-out.
 *
 * Each calling floor holds at most one request. The dequeue order is the order in which
 * calling floors were first added, never their numeric value.
 *
 * # Fields
 * - `order`:           Calling floors in insertion order.
 * - `destinations`:    Destination list for every calling floor present in `order`.
 */
#[derive(Debug, Default)]
pub struct RequestQueue {
    order: VecDeque<Floor>,
    destinations: HashMap<Floor, Vec<Floor>>,
}

impl RequestQueue {
    pub fn new() -> RequestQueue {
        RequestQueue::default()
    }

    /// Inserts a request. Re-adding a calling floor that is still queued replaces its
    /// destinations and keeps its place in line.
    pub fn add_request(&mut self, calling_floor: Floor, destinations: Vec<Floor>) {
        match self.destinations.insert(calling_floor, destinations) {
            Some(_) => debug!("Replaced queued request from floor {}", calling_floor),
            None => self.order.push_back(calling_floor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn dequeue_oldest(&mut self) -> Result<Request, ElevatorError> {
        let calling_floor = self.order.pop_front().ok_or(ElevatorError::EmptyQueue)?;
        let destinations = self
            .destinations
            .remove(&calling_floor)
            .unwrap_or_default();

        Ok(Request::new(calling_floor, destinations))
    }
}

impl Extend<Request> for RequestQueue {
    fn extend<T: IntoIterator<Item = Request>>(&mut self, requests: T) {
        for request in requests {
            self.add_request(request.calling_floor, request.destinations);
        }
    }
}
