/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Floors are 1-indexed. Signed so that out-of-bounds requests such as
/// floor 0 or negative floors can be represented and filtered.
pub type Floor = i32;

/// A pickup request: the passenger waits at `calling_floor` and wants to
/// visit `destinations` in the given order.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub calling_floor: Floor,
    #[serde(default)]
    pub destinations: Vec<Floor>,
}

impl Request {
    pub fn new(calling_floor: Floor, destinations: Vec<Floor>) -> Request {
        Request {
            calling_floor,
            destinations,
        }
    }
}

/// Outcome of serving one request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripResult {
    pub elapsed_time: u64,
    pub visited_floors: Vec<Floor>,
}

impl TripResult {
    pub fn is_empty(&self) -> bool {
        self.visited_floors.is_empty()
    }
}

impl fmt::Display for TripResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let floors = self
            .visited_floors
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(",");

        write!(f, "{} {}", self.elapsed_time, floors)
    }
}
