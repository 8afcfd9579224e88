/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Floor;

/// Called by the car after every billed floor move. Has no effect on the computed trip time.
pub trait FloorMoveHook {
    fn on_floor_move(&mut self, from: Floor, to: Floor);
}

/// Default hook, returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl FloorMoveHook for NoPacing {
    fn on_floor_move(&mut self, _from: Floor, _to: Floor) {}
}

/// Sleeps a fixed delay after every move so a console run can be followed.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacing {
    delay: Duration,
}

impl SleepPacing {
    pub fn new(delay: Duration) -> SleepPacing {
        SleepPacing { delay }
    }
}

impl FloorMoveHook for SleepPacing {
    fn on_floor_move(&mut self, _from: Floor, _to: Floor) {
        sleep(self.delay);
    }
}
