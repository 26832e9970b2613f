use crate::messages::NewWaypoint;

/// A waypoint held in the flight plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Waypoint {
    /// north, east, down
    pub w: [f32; 3],
    pub va_d: f32,
    pub priority: i32,
    pub landing: bool,
    pub loiter_point: bool,
    /// Set on waypoints generated at the aircraft position rather than requested.
    pub synthesized: bool,
}

impl Waypoint {
    pub fn north(&self) -> f32 {
        self.w[0]
    }

    pub fn east(&self) -> f32 {
        self.w[1]
    }

    pub fn down(&self) -> f32 {
        self.w[2]
    }
}

impl From<&NewWaypoint> for Waypoint {
    fn from(wp: &NewWaypoint) -> Self {
        Self {
            w: wp.w,
            va_d: wp.va_d,
            priority: wp.priority,
            landing: wp.landing,
            loiter_point: wp.loiter_point,
            synthesized: false,
        }
    }
}
