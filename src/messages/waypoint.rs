use serde::{Deserialize, Serialize};

/// One waypoint as requested by a mission planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWaypoint {
    /// north, east, down
    #[serde(alias = "position")]
    pub w: [f32; 3],
    #[serde(rename = "Va_d", alias = "desired_airspeed", default)]
    pub va_d: f32,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub landing: bool,
    #[serde(default, alias = "loiter")]
    pub loiter_point: bool,
    #[serde(default, alias = "set_as_current")]
    pub set_current: bool,
    #[serde(default, alias = "clear_after_insert")]
    pub clear_wp_list: bool,
}

impl NewWaypoint {
    pub fn new(north: f32, east: f32, down: f32, va_d: f32) -> Self {
        Self {
            w: [north, east, down],
            va_d,
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn landing(mut self) -> Self {
        self.landing = true;
        self
    }

    pub fn loiter(mut self) -> Self {
        self.loiter_point = true;
        self
    }

    pub fn set_current(mut self) -> Self {
        self.set_current = true;
        self
    }

    pub fn clear_after_insert(mut self) -> Self {
        self.clear_wp_list = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWaypointsRequest {
    pub waypoints: Vec<NewWaypoint>,
}

impl From<Vec<NewWaypoint>> for NewWaypointsRequest {
    fn from(waypoints: Vec<NewWaypoint>) -> Self {
        Self { waypoints }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWaypointsResponse {
    pub success: bool,
}
