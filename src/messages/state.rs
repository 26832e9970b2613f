use serde::{Deserialize, Serialize};

/// Estimated vehicle state, as pushed by the state estimator.
///
/// `position` is north/east/down in metres; `chi` is the course angle in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub position: [f32; 3],
    #[serde(default)]
    pub chi: f32,
}

impl VehicleState {
    pub fn new(north: f32, east: f32, down: f32, chi: f32) -> Self {
        Self {
            position: [north, east, down],
            chi,
        }
    }

    pub fn north(&self) -> f32 {
        self.position[0]
    }

    pub fn east(&self) -> f32 {
        self.position[1]
    }

    pub fn down(&self) -> f32 {
        self.position[2]
    }
}
