//! Messages crossing the process edge: the vehicle state feed, the waypoint
//! service request/response and the current path command.

pub mod current_path;
pub mod state;
pub mod waypoint;

pub use current_path::{CurrentPath, PathType};
pub use state::VehicleState;
pub use waypoint::{NewWaypoint, NewWaypointsRequest, NewWaypointsResponse};
