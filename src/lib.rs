//! Flight-plan manager for a fixed-wing autopilot.
//!
//! Accepts waypoint batches from mission planning, keeps the ordered flight
//! plan, and publishes the current path command for the path follower at a
//! fixed rate.

pub mod bus;
pub mod config;
pub mod follower;
pub mod logging;
pub mod manager;
pub mod messages;
pub mod publisher;
pub mod state_cache;
pub mod waypoints;

pub use config::{ConfigError, PathManagerConfig};
pub use follower::{Follower, FollowerKind, PathFollower};
pub use manager::{ManagerError, PathManager, PathManagerHandle, PlanSnapshot};
pub use messages::{CurrentPath, NewWaypoint, NewWaypointsRequest, PathType, VehicleState};
