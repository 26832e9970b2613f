//! Transport between the path manager and the rest of the autopilot.
//!
//! The only transport is newline-delimited JSON on stdin/stdout, one message
//! per line, tagged by `type`.

use crate::messages::{CurrentPath, NewWaypointsRequest, NewWaypointsResponse, VehicleState};
use serde::{Deserialize, Serialize};

pub mod stdio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum Inbound {
    State(VehicleState),
    Waypoints(NewWaypointsRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum Outbound {
    CurrentPath(CurrentPath),
    WaypointsAck(NewWaypointsResponse),
}
