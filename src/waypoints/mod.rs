//! The flight plan: an ordered waypoint queue and the rules that admit new
//! waypoint batches into it.

use crate::messages::{NewWaypoint, VehicleState};
pub use types::Waypoint;

pub mod types;

/// Priority given to a synthesized current waypoint.
pub const CURRENT_WAYPOINT_PRIORITY: i32 = 5;

/// Down coordinate above which the aircraft counts as close to the ground.
///
/// Strictly greater than this value (lower altitude) takes the requested
/// altitude for a synthesized waypoint; at or below it the aircraft holds its
/// current altitude.
pub const GROUND_PROXIMITY_DOWN: f32 = -25.0;

/// Ordered waypoints plus the index of the active one.
///
/// The waypoint count is always the length of the queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointQueue {
    waypoints: Vec<Waypoint>,
    idx_a: usize,
}

impl WaypointQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn get(&self, idx: usize) -> Option<&Waypoint> {
        self.waypoints.get(idx)
    }

    pub fn active_index(&self) -> usize {
        self.idx_a
    }

    /// The waypoint at the active index, if the index is inside the queue.
    pub fn active(&self) -> Option<&Waypoint> {
        self.waypoints.get(self.idx_a)
    }

    /// Moves the active index. Followers advance it as segments are completed.
    pub fn set_active_index(&mut self, idx: usize) {
        self.idx_a = idx;
    }

    /// Admits a waypoint batch.
    ///
    /// Entries already queued with a lower priority than the highest in the
    /// batch are dropped. Then every element is applied in order, each seeing
    /// the effects of the ones before it, including a `clear_wp_list` midway
    /// through the batch. Always acknowledges.
    pub fn submit(&mut self, batch: &[NewWaypoint], vehicle: &VehicleState) -> bool {
        let max_priority = batch.iter().map(|wp| wp.priority).fold(0, i32::max);
        self.evict_below(max_priority);

        for wp in batch {
            if wp.set_current || self.is_empty() {
                let current = Self::current_waypoint(wp, vehicle);
                tracing::debug!(
                    north = current.north(),
                    east = current.east(),
                    down = current.down(),
                    "synthesized current waypoint"
                );
                self.waypoints.clear();
                self.waypoints.push(current);
                self.idx_a = 0;
            }

            let next = Waypoint::from(wp);
            tracing::warn!(
                n = next.north(),
                e = next.east(),
                d = next.down(),
                va_d = next.va_d,
                priority = next.priority,
                "received waypoint"
            );
            self.waypoints.push(next);

            if wp.clear_wp_list {
                tracing::debug!("waypoint list cleared");
                self.clear();
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.idx_a = 0;
    }

    fn evict_below(&mut self, priority: i32) {
        let before = self.waypoints.len();
        self.waypoints.retain(|wp| wp.priority >= priority);
        let evicted = before - self.waypoints.len();
        if evicted > 0 {
            tracing::debug!(evicted, priority, "evicted lower priority waypoints");
        }
    }

    /// Waypoint anchoring a new plan at the aircraft's present position.
    fn current_waypoint(requested: &NewWaypoint, vehicle: &VehicleState) -> Waypoint {
        let down = if vehicle.down() > GROUND_PROXIMITY_DOWN {
            requested.w[2]
        } else {
            vehicle.down()
        };
        Waypoint {
            w: [vehicle.north(), vehicle.east(), down],
            va_d: requested.va_d,
            priority: CURRENT_WAYPOINT_PRIORITY,
            landing: false,
            loiter_point: false,
            synthesized: true,
        }
    }
}
