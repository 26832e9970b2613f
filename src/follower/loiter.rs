use super::{FollowerInput, FollowerOutput, Params, PathFollower};
use crate::waypoints::WaypointQueue;

/// Orbits the active waypoint at the minimum turn radius, or the aircraft
/// itself while the plan is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoiterFollower;

impl PathFollower for LoiterFollower {
    fn name(&self) -> &'static str {
        "loiter"
    }

    fn compute(
        &mut self,
        params: &Params,
        input: &FollowerInput,
        plan: &mut WaypointQueue,
    ) -> FollowerOutput {
        match plan.active() {
            Some(wp) => FollowerOutput::orbit(wp.w, params.r_min, 1.0, wp.va_d, wp.landing),
            None => FollowerOutput::orbit(
                [input.pn, input.pe, -input.h],
                params.r_min,
                1.0,
                0.0,
                false,
            ),
        }
    }
}
