use super::{FollowerInput, FollowerOutput, LoiterFollower, Params, PathFollower};
use crate::waypoints::WaypointQueue;

/// Straight line from the active waypoint toward the next one.
///
/// Falls back to loitering when fewer than two waypoints remain from the
/// active index. Never advances the active index.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFollower;

impl PathFollower for LineFollower {
    fn name(&self) -> &'static str {
        "line"
    }

    fn compute(
        &mut self,
        params: &Params,
        input: &FollowerInput,
        plan: &mut WaypointQueue,
    ) -> FollowerOutput {
        let idx_a = plan.active_index();
        let (from, to) = match (plan.get(idx_a), plan.get(idx_a + 1)) {
            (Some(a), Some(b)) => (*a, *b),
            _ => return LoiterFollower.compute(params, input, plan),
        };

        let d = [to.w[0] - from.w[0], to.w[1] - from.w[1], to.w[2] - from.w[2]];
        let norm = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        // coincident waypoints give a zero direction
        let q = if norm > 0.0 {
            [d[0] / norm, d[1] / norm, d[2] / norm]
        } else {
            [0.0; 3]
        };
        FollowerOutput::line(from.w, q, to.va_d, to.landing)
    }
}
