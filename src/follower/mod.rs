//! Seam to the path geometry engine.
//!
//! The queue manager and the publication loop only ever see a [`Follower`];
//! which geometry sits behind it is chosen once from configuration.

use crate::waypoints::WaypointQueue;
use serde::{Deserialize, Serialize};

mod line;
mod loiter;

pub use line::LineFollower;
pub use loiter::LoiterFollower;

/// Parameters handed to every strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Minimum turn radius.
    pub r_min: f32,
}

/// Aircraft snapshot for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FollowerInput {
    pub pn: f32,
    pub pe: f32,
    /// Altitude, positive up.
    pub h: f32,
    pub chi: f32,
}

/// Geometry produced for one tick. `flag` selects a line (`true`) or an orbit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FollowerOutput {
    pub flag: bool,
    pub va_d: f32,
    pub r: [f32; 3],
    pub q: [f32; 3],
    pub c: [f32; 3],
    pub rho: f32,
    pub lambda: f32,
    pub landing: bool,
}

impl FollowerOutput {
    pub fn orbit(c: [f32; 3], rho: f32, lambda: f32, va_d: f32, landing: bool) -> Self {
        Self {
            flag: false,
            va_d,
            c,
            rho,
            lambda,
            landing,
            ..Default::default()
        }
    }

    pub fn line(r: [f32; 3], q: [f32; 3], va_d: f32, landing: bool) -> Self {
        Self {
            flag: true,
            va_d,
            r,
            q,
            landing,
            ..Default::default()
        }
    }
}

/// A path geometry strategy.
///
/// The plan is lent mutably so a strategy can read the active waypoint and
/// advance the active index when it finishes a segment.
pub trait PathFollower: Send {
    fn name(&self) -> &'static str;

    fn compute(
        &mut self,
        params: &Params,
        input: &FollowerInput,
        plan: &mut WaypointQueue,
    ) -> FollowerOutput;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowerKind {
    Line,
    Loiter,
}

impl Default for FollowerKind {
    fn default() -> Self {
        FollowerKind::Line
    }
}

impl std::str::FromStr for FollowerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(FollowerKind::Line),
            "loiter" => Ok(FollowerKind::Loiter),
            other => Err(format!("unknown follower '{}', expected line or loiter", other)),
        }
    }
}

/// The installed strategy.
pub enum Follower {
    Line(LineFollower),
    Loiter(LoiterFollower),
    Custom(Box<dyn PathFollower>),
}

impl Follower {
    pub fn from_kind(kind: FollowerKind) -> Self {
        match kind {
            FollowerKind::Line => Follower::Line(LineFollower),
            FollowerKind::Loiter => Follower::Loiter(LoiterFollower),
        }
    }

    pub fn custom(follower: impl PathFollower + 'static) -> Self {
        Follower::Custom(Box::new(follower))
    }
}

impl PathFollower for Follower {
    fn name(&self) -> &'static str {
        match self {
            Follower::Line(f) => f.name(),
            Follower::Loiter(f) => f.name(),
            Follower::Custom(f) => f.name(),
        }
    }

    fn compute(
        &mut self,
        params: &Params,
        input: &FollowerInput,
        plan: &mut WaypointQueue,
    ) -> FollowerOutput {
        match self {
            Follower::Line(f) => f.compute(params, input, plan),
            Follower::Loiter(f) => f.compute(params, input, plan),
            Follower::Custom(f) => f.compute(params, input, plan),
        }
    }
}

impl std::fmt::Debug for Follower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Follower({})", self.name())
    }
}
