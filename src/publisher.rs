//! One publication cycle: build the follower input from the cached state,
//! run the geometry engine, map its output to a [`CurrentPath`] and check
//! the result for NaN.

use crate::follower::{FollowerInput, FollowerOutput, Params, PathFollower};
use crate::messages::{CurrentPath, PathType};
use crate::state_cache::VehicleStateCache;
use crate::waypoints::WaypointQueue;
use std::fmt;

/// A numeric field of [`CurrentPath`], used to identify NaN diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathField {
    R(usize),
    Q(usize),
    C(usize),
    PathType,
    Rho,
    Lambda,
}

impl fmt::Display for PathField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathField::R(i) => write!(f, "r[{}]", i),
            PathField::Q(i) => write!(f, "q[{}]", i),
            PathField::C(i) => write!(f, "c[{}]", i),
            PathField::PathType => write!(f, "path_type"),
            PathField::Rho => write!(f, "rho"),
            PathField::Lambda => write!(f, "lambda"),
        }
    }
}

pub fn follower_input(cache: &VehicleStateCache) -> FollowerInput {
    let state = cache.state();
    FollowerInput {
        pn: state.north(),
        pe: state.east(),
        h: -state.down(),
        chi: state.chi,
    }
}

/// Runs the geometry engine, or yields the zero output while no vehicle
/// state has been received.
pub fn compute_output(
    follower: &mut impl PathFollower,
    params: &Params,
    cache: &VehicleStateCache,
    plan: &mut WaypointQueue,
) -> FollowerOutput {
    let input = follower_input(cache);
    if cache.is_initialized() {
        follower.compute(params, &input, plan)
    } else {
        FollowerOutput::default()
    }
}

/// Maps engine output to the outbound message. All geometry fields are
/// carried through whatever the path type, so the unused ones are still
/// checked for NaN.
pub fn to_current_path(output: &FollowerOutput) -> CurrentPath {
    CurrentPath {
        path_type: if output.flag {
            PathType::Line
        } else {
            PathType::Orbit
        },
        va_d: output.va_d,
        r: output.r,
        q: output.q,
        c: output.c,
        rho: output.rho,
        lambda: output.lambda,
        landing: output.landing,
    }
}

/// Every NaN field of `path`, in the order they are checked.
pub fn nan_fields(path: &CurrentPath) -> Vec<PathField> {
    let mut fields = Vec::new();
    for i in 0..3 {
        if path.r[i].is_nan() {
            fields.push(PathField::R(i));
        }
        if path.q[i].is_nan() {
            fields.push(PathField::Q(i));
        }
        if path.c[i].is_nan() {
            fields.push(PathField::C(i));
        }
    }
    if f32::from(path.path_type.code()).is_nan() {
        fields.push(PathField::PathType);
    }
    if path.rho.is_nan() {
        fields.push(PathField::Rho);
    }
    if path.lambda.is_nan() {
        fields.push(PathField::Lambda);
    }
    fields
}

/// Logs one fatal diagnostic per NaN field. Does not stop publication.
pub fn validate(path: &CurrentPath) -> Vec<PathField> {
    let fields = nan_fields(path);
    for field in &fields {
        tracing::error!(fatal = true, field = %field, "caught nan in current path");
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::follower::LoiterFollower;
    use crate::messages::VehicleState;

    const PARAMS: Params = Params { r_min: 75.0 };

    #[test]
    fn input_negates_down_into_altitude() {
        let mut cache = VehicleStateCache::new();
        cache.update(VehicleState::new(1.0, 2.0, -120.0, 0.3));
        let input = follower_input(&cache);
        assert_eq!(input.pn, 1.0);
        assert_eq!(input.pe, 2.0);
        assert_eq!(input.h, 120.0);
        assert_eq!(input.chi, 0.3);
    }

    #[test]
    fn uninitialized_cache_skips_follower() {
        let cache = VehicleStateCache::new();
        let output = compute_output(
            &mut LoiterFollower,
            &PARAMS,
            &cache,
            &mut WaypointQueue::new(),
        );
        assert_eq!(output, FollowerOutput::default());
        assert_eq!(to_current_path(&output), CurrentPath::default());
        assert_eq!(to_current_path(&output).path_type, PathType::Orbit);
    }

    #[test]
    fn flag_alone_selects_path_type() {
        let mut output = FollowerOutput {
            flag: true,
            va_d: 12.0,
            r: [1.0, 2.0, 3.0],
            q: [0.0, 1.0, 0.0],
            c: [7.0, 8.0, 9.0],
            rho: 50.0,
            lambda: -1.0,
            landing: true,
        };
        let line = to_current_path(&output);
        assert_eq!(line.path_type, PathType::Line);
        assert_eq!(line.r, [1.0, 2.0, 3.0]);
        assert_eq!(line.q, [0.0, 1.0, 0.0]);
        assert_eq!(line.va_d, 12.0);
        assert!(line.landing);

        output.flag = false;
        let orbit = to_current_path(&output);
        assert_eq!(orbit.path_type, PathType::Orbit);
        assert_eq!(orbit.c, [7.0, 8.0, 9.0]);
        assert_eq!(orbit.rho, 50.0);
        assert_eq!(orbit.lambda, -1.0);
        assert_eq!(orbit.va_d, 12.0);
        assert!(orbit.landing);
    }

    #[test]
    fn reports_each_nan_field() {
        let path = CurrentPath {
            r: [0.0, f32::NAN, 0.0],
            q: [f32::NAN, 0.0, 0.0],
            c: [0.0, 0.0, f32::NAN],
            rho: f32::NAN,
            lambda: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            validate(&path),
            vec![
                PathField::Q(0),
                PathField::R(1),
                PathField::C(2),
                PathField::Rho,
                PathField::Lambda,
            ]
        );
    }

    #[test]
    fn orbit_fields_are_checked_on_line_paths() {
        let output = FollowerOutput {
            flag: true,
            c: [f32::NAN, 0.0, 0.0],
            ..Default::default()
        };
        let path = to_current_path(&output);
        assert_eq!(path.path_type, PathType::Line);
        assert_eq!(validate(&path), vec![PathField::C(0)]);
    }

    #[test]
    fn clean_path_has_no_diagnostics() {
        assert!(validate(&CurrentPath::default()).is_empty());
    }

    #[test]
    fn field_names_identify_index() {
        assert_eq!(PathField::R(0).to_string(), "r[0]");
        assert_eq!(PathField::C(2).to_string(), "c[2]");
        assert_eq!(PathField::PathType.to_string(), "path_type");
        assert_eq!(PathField::Lambda.to_string(), "lambda");
    }
}
