use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathType {
    Orbit,
    Line,
}

impl PathType {
    /// Numeric code used on the wire by guidance loops (`ORBIT_PATH = 0`, `LINE_PATH = 1`).
    pub fn code(self) -> u8 {
        match self {
            PathType::Orbit => 0,
            PathType::Line => 1,
        }
    }
}

impl Default for PathType {
    fn default() -> Self {
        PathType::Orbit
    }
}

/// Path command consumed by the path follower.
///
/// For `Line` only `r` and `q` are meaningful, for `Orbit` only `c`, `rho`
/// and `lambda`; the unused fields are still carried so every message has
/// the same shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentPath {
    pub path_type: PathType,
    #[serde(rename = "Va_d")]
    pub va_d: f32,
    pub r: [f32; 3],
    pub q: [f32; 3],
    pub c: [f32; 3],
    pub rho: f32,
    pub lambda: f32,
    pub landing: bool,
}
