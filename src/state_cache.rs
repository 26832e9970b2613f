use crate::messages::VehicleState;

/// Latest vehicle state plus whether any update has arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleStateCache {
    state: VehicleState,
    initialized: bool,
}

impl VehicleStateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the cached state. Never rejects.
    pub fn update(&mut self, state: VehicleState) {
        if !self.initialized {
            tracing::info!(
                north = state.north(),
                east = state.east(),
                down = state.down(),
                "first vehicle state received"
            );
        }
        self.state = state;
        self.initialized = true;
    }

    /// Last written state, or the zero state before the first update.
    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized_with_zero_state() {
        let cache = VehicleStateCache::new();
        assert!(!cache.is_initialized());
        assert_eq!(*cache.state(), VehicleState::default());
    }

    #[test]
    fn update_overwrites_unconditionally() {
        let mut cache = VehicleStateCache::new();
        cache.update(VehicleState::new(1.0, 2.0, -100.0, 0.5));
        cache.update(VehicleState::new(f32::NAN, 0.0, 0.0, 0.0));
        assert!(cache.is_initialized());
        assert!(cache.state().north().is_nan());
        assert_eq!(cache.state().down(), 0.0);
    }
}
