//! The path manager actor.
//!
//! A single task owns the vehicle state cache, the waypoint queue and the
//! installed follower. Vehicle state updates, waypoint requests and the
//! publication timer are multiplexed in one `select!` loop, so handlers never
//! interleave. The timer branch is polled first.

use crate::config::PathManagerConfig;
use crate::follower::{Follower, Params, PathFollower};
use crate::messages::{CurrentPath, NewWaypointsRequest, NewWaypointsResponse, VehicleState};
use crate::publisher;
use crate::state_cache::VehicleStateCache;
use crate::waypoints::{Waypoint, WaypointQueue};
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

mod handle;
pub use handle::{ManagerError, PathManagerHandle};

const STATE_QUEUE_DEPTH: usize = 10;
const COMMAND_QUEUE_DEPTH: usize = 10;

#[derive(Debug)]
pub(crate) enum Command {
    Waypoints {
        request: NewWaypointsRequest,
        reply: oneshot::Sender<NewWaypointsResponse>,
    },
    Snapshot {
        reply: oneshot::Sender<PlanSnapshot>,
    },
}

/// Copy of the manager's state at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSnapshot {
    pub waypoints: Vec<Waypoint>,
    pub active_index: usize,
    pub num_waypoints: usize,
    pub vehicle: VehicleState,
    pub state_initialized: bool,
}

/// Everything the three event sources share.
#[derive(Debug)]
pub struct ManagerState {
    cache: VehicleStateCache,
    plan: WaypointQueue,
    params: Params,
    follower: Follower,
}

impl ManagerState {
    pub fn new(params: Params, follower: Follower) -> Self {
        Self {
            cache: VehicleStateCache::new(),
            plan: WaypointQueue::new(),
            params,
            follower,
        }
    }

    pub fn update_state(&mut self, state: VehicleState) {
        self.cache.update(state);
    }

    pub fn submit(&mut self, request: &NewWaypointsRequest) -> NewWaypointsResponse {
        let success = self.plan.submit(&request.waypoints, self.cache.state());
        NewWaypointsResponse { success }
    }

    /// One publication cycle. Always returns a message, NaN or not.
    pub fn tick(&mut self) -> CurrentPath {
        let output = publisher::compute_output(
            &mut self.follower,
            &self.params,
            &self.cache,
            &mut self.plan,
        );
        let path = publisher::to_current_path(&output);
        publisher::validate(&path);
        path
    }

    pub fn plan(&self) -> &WaypointQueue {
        &self.plan
    }

    pub fn snapshot(&self) -> PlanSnapshot {
        PlanSnapshot {
            waypoints: self.plan.waypoints().to_vec(),
            active_index: self.plan.active_index(),
            num_waypoints: self.plan.len(),
            vehicle: *self.cache.state(),
            state_initialized: self.cache.is_initialized(),
        }
    }
}

pub struct PathManager {
    state: ManagerState,
    period: Duration,
}

impl PathManager {
    pub fn new(config: &PathManagerConfig, follower: Follower) -> Self {
        Self {
            state: ManagerState::new(config.params(), follower),
            period: config.update_period(),
        }
    }

    /// Starts the actor. Every tick sends one [`CurrentPath`] on `publish`.
    ///
    /// The task runs until the `publish` receiver is dropped.
    pub fn spawn(
        self,
        publish: mpsc::Sender<CurrentPath>,
    ) -> (PathManagerHandle, JoinHandle<()>) {
        let (state_tx, state_rx) = mpsc::channel(STATE_QUEUE_DEPTH);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let task = tokio::spawn(self.run(state_rx, command_rx, publish));
        (PathManagerHandle::new(state_tx, command_tx), task)
    }

    async fn run(
        mut self,
        mut state_rx: mpsc::Receiver<VehicleState>,
        mut command_rx: mpsc::Receiver<Command>,
        publish: mpsc::Sender<CurrentPath>,
    ) {
        tracing::info!(
            follower = self.state.follower.name(),
            period_ms = self.period.as_millis() as u64,
            "path manager started"
        );

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut state_open = true;
        let mut commands_open = true;

        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => {
                    let path = self.state.tick();
                    match publish.try_send(path) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::warn!("current path consumer is behind, dropping message");
                        }
                        Err(TrySendError::Closed(_)) => {
                            tracing::info!("current path consumer gone, stopping path manager");
                            break;
                        }
                    }
                },
                update = state_rx.recv(), if state_open => match update {
                    Some(state) => self.state.update_state(state),
                    None => state_open = false,
                },
                command = command_rx.recv(), if commands_open => match command {
                    Some(command) => self.handle(command),
                    None => commands_open = false,
                },
            }
        }
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Waypoints { request, reply } => {
                let response = self.state.submit(&request);
                if reply.send(response).is_err() {
                    tracing::debug!("waypoint requester went away before the ack");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(self.state.snapshot()).is_err() {
                    tracing::debug!("snapshot requester went away before the reply");
                }
            }
        }
    }
}
