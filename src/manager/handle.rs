use super::{Command, PlanSnapshot};
use crate::messages::{NewWaypointsRequest, NewWaypointsResponse, VehicleState};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("path manager is not running")]
    Closed,

    #[error("path manager dropped the reply")]
    Dropped(#[from] oneshot::error::RecvError),
}

impl<T> From<mpsc::error::SendError<T>> for ManagerError {
    fn from(_: mpsc::error::SendError<T>) -> Self {
        ManagerError::Closed
    }
}

/// Client side of a running [`PathManager`](super::PathManager).
#[derive(Debug, Clone)]
pub struct PathManagerHandle {
    state_tx: mpsc::Sender<VehicleState>,
    command_tx: mpsc::Sender<Command>,
}

impl PathManagerHandle {
    pub(super) fn new(
        state_tx: mpsc::Sender<VehicleState>,
        command_tx: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            state_tx,
            command_tx,
        }
    }

    pub async fn update_state(&self, state: VehicleState) -> Result<(), ManagerError> {
        self.state_tx.send(state).await?;
        Ok(())
    }

    /// Submits a waypoint batch and waits for the acknowledgement.
    pub async fn submit_waypoints(
        &self,
        request: NewWaypointsRequest,
    ) -> Result<NewWaypointsResponse, ManagerError> {
        let (reply, response) = oneshot::channel();
        self.command_tx
            .send(Command::Waypoints { request, reply })
            .await?;
        Ok(response.await?)
    }

    pub async fn snapshot(&self) -> Result<PlanSnapshot, ManagerError> {
        let (reply, response) = oneshot::channel();
        self.command_tx.send(Command::Snapshot { reply }).await?;
        Ok(response.await?)
    }
}
