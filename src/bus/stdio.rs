use super::{Inbound, Outbound};
use crate::manager::PathManagerHandle;
use crate::messages::CurrentPath;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::select;
use tokio::sync::mpsc;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::StreamExt;

/// Decodes one inbound line. Blank lines decode to `None`.
pub fn decode_line(line: &str) -> Result<Option<Inbound>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

pub fn encode(message: &Outbound) -> Result<String, serde_json::Error> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

/// Feeds inbound lines to the path manager until the reader reaches EOF.
///
/// Malformed lines are logged and skipped. Each waypoint batch is answered
/// on `acks`.
pub async fn run_inbound<R>(
    reader: R,
    handle: PathManagerHandle,
    acks: mpsc::Sender<Outbound>,
) -> Result<(), anyhow::Error>
where
    R: AsyncRead + Unpin,
{
    let mut lines = LinesStream::new(BufReader::new(reader).lines());
    while let Some(line) = lines.next().await {
        let line = line?;
        match decode_line(&line) {
            Ok(Some(Inbound::State(state))) => handle.update_state(state).await?,
            Ok(Some(Inbound::Waypoints(request))) => {
                let response = handle.submit_waypoints(request).await?;
                if acks.send(Outbound::WaypointsAck(response)).await.is_err() {
                    tracing::debug!("ack writer closed");
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, line = %line, "skipping malformed message"),
        }
    }
    tracing::info!("inbound stream closed");
    Ok(())
}

/// Writes every published path and every acknowledgement as one line until
/// both channels close.
pub async fn run_outbound<W>(
    mut writer: W,
    mut paths: mpsc::Receiver<CurrentPath>,
    mut acks: mpsc::Receiver<Outbound>,
) -> Result<(), anyhow::Error>
where
    W: AsyncWrite + Unpin,
{
    let mut paths_open = true;
    let mut acks_open = true;
    while paths_open || acks_open {
        let message = select! {
            path = paths.recv(), if paths_open => match path {
                Some(path) => Outbound::CurrentPath(path),
                None => {
                    paths_open = false;
                    continue;
                }
            },
            ack = acks.recv(), if acks_open => match ack {
                Some(ack) => ack,
                None => {
                    acks_open = false;
                    continue;
                }
            },
        };
        writer.write_all(encode(&message)?.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}
