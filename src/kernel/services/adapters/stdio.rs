//! Newline-delimited JSON transport over stdin/stdout. Each input line is
//! one frame: either a host event (`init`/`close`/`update`/`completions`/
//! `themeColors`) or a driver event standing in for the widget side
//! (edits, suggest gestures, pointer input). Output lines are host
//! commands (`edit`/`requestCompletions`).

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::{debug, warn};

use crate::kernel::services::bus::CanvasBusSender;
use crate::kernel::services::ports::{
    AsyncExecutor, CursorPosition, HostCommand, HostEvent, HostSink, SurfaceId,
};
use crate::kernel::{Action, PointerButton, ScreenPoint};

#[derive(Debug)]
pub enum WireError {
    Decode { line: String, source: serde_json::Error },
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::Decode { line, source } => {
                write!(f, "undecodable frame {line:?}: {source}")
            }
        }
    }
}

impl std::error::Error for WireError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireButton {
    Left,
    Middle,
}

impl From<WireButton> for PointerButton {
    fn from(button: WireButton) -> Self {
        match button {
            WireButton::Left => PointerButton::Left,
            WireButton::Middle => PointerButton::Middle,
        }
    }
}

/// Widget/driver side of the harness protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DriverEvent {
    SurfaceEdit {
        id: SurfaceId,
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Suggest {
        id: SurfaceId,
        #[serde(default)]
        position: CursorPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trigger_character: Option<char>,
    },
    PointerDown {
        x: f64,
        y: f64,
        button: WireButton,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    Wheel {
        x: f64,
        y: f64,
        delta: f64,
    },
    Dismiss,
    Reopen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Host(HostEvent),
    Driver(DriverEvent),
}

impl Frame {
    pub fn into_action(self, now: Instant) -> Action {
        match self {
            Frame::Host(event) => Action::Host { event, now },
            Frame::Driver(event) => match event {
                DriverEvent::SurfaceEdit { id, text } => Action::SurfaceEdited { id, text, now },
                DriverEvent::Suggest {
                    id,
                    position,
                    trigger_character,
                } => Action::CompletionTrigger {
                    id,
                    position,
                    trigger_char: trigger_character,
                    now,
                },
                DriverEvent::PointerDown { x, y, button } => Action::PointerDown {
                    point: ScreenPoint::new(x, y),
                    button: button.into(),
                },
                DriverEvent::PointerMove { x, y } => Action::PointerMove {
                    point: ScreenPoint::new(x, y),
                },
                DriverEvent::PointerUp => Action::PointerUp,
                DriverEvent::Wheel { x, y, delta } => Action::Wheel {
                    point: ScreenPoint::new(x, y),
                    delta,
                },
                DriverEvent::Dismiss => Action::DismissCanvas,
                DriverEvent::Reopen => Action::ReopenCanvas,
            },
        }
    }
}

pub fn decode_frame(line: &str) -> Result<Frame, WireError> {
    match serde_json::from_str::<HostEvent>(line) {
        Ok(event) => Ok(Frame::Host(event)),
        Err(host_err) => match serde_json::from_str::<DriverEvent>(line) {
            Ok(event) => Ok(Frame::Driver(event)),
            Err(_) => Err(WireError::Decode {
                line: line.to_string(),
                source: host_err,
            }),
        },
    }
}

pub fn encode_command(command: &HostCommand) -> String {
    // HostCommand serialization cannot fail: no maps with non-string keys.
    serde_json::to_string(command).expect("serializable command")
}

impl HostSink for UnboundedSender<HostCommand> {
    fn send(&self, command: HostCommand) {
        let _ = UnboundedSender::send(self, command);
    }
}

/// Spawn the stdin reader and stdout writer tasks. Returns the sender the
/// shell uses as its `HostSink`. The bus sender is dropped when stdin
/// closes, which ends the canvas loop.
pub fn spawn_stdio_host(
    executor: &dyn AsyncExecutor,
    bus: CanvasBusSender,
) -> UnboundedSender<HostCommand> {
    executor.spawn(Box::pin(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match decode_frame(line) {
                        Ok(frame) => {
                            if bus.send_action(frame.into_action(Instant::now())).is_err() {
                                break;
                            }
                        }
                        Err(err) => warn!(%err, "dropping frame"),
                    }
                }
                Ok(None) => {
                    debug!("stdin closed");
                    break;
                }
                Err(err) => {
                    warn!(%err, "stdin read failed");
                    break;
                }
            }
        }
    }));

    let (tx, mut rx) = unbounded_channel::<HostCommand>();
    executor.spawn(Box::pin(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(command) = rx.recv().await {
            let mut line = encode_command(&command);
            line.push('\n');
            if stdout.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            let _ = stdout.flush().await;
        }
    }));

    tx
}
