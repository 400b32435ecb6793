//! Host wire contracts: the payload shapes exchanged with the authoritative
//! document host. These ARE the protocol; transports only frame them.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Opaque, globally unique document key (a URI-like identifier). The join
/// key between host documents and canvas surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(CompactString);

impl SurfaceId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(CompactString::new(raw.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Which side authored a content change. Carried on every `update`/`edit`
/// so an echoed apply can be told apart from a genuine external change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOrigin {
    Surface,
    #[default]
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCandidate {
    pub label: CompactString,
    pub insert_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
}

/// host -> core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostEvent {
    Init {
        id: SurfaceId,
        name: CompactString,
        text: String,
    },
    Close {
        id: SurfaceId,
    },
    Update {
        id: SurfaceId,
        text: String,
        #[serde(default, rename = "source")]
        origin: EditOrigin,
    },
    Completions {
        id: SurfaceId,
        items: Vec<CompletionCandidate>,
    },
    ThemeColors,
}

/// core -> host. `Edit` replaces the full prior content range as a single
/// document edit on the host side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HostCommand {
    Edit {
        id: SurfaceId,
        text: String,
        #[serde(rename = "source")]
        origin: EditOrigin,
    },
    #[serde(rename_all = "camelCase")]
    RequestCompletions {
        id: SurfaceId,
        position: CursorPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trigger_character: Option<char>,
    },
}

/// Outgoing command channel, implemented by the active transport.
pub trait HostSink {
    fn send(&self, command: HostCommand);
}

impl HostSink for std::sync::mpsc::Sender<HostCommand> {
    fn send(&self, command: HostCommand) {
        let _ = std::sync::mpsc::Sender::send(self, command);
    }
}
