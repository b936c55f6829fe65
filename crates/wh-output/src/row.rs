//! Plain data row types written by output backends.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Robot,
    Box,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Robot => "robot",
            AgentKind::Box => "box",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agent's position at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub kind:   AgentKind,
    pub id:     u32,
    pub tick:   u64,
    pub x:      u32,
    pub y:      u32,
    /// Robot: carrying a box.  Box: attached to a carrier.
    pub loaded: bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub robot_moves:       u64,
    pub delivered:         u32,
    pub queued_broadcasts: u64,
    pub carrying:          u64,
}

/// A drop zone's fill level at the end of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZoneRow {
    pub id:   u16,
    pub x:    u32,
    pub y:    u32,
    pub fill: u8,
}
