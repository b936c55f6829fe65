//! Classification of what a robot sees when it looks at a neighbor cell.

/// The closed set of things a cell can contain, from a robot's point of view.
///
/// Drop-zone cells classify as [`CellContent::DropZone`] regardless of how
/// many delivered boxes sit on them, so locked boxes are never mistaken for
/// collectable ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellContent {
    DropZone,
    Robot,
    Box,
    RobotWithBox,
    Empty,
}

impl CellContent {
    /// `true` for a cell a robot may move into.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellContent::Empty
    }
}
