//! Read-only views handed to observers and outer drivers.

use wh_agent::{CargoBox, Robot};
use wh_claims::DropZone;
use wh_core::{BoxId, Coord, DropZoneId, RobotId, Tick};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotView {
    pub id:        RobotId,
    pub coord:     Coord,
    pub carrying:  bool,
    pub objective: Option<Coord>,
    pub moves:     u64,
}

impl From<&Robot> for RobotView {
    fn from(r: &Robot) -> Self {
        Self {
            id:        r.id,
            coord:     r.coord,
            carrying:  r.carrying,
            objective: r.objective,
            moves:     r.moves,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxView {
    pub id:      BoxId,
    pub coord:   Coord,
    pub carried: bool,
    pub owner:   Option<RobotId>,
    pub locked:  bool,
    pub moves:   u64,
}

impl From<&CargoBox> for BoxView {
    fn from(b: &CargoBox) -> Self {
        Self {
            id:      b.id,
            coord:   b.coord,
            carried: b.is_carried(),
            owner:   b.owner(),
            locked:  b.is_locked(),
            moves:   b.moves,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropZoneView {
    pub id:    DropZoneId,
    pub coord: Coord,
    pub fill:  u8,
}

impl From<&DropZone> for DropZoneView {
    fn from(z: &DropZone) -> Self {
        Self { id: z.id, coord: z.coord, fill: z.fill }
    }
}

/// The whole simulation state at one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick:       Tick,
    pub robots:     Vec<RobotView>,
    pub boxes:      Vec<BoxView>,
    pub drop_zones: Vec<DropZoneView>,
}
