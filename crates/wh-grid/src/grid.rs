//! Dense grid storage.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec`, indexed by
//! `y * width + x`.  Each cell holds the (usually zero or one, at most a few)
//! occupants standing on it; a carried box shares its carrier's cell and
//! delivered boxes pile up on their drop-zone cell.
//!
//! A reverse index `Occupant → Coord` makes `move_to` and `remove` O(1)
//! without the caller having to remember where an agent was.

use std::fmt;

use wh_core::{BoxId, Coord, RobotId};

use crate::{CellContent, GridError, GridResult, Map};

/// Something that occupies a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Robot(RobotId),
    Cargo(BoxId),
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Robot(id) => write!(f, "{id}"),
            Occupant::Cargo(id) => write!(f, "{id}"),
        }
    }
}

/// Bounded, non-toroidal 2-D multi-occupancy grid.
#[derive(Clone)]
pub struct Grid {
    width:      u32,
    height:     u32,
    cells:      Vec<Vec<Occupant>>,
    drop_zone:  Vec<bool>,
    locations:  Map<Occupant, Coord>,
}

impl Grid {
    /// Create an empty `width × height` grid.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let n = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells:     vec![Vec::new(); n],
            drop_zone: vec![false; n],
            locations: Map::default(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    #[inline]
    fn index(&self, coord: Coord) -> GridResult<usize> {
        if !self.in_bounds(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// In-bounds orthogonal neighbors of `coord`, in the fixed order
    /// west, south, north, east: `(x-1,y)`, `(x,y-1)`, `(x,y+1)`, `(x+1,y)`.
    ///
    /// Cells off the edge are skipped, so a corner has two neighbors.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let Coord { x, y } = coord;
        let candidates = [
            x.checked_sub(1).map(|x| Coord::new(x, y)),
            y.checked_sub(1).map(|y| Coord::new(x, y)),
            Some(Coord::new(x, y + 1)),
            Some(Coord::new(x + 1, y)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&c| self.in_bounds(c))
            .collect()
    }

    /// Classify `coord` for steering decisions.
    ///
    /// Drop-zone cells win over whatever stands on them; otherwise a robot
    /// and a box together read as `RobotWithBox`.
    pub fn contents(&self, coord: Coord) -> GridResult<CellContent> {
        let i = self.index(coord)?;
        if self.drop_zone[i] {
            return Ok(CellContent::DropZone);
        }
        let (mut robot, mut cargo) = (false, false);
        for occupant in &self.cells[i] {
            match occupant {
                Occupant::Robot(_) => robot = true,
                Occupant::Cargo(_) => cargo = true,
            }
        }
        Ok(match (robot, cargo) {
            (true, true)   => CellContent::RobotWithBox,
            (false, true)  => CellContent::Box,
            (true, false)  => CellContent::Robot,
            (false, false) => CellContent::Empty,
        })
    }

    /// Everything standing on `coord`.
    pub fn occupants(&self, coord: Coord) -> GridResult<&[Occupant]> {
        let i = self.index(coord)?;
        Ok(&self.cells[i])
    }

    /// Where `occupant` currently is, if placed.
    #[inline]
    pub fn locate(&self, occupant: Occupant) -> Option<Coord> {
        self.locations.get(&occupant).copied()
    }

    /// `true` if the cell is a drop zone.  Out-of-bounds cells are not.
    pub fn is_drop_zone(&self, coord: Coord) -> bool {
        self.index(coord).map(|i| self.drop_zone[i]).unwrap_or(false)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Mark `coord` as a drop-zone cell.
    pub fn mark_drop_zone(&mut self, coord: Coord) -> GridResult<()> {
        let i = self.index(coord)?;
        self.drop_zone[i] = true;
        Ok(())
    }

    /// Put `occupant` on the grid at `coord`.
    pub fn place(&mut self, occupant: Occupant, coord: Coord) -> GridResult<()> {
        let i = self.index(coord)?;
        if self.locations.contains_key(&occupant) {
            return Err(GridError::AlreadyPlaced(occupant));
        }
        self.cells[i].push(occupant);
        self.locations.insert(occupant, coord);
        Ok(())
    }

    /// Move an already-placed `occupant` to `to`.  Moving onto the current
    /// cell is a no-op.
    pub fn move_to(&mut self, occupant: Occupant, to: Coord) -> GridResult<()> {
        let dst = self.index(to)?;
        let from = self.locate(occupant).ok_or(GridError::NotPlaced(occupant))?;
        if from == to {
            return Ok(());
        }
        let src = self.index(from)?;
        self.cells[src].retain(|&o| o != occupant);
        self.cells[dst].push(occupant);
        self.locations.insert(occupant, to);
        Ok(())
    }

    /// Take `occupant` off the grid, returning where it was.
    pub fn remove(&mut self, occupant: Occupant) -> GridResult<Coord> {
        let at = self.locations.remove(&occupant).ok_or(GridError::NotPlaced(occupant))?;
        let i = self.index(at)?;
        self.cells[i].retain(|&o| o != occupant);
        Ok(at)
    }
}
