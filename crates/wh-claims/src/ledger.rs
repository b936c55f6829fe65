//! The two box-ownership ledgers.
//!
//! A box changes hands in two steps that happen in the same tick:
//!
//! 1. A robot sees the box next to it and files a [`PickupClaim`] keyed by
//!    the box's floor coordinate, naming itself and the cell the box should
//!    move to (the robot's own cell).
//! 2. The box, deciding after the robots, finds the claim for its cell,
//!    removes it, and records itself in the [`CarrierLedger`] under the
//!    claiming robot.
//!
//! From then on the carrier rewrites its ledger target every tick and the box
//! follows it.  The entry is released when the box locks into a drop zone.

use wh_core::{BoxId, Coord, RobotId};

use crate::{ClaimError, ClaimResult, Map, Set};

// ── PickupClaims ──────────────────────────────────────────────────────────────

/// A robot's claim on a box that is still on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupClaim {
    pub robot:   RobotId,
    /// Where the box should move when it attaches.
    pub handoff: Coord,
}

/// Boxes claimed for pickup but not yet attached, keyed by floor coordinate.
#[derive(Debug, Clone, Default)]
pub struct PickupClaims {
    open:      Map<Coord, PickupClaim>,
    /// Every floor coordinate a box was ever claimed from.
    collected: Set<Coord>,
}

impl PickupClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a claim on the box at `at`.
    ///
    /// # Errors
    ///
    /// [`ClaimError::AlreadyClaimed`] if an open claim exists for `at`.
    pub fn claim(&mut self, at: Coord, robot: RobotId, handoff: Coord) -> ClaimResult<()> {
        if let Some(existing) = self.open.get(&at) {
            return Err(ClaimError::AlreadyClaimed { at, by: existing.robot });
        }
        self.open.insert(at, PickupClaim { robot, handoff });
        self.collected.insert(at);
        Ok(())
    }

    /// Remove and return the open claim for `at`.
    pub fn take(&mut self, at: Coord) -> Option<PickupClaim> {
        self.open.remove(&at)
    }

    /// `true` if a box was ever claimed from `at`.  Robots use this to drop
    /// objectives someone else has already serviced.
    #[inline]
    pub fn was_collected(&self, at: Coord) -> bool {
        self.collected.contains(&at)
    }

    /// Number of claims still waiting for their box to attach.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }
}

// ── CarrierLedger ─────────────────────────────────────────────────────────────

/// Where one carried box is headed next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarrierEntry {
    pub cargo:  BoxId,
    pub target: Coord,
}

/// Carried boxes keyed by carrier.
///
/// The single source of truth a robot and its box share: the robot writes
/// `target`, the box reads it.
#[derive(Debug, Clone, Default)]
pub struct CarrierLedger {
    entries: Map<RobotId, CarrierEntry>,
}

impl CarrierLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `robot` now carries `cargo`, which should move to
    /// `target`.
    ///
    /// # Errors
    ///
    /// Refuses a second box for the same robot, and the same box under a
    /// second robot.
    pub fn record(&mut self, robot: RobotId, cargo: BoxId, target: Coord) -> ClaimResult<()> {
        if let Some(existing) = self.entries.get(&robot) {
            return Err(ClaimError::DuplicateCarrier { robot, cargo: existing.cargo });
        }
        if let Some(owner) = self.carrier_of(cargo) {
            return Err(ClaimError::CargoAlreadyCarried { cargo, robot: owner });
        }
        self.entries.insert(robot, CarrierEntry { cargo, target });
        Ok(())
    }

    /// Point `robot`'s box at a new target.
    pub fn retarget(&mut self, robot: RobotId, target: Coord) -> ClaimResult<()> {
        let entry = self.entries.get_mut(&robot).ok_or(ClaimError::MissingCarrier(robot))?;
        entry.target = target;
        Ok(())
    }

    pub fn get(&self, robot: RobotId) -> Option<&CarrierEntry> {
        self.entries.get(&robot)
    }

    #[inline]
    pub fn target(&self, robot: RobotId) -> Option<Coord> {
        self.entries.get(&robot).map(|e| e.target)
    }

    /// The robot currently carrying `cargo`, if any.
    pub fn carrier_of(&self, cargo: BoxId) -> Option<RobotId> {
        self.entries
            .iter()
            .find(|(_, e)| e.cargo == cargo)
            .map(|(&robot, _)| robot)
    }

    /// Drop `robot`'s entry once its box is delivered.
    pub fn release(&mut self, robot: RobotId) -> Option<CarrierEntry> {
        self.entries.remove(&robot)
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (RobotId, CarrierEntry)> + '_ {
        self.entries.iter().map(|(&r, &e)| (r, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
