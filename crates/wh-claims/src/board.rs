//! `ClaimBoard`: one simulation's shared coordination state.

use wh_core::{BoxId, Coord};

use crate::{BroadcastQueue, CarrierLedger, DropZoneRegistry, PickupClaims, ReservationTable};

/// Everything agents may read and write during the Decide phase.
///
/// Owned by the scheduler and lent to each agent in turn; nothing here is
/// global.  Fields are `pub` so agents can borrow them independently.
#[derive(Debug, Clone, Default)]
pub struct ClaimBoard {
    pub drop_zones:     DropZoneRegistry,
    /// Destination cells claimed this tick.
    pub reserved_cells: ReservationTable<Coord>,
    /// Floor boxes claimed this tick, by coordinate.
    pub reserved_boxes: ReservationTable<Coord>,
    pub broadcast:      BroadcastQueue,
    pub carriers:       CarrierLedger,
    pub pickups:        PickupClaims,
}

impl ClaimBoard {
    pub fn new(drop_zones: DropZoneRegistry) -> Self {
        Self { drop_zones, ..Self::default() }
    }

    /// Clear both per-tick reservation tables.
    pub fn clear_reservations(&mut self) {
        self.reserved_cells.clear();
        self.reserved_boxes.clear();
    }

    /// `true` if `cargo` is currently attached to some carrier.
    pub fn is_carried(&self, cargo: BoxId) -> bool {
        self.carriers.carrier_of(cargo).is_some()
    }
}
