//! Unit tests for wh-claims.

use wh_core::{BoxId, Coord, RobotId};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: u32, y: u32) -> Coord {
    Coord::new(x, y)
}

// ── DropZoneRegistry ──────────────────────────────────────────────────────────

#[cfg(test)]
mod drop_zones {
    use super::*;
    use crate::{ClaimError, DropZoneRegistry};

    fn corners() -> DropZoneRegistry {
        DropZoneRegistry::new([c(0, 0), c(0, 9), c(9, 9), c(9, 0)])
    }

    #[test]
    fn ids_follow_creation_order() {
        let reg = corners();
        let ids: Vec<u16> = reg.zones().iter().map(|z| z.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert!(reg.zones().iter().all(|z| z.fill == 0));
    }

    #[test]
    fn duplicates_collapse() {
        let reg = DropZoneRegistry::new([c(0, 0), c(0, 0)]);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn deliver_increments_by_one_until_full() {
        let mut reg = corners();
        for expected in 1..=5 {
            assert_eq!(reg.deliver(c(0, 0)).unwrap(), expected);
        }
        assert!(reg.get(c(0, 0)).unwrap().is_full());
        assert!(matches!(reg.deliver(c(0, 0)), Err(ClaimError::DropZoneFull(_))));
        assert_eq!(reg.get(c(0, 0)).unwrap().fill, 5);
    }

    #[test]
    fn deliver_to_unknown_cell_errors() {
        let mut reg = corners();
        assert!(matches!(reg.deliver(c(4, 4)), Err(ClaimError::UnknownDropZone(_))));
    }

    #[test]
    fn nearest_skips_full_zones() {
        let mut reg = corners();
        assert_eq!(reg.nearest_with_room(c(1, 1)).unwrap().0, c(0, 0));
        for _ in 0..5 {
            reg.deliver(c(0, 0)).unwrap();
        }
        let (zone, _) = reg.nearest_with_room(c(1, 1)).unwrap();
        assert_ne!(zone, c(0, 0));
    }

    #[test]
    fn nearest_tie_goes_to_first_created() {
        let reg = corners();
        let (zone, d) = reg.nearest_with_room(c(4, 4)).unwrap();
        assert_eq!(zone, c(0, 0));
        assert!((d - 32f64.sqrt()).abs() < 1e-9);

        // Equidistant zones: the first one registered wins.
        let reg = DropZoneRegistry::new([c(0, 4), c(8, 4)]);
        assert_eq!(reg.nearest_with_room(c(4, 4)).unwrap().0, c(0, 4));
    }

    #[test]
    fn all_full_predicate() {
        let mut reg = DropZoneRegistry::new([c(0, 0), c(9, 9)]);
        assert!(!reg.all_full());
        for _ in 0..5 {
            reg.deliver(c(0, 0)).unwrap();
        }
        assert!(!reg.all_full());
        for _ in 0..5 {
            reg.deliver(c(9, 9)).unwrap();
        }
        assert!(reg.all_full());
        assert_eq!(reg.delivered(), 10);
        assert!(reg.nearest_with_room(c(3, 3)).is_none());
    }
}

// ── ReservationTable ──────────────────────────────────────────────────────────

#[cfg(test)]
mod reservations {
    use super::*;
    use crate::ReservationTable;

    #[test]
    fn first_claim_wins() {
        let mut t = ReservationTable::new();
        assert!(t.claim(c(1, 1)));
        assert!(!t.claim(c(1, 1)));
        assert!(t.is_claimed(&c(1, 1)));
        assert!(!t.is_claimed(&c(2, 1)));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn clear_releases_everything() {
        let mut t = ReservationTable::new();
        t.claim(c(1, 1));
        t.claim(c(2, 2));
        t.clear();
        assert!(t.is_empty());
        assert!(t.claim(c(1, 1)));
    }
}

// ── BroadcastQueue ────────────────────────────────────────────────────────────

#[cfg(test)]
mod broadcast {
    use super::*;
    use crate::BroadcastQueue;

    #[test]
    fn announce_is_lifo() {
        let mut q = BroadcastQueue::new();
        assert!(q.announce(c(1, 1)));
        assert!(q.announce(c(2, 2)));
        assert_eq!(q.pop(), Some(c(2, 2)));
        assert_eq!(q.pop(), Some(c(1, 1)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn announce_deduplicates_forever() {
        let mut q = BroadcastQueue::new();
        assert!(q.announce(c(3, 3)));
        assert!(!q.announce(c(3, 3)));
        assert_eq!(q.len(), 1);
        q.pop();
        // Still remembered after being popped.
        assert!(!q.announce(c(3, 3)));
        assert!(q.is_empty());
    }

    #[test]
    fn requeue_bypasses_dedup() {
        let mut q = BroadcastQueue::new();
        q.announce(c(3, 3));
        let popped = q.pop().unwrap();
        q.requeue(popped);
        assert_eq!(q.pending(), &[c(3, 3)]);
    }
}

// ── Ledgers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledgers {
    use super::*;
    use crate::{CarrierLedger, ClaimError, PickupClaim, PickupClaims};

    #[test]
    fn pickup_claim_and_take() {
        let mut p = PickupClaims::new();
        p.claim(c(4, 4), RobotId(1), c(4, 5)).unwrap();
        assert_eq!(p.open_len(), 1);
        assert_eq!(
            p.take(c(4, 4)),
            Some(PickupClaim { robot: RobotId(1), handoff: c(4, 5) })
        );
        assert_eq!(p.open_len(), 0);
        assert!(p.was_collected(c(4, 4)));
        assert!(!p.was_collected(c(5, 5)));
    }

    #[test]
    fn double_pickup_claim_errors() {
        let mut p = PickupClaims::new();
        p.claim(c(4, 4), RobotId(1), c(4, 5)).unwrap();
        let err = p.claim(c(4, 4), RobotId(2), c(3, 4)).unwrap_err();
        assert!(matches!(err, ClaimError::AlreadyClaimed { by: RobotId(1), .. }));
    }

    #[test]
    fn carrier_record_retarget_release() {
        let mut l = CarrierLedger::new();
        l.record(RobotId(0), BoxId(3), c(2, 2)).unwrap();
        assert_eq!(l.target(RobotId(0)), Some(c(2, 2)));
        l.retarget(RobotId(0), c(2, 1)).unwrap();
        assert_eq!(l.target(RobotId(0)), Some(c(2, 1)));
        assert_eq!(l.carrier_of(BoxId(3)), Some(RobotId(0)));
        let released = l.release(RobotId(0)).unwrap();
        assert_eq!(released.cargo, BoxId(3));
        assert!(l.is_empty());
    }

    #[test]
    fn retarget_without_entry_errors() {
        let mut l = CarrierLedger::new();
        assert!(matches!(l.retarget(RobotId(2), c(1, 1)), Err(ClaimError::MissingCarrier(_))));
    }

    #[test]
    fn single_ownership_enforced() {
        let mut l = CarrierLedger::new();
        l.record(RobotId(0), BoxId(3), c(2, 2)).unwrap();
        assert!(matches!(
            l.record(RobotId(0), BoxId(4), c(2, 2)),
            Err(ClaimError::DuplicateCarrier { .. })
        ));
        assert!(matches!(
            l.record(RobotId(1), BoxId(3), c(5, 5)),
            Err(ClaimError::CargoAlreadyCarried { .. })
        ));
        assert_eq!(l.len(), 1);
    }
}

// ── ClaimBoard ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod board {
    use super::*;
    use crate::{ClaimBoard, DropZoneRegistry};

    #[test]
    fn clear_reservations_keeps_persistent_state() {
        let mut board = ClaimBoard::new(DropZoneRegistry::new([c(0, 0)]));
        board.reserved_cells.claim(c(1, 1));
        board.reserved_boxes.claim(c(2, 2));
        board.broadcast.announce(c(2, 2));
        board.carriers.record(RobotId(0), BoxId(0), c(1, 1)).unwrap();

        board.clear_reservations();

        assert!(board.reserved_cells.is_empty());
        assert!(board.reserved_boxes.is_empty());
        assert_eq!(board.broadcast.len(), 1);
        assert!(board.is_carried(BoxId(0)));
        assert_eq!(board.drop_zones.len(), 1);
    }
}
