//! Integration tests for wh-sim.

use std::collections::{HashMap, HashSet};

use wh_core::{BoxId, Coord, DROP_ZONE_CAPACITY, Tick, WarehouseConfig};

use crate::{Layout, NoopObserver, Sim, SimBuilder, SimObserver, Snapshot, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: u32, y: u32) -> Coord {
    Coord::new(x, y)
}

fn config(width: u32, height: u32, box_count: u32) -> WarehouseConfig {
    WarehouseConfig { width, height, box_count, ..WarehouseConfig::default() }
}

fn layout_sim(size: u32, robots: &[Coord], boxes: &[Coord], zones: &[Coord]) -> Sim {
    SimBuilder::new(config(size, size, 5))
        .layout(Layout {
            robots:     robots.to_vec(),
            boxes:      boxes.to_vec(),
            drop_zones: zones.to_vec(),
        })
        .build()
        .unwrap()
}

/// Asserts the per-tick invariants on every snapshot.
#[derive(Default)]
struct InvariantChecker {
    fills:     Vec<u8>,
    locked_at: HashMap<BoxId, Coord>,
    snapshots: u64,
    ended_at:  Option<Tick>,
}

impl InvariantChecker {
    fn check(&mut self, snap: &Snapshot) {
        // Capacity and fill monotonicity.
        for (i, z) in snap.drop_zones.iter().enumerate() {
            assert!(z.fill <= DROP_ZONE_CAPACITY);
            if let Some(&prev) = self.fills.get(i) {
                assert!(z.fill >= prev, "fill of {} went down", z.coord);
            }
        }
        self.fills = snap.drop_zones.iter().map(|z| z.fill).collect();

        // No two robots on one cell.
        let mut cells = HashSet::new();
        for r in &snap.robots {
            assert!(cells.insert(r.coord), "two robots on {}", r.coord);
        }

        // One box per carrier, riding on its carrier's cell.
        let mut owners = HashSet::new();
        for b in &snap.boxes {
            if let Some(owner) = b.owner {
                assert!(owners.insert(owner), "{owner} owns two boxes");
                assert_eq!(snap.robots[owner.index()].coord, b.coord);
            }
        }
        let carrying = snap.robots.iter().filter(|r| r.carrying).count();
        assert!(carrying <= owners.len());

        // Locked boxes sit on a drop zone and never move again.
        let zones: HashSet<Coord> = snap.drop_zones.iter().map(|z| z.coord).collect();
        for b in snap.boxes.iter().filter(|b| b.locked) {
            assert!(zones.contains(&b.coord));
            let first = *self.locked_at.entry(b.id).or_insert(b.coord);
            assert_eq!(first, b.coord, "{} moved after locking", b.id);
        }
        let delivered: u32 = snap.drop_zones.iter().map(|z| z.fill as u32).sum();
        assert_eq!(delivered as usize, self.locked_at.len());
    }
}

impl SimObserver for InvariantChecker {
    fn on_snapshot(&mut self, _tick: Tick, snap: &Snapshot) {
        self.check(snap);
        self.snapshots += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick, snap: &Snapshot) {
        self.check(snap);
        self.ended_at = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn random_placement_invariants() {
        let cfg = config(12, 12, 23);
        let sim = SimBuilder::new(cfg.clone()).build().unwrap();

        let zones = sim.drop_zones();
        assert_eq!(zones.len(), 5);
        let corners: Vec<Coord> = zones.iter().take(4).map(|z| z.coord).collect();
        assert_eq!(corners, vec![c(0, 0), c(0, 11), c(11, 11), c(11, 0)]);
        let extra = zones[4].coord;
        assert!(extra.y == 0 || extra.y == 11);
        assert!((2..9).contains(&extra.x));

        let mut cells = HashSet::new();
        for at in sim.robots().iter().map(|r| r.coord).chain(sim.boxes().iter().map(|b| b.coord)) {
            assert!((2..9).contains(&at.x) && (2..9).contains(&at.y), "{at} outside spawn band");
            assert!(cells.insert(at), "{at} used twice");
        }
        assert_eq!(sim.robots().len(), cfg.robot_count as usize);
        assert_eq!(sim.boxes().len(), 23);
        assert_eq!(sim.tick(), Tick::ZERO);
    }

    #[test]
    fn placement_is_seeded() {
        let a = SimBuilder::new(config(12, 12, 10)).build().unwrap();
        let b = SimBuilder::new(config(12, 12, 10)).build().unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn invalid_config_rejected() {
        let err = SimBuilder::new(config(4, 10, 5)).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
        let err = SimBuilder::new(config(10, 10, 0)).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn layout_overrides_counts() {
        let sim = layout_sim(8, &[c(3, 3), c(4, 4)], &[c(5, 5)], &[c(0, 0)]);
        assert_eq!(sim.config.robot_count, 2);
        assert_eq!(sim.config.box_count, 1);
        assert_eq!(sim.drop_zones()[0].fill, 0);
    }

    #[test]
    fn bad_layouts_rejected() {
        let build = |robots: Vec<Coord>, boxes: Vec<Coord>, drop_zones: Vec<Coord>| {
            SimBuilder::new(config(8, 8, 5))
                .layout(Layout { robots, boxes, drop_zones })
                .build()
                .err()
        };
        let cases = [
            build(vec![c(1, 1)], vec![], vec![]),
            build(vec![c(0, 0)], vec![], vec![c(0, 0)]),
            build(vec![c(2, 2)], vec![c(2, 2)], vec![c(0, 0)]),
            build(vec![c(8, 2)], vec![], vec![c(0, 0)]),
            build(vec![], vec![], vec![c(0, 0), c(0, 0)]),
        ];
        for err in cases {
            assert!(matches!(err, Some(SimError::Layout(_))), "{err:?}");
        }
    }

    #[test]
    fn placement_attempts_are_bounded() {
        let err = crate::placement::draw_until("box", || None).unwrap_err();
        assert!(matches!(
            err,
            SimError::PlacementExhausted { what: "box", attempts: crate::MAX_PLACEMENT_ATTEMPTS }
        ));
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use wh_agent::CargoState;
    use wh_claims::CarrierEntry;
    use wh_core::RobotId;
    use wh_grid::Occupant;

    use super::*;
    use crate::SimError;

    #[test]
    fn step_counts_ticks() {
        let mut sim = layout_sim(8, &[c(3, 3)], &[c(6, 6)], &[c(0, 0)]);
        assert_eq!(sim.step().unwrap(), Tick(1));
        assert_eq!(sim.step().unwrap(), Tick(2));
        assert_eq!(sim.tick(), Tick(2));
    }

    #[test]
    fn reservations_cleared_between_ticks() {
        let mut sim = layout_sim(8, &[c(3, 3), c(5, 3)], &[c(4, 3)], &[c(0, 0)]);
        sim.step().unwrap();
        assert!(sim.board.reserved_cells.is_empty());
        assert!(sim.board.reserved_boxes.is_empty());
    }

    #[test]
    fn failed_tick_halts() {
        let mut sim = layout_sim(8, &[c(3, 3)], &[c(6, 6)], &[c(0, 0)]);
        sim.agents.boxes[0].state = CargoState::Attached(RobotId(0));

        let err = sim.step().unwrap_err();
        assert!(matches!(err, SimError::Protocol { tick: Tick(1), .. }));
        assert!(sim.is_halted());
        assert_eq!(sim.tick(), Tick::ZERO);
        assert!(matches!(sim.step(), Err(SimError::Halted)));
    }

    #[test]
    fn failed_tick_rolls_back_earlier_decisions() {
        let mut sim = layout_sim(8, &[c(1, 0), c(4, 4)], &[c(6, 1), c(6, 6)], &[c(0, 0)]);
        // Robot 0 carries box 0 right next to the zone.
        sim.grid.move_to(Occupant::Cargo(BoxId(0)), c(1, 0)).unwrap();
        sim.agents.boxes[0].coord = c(1, 0);
        sim.agents.boxes[0].state = CargoState::Attached(RobotId(0));
        sim.agents.robots[0].carrying = true;
        sim.board.carriers.record(RobotId(0), BoxId(0), c(1, 0)).unwrap();
        // Box 1 claims a carrier with no ledger entry, failing after box 0 locked.
        sim.agents.boxes[1].state = CargoState::Attached(RobotId(1));

        assert!(matches!(sim.step(), Err(SimError::Protocol { tick: Tick(1), .. })));
        assert!(sim.is_halted());

        assert_eq!(sim.drop_zones()[0].fill, 0);
        assert_eq!(sim.board.drop_zones.delivered(), 0);
        let cargo = &sim.boxes()[0];
        assert!(!cargo.locked);
        assert_eq!(cargo.owner, Some(RobotId(0)));
        assert_eq!(cargo.coord, c(1, 0));
        assert!(sim.agents.robots[0].carrying);
        assert_eq!(
            sim.board.carriers.get(RobotId(0)),
            Some(&CarrierEntry { cargo: BoxId(0), target: c(1, 0) })
        );
        assert_eq!(sim.grid.locate(Occupant::Cargo(BoxId(0))), Some(c(1, 0)));
        assert_eq!(sim.agents.robots[1].coord, c(4, 4));
        assert!(sim.board.reserved_cells.is_empty());
        assert!(sim.agents.robots.iter().all(|r| r.pending.is_none()));
    }

    #[test]
    fn snapshot_interval_respected() {
        #[derive(Default)]
        struct Counter {
            starts:    Vec<Tick>,
            ends:      Vec<TickSummary>,
            snapshots: Vec<Tick>,
        }
        impl SimObserver for Counter {
            fn on_tick_start(&mut self, tick: Tick) {
                self.starts.push(tick);
            }
            fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
                self.ends.push(*summary);
            }
            fn on_snapshot(&mut self, tick: Tick, _snap: &Snapshot) {
                self.snapshots.push(tick);
            }
        }

        let mut sim = layout_sim(10, &[c(5, 5)], &[c(2, 8)], &[c(0, 0)]);
        sim.config.output_interval_ticks = 3;
        let mut obs = Counter::default();
        let last = sim.run_ticks(9, &mut obs).unwrap();

        assert_eq!(last, Tick(9));
        assert_eq!(obs.starts, (1..=9).map(Tick).collect::<Vec<_>>());
        assert_eq!(obs.ends.last().unwrap().tick, Tick(9));
        assert_eq!(obs.snapshots, vec![Tick(3), Tick(6), Tick(9)]);
    }

    #[test]
    fn run_stops_at_tick_limit() {
        let mut sim = layout_sim(10, &[c(5, 5)], &[c(3, 7), c(7, 3)], &[c(0, 0)]);
        sim.config.max_ticks = 3;
        let last = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(last, Tick(3));
        assert!(!sim.is_terminal());
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use wh_core::RobotId;

    use super::*;

    /// Five robots, five boxes, one drop zone: terminal once the zone
    /// holds all five.
    #[test]
    fn full_run_to_terminal() {
        let mut cfg = config(10, 10, 5);
        cfg.max_ticks = 20_000;
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut checker = InvariantChecker::default();
        let last = sim.run(&mut checker).unwrap();

        assert!(sim.is_terminal());
        assert!(sim.is_settled());
        assert_eq!(checker.ended_at, Some(last));
        assert_eq!(checker.snapshots, last.0);
        let zones = sim.drop_zones();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].fill, DROP_ZONE_CAPACITY);
        assert!(sim.boxes().iter().all(|b| b.locked && b.coord == c(0, 0)));
        assert!(sim.board.carriers.is_empty());

        // Terminal state is sticky.
        let frozen = sim.snapshot();
        for _ in 0..3 {
            assert_eq!(sim.step().unwrap(), last);
        }
        assert_eq!(sim.snapshot(), frozen);
    }

    #[test]
    fn larger_run_keeps_invariants() {
        let mut cfg = config(16, 16, 12);
        cfg.robot_count = 6;
        cfg.seed = 7;
        cfg.max_ticks = 400;
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let mut checker = InvariantChecker::default();
        sim.run(&mut checker).unwrap();
        assert!(sim.total_robot_moves() > 0);
    }

    /// Two robots next to the same box: the lower id takes it.
    #[test]
    fn contested_box() {
        let mut sim = layout_sim(8, &[c(2, 3), c(4, 3)], &[c(3, 3)], &[c(0, 0)]);
        sim.step().unwrap();

        let robots = sim.robots();
        assert!(robots[0].carrying);
        assert!(!robots[1].carrying);
        let b = sim.boxes()[0];
        assert!(b.carried);
        assert_eq!(b.owner, Some(RobotId(0)));
        assert_eq!(b.coord, c(2, 3));
    }

    /// A loaded robot closes in on the nearest drop zone every tick.
    #[test]
    fn carrier_heads_for_nearest_zone() {
        let mut sim = layout_sim(10, &[c(5, 5)], &[c(5, 6)], &[c(0, 0)]);
        sim.step().unwrap();
        assert!(sim.robots()[0].carrying);

        let zone = c(0, 0);
        let mut last = sim.robots()[0].coord.distance(zone);
        for _ in 0..50 {
            sim.step().unwrap();
            let now = sim.robots()[0].coord.distance(zone);
            assert!(now <= last, "distance grew from {last} to {now}");
            last = now;
            if sim.drop_zones()[0].fill == 1 {
                break;
            }
        }

        assert_eq!(sim.drop_zones()[0].fill, 1);
        let b = sim.boxes()[0];
        assert!(b.locked);
        assert_eq!(b.coord, zone);
        assert!(!sim.is_terminal());
        assert!(sim.is_settled());

        let at = sim.tick();
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), at);
    }

    /// A loaded robot relays a box it cannot take; an idle robot picks the
    /// sighting up in the same tick.
    #[test]
    fn broadcast_hand_off() {
        let mut sim = layout_sim(
            10,
            &[c(5, 5), c(8, 8)],
            &[c(5, 6), c(6, 5)],
            &[c(0, 0)],
        );
        sim.step().unwrap();
        assert_eq!(sim.boxes()[0].owner, Some(RobotId(0)));
        assert!(sim.robots()[1].objective.is_none());

        let target = c(6, 5);
        let before = sim.robots()[1].coord.distance(target);
        sim.step().unwrap();

        let r1 = sim.robots()[1];
        assert_eq!(r1.objective, Some(target));
        assert!(sim.board.broadcast.is_empty());
        assert!(r1.coord.distance(target) < before);
        assert!(!sim.boxes()[1].carried);
    }
}
