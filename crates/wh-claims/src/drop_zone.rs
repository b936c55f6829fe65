//! Drop zones and their fill counters.

use wh_core::{Coord, DROP_ZONE_CAPACITY, DropZoneId};

use crate::{ClaimError, ClaimResult};

/// A fixed delivery location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropZone {
    pub id:    DropZoneId,
    pub coord: Coord,
    /// Boxes delivered so far, in `[0, DROP_ZONE_CAPACITY]`.  Never decreases.
    pub fill:  u8,
}

impl DropZone {
    #[inline]
    pub fn has_room(&self) -> bool {
        self.fill < DROP_ZONE_CAPACITY
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.fill >= DROP_ZONE_CAPACITY
    }
}

/// All drop zones of one simulation, in creation order.
///
/// Order matters: [`nearest_with_room`][Self::nearest_with_room] breaks
/// distance ties in favor of the zone created first.
#[derive(Debug, Clone, Default)]
pub struct DropZoneRegistry {
    zones: Vec<DropZone>,
}

impl DropZoneRegistry {
    /// Build a registry with every zone empty.  Duplicate coordinates are
    /// collapsed onto the first occurrence.
    pub fn new(coords: impl IntoIterator<Item = Coord>) -> Self {
        let mut zones: Vec<DropZone> = Vec::new();
        for coord in coords {
            if zones.iter().any(|z| z.coord == coord) {
                continue;
            }
            zones.push(DropZone {
                id:   DropZoneId(zones.len() as u16),
                coord,
                fill: 0,
            });
        }
        Self { zones }
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, coord: Coord) -> Option<&DropZone> {
        self.zones.iter().find(|z| z.coord == coord)
    }

    /// Record one delivery into the zone at `coord`.  Returns the new fill.
    pub fn deliver(&mut self, coord: Coord) -> ClaimResult<u8> {
        let zone = self
            .zones
            .iter_mut()
            .find(|z| z.coord == coord)
            .ok_or(ClaimError::UnknownDropZone(coord))?;
        if zone.is_full() {
            return Err(ClaimError::DropZoneFull(coord));
        }
        zone.fill += 1;
        Ok(zone.fill)
    }

    /// The zone with room closest (straight line) to `from`, with its
    /// distance.  `None` once every zone is full.
    pub fn nearest_with_room(&self, from: Coord) -> Option<(Coord, f64)> {
        let mut best: Option<(Coord, f64)> = None;
        for zone in self.zones.iter().filter(|z| z.has_room()) {
            let d = zone.coord.distance(from);
            if best.is_none_or(|(_, min)| d < min) {
                best = Some((zone.coord, d));
            }
        }
        best
    }

    /// The termination predicate: every zone holds `DROP_ZONE_CAPACITY`
    /// boxes.
    pub fn all_full(&self) -> bool {
        self.zones.iter().all(DropZone::is_full)
    }

    /// Sum of all fill counters.
    pub fn delivered(&self) -> u32 {
        self.zones.iter().map(|z| z.fill as u32).sum()
    }
}
