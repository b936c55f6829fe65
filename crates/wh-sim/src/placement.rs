//! Random initial placement.
//!
//! Drop zones go to the four corners first (`(0,0)`, `(0,h-1)`, `(w-1,h-1)`,
//! `(w-1,0)`), then alternate between the top/bottom walls (even index) and
//! the left/right walls (odd index), away from the corners.  Robots, then
//! boxes, are scattered over the spawn band `[2, w-3) × [2, h-3)`, one per
//! cell.
//!
//! Every random draw is bounded by [`MAX_PLACEMENT_ATTEMPTS`]; running out
//! is reported as [`SimError::PlacementExhausted`] instead of spinning.

use std::collections::HashSet;

use wh_core::{Coord, SPAWN_MARGIN, SimRng, WarehouseConfig};

use crate::{SimError, SimResult};

/// Random draws allowed per placed entity.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Keep drawing until `draw` yields a site.
pub(crate) fn draw_until(
    what:     &'static str,
    mut draw: impl FnMut() -> Option<Coord>,
) -> SimResult<Coord> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        if let Some(site) = draw() {
            return Ok(site);
        }
    }
    Err(SimError::PlacementExhausted { what, attempts: MAX_PLACEMENT_ATTEMPTS })
}

/// `config.drop_zone_count()` drop-zone sites, in creation order.
pub(crate) fn drop_zone_sites(config: &WarehouseConfig, rng: &mut SimRng) -> SimResult<Vec<Coord>> {
    let (w, h) = (config.width, config.height);
    let corners = [
        Coord::new(0, 0),
        Coord::new(0, h - 1),
        Coord::new(w - 1, h - 1),
        Coord::new(w - 1, 0),
    ];
    let count = config.drop_zone_count() as usize;
    let mut sites: Vec<Coord> = Vec::with_capacity(count);

    for i in 0..count {
        if let Some(&corner) = corners.get(i) {
            sites.push(corner);
            continue;
        }
        let site = if i % 2 == 0 {
            // Top or bottom wall.
            let y = rng.choose(&[corners[0].y, corners[2].y]).copied().unwrap_or(0);
            draw_until("drop zone", || {
                let c = Coord::new(rng.gen_range(SPAWN_MARGIN..w - SPAWN_MARGIN - 1), y);
                (!sites.contains(&c)).then_some(c)
            })?
        } else {
            // Left or right wall.
            let x = rng.choose(&[corners[1].x, corners[3].x]).copied().unwrap_or(0);
            draw_until("drop zone", || {
                let c = Coord::new(x, rng.gen_range(SPAWN_MARGIN..h - SPAWN_MARGIN - 1));
                (!sites.contains(&c)).then_some(c)
            })?
        };
        sites.push(site);
    }
    Ok(sites)
}

/// `count` distinct spawn-band sites not in `taken`.  Each chosen site is
/// added to `taken`.
pub(crate) fn spawn_sites(
    config: &WarehouseConfig,
    count:  u32,
    what:   &'static str,
    taken:  &mut HashSet<Coord>,
    rng:    &mut SimRng,
) -> SimResult<Vec<Coord>> {
    let x_range = SPAWN_MARGIN..config.width - SPAWN_MARGIN - 1;
    let y_range = SPAWN_MARGIN..config.height - SPAWN_MARGIN - 1;
    let mut sites = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let site = draw_until(what, || {
            let c = Coord::new(rng.gen_range(x_range.clone()), rng.gen_range(y_range.clone()));
            (!taken.contains(&c)).then_some(c)
        })?;
        taken.insert(site);
        sites.push(site);
    }
    Ok(sites)
}
