//! State lent to agents for one phase of one tick.

use wh_agent::AgentRngs;
use wh_claims::ClaimBoard;
use wh_core::{Coord, Tick};
use wh_grid::{CellContent, Grid, GridResult};

/// Everything an agent may consult during the Decide phase.
///
/// The grid is borrowed immutably: positions are frozen until Advance.  The
/// claim board is mutable because claiming is how agents coordinate.
pub struct DecideContext<'a> {
    /// The tick being decided.
    pub tick:  Tick,
    pub grid:  &'a Grid,
    pub board: &'a mut ClaimBoard,
    /// Per-robot RNGs for the random walk.  Boxes never draw.
    pub rngs:  &'a mut AgentRngs,
}

impl<'a> DecideContext<'a> {
    #[inline]
    pub fn new(
        tick:  Tick,
        grid:  &'a Grid,
        board: &'a mut ClaimBoard,
        rngs:  &'a mut AgentRngs,
    ) -> Self {
        Self { tick, grid, board, rngs }
    }

    /// Orthogonal neighbors of `coord` with what each contains, in the grid's
    /// fixed neighbor order.
    pub fn survey(&self, coord: Coord) -> GridResult<Vec<(Coord, CellContent)>> {
        self.grid
            .neighbors(coord)
            .into_iter()
            .map(|c| Ok((c, self.grid.contents(c)?)))
            .collect()
    }
}

/// Everything an agent may touch during the Advance phase.
pub struct AdvanceContext<'a> {
    pub grid:  &'a mut Grid,
    pub board: &'a ClaimBoard,
}

impl<'a> AdvanceContext<'a> {
    #[inline]
    pub fn new(grid: &'a mut Grid, board: &'a ClaimBoard) -> Self {
        Self { grid, board }
    }
}
