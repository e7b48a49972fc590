//! Destructible barriers
//!
//! A barrier is a fine-grained grid of removable cells stamped out of the
//! canonical silhouette: a flat cap, a notched archway, two legs and a
//! central alcove the player can hide in. A projectile impact clears every
//! cell within a blast radius, so enemy fire (radius 3) leaves visibly
//! larger craters than player fire (radius 2).

use glam::Vec2;

use super::rect::Rect;
use crate::consts::{BARRIER_CELL_SIZE, BARRIER_COLS, BARRIER_ROWS};

/// One destructible unit of a barrier
#[derive(Debug, Clone)]
pub struct BarrierCell {
    pub pos: Vec2,
    /// Once cleared, never restored within the wave
    pub exists: bool,
}

impl BarrierCell {
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos.x, self.pos.y, BARRIER_CELL_SIZE)
    }
}

/// A barrier anchored at its top-left corner
#[derive(Debug, Clone)]
pub struct Barrier {
    pub pos: Vec2,
    pub cells: Vec<BarrierCell>,
}

impl Barrier {
    /// Lay out the cell grid for a barrier anchored at (x, y)
    pub fn new(x: f32, y: f32) -> Self {
        let mut cells = Vec::new();
        for row in 0..BARRIER_ROWS {
            for col in 0..BARRIER_COLS {
                if Self::is_solid_cell(row, col) {
                    cells.push(BarrierCell {
                        pos: Vec2::new(
                            x + col as f32 * BARRIER_CELL_SIZE,
                            y + row as f32 * BARRIER_CELL_SIZE,
                        ),
                        exists: true,
                    });
                }
            }
        }
        Self {
            pos: Vec2::new(x, y),
            cells,
        }
    }

    /// The canonical barrier silhouette
    pub fn is_solid_cell(row: usize, col: usize) -> bool {
        // Flat cap
        if row < 2 {
            return true;
        }
        // Notch forming the archway between cap and body
        if row < 4 && (7..=12).contains(&col) {
            return false;
        }
        // Solid body
        if row < 8 {
            return true;
        }
        // Legs with the central alcove (columns 5 and 14 stay solid)
        if row < 12 {
            if col <= 4 || col >= 15 {
                return true;
            }
            return !(6..=13).contains(&col);
        }
        // Narrower feet
        if row < BARRIER_ROWS {
            return col <= 2 || col >= 17;
        }
        false
    }

    /// Clear every existing cell whose center lies within
    /// `radius_cells * cell_size` of the impact point. Idempotent: cells
    /// already cleared stay cleared and re-invocation is a no-op.
    pub fn destroy_radius(&mut self, hit: Vec2, radius_cells: f32) {
        let blast = radius_cells * BARRIER_CELL_SIZE;
        for cell in &mut self.cells {
            if cell.exists && cell.rect().center().distance(hit) <= blast {
                cell.exists = false;
            }
        }
    }

    /// Number of cells still standing
    pub fn remaining_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.exists).count()
    }
}
