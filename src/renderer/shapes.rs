//! Shape generation for the pixel-block glyphs
//!
//! Every entity is drawn as a small set of filled blocks, expanded here into
//! triangle-list quads in logical screen coordinates.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::BARRIER_CELL_SIZE;
use crate::sim::{GamePhase, GameState, InvaderKind, ShotStyle};

/// A glyph block relative to the entity origin: (dx, dy, w, h)
type Block = (f32, f32, f32, f32);

const PLAYER_BLOCKS: [Block; 4] = [
    (12.0, 0.0, 8.0, 4.0),
    (8.0, 4.0, 16.0, 4.0),
    (4.0, 8.0, 24.0, 4.0),
    (0.0, 12.0, 32.0, 4.0),
];

const INVADER_BODY: [Block; 3] = [
    (8.0, 0.0, 16.0, 8.0),
    (4.0, 8.0, 24.0, 8.0),
    (0.0, 16.0, 32.0, 8.0),
];

/// Feet alternate between the two animation frames
const INVADER_FEET: [[Block; 2]; 2] = [
    [(0.0, 24.0, 8.0, 4.0), (24.0, 24.0, 8.0, 4.0)],
    [(4.0, 24.0, 8.0, 4.0), (20.0, 24.0, 8.0, 4.0)],
];

const UFO_BLOCKS: [Block; 4] = [
    (8.0, 0.0, 24.0, 8.0),
    (4.0, 8.0, 32.0, 4.0),
    (0.0, 12.0, 40.0, 8.0),
    (6.0, 16.0, 28.0, 4.0),
];

/// Append one filled quad (two triangles)
pub fn push_quad(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x2, y2) = (x + w, y + h);
    out.push(Vertex::new(x, y, color));
    out.push(Vertex::new(x2, y, color));
    out.push(Vertex::new(x, y2, color));

    out.push(Vertex::new(x, y2, color));
    out.push(Vertex::new(x2, y, color));
    out.push(Vertex::new(x2, y2, color));
}

fn push_blocks(out: &mut Vec<Vertex>, origin: Vec2, blocks: &[Block], color: [f32; 4]) {
    for &(dx, dy, w, h) in blocks {
        push_quad(out, origin.x + dx, origin.y + dy, w, h, color);
    }
}

pub fn player(out: &mut Vec<Vertex>, origin: Vec2) {
    push_blocks(out, origin, &PLAYER_BLOCKS, colors::PLAYER);
}

pub fn invader(out: &mut Vec<Vertex>, origin: Vec2, kind: InvaderKind, frame: u8) {
    let color = match kind {
        InvaderKind::Squid => colors::SQUID,
        InvaderKind::Crab => colors::CRAB,
        InvaderKind::Octopus => colors::OCTOPUS,
    };
    push_blocks(out, origin, &INVADER_BODY, color);
    push_blocks(out, origin, &INVADER_FEET[(frame % 2) as usize], color);
}

pub fn ufo(out: &mut Vec<Vertex>, origin: Vec2) {
    push_blocks(out, origin, &UFO_BLOCKS, colors::UFO);
}

pub fn player_shot(out: &mut Vec<Vertex>, origin: Vec2) {
    push_quad(out, origin.x, origin.y, 4.0, 8.0, colors::PLAYER_SHOT);
}

pub fn invader_shot(out: &mut Vec<Vertex>, origin: Vec2, style: ShotStyle) {
    let color = colors::INVADER_SHOT;
    match style {
        ShotStyle::Straight => push_quad(out, origin.x, origin.y, 4.0, 8.0, color),
        ShotStyle::Wide => push_quad(out, origin.x - 1.0, origin.y, 6.0, 8.0, color),
        ShotStyle::Zigzag => {
            push_quad(out, origin.x, origin.y, 4.0, 2.0, color);
            push_quad(out, origin.x + 1.0, origin.y + 2.0, 2.0, 2.0, color);
            push_quad(out, origin.x, origin.y + 4.0, 4.0, 2.0, color);
            push_quad(out, origin.x + 1.0, origin.y + 6.0, 2.0, 2.0, color);
        }
    }
}

/// Build the vertex list for the whole frame from post-tick state. Dead
/// invaders, cleared cells, and despawned projectiles are never visited.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    if state.phase != GamePhase::Playing {
        // Title and game-over text live in the DOM overlay
        return out;
    }

    player(&mut out, state.player.pos);

    for inv in state.invaders.iter().filter(|inv| inv.alive) {
        invader(&mut out, inv.pos, inv.kind, inv.anim_frame);
    }

    for shot in &state.player_shots {
        player_shot(&mut out, shot.pos);
    }
    for shot in &state.invader_shots {
        invader_shot(&mut out, shot.pos, shot.style);
    }

    for barrier in &state.barriers {
        for cell in barrier.cells.iter().filter(|c| c.exists) {
            push_quad(
                &mut out,
                cell.pos.x,
                cell.pos.y,
                BARRIER_CELL_SIZE,
                BARRIER_CELL_SIZE,
                colors::BARRIER,
            );
        }
    }

    if let Some(ufo) = &state.ufo {
        self::ufo(&mut out, ufo.pos);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_quad_is_two_triangles() {
        let mut out = Vec::new();
        push_quad(&mut out, 10.0, 20.0, 4.0, 8.0, colors::PLAYER_SHOT);
        assert_eq!(out.len(), 6);
        assert_eq!(out[0].position, [10.0, 20.0]);
        assert_eq!(out[5].position, [14.0, 28.0]);
    }

    #[test]
    fn test_scene_empty_outside_play() {
        let state = GameState::new(1, 0);
        assert!(scene(&state).is_empty());
    }

    #[test]
    fn test_scene_skips_dead_invaders() {
        let mut state = GameState::new(2, 0);
        state.start_game();
        let full = scene(&state).len();

        state.invaders[0].alive = false;
        let fewer = scene(&state).len();
        // One invader glyph is 5 blocks of 6 vertices
        assert_eq!(full - fewer, 30);
    }

    #[test]
    fn test_scene_skips_cleared_cells() {
        let mut state = GameState::new(3, 0);
        state.start_game();
        let full = scene(&state).len();

        let hit = state.barriers[0].cells[0].rect().center();
        state.barriers[0].destroy_radius(hit, 2.0);
        assert!(scene(&state).len() < full);
    }
}
