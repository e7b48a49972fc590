//! Fixed timestep simulation tick
//!
//! One call advances the whole game by `dt`: player, projectiles, the
//! formation state machine, the bonus UFO, then a single ordered
//! collision/resolution pass. The host drives this from its frame loop with
//! a fixed-step accumulator.

use glam::Vec2;
use rand::Rng;

use super::barrier::Barrier;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, GameState, InvaderShot, PlayerShot, ShotStyle, Ufo};
use crate::consts::*;

/// Held-key snapshot for a single tick. The simulation only reads boolean
/// "is held" state; the start command is edge-detected internally.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Start/confirm (title and game-over screens)
    pub start: bool,
}

/// Interval between formation steps for a given alive count, in ms.
/// Shrinks by 15 ms per dead invader, floored at 200 ms.
pub fn move_interval_ms(alive: usize) -> f32 {
    let dead = (INVADER_ROWS * INVADER_COLS - alive) as f32;
    (MOVE_INTERVAL_BASE_MS - dead * MOVE_INTERVAL_STEP_MS).max(MOVE_INTERVAL_MIN_MS)
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let start_pressed = input.start && !state.start_was_held;
    state.start_was_held = input.start;

    match state.phase {
        GamePhase::Title => {
            if start_pressed {
                state.start_game();
            }
            return;
        }
        GamePhase::GameOver => {
            if start_pressed {
                state.phase = GamePhase::Title;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    update_player(state, input, dt);
    update_player_shots(state, dt);
    update_formation(state, dt);
    if state.phase != GamePhase::Playing {
        // Formation reached the player's line
        return;
    }
    update_invader_shots(state, dt);
    update_ufo(state, dt);
    resolve_collisions(state);

    if state.lives == 0 {
        game_over(state);
        return;
    }
    if state.alive_invaders() == 0 {
        next_wave(state);
    }
}

fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    if input.left {
        player.pos.x = (player.pos.x - PLAYER_SPEED * dt).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + PLAYER_SPEED * dt).min(SCREEN_WIDTH - PLAYER_WIDTH);
    }

    if input.fire && player.can_shoot {
        let pos = Vec2::new(
            player.pos.x + PLAYER_WIDTH / 2.0 - PLAYER_SHOT_WIDTH / 2.0,
            player.pos.y,
        );
        player.can_shoot = false;
        state.player_shots.push(PlayerShot { pos });
        state.events.push(GameEvent::Shoot);
    }

    // Reload gate reopens once nothing is in flight
    if state.player_shots.is_empty() {
        state.player.can_shoot = true;
    }
}

fn update_player_shots(state: &mut GameState, dt: f32) {
    for i in (0..state.player_shots.len()).rev() {
        state.player_shots[i].pos.y -= PLAYER_SHOT_SPEED * dt;
        if state.player_shots[i].pos.y < 0.0 {
            state.player_shots.remove(i);
            state.player.can_shoot = true;
        }
    }
}

fn update_formation(state: &mut GameState, dt: f32) {
    state.move_timer_ms += dt * 1000.0;
    let interval = move_interval_ms(state.alive_invaders());
    if state.move_timer_ms >= interval {
        step_formation(state);
        state.move_timer_ms = 0.0;
    }

    state.shoot_timer_ms += dt * 1000.0;
    if state.shoot_timer_ms >= INVADER_SHOOT_INTERVAL_MS {
        invader_shoot(state);
        state.shoot_timer_ms = 0.0;
    }
}

/// One formation step: either the whole grid descends and reverses, or it
/// moves one step sideways. Exactly one of the two happens per step.
fn step_formation(state: &mut GameState) {
    let dir = state.formation_dir;
    let at_edge = state.invaders.iter().any(|inv| {
        inv.alive
            && ((dir > 0.0 && inv.pos.x >= FORMATION_RIGHT_BOUND)
                || (dir < 0.0 && inv.pos.x <= FORMATION_LEFT_BOUND))
    });

    if at_edge {
        for inv in state.invaders.iter_mut().filter(|inv| inv.alive) {
            inv.pos.y += FORMATION_DROP;
        }
        state.formation_dir = -dir;
    } else {
        for inv in state.invaders.iter_mut().filter(|inv| inv.alive) {
            inv.pos.x += dir * FORMATION_STEP;
            inv.anim_frame = (inv.anim_frame + 1) % 2;
        }
    }

    state.events.push(GameEvent::InvaderMove);

    // Reaching the player's line loses the round outright, lives or not
    let invasion_line = state.player.pos.y - INVASION_MARGIN;
    if state
        .invaders
        .iter()
        .any(|inv| inv.alive && inv.pos.y >= invasion_line)
    {
        game_over(state);
    }
}

/// A uniformly random living invader fires from its lower-center
fn invader_shoot(state: &mut GameState) {
    let alive: Vec<usize> = state
        .invaders
        .iter()
        .enumerate()
        .filter(|(_, inv)| inv.alive)
        .map(|(i, _)| i)
        .collect();
    if alive.is_empty() {
        return;
    }

    let shooter_idx = alive[state.rng.random_range(0..alive.len())];
    let style = ShotStyle::from_index(state.rng.random_range(0..3));
    let shooter = &state.invaders[shooter_idx];
    let pos = Vec2::new(
        shooter.pos.x + INVADER_WIDTH / 2.0 - INVADER_SHOT_WIDTH / 2.0,
        shooter.pos.y + INVADER_HEIGHT,
    );
    state.invader_shots.push(InvaderShot { pos, style });
}

fn update_invader_shots(state: &mut GameState, dt: f32) {
    for i in (0..state.invader_shots.len()).rev() {
        state.invader_shots[i].pos.y += INVADER_SHOT_SPEED * dt;
        if state.invader_shots[i].pos.y > SCREEN_HEIGHT {
            state.invader_shots.remove(i);
        }
    }
}

fn update_ufo(state: &mut GameState, dt: f32) {
    if let Some(ufo) = state.ufo.as_mut() {
        ufo.pos.x += ufo.direction * UFO_SPEED * dt;
        let off_screen =
            ufo.pos.x < -UFO_EXIT_MARGIN || ufo.pos.x > SCREEN_WIDTH + UFO_EXIT_MARGIN;
        if off_screen {
            despawn_ufo(state);
        }
    } else {
        // Only one UFO at a time; the timer runs while none exists
        state.ufo_timer_ms += dt * 1000.0;
        if state.ufo_timer_ms >= state.ufo_spawn_delay_ms {
            spawn_ufo(state);
            state.ufo_timer_ms = 0.0;
        }
    }
}

fn spawn_ufo(state: &mut GameState) {
    let direction = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let start_x = if direction > 0.0 {
        -UFO_WIDTH
    } else {
        SCREEN_WIDTH + UFO_WIDTH
    };
    let points = UFO_POINT_VALUES[state.rng.random_range(0..UFO_POINT_VALUES.len())];
    state.ufo = Some(Ufo {
        pos: Vec2::new(start_x, UFO_Y),
        direction,
        points,
    });
}

/// Remove the UFO and restart the waiting period with a fresh delay sample
fn despawn_ufo(state: &mut GameState) {
    state.ufo = None;
    state.ufo_timer_ms = 0.0;
    state.roll_ufo_delay();
}

/// The once-per-tick collision/resolution pass. Sub-passes run in a fixed
/// order and each projectile list is walked newest to oldest so removal by
/// index stays safe.
fn resolve_collisions(state: &mut GameState) {
    // Player shots: invaders first, then the UFO, then barrier cells
    for i in (0..state.player_shots.len()).rev() {
        let shot_rect = state.player_shots[i].rect();

        // Living invaders in insertion (row-major) order; first match wins
        if let Some(idx) = state
            .invaders
            .iter()
            .position(|inv| inv.alive && shot_rect.overlaps(&inv.rect()))
        {
            state.invaders[idx].alive = false;
            let points = state.invaders[idx].kind.points();
            state.player_shots.remove(i);
            state.apply_score(points);
            state.player.can_shoot = true;
            state.events.push(GameEvent::InvaderHit);
            continue;
        }

        if let Some(ufo) = &state.ufo {
            if shot_rect.overlaps(&ufo.rect()) {
                let points = ufo.points;
                state.player_shots.remove(i);
                state.apply_score(points);
                despawn_ufo(state);
                state.player.can_shoot = true;
                state.events.push(GameEvent::UfoHit);
                continue;
            }
        }

        // Carving a barrier awards no score and plays no cue
        if strike_barrier(&mut state.barriers, &shot_rect, PLAYER_BLAST_RADIUS) {
            state.player_shots.remove(i);
            state.player.can_shoot = true;
        }
    }

    // Enemy shots: player first, then barrier cells
    for i in (0..state.invader_shots.len()).rev() {
        let shot_rect = state.invader_shots[i].rect();

        if shot_rect.overlaps(&state.player.rect()) {
            state.invader_shots.remove(i);
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::PlayerHit);
            continue;
        }

        if strike_barrier(&mut state.barriers, &shot_rect, INVADER_BLAST_RADIUS) {
            state.invader_shots.remove(i);
        }
    }
}

/// Clear the first existing cell the shot overlaps, then blast the
/// surrounding radius around it. Returns whether anything was struck.
fn strike_barrier(barriers: &mut [Barrier], shot: &Rect, radius_cells: f32) -> bool {
    for barrier in barriers.iter_mut() {
        let hit = barrier
            .cells
            .iter()
            .position(|cell| cell.exists && shot.overlaps(&cell.rect()));
        if let Some(idx) = hit {
            let center = barrier.cells[idx].rect().center();
            barrier.cells[idx].exists = false;
            barrier.destroy_radius(center, radius_cells);
            return true;
        }
    }
    false
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::GameOver);
    if state.score > state.high_score {
        state.high_score = state.score;
        log::info!("New high score: {}", state.high_score);
    }
}

/// Wave clearance: regenerate the formation in place and clear projectiles.
/// Score, lives, and barrier damage carry over; this is not a phase change.
fn next_wave(state: &mut GameState) {
    state.spawn_invaders();
    state.player_shots.clear();
    state.invader_shots.clear();
    state.move_timer_ms = 0.0;
    state.shoot_timer_ms = 0.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A state mid-game with the timed systems pushed far into the future so
    /// tests control exactly when steps, shots, and spawns happen
    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        state.start_game();
        quiet(&mut state);
        state
    }

    fn quiet(state: &mut GameState) {
        state.move_timer_ms = -1.0e12;
        state.shoot_timer_ms = -1.0e12;
        state.ufo_spawn_delay_ms = f32::MAX;
    }

    #[test]
    fn test_start_edge_from_title() {
        let mut state = GameState::new(11, 0);
        assert_eq!(state.phase, GamePhase::Title);

        let held = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &held, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_held_start_fires_once() {
        let mut state = GameState::new(12, 0);
        state.phase = GamePhase::GameOver;

        let held = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &held, SIM_DT);
        assert_eq!(state.phase, GamePhase::Title);
        // Still held: no second transition until released and pressed again
        tick(&mut state, &held, SIM_DT);
        assert_eq!(state.phase, GamePhase::Title);

        tick(&mut state, &TickInput::default(), SIM_DT);
        tick(&mut state, &held, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_player_movement_clamped() {
        let mut state = playing_state(13);
        state.player.pos.x = 2.0;
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &left, SIM_DT);
        }
        assert_eq!(state.player.pos.x, 0.0);

        state.player.pos.x = SCREEN_WIDTH - PLAYER_WIDTH - 2.0;
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &right, SIM_DT);
        }
        assert_eq!(state.player.pos.x, SCREEN_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_reload_gate_single_shot_in_flight() {
        let mut state = playing_state(14);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.player_shots.len(), 1);
        assert!(state.take_events().contains(&GameEvent::Shoot));

        // Held fire while a shot is outstanding spawns nothing
        for _ in 0..5 {
            tick(&mut state, &fire, SIM_DT);
            assert_eq!(state.player_shots.len(), 1);
        }

        // Let the shot fly off the top; the next fire succeeds
        let mut ticks = 0;
        while !state.player_shots.is_empty() {
            tick(&mut state, &TickInput::default(), SIM_DT);
            ticks += 1;
            assert!(ticks < 1000, "shot never left the screen");
        }
        assert!(state.player.can_shoot);
        tick(&mut state, &fire, SIM_DT);
        assert_eq!(state.player_shots.len(), 1);
    }

    #[test]
    fn test_move_interval_table() {
        assert_eq!(move_interval_ms(55), 1000.0);
        assert_eq!(move_interval_ms(5), 250.0);
        // Floor: 1000 - 54*15 = 190 clamps to 200
        assert_eq!(move_interval_ms(1), 200.0);
    }

    #[test]
    fn test_move_interval_monotone() {
        for alive in 1..55 {
            assert!(move_interval_ms(alive) <= move_interval_ms(alive + 1));
        }
    }

    #[test]
    fn test_formation_step_moves_and_animates() {
        let mut state = playing_state(15);
        let before: Vec<f32> = state.invaders.iter().map(|i| i.pos.x).collect();

        state.move_timer_ms = 10_000.0;
        tick(&mut state, &TickInput::default(), SIM_DT);

        for (inv, old_x) in state.invaders.iter().zip(&before) {
            assert_eq!(inv.pos.x, old_x + FORMATION_STEP);
            assert_eq!(inv.anim_frame, 1);
        }
        assert!(state.take_events().contains(&GameEvent::InvaderMove));
    }

    #[test]
    fn test_formation_descends_and_reverses_at_edge() {
        let mut state = playing_state(16);
        // Push the right column onto the boundary
        let shift = FORMATION_RIGHT_BOUND - state.invaders.last().unwrap().pos.x;
        for inv in &mut state.invaders {
            inv.pos.x += shift;
        }
        let before_y: Vec<f32> = state.invaders.iter().map(|i| i.pos.y).collect();
        let before_x: Vec<f32> = state.invaders.iter().map(|i| i.pos.x).collect();

        state.move_timer_ms = 10_000.0;
        tick(&mut state, &TickInput::default(), SIM_DT);

        // Descent only: no horizontal movement on this step
        for ((inv, old_y), old_x) in state.invaders.iter().zip(&before_y).zip(&before_x) {
            assert_eq!(inv.pos.y, old_y + FORMATION_DROP);
            assert_eq!(inv.pos.x, *old_x);
        }
        assert_eq!(state.formation_dir, -1.0);
    }

    #[test]
    fn test_dead_invaders_do_not_trigger_edge() {
        let mut state = playing_state(17);
        // Only a dead invader sits on the boundary
        state.invaders[10].alive = false;
        state.invaders[10].pos.x = FORMATION_RIGHT_BOUND;

        state.move_timer_ms = 10_000.0;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.formation_dir, 1.0);
    }

    #[test]
    fn test_invasion_line_ends_round_despite_lives() {
        let mut state = playing_state(18);
        for inv in &mut state.invaders {
            inv.alive = false;
        }
        state.invaders[0].alive = true;
        state.invaders[0].pos.y = state.player.pos.y - INVASION_MARGIN;

        state.move_timer_ms = 10_000.0;
        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.take_events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_shot_kills_invader_and_scores() {
        let mut state = playing_state(19);
        let target = state.invaders[0].rect().center();
        state.player_shots.push(PlayerShot {
            pos: Vec2::new(target.x, target.y),
        });
        state.player.can_shoot = false;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(!state.invaders[0].alive);
        assert_eq!(state.score, state.invaders[0].kind.points());
        assert!(state.player_shots.is_empty());
        assert!(state.player.can_shoot);
        assert!(state.take_events().contains(&GameEvent::InvaderHit));
    }

    #[test]
    fn test_killed_invader_stays_dead() {
        let mut state = playing_state(20);
        state.invaders[0].alive = false;
        let target = state.invaders[0].rect().center();
        state.player_shots.push(PlayerShot {
            pos: Vec2::new(target.x, target.y),
        });

        tick(&mut state, &TickInput::default(), SIM_DT);

        // The shot passes through the corpse; no double kill, no score
        assert_eq!(state.score, 0);
        assert_eq!(state.player_shots.len(), 1);
    }

    #[test]
    fn test_shot_hits_barrier_without_score_or_cue() {
        let mut state = playing_state(21);
        // A shot resting on the first barrier's cap
        let cell = state.barriers[0].cells[0].rect().center();
        state.player_shots.push(PlayerShot {
            pos: Vec2::new(cell.x, cell.y),
        });
        let before = state.barriers[0].remaining_cells();

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.player_shots.is_empty());
        assert!(state.player.can_shoot);
        assert!(state.barriers[0].remaining_cells() < before);
        assert_eq!(state.score, 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_enemy_shot_hits_player() {
        let mut state = playing_state(22);
        let player_center = state.player.rect().center();
        state.invader_shots.push(InvaderShot {
            pos: player_center,
            style: ShotStyle::Straight,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.invader_shots.is_empty());
        assert!(state.take_events().contains(&GameEvent::PlayerHit));
    }

    #[test]
    fn test_enemy_shot_carves_barrier() {
        let mut state = playing_state(23);
        let cell = state.barriers[1].cells[0].rect().center();
        state.invader_shots.push(InvaderShot {
            pos: Vec2::new(cell.x, cell.y),
            style: ShotStyle::Zigzag,
        });
        let before = state.barriers[1].remaining_cells();

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.invader_shots.is_empty());
        assert!(state.barriers[1].remaining_cells() < before);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_ufo_spawn_gate() {
        let mut state = playing_state(24);
        state.ufo_spawn_delay_ms = 15_000.0;
        state.ufo_timer_ms = 20_000.0;

        tick(&mut state, &TickInput::default(), SIM_DT);

        let ufo = state.ufo.as_ref().expect("UFO should have spawned");
        assert!(UFO_POINT_VALUES.contains(&ufo.points));
        assert_eq!(ufo.pos.y, UFO_Y);
        assert_eq!(state.ufo_timer_ms, 0.0);

        // Timer does not accumulate while one is on screen
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ufo_timer_ms, 0.0);
    }

    #[test]
    fn test_ufo_shot_down_scores_and_resets_gate() {
        let mut state = playing_state(25);
        state.ufo = Some(Ufo {
            pos: Vec2::new(400.0, UFO_Y),
            direction: 1.0,
            points: 300,
        });
        state.player_shots.push(PlayerShot {
            pos: Vec2::new(410.0, UFO_Y + 5.0),
        });
        let old_delay = state.ufo_spawn_delay_ms;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.ufo.is_none());
        assert_eq!(state.score, 300);
        assert_eq!(state.ufo_timer_ms, 0.0);
        assert_ne!(state.ufo_spawn_delay_ms, old_delay);
        assert!(state.take_events().contains(&GameEvent::UfoHit));
    }

    #[test]
    fn test_ufo_exits_and_resets_timer() {
        let mut state = playing_state(26);
        state.ufo = Some(Ufo {
            pos: Vec2::new(SCREEN_WIDTH + UFO_EXIT_MARGIN - 0.5, UFO_Y),
            direction: 1.0,
            points: 50,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.ufo.is_none());
        assert_eq!(state.ufo_timer_ms, 0.0);
    }

    #[test]
    fn test_wave_clear_preserves_session() {
        let mut state = playing_state(27);
        state.score = 540;
        state.lives = 2;
        let center = state.barriers[0].cells[0].rect().center();
        state.barriers[0].destroy_radius(center, 3.0);
        let damaged = state.barriers[0].remaining_cells();

        for inv in &mut state.invaders {
            inv.alive = false;
        }
        state.invaders[0].alive = true;
        let target = state.invaders[0].rect().center();
        state.player_shots.push(PlayerShot { pos: target });

        tick(&mut state, &TickInput::default(), SIM_DT);

        // Fresh formation, same session
        assert_eq!(state.alive_invaders(), 55);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 540 + state.invaders[0].kind.points());
        assert_eq!(state.lives, 2);
        assert_eq!(state.barriers[0].remaining_cells(), damaged);
        assert!(state.player_shots.is_empty());
        assert!(state.invader_shots.is_empty());
        assert_eq!(state.invaders[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_losing_last_life_ends_game_and_raises_high_score() {
        let mut state = playing_state(28);
        state.lives = 1;
        state.score = 990;
        state.high_score = 500;
        state.invader_shots.push(InvaderShot {
            pos: state.player.rect().center(),
            style: ShotStyle::Wide,
        });

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        assert_eq!(state.high_score, 990);
        let events = state.take_events();
        assert!(events.contains(&GameEvent::PlayerHit));
        assert!(events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_restart_reinitializes_session() {
        let mut state = playing_state(29);
        state.score = 1200;
        state.lives = 0;
        game_over(&mut state);
        assert_eq!(state.high_score, 1200);

        let press = TickInput {
            start: true,
            ..Default::default()
        };
        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.phase, GamePhase::Title);

        tick(&mut state, &TickInput::default(), SIM_DT);
        tick(&mut state, &press, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.high_score, 1200);
        assert_eq!(state.alive_invaders(), 55);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99_999, 0);
        let mut b = GameState::new(99_999, 0);

        let script = [
            TickInput {
                start: true,
                ..Default::default()
            },
            TickInput {
                right: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in script.iter().cycle().take(2_000) {
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.alive_invaders(), b.alive_invaders());
        assert_eq!(a.player_shots.len(), b.player_shots.len());
        assert_eq!(a.invader_shots.len(), b.invader_shots.len());
    }
}
