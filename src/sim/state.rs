//! Game state and core simulation types
//!
//! Entity records are passive data; all rules live in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::barrier::Barrier;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Attract screen, waiting for the start command
    Title,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Things that happened during a tick which the host turns into sound cues
/// (and, for `GameOver`, high-score persistence). Emission is fire-and-forget:
/// the simulation never waits on a cue being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Shoot,
    InvaderHit,
    PlayerHit,
    UfoHit,
    InvaderMove,
    GameOver,
}

/// Invader tier; determines the point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvaderKind {
    /// Top row, highest value
    Squid,
    Crab,
    Octopus,
}

impl InvaderKind {
    pub fn points(&self) -> u32 {
        match self {
            InvaderKind::Squid => 30,
            InvaderKind::Crab => 20,
            InvaderKind::Octopus => 10,
        }
    }

    /// Tier layout of the 5-row formation: squid on top, two rows of crabs,
    /// two rows of octopi
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => InvaderKind::Squid,
            1 | 2 => InvaderKind::Crab,
            _ => InvaderKind::Octopus,
        }
    }
}

/// A single invader in the formation
#[derive(Debug, Clone)]
pub struct Invader {
    pub pos: Vec2,
    pub kind: InvaderKind,
    /// Flips to false exactly once, irreversibly
    pub alive: bool,
    /// 2-valued animation phase, toggled on each horizontal formation step
    pub anim_frame: u8,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, INVADER_WIDTH, INVADER_HEIGHT)
    }
}

/// The player's cannon
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    /// Reload gate: closed while a shot is in flight
    pub can_shoot: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0 - PLAYER_WIDTH / 2.0, PLAYER_Y),
            can_shoot: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's projectile (at most one in flight)
#[derive(Debug, Clone)]
pub struct PlayerShot {
    pub pos: Vec2,
}

impl PlayerShot {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SHOT_WIDTH, PLAYER_SHOT_HEIGHT)
    }
}

/// Cosmetic variant of an enemy projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotStyle {
    Straight,
    Wide,
    Zigzag,
}

impl ShotStyle {
    pub fn from_index(i: usize) -> Self {
        match i % 3 {
            0 => ShotStyle::Straight,
            1 => ShotStyle::Wide,
            _ => ShotStyle::Zigzag,
        }
    }
}

/// An enemy projectile
#[derive(Debug, Clone)]
pub struct InvaderShot {
    pub pos: Vec2,
    pub style: ShotStyle,
}

impl InvaderShot {
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            INVADER_SHOT_WIDTH,
            INVADER_SHOT_HEIGHT,
        )
    }
}

/// The bonus UFO crossing the top of the screen
#[derive(Debug, Clone)]
pub struct Ufo {
    pub pos: Vec2,
    /// Traversal direction, +1 rightward or -1 leftward
    pub direction: f32,
    pub points: u32,
}

impl Ufo {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, UFO_WIDTH, UFO_HEIGHT)
    }
}

/// Complete session state, advanced by `tick` and read by the renderer
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Highest score seen across sessions; the host persists it on game over
    pub high_score: u32,
    pub lives: u32,
    /// Score at which the next bonus life is granted
    pub next_bonus_score: u32,
    pub player: Player,
    pub invaders: Vec<Invader>,
    pub player_shots: Vec<PlayerShot>,
    pub invader_shots: Vec<InvaderShot>,
    pub barriers: Vec<Barrier>,
    pub ufo: Option<Ufo>,
    /// Shared formation direction, +1 or -1
    pub formation_dir: f32,
    pub move_timer_ms: f32,
    pub shoot_timer_ms: f32,
    /// Accumulates only while no UFO exists
    pub ufo_timer_ms: f32,
    /// Sampled once per waiting period, held fixed until the next despawn
    pub ufo_spawn_delay_ms: f32,
    /// For edge-detecting the held start key
    pub(crate) start_was_held: bool,
    /// Events produced this tick, drained by the host
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session on the title screen with the given seed and the
    /// persisted high score (0 when none is stored)
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0,
            high_score,
            lives: STARTING_LIVES,
            next_bonus_score: BONUS_LIFE_STEP,
            player: Player::new(),
            invaders: Vec::new(),
            player_shots: Vec::new(),
            invader_shots: Vec::new(),
            barriers: Vec::new(),
            ufo: None,
            formation_dir: 1.0,
            move_timer_ms: 0.0,
            shoot_timer_ms: 0.0,
            ufo_timer_ms: 0.0,
            ufo_spawn_delay_ms: 0.0,
            start_was_held: false,
            events: Vec::new(),
        };
        state.spawn_invaders();
        state.spawn_barriers();
        state.roll_ufo_delay();
        state
    }

    /// Lay out a fresh 5x11 formation and reset its direction
    pub fn spawn_invaders(&mut self) {
        self.invaders.clear();
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                self.invaders.push(Invader {
                    pos: Vec2::new(
                        FORMATION_ORIGIN_X + col as f32 * INVADER_SPACING,
                        FORMATION_ORIGIN_Y + row as f32 * INVADER_SPACING,
                    ),
                    kind: InvaderKind::for_row(row),
                    alive: true,
                    anim_frame: 0,
                });
            }
        }
        self.formation_dir = 1.0;
    }

    /// Build the four barriers at their fixed positions
    pub fn spawn_barriers(&mut self) {
        self.barriers = (0..BARRIER_COUNT)
            .map(|i| Barrier::new(BARRIER_FIRST_X + i as f32 * BARRIER_SPACING_X, BARRIER_Y))
            .collect();
    }

    /// Full reinitialization on the title -> playing transition. The high
    /// score is the only session value that survives.
    pub fn start_game(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.next_bonus_score = BONUS_LIFE_STEP;
        self.player = Player::new();
        self.spawn_invaders();
        self.spawn_barriers();
        self.player_shots.clear();
        self.invader_shots.clear();
        self.ufo = None;
        self.move_timer_ms = 0.0;
        self.shoot_timer_ms = 0.0;
        self.ufo_timer_ms = 0.0;
        self.roll_ufo_delay();
    }

    /// Sample the next UFO spawn delay; called once per waiting period
    pub(crate) fn roll_ufo_delay(&mut self) {
        self.ufo_spawn_delay_ms = UFO_SPAWN_MIN_MS + self.rng.random_range(0.0..UFO_SPAWN_SPREAD_MS);
    }

    /// Add points and evaluate the bonus-life threshold. A single check per
    /// call: a score jump spanning several thresholds still grants one life.
    pub fn apply_score(&mut self, points: u32) {
        self.score += points;
        if self.score >= self.next_bonus_score {
            self.lives += 1;
            self.next_bonus_score += BONUS_LIFE_STEP;
        }
    }

    /// Number of invaders still alive in the current wave
    pub fn alive_invaders(&self) -> usize {
        self.invaders.iter().filter(|inv| inv.alive).count()
    }

    /// Drain the events produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
