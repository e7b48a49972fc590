//! Audio system using Web Audio API
//!
//! Procedurally generated sound cues - no external files needed.

use std::cell::Cell;

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fires
    Shoot,
    /// Invader destroyed
    InvaderHit,
    /// Player struck by enemy fire
    PlayerHit,
    /// Bonus UFO destroyed
    UfoHit,
    /// Formation step (cycles through four descending pitches)
    InvaderMove,
    /// Run ended
    GameOver,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Shoot => SoundEffect::Shoot,
            GameEvent::InvaderHit => SoundEffect::InvaderHit,
            GameEvent::PlayerHit => SoundEffect::PlayerHit,
            GameEvent::UfoHit => SoundEffect::UfoHit,
            GameEvent::InvaderMove => SoundEffect::InvaderMove,
            GameEvent::GameOver => SoundEffect::GameOver,
        }
    }
}

/// The four-step pitch cycle of the formation march
const MOVE_PITCHES: [f32; 4] = [220.0, 196.0, 174.0, 155.0];

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Advances on every move cue regardless of cause, wrapping
    move_step: Cell<usize>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context; the game plays on silently
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            move_step: Cell::new(0),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue. Fire-and-forget: a cue that cannot be played is
    /// dropped, never retried.
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            // The pitch cycle still advances so the march stays in phase
            if effect == SoundEffect::InvaderMove {
                self.move_step.set(self.move_step.get().wrapping_add(1));
            }
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Shoot => self.play_sweep(ctx, 800.0, 100.0, 0.1, vol * 0.1),
            SoundEffect::InvaderHit => self.play_sweep(ctx, 150.0, 50.0, 0.2, vol * 0.15),
            SoundEffect::PlayerHit => self.play_sweep(ctx, 200.0, 50.0, 0.5, vol * 0.2),
            SoundEffect::UfoHit => self.play_sweep(ctx, 500.0, 100.0, 0.3, vol * 0.2),
            SoundEffect::InvaderMove => self.play_move_step(ctx, vol),
            SoundEffect::GameOver => self.play_sweep(ctx, 100.0, 50.0, 1.0, vol * 0.3),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Exponential frequency sweep with a decaying envelope - the shape of
    /// every one-shot cue in the game
    fn play_sweep(&self, ctx: &AudioContext, from: f32, to: f32, duration: f32, gain_level: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();
        let end = t + duration as f64;

        gain.gain().set_value_at_time(gain_level, t).ok();
        gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();
        osc.frequency().set_value_at_time(from, t).ok();
        osc.frequency().exponential_ramp_to_value_at_time(to, end).ok();

        osc.start().ok();
        osc.stop_with_when(end).ok();
    }

    /// One step of the formation march, advancing the pitch cycle
    fn play_move_step(&self, ctx: &AudioContext, vol: f32) {
        let step = self.move_step.get();
        self.move_step.set(step.wrapping_add(1));
        let freq = MOVE_PITCHES[step % MOVE_PITCHES.len()];

        let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.05, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }
}
