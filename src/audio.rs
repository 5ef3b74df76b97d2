//! Audio system using the Web Audio API
//!
//! Procedurally generated ambient layers - no external files needed. Both
//! worlds' drones loop from the start edge onward; flipping worlds
//! cross-fades their gains rather than stopping and restarting nodes.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, GainNode, OscillatorType};

/// Ramp length for world cross-fades, seconds.
#[cfg(target_arch = "wasm32")]
const FADE_SECS: f64 = 0.3;

/// Audio manager for the game.
///
/// Owns one gain node per world; `set_world_volumes` is the whole mixing
/// interface the simulation boundary needs.
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    #[cfg(target_arch = "wasm32")]
    surface_gain: Option<GainNode>,
    #[cfg(target_arch = "wasm32")]
    beneath_gain: Option<GainNode>,
    music_volume: f32,
    muted: bool,
    playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context; the game runs fine silent.
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            surface_gain: None,
            beneath_gain: None,
            music_volume: 0.7,
            muted: false,
            playing: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            music_volume: 0.7,
            muted: false,
            playing: false,
        }
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.music_volume }
    }

    /// Resume the audio context (required after a user gesture).
    #[cfg(target_arch = "wasm32")]
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn resume(&self) {}

    /// Start both world drones looping at zero gain. Idempotent; called on
    /// the start edge.
    #[cfg(target_arch = "wasm32")]
    pub fn play_both_looping(&mut self) {
        if self.playing {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        // Surface: soft sine dyad.
        self.surface_gain =
            start_layer(ctx, OscillatorType::Sine, &[220.0, 330.0]);
        // Beneath: low detuned saws, slightly beating.
        self.beneath_gain =
            start_layer(ctx, OscillatorType::Sawtooth, &[55.0, 55.7]);

        self.playing = self.surface_gain.is_some() && self.beneath_gain.is_some();
        if self.playing {
            log::info!("Ambient layers started");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play_both_looping(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        log::info!("Ambient layers started (headless no-op)");
    }

    /// Cross-fade the two world layers. Called on start and on each
    /// completed world flip.
    #[cfg(target_arch = "wasm32")]
    pub fn set_world_volumes(&self, surface_vol: f32, beneath_vol: f32) {
        let Some(ctx) = &self.ctx else { return };
        let vol = self.effective_volume();
        let t = ctx.current_time() + FADE_SECS;

        if let Some(gain) = &self.surface_gain {
            let _ = gain
                .gain()
                .linear_ramp_to_value_at_time(surface_vol.clamp(0.0, 1.0) * vol, t);
        }
        if let Some(gain) = &self.beneath_gain {
            let _ = gain
                .gain()
                .linear_ramp_to_value_at_time(beneath_vol.clamp(0.0, 1.0) * vol, t);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set_world_volumes(&self, surface_vol: f32, beneath_vol: f32) {
        log::debug!(
            "world volumes: surface={:.2} beneath={:.2} (music {:.2})",
            surface_vol,
            beneath_vol,
            self.effective_volume()
        );
    }
}

/// Build one looping drone layer: oscillators into a shared gain into the
/// destination, started immediately at zero gain.
#[cfg(target_arch = "wasm32")]
fn start_layer(ctx: &AudioContext, osc_type: OscillatorType, freqs: &[f32]) -> Option<GainNode> {
    let gain = ctx.create_gain().ok()?;
    gain.gain().set_value(0.0);
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    for &freq in freqs {
        let osc = ctx.create_oscillator().ok()?;
        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        osc.start().ok()?;
    }

    Some(gain)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new();
        audio.set_music_volume(3.0);
        assert_eq!(audio.effective_volume(), 1.0);
        audio.set_muted(true);
        assert_eq!(audio.effective_volume(), 0.0);
    }
}
