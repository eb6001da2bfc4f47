//! Audio cues
//!
//! The simulation only emits events; this module maps them to sound clips and
//! queues them for whatever device the platform provides. Missing clips never
//! stop the game: they fall back to silence.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::settings::AudioSettings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// A point was scored
    Score,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::PaddleHit, SoundEffect::Score];

    /// Clip file name inside the clip directory
    pub fn clip_name(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "paddle.wav",
            SoundEffect::Score => "score.wav",
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::ScoreEvent { .. } => Some(SoundEffect::Score),
            _ => None,
        }
    }
}

/// A clip waiting for the output device
#[derive(Debug, Clone)]
pub struct QueuedClip {
    pub effect: SoundEffect,
    pub data: Arc<[u8]>,
}

/// Consumer of audio cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Hand queued clips to the output device
    fn take_queued(&mut self) -> Vec<QueuedClip> {
        Vec::new()
    }

    /// Play the cues for every event of a tick
    fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

/// No-op sink used when audio is muted or unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Sink backed by clips loaded from disk
#[derive(Debug, Default)]
pub struct ClipSink {
    clips: HashMap<SoundEffect, Arc<[u8]>>,
    queue: Vec<QueuedClip>,
}

impl ClipSink {
    /// Load every clip found in `dir`; missing clips stay silent
    pub fn load(dir: &Path) -> Self {
        let mut clips = HashMap::new();
        for effect in SoundEffect::ALL {
            let path = dir.join(effect.clip_name());
            match std::fs::read(&path) {
                Ok(data) => {
                    log::debug!("Loaded {} ({} bytes)", path.display(), data.len());
                    clips.insert(effect, Arc::from(data));
                }
                Err(err) => log::warn!("Sound {} unavailable: {err}", path.display()),
            }
        }
        Self {
            clips,
            queue: Vec::new(),
        }
    }

    pub fn has_clip(&self, effect: SoundEffect) -> bool {
        self.clips.contains_key(&effect)
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

impl AudioSink for ClipSink {
    fn play(&mut self, effect: SoundEffect) {
        if let Some(data) = self.clips.get(&effect) {
            self.queue.push(QueuedClip {
                effect,
                data: Arc::clone(data),
            });
        }
    }

    fn take_queued(&mut self) -> Vec<QueuedClip> {
        std::mem::take(&mut self.queue)
    }
}

/// Build the sink for the configured clip directory
pub fn open_sink(settings: &AudioSettings) -> Box<dyn AudioSink> {
    if settings.muted {
        log::info!("Audio muted");
        return Box::new(SilentSink);
    }
    let sink = ClipSink::load(&settings.clip_dir);
    if sink.is_empty() {
        log::warn!("No sound clips found, audio disabled");
        Box::new(SilentSink)
    } else {
        Box::new(sink)
    }
}
