//! Rally Pong entry point
//!
//! Runs the fixed-rate frame loop: poll input, tick the simulation, hand the
//! snapshot and events to the renderer and audio sink, then wait for the next
//! frame. Without a display the autopilot plays one match and quits.

use std::time::Instant;

use rally_pong::audio::{self, AudioSink};
use rally_pong::consts::TICK_RATE;
use rally_pong::platform::{AutoPilot, FpsCounter, FrameLimiter, InputSource};
use rally_pong::renderer::{Renderer, TextRenderer};
use rally_pong::sim::{Snapshot, World, tick};
use rally_pong::Settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let seed: u64 = rand::random();
    log::info!("Starting Rally Pong (seed {seed})");

    let mut audio = audio::open_sink(&settings.audio);
    let mut input = AutoPilot::default();
    let mut renderer = TextRenderer::new();
    let mut limiter = FrameLimiter::new(TICK_RATE);
    let mut fps = FpsCounter::new();
    let show_fps = settings.show_fps;

    let mut world = World::new(settings, seed);
    let mut snapshot = Snapshot::capture(&world);

    loop {
        let keys = input.poll(&snapshot);
        if keys.quit {
            break;
        }

        let report = tick(&mut world, &keys);

        audio.play_events(&report.events);
        for clip in audio.take_queued() {
            log::trace!("Queued {:?} ({} bytes)", clip.effect, clip.data.len());
        }

        fps.record(Instant::now());
        renderer.render(&report.snapshot, show_fps.then(|| fps.fps()));
        snapshot = report.snapshot;

        limiter.wait();
    }

    let (left, right) = world.scores.scores();
    log::info!(
        "Quit after {} points ({left}-{right}), {} ticks",
        world.scores.history().len(),
        world.now().ticks()
    );
}
