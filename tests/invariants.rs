//! Property tests for the clamped simulation invariants

use proptest::prelude::*;

use rally_pong::Settings;
use rally_pong::consts::BALL_MAX_SPEED;
use rally_pong::sim::{GameState, TickInput, World, tick};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<[bool; 4]>(), 0u8..40).prop_map(|(held, roll)| TickInput {
        left_up: held[0],
        left_down: held[1],
        right_up: held[2],
        right_down: held[3],
        // Occasional one-shot commands
        any_key: roll < 6,
        pause: roll == 0,
        reset: roll == 1,
        cycle_theme: roll == 2,
        quit: false,
    })
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (any::<bool>(), 0.0f64..=1.0, 0.0f64..=0.2).prop_map(|(ai, error, spawn)| {
        let mut settings = Settings::default();
        settings.ai.enabled = ai;
        settings.ai.error_chance = error;
        settings.powerups.spawn_chance = spawn;
        settings
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn paddles_stay_in_court_and_ball_speed_is_bounded(
        seed in any::<u64>(),
        settings in settings_strategy(),
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let court_height = settings.court_height;
        let mut world = World::new(settings, seed);
        tick(&mut world, &TickInput { any_key: true, ..Default::default() });

        for input in &inputs {
            let report = tick(&mut world, input);
            for paddle in &report.snapshot.paddles {
                prop_assert!(paddle.rect.top() >= 0.0);
                prop_assert!(paddle.rect.bottom() <= court_height + 1e-3);
            }
            prop_assert!(world.ball.vel.x.abs() <= BALL_MAX_SPEED);
            prop_assert!(world.ball.vel.y.abs() <= BALL_MAX_SPEED);
        }
    }

    #[test]
    fn scores_only_grow_within_a_match(
        seed in any::<u64>(),
        ticks in 1usize..3000,
    ) {
        let mut world = World::new(Settings::default(), seed);
        let start = TickInput { any_key: true, ..Default::default() };
        tick(&mut world, &start);

        let mut last = (0, 0);
        for _ in 0..ticks {
            let report = tick(&mut world, &TickInput::default());
            let now = (report.snapshot.left_score, report.snapshot.right_score);
            prop_assert!(now.0 >= last.0 && now.1 >= last.1);
            prop_assert_eq!(world.scores.history().len() as u32, now.0 + now.1);
            last = now;
            if world.state == GameState::GameOver {
                break;
            }
        }
    }
}
