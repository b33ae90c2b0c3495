mod common;

use common::{quick_config, ronin};
use fight_content::bundled_config;
use fight_core::{InputBits, RoundPhase, Side};
use fight_runtime::{AiConfig, AiProvider, IdleProvider, Runtime};

fn ai_vs_ai(seeds: [u64; 2]) -> Runtime {
    Runtime::builder()
        .battle_config(bundled_config().unwrap())
        .mirror(ronin())
        .provider(Side::P1, AiProvider::new(AiConfig::with_seed(seeds[0])))
        .provider(Side::P2, AiProvider::new(AiConfig::with_seed(seeds[1])))
        .build()
        .unwrap()
}

fn input_trace(runtime: &mut Runtime, frames: u64) -> Vec<[InputBits; 2]> {
    (0..frames)
        .map(|_| {
            runtime.step();
            [runtime.last_input(Side::P1), runtime.last_input(Side::P2)]
        })
        .collect()
}

#[test]
fn same_seeds_play_the_same_match() {
    let a = input_trace(&mut ai_vs_ai([3, 4]), 2_000);
    let b = input_trace(&mut ai_vs_ai([3, 4]), 2_000);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_play_differently() {
    let a = input_trace(&mut ai_vs_ai([3, 4]), 2_000);
    let b = input_trace(&mut ai_vs_ai([5, 6]), 2_000);
    assert_ne!(a, b);
}

#[test]
fn ai_holds_neutral_until_it_has_a_delayed_sample() {
    let mut runtime = ai_vs_ai([1, 2]);

    // Tick 1 starts the intro; ticks 2..=7 fill the history and plan.
    for _ in 0..7 {
        runtime.step();
        assert!(runtime.last_input(Side::P1).is_empty());
        assert!(runtime.last_input(Side::P2).is_empty());
    }
    assert_eq!(runtime.engine().phase(), RoundPhase::Intro);
}

#[test]
fn first_step_is_towards_the_opponent_on_either_side() {
    let mut runtime = ai_vs_ai([11, 12]);
    let trace = input_trace(&mut runtime, 600);

    let first_direction = |side: Side| {
        trace
            .iter()
            .map(|bits| bits[side.index()] & (InputBits::LEFT | InputBits::RIGHT))
            .find(|bits| !bits.is_empty())
    };
    assert_eq!(first_direction(Side::P1), Some(InputBits::RIGHT));
    assert_eq!(first_direction(Side::P2), Some(InputBits::LEFT));
}

#[test]
fn ai_beats_an_idle_dummy() {
    let mut runtime = Runtime::builder()
        .battle_config(quick_config())
        .mirror(ronin())
        .provider(Side::P1, IdleProvider)
        .provider(Side::P2, AiProvider::new(AiConfig::with_seed(2024)))
        .build()
        .unwrap();

    assert_eq!(runtime.run_until_match_over(20_000).unwrap(), Side::P2);
}
