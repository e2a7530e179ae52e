//! Processor lifecycle tests
//!
//! Covers the prepare/process/release transitions, configuration errors,
//! stream restarts and the mono path.

use smileyq_core::{BusLayout, ChannelLayout, EqError, EqParameters, EqPreset, ProcessSpec};
use smileyq_dsp::test_utils::*;
use smileyq_dsp::{Channel, EqProcessor, ProcessorState};
use std::sync::Arc;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("smileyq_dsp=debug")
        .try_init();
}

fn boosted_params() -> Arc<EqParameters> {
    Arc::new(EqParameters::with_preset(EqPreset::VShape))
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn invalid_sample_rates_refuse_to_prepare() {
    init_logging();
    let mut eq = EqProcessor::new(boosted_params());

    for rate in [0.0, -44100.0, f64::NAN] {
        let err = eq.prepare(ProcessSpec::stereo(rate, 512)).unwrap_err();
        assert!(matches!(err, EqError::InvalidSampleRate(_)));
        assert!(err.is_configuration());
        assert_eq!(eq.state(), ProcessorState::Unprepared);
    }

    let err = eq.prepare(ProcessSpec::stereo(32000.0, 512)).unwrap_err();
    assert!(matches!(err, EqError::BelowNyquistFloor { .. }));

    let err = eq.prepare(ProcessSpec::stereo(48000.0, 0)).unwrap_err();
    assert!(matches!(err, EqError::InvalidBlockSize(0)));
}

#[test]
fn rejected_layouts_never_reach_prepare() {
    let bus = BusLayout {
        input: ChannelLayout::Stereo,
        output: ChannelLayout::Mono,
    };
    assert!(matches!(
        ProcessSpec::for_bus(bus, 48000.0, 512),
        Err(EqError::UnsupportedLayout { .. })
    ));

    let mut eq = EqProcessor::new(boosted_params());
    let spec = ProcessSpec::for_bus(BusLayout::STEREO, 48000.0, 512).unwrap();
    eq.prepare(spec).unwrap();
    assert_eq!(eq.spec().map(|s| s.channels()), Some(2));
}

#[test]
fn audio_untouched_after_failed_prepare() {
    let mut eq = EqProcessor::new(boosted_params());
    eq.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();
    assert!(eq.prepare(ProcessSpec::stereo(-1.0, 512)).is_err());

    let input = generate_sine(440.0, 48000.0, 512, 0.5);
    let mut left = input.clone();
    let mut right = input.clone();
    eq.process(&mut left, Some(&mut right));

    assert_eq!(left, input);
    assert_eq!(right, input);
}

// ============================================================================
// RESTART
// ============================================================================

#[test]
fn restart_zeroes_history() {
    init_logging();
    let params = boosted_params();

    // Reference: impulse into a freshly prepared processor
    let mut fresh = EqProcessor::new(Arc::clone(&params));
    fresh.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();
    let impulse = generate_impulse(512, 0, 1.0);
    let mut expected = impulse.clone();
    fresh.process(&mut expected, None);

    // Drive another processor hard, then restart it
    let mut eq = EqProcessor::new(Arc::clone(&params));
    eq.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();
    let noise = generate_white_noise(512, 1.0, 9);
    for _ in 0..20 {
        let mut left = noise.clone();
        let mut right = noise.clone();
        eq.process(&mut left, Some(&mut right));
    }
    assert!(!eq.chain(Channel::Left).is_at_rest());
    assert!(!eq.chain(Channel::Right).is_at_rest());

    eq.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();
    assert!(eq.chain(Channel::Left).is_at_rest());
    assert!(eq.chain(Channel::Right).is_at_rest());

    let mut after = impulse.clone();
    eq.process(&mut after, None);
    assert_eq!(after, expected, "pre-restart energy leaked into the new stream");
}

#[test]
fn silence_in_silence_out_after_restart() {
    let mut eq = EqProcessor::new(boosted_params());
    eq.prepare(ProcessSpec::mono(44100.0, 256)).unwrap();

    let mut loud = generate_white_noise(256, 1.0, 3);
    eq.process(&mut loud, None);

    eq.release();
    eq.prepare(ProcessSpec::mono(96000.0, 256)).unwrap();

    let mut silence = vec![0.0f32; 256];
    eq.process(&mut silence, None);
    assert!(silence.iter().all(|&s| s == 0.0));
}

#[test]
fn history_persists_across_blocks() {
    let params = boosted_params();
    let input = generate_white_noise(1024, 0.5, 5);

    let mut whole = EqProcessor::new(Arc::clone(&params));
    whole.prepare(ProcessSpec::mono(48000.0, 1024)).unwrap();
    let mut one_block = input.clone();
    whole.process(&mut one_block, None);

    let mut split = EqProcessor::new(params);
    split.prepare(ProcessSpec::mono(48000.0, 1024)).unwrap();
    let mut blocks = input.clone();
    for block in blocks.chunks_mut(100) {
        split.process(block, None);
    }

    assert_eq!(one_block, blocks);
}

// ============================================================================
// MONO PATH
// ============================================================================

#[test]
fn mono_never_touches_right_chain() {
    let mut eq = EqProcessor::new(boosted_params());
    eq.prepare(ProcessSpec::mono(48000.0, 512)).unwrap();

    for seed in 0..10 {
        let mut block = generate_white_noise(512, 1.0, seed);
        eq.process(&mut block, None);
        assert!(all_finite(&block));
    }

    let mut interleaved = generate_white_noise(512, 1.0, 99);
    eq.process_interleaved(&mut interleaved);

    assert!(!eq.chain(Channel::Left).is_at_rest());
    assert!(eq.chain(Channel::Right).is_at_rest());
}

#[test]
fn stereo_channels_do_not_leak() {
    let mut eq = EqProcessor::new(boosted_params());
    eq.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();

    let mut left = generate_white_noise(512, 1.0, 11);
    let mut right = vec![0.0f32; 512];
    eq.process(&mut left, Some(&mut right));

    assert!(right.iter().all(|&s| s == 0.0));
    assert!(eq.chain(Channel::Right).is_at_rest());
}

#[test]
fn release_returns_to_pass_through() {
    let mut eq = EqProcessor::new(boosted_params());
    eq.prepare(ProcessSpec::stereo(48000.0, 64)).unwrap();
    eq.release();
    assert_eq!(eq.state(), ProcessorState::Unprepared);

    let input = generate_sine(1000.0, 48000.0, 64, 0.5);
    let mut buffer = input.clone();
    eq.process_interleaved(&mut buffer);
    assert_eq!(buffer, input);
}
