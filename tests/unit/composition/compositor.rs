use super::*;
use crate::composition::tags::{Chrono, Form, Hook, Mode, Signature};

fn every_input() -> impl Iterator<Item = CompositionInput> {
    Signature::ALL.iter().flat_map(|&signature| {
        Form::ALL.iter().flat_map(move |&form| {
            Chrono::ALL.iter().flat_map(move |&chrono| {
                Mode::ALL.iter().map(move |&mode| CompositionInput {
                    signature,
                    form,
                    chrono,
                    mode,
                    hook: Hook::Tap,
                    seed: (signature as u64) * 7 + form as u64,
                    is_capstone: chrono == Chrono::Night,
                })
            })
        })
    })
}

#[test]
fn compose_is_total_and_bounded() {
    let mut count = 0;
    for input in every_input() {
        let out = compose(&input);
        for (name, c) in out.palette.slots() {
            for v in [c.r, c.g, c.b, c.a] {
                assert!(v.is_finite() && (0.0..=1.0).contains(&v), "{name} {input:?}");
            }
        }
        for (name, s) in out.typography.presets() {
            assert!((0.0..=1.0).contains(&s.opacity), "{name}");
        }
        assert!(out.motion.entry.duration_ms > 0);
        assert!(out.motion.breath_cycle_ms > 0);
        assert!(out.radius.sm <= out.radius.md && out.radius.md <= out.radius.lg);
        assert_eq!(out.seal.is_some(), input.is_capstone);
        count += 1;
    }
    assert_eq!(count, 16 * 6 * 4 * 3);
}

#[test]
fn compose_is_deterministic() {
    for input in every_input().step_by(17) {
        let a = compose(&input);
        let b = compose(&input);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

#[test]
fn fingerprint_tracks_every_input_axis() {
    let base = CompositionInput {
        signature: Signature::Iris,
        form: Form::Thread,
        chrono: Chrono::Evening,
        mode: Mode::Embodying,
        hook: Hook::Drag,
        seed: 0,
        is_capstone: false,
    };
    let fp = compose(&base).fingerprint();
    let variants = [
        CompositionInput {
            signature: Signature::Sage,
            ..base
        },
        CompositionInput {
            form: Form::Bloom,
            ..base
        },
        CompositionInput {
            chrono: Chrono::Morning,
            ..base
        },
        CompositionInput {
            mode: Mode::Knowing,
            ..base
        },
        CompositionInput { seed: 1, ..base },
        CompositionInput {
            is_capstone: true,
            ..base
        },
    ];
    for v in variants {
        assert_ne!(compose(&v).fingerprint(), fp, "{v:?}");
    }
    let same_look = CompositionInput {
        hook: Hook::Hold,
        seed: 3,
        ..base
    };
    assert_eq!(compose(&same_look).fingerprint(), fp);
}

#[test]
fn seal_ring_uses_accent_glow() {
    let input = CompositionInput {
        signature: Signature::Aurora,
        form: Form::Orbit,
        chrono: Chrono::Night,
        mode: Mode::Believing,
        hook: Hook::Observe,
        seed: 2,
        is_capstone: true,
    };
    let out = compose(&input);
    let seal = out.seal.unwrap();
    assert_eq!(seal.color, out.palette.accent_glow);
    assert_eq!(seal.pulse_ms, out.motion.accent_pulse_ms);
    assert_eq!(out.variant, 2);
}

#[test]
fn compose_raw_rejects_unknown_tags() {
    let raw = RawCompositionInput::new("ember", "orbit", "midnight", "k", "tap", 0, false);
    let err = compose_raw(&raw).unwrap_err();
    assert_eq!(err.field(), Some("chrono"));

    let raw = RawCompositionInput::new("ember", "orbit", "night", "k", "tap", 0, false);
    let out = compose_raw(&raw).unwrap();
    assert_eq!(out, compose(&raw.parse().unwrap()));
}
