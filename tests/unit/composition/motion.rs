use super::*;
use crate::composition::tags::{Chrono, Hook, Mode, Signature};

fn input(form: Form, mode: Mode, seed: u64) -> CompositionInput {
    CompositionInput {
        signature: Signature::Ember,
        form,
        chrono: Chrono::Work,
        mode,
        hook: Hook::Observe,
        seed,
        is_capstone: false,
    }
}

#[test]
fn sharper_forms_enter_faster() {
    let shard = derive_motion(&input(Form::Shard, Mode::Knowing, 0));
    let bloom = derive_motion(&input(Form::Bloom, Mode::Knowing, 0));
    assert_eq!(shard.entry.duration_ms, 450);
    assert_eq!(shard.entry.ease, Ease::OutCubic);
    assert!(bloom.entry.duration_ms > shard.entry.duration_ms);
    assert_eq!(bloom.entry.ease, Ease::InOutCubic);
    assert_eq!(shard.entry.duration(), Duration::from_millis(450));
}

#[test]
fn entry_durations_order_by_sharpness() {
    let mut forms: Vec<Form> = Form::ALL.to_vec();
    forms.sort_by(|a, b| {
        form_profile(*a)
            .sharpness
            .total_cmp(&form_profile(*b).sharpness)
    });
    let durations: Vec<u32> = forms
        .iter()
        .map(|&f| derive_motion(&input(f, Mode::Embodying, 0)).entry.duration_ms)
        .collect();
    assert!(durations.windows(2).all(|w| w[0] >= w[1]), "{durations:?}");
}

#[test]
fn softer_forms_round_their_corners() {
    let shard = derive_radius(Form::Shard);
    let bloom = derive_radius(Form::Bloom);
    assert!(shard.md < bloom.md);
    assert_eq!(shard.pill, bloom.pill);
}

#[test]
fn mode_and_seed_shape_the_breath() {
    let k = derive_motion(&input(Form::Orbit, Mode::Knowing, 0));
    let b = derive_motion(&input(Form::Orbit, Mode::Believing, 0));
    assert_eq!(k.breath_cycle_ms, 4200);
    assert_eq!(b.breath_cycle_ms, 6400);

    let k1 = derive_motion(&input(Form::Orbit, Mode::Knowing, 1));
    let k2 = derive_motion(&input(Form::Orbit, Mode::Knowing, 2));
    assert_eq!(k1.breath_cycle_ms, 4500);
    assert_eq!(k2.breath_cycle_ms, 3900);
    assert_eq!(k.breath_cycle(), Duration::from_millis(4200));
}

#[test]
fn capstone_slows_the_accent_pulse() {
    let mut x = input(Form::Pulse, Mode::Knowing, 0);
    let plain = derive_motion(&x);
    x.is_capstone = true;
    let cap = derive_motion(&x);
    assert!(cap.accent_pulse_ms > plain.accent_pulse_ms);
    assert_eq!(cap.entry, plain.entry);
}
