use xxhash_rust::xxh3::Xxh3;

use crate::{
    animation::ease::Ease,
    composition::{
        compositor::CompositionOutput,
        motion::{Motion, RadiusTokens},
        typography::TextStyle,
    },
    foundation::color::Rgba,
};

const XXH3_SEED: u64 = 0x3c5e_a1d0_97b2_4f68;

/// Stable 128-bit digest of a [`CompositionOutput`].
///
/// Equal outputs always produce equal fingerprints across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct OutputFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

pub(crate) fn fingerprint_output(out: &CompositionOutput) -> OutputFingerprint {
    let mut h = StableHasher::new();
    for (_, c) in out.palette.slots() {
        h.write_color(c);
    }
    for (_, s) in out.typography.presets() {
        h.write_style(s);
    }
    h.write_motion(&out.motion);
    h.write_radius(&out.radius);
    match &out.seal {
        Some(seal) => {
            h.write_u8(1);
            h.write_color(seal.color);
            h.write_f64(seal.width_px);
            h.write_u32(seal.pulse_ms);
        }
        None => h.write_u8(0),
    }
    h.write_u8(out.variant);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn write_color(&mut self, c: Rgba) {
        for v in [c.r, c.g, c.b, c.a] {
            self.write_f64(v);
        }
    }

    fn write_style(&mut self, s: TextStyle) {
        self.write_f64(s.size_px);
        self.write_u16(s.weight);
        self.write_f64(s.tracking_em);
        self.write_f64(s.line_height);
        self.write_f64(s.opacity);
    }

    fn write_motion(&mut self, m: &Motion) {
        self.write_u32(m.entry.duration_ms);
        self.write_u8(match m.entry.ease {
            Ease::OutQuad => 0,
            Ease::OutCubic => 1,
            Ease::InOutCubic => 2,
        });
        self.write_u32(m.breath_cycle_ms);
        self.write_u32(m.accent_pulse_ms);
        self.write_u32(m.stagger_ms);
    }

    fn write_radius(&mut self, r: &RadiusTokens) {
        for v in [r.sm, r.md, r.lg, r.pill] {
            self.write_f64(v);
        }
    }

    fn finish(self) -> OutputFingerprint {
        let v = self.inner.digest128();
        OutputFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
