//! Personality blending — offspring sliders from both parents.
//!
//! Each slider is the parents' mean plus uniform jitter in
//! `[-personality_jitter, +personality_jitter]`, clamped to [0.0, 1.0].

use rand::Rng;

use crate::config::BreedingConfig;
use crate::personality::{PersonalityProfile, Slider};

/// Mean of both parents' value for one slider.
pub fn parent_mean(p1: &PersonalityProfile, p2: &PersonalityProfile, slider: Slider) -> f32 {
    (p1.get(slider) + p2.get(slider)) / 2.0
}

/// Blend two parent personalities into an offspring personality.
pub fn blend(
    p1: &PersonalityProfile,
    p2: &PersonalityProfile,
    config: &BreedingConfig,
    rng: &mut impl Rng,
) -> PersonalityProfile {
    let jitter = config.personality_jitter;
    let mut child = PersonalityProfile::default();
    for &slider in Slider::all() {
        let noise = if jitter > 0.0 {
            rng.gen_range(-jitter..=jitter)
        } else {
            0.0
        };
        child.set(slider, parent_mean(p1, p2, slider) + noise);
    }
    child
}

/// Apply a personality-shift mutation: one slider, picked uniformly,
/// moves up or down by `personality_shift`.
pub fn apply_shift(
    profile: &PersonalityProfile,
    config: &BreedingConfig,
    rng: &mut impl Rng,
) -> PersonalityProfile {
    let sliders = Slider::all();
    let slider = sliders[rng.gen_range(0..sliders.len())];
    let delta = if rng.gen_bool(0.5) {
        config.personality_shift
    } else {
        -config.personality_shift
    };
    let mut shifted = *profile;
    shifted.set(slider, profile.get(slider) + delta);
    shifted
}
