//! Personality sliders — three behavioral values in [0.0, 1.0].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::species::Species;

/// Spread of founder personalities around their species baseline.
const FOUNDER_SPREAD: f32 = 0.15;

/// Behavioral sliders, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub playfulness: f32,
    pub loyalty: f32,
    pub intelligence: f32,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}

impl PersonalityProfile {
    /// Create a profile; values are clamped to [0.0, 1.0].
    pub fn new(playfulness: f32, loyalty: f32, intelligence: f32) -> Self {
        Self {
            playfulness: playfulness.clamp(0.0, 1.0),
            loyalty: loyalty.clamp(0.0, 1.0),
            intelligence: intelligence.clamp(0.0, 1.0),
        }
    }

    /// Random founder personality scattered around the species baseline.
    pub fn random_for(species: Species, rng: &mut impl Rng) -> Self {
        let base = species.base_personality();
        let mut profile = base;
        for &slider in Slider::all() {
            let offset = rng.gen_range(-FOUNDER_SPREAD..=FOUNDER_SPREAD);
            profile.set(slider, base.get(slider) + offset);
        }
        profile
    }

    pub fn get(&self, slider: Slider) -> f32 {
        match slider {
            Slider::Playfulness => self.playfulness,
            Slider::Loyalty => self.loyalty,
            Slider::Intelligence => self.intelligence,
        }
    }

    /// Set a slider, clamping to [0.0, 1.0].
    pub fn set(&mut self, slider: Slider, value: f32) {
        let v = value.clamp(0.0, 1.0);
        match slider {
            Slider::Playfulness => self.playfulness = v,
            Slider::Loyalty => self.loyalty = v,
            Slider::Intelligence => self.intelligence = v,
        }
    }
}

/// Identifies one personality slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slider {
    Playfulness,
    Loyalty,
    Intelligence,
}

impl Slider {
    pub fn all() -> &'static [Slider] {
        &[Slider::Playfulness, Slider::Loyalty, Slider::Intelligence]
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::Playfulness => "playfulness",
            Slider::Loyalty => "loyalty",
            Slider::Intelligence => "intelligence",
        }
    }
}
