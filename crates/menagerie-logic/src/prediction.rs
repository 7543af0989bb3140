//! Breeding prediction — a non-committing forecast for a hypothetical pair.
//!
//! Prediction takes no random source, so it can never disturb a later real
//! breeding call. Trait probabilities come from
//! [`inheritance_probability`], the same function the resolver draws
//! against, and the mutation chance is the configured constant.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::blending::parent_mean;
use crate::config::BreedingConfig;
use crate::genetics::{GeneticProfile, GeneticTrait};
use crate::inheritance::{candidate_traits, inheritance_probability};
use crate::personality::{PersonalityProfile, Slider};

/// A closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval around `center`, clamped to [0.0, 1.0].
    pub fn around(center: f32, half_width: f32) -> Self {
        Self {
            min: (center - half_width).clamp(0.0, 1.0),
            max: (center + half_width).clamp(0.0, 1.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f32 {
        (self.max - self.min).max(0.0)
    }
}

/// Possible values of each offspring personality slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityRange {
    pub playfulness: Interval,
    pub loyalty: Interval,
    pub intelligence: Interval,
}

impl PersonalityRange {
    pub fn get(&self, slider: Slider) -> Interval {
        match slider {
            Slider::Playfulness => self.playfulness,
            Slider::Loyalty => self.loyalty,
            Slider::Intelligence => self.intelligence,
        }
    }
}

/// One trait the offspring might carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitProbability {
    #[serde(rename = "trait")]
    pub genetic_trait: GeneticTrait,
    pub probability: f32,
}

/// Forecast of an offspring's traits and personality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingPrediction {
    /// Ordered by probability (highest first), then by name.
    pub possible_traits: Vec<TraitProbability>,
    pub mutation_chance: f32,
    pub personality_range: PersonalityRange,
}

impl BreedingPrediction {
    pub fn probability_of(&self, name: &str) -> Option<f32> {
        self.possible_traits
            .iter()
            .find(|tp| tp.genetic_trait.name == name)
            .map(|tp| tp.probability)
    }

    /// Expected number of inherited parent traits (mutations excluded).
    pub fn expected_trait_count(&self) -> f32 {
        self.possible_traits.iter().map(|tp| tp.probability).sum()
    }
}

/// Predict the offspring of two parents without committing any randomness.
pub fn predict(
    genetics1: &GeneticProfile,
    genetics2: &GeneticProfile,
    personality1: &PersonalityProfile,
    personality2: &PersonalityProfile,
    config: &BreedingConfig,
) -> BreedingPrediction {
    let mut possible_traits: Vec<TraitProbability> = candidate_traits(genetics1, genetics2)
        .into_iter()
        .map(|c| TraitProbability {
            genetic_trait: c.genetic_trait.clone(),
            probability: inheritance_probability(
                c.genetic_trait,
                c.carried_by_both,
                &config.inheritance,
            ),
        })
        .collect();
    possible_traits.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.genetic_trait.name.cmp(&b.genetic_trait.name))
    });

    let spread = config.personality_spread();
    let range = |slider| Interval::around(parent_mean(personality1, personality2, slider), spread);

    BreedingPrediction {
        possible_traits,
        mutation_chance: config.mutation_chance,
        personality_range: PersonalityRange {
            playfulness: range(Slider::Playfulness),
            loyalty: range(Slider::Loyalty),
            intelligence: range(Slider::Intelligence),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::{Dominance, Rarity};

    fn genetics(traits: &[(&str, Dominance, Rarity)]) -> GeneticProfile {
        GeneticProfile::new(
            0,
            traits.iter().map(|(n, d, r)| GeneticTrait::new(*n, *d, *r)),
        )
    }

    fn sample() -> BreedingPrediction {
        let g1 = genetics(&[
            ("Blue Eyes", Dominance::Dominant, Rarity::Common),
            ("Fluffy Tail", Dominance::Recessive, Rarity::Rare),
        ]);
        let g2 = genetics(&[
            ("Blue Eyes", Dominance::Dominant, Rarity::Common),
            ("Sharp Claws", Dominance::Dominant, Rarity::Uncommon),
        ]);
        predict(
            &g1,
            &g2,
            &PersonalityProfile::new(0.9, 0.8, 0.7),
            &PersonalityProfile::new(0.3, 0.4, 0.5),
            &BreedingConfig::default(),
        )
    }

    #[test]
    fn test_shared_trait_is_certain() {
        let p = sample();
        assert_eq!(p.probability_of("Blue Eyes"), Some(1.0));
        assert_eq!(p.probability_of("Sharp Claws"), Some(0.45));
        assert_eq!(p.probability_of("Fluffy Tail"), Some(0.20));
        assert_eq!(p.probability_of("Nonexistent"), None);
    }

    #[test]
    fn test_ordering() {
        let names: Vec<_> = sample()
            .possible_traits
            .iter()
            .map(|tp| tp.genetic_trait.name.clone())
            .collect();
        assert_eq!(names, vec!["Blue Eyes", "Sharp Claws", "Fluffy Tail"]);
    }

    #[test]
    fn test_mutation_chance_is_config_constant() {
        assert_eq!(sample().mutation_chance, 0.05);
    }

    #[test]
    fn test_personality_range_brackets_jitter() {
        let p = sample();
        let config = BreedingConfig::default();
        for &s in Slider::all() {
            let r = p.personality_range.get(s);
            assert!(!r.is_empty());
            assert!(r.width() > 0.0);
            assert!(r.contains(0.6 - config.personality_jitter));
            assert!(r.contains(0.6 + config.personality_jitter));
        }
    }

    #[test]
    fn test_range_clamped_at_edges() {
        let g = GeneticProfile::default();
        let p = predict(
            &g,
            &g,
            &PersonalityProfile::new(1.0, 0.0, 0.5),
            &PersonalityProfile::new(1.0, 0.0, 0.5),
            &BreedingConfig::default(),
        );
        assert_eq!(p.personality_range.playfulness.max, 1.0);
        assert_eq!(p.personality_range.loyalty.min, 0.0);
        assert!(!p.personality_range.playfulness.is_empty());
    }

    #[test]
    fn test_expected_trait_count() {
        let expected = sample().expected_trait_count();
        assert!((expected - (1.0 + 0.45 + 0.20)).abs() < 1e-6);
    }

    #[test]
    fn test_serializes_trait_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["possible_traits"][0]["trait"]["name"] == "Blue Eyes");
    }
}
