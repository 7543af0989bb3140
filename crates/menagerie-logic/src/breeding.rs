//! Breeding coordinator — the engine's entry point.
//!
//! `breed` runs eligibility validation, then trait inheritance and
//! personality blending over the same two parents, and finally assembles the
//! offspring. A failed check stops the pipeline with a [`BreedingError`];
//! nothing is retried.
//!
//! ```
//! use menagerie_logic::breeding::BreedingSystem;
//! use menagerie_logic::creature::CreatureRecord;
//! use menagerie_logic::species::{LifeStage, Species};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let system = BreedingSystem::default();
//! let a = CreatureRecord::founder("Nova", Species::Luminos).with_life_stage(LifeStage::Adult);
//! let b = CreatureRecord::founder("Vega", Species::Luminos).with_life_stage(LifeStage::Adult);
//!
//! let forecast = system.predict_offspring(&a, &b);
//! assert_eq!(forecast.probability_of("Bioluminescence"), Some(1.0));
//!
//! let baby = system.breed(&a, &b, &mut rng).unwrap();
//! assert_eq!(baby.genetics.generation, 1);
//! ```

use rand::Rng;

use crate::blending::{apply_shift, blend};
use crate::config::{validate_config, BreedingConfig, ConfigError};
use crate::creature::CreatureRecord;
use crate::eligibility::{validate, Readiness};
use crate::error::BreedingError;
use crate::genetics::MutationEffect;
use crate::inheritance::resolve;
use crate::offspring::assemble;
use crate::prediction::{predict, BreedingPrediction};

/// Breeds creatures according to a [`BreedingConfig`].
///
/// Holds no random state; callers pass their own random source to
/// [`BreedingSystem::breed`], so one system can be shared across threads.
///
/// The held config always passes [`validate_config`]: [`BreedingSystem::new`]
/// rejects anything else, and `Default` uses the default config.
#[derive(Debug, Clone, Default)]
pub struct BreedingSystem {
    config: BreedingConfig,
}

impl BreedingSystem {
    /// Build a system from a config, returning every validation error if
    /// the config is unusable.
    pub fn new(config: BreedingConfig) -> Result<Self, Vec<ConfigError>> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            log::warn!("Rejected breeding config: {} errors", errors.len());
            return Err(errors);
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &BreedingConfig {
        &self.config
    }

    /// Breed two creatures with no readiness information.
    pub fn breed(
        &self,
        parent1: &CreatureRecord,
        parent2: &CreatureRecord,
        rng: &mut impl Rng,
    ) -> Result<CreatureRecord, BreedingError> {
        self.breed_with_readiness(parent1, parent2, Readiness::default(), rng)
    }

    /// Breed two creatures, honoring caller-supplied readiness flags.
    pub fn breed_with_readiness(
        &self,
        parent1: &CreatureRecord,
        parent2: &CreatureRecord,
        readiness: Readiness,
        rng: &mut impl Rng,
    ) -> Result<CreatureRecord, BreedingError> {
        if let Err(e) = validate(parent1, parent2, readiness, &self.config) {
            log::info!(
                "Breeding {} x {} rejected: {}",
                parent1.name,
                parent2.name,
                e
            );
            return Err(e);
        }

        let mut genetics = resolve(&parent1.genetics, &parent2.genetics, &self.config, rng);
        let mut personality = blend(&parent1.personality, &parent2.personality, &self.config, rng);

        if genetics
            .mutations
            .iter()
            .any(|m| m.effect == MutationEffect::PersonalityShift)
        {
            personality = apply_shift(&personality, &self.config, rng);
        }
        genetics.parent_ids = vec![parent1.id, parent2.id];

        let offspring = assemble(parent1.species, genetics, personality, &self.config, rng);
        log::debug!(
            "Bred {} ({}) from {} x {}: generation {}, {} traits, {} mutations",
            offspring.name,
            offspring.id,
            parent1.name,
            parent2.name,
            offspring.genetics.generation,
            offspring.genetics.traits().len(),
            offspring.genetics.mutations.len()
        );
        Ok(offspring)
    }

    /// Forecast the offspring of two creatures. Does not validate
    /// eligibility and consumes no randomness.
    pub fn predict_offspring(
        &self,
        parent1: &CreatureRecord,
        parent2: &CreatureRecord,
    ) -> BreedingPrediction {
        predict(
            &parent1.genetics,
            &parent2.genetics,
            &parent1.personality,
            &parent2.personality,
            &self.config,
        )
    }
}
