//! Breeding eligibility — pure checks over two parent snapshots.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. same creature twice
//! 2. species mismatch
//! 3. life stage (both must be adults)
//! 4. health threshold
//! 5. caller-supplied readiness (e.g. a breeding cooldown tracked elsewhere)
//!
//! Within one check, parent 1 is examined before parent 2.

use crate::config::BreedingConfig;
use crate::creature::CreatureRecord;
use crate::error::BreedingError;

/// Readiness flags supplied by the caller. `None` means no flag was given
/// and the parent is treated as ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Readiness {
    pub parent1: Option<bool>,
    pub parent2: Option<bool>,
}

impl Readiness {
    /// Both parents explicitly ready or not.
    pub fn both(ready: bool) -> Self {
        Self {
            parent1: Some(ready),
            parent2: Some(ready),
        }
    }
}

/// Validate that two creatures may breed.
pub fn validate(
    parent1: &CreatureRecord,
    parent2: &CreatureRecord,
    readiness: Readiness,
    config: &BreedingConfig,
) -> Result<(), BreedingError> {
    if parent1.id == parent2.id {
        return Err(BreedingError::SameParent);
    }

    if parent1.species != parent2.species {
        return Err(BreedingError::SpeciesMismatch);
    }

    for parent in [parent1, parent2] {
        if !parent.life_stage.can_breed() {
            return Err(BreedingError::WrongLifeStage(
                parent.name.clone(),
                parent.life_stage,
            ));
        }
    }

    for parent in [parent1, parent2] {
        // NaN health fails the gate.
        if !(parent.health >= config.min_breeding_health) {
            return Err(BreedingError::InsufficientHealth(
                parent.name.clone(),
                parent.health,
            ));
        }
    }

    for (parent, ready) in [(parent1, readiness.parent1), (parent2, readiness.parent2)] {
        if ready == Some(false) {
            return Err(BreedingError::ParentNotReady(parent.name.clone()));
        }
    }

    Ok(())
}
