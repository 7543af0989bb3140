//! Breeding rejection reasons.

use thiserror::Error;

use crate::species::LifeStage;

/// Why a pair of creatures could not be bred. Every variant carries enough
/// context to be shown to the player directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreedingError {
    #[error("{0} is not ready to breed yet")]
    ParentNotReady(String),
    #[error("{0} is at the {1} life stage; only adults can breed")]
    WrongLifeStage(String, LifeStage),
    #[error("{0} has insufficient health to breed ({1:.2})")]
    InsufficientHealth(String, f32),
    #[error("creatures of different species cannot breed")]
    SpeciesMismatch,
    #[error("a creature cannot breed with itself")]
    SameParent,
}
