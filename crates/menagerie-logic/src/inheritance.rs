//! Trait inheritance — which parent traits an offspring receives.
//!
//! Traits are visited in a fixed order (parent 1's traits, then parent 2's
//! traits not already seen), so a seeded random source always yields the
//! same offspring. A trait carried by both parents is always inherited and
//! consumes no randomness. A trait carried by one parent is inherited with
//! the probability given by the [`InheritanceTable`].
//!
//! [`inheritance_probability`] is the single place that maps a trait to its
//! chance of being passed on; the prediction engine reads it too.

use rand::Rng;

use crate::config::{BreedingConfig, InheritanceTable, SHARED_TRAIT_PROBABILITY};
use crate::genetics::{pick_novel_trait, GeneticProfile, GeneticTrait, Mutation, MutationEffect};

/// A trait from the union of both parents' traits.
#[derive(Debug, Clone, Copy)]
pub struct CandidateTrait<'a> {
    pub genetic_trait: &'a GeneticTrait,
    pub carried_by_both: bool,
}

/// Union of both parents' traits by name, in first-appearance order.
/// For a shared name, parent 1's record of the trait is used.
pub fn candidate_traits<'a>(
    genetics1: &'a GeneticProfile,
    genetics2: &'a GeneticProfile,
) -> Vec<CandidateTrait<'a>> {
    let from_first = genetics1.traits().iter().map(|t| CandidateTrait {
        genetic_trait: t,
        carried_by_both: genetics2.has_trait(&t.name),
    });
    let only_second = genetics2
        .traits()
        .iter()
        .filter(|t| !genetics1.has_trait(&t.name))
        .map(|t| CandidateTrait {
            genetic_trait: t,
            carried_by_both: false,
        });
    from_first.chain(only_second).collect()
}

/// Chance that an offspring inherits a trait.
pub fn inheritance_probability(
    genetic_trait: &GeneticTrait,
    carried_by_both: bool,
    table: &InheritanceTable,
) -> f32 {
    if carried_by_both {
        SHARED_TRAIT_PROBABILITY
    } else {
        table.probability(genetic_trait.dominance, genetic_trait.rarity)
    }
}

/// Compute an offspring's genetic profile from both parents.
///
/// `parent_ids` is left empty; the breeding coordinator fills it in.
pub fn resolve(
    genetics1: &GeneticProfile,
    genetics2: &GeneticProfile,
    config: &BreedingConfig,
    rng: &mut impl Rng,
) -> GeneticProfile {
    let generation = genetics1.generation.max(genetics2.generation) + 1;
    let mut offspring = GeneticProfile::new(generation, Vec::new());

    for candidate in candidate_traits(genetics1, genetics2) {
        let p = inheritance_probability(
            candidate.genetic_trait,
            candidate.carried_by_both,
            &config.inheritance,
        );
        // Certain inheritance consumes no randomness.
        let inherited = p >= 1.0 || rng.gen::<f32>() < p;
        if inherited {
            offspring.add_trait(candidate.genetic_trait.clone());
        }
    }

    if rng.gen::<f32>() < config.mutation_chance {
        let mutation = Mutation::random(rng);
        apply_mutation(&mut offspring, genetics1, genetics2, mutation.effect, rng);
        offspring.mutations.push(mutation);
    }

    offspring
}

fn apply_mutation(
    offspring: &mut GeneticProfile,
    genetics1: &GeneticProfile,
    genetics2: &GeneticProfile,
    effect: MutationEffect,
    rng: &mut impl Rng,
) {
    match effect {
        MutationEffect::NewTrait => {
            let taken = |name: &str| genetics1.has_trait(name) || genetics2.has_trait(name);
            if let Some(novel) = pick_novel_trait(taken, rng) {
                offspring.add_trait(novel);
            }
        }
        MutationEffect::TraitModification => {
            let traits = offspring.traits_mut();
            if !traits.is_empty() {
                let idx = rng.gen_range(0..traits.len());
                traits[idx].rarity = traits[idx].rarity.promoted();
            }
        }
        // Applied to the blended personality by the coordinator.
        MutationEffect::PersonalityShift => {}
    }
}
