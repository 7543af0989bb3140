//! Genetic data: traits, mutations, and per-creature genetic profiles.
//!
//! A [`GeneticProfile`] never holds two traits with the same name. The
//! invariant is enforced by [`GeneticProfile::new`], by [`GeneticProfile::add_trait`],
//! and on deserialization.
//!
//! The novel-trait pool and the mutation table below are fixed data: given
//! the same random source they always produce the same picks.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::creature::CreatureId;
use crate::species::Species;

/// Whether a trait passes readily to offspring or tends to stay hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dominance {
    Dominant,
    Recessive,
}

impl Dominance {
    pub fn all() -> &'static [Dominance] {
        &[Dominance::Dominant, Dominance::Recessive]
    }
}

/// Rarity tier of a trait, from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
        ]
    }

    /// Index into per-rarity tables (0 = common).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next rarer tier. Legendary stays legendary.
    pub fn promoted(self) -> Self {
        match self {
            Rarity::Common => Rarity::Uncommon,
            Rarity::Uncommon => Rarity::Rare,
            Rarity::Rare => Rarity::Epic,
            Rarity::Epic | Rarity::Legendary => Rarity::Legendary,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named heritable feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneticTrait {
    pub name: String,
    pub dominance: Dominance,
    pub rarity: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl GeneticTrait {
    pub fn new(name: impl Into<String>, dominance: Dominance, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            dominance,
            rarity,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What a mutation does to the offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationEffect {
    /// Adds one trait carried by neither parent.
    NewTrait,
    /// Promotes one inherited trait a rarity tier.
    TraitModification,
    /// Nudges one personality slider.
    PersonalityShift,
}

/// A mutation recorded on an offspring's genetic profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    pub name: String,
    pub effect: MutationEffect,
}

/// Named mutations and their effects. Picked uniformly on a mutation hit.
pub static MUTATION_KINDS: &[(&str, MutationEffect)] = &[
    ("Chromatic Shift", MutationEffect::NewTrait),
    ("Size Variation", MutationEffect::TraitModification),
    ("Behavioral Change", MutationEffect::PersonalityShift),
    ("Enhanced Ability", MutationEffect::NewTrait),
    ("Color Mutation", MutationEffect::TraitModification),
];

impl Mutation {
    /// Pick one of [`MUTATION_KINDS`] uniformly.
    pub fn random(rng: &mut impl Rng) -> Self {
        let (name, effect) = MUTATION_KINDS[rng.gen_range(0..MUTATION_KINDS.len())];
        Self {
            name: name.to_string(),
            effect,
        }
    }
}

/// Traits that can appear through mutation or founder seeding.
pub static NOVEL_TRAIT_POOL: &[(&str, Dominance, Rarity)] = &[
    // Appearance
    ("Vibrant Colors", Dominance::Dominant, Rarity::Uncommon),
    ("Pastel Colors", Dominance::Recessive, Rarity::Uncommon),
    ("Sparkle Effect", Dominance::Recessive, Rarity::Rare),
    ("Extra Large Size", Dominance::Dominant, Rarity::Uncommon),
    ("Miniature Size", Dominance::Recessive, Rarity::Rare),
    // Behavioral
    ("High Energy", Dominance::Dominant, Rarity::Common),
    ("Calm Demeanor", Dominance::Recessive, Rarity::Common),
    ("Extra Playful", Dominance::Dominant, Rarity::Uncommon),
    ("Highly Intelligent", Dominance::Recessive, Rarity::Rare),
    // Special abilities
    ("Fast Learner", Dominance::Dominant, Rarity::Uncommon),
    ("Empathic Bond", Dominance::Recessive, Rarity::Rare),
    ("Long Lifespan", Dominance::Recessive, Rarity::Epic),
    ("Unique Vocalization", Dominance::Dominant, Rarity::Uncommon),
    // Legendary
    ("Magical Aura", Dominance::Recessive, Rarity::Legendary),
    ("Shape Shifter", Dominance::Recessive, Rarity::Legendary),
];

/// Cumulative rarity roll for novel traits.
const RARITY_ROLL: [(Rarity, f32); 5] = [
    (Rarity::Common, 0.5),
    (Rarity::Uncommon, 0.8),
    (Rarity::Rare, 0.95),
    (Rarity::Epic, 0.99),
    (Rarity::Legendary, 1.0),
];

/// Roll a rarity tier: common 50%, uncommon 30%, rare 15%, epic 4%, legendary 1%.
pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    let roll: f32 = rng.gen();
    RARITY_ROLL
        .iter()
        .find(|(_, cutoff)| roll < *cutoff)
        .map(|(rarity, _)| *rarity)
        .unwrap_or(Rarity::Legendary)
}

/// Pick a trait from [`NOVEL_TRAIT_POOL`] whose name is not taken.
///
/// A rarity tier is rolled first; if every trait in that tier is taken, any
/// remaining pool trait is used instead. Returns `None` once the pool is
/// exhausted.
pub fn pick_novel_trait(
    is_taken: impl Fn(&str) -> bool,
    rng: &mut impl Rng,
) -> Option<GeneticTrait> {
    let tier = roll_rarity(rng);
    let available: Vec<_> = NOVEL_TRAIT_POOL
        .iter()
        .filter(|(name, _, _)| !is_taken(name))
        .collect();
    if available.is_empty() {
        return None;
    }

    let in_tier: Vec<_> = available
        .iter()
        .copied()
        .filter(|(_, _, rarity)| *rarity == tier)
        .collect();
    let candidates = if in_tier.is_empty() { &available } else { &in_tier };

    let (name, dominance, rarity) = candidates[rng.gen_range(0..candidates.len())];
    Some(GeneticTrait::new(*name, *dominance, *rarity))
}

/// Heritable makeup of one creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGeneticProfile")]
pub struct GeneticProfile {
    /// Breeding cycles since the generation-0 founders.
    pub generation: u32,
    traits: Vec<GeneticTrait>,
    /// Mutations that occurred when this creature was bred.
    pub mutations: Vec<Mutation>,
    /// Parents, empty for founders.
    pub parent_ids: Vec<CreatureId>,
}

#[derive(Deserialize)]
struct RawGeneticProfile {
    #[serde(default)]
    generation: u32,
    #[serde(default)]
    traits: Vec<GeneticTrait>,
    #[serde(default)]
    mutations: Vec<Mutation>,
    #[serde(default)]
    parent_ids: Vec<CreatureId>,
}

impl From<RawGeneticProfile> for GeneticProfile {
    fn from(raw: RawGeneticProfile) -> Self {
        let mut profile = GeneticProfile::new(raw.generation, raw.traits);
        profile.mutations = raw.mutations;
        profile.parent_ids = raw.parent_ids;
        profile
    }
}

impl Default for GeneticProfile {
    fn default() -> Self {
        Self::new(0, Vec::new())
    }
}

impl GeneticProfile {
    /// Build a profile. Later traits whose name was already seen are dropped.
    pub fn new(generation: u32, traits: impl IntoIterator<Item = GeneticTrait>) -> Self {
        let mut profile = Self {
            generation,
            traits: Vec::new(),
            mutations: Vec::new(),
            parent_ids: Vec::new(),
        };
        for t in traits {
            profile.add_trait(t);
        }
        profile
    }

    /// Random generation-0 genetics: species base traits plus 2–5 pool traits.
    pub fn random_for(species: Species, rng: &mut impl Rng) -> Self {
        let mut profile = Self::new(0, species.base_traits());
        let extra = rng.gen_range(2..=5);
        for _ in 0..extra {
            if let Some(t) = pick_novel_trait(|name| profile.has_trait(name), rng) {
                profile.add_trait(t);
            }
        }
        profile
    }

    /// Add a trait. Returns false (and leaves the profile unchanged) when a
    /// trait with the same name is already present.
    pub fn add_trait(&mut self, genetic_trait: GeneticTrait) -> bool {
        if self.has_trait(&genetic_trait.name) {
            return false;
        }
        self.traits.push(genetic_trait);
        true
    }

    pub fn traits(&self) -> &[GeneticTrait] {
        &self.traits
    }

    pub(crate) fn traits_mut(&mut self) -> &mut [GeneticTrait] {
        &mut self.traits
    }

    pub fn get_trait(&self, name: &str) -> Option<&GeneticTrait> {
        self.traits.iter().find(|t| t.name == name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.get_trait(name).is_some()
    }

    pub fn trait_names(&self) -> Vec<&str> {
        self.traits.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn count_traits(&self, rarity: Rarity) -> usize {
        self.traits.iter().filter(|t| t.rarity == rarity).count()
    }
}
