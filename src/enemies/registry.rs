//! Enemy registry.
//!
//! Maps enemy names to definitions. The built-in registry is populated
//! once, on first use, and shared for the life of the process.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EngineError, EngineResult, GameRng};
use crate::weapons::{PlayerStats, Rarity, Weapon, WeaponCatalog};

use super::catalog::{builtin_enemies, EnemyDefinition};
use super::instance::EnemyInstance;

/// An enemy offered for the next round, with the reward for beating it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyOption {
    pub name: String,
    pub tier: u8,
    pub effect_text: String,
    pub defeat_text: String,
    pub icon: String,
    pub reward: Weapon,
}

/// Parameters for drawing enemy options.
#[derive(Clone, Copy, Debug)]
pub struct OptionRequest<'a> {
    pub tier: u8,
    pub count: usize,
    pub excluded_names: &'a [String],
    pub excluded_reward_ids: &'a [String],
    /// When set, enemies whose defeat condition needs more hints or
    /// graces than the player starts with are skipped.
    pub stats: Option<&'a PlayerStats>,
    /// Current equipment, for reward ownership ceilings.
    pub weapons: Option<&'a [Weapon]>,
}

impl<'a> OptionRequest<'a> {
    pub fn new(tier: u8, count: usize) -> Self {
        Self {
            tier,
            count,
            excluded_names: &[],
            excluded_reward_ids: &[],
            stats: None,
            weapons: None,
        }
    }

    #[must_use]
    pub fn excluding_names(mut self, names: &'a [String]) -> Self {
        self.excluded_names = names;
        self
    }

    #[must_use]
    pub fn excluding_rewards(mut self, ids: &'a [String]) -> Self {
        self.excluded_reward_ids = ids;
        self
    }

    #[must_use]
    pub fn for_player(mut self, stats: &'a PlayerStats, weapons: &'a [Weapon]) -> Self {
        self.stats = Some(stats);
        self.weapons = Some(weapons);
        self
    }
}

/// Name-keyed enemy definitions.
#[derive(Debug, Default)]
pub struct EnemyRegistry {
    definitions: Vec<EnemyDefinition>,
    by_name: FxHashMap<&'static str, usize>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in registry.
    pub fn builtin() -> &'static EnemyRegistry {
        static REGISTRY: OnceLock<EnemyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut registry = EnemyRegistry::new();
            for definition in builtin_enemies() {
                registry.register(definition);
            }
            registry
        })
    }

    /// Register a definition.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, definition: EnemyDefinition) {
        if self.by_name.contains_key(definition.name) {
            panic!("Enemy {:?} already registered", definition.name);
        }
        self.by_name.insert(definition.name, self.definitions.len());
        self.definitions.push(definition);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnemyDefinition> {
        self.by_name.get(name).map(|&i| &self.definitions[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.definitions.iter()
    }

    /// Build a fresh instance by name.
    pub fn create_enemy(&self, name: &str) -> EngineResult<EnemyInstance> {
        self.get(name)
            .map(EnemyDefinition::create)
            .ok_or_else(|| EngineError::UnknownEnemy(name.to_string()))
    }

    /// Draw up to `request.count` distinct enemies of a tier, each paired
    /// with a reward weapon not offered elsewhere in the same draw.
    pub fn random_options(
        &self,
        request: &OptionRequest,
        catalog: &WeaponCatalog,
        rng: &mut GameRng,
    ) -> Vec<EnemyOption> {
        let mut candidates: Vec<&EnemyDefinition> = self
            .definitions
            .iter()
            .filter(|d| d.tier == request.tier)
            .filter(|d| !request.excluded_names.iter().any(|n| n == d.name))
            .filter(|d| {
                request.stats.is_none_or(|stats| {
                    stats.starting_hints() >= d.requirements.hints
                        && stats.starting_graces() >= d.requirements.graces
                })
            })
            .collect();
        rng.shuffle(&mut candidates);
        candidates.truncate(request.count);

        let owned = request.weapons.unwrap_or(&[]);
        let rarity = Rarity::for_tier(request.tier);
        let mut excluded_rewards: Vec<String> = request.excluded_reward_ids.to_vec();

        let options: Vec<EnemyOption> = candidates
            .into_iter()
            .map(|definition| {
                let reward = catalog.pick_reward(rarity, owned, &excluded_rewards, rng);
                excluded_rewards.push(reward.id.clone());
                EnemyOption {
                    name: definition.name.to_string(),
                    tier: definition.tier,
                    effect_text: definition.effect_text.to_string(),
                    defeat_text: definition.defeat_text.to_string(),
                    icon: definition.icon.to_string(),
                    reward,
                }
            })
            .collect();
        debug!(tier = request.tier, offered = options.len(), "drew enemy options");
        options
    }
}

/// Build a built-in enemy by name.
pub fn create_enemy(name: &str) -> EngineResult<EnemyInstance> {
    EnemyRegistry::builtin().create_enemy(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::{BaseStats, StatKind};

    #[test]
    fn test_unknown_enemy() {
        let err = create_enemy("Nobody").unwrap_err();
        assert_eq!(err, EngineError::UnknownEnemy("Nobody".to_string()));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = EnemyRegistry::builtin() as *const EnemyRegistry;
        let b = EnemyRegistry::builtin() as *const EnemyRegistry;
        assert_eq!(a, b);
        assert_eq!(EnemyRegistry::builtin().len(), 32);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_register_panics() {
        let mut registry = EnemyRegistry::new();
        let def = *EnemyRegistry::builtin().get("Glass Moth").unwrap();
        registry.register(def);
        registry.register(def);
    }

    #[test]
    fn test_options_distinct_and_filtered() {
        let registry = EnemyRegistry::builtin();
        let catalog = WeaponCatalog::builtin();
        let excluded = vec!["Glass Moth".to_string()];
        let request = OptionRequest::new(1, 3).excluding_names(&excluded);
        let mut rng = GameRng::new(12);

        let options = registry.random_options(&request, &catalog, &mut rng);
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| o.tier == 1 && o.name != "Glass Moth"));

        let mut names: Vec<_> = options.iter().map(|o| o.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_options_skip_unmeetable_conditions() {
        let registry = EnemyRegistry::builtin();
        let catalog = WeaponCatalog::builtin();
        let base = BaseStats {
            graces: 0,
            ..BaseStats::default()
        };
        let stats = PlayerStats::aggregate(&base, &[]);
        let request = OptionRequest::new(3, 8).for_player(&stats, &[]);
        let mut rng = GameRng::new(12);

        let options = registry.random_options(&request, &catalog, &mut rng);
        assert_eq!(options.len(), 7);
        assert!(options.iter().all(|o| o.name != "Spite Wraith"));

        // Enough hints for the sphinx.
        let stats = PlayerStats::default().with_stat(StatKind::StartingHints, 2.0);
        let request = OptionRequest::new(4, 8).for_player(&stats, &[]);
        let options = registry.random_options(&request, &catalog, &mut rng);
        assert!(options.iter().any(|o| o.name == "Mirror Sphinx"));
    }

    #[test]
    fn test_rewards_not_repeated() {
        let registry = EnemyRegistry::builtin();
        let catalog = WeaponCatalog::builtin();
        let mut rng = GameRng::new(3);
        let options = registry.random_options(&OptionRequest::new(2, 3), &catalog, &mut rng);

        let mut ids: Vec<_> = options.iter().map(|o| o.reward.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), options.len());
    }
}
