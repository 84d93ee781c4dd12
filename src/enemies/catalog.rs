//! Built-in enemy definitions.
//!
//! Eight enemies per tier. Each definition pairs a behavior kit with a
//! defeat condition that reads only [`RoundStats`].

use crate::round::RoundStats;

use super::behavior::EnemyBehavior;
use super::behaviors::*;
use super::instance::EnemyInstance;

/// Resources a defeat condition needs the player to bring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefeatRequirements {
    pub hints: u32,
    pub graces: u32,
}

/// Static description of an enemy plus its factory functions.
#[derive(Clone, Copy)]
pub struct EnemyDefinition {
    pub name: &'static str,
    pub tier: u8,
    pub effect_text: &'static str,
    pub defeat_text: &'static str,
    pub icon: &'static str,
    pub requirements: DefeatRequirements,
    pub behaviors: fn() -> Vec<Box<dyn EnemyBehavior>>,
    pub defeat: fn(&RoundStats) -> bool,
}

impl std::fmt::Debug for EnemyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnemyDefinition")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish()
    }
}

impl EnemyDefinition {
    /// Build a fresh instance with its own behavior state.
    #[must_use]
    pub fn create(&self) -> EnemyInstance {
        EnemyInstance::new(self.name, self.tier, (self.behaviors)(), Box::new(self.defeat))
            .with_text(self.effect_text, self.defeat_text)
            .with_icon(self.icon)
    }
}

macro_rules! kit {
    ($($behavior:expr),* $(,)?) => {{
        let mut kit: Vec<Box<dyn EnemyBehavior>> = Vec::new();
        $(kit.push(Box::new($behavior));)*
        kit
    }};
}

const NONE: DefeatRequirements = DefeatRequirements { hints: 0, graces: 0 };

/// Every built-in enemy, tier by tier.
pub fn builtin_enemies() -> Vec<EnemyDefinition> {
    vec![
        // Tier 1
        EnemyDefinition {
            name: "Mist Wisp",
            tier: 1,
            effect_text: "Opens with 2 face-down cards; 20% of drawn cards arrive face down",
            defeat_text: "Clear 2 face-down cards",
            icon: "mist_wisp",
            requirements: NONE,
            behaviors: || kit![ShroudSeeder::new(2), ShroudedDraw::new(20.0)],
            defeat: |s| s.face_down_cleared >= 2,
        },
        EnemyDefinition {
            name: "Dud Beetle",
            tier: 1,
            effect_text: "Opens with 2 duds; 10% of drawn cards are duds",
            defeat_text: "Finish without an invalid match",
            icon: "dud_beetle",
            requirements: NONE,
            behaviors: || kit![DudSeeder::new(2), DudDraw::new(10.0)],
            defeat: |s| s.invalid_matches == 0,
        },
        EnemyDefinition {
            name: "Pickpocket Rat",
            tier: 1,
            effect_text: "Steals 1 point every 10 seconds",
            defeat_text: "Finish with 30 seconds remaining",
            icon: "pickpocket_rat",
            requirements: NONE,
            behaviors: || kit![ScoreLeech::new(10_000, 1)],
            defeat: |s| s.time_remaining_ms >= 30_000,
        },
        EnemyDefinition {
            name: "Hasty Hare",
            tier: 1,
            effect_text: "The clock runs 25% faster",
            defeat_text: "Make 3 matches within 15 seconds",
            icon: "hasty_hare",
            requirements: NONE,
            behaviors: || kit![TimerAccelerator::new(1.25)],
            defeat: |s| s.has_quick_matches(3, 15_000),
        },
        EnemyDefinition {
            name: "Wild Goose",
            tier: 1,
            effect_text: "Each match turns a card face down",
            defeat_text: "Match 2 sets sharing a card attribute",
            icon: "wild_goose",
            requirements: NONE,
            behaviors: || kit![MatchShroud::new(1)],
            // Counts any two matches; the shared-attribute check is not enforced.
            defeat: |s| s.total_matches >= 2,
        },
        EnemyDefinition {
            name: "Glass Moth",
            tier: 1,
            effect_text: "Invalid matches deal double damage",
            defeat_text: "Reach a streak of 3",
            icon: "glass_moth",
            requirements: NONE,
            behaviors: || kit![DamageAmplifier::new(2.0)],
            defeat: |s| s.max_streak >= 3,
        },
        EnemyDefinition {
            name: "Sand Gnat",
            tier: 1,
            effect_text: "Burns 1 extra second every 10 seconds; invalid matches cost 3 seconds",
            defeat_text: "Finish with 25 seconds remaining",
            icon: "sand_gnat",
            requirements: NONE,
            behaviors: || kit![TimeDrain::new(10_000, 1_000), InvalidTimeTax::new(3_000)],
            defeat: |s| s.time_remaining_ms >= 25_000,
        },
        EnemyDefinition {
            name: "Heckler Jay",
            tier: 1,
            effect_text: "Invalid matches cost 2 points; every 5th match scores nothing",
            defeat_text: "Make 6 matches",
            icon: "heckler_jay",
            requirements: NONE,
            behaviors: || kit![InvalidPenalty::new(2), ComboTax::new(5)],
            defeat: |s| s.total_matches >= 6,
        },
        // Tier 2
        EnemyDefinition {
            name: "Ember Imp",
            tier: 2,
            effect_text: "Sets a card on fire every 12 seconds",
            defeat_text: "Make 2 single-color matches",
            icon: "ember_imp",
            requirements: NONE,
            behaviors: || kit![Arsonist::new(12_000)],
            defeat: |s| s.same_color_matches >= 2,
        },
        EnemyDefinition {
            name: "Iron Crab",
            tier: 2,
            effect_text: "Opens with 3 triple-health cards; 15% of drawn cards have 2 health",
            defeat_text: "Clear a triple-health card",
            icon: "iron_crab",
            requirements: NONE,
            behaviors: || kit![ArmorSeeder::new(3, 3), ArmoredDraw::new(15.0, 2)],
            defeat: |s| s.triple_health_cleared >= 1,
        },
        EnemyDefinition {
            name: "Shapeshifter Toad",
            tier: 2,
            effect_text: "Rewrites a card's attribute every 8 seconds",
            defeat_text: "Make an all-different match",
            icon: "shapeshifter_toad",
            requirements: NONE,
            behaviors: || kit![AttributeShifter::new(8_000)],
            defeat: |s| s.all_different_matches >= 1,
        },
        EnemyDefinition {
            name: "Bomb Gremlin",
            tier: 2,
            effect_text: "15% of drawn cards carry a 20 second bomb",
            defeat_text: "Clear 2 bombs",
            icon: "bomb_gremlin",
            requirements: NONE,
            behaviors: || kit![VolatileDraw::new(15.0, 20_000), BombFuse::new(1)],
            defeat: |s| s.bombs_cleared >= 2,
        },
        EnemyDefinition {
            name: "Leech Bat",
            tier: 2,
            effect_text: "Drains 1 health every 30 seconds",
            defeat_text: "Finish without using a hint",
            icon: "leech_bat",
            requirements: NONE,
            behaviors: || kit![HealthLeech::new(30_000, 1)],
            defeat: |s| s.hints_used == 0,
        },
        EnemyDefinition {
            name: "Blinking Owl",
            tier: 2,
            effect_text: "Flips 2 cards every 6 seconds",
            defeat_text: "Make 2 matches containing a squiggle",
            icon: "blinking_owl",
            requirements: NONE,
            behaviors: || kit![Blinker::new(6_000, 2)],
            defeat: |s| s.squiggle_matches >= 2,
        },
        EnemyDefinition {
            name: "Trickster Fox",
            tier: 2,
            effect_text: "Swaps two cards every 7 seconds; each match rots a card into a dud",
            defeat_text: "Reach a streak of 4",
            icon: "trickster_fox",
            requirements: NONE,
            behaviors: || kit![Shuffler::new(7_000, 1), MatchDudder::new(1)],
            defeat: |s| s.max_streak >= 4,
        },
        EnemyDefinition {
            name: "Cinder Newt",
            tier: 2,
            effect_text: "Sets a card on fire every 20 seconds; fire spreads to a neighbor every 5",
            defeat_text: "Make 6 matches",
            icon: "cinder_newt",
            requirements: NONE,
            behaviors: || kit![Arsonist::new(20_000), FireSpreader::new(5_000)],
            defeat: |s| s.total_matches >= 6,
        },
        // Tier 3
        EnemyDefinition {
            name: "Hourglass Djinn",
            tier: 3,
            effect_text: "The clock runs 50% faster and each match costs 2 seconds",
            defeat_text: "Finish with 20 seconds remaining",
            icon: "hourglass_djinn",
            requirements: NONE,
            behaviors: || kit![TimerAccelerator::new(1.5), MatchTimeTax::new(2_000)],
            defeat: |s| s.time_remaining_ms >= 20_000,
        },
        EnemyDefinition {
            name: "Berserker Ogre",
            tier: 3,
            effect_text: "Matches score double, invalid matches deal double damage",
            defeat_text: "Reach a streak of 5",
            icon: "berserker_ogre",
            requirements: NONE,
            behaviors: || kit![DamageAmplifier::new(2.0), PointsMultiplier::new(2.0)],
            defeat: |s| s.max_streak >= 5,
        },
        EnemyDefinition {
            name: "Devourer Worm",
            tier: 3,
            effect_text: "Eats a card every 10 seconds and another with each match",
            defeat_text: "Finish with 9 or more cards on the board",
            icon: "devourer_worm",
            requirements: NONE,
            behaviors: || kit![CardDevourer::new(10_000), MatchDevourer::new(1)],
            defeat: |s| s.cards_remaining >= 9,
        },
        EnemyDefinition {
            name: "Chrono Thief",
            tier: 3,
            effect_text: "Steals 2 points every 8 seconds; consecutive matches score less",
            defeat_text: "Make 4 matches within 20 seconds",
            icon: "chrono_thief",
            requirements: NONE,
            behaviors: || kit![ScoreLeech::new(8_000, 2), DiminishingReturns::new(0.1, 0.5)],
            defeat: |s| s.has_quick_matches(4, 20_000),
        },
        EnemyDefinition {
            name: "Spite Wraith",
            tier: 3,
            effect_text: "Invalid matches destroy 2 cards and deal 50% more damage",
            defeat_text: "Spend a grace",
            icon: "spite_wraith",
            requirements: DefeatRequirements { hints: 0, graces: 1 },
            behaviors: || kit![Backlash::new(2), DamageAmplifier::new(1.5)],
            defeat: |s| s.graces_used >= 1,
        },
        EnemyDefinition {
            name: "Fuse Goblin",
            tier: 3,
            effect_text: "Opens with 2 bombs; 10% of drawn cards carry a 25 second bomb",
            defeat_text: "Clear 3 bombs",
            icon: "fuse_goblin",
            requirements: NONE,
            behaviors: || {
                kit![
                    BombSeeder::new(2, 25_000),
                    VolatileDraw::new(10.0, 25_000),
                    BombFuse::new(1),
                ]
            },
            defeat: |s| s.bombs_cleared >= 3,
        },
        EnemyDefinition {
            name: "Sapper Kobold",
            tier: 3,
            effect_text: "Arms a 20 second bomb on a card every 15 seconds",
            defeat_text: "Clear 2 bombs",
            icon: "sapper_kobold",
            requirements: NONE,
            behaviors: || kit![BombPlanter::new(15_000, 20_000), BombFuse::new(1)],
            defeat: |s| s.bombs_cleared >= 2,
        },
        EnemyDefinition {
            name: "Hex Magpie",
            tier: 3,
            effect_text: "Seals a hint, steals a hint every 30 seconds and a grace every 45",
            defeat_text: "Finish without an invalid match",
            icon: "hex_magpie",
            requirements: NONE,
            behaviors: || {
                kit![
                    HintSeal::new(1),
                    HintThief::new(30_000, 1),
                    GraceThief::new(45_000, 1),
                ]
            },
            defeat: |s| s.invalid_matches == 0,
        },
        // Tier 4
        EnemyDefinition {
            name: "Storm Hydra",
            tier: 4,
            effect_text: "Opens with 3 face-down cards, each match hides 2 more, the clock runs 25% faster",
            defeat_text: "Clear 4 face-down cards",
            icon: "storm_hydra",
            requirements: NONE,
            behaviors: || {
                kit![
                    ShroudSeeder::new(3),
                    MatchShroud::new(2),
                    TimerAccelerator::new(1.25),
                ]
            },
            defeat: |s| s.face_down_cleared >= 4,
        },
        EnemyDefinition {
            name: "Doom Lich",
            tier: 4,
            effect_text: "Countdown cards end the round when they expire",
            defeat_text: "Clear 2 countdown cards",
            icon: "doom_lich",
            requirements: NONE,
            behaviors: || {
                kit![
                    CountdownSeeder::new(1, 60_000),
                    CountdownDraw::new(10.0, 45_000),
                    CountdownCurse,
                ]
            },
            defeat: |s| s.countdown_cleared >= 2,
        },
        EnemyDefinition {
            name: "Titan Golem",
            tier: 4,
            effect_text: "Opens with 4 triple-health cards, armors more over time, double damage",
            defeat_text: "Clear 3 triple-health cards",
            icon: "titan_golem",
            requirements: NONE,
            behaviors: || {
                kit![
                    ArmorSeeder::new(4, 3),
                    ArmoredDraw::new(25.0, 3),
                    ArmorGrowth::new(20_000, 3),
                    DamageAmplifier::new(2.0),
                ]
            },
            defeat: |s| s.triple_health_cleared >= 3,
        },
        EnemyDefinition {
            name: "Void Serpent",
            tier: 4,
            effect_text: "Eats a card every 8 seconds, rots one into a dud every 15, invalid matches destroy a card",
            defeat_text: "Finish without an invalid match",
            icon: "void_serpent",
            requirements: NONE,
            behaviors: || kit![CardDevourer::new(8_000), DudRot::new(15_000), Backlash::new(1)],
            defeat: |s| s.invalid_matches == 0,
        },
        EnemyDefinition {
            name: "Inferno Drake",
            tier: 4,
            effect_text: "Sets a card on fire every 6 seconds, drains health, 50% more damage",
            defeat_text: "Make 3 single-color matches",
            icon: "inferno_drake",
            requirements: NONE,
            behaviors: || {
                kit![
                    Arsonist::new(6_000),
                    HealthLeech::new(40_000, 1),
                    DamageAmplifier::new(1.5),
                ]
            },
            defeat: |s| s.same_color_matches >= 3,
        },
        EnemyDefinition {
            name: "Mirror Sphinx",
            tier: 4,
            effect_text: "Rewrites attributes, flips cards, matches score 25% less; the clock speeds up",
            defeat_text: "Use 2 hints and make 2 all-different matches",
            icon: "mirror_sphinx",
            requirements: DefeatRequirements { hints: 2, graces: 0 },
            behaviors: || {
                kit![
                    AttributeShifter::new(6_000),
                    Flipper::new(10_000, 1),
                    PointsMultiplier::new(0.75),
                    TimerSurge::new(15_000, 0.1, 1.5),
                ]
            },
            defeat: |s| s.hints_used >= 2 && s.all_different_matches >= 2,
        },
        EnemyDefinition {
            name: "Grim Reaver",
            tier: 4,
            effect_text: "Seals a grace, each invalid match hurts more, plants a countdown every 25 seconds",
            defeat_text: "Reach a streak of 6",
            icon: "grim_reaver",
            requirements: NONE,
            behaviors: || {
                kit![
                    GraceSeal::new(1),
                    DamageRamp::new(0.5, 3.0),
                    CountdownPlanter::new(25_000, 40_000),
                    CountdownCurse,
                ]
            },
            defeat: |s| s.max_streak >= 6,
        },
        EnemyDefinition {
            name: "Tempest Roc",
            tier: 4,
            effect_text: "Swaps cards every 5 seconds, burns time, the clock doubles after 45 seconds",
            defeat_text: "Make 5 matches within 25 seconds",
            icon: "tempest_roc",
            requirements: NONE,
            behaviors: || {
                kit![
                    Shuffler::new(5_000, 2),
                    TimeDrain::new(15_000, 2_000),
                    LateRush::new(45_000, 2.0),
                ]
            },
            defeat: |s| s.has_quick_matches(5, 25_000),
        },
    ]
}
