//! Enemies: composable behaviors plus a defeat condition.
//!
//! ## Key Types
//!
//! - `EnemyBehavior`: optional-hook contract every behavior module implements
//! - `EnemyInstance`: a named composition of behaviors, alive for one round
//! - `EnemyDefinition`: static text plus factory functions
//! - `EnemyRegistry`: name lookup and option drawing
//!
//! ## Design Philosophy
//!
//! Enemies are not a class hierarchy. Each rule is a small module with
//! private state, and an enemy is a list of modules. Hook outputs fold
//! together, so stacking "double damage" with "double points" needs no
//! special casing.

pub mod behavior;
pub mod behaviors;
mod catalog;
mod instance;
mod registry;

pub use behavior::{
    EnemyBehavior, InvalidMatchEffect, RoundStartEffect, StatModifiers, TickEffect, UiModifiers,
    ValidMatchEffect,
};
pub use catalog::{builtin_enemies, DefeatRequirements, EnemyDefinition};
pub use instance::{DefeatCondition, EnemyInstance, EnemyPhase};
pub use registry::{create_enemy, EnemyOption, EnemyRegistry, OptionRequest};
