//! Weapon effect resolution.
//!
//! Given a match, the board, and the player's equipment, compute every
//! equipment-driven consequence as a single [`WeaponEffectResult`].
//!
//! ## Resolution Order
//!
//! Steps run in a fixed order and share one claimed-card set, so a card
//! reserved or destroyed by an earlier step is never targeted again:
//!
//! 1. Echo (skipped for echo matches), optionally chained once
//! 2. Explosion, rolled per card adjacent to the match
//! 3. Laser, rolled once per owned laser weapon
//! 4. Ricochet, bouncing until a chain roll fails
//! 5. Fire spread on adjacent cards (ignites, does not destroy)
//! 6. Heal, hint, time and grace rolls
//! 7. XP and coin gain (integer part guaranteed above 100%)
//! 8. Board growth

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::cards::{Attribute, Card, Grid};
use crate::core::{CardId, GameRng};
use crate::rules::find_valid_sets;
use crate::weapons::{EffectKind, PlayerStats, StatKind, Weapon};

use super::result::WeaponEffectResult;

/// Points and money per card destroyed by an explosion.
pub const EXPLOSION_REWARD: (i64, i64) = (1, 1);
/// Points and money per card destroyed by a laser.
pub const LASER_REWARD: (i64, i64) = (2, 1);
/// Points and money per card destroyed by a ricochet.
pub const RICOCHET_REWARD: (i64, i64) = (1, 1);

/// Inputs to one resolution.
pub struct MatchContext<'a> {
    pub board: &'a [Card],
    pub matched: [CardId; 3],
    /// Aggregate stats; caps are applied at roll time.
    pub stats: &'a PlayerStats,
    /// Raw equipment, for per-instance rolls.
    pub weapons: &'a [Weapon],
    pub active_attributes: &'a [Attribute],
    /// Set when resolving an echoed triple; suppresses further echoes.
    pub is_echo_match: bool,
}

/// Resolves equipment effects for a match.
pub struct WeaponEffectResolver;

impl WeaponEffectResolver {
    /// Run the full pipeline.
    pub fn resolve_match(ctx: &MatchContext, rng: &mut GameRng) -> WeaponEffectResult {
        let mut result = WeaponEffectResult::default();
        let board = BoardView::new(ctx.board);
        let mut claimed: FxHashSet<CardId> = ctx.matched.iter().copied().collect();

        let matched_positions: Vec<usize> = ctx
            .matched
            .iter()
            .filter_map(|id| board.position(*id))
            .collect();
        let adjacent = board.adjacent_to(&matched_positions);

        if !ctx.is_echo_match {
            Self::resolve_echo(ctx, &mut claimed, &mut result, rng);
        }
        Self::resolve_explosion(ctx, &board, &adjacent, &mut claimed, &mut result, rng);
        Self::resolve_lasers(ctx, &board, &matched_positions, &mut claimed, &mut result, rng);
        Self::resolve_ricochet(ctx, &board, &mut claimed, &mut result, rng);
        Self::resolve_fire(ctx, &board, &adjacent, &claimed, &mut result, rng);
        Self::resolve_scalars(ctx.stats, &mut result, rng);
        Self::resolve_stacking(ctx.stats, &mut result, rng);

        if rng.roll(ctx.stats.effective(EffectKind::BoardGrowth)) {
            result.board_growth = ctx.stats.board_growth.max(1);
            result
                .notifications
                .push(format!("The board grows by {}", result.board_growth));
        }

        debug!(
            echoes = result.auto_matched_sets.len(),
            destroyed = result.destroyed_count(),
            ignited = result.ignited.len(),
            bonus_points = result.bonus_points,
            "resolved weapon effects"
        );
        result
    }

    fn resolve_echo(
        ctx: &MatchContext,
        claimed: &mut FxHashSet<CardId>,
        result: &mut WeaponEffectResult,
        rng: &mut GameRng,
    ) {
        if !rng.roll(ctx.stats.effective(EffectKind::Echo)) {
            return;
        }
        let Some(first) = pick_set(ctx.board, ctx.active_attributes, claimed, rng) else {
            return;
        };
        claimed.extend(first);
        result.auto_matched_sets.push(first);
        result.notifications.push("Echo! Another set matched itself".to_string());

        // Chain reaction is uncapped.
        if rng.roll(ctx.stats.get(StatKind::ChainReactionChance)) {
            if let Some(second) = pick_set(ctx.board, ctx.active_attributes, claimed, rng) {
                claimed.extend(second);
                result.auto_matched_sets.push(second);
                result.notifications.push("Chain reaction! A third set matched".to_string());
            }
        }
    }

    fn resolve_explosion(
        ctx: &MatchContext,
        board: &BoardView,
        adjacent: &[usize],
        claimed: &mut FxHashSet<CardId>,
        result: &mut WeaponEffectResult,
        rng: &mut GameRng,
    ) {
        let chance = ctx.stats.effective(EffectKind::Explosion);
        if chance <= 0.0 {
            return;
        }
        for &pos in adjacent {
            let id = board.id_at(pos);
            if claimed.contains(&id) {
                continue;
            }
            if rng.roll(chance) {
                claimed.insert(id);
                result.explosive_destroyed.push(id);
                result.bonus_points += EXPLOSION_REWARD.0;
                result.bonus_money += EXPLOSION_REWARD.1;
            }
        }
        if !result.explosive_destroyed.is_empty() {
            result.notifications.push(format!(
                "Explosion destroyed {} card(s)",
                result.explosive_destroyed.len()
            ));
        }
    }

    fn resolve_lasers(
        ctx: &MatchContext,
        board: &BoardView,
        matched_positions: &[usize],
        claimed: &mut FxHashSet<CardId>,
        result: &mut WeaponEffectResult,
        rng: &mut GameRng,
    ) {
        for weapon in ctx.weapons.iter().filter(|w| w.is_laser()) {
            // Each copy rolls its own chance; the laser cap does not apply.
            if !rng.roll(weapon.stat(StatKind::LaserChance)) {
                continue;
            }
            let Some(&anchor) = rng.choose(matched_positions) else {
                continue;
            };
            result.lasers_fired += 1;
            for id in board.laser_line(anchor, rng) {
                if claimed.insert(id) {
                    result.laser_destroyed.push(id);
                    result.bonus_points += LASER_REWARD.0;
                    result.bonus_money += LASER_REWARD.1;
                }
            }
        }
        match result.lasers_fired {
            0 => {}
            1 => result.notifications.push("Laser fired!".to_string()),
            n => result.notifications.push(format!("{} lasers fired!", n)),
        }
    }

    fn resolve_ricochet(
        ctx: &MatchContext,
        board: &BoardView,
        claimed: &mut FxHashSet<CardId>,
        result: &mut WeaponEffectResult,
        rng: &mut GameRng,
    ) {
        if !rng.roll(ctx.stats.effective(EffectKind::Ricochet)) {
            return;
        }
        let chain = ctx.stats.get(StatKind::RicochetChainChance);
        loop {
            let targets = board.unclaimed(claimed);
            let Some(&id) = rng.choose(&targets) else {
                break;
            };
            claimed.insert(id);
            result.ricochet_destroyed.push(id);
            result.bonus_points += RICOCHET_REWARD.0;
            result.bonus_money += RICOCHET_REWARD.1;
            if !rng.roll(chain) {
                break;
            }
        }
        if !result.ricochet_destroyed.is_empty() {
            result.notifications.push(format!(
                "Ricochet bounced through {} card(s)",
                result.ricochet_destroyed.len()
            ));
        }
    }

    fn resolve_fire(
        ctx: &MatchContext,
        board: &BoardView,
        adjacent: &[usize],
        claimed: &FxHashSet<CardId>,
        result: &mut WeaponEffectResult,
        rng: &mut GameRng,
    ) {
        let chance = ctx.stats.effective(EffectKind::Fire);
        if chance <= 0.0 {
            return;
        }
        for &pos in adjacent {
            let card = &ctx.board[pos];
            if claimed.contains(&card.id) || card.is_on_fire() {
                continue;
            }
            if rng.roll(chance) {
                result.ignited.push(board.id_at(pos));
            }
        }
        if !result.ignited.is_empty() {
            result
                .notifications
                .push(format!("{} card(s) caught fire", result.ignited.len()));
        }
    }

    fn resolve_scalars(stats: &PlayerStats, result: &mut WeaponEffectResult, rng: &mut GameRng) {
        if rng.roll(stats.effective(EffectKind::Heal)) {
            result.healing += 1;
            result.notifications.push("Healed 1".to_string());
        }
        if rng.roll(stats.effective(EffectKind::HintGain)) {
            result.hints_gained += 1;
            result.notifications.push("Gained a hint".to_string());
        }
        if rng.roll(stats.effective(EffectKind::TimeGain)) {
            result.time_gained_secs += stats.time_gain_secs;
            result
                .notifications
                .push(format!("+{}s", stats.time_gain_secs));
        }
        if rng.roll(stats.effective(EffectKind::GraceGain)) {
            result.graces_gained += 1;
            result.notifications.push("Gained a grace".to_string());
        }
    }

    fn resolve_stacking(stats: &PlayerStats, result: &mut WeaponEffectResult, rng: &mut GameRng) {
        result.xp_gained = stacked_roll(stats.effective(EffectKind::XpGain), rng);
        result.coins_gained = stacked_roll(stats.effective(EffectKind::CoinGain), rng);
        if result.xp_gained > 0 {
            result.notifications.push(format!("+{} XP", result.xp_gained));
        }
        if result.coins_gained > 0 {
            result
                .notifications
                .push(format!("+{} coin(s)", result.coins_gained));
        }
    }
}

/// Resolve a match with the inputs spelled out.
pub fn resolve_match(
    board: &[Card],
    matched: [CardId; 3],
    stats: &PlayerStats,
    weapons: &[Weapon],
    active_attributes: &[Attribute],
    is_echo_match: bool,
    rng: &mut GameRng,
) -> WeaponEffectResult {
    let ctx = MatchContext {
        board,
        matched,
        stats,
        weapons,
        active_attributes,
        is_echo_match,
    };
    WeaponEffectResolver::resolve_match(&ctx, rng)
}

/// Percent chance that may exceed 100: the integer quotient is granted
/// outright and the remainder is one more Bernoulli roll.
pub fn stacked_roll(percent: f64, rng: &mut GameRng) -> u32 {
    if percent <= 0.0 {
        return 0;
    }
    let guaranteed = (percent / 100.0).floor();
    let remainder = percent - guaranteed * 100.0;
    let bonus = u32::from(remainder > 0.0 && rng.roll(remainder));
    guaranteed as u32 + bonus
}

fn pick_set(
    board: &[Card],
    active: &[Attribute],
    claimed: &FxHashSet<CardId>,
    rng: &mut GameRng,
) -> Option<[CardId; 3]> {
    let sets = find_valid_sets(board, active, claimed);
    rng.choose(&sets).copied()
}

/// Read-only board lookup with adjacency helpers.
pub(crate) struct BoardView<'a> {
    cards: &'a [Card],
    grid: Grid,
    positions: FxHashMap<CardId, usize>,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            grid: Grid::for_len(cards.len()),
            positions: cards.iter().enumerate().map(|(i, c)| (c.id, i)).collect(),
        }
    }

    pub(crate) fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub(crate) fn id_at(&self, pos: usize) -> CardId {
        self.cards[pos].id
    }

    /// Positions adjacent to any of `sources`, first-seen order, no repeats,
    /// excluding the sources themselves.
    pub(crate) fn adjacent_to(&self, sources: &[usize]) -> Vec<usize> {
        let mut seen: FxHashSet<usize> = sources.iter().copied().collect();
        let mut out = Vec::new();
        for &pos in sources {
            for neighbor in self.grid.neighbors(pos) {
                if seen.insert(neighbor) {
                    out.push(neighbor);
                }
            }
        }
        out
    }

    /// Every card in a random row or column through `anchor`.
    pub(crate) fn laser_line(&self, anchor: usize, rng: &mut GameRng) -> Vec<CardId> {
        let line = if rng.coin() {
            self.grid.row_of(anchor)
        } else {
            self.grid.column_of(anchor)
        };
        line.into_iter().map(|pos| self.id_at(pos)).collect()
    }

    pub(crate) fn unclaimed(&self, claimed: &FxHashSet<CardId>) -> Vec<CardId> {
        self.cards
            .iter()
            .map(|c| c.id)
            .filter(|id| !claimed.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::{BaseStats, EffectCaps, Rarity, SpecialEffect};

    const FOUR: [Attribute; 4] = [
        Attribute::Shape,
        Attribute::Color,
        Attribute::Number,
        Attribute::Shading,
    ];

    fn board(len: u32) -> Vec<Card> {
        (0..len)
            .map(|i| Card::from_indices(CardId(i), [(i % 3) as u8, ((i / 3) % 3) as u8, ((i / 9) % 3) as u8, 0, 0]))
            .collect()
    }

    fn no_stats() -> PlayerStats {
        PlayerStats::default().with_caps(EffectCaps::uniform(100.0))
    }

    #[test]
    fn test_stacked_roll_guarantees_integer_part() {
        let mut rng = GameRng::new(1);
        for _ in 0..50 {
            let n = stacked_roll(250.0, &mut rng);
            assert!(n == 2 || n == 3);
        }
        assert_eq!(stacked_roll(300.0, &mut rng), 3);
        assert_eq!(stacked_roll(0.0, &mut rng), 0);
    }

    #[test]
    fn test_nothing_equipped_is_empty() {
        let cards = board(12);
        let stats = PlayerStats::default();
        let mut rng = GameRng::new(3);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);
        assert!(result.is_empty());
    }

    #[test]
    fn test_certain_explosion_hits_every_neighbor() {
        // 0 1 2 3 / 4 5 6 7 / 8 9 10 11; match the top row.
        let cards = board(12);
        let stats = no_stats().with_stat(StatKind::ExplosionChance, 100.0);
        let mut rng = GameRng::new(3);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);

        let mut destroyed = result.explosive_destroyed.clone();
        destroyed.sort();
        assert_eq!(destroyed, vec![CardId(3), CardId(4), CardId(5), CardId(6)]);
        assert_eq!(result.bonus_points, 4);
        assert_eq!(result.bonus_money, 4);
    }

    #[test]
    fn test_laser_rolls_once_per_copy() {
        let cards = board(12);
        let lens = Weapon::new("lens", "Lens", Rarity::Rare)
            .with_stat(StatKind::LaserChance, 100.0)
            .with_special(SpecialEffect::Laser);
        let weapons = vec![lens.clone(), lens.clone(), lens];
        let stats = no_stats();
        let mut rng = GameRng::new(11);

        let result = resolve_match(&cards, [CardId(0), CardId(5), CardId(10)], &stats, &weapons, &FOUR, false, &mut rng);
        assert_eq!(result.lasers_fired, 3);

        let unique: FxHashSet<_> = result.laser_destroyed.iter().collect();
        assert_eq!(unique.len(), result.laser_destroyed.len());
        assert_eq!(result.bonus_points, 2 * result.laser_destroyed.len() as i64);
        for id in [CardId(0), CardId(5), CardId(10)] {
            assert!(!result.laser_destroyed.contains(&id));
        }
    }

    #[test]
    fn test_laser_copy_ignores_laser_cap() {
        let cards = board(12);
        let lens = Weapon::new("lens", "Lens", Rarity::Rare)
            .with_stat(StatKind::LaserChance, 100.0)
            .with_special(SpecialEffect::Laser);
        let mut caps = EffectCaps::uniform(100.0);
        caps.set(EffectKind::Laser, 0.0);
        let stats = PlayerStats::default().with_caps(caps);
        let mut rng = GameRng::new(11);

        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[lens], &FOUR, false, &mut rng);
        assert_eq!(result.lasers_fired, 1);
    }

    #[test]
    fn test_certain_laser_always_fires_with_default_caps() {
        let cards = board(12);
        let lens = Weapon::new("lens", "Lens", Rarity::Rare)
            .with_stat(StatKind::LaserChance, 100.0)
            .with_special(SpecialEffect::Laser);
        let weapons = vec![lens];
        let stats = PlayerStats::aggregate(&BaseStats::default(), &weapons);

        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &weapons, &FOUR, false, &mut rng);
            assert_eq!(result.lasers_fired, 1, "seed {seed}");
        }
    }

    #[test]
    fn test_ricochet_with_certain_chain_clears_board() {
        let cards = board(9);
        let stats = no_stats()
            .with_stat(StatKind::RicochetChance, 100.0)
            .with_stat(StatKind::RicochetChainChance, 100.0);
        let mut rng = GameRng::new(8);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);

        assert_eq!(result.ricochet_destroyed.len(), 6);
        assert_eq!(result.bonus_points, 6);
    }

    #[test]
    fn test_ricochet_on_tiny_board_is_empty() {
        let cards = board(3);
        let stats = no_stats().with_stat(StatKind::RicochetChance, 100.0);
        let mut rng = GameRng::new(8);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);
        assert!(result.ricochet_destroyed.is_empty());
    }

    #[test]
    fn test_echo_reserves_disjoint_sets() {
        let cards = board(27);
        let stats = no_stats()
            .with_stat(StatKind::EchoChance, 100.0)
            .with_stat(StatKind::ChainReactionChance, 100.0);
        let mut rng = GameRng::new(21);
        let matched = [CardId(0), CardId(1), CardId(2)];
        let result = resolve_match(&cards, matched, &stats, &[], &FOUR, false, &mut rng);

        assert_eq!(result.auto_matched_sets.len(), 2);
        let echoed: Vec<_> = result.echoed().collect();
        let unique: FxHashSet<_> = echoed.iter().collect();
        assert_eq!(unique.len(), 6);
        for id in matched {
            assert!(!echoed.contains(&id));
        }
    }

    #[test]
    fn test_echo_match_never_echoes() {
        let cards = board(27);
        let stats = no_stats().with_stat(StatKind::EchoChance, 100.0);
        let mut rng = GameRng::new(21);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, true, &mut rng);
        assert!(result.auto_matched_sets.is_empty());
    }

    #[test]
    fn test_fire_ignites_without_destroying() {
        let cards = board(12);
        let stats = no_stats().with_stat(StatKind::FireChance, 100.0);
        let mut rng = GameRng::new(2);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);
        assert_eq!(result.ignited.len(), 4);
        assert_eq!(result.destroyed_count(), 0);
    }

    #[test]
    fn test_fire_skips_burning_cards() {
        let mut cards = board(12);
        cards[3] = cards[3].clone().ignited_at(100);
        let stats = no_stats().with_stat(StatKind::FireChance, 100.0);
        let mut rng = GameRng::new(2);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);
        assert!(!result.ignited.contains(&CardId(3)));
        assert_eq!(result.ignited.len(), 3);
    }

    #[test]
    fn test_scalar_rolls_and_time_magnitude() {
        let cards = board(12);
        let mut stats = no_stats()
            .with_stat(StatKind::HealChance, 100.0)
            .with_stat(StatKind::HintGainChance, 100.0)
            .with_stat(StatKind::TimeGainChance, 100.0)
            .with_stat(StatKind::GraceGainChance, 100.0)
            .with_stat(StatKind::BoardGrowthChance, 100.0);
        stats.time_gain_secs = 8;
        stats.board_growth = 2;
        let mut rng = GameRng::new(2);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);

        assert_eq!(result.healing, 1);
        assert_eq!(result.hints_gained, 1);
        assert_eq!(result.time_gained_secs, 8);
        assert_eq!(result.graces_gained, 1);
        assert_eq!(result.board_growth, 2);
    }

    #[test]
    fn test_xp_above_hundred_with_default_caps() {
        let cards = board(12);
        let stats = PlayerStats::aggregate(&BaseStats::default(), &[])
            .with_stat(StatKind::XpGainChance, 200.0)
            .with_stat(StatKind::CoinGainChance, 100.0);
        let mut rng = GameRng::new(2);
        let result = resolve_match(&cards, [CardId(0), CardId(1), CardId(2)], &stats, &[], &FOUR, false, &mut rng);
        assert_eq!(result.xp_gained, 2);
        assert_eq!(result.coins_gained, 1);
    }
}
