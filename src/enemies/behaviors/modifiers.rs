//! Multipliers and per-match taxes.

use crate::cards::Card;
use crate::core::GameRng;
use crate::enemies::behavior::{
    EnemyBehavior, InvalidMatchEffect, StatModifiers, TickEffect, UiModifiers, ValidMatchEffect,
};

use super::Interval;

/// Scales health lost on invalid matches.
#[derive(Clone, Debug)]
pub struct DamageAmplifier {
    multiplier: f64,
}

impl DamageAmplifier {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

impl EnemyBehavior for DamageAmplifier {
    fn name(&self) -> &'static str {
        "damage_amplifier"
    }

    fn stat_modifiers(&self) -> StatModifiers {
        StatModifiers {
            damage_multiplier: self.multiplier,
        }
    }
}

/// Scales base match points. Below 1.0 is a penalty.
#[derive(Clone, Debug)]
pub struct PointsMultiplier {
    multiplier: f64,
}

impl PointsMultiplier {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }
}

impl EnemyBehavior for PointsMultiplier {
    fn name(&self) -> &'static str {
        "points_multiplier"
    }

    fn on_valid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> ValidMatchEffect {
        ValidMatchEffect {
            points_multiplier: self.multiplier,
            ..Default::default()
        }
    }
}

/// Round clock runs faster.
#[derive(Clone, Debug)]
pub struct TimerAccelerator {
    speed: f64,
}

impl TimerAccelerator {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl EnemyBehavior for TimerAccelerator {
    fn name(&self) -> &'static str {
        "timer_accelerator"
    }

    fn ui_modifiers(&self) -> UiModifiers {
        UiModifiers {
            timer_speed: self.speed,
        }
    }
}

/// Every valid match costs round time.
#[derive(Clone, Debug)]
pub struct MatchTimeTax {
    cost_ms: i64,
}

impl MatchTimeTax {
    pub fn new(cost_ms: i64) -> Self {
        Self { cost_ms }
    }
}

impl EnemyBehavior for MatchTimeTax {
    fn name(&self) -> &'static str {
        "match_time_tax"
    }

    fn on_valid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> ValidMatchEffect {
        ValidMatchEffect {
            time_delta_ms: -self.cost_ms,
            ..Default::default()
        }
    }
}

/// Each consecutive valid match is worth less; an invalid match resets.
#[derive(Clone, Debug)]
pub struct DiminishingReturns {
    step: f64,
    floor: f64,
    consecutive: u32,
}

impl DiminishingReturns {
    pub fn new(step: f64, floor: f64) -> Self {
        Self {
            step,
            floor,
            consecutive: 0,
        }
    }
}

impl EnemyBehavior for DiminishingReturns {
    fn name(&self) -> &'static str {
        "diminishing_returns"
    }

    fn on_valid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> ValidMatchEffect {
        let multiplier = (1.0 - self.step * f64::from(self.consecutive)).max(self.floor);
        self.consecutive += 1;
        ValidMatchEffect {
            points_multiplier: multiplier,
            ..Default::default()
        }
    }

    fn on_invalid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> InvalidMatchEffect {
        self.consecutive = 0;
        InvalidMatchEffect::default()
    }

    fn on_round_end(&mut self) {
        self.consecutive = 0;
    }
}

/// Clock speed ramps up over the round.
#[derive(Clone, Debug)]
pub struct TimerSurge {
    interval: Interval,
    step: f64,
    max_speed: f64,
    speed: f64,
}

impl TimerSurge {
    pub fn new(period_ms: u64, step: f64, max_speed: f64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            step,
            max_speed,
            speed: 1.0,
        }
    }
}

impl EnemyBehavior for TimerSurge {
    fn name(&self) -> &'static str {
        "timer_surge"
    }

    fn on_tick(&mut self, delta_ms: u64, _: &[Card], _: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms);
        if fired > 0 {
            self.speed = (self.speed + self.step * f64::from(fired)).min(self.max_speed);
        }
        TickEffect::default()
    }

    fn ui_modifiers(&self) -> UiModifiers {
        UiModifiers {
            timer_speed: self.speed,
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
        self.speed = 1.0;
    }
}

/// Each invalid match, including the current one, adds `step` to the
/// damage multiplier, up to `max`.
#[derive(Clone, Debug)]
pub struct DamageRamp {
    step: f64,
    max: f64,
    misses: u32,
}

impl DamageRamp {
    pub fn new(step: f64, max: f64) -> Self {
        Self {
            step,
            max,
            misses: 0,
        }
    }
}

impl EnemyBehavior for DamageRamp {
    fn name(&self) -> &'static str {
        "damage_ramp"
    }

    fn on_invalid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> InvalidMatchEffect {
        self.misses += 1;
        InvalidMatchEffect::default()
    }

    fn stat_modifiers(&self) -> StatModifiers {
        StatModifiers {
            damage_multiplier: (1.0 + self.step * f64::from(self.misses)).min(self.max),
        }
    }

    fn on_round_end(&mut self) {
        self.misses = 0;
    }
}

/// Every `every`-th valid match scores no base points.
#[derive(Clone, Debug)]
pub struct ComboTax {
    every: u32,
    matches: u32,
}

impl ComboTax {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            matches: 0,
        }
    }
}

impl EnemyBehavior for ComboTax {
    fn name(&self) -> &'static str {
        "combo_tax"
    }

    fn on_valid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> ValidMatchEffect {
        self.matches += 1;
        if self.matches % self.every != 0 {
            return ValidMatchEffect::default();
        }
        ValidMatchEffect {
            points_multiplier: 0.0,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.matches = 0;
    }
}

/// Clock runs at `speed` once `after_ms` of real time has passed.
#[derive(Clone, Debug)]
pub struct LateRush {
    after_ms: u64,
    speed: f64,
    elapsed_ms: u64,
}

impl LateRush {
    pub fn new(after_ms: u64, speed: f64) -> Self {
        Self {
            after_ms,
            speed,
            elapsed_ms: 0,
        }
    }
}

impl EnemyBehavior for LateRush {
    fn name(&self) -> &'static str {
        "late_rush"
    }

    fn on_tick(&mut self, delta_ms: u64, _: &[Card], _: &mut GameRng) -> TickEffect {
        self.elapsed_ms += delta_ms;
        TickEffect::default()
    }

    fn ui_modifiers(&self) -> UiModifiers {
        let timer_speed = if self.elapsed_ms >= self.after_ms {
            self.speed
        } else {
            1.0
        };
        UiModifiers { timer_speed }
    }

    fn on_round_end(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diminishing_returns() {
        let mut rng = GameRng::new(1);
        let mut b = DiminishingReturns::new(0.25, 0.5);
        let m: Vec<f64> = (0..4)
            .map(|_| b.on_valid_match(&[], &[], &mut rng).points_multiplier)
            .collect();
        assert_eq!(m, vec![1.0, 0.75, 0.5, 0.5]);

        b.on_invalid_match(&[], &[], &mut rng);
        assert_eq!(b.on_valid_match(&[], &[], &mut rng).points_multiplier, 1.0);
    }

    #[test]
    fn test_timer_surge_caps() {
        let mut rng = GameRng::new(1);
        let mut b = TimerSurge::new(10_000, 0.25, 1.5);
        assert_eq!(b.ui_modifiers().timer_speed, 1.0);
        b.on_tick(10_000, &[], &mut rng);
        assert_eq!(b.ui_modifiers().timer_speed, 1.25);
        b.on_tick(50_000, &[], &mut rng);
        assert_eq!(b.ui_modifiers().timer_speed, 1.5);
    }

    #[test]
    fn test_tax_is_negative_time() {
        let mut rng = GameRng::new(1);
        let mut b = MatchTimeTax::new(2_000);
        assert_eq!(b.on_valid_match(&[], &[], &mut rng).time_delta_ms, -2_000);
    }

    #[test]
    fn test_damage_ramp_counts_current_miss() {
        let mut rng = GameRng::new(1);
        let mut b = DamageRamp::new(0.5, 2.0);
        assert_eq!(b.stat_modifiers().damage_multiplier, 1.0);
        b.on_invalid_match(&[], &[], &mut rng);
        assert_eq!(b.stat_modifiers().damage_multiplier, 1.5);
        b.on_invalid_match(&[], &[], &mut rng);
        b.on_invalid_match(&[], &[], &mut rng);
        assert_eq!(b.stat_modifiers().damage_multiplier, 2.0);
        b.on_round_end();
        assert_eq!(b.stat_modifiers().damage_multiplier, 1.0);
    }

    #[test]
    fn test_combo_tax_every_third() {
        let mut rng = GameRng::new(1);
        let mut b = ComboTax::new(3);
        let m: Vec<f64> = (0..6)
            .map(|_| b.on_valid_match(&[], &[], &mut rng).points_multiplier)
            .collect();
        assert_eq!(m, vec![1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_late_rush_kicks_in() {
        let mut rng = GameRng::new(1);
        let mut b = LateRush::new(30_000, 2.0);
        b.on_tick(29_999, &[], &mut rng);
        assert_eq!(b.ui_modifiers().timer_speed, 1.0);
        b.on_tick(1, &[], &mut rng);
        assert_eq!(b.ui_modifiers().timer_speed, 2.0);
    }
}
