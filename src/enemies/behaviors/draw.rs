//! Draw-time card rewrites. Each rolls its own chance per drawn card.

use crate::cards::Card;
use crate::core::GameRng;
use crate::enemies::behavior::EnemyBehavior;

/// Drawn cards may arrive face down.
#[derive(Clone, Debug)]
pub struct ShroudedDraw {
    chance: f64,
}

impl ShroudedDraw {
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }
}

impl EnemyBehavior for ShroudedDraw {
    fn name(&self) -> &'static str {
        "shrouded_draw"
    }

    fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if rng.roll(self.chance) {
            card.face_down()
        } else {
            card
        }
    }
}

/// Drawn cards may be duds.
#[derive(Clone, Debug)]
pub struct DudDraw {
    chance: f64,
}

impl DudDraw {
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }
}

impl EnemyBehavior for DudDraw {
    fn name(&self) -> &'static str {
        "dud_draw"
    }

    fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if rng.roll(self.chance) {
            card.dud()
        } else {
            card
        }
    }
}

/// Drawn cards may need several matches to clear.
#[derive(Clone, Debug)]
pub struct ArmoredDraw {
    chance: f64,
    health: u8,
}

impl ArmoredDraw {
    pub fn new(chance: f64, health: u8) -> Self {
        Self { chance, health }
    }
}

impl EnemyBehavior for ArmoredDraw {
    fn name(&self) -> &'static str {
        "armored_draw"
    }

    fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if rng.roll(self.chance) {
            card.with_health(self.health)
        } else {
            card
        }
    }
}

/// Drawn cards may carry a lit bomb.
#[derive(Clone, Debug)]
pub struct VolatileDraw {
    chance: f64,
    fuse_ms: u64,
}

impl VolatileDraw {
    pub fn new(chance: f64, fuse_ms: u64) -> Self {
        Self { chance, fuse_ms }
    }
}

impl EnemyBehavior for VolatileDraw {
    fn name(&self) -> &'static str {
        "volatile_draw"
    }

    fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if rng.roll(self.chance) {
            card.with_bomb(self.fuse_ms)
        } else {
            card
        }
    }
}

/// Drawn cards may start a countdown.
#[derive(Clone, Debug)]
pub struct CountdownDraw {
    chance: f64,
    countdown_ms: u64,
}

impl CountdownDraw {
    pub fn new(chance: f64, countdown_ms: u64) -> Self {
        Self {
            chance,
            countdown_ms,
        }
    }
}

impl EnemyBehavior for CountdownDraw {
    fn name(&self) -> &'static str {
        "countdown_draw"
    }

    fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if rng.roll(self.chance) {
            card.with_countdown(self.countdown_ms)
        } else {
            card
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    fn card() -> Card {
        Card::from_indices(CardId(7), [1, 2, 0, 1, 0])
    }

    #[test]
    fn test_certain_and_impossible() {
        let mut rng = GameRng::new(3);
        assert!(ShroudedDraw::new(100.0).on_card_draw(card(), &mut rng).modifiers.face_down);
        assert!(!ShroudedDraw::new(0.0).on_card_draw(card(), &mut rng).modifiers.face_down);
        assert!(DudDraw::new(100.0).on_card_draw(card(), &mut rng).modifiers.dud);
    }

    #[test]
    fn test_rewrites_keep_identity() {
        let mut rng = GameRng::new(3);
        let armored = ArmoredDraw::new(100.0, 3).on_card_draw(card(), &mut rng);
        assert_eq!(armored.id, CardId(7));
        assert_eq!(armored.modifiers.health, 3);
        assert_eq!(armored.shape, card().shape);

        let bomb = VolatileDraw::new(100.0, 15_000).on_card_draw(card(), &mut rng);
        assert_eq!(bomb.modifiers.bomb_ms, Some(15_000));

        let countdown = CountdownDraw::new(100.0, 30_000).on_card_draw(card(), &mut rng);
        assert_eq!(countdown.modifiers.countdown_ms, Some(30_000));
    }
}
