use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const BASE_DELAY_MS: f64 = 250.0;
pub const FOOD_PER_LEVEL: u32 = 5;

/// Scoring and speed policy. Level and delay are always derived from the
/// counters, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringFormula {
    /// One point per food, a level every five points, delay `250 / level`.
    #[default]
    Linear,
    /// Food is worth the current level, a level every five foods,
    /// delay `250 / (1 + 0.2 * level)`.
    Weighted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub score: u32,
    pub food_eaten: u32,
}

impl ScoringFormula {
    pub fn level(&self, progress: Progress) -> u32 {
        let counter = match self {
            ScoringFormula::Linear => progress.score,
            ScoringFormula::Weighted => progress.food_eaten,
        };
        counter / FOOD_PER_LEVEL + 1
    }

    pub fn delay_ms(&self, level: u32) -> u64 {
        let level = f64::from(level.max(1));
        let delay = match self {
            ScoringFormula::Linear => BASE_DELAY_MS / level,
            ScoringFormula::Weighted => BASE_DELAY_MS / (1.0 + level * 0.2),
        };
        delay.round() as u64
    }

    pub fn delay(&self, progress: Progress) -> Duration {
        Duration::from_millis(self.delay_ms(self.level(progress)))
    }

    /// Counters after one more food.
    pub fn on_food_eaten(&self, progress: Progress) -> Progress {
        let points = match self {
            ScoringFormula::Linear => 1,
            ScoringFormula::Weighted => self.level(progress),
        };
        Progress {
            score: progress.score + points,
            food_eaten: progress.food_eaten + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(score: u32, food_eaten: u32) -> Progress {
        Progress { score, food_eaten }
    }

    #[test]
    fn test_linear_levels_and_delays() {
        let formula = ScoringFormula::Linear;
        assert_eq!(formula.level(progress(0, 0)), 1);
        assert_eq!(formula.level(progress(4, 4)), 1);
        assert_eq!(formula.level(progress(5, 5)), 2);
        assert_eq!(formula.level(progress(12, 12)), 3);

        assert_eq!(formula.delay_ms(1), 250);
        assert_eq!(formula.delay_ms(2), 125);
        assert_eq!(formula.delay_ms(3), 83);
        assert_eq!(formula.delay_ms(6), 42);
    }

    #[test]
    fn test_weighted_levels_and_delays() {
        let formula = ScoringFormula::Weighted;
        assert_eq!(formula.level(progress(100, 4)), 1);
        assert_eq!(formula.level(progress(0, 5)), 2);

        assert_eq!(formula.delay_ms(1), 208);
        assert_eq!(formula.delay_ms(2), 179);
        assert_eq!(formula.delay_ms(5), 125);
    }

    #[test]
    fn test_linear_scores_one_per_food() {
        let formula = ScoringFormula::Linear;
        let mut current = Progress::default();
        for _ in 0..7 {
            current = formula.on_food_eaten(current);
        }
        assert_eq!(current, progress(7, 7));
    }

    #[test]
    fn test_weighted_scores_current_level() {
        let formula = ScoringFormula::Weighted;
        let mut current = Progress::default();
        for _ in 0..5 {
            current = formula.on_food_eaten(current);
        }
        assert_eq!(current, progress(5, 5));

        current = formula.on_food_eaten(current);
        assert_eq!(current, progress(7, 6));
    }

    #[test]
    fn test_speed_never_decreases() {
        for formula in [ScoringFormula::Linear, ScoringFormula::Weighted] {
            let mut current = Progress::default();
            let mut last_level = formula.level(current);
            let mut last_delay = formula.delay(current);
            for _ in 0..200 {
                current = formula.on_food_eaten(current);
                let level = formula.level(current);
                let delay = formula.delay(current);
                assert!(level >= last_level);
                assert!(delay <= last_delay);
                last_level = level;
                last_delay = delay;
            }
        }
    }
}
