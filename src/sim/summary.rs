//! End-of-round summary, derived on demand from the catch history

use serde::{Deserialize, Serialize};

use super::state::{CatchRecord, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundSummary {
    pub healthy_count: usize,
    pub unhealthy_count: usize,
    pub total_calories: u64,
    /// Sum of point values in catch order; equals the session score
    pub total_points: i64,
}

impl RoundSummary {
    pub fn from_history(history: &[CatchRecord]) -> Self {
        history.iter().fold(Self::default(), |mut summary, record| {
            match record.food.category {
                Category::Healthy => summary.healthy_count += 1,
                Category::Unhealthy => summary.unhealthy_count += 1,
            }
            summary.total_calories += u64::from(record.food.calories);
            summary.total_points += i64::from(record.food.points);
            summary
        })
    }

    pub fn total_catches(&self) -> usize {
        self.healthy_count + self.unhealthy_count
    }
}
