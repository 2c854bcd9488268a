use std::ops::Index;

use serde::Serialize;

use crate::domains::scale::ScaleError;

pub const CRITERIA_COUNT: usize = 10;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 10;

/// Ten ratings aligned positionally with a criterion catalog.
///
/// Constructing from an array performs no range check; the scoring
/// engine works on whatever integers it is given. Use `TryFrom<Vec<i32>>`
/// at trust boundaries to reject wrong lengths and out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreVector([i32; CRITERIA_COUNT]);

impl ScoreVector {
    pub const fn new(scores: [i32; CRITERIA_COUNT]) -> Self {
        Self(scores)
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    /// Sum of all scores, clamped to `i32::MIN..=i32::MAX` for unchecked input.
    pub fn total(&self) -> i32 {
        self.0.iter().fold(0i32, |acc, &s| acc.saturating_add(s))
    }
}

impl TryFrom<Vec<i32>> for ScoreVector {
    type Error = ScaleError;

    fn try_from(scores: Vec<i32>) -> Result<Self, Self::Error> {
        let len = scores.len();
        let scores: [i32; CRITERIA_COUNT] = scores
            .try_into()
            .map_err(|_| ScaleError::WrongLength(len))?;

        if let Some((index, &value)) = scores
            .iter()
            .enumerate()
            .find(|(_, s)| !(MIN_SCORE..=MAX_SCORE).contains(*s))
        {
            return Err(ScaleError::OutOfRange {
                criterion: index + 1,
                value,
            });
        }

        Ok(Self(scores))
    }
}

impl Index<usize> for ScoreVector {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}
