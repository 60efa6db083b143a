//! Decision-vector validation and arg-max selection.

use mazerun_core::{DecisionError, Direction};

/// Scores per decision vector, one per [`Direction`] in `[up, down, left, right]` order.
pub const DECISION_LEN: usize = Direction::ALL.len();

/// Pick the direction with the highest score.
///
/// Ties go to the lowest index. Vectors of the wrong length or holding
/// NaN/infinite scores are rejected; no default direction is substituted.
pub fn select_direction(scores: &[f64]) -> Result<Direction, DecisionError> {
    if scores.len() != DECISION_LEN {
        return Err(DecisionError::WrongLength {
            expected: DECISION_LEN,
            got: scores.len(),
        });
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DecisionError::NonFinite { index, value });
    }

    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    Ok(Direction::ALL[best])
}
