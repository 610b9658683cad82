// Scoring step: per-player rating means, computed when voting closes.

use std::collections::HashMap;

use super::roster::ScoredPlayer;

/// Score assigned to a player nobody rated.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// One voter's ratings, keyed by registered player name.
pub type RatingSheet = HashMap<String, u8>;

/// Compute the scored roster for `players`, preserving registration order.
///
/// Every rating any voter cast for a player contributes to that player's
/// arithmetic mean; a player who received no votes at all gets
/// `default_score`.
pub fn score_roster(
    players: &[String],
    sheets: &[&RatingSheet],
    default_score: f64,
) -> Vec<ScoredPlayer> {
    players
        .iter()
        .map(|name| {
            let mut sum = 0u32;
            let mut count = 0u32;
            for sheet in sheets {
                if let Some(&rating) = sheet.get(name) {
                    sum += u32::from(rating);
                    count += 1;
                }
            }
            let score = if count == 0 {
                default_score
            } else {
                f64::from(sum) / f64::from(count)
            };
            ScoredPlayer {
                name: name.clone(),
                score,
            }
        })
        .collect()
}
