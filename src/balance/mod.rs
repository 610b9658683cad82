// Team balancing engine: exact search for small rosters, greedy fallback.

mod exact;
mod greedy;
pub mod roster;
pub mod scoring;

pub use roster::{ScoredPlayer, Team, TeamPartition};

/// Largest roster the exhaustive search is allowed to handle. C(12, 6) is
/// 924 candidate splits; past that the combinatorics explode and the greedy
/// split takes over.
pub const EXACT_ENUMERATION_LIMIT: usize = 12;

/// Split a scored roster into two teams minimizing the gap between the
/// teams' average scores.
///
/// Team one holds `floor(N / 2)` players and team two the remainder, so the
/// teams are equal halves for even rosters. Rosters of up to
/// [`EXACT_ENUMERATION_LIMIT`] players are solved optimally by enumerating
/// every split; larger rosters get an approximate greedy assignment.
///
/// Pure function: the roster is not mutated and identical input produces an
/// identical partition.
///
/// # Panics
///
/// Panics if the roster has fewer than two players or contains a non-finite
/// score. Both are caller bugs, not runtime conditions.
pub fn balance(roster: &[ScoredPlayer]) -> TeamPartition {
    assert!(
        roster.len() >= 2,
        "balance requires at least two players, got {}",
        roster.len()
    );
    assert!(
        roster.iter().all(|p| p.score.is_finite()),
        "balance requires finite player scores"
    );

    let team_size = roster.len() / 2;
    if roster.len() <= EXACT_ENUMERATION_LIMIT {
        exact::partition(roster, team_size)
    } else {
        greedy::partition(roster, team_size)
    }
}
