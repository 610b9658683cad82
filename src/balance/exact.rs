// Exhaustive split search: evaluates every equal-size combination.

use super::roster::{ScoredPlayer, Team, TeamPartition};

/// Find the split minimizing the average-score gap by checking every
/// `C(n, team_size)` way to fill the first team; the complement forms the
/// second.
///
/// Combinations are visited in lexicographic index order and only a strictly
/// smaller gap replaces the current best, so among equally good splits the
/// first one encountered wins. The result is deterministic for a given
/// roster order.
pub(super) fn partition(roster: &[ScoredPlayer], team_size: usize) -> TeamPartition {
    let total: f64 = roster.iter().map(|p| p.score).sum();
    let rest_size = roster.len() - team_size;

    let mut best_diff = f64::INFINITY;
    let mut best_pick: Vec<usize> = Vec::new();

    for_each_combination(roster.len(), team_size, |pick| {
        let pick_sum: f64 = pick.iter().map(|&i| roster[i].score).sum();
        let pick_avg = pick_sum / team_size as f64;
        let rest_avg = (total - pick_sum) / rest_size as f64;
        let diff = (pick_avg - rest_avg).abs();
        if diff < best_diff {
            best_diff = diff;
            best_pick.clear();
            best_pick.extend_from_slice(pick);
        }
    });

    split_at_indices(roster, &best_pick)
}

/// Visit every `k`-element index subset of `0..n` in lexicographic order.
///
/// Explicit index backtracking over a reusable buffer; the slice handed to
/// `visit` is only valid for the duration of the call.
pub(super) fn for_each_combination(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    let mut current = Vec::with_capacity(k);
    descend(0, n, k, &mut current, &mut visit);
}

fn descend<F: FnMut(&[usize])>(
    start: usize,
    n: usize,
    k: usize,
    current: &mut Vec<usize>,
    visit: &mut F,
) {
    if current.len() == k {
        visit(current);
        return;
    }
    // Stop early once too few indices remain to fill the subset.
    let remaining = k - current.len();
    for i in start..=(n - remaining) {
        current.push(i);
        descend(i + 1, n, k, current, visit);
        current.pop();
    }
}

/// Split the roster into the players at `picked` indices (sorted ascending)
/// and everyone else, both sides keeping roster order.
fn split_at_indices(roster: &[ScoredPlayer], picked: &[usize]) -> TeamPartition {
    let mut first = Vec::with_capacity(picked.len());
    let mut second = Vec::with_capacity(roster.len() - picked.len());
    let mut next = picked.iter().copied().peekable();

    for (i, player) in roster.iter().enumerate() {
        if next.peek() == Some(&i) {
            next.next();
            first.push(player.clone());
        } else {
            second.push(player.clone());
        }
    }

    TeamPartition {
        teams: [Team::from_players(first), Team::from_players(second)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(scores: &[f64]) -> Vec<ScoredPlayer> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| ScoredPlayer {
                name: format!("p{}", i + 1),
                score,
            })
            .collect()
    }

    #[test]
    fn combinations_are_lexicographic() {
        let mut seen: Vec<Vec<usize>> = Vec::new();
        for_each_combination(4, 2, |pick| seen.push(pick.to_vec()));
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn combination_count_matches_binomial() {
        let mut count = 0usize;
        for_each_combination(12, 6, |_| count += 1);
        assert_eq!(count, 924);
    }

    #[test]
    fn finds_the_zero_gap_split() {
        // 9+1 and 8+2 both average 5.0.
        let roster = roster(&[9.0, 8.0, 2.0, 1.0]);
        let partition = partition(&roster, 2);

        let first: Vec<&str> = partition.teams[0]
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let second: Vec<&str> = partition.teams[1]
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(first, vec!["p1", "p4"]);
        assert_eq!(second, vec!["p2", "p3"]);
        assert_eq!(partition.teams[0].average_score, 5.0);
        assert_eq!(partition.teams[1].average_score, 5.0);
        assert_eq!(partition.score_gap(), 0.0);
    }

    #[test]
    fn tie_keeps_first_combination() {
        // All splits have gap 0; the first combination ([0, 1]) must win.
        let roster = roster(&[5.0, 5.0, 5.0, 5.0]);
        let partition = partition(&roster, 2);
        let first: Vec<&str> = partition.teams[0]
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(first, vec!["p1", "p2"]);
    }

    #[test]
    fn odd_roster_puts_remainder_on_second_team() {
        let roster = roster(&[6.0, 5.0, 4.0, 3.0, 2.0]);
        let partition = partition(&roster, 2);
        assert_eq!(partition.teams[0].len(), 2);
        assert_eq!(partition.teams[1].len(), 3);
    }

    #[test]
    fn two_player_roster_splits_one_and_one() {
        let roster = roster(&[7.0, 3.0]);
        let partition = partition(&roster, 1);
        assert_eq!(partition.teams[0].players[0].name, "p1");
        assert_eq!(partition.teams[1].players[0].name, "p2");
    }
}
