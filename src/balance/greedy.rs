// Greedy split for rosters too large to search exhaustively.

use super::roster::{ScoredPlayer, Team, TeamPartition};

/// Approximately balanced split in O(N log N): sort by score descending and
/// hand each player to the team with the lower running average.
///
/// An empty team counts as average 0 and a tie goes to the first team, so
/// the strongest player always lands on team one. The first team is capped
/// at `team_size`; once either side is full the rest go to the other side,
/// which is how the second team absorbs the remainder of an odd roster.
pub(super) fn partition(roster: &[ScoredPlayer], team_size: usize) -> TeamPartition {
    let mut sorted: Vec<ScoredPlayer> = roster.to_vec();
    // Stable sort: players with equal scores keep their roster order.
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut first: Vec<ScoredPlayer> = Vec::with_capacity(team_size);
    let mut second: Vec<ScoredPlayer> = Vec::with_capacity(roster.len() - team_size);
    let mut first_sum = 0.0;
    let mut second_sum = 0.0;

    for player in sorted {
        let first_avg = if first.is_empty() {
            0.0
        } else {
            first_sum / first.len() as f64
        };
        let second_avg = if second.is_empty() {
            0.0
        } else {
            second_sum / second.len() as f64
        };

        if first.len() == team_size {
            second_sum += player.score;
            second.push(player);
        } else if second.len() == team_size {
            first_sum += player.score;
            first.push(player);
        } else if first_avg <= second_avg {
            first_sum += player.score;
            first.push(player);
        } else {
            second_sum += player.score;
            second.push(player);
        }
    }

    TeamPartition {
        teams: [Team::from_players(first), Team::from_players(second)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

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
    fn thirteen_players_split_six_and_seven() {
        let roster = roster(&[
            10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0, 1.0, 1.0,
        ]);
        let partition = partition(&roster, 6);

        assert_eq!(partition.teams[0].len(), 6);
        assert_eq!(partition.teams[1].len(), 7);

        let mut seen: HashSet<&str> = HashSet::new();
        for team in &partition.teams {
            for player in &team.players {
                assert!(seen.insert(player.name.as_str()), "player assigned twice");
            }
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn strongest_player_goes_to_first_team() {
        let roster = roster(&[3.0, 9.0, 5.0, 7.0]);
        let partition = partition(&roster, 2);
        assert_eq!(partition.teams[0].players[0].name, "p2");
    }

    #[test]
    fn capacity_cap_is_respected() {
        // One dominant player forces the rest toward the second team until
        // it fills, then overflow returns to the first.
        let roster = roster(&[10.0, 1.0, 1.0, 1.0]);
        let partition = partition(&roster, 2);

        assert_eq!(partition.teams[0].len(), 2);
        assert_eq!(partition.teams[1].len(), 2);
        assert_eq!(partition.teams[0].players[0].name, "p1");
        assert_eq!(partition.teams[0].average_score, 5.5);
        assert_eq!(partition.teams[1].average_score, 1.0);
    }

    #[test]
    fn equal_scores_alternate_between_teams() {
        let roster = roster(&[4.0; 14]);
        let partition = partition(&roster, 7);
        assert_eq!(partition.teams[0].len(), 7);
        assert_eq!(partition.teams[1].len(), 7);
        // First player ties (0 <= 0) onto team one; the second then sees
        // team one averaging 4 and team two at 0.
        assert_eq!(partition.teams[0].players[0].name, "p1");
        assert_eq!(partition.teams[1].players[0].name, "p2");
    }
}
