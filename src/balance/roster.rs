// Core data shapes: scored players, teams, and the two-team partition.

use serde::{Deserialize, Serialize};

/// A roster entry carrying the mean rating the player received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPlayer {
    pub name: String,
    pub score: f64,
}

/// One side of a split roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<ScoredPlayer>,
    /// Mean of the members' scores, rounded to two decimals for reporting.
    pub average_score: f64,
}

impl Team {
    /// Build a team from its members, computing the reported average.
    pub fn from_players(players: Vec<ScoredPlayer>) -> Self {
        debug_assert!(!players.is_empty(), "a team must have at least one player");
        let mean = players.iter().map(|p| p.score).sum::<f64>() / players.len() as f64;
        Team {
            average_score: round2(mean),
            players,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The two disjoint teams covering a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPartition {
    pub teams: [Team; 2],
}

impl TeamPartition {
    /// Absolute difference between the two reported team averages.
    pub fn score_gap(&self) -> f64 {
        (self.teams[0].average_score - self.teams[1].average_score).abs()
    }
}

/// Round to two decimal places. Reporting precision only; the balancer
/// compares unrounded averages.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, score: f64) -> ScoredPlayer {
        ScoredPlayer {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn round2_behavior() {
        assert_eq!(round2(5.0), 5.0);
        assert_eq!(round2(4.666666666), 4.67);
        assert_eq!(round2(7.125), 7.13);
        assert_eq!(round2(3.333333333), 3.33);
    }

    #[test]
    fn team_average_is_rounded_mean() {
        let team = Team::from_players(vec![player("a", 7.0), player("b", 8.0), player("c", 6.0)]);
        assert_eq!(team.average_score, 7.0);
        assert_eq!(team.len(), 3);

        let team = Team::from_players(vec![player("a", 7.0), player("b", 7.0), player("c", 6.0)]);
        // 20 / 3 = 6.666... -> 6.67
        assert_eq!(team.average_score, 6.67);
    }

    #[test]
    fn score_gap_uses_reported_averages() {
        let partition = TeamPartition {
            teams: [
                Team::from_players(vec![player("a", 9.0), player("b", 2.0)]),
                Team::from_players(vec![player("c", 8.0), player("d", 1.0)]),
            ],
        };
        assert_eq!(partition.teams[0].average_score, 5.5);
        assert_eq!(partition.teams[1].average_score, 4.5);
        assert!((partition.score_gap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn partition_serializes_with_snake_case_fields() {
        let partition = TeamPartition {
            teams: [
                Team::from_players(vec![player("a", 6.0)]),
                Team::from_players(vec![player("b", 4.0)]),
            ],
        };
        let json = serde_json::to_string(&partition).unwrap();
        assert!(json.contains("\"average_score\":6.0"));
        let back: TeamPartition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, partition);
    }
}
