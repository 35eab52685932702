use crate::matchday::{GoalEvent, Match};

/// Per-team goal columns, index-aligned over all goals of the match in
/// chronological order. The side that did not score at a position holds
/// `None` so both columns can be rendered next to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalTimeline {
    pub home: Vec<Option<GoalEvent>>,
    pub away: Vec<Option<GoalEvent>>,
}

/// Rebuilds the two per-team goal sequences from the feed's chronological
/// goal list, checking the cumulative scores along the way.
///
/// Every goal must raise exactly one side's score by exactly 1 over the
/// running total. The feed does not guarantee that; on any other step the
/// whole list is rejected and `None` is returned, never a partial timeline.
pub fn reconstruct_timeline(m: &Match) -> Option<GoalTimeline> {
    let mut home = Vec::with_capacity(m.goals.len());
    let mut away = Vec::with_capacity(m.goals.len());
    let (mut score_home, mut score_away) = (0u32, 0u32);

    for goal in &m.goals {
        if goal.score_home == score_home + 1 && goal.score_away == score_away {
            home.push(Some(goal.clone()));
            away.push(None);
            score_home += 1;
        } else if goal.score_home == score_home && goal.score_away == score_away + 1 {
            away.push(Some(goal.clone()));
            home.push(None);
            score_away += 1;
        } else {
            return None;
        }
    }

    Some(GoalTimeline { home, away })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(minute: u32, scorer: &str, score_home: u32, score_away: u32) -> GoalEvent {
        GoalEvent {
            minute,
            scorer: scorer.to_string(),
            score_home,
            score_away,
            penalty: false,
            own_goal: false,
        }
    }

    fn match_with_goals(goals: Vec<GoalEvent>) -> Match {
        let score = goals
            .last()
            .map(|g| (g.score_home, g.score_away))
            .unwrap_or((0, 0));
        Match {
            home_team: "FC Bayern München".to_string(),
            away_team: "Borussia Dortmund".to_string(),
            results: vec![score],
            goals,
            is_finished: false,
        }
    }

    #[test]
    fn empty_goal_list_gives_empty_columns() {
        let m = match_with_goals(Vec::new());
        let timeline = reconstruct_timeline(&m).unwrap();
        assert!(timeline.home.is_empty());
        assert!(timeline.away.is_empty());
    }

    #[test]
    fn alternating_goals_land_in_their_columns() {
        let m = match_with_goals(vec![
            goal(23, "Kane", 1, 0),
            goal(67, "Guirassy", 1, 1),
        ]);
        let timeline = reconstruct_timeline(&m).unwrap();

        assert_eq!(timeline.home.len(), 2);
        assert_eq!(timeline.away.len(), 2);
        assert_eq!(timeline.home[0].as_ref().unwrap().minute, 23);
        assert!(timeline.away[0].is_none());
        assert!(timeline.home[1].is_none());
        assert_eq!(timeline.away[1].as_ref().unwrap().scorer, "Guirassy");
    }

    #[test]
    fn exactly_one_entry_per_index_and_replay_matches_feed() {
        let goals = vec![
            goal(12, "Kane", 1, 0),
            goal(29, "Musiala", 2, 0),
            goal(44, "Guirassy", 2, 1),
            goal(90, "Kane", 3, 1),
        ];
        let m = match_with_goals(goals.clone());
        let timeline = reconstruct_timeline(&m).unwrap();

        let (mut h, mut a) = (0u32, 0u32);
        for (i, original) in goals.iter().enumerate() {
            match (&timeline.home[i], &timeline.away[i]) {
                (Some(g), None) => {
                    h += 1;
                    assert_eq!(g, original);
                }
                (None, Some(g)) => {
                    a += 1;
                    assert_eq!(g, original);
                }
                other => panic!("slot {i} must hold exactly one goal, got {other:?}"),
            }
            assert_eq!((h, a), (original.score_home, original.score_away));
        }
        assert_eq!((h, a), m.current_score());
    }

    #[test]
    fn skipped_score_step_rejects_whole_list() {
        // 1-0 is missing, the first event already claims 2-0.
        let m = match_with_goals(vec![goal(40, "Kane", 2, 0)]);
        assert_eq!(reconstruct_timeline(&m), None);
    }

    #[test]
    fn late_inconsistency_discards_earlier_valid_prefix() {
        let m = match_with_goals(vec![
            goal(10, "Kane", 1, 0),
            goal(55, "Adeyemi", 1, 3),
        ]);
        assert_eq!(reconstruct_timeline(&m), None);
    }

    #[test]
    fn decrement_rejects_whole_list() {
        let m = match_with_goals(vec![
            goal(10, "Kane", 1, 0),
            goal(20, "???", 0, 0),
        ]);
        assert_eq!(reconstruct_timeline(&m), None);
    }

    #[test]
    fn both_sides_changing_rejects_whole_list() {
        let m = match_with_goals(vec![goal(10, "Kane", 1, 1)]);
        assert_eq!(reconstruct_timeline(&m), None);
    }

    #[test]
    fn duplicate_cumulative_score_rejects_whole_list() {
        let m = match_with_goals(vec![
            goal(10, "Kane", 1, 0),
            goal(11, "Kane", 1, 0),
        ]);
        assert_eq!(reconstruct_timeline(&m), None);
    }
}
