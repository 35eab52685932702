/// One match of the current matchday, already decoded from the feed.
#[derive(Debug, Clone)]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    /// Recorded result pairs, most recent first; empty until kickoff.
    pub results: Vec<(u32, u32)>,
    /// Scoring events in chronological order.
    pub goals: Vec<GoalEvent>,
    pub is_finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEvent {
    pub minute: u32,
    pub scorer: String,
    /// Cumulative score after this goal, as reported by the feed.
    pub score_home: u32,
    pub score_away: u32,
    pub penalty: bool,
    pub own_goal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunningState {
    Finished,
    InProgress,
    NotStarted,
}

impl Match {
    pub fn team_names(&self) -> (&str, &str) {
        (&self.home_team, &self.away_team)
    }

    /// (0, 0) until the match has begun, afterwards the most recent result.
    pub fn current_score(&self) -> (u32, u32) {
        self.results.first().copied().unwrap_or((0, 0))
    }

    pub fn has_begun(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn has_finished(&self) -> bool {
        self.is_finished
    }

    pub fn running_state(&self) -> RunningState {
        if self.has_finished() {
            RunningState::Finished
        } else if self.has_begun() {
            RunningState::InProgress
        } else {
            RunningState::NotStarted
        }
    }
}

/// Keeps matches where either team name contains the substring, ignoring
/// case. `None` returns the input untouched.
pub fn filter_by_team(matches: Vec<Match>, team: Option<&str>) -> Vec<Match> {
    let Some(team) = team else {
        return matches;
    };
    let needle = team.to_lowercase();
    matches
        .into_iter()
        .filter(|m| {
            m.home_team.to_lowercase().contains(&needle)
                || m.away_team.to_lowercase().contains(&needle)
        })
        .collect()
}
