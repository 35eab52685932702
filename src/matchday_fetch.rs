use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::http_client::http_client;
use crate::matchday::{GoalEvent, Match};

/// One GET against the matchday endpoint, decoded into domain matches.
pub fn fetch_matchday(config: &AppConfig) -> Result<Vec<Match>> {
    let client = http_client()?;

    let resp = client
        .get(&config.endpoint)
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, body));
    }

    parse_matchday_json(&body)
}

pub fn parse_matchday_json(raw: &str) -> Result<Vec<Match>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let rows: Vec<ApiMatch> =
        serde_json::from_str(trimmed).context("invalid matchday json")?;
    Ok(rows.into_iter().map(build_match).collect())
}

// Raw feed shapes. Decoding is strict: a missing or mistyped field fails
// the whole response.

#[derive(Debug, Deserialize)]
struct ApiMatch {
    #[serde(rename = "Team1")]
    team1: ApiTeam,
    #[serde(rename = "Team2")]
    team2: ApiTeam,
    #[serde(rename = "MatchResults")]
    match_results: Vec<ApiResult>,
    #[serde(rename = "Goals")]
    goals: Vec<ApiGoal>,
    #[serde(rename = "MatchIsFinished")]
    match_is_finished: bool,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    #[serde(rename = "TeamName")]
    team_name: String,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(rename = "PointsTeam1")]
    points_team1: u32,
    #[serde(rename = "PointsTeam2")]
    points_team2: u32,
}

#[derive(Debug, Deserialize)]
struct ApiGoal {
    #[serde(rename = "MatchMinute")]
    match_minute: u32,
    #[serde(rename = "GoalGetterName")]
    goal_getter_name: String,
    #[serde(rename = "ScoreTeam1")]
    score_team1: u32,
    #[serde(rename = "ScoreTeam2")]
    score_team2: u32,
    #[serde(rename = "IsPenalty")]
    is_penalty: bool,
    #[serde(rename = "IsOwnGoal")]
    is_own_goal: bool,
}

fn build_match(row: ApiMatch) -> Match {
    Match {
        home_team: row.team1.team_name,
        away_team: row.team2.team_name,
        results: row
            .match_results
            .into_iter()
            .map(|r| (r.points_team1, r.points_team2))
            .collect(),
        goals: row.goals.into_iter().map(build_goal).collect(),
        is_finished: row.match_is_finished,
    }
}

fn build_goal(row: ApiGoal) -> GoalEvent {
    GoalEvent {
        minute: row.match_minute,
        scorer: row.goal_getter_name,
        score_home: row.score_team1,
        score_away: row.score_team2,
        penalty: row.is_penalty,
        own_goal: row.is_own_goal,
    }
}
