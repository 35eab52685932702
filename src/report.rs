use crate::config::AppConfig;
use crate::matchday::{GoalEvent, Match, RunningState};
use crate::timeline::{reconstruct_timeline, GoalTimeline};

const HEADLINE: &str = "Aktuelle Bundesliga-Spielstände:";
const SEPARATOR: &str = "---";

/// Renders the whole matchday report. The headline is only shown for the
/// unfiltered report.
pub fn render_report(matches: &[Match], show_headline: bool, config: &AppConfig) -> String {
    let mut out = String::new();

    if show_headline {
        let underline = "=".repeat(HEADLINE.chars().count());
        out.push('\n');
        out.push_str(HEADLINE);
        out.push('\n');
        out.push_str(&underline);
        out.push_str("\n\n");
    }

    for (idx, m) in matches.iter().enumerate() {
        if idx > 0 {
            out.push_str(SEPARATOR);
            out.push_str("\n\n");
        }
        out.push_str(&render_match(m, config));
    }

    out
}

pub fn render_match(m: &Match, config: &AppConfig) -> String {
    let (home, away) = m.team_names();
    let (score_home, score_away) = m.current_score();

    let mut out = String::new();
    out.push_str(&format!("{home} - {away}\n\n"));
    out.push_str(&format!("{score_home} : {score_away}\n\n"));

    // An inconsistent goal list renders no goal section at all.
    if let Some(timeline) = reconstruct_timeline(m) {
        let lines = goal_lines(&timeline, config);
        if !lines.is_empty() {
            for line in &lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out.push_str(&format!("({})\n\n", running_state_label(m.running_state())));
    out
}

pub fn running_state_label(state: RunningState) -> &'static str {
    match state {
        RunningState::Finished => "beendet",
        RunningState::InProgress => "läuft",
        RunningState::NotStarted => "noch nicht gestartet",
    }
}

fn goal_lines(timeline: &GoalTimeline, config: &AppConfig) -> Vec<String> {
    let home: Vec<String> = timeline
        .home
        .iter()
        .map(|slot| goal_cell(slot.as_ref(), config))
        .collect();
    let away: Vec<String> = timeline
        .away
        .iter()
        .map(|slot| goal_cell(slot.as_ref(), config))
        .collect();

    if home.is_empty() {
        return Vec::new();
    }

    let home_width = column_width(&home, config);
    let away_width = column_width(&away, config);

    home.iter()
        .zip(&away)
        .map(|(h, a)| format!("{h:<home_width$}{a:<away_width$}"))
        .collect()
}

fn goal_cell(slot: Option<&GoalEvent>, config: &AppConfig) -> String {
    let Some(goal) = slot else {
        return String::new();
    };
    let mut cell = format!(
        "{:>width$}' {}",
        goal.minute,
        goal.scorer,
        width = config.minute_digits
    );
    if goal.penalty {
        cell.push_str(" (P)");
    }
    if goal.own_goal {
        cell.push_str(" (OG)");
    }
    cell
}

fn column_width(cells: &[String], config: &AppConfig) -> usize {
    let longest = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
    config.min_column_width.max(longest + config.column_gap)
}
