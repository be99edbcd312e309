//! Folds per-member aggregates into the team analytics responses.

use crate::models::{MemberAggregate, TeamMood, TeamSummary, TeamWellbeingAverage};

pub fn average_wellbeing(members: &[MemberAggregate]) -> TeamWellbeingAverage {
    let (sum, count) = pooled(members, |m| (m.wellbeing_sum, m.wellbeing_count));
    TeamWellbeingAverage {
        average: round_tenths(ratio(sum, count).unwrap_or(0.0)),
        member_count: members.len(),
        sample_count: count,
    }
}

pub fn summarize(members: &[MemberAggregate]) -> TeamSummary {
    let (productivity_sum, productivity_count) =
        pooled(members, |m| (m.productivity_sum, m.productivity_count));
    let (mood_sum, mood_count) = pooled(members, |m| (m.mood_sum, m.mood_count));

    let top_performer = members
        .iter()
        .filter_map(|m| m.mean_productivity().map(|p| (m, p)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(m, _)| m.display_name());

    let needs_support = members
        .iter()
        .filter_map(|m| m.mean_wellbeing().map(|w| (m, w)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(m, _)| m.display_name());

    TeamSummary {
        average_productivity: round_tenths(ratio(productivity_sum, productivity_count).unwrap_or(0.0)),
        top_performer,
        needs_support,
        team_mood: TeamMood::from_mean_rating(ratio(mood_sum, mood_count)),
        member_count: members.len(),
    }
}

fn pooled<F>(members: &[MemberAggregate], pick: F) -> (f64, i64)
where
    F: Fn(&MemberAggregate) -> (Option<f64>, i64),
{
    members.iter().map(pick).fold((0.0, 0), |(sum, count), (s, c)| {
        (sum + s.unwrap_or(0.0), count + c)
    })
}

fn ratio(sum: f64, count: i64) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

fn round_tenths(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
