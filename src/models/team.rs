use serde::Serialize;

/// Per-member sums and sample counts over the analytics window.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct MemberAggregate {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub wellbeing_sum: Option<f64>,
    pub wellbeing_count: i64,
    pub mood_sum: Option<f64>,
    pub mood_count: i64,
    pub productivity_sum: Option<f64>,
    pub productivity_count: i64,
}

impl MemberAggregate {
    pub fn display_name(&self) -> String {
        super::user::display_name(
            &self.user_id,
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
        )
    }

    pub fn mean_wellbeing(&self) -> Option<f64> {
        mean(self.wellbeing_sum, self.wellbeing_count)
    }

    pub fn mean_productivity(&self) -> Option<f64> {
        mean(self.productivity_sum, self.productivity_count)
    }
}

fn mean(sum: Option<f64>, count: i64) -> Option<f64> {
    match sum {
        Some(sum) if count > 0 => Some(sum / count as f64),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWellbeingAverage {
    pub average: f64,
    pub member_count: usize,
    pub sample_count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TeamMood {
    Positive,
    Neutral,
    Strained,
    Unknown,
}

impl TeamMood {
    pub fn from_mean_rating(rating: Option<f64>) -> Self {
        match rating {
            Some(r) if r >= 7.0 => TeamMood::Positive,
            Some(r) if r >= 5.0 => TeamMood::Neutral,
            Some(_) => TeamMood::Strained,
            None => TeamMood::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub average_productivity: f64,
    pub top_performer: Option<String>,
    pub needs_support: Option<String>,
    pub team_mood: TeamMood,
    pub member_count: usize,
}
