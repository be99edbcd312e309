mod productivity;
mod recommendation;
mod score;
mod session;
mod team;
mod user;
mod wellbeing;

pub use productivity::{NewProductivityMetric, ProductivityMetric};
pub use recommendation::{NewRecommendation, Priority, Recommendation, RecommendationType};
pub use score::Score;
pub use session::{Session, SessionData};
pub use team::{MemberAggregate, TeamMood, TeamSummary, TeamWellbeingAverage};
pub use user::{Role, UpsertUser, User};
pub use wellbeing::{NewWellbeingMetric, StressLevel, WellbeingMetric};
