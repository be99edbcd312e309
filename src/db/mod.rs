pub mod productivity;
pub mod recommendations;
pub mod sessions;
pub mod team;
pub mod users;
pub mod wellbeing;
