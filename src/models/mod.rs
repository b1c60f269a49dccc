//! Data models for tracked wellness records.
//!
//! This module contains the persisted data structures:
//!
//! - `Goal`, `Dimension`: ordered goal lists per life dimension
//! - `DailyPlan`, `ScheduledTask`: the time-blocked daily planner
//! - `Reflection`: journal entries
//! - `Profile`, `Vaccine`, `Indicator`: preventive-health reference tables
//! - `Asset`: household replacement planning
//! - `XpState`: level progression

pub mod asset;
pub mod goal;
pub mod plan;
pub mod preventive;
pub mod reflection;
pub mod xp;

pub use asset::{default_assets, Asset};
pub use goal::{Dimension, Goal};
pub use plan::{DailyPlan, ScheduledTask, TaskCategory};
pub use preventive::{
    reading_is_stale, Indicator, IndicatorEntry, Profile, Sex, Vaccine, VaccineStatus, ZoneStatus,
    INDICATORS, VACCINES,
};
pub use reflection::Reflection;
pub use xp::{MedalLog, XpState, XP_DAILY_MEDAL, XP_GOAL_COMPLETED};
