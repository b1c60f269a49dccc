//! Per-page render functions. Each reads the app state and draws into the
//! main content area; forms and dialogs are drawn in the overlay pass.

pub mod content;
pub mod finance;
pub mod goals;
pub mod home;
pub mod planner;
pub mod preventive;
pub mod reflections;
