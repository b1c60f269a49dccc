//! Daily planner controller.
//!
//! The planner remembers which date the user was looking at and returns
//! there on the next visit. A date with no saved plan shows the stock
//! day template, which is only written to disk once the user changes
//! something on it. Tasks are stored in the order they were created;
//! the timed view sorts them by start time with untimed blocks at the
//! end.

use chrono::{Days, Local, NaiveDate};
use tracing::warn;

use crate::models::{DailyPlan, ScheduledTask, TaskCategory};
use crate::notify::NoticeQueue;
use crate::store::Store;
use crate::utils::{next_millis_id, parse_hhmm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanMode {
    Browse,
    Form,
    /// Holds the id of the task awaiting delete confirmation.
    ConfirmDelete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Description,
    Start,
    End,
    Category,
}

impl TaskField {
    pub fn next(self) -> Self {
        match self {
            TaskField::Description => TaskField::Start,
            TaskField::Start => TaskField::End,
            TaskField::End => TaskField::Category,
            TaskField::Category => TaskField::Description,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            TaskField::Description => TaskField::Category,
            TaskField::Start => TaskField::Description,
            TaskField::End => TaskField::Start,
            TaskField::Category => TaskField::End,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    pub editing_id: Option<String>,
    pub description: String,
    pub start: String,
    pub end: String,
    pub category: TaskCategory,
    pub field: TaskField,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            editing_id: None,
            description: String::new(),
            start: String::new(),
            end: String::new(),
            category: TaskCategory::Personal,
            field: TaskField::Description,
        }
    }
}

pub struct PlannerPage {
    pub date: NaiveDate,
    pub plan: DailyPlan,
    /// Cursor into the sorted view, not the storage order.
    pub selection: usize,
    pub mode: PlanMode,
    pub form: TaskForm,
    last_id_millis: i64,
}

impl PlannerPage {
    pub fn new() -> Self {
        Self {
            date: Local::now().date_naive(),
            plan: DailyPlan::default(),
            selection: 0,
            mode: PlanMode::Browse,
            form: TaskForm::default(),
            last_id_millis: 0,
        }
    }

    /// Return to the date the user last had open, or today on a first
    /// visit.
    pub fn show(&mut self, store: &mut Store) {
        self.date = store
            .load_last_plan_date()
            .unwrap_or_else(|| Local::now().date_naive());
        self.load_date(store);
    }

    /// Jump to a date and remember it for the next visit.
    pub fn open_date(&mut self, date: NaiveDate, store: &mut Store) {
        self.date = date;
        if let Err(err) = store.save_last_plan_date(date) {
            warn!(error = %err, "failed to remember the planner date");
        }
        self.load_date(store);
    }

    pub fn prev_day(&mut self, store: &mut Store) {
        if let Some(date) = self.date.checked_sub_days(Days::new(1)) {
            self.open_date(date, store);
        }
    }

    pub fn next_day(&mut self, store: &mut Store) {
        if let Some(date) = self.date.checked_add_days(Days::new(1)) {
            self.open_date(date, store);
        }
    }

    pub fn go_today(&mut self, store: &mut Store) {
        self.open_date(Local::now().date_naive(), store);
    }

    fn load_date(&mut self, store: &mut Store) {
        self.plan = match store.load_plan(self.date) {
            Some(plan) if !plan.tasks.is_empty() => plan,
            // Seeded in memory only; written on the first change
            _ => DailyPlan::template(),
        };
        self.mode = PlanMode::Browse;
        self.form = TaskForm::default();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.plan.tasks.len().saturating_sub(1);
        self.selection = self.selection.min(max);
    }

    /// Tasks in display order: by start time, untimed blocks last, ties in
    /// creation order. Storage order is left alone.
    pub fn sorted_tasks(&self) -> Vec<&ScheduledTask> {
        let mut view: Vec<&ScheduledTask> = self.plan.tasks.iter().collect();
        view.sort_by(|a, b| {
            (a.start_time.is_empty(), a.start_time.as_str())
                .cmp(&(b.start_time.is_empty(), b.start_time.as_str()))
        });
        view
    }

    pub fn selected(&self) -> Option<&ScheduledTask> {
        self.sorted_tasks().get(self.selection).copied()
    }

    pub fn select_next(&mut self) {
        let max = self.plan.tasks.len().saturating_sub(1);
        self.selection = (self.selection + 1).min(max);
    }

    pub fn select_prev(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn completion_percent(&self) -> u8 {
        self.plan.completion_percent()
    }

    // ===== Form =====

    pub fn begin_add(&mut self) {
        self.form = TaskForm::default();
        self.mode = PlanMode::Form;
    }

    /// Open the form pre-filled from another page, for sending a goal to
    /// the plan. Times are left for the user to pick.
    pub fn quick_add(&mut self, description: String, category: TaskCategory) {
        self.form = TaskForm {
            description,
            category,
            ..TaskForm::default()
        };
        self.mode = PlanMode::Form;
    }

    pub fn begin_edit(&mut self) {
        let Some(task) = self.selected() else {
            return;
        };
        self.form = TaskForm {
            editing_id: Some(task.id.clone()),
            description: task.description.clone(),
            start: task.start_time.clone(),
            end: task.end_time.clone(),
            category: task.category,
            field: TaskField::Description,
        };
        self.mode = PlanMode::Form;
    }

    /// Commit the form. Only the description is required; times may be left
    /// blank but must be HH:MM when given. Edits keep the task's id and
    /// completion state.
    pub fn commit_form(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let description = self.form.description.trim().to_string();
        if description.is_empty() {
            notices.warning("The description is required");
            return;
        }
        let start = self.form.start.trim().to_string();
        let end = self.form.end.trim().to_string();
        for time in [&start, &end] {
            if !time.is_empty() && parse_hhmm(time).is_none() {
                notices.warning("Times must be in HH:MM format");
                return;
            }
        }

        let id = match self.form.editing_id.take() {
            Some(id) => {
                if let Some(task) = self.plan.tasks.iter_mut().find(|t| t.id == id) {
                    task.description = description;
                    task.start_time = start;
                    task.end_time = end;
                    task.category = self.form.category;
                }
                id
            }
            None => {
                let id = next_millis_id(&mut self.last_id_millis);
                self.plan.tasks.push(ScheduledTask {
                    id: id.clone(),
                    start_time: start,
                    end_time: end,
                    description,
                    completed: false,
                    category: self.form.category,
                });
                id
            }
        };

        match store.save_plan(self.date, &self.plan) {
            Ok(()) => notices.success("Task saved to the daily plan"),
            Err(err) => {
                warn!(error = %err, date = %self.date, "failed to save the plan");
                notices.error("Could not save the plan");
            }
        }

        self.form = TaskForm::default();
        self.mode = PlanMode::Browse;
        if let Some(pos) = self.sorted_tasks().iter().position(|t| t.id == id) {
            self.selection = pos;
        }
    }

    pub fn cancel(&mut self) {
        self.form = TaskForm::default();
        self.mode = PlanMode::Browse;
    }

    // ===== Toggle and delete =====

    pub fn toggle_selected(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let Some(id) = self.selected().map(|t| t.id.clone()) else {
            return;
        };
        if let Some(task) = self.plan.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        if let Err(err) = store.save_plan(self.date, &self.plan) {
            warn!(error = %err, date = %self.date, "failed to save the plan");
            notices.error("Could not save the plan");
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected() {
            self.mode = PlanMode::ConfirmDelete(task.id.clone());
        }
    }

    pub fn confirm_delete(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let PlanMode::ConfirmDelete(id) = std::mem::replace(&mut self.mode, PlanMode::Browse)
        else {
            return;
        };
        self.plan.tasks.retain(|t| t.id != id);
        match store.save_plan(self.date, &self.plan) {
            Ok(()) => notices.success("Task deleted"),
            Err(err) => {
                warn!(error = %err, date = %self.date, "failed to save the plan");
                notices.error("Could not save the plan");
            }
        }
        self.clamp_selection();
    }
}

// ============================================================================
// Tests
// ============================================================================
