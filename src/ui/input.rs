//! Keyboard input handling for the TUI.
//!
//! Keys are resolved in layers: overlay states (help, quit confirm, goto,
//! insights) swallow the keyboard first, then any open form on the current
//! page, then global navigation keys, and finally the per-page browse
//! handlers.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, Focus, PAGE_SCROLL_SIZE};
use crate::models::{Dimension, TaskCategory};
use crate::pages::dimension::GoalMode;
use crate::pages::finance::{AssetField, AssetForm, AssetMode};
use crate::pages::planner::{PlanMode, TaskField, TaskForm};
use crate::pages::preventive::{PreventiveMode, PreventiveSection, ProfileField, ReadingField};
use crate::pages::reflections::{ReflectField, ReflectMode, ReflectionForm};
use crate::router::PageId;
use crate::utils::today_key;

/// Handle a key event, returning `Ok(true)` when the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Overlay states take the keyboard first
    match app.state {
        AppState::ShowingHelp => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.state = AppState::Normal;
            }
            return Ok(false);
        }
        AppState::ConfirmingQuit => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.state = AppState::Quitting;
                    return Ok(true);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.state = AppState::Normal;
                }
                _ => {}
            }
            return Ok(false);
        }
        AppState::ShowingInsights => {
            handle_insights_input(app, key);
            return Ok(false);
        }
        AppState::Goto => {
            handle_goto_input(app, key);
            return Ok(false);
        }
        AppState::Normal | AppState::Quitting => {}
    }

    // An open form on the current page swallows the keyboard next,
    // so typed text never triggers global bindings
    if handle_page_modal(app, key) {
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char(':') => {
            app.goto_input.clear();
            app.state = AppState::Goto;
        }
        KeyCode::Char(c @ '0'..='9') => {
            let page = match c {
                '1' => PageId::Home,
                '2' => PageId::Physical,
                '3' => PageId::Mental,
                '4' => PageId::Financial,
                '5' => PageId::Family,
                '6' => PageId::Professional,
                '7' => PageId::Social,
                '8' => PageId::Spiritual,
                '9' => PageId::Preventive,
                _ => PageId::DailyPlan,
            };
            app.navigate(page.slug());
        }
        KeyCode::Left => {
            let slug = app.router.current.prev().slug();
            app.navigate(slug);
        }
        KeyCode::Right => {
            let slug = app.router.current.next().slug();
            app.navigate(slug);
        }
        KeyCode::Tab => {
            app.focus = next_focus(app.focus, app.router.current);
        }
        KeyCode::Esc => {
            // A grab in progress is dropped before leaving the page
            if cancel_goal_move(app) {
                return Ok(false);
            }
            if let Some(parent) = app.router.current.parent() {
                app.navigate(parent.slug());
            }
        }
        _ => {
            if let Some(dim) = app.router.current.dimension() {
                handle_goal_page_input(app, dim, key);
            } else {
                match app.router.current {
                    PageId::Home => handle_home_input(app, key),
                    PageId::DailyPlan => handle_planner_input(app, key),
                    PageId::Reflections => handle_reflections_input(app, key),
                    PageId::Preventive => handle_preventive_input(app, key),
                    _ => handle_content_input(app, key),
                }
            }
        }
    }

    Ok(false)
}

/// Cycle the focus ring for the current page. The financial page carries a
/// third stop for the asset panel; the reflections page has no content pane.
fn next_focus(focus: Focus, page: PageId) -> Focus {
    if page.dimension() == Some(Dimension::Financial) {
        return match focus {
            Focus::List => Focus::Assets,
            Focus::Assets => Focus::Content,
            Focus::Content => Focus::List,
        };
    }
    if page == PageId::Reflections {
        return Focus::List;
    }
    match focus {
        Focus::List => Focus::Content,
        _ => Focus::List,
    }
}

/// Cancel a goal reorder on the current page, if one is in flight.
fn cancel_goal_move(app: &mut App) -> bool {
    let Some(dim) = app.router.current.dimension() else {
        return false;
    };
    let Some(page) = app.pages.dimension_mut(dim) else {
        return false;
    };
    if page.mode == GoalMode::Moving {
        page.cancel_move();
        return true;
    }
    false
}

// ============================================================================
// Overlay input
// ============================================================================

fn handle_goto_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.goto_input.clear();
            app.state = AppState::Normal;
        }
        KeyCode::Enter => {
            let token = app.goto_input.trim().to_string();
            app.goto_input.clear();
            app.state = AppState::Normal;
            app.navigate(&token);
        }
        KeyCode::Backspace => {
            app.goto_input.pop();
        }
        KeyCode::Char(c) => {
            app.goto_input.push(c);
        }
        _ => {}
    }
}

fn handle_insights_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            app.state = AppState::Normal;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if let Some(page) = app.pages.reflections_mut() {
                page.insights_scroll = page.insights_scroll.saturating_add(1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if let Some(page) = app.pages.reflections_mut() {
                page.insights_scroll = page.insights_scroll.saturating_sub(1);
            }
        }
        _ => {}
    }
}

// ============================================================================
// Form input
// ============================================================================

/// Route the key into whichever form is open on the current page. Returns
/// false when the page is browsing and the key should fall through.
fn handle_page_modal(app: &mut App, key: KeyEvent) -> bool {
    if let Some(dim) = app.router.current.dimension() {
        let prompt_open = app
            .pages
            .dimension(dim)
            .is_some_and(|p| matches!(p.mode, GoalMode::Adding | GoalMode::Editing));
        if prompt_open {
            handle_goal_prompt_input(app, dim, key);
            return true;
        }
        if dim == Dimension::Financial {
            let form_open = app
                .pages
                .assets()
                .is_some_and(|p| p.mode == AssetMode::Adding);
            if form_open {
                handle_asset_form_input(app, key);
                return true;
            }
        }
        return false;
    }

    match app.router.current {
        PageId::DailyPlan => {
            let Some(page) = app.pages.planner() else {
                return false;
            };
            match page.mode {
                PlanMode::Browse => false,
                PlanMode::Form => {
                    handle_task_form_input(app, key);
                    true
                }
                PlanMode::ConfirmDelete(_) => {
                    handle_plan_confirm_input(app, key);
                    true
                }
            }
        }
        PageId::Reflections => {
            let Some(page) = app.pages.reflections() else {
                return false;
            };
            match page.mode {
                ReflectMode::Browse => false,
                ReflectMode::Form => {
                    handle_reflection_form_input(app, key);
                    true
                }
                ReflectMode::Search => {
                    handle_search_input(app, key);
                    true
                }
                ReflectMode::ConfirmDelete(_) => {
                    handle_reflection_confirm_input(app, key);
                    true
                }
            }
        }
        PageId::Preventive => {
            let Some(page) = app.pages.preventive() else {
                return false;
            };
            match page.mode {
                PreventiveMode::Browse => false,
                PreventiveMode::ProfileForm => {
                    handle_profile_form_input(app, key);
                    true
                }
                PreventiveMode::DoseForm => {
                    handle_dose_form_input(app, key);
                    true
                }
                PreventiveMode::ReadingForm => {
                    handle_reading_form_input(app, key);
                    true
                }
            }
        }
        _ => false,
    }
}

fn handle_goal_prompt_input(app: &mut App, dim: Dimension, key: KeyEvent) {
    let Some(page) = app.pages.dimension_mut(dim) else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel_input(),
        KeyCode::Enter => match page.mode {
            GoalMode::Adding => page.commit_add(&mut app.store, &mut app.notices),
            GoalMode::Editing => page.commit_edit(&mut app.store, &mut app.notices),
            _ => {}
        },
        KeyCode::Backspace => {
            page.input.pop();
        }
        KeyCode::Char(c) => {
            page.input.push(c);
        }
        _ => {}
    }
}

fn handle_asset_form_input(app: &mut App, key: KeyEvent) {
    let Some(panel) = app.pages.assets_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => panel.cancel_form(),
        KeyCode::Enter => panel.commit_add(&mut app.store, &mut app.notices),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            panel.form.field = panel.form.field.next();
        }
        KeyCode::Backspace => {
            active_asset_field(&mut panel.form).pop();
        }
        KeyCode::Char(c) => {
            active_asset_field(&mut panel.form).push(c);
        }
        _ => {}
    }
}

fn active_asset_field(form: &mut AssetForm) -> &mut String {
    match form.field {
        AssetField::Name => &mut form.name,
        AssetField::Purchased => &mut form.purchased,
    }
}

fn handle_task_form_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.planner_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel(),
        KeyCode::Enter => page.commit_form(&mut app.store, &mut app.notices),
        KeyCode::Tab | KeyCode::Down => {
            page.form.field = page.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            page.form.field = page.form.field.prev();
        }
        KeyCode::Left if page.form.field == TaskField::Category => {
            page.form.category = page.form.category.prev();
        }
        KeyCode::Right if page.form.field == TaskField::Category => {
            page.form.category = page.form.category.next();
        }
        KeyCode::Backspace => {
            if let Some(buf) = active_task_field(&mut page.form) {
                buf.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buf) = active_task_field(&mut page.form) {
                buf.push(c);
            }
        }
        _ => {}
    }
}

fn active_task_field(form: &mut TaskForm) -> Option<&mut String> {
    match form.field {
        TaskField::Description => Some(&mut form.description),
        TaskField::Start => Some(&mut form.start),
        TaskField::End => Some(&mut form.end),
        TaskField::Category => None,
    }
}

fn handle_plan_confirm_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.planner_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            page.confirm_delete(&mut app.store, &mut app.notices);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => page.cancel(),
        _ => {}
    }
}

fn handle_reflection_form_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.reflections_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel(),
        KeyCode::Enter => page.commit_form(&mut app.store, &mut app.notices),
        KeyCode::Tab | KeyCode::Down => {
            page.form.field = page.form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            page.form.field = page.form.field.prev();
        }
        KeyCode::Left if page.form.field == ReflectField::Category => {
            page.cycle_form_category_back();
        }
        KeyCode::Right if page.form.field == ReflectField::Category => {
            page.cycle_form_category();
        }
        KeyCode::Backspace => {
            if let Some(buf) = active_reflect_field(&mut page.form) {
                buf.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(buf) = active_reflect_field(&mut page.form) {
                buf.push(c);
            }
        }
        _ => {}
    }
}

fn active_reflect_field(form: &mut ReflectionForm) -> Option<&mut String> {
    match form.field {
        ReflectField::Title => Some(&mut form.title),
        ReflectField::Text => Some(&mut form.text),
        ReflectField::Category => None,
    }
}

fn handle_reflection_confirm_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.reflections_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            page.confirm_delete(&mut app.store, &mut app.notices);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => page.cancel(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.reflections_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            page.clear_search();
            page.end_search();
        }
        KeyCode::Enter => page.end_search(),
        KeyCode::Backspace => {
            page.filters.search.pop();
            page.selection = 0;
        }
        KeyCode::Char(c) => {
            page.filters.search.push(c);
            page.selection = 0;
        }
        _ => {}
    }
}

fn handle_profile_form_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.preventive_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel(),
        KeyCode::Enter => page.commit_profile(&mut app.store, &mut app.notices),
        KeyCode::Tab | KeyCode::Down => {
            page.profile_form.field = page.profile_form.field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            page.profile_form.field = page.profile_form.field.prev();
        }
        KeyCode::Left | KeyCode::Right if page.profile_form.field == ProfileField::Sex => {
            page.cycle_form_sex();
        }
        KeyCode::Backspace => match page.profile_form.field {
            ProfileField::BirthDate => {
                page.profile_form.birth_date.pop();
            }
            ProfileField::Weight => {
                page.profile_form.weight.pop();
            }
            ProfileField::Sex => {}
        },
        KeyCode::Char(c) => match page.profile_form.field {
            ProfileField::BirthDate => page.profile_form.birth_date.push(c),
            ProfileField::Weight => page.profile_form.weight.push(c),
            ProfileField::Sex => page.cycle_form_sex(),
        },
        _ => {}
    }
}

fn handle_dose_form_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.preventive_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel(),
        KeyCode::Enter => page.commit_dose(&mut app.store, &mut app.notices),
        KeyCode::Backspace => {
            page.dose_form.date.pop();
        }
        KeyCode::Char(c) => {
            page.dose_form.date.push(c);
        }
        _ => {}
    }
}

fn handle_reading_form_input(app: &mut App, key: KeyEvent) {
    let Some(page) = app.pages.preventive_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => page.cancel(),
        KeyCode::Enter => page.commit_reading(&mut app.store, &mut app.notices),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            page.reading_form.field = page.reading_form.field.next();
        }
        KeyCode::Backspace => match page.reading_form.field {
            ReadingField::Value => {
                page.reading_form.value.pop();
            }
            ReadingField::Date => {
                page.reading_form.date.pop();
            }
        },
        KeyCode::Char(c) => match page.reading_form.field {
            ReadingField::Value => page.reading_form.value.push(c),
            ReadingField::Date => page.reading_form.date.push(c),
        },
        _ => {}
    }
}

// ============================================================================
// Browse input
// ============================================================================

fn handle_goal_page_input(app: &mut App, dim: Dimension, key: KeyEvent) {
    if app.focus == Focus::Content {
        handle_content_input(app, key);
        return;
    }
    if app.focus == Focus::Assets {
        handle_assets_input(app, key);
        return;
    }

    // Keys that reach outside the page come first
    match key.code {
        KeyCode::Char('g') => {
            app.request_suggestion(dim);
            return;
        }
        KeyCode::Char('p') => {
            let text = app
                .pages
                .dimension(dim)
                .and_then(|p| p.selected_goal())
                .map(|g| g.text.clone());
            if let Some(text) = text {
                app.send_to_plan(text, TaskCategory::from(dim));
            }
            return;
        }
        _ => {}
    }

    let Some(page) = app.pages.dimension_mut(dim) else {
        return;
    };

    if page.mode == GoalMode::Moving {
        // The grabbed goal follows the cursor until dropped
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => page.move_down(),
            KeyCode::Char('k') | KeyCode::Up => page.move_up(),
            KeyCode::Enter | KeyCode::Char('m') => {
                page.commit_move(&mut app.store, &mut app.notices);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => page.select_next(),
        KeyCode::Char('k') | KeyCode::Up => page.select_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let today = today_key();
            page.toggle_selected(&today, &mut app.store, &mut app.game, &mut app.notices);
        }
        KeyCode::Char('a') => page.begin_add(),
        KeyCode::Char('e') => page.begin_edit(),
        KeyCode::Char('d') => page.delete_selected(&mut app.store, &mut app.notices),
        KeyCode::Char('m') => page.begin_move(),
        _ => {}
    }
}

fn handle_assets_input(app: &mut App, key: KeyEvent) {
    let Some(panel) = app.pages.assets_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => panel.select_next(),
        KeyCode::Char('k') | KeyCode::Up => panel.select_prev(),
        KeyCode::Char('a') => panel.begin_add(),
        KeyCode::Char('d') => panel.delete_selected(&mut app.store, &mut app.notices),
        _ => {}
    }
}

fn handle_home_input(app: &mut App, key: KeyEvent) {
    if app.focus == Focus::Content {
        handle_content_input(app, key);
        return;
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.pages.home.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.pages.home.select_prev(),
        KeyCode::Enter => {
            let page = app.pages.home.selected();
            app.navigate(page.slug());
        }
        _ => {}
    }
}

fn handle_planner_input(app: &mut App, key: KeyEvent) {
    if app.focus == Focus::Content {
        handle_content_input(app, key);
        return;
    }
    let Some(page) = app.pages.planner_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => page.select_next(),
        KeyCode::Char('k') | KeyCode::Up => page.select_prev(),
        KeyCode::Char(' ') | KeyCode::Enter => {
            page.toggle_selected(&mut app.store, &mut app.notices);
        }
        KeyCode::Char('a') => page.begin_add(),
        KeyCode::Char('e') => page.begin_edit(),
        KeyCode::Char('d') => page.request_delete(),
        KeyCode::Char('[') => page.prev_day(&mut app.store),
        KeyCode::Char(']') => page.next_day(&mut app.store),
        KeyCode::Char('t') => page.go_today(&mut app.store),
        _ => {}
    }
}

fn handle_reflections_input(app: &mut App, key: KeyEvent) {
    // The insight request reaches outside the page
    if key.code == KeyCode::Char('g') {
        app.request_insights();
        return;
    }
    let Some(page) = app.pages.reflections_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => page.select_next(),
        KeyCode::Char('k') | KeyCode::Up => page.select_prev(),
        KeyCode::Char('a') => page.begin_add(),
        KeyCode::Char('e') => page.begin_edit(),
        KeyCode::Char('d') => page.request_delete(),
        KeyCode::Char('/') => page.begin_search(),
        KeyCode::Char('c') => page.cycle_category_filter(),
        KeyCode::Char('r') => page.cycle_range(),
        KeyCode::Char('s') => page.cycle_sort(),
        KeyCode::Enter | KeyCode::Char('v') => {
            if page.insights.is_some() {
                app.state = AppState::ShowingInsights;
            }
        }
        _ => {}
    }
}

fn handle_preventive_input(app: &mut App, key: KeyEvent) {
    if app.focus == Focus::Content {
        handle_content_input(app, key);
        return;
    }
    let Some(page) = app.pages.preventive_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('s') => page.next_section(),
        KeyCode::Char('j') | KeyCode::Down => page.select_next(),
        KeyCode::Char('k') | KeyCode::Up => page.select_prev(),
        KeyCode::Char('e') | KeyCode::Enter => match page.section {
            PreventiveSection::Profile => page.begin_profile(),
            PreventiveSection::Vaccines => page.begin_dose(),
            PreventiveSection::Indicators => page.begin_reading(),
        },
        _ => {}
    }
}

fn handle_content_input(app: &mut App, key: KeyEvent) {
    let max = app.content_body.lines().count().saturating_sub(1) as u16;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.content_scroll = app.content_scroll.saturating_add(1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.content_scroll = app.content_scroll.saturating_sub(1);
        }
        KeyCode::PageDown => {
            app.content_scroll = app
                .content_scroll
                .saturating_add(PAGE_SCROLL_SIZE as u16)
                .min(max);
        }
        KeyCode::PageUp => {
            app.content_scroll = app.content_scroll.saturating_sub(PAGE_SCROLL_SIZE as u16);
        }
        KeyCode::Home => {
            app.content_scroll = 0;
        }
        _ => {}
    }
}
