//! Preventive-health page controller.
//!
//! Three sections share the page: the profile (birth date, sex, weight),
//! the vaccine schedule, and the biomarker readings. Vaccine doses and
//! readings are dated by the user, since lab results and doses are
//! usually entered after the fact.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::models::{
    reading_is_stale, IndicatorEntry, Profile, Sex, VaccineStatus, INDICATORS, VACCINES,
};
use crate::notify::NoticeQueue;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreventiveSection {
    Profile,
    Vaccines,
    Indicators,
}

impl PreventiveSection {
    pub fn next(self) -> Self {
        match self {
            PreventiveSection::Profile => PreventiveSection::Vaccines,
            PreventiveSection::Vaccines => PreventiveSection::Indicators,
            PreventiveSection::Indicators => PreventiveSection::Profile,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PreventiveSection::Profile => "Profile",
            PreventiveSection::Vaccines => "Vaccines",
            PreventiveSection::Indicators => "Biomarkers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreventiveMode {
    Browse,
    ProfileForm,
    DoseForm,
    ReadingForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    BirthDate,
    Sex,
    Weight,
}

impl ProfileField {
    pub fn next(self) -> Self {
        match self {
            ProfileField::BirthDate => ProfileField::Sex,
            ProfileField::Sex => ProfileField::Weight,
            ProfileField::Weight => ProfileField::BirthDate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ProfileField::BirthDate => ProfileField::Weight,
            ProfileField::Sex => ProfileField::BirthDate,
            ProfileField::Weight => ProfileField::Sex,
        }
    }
}

#[derive(Debug)]
pub struct ProfileForm {
    pub birth_date: String,
    pub sex: Option<Sex>,
    pub weight: String,
    pub field: ProfileField,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            birth_date: String::new(),
            sex: None,
            weight: String::new(),
            field: ProfileField::BirthDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingField {
    Value,
    Date,
}

impl ReadingField {
    pub fn next(self) -> Self {
        match self {
            ReadingField::Value => ReadingField::Date,
            ReadingField::Date => ReadingField::Value,
        }
    }
}

#[derive(Debug)]
pub struct ReadingForm {
    pub value: String,
    pub date: String,
    pub field: ReadingField,
}

impl Default for ReadingForm {
    fn default() -> Self {
        Self {
            value: String::new(),
            date: String::new(),
            field: ReadingField::Value,
        }
    }
}

#[derive(Debug, Default)]
pub struct DoseForm {
    pub date: String,
}

pub struct PreventivePage {
    pub profile: Profile,
    pub vaccine_dates: HashMap<String, NaiveDate>,
    pub histories: HashMap<String, Vec<IndicatorEntry>>,
    pub section: PreventiveSection,
    pub vaccine_selection: usize,
    pub indicator_selection: usize,
    pub mode: PreventiveMode,
    pub profile_form: ProfileForm,
    pub reading_form: ReadingForm,
    pub dose_form: DoseForm,
}

impl PreventivePage {
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
            vaccine_dates: HashMap::new(),
            histories: HashMap::new(),
            section: PreventiveSection::Profile,
            vaccine_selection: 0,
            indicator_selection: 0,
            mode: PreventiveMode::Browse,
            profile_form: ProfileForm::default(),
            reading_form: ReadingForm::default(),
            dose_form: DoseForm::default(),
        }
    }

    pub fn show(&mut self, store: &mut Store) {
        self.profile = store.load_profile().unwrap_or_default();
        self.vaccine_dates = store.load_vaccine_dates().unwrap_or_default();
        self.histories = INDICATORS
            .iter()
            .map(|ind| {
                let history = store.load_indicator_history(ind.id).unwrap_or_default();
                (ind.id.to_string(), history)
            })
            .collect();
        self.mode = PreventiveMode::Browse;
    }

    pub fn next_section(&mut self) {
        self.section = self.section.next();
    }

    pub fn select_next(&mut self) {
        match self.section {
            PreventiveSection::Vaccines => {
                self.vaccine_selection = (self.vaccine_selection + 1).min(VACCINES.len() - 1);
            }
            PreventiveSection::Indicators => {
                self.indicator_selection =
                    (self.indicator_selection + 1).min(INDICATORS.len() - 1);
            }
            PreventiveSection::Profile => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.section {
            PreventiveSection::Vaccines => {
                self.vaccine_selection = self.vaccine_selection.saturating_sub(1);
            }
            PreventiveSection::Indicators => {
                self.indicator_selection = self.indicator_selection.saturating_sub(1);
            }
            PreventiveSection::Profile => {}
        }
    }

    // ===== Dashboard =====

    /// Latest reading for an indicator. Histories are kept sorted by date,
    /// so the last entry is the newest.
    pub fn latest_reading(&self, indicator_id: &str) -> Option<&IndicatorEntry> {
        self.histories.get(indicator_id)?.last()
    }

    /// Vaccines currently up to date, out of the full schedule.
    pub fn vaccine_coverage(&self, today: NaiveDate) -> (usize, usize) {
        let covered = VACCINES
            .iter()
            .filter(|v| {
                v.status(self.vaccine_dates.get(v.id).copied(), today) == VaccineStatus::UpToDate
            })
            .count();
        (covered, VACCINES.len())
    }

    /// Indicators with a reading taken within the last year, out of all
    /// tracked indicators.
    pub fn reading_coverage(&self, today: NaiveDate) -> (usize, usize) {
        let fresh = INDICATORS
            .iter()
            .filter(|ind| {
                self.latest_reading(ind.id)
                    .is_some_and(|entry| !reading_is_stale(entry.date, today))
            })
            .count();
        (fresh, INDICATORS.len())
    }

    pub fn age_years(&self, today: NaiveDate) -> Option<u32> {
        today.years_since(self.profile.birth_date?)
    }

    // ===== Profile form =====

    pub fn begin_profile(&mut self) {
        self.profile_form = ProfileForm {
            birth_date: self
                .profile
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            sex: self.profile.sex,
            weight: self
                .profile
                .weight_kg
                .map(|w| format!("{w}"))
                .unwrap_or_default(),
            field: ProfileField::BirthDate,
        };
        self.mode = PreventiveMode::ProfileForm;
    }

    pub fn cycle_form_sex(&mut self) {
        self.profile_form.sex = match self.profile_form.sex {
            None => Some(Sex::Male),
            Some(Sex::Male) => Some(Sex::Female),
            Some(Sex::Female) => None,
        };
    }

    /// Commit the profile form. Every field is optional, but what is given
    /// must parse.
    pub fn commit_profile(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let birth = self.profile_form.birth_date.trim();
        let birth_date = if birth.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(birth, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    notices.warning("Enter the birth date as YYYY-MM-DD");
                    return;
                }
            }
        };
        let weight = self.profile_form.weight.trim();
        let weight_kg = if weight.is_empty() {
            None
        } else {
            match weight.parse::<f64>() {
                Ok(w) if w > 0.0 => Some(w),
                _ => {
                    notices.warning("The weight must be a number of kilograms");
                    return;
                }
            }
        };

        self.profile = Profile {
            birth_date,
            sex: self.profile_form.sex,
            weight_kg,
        };
        match store.save_profile(&self.profile) {
            Ok(()) => notices.success("Profile saved"),
            Err(err) => {
                warn!(error = %err, "failed to save the profile");
                notices.error("Could not save the profile");
            }
        }
        self.mode = PreventiveMode::Browse;
    }

    // ===== Vaccine doses =====

    pub fn begin_dose(&mut self) {
        self.dose_form = DoseForm::default();
        self.mode = PreventiveMode::DoseForm;
    }

    pub fn commit_dose(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let vaccine = VACCINES[self.vaccine_selection];
        let Ok(date) = NaiveDate::parse_from_str(self.dose_form.date.trim(), "%Y-%m-%d") else {
            notices.warning("Enter the dose date as YYYY-MM-DD");
            return;
        };

        self.vaccine_dates.insert(vaccine.id.to_string(), date);
        match store.save_vaccine_dates(&self.vaccine_dates) {
            Ok(()) => notices.success(format!("{} updated", vaccine.name)),
            Err(err) => {
                warn!(error = %err, vaccine = vaccine.id, "failed to save vaccine dates");
                notices.error("Could not save vaccines");
            }
        }
        self.mode = PreventiveMode::Browse;
    }

    // ===== Indicator readings =====

    pub fn begin_reading(&mut self) {
        self.reading_form = ReadingForm::default();
        self.mode = PreventiveMode::ReadingForm;
    }

    /// Commit a reading. Both the value and the date are required; the date
    /// is typed rather than assumed, since results arrive late.
    pub fn commit_reading(&mut self, store: &mut Store, notices: &mut NoticeQueue) {
        let indicator = INDICATORS[self.indicator_selection];
        let raw_value = self.reading_form.value.trim();
        let raw_date = self.reading_form.date.trim();
        if raw_value.is_empty() || raw_date.is_empty() {
            notices.warning("Enter both a value and a date");
            return;
        }
        let Ok(value) = raw_value.parse::<f64>() else {
            notices.warning("The value must be a number");
            return;
        };
        let Ok(date) = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") else {
            notices.warning("Enter the date as YYYY-MM-DD");
            return;
        };

        let history = self.histories.entry(indicator.id.to_string()).or_default();
        history.push(IndicatorEntry { value, date });
        history.sort_by_key(|e| e.date);
        match store.save_indicator_history(indicator.id, history) {
            Ok(()) => notices.success(format!("{} updated", indicator.name)),
            Err(err) => {
                warn!(error = %err, indicator = indicator.id, "failed to save readings");
                notices.error("Could not save readings");
            }
        }
        self.mode = PreventiveMode::Browse;
    }

    pub fn cancel(&mut self) {
        self.mode = PreventiveMode::Browse;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> Store {
        let dir = std::env::temp_dir().join(format!(
            "vitalog-preventive-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        Store::new(dir)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    // ----- readings -----

    #[test]
    fn test_reading_requires_value_and_date() {
        let mut store = temp_store("reading-required");
        let mut notices = NoticeQueue::new();
        let mut page = PreventivePage::new();
        page.show(&mut store);
        page.section = PreventiveSection::Indicators;

        page.begin_reading();
        page.reading_form.value = "95".to_string();
        page.commit_reading(&mut store, &mut notices); // no date
        assert_eq!(page.mode, PreventiveMode::ReadingForm);
        assert!(store.load_indicator_history(INDICATORS[0].id).is_none());

        page.reading_form.value.clear();
        page.reading_form.date = "2026-02-01".to_string();
        page.commit_reading(&mut store, &mut notices); // no value
        assert_eq!(page.mode, PreventiveMode::ReadingForm);

        page.reading_form.value = "ninety".to_string();
        page.commit_reading(&mut store, &mut notices); // not a number
        assert_eq!(page.mode, PreventiveMode::ReadingForm);
    }

    #[test]
    fn test_reading_history_stays_sorted_by_date() {
        let mut store = temp_store("reading-sorted");
        let mut notices = NoticeQueue::new();
        let mut page = PreventivePage::new();
        page.show(&mut store);
        page.section = PreventiveSection::Indicators;
        page.indicator_selection = 0;
        let id = INDICATORS[0].id;

        for (value, day) in [("95", "2026-03-01"), ("88", "2025-11-20"), ("92", "2026-01-05")] {
            page.begin_reading();
            page.reading_form.value = value.to_string();
            page.reading_form.date = day.to_string();
            page.commit_reading(&mut store, &mut notices);
        }

        let history = store.load_indicator_history(id).unwrap();
        let dates: Vec<NaiveDate> = history.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2025-11-20"), date("2026-01-05"), date("2026-03-01")]
        );
        assert_eq!(page.latest_reading(id).unwrap().value, 95.0);
    }

    #[test]
    fn test_reading_coverage_counts_fresh_readings() {
        let mut page = PreventivePage::new();
        page.histories.insert(
            "glucose".to_string(),
            vec![IndicatorEntry { value: 92.0, date: date("2026-02-01") }],
        );
        page.histories.insert(
            "hdl".to_string(),
            vec![IndicatorEntry { value: 55.0, date: date("2024-01-01") }],
        );

        let (fresh, total) = page.reading_coverage(date("2026-08-23"));
        assert_eq!(fresh, 1); // the 2024 reading is stale
        assert_eq!(total, INDICATORS.len());
    }

    // ----- vaccines -----

    #[test]
    fn test_dose_updates_status_and_coverage() {
        let mut store = temp_store("dose");
        let mut notices = NoticeQueue::new();
        let mut page = PreventivePage::new();
        page.show(&mut store);
        page.section = PreventiveSection::Vaccines;
        page.vaccine_selection = 0; // tetanus booster

        let today = date("2026-08-23");
        let (covered_before, _) = page.vaccine_coverage(today);

        page.begin_dose();
        page.dose_form.date = "not a date".to_string();
        page.commit_dose(&mut store, &mut notices);
        assert_eq!(page.mode, PreventiveMode::DoseForm);

        page.dose_form.date = "2024-05-10".to_string();
        page.commit_dose(&mut store, &mut notices);
        assert_eq!(page.mode, PreventiveMode::Browse);

        let (covered_after, total) = page.vaccine_coverage(today);
        assert_eq!(covered_after, covered_before + 1);
        assert_eq!(total, VACCINES.len());
        assert_eq!(
            store.load_vaccine_dates().unwrap().get("tetanus"),
            Some(&date("2024-05-10"))
        );
    }

    // ----- profile -----

    #[test]
    fn test_profile_roundtrip_and_age() {
        let mut store = temp_store("profile");
        let mut notices = NoticeQueue::new();
        let mut page = PreventivePage::new();
        page.show(&mut store);

        page.begin_profile();
        page.profile_form.birth_date = "1990-06-15".to_string();
        page.cycle_form_sex(); // Male
        page.profile_form.weight = "80".to_string();
        page.commit_profile(&mut store, &mut notices);

        assert_eq!(page.mode, PreventiveMode::Browse);
        assert_eq!(page.age_years(date("2026-08-23")), Some(36));
        assert_eq!(page.profile.hydration_ml(), Some(2800));

        let saved = store.load_profile().unwrap();
        assert_eq!(saved.sex, Some(Sex::Male));
        assert_eq!(saved.weight_kg, Some(80.0));
    }

    #[test]
    fn test_profile_rejects_bad_weight() {
        let mut store = temp_store("bad-weight");
        let mut notices = NoticeQueue::new();
        let mut page = PreventivePage::new();
        page.show(&mut store);

        page.begin_profile();
        page.profile_form.weight = "heavy".to_string();
        page.commit_profile(&mut store, &mut notices);
        assert_eq!(page.mode, PreventiveMode::ProfileForm);
        assert!(store.load_profile().is_none());
    }
}
