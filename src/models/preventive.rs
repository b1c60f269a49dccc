//! Reference tables and status math for the preventive-health page:
//! the adult vaccine schedule and the biomarker zone classifications.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// User profile backing the sex-dependent biomarker ranges and the
/// hydration readout on the physical page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl Profile {
    /// Daily water recommendation in ml: 35 ml per kg of body weight.
    pub fn hydration_ml(&self) -> Option<u32> {
        self.weight_kg
            .filter(|w| *w > 0.0)
            .map(|w| (w * 35.0).round() as u32)
    }
}

// ============================================================================
// Vaccines
// ============================================================================

/// How a vaccine's due status is derived from its last recorded dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccineKind {
    /// Repeats every `years`; "due soon" inside the final `window_months`.
    Booster { years: u32, window_months: u32 },
    /// Repeats every year; "due soon" inside the final `window_months`.
    Annual { window_months: u32 },
    /// Fixed multi-dose series; a recorded date means the series is done.
    Series,
    /// One dose for life.
    Single,
    /// Situational; needs medical advice rather than date math.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vaccine {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: VaccineKind,
    pub note: &'static str,
}

pub const VACCINES: &[Vaccine] = &[
    Vaccine {
        id: "tetanus",
        name: "Tetanus and diphtheria (Td/Tdap)",
        kind: VaccineKind::Booster { years: 10, window_months: 3 },
        note: "Booster every 10 years.",
    },
    Vaccine {
        id: "hepatitis-b",
        name: "Hepatitis B",
        kind: VaccineKind::Series,
        note: "Three-dose series; record the final dose.",
    },
    Vaccine {
        id: "influenza",
        name: "Influenza",
        kind: VaccineKind::Annual { window_months: 2 },
        note: "Yearly dose, before winter.",
    },
    Vaccine {
        id: "mmr",
        name: "Measles, mumps, rubella (MMR)",
        kind: VaccineKind::Series,
        note: "Two doses in a lifetime for most adults.",
    },
    Vaccine {
        id: "yellow-fever",
        name: "Yellow fever",
        kind: VaccineKind::Single,
        note: "Single dose for most people.",
    },
    Vaccine {
        id: "hpv",
        name: "HPV",
        kind: VaccineKind::Series,
        note: "Two- or three-dose series.",
    },
    Vaccine {
        id: "pneumococcal",
        name: "Pneumococcal",
        kind: VaccineKind::Check,
        note: "Recommended from 60 or with risk factors.",
    },
    Vaccine {
        id: "varicella",
        name: "Varicella",
        kind: VaccineKind::Series,
        note: "Two doses if never infected.",
    },
    Vaccine {
        id: "hepatitis-a",
        name: "Hepatitis A",
        kind: VaccineKind::Series,
        note: "Two-dose series.",
    },
    Vaccine {
        id: "herpes-zoster",
        name: "Herpes zoster",
        kind: VaccineKind::Check,
        note: "Recommended from 50.",
    },
    Vaccine {
        id: "covid-19",
        name: "COVID-19",
        kind: VaccineKind::Annual { window_months: 2 },
        note: "Boosters may be recommended.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccineStatus {
    UpToDate,
    DueSoon,
    Overdue,
    NotRecorded,
    Consult,
}

impl VaccineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VaccineStatus::UpToDate => "up to date",
            VaccineStatus::DueSoon => "due soon",
            VaccineStatus::Overdue => "overdue",
            VaccineStatus::NotRecorded => "not recorded",
            VaccineStatus::Consult => "ask your doctor",
        }
    }
}

impl Vaccine {
    /// Next due date, where the schedule defines one.
    pub fn due_date(&self, last_dose: Option<NaiveDate>) -> Option<NaiveDate> {
        let last = last_dose?;
        match self.kind {
            VaccineKind::Booster { years, .. } => last.checked_add_months(Months::new(years * 12)),
            VaccineKind::Annual { .. } => last.checked_add_months(Months::new(12)),
            _ => None,
        }
    }

    pub fn status(&self, last_dose: Option<NaiveDate>, today: NaiveDate) -> VaccineStatus {
        if matches!(self.kind, VaccineKind::Check) {
            return VaccineStatus::Consult;
        }
        let Some(last) = last_dose else {
            return VaccineStatus::NotRecorded;
        };
        let window_months = match self.kind {
            VaccineKind::Booster { window_months, .. } => window_months,
            VaccineKind::Annual { window_months } => window_months,
            // Series and single doses do not expire
            VaccineKind::Series | VaccineKind::Single => return VaccineStatus::UpToDate,
            VaccineKind::Check => unreachable!(),
        };
        let Some(due) = self.due_date(Some(last)) else {
            return VaccineStatus::UpToDate;
        };
        if today > due {
            VaccineStatus::Overdue
        } else if due
            .checked_sub_months(Months::new(window_months))
            .map(|edge| today >= edge)
            .unwrap_or(false)
        {
            VaccineStatus::DueSoon
        } else {
            VaccineStatus::UpToDate
        }
    }
}

// ============================================================================
// Biomarkers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneStatus {
    Optimal,
    Normal,
    Attention,
    Alert,
}

impl ZoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneStatus::Optimal => "optimal",
            ZoneStatus::Normal => "normal",
            ZoneStatus::Attention => "attention",
            ZoneStatus::Alert => "alert",
        }
    }
}

/// A reading falls in the first zone whose upper bound it does not exceed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub to: f64,
    pub status: ZoneStatus,
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub id: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
}

pub const INDICATORS: &[Indicator] = &[
    Indicator { id: "glucose", name: "Fasting glucose", unit: "mg/dL" },
    Indicator { id: "hdl", name: "HDL cholesterol", unit: "mg/dL" },
    Indicator { id: "ldl", name: "LDL cholesterol", unit: "mg/dL" },
    Indicator { id: "total-cholesterol", name: "Total cholesterol", unit: "mg/dL" },
    Indicator { id: "triglycerides", name: "Triglycerides", unit: "mg/dL" },
    Indicator { id: "vitamin-d", name: "Vitamin D", unit: "ng/mL" },
    Indicator { id: "tsh", name: "TSH", unit: "uIU/mL" },
    Indicator { id: "creatinine", name: "Creatinine", unit: "mg/dL" },
    Indicator { id: "uric-acid", name: "Uric acid", unit: "mg/dL" },
    Indicator { id: "crp", name: "High-sensitivity CRP", unit: "mg/L" },
    Indicator { id: "ferritin", name: "Ferritin", unit: "ng/mL" },
    Indicator { id: "b12", name: "Vitamin B12", unit: "pg/mL" },
];

impl Indicator {
    /// Reference zones, low to high. HDL cutoffs depend on sex; an unset sex
    /// uses the female cutoff.
    pub fn zones(&self, sex: Option<Sex>) -> Vec<Zone> {
        let male = matches!(sex, Some(Sex::Male));
        match self.id {
            "glucose" => vec![
                Zone { to: 69.0, status: ZoneStatus::Attention, tip: "Possible hypoglycemia." },
                Zone { to: 99.0, status: ZoneStatus::Normal, tip: "Good value." },
                Zone { to: 125.0, status: ZoneStatus::Attention, tip: "Prediabetes range." },
                Zone { to: 150.0, status: ZoneStatus::Alert, tip: "Suggestive of diabetes." },
            ],
            "hdl" => vec![
                Zone {
                    to: if male { 39.0 } else { 49.0 },
                    status: ZoneStatus::Alert,
                    tip: "Low level.",
                },
                Zone { to: 59.0, status: ZoneStatus::Normal, tip: "Acceptable level." },
                Zone { to: 100.0, status: ZoneStatus::Optimal, tip: "Protective level." },
            ],
            "ldl" => vec![
                Zone { to: 99.0, status: ZoneStatus::Optimal, tip: "Ideal." },
                Zone { to: 129.0, status: ZoneStatus::Normal, tip: "Near optimal." },
                Zone { to: 159.0, status: ZoneStatus::Attention, tip: "Borderline." },
                Zone { to: 200.0, status: ZoneStatus::Alert, tip: "High level." },
            ],
            "total-cholesterol" => vec![
                Zone { to: 199.0, status: ZoneStatus::Optimal, tip: "Desirable." },
                Zone { to: 239.0, status: ZoneStatus::Attention, tip: "Borderline." },
                Zone { to: 300.0, status: ZoneStatus::Alert, tip: "High." },
            ],
            "triglycerides" => vec![
                Zone { to: 149.0, status: ZoneStatus::Optimal, tip: "Desirable." },
                Zone { to: 199.0, status: ZoneStatus::Attention, tip: "Borderline." },
                Zone { to: 499.0, status: ZoneStatus::Alert, tip: "High." },
                Zone { to: 500.0, status: ZoneStatus::Alert, tip: "Very high." },
            ],
            "vitamin-d" => vec![
                Zone { to: 19.0, status: ZoneStatus::Alert, tip: "Deficiency." },
                Zone { to: 29.0, status: ZoneStatus::Attention, tip: "Insufficiency." },
                Zone { to: 60.0, status: ZoneStatus::Optimal, tip: "Adequate." },
                Zone { to: 100.0, status: ZoneStatus::Attention, tip: "Elevated." },
            ],
            "tsh" => vec![
                Zone { to: 0.39, status: ZoneStatus::Attention, tip: "Suggestive of hyperthyroidism." },
                Zone { to: 4.0, status: ZoneStatus::Normal, tip: "Normal." },
                Zone { to: 10.0, status: ZoneStatus::Attention, tip: "Suggestive of hypothyroidism." },
            ],
            "creatinine" => vec![
                Zone { to: 0.59, status: ZoneStatus::Attention, tip: "Low." },
                Zone { to: 1.2, status: ZoneStatus::Normal, tip: "Normal." },
                Zone { to: 1.5, status: ZoneStatus::Attention, tip: "Elevated." },
            ],
            "uric-acid" => vec![
                Zone { to: 2.4, status: ZoneStatus::Attention, tip: "Low." },
                Zone { to: 6.0, status: ZoneStatus::Normal, tip: "Normal." },
                Zone { to: 10.0, status: ZoneStatus::Alert, tip: "Elevated." },
            ],
            "crp" => vec![
                Zone { to: 0.9, status: ZoneStatus::Normal, tip: "Low risk." },
                Zone { to: 2.9, status: ZoneStatus::Attention, tip: "Medium risk." },
                Zone { to: 10.0, status: ZoneStatus::Alert, tip: "High risk." },
            ],
            "ferritin" => vec![
                Zone { to: 49.0, status: ZoneStatus::Attention, tip: "Low." },
                Zone { to: 150.0, status: ZoneStatus::Normal, tip: "Adequate." },
                Zone { to: 400.0, status: ZoneStatus::Attention, tip: "Elevated." },
            ],
            "b12" => vec![
                Zone { to: 399.0, status: ZoneStatus::Attention, tip: "Low." },
                Zone { to: 900.0, status: ZoneStatus::Normal, tip: "Adequate." },
                Zone { to: 1000.0, status: ZoneStatus::Attention, tip: "Elevated." },
            ],
            _ => Vec::new(),
        }
    }

    /// Classify a reading: first zone whose `to` the value does not exceed,
    /// falling back to the last zone for out-of-range highs.
    pub fn classify(&self, value: f64, sex: Option<Sex>) -> Option<Zone> {
        let zones = self.zones(sex);
        zones
            .iter()
            .find(|z| value <= z.to)
            .or_else(|| zones.last())
            .copied()
    }
}

/// One recorded reading for an indicator. Histories are kept sorted by date;
/// the latest entry drives the displayed status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEntry {
    pub value: f64,
    pub date: NaiveDate,
}

/// A reading older than a year should be refreshed.
pub fn reading_is_stale(entry_date: NaiveDate, today: NaiveDate) -> bool {
    entry_date
        .checked_add_months(Months::new(12))
        .map(|edge| today > edge)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn vaccine(id: &str) -> &'static Vaccine {
        VACCINES.iter().find(|v| v.id == id).unwrap()
    }

    // -------------------------------------------------------------------------
    // Vaccine status
    // -------------------------------------------------------------------------

    #[test]
    fn test_booster_status_windows() {
        let tetanus = vaccine("tetanus");
        let last = d("2016-06-01");
        // Due 2026-06-01; window opens 2026-03-01
        assert_eq!(tetanus.status(Some(last), d("2025-01-01")), VaccineStatus::UpToDate);
        assert_eq!(tetanus.status(Some(last), d("2026-03-01")), VaccineStatus::DueSoon);
        assert_eq!(tetanus.status(Some(last), d("2026-06-01")), VaccineStatus::DueSoon);
        assert_eq!(tetanus.status(Some(last), d("2026-06-02")), VaccineStatus::Overdue);
        assert_eq!(tetanus.status(None, d("2026-01-01")), VaccineStatus::NotRecorded);
    }

    #[test]
    fn test_annual_status() {
        let flu = vaccine("influenza");
        let last = d("2025-05-10");
        assert_eq!(flu.status(Some(last), d("2025-12-01")), VaccineStatus::UpToDate);
        assert_eq!(flu.status(Some(last), d("2026-04-01")), VaccineStatus::DueSoon);
        assert_eq!(flu.status(Some(last), d("2026-07-01")), VaccineStatus::Overdue);
    }

    #[test]
    fn test_series_and_check_status() {
        let hep = vaccine("hepatitis-b");
        assert_eq!(hep.status(Some(d("2010-01-01")), d("2026-01-01")), VaccineStatus::UpToDate);
        assert_eq!(hep.status(None, d("2026-01-01")), VaccineStatus::NotRecorded);

        let zoster = vaccine("herpes-zoster");
        assert_eq!(zoster.status(Some(d("2024-01-01")), d("2026-01-01")), VaccineStatus::Consult);
        assert_eq!(zoster.status(None, d("2026-01-01")), VaccineStatus::Consult);
    }

    // -------------------------------------------------------------------------
    // Biomarker zones
    // -------------------------------------------------------------------------

    #[test]
    fn test_glucose_zones() {
        let glucose = INDICATORS.iter().find(|i| i.id == "glucose").unwrap();
        assert_eq!(glucose.classify(60.0, None).unwrap().status, ZoneStatus::Attention);
        assert_eq!(glucose.classify(90.0, None).unwrap().status, ZoneStatus::Normal);
        assert_eq!(glucose.classify(110.0, None).unwrap().status, ZoneStatus::Attention);
        assert_eq!(glucose.classify(140.0, None).unwrap().status, ZoneStatus::Alert);
        // Beyond the last bound still lands in the last zone
        assert_eq!(glucose.classify(400.0, None).unwrap().status, ZoneStatus::Alert);
    }

    #[test]
    fn test_hdl_cutoff_depends_on_sex() {
        let hdl = INDICATORS.iter().find(|i| i.id == "hdl").unwrap();
        // 45 mg/dL is acceptable for men, low for women
        assert_eq!(hdl.classify(45.0, Some(Sex::Male)).unwrap().status, ZoneStatus::Normal);
        assert_eq!(hdl.classify(45.0, Some(Sex::Female)).unwrap().status, ZoneStatus::Alert);
        assert_eq!(hdl.classify(45.0, None).unwrap().status, ZoneStatus::Alert);
        assert_eq!(hdl.classify(70.0, Some(Sex::Male)).unwrap().status, ZoneStatus::Optimal);
    }

    #[test]
    fn test_reading_staleness() {
        assert!(!reading_is_stale(d("2026-01-01"), d("2026-08-23")));
        assert!(reading_is_stale(d("2025-01-01"), d("2026-08-23")));
    }

    #[test]
    fn test_hydration_recommendation() {
        let profile = Profile { weight_kg: Some(70.0), ..Default::default() };
        assert_eq!(profile.hydration_ml(), Some(2450));
        assert_eq!(Profile::default().hydration_ml(), None);
        let bad = Profile { weight_kg: Some(0.0), ..Default::default() };
        assert_eq!(bad.hydration_ml(), None);
    }
}
