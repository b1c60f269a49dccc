use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Household items are assumed replaceable this many years after purchase.
pub const REPLACEMENT_YEARS: u32 = 7;

/// A household asset tracked on the finance page for replacement budgeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub purchased: NaiveDate,
}

impl Asset {
    /// Planning date for replacing this asset. Leap-day purchases clamp to
    /// Feb 28.
    pub fn replacement_date(&self) -> NaiveDate {
        self.purchased
            .checked_add_months(Months::new(REPLACEMENT_YEARS * 12))
            .unwrap_or(self.purchased)
    }

    pub fn due_for_replacement(&self, today: NaiveDate) -> bool {
        today >= self.replacement_date()
    }
}

/// Seed list used when the store has no saved assets.
pub fn default_assets() -> Vec<Asset> {
    let seeds: &[(&str, &str, &str)] = &[
        ("asset-1", "Laptop", "2020-01-01"),
        ("asset-2", "Refrigerator", "2018-01-01"),
        ("asset-3", "Bed and mattress", "2019-01-01"),
        ("asset-4", "Sofa", "2021-01-01"),
        ("asset-5", "Stove", "2021-01-01"),
        ("asset-6", "Television", "2022-01-01"),
        ("asset-7", "Washing machine", "2017-01-01"),
        ("asset-8", "Desk", "2021-01-01"),
    ];
    seeds
        .iter()
        .filter_map(|(id, name, date)| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().map(|purchased| Asset {
                id: (*id).to_string(),
                name: (*name).to_string(),
                purchased,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_replacement_date_is_seven_years_out() {
        let asset = Asset {
            id: "a".to_string(),
            name: "Laptop".to_string(),
            purchased: d("2020-03-15"),
        };
        assert_eq!(asset.replacement_date(), d("2027-03-15"));
        assert!(!asset.due_for_replacement(d("2027-03-14")));
        assert!(asset.due_for_replacement(d("2027-03-15")));
    }

    #[test]
    fn test_default_assets_parse() {
        let assets = default_assets();
        assert_eq!(assets.len(), 8);
        assert!(assets.iter().all(|a| a.id.starts_with("asset-")));
    }
}
