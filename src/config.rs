//! Host-facing configuration of a [`DateDropdown`](crate::DateDropdown).
//!
//! Keys are camelCase so the struct can be read straight from the props a
//! UI host already carries (JSON or similar).

use serde::{Deserialize, Serialize};

use crate::{DateField, MonthLabels};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DropdownConfig {
    /// First selectable date, `YYYY-MM-DD`. Defaults to 1900-01-01.
    pub start_date:         Option<String>,
    /// Last selectable date. Defaults to today.
    pub end_date:           Option<String>,
    /// Initially selected date. Nothing is selected when absent.
    pub selected_date:      Option<String>,
    /// Order in which the fields are laid out
    pub field_order:        Vec<DateField>,
    /// List years newest first
    pub reverse_year_order: bool,
    pub short_month_names:  bool,
    pub upper_case_months:  bool,
    /// Labels of the "no selection" entries
    pub default_labels:     DefaultLabels,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            start_date:         None,
            end_date:           None,
            selected_date:      None,
            field_order:        DateField::ALL.to_vec(),
            reverse_year_order: false,
            short_month_names:  false,
            upper_case_months:  false,
            default_labels:     DefaultLabels::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultLabels {
    pub year:  String,
    pub month: String,
    pub day:   String,
}

impl DefaultLabels {
    pub fn get(&self, field: DateField) -> &str {
        match field {
            DateField::Year => &self.year,
            DateField::Month => &self.month,
            DateField::Day => &self.day,
        }
    }
}

impl DropdownConfig {
    pub const fn month_labels(&self) -> MonthLabels {
        MonthLabels {
            short:      self.short_month_names,
            upper_case: self.upper_case_months,
        }
    }

    /// The configured field order with repeats dropped.
    pub fn fields(&self) -> Vec<DateField> {
        let mut fields = Vec::with_capacity(DateField::ALL.len());
        for field in &self.field_order {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DropdownConfig::default();
        assert_eq!(config.field_order, DateField::ALL.to_vec());
        assert!(config.start_date.is_none());
        assert_eq!(config.default_labels.get(DateField::Month), "");
        assert_eq!(config.month_labels(), MonthLabels::default());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "startDate": "2020-06-10",
            "endDate": "2022-03-20",
            "fieldOrder": ["day", "month", "year"],
            "reverseYearOrder": true,
            "shortMonthNames": true,
            "upperCaseMonths": true,
            "defaultLabels": { "year": "Year", "day": "Day" }
        }"#;
        let config: DropdownConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.start_date.as_deref(), Some("2020-06-10"));
        assert_eq!(config.end_date.as_deref(), Some("2022-03-20"));
        assert_eq!(config.selected_date, None);
        assert_eq!(
            config.field_order,
            vec![DateField::Day, DateField::Month, DateField::Year]
        );
        assert!(config.reverse_year_order);
        assert_eq!(
            config.month_labels(),
            MonthLabels {
                short:      true,
                upper_case: true,
            }
        );
        assert_eq!(config.default_labels.get(DateField::Year), "Year");
        assert_eq!(config.default_labels.get(DateField::Month), "");
        assert_eq!(config.default_labels.get(DateField::Day), "Day");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: DropdownConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DropdownConfig::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<DropdownConfig, _> = serde_json::from_str(r#"{"classes": {}}"#);
        assert!(result.is_err());
        let result: Result<DropdownConfig, _> =
            serde_json::from_str(r#"{"fieldOrder": ["week"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fields_drops_repeats() {
        let config = DropdownConfig {
            field_order: vec![DateField::Month, DateField::Year, DateField::Month],
            ..DropdownConfig::default()
        };
        assert_eq!(config.fields(), vec![DateField::Month, DateField::Year]);
    }
}
