//! Declarative form validation rules
//!
//! The form contracts are expressed as composable rules: a rule checks a
//! single value and reports a message on violation, a `FieldValidator`
//! binds rules to a field name and aggregates violations. The page-load
//! pipeline never runs these; they belong to the form screens.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::page::LogFormData;
use crate::types::settings::SettingsForm;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// A rule that checks one value.
///
/// Returns `None` when the value passes, or the violation message.
pub trait ValidationRule<T: ?Sized>: Send + Sync {
    fn check(&self, value: &T) -> Option<String>;
}

/// Rules for one named field.
pub struct FieldValidator<T: ?Sized> {
    field: &'static str,
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T: ?Sized> FieldValidator<T> {
    /// Create a validator for `field` with no rules.
    pub fn new(field: &'static str) -> Self {
        Self { field, rules: Vec::new() }
    }

    /// Add a rule.
    pub fn rule(mut self, rule: impl ValidationRule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Run every rule against `value`, collecting violations.
    pub fn validate(&self, value: &T) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(value))
            .map(|message| Violation { field: self.field.to_string(), message })
            .collect()
    }
}

/* -------------------------------------------------------------------------- */
/* Rules */
/* -------------------------------------------------------------------------- */

/// Value must be at least the bound.
pub struct Min<N>(pub N);

impl<N: PartialOrd + Copy + fmt::Display + Send + Sync> ValidationRule<N> for Min<N> {
    fn check(&self, value: &N) -> Option<String> {
        (*value < self.0).then(|| format!("must be at least {}", self.0))
    }
}

/// Value must be at most the bound.
pub struct Max<N>(pub N);

impl<N: PartialOrd + Copy + fmt::Display + Send + Sync> ValidationRule<N> for Max<N> {
    fn check(&self, value: &N) -> Option<String> {
        (*value > self.0).then(|| format!("must be at most {}", self.0))
    }
}

/// String must not exceed a character count.
pub struct MaxLen(pub usize);

impl ValidationRule<str> for MaxLen {
    fn check(&self, value: &str) -> Option<String> {
        (value.chars().count() > self.0).then(|| format!("must be at most {} characters", self.0))
    }
}

/// String must be exactly a character count.
pub struct ExactLen(pub usize);

impl ValidationRule<str> for ExactLen {
    fn check(&self, value: &str) -> Option<String> {
        (value.chars().count() != self.0).then(|| format!("must be exactly {} characters", self.0))
    }
}

/// String must not be empty.
pub struct NonEmpty;

impl ValidationRule<str> for NonEmpty {
    fn check(&self, value: &str) -> Option<String> {
        value.is_empty().then(|| "must not be empty".to_string())
    }
}

/// Value must be one of an allowed set.
pub struct OneOf<T>(pub Vec<T>);

impl<T: PartialEq + fmt::Debug + Send + Sync> ValidationRule<T> for OneOf<T> {
    fn check(&self, value: &T) -> Option<String> {
        (!self.0.contains(value)).then(|| format!("must be one of {:?}", self.0))
    }
}

/// Date must not be later than the bound.
pub struct NotAfter(pub NaiveDate);

impl ValidationRule<NaiveDate> for NotAfter {
    fn check(&self, value: &NaiveDate) -> Option<String> {
        (*value > self.0).then(|| format!("must not be after {}", self.0))
    }
}

/* -------------------------------------------------------------------------- */
/* Form contracts */
/* -------------------------------------------------------------------------- */

/// Steam import form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamImportForm {
    pub steam_key: String,
    pub steam_id: String,
}

/// Validate the log form against `today`'s calendar date.
///
/// Dates may be at most tomorrow (local calendar day + 1); rating is
/// 0..=5; notes are capped at 1000 characters; time played is
/// non-negative.
pub fn validate_log_form(form: &LogFormData, today: NaiveDate) -> Vec<Violation> {
    let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);

    let rating = FieldValidator::new("rating").rule(Min(0)).rule(Max(5));
    let notes = FieldValidator::new("notes").rule(MaxLen(1000));
    let started_on = FieldValidator::new("started_on").rule(NotAfter(tomorrow));
    let finished_on = FieldValidator::new("finished_on").rule(NotAfter(tomorrow));
    let hours = FieldValidator::new("time_played_hours").rule(Min(0));
    let minutes = FieldValidator::new("time_played_minutes").rule(Min(0));

    let mut violations = rating.validate(&form.rating);
    violations.extend(notes.validate(form.notes.as_str()));
    violations.extend(started_on.validate(&form.started_on));
    violations.extend(finished_on.validate(&form.finished_on));
    violations.extend(hours.validate(&form.time_played_hours));
    violations.extend(minutes.validate(&form.time_played_minutes));
    violations
}

/// Validate the settings form.
pub fn validate_settings_form(form: &SettingsForm) -> Vec<Violation> {
    let username = FieldValidator::new("username").rule(NonEmpty).rule(MaxLen(50));
    let depth = FieldValidator::new("process_monitoring_directory_depth").rule(Max(99u32));

    let mut violations = username.validate(form.username.as_str());
    violations.extend(depth.validate(&form.process_monitoring_directory_depth));
    violations
}

/// Validate the Steam import form.
pub fn validate_steam_import_form(form: &SteamImportForm) -> Vec<Violation> {
    let key = FieldValidator::new("steam_key").rule(ExactLen(32));
    let id = FieldValidator::new("steam_id").rule(NonEmpty);

    let mut violations = key.validate(form.steam_key.as_str());
    violations.extend(id.validate(form.steam_id.as_str()));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::log::LogStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn log_form() -> LogFormData {
        LogFormData {
            rating: 4,
            status: LogStatus::Completed,
            notes: "great".to_string(),
            started_on: date(2024, 2, 1),
            finished_on: date(2024, 3, 10),
            time_played_hours: 12,
            time_played_minutes: 30,
        }
    }

    #[test]
    fn valid_log_form_has_no_violations() {
        assert!(validate_log_form(&log_form(), date(2024, 3, 15)).is_empty());
    }

    #[test]
    fn rating_above_five_is_rejected() {
        let form = LogFormData { rating: 6, ..log_form() };
        let violations = validate_log_form(&form, date(2024, 3, 15));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "rating");
    }

    #[test]
    fn dates_may_be_tomorrow_but_not_later() {
        let today = date(2024, 3, 15);

        let form = LogFormData { finished_on: date(2024, 3, 16), ..log_form() };
        assert!(validate_log_form(&form, today).is_empty());

        let form = LogFormData { finished_on: date(2024, 3, 17), ..log_form() };
        let violations = validate_log_form(&form, today);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "finished_on");
    }

    #[test]
    fn overlong_notes_are_rejected() {
        let form = LogFormData { notes: "x".repeat(1001), ..log_form() };
        let violations = validate_log_form(&form, date(2024, 3, 15));
        assert_eq!(violations[0].field, "notes");
    }

    #[test]
    fn settings_username_bounds() {
        let mut form = SettingsForm {
            username: String::new(),
            executable_paths: Vec::new(),
            process_monitoring_enabled: false,
            process_monitoring_directory_depth: 3,
            autostart: false,
        };
        assert_eq!(validate_settings_form(&form).len(), 1);

        form.username = "a".repeat(51);
        assert_eq!(validate_settings_form(&form).len(), 1);

        form.username = "sam".to_string();
        assert!(validate_settings_form(&form).is_empty());
    }

    #[test]
    fn steam_key_must_be_exactly_32_chars() {
        let form = SteamImportForm {
            steam_key: "a".repeat(32),
            steam_id: "76561198000000000".to_string(),
        };
        assert!(validate_steam_import_form(&form).is_empty());

        let form = SteamImportForm { steam_key: "short".to_string(), ..form };
        let violations = validate_steam_import_form(&form);
        assert_eq!(violations[0].field, "steam_key");
    }

    #[test]
    fn one_of_reports_disallowed_values() {
        let rule = OneOf(vec![1, 2, 3]);
        assert!(rule.check(&2).is_none());
        assert!(rule.check(&9).is_some());
    }
}
