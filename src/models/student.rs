use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,         // ⇔ students.name (NOT NULL, non-empty)
    pub phone: Option<String>,
    pub level: Option<String>,
    pub hourly_rate: f64,     // ⇔ students.hourly_rate (>= 0)
    pub discount: f64,        // ⇔ students.discount (multiplier, default 1.0)
    pub created_at: String,   // ⇔ students.created_at (TEXT, set by SQLite)
}

/// Mutable student fields as entered by the user.
///
/// `hourly_rate` stays optional here so that a missing rate is reported
/// as a validation error rather than silently defaulting.
#[derive(Debug, Clone, Default)]
pub struct StudentInput {
    pub name: String,
    pub phone: Option<String>,
    pub level: Option<String>,
    pub hourly_rate: Option<f64>,
    pub discount: Option<f64>,
}

/// Validated fields, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub phone: Option<String>,
    pub level: Option<String>,
    pub hourly_rate: f64,
    pub discount: f64,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            hourly_rate: Some(hourly_rate),
            ..Default::default()
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Check required fields and numeric ranges.
    pub fn validate(&self) -> AppResult<StudentFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("name", "name must not be empty"));
        }

        let hourly_rate = self
            .hourly_rate
            .ok_or_else(|| AppError::validation("hourly_rate", "hourly rate is required"))?;
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            return Err(AppError::validation(
                "hourly_rate",
                format!("hourly rate must be a non-negative number, got {hourly_rate}"),
            ));
        }

        let discount = self.discount.unwrap_or(1.0);
        if !discount.is_finite() {
            return Err(AppError::validation(
                "discount",
                format!("discount must be a number, got {discount}"),
            ));
        }

        Ok(StudentFields {
            name: name.to_string(),
            phone: non_blank(&self.phone),
            level: non_blank(&self.level),
            hourly_rate,
            discount,
        })
    }
}

impl From<&Student> for StudentInput {
    fn from(s: &Student) -> Self {
        Self {
            name: s.name.clone(),
            phone: s.phone.clone(),
            level: s.level.clone(),
            hourly_rate: Some(s.hourly_rate),
            discount: Some(s.discount),
        }
    }
}

fn non_blank(v: &Option<String>) -> Option<String> {
    v.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a numeric form field, reporting the field name on failure.
pub fn parse_number(field: &'static str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::validation(field, format!("'{raw}' is not a number")))
}
