/// Domain entities for the job board
///
/// `RawJob` mirrors a row of the remote sheet: every field is optional and
/// loosely typed. `Job` is the normalized record the rest of the application
/// works with. Normalization never fails; missing or malformed fields map to
/// documented defaults.
use serde::{Deserialize, Serialize};

/// Placeholder title for rows without one
pub const DEFAULT_TITLE: &str = "Untitled";

/// Placeholder category for rows without one
pub const DEFAULT_CATEGORY: &str = "-";

/// A sheet cell that may arrive as either a string or a number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Text(String),
    Number(f64),
}

impl RawScalar {
    /// String form of the cell; integral numbers drop the fraction
    pub fn as_text(&self) -> String {
        match self {
            RawScalar::Text(s) => s.trim().to_string(),
            RawScalar::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }

    /// Monetary interpretation of the cell: a non-negative integer.
    /// Anything unparseable is 0, never NaN and never absent.
    pub fn as_pay(&self) -> u64 {
        match self {
            RawScalar::Number(n) => {
                if n.is_finite() && *n > 0.0 {
                    n.trunc() as u64
                } else {
                    0
                }
            }
            RawScalar::Text(s) => {
                let trimmed = s.trim();
                if let Ok(v) = trimmed.parse::<i64>() {
                    v.max(0) as u64
                } else if let Ok(v) = trimmed.parse::<f64>() {
                    if v.is_finite() && v > 0.0 {
                        v.trunc() as u64
                    } else {
                        0
                    }
                } else {
                    0
                }
            }
        }
    }
}

/// Raw job row as served by the remote data source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub id: Option<RawScalar>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub pay: Option<RawScalar>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub verified: Option<String>,
    #[serde(default)]
    pub syarat: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl RawJob {
    /// A row is active iff its status equals "on", case-insensitively.
    /// Absence is inactive. Checked once at ingestion, never at render time.
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case("on"))
            .unwrap_or(false)
    }

    /// Normalizes the row into a `Job`. Infallible by contract.
    pub fn normalize(self) -> Job {
        Job {
            id: self.id.map(|v| v.as_text()).unwrap_or_default(),
            title: text_or(self.title, DEFAULT_TITLE),
            pay: self.pay.map(|v| v.as_pay()).unwrap_or(0),
            category: text_or(self.category, DEFAULT_CATEGORY),
            verified: self
                .verified
                .as_deref()
                .map(|s| s.trim().eq_ignore_ascii_case("yes"))
                .unwrap_or(false),
            syarat: self.syarat.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
        }
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => default.to_string(),
    }
}

/// Normalized job record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier, stable key for the detail view
    pub id: String,
    pub title: String,
    /// Non-negative amount; 0 when the source value was missing or invalid
    pub pay: u64,
    pub category: String,
    /// Trust badge shown at render time
    pub verified: bool,
    /// Requirements, free-form display text
    pub syarat: String,
    pub description: String,
    pub link: String,
}

/// Builds the canonical set from raw rows: inactive rows are dropped here,
/// before normalization, and never reach any rendered or cached state.
pub fn ingest(rows: Vec<RawJob>) -> Vec<Job> {
    rows.into_iter()
        .filter(RawJob::is_active)
        .map(RawJob::normalize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_row() -> RawJob {
        RawJob {
            status: Some("on".to_string()),
            ..RawJob::default()
        }
    }

    #[test]
    fn test_missing_pay_normalizes_to_zero() {
        let job = active_row().normalize();
        assert_eq!(job.pay, 0);
    }

    #[test]
    fn test_pay_parses_string_and_number() {
        let mut row = active_row();
        row.pay = Some(RawScalar::Text("3000".to_string()));
        assert_eq!(row.clone().normalize().pay, 3000);

        row.pay = Some(RawScalar::Number(2500.0));
        assert_eq!(row.clone().normalize().pay, 2500);

        row.pay = Some(RawScalar::Text("  750000 ".to_string()));
        assert_eq!(row.normalize().pay, 750000);
    }

    #[test]
    fn test_unparseable_pay_is_zero() {
        for garbage in ["banyak", "", "Rp 5000?", "NaN"] {
            let mut row = active_row();
            row.pay = Some(RawScalar::Text(garbage.to_string()));
            assert_eq!(row.normalize().pay, 0, "pay {:?} should be 0", garbage);
        }
    }

    #[test]
    fn test_negative_pay_clamps_to_zero() {
        let mut row = active_row();
        row.pay = Some(RawScalar::Text("-100".to_string()));
        assert_eq!(row.clone().normalize().pay, 0);

        row.pay = Some(RawScalar::Number(-42.0));
        assert_eq!(row.normalize().pay, 0);
    }

    #[test]
    fn test_is_active_is_case_insensitive() {
        for value in ["on", "ON", "On", " on "] {
            let mut row = RawJob::default();
            row.status = Some(value.to_string());
            assert!(row.is_active(), "status {:?} should be active", value);
        }

        for value in ["off", "ONN", "", "paused"] {
            let mut row = RawJob::default();
            row.status = Some(value.to_string());
            assert!(!row.is_active(), "status {:?} should be inactive", value);
        }

        assert!(!RawJob::default().is_active(), "missing status is inactive");
    }

    #[test]
    fn test_verified_is_case_insensitive() {
        let mut row = active_row();
        row.verified = Some("YES".to_string());
        assert!(row.clone().normalize().verified);

        row.verified = Some("no".to_string());
        assert!(!row.clone().normalize().verified);

        row.verified = None;
        assert!(!row.normalize().verified);
    }

    #[test]
    fn test_missing_display_fields_use_defaults() {
        let job = active_row().normalize();
        assert_eq!(job.title, DEFAULT_TITLE);
        assert_eq!(job.category, DEFAULT_CATEGORY);
        assert_eq!(job.syarat, "");
        assert_eq!(job.description, "");
        assert_eq!(job.link, "");
        assert_eq!(job.id, "");
    }

    #[test]
    fn test_numeric_id_becomes_text() {
        let mut row = active_row();
        row.id = Some(RawScalar::Number(17.0));
        assert_eq!(row.normalize().id, "17");
    }

    #[test]
    fn test_ingest_drops_inactive_rows() {
        let rows = vec![
            RawJob {
                status: Some("ON".to_string()),
                pay: Some(RawScalar::Text("3000".to_string())),
                ..RawJob::default()
            },
            RawJob {
                status: Some("off".to_string()),
                pay: Some(RawScalar::Text("5000".to_string())),
                ..RawJob::default()
            },
        ];

        let canonical = ingest(rows);
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical[0].pay, 3000);
    }

    #[test]
    fn test_raw_row_deserializes_mixed_types() {
        let json = r#"{"id": 3, "title": "KYC Officer", "pay": "3000", "status": "on"}"#;
        let row: RawJob = serde_json::from_str(json).unwrap();
        let job = row.normalize();

        assert_eq!(job.id, "3");
        assert_eq!(job.title, "KYC Officer");
        assert_eq!(job.pay, 3000);
    }
}
