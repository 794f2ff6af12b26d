// File: crates/hover-core/src/settings.rs
// Summary: Tooltip settings as stored in widget JSON, with validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, ValidationIssue};
use crate::hover::HoverOptions;

/// Upper bound for `decimals`; f64 carries ~15 significant digits.
pub const MAX_DECIMALS: u8 = 15;
pub const MAX_UNITS_LEN: usize = 32;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipSettings {
    /// Show only the series under the cursor.
    #[serde(alias = "tooltip_individual")]
    pub tooltip_individual: bool,
    /// Show running totals for stacked series.
    #[serde(alias = "tooltip_cumulative")]
    pub tooltip_cumulative: bool,
    pub decimals: Option<u8>,
    pub units: Option<String>,
}

impl TooltipSettings {
    /// Parse and validate settings JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();
        if let Some(d) = self.decimals {
            if d > MAX_DECIMALS {
                issues.push(ValidationIssue {
                    field: "decimals",
                    message: format!("must be at most {MAX_DECIMALS}, got {d}"),
                });
            }
        }
        if let Some(units) = &self.units {
            if units.chars().count() > MAX_UNITS_LEN {
                issues.push(ValidationIssue {
                    field: "units",
                    message: format!("must be at most {MAX_UNITS_LEN} characters"),
                });
            }
            if units.chars().any(char::is_control) {
                issues.push(ValidationIssue {
                    field: "units",
                    message: "must not contain control characters".to_string(),
                });
            }
        }
        if issues.is_empty() {
            Ok(())
        } else {
            for issue in &issues {
                tracing::warn!(field = issue.field, "{}", issue.message);
            }
            Err(Error::Invalid(issues))
        }
    }

    pub fn hover_options(&self) -> HoverOptions {
        HoverOptions { cumulative: self.tooltip_cumulative, individual: self.tooltip_individual }
    }
}
