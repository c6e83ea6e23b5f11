use thiserror::Error;

/// One row of the per-item attributes table. An item may have several rows;
/// they are averaged into an [`AttributeBaseline`] before use.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeProfile {
    pub item_id: String,
    pub unit_cost: f64,
    pub lead_time_days: f64,
    /// Fraction in [0, 1]; the source column is a percentage and is divided
    /// by 100 on load.
    pub yield_fraction: f64,
    pub labor_hours: f64,
}

/// Per-item averages across one or more attribute rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeBaseline {
    pub unit_cost: f64,
    pub lead_time_days: f64,
    pub yield_fraction: f64,
    pub labor_hours: f64,
}

impl AttributeBaseline {
    /// Averages the given profiles column-wise. Returns `None` for an empty
    /// slice; callers treat that as an empty item selection.
    pub fn from_profiles(profiles: &[AttributeProfile]) -> Option<Self> {
        if profiles.is_empty() {
            return None;
        }
        let count = profiles.len() as f64;
        Some(Self {
            unit_cost: profiles.iter().map(|p| p.unit_cost).sum::<f64>() / count,
            lead_time_days: profiles.iter().map(|p| p.lead_time_days).sum::<f64>() / count,
            yield_fraction: profiles.iter().map(|p| p.yield_fraction).sum::<f64>() / count,
            labor_hours: profiles.iter().map(|p| p.labor_hours).sum::<f64>() / count,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AdjustmentError {
    #[error("target {name} must not be negative, got {value}")]
    NegativeTarget { name: &'static str, value: f64 },
    #[error("target yield must be a fraction in [0, 1], got {0}")]
    YieldOutOfRange(f64),
}

/// The four user-chosen targets that replace the baseline averages for the
/// selected item. Validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserAdjustment {
    pub target_lead_time_days: f64,
    pub target_unit_cost: f64,
    pub target_yield_fraction: f64,
    pub target_labor_hours: f64,
}

impl UserAdjustment {
    pub fn new(
        target_lead_time_days: f64,
        target_unit_cost: f64,
        target_yield_fraction: f64,
        target_labor_hours: f64,
    ) -> Result<Self, AdjustmentError> {
        for (name, value) in [
            ("lead time", target_lead_time_days),
            ("unit cost", target_unit_cost),
            ("labor hours", target_labor_hours),
        ] {
            if value < 0.0 {
                return Err(AdjustmentError::NegativeTarget { name, value });
            }
        }
        if !(0.0..=1.0).contains(&target_yield_fraction) {
            return Err(AdjustmentError::YieldOutOfRange(target_yield_fraction));
        }
        Ok(Self {
            target_lead_time_days,
            target_unit_cost,
            target_yield_fraction,
            target_labor_hours,
        })
    }
}

/// Optional per-field targets from the CLI. Unset fields fall back to the
/// baseline average, which makes the adjustment neutral on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdjustmentOverrides {
    pub lead_time_days: Option<f64>,
    pub unit_cost: Option<f64>,
    pub yield_fraction: Option<f64>,
    pub labor_hours: Option<f64>,
}

impl AdjustmentOverrides {
    pub fn resolve(&self, baseline: &AttributeBaseline) -> Result<UserAdjustment, AdjustmentError> {
        UserAdjustment::new(
            self.lead_time_days.unwrap_or(baseline.lead_time_days),
            self.unit_cost.unwrap_or(baseline.unit_cost),
            self.yield_fraction.unwrap_or(baseline.yield_fraction),
            self.labor_hours.unwrap_or(baseline.labor_hours),
        )
    }
}
