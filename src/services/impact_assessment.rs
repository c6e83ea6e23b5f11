use thiserror::Error;

use crate::domain::attributes::{AttributeBaseline, UserAdjustment};
use crate::domain::impacts::ImpactFactors;

#[derive(Error, Debug, PartialEq)]
pub enum ImpactAssessmentError {
    #[error("baseline unit cost is zero, cost impact is undefined")]
    ZeroBaselineUnitCost,
    #[error("baseline labor hours are zero, labor impact is undefined")]
    ZeroBaselineLaborHours,
}

/// Derives the impact factors for one item from its averaged baseline and
/// the user's targets.
///
/// The lead-time delta becomes a whole-day date shift. Cost and hours deltas
/// become relative multipliers, and a yield improvement is subtracted from
/// both (higher yield means less scrap, so material and labor cost drop).
pub fn assess_impacts(
    baseline: &AttributeBaseline,
    adjustment: &UserAdjustment,
) -> Result<ImpactFactors, ImpactAssessmentError> {
    if baseline.unit_cost == 0.0 {
        return Err(ImpactAssessmentError::ZeroBaselineUnitCost);
    }
    if baseline.labor_hours == 0.0 {
        return Err(ImpactAssessmentError::ZeroBaselineLaborHours);
    }

    let lead_time_delta = adjustment.target_lead_time_days - baseline.lead_time_days;
    let cost_delta = (adjustment.target_unit_cost - baseline.unit_cost) / baseline.unit_cost;
    let yield_delta = adjustment.target_yield_fraction - baseline.yield_fraction;
    let hours_delta = (adjustment.target_labor_hours - baseline.labor_hours) / baseline.labor_hours;

    Ok(ImpactFactors {
        material_multiplier: 1.0 + cost_delta - yield_delta,
        labor_multiplier: 1.0 + hours_delta - yield_delta,
        date_shift_days: lead_time_delta.round() as i64,
    })
}
