/// Scale factors and date shift derived from one (baseline, adjustment)
/// pair. Computed per analysis, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactFactors {
    pub material_multiplier: f64,
    pub labor_multiplier: f64,
    pub date_shift_days: i64,
}

impl ImpactFactors {
    /// Factors that leave the dataset unchanged.
    pub fn neutral() -> Self {
        Self {
            material_multiplier: 1.0,
            labor_multiplier: 1.0,
            date_shift_days: 0,
        }
    }
}
