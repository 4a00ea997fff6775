pub struct SettingsFields;

impl SettingsFields {
    pub const CONTRIBUTION_TYPE: &'static str = "contributionType";
    pub const CONTRIBUTION_RATE: &'static str = "contributionRate";
}

/// Upper bound for a percentage rate.
pub const MAX_PERCENTAGE: f64 = 100.0;
