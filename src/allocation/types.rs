use serde::{Deserialize, Serialize};

use crate::impact::ImpactTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStrategy {
    ImpactExpansion,
    BalancedGrowth,
    SustainabilityFirst,
}

impl AllocationStrategy {
    pub fn for_tier(tier: ImpactTier) -> Self {
        match tier {
            ImpactTier::High => Self::ImpactExpansion,
            ImpactTier::Medium => Self::BalancedGrowth,
            ImpactTier::Low => Self::SustainabilityFirst,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ImpactExpansion => "impact_expansion",
            Self::BalancedGrowth => "balanced_growth",
            Self::SustainabilityFirst => "sustainability_first",
        }
    }
}

/// Output of the allocation model. `plan` is owned by the model and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub strategy: AllocationStrategy,
    #[serde(default)]
    pub plan: serde_json::Value,
}
