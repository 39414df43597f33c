use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueStrategy {
    Donations,
    Sponsorships,
    Subscriptions,
}

impl RevenueStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Donations => "donations",
            Self::Sponsorships => "sponsorships",
            Self::Subscriptions => "subscriptions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRequirements {
    pub industry_alignment: String,
    pub minimum_commitment: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "revenue_type", rename_all = "snake_case")]
pub enum RevenuePlan {
    Donations {
        target_amount: f64,
        appeal_message: String,
    },
    Sponsorships {
        target_amount: f64,
        partner_requirements: PartnerRequirements,
    },
    Subscriptions {
        subscription_price: f64,
        billing_frequency: BillingFrequency,
    },
}

impl RevenuePlan {
    pub fn strategy(&self) -> RevenueStrategy {
        match self {
            Self::Donations { .. } => RevenueStrategy::Donations,
            Self::Sponsorships { .. } => RevenueStrategy::Sponsorships,
            Self::Subscriptions { .. } => RevenueStrategy::Subscriptions,
        }
    }
}

fn default_donations_threshold() -> f64 {
    0.8
}

fn default_sponsorships_threshold() -> f64 {
    0.5
}

/// Score cut points for strategy selection. Kept apart from the assessor's tier table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueThresholds {
    #[serde(default = "default_donations_threshold")]
    pub donations: f64,
    #[serde(default = "default_sponsorships_threshold")]
    pub sponsorships: f64,
}

impl Default for RevenueThresholds {
    fn default() -> Self {
        Self {
            donations: default_donations_threshold(),
            sponsorships: default_sponsorships_threshold(),
        }
    }
}

impl RevenueThresholds {
    pub fn select(&self, total_score: f64) -> RevenueStrategy {
        if total_score >= self.donations {
            RevenueStrategy::Donations
        } else if total_score >= self.sponsorships {
            RevenueStrategy::Sponsorships
        } else {
            RevenueStrategy::Subscriptions
        }
    }
}

fn default_donation_multiplier() -> f64 {
    10_000.0
}

fn default_donation_floor() -> f64 {
    1_000.0
}

fn default_appeal_message() -> String {
    "Support our high-impact initiative with a donation!".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationTerms {
    #[serde(default = "default_donation_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_donation_floor")]
    pub floor: f64,
    #[serde(default = "default_appeal_message")]
    pub appeal_message: String,
}

impl Default for DonationTerms {
    fn default() -> Self {
        Self {
            multiplier: default_donation_multiplier(),
            floor: default_donation_floor(),
            appeal_message: default_appeal_message(),
        }
    }
}

fn default_sponsorship_multiplier() -> f64 {
    50_000.0
}

fn default_sponsorship_floor() -> f64 {
    50_000.0
}

fn default_industry_alignment() -> String {
    "social impact".to_string()
}

fn default_minimum_commitment() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipTerms {
    #[serde(default = "default_sponsorship_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_sponsorship_floor")]
    pub floor: f64,
    #[serde(default = "default_industry_alignment")]
    pub industry_alignment: String,
    #[serde(default = "default_minimum_commitment")]
    pub minimum_commitment: u32,
}

impl Default for SponsorshipTerms {
    fn default() -> Self {
        Self {
            multiplier: default_sponsorship_multiplier(),
            floor: default_sponsorship_floor(),
            industry_alignment: default_industry_alignment(),
            minimum_commitment: default_minimum_commitment(),
        }
    }
}

fn default_subscription_multiplier() -> f64 {
    100.0
}

fn default_subscription_floor() -> f64 {
    50.0
}

fn default_billing_frequency() -> BillingFrequency {
    BillingFrequency::Monthly
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionTerms {
    #[serde(default = "default_subscription_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_subscription_floor")]
    pub floor: f64,
    #[serde(default = "default_billing_frequency")]
    pub billing_frequency: BillingFrequency,
}

impl Default for SubscriptionTerms {
    fn default() -> Self {
        Self {
            multiplier: default_subscription_multiplier(),
            floor: default_subscription_floor(),
            billing_frequency: default_billing_frequency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RevenueConfig {
    #[serde(default)]
    pub thresholds: RevenueThresholds,
    #[serde(default)]
    pub donations: DonationTerms,
    #[serde(default)]
    pub sponsorships: SponsorshipTerms,
    #[serde(default)]
    pub subscriptions: SubscriptionTerms,
}
