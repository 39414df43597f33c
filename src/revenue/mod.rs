pub mod selector;
pub mod strategies;
pub mod types;

pub use selector::RevenueSelector;
pub use strategies::{donation_plan, sponsorship_plan, subscription_plan};
pub use types::{
    BillingFrequency, DonationTerms, PartnerRequirements, RevenueConfig, RevenuePlan,
    RevenueStrategy, RevenueThresholds, SponsorshipTerms, SubscriptionTerms,
};
