use crate::{
    error::{PipelineError, computation_error},
    revenue::types::{
        DonationTerms, PartnerRequirements, RevenuePlan, SponsorshipTerms, SubscriptionTerms,
    },
};

pub fn donation_plan(
    total_score: f64,
    terms: &DonationTerms,
) -> Result<RevenuePlan, PipelineError> {
    Ok(RevenuePlan::Donations {
        target_amount: floored(
            "donation target_amount",
            total_score * terms.multiplier,
            terms.floor,
        )?,
        appeal_message: terms.appeal_message.clone(),
    })
}

pub fn sponsorship_plan(
    total_score: f64,
    terms: &SponsorshipTerms,
) -> Result<RevenuePlan, PipelineError> {
    Ok(RevenuePlan::Sponsorships {
        target_amount: floored(
            "sponsorship target_amount",
            total_score * terms.multiplier,
            terms.floor,
        )?,
        partner_requirements: PartnerRequirements {
            industry_alignment: terms.industry_alignment.clone(),
            minimum_commitment: terms.minimum_commitment,
        },
    })
}

pub fn subscription_plan(
    total_score: f64,
    terms: &SubscriptionTerms,
) -> Result<RevenuePlan, PipelineError> {
    Ok(RevenuePlan::Subscriptions {
        subscription_price: floored(
            "subscription_price",
            total_score * terms.multiplier,
            terms.floor,
        )?,
        billing_frequency: terms.billing_frequency,
    })
}

fn floored(term: &str, amount: f64, floor: f64) -> Result<f64, PipelineError> {
    let floored = amount.max(floor);
    if !floored.is_finite() {
        return Err(computation_error(format!(
            "{term} is not a finite amount (score product {amount}, floor {floor})"
        )));
    }
    Ok(floored)
}
