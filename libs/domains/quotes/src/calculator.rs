//! Quote pricing engine
//!
//! Turns [`ProjectRequirements`] into a [`QuoteBreakdown`]. The computation is
//! a pure function of its input: table lookups from [`crate::rates`], a page
//! surcharge, a timeline multiplier and a week estimate.
//!
//! All arithmetic is done on integers. Multipliers are integer percentages, so
//! the only rounding happens where a percentage is applied:
//! - the total price rounds half away from zero (every amount is
//!   non-negative, so `.5` rounds up)
//! - compressed week estimates round up to a whole week

use std::collections::BTreeMap;

use crate::models::{Feature, ProjectRequirements, QuoteBreakdown};
use crate::rates::{PAGES_PER_EXTRA_WEEK, PER_PAGE_SURCHARGE, STANDARD_PAGE_ALLOTMENT};

pub const BASE_LINE_ITEM: &str = "base";
pub const DESIGN_LINE_ITEM: &str = "design";
pub const FEATURES_LINE_ITEM: &str = "features";

/// Compute the price and time estimate for a project
pub fn compute_quote(requirements: &ProjectRequirements) -> QuoteBreakdown {
    let extra_pages = extra_pages(requirements);

    let base_price = requirements.website_type.base_price();

    let design_price = apply_percent(
        base_price,
        requirements.design_complexity.multiplier_percent(),
    ) + u64::from(extra_pages) * PER_PAGE_SURCHARGE;

    let mut breakdown = BTreeMap::new();
    let mut features_price = 0;
    for feature in requirements.features.selected() {
        features_price += feature.price();
        breakdown.insert(feature.to_string(), feature.price());
    }

    breakdown.insert(BASE_LINE_ITEM.to_string(), base_price);
    breakdown.insert(DESIGN_LINE_ITEM.to_string(), design_price);
    breakdown.insert(FEATURES_LINE_ITEM.to_string(), features_price);

    let subtotal = base_price + design_price + features_price;
    let total_price = apply_percent(subtotal, requirements.timeline.multiplier_percent());

    QuoteBreakdown {
        base_price,
        design_price,
        features_price,
        timeline_multiplier: requirements.timeline.multiplier(),
        total_price,
        breakdown,
        estimated_time_in_weeks: estimate_weeks(requirements),
    }
}

/// Weeks of work, compressed by the timeline and rounded up
pub fn estimate_weeks(requirements: &ProjectRequirements) -> u32 {
    let complex_features = requirements
        .features
        .selected()
        .filter(Feature::is_complex)
        .count() as u64;

    let weeks = u64::from(requirements.website_type.base_weeks())
        + u64::from(extra_pages(requirements).div_ceil(PAGES_PER_EXTRA_WEEK))
        + complex_features;

    let compressed = (weeks * u64::from(requirements.timeline.time_percent())).div_ceil(100);

    // compression never grows the estimate, so it fits whenever `weeks` does
    u32::try_from(compressed).unwrap_or(u32::MAX)
}

fn extra_pages(requirements: &ProjectRequirements) -> u32 {
    requirements
        .page_count
        .get()
        .saturating_sub(STANDARD_PAGE_ALLOTMENT)
}

/// `amount * percent / 100`, rounding half up
fn apply_percent(amount: u64, percent: u64) -> u64 {
    (amount * percent + 50) / 100
}
