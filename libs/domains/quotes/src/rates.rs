//! Rate card for website quotes
//!
//! Prices are abstract currency units. Multipliers are kept as integer
//! percentages so the calculator can stay in exact integer arithmetic.

use crate::models::{DesignComplexity, Feature, Timeline, WebsiteType};

/// Pages included in the design price before the per-page surcharge applies
pub const STANDARD_PAGE_ALLOTMENT: u32 = 5;

/// Surcharge for every page beyond the standard allotment
pub const PER_PAGE_SURCHARGE: u64 = 100;

/// Every started block of this many extra pages adds one week
pub const PAGES_PER_EXTRA_WEEK: u32 = 5;

pub const MIN_PAGE_COUNT: u32 = 1;

/// Upper bound accepted by the quote form. Larger sites are quoted by hand.
pub const MAX_PAGE_COUNT: u32 = 100;

/// Upper end of the page slider on the quote form
pub const PAGE_SLIDER_MAX: u32 = 30;

impl WebsiteType {
    pub fn base_price(&self) -> u64 {
        match self {
            WebsiteType::Informational => 1000,
            WebsiteType::Blog => 1500,
            WebsiteType::Portfolio => 1800,
            WebsiteType::Ecommerce => 3000,
            WebsiteType::Custom => 5000,
        }
    }

    pub fn base_weeks(&self) -> u32 {
        match self {
            WebsiteType::Informational => 2,
            WebsiteType::Blog => 3,
            WebsiteType::Portfolio => 3,
            WebsiteType::Ecommerce => 5,
            WebsiteType::Custom => 8,
        }
    }
}

impl DesignComplexity {
    /// Multiplier on the base price, in percent
    pub fn multiplier_percent(&self) -> u64 {
        match self {
            DesignComplexity::Basic => 80,
            DesignComplexity::Standard => 100,
            DesignComplexity::Premium => 150,
            DesignComplexity::Custom => 200,
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier_percent() as f64 / 100.0
    }
}

impl Feature {
    pub fn price(&self) -> u64 {
        match self {
            Feature::ContactForm => 150,
            Feature::UserAccounts => 800,
            Feature::PaymentProcessing => 1200,
            Feature::ContentManagement => 900,
            Feature::Seo => 500,
            Feature::Analytics => 300,
            Feature::SocialMediaIntegration => 400,
            Feature::ResponsiveDesign => 700,
            Feature::CustomEmailAddresses => 250,
            Feature::Blog => 600,
        }
    }

    /// Complex features each add a week to the estimate
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Feature::UserAccounts | Feature::PaymentProcessing | Feature::ContentManagement
        )
    }
}

impl Timeline {
    /// Multiplier on the subtotal, in percent
    pub fn multiplier_percent(&self) -> u64 {
        match self {
            Timeline::Standard => 100,
            Timeline::Expedited => 125,
            Timeline::Rush => 150,
        }
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier_percent() as f64 / 100.0
    }

    /// Share of the estimated weeks kept after compression, in percent
    pub fn time_percent(&self) -> u32 {
        match self {
            Timeline::Standard => 100,
            Timeline::Expedited => 75,
            Timeline::Rush => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_multipliers_match_percentages() {
        assert_eq!(DesignComplexity::Basic.multiplier(), 0.8);
        assert_eq!(DesignComplexity::Standard.multiplier(), 1.0);
        assert_eq!(DesignComplexity::Premium.multiplier(), 1.5);
        assert_eq!(DesignComplexity::Custom.multiplier(), 2.0);

        assert_eq!(Timeline::Standard.multiplier(), 1.0);
        assert_eq!(Timeline::Expedited.multiplier(), 1.25);
        assert_eq!(Timeline::Rush.multiplier(), 1.5);
    }

    #[test]
    fn test_complex_features() {
        let complex: Vec<Feature> = Feature::iter().filter(Feature::is_complex).collect();
        assert_eq!(
            complex,
            vec![
                Feature::UserAccounts,
                Feature::PaymentProcessing,
                Feature::ContentManagement
            ]
        );
    }

    #[test]
    fn test_feature_prices_total() {
        let total: u64 = Feature::iter().map(|f| f.price()).sum();
        assert_eq!(total, 5800);
    }

    #[test]
    fn test_faster_timelines_cost_more_and_take_less() {
        let timelines: Vec<Timeline> = Timeline::iter().collect();
        for pair in timelines.windows(2) {
            assert!(pair[0].multiplier_percent() < pair[1].multiplier_percent());
            assert!(pair[0].time_percent() > pair[1].time_percent());
        }
    }
}
