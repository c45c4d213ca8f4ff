//! Option catalog served to the quote form
//!
//! Lists every selectable option with its display label and the rate card
//! values behind it, plus the form's initial state.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::models::{DesignComplexity, Feature, ProjectRequirements, Timeline, WebsiteType};
use crate::rates::{
    MAX_PAGE_COUNT, MIN_PAGE_COUNT, PAGES_PER_EXTRA_WEEK, PAGE_SLIDER_MAX, PER_PAGE_SURCHARGE,
    STANDARD_PAGE_ALLOTMENT,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct WebsiteTypeOption {
    pub key: WebsiteType,
    pub label: String,
    #[ts(type = "number")]
    pub base_price: u64,
    pub base_weeks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct DesignComplexityOption {
    pub key: DesignComplexity,
    pub label: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct TimelineOption {
    pub key: Timeline,
    pub label: String,
    pub multiplier: f64,
    /// Share of the estimated time kept, e.g. 0.75 for expedited
    pub time_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct FeatureOption {
    pub key: Feature,
    pub label: String,
    #[ts(type = "number")]
    pub price: u64,
    /// Adds a week to the estimate
    pub complex: bool,
}

/// Page count rules of the quote form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct PageRules {
    pub min: u32,
    pub max: u32,
    pub slider_max: u32,
    pub included: u32,
    #[ts(type = "number")]
    pub surcharge_per_page: u64,
    pub pages_per_extra_week: u32,
}

/// Everything the quote form needs to render its choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct QuoteOptions {
    pub website_types: Vec<WebsiteTypeOption>,
    pub design_complexities: Vec<DesignComplexityOption>,
    pub timelines: Vec<TimelineOption>,
    pub features: Vec<FeatureOption>,
    pub pages: PageRules,
    pub defaults: ProjectRequirements,
}

impl QuoteOptions {
    pub fn current() -> Self {
        Self {
            website_types: WebsiteType::iter()
                .map(|key| WebsiteTypeOption {
                    key,
                    label: key.label().to_string(),
                    base_price: key.base_price(),
                    base_weeks: key.base_weeks(),
                })
                .collect(),
            design_complexities: DesignComplexity::iter()
                .map(|key| DesignComplexityOption {
                    key,
                    label: key.label().to_string(),
                    multiplier: key.multiplier(),
                })
                .collect(),
            timelines: Timeline::iter()
                .map(|key| TimelineOption {
                    key,
                    label: key.label().to_string(),
                    multiplier: key.multiplier(),
                    time_factor: key.time_percent() as f64 / 100.0,
                })
                .collect(),
            features: Feature::iter()
                .map(|key| FeatureOption {
                    key,
                    label: key.label().to_string(),
                    price: key.price(),
                    complex: key.is_complex(),
                })
                .collect(),
            pages: PageRules {
                min: MIN_PAGE_COUNT,
                max: MAX_PAGE_COUNT,
                slider_max: PAGE_SLIDER_MAX,
                included: STANDARD_PAGE_ALLOTMENT,
                surcharge_per_page: PER_PAGE_SURCHARGE,
                pages_per_extra_week: PAGES_PER_EXTRA_WEEK,
            },
            defaults: ProjectRequirements::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Features;

    #[test]
    fn test_catalog_lists_every_option_once() {
        let options = QuoteOptions::current();

        assert_eq!(options.website_types.len(), 5);
        assert_eq!(options.design_complexities.len(), 4);
        assert_eq!(options.timelines.len(), 3);
        assert_eq!(options.features.len(), 10);

        let ecommerce = options
            .website_types
            .iter()
            .find(|o| o.key == WebsiteType::Ecommerce)
            .unwrap();
        assert_eq!(ecommerce.label, "E-commerce Website");
        assert_eq!(ecommerce.base_price, 3000);
        assert_eq!(ecommerce.base_weeks, 5);

        let rush = options
            .timelines
            .iter()
            .find(|o| o.key == Timeline::Rush)
            .unwrap();
        assert_eq!(rush.multiplier, 1.5);
        assert_eq!(rush.time_factor, 0.5);
    }

    #[test]
    fn test_catalog_defaults_match_form() {
        let defaults = QuoteOptions::current().defaults;

        assert_eq!(defaults.website_type, WebsiteType::Informational);
        assert_eq!(defaults.design_complexity, DesignComplexity::Standard);
        assert_eq!(defaults.page_count.get(), 5);
        assert_eq!(defaults.timeline, Timeline::Standard);
        assert_eq!(defaults.features, Features::recommended());
        assert_eq!(
            defaults.features.selected().collect::<Vec<_>>(),
            vec![
                Feature::ContactForm,
                Feature::Seo,
                Feature::Analytics,
                Feature::ResponsiveDesign
            ]
        );
    }

    #[test]
    fn test_catalog_serializes_snake_case_keys() {
        let json = serde_json::to_value(QuoteOptions::current()).unwrap();

        assert_eq!(json["features"][6]["key"], "social_media_integration");
        assert_eq!(json["features"][6]["label"], "Social Media Integration");
        assert_eq!(json["pages"]["included"], 5);
        assert_eq!(json["pages"]["max"], 100);
        assert_eq!(json["defaults"]["page_count"], 5);
        assert_eq!(json["defaults"]["features"]["responsive_design"], true);
    }
}
