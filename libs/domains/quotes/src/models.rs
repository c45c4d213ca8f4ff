use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{QuoteError, QuoteResult};
use crate::rates::{MIN_PAGE_COUNT, STANDARD_PAGE_ALLOTMENT};

/// Kind of website being quoted
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WebsiteType {
    #[default]
    Informational,
    Ecommerce,
    Blog,
    Portfolio,
    Custom,
}

impl WebsiteType {
    pub fn label(&self) -> &'static str {
        match self {
            WebsiteType::Informational => "Informational Website",
            WebsiteType::Ecommerce => "E-commerce Website",
            WebsiteType::Blog => "Blog Website",
            WebsiteType::Portfolio => "Portfolio Website",
            WebsiteType::Custom => "Custom Website",
        }
    }
}

/// Level of visual design work
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DesignComplexity {
    Basic,
    #[default]
    Standard,
    Premium,
    Custom,
}

impl DesignComplexity {
    pub fn label(&self) -> &'static str {
        match self {
            DesignComplexity::Basic => "Basic Design",
            DesignComplexity::Standard => "Standard Design",
            DesignComplexity::Premium => "Premium Design",
            DesignComplexity::Custom => "Custom Design",
        }
    }
}

/// Delivery timeline
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Timeline {
    #[default]
    Standard,
    Expedited,
    Rush,
}

impl Timeline {
    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Standard => "Standard Timeline",
            Timeline::Expedited => "Expedited Timeline (+25%)",
            Timeline::Rush => "Rush Timeline (+50%)",
        }
    }
}

/// Optional feature that can be added to a project
///
/// The string form of each variant is also the field name on [`Features`]
/// and the key used in [`QuoteBreakdown::breakdown`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    ContactForm,
    UserAccounts,
    PaymentProcessing,
    ContentManagement,
    Seo,
    Analytics,
    SocialMediaIntegration,
    ResponsiveDesign,
    CustomEmailAddresses,
    Blog,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Feature::ContactForm => "Contact Form",
            Feature::UserAccounts => "User Accounts",
            Feature::PaymentProcessing => "Payment Processing",
            Feature::ContentManagement => "Content Management System",
            Feature::Seo => "Search Engine Optimization",
            Feature::Analytics => "Analytics Integration",
            Feature::SocialMediaIntegration => "Social Media Integration",
            Feature::ResponsiveDesign => "Responsive Design",
            Feature::CustomEmailAddresses => "Custom Email Addresses",
            Feature::Blog => "Blog Functionality",
        }
    }
}

/// Feature checkboxes
///
/// `Default` is the empty selection. A submission that leaves flags out gets
/// [`Features::omitted`] instead, where only `responsive_design` is on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema, TS,
)]
#[ts(export)]
#[serde(default = "Features::omitted")]
pub struct Features {
    pub contact_form: bool,
    pub user_accounts: bool,
    pub payment_processing: bool,
    pub content_management: bool,
    pub seo: bool,
    pub analytics: bool,
    pub social_media_integration: bool,
    pub responsive_design: bool,
    pub custom_email_addresses: bool,
    pub blog: bool,
}

impl Features {
    /// Flags assumed for anything a submission leaves out
    pub fn omitted() -> Self {
        Self::default().with(Feature::ResponsiveDesign)
    }

    /// Preselection shown when the quote form first opens
    pub fn recommended() -> Self {
        Self::default()
            .with(Feature::ContactForm)
            .with(Feature::Seo)
            .with(Feature::Analytics)
            .with(Feature::ResponsiveDesign)
    }

    pub fn is_selected(&self, feature: Feature) -> bool {
        match feature {
            Feature::ContactForm => self.contact_form,
            Feature::UserAccounts => self.user_accounts,
            Feature::PaymentProcessing => self.payment_processing,
            Feature::ContentManagement => self.content_management,
            Feature::Seo => self.seo,
            Feature::Analytics => self.analytics,
            Feature::SocialMediaIntegration => self.social_media_integration,
            Feature::ResponsiveDesign => self.responsive_design,
            Feature::CustomEmailAddresses => self.custom_email_addresses,
            Feature::Blog => self.blog,
        }
    }

    pub fn set(&mut self, feature: Feature, selected: bool) {
        let flag = match feature {
            Feature::ContactForm => &mut self.contact_form,
            Feature::UserAccounts => &mut self.user_accounts,
            Feature::PaymentProcessing => &mut self.payment_processing,
            Feature::ContentManagement => &mut self.content_management,
            Feature::Seo => &mut self.seo,
            Feature::Analytics => &mut self.analytics,
            Feature::SocialMediaIntegration => &mut self.social_media_integration,
            Feature::ResponsiveDesign => &mut self.responsive_design,
            Feature::CustomEmailAddresses => &mut self.custom_email_addresses,
            Feature::Blog => &mut self.blog,
        };
        *flag = selected;
    }

    /// Returns a copy with `feature` selected
    pub fn with(mut self, feature: Feature) -> Self {
        self.set(feature, true);
        self
    }

    /// Selected features in declaration order
    pub fn selected(self) -> impl Iterator<Item = Feature> {
        Feature::iter().filter(move |feature| self.is_selected(*feature))
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Features::default(), |features, feature| features.with(feature))
    }
}

/// Validated project choices consumed by the pricing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct ProjectRequirements {
    pub website_type: WebsiteType,
    pub design_complexity: DesignComplexity,
    /// Number of pages, at least one
    #[schema(value_type = u32, minimum = 1)]
    #[ts(type = "number")]
    pub page_count: NonZeroU32,
    #[serde(default = "Features::omitted")]
    pub features: Features,
    pub timeline: Timeline,
}

impl ProjectRequirements {
    /// Build requirements from a raw page count, rejecting zero
    pub fn new(
        website_type: WebsiteType,
        design_complexity: DesignComplexity,
        page_count: u32,
        features: Features,
        timeline: Timeline,
    ) -> QuoteResult<Self> {
        let page_count = NonZeroU32::new(page_count).ok_or_else(|| {
            QuoteError::InvalidInput(format!(
                "page_count must be at least {}, got {}",
                MIN_PAGE_COUNT, page_count
            ))
        })?;

        Ok(Self {
            website_type,
            design_complexity,
            page_count,
            features,
            timeline,
        })
    }
}

impl Default for ProjectRequirements {
    /// The quote form's initial state
    fn default() -> Self {
        Self {
            website_type: WebsiteType::default(),
            design_complexity: DesignComplexity::default(),
            page_count: NonZeroU32::new(STANDARD_PAGE_ALLOTMENT).unwrap_or(NonZeroU32::MIN),
            features: Features::recommended(),
            timeline: Timeline::default(),
        }
    }
}

/// Contact fields carried alongside a quote for presentation only
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Quote form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct QuoteRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub website_type: WebsiteType,
    pub design_complexity: DesignComplexity,
    #[validate(range(
        min = 1,
        max = 100,
        message = "Page count must be between 1 and 100; contact us directly for larger sites"
    ))]
    pub page_count: u32,
    #[serde(default = "Features::omitted")]
    pub features: Features,
    pub timeline: Timeline,
    /// Free-text notes about the project
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl QuoteRequest {
    /// Extract the engine input. Fails on a zero page count even when
    /// validation was skipped.
    pub fn requirements(&self) -> QuoteResult<ProjectRequirements> {
        ProjectRequirements::new(
            self.website_type,
            self.design_complexity,
            self.page_count,
            self.features,
            self.timeline,
        )
    }

    pub fn contact(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: non_blank(&self.phone),
            notes: non_blank(&self.additional_info),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Computed price and time estimate
///
/// Prices are abstract currency units; formatting is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct QuoteBreakdown {
    #[ts(type = "number")]
    pub base_price: u64,
    #[ts(type = "number")]
    pub design_price: u64,
    #[ts(type = "number")]
    pub features_price: u64,
    pub timeline_multiplier: f64,
    #[ts(type = "number")]
    pub total_price: u64,
    /// Line item name to contribution: `base`, `design`, `features`, plus one
    /// entry per selected feature
    #[ts(type = "Record<string, number>")]
    pub breakdown: BTreeMap<String, u64>,
    pub estimated_time_in_weeks: u32,
}

/// Human-readable description of the submitted choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct QuoteSummary {
    pub website_type: String,
    pub design_complexity: String,
    pub page_count: u32,
    pub timeline: String,
    pub features: Vec<String>,
    pub contact: ContactDetails,
}

impl QuoteSummary {
    pub fn new(requirements: &ProjectRequirements, contact: ContactDetails) -> Self {
        Self {
            website_type: requirements.website_type.label().to_string(),
            design_complexity: requirements.design_complexity.label().to_string(),
            page_count: requirements.page_count.get(),
            timeline: requirements.timeline.label().to_string(),
            features: requirements
                .features
                .selected()
                .map(|feature| feature.label().to_string())
                .collect(),
            contact,
        }
    }
}

/// Response for a calculated quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct QuoteResponse {
    pub quote: QuoteBreakdown,
    pub summary: QuoteSummary,
}
