//! Quotes Domain
//!
//! Prices website projects from the choices made on the quote form.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, request validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Calculator  │  ← Pure pricing engine
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Rates/Models│  ← Rate card, option enums, DTOs
//! └─────────────┘
//! ```
//!
//! The calculator has no state and performs no I/O, so it can be called
//! directly without going through the HTTP layer:
//!
//! ```
//! use domain_quotes::{compute_quote, ProjectRequirements};
//!
//! let quote = compute_quote(&ProjectRequirements::default());
//! assert_eq!(quote.total_price, 3650);
//! assert_eq!(quote.estimated_time_in_weeks, 2);
//! ```

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rates;

// Re-export commonly used types
pub use calculator::{compute_quote, estimate_weeks};
pub use catalog::QuoteOptions;
pub use error::{QuoteError, QuoteResult};
pub use models::{
    ContactDetails, DesignComplexity, Feature, Features, ProjectRequirements, QuoteBreakdown,
    QuoteRequest, QuoteResponse, QuoteSummary, Timeline, WebsiteType,
};
