//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `catalog` - Chapters, packages, suggestions and ROI slider settings
//! - `cart` - Chapter selection and accumulated savings
//! - `roi` - Pure ROI calculation engine and formatting
//! - `journey` - Visitor state container driven by actions
//! - `lead` - Lead contact details and CRM payloads
//! - `share` - Journey state encoded in share URLs

pub mod cart;
pub mod catalog;
pub mod foundation;
pub mod journey;
pub mod lead;
pub mod roi;
pub mod share;
