//! Automation Journey - ROI engine and journey service
//!
//! Backs the automation storybook: a reader walks through chapters of
//! automation offerings, tunes ROI sliders, builds a cart and checks out.
//! The domain computes per-chapter and accumulated savings; the adapters
//! expose it over HTTP, persist journeys and forward leads to a CRM.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
