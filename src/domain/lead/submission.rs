//! Payloads delivered to the CRM.

use serde::{Deserialize, Serialize};

use super::LeadData;
use crate::domain::cart::CartLineItem;
use crate::domain::foundation::Timestamp;
use crate::domain::roi::RoiInputs;

/// Summary of one cart item as the CRM sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemSummary {
    pub chapter_id: String,
    pub chapter_title: String,
    #[serde(rename = "costUSD")]
    pub cost_usd: u64,
}

impl From<&CartLineItem> for CartItemSummary {
    fn from(item: &CartLineItem) -> Self {
        Self {
            chapter_id: item.chapter_id.clone(),
            chapter_title: item.chapter_title.clone(),
            cost_usd: item.cost_usd,
        }
    }
}

/// Where and when the lead was captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContext {
    pub timestamp: Timestamp,
    pub page_url: String,
    pub cart_items: Vec<CartItemSummary>,
    pub roi_inputs: RoiInputs,
    #[serde(rename = "estimatedROI", skip_serializing_if = "Option::is_none")]
    pub estimated_roi: Option<i64>,
}

/// Lead form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub lead: LeadData,
    pub context: LeadContext,
}

impl LeadSubmission {
    pub fn new(
        lead: LeadData,
        page_url: impl Into<String>,
        cart_items: &[CartLineItem],
        roi_inputs: RoiInputs,
        estimated_roi: Option<i64>,
    ) -> Self {
        Self {
            lead,
            context: LeadContext {
                timestamp: Timestamp::now(),
                page_url: page_url.into(),
                cart_items: cart_items.iter().map(CartItemSummary::from).collect(),
                roi_inputs,
                estimated_roi,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Checkout,
}

/// Order details attached to a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrder {
    pub timestamp: Timestamp,
    pub total_cost: u64,
    pub items: Vec<CartItemSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

/// Checkout completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSubmission {
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
    pub lead: LeadData,
    pub order: CheckoutOrder,
}

impl CheckoutSubmission {
    pub fn new(
        lead: LeadData,
        cart_items: &[CartLineItem],
        total_cost: u64,
        payment_method: Option<String>,
    ) -> Self {
        Self {
            kind: SubmissionKind::Checkout,
            lead,
            order: CheckoutOrder {
                timestamp: Timestamp::now(),
                total_cost,
                items: cart_items.iter().map(CartItemSummary::from).collect(),
                payment_method,
            },
        }
    }
}
