//! Journey state container.
//!
//! Holds the visitor's progress through the book: current view, chapter,
//! cart and ROI inputs. All numbers come from the cart and ROI engine;
//! this type only routes actions to them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AppView, JourneyAction, JourneyError, JourneySnapshot, PageTransition};
use crate::domain::cart::{AccumulatedSavings, Cart};
use crate::domain::catalog::{Catalog, Chapter, Package, PackageTier};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::roi::{RoiCalculation, RoiCalculator, RoiInputField, RoiInputs, RoiInputsPatch, RoiReport};

/// Maximum length for the viewer's name.
pub const MAX_VIEWER_NAME_LENGTH: usize = 100;

/// Journey state.
///
/// # Invariants
///
/// - `chapter_index` is below the catalog's chapter count (or 0 for an
///   empty catalog)
/// - `cart` holds no duplicate chapters and only catalog chapters
/// - `roi_inputs` are inside the catalog's slider ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyState {
    view: AppView,
    chapter_index: usize,
    cart: Cart,
    roi_inputs: RoiInputs,
    selected_package: Option<PackageTier>,
    viewer_name: Option<String>,
    is_book_open: bool,
    pending_transition: PageTransition,
    payment_complete: bool,
}

impl JourneyState {
    /// Fresh journey on the landing cover with the catalog's default inputs.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            view: AppView::LandingCover,
            chapter_index: 0,
            cart: Cart::new(),
            roi_inputs: catalog.default_inputs(),
            selected_package: None,
            viewer_name: None,
            is_book_open: false,
            pending_transition: PageTransition::None,
            payment_complete: false,
        }
    }

    /// Rebuild state from a persisted snapshot.
    ///
    /// Accumulated savings are re-derived from the cart. Chapters and
    /// packages the catalog no longer offers are dropped, and inputs outside
    /// the current slider ranges fall back to the catalog defaults.
    pub fn from_snapshot(snapshot: JourneySnapshot, catalog: &Catalog) -> Self {
        let defaults = catalog.default_inputs();
        let mut roi_inputs = snapshot.roi_inputs;
        for field in RoiInputField::ALL {
            if catalog.roi.validate_value(field, roi_inputs.get(field)).is_err() {
                roi_inputs.set(field, defaults.get(field));
            }
        }

        let chapter_index = if snapshot.chapter_index < catalog.chapter_count() {
            snapshot.chapter_index
        } else {
            0
        };

        Self {
            view: AppView::LandingCover,
            chapter_index,
            cart: Cart::restore(snapshot.cart_items, catalog),
            roi_inputs,
            selected_package: snapshot
                .selected_package
                .filter(|tier| catalog.package(*tier).is_some()),
            viewer_name: snapshot.viewer_name,
            is_book_open: false,
            pending_transition: PageTransition::None,
            payment_complete: snapshot.payment_complete,
        }
    }

    /// Persisted subset of this state.
    pub fn snapshot(&self) -> JourneySnapshot {
        JourneySnapshot {
            selected_chapter_ids: self.cart.chapter_ids().into_iter().map(String::from).collect(),
            cart_items: self.cart.items().to_vec(),
            accumulated_savings: self.accumulated_savings(),
            roi_inputs: self.roi_inputs,
            selected_package: self.selected_package,
            viewer_name: self.viewer_name.clone(),
            chapter_index: self.chapter_index,
            payment_complete: self.payment_complete,
            saved_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn roi_inputs(&self) -> &RoiInputs {
        &self.roi_inputs
    }

    pub fn selected_package(&self) -> Option<PackageTier> {
        self.selected_package
    }

    pub fn viewer_name(&self) -> Option<&str> {
        self.viewer_name.as_deref()
    }

    pub fn is_book_open(&self) -> bool {
        self.is_book_open
    }

    pub fn pending_transition(&self) -> PageTransition {
        self.pending_transition
    }

    pub fn is_payment_complete(&self) -> bool {
        self.payment_complete
    }

    pub fn is_in_cart(&self, chapter_id: &str) -> bool {
        self.cart.contains(chapter_id)
    }

    /// Chapter at the current index.
    pub fn current_chapter<'a>(&self, catalog: &'a Catalog) -> Option<&'a Chapter> {
        catalog.chapters.get(self.chapter_index)
    }

    pub fn selected_package_details<'a>(&self, catalog: &'a Catalog) -> Option<&'a Package> {
        self.selected_package.and_then(|tier| catalog.package(tier))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    pub fn accumulated_savings(&self) -> AccumulatedSavings {
        self.cart.accumulated_savings()
    }

    pub fn roi_calculation(&self) -> RoiCalculation {
        RoiCalculator::calculate_full_roi(&self.roi_inputs, &self.accumulated_savings())
    }

    pub fn roi_report(&self) -> RoiReport {
        RoiReport::build(self.roi_inputs, self.accumulated_savings())
    }

    /// Amount due at checkout: the package price when one is selected,
    /// otherwise the cart total.
    pub fn checkout_total(&self, catalog: &Catalog) -> u64 {
        match self.selected_package_details(catalog) {
            Some(package) => package.price_usd,
            None => self.accumulated_savings().total_cost_usd,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one action.
    ///
    /// On error the state is left unchanged.
    pub fn apply(&mut self, action: JourneyAction, catalog: &Catalog) -> Result<(), JourneyError> {
        debug!(action = action.name(), "Applying journey action");

        match action {
            JourneyAction::SetView(view) => {
                self.view = view;
                self.pending_transition = PageTransition::None;
            }
            JourneyAction::Navigate { view, transition } => {
                self.view = view;
                self.pending_transition = transition;
            }
            JourneyAction::SetChapterIndex(index) => {
                let count = catalog.chapter_count();
                if index >= count {
                    return Err(JourneyError::ChapterIndexOutOfRange { index, count });
                }
                self.chapter_index = index;
            }
            JourneyAction::NextChapter => {
                if self.chapter_index + 1 < catalog.chapter_count() {
                    self.chapter_index += 1;
                    self.pending_transition = PageTransition::PageTurnForward;
                }
            }
            JourneyAction::PreviousChapter => {
                if self.chapter_index > 0 {
                    self.chapter_index -= 1;
                    self.pending_transition = PageTransition::PageTurnBack;
                }
            }
            JourneyAction::AddToCart { chapter_id } => {
                let chapter = catalog
                    .chapter(&chapter_id)
                    .ok_or_else(|| JourneyError::chapter_not_found(&chapter_id))?;
                self.cart.add(chapter);
            }
            JourneyAction::RemoveFromCart { chapter_id } => {
                self.cart.remove(&chapter_id);
            }
            JourneyAction::SelectPackage { tier } => {
                if catalog.package(tier).is_none() {
                    return Err(JourneyError::PackageNotFound(tier));
                }
                self.selected_package = Some(tier);
            }
            JourneyAction::UpdateRoiInputs(patch) => {
                self.update_roi_inputs(&patch, catalog)?;
            }
            JourneyAction::SetViewerName(name) => {
                self.viewer_name = Self::normalize_viewer_name(&name)?;
            }
            JourneyAction::OpenBook => {
                self.is_book_open = true;
                self.pending_transition = PageTransition::OpenBook;
            }
            JourneyAction::SetTransition(transition) => {
                self.pending_transition = transition;
            }
            JourneyAction::CompletePayment => {
                if self.cart.is_empty() && self.selected_package.is_none() {
                    return Err(JourneyError::NothingToCheckout);
                }
                self.payment_complete = true;
            }
            JourneyAction::ResetJourney => {
                let viewer_name = self.viewer_name.take();
                *self = Self::new(catalog);
                self.viewer_name = viewer_name;
            }
        }
        Ok(())
    }

    fn update_roi_inputs(&mut self, patch: &RoiInputsPatch, catalog: &Catalog) -> Result<(), JourneyError> {
        for (field, value) in patch.values() {
            catalog.roi.validate_value(field, value)?;
        }
        self.roi_inputs = self.roi_inputs.merged(patch);
        Ok(())
    }

    fn normalize_viewer_name(name: &str) -> Result<Option<String>, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > MAX_VIEWER_NAME_LENGTH {
            return Err(ValidationError::invalid_format(
                "viewer_name",
                format!("must be at most {} characters", MAX_VIEWER_NAME_LENGTH),
            ));
        }
        Ok(Some(trimmed.to_string()))
    }
}
