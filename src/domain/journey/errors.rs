//! Journey-specific error types.

use crate::domain::catalog::PackageTier;
use crate::domain::foundation::{ErrorCode, JourneyId, ValidationError};

/// Journey-specific errors.
#[derive(Debug, Clone, PartialEq)]
pub enum JourneyError {
    /// Journey was not found.
    NotFound(JourneyId),
    /// Chapter id is not in the catalog.
    ChapterNotFound(String),
    /// Package tier is not offered by the catalog.
    PackageNotFound(PackageTier),
    /// Chapter index past the end of the catalog.
    ChapterIndexOutOfRange { index: usize, count: usize },
    /// Checkout with an empty cart and no package.
    NothingToCheckout,
    /// Input rejected.
    Validation(ValidationError),
    /// Infrastructure error.
    Infrastructure(String),
}

impl JourneyError {
    pub fn not_found(id: JourneyId) -> Self {
        JourneyError::NotFound(id)
    }
    pub fn chapter_not_found(chapter_id: impl Into<String>) -> Self {
        JourneyError::ChapterNotFound(chapter_id.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        JourneyError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            JourneyError::NotFound(_) => ErrorCode::JourneyNotFound,
            JourneyError::ChapterNotFound(_) => ErrorCode::ChapterNotFound,
            JourneyError::PackageNotFound(_) => ErrorCode::PackageNotFound,
            JourneyError::ChapterIndexOutOfRange { .. } => ErrorCode::OutOfRange,
            JourneyError::NothingToCheckout => ErrorCode::NothingToCheckout,
            JourneyError::Validation(err) => ErrorCode::from(err),
            JourneyError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            JourneyError::NotFound(id) => format!("Journey not found: {}", id),
            JourneyError::ChapterNotFound(id) => format!("Chapter not found: {}", id),
            JourneyError::PackageNotFound(tier) => format!("Package not offered: {}", tier),
            JourneyError::ChapterIndexOutOfRange { index, count } => {
                format!("Chapter index {} out of range (catalog has {} chapters)", index, count)
            }
            JourneyError::NothingToCheckout => {
                "Cart is empty and no package is selected".to_string()
            }
            JourneyError::Validation(err) => err.to_string(),
            JourneyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JourneyError {}

impl From<ValidationError> for JourneyError {
    fn from(err: ValidationError) -> Self {
        JourneyError::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_error_codes() {
        assert_eq!(JourneyError::chapter_not_found("x").code(), ErrorCode::ChapterNotFound);
        assert_eq!(JourneyError::NothingToCheckout.code(), ErrorCode::NothingToCheckout);
        assert_eq!(
            JourneyError::ChapterIndexOutOfRange { index: 9, count: 6 }.code(),
            ErrorCode::OutOfRange
        );
    }

    #[test]
    fn validation_keeps_specific_code() {
        let err: JourneyError = ValidationError::out_of_range("avgHourlyCost", 25.0, 150.0, 5.0).into();
        assert_eq!(err.code(), ErrorCode::OutOfRange);
        assert!(err.message().contains("avgHourlyCost"));
    }
}
