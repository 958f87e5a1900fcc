//! Review rating bounds.
//!
//! Mirrored by the `ck_reviews_rating_range` check constraint and the
//! `range` rule on the review DTO.

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Rating applied when a review is created without one.
pub const DEFAULT_RATING: i16 = MAX_RATING;

/// Whether `rating` lies within the accepted scale.
pub fn is_valid_rating(rating: i16) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
