//! Collection invariants: size bounds and contiguous ordering.

use crate::errors::AppError;
use crate::models::Section;

pub const MIN_SECTIONS: usize = 1;
pub const MAX_SECTIONS: usize = 10;

/// Stable sort by `order`, then renumber `0..len`.
///
/// Idempotent. Does not validate content.
pub fn reorder(mut sections: Vec<Section>) -> Vec<Section> {
    sections.sort_by_key(|section| section.order);
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index as u32;
    }
    sections
}

pub fn max_sections_error() -> AppError {
    AppError::BoundViolation {
        message: format!("Maximum of {} sections allowed", MAX_SECTIONS),
        limit: MAX_SECTIONS,
    }
}

pub fn min_sections_error() -> AppError {
    AppError::BoundViolation {
        message: format!("Minimum of {} section required", MIN_SECTIONS),
        limit: MIN_SECTIONS,
    }
}

/// Reject collections outside `MIN_SECTIONS..=MAX_SECTIONS`.
pub fn check_bounds(len: usize) -> Result<(), AppError> {
    if len < MIN_SECTIONS {
        return Err(min_sections_error());
    }
    if len > MAX_SECTIONS {
        return Err(max_sections_error());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_sections;

    fn orders(sections: &[Section]) -> Vec<u32> {
        sections.iter().map(|s| s.order).collect()
    }

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_reorder_closes_gaps() {
        let mut sections = default_sections();
        for (section, order) in sections.iter_mut().zip([3, 40, 7, 0, 12]) {
            section.order = order;
        }

        let sorted = reorder(sections);
        assert_eq!(orders(&sorted), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            ids(&sorted),
            vec!["testimonials", "hero", "mission", "sponsors", "impact"]
        );
    }

    #[test]
    fn test_reorder_keeps_input_sequence_for_duplicate_orders() {
        let mut sections = default_sections();
        for section in sections.iter_mut() {
            section.order = 2;
        }

        let sorted = reorder(sections);
        assert_eq!(orders(&sorted), vec![0, 1, 2, 3, 4]);
        assert_eq!(
            ids(&sorted),
            vec!["hero", "impact", "mission", "testimonials", "sponsors"]
        );
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let mut sections = default_sections();
        for (section, order) in sections.iter_mut().zip([9, 9, 1, 5, 0]) {
            section.order = order;
        }

        let once = reorder(sections);
        let twice = reorder(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reorder_empty() {
        assert!(reorder(Vec::new()).is_empty());
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(MIN_SECTIONS).is_ok());
        assert!(check_bounds(MAX_SECTIONS).is_ok());

        let err = check_bounds(0).unwrap_err();
        assert_eq!(err.message(), "Minimum of 1 section required");

        let err = check_bounds(MAX_SECTIONS + 1).unwrap_err();
        assert_eq!(err.message(), "Maximum of 10 sections allowed");
    }
}
