//! Field rules shared by every entity kind.

pub mod date;
pub mod error;

pub use date::*;
pub use error::*;

/// Shortest accepted park name.
pub const MIN_PARK_NAME_LEN: usize = 3;

/// Accepted visitor name lengths.
pub const VISITOR_NAME_LEN: std::ops::RangeInclusive<usize> = 1..=15;

/// Checks a park name, counting characters rather than bytes.
pub fn validate_park_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() >= MIN_PARK_NAME_LEN {
        Ok(())
    } else {
        Err(ValidationError::ParkName)
    }
}

pub fn validate_visitor_name(name: &str) -> Result<(), ValidationError> {
    if VISITOR_NAME_LEN.contains(&name.chars().count()) {
        Ok(())
    } else {
        Err(ValidationError::VisitorName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_name_length() {
        assert_eq!(validate_park_name("Zio"), Ok(()));
        assert_eq!(validate_park_name("Yellowstone"), Ok(()));
        assert_eq!(validate_park_name("Zi"), Err(ValidationError::ParkName));
        assert_eq!(validate_park_name(""), Err(ValidationError::ParkName));
    }

    #[test]
    fn test_visitor_name_bounds() {
        assert_eq!(validate_visitor_name("A"), Ok(()));
        assert_eq!(validate_visitor_name("Fifteen Chars!!"), Ok(()));
        assert_eq!(validate_visitor_name(""), Err(ValidationError::VisitorName));
        assert_eq!(validate_visitor_name("Sixteen Chars!!!"), Err(ValidationError::VisitorName));
    }

    #[test]
    fn test_names_count_characters_not_bytes() {
        assert_eq!(validate_park_name("Été"), Ok(()));
        assert_eq!(validate_visitor_name("ÅÅÅÅÅÅÅÅÅÅÅÅÅÅÅ"), Ok(()));
    }
}
