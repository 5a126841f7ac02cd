//! Named places.

use serde::{Deserialize, Serialize};

use super::Point;

/// A named place in the store.
///
/// An empty name is meaningful: it is the "no feature at this location"
/// sentinel returned by exact-coordinate lookups that miss. Callers check
/// [`Feature::is_present`] rather than matching on an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub location: Point,
}

impl Feature {
    /// Create a named feature.
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// The "nothing here" sentinel for a lookup at `location`.
    pub fn missing(location: Point) -> Self {
        Self {
            name: String::new(),
            location,
        }
    }

    /// Whether this is a real feature rather than the miss sentinel.
    pub fn is_present(&self) -> bool {
        !self.name.is_empty()
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_present() {
            write!(f, "{} at {}", self.name, self.location)
        } else {
            write!(f, "no feature at {}", self.location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sentinel_has_empty_name() {
        let point = Point::new(1, 2);
        let sentinel = Feature::missing(point);
        assert!(!sentinel.is_present());
        assert_eq!(sentinel.location, point);
    }

    #[test]
    fn named_feature_is_present() {
        let feature = Feature::new("Old Lighthouse", Point::new(0, 0));
        assert!(feature.is_present());
    }
}
