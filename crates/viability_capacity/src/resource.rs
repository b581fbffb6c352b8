//! Resource classes and practical capacity.

use crate::error::CapacityError;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Kind of resource whose time is being costed.
///
/// Practical capacity is theoretical capacity minus unavoidable
/// non-productive time: breaks, training and communication for people,
/// maintenance and downtime for machines.
///
/// # Examples
///
/// ```
/// use viability_capacity::ResourceType;
///
/// assert_eq!(ResourceType::People.derating_factor(), 0.80);
/// assert_eq!("Machines".parse::<ResourceType>().unwrap(), ResourceType::Machines);
/// assert!("robots".parse::<ResourceType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceType {
    /// Staff time, derated to 80%.
    #[default]
    People,
    /// Equipment time, derated to 85%.
    Machines,
}

impl ResourceType {
    /// Share of theoretical capacity that is practically available.
    #[inline]
    pub fn derating_factor(&self) -> f64 {
        match self {
            ResourceType::People => 0.80,
            ResourceType::Machines => 0.85,
        }
    }

    /// Lower-case identifier.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::People => "people",
            ResourceType::Machines => "machines",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CapacityError;

    /// Case-insensitive `people` or `machines`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "people" => Ok(ResourceType::People),
            "machines" => Ok(ResourceType::Machines),
            _ => Err(CapacityError::UnsupportedResourceType(s.to_string())),
        }
    }
}

/// Practical capacity in minutes for a typed resource.
///
/// # Example
///
/// ```
/// use viability_capacity::{practical_capacity, ResourceType};
///
/// assert_eq!(practical_capacity(1_000.0, ResourceType::People), 800.0);
/// assert_eq!(practical_capacity(1_000.0, ResourceType::Machines), 850.0);
/// ```
#[inline]
pub fn practical_capacity(theoretical_minutes: f64, resource_type: ResourceType) -> f64 {
    theoretical_minutes * resource_type.derating_factor()
}

/// Practical capacity for a resource named by string.
///
/// Unrecognised names fall back to the `people` factor (0.80). Use
/// [`ResourceType::from_str`] where an unknown name must be rejected.
pub fn practical_capacity_for(theoretical_minutes: f64, resource_type: &str) -> f64 {
    let resource = resource_type.parse().unwrap_or_else(|_| {
        warn!(resource_type, "Unrecognised resource type, using people derating");
        ResourceType::People
    });
    practical_capacity(theoretical_minutes, resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_practical_capacity() {
        assert_relative_eq!(practical_capacity(1_000.0, ResourceType::People), 800.0);
        assert_relative_eq!(practical_capacity(1_000.0, ResourceType::Machines), 850.0);
        assert_eq!(practical_capacity(0.0, ResourceType::Machines), 0.0);
    }

    #[test]
    fn test_lenient_lookup_defaults_to_people() {
        assert_relative_eq!(practical_capacity_for(1_000.0, "MACHINES"), 850.0);
        assert_relative_eq!(practical_capacity_for(1_000.0, "robots"), 800.0);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!(
            "robots".parse::<ResourceType>(),
            Err(CapacityError::UnsupportedResourceType("robots".to_string()))
        );
        assert_eq!(" People ".parse::<ResourceType>(), Ok(ResourceType::People));
    }

    #[test]
    fn test_practical_never_exceeds_theoretical() {
        for resource in [ResourceType::People, ResourceType::Machines] {
            assert!(practical_capacity(123_456.0, resource) <= 123_456.0);
        }
    }
}
