//! The NPV model a simulation drives.

use crate::error::EvaluationError;
use std::collections::BTreeMap;

/// One draw of every simulated parameter.
///
/// Borrowed from the simulation's per-chunk buffers, so no allocation happens
/// per iteration.
#[derive(Debug, Clone, Copy)]
pub struct SampledParameters<'a> {
    names: &'a [String],
    values: &'a [f64],
}

impl<'a> SampledParameters<'a> {
    /// Pair `names` with `values` position by position.
    ///
    /// Names without a value are treated as absent.
    pub fn new(names: &'a [String], values: &'a [f64]) -> Self {
        let len = names.len().min(values.len());
        Self {
            names: &names[..len],
            values: &values[..len],
        }
    }

    /// Value drawn for `name`, if it is simulated.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|index| self.values.get(index).copied())
    }

    /// `(name, value)` pairs in parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of simulated parameters.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` when nothing is simulated.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Owned copy as a map.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// A model mapping sampled parameters to an NPV.
///
/// Implemented for [`ProjectModel`](crate::ProjectModel) and for any closure
/// `Fn(&SampledParameters) -> Result<f64, EvaluationError>`.
pub trait NpvEvaluator: Sync {
    /// NPV for one draw.
    fn evaluate(&self, params: &SampledParameters<'_>) -> Result<f64, EvaluationError>;

    /// Whether `name` is a parameter the model reads.
    ///
    /// Simulations check every distribution name up front. Accepts anything
    /// by default.
    fn accepts(&self, name: &str) -> bool {
        let _ = name;
        true
    }
}

impl<F> NpvEvaluator for F
where
    F: Fn(&SampledParameters<'_>) -> Result<f64, EvaluationError> + Sync,
{
    fn evaluate(&self, params: &SampledParameters<'_>) -> Result<f64, EvaluationError> {
        self(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_iteration() {
        let names = vec!["a".to_string(), "b".to_string()];
        let values = [1.5, -2.0];
        let params = SampledParameters::new(&names, &values);

        assert_eq!(params.get("b"), Some(-2.0));
        assert_eq!(params.get("c"), None);
        assert_eq!(params.len(), 2);
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", 1.5), ("b", -2.0)]);
        assert_eq!(params.to_map()["a"], 1.5);
    }

    #[test]
    fn test_unmatched_names_are_absent() {
        let names = vec!["a".to_string(), "b".to_string()];
        let values = [1.0];
        let params = SampledParameters::new(&names, &values);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("b"), None);
    }

    #[test]
    fn test_closure_is_evaluator() {
        let model = |p: &SampledParameters<'_>| -> Result<f64, EvaluationError> {
            Ok(p.get("x").unwrap_or(0.0) * 2.0)
        };
        let names = vec!["x".to_string()];
        let values = [21.0];
        assert_eq!(model.evaluate(&SampledParameters::new(&names, &values)), Ok(42.0));
        assert!(model.accepts("anything"));
    }
}
