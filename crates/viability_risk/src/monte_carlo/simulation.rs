//! Chunked, parallel Monte Carlo over an NPV model.

use super::config::MonteCarloConfig;
use super::distribution::{DistributionSpec, Sampler};
use super::evaluator::{NpvEvaluator, SampledParameters};
use super::result::MonteCarloResult;
use super::rng::{entropy_seed, SimulationRng};
use crate::error::RiskError;
use crate::parallel::{map_chunks, Chunk};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Successful NPVs of one chunk and its failure count.
struct ChunkOutcome {
    npvs: Vec<f64>,
    failed: usize,
}

/// Sample every parameter, evaluate the model and summarise the NPVs.
///
/// Parameters are drawn independently, in name order, from their
/// distributions. A draw whose evaluation fails or returns a non-finite NPV
/// is dropped and counted; it is never retried.
///
/// Iterations are split into chunks of `config.chunk_size()`. Chunk `k`
/// draws from a generator seeded by mixing the master seed with `k`, so the
/// same seed, distributions and configuration reproduce the same samples in
/// the same order on any number of threads. Without a seed, a master seed is
/// taken from OS entropy and reported in [`MonteCarloResult::seed`].
///
/// # Errors
///
/// - [`RiskError::InvalidConfig`] for an invalid configuration
/// - [`RiskError::InvalidDistribution`] when a distribution cannot be sampled
/// - [`RiskError::UnknownParameter`] when the evaluator rejects a name
/// - [`RiskError::NoSuccessfulSamples`] when every draw fails
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use viability_risk::monte_carlo::{monte_carlo_simulation, DistributionSpec, MonteCarloConfig};
/// use viability_risk::ProjectModel;
///
/// let model = ProjectModel::new(500_000.0, 200_000.0, 50_000.0, 5, 0.10);
/// let distributions = BTreeMap::from([(
///     "benefit_realization".to_string(),
///     DistributionSpec::Uniform { low: 0.8, high: 1.2 },
/// )]);
/// let config = MonteCarloConfig::builder().iterations(2_000).seed(42).build().unwrap();
///
/// let first = monte_carlo_simulation(&model, &distributions, &config).unwrap();
/// let second = monte_carlo_simulation(&model, &distributions, &config).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.iterations, 2_000);
/// ```
pub fn monte_carlo_simulation<E>(
    evaluator: &E,
    distributions: &BTreeMap<String, DistributionSpec>,
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult, RiskError>
where
    E: NpvEvaluator + ?Sized,
{
    config.validate()?;

    let mut names = Vec::with_capacity(distributions.len());
    let mut samplers = Vec::with_capacity(distributions.len());
    for (name, spec) in distributions {
        if !evaluator.accepts(name) {
            return Err(RiskError::UnknownParameter(name.clone()));
        }
        names.push(name.clone());
        samplers.push(spec.sampler()?);
    }

    let seed = config.seed().unwrap_or_else(entropy_seed);
    let requested = config.iterations();

    let outcomes = map_chunks(requested, config.chunk_size(), config.parallel(), |chunk| {
        run_chunk(evaluator, &names, &samplers, seed, chunk)
    });

    let failed: usize = outcomes.iter().map(|o| o.failed).sum();
    let mut npvs = Vec::with_capacity(requested - failed);
    for outcome in outcomes {
        npvs.extend(outcome.npvs);
    }

    if failed > 0 {
        warn!(failed, requested, "Dropped failed Monte Carlo samples");
    }
    debug!(
        seed,
        requested,
        succeeded = npvs.len(),
        parameters = names.len(),
        "Completed Monte Carlo simulation"
    );

    MonteCarloResult::from_samples(npvs, requested, seed)
}

fn run_chunk<E>(
    evaluator: &E,
    names: &[String],
    samplers: &[Sampler],
    master_seed: u64,
    chunk: Chunk,
) -> ChunkOutcome
where
    E: NpvEvaluator + ?Sized,
{
    let mut rng = SimulationRng::for_chunk(master_seed, chunk.index as u64);
    let mut values = vec![0.0; samplers.len()];
    let mut npvs = Vec::with_capacity(chunk.len());
    let mut failed = 0;

    for _ in chunk.start..chunk.end {
        for (value, sampler) in values.iter_mut().zip(samplers) {
            *value = sampler.sample(&mut rng);
        }
        match evaluator.evaluate(&SampledParameters::new(names, &values)) {
            Ok(npv) if npv.is_finite() => npvs.push(npv),
            _ => failed += 1,
        }
    }

    ChunkOutcome { npvs, failed }
}
