//! Timed derivation loop for capacity planning
//!
//! Measures raw HKDF cost only: the loop bypasses the encoder and metadata
//! assembly and derives under info strings `"{namespace}:0"` upward.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::derive::CtxDeriver;
use crate::error::Result;
use crate::hkdf::{hkdf_sha256, HmacSha256Provider};
use crate::seed::ValidatedSeed;

/// Largest iteration count a single benchmark run will execute
pub const MAX_BENCH_ITERATIONS: usize = 10_000;

/// Snapshot of one benchmark run; computed once, never retained
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkStats {
    /// Number of derivations executed
    pub iterations: usize,
    /// Wall-clock time for the whole loop, in milliseconds
    pub duration_ms: f64,
    /// `duration_ms / iterations`
    pub avg_per_iteration_ms: f64,
    /// Derivations per second; `f64::INFINITY` when the clock resolution is
    /// too coarse to measure the loop
    pub throughput_per_second: f64,
}

impl<P: HmacSha256Provider> CtxDeriver<P> {
    /// Time `iterations` sequential derivations with this configuration
    ///
    /// `iterations` is clamped to `1..=MAX_BENCH_ITERATIONS`. Runs to
    /// completion or fails outright; there is no cancellation.
    ///
    /// # Errors
    ///
    /// [`crate::KdfError::LengthOutOfRange`] if the configured length is
    /// invalid, or [`crate::KdfError::CryptoProviderUnavailable`] if the
    /// provider fails mid-run.
    pub async fn benchmark(
        &self,
        seed: &ValidatedSeed,
        iterations: usize,
    ) -> Result<BenchmarkStats> {
        let config = self.config();
        config.check_length()?;
        let iterations = iterations.clamp(1, MAX_BENCH_ITERATIONS);
        debug!(
            iterations,
            namespace = %config.namespace,
            length = config.length,
            "benchmarking derivation"
        );

        let started = Instant::now();
        for index in 0..iterations {
            let info = config.info_for(index as u32);
            hkdf_sha256(
                self.provider(),
                seed.as_bytes(),
                &config.salt,
                info.as_bytes(),
                config.length,
            )
            .await?;
        }
        let duration_ms = started.elapsed().as_secs_f64() * 1_000.0;

        let throughput_per_second = if duration_ms == 0.0 {
            f64::INFINITY
        } else {
            iterations as f64 / (duration_ms / 1_000.0)
        };

        Ok(BenchmarkStats {
            iterations,
            duration_ms,
            avg_per_iteration_ms: duration_ms / iterations as f64,
            throughput_per_second,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn seed() -> ValidatedSeed {
        Seed::from("bench-seed@example.com")
            .validate()
            .expect("valid seed")
    }

    #[tokio::test]
    async fn reports_the_clamped_iteration_count() {
        let deriver = CtxDeriver::new_default();
        let stats = deriver.benchmark(&seed(), 5).await.expect("benchmark runs");
        assert_eq!(stats.iterations, 5);
        assert!(stats.duration_ms >= 0.0);
        assert!(stats.throughput_per_second > 0.0);
        assert!(stats.avg_per_iteration_ms <= stats.duration_ms);
    }

    #[tokio::test]
    async fn zero_iterations_clamp_to_one() {
        let deriver = CtxDeriver::new_default();
        let stats = deriver.benchmark(&seed(), 0).await.expect("benchmark runs");
        assert_eq!(stats.iterations, 1);
    }

    #[tokio::test]
    async fn stats_serialize_with_camel_case_fields() {
        let stats = BenchmarkStats {
            iterations: 3,
            duration_ms: 1.5,
            avg_per_iteration_ms: 0.5,
            throughput_per_second: 2_000.0,
        };
        let json = serde_json::to_value(stats).expect("serializes");
        assert_eq!(json["iterations"], 3);
        assert_eq!(json["durationMs"], 1.5);
        assert_eq!(json["avgPerIterationMs"], 0.5);
        assert_eq!(json["throughputPerSecond"], 2_000.0);
    }
}
