//! Cycle-count micro-benchmark harness.
//!
//! Each sample runs the operation `warmup` times untimed, then `iterations` times between two
//! counter reads. Samples are kept in a fixed-size array and sorted once all of them are taken,
//! so the timed region performs no allocation and no I/O. Reported figures are per call: the raw
//! sample divided by the iteration count.

mod counter;

pub use self::counter::CycleCounter;
#[cfg(feature = "std")]
pub use self::counter::InstantCounter;

use core::fmt;

/// Percentiles reported by [`Percentiles`] and [`PercentileLegend`].
pub const PERCENTILES: [usize; 11] = [1, 10, 20, 30, 40, 50, 60, 70, 80, 90, 99];

/// Column width of the name in [`Report`] and [`Percentiles`]. Longer names push their row out
/// of line with [`PercentileLegend`].
pub const NAME_WIDTH: usize = 10;

/// Number of samples taken by the `mulbench` binary.
pub const DEFAULT_SAMPLES: usize = 500;

/// Warmup and iteration counts for each sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Untimed calls before each sample.
    pub warmup: usize,

    /// Timed calls per sample.
    pub iterations: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup: 50,
            iterations: 300,
        }
    }
}

/// Runs operations against an enabled [`CycleCounter`], taking `SAMPLES` samples per run.
#[derive(Debug)]
pub struct Harness<C: CycleCounter, const SAMPLES: usize> {
    counter: C,
    config: BenchConfig,
}

impl<C: CycleCounter, const SAMPLES: usize> Harness<C, SAMPLES> {
    /// Enable `counter` and wrap it.
    ///
    /// # Panics
    /// If `SAMPLES` or `config.iterations` is zero.
    pub fn new(mut counter: C, config: BenchConfig) -> Self {
        assert!(SAMPLES > 0, "at least one sample is required");
        assert!(config.iterations > 0, "at least one iteration is required");

        counter.enable();
        log::trace!("cycle counter enabled");

        Self { counter, config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Measure `op`.
    pub fn run(&mut self, mut op: impl FnMut()) -> Measurement<SAMPLES> {
        let mut samples = [0u64; SAMPLES];

        for sample in samples.iter_mut() {
            for _ in 0..self.config.warmup {
                op();
            }

            let t0 = self.counter.read();
            for _ in 0..self.config.iterations {
                op();
            }
            let t1 = self.counter.read();

            *sample = t1.saturating_sub(t0);
        }

        samples.sort_unstable();

        let measurement = Measurement {
            samples,
            iterations: self.config.iterations as u64,
        };

        log::debug!(
            "{} samples of {} iterations, median {}",
            SAMPLES,
            self.config.iterations,
            measurement.median()
        );

        measurement
    }

    /// Disable the counter and hand it back.
    pub fn finish(mut self) -> C {
        self.counter.disable();
        log::trace!("cycle counter disabled");
        self.counter
    }
}

/// Sorted samples of a single [`Harness::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement<const SAMPLES: usize> {
    samples: [u64; SAMPLES],
    iterations: u64,
}

impl<const SAMPLES: usize> Measurement<SAMPLES> {
    /// Raw per-sample counts, ascending. Each covers [`Measurement::iterations`] calls.
    pub fn samples(&self) -> &[u64; SAMPLES] {
        &self.samples
    }

    /// Calls per sample.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Median cost of a single call.
    pub fn median(&self) -> u64 {
        self.per_call(SAMPLES / 2)
    }

    /// Cost of a single call at the `p`-th percentile.
    ///
    /// The sample index is `SAMPLES * p / 100`, clamped to the last sample.
    pub fn percentile(&self, p: usize) -> u64 {
        self.per_call((SAMPLES * p / 100).min(SAMPLES - 1))
    }

    fn per_call(&self, index: usize) -> u64 {
        self.samples[index] / self.iterations
    }
}

/// Named [`Measurement`] printed as `"<name> cycles = <median>"`.
#[derive(Clone, Copy, Debug)]
pub struct Report<'a, const SAMPLES: usize> {
    name: &'a str,
    measurement: &'a Measurement<SAMPLES>,
}

impl<'a, const SAMPLES: usize> Report<'a, SAMPLES> {
    /// Attach `name` to `measurement`.
    pub fn new(name: &'a str, measurement: &'a Measurement<SAMPLES>) -> Self {
        Self { name, measurement }
    }

    /// The row of [`PERCENTILES`] for this measurement.
    pub fn percentiles(&self) -> Percentiles<'a, SAMPLES> {
        Percentiles(*self)
    }
}

impl<const SAMPLES: usize> fmt::Display for Report<'_, SAMPLES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>width$} cycles = {}",
            self.name,
            self.measurement.median(),
            width = NAME_WIDTH
        )
    }
}

/// Header line naming the columns of [`Percentiles`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PercentileLegend;

impl fmt::Display for PercentileLegend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>21}", "percentile")?;
        for p in PERCENTILES {
            write!(f, "{p:>7}")?;
        }
        Ok(())
    }
}

/// Per-call cost at each of [`PERCENTILES`], aligned with [`PercentileLegend`].
#[derive(Clone, Copy, Debug)]
pub struct Percentiles<'a, const SAMPLES: usize>(Report<'a, SAMPLES>);

impl<const SAMPLES: usize> fmt::Display for Percentiles<'_, SAMPLES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>width$} percentiles:", self.0.name, width = NAME_WIDTH)?;
        for p in PERCENTILES {
            write!(f, "{:>7}", self.0.measurement.percentile(p))?;
        }
        Ok(())
    }
}
