use cfg_if::cfg_if;
use crate::*;

/// External source of sensor readings, implemented by whatever owns the
/// actual hardware (or a recording, during replay). A reading is always a
/// complete six axis sample; `None` means nothing is available yet.
///
pub trait SampleSource
{
    fn read(&mut self) -> Option<Sample>;
}

/// Configuration for one estimation session, fixed at session start.
///
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig
{
    /// In Hz; how often the host delivers ticks. Must be positive.
    pub sample_rate: f32,

    /// Complementary filter mixing factor, strictly between 0 and 1.
    pub alpha: f32,

    /// Stop processing after this many ticks. `None` keeps the session
    /// running for as long as the host keeps calling.
    pub max_ticks: Option<u32>,
}

impl SessionConfig
{
    /// Limit the session to a wall clock duration instead of a tick count.
    /// Skipped ticks count toward the budget too, so this tracks elapsed
    /// time rather than collected data.
    ///
    pub fn with_duration_secs(mut self, seconds: f32) -> Self {
        self.max_ticks = Some((seconds * self.sample_rate) as u32);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            sample_rate: DEFAULT_SAMPLE_RATE,
            alpha: DEFAULT_ALPHA,
            max_ticks: None,
        }
    }
}

/// Why a tick produced no new estimates.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason
{
    /// The sample source had no data for us yet.
    MissingSample,

    /// The acceleration vector had no direction to take a tilt from.
    DegenerateSample,
}

/// What one `process_tick` call did.
///
#[derive(Debug, Clone, Copy)]
pub enum TickOutcome
{
    /// Fresh estimates were computed on all three channels.
    Published(TiltReport),

    /// The tick was consumed but the retained estimates are unchanged.
    Skipped(SkipReason),

    /// The tick budget is spent; nothing gets processed anymore.
    Finished,
}

/// Owns the estimator chain and runs it once per tick, in a fixed order:
/// accelerometer, then gyro integration, then the complementary filter over
/// the outputs of both.
///
/// The host drives the session at the configured sample rate; the session
/// itself never blocks, schedules, or touches hardware.
///
#[derive(Debug)]
pub struct TiltSession
{
    /// In seconds; the fixed interval between two ticks.
    dt: f32,

    /// Ticks consumed so far, with or without data.
    ticks: u32,

    /// Ticks that left the retained estimates untouched.
    skipped: u32,

    /// Tick budget, copied from the config.
    max_ticks: Option<u32>,

    gyro: GyroIntegrator,
    fuser: ComplementaryFuser,

    /// The estimates published on the most recent data tick, kept around so
    /// hosts can fall back on them across skipped ticks.
    report: Option<TiltReport>,

    /// The gyro increment of the most recent data tick, i.e. the exact value
    /// the fuser saw.
    #[cfg(feature = "debug")]
    pub last_delta: TiltDelta,
}

impl TiltSession
{
    /// Validates the configuration and starts a session with every estimator
    /// zeroed (device assumed flat).
    ///
    pub fn new(config: SessionConfig) -> Result<Self, TiltError> {
        if !(config.sample_rate > 0.0) || !config.sample_rate.is_finite() {
            return Err(TiltError::InvalidSampleRate(config.sample_rate));
        }
        if !(config.alpha > 0.0) || !(config.alpha < 1.0) {
            return Err(TiltError::InvalidAlpha(config.alpha));
        }

        log::debug!(
            "Starting tilt session: {} Hz, alpha {}, budget {:?}",
            config.sample_rate, config.alpha, config.max_ticks
        );

        Ok(TiltSession {
            dt: 1.0 / config.sample_rate,
            ticks: 0,
            skipped: 0,
            max_ticks: config.max_ticks,
            gyro: GyroIntegrator::new(),
            fuser: ComplementaryFuser::new(config.alpha),
            report: None,
            #[cfg(feature = "debug")]
            last_delta: TiltDelta::zero(),
        })
    }

    /// Process one tick of the pipeline. The host calls this once per sample
    /// interval; `None` means the source had no data and the tick is a no-op.
    ///
    pub fn process_tick(&mut self, sample: Option<Sample>) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Finished;
        }
        self.ticks += 1;

        let sample = match sample {
            Some(sample) => sample,
            None => {
                self.skipped += 1;
                return TickOutcome::Skipped(SkipReason::MissingSample);
            }
        };

        let accel = match tilt_from_accel(&sample.accel) {
            Ok(estimate) => estimate,
            Err(_) => {
                // The angular rate reading is still fine, keep integrating so
                // the gyro channel doesn't miss the rotation; only the accel
                // and fused channels hold their previous values.
                self.gyro.step(&sample.gyro, self.dt);
                self.skipped += 1;
                log::warn!("Dropping tick {}: acceleration vector has zero length", self.ticks);
                return TickOutcome::Skipped(SkipReason::DegenerateSample);
            }
        };

        let delta = self.gyro.step(&sample.gyro, self.dt);
        let fused = self.fuser.step(&accel, &delta);

        cfg_if! { if #[cfg(feature = "debug")] {
            self.last_delta = delta;
        }}

        let report = TiltReport {
            accel,
            gyro: self.gyro.tilt,
            fused,
        };
        self.report = Some(report);

        cfg_if! { if #[cfg(feature = "csv")] {
            println!("{},{},{}", report.accel.angle, report.gyro.angle, report.fused.angle);
        }}

        if self.is_finished() {
            log::debug!("Tilt session finished after {} ticks ({} skipped)", self.ticks, self.skipped);
        }

        TickOutcome::Published(report)
    }

    /// Pull one reading from the given source and process it.
    ///
    pub fn poll<S: SampleSource>(&mut self, source: &mut S) -> TickOutcome {
        self.process_tick(source.read())
    }

    /// The estimates from the most recent tick that produced data.
    ///
    pub fn last_report(&self) -> Option<&TiltReport> {
        self.report.as_ref()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// True once the tick budget is spent. Terminal: every further
    /// `process_tick` call answers `Finished` without doing anything.
    ///
    pub fn is_finished(&self) -> bool {
        match self.max_ticks {
            Some(max) => self.ticks >= max,
            None => false,
        }
    }
}
