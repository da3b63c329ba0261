//! Fixed design constants shared by the equation registry and the facades.
//!
//! Every equation coefficient lives next to its formula in `registry`; the
//! values here are the ones that cut across equations.

// -- Physical constants --

/// Gravitational acceleration [m/s²], as used in the published fits.
pub const GRAVITY: f64 = 9.81;

/// Cubic metres per million cubic metres, for equations fitted on V/10⁶.
pub const MEGA: f64 = 1.0e6;

/// Seconds per hour, for time-to-failure equations fitted in seconds.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// -- Input defaulting --

/// Average embankment width per metre of dam height, from 2.6:1 side slopes.
pub const WIDTH_TO_HEIGHT_RATIO: f64 = 2.6;

// -- Confidence bounds --

/// One-sided 95% standard normal quantile.
pub const Z_95_ONE_SIDED: f64 = 1.645;

// -- Volume sweep --

/// First volume multiplier of a sweep.
pub const SWEEP_START: f64 = 0.1;

/// Geometric growth of the volume multiplier between sweep points.
pub const SWEEP_GROWTH: f64 = 1.8;

/// Exclusive upper limit of the volume multiplier.
pub const SWEEP_END: f64 = 10.0;

// -- Units --

/// Peak flow unit.
pub const UNITS_PEAK_FLOW: &str = "m³/s";

/// Time to failure unit.
pub const UNITS_TIME_TO_FAILURE: &str = "h";

/// Breach width unit.
pub const UNITS_BREACH_WIDTH: &str = "m";
