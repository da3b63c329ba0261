//! Dam failure input record and its defaulting rules.
//!
//! `DamFailureInput` can only be obtained through [`DamFailureInputBuilder::build`],
//! which validates the numeric fields and resolves the optional ones exactly
//! once. Formulas therefore never see a missing, non-finite or non-positive
//! dimension.
//!
//! Defaulting rules:
//! - breach depth H_b defaults to the height of water H_w
//! - dam height H_d defaults to H_w
//! - average width W_avg defaults to the resolved H_d × 2.6

use std::fmt;
use std::str::FromStr;

use crate::constants::WIDTH_TO_HEIGHT_RATIO;
use crate::error::{BreachError, Result};

// -- Categorical descriptors --

/// Erosion resistance class of the embankment material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Erodibility {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FailureMode {
    #[default]
    Overtopping,
    Piping,
}

/// Embankment construction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DamType {
    #[default]
    HomogeneousFill,
    CoreWall,
}

impl Erodibility {
    pub const TAGS: &'static [&'static str] = &["low", "medium", "high"];

    pub fn as_str(self) -> &'static str {
        match self {
            Erodibility::Low => "low",
            Erodibility::Medium => "medium",
            Erodibility::High => "high",
        }
    }
}

impl FailureMode {
    pub const TAGS: &'static [&'static str] = &["overtopping", "piping"];

    pub fn as_str(self) -> &'static str {
        match self {
            FailureMode::Overtopping => "overtopping",
            FailureMode::Piping => "piping",
        }
    }
}

impl DamType {
    pub const TAGS: &'static [&'static str] = &["homogeneous-fill", "core-wall"];

    pub fn as_str(self) -> &'static str {
        match self {
            DamType::HomogeneousFill => "homogeneous-fill",
            DamType::CoreWall => "core-wall",
        }
    }
}

impl FromStr for Erodibility {
    type Err = BreachError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Erodibility::Low),
            "medium" => Ok(Erodibility::Medium),
            "high" => Ok(Erodibility::High),
            _ => Err(unknown("erodibility", s, Self::TAGS)),
        }
    }
}

impl FromStr for FailureMode {
    type Err = BreachError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overtopping" => Ok(FailureMode::Overtopping),
            "piping" => Ok(FailureMode::Piping),
            _ => Err(unknown("failure mode", s, Self::TAGS)),
        }
    }
}

impl FromStr for DamType {
    type Err = BreachError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "homogenous-fill" is the tag older front ends submit.
            "homogeneous-fill" | "homogenous-fill" => Ok(DamType::HomogeneousFill),
            "core-wall" => Ok(DamType::CoreWall),
            _ => Err(unknown("dam type", s, Self::TAGS)),
        }
    }
}

fn unknown(kind: &'static str, value: &str, expected: &'static [&'static str]) -> BreachError {
    BreachError::UnknownCategory {
        kind,
        value: value.to_string(),
        expected,
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_via_as_str!(Erodibility, FailureMode, DamType);

// -- Resolved input --

/// Fully resolved dam failure description.
///
/// - `h_w`: height of water above the breach invert [m]
/// - `v_w`: live storage volume above the breach invert [m³]
/// - `h_b`: breach depth from crest to breach invert [m]
/// - `h_d`: dam height from foundation to crest [m]
/// - `w_avg`: average embankment width, parallel to flow [m]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DamFailureInput {
    pub(crate) h_w: f64,
    pub(crate) v_w: f64,
    pub(crate) h_b: f64,
    pub(crate) h_d: f64,
    pub(crate) w_avg: f64,
    pub(crate) erodibility: Erodibility,
    pub(crate) failure_mode: FailureMode,
    pub(crate) dam_type: DamType,
}

impl DamFailureInput {
    /// Start a builder from the two mandatory fields.
    pub fn builder(height_of_water: f64, volume_of_water: f64) -> DamFailureInputBuilder {
        DamFailureInputBuilder {
            height_of_water,
            volume_of_water,
            ..DamFailureInputBuilder::default()
        }
    }

    /// Validated input with every optional field defaulted.
    pub fn new(height_of_water: f64, volume_of_water: f64) -> Result<Self> {
        Self::builder(height_of_water, volume_of_water).build()
    }

    /// Copy of this input with a different stored volume.
    pub fn with_volume_of_water(&self, volume_of_water: f64) -> Result<Self> {
        Ok(Self {
            v_w: require_positive("volume_of_water", volume_of_water)?,
            ..*self
        })
    }

    pub fn height_of_water(&self) -> f64 {
        self.h_w
    }

    pub fn volume_of_water(&self) -> f64 {
        self.v_w
    }

    pub fn breach_depth(&self) -> f64 {
        self.h_b
    }

    pub fn dam_height(&self) -> f64 {
        self.h_d
    }

    pub fn average_width(&self) -> f64 {
        self.w_avg
    }

    pub fn erodibility(&self) -> Erodibility {
        self.erodibility
    }

    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    pub fn dam_type(&self) -> DamType {
        self.dam_type
    }
}

/// Collects raw inputs; optional dimensions stay `None` until `build`.
#[derive(Debug, Clone, Default)]
pub struct DamFailureInputBuilder {
    height_of_water: f64,
    volume_of_water: f64,
    breach_depth: Option<f64>,
    dam_height: Option<f64>,
    average_width: Option<f64>,
    erodibility: Erodibility,
    failure_mode: FailureMode,
    dam_type: DamType,
}

impl DamFailureInputBuilder {
    pub fn breach_depth(mut self, value: impl Into<Option<f64>>) -> Self {
        self.breach_depth = value.into();
        self
    }

    pub fn dam_height(mut self, value: impl Into<Option<f64>>) -> Self {
        self.dam_height = value.into();
        self
    }

    pub fn average_width(mut self, value: impl Into<Option<f64>>) -> Self {
        self.average_width = value.into();
        self
    }

    pub fn erodibility(mut self, erodibility: Erodibility) -> Self {
        self.erodibility = erodibility;
        self
    }

    pub fn failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    pub fn dam_type(mut self, dam_type: DamType) -> Self {
        self.dam_type = dam_type;
        self
    }

    /// Validate and resolve defaults.
    ///
    /// Fails with `InvalidInput` if the height or volume of water, or any
    /// explicitly supplied optional dimension, is non-finite or non-positive.
    pub fn build(self) -> Result<DamFailureInput> {
        let h_w = require_positive("height_of_water", self.height_of_water)?;
        let v_w = require_positive("volume_of_water", self.volume_of_water)?;

        let h_b = optional_positive("breach_depth", self.breach_depth)?.unwrap_or(h_w);
        let h_d = optional_positive("dam_height", self.dam_height)?.unwrap_or(h_w);
        let w_avg = optional_positive("average_width", self.average_width)?
            .unwrap_or(h_d * WIDTH_TO_HEIGHT_RATIO);

        Ok(DamFailureInput {
            h_w,
            v_w,
            h_b,
            h_d,
            w_avg,
            erodibility: self.erodibility,
            failure_mode: self.failure_mode,
            dam_type: self.dam_type,
        })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BreachError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(BreachError::InvalidInput {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

fn optional_positive(field: &'static str, value: Option<f64>) -> Result<Option<f64>> {
    value.map(|v| require_positive(field, v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Defaulting --

    #[test]
    fn defaults_follow_height_of_water() {
        let dam = DamFailureInput::new(5.0, 30_000.0).unwrap();
        assert_eq!(dam.breach_depth(), 5.0);
        assert_eq!(dam.dam_height(), 5.0);
        assert_eq!(dam.average_width(), 13.0);
        assert_eq!(dam.erodibility(), Erodibility::Medium);
        assert_eq!(dam.failure_mode(), FailureMode::Overtopping);
        assert_eq!(dam.dam_type(), DamType::HomogeneousFill);
    }

    #[test]
    fn average_width_uses_resolved_dam_height() {
        let dam = DamFailureInput::builder(5.0, 30_000.0)
            .dam_height(10.0)
            .build()
            .unwrap();
        assert_eq!(dam.average_width(), 26.0);
        assert_eq!(dam.breach_depth(), 5.0);
    }

    #[test]
    fn explicit_values_are_kept() {
        let dam = DamFailureInput::builder(5.0, 30_000.0)
            .breach_depth(4.0)
            .dam_height(6.0)
            .average_width(20.0)
            .erodibility(Erodibility::High)
            .failure_mode(FailureMode::Piping)
            .dam_type(DamType::CoreWall)
            .build()
            .unwrap();
        assert_eq!(dam.breach_depth(), 4.0);
        assert_eq!(dam.dam_height(), 6.0);
        assert_eq!(dam.average_width(), 20.0);
        assert_eq!(dam.erodibility(), Erodibility::High);
        assert_eq!(dam.failure_mode(), FailureMode::Piping);
        assert_eq!(dam.dam_type(), DamType::CoreWall);
    }

    #[test]
    fn explicit_default_equals_omitted() {
        let omitted = DamFailureInput::new(5.0, 30_000.0).unwrap();
        let explicit = DamFailureInput::builder(5.0, 30_000.0)
            .breach_depth(5.0)
            .dam_height(5.0)
            .average_width(None)
            .build()
            .unwrap();
        assert_eq!(omitted, explicit);
    }

    // -- Validation --

    #[test]
    fn rejects_non_positive_height() {
        for h in [0.0, -1.0] {
            let err = DamFailureInput::new(h, 30_000.0).unwrap_err();
            assert!(matches!(
                err,
                BreachError::InvalidInput {
                    field: "height_of_water",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_non_finite_volume() {
        for v in [f64::NAN, f64::INFINITY] {
            let err = DamFailureInput::new(5.0, v).unwrap_err();
            assert!(matches!(
                err,
                BreachError::InvalidInput {
                    field: "volume_of_water",
                    reason: "must be finite",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_explicit_non_positive_optional() {
        let err = DamFailureInput::builder(5.0, 30_000.0)
            .breach_depth(-2.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BreachError::InvalidInput {
                field: "breach_depth",
                ..
            }
        ));
    }

    #[test]
    fn with_volume_validates() {
        let dam = DamFailureInput::new(5.0, 30_000.0).unwrap();
        assert_eq!(dam.with_volume_of_water(1000.0).unwrap().volume_of_water(), 1000.0);
        assert!(dam.with_volume_of_water(0.0).is_err());
    }

    // -- Categorical parsing --

    #[test]
    fn categories_parse_exact_tags() {
        assert_eq!("high".parse::<Erodibility>(), Ok(Erodibility::High));
        assert_eq!("piping".parse::<FailureMode>(), Ok(FailureMode::Piping));
        assert_eq!("core-wall".parse::<DamType>(), Ok(DamType::CoreWall));
        assert_eq!(
            "homogenous-fill".parse::<DamType>(),
            Ok(DamType::HomogeneousFill)
        );
        assert!("High".parse::<Erodibility>().is_err());
        assert!(" low".parse::<Erodibility>().is_err());
    }

    #[test]
    fn display_matches_tags() {
        assert_eq!(DamType::HomogeneousFill.to_string(), "homogeneous-fill");
        assert_eq!(FailureMode::Overtopping.to_string(), "overtopping");
        assert_eq!(Erodibility::Low.to_string(), "low");
    }
}
