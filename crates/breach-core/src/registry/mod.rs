//! Equation registry: a fixed table of empirical breach equations.
//!
//! Each entry pairs a published ("original") and a recalibrated formula with
//! the error statistics of each fit. The table is `'static` and never mutated.
//!
//! Identifiers have the form `<family>-<suffix>`, e.g. `Xu09-Q` for the
//! Xu and Zhang (2009) peak flow equation. Families need not define every
//! quantity; a missing entry is reported as [`BreachError::NotFound`].

pub mod peak_flow;
pub mod time_to_failure;

use tracing::debug;

use crate::bounds::{BoundSide, Calibration, ErrorStats};
use crate::error::{BreachError, Result};
use crate::input::DamFailureInput;
use crate::quantity::Quantity;

/// Closed-form prediction in the unit of the definition's quantity.
pub type Formula = fn(&DamFailureInput) -> f64;

#[derive(Debug, Clone, Copy)]
pub struct EquationDefinition {
    /// Short family key, e.g. `Fr95`. Shared across quantities.
    pub family: &'static str,
    pub quantity: Quantity,
    pub display_name: &'static str,
    pub description: &'static str,
    pub original: ErrorStats,
    pub recalibrated: ErrorStats,
    pub predict_original: Formula,
    pub predict_recalibrated: Formula,
}

/// One coefficient set together with the statistics of that same fit.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub calibration: Calibration,
    pub stats: ErrorStats,
    formula: Formula,
}

impl Variant {
    pub fn predict(&self, dam: &DamFailureInput) -> f64 {
        (self.formula)(dam)
    }

    pub fn bound_ratio(&self, side: BoundSide) -> f64 {
        self.stats.bound_ratio(side)
    }
}

impl EquationDefinition {
    /// Registry key, e.g. `Xu09-Q`.
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.family, self.quantity.suffix())
    }

    /// Select formula and statistics together so they can never be mixed.
    pub fn variant(&self, calibration: Calibration) -> Variant {
        let (stats, formula) = match calibration {
            Calibration::Original => (self.original, self.predict_original),
            Calibration::Recalibrated => (self.recalibrated, self.predict_recalibrated),
        };
        Variant {
            calibration,
            stats,
            formula,
        }
    }

    pub fn stats(&self, calibration: Calibration) -> ErrorStats {
        self.variant(calibration).stats
    }

    pub fn predict(&self, dam: &DamFailureInput, calibration: Calibration) -> f64 {
        self.variant(calibration).predict(dam)
    }

    /// `true` if `name` is this entry's family key or display name.
    pub fn matches(&self, name: &str) -> bool {
        self.family == name || self.display_name == name
    }

    pub fn info(&self) -> EquationInfo {
        EquationInfo {
            identifier: self.identifier(),
            family: self.family,
            quantity: self.quantity,
            display_name: self.display_name,
            description: self.description,
            units: self.quantity.units(),
            original: self.original,
            recalibrated: self.recalibrated,
        }
    }
}

/// Read-only projection of a definition for equation pickers and listings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquationInfo {
    pub identifier: String,
    pub family: &'static str,
    pub quantity: Quantity,
    pub display_name: &'static str,
    pub description: &'static str,
    pub units: &'static str,
    pub original: ErrorStats,
    pub recalibrated: ErrorStats,
}

/// All definitions for one quantity, in presentation order.
pub fn catalog(quantity: Quantity) -> &'static [EquationDefinition] {
    match quantity {
        Quantity::PeakFlow => peak_flow::EQUATIONS,
        Quantity::TimeToFailure => time_to_failure::EQUATIONS,
        // No breach width equation has been calibrated yet.
        Quantity::BreachWidth => &[],
    }
}

/// Every registered definition across all quantities.
pub fn all() -> impl Iterator<Item = &'static EquationDefinition> {
    Quantity::ALL.into_iter().flat_map(catalog)
}

/// Find the `quantity` entry for a family key or display name.
pub fn find(name: &str, quantity: Quantity) -> Result<&'static EquationDefinition> {
    catalog(quantity)
        .iter()
        .find(|def| def.matches(name))
        .ok_or_else(|| {
            debug!(name, %quantity, "no equation registered");
            BreachError::not_found(name, quantity)
        })
}

/// Look up a definition by its full identifier, e.g. `Fr95-T`.
pub fn lookup(identifier: &str) -> Result<&'static EquationDefinition> {
    let (family, quantity) = identifier
        .rsplit_once('-')
        .and_then(|(family, suffix)| Quantity::from_suffix(suffix).map(|q| (family, q)))
        .filter(|(family, _)| !family.is_empty())
        .ok_or_else(|| BreachError::MalformedIdentifier(identifier.to_string()))?;

    catalog(quantity)
        .iter()
        .find(|def| def.family == family)
        .ok_or_else(|| {
            debug!(identifier, "no equation registered");
            BreachError::not_found(family, quantity)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_by_identifier() {
        let def = lookup("Xu09-Q").unwrap();
        assert_eq!(def.display_name, "Xu and Zhang (2009)");
        assert_eq!(def.quantity, Quantity::PeakFlow);
        assert_eq!(def.identifier(), "Xu09-Q");

        let def = lookup("Fr95-T").unwrap();
        assert_eq!(def.display_name, "Froehlich (1995b)");
    }

    #[test]
    fn lookup_missing_quantity_is_not_found() {
        // Webby (1996) only defines peak flow.
        let err = lookup("We96-T").unwrap_err();
        assert_eq!(err, BreachError::not_found("We96", Quantity::TimeToFailure));
        assert!(lookup("Fr95-B").unwrap_err().is_not_found());
        assert!(lookup("Nope-Q").unwrap_err().is_not_found());
    }

    #[test]
    fn lookup_malformed_identifier() {
        for id in ["Xu09", "Xu09-X", "-Q", ""] {
            assert!(
                matches!(lookup(id), Err(BreachError::MalformedIdentifier(_))),
                "{id}"
            );
        }
    }

    #[test]
    fn find_by_family_or_display_name() {
        let by_key = find("Zh20", Quantity::TimeToFailure).unwrap();
        let by_name = find("Zhong et al. (2020)", Quantity::TimeToFailure).unwrap();
        assert_eq!(by_key.identifier(), by_name.identifier());
        assert!(find("zhong et al. (2020)", Quantity::TimeToFailure).is_err());
    }

    #[test]
    fn breach_width_has_no_entries() {
        assert!(catalog(Quantity::BreachWidth).is_empty());
        for def in all() {
            assert!(find(def.family, Quantity::BreachWidth).unwrap_err().is_not_found());
        }
    }

    #[test]
    fn identifiers_unique() {
        let ids: HashSet<String> = all().map(|d| d.identifier()).collect();
        assert_eq!(ids.len(), all().count());
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn display_names_unique_per_quantity() {
        for q in Quantity::ALL {
            let names: HashSet<&str> = catalog(q).iter().map(|d| d.display_name).collect();
            assert_eq!(names.len(), catalog(q).len());
        }
    }

    #[test]
    fn statistics_are_sane() {
        for def in all() {
            for stats in [def.original, def.recalibrated] {
                assert!(stats.mean.is_finite());
                assert!(stats.stdev > 0.0, "{}", def.identifier());
            }
        }
    }

    #[test]
    fn variant_keeps_formula_and_stats_together() {
        let def = lookup("Fr95-Q").unwrap();
        let dam = DamFailureInput::new(5.0, 30_000.0).unwrap();

        let original = def.variant(Calibration::Original);
        assert_eq!(original.stats, def.original);
        assert_eq!(original.predict(&dam), (def.predict_original)(&dam));

        let recal = def.variant(Calibration::Recalibrated);
        assert_eq!(recal.stats, def.recalibrated);
        assert_eq!(recal.predict(&dam), (def.predict_recalibrated)(&dam));
    }

    #[test]
    fn info_projection() {
        let info = lookup("Fr08-T").unwrap().info();
        assert_eq!(info.identifier, "Fr08-T");
        assert_eq!(info.units, "h");
        assert_eq!(info.display_name, "Froehlich (2008)");
    }
}
