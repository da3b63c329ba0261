use approx::assert_relative_eq;
use breach_core::registry;
use breach_core::{
    AnyEquation, BoundSide, BreachEquation, BreachError, BreachWidthEquation, Calibration,
    DamFailureInput, DamType, Erodibility, FailureMode, PeakFlowEquation, Quantity,
    TimeToFailureEquation,
};

const CALIBRATIONS: [Calibration; 2] = [Calibration::Original, Calibration::Recalibrated];

fn scenario_dam() -> DamFailureInput {
    DamFailureInput::builder(5.0, 30_000.0)
        .erodibility(Erodibility::Medium)
        .failure_mode(FailureMode::Overtopping)
        .dam_type(DamType::HomogeneousFill)
        .build()
        .unwrap()
}

fn assorted_dams() -> Vec<DamFailureInput> {
    vec![
        scenario_dam(),
        DamFailureInput::builder(12.0, 2.5e6)
            .breach_depth(10.0)
            .dam_height(14.0)
            .erodibility(Erodibility::High)
            .failure_mode(FailureMode::Piping)
            .dam_type(DamType::CoreWall)
            .build()
            .unwrap(),
        DamFailureInput::builder(2.0, 800.0)
            .erodibility(Erodibility::Low)
            .build()
            .unwrap(),
    ]
}

fn all_equations() -> Vec<AnyEquation> {
    registry::all()
        .map(|def| AnyEquation::from_identifier(&def.identifier()).unwrap())
        .collect()
}

// --- Scenario 1 & 2: Xu and Zhang (2009) peak flow ---

#[test]
fn xu_zhang_peak_flow_original() {
    let dam = scenario_dam();
    assert_eq!(dam.breach_depth(), 5.0);
    assert_eq!(dam.dam_height(), 5.0);
    assert_eq!(dam.average_width(), 13.0);

    let eq = PeakFlowEquation::new("Xu and Zhang (2009)").unwrap();
    let q = eq.predict(&dam, Calibration::Original);
    let expected = 1.0 * 1.56 * 0.024 * 9.81f64.sqrt() * 5f64.powf(1.28) * 30_000f64.powf(0.41);
    assert_relative_eq!(q, expected, max_relative = 1e-12);
}

#[test]
fn xu_zhang_peak_flow_recalibrated() {
    let dam = scenario_dam();
    let eq = PeakFlowEquation::new("Xu and Zhang (2009)").unwrap();
    let original = eq.predict(&dam, Calibration::Original);
    let recal = eq.predict(&dam, Calibration::Recalibrated);
    let expected = 0.012 * 0.92 * 1.0 * 9.81f64.sqrt() * 5f64.powf(1.11) * 30_000f64.powf(0.46);
    assert_relative_eq!(recal, expected, max_relative = 1e-12);
    assert_ne!(original, recal);
}

// --- Scenario 3: Froehlich (1995a) bound ratios ---

#[test]
fn froehlich_1995a_bound_ratios() {
    let eq = PeakFlowEquation::new("Froehlich (1995a)").unwrap();
    let upper = eq.bound_ratio(Calibration::Original, BoundSide::Upper);
    let lower = eq.bound_ratio(Calibration::Original, BoundSide::Lower);
    assert_relative_eq!(upper, 10f64.powf(-0.2558 + 1.645 * 0.4828), max_relative = 1e-12);
    assert_relative_eq!(lower, 10f64.powf(-0.2558 - 1.645 * 0.4828), max_relative = 1e-12);
    assert!(upper > 1.0);
    assert!(lower < 1.0);
    assert_eq!(eq.upper_bound_ratio(Calibration::Original), upper);
    assert_eq!(eq.lower_bound_ratio(Calibration::Original), lower);
}

#[test]
fn froehlich_1995a_recalibrated_bound_ratios() {
    let eq = PeakFlowEquation::new("Fr95").unwrap();
    let upper = eq.upper_bound_ratio(Calibration::Recalibrated);
    assert_relative_eq!(upper, 10f64.powf(0.0831 + 1.645 * 0.438), max_relative = 1e-12);
}

// --- Scenario 4: breach width ---

#[test]
fn breach_width_not_found_for_every_family() {
    for def in registry::all() {
        let err = BreachWidthEquation::new(def.family).unwrap_err();
        assert!(matches!(
            err,
            BreachError::NotFound {
                quantity: Quantity::BreachWidth,
                ..
            }
        ));
    }
}

// --- Scenario 5: invalid input never reaches a formula ---

#[test]
fn non_positive_height_is_invalid_input() {
    for h in [0.0, -5.0, f64::NAN] {
        let err = DamFailureInput::new(h, 30_000.0).unwrap_err();
        assert!(matches!(err, BreachError::InvalidInput { .. }), "{h}");
    }
}

// --- Properties ---

#[test]
fn missing_quantity_lookup() {
    for family in ["We96", "Ho14", "Az15", "Fr16", "Ya25"] {
        assert!(TimeToFailureEquation::new(family).unwrap_err().is_not_found());
        assert!(PeakFlowEquation::new(family).is_ok());
    }
    assert!(PeakFlowEquation::new("Fr08").unwrap_err().is_not_found());
}

#[test]
fn determinism() {
    for eq in all_equations() {
        for dam in assorted_dams() {
            for cal in CALIBRATIONS {
                assert_eq!(eq.predict(&dam, cal), eq.predict(&dam, cal));
            }
        }
    }
}

#[test]
fn bound_ordering() {
    for eq in all_equations() {
        for cal in CALIBRATIONS {
            let upper = eq.bound_ratio(cal, BoundSide::Upper);
            let lower = eq.bound_ratio(cal, BoundSide::Lower);
            assert!(upper >= lower, "{}", eq.info().identifier);
            for dam in assorted_dams() {
                let p = eq.prediction(&dam, cal);
                assert!(p.is_finite());
                assert!(p.upper >= p.estimate && p.estimate >= p.lower);
            }
        }
    }
}

#[test]
fn calibration_selects_formula_and_stats_together() {
    for eq in all_equations() {
        let def = eq.definition();
        for dam in assorted_dams() {
            assert_eq!(eq.predict(&dam, Calibration::Original), (def.predict_original)(&dam));
            assert_eq!(
                eq.predict(&dam, Calibration::Recalibrated),
                (def.predict_recalibrated)(&dam)
            );
        }
        assert_eq!(
            eq.upper_bound_ratio(Calibration::Original),
            def.original.bound_ratio(BoundSide::Upper)
        );
        assert_eq!(
            eq.upper_bound_ratio(Calibration::Recalibrated),
            def.recalibrated.bound_ratio(BoundSide::Upper)
        );
    }
}

#[test]
fn breach_depth_defaulting_is_idempotent() {
    let omitted = DamFailureInput::new(7.5, 4.0e5).unwrap();
    let explicit = DamFailureInput::builder(7.5, 4.0e5)
        .breach_depth(7.5)
        .build()
        .unwrap();
    for eq in all_equations() {
        for cal in CALIBRATIONS {
            assert_eq!(eq.predict(&omitted, cal), eq.predict(&explicit, cal));
        }
    }
}

#[test]
fn facade_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PeakFlowEquation>();
    assert_send_sync::<TimeToFailureEquation>();
    assert_send_sync::<AnyEquation>();
    assert_send_sync::<DamFailureInput>();
}

#[test]
fn concurrent_predictions_agree() {
    let eq = PeakFlowEquation::new("Zh20").unwrap();
    let dam = scenario_dam();
    let expected = eq.predict(&dam, Calibration::Recalibrated);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || eq.predict(&dam, Calibration::Recalibrated)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
