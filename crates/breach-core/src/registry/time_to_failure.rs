//! Time to failure equations [h].

use super::EquationDefinition;
use crate::bounds::ErrorStats;
use crate::constants::{GRAVITY, MEGA, SECONDS_PER_HOUR};
use crate::input::{DamFailureInput, DamType, Erodibility};
use crate::quantity::Quantity;

pub static EQUATIONS: &[EquationDefinition] = &[
    EquationDefinition {
        family: "Fr95",
        quantity: Quantity::TimeToFailure,
        display_name: "Froehlich (1995b)",
        description: "Power-law regression on reservoir volume and breach depth, fitted \
            alongside Froehlich's 1995 peak flow equation.",
        original: ErrorStats::new(-0.0997, 0.3562),
        recalibrated: ErrorStats::new(-0.0079, 0.3235),
        predict_original: froehlich_1995,
        predict_recalibrated: froehlich_1995_recalibrated,
    },
    EquationDefinition {
        family: "Fr08",
        quantity: Quantity::TimeToFailure,
        display_name: "Froehlich (2008)",
        description: "Dimensionally homogeneous form scaling with the square root of \
            volume over breach depth squared, originally expressed in seconds.",
        original: ErrorStats::new(-0.0684, 0.341),
        recalibrated: ErrorStats::new(-0.0185, 0.3273),
        predict_original: froehlich_2008,
        predict_recalibrated: froehlich_2008_recalibrated,
    },
    EquationDefinition {
        family: "Xu09",
        quantity: Quantity::TimeToFailure,
        display_name: "Xu and Zhang (2009)",
        description: "Uses dam height, volume and height of water with an erodibility \
            factor: highly erodible dams fail faster, low erodibility dams slower.",
        original: ErrorStats::new(0.1456, 0.3495),
        recalibrated: ErrorStats::new(0.0192, 0.3194),
        predict_original: xu_zhang_2009,
        predict_recalibrated: xu_zhang_2009_recalibrated,
    },
    EquationDefinition {
        family: "Zh20",
        quantity: Quantity::TimeToFailure,
        display_name: "Zhong et al. (2020)",
        description: "Separate coefficient sets for homogeneous-fill and core-wall dams. \
            The original fit has a very wide error spread, so its bounds are loose.",
        original: ErrorStats::new(0.1088, 1.8251),
        recalibrated: ErrorStats::new(0.0232, 0.3075),
        predict_original: zhong_2020,
        predict_recalibrated: zhong_2020_recalibrated,
    },
];

// -- Froehlich (1995b) --

fn froehlich_1995(dam: &DamFailureInput) -> f64 {
    3.84 * (dam.v_w / MEGA).powf(0.53) * dam.h_b.powf(-0.9)
}

fn froehlich_1995_recalibrated(dam: &DamFailureInput) -> f64 {
    0.026 * dam.v_w.powf(0.37) * dam.h_b.powf(-0.78)
}

// -- Froehlich (2008) --

fn froehlich_2008(dam: &DamFailureInput) -> f64 {
    63.2 * (dam.v_w / GRAVITY / dam.h_b.powi(2)).powf(0.5) / SECONDS_PER_HOUR
}

fn froehlich_2008_recalibrated(dam: &DamFailureInput) -> f64 {
    0.045 * GRAVITY.powf(-0.5) * dam.v_w.powf(0.39) * dam.h_b.powf(-0.68)
}

// -- Xu and Zhang (2009) --

fn xu_zhang_2009(dam: &DamFailureInput) -> f64 {
    let k_e = match dam.erodibility {
        Erodibility::High => 0.58,
        Erodibility::Medium => 1.0,
        Erodibility::Low => 3.11,
    };
    0.01122 * k_e * dam.h_d.powf(0.654) * dam.v_w.powf(0.415) * dam.h_w.powf(-1.246)
}

fn xu_zhang_2009_recalibrated(dam: &DamFailureInput) -> f64 {
    let k_e = match dam.erodibility {
        Erodibility::High => 0.78,
        Erodibility::Medium => 1.0,
        Erodibility::Low => 3.3,
    };
    0.043 * k_e * dam.h_d.powf(0.35) * dam.v_w.powf(0.29) * dam.h_w.powf(-0.86)
}

// -- Zhong et al. (2020) --

fn zhong_2020(dam: &DamFailureInput) -> f64 {
    let c = match dam.dam_type {
        DamType::CoreWall => [1.52, -11.36, -0.43, (-1.57f64).exp()],
        DamType::HomogeneousFill => [0.56, -0.85, -0.32, (-0.2f64).exp()],
    };
    (dam.v_w.powf(1.0 / 3.0) / dam.h_w).powf(c[0])
        * (dam.h_w / dam.h_b).powf(c[1])
        * dam.h_d.powf(c[2])
        * c[3]
}

fn zhong_2020_recalibrated(dam: &DamFailureInput) -> f64 {
    let c = match dam.dam_type {
        DamType::CoreWall => [0.0086, 0.45, -0.11, -1.24, 0.47],
        DamType::HomogeneousFill => [0.025, 0.36, -0.22, 0.4, 0.4],
    };
    c[0] * dam.v_w.powf(c[1]) * dam.h_w.powf(c[2]) * dam.h_b.powf(c[3]) * dam.h_d.powf(c[4])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_dam() -> DamFailureInput {
        DamFailureInput::new(5.0, 30_000.0).unwrap()
    }

    // --- Known values, H_w = 5 m, V_w = 30 000 m³, defaults ---

    #[test]
    fn froehlich_1995_known_values() {
        assert_relative_eq!(froehlich_1995(&default_dam()), 0.1406476517097105, max_relative = 1e-10);
        assert_relative_eq!(
            froehlich_1995_recalibrated(&default_dam()),
            0.3359785943900251,
            max_relative = 1e-10
        );
    }

    #[test]
    fn froehlich_2008_known_values() {
        assert_relative_eq!(froehlich_2008(&default_dam()), 0.19416488811172067, max_relative = 1e-10);
        assert_relative_eq!(
            froehlich_2008_recalibrated(&default_dam()),
            0.268012899061144,
            max_relative = 1e-10
        );
    }

    #[test]
    fn xu_zhang_2009_known_values() {
        assert_relative_eq!(xu_zhang_2009(&default_dam()), 0.31203832290834155, max_relative = 1e-10);
        assert_relative_eq!(
            xu_zhang_2009_recalibrated(&default_dam()),
            0.3761481387891218,
            max_relative = 1e-10
        );
    }

    #[test]
    fn zhong_2020_known_values() {
        assert_relative_eq!(zhong_2020(&default_dam()), 1.3607451675944606, max_relative = 1e-10);
        assert_relative_eq!(
            zhong_2020_recalibrated(&default_dam()),
            2.6007958463234493,
            max_relative = 1e-10
        );
    }

    // --- Branch factors ---

    #[test]
    fn xu_zhang_2009_low_erodibility_is_slower() {
        let low = DamFailureInput::builder(5.0, 30_000.0)
            .erodibility(Erodibility::Low)
            .build()
            .unwrap();
        let high = DamFailureInput::builder(5.0, 30_000.0)
            .erodibility(Erodibility::High)
            .build()
            .unwrap();
        let medium = xu_zhang_2009(&default_dam());
        assert_relative_eq!(xu_zhang_2009(&low) / medium, 3.11, epsilon = 1e-12);
        assert_relative_eq!(xu_zhang_2009(&high) / medium, 0.58, epsilon = 1e-12);

        let medium = xu_zhang_2009_recalibrated(&default_dam());
        assert_relative_eq!(xu_zhang_2009_recalibrated(&low) / medium, 3.3, epsilon = 1e-12);
        assert_relative_eq!(xu_zhang_2009_recalibrated(&high) / medium, 0.78, epsilon = 1e-12);
    }

    #[test]
    fn zhong_2020_core_wall_uses_exponential_constant() {
        // With H_b = H_w the depth ratio term vanishes.
        let core = DamFailureInput::builder(5.0, 30_000.0)
            .dam_type(DamType::CoreWall)
            .build()
            .unwrap();
        let expected =
            (30_000f64.powf(1.0 / 3.0) / 5.0).powf(1.52) * 5f64.powf(-0.43) * (-1.57f64).exp();
        assert_relative_eq!(zhong_2020(&core), expected, max_relative = 1e-12);
    }

    #[test]
    fn froehlich_equations_ignore_water_height() {
        let a = DamFailureInput::builder(5.0, 30_000.0).breach_depth(4.0).build().unwrap();
        let b = DamFailureInput::builder(8.0, 30_000.0).breach_depth(4.0).build().unwrap();
        assert_eq!(froehlich_1995(&a), froehlich_1995(&b));
        assert_eq!(froehlich_2008(&a), froehlich_2008(&b));
    }

    #[test]
    fn all_positive_and_finite() {
        let dam = DamFailureInput::builder(30.0, 5.0e7)
            .breach_depth(25.0)
            .dam_height(35.0)
            .build()
            .unwrap();
        for def in EQUATIONS {
            for t in [(def.predict_original)(&dam), (def.predict_recalibrated)(&dam)] {
                assert!(t.is_finite() && t > 0.0, "{} gave {}", def.family, t);
            }
        }
    }
}
