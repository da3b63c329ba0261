//! Peak flow equations [m³/s].
//!
//! Original coefficients are the published ones; recalibrated coefficients and
//! all error statistics come from the Yassin et al. (2025) comparison.

use super::EquationDefinition;
use crate::bounds::ErrorStats;
use crate::constants::{GRAVITY, MEGA};
use crate::input::{DamFailureInput, DamType, Erodibility, FailureMode};
use crate::quantity::Quantity;

pub static EQUATIONS: &[EquationDefinition] = &[
    EquationDefinition {
        family: "Fr95",
        quantity: Quantity::PeakFlow,
        display_name: "Froehlich (1995a)",
        description: "An early equation that introduced multi-linear regression to this \
            problem, outperforming earlier methods which used only simple linear regression. \
            Prone to overestimating the peak flow.",
        original: ErrorStats::new(0.2558, 0.4828),
        recalibrated: ErrorStats::new(-0.0831, 0.438),
        predict_original: froehlich_1995,
        predict_recalibrated: froehlich_1995_recalibrated,
    },
    EquationDefinition {
        family: "We96",
        quantity: Quantity::PeakFlow,
        display_name: "Webby (1996)",
        description: "A simple, dimensionally homogeneous equation that uses only height \
            and volume of water, calibrated using simple linear regression. The form of \
            this equation became the basis for subsequent models.",
        original: ErrorStats::new(0.1738, 0.4483),
        recalibrated: ErrorStats::new(-0.0132, 0.438),
        predict_original: webby_1996,
        predict_recalibrated: webby_1996_recalibrated,
    },
    EquationDefinition {
        family: "Xu09",
        quantity: Quantity::PeakFlow,
        display_name: "Xu and Zhang (2009)",
        description: "A dimensionally homogeneous equation that includes discrete \
            variables as well as continuous ones, accounting for dam erodibility and \
            failure mode. One of the only equations that includes an indication of \
            erodibility, a key factor in accurately predicting the peak flow.",
        original: ErrorStats::new(0.2136, 0.4268),
        recalibrated: ErrorStats::new(-0.007, 0.3633),
        predict_original: xu_zhang_2009,
        predict_recalibrated: xu_zhang_2009_recalibrated,
    },
    EquationDefinition {
        family: "Ho14",
        quantity: Quantity::PeakFlow,
        display_name: "Hooshyaripor et al. (2014)",
        description: "A simple, dimensionally homogeneous equation that uses only height \
            and volume of water. Calibrated with synthetic data from a 3-dimensional \
            Gaussian copula, although Yassin et al. (2025) found the copula's effect on \
            performance to be negligible.",
        original: ErrorStats::new(-0.0551, 0.4381),
        recalibrated: ErrorStats::new(-0.0155, 0.4382),
        predict_original: hooshyaripor_2014,
        predict_recalibrated: hooshyaripor_2014_recalibrated,
    },
    EquationDefinition {
        family: "Az15",
        quantity: Quantity::PeakFlow,
        display_name: "Azimi et al. (2015)",
        description: "A simple, dimensionally homogeneous equation that uses only height \
            and volume of water, developed on a large dataset with cross-validation. \
            Yassin et al. (2025) found it among the most accurate models available, \
            though it can still produce large errors.",
        original: ErrorStats::new(0.1602, 0.4393),
        recalibrated: ErrorStats::new(-0.0132, 0.438),
        predict_original: azimi_2015,
        predict_recalibrated: azimi_2015_recalibrated,
    },
    EquationDefinition {
        family: "Fr16",
        quantity: Quantity::PeakFlow,
        display_name: "Froehlich (2016)",
        description: "Accounts for failure mode, breach depth and average embankment \
            width, and adds a height factor for dams taller than 6.1 m, making it the only \
            equation to treat smaller and larger dams differently. Yassin et al. (2025) \
            found none of these additions significantly improved performance.",
        original: ErrorStats::new(0.2234, 0.4517),
        recalibrated: ErrorStats::new(0.0318, 0.4274),
        predict_original: froehlich_2016,
        predict_recalibrated: froehlich_2016_recalibrated,
    },
    EquationDefinition {
        family: "Zh20",
        quantity: Quantity::PeakFlow,
        display_name: "Zhong et al. (2020)",
        description: "Calibrated separately for homogeneous-fill and core-wall dams to \
            account for their different properties, although this does not significantly \
            improve performance compared to simpler models (Yassin et al., 2025).",
        original: ErrorStats::new(0.0927, 0.4504),
        recalibrated: ErrorStats::new(0.0318, 0.4274),
        predict_original: zhong_2020,
        predict_recalibrated: zhong_2020_recalibrated,
    },
    EquationDefinition {
        family: "Ya25",
        quantity: Quantity::PeakFlow,
        display_name: "Yassin et al. (2025)",
        description: "Uses height and volume of water with a 'high erodibility' \
            adjustment factor. The most robust and accurate of the models, but still \
            prone to large errors in some cases.",
        original: ErrorStats::new(-0.0174, 0.3635),
        recalibrated: ErrorStats::new(-0.0174, 0.3635),
        predict_original: yassin_2025,
        predict_recalibrated: yassin_2025,
    },
];

// -- Froehlich (1995a) --

fn froehlich_1995(dam: &DamFailureInput) -> f64 {
    0.607 * dam.v_w.powf(0.295) * dam.h_w.powf(1.24)
}

fn froehlich_1995_recalibrated(dam: &DamFailureInput) -> f64 {
    0.04 * dam.v_w.powf(0.46) * dam.h_w.powf(1.11)
}

// -- Webby (1996) --

fn webby_1996(dam: &DamFailureInput) -> f64 {
    0.0443 * GRAVITY.sqrt() * dam.v_w.powf(0.365) * dam.h_w.powf(1.4)
}

fn webby_1996_recalibrated(dam: &DamFailureInput) -> f64 {
    0.015 * GRAVITY.sqrt() * dam.v_w.powf(0.46) * dam.h_w.powf(1.11)
}

// -- Xu and Zhang (2009) --

fn xu_zhang_2009(dam: &DamFailureInput) -> f64 {
    let k_e = match dam.erodibility {
        Erodibility::High => 1.51,
        Erodibility::Medium => 1.0,
        Erodibility::Low => 0.39,
    };
    let k_m = match dam.failure_mode {
        FailureMode::Overtopping => 1.56,
        FailureMode::Piping => 1.0,
    };
    k_e * k_m * 0.024 * GRAVITY.sqrt() * dam.h_w.powf(1.28) * dam.v_w.powf(0.41)
}

fn xu_zhang_2009_recalibrated(dam: &DamFailureInput) -> f64 {
    // Low and medium share a factor after recalibration.
    let k_e = match dam.erodibility {
        Erodibility::High => 3.8,
        Erodibility::Medium | Erodibility::Low => 1.0,
    };
    let k_m = match dam.failure_mode {
        FailureMode::Overtopping => 0.92,
        FailureMode::Piping => 1.0,
    };
    0.012 * k_m * k_e * GRAVITY.sqrt() * dam.h_w.powf(1.11) * dam.v_w.powf(0.46)
}

// -- Hooshyaripor et al. (2014) --

fn hooshyaripor_2014(dam: &DamFailureInput) -> f64 {
    0.0454 * dam.h_w.powf(1.156) * dam.v_w.powf(0.448)
}

fn hooshyaripor_2014_recalibrated(dam: &DamFailureInput) -> f64 {
    0.016 * GRAVITY.sqrt() * dam.v_w.powf(0.45) * dam.h_w.powf(1.14)
}

// -- Azimi et al. (2015) --

fn azimi_2015(dam: &DamFailureInput) -> f64 {
    16.553 * (GRAVITY * dam.v_w / MEGA).powf(0.5) * dam.h_w
}

fn azimi_2015_recalibrated(dam: &DamFailureInput) -> f64 {
    0.015 * GRAVITY.sqrt() * dam.v_w.powf(0.46) * dam.h_w.powf(1.11)
}

// -- Froehlich (2016) --

fn froehlich_2016(dam: &DamFailureInput) -> f64 {
    let k_m = match dam.failure_mode {
        FailureMode::Overtopping => 1.85,
        FailureMode::Piping => 1.0,
    };
    let k_h = if dam.h_w >= 6.1 {
        (dam.h_w / 6.1).powf(1.0 / 8.0)
    } else {
        1.0
    };
    0.0175 * k_m * k_h * (GRAVITY * dam.v_w * dam.h_w * dam.h_b.powi(2) / dam.w_avg).powf(0.5)
}

fn froehlich_2016_recalibrated(dam: &DamFailureInput) -> f64 {
    let k_m = match dam.failure_mode {
        FailureMode::Overtopping => 1.01,
        FailureMode::Piping => 1.0,
    };
    // Height factor reads H_w as calibrated, although H_b may have been intended.
    let k_h = if dam.h_w >= 4.6 {
        (dam.h_w / 4.6).powf(0.2)
    } else {
        1.0
    };
    0.012
        * GRAVITY.sqrt()
        * k_m
        * k_h
        * dam.h_w.powf(0.31)
        * dam.v_w.powf(0.46)
        * dam.h_b.powf(0.76)
        * dam.w_avg.powf(0.067)
}

// -- Zhong et al. (2020) --

fn zhong_2020(dam: &DamFailureInput) -> f64 {
    let c = match dam.dam_type {
        DamType::CoreWall => [-1.51, -1.09, -0.12, -3.61],
        DamType::HomogeneousFill => [-1.58, -0.76, 0.1, -4.55],
    };
    GRAVITY.sqrt()
        * dam.v_w
        * dam.h_w.powf(-0.5)
        * (dam.v_w.powf(1.0 / 3.0) / dam.h_w).powf(c[0])
        * (dam.h_w / dam.h_b).powf(c[1])
        * dam.h_d.powf(c[2])
        * c[3].exp()
}

fn zhong_2020_recalibrated(dam: &DamFailureInput) -> f64 {
    let c = match dam.dam_type {
        DamType::CoreWall => [0.019, -0.16, 0.4, 1.45, 0.08],
        DamType::HomogeneousFill => [0.018, 0.4, 0.44, 0.78, -0.04],
    };
    c[0] * GRAVITY.sqrt()
        * dam.h_w.powf(c[1])
        * dam.v_w.powf(c[2])
        * dam.h_b.powf(c[3])
        * dam.h_d.powf(c[4])
}

// -- Yassin et al. (2025) --

/// Already the recalibrated form; both variants share it.
fn yassin_2025(dam: &DamFailureInput) -> f64 {
    let k_e = match dam.erodibility {
        Erodibility::High => 3.8,
        Erodibility::Medium | Erodibility::Low => 1.0,
    };
    0.011 * k_e * GRAVITY.sqrt() * dam.h_w.powf(1.11) * dam.v_w.powf(0.46)
}
