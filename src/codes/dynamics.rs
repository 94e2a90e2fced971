//! Dynamic-analysis symbol tables: time integration, damping, direction
//! combination

use serde::{Deserialize, Serialize};

use super::symbol_table;

symbol_table! {
    /// Direct-integration time-stepping scheme.
    TimeIntegration {
        Newmark = 1 => "Newmark",
        Wilson = 2 => "Wilson",
        Collocation = 3 => "Collocation",
        HilberHughesTaylor = 4 => "Hilber-Hughes-Taylor",
        ChungHulbert = 5 => "Chung and Hulbert",
    }
}

symbol_table! {
    /// Directional combination rule for response-spectrum cases.
    DirectionalCombo {
        Srss = 1 => "SRSS",
        Abs = 2 => "ABS",
        Cqc3 = 3 => "CQC3",
    }
}

symbol_table! {
    /// Proportional damping specification scheme.
    DampingScheme {
        MassStiffness = 1 => "MassStiffness",
        Period = 2 => "Period",
        Frequency = 3 => "Frequency",
    }
}

/// Scheme parameters forwarded with a time-integration selection.
///
/// Only the parameters the chosen scheme reads matter; the rest ride along
/// as zeros, matching the engine's fixed-arity call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationParams {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub m: f64,
}

impl TimeIntegration {
    /// The engine's default parameter set for this scheme.
    pub fn default_params(self) -> IntegrationParams {
        match self {
            TimeIntegration::Newmark => IntegrationParams {
                alpha: 0.0,
                beta: 0.25,
                gamma: 0.5,
                theta: 0.0,
                m: 0.0,
            },
            TimeIntegration::Wilson => IntegrationParams {
                alpha: 0.0,
                beta: 0.0,
                gamma: 0.0,
                theta: 1.0,
                m: 0.0,
            },
            TimeIntegration::Collocation => IntegrationParams {
                alpha: 0.0,
                beta: 0.1667,
                gamma: 0.5,
                theta: 1.0,
                m: 0.0,
            },
            TimeIntegration::HilberHughesTaylor => IntegrationParams {
                alpha: 0.0,
                beta: 0.0,
                gamma: 0.0,
                theta: 0.0,
                m: 0.0,
            },
            TimeIntegration::ChungHulbert => IntegrationParams {
                alpha: 0.0,
                beta: 0.25,
                gamma: 0.5,
                theta: 0.0,
                m: 0.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_codes() {
        assert_eq!(TimeIntegration::Newmark.code(), 1);
        assert_eq!(TimeIntegration::ChungHulbert.code(), 5);
        assert_eq!(
            "Hilber-Hughes-Taylor".parse::<TimeIntegration>().unwrap(),
            TimeIntegration::HilberHughesTaylor
        );
    }

    #[test]
    fn test_newmark_defaults() {
        let p = TimeIntegration::Newmark.default_params();
        assert_eq!(p.gamma, 0.5);
        assert_eq!(p.beta, 0.25);
    }

    #[test]
    fn test_wilson_and_collocation_defaults() {
        assert_eq!(TimeIntegration::Wilson.default_params().theta, 1.0);
        let c = TimeIntegration::Collocation.default_params();
        assert_eq!(c.gamma, 0.5);
        assert_eq!(c.beta, 0.1667);
        assert_eq!(c.theta, 1.0);
    }

    #[test]
    fn test_directional_combo_codes() {
        assert_eq!(DirectionalCombo::Srss.code(), 1);
        assert_eq!(DirectionalCombo::Cqc3.code(), 3);
        assert_eq!(DampingScheme::Frequency.code(), 3);
    }
}
