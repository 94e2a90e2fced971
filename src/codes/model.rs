//! Model-definition symbol tables: axes, materials, constraints, links

use super::symbol_table;

symbol_table! {
    /// Constraint axis selector.
    Axis {
        X = 1 => "X",
        Y = 2 => "Y",
        Z = 3 => "Z",
        /// Let the engine pick the axis automatically.
        AutoAxis = 4 => "AutoAxis",
    }
}

symbol_table! {
    /// Material design type.
    MaterialType {
        Steel = 1 => "Steel",
        Concrete = 2 => "Concrete",
        NoDesign = 3 => "NoDesign",
        Aluminum = 4 => "Aluminum",
        ColdFormed = 5 => "ColdFormed",
        Rebar = 6 => "Rebar",
        Tendon = 7 => "Tendon",
    }
}

symbol_table! {
    /// Joint constraint type, as reported by the engine.
    ConstraintType {
        Body = 1 => "Body",
        Diaphragm = 2 => "Diaphragm",
        Plate = 3 => "Plate",
        Rod = 4 => "Rod",
        Beam = 5 => "Beam",
        Equal = 6 => "Equal",
        Local = 7 => "Local",
        Weld = 8 => "Weld",
        Line = 13 => "Line",
    }
}

symbol_table! {
    /// Link property type, as reported by the engine. `NotFound` is the
    /// engine's answer for a name with no link property behind it.
    LinkPropType {
        NotFound = 0 => "NotFound",
        Linear = 1 => "Linear",
        Damper = 2 => "Damper",
        Gap = 3 => "Gap",
        Hook = 4 => "Hook",
        PlasticWen = 5 => "PlasticWen",
        RubberIsolator = 6 => "RubberIsolator",
        FrictionIsolator = 7 => "FrictionIsolator",
        MultiLinearElastic = 8 => "MultiLinearElastic",
        MultiLinearPlastic = 9 => "MultiLinearPlastic",
        TCFrictionIsolator = 10 => "TCFrictionIsolator",
    }
}

symbol_table! {
    /// Hysteresis rule for multilinear plastic behavior.
    HysteresisType {
        Isotropic = 0 => "Isotropic",
        Kinematic = 1 => "Kinematic",
        Takeda = 2 => "Takeda",
        Pivot = 3 => "Pivot",
    }
}

symbol_table! {
    /// Abscissa interpretation for file-based function curves.
    FunctionValueType {
        Frequency = 1 => "Frequency",
        Period = 2 => "Period",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_type_decode() {
        assert_eq!(ConstraintType::from_code(1).unwrap(), ConstraintType::Body);
        assert_eq!(ConstraintType::from_code(13).unwrap(), ConstraintType::Line);
        // 9..12 are unassigned in the engine's table.
        assert!(ConstraintType::from_code(9).is_err());
    }

    #[test]
    fn test_link_prop_type_decode() {
        assert_eq!(
            LinkPropType::from_code(5).unwrap(),
            LinkPropType::PlasticWen
        );
        assert_eq!(LinkPropType::from_code(0).unwrap(), LinkPropType::NotFound);
        assert!(LinkPropType::from_code(11).is_err());
    }

    #[test]
    fn test_material_type_codes() {
        assert_eq!(MaterialType::Steel.code(), 1);
        assert_eq!(MaterialType::Tendon.code(), 7);
        assert_eq!("Concrete".parse::<MaterialType>().unwrap().code(), 2);
    }

    #[test]
    fn test_axis_codes() {
        assert_eq!(Axis::X.code(), 1);
        assert_eq!(Axis::AutoAxis.code(), 4);
    }
}
