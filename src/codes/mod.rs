//! Argument normalizers
//!
//! Pure, total mappings between the symbolic vocabulary accepted by the
//! facade and the engine's native integer codes and fixed-width arrays.
//! Each table is declared exactly once through [`symbol_table!`], which
//! derives both directions (encode/decode), the string form used by host
//! scripts, and the exhaustive `ALL` listing the law tests iterate.

mod dof;
mod dynamics;
mod items;
mod model;

pub use dof::{Dof, DofAxis, StiffnessTerm};
pub use dynamics::{DampingScheme, DirectionalCombo, IntegrationParams, TimeIntegration};
pub use items::{ItemType, ItemTypeElm};
pub use model::{
    Axis, ConstraintType, FunctionValueType, HysteresisType, LinkPropType, MaterialType,
};

/// Declares one symbol table: a copyable enum with its engine code, label,
/// decode, `FromStr` and `Display`, all derived from a single listing.
macro_rules! symbol_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every symbol in the table, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Engine-native code for this symbol.
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            /// Decodes an engine code back to its symbol.
            pub fn from_code(code: i32) -> crate::error::SapResult<Self> {
                match code {
                    $( c if c == $code => Ok($name::$variant), )+
                    other => Err(crate::error::SapError::UnknownSymbol {
                        symbol: other.to_string(),
                        table: stringify!($name),
                    }),
                }
            }

            /// The symbolic label host scripts use.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = crate::error::SapError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err(crate::error::SapError::UnknownSymbol {
                        symbol: other.to_string(),
                        table: stringify!($name),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

pub(crate) use symbol_table;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn laws<T>(all: &[T])
    where
        T: Copy + PartialEq + std::fmt::Debug + std::fmt::Display + std::str::FromStr,
        <T as std::str::FromStr>::Err: std::fmt::Debug,
    {
        for &s in all {
            let label = s.to_string();
            let back: T = label.parse().unwrap();
            assert_eq!(back, s);
        }
    }

    fn injective(codes: &[i32]) {
        let unique: HashSet<i32> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_string_round_trip_all_tables() {
        laws(Dof::ALL);
        laws(DofAxis::ALL);
        laws(StiffnessTerm::ALL);
        laws(Axis::ALL);
        laws(MaterialType::ALL);
        laws(ConstraintType::ALL);
        laws(LinkPropType::ALL);
        laws(HysteresisType::ALL);
        laws(TimeIntegration::ALL);
        laws(DirectionalCombo::ALL);
        laws(DampingScheme::ALL);
        laws(FunctionValueType::ALL);
        laws(ItemType::ALL);
        laws(ItemTypeElm::ALL);
    }

    #[test]
    fn test_code_round_trip_and_injectivity() {
        macro_rules! check {
            ($t:ty) => {{
                let codes: Vec<i32> = <$t>::ALL.iter().map(|s| s.code()).collect();
                injective(&codes);
                for &s in <$t>::ALL {
                    assert_eq!(<$t>::from_code(s.code()).unwrap(), s);
                }
            }};
        }
        check!(Dof);
        check!(DofAxis);
        check!(StiffnessTerm);
        check!(Axis);
        check!(MaterialType);
        check!(ConstraintType);
        check!(LinkPropType);
        check!(HysteresisType);
        check!(TimeIntegration);
        check!(DirectionalCombo);
        check!(DampingScheme);
        check!(FunctionValueType);
        check!(ItemType);
        check!(ItemTypeElm);
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let err = "U7".parse::<Dof>().unwrap_err();
        assert!(matches!(
            err,
            crate::error::SapError::UnknownSymbol { .. }
        ));
        assert!(ConstraintType::from_code(12).is_err());
    }
}
