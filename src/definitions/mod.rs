//! Property and load definitions
//!
//! Everything the engine files under "Define": materials, section
//! properties, link properties, joint constraints, functions, load
//! patterns, load cases, combinations and the mass source.

mod constraints;
mod functions;
mod link_props;
mod load_cases;
mod load_combos;
mod load_patterns;
mod mass_source;
mod material;
mod sections;

pub use constraints::{ConstraintGet, ConstraintSet, Constraints};
pub use functions::{Functions, ResponseSpectrumFunctions, TimeHistoryFunctions};
pub use link_props::{LinkPropGet, LinkPropSet, LinkProps, NonlinearLinkData};
pub use load_cases::{
    Buckling, CaseLoad, DirHistLinear, DirHistNonlinear, HistoryLoad, LoadCases, ModalEigen,
    ModalHistLinear, ModalHistNonlinear, ModalRitz, ResponseSpectrum, SpectrumLoad,
    StaticLinear, StaticLinearMultistep, StaticNonlinear,
};
pub use load_combos::{ComboEntryKind, ComboType, LoadCombos};
pub use load_patterns::{LoadPatternType, LoadPatterns};
pub use mass_source::MassSource;
pub use material::{Material, MaterialGet, MaterialSet};
pub use sections::{
    GeneralFrameSection, NotionalSize, SectionGet, SectionSet, Sections, ShellType,
};
