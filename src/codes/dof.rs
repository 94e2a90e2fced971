//! Degree-of-freedom tables and fixed-width array expansion
//!
//! The engine talks in 6-wide translational/rotational arrays and, for
//! coupled link stiffness, a 21-wide lower-triangular row-major layout.
//! The enums below are the only place those index assignments live.

use super::symbol_table;

symbol_table! {
    /// Local degree-of-freedom labels used by link and object APIs.
    Dof {
        U1 = 0 => "U1",
        U2 = 1 => "U2",
        U3 = 2 => "U3",
        R1 = 3 => "R1",
        R2 = 4 => "R2",
        R3 = 5 => "R3",
    }
}

symbol_table! {
    /// Global degree-of-freedom labels used by constraint and analysis APIs.
    DofAxis {
        UX = 0 => "UX",
        UY = 1 => "UY",
        UZ = 2 => "UZ",
        RX = 3 => "RX",
        RY = 4 => "RY",
        RZ = 5 => "RZ",
    }
}

symbol_table! {
    /// Coupled-stiffness terms, in the engine's lower-triangular row-major
    /// order. The ordering is part of the wire contract; do not reorder.
    StiffnessTerm {
        U1U1 = 0 => "U1U1",
        U1U2 = 1 => "U1U2",
        U2U2 = 2 => "U2U2",
        U1U3 = 3 => "U1U3",
        U2U3 = 4 => "U2U3",
        U3U3 = 5 => "U3U3",
        U1R1 = 6 => "U1R1",
        U2R1 = 7 => "U2R1",
        U3R1 = 8 => "U3R1",
        R1R1 = 9 => "R1R1",
        U1R2 = 10 => "U1R2",
        U2R2 = 11 => "U2R2",
        U3R2 = 12 => "U3R2",
        R1R2 = 13 => "R1R2",
        R2R2 = 14 => "R2R2",
        U1R3 = 15 => "U1R3",
        U2R3 = 16 => "U2R3",
        U3R3 = 17 => "U3R3",
        R1R3 = 18 => "R1R3",
        R2R3 = 19 => "R2R3",
        R3R3 = 20 => "R3R3",
    }
}

impl Dof {
    /// Expands a subset of labels into the engine's 6-wide boolean mask.
    pub fn mask(dofs: &[Dof]) -> [bool; 6] {
        let mut out = [false; 6];
        for &d in dofs {
            out[d.code() as usize] = true;
        }
        out
    }

    /// Expands (label, value) pairs into a dense zero-filled 6-wide array.
    pub fn values(pairs: &[(Dof, f64)]) -> [f64; 6] {
        let mut out = [0.0; 6];
        for &(d, v) in pairs {
            out[d.code() as usize] = v;
        }
        out
    }
}

impl DofAxis {
    /// Expands a subset of labels into the engine's 6-wide boolean mask.
    pub fn mask(dofs: &[DofAxis]) -> [bool; 6] {
        let mut out = [false; 6];
        for &d in dofs {
            out[d.code() as usize] = true;
        }
        out
    }

    /// Parses script-style labels, then expands to the 6-wide mask.
    pub fn parse_mask(labels: &[&str]) -> crate::error::SapResult<[bool; 6]> {
        let mut dofs = Vec::with_capacity(labels.len());
        for label in labels {
            dofs.push(label.parse::<DofAxis>()?);
        }
        Ok(Self::mask(&dofs))
    }
}

impl StiffnessTerm {
    /// Expands a subset of coupled terms into the 21-wide boolean mask.
    pub fn mask(terms: &[StiffnessTerm]) -> [bool; 21] {
        let mut out = [false; 21];
        for &t in terms {
            out[t.code() as usize] = true;
        }
        out
    }

    /// Expands (term, value) pairs into a dense zero-filled 21-wide array.
    pub fn values(pairs: &[(StiffnessTerm, f64)]) -> [f64; 21] {
        let mut out = [0.0; 21];
        for &(t, v) in pairs {
            out[t.code() as usize] = v;
        }
        out
    }
}
