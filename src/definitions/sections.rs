//! Section property definitions: frame, tendon, cable, area and solid
//! properties

use crate::bridge::Handle;
use crate::error::SapResult;

/// Notional size basis for creep/shrinkage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotionalSize {
    /// Engine computes the size automatically, scaled by a factor.
    Auto,
    /// User-supplied size value.
    User,
    /// Notional size is not considered.
    None,
}

impl NotionalSize {
    pub fn label(self) -> &'static str {
        match self {
            NotionalSize::Auto => "Auto",
            NotionalSize::User => "User",
            NotionalSize::None => "None",
        }
    }
}

/// Shell subtype selector for area section properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    ShellThin = 1,
    ShellThick = 2,
    PlateThin = 3,
    PlateThick = 4,
    Membrane = 5,
    ShellLayered = 6,
}

impl ShellType {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Section-property facade; Set and Get flavors live in sub-facades.
#[derive(Debug, Clone)]
pub struct Sections {
    pub set: SectionSet,
    pub get: SectionGet,
}

impl Sections {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            set: SectionSet { h: h.clone() },
            get: SectionGet { h },
        }
    }
}

/// Section-property setters.
#[derive(Debug, Clone)]
pub struct SectionSet {
    h: Handle,
}

/// A general frame section described by its computed geometric properties,
/// e.g. the output of the CAD section pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralFrameSection {
    /// Section depth
    pub t3: f64,
    /// Section width
    pub t2: f64,
    /// Cross-sectional area
    pub area: f64,
    /// Shear area for forces in the 2 direction
    pub as2: f64,
    /// Shear area for forces in the 3 direction
    pub as3: f64,
    /// Torsional constant
    pub torsion: f64,
    /// Moment of inertia about the 2 axis
    pub i22: f64,
    /// Moment of inertia about the 3 axis
    pub i33: f64,
    /// Section modulus about the 2 axis
    pub s22: f64,
    /// Section modulus about the 3 axis
    pub s33: f64,
    /// Plastic modulus about the 2 axis
    pub z22: f64,
    /// Plastic modulus about the 3 axis
    pub z33: f64,
    /// Radius of gyration about the 2 axis
    pub r22: f64,
    /// Radius of gyration about the 3 axis
    pub r33: f64,
}

impl GeneralFrameSection {
    /// Builds general-section inputs from the CAD pipeline's output.
    /// Moduli and radii the pipeline does not compute are left zero for
    /// the engine to derive.
    pub fn from_properties(p: &crate::cad::SectionProperties) -> Self {
        Self {
            t3: p.height,
            t2: p.width,
            area: p.area,
            as2: p.asy,
            as3: p.asx,
            torsion: p.j,
            i22: p.iyy,
            i33: p.ixx,
            s22: 0.0,
            s33: 0.0,
            z22: 0.0,
            z33: 0.0,
            r22: 0.0,
            r33: 0.0,
        }
    }
}

impl SectionSet {
    /// General frame section. All eight stiffness modification factors
    /// default to 1 on the engine side; this facade forwards them as such.
    pub fn frame_general(
        &self,
        name: &str,
        material: &str,
        section: &GeneralFrameSection,
    ) -> SapResult<i32> {
        let s = section;
        Ok(self
            .h
            .call(
                "SapModel.PropFrame.SetGeneral",
                &[
                    name.into(),
                    material.into(),
                    s.t3.into(),
                    s.t2.into(),
                    s.area.into(),
                    s.as2.into(),
                    s.as3.into(),
                    s.torsion.into(),
                    s.i22.into(),
                    s.i33.into(),
                    s.s22.into(),
                    s.s33.into(),
                    s.z22.into(),
                    s.z33.into(),
                    s.r22.into(),
                    s.r33.into(),
                ],
            )?
            .ret)
    }

    /// Frame stiffness modification factors (8-wide, engine order).
    pub fn frame_modifiers(&self, name: &str, modifiers: [f64; 8]) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropFrame.SetModifiers",
                &[name.into(), modifiers.into()],
            )?
            .ret)
    }

    /// Empty section-designer section, to be filled interactively. The
    /// engine only needs the base material here.
    pub fn sd_section(&self, name: &str, material: &str) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropFrame.SetSDSection",
                &[name.into(), material.into()],
            )?
            .ret)
    }

    /// Tendon property. `model_option` selects loads (1) or elements (2).
    pub fn tendon(
        &self,
        name: &str,
        material: &str,
        model_option: i32,
        area: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropTendon.SetProp",
                &[
                    name.into(),
                    material.into(),
                    model_option.into(),
                    area.into(),
                ],
            )?
            .ret)
    }

    /// Cable property defined by its cross-sectional area.
    pub fn cable(&self, name: &str, material: &str, area: f64) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropCable.SetProp",
                &[name.into(), material.into(), area.into()],
            )?
            .ret)
    }

    /// Plane (2D continuum) area property. `plane_type` is 1 for plane
    /// stress, 2 for plane strain.
    #[allow(clippy::too_many_arguments)]
    pub fn plane(
        &self,
        name: &str,
        plane_type: i32,
        material: &str,
        material_angle: f64,
        thickness: f64,
        incompatible_modes: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropArea.SetPlane",
                &[
                    name.into(),
                    plane_type.into(),
                    material.into(),
                    material_angle.into(),
                    thickness.into(),
                    incompatible_modes.into(),
                ],
            )?
            .ret)
    }

    /// Shell area property with its subtype selector.
    #[allow(clippy::too_many_arguments)]
    pub fn shell(
        &self,
        name: &str,
        shell_type: ShellType,
        include_drilling_dof: bool,
        material: &str,
        material_angle: f64,
        membrane_thickness: f64,
        bending_thickness: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropArea.SetShell_1",
                &[
                    name.into(),
                    shell_type.code().into(),
                    include_drilling_dof.into(),
                    material.into(),
                    material_angle.into(),
                    membrane_thickness.into(),
                    bending_thickness.into(),
                ],
            )?
            .ret)
    }

    /// Solid property with its three material angles.
    pub fn solid(
        &self,
        name: &str,
        material: &str,
        material_angles: [f64; 3],
        incompatible_modes: bool,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropSolid.SetProp",
                &[
                    name.into(),
                    material.into(),
                    material_angles[0].into(),
                    material_angles[1].into(),
                    material_angles[2].into(),
                    incompatible_modes.into(),
                ],
            )?
            .ret)
    }

    /// Notional-size assignment for a frame section. `value` is the scale
    /// factor for `Auto`, the size itself for `User`, ignored for `None`.
    pub fn notional_size(
        &self,
        name: &str,
        size_type: NotionalSize,
        value: f64,
    ) -> SapResult<i32> {
        Ok(self
            .h
            .call(
                "SapModel.PropFrame.SetNotionalSize",
                &[name.into(), size_type.label().into(), value.into()],
            )?
            .ret)
    }
}

/// Section-property getters.
#[derive(Debug, Clone)]
pub struct SectionGet {
    h: Handle,
}

impl SectionGet {
    /// General frame section: (material, properties, code).
    pub fn frame_general(
        &self,
        name: &str,
    ) -> SapResult<(String, GeneralFrameSection, i32)> {
        let r = self
            .h
            .call("SapModel.PropFrame.GetGeneral", &[name.into()])?;
        let material = r.str_at(0)?;
        let v = r.nums_at(1)?;
        if v.len() < 14 {
            return Err(crate::error::SapError::TypeMismatch {
                index: 1,
                expected: "14 general section properties",
            });
        }
        let section = GeneralFrameSection {
            t3: v[0],
            t2: v[1],
            area: v[2],
            as2: v[3],
            as3: v[4],
            torsion: v[5],
            i22: v[6],
            i33: v[7],
            s22: v[8],
            s33: v[9],
            z22: v[10],
            z33: v[11],
            r22: v[12],
            r33: v[13],
        };
        Ok((material, section, r.ret))
    }

    /// Names of all frame sections.
    pub fn frame_name_list(&self) -> SapResult<(Vec<String>, i32)> {
        let r = self.h.call("SapModel.PropFrame.GetNameList", &[])?;
        Ok((r.strs_at(0)?, r.ret))
    }

    /// Cable property: (material, area, code).
    pub fn cable(&self, name: &str) -> SapResult<(String, f64, i32)> {
        let r = self.h.call("SapModel.PropCable.GetProp", &[name.into()])?;
        Ok((r.str_at(0)?, r.num_at(1)?, r.ret))
    }

    /// Tendon property: (material, model option, area, code).
    pub fn tendon(&self, name: &str) -> SapResult<(String, i32, f64, i32)> {
        let r = self.h.call("SapModel.PropTendon.GetProp", &[name.into()])?;
        Ok((r.str_at(0)?, r.int_at(1)?, r.num_at(2)?, r.ret))
    }
}
