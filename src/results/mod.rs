//! Analysis results extraction
//!
//! Columnar readers over the engine's result tables. Every reader returns
//! the identity columns (object, element, case, step) alongside the value
//! columns, decoded in the engine's declared order, plus the engine code.

mod setup;

pub use setup::{HistoryOutput, MultiValuedComboOutput, ResultsSetup};

use crate::bridge::{Handle, Reply};
use crate::codes::ItemTypeElm;
use crate::error::SapResult;

/// Identity columns shared by object-level result tables: source object,
/// analysis element, load case or combo, and the step within it.
#[derive(Debug, Clone, Default)]
pub struct ResultIds {
    pub obj: Vec<String>,
    pub elm: Vec<String>,
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
}

impl ResultIds {
    /// Decodes the five identity columns starting at out-index `base`.
    fn decode(r: &Reply, base: usize) -> SapResult<Self> {
        Ok(Self {
            obj: r.strs_at(base)?,
            elm: r.strs_at(base + 1)?,
            load_case: r.strs_at(base + 2)?,
            step_type: r.strs_at(base + 3)?,
            step_num: r.nums_at(base + 4)?,
        })
    }
}

/// Six-component joint response (translations then rotations, or forces
/// then moments).
#[derive(Debug, Clone, Default)]
pub struct JointValues {
    pub ids: ResultIds,
    pub u1: Vec<f64>,
    pub u2: Vec<f64>,
    pub u3: Vec<f64>,
    pub r1: Vec<f64>,
    pub r2: Vec<f64>,
    pub r3: Vec<f64>,
    pub ret: i32,
}

impl JointValues {
    fn decode(r: Reply) -> SapResult<Self> {
        Ok(Self {
            ids: ResultIds::decode(&r, 0)?,
            u1: r.nums_at(5)?,
            u2: r.nums_at(6)?,
            u3: r.nums_at(7)?,
            r1: r.nums_at(8)?,
            r2: r.nums_at(9)?,
            r3: r.nums_at(10)?,
            ret: r.ret,
        })
    }
}

/// Joint forces reported per connected point of a parent object.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityJointForces {
    pub obj: Vec<String>,
    pub elm: Vec<String>,
    pub point_elm: Vec<String>,
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
    pub f1: Vec<f64>,
    pub f2: Vec<f64>,
    pub f3: Vec<f64>,
    pub m1: Vec<f64>,
    pub m2: Vec<f64>,
    pub m3: Vec<f64>,
    pub ret: i32,
}

impl ConnectivityJointForces {
    fn decode(r: Reply) -> SapResult<Self> {
        Ok(Self {
            obj: r.strs_at(0)?,
            elm: r.strs_at(1)?,
            point_elm: r.strs_at(2)?,
            load_case: r.strs_at(3)?,
            step_type: r.strs_at(4)?,
            step_num: r.nums_at(5)?,
            f1: r.nums_at(6)?,
            f2: r.nums_at(7)?,
            f3: r.nums_at(8)?,
            m1: r.nums_at(9)?,
            m2: r.nums_at(10)?,
            m3: r.nums_at(11)?,
            ret: r.ret,
        })
    }
}

/// Frame internal forces at output stations.
#[derive(Debug, Clone, Default)]
pub struct FrameForces {
    pub ids: ResultIds,
    /// Station distance from the I end, per row.
    pub station: Vec<f64>,
    pub p: Vec<f64>,
    pub v2: Vec<f64>,
    pub v3: Vec<f64>,
    pub t: Vec<f64>,
    pub m2: Vec<f64>,
    pub m3: Vec<f64>,
    pub ret: i32,
}

/// Link internal forces at the two ends.
#[derive(Debug, Clone, Default)]
pub struct LinkForces {
    pub ids: ResultIds,
    pub p: Vec<f64>,
    pub v2: Vec<f64>,
    pub v3: Vec<f64>,
    pub t: Vec<f64>,
    pub m2: Vec<f64>,
    pub m3: Vec<f64>,
    pub ret: i32,
}

/// Shell internal forces per joint: membrane, bending and transverse
/// shear resultants.
#[derive(Debug, Clone, Default)]
pub struct ShellForces {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub f11: Vec<f64>,
    pub f22: Vec<f64>,
    pub f12: Vec<f64>,
    pub m11: Vec<f64>,
    pub m22: Vec<f64>,
    pub m12: Vec<f64>,
    pub v13: Vec<f64>,
    pub v23: Vec<f64>,
    pub ret: i32,
}

/// Shell stresses per joint at the top and bottom faces.
#[derive(Debug, Clone, Default)]
pub struct ShellStresses {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub s11_top: Vec<f64>,
    pub s22_top: Vec<f64>,
    pub s12_top: Vec<f64>,
    pub svm_top: Vec<f64>,
    pub s11_bot: Vec<f64>,
    pub s22_bot: Vec<f64>,
    pub s12_bot: Vec<f64>,
    pub svm_bot: Vec<f64>,
    pub ret: i32,
}

/// Layered-shell stresses per joint, layer and integration point.
#[derive(Debug, Clone, Default)]
pub struct LayeredShellStresses {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub layer: Vec<String>,
    pub int_point: Vec<i32>,
    pub s11: Vec<f64>,
    pub s22: Vec<f64>,
    pub s12: Vec<f64>,
    pub svm: Vec<f64>,
    pub ret: i32,
}

/// Shell strains per joint at the top and bottom faces.
#[derive(Debug, Clone, Default)]
pub struct ShellStrains {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub e11_top: Vec<f64>,
    pub e22_top: Vec<f64>,
    pub g12_top: Vec<f64>,
    pub e11_bot: Vec<f64>,
    pub e22_bot: Vec<f64>,
    pub g12_bot: Vec<f64>,
    pub ret: i32,
}

/// Layered-shell strains per joint, layer and integration point.
#[derive(Debug, Clone, Default)]
pub struct LayeredShellStrains {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub layer: Vec<String>,
    pub int_point: Vec<i32>,
    pub e11: Vec<f64>,
    pub e22: Vec<f64>,
    pub g12: Vec<f64>,
    pub ret: i32,
}

/// In-plane stresses of plane (2D continuum) elements per joint.
#[derive(Debug, Clone, Default)]
pub struct PlaneStresses {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub s11: Vec<f64>,
    pub s22: Vec<f64>,
    pub s33: Vec<f64>,
    pub s12: Vec<f64>,
    pub svm: Vec<f64>,
    pub ret: i32,
}

/// In-plane strains of plane elements per joint.
#[derive(Debug, Clone, Default)]
pub struct PlaneStrains {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub e11: Vec<f64>,
    pub e22: Vec<f64>,
    pub e33: Vec<f64>,
    pub g12: Vec<f64>,
    pub ret: i32,
}

/// Solid stresses per joint, full tensor plus von Mises.
#[derive(Debug, Clone, Default)]
pub struct SolidStresses {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub s11: Vec<f64>,
    pub s22: Vec<f64>,
    pub s33: Vec<f64>,
    pub s12: Vec<f64>,
    pub s13: Vec<f64>,
    pub s23: Vec<f64>,
    pub svm: Vec<f64>,
    pub ret: i32,
}

/// Solid strains per joint, full tensor.
#[derive(Debug, Clone, Default)]
pub struct SolidStrains {
    pub ids: ResultIds,
    pub point_elm: Vec<String>,
    pub e11: Vec<f64>,
    pub e22: Vec<f64>,
    pub e33: Vec<f64>,
    pub g12: Vec<f64>,
    pub g13: Vec<f64>,
    pub g23: Vec<f64>,
    pub ret: i32,
}

/// Base reactions about the report point, with that point's coordinates.
#[derive(Debug, Clone, Default)]
pub struct BaseReactions {
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
    pub fx: Vec<f64>,
    pub fy: Vec<f64>,
    pub fz: Vec<f64>,
    pub mx: Vec<f64>,
    pub my: Vec<f64>,
    pub mz: Vec<f64>,
    pub gx: f64,
    pub gy: f64,
    pub gz: f64,
    pub ret: i32,
}

/// Base reactions plus the per-direction force centroids.
#[derive(Debug, Clone, Default)]
pub struct BaseReactionsWithCentroid {
    pub base: BaseReactions,
    pub centroid_fx: (Vec<f64>, Vec<f64>, Vec<f64>),
    pub centroid_fy: (Vec<f64>, Vec<f64>, Vec<f64>),
    pub centroid_fz: (Vec<f64>, Vec<f64>, Vec<f64>),
}

/// Modal participation factors with the modal mass and stiffness.
#[derive(Debug, Clone, Default)]
pub struct ModalParticipationFactors {
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
    pub period: Vec<f64>,
    pub ux: Vec<f64>,
    pub uy: Vec<f64>,
    pub uz: Vec<f64>,
    pub rx: Vec<f64>,
    pub ry: Vec<f64>,
    pub rz: Vec<f64>,
    pub modal_mass: Vec<f64>,
    pub modal_stiffness: Vec<f64>,
    pub ret: i32,
}

/// Modal participating mass ratios with their running sums.
#[derive(Debug, Clone, Default)]
pub struct ModalMassRatios {
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
    pub period: Vec<f64>,
    pub ux: Vec<f64>,
    pub uy: Vec<f64>,
    pub uz: Vec<f64>,
    pub rx: Vec<f64>,
    pub ry: Vec<f64>,
    pub rz: Vec<f64>,
    pub sum_ux: Vec<f64>,
    pub sum_uy: Vec<f64>,
    pub sum_uz: Vec<f64>,
    pub ret: i32,
}

/// Modal periods and the equivalent frequency measures.
#[derive(Debug, Clone, Default)]
pub struct ModalPeriods {
    pub load_case: Vec<String>,
    pub step_type: Vec<String>,
    pub step_num: Vec<f64>,
    pub period: Vec<f64>,
    pub frequency: Vec<f64>,
    pub circular_frequency: Vec<f64>,
    pub eigenvalue: Vec<f64>,
    pub ret: i32,
}

/// Assembled lumped mass per analysis joint.
#[derive(Debug, Clone, Default)]
pub struct AssembledJointMass {
    pub point_elm: Vec<String>,
    pub u1: Vec<f64>,
    pub u2: Vec<f64>,
    pub u3: Vec<f64>,
    pub r1: Vec<f64>,
    pub r2: Vec<f64>,
    pub r3: Vec<f64>,
    pub ret: i32,
}

/// Results facade. A reader returns rows only for cases and combos
/// selected through [`ResultsSetup`].
#[derive(Debug, Clone)]
pub struct Results {
    h: Handle,
    pub setup: ResultsSetup,
}

impl Results {
    pub(crate) fn new(h: Handle) -> Self {
        Self {
            setup: ResultsSetup::new(h.clone()),
            h,
        }
    }

    fn item_call(&self, method: &str, name: &str, item: ItemTypeElm) -> SapResult<Reply> {
        self.h.call(method, &[name.into(), item.code().into()])
    }

    pub fn area_force_shell(&self, name: &str, item: ItemTypeElm) -> SapResult<ShellForces> {
        let r = self.item_call("SapModel.Results.AreaForceShell", name, item)?;
        Ok(ShellForces {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            f11: r.nums_at(6)?,
            f22: r.nums_at(7)?,
            f12: r.nums_at(8)?,
            m11: r.nums_at(9)?,
            m22: r.nums_at(10)?,
            m12: r.nums_at(11)?,
            v13: r.nums_at(12)?,
            v23: r.nums_at(13)?,
            ret: r.ret,
        })
    }

    pub fn area_stress_shell(&self, name: &str, item: ItemTypeElm) -> SapResult<ShellStresses> {
        let r = self.item_call("SapModel.Results.AreaStressShell", name, item)?;
        Ok(ShellStresses {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            s11_top: r.nums_at(6)?,
            s22_top: r.nums_at(7)?,
            s12_top: r.nums_at(8)?,
            svm_top: r.nums_at(9)?,
            s11_bot: r.nums_at(10)?,
            s22_bot: r.nums_at(11)?,
            s12_bot: r.nums_at(12)?,
            svm_bot: r.nums_at(13)?,
            ret: r.ret,
        })
    }

    pub fn area_stress_shell_layered(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<LayeredShellStresses> {
        let r = self.item_call("SapModel.Results.AreaStressShellLayered", name, item)?;
        Ok(LayeredShellStresses {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            layer: r.strs_at(6)?,
            int_point: r.ints_at(7)?,
            s11: r.nums_at(8)?,
            s22: r.nums_at(9)?,
            s12: r.nums_at(10)?,
            svm: r.nums_at(11)?,
            ret: r.ret,
        })
    }

    pub fn area_strain_shell(&self, name: &str, item: ItemTypeElm) -> SapResult<ShellStrains> {
        let r = self.item_call("SapModel.Results.AreaStrainShell", name, item)?;
        Ok(ShellStrains {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            e11_top: r.nums_at(6)?,
            e22_top: r.nums_at(7)?,
            g12_top: r.nums_at(8)?,
            e11_bot: r.nums_at(9)?,
            e22_bot: r.nums_at(10)?,
            g12_bot: r.nums_at(11)?,
            ret: r.ret,
        })
    }

    pub fn area_strain_shell_layered(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<LayeredShellStrains> {
        let r = self.item_call("SapModel.Results.AreaStrainShellLayered", name, item)?;
        Ok(LayeredShellStrains {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            layer: r.strs_at(6)?,
            int_point: r.ints_at(7)?,
            e11: r.nums_at(8)?,
            e22: r.nums_at(9)?,
            g12: r.nums_at(10)?,
            ret: r.ret,
        })
    }

    pub fn area_stress_plane(&self, name: &str, item: ItemTypeElm) -> SapResult<PlaneStresses> {
        let r = self.item_call("SapModel.Results.AreaStressPlane", name, item)?;
        Ok(PlaneStresses {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            s11: r.nums_at(6)?,
            s22: r.nums_at(7)?,
            s33: r.nums_at(8)?,
            s12: r.nums_at(9)?,
            svm: r.nums_at(10)?,
            ret: r.ret,
        })
    }

    pub fn area_strain_plane(&self, name: &str, item: ItemTypeElm) -> SapResult<PlaneStrains> {
        let r = self.item_call("SapModel.Results.AreaStrainPlane", name, item)?;
        Ok(PlaneStrains {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            e11: r.nums_at(6)?,
            e22: r.nums_at(7)?,
            e33: r.nums_at(8)?,
            g12: r.nums_at(9)?,
            ret: r.ret,
        })
    }

    pub fn area_joint_force_shell(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<ConnectivityJointForces> {
        let r = self.item_call("SapModel.Results.AreaJointForceShell", name, item)?;
        ConnectivityJointForces::decode(r)
    }

    pub fn solid_joint_force(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<ConnectivityJointForces> {
        let r = self.item_call("SapModel.Results.SolidJointForce", name, item)?;
        ConnectivityJointForces::decode(r)
    }

    pub fn solid_stress(&self, name: &str, item: ItemTypeElm) -> SapResult<SolidStresses> {
        let r = self.item_call("SapModel.Results.SolidStress", name, item)?;
        Ok(SolidStresses {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            s11: r.nums_at(6)?,
            s22: r.nums_at(7)?,
            s33: r.nums_at(8)?,
            s12: r.nums_at(9)?,
            s13: r.nums_at(10)?,
            s23: r.nums_at(11)?,
            svm: r.nums_at(12)?,
            ret: r.ret,
        })
    }

    pub fn solid_strain(&self, name: &str, item: ItemTypeElm) -> SapResult<SolidStrains> {
        let r = self.item_call("SapModel.Results.SolidStrain", name, item)?;
        Ok(SolidStrains {
            ids: ResultIds::decode(&r, 0)?,
            point_elm: r.strs_at(5)?,
            e11: r.nums_at(6)?,
            e22: r.nums_at(7)?,
            e33: r.nums_at(8)?,
            g12: r.nums_at(9)?,
            g13: r.nums_at(10)?,
            g23: r.nums_at(11)?,
            ret: r.ret,
        })
    }

    pub fn frame_force(&self, name: &str, item: ItemTypeElm) -> SapResult<FrameForces> {
        let r = self.item_call("SapModel.Results.FrameForce", name, item)?;
        Ok(FrameForces {
            ids: ResultIds::decode(&r, 0)?,
            station: r.nums_at(5)?,
            p: r.nums_at(6)?,
            v2: r.nums_at(7)?,
            v3: r.nums_at(8)?,
            t: r.nums_at(9)?,
            m2: r.nums_at(10)?,
            m3: r.nums_at(11)?,
            ret: r.ret,
        })
    }

    pub fn frame_joint_force(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<ConnectivityJointForces> {
        let r = self.item_call("SapModel.Results.FrameJointForce", name, item)?;
        ConnectivityJointForces::decode(r)
    }

    pub fn link_force(&self, name: &str, item: ItemTypeElm) -> SapResult<LinkForces> {
        let r = self.item_call("SapModel.Results.LinkForce", name, item)?;
        Ok(LinkForces {
            ids: ResultIds::decode(&r, 0)?,
            p: r.nums_at(5)?,
            v2: r.nums_at(6)?,
            v3: r.nums_at(7)?,
            t: r.nums_at(8)?,
            m2: r.nums_at(9)?,
            m3: r.nums_at(10)?,
            ret: r.ret,
        })
    }

    pub fn link_deformation(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.LinkDeformation", name, item)?;
        JointValues::decode(r)
    }

    pub fn link_joint_force(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<ConnectivityJointForces> {
        let r = self.item_call("SapModel.Results.LinkJointForce", name, item)?;
        ConnectivityJointForces::decode(r)
    }

    pub fn joint_displacement(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointDispl", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_displacement_absolute(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointDisplAbs", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_velocity(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointVel", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_velocity_absolute(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointVelAbs", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_acceleration(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointAcc", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_acceleration_absolute(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointAccAbs", name, item)?;
        JointValues::decode(r)
    }

    pub fn joint_reaction(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.JointReact", name, item)?;
        JointValues::decode(r)
    }

    /// Mode shapes; rows repeat per joint and mode.
    pub fn mode_shape(&self, name: &str, item: ItemTypeElm) -> SapResult<JointValues> {
        let r = self.item_call("SapModel.Results.ModeShape", name, item)?;
        JointValues::decode(r)
    }

    /// Generalized displacement values: (names, cases, step types, step
    /// numbers, DOF labels, values, code).
    #[allow(clippy::type_complexity)]
    pub fn generalized_displacement(
        &self,
        name: &str,
    ) -> SapResult<(
        Vec<String>,
        Vec<String>,
        Vec<String>,
        Vec<f64>,
        Vec<String>,
        Vec<f64>,
        i32,
    )> {
        let r = self
            .h
            .call("SapModel.Results.GeneralizedDispl", &[name.into()])?;
        Ok((
            r.strs_at(0)?,
            r.strs_at(1)?,
            r.strs_at(2)?,
            r.nums_at(3)?,
            r.strs_at(4)?,
            r.nums_at(5)?,
            r.ret,
        ))
    }

    pub fn base_react(&self) -> SapResult<BaseReactions> {
        let r = self.h.call("SapModel.Results.BaseReact", &[])?;
        Self::decode_base_react(&r)
    }

    pub fn base_react_with_centroid(&self) -> SapResult<BaseReactionsWithCentroid> {
        let r = self
            .h
            .call("SapModel.Results.BaseReactWithCentroid", &[])?;
        Ok(BaseReactionsWithCentroid {
            base: Self::decode_base_react(&r)?,
            centroid_fx: (r.nums_at(12)?, r.nums_at(13)?, r.nums_at(14)?),
            centroid_fy: (r.nums_at(15)?, r.nums_at(16)?, r.nums_at(17)?),
            centroid_fz: (r.nums_at(18)?, r.nums_at(19)?, r.nums_at(20)?),
        })
    }

    fn decode_base_react(r: &Reply) -> SapResult<BaseReactions> {
        Ok(BaseReactions {
            load_case: r.strs_at(0)?,
            step_type: r.strs_at(1)?,
            step_num: r.nums_at(2)?,
            fx: r.nums_at(3)?,
            fy: r.nums_at(4)?,
            fz: r.nums_at(5)?,
            mx: r.nums_at(6)?,
            my: r.nums_at(7)?,
            mz: r.nums_at(8)?,
            gx: r.num_at(9)?,
            gy: r.num_at(10)?,
            gz: r.num_at(11)?,
            ret: r.ret,
        })
    }

    /// Buckling factors: (cases, step types, mode numbers, factors, code).
    #[allow(clippy::type_complexity)]
    pub fn buckling_factor(
        &self,
    ) -> SapResult<(Vec<String>, Vec<String>, Vec<f64>, Vec<f64>, i32)> {
        let r = self.h.call("SapModel.Results.BucklingFactor", &[])?;
        Ok((
            r.strs_at(0)?,
            r.strs_at(1)?,
            r.nums_at(2)?,
            r.nums_at(3)?,
            r.ret,
        ))
    }

    pub fn modal_participation_factors(&self) -> SapResult<ModalParticipationFactors> {
        let r = self
            .h
            .call("SapModel.Results.ModalParticipationFactors", &[])?;
        Ok(ModalParticipationFactors {
            load_case: r.strs_at(0)?,
            step_type: r.strs_at(1)?,
            step_num: r.nums_at(2)?,
            period: r.nums_at(3)?,
            ux: r.nums_at(4)?,
            uy: r.nums_at(5)?,
            uz: r.nums_at(6)?,
            rx: r.nums_at(7)?,
            ry: r.nums_at(8)?,
            rz: r.nums_at(9)?,
            modal_mass: r.nums_at(10)?,
            modal_stiffness: r.nums_at(11)?,
            ret: r.ret,
        })
    }

    pub fn modal_participating_mass_ratios(&self) -> SapResult<ModalMassRatios> {
        let r = self
            .h
            .call("SapModel.Results.ModalParticipatingMassRatios", &[])?;
        Ok(ModalMassRatios {
            load_case: r.strs_at(0)?,
            step_type: r.strs_at(1)?,
            step_num: r.nums_at(2)?,
            period: r.nums_at(3)?,
            ux: r.nums_at(4)?,
            uy: r.nums_at(5)?,
            uz: r.nums_at(6)?,
            rx: r.nums_at(7)?,
            ry: r.nums_at(8)?,
            rz: r.nums_at(9)?,
            sum_ux: r.nums_at(10)?,
            sum_uy: r.nums_at(11)?,
            sum_uz: r.nums_at(12)?,
            ret: r.ret,
        })
    }

    /// Modal load participation ratios: (cases, item kinds, items, static
    /// ratios, dynamic ratios, code).
    #[allow(clippy::type_complexity)]
    pub fn modal_load_participation_ratios(
        &self,
    ) -> SapResult<(
        Vec<String>,
        Vec<String>,
        Vec<String>,
        Vec<f64>,
        Vec<f64>,
        i32,
    )> {
        let r = self
            .h
            .call("SapModel.Results.ModalLoadParticipationRatios", &[])?;
        Ok((
            r.strs_at(0)?,
            r.strs_at(1)?,
            r.strs_at(2)?,
            r.nums_at(3)?,
            r.nums_at(4)?,
            r.ret,
        ))
    }

    pub fn modal_period(&self) -> SapResult<ModalPeriods> {
        let r = self.h.call("SapModel.Results.ModalPeriod", &[])?;
        Ok(ModalPeriods {
            load_case: r.strs_at(0)?,
            step_type: r.strs_at(1)?,
            step_num: r.nums_at(2)?,
            period: r.nums_at(3)?,
            frequency: r.nums_at(4)?,
            circular_frequency: r.nums_at(5)?,
            eigenvalue: r.nums_at(6)?,
            ret: r.ret,
        })
    }

    /// Output step labels of one case: (step numbers, labels, code).
    pub fn step_label(&self, case: &str) -> SapResult<(Vec<f64>, Vec<String>, i32)> {
        let r = self
            .h
            .call("SapModel.Results.StepLabel", &[case.into()])?;
        Ok((r.nums_at(0)?, r.strs_at(1)?, r.ret))
    }

    pub fn assembled_joint_mass(
        &self,
        name: &str,
        item: ItemTypeElm,
    ) -> SapResult<AssembledJointMass> {
        let r = self.item_call("SapModel.Results.AssembledJointMass", name, item)?;
        Ok(AssembledJointMass {
            point_elm: r.strs_at(0)?,
            u1: r.nums_at(1)?,
            u2: r.nums_at(2)?,
            u3: r.nums_at(3)?,
            r1: r.nums_at(4)?,
            r2: r.nums_at(5)?,
            r3: r.nums_at(6)?,
            ret: r.ret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;
    use crate::bridge::{Reply, Value};

    fn strs(items: &[&str]) -> Value {
        Value::Strs(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_joint_displacement_decodes_columns() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.Results.JointDispl",
            Reply::with_outs(
                0,
                vec![
                    strs(&["5", "5"]),
                    strs(&["5", "5"]),
                    strs(&["DEAD", "LIVE"]),
                    strs(&["", ""]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.001, 0.002]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![-0.003, -0.004]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.0, 0.0]),
                ],
            ),
        );
        let results = Results::new(handle);
        let out = results
            .joint_displacement("5", ItemTypeElm::ObjectElm)
            .unwrap();
        assert_eq!(out.ids.load_case, vec!["DEAD", "LIVE"]);
        assert_eq!(out.u1, vec![0.001, 0.002]);
        assert_eq!(out.u3, vec![-0.003, -0.004]);
        assert_eq!(out.ret, 0);
        let call = engine.last_call().unwrap();
        assert_eq!(call.args[1], Value::Int(0));
    }

    #[test]
    fn test_frame_force_decodes_stations() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.Results.FrameForce",
            Reply::with_outs(
                0,
                vec![
                    strs(&["23", "23"]),
                    strs(&["23", "23"]),
                    strs(&["DEAD", "DEAD"]),
                    strs(&["", ""]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.0, 6.0]),
                    Value::Nums(vec![-12.0, -12.0]),
                    Value::Nums(vec![3.0, -3.0]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![0.0, 0.0]),
                    Value::Nums(vec![9.0, 9.0]),
                ],
            ),
        );
        let results = Results::new(handle);
        let out = results.frame_force("23", ItemTypeElm::Element).unwrap();
        assert_eq!(out.station, vec![0.0, 6.0]);
        assert_eq!(out.p, vec![-12.0, -12.0]);
        assert_eq!(out.m3, vec![9.0, 9.0]);
    }

    #[test]
    fn test_modal_period_decode() {
        let (engine, handle) = RecordingEngine::handle();
        engine.stub(
            "SapModel.Results.ModalPeriod",
            Reply::with_outs(
                0,
                vec![
                    strs(&["MODAL"]),
                    strs(&["Mode"]),
                    Value::Nums(vec![1.0]),
                    Value::Nums(vec![0.52]),
                    Value::Nums(vec![1.923]),
                    Value::Nums(vec![12.08]),
                    Value::Nums(vec![145.9]),
                ],
            ),
        );
        let results = Results::new(handle);
        let out = results.modal_period().unwrap();
        assert_eq!(out.period, vec![0.52]);
        assert_eq!(out.frequency, vec![1.923]);
    }
}
