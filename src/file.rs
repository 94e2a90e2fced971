//! Model file lifecycle

use std::fs;
use std::path::Path;

use crate::bridge::Handle;
use crate::error::{SapError, SapResult};

/// Extensions the engine can open. Only the native database format can be
/// created from scratch.
const OPENABLE_EXTENSIONS: &[&str] = &["sdb", "$2k", "s2k", "xlsx", "xls", "mdb"];
const NATIVE_EXTENSION: &str = "sdb";

/// 2D frame template selector for [`File::new_2d_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame2DType {
    PortalFrame,
    ConcentricBraced,
    EccentricBraced,
}

impl Frame2DType {
    pub fn code(self) -> i32 {
        match self {
            Frame2DType::PortalFrame => 0,
            Frame2DType::ConcentricBraced => 1,
            Frame2DType::EccentricBraced => 2,
        }
    }
}

/// 3D frame template selector for [`File::new_3d_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame3DType {
    OpenFrame,
    PerimeterFrame,
    BeamSlab,
    FlatPlate,
}

impl Frame3DType {
    pub fn code(self) -> i32 {
        match self {
            Frame3DType::OpenFrame => 0,
            Frame3DType::PerimeterFrame => 1,
            Frame3DType::BeamSlab => 2,
            Frame3DType::FlatPlate => 3,
        }
    }
}

/// File facade: open/save the model database and seed template models.
#[derive(Debug, Clone)]
pub struct File {
    h: Handle,
}

impl File {
    pub(crate) fn new(h: Handle) -> Self {
        Self { h }
    }

    /// Opens `path`, creating it first when it does not exist.
    ///
    /// Accepts the engine's native database plus its text/spreadsheet
    /// import formats. A missing file is only created for the native
    /// format: the model is initialized blank and saved to `path` (parent
    /// directories are created as needed). A missing import-format file
    /// cannot be conjured from nothing and is an error.
    pub fn open(&self, path: &Path) -> SapResult<i32> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if !OPENABLE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(SapError::InvalidArgument(format!(
                "'{}' is not an openable model file (expected one of {:?})",
                path.display(),
                OPENABLE_EXTENSIONS
            )));
        }

        if path.exists() {
            let reply = self
                .h
                .call("SapModel.File.OpenFile", &[path_str(path)?.into()])?;
            return Ok(reply.ret);
        }

        if ext != NATIVE_EXTENSION {
            return Err(SapError::InvalidArgument(format!(
                "'{}' does not exist and only .{} files can be created",
                path.display(),
                NATIVE_EXTENSION
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        log::debug!("creating new blank model at {}", path.display());
        let blank = self.new_blank()?;
        if blank != 0 {
            return Ok(blank);
        }
        self.save(path)
    }

    /// Saves the model to `path`.
    pub fn save(&self, path: &Path) -> SapResult<i32> {
        let reply = self
            .h
            .call("SapModel.File.Save", &[path_str(path)?.into()])?;
        Ok(reply.ret)
    }

    /// Initializes a new blank model.
    pub fn new_blank(&self) -> SapResult<i32> {
        Ok(self.h.call("SapModel.File.NewBlank", &[])?.ret)
    }

    /// Initializes a new templated 2D frame model.
    pub fn new_2d_frame(
        &self,
        temp_type: Frame2DType,
        number_stories: i32,
        story_height: f64,
        number_bays: i32,
        bay_width: f64,
    ) -> SapResult<i32> {
        let reply = self.h.call(
            "SapModel.File.New2DFrame",
            &[
                temp_type.code().into(),
                number_stories.into(),
                story_height.into(),
                number_bays.into(),
                bay_width.into(),
            ],
        )?;
        Ok(reply.ret)
    }

    /// Initializes a new templated 3D frame model.
    #[allow(clippy::too_many_arguments)]
    pub fn new_3d_frame(
        &self,
        temp_type: Frame3DType,
        number_stories: i32,
        story_height: f64,
        number_bays_x: i32,
        bay_width_x: f64,
        number_bays_y: i32,
        bay_width_y: f64,
    ) -> SapResult<i32> {
        let reply = self.h.call(
            "SapModel.File.New3DFrame",
            &[
                temp_type.code().into(),
                number_stories.into(),
                story_height.into(),
                number_bays_x.into(),
                bay_width_x.into(),
                number_bays_y.into(),
                bay_width_y.into(),
            ],
        )?;
        Ok(reply.ret)
    }

    /// Initializes a new templated wall model.
    pub fn new_wall(
        &self,
        number_x_divisions: i32,
        division_width_x: f64,
        number_z_divisions: i32,
        division_width_z: f64,
    ) -> SapResult<i32> {
        let reply = self.h.call(
            "SapModel.File.NewWall",
            &[
                number_x_divisions.into(),
                division_width_x.into(),
                number_z_divisions.into(),
                division_width_z.into(),
            ],
        )?;
        Ok(reply.ret)
    }

    /// Initializes a new templated solid block model.
    #[allow(clippy::too_many_arguments)]
    pub fn new_solid_block(
        &self,
        x_width: f64,
        y_width: f64,
        height: f64,
        restraint_at_bottom: bool,
        number_x_divisions: i32,
        number_y_divisions: i32,
        number_z_divisions: i32,
    ) -> SapResult<i32> {
        let reply = self.h.call(
            "SapModel.File.NewSolidBlock",
            &[
                x_width.into(),
                y_width.into(),
                height.into(),
                restraint_at_bottom.into(),
                number_x_divisions.into(),
                number_y_divisions.into(),
                number_z_divisions.into(),
            ],
        )?;
        Ok(reply.ret)
    }
}

fn path_str(path: &Path) -> SapResult<&str> {
    path.to_str().ok_or_else(|| {
        SapError::InvalidArgument(format!("path {} is not valid UTF-8", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::recording::RecordingEngine;

    #[test]
    fn test_open_rejects_unknown_extension_without_engine_call() {
        let (engine, handle) = RecordingEngine::handle();
        let file = File::new(handle);
        let err = file.open(Path::new("model.txt")).unwrap_err();
        assert!(matches!(err, SapError::InvalidArgument(_)));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_open_existing_file_forwards_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.sdb");
        std::fs::write(&path, b"").unwrap();

        let (engine, handle) = RecordingEngine::handle();
        let file = File::new(handle);
        assert_eq!(file.open(&path).unwrap(), 0);
        let calls = engine.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "SapModel.File.OpenFile");
    }

    #[test]
    fn test_open_missing_native_file_creates_blank_then_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("model.sdb");

        let (engine, handle) = RecordingEngine::handle();
        let file = File::new(handle);
        assert_eq!(file.open(&path).unwrap(), 0);
        let methods: Vec<String> = engine.calls().into_iter().map(|c| c.method).collect();
        assert_eq!(methods, vec!["SapModel.File.NewBlank", "SapModel.File.Save"]);
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_open_missing_import_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.s2k");

        let (engine, handle) = RecordingEngine::handle();
        let file = File::new(handle);
        assert!(file.open(&path).is_err());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_new_wall_forwards_parameters() {
        let (engine, handle) = RecordingEngine::handle();
        let file = File::new(handle);
        file.new_wall(4, 1.5, 3, 2.0).unwrap();
        let call = engine.last_call().unwrap();
        assert_eq!(call.method, "SapModel.File.NewWall");
        assert_eq!(call.args.len(), 4);
    }
}
