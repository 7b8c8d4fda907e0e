//! Integration with a 3D content-creation application.
//!
//! The converter never talks to the application directly: the application
//! implements [`SceneHost`] and hands itself to [`run_with_host`].

use crate::error::{ConvertError, Result};
use crate::{convert_file, ConvertOptions};
use std::path::{Path, PathBuf};
use tracing::info;

/// The operations a host application provides around a conversion
pub trait SceneHost {
    /// Asks the user for an .obj file. `None` means the choice was cancelled
    fn choose_input_file(&mut self) -> Option<PathBuf>;
    /// Imports a COLLADA file into the current scene
    fn load_scene(&mut self, path: &Path) -> Result<()>;
    fn select_all(&mut self) -> Result<()>;
    /// Switches the viewport to colour-shaded display so vertex colours show up
    fn enable_vertex_color_display(&mut self) -> Result<()>;
}

/// Runs the whole tool: pick a file, convert it next to the input, then load
/// and display the result in the host.
/// Returns the path of the written .dae file
pub fn run_with_host<H: SceneHost + ?Sized>(host: &mut H) -> Result<PathBuf> {
    let input = host
        .choose_input_file()
        .ok_or_else(|| ConvertError::Host(String::from("no input file was chosen")))?;
    info!("Converting {:?}", input);

    let output = convert_file(&input, &ConvertOptions::default())?;

    host.load_scene(&output)?;
    host.select_all()?;
    host.enable_vertex_color_display()?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Default)]
    struct RecordingHost {
        input: Option<PathBuf>,
        calls: Vec<String>,
    }
    impl SceneHost for RecordingHost {
        fn choose_input_file(&mut self) -> Option<PathBuf> {
            self.calls.push(String::from("choose_input_file"));
            self.input.clone()
        }
        fn load_scene(&mut self, path: &Path) -> Result<()> {
            self.calls.push(format!("load_scene {}", path.display()));
            Ok(())
        }
        fn select_all(&mut self) -> Result<()> {
            self.calls.push(String::from("select_all"));
            Ok(())
        }
        fn enable_vertex_color_display(&mut self) -> Result<()> {
            self.calls.push(String::from("enable_vertex_color_display"));
            Ok(())
        }
    }

    #[test]
    fn full_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("face.obj");
        fs::write(&input, "v 0 0 0 1 0 0\nv 1 0 0 0 1 0\nv 0 1 0 0 0 1\nf 1 2 3\n").unwrap();

        let mut host = RecordingHost {
            input: Some(input.clone()),
            ..Default::default()
        };
        let output = run_with_host(&mut host).unwrap();

        assert_eq!(output, dir.path().join("face.obj.dae"));
        assert!(output.exists());
        assert_eq!(
            host.calls,
            vec![
                String::from("choose_input_file"),
                format!("load_scene {}", output.display()),
                String::from("select_all"),
                String::from("enable_vertex_color_display"),
            ]
        );
    }

    #[test]
    fn cancelled_choice() {
        let mut host = RecordingHost::default();
        assert!(matches!(run_with_host(&mut host), Err(ConvertError::Host(_))));
        assert_eq!(host.calls, vec![String::from("choose_input_file")]);
    }

    #[test]
    fn failed_conversion_skips_scene_steps() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("textured.obj");
        fs::write(&input, "mtllib textured.mtl\nv 0 0 0\n").unwrap();

        let mut host = RecordingHost {
            input: Some(input),
            ..Default::default()
        };
        assert!(matches!(
            run_with_host(&mut host),
            Err(ConvertError::UnsupportedMaterialLibrary { .. })
        ));
        assert_eq!(host.calls.len(), 1);
        assert!(!dir.path().join("textured.obj.dae").exists());
    }
}
