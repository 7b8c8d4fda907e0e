pub mod collada;
pub mod error;
pub mod host;
pub mod model;
pub mod resources;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use collada::{to_collada_string, write_collada};
pub use error::{ConvertError, Result};
pub use host::{run_with_host, SceneHost};
pub use model::{ColoredMesh, ColoredVertex};
pub use resources::{parse_colored_obj, ColoredObjLoader, ResourceLoader};

const OUTPUT_EXTENSION: &str = ".dae";

/// Options for a file conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Where to write the document, defaults to the input path with ".dae" appended
    pub output: Option<PathBuf>,
}

// face.obj becomes face.obj.dae, the original extension is kept
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(OUTPUT_EXTENSION);
    PathBuf::from(path)
}

// Converts one .obj file into a .dae file, returning the path that was written.
// The output file is only created once the input has been fully parsed and validated
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<PathBuf> {
    let mesh = ColoredObjLoader::new(input).load()?;
    mesh.validate()?;

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input));
    write_output(&output, |writer| write_collada(&mesh, writer))?;

    info!(
        "Wrote {} vertices and {} triangles to {:?}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        output
    );
    Ok(output)
}

// Creates `output` and hands it to `write`. If writing fails the file is
// removed again, so no truncated document is left behind
fn write_output<F>(output: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(output).map_err(|err| ConvertError::io(output, err))?;
    if let Err(err) = write(BufWriter::new(file)) {
        if let Err(remove_err) = fs::remove_file(output) {
            warn!("could not remove incomplete {:?}: {}", output, remove_err);
        }
        return Err(ConvertError::io(output, err));
    }
    Ok(())
}
