use crate::error::{ConvertError, Result};
use crate::model::{ColoredMesh, ColoredVertex, Triangle};
use crate::resources::ResourceLoader;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Face corners written as `v/vt`, `v//vn` or `v/vt/vn`
static FACE_ATTRIBUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d*/").expect("face attribute regex is valid"));

/// Name used in I/O errors when parsing from an anonymous stream
const STREAM_ORIGIN: &str = "<stream>";

/// Represents a raw triangle as the 1-based indices written in the file.
/// Indices are only resolved once every vertex has been read
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RawFace {
    indices: [i64; 3],
    line_number: usize,
}
impl RawFace {
    fn parse(fields: &[&str], line_number: usize) -> Result<Self> {
        if let Some(corner) = fields.iter().find(|c| FACE_ATTRIBUTES.is_match(c)) {
            return Err(ConvertError::UnsupportedFaceAttributes {
                line_number,
                corner: String::from(*corner),
            });
        }
        if fields.len() != 3 {
            return Err(ConvertError::UnsupportedFaceArity {
                line_number,
                found: fields.len(),
            });
        }

        let mut indices = [0i64; 3];
        for (index, field) in indices.iter_mut().zip(fields) {
            *index = field
                .parse::<i64>()
                .map_err(|_| ConvertError::MalformedNumber {
                    line_number,
                    token: String::from(*field),
                })?;
        }
        Ok(Self {
            indices,
            line_number,
        })
    }

    // .obj files aren't 0-indexed, and relative (negative) indices are not supported
    fn resolve(&self, vertex_count: usize) -> Result<Triangle> {
        let mut triangle = [0usize; 3];
        for (resolved, &index) in triangle.iter_mut().zip(&self.indices) {
            match usize::try_from(index) {
                Ok(i) if (1..=vertex_count).contains(&i) => *resolved = i - 1,
                _ => {
                    return Err(ConvertError::VertexIndexOutOfRange {
                        line_number: self.line_number,
                        index,
                        vertex_count,
                    })
                }
            }
        }
        Ok(triangle)
    }
}

/// The lines of a colored OBJ file that carry meaning
#[derive(Debug, Clone, PartialEq)]
enum Record {
    Group,
    Vertex(ColoredVertex),
    Face(RawFace),
}
impl Record {
    fn parse(line: &str, line_number: usize) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let tag = parts.next().unwrap_or_default();
        let fields: Vec<&str> = parts.collect();

        match tag {
            "g" => Ok(Self::Group),
            "v" => {
                if fields.len() != 6 {
                    return Err(ConvertError::MissingColorData {
                        line_number,
                        line: String::from(line),
                    });
                }
                let mut values = [0f64; 6];
                for (value, field) in values.iter_mut().zip(&fields) {
                    // inf and NaN parse, but are not valid xs:double text in the output
                    *value = field
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| ConvertError::MalformedNumber {
                            line_number,
                            token: String::from(*field),
                        })?;
                }
                let [x, y, z, r, g, b] = values;
                Ok(Self::Vertex(ColoredVertex::new([x, y, z], [r, g, b])))
            }
            "f" => RawFace::parse(&fields, line_number).map(Self::Face),
            "mtllib" => Err(ConvertError::UnsupportedMaterialLibrary { line_number }),
            _ => Err(ConvertError::UnrecognizedLine {
                line_number,
                line: String::from(line),
            }),
        }
    }
}

/// Parses a colored OBJ document from any buffered stream.
///
/// Stops at the first unsupported or malformed line. The returned mesh has
/// every face index resolved against the complete vertex list
pub fn parse_colored_obj<R: BufRead>(reader: R) -> Result<ColoredMesh> {
    parse_from(reader, Path::new(STREAM_ORIGIN))
}

fn parse_from<R: BufRead>(reader: R, origin: &Path) -> Result<ColoredMesh> {
    let mut mesh = ColoredMesh::default();
    let mut faces = vec![];

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| ConvertError::io(origin, err))?;
        let line_number = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match Record::parse(line, line_number)? {
            Record::Group => debug!("ignoring group declaration on line {}", line_number),
            Record::Vertex(vertex) => mesh.push_vertex(vertex),
            Record::Face(face) => faces.push(face),
        }
    }

    let vertex_count = mesh.vertex_count();
    for face in &faces {
        mesh.push_triangle(face.resolve(vertex_count)?);
    }

    Ok(mesh)
}

/// Loads a colored mesh from an .obj file on disk
pub struct ColoredObjLoader {
    pub path: PathBuf,
}
impl ColoredObjLoader {
    /// Initializes a new loader for the given file
    pub fn new(path: impl Into<PathBuf>) -> ColoredObjLoader {
        ColoredObjLoader { path: path.into() }
    }
}
impl ResourceLoader for ColoredObjLoader {
    type Item = ColoredMesh;

    fn load(&mut self) -> Result<Self::Item> {
        // The file is closed as soon as parsing ends, whatever the outcome
        let file = File::open(&self.path).map_err(|err| ConvertError::io(&self.path, err))?;
        let mesh = parse_from(BufReader::new(file), &self.path)?;

        info!(
            "Loaded {} vertices and {} triangles from {:?}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            self.path
        );
        Ok(mesh)
    }
}
