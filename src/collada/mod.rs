//! COLLADA 1.4.1 output for coloured meshes.
//!
//! The document holds a single geometry with two sources, positions (stride 3)
//! and vertex colours (stride 4), and one `<triangles>` primitive reading both
//! streams with the same index per corner.

use crate::model::ColoredMesh;
use std::fmt::Debug;
use std::io::{self, Write};

// Every id and url in the document derives from these
const GEOMETRY_ID: &str = "shape0-lib";
const GEOMETRY_NAME: &str = "shape0";
const VISUAL_SCENE_ID: &str = "VisualSceneNode";

fn header() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">
  <asset>
    <up_axis>Y_UP</up_axis>
  </asset>
  <library_geometries>
    <geometry id="{id}" name="{name}">
      <mesh>
"#,
        id = GEOMETRY_ID,
        name = GEOMETRY_NAME,
    )
}

fn footer() -> String {
    format!(
        r##"      </mesh>
    </geometry>
  </library_geometries>
  <library_visual_scenes>
    <visual_scene id="{scene}" name="VisualScene">
      <node id="node" name="node">
        <instance_geometry url="#{id}"/>
      </node>
    </visual_scene>
  </library_visual_scenes>
  <scene>
    <instance_visual_scene url="#{scene}"/>
  </scene>
</COLLADA>
"##,
        id = GEOMETRY_ID,
        scene = VISUAL_SCENE_ID,
    )
}

/// Renders the whole document in memory.
///
/// The mesh is expected to have been validated: an empty mesh still renders,
/// but to a document no importer will accept
pub fn to_collada_string(mesh: &ColoredMesh) -> String {
    let mut xml = String::with_capacity(mesh.vertex_count() * 120 + mesh.triangle_count() * 40);
    xml.push_str(&header());

    let positions: Vec<f64> = mesh.positions().collect();
    xml.push_str(&format!(
        r##"        <source id="{id}-positions" name="position">
          <float_array id="{id}-positions-array" count="{count}">{values}</float_array>
          <technique_common>
            <accessor count="{vertices}" source="#{id}-positions-array" stride="3">
              <param name="X" type="float"/>
              <param name="Y" type="float"/>
              <param name="Z" type="float"/>
            </accessor>
          </technique_common>
        </source>
"##,
        id = GEOMETRY_ID,
        count = positions.len(),
        values = join(&positions),
        vertices = positions.len() / 3,
    ));

    let colours: Vec<f64> = mesh.colours().collect();
    xml.push_str(&format!(
        r##"        <source id="{id}-vcolor" name="vcolor">
          <float_array id="{id}-vcolor-array" count="{count}">{values}</float_array>
          <technique_common>
            <accessor count="{vertices}" source="#{id}-vcolor-array" stride="4">
              <param name="R" type="float"/>
              <param name="G" type="float"/>
              <param name="B" type="float"/>
              <param name="A" type="float"/>
            </accessor>
          </technique_common>
        </source>
"##,
        id = GEOMETRY_ID,
        count = colours.len(),
        values = join(&colours),
        vertices = colours.len() / 4,
    ));

    xml.push_str(&format!(
        r##"        <vertices id="{id}-vertices">
          <input semantic="POSITION" source="#{id}-positions"/>
        </vertices>
        <triangles count="{count}">
          <input offset="0" semantic="VERTEX" source="#{id}-vertices"/>
          <input offset="1" semantic="COLOR" source="#{id}-vcolor"/>
          <p>{indices}</p>
        </triangles>
"##,
        id = GEOMETRY_ID,
        count = mesh.triangle_count(),
        indices = join(&interleaved_indices(mesh)),
    ));

    xml.push_str(&footer());
    xml
}

/// Writes the document to `writer` in one go
pub fn write_collada<W: Write>(mesh: &ColoredMesh, mut writer: W) -> io::Result<()> {
    writer.write_all(to_collada_string(mesh).as_bytes())?;
    writer.flush()
}

/// Each corner is listed once per input stream (VERTEX, then COLOR), and
/// both streams share the OBJ vertex index: a triangle (a, b, c) becomes
/// a a b b c c
fn interleaved_indices(mesh: &ColoredMesh) -> Vec<usize> {
    mesh.triangles()
        .iter()
        .flat_map(|&[a, b, c]| [a, a, b, b, c, c])
        .collect()
}

// Debug keeps the trailing ".0" on integral floats
fn join<T: Debug>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(" ")
}
