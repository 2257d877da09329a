#[cfg(feature = "archive")]
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
#[cfg(feature = "archive")]
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};
use indexmap::IndexMap;
use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map, opt};
use nom::error::{ErrorKind, ParseError};
use nom::sequence::{pair, preceded, tuple};
use nom::IResult;
use thiserror::Error;
use tracing::{debug, info, warn};
#[cfg(feature = "archive")]
use zip::write::FileOptions;
use crate::geometry::{GeometryError, Vector2D, Vector3D, Vector4D};
use crate::mesh::{BoundingBox, FaceIndexError, Mesh, MeshFloat, MeshReader, MeshWriter, Triangle};
use crate::normals::NormalReport;
use crate::util::SliceExtension;

/// OBJ processing error
///
/// [`ObjError::MalformedRecord`], [`ObjError::UnsupportedFaceArity`] and [`ObjError::FaceVertexOutOfBounds`] all describe
/// structurally invalid input. Degenerate triangles are never an error.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("IO error while processing OBJ document: {0}")]
    IO(#[from] io::Error),
    #[error("output file {} already exists", .0.display())]
    AlreadyExists(PathBuf),
    /// Wrong number of operands, or an operand that is not a valid number or index
    #[error("malformed record: {message} (line {line})")]
    MalformedRecord { line: usize, message: String },
    #[error("faces with {arity} vertices are not supported, only 3 or 4 (line {line})")]
    UnsupportedFaceArity { line: usize, arity: usize },
    #[error("lines starting with \"{tag}\" are not supported (line {line})")]
    UnrecognizedRecord { line: usize, tag: String },
    #[error("{source} (line {line})")]
    Geometry { line: usize, source: GeometryError },
    #[error("invalid face: {0}")]
    FaceVertexOutOfBounds(#[from] FaceIndexError),
    #[cfg(feature = "archive")]
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Record tags that are recognised, but whose contents this crate does not use
const UNIMPLEMENTED_TAGS: [&str; 5] = ["g", "mtllib", "o", "usemtl", "s"];

#[derive(Debug, PartialEq)]
enum FaceSyntaxError {
    // Generic nom parsing error; Typically trailing characters
    Nom,
    ExpectedIndex,
    ZeroIndex,
    IndexTooLarge,
}

impl ParseError<&str> for FaceSyntaxError {
    fn from_error_kind(_input: &str, _kind: ErrorKind) -> Self {
        FaceSyntaxError::Nom
    }

    fn append(_input: &str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// One `index[/texIndex[/normIndex]]` operand of a face record, converted to 0-based indices
#[derive(Debug, Copy, Clone, PartialEq)]
struct FaceVertex {
    vertex: usize,
    tex_coord: Option<usize>,
}

/// 1-based index, returned 0-based
fn face_index(input: &str) -> IResult<&str, usize, FaceSyntaxError> {
    let (remaining, digits) = digit1(input)
        .map_err(|err| err.map(|_: (&str, ErrorKind)| FaceSyntaxError::ExpectedIndex))?;
    match usize::from_str(digits) {
        Ok(0) => Err(nom::Err::Failure(FaceSyntaxError::ZeroIndex)),
        Ok(index) => Ok((remaining, index - 1)),
        Err(_) => Err(nom::Err::Failure(FaceSyntaxError::IndexTooLarge)),
    }
}

/// Parses `index`, `index/tex`, `index//normal`, `index/tex/normal` and variants with empty subfields
///
/// The normal subfield must be a valid index if present, but is otherwise discarded
fn face_vertex(input: &str) -> IResult<&str, FaceVertex, FaceSyntaxError> {
    map(
        tuple((
            face_index,
            opt(preceded(
                tag("/"),
                pair(opt(face_index), opt(preceded(tag("/"), opt(face_index)))),
            )),
        )),
        |(vertex, subfields)| FaceVertex {
            vertex,
            tex_coord: subfields.and_then(|(tex_coord, _normal)| tex_coord),
        },
    )(input)
}

/// Line-by-line OBJ parser
///
/// Lines must be fed in document order; Errors report the 1-based number of the offending line.
#[derive(Debug, Default)]
pub struct ObjParser {
    mesh: Mesh,
    line: usize,
}

impl ObjParser {
    pub fn new() -> Self {
        ObjParser::default()
    }

    /// Number of lines parsed so far
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// The mesh built so far
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn finish(self) -> Mesh {
        self.mesh
    }

    /// Parses a single line and applies it to the mesh
    ///
    /// Fields are separated by spaces; Repeated spaces are treated as one. A trailing carriage return is ignored.
    pub fn parse_line(&mut self, line: &str) -> Result<(), ObjError> {
        self.line += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        let tokens = line.split(' ').filter(|token| !token.is_empty()).collect::<Vec<_>>();

        let Some((&record_tag, operands)) = tokens.split_first() else {
            return Ok(());  // Empty line
        };

        match record_tag {
            "v" => {
                let position = match operands.len() {
                    3 => Vector3D::new(self.parse_floats::<3>(operands, "v")?),
                    4 => Vector4D::new(self.parse_floats::<4>(operands, "v")?)
                        .to_euclidean()
                        .map_err(|source| ObjError::Geometry { line: self.line, source })?,
                    _ => return Err(self.malformed(format!("vertex needs 3 or 4 coordinates, found {}", operands.len()))),
                };
                self.mesh.push_vertex(position);
            }
            "vt" => {
                let uv = match operands.len() {
                    2 => self.parse_floats::<2>(operands, "vt")?,
                    3 => {
                        let [u, v, _w] = self.parse_floats::<3>(operands, "vt")?;
                        [u, v]
                    }
                    _ => return Err(self.malformed(format!("texture coordinate needs 2 or 3 values, found {}", operands.len()))),
                };
                self.mesh.push_tex_coord(Vector2D::new(uv));
            }
            "vn" => {
                let normal = self.parse_floats::<3>(operands, "vn")?;
                self.mesh.input_normals.push(Vector3D::new(normal));
            }
            "f" => self.parse_face(operands)?,
            _ if record_tag.starts_with('#') => {}
            _ if UNIMPLEMENTED_TAGS.contains(&record_tag) => {
                let seen = self.mesh.ignored_records.entry(record_tag.to_string()).or_insert(0);
                if *seen == 0 {
                    warn!(line = self.line, "\"{}\" records are not implemented and will be ignored", record_tag);
                } else {
                    debug!(line = self.line, "ignoring \"{}\" record", record_tag);
                }
                *seen += 1;
            }
            _ => {
                return Err(ObjError::UnrecognizedRecord { line: self.line, tag: record_tag.to_string() });
            }
        }
        Ok(())
    }

    /// Parses a face record; Quads are split into the triangles (0, 1, 2) and (0, 2, 3)
    fn parse_face(&mut self, operands: &[&str]) -> Result<(), ObjError> {
        let corners = operands.iter()
            .map(|operand| self.parse_face_vertex(operand))
            .collect::<Result<Vec<_>, _>>()?;

        let triangles = match corners.as_slice() {
            [a, b, c] => vec![[*a, *b, *c]],
            [a, b, c, d] => vec![[*a, *b, *c], [*a, *c, *d]],
            _ => return Err(ObjError::UnsupportedFaceArity { line: self.line, arity: operands.len() }),
        };

        self.mesh.face_count += 1;
        for corners in triangles {
            self.mesh.push_triangle(Triangle::new(
                corners.map(|corner| corner.vertex),
                corners.map(|corner| corner.tex_coord.unwrap_or(0)),
            ));
        }
        Ok(())
    }

    fn parse_face_vertex(&self, operand: &str) -> Result<FaceVertex, ObjError> {
        match all_consuming(face_vertex)(operand) {
            Ok((_, parsed)) => Ok(parsed),
            Err(nom::Err::Incomplete(_)) => Err(self.malformed(format!("incomplete face vertex \"{}\"", operand))),
            Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
                let message = match err {
                    FaceSyntaxError::Nom => "unexpected characters in",
                    FaceSyntaxError::ExpectedIndex => "expected positive index in",
                    FaceSyntaxError::ZeroIndex => "indices start at 1 in",
                    FaceSyntaxError::IndexTooLarge => "index out of range in",
                };
                Err(self.malformed(format!("{} face vertex \"{}\"", message, operand)))
            }
        }
    }

    /// Parses exactly `N` float operands
    fn parse_floats<const N: usize>(&self, operands: &[&str], record_tag: &str) -> Result<[MeshFloat; N], ObjError> {
        let tokens = operands.select_exact_array::<N>(0)
            .ok_or_else(|| self.malformed(format!("\"{}\" needs {} values, found {}", record_tag, N, operands.len())))?;

        let mut values = [0.0; N];
        for (value, token) in values.iter_mut().zip(tokens) {
            *value = MeshFloat::from_str(token)
                .map_err(|_| self.malformed(format!("expected number, found \"{}\"", token)))?;
        }
        Ok(values)
    }

    fn malformed(&self, message: String) -> ObjError {
        ObjError::MalformedRecord { line: self.line, message }
    }
}

/// What [`WavefrontObj::write_mesh`] wrote
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct WriteReport {
    pub triangles_written: usize,
    /// Degenerate triangles, left out of the output
    pub triangles_omitted: usize,
}

/// Wavefront .obj parser & generator
pub struct WavefrontObj;

impl<R: BufRead> MeshReader<R, ObjError> for WavefrontObj {
    fn read_mesh(input: R) -> Result<Mesh, ObjError> {
        let mut parser = ObjParser::new();
        for line in input.lines() {
            parser.parse_line(&line?)?;
        }
        debug!(
            lines = parser.line_number(),
            vertices = parser.mesh().vertices().len(),
            triangles = parser.mesh().triangles().len(),
            "OBJ document parsed"
        );
        Ok(parser.finish())
    }
}

impl<W: Write> MeshWriter<W, io::Error> for WavefrontObj {
    type Report = WriteReport;

    /// Writes vertices, texture coordinates, vertex normals and faces, in that order
    ///
    /// Vertex normals are written in vertex order, so each face corner uses its vertex index as normal index.
    /// Degenerate triangles are left out.
    fn write_mesh(mut output: W, mesh: &Mesh) -> Result<WriteReport, io::Error> {
        writeln!(output, "# Vertices")?;
        for vertex in mesh.vertices() {
            let [x, y, z] = vertex.position().to_array();
            writeln!(output, "v {:?} {:?} {:?}", x, y, z)?;
        }

        writeln!(output, "# Texture coordinates")?;
        for uv in mesh.tex_coords() {
            let [u, v] = uv.to_array();
            writeln!(output, "vt {:?} {:?}", u, v)?;
        }

        writeln!(output, "# Vertex normals")?;
        for vertex in mesh.vertices() {
            let [x, y, z] = vertex.normal().to_array();
            writeln!(output, "vn {:?} {:?} {:?}", x, y, z)?;
        }

        let mut report = WriteReport::default();
        writeln!(output, "# Faces")?;
        for (index, triangle) in mesh.triangles().iter().enumerate() {
            if triangle.is_degenerate() {
                info!(triangle = index, "leaving out triangle with NaN normal");
                report.triangles_omitted += 1;
                continue;
            }
            write!(output, "f")?;
            for (vertex, tex_coord) in triangle.vertices().into_iter().zip(triangle.tex_coords()) {
                write!(output, " {}/{}/{}", vertex + 1, tex_coord + 1, vertex + 1)?;
            }
            writeln!(output)?;
            report.triangles_written += 1;
        }

        output.flush()?;
        Ok(report)
    }
}

/// Writes the OBJ document as the single entry of a zip archive
#[cfg(feature = "archive")]
pub struct ObjArchive;

#[cfg(feature = "archive")]
impl ObjArchive {
    /// Writes `mesh` into the archive as `<name>.obj`
    pub fn write_named<W: Write + Seek>(output: W, name: &str, mesh: &Mesh) -> Result<WriteReport, ObjError> {
        let mut zip_writer = zip::ZipWriter::new(output);
        zip_writer.start_file(format!("{}.obj", name), FileOptions::default())?;
        let report = WavefrontObj::write_mesh(&mut zip_writer, mesh)?;
        zip_writer.finish()?;
        Ok(report)
    }
}

#[cfg(feature = "archive")]
impl<W: Write + Seek> MeshWriter<W, ObjError> for ObjArchive {
    type Report = WriteReport;

    fn write_mesh(output: W, mesh: &Mesh) -> Result<WriteReport, ObjError> {
        ObjArchive::write_named(output, "mesh", mesh)
    }
}

/// Output container for [`rebuild_normals`]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    /// Plain .obj document
    #[default]
    Obj,
    /// Zip archive holding one .obj document, named after the output file
    #[cfg(feature = "archive")]
    Archive,
}

/// Statistics of a [`rebuild_normals`] run
#[derive(Clone, PartialEq, Debug)]
pub struct RebuildSummary {
    pub vertices: usize,
    pub tex_coords: usize,
    /// Normals present in the input; These are replaced
    pub input_normals: usize,
    pub faces: usize,
    pub triangles: usize,
    pub ignored_records: IndexMap<String, usize>,
    pub bounding_box: Option<BoundingBox>,
    pub normals: NormalReport,
    pub written: WriteReport,
    pub parse_time: Duration,
}

/// Reads the OBJ file at `input`, recomputes all vertex normals and writes the result to `output`
///
/// `output` must not exist yet; It is created before `input` is read. If reading or normal computation fails, the
/// (still empty) output file is removed again. A failure while writing leaves whatever was already written.
pub fn rebuild_normals(input: &Path, output: &Path, format: OutputFormat) -> Result<RebuildSummary, ObjError> {
    let output_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => ObjError::AlreadyExists(output.to_path_buf()),
            _ => ObjError::IO(err),
        })?;

    info!(input = %input.display(), "start parsing file");
    let start = Instant::now();
    let (mesh, normals) = match read_with_normals(input) {
        Ok(result) => result,
        Err(err) => {
            drop(output_file);
            if let Err(remove_err) = fs::remove_file(output) {
                warn!(output = %output.display(), "could not remove output file: {}", remove_err);
            }
            return Err(err);
        }
    };
    let parse_time = start.elapsed();
    info!(input = %input.display(), "parsing finished in {} ms", parse_time.as_millis());

    let written = match format {
        OutputFormat::Obj => WavefrontObj::write_mesh(BufWriter::new(output_file), &mesh)?,
        #[cfg(feature = "archive")]
        OutputFormat::Archive => {
            let name = output.file_stem().and_then(OsStr::to_str).unwrap_or("mesh");
            ObjArchive::write_named(output_file, name, &mesh)?
        }
    };
    info!(output = %output.display(), triangles = written.triangles_written, "output written");

    Ok(RebuildSummary {
        vertices: mesh.vertices().len(),
        tex_coords: mesh.tex_coords().len(),
        input_normals: mesh.input_normals().len(),
        faces: mesh.face_count(),
        triangles: mesh.triangles().len(),
        ignored_records: mesh.ignored_records().clone(),
        bounding_box: mesh.bounding_box(),
        normals,
        written,
        parse_time,
    })
}

fn read_with_normals(input: &Path) -> Result<(Mesh, NormalReport), ObjError> {
    let mut mesh = WavefrontObj::read_mesh(BufReader::new(File::open(input)?))?;
    let normals = mesh.compute_normals()?;
    Ok((mesh, normals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(document: &str) -> Result<Mesh, ObjError> {
        WavefrontObj::read_mesh(document.as_bytes())
    }

    fn write(mesh: &Mesh) -> (String, WriteReport) {
        let mut buffer = Vec::new();
        let report = WavefrontObj::write_mesh(&mut buffer, mesh).unwrap();
        (String::from_utf8(buffer).unwrap(), report)
    }

    #[test]
    fn face_vertex_forms() {
        assert_eq!(face_vertex("3"), Ok(("", FaceVertex { vertex: 2, tex_coord: None })));
        assert_eq!(face_vertex("3/7"), Ok(("", FaceVertex { vertex: 2, tex_coord: Some(6) })));
        assert_eq!(face_vertex("3/7/9"), Ok(("", FaceVertex { vertex: 2, tex_coord: Some(6) })));
        assert_eq!(face_vertex("3//9"), Ok(("", FaceVertex { vertex: 2, tex_coord: None })));
        assert_eq!(face_vertex("3//"), Ok(("", FaceVertex { vertex: 2, tex_coord: None })));
        assert_eq!(face_vertex("3/"), Ok(("", FaceVertex { vertex: 2, tex_coord: None })));
    }

    #[test]
    fn face_vertex_rejects_invalid_indices() {
        assert_eq!(face_vertex("0"), Err(nom::Err::Failure(FaceSyntaxError::ZeroIndex)));
        assert_eq!(face_vertex("1/0"), Err(nom::Err::Failure(FaceSyntaxError::ZeroIndex)));
        assert_eq!(face_vertex("-1"), Err(nom::Err::Error(FaceSyntaxError::ExpectedIndex)));
        assert_eq!(face_vertex("99999999999999999999999"), Err(nom::Err::Failure(FaceSyntaxError::IndexTooLarge)));
        assert!(all_consuming(face_vertex)("1/a").is_err());
    }

    #[test]
    fn parses_records_into_mesh() {
        let mesh = parse("# a comment\nv 0 0 0\nv 1.5 -2 3e1\nvt 0.5 0.25\nvt 1 0 0\nvn 0 0 1\n\nv 0 1 0\nf 1/1 2/2 3/1\n").unwrap();

        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.vertices()[1].position().to_array(), [1.5, -2.0, 30.0]);
        assert_eq!(mesh.tex_coords(), &[Vector2D::new([0.5, 0.25]), Vector2D::new([1.0, 0.0])]);
        assert_eq!(mesh.input_normals(), &[Vector3D::new([0.0, 0.0, 1.0])]);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.triangles(), &[Triangle::new([0, 1, 2], [0, 1, 0])]);
        assert!(mesh.vertices().iter().all(|vertex| vertex.normal().is_zero()));
    }

    #[test]
    fn collapses_repeated_spaces_and_carriage_returns() {
        let mut parser = ObjParser::new();
        parser.parse_line("v  1   2 3\r").unwrap();
        parser.parse_line("  v 4 5 6  ").unwrap();
        let mesh = parser.finish();
        assert_eq!(mesh.vertices()[0].position().to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(mesh.vertices()[1].position().to_array(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn homogeneous_vertex_is_divided() {
        let mesh = parse("v 2 4 6 2\n").unwrap();
        assert_eq!(mesh.vertices()[0].position().to_array(), [1.0, 2.0, 3.0]);

        let err = parse("v 0 0 0\nv 1 1 1 0\n").unwrap_err();
        assert!(matches!(err, ObjError::Geometry { line: 2, source: GeometryError::DivisionByZero }), "{:?}", err);
    }

    #[test]
    fn quad_is_split_into_two_triangles() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\nf 1/1 2/2 3/3 4/4\n").unwrap();
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.triangles(), &[
            Triangle::new([0, 1, 2], [0, 1, 2]),
            Triangle::new([0, 2, 3], [0, 2, 3]),
        ]);
    }

    #[test]
    fn face_arity_outside_three_or_four_fails() {
        let two = parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(matches!(two, ObjError::UnsupportedFaceArity { line: 3, arity: 2 }), "{:?}", two);

        let five = parse("f 1 2 3 4 5\n").unwrap_err();
        assert!(matches!(five, ObjError::UnsupportedFaceArity { line: 1, arity: 5 }), "{:?}", five);
    }

    #[test]
    fn empty_texture_subfield_defaults_to_zero() {
        let mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1//  2//  3//\n").unwrap();
        assert_eq!(mesh.triangles(), &[Triangle::new([0, 1, 2], [0, 0, 0])]);
    }

    #[test]
    fn unimplemented_records_are_tallied() {
        let mesh = parse("mtllib a.mtl\no cube\ng side\nusemtl red\ns 1\nusemtl blue\nv 0 0 0\n").unwrap();
        assert_eq!(mesh.vertices().len(), 1);
        let tally = mesh.ignored_records().iter().map(|(tag, count)| (tag.as_str(), *count)).collect::<Vec<_>>();
        assert_eq!(tally, [("mtllib", 1), ("o", 1), ("g", 1), ("usemtl", 2), ("s", 1)]);
    }

    #[test]
    fn unknown_record_fails() {
        let err = parse("v 0 0 0\nvp 0.5\n").unwrap_err();
        assert!(matches!(&err, ObjError::UnrecognizedRecord { line: 2, tag: record_tag } if record_tag == "vp"), "{:?}", err);
        assert_eq!(err.to_string(), "lines starting with \"vp\" are not supported (line 2)");
    }

    #[test]
    fn malformed_records_fail() {
        for (document, line) in [
            ("v 1 2\n", 1),
            ("v 1 2 3 4 5\n", 1),
            ("v 0 0 0\nv 1 x 3\n", 2),
            ("vt 1\n", 1),
            ("vn 1 2\n", 1),
            ("v 0 0 0\nf 1 2/ 0\n", 2),
            ("f 1 -2 3\n", 1),
            ("f a b c\n", 1),
        ] {
            match parse(document) {
                Err(ObjError::MalformedRecord { line: error_line, .. }) => assert_eq!(error_line, line, "{:?}", document),
                other => panic!("expected malformed record for {:?}, got {:?}", document, other),
            }
        }
    }

    #[test]
    fn writes_blocks_in_order() {
        let mut mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0.5 1\nf 1/1 2 3\n").unwrap();
        mesh.compute_normals().unwrap();
        let (text, report) = write(&mesh);

        assert_eq!(report, WriteReport { triangles_written: 1, triangles_omitted: 0 });
        assert_eq!(text, "\
# Vertices
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
# Texture coordinates
vt 0.5 1.0
# Vertex normals
vn 0.0 0.0 1.0
vn 0.0 0.0 1.0
vn 0.0 0.0 1.0
# Faces
f 1/1/1 2/1/2 3/1/3
");
    }

    #[test]
    fn degenerate_triangles_are_omitted() {
        let mut mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 2 0 0\nf 1 2 4\nf 1 2 3\n").unwrap();
        let normals = mesh.compute_normals().unwrap();
        assert_eq!(normals.degenerate_triangles, 1);

        let (text, report) = write(&mesh);
        assert_eq!(report, WriteReport { triangles_written: 1, triangles_omitted: 1 });
        let faces = text.lines().filter(|line| line.starts_with("f ")).collect::<Vec<_>>();
        assert_eq!(faces, ["f 1/1/1 2/1/2 3/1/3"]);
        // Vertex 4 only touches the degenerate triangle
        assert!(text.contains("vn 0.0 0.0 0.0"));
    }

    #[test]
    fn written_document_parses_back() {
        let mut mesh = parse("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
        mesh.compute_normals().unwrap();
        let (text, _) = write(&mesh);

        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed.vertices().len(), 4);
        assert_eq!(reparsed.input_normals().len(), 4);
        assert_eq!(reparsed.triangles(), mesh.triangles().iter()
            .map(|triangle| Triangle::new(triangle.vertices(), triangle.tex_coords()))
            .collect::<Vec<_>>());
    }

    #[cfg(feature = "archive")]
    #[test]
    fn archive_holds_obj_document() {
        use std::io::{Cursor, Read};

        let mut mesh = parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        mesh.compute_normals().unwrap();

        let mut archive_bytes = Cursor::new(Vec::new());
        let report = ObjArchive::write_named(&mut archive_bytes, "triangle", &mesh).unwrap();
        assert_eq!(report.triangles_written, 1);

        let mut archive = zip::ZipArchive::new(archive_bytes).unwrap();
        let mut contents = String::new();
        archive.by_name("triangle.obj").unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, write(&mesh).0);
    }
}
