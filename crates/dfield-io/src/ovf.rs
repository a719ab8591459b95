//! OVF 2.0 encode/decode.
//!
//! A file is a comment-prefixed text header, a data section in one of the
//! three [`Representation`]s, and a two-line footer:
//!
//! ```text
//! # OOMMF OVF 2.0
//! # ...header keys...
//! # Begin: Data Text
//!  0.0 0.0 1.0
//!  ...one record per cell, x fastest...
//! # End: Data Text
//! # End: Segment
//! ```
//!
//! Binary data starts with a check value (`1234567.0` as `f32` or
//! `123456789012345.0` as `f64`) followed by every component in
//! little-endian order. Records always carry three components; scalar
//! fields are padded with zeros.

use std::io::{self, BufRead, Write};

use dfield_core::{FieldName, Point};
use dfield_field::{Field, FieldArray};
use dfield_mesh::Mesh;
use indexmap::IndexMap;

use crate::error::IoError;
use crate::format::{parse_real, push_real, real};
use crate::options::Representation;

/// Components per OVF record.
pub const VALUE_DIM: usize = 3;

/// Fail with [`IoError::UnsupportedDim`] unless `dim` is 1 or 3.
pub fn check_dim(dim: usize) -> Result<(), IoError> {
    match dim {
        1 | 3 => Ok(()),
        _ => Err(IoError::UnsupportedDim { dim }),
    }
}

// ── Encode ──────────────────────────────────────────────────────

/// Header lines, without the `# ` prefix, ending with `Begin: Data`.
pub fn header_lines(field: &Field, representation: Representation) -> Vec<String> {
    let mesh = field.mesh();
    let (pmin, pmax, cell, n) = (mesh.pmin(), mesh.pmax(), mesh.cell(), mesh.n());
    let name = field.name();

    let mut lines: Vec<String> = [
        "OOMMF OVF 2.0",
        "",
        "Segment count: 1",
        "",
        "Begin: Segment",
        "Begin: Header",
        "",
        "Title: Field generated omf file",
        "Desc: File generated by Field class",
        "meshunit: m",
        "meshtype: rectangular",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    const AXES: [&str; 3] = ["x", "y", "z"];
    for (a, axis) in AXES.iter().enumerate() {
        lines.push(format!("{axis}base: {}", real(pmin[a] + cell[a] / 2.0)));
    }
    for (a, axis) in AXES.iter().enumerate() {
        lines.push(format!("{axis}nodes: {}", n[a]));
    }
    for (a, axis) in AXES.iter().enumerate() {
        lines.push(format!("{axis}stepsize: {}", real(cell[a])));
    }
    for (a, axis) in AXES.iter().enumerate() {
        lines.push(format!("{axis}min: {}", real(pmin[a])));
    }
    for (a, axis) in AXES.iter().enumerate() {
        lines.push(format!("{axis}max: {}", real(pmax[a])));
    }
    lines.push(format!("valuedim: {VALUE_DIM}"));
    lines.push(format!("valuelabels: {name}_x {name}_y {name}_z"));
    lines.push("valueunits: A/m A/m A/m".to_string());
    lines.push(String::new());
    lines.push("End: Header".to_string());
    lines.push(String::new());
    lines.push(format!("Begin: Data {}", representation.tag()));
    lines
}

/// Write the header block.
pub fn encode_header<W: Write>(
    w: &mut W,
    field: &Field,
    representation: Representation,
) -> Result<(), IoError> {
    let mut out = String::new();
    for line in header_lines(field, representation) {
        out.push_str("# ");
        out.push_str(&line);
        out.push('\n');
    }
    w.write_all(out.as_bytes())?;
    Ok(())
}

/// Write one record per cell in canonical mesh order.
pub fn encode_data<W: Write>(
    w: &mut W,
    field: &Field,
    representation: Representation,
) -> Result<(), IoError> {
    check_dim(field.dim())?;
    let mesh = field.mesh();
    let array = field.array();
    match representation {
        Representation::Text => {
            let mut line = String::new();
            for index in mesh.indices() {
                line.clear();
                let cell = array.cell(index);
                for &v in cell {
                    line.push(' ');
                    push_real(&mut line, v);
                }
                if cell.len() == 1 {
                    line.push_str(" 0 0");
                }
                line.push('\n');
                w.write_all(line.as_bytes())?;
            }
        }
        Representation::Binary4 => {
            w.write_all(&Representation::BINARY4_SENTINEL.to_le_bytes())?;
            for index in mesh.indices() {
                for v in padded(array.cell(index)) {
                    w.write_all(&(v as f32).to_le_bytes())?;
                }
            }
        }
        Representation::Binary8 => {
            w.write_all(&Representation::BINARY8_SENTINEL.to_le_bytes())?;
            for index in mesh.indices() {
                for v in padded(array.cell(index)) {
                    w.write_all(&v.to_le_bytes())?;
                }
            }
        }
    }
    Ok(())
}

/// Write the `End: Data` and `End: Segment` lines.
pub fn encode_footer<W: Write>(w: &mut W, representation: Representation) -> Result<(), IoError> {
    write!(
        w,
        "# End: Data {}\n# End: Segment\n",
        representation.tag()
    )?;
    Ok(())
}

/// Write a complete OVF file to one sink.
///
/// ```
/// use dfield_field::Field;
/// use dfield_io::{ovf, Representation};
/// use dfield_mesh::Mesh;
///
/// let mesh = Mesh::new([0.0; 3], [2.0, 1.0, 1.0], [1.0; 3]).unwrap();
/// let field = Field::new(mesh, 3, [0.0, 0.0, 1.0]).unwrap();
///
/// let mut buf = Vec::new();
/// ovf::encode(&mut buf, &field, Representation::Text).unwrap();
/// let text = String::from_utf8(buf.clone()).unwrap();
/// assert!(text.starts_with("# OOMMF OVF 2.0\n# \n# Segment count: 1\n"));
/// assert!(text.ends_with("# Begin: Data Text\n 0.0 0.0 1.0\n 0.0 0.0 1.0\n# End: Data Text\n# End: Segment\n"));
///
/// let back = ovf::decode(&mut buf.as_slice()).unwrap();
/// assert_eq!(back.array(), field.array());
/// ```
pub fn encode<W: Write>(
    w: &mut W,
    field: &Field,
    representation: Representation,
) -> Result<(), IoError> {
    check_dim(field.dim())?;
    encode_header(w, field, representation)?;
    encode_data(w, field, representation)?;
    encode_footer(w, representation)
}

fn padded(cell: &[f64]) -> [f64; VALUE_DIM] {
    let mut out = [0.0; VALUE_DIM];
    out[..cell.len()].copy_from_slice(cell);
    out
}

// ── Decode ──────────────────────────────────────────────────────

/// Parsed OVF header.
#[derive(Clone, Debug, PartialEq)]
pub struct OvfHeader {
    /// Header keys (lower-cased) and values, in file order.
    pub entries: IndexMap<String, String>,
    /// Representation named by the `Begin: Data` line.
    pub representation: Representation,
}

impl OvfHeader {
    /// Raw value of a header key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    fn real(&self, key: &str) -> Result<f64, IoError> {
        let raw = self.require(key)?;
        parse_real(raw).ok_or_else(|| IoError::MalformedHeader {
            detail: format!("{key}: cannot parse {raw:?} as a real"),
        })
    }

    fn count(&self, key: &str) -> Result<usize, IoError> {
        let raw = self.require(key)?;
        raw.trim().parse().map_err(|_| IoError::MalformedHeader {
            detail: format!("{key}: cannot parse {raw:?} as a count"),
        })
    }

    fn require(&self, key: &str) -> Result<&str, IoError> {
        self.get(key).ok_or_else(|| IoError::MalformedHeader {
            detail: format!("missing key '{key}'"),
        })
    }

    fn triple(&self, suffix: &str) -> Result<Point, IoError> {
        Ok([
            self.real(&format!("x{suffix}"))?,
            self.real(&format!("y{suffix}"))?,
            self.real(&format!("z{suffix}"))?,
        ])
    }

    /// Rebuild the mesh from `min`, `max` and `stepsize`, checking the
    /// node counts.
    pub fn mesh(&self) -> Result<Mesh, IoError> {
        let mesh = Mesh::new(self.triple("min")?, self.triple("max")?, self.triple("stepsize")?)?;
        let nodes = [
            self.count("xnodes")?,
            self.count("ynodes")?,
            self.count("znodes")?,
        ];
        if nodes != mesh.n() {
            return Err(IoError::MalformedHeader {
                detail: format!("node counts {nodes:?} do not match extent {:?}", mesh.n()),
            });
        }
        Ok(mesh)
    }

    /// Components per record; 3 when the key is absent.
    pub fn valuedim(&self) -> Result<usize, IoError> {
        if self.get("valuedim").is_none() {
            return Ok(VALUE_DIM);
        }
        match self.count("valuedim")? {
            0 => Err(IoError::MalformedHeader {
                detail: "valuedim must be positive".to_string(),
            }),
            dim => Ok(dim),
        }
    }

    /// Field name recovered from the first value label, minus its `_x`.
    pub fn name(&self) -> Option<FieldName> {
        let first = self.get("valuelabels")?.split_whitespace().next()?;
        let base = first.strip_suffix("_x").unwrap_or(first);
        FieldName::new(base).ok()
    }
}

/// Read header lines up to and including `Begin: Data`.
pub fn decode_header<R: BufRead>(r: &mut R) -> Result<OvfHeader, IoError> {
    let mut entries = IndexMap::new();
    let mut line = String::new();
    loop {
        line.clear();
        if r.read_line(&mut line)? == 0 {
            return Err(IoError::MalformedHeader {
                detail: "end of file before 'Begin: Data'".to_string(),
            });
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(content) = trimmed.strip_prefix('#') else {
            return Err(IoError::MalformedHeader {
                detail: format!("expected comment line, found {trimmed:?}"),
            });
        };
        let Some((key, value)) = content.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        match key.as_str() {
            "begin" => {
                if let Some(tag) = strip_data_prefix(value) {
                    let representation =
                        Representation::from_tag(tag).ok_or_else(|| IoError::MalformedHeader {
                            detail: format!("unknown data representation {tag:?}"),
                        })?;
                    return Ok(OvfHeader {
                        entries,
                        representation,
                    });
                }
            }
            "end" => {}
            _ => {
                entries.insert(key, value.to_string());
            }
        }
    }
}

/// Decode a complete OVF stream into a field.
///
/// The field has `dim = valuedim` and is named after the value labels,
/// falling back to `"field"`.
pub fn decode<R: BufRead>(r: &mut R) -> Result<Field, IoError> {
    let header = decode_header(r)?;
    let mesh = header.mesh()?;
    let dim = header.valuedim()?;
    let count = mesh
        .cell_count()
        .checked_mul(dim)
        .ok_or_else(|| IoError::MalformedHeader {
            detail: format!("{} cells of dimension {dim} overflow", mesh.cell_count()),
        })?;

    let (values, footer) = match header.representation {
        Representation::Text => decode_text(r, count)?,
        Representation::Binary4 => {
            let found = f64::from(f32::from_le_bytes(read_bytes(r)?));
            check_sentinel(f64::from(Representation::BINARY4_SENTINEL), found)?;
            let mut values = with_reserve(count);
            for _ in 0..count {
                values.push(f64::from(f32::from_le_bytes(read_bytes(r)?)));
            }
            (values, next_line(r)?)
        }
        Representation::Binary8 => {
            let found = f64::from_le_bytes(read_bytes(r)?);
            check_sentinel(Representation::BINARY8_SENTINEL, found)?;
            let mut values = with_reserve(count);
            for _ in 0..count {
                values.push(f64::from_le_bytes(read_bytes(r)?));
            }
            (values, next_line(r)?)
        }
    };
    check_footer(footer.as_deref(), header.representation)?;

    let mut array = FieldArray::zeros(mesh.n(), dim);
    for (index, record) in mesh.indices().zip(values.chunks(dim)) {
        array.cell_mut(index).copy_from_slice(record);
    }

    let name = header.name().unwrap_or_else(|| {
        tracing::warn!(
            labels = header.get("valuelabels").unwrap_or(""),
            "no usable value label, naming field 'field'"
        );
        FieldName::default()
    });
    tracing::debug!(
        representation = %header.representation,
        dim,
        cells = mesh.cell_count(),
        "decoded ovf data"
    );
    Ok(Field::from_array(mesh, array, name)?)
}

fn decode_text<R: BufRead>(r: &mut R, count: usize) -> Result<(Vec<f64>, Option<String>), IoError> {
    let mut values = with_reserve(count);
    loop {
        let Some(line) = next_line(r)? else {
            return Err(IoError::MalformedData {
                detail: "end of file before 'End: Data'".to_string(),
            });
        };
        if line.starts_with('#') {
            if values.len() != count {
                return Err(IoError::MalformedData {
                    detail: format!("expected {count} values, found {}", values.len()),
                });
            }
            return Ok((values, Some(line)));
        }
        for token in line.split_whitespace() {
            let v = parse_real(token).ok_or_else(|| IoError::MalformedData {
                detail: format!("cannot parse {token:?} as a real"),
            })?;
            values.push(v);
        }
    }
}

/// Header counts are untrusted; the buffer grows past this as data arrives.
const MAX_RESERVE: usize = 1 << 20;

fn with_reserve(count: usize) -> Vec<f64> {
    Vec::with_capacity(count.min(MAX_RESERVE))
}

/// Next non-blank line, trimmed; `None` at end of file.
fn next_line<R: BufRead>(r: &mut R) -> Result<Option<String>, IoError> {
    let mut line = String::new();
    loop {
        line.clear();
        if r.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
}

fn read_bytes<R: BufRead, const N: usize>(r: &mut R) -> Result<[u8; N], IoError> {
    let mut buf = [0u8; N];
    r.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => IoError::MalformedData {
            detail: "binary data is truncated".to_string(),
        },
        _ => IoError::Io(e),
    })?;
    Ok(buf)
}

fn check_sentinel(expected: f64, found: f64) -> Result<(), IoError> {
    if found != expected {
        return Err(IoError::BadSentinel { expected, found });
    }
    Ok(())
}

fn check_footer(line: Option<&str>, representation: Representation) -> Result<(), IoError> {
    let tag = line
        .and_then(|l| l.strip_prefix('#'))
        .and_then(|c| c.split_once(':'))
        .filter(|(key, _)| key.trim().eq_ignore_ascii_case("end"))
        .and_then(|(_, value)| strip_data_prefix(value.trim()));
    match tag.and_then(Representation::from_tag) {
        Some(r) if r == representation => Ok(()),
        _ => Err(IoError::MalformedData {
            detail: format!(
                "expected 'End: Data {}', found {:?}",
                representation.tag(),
                line.unwrap_or("end of file")
            ),
        }),
    }
}

/// `"Data Binary 8"` → `"Binary 8"`, case-insensitive on `Data`.
fn strip_data_prefix(value: &str) -> Option<&str> {
    let head = value.get(..4)?;
    head.eq_ignore_ascii_case("data").then(|| value[4..].trim())
}
