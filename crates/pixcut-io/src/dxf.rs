//! DXF output (write-only)
//!
//! Writes a minimal ASCII DXF R2000 (`AC1015`) drawing. It carries a header
//! with `$HANDSEED` and `$INSUNITS`, the symbol tables a reader expects, the
//! model and paper space blocks, `LINE` entities, and a root dictionary.
//! Every table, record, entity and object gets a handle (group 5) and its
//! owner (group 330), and handles are allocated in write order so the same
//! document always serializes to the same bytes.
//!
//! # Layers
//!
//! A new document starts with layer `0`, which DXF requires and which can
//! never be removed. [`DxfDocument::new`] also adds a `Defpoints` layer, the
//! way CAD-created drawings carry one. Callers that do not want an unused
//! `Defpoints` entry in their output remove it with
//! [`DxfDocument::remove_layer`] before adding geometry.
//!
//! # Example
//!
//! ```
//! use pixcut_io::dxf::{DxfDocument, DEFPOINTS_LAYER};
//!
//! let mut doc = DxfDocument::new(4);
//! assert!(doc.remove_layer(DEFPOINTS_LAYER));
//! doc.add_layer("outline", 1).unwrap();
//! doc.add_line("outline", (0.0, 0.0), (5.0, 0.0)).unwrap();
//!
//! let bytes = doc.to_bytes().unwrap();
//! assert!(String::from_utf8(bytes).unwrap().ends_with("EOF\n"));
//! ```

use crate::{IoError, IoResult};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name of the mandatory base layer
pub const BASE_LAYER: &str = "0";

/// Name of the definition-points layer a new document starts with
pub const DEFPOINTS_LAYER: &str = "Defpoints";

/// Drawing database version written to `$ACADVER`
pub const ACAD_VERSION: &str = "AC1015";

/// Line type assigned to every layer
const LINETYPE: &str = "Continuous";

/// Line types every R2000 drawing defines, with their descriptions
const LINETYPES: [(&str, &str); 3] = [("ByBlock", ""), ("ByLayer", ""), (LINETYPE, "Solid line")];

const MODEL_SPACE: &str = "*Model_Space";
const PAPER_SPACE: &str = "*Paper_Space";

/// Characters R2000 forbids in symbol table names
const RESERVED_NAME_CHARS: [char; 13] = [
    '<', '>', '/', '\\', '"', ':', ';', '?', '*', '|', '=', '`', ',',
];

/// Color of the built-in layers (white/black)
const BUILTIN_LAYER_COLOR: i16 = 7;

/// A layer table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxfLayer {
    pub name: String,
    /// ACI color index
    pub color: i16,
}

/// A `LINE` entity in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct DxfLine {
    pub layer: String,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// An in-memory DXF drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DxfDocument {
    insunits: i16,
    layers: Vec<DxfLayer>,
    lines: Vec<DxfLine>,
}

impl DxfDocument {
    /// Create a document with the given `$INSUNITS` code.
    pub fn new(insunits: i16) -> Self {
        Self {
            insunits,
            layers: vec![
                DxfLayer {
                    name: BASE_LAYER.to_string(),
                    color: BUILTIN_LAYER_COLOR,
                },
                DxfLayer {
                    name: DEFPOINTS_LAYER.to_string(),
                    color: BUILTIN_LAYER_COLOR,
                },
            ],
            lines: Vec::new(),
        }
    }

    /// `$INSUNITS` header code
    pub fn insunits(&self) -> i16 {
        self.insunits
    }

    /// Layer table in insertion order
    pub fn layers(&self) -> &[DxfLayer] {
        &self.layers
    }

    /// Entities in insertion order
    pub fn lines(&self) -> &[DxfLine] {
        &self.lines
    }

    /// Whether a layer exists (DXF layer names compare case-insensitively).
    pub fn has_layer(&self, name: &str) -> bool {
        self.find_layer(name).is_some()
    }

    fn find_layer(&self, name: &str) -> Option<usize> {
        self.layers
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Add a layer.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the name is empty, contains a
    /// control or reserved character, or is already taken.
    pub fn add_layer(&mut self, name: impl Into<String>, color: i16) -> IoResult<()> {
        let name = name.into();
        if name.is_empty()
            || name.chars().any(|c| c.is_control())
            || name.contains(RESERVED_NAME_CHARS)
        {
            return Err(IoError::InvalidData(format!(
                "invalid DXF layer name {name:?}"
            )));
        }
        if self.has_layer(&name) {
            return Err(IoError::InvalidData(format!(
                "DXF layer '{name}' already exists"
            )));
        }
        self.layers.push(DxfLayer { name, color });
        Ok(())
    }

    /// Remove a layer that no entity refers to.
    ///
    /// Returns `false` for layer `0`, for unknown layers and for layers that
    /// are still in use.
    pub fn remove_layer(&mut self, name: &str) -> bool {
        if name.eq_ignore_ascii_case(BASE_LAYER) {
            return false;
        }
        if self
            .lines
            .iter()
            .any(|l| l.layer.eq_ignore_ascii_case(name))
        {
            return false;
        }
        match self.find_layer(name) {
            Some(idx) => {
                self.layers.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Add a line on an existing layer.
    pub fn add_line(&mut self, layer: &str, start: (f64, f64), end: (f64, f64)) -> IoResult<()> {
        let Some(idx) = self.find_layer(layer) else {
            return Err(IoError::InvalidData(format!(
                "DXF layer '{layer}' does not exist"
            )));
        };
        self.lines.push(DxfLine {
            layer: self.layers[idx].name.clone(),
            start,
            end,
        });
        Ok(())
    }

    /// Serialize the document.
    pub fn write_to<W: Write>(&self, mut writer: W) -> IoResult<()> {
        // The handle seed goes in the header, so the body is written first.
        let mut body = GroupWriter::new(Vec::new());
        self.write_body(&mut body)?;

        let mut out = GroupWriter::new(&mut writer);
        out.section("HEADER")?;
        out.pair(9, "$ACADVER")?;
        out.pair(1, ACAD_VERSION)?;
        out.pair(9, "$HANDSEED")?;
        out.pair(5, body.next_handle())?;
        out.pair(9, "$INSUNITS")?;
        out.pair(70, self.insunits)?;
        out.pair(0, "ENDSEC")?;

        writer.write_all(&body.out)?;
        writer.flush()?;
        Ok(())
    }

    fn write_body<W: Write>(&self, out: &mut GroupWriter<W>) -> IoResult<()> {
        out.section("CLASSES")?;
        out.pair(0, "ENDSEC")?;

        out.section("TABLES")?;
        let table = out.table("LTYPE", LINETYPES.len())?;
        for (name, description) in LINETYPES {
            out.record("LTYPE", &table, "AcDbLinetypeTableRecord")?;
            out.pair(2, name)?;
            out.pair(70, 0)?;
            out.pair(3, description)?;
            out.pair(72, 65)?;
            out.pair(73, 0)?;
            out.pair(40, real(0.0))?;
        }
        out.pair(0, "ENDTAB")?;

        let table = out.table("LAYER", self.layers.len())?;
        for layer in &self.layers {
            out.record("LAYER", &table, "AcDbLayerTableRecord")?;
            out.pair(2, &layer.name)?;
            out.pair(70, 0)?;
            out.pair(62, layer.color)?;
            out.pair(6, LINETYPE)?;
        }
        out.pair(0, "ENDTAB")?;

        let table = out.table("STYLE", 1)?;
        out.record("STYLE", &table, "AcDbTextStyleTableRecord")?;
        out.pair(2, "Standard")?;
        out.pair(70, 0)?;
        out.pair(40, real(0.0))?;
        out.pair(41, real(1.0))?;
        out.pair(50, real(0.0))?;
        out.pair(71, 0)?;
        out.pair(42, real(2.5))?;
        out.pair(3, "txt")?;
        out.pair(0, "ENDTAB")?;

        let table = out.table("APPID", 1)?;
        out.record("APPID", &table, "AcDbRegAppTableRecord")?;
        out.pair(2, "ACAD")?;
        out.pair(70, 0)?;
        out.pair(0, "ENDTAB")?;

        let table = out.table("BLOCK_RECORD", 2)?;
        let model = out.record("BLOCK_RECORD", &table, "AcDbBlockTableRecord")?;
        out.pair(2, MODEL_SPACE)?;
        let paper = out.record("BLOCK_RECORD", &table, "AcDbBlockTableRecord")?;
        out.pair(2, PAPER_SPACE)?;
        out.pair(0, "ENDTAB")?;
        out.pair(0, "ENDSEC")?;

        out.section("BLOCKS")?;
        out.block(MODEL_SPACE, &model, false)?;
        out.block(PAPER_SPACE, &paper, true)?;
        out.pair(0, "ENDSEC")?;

        out.section("ENTITIES")?;
        for line in &self.lines {
            out.entity("LINE", &model)?;
            out.pair(8, &line.layer)?;
            out.pair(100, "AcDbLine")?;
            out.pair(10, real(line.start.0))?;
            out.pair(20, real(line.start.1))?;
            out.pair(30, real(0.0))?;
            out.pair(11, real(line.end.0))?;
            out.pair(21, real(line.end.1))?;
            out.pair(31, real(0.0))?;
        }
        out.pair(0, "ENDSEC")?;

        out.section("OBJECTS")?;
        let root = out.handle();
        let groups = out.handle();
        out.pair(0, "DICTIONARY")?;
        out.pair(5, &root)?;
        out.pair(330, 0)?;
        out.pair(100, "AcDbDictionary")?;
        out.pair(281, 1)?;
        out.pair(3, "ACAD_GROUP")?;
        out.pair(350, &groups)?;
        out.pair(0, "DICTIONARY")?;
        out.pair(5, &groups)?;
        out.pair(330, &root)?;
        out.pair(100, "AcDbDictionary")?;
        out.pair(281, 1)?;
        out.pair(0, "ENDSEC")?;
        out.pair(0, "EOF")
    }

    /// Serialize the document into memory.
    pub fn to_bytes(&self) -> IoResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Serialize the document to a file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::info!(
            "wrote {} ({} layers, {} lines)",
            path.display(),
            self.layers.len(),
            self.lines.len()
        );
        Ok(())
    }
}

/// Writes `code\nvalue\n` pairs and hands out entity handles
struct GroupWriter<W: Write> {
    out: W,
    handles: u64,
}

impl<W: Write> GroupWriter<W> {
    fn new(out: W) -> Self {
        Self { out, handles: 0 }
    }

    fn pair(&mut self, code: u16, value: impl Display) -> IoResult<()> {
        write!(self.out, "{code:>3}\n{value}\n")?;
        Ok(())
    }

    fn section(&mut self, name: &str) -> IoResult<()> {
        self.pair(0, "SECTION")?;
        self.pair(2, name)
    }

    /// Allocate the next handle, as upper-case hex
    fn handle(&mut self) -> String {
        self.handles += 1;
        format!("{:X}", self.handles)
    }

    /// First handle not yet allocated
    fn next_handle(&self) -> String {
        format!("{:X}", self.handles + 1)
    }

    /// Open a symbol table; returns its handle.
    fn table(&mut self, name: &str, entries: usize) -> IoResult<String> {
        let handle = self.handle();
        self.pair(0, "TABLE")?;
        self.pair(2, name)?;
        self.pair(5, &handle)?;
        self.pair(330, 0)?;
        self.pair(100, "AcDbSymbolTable")?;
        self.pair(70, entries)?;
        Ok(handle)
    }

    /// Start a table record owned by `table`; returns its handle.
    fn record(&mut self, kind: &str, table: &str, subclass: &str) -> IoResult<String> {
        let handle = self.handle();
        self.pair(0, kind)?;
        self.pair(5, &handle)?;
        self.pair(330, table)?;
        self.pair(100, "AcDbSymbolTableRecord")?;
        self.pair(100, subclass)?;
        Ok(handle)
    }

    /// Start an entity owned by the block record `owner`.
    fn entity(&mut self, kind: &str, owner: &str) -> IoResult<()> {
        let handle = self.handle();
        self.pair(0, kind)?;
        self.pair(5, &handle)?;
        self.pair(330, owner)?;
        self.pair(100, "AcDbEntity")
    }

    /// An empty block definition for `record`.
    fn block(&mut self, name: &str, record: &str, paper_space: bool) -> IoResult<()> {
        self.entity("BLOCK", record)?;
        if paper_space {
            self.pair(67, 1)?;
        }
        self.pair(8, BASE_LAYER)?;
        self.pair(100, "AcDbBlockBegin")?;
        self.pair(2, name)?;
        self.pair(70, 0)?;
        self.pair(10, real(0.0))?;
        self.pair(20, real(0.0))?;
        self.pair(30, real(0.0))?;
        self.pair(3, name)?;
        self.pair(1, "")?;

        self.entity("ENDBLK", record)?;
        if paper_space {
            self.pair(67, 1)?;
        }
        self.pair(8, BASE_LAYER)?;
        self.pair(100, "AcDbBlockEnd")
    }
}

/// Format a real with a fixed precision and no trailing zeros.
///
/// `-0.0` is written as `0.0` so that mirrored coordinates stay stable.
fn real(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let mut s = format!("{value:.6}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
