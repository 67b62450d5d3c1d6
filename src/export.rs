use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::{error::LayoutError, layout::PixelLayout};

// Variable the renderer looks for when it loads the generated line
pub const DATA_IDENTIFIER: &str = "icosahedron_data";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IcosahedronData {
    pub num_pixels: usize,
    pub strips: Vec<Vec<[f64; 3]>>,
}

impl From<&PixelLayout> for IcosahedronData {
    fn from(layout: &PixelLayout) -> Self {
        IcosahedronData {
            num_pixels: layout.num_pixels(),
            strips: layout
                .strips()
                .iter()
                .map(|strip| strip.iter().map(|p| [p.x, p.y, p.z]).collect())
                .collect(),
        }
    }
}

// Single-line JSON with a space after every ',' and ':', the layout the
// renderer's data files have always used.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_json(data: &IcosahedronData) -> Result<String, LayoutError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    data.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

// `<identifier> ='<json>'`, ready to be pasted into the renderer's sources
pub fn assignment_line(identifier: &str, data: &IcosahedronData) -> Result<String, LayoutError> {
    Ok(format!("{} ='{}'", identifier, to_json(data)?))
}
