// src/document/tmx.rs
//
// Tiled TMX (XML) serialization. The layout, indentation and attribute order
// match what Tiled 1.10 itself writes, so maps diff cleanly after a save in
// the editor.

use super::document::LevelDocument;
use crate::map::{MapProperty, PlacedObject, PropertyValue};
use std::borrow::Cow;
use std::fmt;

/// Escapes the five XML special characters in attribute values.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

impl fmt::Display for MapProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<property name="{}""#, escape_attr(&self.name))?;
        if let Some(ty) = self.value.type_name() {
            write!(f, r#" type="{}""#, ty)?;
        }
        match &self.value {
            PropertyValue::Float(v) => write!(f, r#" value="{}"/>"#, v),
            PropertyValue::Str(s) => write!(f, r#" value="{}"/>"#, escape_attr(s)),
        }
    }
}

impl fmt::Display for PlacedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.footprint;
        write!(
            f,
            r#"<object id="{}" name="{}" type="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.id,
            self.kind.name(),
            self.kind.tmx_type(),
            b.x,
            b.y,
            b.width,
            b.height
        )
    }
}

impl fmt::Display for LevelDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<map version="{}" tiledversion="{}" orientation="orthogonal" renderorder="right-down" width="{}" height="{}" tilewidth="{}" tileheight="{}" infinite="0" nextlayerid="{}" nextobjectid="{}">"#,
            escape_attr(&self.map_version),
            escape_attr(&self.tiled_version),
            self.width,
            self.height,
            self.tile_width,
            self.tile_height,
            self.next_layer_id(),
            self.next_object_id()
        )?;

        writeln!(f, " <properties>")?;
        for prop in self.properties() {
            writeln!(f, "  {}", prop)?;
        }
        writeln!(f, " </properties>")?;

        let ts = self.tileset();
        writeln!(
            f,
            r#" <tileset firstgid="{}" name="{}" tilewidth="{}" tileheight="{}" tilecount="{}" columns="{}">"#,
            ts.first_gid,
            escape_attr(&ts.name),
            ts.tile_width,
            ts.tile_height,
            ts.tile_count,
            ts.columns
        )?;
        writeln!(
            f,
            r#"  <image source="{}" width="{}" height="{}"/>"#,
            escape_attr(&ts.image_source),
            ts.image_width,
            ts.image_height
        )?;
        writeln!(f, " </tileset>")?;

        let layer = self.tile_layer();
        writeln!(
            f,
            r#" <layer id="{}" name="{}" width="{}" height="{}">"#,
            layer.id,
            escape_attr(&layer.name),
            layer.grid.width(),
            layer.grid.height()
        )?;
        writeln!(f, r#"  <data encoding="csv">"#)?;
        writeln!(f, "{}", layer.grid.to_csv())?;
        writeln!(f, "</data>")?;
        writeln!(f, " </layer>")?;

        let group = self.object_layer();
        writeln!(
            f,
            r#" <objectgroup id="{}" name="{}">"#,
            group.id,
            escape_attr(&group.name)
        )?;
        for obj in &group.objects {
            writeln!(f, "  {}", obj)?;
        }
        writeln!(f, " </objectgroup>")?;
        // No newline after the root element.
        write!(f, "</map>")
    }
}

impl LevelDocument {
    /// Renders the whole map as TMX text.
    pub fn to_tmx(&self) -> String {
        self.to_string()
    }
}
