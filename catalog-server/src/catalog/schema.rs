//! Sheet column schema
//!
//! One configurable schema replaces the forked 4-column / 5-column / raw
//! two-column layouts: an ordered field list where each field declares how
//! its value is produced. The layout is a static configuration choice, never
//! inferred from sheet contents at runtime.

/// How a field's cell value is produced on create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Server-generated UUID v4, never caller-supplied
    GeneratedId,
    /// Server-generated RFC 3339 UTC timestamp, never caller-supplied
    GeneratedTimestamp,
    /// Caller-supplied text, rejected when empty after trimming
    Required,
    /// Public URL produced by the media host, empty when no payload
    MediaUrl,
}

/// A single column of the layout
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Ordered column layout of one sheet tab
///
/// Row 1 of the tab is always the header and is never treated as data.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    /// Tab name inside the spreadsheet (e.g. `products`)
    pub tab: String,
    /// Columns, in sheet order
    pub fields: Vec<FieldSpec>,
}

impl SheetSchema {
    pub fn new(tab: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            tab: tab.into(),
            fields,
        }
    }

    /// Product layout: `id, name, price[, image], created_at`
    pub fn products(tab: impl Into<String>, with_image: bool) -> Self {
        let mut fields = vec![
            FieldSpec::new("id", FieldKind::GeneratedId),
            FieldSpec::new("name", FieldKind::Required),
            FieldSpec::new("price", FieldKind::Required),
        ];
        if with_image {
            fields.push(FieldSpec::new("image", FieldKind::MediaUrl));
        }
        fields.push(FieldSpec::new("created_at", FieldKind::GeneratedTimestamp));
        Self::new(tab, fields)
    }

    /// Generic two-column layout: `name, message`, stored as submitted
    pub fn key_value(tab: impl Into<String>) -> Self {
        Self::new(
            tab,
            vec![
                FieldSpec::new("name", FieldKind::Required),
                FieldSpec::new("message", FieldKind::Required),
            ],
        )
    }

    /// A1-notation range covering every column of the layout, all rows
    pub fn range(&self) -> String {
        let last = (b'A' + self.fields.len() as u8 - 1) as char;
        format!("{}!A:{}", self.tab, last)
    }

    /// The media-URL field of this layout, if it has one
    pub fn media_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::MediaUrl)
    }

    /// Names of the caller-supplied required fields, in sheet order
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Required)
            .map(|f| f.name)
    }
}
