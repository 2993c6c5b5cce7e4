//! Purchase order PDF rendering.
//!
//! A small writer over `printpdf` exposing the operations the layout needs
//! (centered title, body line, vertical gap, finish) with automatic page
//! breaks, plus the fixed six-field purchase order layout.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use serde_json::Value;

use crate::error::GatewayError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.352_778;

const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
/// Gap after the title, roughly one body line of vertical space.
const TITLE_GAP_MM: f32 = 7.0;
/// Gap between field lines, half a body line.
const FIELD_GAP_MM: f32 = 3.5;

/// Display order and record keys of the rendered fields.
const FIELDS: [(&str, &str); 6] = [
    ("PO Number", "PurchaseOrder"),
    ("PO Type", "PurchaseOrderType"),
    ("Supplier", "Supplier"),
    ("Company Code", "CompanyCode"),
    ("Purchasing Group", "PurchasingGroup"),
    ("Purchasing Organization", "PurchasingOrganization"),
];

/// Incremental writer for a single-column A4 text document.
///
/// Lines are written top to bottom; when the cursor reaches the bottom
/// margin a fresh page is appended. `finish` must run on every path that
/// constructed a writer, since it is what serializes the document.
pub struct DocumentWriter {
    doc: PdfDocumentReference,
    font: IndirectFontRef,
    layer: PdfLayerReference,
    cursor_mm: f32,
}

impl DocumentWriter {
    pub fn new(title: &str) -> Result<Self, GatewayError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            font,
            layer,
            cursor_mm: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    /// Write a centered line at title size.
    pub fn title(&mut self, text: &str) {
        self.break_page_if_needed();
        let x = ((PAGE_WIDTH_MM - text_width_mm(text, TITLE_SIZE_PT)) / 2.0).max(MARGIN_MM);
        self.layer
            .use_text(text, TITLE_SIZE_PT, Mm(x), Mm(self.cursor_mm), &self.font);
        self.advance(TITLE_SIZE_PT);
    }

    /// Write a left-aligned body line.
    pub fn line(&mut self, text: &str) {
        self.break_page_if_needed();
        self.layer.use_text(
            text,
            BODY_SIZE_PT,
            Mm(MARGIN_MM),
            Mm(self.cursor_mm),
            &self.font,
        );
        self.advance(BODY_SIZE_PT);
    }

    /// Insert vertical whitespace.
    pub fn gap(&mut self, mm: f32) {
        self.cursor_mm -= mm;
    }

    /// Serialize the document. Ends the byte stream; nothing can be
    /// appended afterwards.
    pub fn finish(self) -> Result<Vec<u8>, GatewayError> {
        let bytes = self.doc.save_to_bytes()?;
        Ok(bytes)
    }

    fn advance(&mut self, size_pt: f32) {
        self.cursor_mm -= size_pt * PT_TO_MM;
    }

    fn break_page_if_needed(&mut self) {
        if self.cursor_mm < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }
}

/// Approximate rendered width of Helvetica text, for centering. Good enough
/// for a title line; built-in fonts expose no exact metrics here.
fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * 0.5 * PT_TO_MM
}

/// The `<Label>: <value>` lines for a record, in display order, with `N/A`
/// substituted for absent or empty fields.
pub fn field_lines(record: &Value) -> Vec<String> {
    FIELDS
        .iter()
        .map(|(label, key)| {
            let value =
                display_value(record.get(*key)).unwrap_or_else(|| "N/A".to_string());
            format!("{}: {}", label, value)
        })
        .collect()
}

fn display_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn title_line(purchase_order: &str) -> String {
    format!("Purchase Order Details - {}", purchase_order)
}

/// Every text line of the document in write order: the title first, then
/// the six labeled fields.
pub fn document_lines(purchase_order: &str, record: &Value) -> Vec<String> {
    let mut lines = vec![title_line(purchase_order)];
    lines.extend(field_lines(record));
    lines
}

/// Render the fixed purchase order layout: centered title, gap, then the
/// six labeled fields with a smaller gap between each.
pub fn render_purchase_order(
    purchase_order: &str,
    record: &Value,
) -> Result<Vec<u8>, GatewayError> {
    let lines = document_lines(purchase_order, record);
    let mut writer = DocumentWriter::new(&lines[0])?;

    writer.title(&lines[0]);
    writer.gap(TITLE_GAP_MM);

    for line in &lines[1..] {
        writer.line(line);
        writer.gap(FIELD_GAP_MM);
    }

    writer.finish()
}
