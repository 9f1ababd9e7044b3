use crate::error::{OrderdeskError, Result};
use crate::order::{Order, COLUMNS};
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};
use time::OffsetDateTime;

// Landscape A4.
const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;
const MARGIN_MM: f32 = 15.0;
const ROW_PITCH_MM: f32 = 4.5;

/// Render the given rows as a paginated landscape-A4 document.
///
/// First page: bold title line, 9pt column header, a rule under the header,
/// then data rows. Overflowing rows continue on fresh pages that start with
/// a blank render area — neither the title nor the header is repeated. Cell
/// values are truncated to 20 characters with a "..." marker.
///
/// Metadata dates and the document id are pinned so identical rows produce
/// byte-identical output.
pub fn to_pdf_bytes(rows: &[Order], title: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("{title} - Warehouse Orders Export"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let doc = doc
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH)
        .with_document_id("orderdesk-export".to_string());

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| OrderdeskError::Export(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| OrderdeskError::Export(e.to_string()))?;

    let col_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / COLUMNS.len() as f32;
    let mut layer_ref = doc.get_page(page).get_layer(layer);

    // Title and header only on the first page.
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer_ref.use_text(
        format!("{title} - Warehouse Orders Export"),
        16.0,
        Mm(MARGIN_MM),
        Mm(y),
        &bold,
    );
    y -= 10.0;
    for (i, col) in COLUMNS.iter().enumerate() {
        layer_ref.use_text(
            *col,
            9.0,
            Mm(MARGIN_MM + i as f32 * col_width),
            Mm(y),
            &bold,
        );
    }
    y -= 2.0;
    layer_ref.set_outline_thickness(0.5);
    layer_ref.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
    y -= ROW_PITCH_MM;

    for order in rows {
        if y < MARGIN_MM {
            // Continuation page: blank render area, rows only.
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        for (i, value) in super::truncated_cells(order).iter().enumerate() {
            layer_ref.use_text(
                value,
                9.0,
                Mm(MARGIN_MM + i as f32 * col_width),
                Mm(y),
                &regular,
            );
        }
        y -= ROW_PITCH_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| OrderdeskError::Export(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
