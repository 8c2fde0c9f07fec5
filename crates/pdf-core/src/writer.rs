//! Assembly of buffered page operations into a PDF document

use crate::{DrawOp, FontVariant, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// Build and serialize a PDF document from per-page draw operations
///
/// Creates one content stream per page by concatenating each operation's
/// generated operators, a shared Resources dictionary referencing the
/// three built-in Helvetica variants, the Pages tree, and the Catalog.
/// Page order in the output equals slice order.
///
/// # Arguments
/// * `pages` - One ordered operation list per page
/// * `width` - Page width in points
/// * `height` - Page height in points
pub fn write_document(pages: &[Vec<DrawOp>], width: f64, height: f64) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();

    // Base-14 fonts need no embedded font program; a single font
    // dictionary is shared by every page
    let mut font_dict = Dictionary::new();
    for variant in FontVariant::all() {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => variant.base_font(),
        });
        font_dict.set(
            variant.resource_name().as_bytes(),
            Object::Reference(font_id),
        );
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => Object::Dictionary(font_dict),
    });

    let mut kids = Vec::new();
    for ops in pages {
        let mut content = Vec::new();
        for op in ops {
            content.extend_from_slice(&op.to_operators(height));
        }

        let contents_id = doc.add_object(Object::Stream(Stream::new(Dictionary::new(), content)));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(contents_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i32,
        "Kids" => Object::Array(kids),
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| PdfError::SaveError(e.to_string()))?;

    log::debug!("serialized {} page(s), {} bytes", pages.len(), buffer.len());

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use pretty_assertions::assert_eq;

    fn text_op(text: &str) -> DrawOp {
        DrawOp::Text {
            text: text.to_string(),
            x: 100.0,
            y: 100.0,
            size: 12.0,
            variant: FontVariant::Regular,
            color: Color::black(),
        }
    }

    #[test]
    fn test_write_single_page() {
        let bytes = write_document(&[vec![text_op("Hello")]], 595.28, 841.89).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_write_preserves_page_order_and_count() {
        let pages: Vec<Vec<DrawOp>> = (1..=4).map(|i| vec![text_op(&format!("p{i}"))]).collect();
        let bytes = write_document(&pages, 595.28, 841.89).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_map = doc.get_pages();
        assert_eq!(page_map.len(), 4);

        for (i, (_, page_id)) in page_map.into_iter().enumerate() {
            let content = doc.get_page_content(page_id).unwrap();
            let content = String::from_utf8_lossy(&content);
            assert!(content.contains(&format!("(p{}) Tj", i + 1)));
        }
    }

    #[test]
    fn test_write_empty_page_is_valid() {
        let bytes = write_document(&[Vec::new()], 595.28, 841.89).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
