//! Section and field rendering

use crate::{Document, LayoutConfig, PageCursor};
use pdf_core::{wrap_text, DrawOp, FontMetrics, FontVariant};

/// Renders titled sections of labeled fields into a document
///
/// Every write checks the cursor for overflow first and breaks the page
/// when needed, re-emitting the page header on the fresh page. A single
/// field's wrapped value may span a page break; the label is emitted
/// only once.
pub struct SectionRenderer<'a> {
    config: &'a LayoutConfig,
    metrics: &'a FontMetrics,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a FontMetrics) -> Self {
        Self { config, metrics }
    }

    /// Open page 1 of a fresh document and emit its header
    ///
    /// The caller's cursor must be newly created; composition assumes the
    /// cursor and document advance together.
    pub fn open_document(&self, doc: &mut Document) {
        let page = doc.allocate_page();
        self.emit_page_header(page);
    }

    /// Unconditionally start a new page
    ///
    /// Allocates the page, resets the cursor to the top margin, and
    /// re-emits the page header. Called automatically when content would
    /// overflow, and directly for forced breaks between major sections.
    pub fn break_page(&self, doc: &mut Document, cursor: &mut PageCursor) {
        let page_index = cursor.start_next_page(self.config);
        let page = doc.allocate_page();
        self.emit_page_header(page);
        log::debug!("page break: continuing on page {page_index}");
    }

    /// Render a full section: header bar, rule, then each field in order
    pub fn render_section(
        &self,
        doc: &mut Document,
        cursor: &mut PageCursor,
        title: &str,
        fields: &[(&str, Option<String>)],
    ) {
        self.section_header(doc, cursor, title);
        for (label, value) in fields {
            self.field(doc, cursor, label, value.as_deref());
        }
    }

    /// Emit the styled section header: filled bar, bold title, rule
    pub fn section_header(&self, doc: &mut Document, cursor: &mut PageCursor, title: &str) {
        let cfg = self.config;

        // Bar, title, rule, and the following field line move as a block
        let needed = cfg.line_height * 2.5;
        if cursor.will_overflow(needed, cfg) {
            self.break_page(doc, cursor);
        }

        let y = cursor.y();
        let rule_y = y + cfg.line_height * 1.5;

        let page = doc.current_page_mut();
        page.push(DrawOp::FillRect {
            x: cfg.left_margin - 2.0,
            y: y - cfg.section_header_height * 0.7,
            width: cfg.content_width() + 4.0,
            height: cfg.section_header_height,
            color: cfg.secondary_color,
        });
        page.push(DrawOp::Text {
            text: title.to_string(),
            x: cfg.left_margin,
            y,
            size: cfg.body_font_size,
            variant: FontVariant::Bold,
            color: cfg.primary_color,
        });
        page.push(DrawOp::Rule {
            x1: cfg.left_margin,
            y1: rule_y,
            x2: cfg.page_width - cfg.right_margin,
            y2: rule_y,
            color: cfg.rule_color,
            thickness: 1.0,
        });

        cursor.advance(cfg.line_height * 1.5);
        cursor.advance(cfg.line_height);
    }

    /// Render one labeled field: bold label, wrapped value, blank line
    ///
    /// The label and the first value line share a baseline and are kept
    /// together across page breaks; continuation lines flow onto the next
    /// page below the re-emitted header without repeating the label.
    pub fn field(&self, doc: &mut Document, cursor: &mut PageCursor, label: &str, value: Option<&str>) {
        let cfg = self.config;
        let lines = wrap_text(value, cfg.value_column_width(), self.metrics, cfg.body_font_size);

        if cursor.will_overflow(cfg.line_height, cfg) {
            self.break_page(doc, cursor);
        }

        doc.current_page_mut().push(DrawOp::Text {
            text: format!("{label}:"),
            x: cfg.left_margin,
            y: cursor.y(),
            size: cfg.body_font_size,
            variant: FontVariant::Bold,
            color: cfg.label_color,
        });

        let mut first = true;
        for line in lines {
            if first {
                first = false;
            } else if cursor.will_overflow(cfg.line_height, cfg) {
                self.break_page(doc, cursor);
            }
            doc.current_page_mut().push(DrawOp::Text {
                text: line,
                x: cfg.value_column_x(),
                y: cursor.y(),
                size: cfg.body_font_size,
                variant: FontVariant::Regular,
                color: cfg.text_color,
            });
            cursor.advance(cfg.line_height);
        }

        // Blank line separating fields
        cursor.advance(cfg.line_height);
    }

    /// Render a plain body line at the left margin
    ///
    /// Used for explanatory text that is not a labeled field, such as the
    /// empty-collection fallback line.
    pub fn plain_line(&self, doc: &mut Document, cursor: &mut PageCursor, text: &str) {
        let cfg = self.config;
        if cursor.will_overflow(cfg.line_height, cfg) {
            self.break_page(doc, cursor);
        }
        doc.current_page_mut().push(DrawOp::Text {
            text: text.to_string(),
            x: cfg.left_margin,
            y: cursor.y(),
            size: cfg.body_font_size,
            variant: FontVariant::Regular,
            color: cfg.text_color,
        });
        cursor.advance(cfg.line_height);
    }

    /// Centered bold document title, drawn on every page
    fn emit_page_header(&self, page: &mut crate::Page) {
        let cfg = self.config;
        let width = self
            .metrics
            .text_width(&cfg.header_title, cfg.title_font_size);
        page.push(DrawOp::Text {
            text: cfg.header_title.clone(),
            x: cfg.page_width / 2.0 - width / 2.0,
            y: cfg.header_baseline,
            size: cfg.title_font_size,
            variant: FontVariant::Bold,
            color: cfg.primary_color,
        });
    }
}
