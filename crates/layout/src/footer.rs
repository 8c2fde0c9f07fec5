//! Footer stamping

use crate::{Document, LayoutConfig};
use chrono::{Local, NaiveDate};
use pdf_core::{DrawOp, FontMetrics, FontVariant};

/// Stamps per-page footers once the final page count is known
///
/// A pure second pass over the composed document: it fills each page's
/// reserved footer slot and makes no layout decisions. Footer space is
/// already reserved by the bottom margin the content pass enforces, so
/// stamping never triggers page breaks. One generation date is captured
/// at construction and shared by every page.
pub struct FooterStamper<'a> {
    config: &'a LayoutConfig,
    metrics: &'a FontMetrics,
    date: NaiveDate,
}

impl<'a> FooterStamper<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a FontMetrics) -> Self {
        Self {
            config,
            metrics,
            date: Local::now().date_naive(),
        }
    }

    /// Pin the generation date (reproducible output, tests)
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Write "Generated on" and "Page i of N" into every page's footer
    pub fn stamp(&self, doc: &mut Document) {
        let cfg = self.config;
        let total = doc.page_count();
        let y = cfg.page_height - cfg.footer_offset;
        let generated = format!("Generated on: {}", self.date.format("%-m/%-d/%Y"));

        for (i, page) in doc.pages_mut().iter_mut().enumerate() {
            let page_label = format!("Page {} of {}", i + 1, total);
            let label_width = self.metrics.text_width(&page_label, cfg.footer_font_size);

            page.set_footer(vec![
                DrawOp::Text {
                    text: generated.clone(),
                    x: cfg.left_margin,
                    y,
                    size: cfg.footer_font_size,
                    variant: FontVariant::Italic,
                    color: cfg.footer_color,
                },
                DrawOp::Text {
                    text: page_label,
                    x: cfg.page_width - cfg.right_margin - label_width,
                    y,
                    size: cfg.footer_font_size,
                    variant: FontVariant::Italic,
                    color: cfg.footer_color,
                },
            ]);
        }

        log::debug!("stamped footers on {total} page(s)");
    }
}
