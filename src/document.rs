/// Layout variant for a standalone printable page.
///
/// Each variant is a fixed scaffold, not user-configurable markup: the
/// body fragment a [crate::Template] produced is dropped into a complete
/// document with a print-oriented stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain tabular report.
    Report,
    /// Delivery note with signature blocks at the bottom.
    DeliveryNote,
    /// Invoice or payslip with a header/company block.
    Invoice,
}

// shared by all variants: bordered cells, shaded header row,
// right-aligned numeric columns
const BASE_STYLE: &str = "\
  body { font-family: sans-serif; margin: 24px; color: #000; }
  table { width: 100%; border-collapse: collapse; margin-top: 12px; }
  th, td { border: 1px solid #444; padding: 4px 8px; font-size: 12px; }
  th { background: #e8e8e8; text-align: left; }
  th.num, td.num { text-align: right; }
";

const DELIVERY_STYLE: &str = "\
  .signatures { display: flex; justify-content: space-between; margin-top: 48px; }
  .signature { width: 40%; border-top: 1px solid #000; padding-top: 6px; text-align: center; font-size: 12px; }
";

const INVOICE_STYLE: &str = "\
  .doc-header { display: flex; justify-content: space-between; margin-bottom: 24px; }
  .doc-header h1 { margin: 0 0 8px 0; font-size: 20px; }
  .company { font-size: 11px; line-height: 1.5; }
  .totals td { font-weight: bold; }
";

impl DocumentKind {
    /// Wraps a rendered body fragment into a self-contained HTML page
    /// ready to hand to a print window or PDF rasterizer. An empty body
    /// yields an empty-bodied, still well-formed document.
    pub fn wrap(&self, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{}</title>\n\
             <style>\n{}</style>\n\
             </head>\n\
             <body>\n{}\n</body>\n\
             </html>\n",
            self.title(),
            self.style(),
            body
        )
    }

    fn title(&self) -> &'static str {
        match self {
            DocumentKind::Report => "Report",
            DocumentKind::DeliveryNote => "Delivery Note",
            DocumentKind::Invoice => "Invoice",
        }
    }

    fn style(&self) -> String {
        match self {
            DocumentKind::Report => BASE_STYLE.to_owned(),
            DocumentKind::DeliveryNote => format!("{}{}", BASE_STYLE, DELIVERY_STYLE),
            DocumentKind::Invoice => format!("{}{}", BASE_STYLE, INVOICE_STYLE),
        }
    }
}
