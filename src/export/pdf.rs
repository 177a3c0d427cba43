//! PDF 1.4 printout of a plan, built with `lopdf`.
//!
//! Text only, using the two standard Helvetica faces with WinAnsi encoding,
//! so no fonts are embedded.

use lopdf::{
    content::{Content, Operation},
    dictionary, Document, Object, ObjectId, Stream,
};
use tracing::info;

use super::ensure_exportable;
use crate::{
    error::{PlannerError, Result},
    types::TripPlan,
};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const LINE_SPACING: f32 = 1.4;
/// Rough Helvetica advance width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Allocation table column widths: category, share, amount, per day.
const TABLE_COLUMNS: [f32; 4] = [150.0, 80.0, 140.0, 125.0];

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// Page-by-page operation builder with a top-down cursor.
struct PdfCanvas {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PdfCanvas {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
        self.y -= height;
    }

    fn gap(&mut self, height: f32) {
        self.y -= height;
    }

    fn text_at(&mut self, x: f32, font: Font, size: f32, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(font.resource().into()), size.into()]),
            Operation::new("Td", vec![x.into(), self.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(win_ansi_bytes(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Write a paragraph at the left margin, wrapping long lines.
    fn line(&mut self, font: Font, size: f32, text: &str) {
        let max_chars = ((PAGE_WIDTH - 2.0 * MARGIN) / (size * AVG_GLYPH_WIDTH)) as usize;
        for chunk in wrap(text, max_chars) {
            self.advance(size * LINE_SPACING);
            self.text_at(MARGIN, font, size, &chunk);
        }
    }

    fn row(&mut self, font: Font, size: f32, cells: &[String]) {
        self.advance(size * LINE_SPACING);
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(TABLE_COLUMNS) {
            self.text_at(x, font, size, cell);
            x += width;
        }
    }

    fn rule(&mut self) {
        self.advance(4.0);
        self.current.extend([
            Operation::new("w", vec![0.5f32.into()]),
            Operation::new("m", vec![MARGIN.into(), self.y.into()]),
            Operation::new("l", vec![(PAGE_WIDTH - MARGIN).into(), self.y.into()]),
            Operation::new("S", vec![]),
        ]);
    }

    /// Lay the collected pages out as a document and serialize it.
    fn finish(mut self, title: &str) -> Result<Vec<u8>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.new_page();
        }

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();
        let regular_id = doc.add_object(standard_font("Helvetica"));
        let bold_id = doc.add_object(standard_font("Helvetica-Bold"));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Regular.resource() => regular_id,
                Font::Bold.resource() => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations }.encode().map_err(pdf_error)?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![Object::Integer(0), Object::Integer(0), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Producer" => Object::string_literal("trip-budget-planner"),
            "Title" => Object::string_literal(win_ansi_bytes(title)),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(pdf_error)?;
        Ok(bytes)
    }
}

fn standard_font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn pdf_error(err: impl std::fmt::Display) -> PlannerError {
    PlannerError::Export(format!("failed to write PDF: {err}"))
}

/// Render a plan as a printable PDF document.
pub fn to_pdf(plan: &TripPlan) -> Result<Vec<u8>> {
    ensure_exportable(plan)?;

    let input = &plan.input;
    let currency = input.currency;
    let summary = plan.summary();
    let mut canvas = PdfCanvas::new();

    canvas.line(Font::Bold, 16.0, "Travel Budget Plan");
    canvas.gap(4.0);

    let mut facts = vec![("Destination", input.destination.trim().to_string())];
    if let (Some(start), Some(end)) = (input.start_date, summary.end_date) {
        facts.push(("Dates", format!("{start} to {end}")));
    }
    facts.extend([
        ("Days", input.days.to_string()),
        ("Travelers", input.travelers.to_string()),
        ("Budget entered as", input.budget_mode.to_string()),
        ("Total Budget", currency.format(summary.effective_budget)),
        ("Budget / person / day", currency.format(summary.per_person_per_day)),
        ("Budget / day", currency.format(plan.allocation.per_day_total)),
    ]);
    for (label, value) in facts {
        canvas.line(Font::Regular, 12.0, &format!("{label}: {value}"));
    }
    if let Some(warning) = plan.warning {
        canvas.line(Font::Regular, 10.0, &format!("Note: {warning}"));
    }

    canvas.gap(8.0);
    canvas.line(Font::Bold, 13.0, "Budget Allocation");
    canvas.row(
        Font::Bold,
        11.0,
        &["Category", "Share %", "Amount", "Per day"].map(String::from),
    );
    canvas.rule();
    for row in plan.allocation_rows() {
        canvas.row(
            Font::Regular,
            11.0,
            &[
                row.category.label().to_string(),
                format!("{:.1}", row.share),
                currency.format(row.amount),
                currency.format(row.per_day),
            ],
        );
    }
    canvas.rule();
    canvas.row(
        Font::Bold,
        11.0,
        &[
            "Total".to_string(),
            "100.0".to_string(),
            currency.format(plan.allocation.total()),
            currency.format(plan.allocation.per_day_total),
        ],
    );

    canvas.gap(8.0);
    canvas.line(Font::Bold, 13.0, "Itinerary (Draft)");
    for day in &plan.itinerary {
        canvas.gap(2.0);
        let heading = match day.date {
            Some(date) => format!("Day {} ({date})", day.day),
            None => format!("Day {}", day.day),
        };
        canvas.line(Font::Bold, 11.0, &heading);
        for activity in &day.activities {
            canvas.line(
                Font::Regular,
                11.0,
                &format!(
                    "- {} [{}] ~ {}",
                    activity.name,
                    activity.cost_tier,
                    currency.format(activity.estimated_cost)
                ),
            );
        }
        if let Some(notes) = &day.notes {
            canvas.line(Font::Regular, 10.0, notes);
        }
    }

    canvas.gap(8.0);
    canvas.line(Font::Bold, 13.0, "Cost-Saving Tips");
    for tip in plan.tips() {
        canvas.line(Font::Regular, 11.0, &format!("- {tip}"));
    }

    let page_count = canvas.pages.len() + 1;
    let bytes = canvas.finish(&format!("Travel Budget Plan - {}", input.destination.trim()))?;

    info!(bytes = bytes.len(), pages = page_count, "exported plan as PDF");
    Ok(bytes)
}

/// Greedy word wrap on character count.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi).collect()
}

/// Map a character to its WinAnsiEncoding byte, `?` when unmapped.
fn win_ansi(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(
            win_ansi_bytes("Caf\u{e9} (\u{20ac}5) \u{65e5}"),
            b"Caf\xe9 (\x805) ?".to_vec()
        );
    }

    #[test]
    fn test_empty_canvas_still_has_a_page() {
        let bytes = PdfCanvas::new().finish("Empty").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_parentheses_survive_serialization() {
        let mut canvas = PdfCanvas::new();
        canvas.line(Font::Regular, 11.0, "Day 1 (2026-06-01)");
        let bytes = canvas.finish("Parens").unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = doc.page_iter().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let shown: Vec<&[u8]> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands.first()?.as_str().ok())
            .collect();
        assert_eq!(shown, vec![b"Day 1 (2026-06-01)".as_slice()]);
    }
}
