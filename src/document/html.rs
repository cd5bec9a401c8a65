//! HTML ticket export adapter.
//!
//! Ticket exports render the activity stream as a `div.sn-stream` full of
//! `div.sn-card-component` cards. Which markers a card carries decides its
//! fragment kind:
//!
//! | Marker                                   | Fragment             |
//! |------------------------------------------|----------------------|
//! | `span.sn-card-component-createdby`       | author               |
//! | `div.date-calendar`                      | type + timestamp     |
//! | card class `sn-card-component_records`   | record content       |
//! | `div.sn-card-component_summary`          | summary content      |
//! | `div.sn-widget-textblock`                | rich text content    |

use scraper::{ElementRef, Html, Selector};

use super::error::DocumentError;
use crate::extractor::{ContentKind, FragmentSource, TicketExtraction, TicketPipeline};

const STREAM: &str = "div.sn-stream";
const CARD: &str = "div.sn-card-component";
const CREATED_BY: &str = "span.sn-card-component-createdby";
const DATE_CALENDAR: &str = "div.date-calendar";
const SUMMARY: &str = "div.sn-card-component_summary";
const TEXTBLOCK: &str = "div.sn-widget-textblock";

/// Class carried by the card element itself for record-style content.
const RECORDS_CLASS: &str = "sn-card-component_records";

fn parse_selector(selector: &'static str) -> Result<Selector, DocumentError> {
    Selector::parse(selector).map_err(|e| DocumentError::InvalidSelector {
        selector,
        message: e.to_string(),
    })
}

/// Compiled selectors for the activity stream markup.
#[derive(Debug, Clone)]
pub struct TimelineSelectors {
    stream: Selector,
    card: Selector,
    created_by: Selector,
    date_calendar: Selector,
    summary: Selector,
    textblock: Selector,
}

impl TimelineSelectors {
    pub fn new() -> Result<Self, DocumentError> {
        Ok(Self {
            stream: parse_selector(STREAM)?,
            card: parse_selector(CARD)?,
            created_by: parse_selector(CREATED_BY)?,
            date_calendar: parse_selector(DATE_CALENDAR)?,
            summary: parse_selector(SUMMARY)?,
            textblock: parse_selector(TEXTBLOCK)?,
        })
    }
}

/// Stripped, non-empty text nodes of `element` joined with `separator`.
fn joined_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// One card of the activity stream.
#[derive(Debug, Clone, Copy)]
pub struct HtmlCard<'a> {
    element: ElementRef<'a>,
    selectors: &'a TimelineSelectors,
}

impl<'a> HtmlCard<'a> {
    fn find(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.element.select(selector).next()
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    fn content_element(&self, kind: ContentKind) -> Option<ElementRef<'a>> {
        match kind {
            ContentKind::Record => self.has_class(RECORDS_CLASS).then_some(self.element),
            ContentKind::Summary => self.find(&self.selectors.summary),
            ContentKind::RichText => self.find(&self.selectors.textblock),
        }
    }
}

impl FragmentSource for HtmlCard<'_> {
    fn is_author_marker(&self) -> bool {
        self.find(&self.selectors.created_by).is_some()
    }

    fn is_type_marker(&self) -> bool {
        self.find(&self.selectors.date_calendar).is_some()
    }

    fn has_content(&self, kind: ContentKind) -> bool {
        self.content_element(kind).is_some()
    }

    fn author_text(&self) -> String {
        self.find(&self.selectors.created_by)
            .map(|el| joined_text(el, ""))
            .unwrap_or_default()
    }

    fn type_label(&self) -> String {
        joined_text(self.element, " ")
    }

    fn timestamp_text(&self) -> String {
        self.find(&self.selectors.date_calendar)
            .map(|el| joined_text(el, ""))
            .unwrap_or_default()
    }

    fn content_text(&self, kind: ContentKind) -> String {
        self.content_element(kind)
            .map(|el| joined_text(el, "\n"))
            .unwrap_or_default()
    }
}

/// Cards of the first stream that contains any, in document order.
///
/// Returns `None` when the document has no activity stream.
pub fn timeline_cards<'a>(
    document: &'a Html,
    selectors: &'a TimelineSelectors,
) -> Option<Vec<HtmlCard<'a>>> {
    let stream = document
        .select(&selectors.stream)
        .find(|stream| stream.select(&selectors.card).next().is_some())?;

    Some(
        stream
            .select(&selectors.card)
            .map(|element| HtmlCard { element, selectors })
            .collect(),
    )
}

/// Parse an HTML export and run its activity stream through `pipeline`.
///
/// Returns `None` when the document has no activity stream.
pub fn extract(
    ticket_id: &str,
    html: &str,
    selectors: &TimelineSelectors,
    pipeline: &TicketPipeline,
) -> Option<TicketExtraction> {
    let document = Html::parse_document(html);

    timeline_cards(&document, selectors).map(|cards| pipeline.run(ticket_id, cards))
}
