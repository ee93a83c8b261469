//! # Rendering Module
//!
//! Styled terminal output using the `outstanding` crate.
//!
//! Layout calculations (column widths, truncation, alignment) stay in Rust because
//! they need Unicode-aware width handling. Templates only place the pre-computed
//! strings and apply styles, either fixed ones or per-row style names computed
//! here (status colors, the active card marker).
//!
//! Every function takes `use_color`: `None` detects terminal support, `Some(false)`
//! forces plain text (`--no-color`, tests).

use super::setup::SESSION_HELP;
use super::styles::{names, status_style, BILLZ_THEME};
use super::templates::{
    CARDS_TEMPLATE, FIELDS_TEMPLATE, HELP_TEMPLATE, INVOICE_TEMPLATE, KEY_VALUE_TEMPLATE,
    LOG_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE,
};
use billzapp::collection::EntityCollection;
use billzapp::commands::helpers::pluralize;
use billzapp::commands::{CmdMessage, MessageLevel};
use billzapp::fields::{DisplayDatatype, Field, FieldInfo, Widget};
use billzapp::format::format_amount;
use billzapp::invoice::{Invoice, InvoiceStatus};
use billzapp::model::{MonetaryEntity, StatusKind};
use billzapp::store::TransitionRecord;
use billzapp::views::StatusSummary;
use chrono::Local;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Widest a table cell or card label may get before it is truncated.
pub const MAX_COLUMN_WIDTH: usize = 28;
pub const ACTIVE_MARKER: &str = "▸ ";
const INACTIVE_MARKER: &str = "  ";
const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct CellData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct RowData {
    cells: Vec<CellData>,
}

#[derive(Serialize)]
struct TableData {
    title: Option<String>,
    header: Vec<String>,
    rows: Vec<RowData>,
    footer: String,
}

#[derive(Serialize)]
struct CardEntryData {
    label: String,
    amount: String,
}

#[derive(Serialize)]
struct CardData {
    marker: &'static str,
    title: String,
    style: &'static str,
    count: String,
    total: String,
    entries: Vec<CardEntryData>,
}

#[derive(Serialize)]
struct CardsData {
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct DetailLine {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct InvoiceData {
    title: String,
    lines: Vec<DetailLine>,
}

#[derive(Serialize)]
struct FieldRow {
    id: String,
    header: String,
    datatype: String,
    widget: String,
}

#[derive(Serialize)]
struct FieldsData {
    header: Vec<String>,
    fields: Vec<FieldRow>,
}

#[derive(Serialize)]
struct LogEntry {
    seq: String,
    time: String,
    action: String,
    target: String,
    changed: bool,
}

#[derive(Serialize)]
struct LogData {
    entries: Vec<LogEntry>,
}

#[derive(Serialize)]
struct KeyValue {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct KeyValueData {
    pairs: Vec<KeyValue>,
}

#[derive(Serialize)]
struct HelpCommand {
    usage: String,
    description: String,
}

#[derive(Serialize)]
struct HelpData {
    title: String,
    commands: Vec<HelpCommand>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*BILLZ_THEME), c),
        None => render(template, data, ThemeChoice::from(&*BILLZ_THEME)),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders invoice rows as a table over the collection's full schema.
///
/// Amount columns are right-aligned; the footer carries the row count and the
/// total in `currency`. No rows renders nothing, the caller prints the command's
/// message instead.
pub fn render_table(
    collection: &EntityCollection<Invoice>,
    rows: &[Invoice],
    filter: Option<InvoiceStatus>,
    currency: &str,
    use_color: Option<bool>,
) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let fields = collection.get_all_fields();
    let grid: Vec<Vec<String>> = rows
        .iter()
        .map(|invoice| {
            fields
                .iter()
                .map(|field| truncate_to_width(&field.display_string(invoice), MAX_COLUMN_WIDTH))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = fields.iter().map(|f| f.header.width()).collect();
    for row in &grid {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let last = fields.len().saturating_sub(1);
    let header = fields
        .iter()
        .enumerate()
        .map(|(i, field)| align(&field.header, widths[i], is_numeric(field), i == last))
        .collect();

    let table_rows = rows
        .iter()
        .zip(grid)
        .map(|(invoice, cells)| RowData {
            cells: cells
                .into_iter()
                .enumerate()
                .map(|(i, text)| CellData {
                    text: align(&text, widths[i], is_numeric(&fields[i]), i == last),
                    style: cell_style(&fields[i], invoice),
                })
                .collect(),
        })
        .collect();

    let total: f64 = rows.iter().map(|r| r.value).sum();
    let data = TableData {
        title: filter.map(|status| format!("{}: {}", collection.headers().status, status.label())),
        header,
        rows: table_rows,
        footer: format!(
            "{} · {}",
            pluralize(rows.len(), "invoice"),
            format_amount(total, Some(currency))
        ),
    };

    render_template(TABLE_TEMPLATE, &data, use_color)
}

/// Renders summary cards: one per status plus "All", each with its top entries.
pub fn render_cards(
    collection: &EntityCollection<Invoice>,
    summaries: &[StatusSummary<Invoice>],
    currency: &str,
    use_color: Option<bool>,
) -> String {
    let title_width = summaries.iter().map(|s| s.label.width()).max().unwrap_or(0);
    let counts: Vec<String> = summaries
        .iter()
        .map(|s| pluralize(s.count, "invoice"))
        .collect();
    let count_width = counts.iter().map(|c| c.width()).max().unwrap_or(0);
    let totals: Vec<String> = summaries
        .iter()
        .map(|s| format_amount(s.total, Some(currency)))
        .collect();
    let total_width = totals.iter().map(|t| t.width()).max().unwrap_or(0);

    let cards = summaries
        .iter()
        .zip(counts)
        .zip(totals)
        .map(|((summary, count), total)| CardData {
            marker: if summary.active {
                ACTIVE_MARKER
            } else {
                INACTIVE_MARKER
            },
            title: pad_right(&summary.label, title_width),
            style: summary.status.map(status_style).unwrap_or(names::TITLE),
            count: pad_right(&count, count_width),
            total: pad_left(&total, total_width),
            entries: card_entries(collection, &summary.top),
        })
        .collect();

    render_template(CARDS_TEMPLATE, &CardsData { cards }, use_color)
}

fn card_entries(collection: &EntityCollection<Invoice>, top: &[Invoice]) -> Vec<CardEntryData> {
    let labels: Vec<String> = top
        .iter()
        .map(|invoice| truncate_to_width(&collection.card_label(invoice), MAX_COLUMN_WIDTH))
        .collect();
    let amounts: Vec<String> = top
        .iter()
        .map(|invoice| format_amount(invoice.value(), invoice.currency()))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let amount_width = amounts.iter().map(|a| a.width()).max().unwrap_or(0);

    labels
        .iter()
        .zip(&amounts)
        .map(|(label, amount)| CardEntryData {
            label: pad_right(label, label_width),
            amount: pad_left(amount, amount_width),
        })
        .collect()
}

/// Renders every field of one invoice, one line per field.
pub fn render_invoice(
    collection: &EntityCollection<Invoice>,
    invoice: &Invoice,
    use_color: Option<bool>,
) -> String {
    let fields = collection.get_all_fields();
    let label_width = fields.iter().map(|f| f.header.width()).max().unwrap_or(0);
    let lines = fields
        .iter()
        .map(|field| DetailLine {
            label: pad_right(&field.header, label_width),
            value: field.display_string(invoice),
            style: cell_style(field, invoice),
        })
        .collect();

    let data = InvoiceData {
        title: format!("{} {}", Invoice::KIND, invoice.id),
        lines,
    };
    render_template(INVOICE_TEMPLATE, &data, use_color)
}

/// Renders the schema: attribute id, header, datatype and edit widget.
pub fn render_fields(fields: &[FieldInfo], use_color: Option<bool>) -> String {
    let columns: Vec<[String; 4]> = fields
        .iter()
        .map(|f| {
            [
                f.id.clone(),
                f.header.clone(),
                f.display_datatype.as_str().to_string(),
                widget_label(&f.widget),
            ]
        })
        .collect();
    let titles = ["Id", "Header", "Type", "Widget"];
    let mut widths: Vec<usize> = titles.iter().map(|t| t.width()).collect();
    for row in &columns {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header = titles
        .iter()
        .enumerate()
        .map(|(i, t)| align(t, widths[i], false, i == titles.len() - 1))
        .collect();
    let rows = columns
        .into_iter()
        .map(|[id, header, datatype, widget]| FieldRow {
            id: pad_right(&id, widths[0]),
            header: pad_right(&header, widths[1]),
            datatype: pad_right(&datatype, widths[2]),
            widget,
        })
        .collect();

    render_template(
        FIELDS_TEMPLATE,
        &FieldsData {
            header,
            fields: rows,
        },
        use_color,
    )
}

/// Renders applied transitions, oldest first, with local wall-clock times.
pub fn render_log(transitions: &[TransitionRecord], use_color: Option<bool>) -> String {
    if transitions.is_empty() {
        return String::new();
    }
    let seq_width = transitions
        .iter()
        .map(|t| t.seq.to_string().len())
        .max()
        .unwrap_or(0);
    let action_width = transitions
        .iter()
        .map(|t| t.action_type().width())
        .max()
        .unwrap_or(0);

    let entries = transitions
        .iter()
        .map(|t| {
            let action = t.action_type();
            let (action, target) = match &t.target {
                Some(target) => (pad_right(&action, action_width), format!("{COLUMN_GAP}{target}")),
                None => (action, String::new()),
            };
            LogEntry {
                seq: pad_left(&t.seq.to_string(), seq_width),
                time: t.applied_at.with_timezone(&Local).format("%H:%M:%S").to_string(),
                action,
                target,
                changed: t.changed,
            }
        })
        .collect();

    render_template(LOG_TEMPLATE, &LogData { entries }, use_color)
}

/// Renders `key  value` lines with keys aligned.
pub fn render_key_values(pairs: &[(&str, String)], use_color: Option<bool>) -> String {
    let key_width = pairs.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let pairs = pairs
        .iter()
        .map(|(key, value)| KeyValue {
            key: pad_right(key, key_width),
            value: value.clone(),
        })
        .collect();
    render_template(KEY_VALUE_TEMPLATE, &KeyValueData { pairs }, use_color)
}

/// Renders the session command reference.
pub fn render_help(use_color: Option<bool>) -> String {
    let usage_width = SESSION_HELP
        .iter()
        .map(|(usage, _)| usage.width())
        .max()
        .unwrap_or(0);
    let commands = SESSION_HELP
        .iter()
        .map(|(usage, description)| HelpCommand {
            usage: pad_right(usage, usage_width),
            description: description.to_string(),
        })
        .collect();
    let data = HelpData {
        title: "Commands:".to_string(),
        commands,
    };
    render_template(HELP_TEMPLATE, &data, use_color)
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages_data = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: messages_data,
    };
    match use_color {
        Some(c) => render_with_color(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*BILLZ_THEME), c),
        None => render(MESSAGES_TEMPLATE, &data, ThemeChoice::from(&*BILLZ_THEME)),
    }
    .unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn widget_label(widget: &Widget) -> String {
    match widget {
        Widget::Text => "text".to_string(),
        Widget::Number => "number".to_string(),
        Widget::Currency { decimal_places } => format!("currency ({decimal_places} dp)"),
        Widget::Date => "date".to_string(),
        Widget::Dropdown { options } => format!("dropdown: {}", options.join(", ")),
    }
}

fn is_numeric<E>(field: &Field<E>) -> bool {
    matches!(
        field.display_datatype,
        DisplayDatatype::MoneyAmount | DisplayDatatype::Number
    )
}

fn cell_style(field: &Field<Invoice>, invoice: &Invoice) -> &'static str {
    match field.display_datatype {
        DisplayDatatype::MoneyAmount => names::AMOUNT,
        DisplayDatatype::Enum if field.id == "status" => status_style(invoice.status),
        _ if field.id == "id" => names::TITLE,
        _ => names::REGULAR,
    }
}

/// Pads a cell to `width`. The last column of a left-aligned row is not padded.
fn align(text: &str, width: usize, right: bool, last: bool) -> String {
    if right {
        pad_left(text, width)
    } else if last {
        text.to_string()
    } else {
        pad_right(text, width)
    }
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(text.width())), text)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use billzapp::invoice::invoice_collection;
    use billzapp::views::summarize;

    fn invoices() -> Vec<Invoice> {
        vec![
            Invoice::new("INV-00001", 100.0).with_customer("Acme"),
            Invoice::new("INV-00002", 1200.0)
                .with_customer("Globex")
                .with_status(InvoiceStatus::Due),
            Invoice::new("INV-00003", 300.0)
                .with_customer("Initech")
                .with_status(InvoiceStatus::Paid),
        ]
    }

    fn collection() -> EntityCollection<Invoice> {
        invoice_collection().unwrap().with_entities(invoices())
    }

    #[test]
    fn test_render_empty_table_is_blank() {
        let output = render_table(&collection(), &[], None, "USD", Some(false));
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_table_has_headers_rows_and_footer() {
        let output = render_table(&collection(), &invoices(), None, "USD", Some(false));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains("Invoice Status"));
        assert!(lines[0].contains("Customer Name"));
        assert!(lines[1].starts_with("INV-00001"));
        assert!(lines[2].contains("Globex"));
        assert!(lines[2].contains("Due"));
        assert_eq!(lines[4], "3 invoices · $1,600.00");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_render_table_right_aligns_amounts() {
        let output = render_table(&collection(), &invoices(), None, "USD", Some(false));
        let lines: Vec<&str> = output.lines().collect();
        let small = lines[1].find("$100.00").unwrap() + "$100.00".len();
        let large = lines[2].find("$1,200.00").unwrap() + "$1,200.00".len();
        assert_eq!(small, large);
    }

    #[test]
    fn test_render_table_shows_filter_title() {
        let due = vec![invoices()[1].clone()];
        let output = render_table(
            &collection(),
            &due,
            Some(InvoiceStatus::Due),
            "USD",
            Some(false),
        );
        assert!(output.starts_with("Invoice Status: Due\n"));
        assert!(output.contains("1 invoice · $1,200.00"));
    }

    #[test]
    fn test_render_table_truncates_long_cells() {
        let mut invoice = Invoice::new("INV-9", 1.0);
        invoice.notes = "a".repeat(80);
        let output = render_table(&collection(), &[invoice], None, "USD", Some(false));
        assert!(output.contains('…'));
        assert!(!output.contains(&"a".repeat(MAX_COLUMN_WIDTH)));
    }

    #[test]
    fn test_render_cards_marks_active_card_and_top_entries() {
        let collection = collection();
        let summaries = summarize(&collection, None, 3);
        let output = render_cards(&collection, &summaries, "USD", Some(false));

        let all_line = output
            .lines()
            .find(|l| l.contains("All"))
            .unwrap();
        assert!(all_line.starts_with(ACTIVE_MARKER));
        assert!(all_line.contains("3 invoices"));
        assert!(all_line.contains("$1,600.00"));

        let draft_line = output.lines().find(|l| l.contains("Draft")).unwrap();
        assert!(draft_line.starts_with(INACTIVE_MARKER));
        assert!(output.contains("    Globex   $1,200.00"));
    }

    #[test]
    fn test_render_cards_follow_filter() {
        let collection = collection();
        let summaries = summarize(&collection, Some(InvoiceStatus::Paid), 3);
        let output = render_cards(&collection, &summaries, "USD", Some(false));
        let paid_line = output.lines().find(|l| l.contains("Paid")).unwrap();
        assert!(paid_line.starts_with(ACTIVE_MARKER));
    }

    #[test]
    fn test_render_invoice_lists_every_field() {
        let collection = collection();
        let invoice = &invoices()[1];
        let output = render_invoice(&collection, invoice, Some(false));
        assert!(output.starts_with("Invoice INV-00002\n"));
        assert!(output.contains("Customer Name"));
        assert!(output.contains("$1,200.00"));
        assert_eq!(output.lines().count(), 1 + collection.get_all_fields().len());
    }

    #[test]
    fn test_render_fields_shows_widgets() {
        let fields: Vec<FieldInfo> = collection()
            .get_all_fields()
            .iter()
            .map(FieldInfo::from)
            .collect();
        let output = render_fields(&fields, Some(false));
        assert!(output.contains("customerName"));
        assert!(output.contains("currency (2 dp)"));
        assert!(output.contains("dropdown: draft, pendingApproval"));
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![
            CmdMessage::success("Invoice created: INV-1"),
            CmdMessage::warning("Amount is not a number"),
        ];
        let output = render_messages(&messages, Some(false));
        assert_eq!(output, "Invoice created: INV-1\nAmount is not a number\n");
        assert!(render_messages(&[], Some(false)).is_empty());
    }

    #[test]
    fn test_render_key_values_aligns_keys() {
        let pairs = vec![("top-n", "3".to_string()), ("demo-mode", "false".to_string())];
        let output = render_key_values(&pairs, Some(false));
        assert_eq!(output, "top-n      3\ndemo-mode  false\n");
    }

    #[test]
    fn test_render_help_lists_session_commands() {
        let output = render_help(Some(false));
        assert!(output.starts_with("Commands:\n"));
        assert_eq!(output.lines().count(), 1 + SESSION_HELP.len());
        assert!(output.contains("filter [status]"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
