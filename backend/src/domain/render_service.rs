//! Slip rendering for the fee slip backend.
//!
//! Produces the HTML fragment shown in the preview pane and snapshotted into
//! saved receipts. All user-supplied text is escaped before embedding so a
//! hostile form value cannot corrupt the stored document or inject markup.

use chrono::{Local, Utc};
use log::debug;

use crate::domain::models::{short_receipt_id, FeeEntry};

/// Escape the HTML-significant characters in user-supplied text.
///
/// Security invariant for every rendered slip, not cosmetics: the escaped
/// form is what gets persisted and later printed verbatim.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format an amount the way the slip shows it: whole values without a
/// decimal tail, fractional values with two places.
pub(crate) fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Escaped field value, or an em-dash placeholder when empty.
fn or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "—".to_string()
    } else {
        escape_html(s.trim())
    }
}

/// Renders fee entries into slip documents.
#[derive(Clone, Default)]
pub struct RenderService;

impl RenderService {
    pub fn new() -> Self {
        Self
    }

    /// Render the slip markup fragment for a fee entry.
    ///
    /// The fragment carries the institution header, the generation date, a
    /// short receipt identifier derived from the current instant, the
    /// student block, the itemized charges, and the grand total in PKR.
    pub fn render_slip(&self, entry: &FeeEntry) -> String {
        let total = entry.total();
        let generated_on = Local::now().format("%Y-%m-%d");
        let receipt_id = short_receipt_id(Utc::now().timestamp_millis());
        debug!("Rendering slip for '{}', total {}", entry.name, total);

        let facility_block = if entry.facilities.is_empty() {
            r#"<div class="slip-empty">No facilities selected</div>"#.to_string()
        } else {
            let items: String = entry
                .facilities
                .iter()
                .map(|f| {
                    format!(
                        "<li><span>{}</span><b>{} PKR</b></li>",
                        escape_html(&f.name),
                        format_amount(f.cost)
                    )
                })
                .collect();
            format!(r#"<div class="slip-items"><ul>{}</ul></div>"#, items)
        };

        format!(
            r#"<div class="slip-top">
  <div>
    <div class="slip-title">The Academy of Education</div>
    <div class="slip-meta">Fee Slip / Receipt</div>
  </div>
  <div class="slip-stamp">
    <div class="slip-date">{generated_on}</div>
    <div class="slip-meta">Receipt ID: {receipt_id}</div>
  </div>
</div>
<div class="slip-section">
  <div><strong>{name}</strong><div class="slip-meta">Student Name</div></div>
  <div><strong>{roll}</strong><div class="slip-meta">Roll / ID</div></div>
</div>
<div class="slip-section">
  <div><div class="slip-meta">Class / Section</div><div>{cls}</div></div>
  <div><div class="slip-meta">Notes</div><div>{notes}</div></div>
</div>
<div class="slip-charges">
  <div class="slip-items">
    <ul>
      <li><span>Tuition</span><b>{tuition} PKR</b></li>
      <li><span>Additional</span><b>{additional} PKR</b></li>
    </ul>
  </div>
  {facility_block}
  <div class="slip-total">
    <div class="slip-meta">Amount in PKR</div>
    <div class="slip-grand">{total} PKR</div>
  </div>
</div>"#,
            name = or_dash(&entry.name),
            roll = or_dash(&entry.roll),
            cls = or_dash(&entry.cls),
            notes = or_dash(&entry.notes),
            tuition = format_amount(entry.tuition),
            additional = format_amount(entry.additional),
            total = format_amount(total),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FacilityCharge;

    fn sample_entry() -> FeeEntry {
        FeeEntry {
            name: "Ali Khan".to_string(),
            roll: "42".to_string(),
            cls: "8-B".to_string(),
            tuition: 5000.0,
            additional: 200.0,
            notes: String::new(),
            facilities: vec![FacilityCharge {
                name: "Transport".to_string(),
                cost: 800.0,
            }],
        }
    }

    #[test]
    fn slip_lists_itemized_charges_and_grand_total() {
        let document = RenderService::new().render_slip(&sample_entry());

        assert!(document.contains("The Academy of Education"));
        assert!(document.contains("<li><span>Tuition</span><b>5000 PKR</b></li>"));
        assert!(document.contains("<li><span>Additional</span><b>200 PKR</b></li>"));
        assert!(document.contains("<li><span>Transport</span><b>800 PKR</b></li>"));
        assert!(document.contains("6000 PKR"));
    }

    #[test]
    fn empty_fields_render_as_dash_placeholder() {
        let mut entry = sample_entry();
        entry.roll = String::new();
        entry.notes = "  ".to_string();

        let document = RenderService::new().render_slip(&entry);
        assert!(document.contains("<strong>—</strong>"));
        assert!(document.contains("<div>—</div>"));
    }

    #[test]
    fn placeholder_shown_when_no_facilities_selected() {
        let mut entry = sample_entry();
        entry.facilities.clear();

        let document = RenderService::new().render_slip(&entry);
        assert!(document.contains("No facilities selected"));
    }

    #[test]
    fn user_input_is_escaped_before_embedding() {
        let mut entry = sample_entry();
        entry.name = r#"<script>alert("x")</script> & co"#.to_string();

        let document = RenderService::new().render_slip(&entry);
        assert!(!document.contains("<script>"));
        assert!(document.contains("&lt;script&gt;"));
        assert!(document.contains("&quot;x&quot;"));
        assert!(document.contains("&amp; co"));
    }

    #[test]
    fn fractional_amounts_keep_two_decimal_places() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(800.0), "800");
    }
}
