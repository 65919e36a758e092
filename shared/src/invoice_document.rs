//! Printable invoice document.
//!
//! Renders an invoice together with its client and project as a single
//! self-contained HTML page. The total is recomputed from the line items and
//! does not trust the invoice's stored `amount`.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::{format_display_date, Client, Invoice, Project};

const STYLES: &str = r#"
      body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
      .invoice-container { max-width: 800px; margin: 0 auto; padding: 40px; }
      .header { display: flex; justify-content: space-between; margin-bottom: 40px; }
      .company-details { text-align: right; }
      .invoice-details { margin-bottom: 30px; }
      table { width: 100%; border-collapse: collapse; margin-bottom: 30px; }
      th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
      th { background-color: #f8f9fa; }
      .total { text-align: right; font-size: 1.2em; font-weight: bold; }
      .status { display: inline-block; padding: 6px 12px; border-radius: 4px; font-weight: bold; text-transform: uppercase; font-size: 0.8em; }
      .status-draft { background: #f3f4f6; color: #374151; }
      .status-sent { background: #dbeafe; color: #1e40af; }
      .status-paid { background: #d1fae5; color: #065f46; }
      .status-overdue { background: #fee2e2; color: #991b1b; }
"#;

/// Suggested file name for a downloaded invoice
pub fn file_name(invoice: &Invoice) -> String {
    format!("invoice-{}.html", invoice.number())
}

/// Render the printable document. `issued_on` is printed as the invoice date.
pub fn render(invoice: &Invoice, client: &Client, project: &Project, issued_on: NaiveDate) -> String {
    let number = escape_html(&invoice.number());
    let status = invoice.status.as_str();

    let mut rows = String::new();
    for item in &invoice.items {
        // Writing into a String cannot fail
        let _ = write!(
            rows,
            "\n          <tr>\n            <td>{}</td>\n            <td>{}</td>\n            <td>${:.2}</td>\n            <td>${:.2}</td>\n          </tr>",
            escape_html(&item.description),
            item.quantity,
            item.rate,
            item.amount,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Invoice #{number}</title>
    <style>{styles}</style>
  </head>
  <body>
    <div class="invoice-container">
      <div class="header">
        <div>
          <h1>INVOICE</h1>
          <span class="status status-{status}">{status}</span>
        </div>
        <div class="company-details">
          <h2>Your Company Name</h2>
          <p>123 Business Street<br />City, State 12345<br />contact@company.com</p>
        </div>
      </div>

      <div class="invoice-details">
        <div style="float: left">
          <h3>Bill To:</h3>
          <p>
            {client_name}<br />
            {client_company}<br />
            {client_email}<br />
            {client_phone}
          </p>
        </div>
        <div style="float: right">
          <p>
            <strong>Invoice Number:</strong> #{number}<br />
            <strong>Project:</strong> {project_name}<br />
            <strong>Date:</strong> {issued}<br />
            <strong>Due Date:</strong> {due}
          </p>
        </div>
        <div style="clear: both"></div>
      </div>

      <table>
        <thead>
          <tr>
            <th>Description</th>
            <th>Quantity</th>
            <th>Rate</th>
            <th>Amount</th>
          </tr>
        </thead>
        <tbody>{rows}
        </tbody>
      </table>

      <div class="total">
        <p>Total Amount: ${total:.2}</p>
      </div>

      <div style="margin-top: 40px">
        <p><strong>Payment Terms:</strong> Net 30</p>
        <p><strong>Notes:</strong> Thank you for your business!</p>
      </div>
    </div>
  </body>
</html>
"#,
        number = number,
        styles = STYLES,
        status = status,
        client_name = escape_html(&client.name),
        client_company = escape_html(&client.company),
        client_email = escape_html(&client.email),
        client_phone = escape_html(&client.phone),
        project_name = escape_html(&project.name),
        issued = issued_on.format("%b %-d, %Y"),
        due = format_display_date(&invoice.due_date),
        rows = rows,
        total = invoice.items_total(),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
