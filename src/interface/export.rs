use std::io::Write;

use crate::error::{PlannerError, Result};
use crate::models::{Item, ItemTotal, Totals};
use crate::planner::total_kilograms;

/// Items worth listing: anything with a non-zero quantity.
fn non_zero(totals: &Totals) -> impl Iterator<Item = (Item, &ItemTotal)> + '_ {
    totals.iter().filter(|(_, t)| !t.is_zero())
}

/// Shopping list for the clipboard, one `Name: X kg` line per item.
pub fn to_plain_text(totals: &Totals) -> String {
    non_zero(totals)
        .map(|(item, t)| format!("{}: {} kg", item.label(), t.kilograms()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the list as CSV with a `Product,Grams,Kilograms` header.
pub fn write_csv<W: Write>(totals: &Totals, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Product", "Grams", "Kilograms"])?;
    for (item, t) in non_zero(totals) {
        wtr.write_record([
            item.label().to_string(),
            t.grams().to_string(),
            t.kilograms().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(totals: &Totals) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(totals, &mut buf)?;
    String::from_utf8(buf).map_err(|e| PlannerError::InvalidInput(e.to_string()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Printable HTML page with the list and a bold total row.
pub fn to_print_html(totals: &Totals) -> String {
    let rows: String = non_zero(totals)
        .map(|(item, t)| {
            format!(
                "        <tr>\n          <td>{}</td>\n          <td>{} g</td>\n          <td>{} kg</td>\n        </tr>\n",
                escape_html(item.label()),
                t.grams(),
                t.kilograms()
            )
        })
        .collect();

    format!(
        r#"<html>
  <head>
    <title>Barbecue Shopping List</title>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
      th, td {{ padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }}
      th {{ background-color: #f2f2f2; }}
      .total {{ font-weight: bold; border-top: 2px solid #333; }}
    </style>
  </head>
  <body>
    <h1>Shopping List - Barbecue</h1>
    <table>
      <thead>
        <tr>
          <th>Product</th>
          <th>Grams</th>
          <th>Kilograms</th>
        </tr>
      </thead>
      <tbody>
{rows}        <tr class="total">
          <td>Total</td>
          <td></td>
          <td>{total:.2} kg</td>
        </tr>
      </tbody>
    </table>
  </body>
</html>
"#,
        rows = rows,
        total = total_kilograms(totals)
    )
}
