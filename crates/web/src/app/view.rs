//! Server-side HTML rendering.
//!
//! The whole page is rebuilt from store state on every request; nothing is
//! patched incrementally.

use stockroom_inventory::{InventoryStore, Notice};

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.3rem .6rem;text-align:left}\
.metrics{display:flex;gap:3rem;margin-top:1rem}\
.metric .value{font-size:1.6rem}\
.notice{padding:.5rem 1rem;margin:.5rem 0;border-radius:4px}\
.notice-info{background:#e7f0fb}.notice-success{background:#e3f6e5}\
.notice-warning{background:#fdf4dc}.notice-error{background:#fbe4e4}\
label{display:inline-block;margin-right:1rem}";

/// Everything one render needs.
#[derive(Debug)]
pub struct PageView<'a> {
    pub store: &'a InventoryStore,
    pub notices: &'a [Notice],
    pub selected: Option<usize>,
    pub currency: &'a str,
    /// Open the delete panel (the request was a preview of a position).
    pub expand_delete: bool,
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Stockroom</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>📦 Stockroom v1.0</h1>\n");
    html.push_str("<p>Keep track of stock on hand: add items, remove them, review totals.</p>\n<hr>\n");

    render_notices(&mut html, view.notices);
    render_add_panel(&mut html, view.currency);
    html.push_str("<hr>\n");
    render_stock_panel(&mut html, view.store, view.currency);
    html.push_str("<hr>\n");
    if let Some(selected) = view.selected {
        render_delete_panel(&mut html, view.store, selected, view.expand_delete);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_notices(html: &mut String, notices: &[Notice]) {
    for notice in notices {
        html.push_str(&format!(
            "<div class=\"notice notice-{}\" role=\"status\">{}</div>\n",
            notice.level.as_str(),
            escape(&notice.message)
        ));
    }
}

fn render_add_panel(html: &mut String, currency: &str) {
    html.push_str("<details open id=\"add-panel\">\n<summary>➕ Add new item</summary>\n");
    html.push_str("<h2>Enter the new item's details</h2>\n");
    html.push_str("<form method=\"post\" action=\"/items\">\n");
    html.push_str("<label>Item name <input type=\"text\" name=\"name\"></label>\n");
    html.push_str(
        "<label>Quantity <input type=\"number\" name=\"quantity\" min=\"1\" step=\"1\" value=\"1\"></label>\n",
    );
    html.push_str(&format!(
        "<label>Unit price ({}) <input type=\"number\" name=\"unit_price\" min=\"0.01\" step=\"0.01\" value=\"10.00\"></label>\n",
        escape(currency)
    ));
    html.push_str("<button type=\"submit\">Add to Inventory</button>\n</form>\n</details>\n");
}

fn render_stock_panel(html: &mut String, store: &InventoryStore, currency: &str) {
    html.push_str("<h2>📊 Current stock</h2>\n");

    if store.is_empty() {
        render_notices(
            html,
            &[Notice::info("The stockroom is empty. Add your first item above!")],
        );
        return;
    }

    let currency = escape(currency);
    html.push_str("<table id=\"stock\">\n<thead><tr>");
    html.push_str("<th>Position</th><th>Name</th><th>Quantity</th><th>Price</th>");
    html.push_str("</tr></thead>\n<tbody>\n");
    for (position, row) in store.read().iter().enumerate() {
        html.push_str(&format!(
            "<tr><td>{position}</td><td>{}</td><td>{}</td><td>{currency} {}</td></tr>\n",
            escape(&row.name),
            row.quantity,
            row.unit_price
        ));
    }
    html.push_str("</tbody>\n</table>\n");

    let summary = store.summary();
    html.push_str("<div class=\"metrics\">\n");
    html.push_str(&format!(
        "<div class=\"metric\" id=\"total-quantity\"><div>Total quantity</div><div class=\"value\">{} pcs.</div></div>\n",
        summary.total_quantity
    ));
    html.push_str(&format!(
        "<div class=\"metric\" id=\"total-value\"><div>Total stock value</div><div class=\"value\">{} {currency}</div></div>\n",
        summary.total_value
    ));
    html.push_str("</div>\n");
}

fn render_delete_panel(html: &mut String, store: &InventoryStore, selected: usize, expanded: bool) {
    let Some(last) = store.last_position() else {
        return;
    };

    html.push_str(&format!(
        "<details{} id=\"delete-panel\">\n<summary>➖ Remove item</summary>\n",
        if expanded { " open" } else { "" }
    ));
    html.push_str("<h3>Remove an item by position</h3>\n");
    // One form: "Preview" re-renders with the selection, "Remove Item" posts it.
    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str(&format!(
        "<label>Position of the item to remove (see table above) \
<input type=\"number\" name=\"position\" min=\"0\" max=\"{last}\" step=\"1\" value=\"{selected}\"></label>\n"
    ));
    html.push_str("<button type=\"submit\">Preview</button>\n");
    html.push_str(
        "<button type=\"submit\" formmethod=\"post\" formaction=\"/items/remove\">Remove Item</button>\n",
    );
    html.push_str("</form>\n");

    if let Some(row) = store.get(selected) {
        html.push_str(&format!(
            "<div class=\"notice notice-info\" id=\"delete-preview\">Selected for removal: <strong>{}</strong></div>\n",
            escape(&row.name)
        ));
    }
    html.push_str("</details>\n");
}

/// Minimal HTML text/attribute escaping.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
