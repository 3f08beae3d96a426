//! HTML pages.
//!
//! Plain string rendering; every piece of user-supplied text goes through
//! [`escape`].

use pharmacy_core::MedicineId;
use pharmacy_inventory::{InventoryItem, ItemForm};

use crate::app::flash::Flash;

/// Escape text for use in HTML element content and quoted attributes.
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

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    let mut messages = String::new();
    for flash in flashes {
        messages.push_str(&format!(
            "<div class=\"alert alert-{}\" role=\"alert\">{}</div>\n",
            flash.kind.as_str(),
            escape(&flash.message)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: .4rem .8rem; text-align: left; }}
.alert {{ padding: .6rem; margin-bottom: 1rem; border-radius: 4px; }}
.alert-success {{ background: #d1e7dd; }}
.alert-danger {{ background: #f8d7da; }}
.alert-info {{ background: #cff4fc; }}
</style>
</head>
<body>
<h1><a href="/">Pharmacy Inventory</a></h1>
{messages}{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// The inventory list, optionally narrowed by a search term.
pub fn index_page(items: &[InventoryItem], flashes: &[Flash], search: Option<&str>) -> String {
    let mut body = format!(
        r#"<form method="post" action="/search">
<input type="text" name="search_name" placeholder="Search by name" value="{}">
<button type="submit">Search</button>
</form>
<p><a href="/add">Add medicine</a></p>
"#,
        escape(search.unwrap_or_default())
    );

    if items.is_empty() {
        body.push_str("<p>No medicines found.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Quantity</th><th>Price</th><th>Expiration date</th><th></th></tr></thead>\n<tbody>\n",
        );
        for item in items {
            body.push_str(&format!(
                "<tr><td>{name}</td><td>{quantity}</td><td>{price:.2}</td><td>{date}</td>\
                 <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
                name = escape(item.name()),
                quantity = item.quantity(),
                price = item.price(),
                date = item.expiration_date(),
                id = item.id(),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    layout("Pharmacy Inventory", flashes, &body)
}

/// Which form is being shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(MedicineId),
}

/// The add or edit form, pre-filled from `form`.
pub fn item_form_page(mode: FormMode, form: &ItemForm, flashes: &[Flash]) -> String {
    let (title, action, submit) = match mode {
        FormMode::Add => ("Add Medicine".to_string(), "/add".to_string(), "Add"),
        FormMode::Edit(id) => ("Edit Medicine".to_string(), format!("/edit/{id}"), "Update"),
    };

    let body = format!(
        r#"<h2>{title}</h2>
<form method="post" action="{action}">
<p><label>Name <input type="text" name="name" required value="{name}"></label></p>
<p><label>Quantity <input type="number" name="quantity" min="0" step="1" required value="{quantity}"></label></p>
<p><label>Price <input type="number" name="price" min="0" step="any" required value="{price}"></label></p>
<p><label>Expiration date <input type="date" name="expiration_date" placeholder="YYYY-MM-DD" required value="{date}"></label></p>
<button type="submit">{submit}</button> <a href="/">Cancel</a>
</form>
"#,
        name = escape(&form.name),
        quantity = escape(&form.quantity),
        price = escape(&form.price),
        date = escape(&form.expiration_date),
    );

    layout(&title, flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pharmacy_inventory::ItemFields;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn index_lists_items_with_edit_and_delete_links() {
        let item = InventoryItem::create(ItemFields {
            name: "<Aspirin>".to_string(),
            quantity: 100,
            price: 2.5,
            expiration_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        });

        let html = index_page(std::slice::from_ref(&item), &[Flash::success("ok")], None);
        assert!(html.contains("&lt;Aspirin&gt;"));
        assert!(!html.contains("<Aspirin>"));
        assert!(html.contains("<td>2.50</td>"));
        assert!(html.contains("<td>2026-01-01</td>"));
        assert!(html.contains(&format!("/edit/{}", item.id())));
        assert!(html.contains(&format!("/delete/{}", item.id())));
        assert!(html.contains("alert-success"));
    }

    #[test]
    fn empty_index_says_so_and_echoes_search() {
        let html = index_page(&[], &[], Some("asp\""));
        assert!(html.contains("No medicines found."));
        assert!(html.contains("value=\"asp&quot;\""));
    }

    #[test]
    fn edit_form_posts_back_to_its_id() {
        let id = MedicineId::new();
        let form = ItemForm {
            name: "Ibuprofen".to_string(),
            quantity: "3".to_string(),
            price: "4.5".to_string(),
            expiration_date: "2027-06-30".to_string(),
        };

        let html = item_form_page(FormMode::Edit(id), &form, &[]);
        assert!(html.contains(&format!("action=\"/edit/{id}\"")));
        assert!(html.contains("value=\"Ibuprofen\""));
        assert!(html.contains("value=\"2027-06-30\""));
    }

    #[test]
    fn price_input_accepts_any_stored_precision() {
        let form = ItemForm {
            name: "Ibuprofen".to_string(),
            quantity: "3".to_string(),
            price: "2.555".to_string(),
            expiration_date: "2027-06-30".to_string(),
        };

        let html = item_form_page(FormMode::Edit(MedicineId::new()), &form, &[]);
        assert!(html.contains(r#"name="price" min="0" step="any" required value="2.555""#));
    }
}
