use std::fmt::Write;

/// Renders the index page: every item in current order paired with a delete
/// link for its current position, followed by the submission form.
pub fn render_index(items: &[String]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>To-Do List</title></head>\n\
         <body>\n\
         <h1>To-Do List</h1>\n\
         <ul>\n",
    );

    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(
            page,
            "  <li>{} <a href=\"/delete/{index}\">delete</a></li>",
            escape_html(item)
        );
    }

    page.push_str(
        "</ul>\n\
         <form method=\"post\" action=\"/\">\n\
           <input type=\"text\" name=\"todo\">\n\
           <button type=\"submit\">Add</button>\n\
         </form>\n\
         </body>\n\
         </html>\n",
    );

    page
}

/// Entity-encodes markup characters. Items are stored verbatim; escaping
/// happens only here, at render time.
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
