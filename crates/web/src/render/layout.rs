//! The shared page shell: head, navigation bar and footer.

use agrisite_catalog::MenuItem;

/// Escape text for interpolation into HTML.
///
/// Catalog copy is trusted compiled-in data, but anything echoed back from a
/// request (contact form fields, unmatched paths) goes through here.
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

fn nav_item(item: &MenuItem) -> String {
    if item.children.is_empty() {
        format!(
            r#"<li><a href="{}">{}</a></li>"#,
            item.href,
            escape(&item.label)
        )
    } else {
        let children: String = item.children.iter().map(nav_item).collect();
        format!(
            r#"<li class="dropdown"><a href="{}">{}</a><ul class="dropdown-menu">{}</ul></li>"#,
            item.href,
            escape(&item.label),
            children
        )
    }
}

/// Wrap a rendered body in the site shell.
pub fn shell(title: &str, menu: &[MenuItem], body: &str) -> String {
    let nav: String = menu.iter().map(nav_item).collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Agrisite Nutrition</title>
</head>
<body>
<header>
<nav><ul class="main-menu">{nav}</ul></nav>
</header>
<main>
{body}
</main>
<footer>
<p>&copy; Agrisite Nutrition. Crop nutrition programmes for modern agriculture.</p>
</footer>
</body>
</html>
"#,
        title = escape(title),
    )
}
