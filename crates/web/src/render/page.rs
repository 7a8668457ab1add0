//! Page templates over the shared shell.

use agrisite_catalog::{Category, CatalogRegistry, MenuItem, Product};
use agrisite_core::StaticPageKind;

use crate::contact::ContactReceipt;
use crate::render::content::ProductContent;
use crate::render::layout::{escape, shell};

fn contact_form(action: &str) -> String {
    format!(
        r#"<section class="contact">
<h2>Contact Us</h2>
<form method="post" action="{action}">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Message <textarea name="message" required></textarea></label>
<button type="submit">Send Enquiry</button>
</form>
</section>"#
    )
}

fn product_card(category: &Category, product: &Product) -> String {
    let description = product
        .description()
        .map(escape)
        .unwrap_or_default();
    format!(
        r#"<article class="product-card">
<h3><a href="/products/{category}/{product}">{name}</a></h3>
<p>{description}</p>
</article>"#,
        category = category.slug(),
        product = product.slug(),
        name = escape(product.name()),
    )
}

/// Home: hero plus the category grid.
pub fn home(menu: &[MenuItem], registry: &CatalogRegistry) -> String {
    let categories: String = registry
        .categories()
        .iter()
        .map(|c| {
            format!(
                r#"<article class="category-card"><h3><a href="/products/{slug}">{title}</a></h3><p>{count} products</p></article>"#,
                slug = c.slug(),
                title = escape(c.title()),
                count = c.products().len(),
            )
        })
        .collect();
    let body = format!(
        r#"<section class="hero">
<h1>Crop nutrition, from establishment to harvest</h1>
<p>Phosphites, foliar nutrients, biostimulants and trace elements for every programme.</p>
</section>
<section class="category-grid">
<h2>Our Ranges</h2>
{categories}
</section>"#
    );
    shell("Home", menu, &body)
}

/// Category listing: ordered product cards.
pub fn category_listing(menu: &[MenuItem], category: &Category) -> String {
    let cards: String = category
        .products()
        .iter()
        .map(|p| product_card(category, p))
        .collect();
    let body = format!(
        r#"<section class="category-listing">
<h1>{title}</h1>
{cards}
</section>"#,
        title = escape(category.title()),
    );
    shell(category.title(), menu, &body)
}

/// Bespoke product detail: hero, benefits grid, analysis chart,
/// application table, pack sizes and the contact form.
pub fn product_detail(
    menu: &[MenuItem],
    category: &Category,
    product: &Product,
    content: &ProductContent,
) -> String {
    let benefits: String = content
        .benefits
        .iter()
        .map(|b| format!("<li>{b}</li>"))
        .collect();
    let analysis: String = content
        .analysis
        .iter()
        .map(|(nutrient, value)| format!("<tr><td>{nutrient}</td><td>{value}</td></tr>"))
        .collect();
    let application: String = content
        .application
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.crop, row.rate, row.timing
            )
        })
        .collect();
    let description = product.description().map(escape).unwrap_or_default();
    let body = format!(
        r#"<section class="hero">
<p class="breadcrumb"><a href="/products/{category_slug}">{category_title}</a></p>
<h1>{name}</h1>
<p class="tagline">{tagline}</p>
<p>{description}</p>
</section>
<section class="benefits">
<h2>Benefits</h2>
<ul>{benefits}</ul>
</section>
<section class="analysis">
<h2>Typical Analysis</h2>
<table><thead><tr><th>Nutrient</th><th>Analysis</th></tr></thead><tbody>{analysis}</tbody></table>
</section>
<section class="application">
<h2>Application Rates</h2>
<table><thead><tr><th>Crop</th><th>Rate</th><th>Timing</th></tr></thead><tbody>{application}</tbody></table>
<p class="pack-sizes">Pack sizes: {pack_sizes}</p>
</section>
{contact}"#,
        category_slug = category.slug(),
        category_title = escape(category.title()),
        name = escape(product.name()),
        tagline = content.tagline,
        pack_sizes = content.pack_sizes,
        contact = contact_form("/contact/submit"),
    );
    shell(product.name(), menu, &body)
}

/// Generic fallback for a catalog-valid product with no bespoke unit:
/// product name plus a contact call to action.
pub fn generic_product(menu: &[MenuItem], category: &Category, product: &Product) -> String {
    let description = product.description().map(escape).unwrap_or_default();
    let body = format!(
        r#"<section class="hero">
<p class="breadcrumb"><a href="/products/{category_slug}">{category_title}</a></p>
<h1>{name}</h1>
<p>{description}</p>
<p class="cta">Contact us for the full specification, application rates and programme advice for {name}.</p>
</section>
{contact}"#,
        category_slug = category.slug(),
        category_title = escape(category.title()),
        name = escape(product.name()),
        contact = contact_form("/contact/submit"),
    );
    shell(product.name(), menu, &body)
}

/// A static informational page.
pub fn static_page(menu: &[MenuItem], kind: StaticPageKind) -> String {
    let copy = match kind {
        StaticPageKind::About => {
            "We formulate and manufacture crop nutrition products for agriculture and horticulture worldwide."
        }
        StaticPageKind::Contact => "Get in touch with our agronomy team.",
        StaticPageKind::HowToBuy => {
            "Our products are available through an international network of distributors. Contact us to find yours."
        }
        StaticPageKind::Regulatory => {
            "Registration and regulatory status varies by territory. Always read the label before use."
        }
        StaticPageKind::ProductGuide => {
            "Download the full product guide for analysis, rates and programme advice across all ranges."
        }
        StaticPageKind::Testimonials => "What growers and agronomists say about our programmes.",
        StaticPageKind::Media => "News, press releases and technical articles.",
    };
    let contact = if kind == StaticPageKind::Contact {
        contact_form("/contact/submit")
    } else {
        String::new()
    };
    let body = format!(
        r#"<section class="static-page">
<h1>{title}</h1>
<p>{copy}</p>
</section>
{contact}"#,
        title = kind.title(),
    );
    shell(kind.title(), menu, &body)
}

/// The wildcard catch-all page.
pub fn not_found(menu: &[MenuItem]) -> String {
    let body = r#"<section class="not-found">
<h1>Page not found</h1>
<p>The page you were looking for does not exist. <a href="/">Return to the home page</a>.</p>
</section>"#;
    shell("Page not found", menu, body)
}

/// Acknowledgment shown after a contact form submission.
pub fn contact_ack(menu: &[MenuItem], name: &str, receipt: &ContactReceipt) -> String {
    let body = format!(
        r#"<section class="contact-ack">
<h1>Thank you, {name}</h1>
<p>Your enquiry has been received and our team will be in touch.</p>
<p class="receipt">Reference: {id}</p>
</section>"#,
        name = escape(name),
        id = receipt.id,
    );
    shell("Enquiry received", menu, &body)
}
