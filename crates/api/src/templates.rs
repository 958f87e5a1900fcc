//! Compiled-in Tera templates for the HTML list pages.

use tera::Tera;

const TEMPLATES: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    ("clients.html", include_str!("../templates/clients.html")),
    ("projects.html", include_str!("../templates/projects.html")),
];

/// Parse every page template. `base.html` is registered first so the pages
/// can extend it.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}
