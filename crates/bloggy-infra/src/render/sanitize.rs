use ammonia::Builder as AmmoniaBuilder;

use bloggy_core::ports::ContentSanitizer;

/// Allow-list HTML sanitizer for editor output.
///
/// Ammonia's defaults plus the `class` attribute, which the editor uses for
/// alignment and indentation.
pub struct AmmoniaSanitizer {
    builder: AmmoniaBuilder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut builder = AmmoniaBuilder::default();
        builder.add_generic_attributes(&["class"]);
        Self { builder }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        self.builder.clean(html).to_string()
    }
}
