use crate::domain::response::ParsedResponse;
use tracing::{debug, warn};

/// Flattens a gateway XML reply into its root's child elements.
///
/// Anything that is not a well-formed document yields an empty
/// `ParsedResponse`; the interpreter then reports a failure because `Result`
/// is missing. This never returns an error.
pub fn parse(body: &str) -> ParsedResponse {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let document = match roxmltree::Document::parse_with_options(body.trim_start(), options) {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, body = %body, "unreadable gateway response");
            return ParsedResponse::new();
        }
    };

    debug!(body = %body, "gateway response");

    document
        .root_element()
        .children()
        .filter(|node| node.is_element())
        .map(|node| {
            let name = node.tag_name().name().to_string();
            let value = node.text().unwrap_or_default().to_string();
            debug!(field = %name, value = %value, "response field");
            (name, value)
        })
        .collect()
}
