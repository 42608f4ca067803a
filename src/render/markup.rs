//! HTML markup for highlighted text
//!
//! All segment text goes through maud's escaping, so source text can never be
//! interpreted as markup.

use maud::html;

use super::delimited;
use crate::config::MarkupConfig;
use crate::error::HiliteError;
use crate::highlight::Segment;

/// Render segments as an HTML fragment, wrapping matches in `<mark>`
pub fn to_markup<'a, I>(segments: I, config: &MarkupConfig) -> String
where
    I: IntoIterator<Item = Segment<'a>>,
{
    html! {
        @for segment in segments {
            @if segment.is_match {
                mark class=(config.class) { (segment.text) }
            } @else {
                (segment.text)
            }
        }
    }
    .into_string()
}

/// Render a `|~S~|`/`|~E~|` delimited string as an HTML fragment
pub fn delimited_to_markup(text: &str, config: &MarkupConfig) -> Result<String, HiliteError> {
    Ok(to_markup(delimited::decode(text)?, config))
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
