use crate::error::HiliteError;
use crate::highlight::Segment;

/// Serialize segments as a JSON array
pub fn to_json<'a, I>(segments: I) -> Result<String, HiliteError>
where
    I: IntoIterator<Item = Segment<'a>>,
{
    let segments: Vec<Segment<'a>> = segments.into_iter().collect();
    Ok(serde_json::to_string(&segments)?)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
