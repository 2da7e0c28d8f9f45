//! `Link` header parsing (RFC 8288 subset used by Canvas).
//!
//! Canvas paginates list endpoints with headers of the form
//! `<https://…?page=2>; rel="next",<https://…?page=1>; rel="first"`.
//! Anything that does not parse is ignored, so a malformed header reads as
//! "no next page" rather than an error.

/// Locator of the `rel="next"` segment, if any.
#[must_use]
pub fn next_link(header: &str) -> Option<String> {
    header
        .split(',')
        .filter_map(parse_segment)
        .find(|(_, rels)| rels.iter().any(|rel| rel.eq_ignore_ascii_case("next")))
        .map(|(target, _)| target.to_string())
}

/// Split one `<target>; param=value; …` segment into its target and the
/// relation types listed in its `rel` parameter.
fn parse_segment(segment: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = segment.split(';');
    let target = parts
        .next()?
        .trim()
        .strip_prefix('<')?
        .strip_suffix('>')?
        .trim();
    if target.is_empty() {
        return None;
    }

    let rels = parts
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"'))
        })
        .flat_map(str::split_whitespace)
        .collect();

    Some((target, rels))
}
