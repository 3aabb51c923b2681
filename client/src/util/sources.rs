//! Citation formatting for answer sources.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

/// Directory prefix the query service puts in front of document names.
pub const SOURCE_PATH_PREFIX: &str = "data/";

/// Label shown before the citation list.
pub const CITATION_LABEL: &str = "📚 Sources: ";

/// Build the comma-separated citation list for a set of sources.
///
/// Blank entries are dropped and the [`SOURCE_PATH_PREFIX`] is stripped from
/// the rest. Returns `None` when nothing is left to cite.
pub fn citation_list(sources: &[String]) -> Option<String> {
    let cited: Vec<&str> = sources
        .iter()
        .map(String::as_str)
        .filter(|source| !source.trim().is_empty())
        .map(|source| source.strip_prefix(SOURCE_PATH_PREFIX).unwrap_or(source))
        .collect();

    if cited.is_empty() { None } else { Some(cited.join(", ")) }
}
