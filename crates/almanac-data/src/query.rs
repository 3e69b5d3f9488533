//! Linear-scan query filters over the catalog tables.
//!
//! Every endpoint query is one of four shapes: a free-text substring scan
//! across all fields, an exact id lookup, an exact season match, or a
//! substring match on a quote's credited speaker. Filters borrow rows,
//! preserve table order, and compose by feeding one result into the next.

use almanac_types::{Episode, Quote, Record};

/// Select the rows with at least one field containing `query`,
/// case-insensitively.
///
/// An empty `query` selects every row. Fields are compared in their
/// string rendering (via [`Record::search_fields`]), so numeric queries
/// match ids, seasons, and air-date years too.
pub fn filter_records<'a, T, I>(rows: I, query: &str) -> Vec<&'a T>
where
    T: Record,
    I: IntoIterator<Item = &'a T>,
{
    if query.is_empty() {
        return rows.into_iter().collect();
    }

    let needle = query.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            row.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Find the first row with the given id.
pub fn find_by_id<T: Record>(rows: &[T], id: u32) -> Option<&T> {
    rows.iter().find(|row| row.id() == id)
}

/// Select the episodes belonging exactly to `season`.
pub fn episodes_in_season<'a, I>(rows: I, season: u32) -> Vec<&'a Episode>
where
    I: IntoIterator<Item = &'a Episode>,
{
    rows.into_iter().filter(|episode| episode.season == season).collect()
}

/// Select the quotes whose credited speaker contains `name`,
/// case-insensitively.
///
/// This one filter serves both the `character` query parameter and the
/// quotes embedded in a character detail: transcripts credit speakers
/// with honorifics, so the match is substring, never equality.
pub fn quotes_by_character<'a, I>(rows: I, name: &str) -> Vec<&'a Quote>
where
    I: IntoIterator<Item = &'a Quote>,
{
    let needle = name.to_lowercase();
    rows.into_iter()
        .filter(|quote| quote.character.to_lowercase().contains(&needle))
        .collect()
}
