//! Splitting of text around a raw `<table>` block

use super::{TABLE_CLOSE, TABLE_OPEN};

/// Result of splitting text on the table marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TableSplit<'a> {
    /// Exactly one table marker
    Single {
        before: &'a str,
        /// From `<table` through the first `</table>`, verbatim
        table: &'a str,
        after: &'a str,
    },
    /// Zero or several markers, no split performed
    Ambiguous { markers: usize },
}

/// Split `text` into the parts before, inside and after its table block
///
/// A table without a closing tag runs to the end of the text.
pub(crate) fn split_table(text: &str) -> TableSplit<'_> {
    let markers = text.matches(TABLE_OPEN).count();
    if markers != 1 {
        return TableSplit::Ambiguous { markers };
    }
    let Some(start) = text.find(TABLE_OPEN) else {
        return TableSplit::Ambiguous { markers: 0 };
    };

    let (before, rest) = text.split_at(start);
    let end = rest
        .find(TABLE_CLOSE)
        .map_or(rest.len(), |pos| pos + TABLE_CLOSE.len());
    let (table, after) = rest.split_at(end);

    TableSplit::Single {
        before,
        table,
        after,
    }
}
