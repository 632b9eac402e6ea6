use crate::placeholders::{join_numbered, renumber_numbered, write_numbered};
use crate::reserved::{POSTGRES_KEYWORDS, is_keyword};

use super::{DialectCaps, IdRetrieval, IdentityDefault, PlaceholderStyle};

fn is_reserved(word: &str) -> bool {
    is_keyword(&POSTGRES_KEYWORDS, word)
}

pub(super) static CAPS: DialectCaps = DialectCaps {
    name: "PostgreSQL",
    placeholder_style: PlaceholderStyle::Numbered,
    identifier_quote: '"',
    // standard_conforming_strings is on by default since 9.1
    supports_backslash_escape: false,
    identity_default: IdentityDefault::Keyword("DEFAULT"),
    insert_suffix: " RETURNING id",
    id_retrieval: IdRetrieval::ReturningRow,
    is_reserved,
    write_placeholder: write_numbered,
    renumber_where_clause: renumber_numbered,
    join_for_in: join_numbered,
};
