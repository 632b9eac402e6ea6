use crate::placeholders::{join_positional, renumber_positional, write_positional};
use crate::reserved::{SQLITE_KEYWORDS, is_keyword};

use super::{DialectCaps, IdRetrieval, IdentityDefault, PlaceholderStyle};

fn is_reserved(word: &str) -> bool {
    is_keyword(&SQLITE_KEYWORDS, word)
}

pub(super) static CAPS: DialectCaps = DialectCaps {
    name: "SQLite",
    placeholder_style: PlaceholderStyle::Positional,
    identifier_quote: '"',
    supports_backslash_escape: false,
    // NULL into an INTEGER PRIMARY KEY allocates the next rowid.
    identity_default: IdentityDefault::Keyword("NULL"),
    insert_suffix: "",
    id_retrieval: IdRetrieval::LastInsertId,
    is_reserved,
    write_placeholder: write_positional,
    renumber_where_clause: renumber_positional,
    join_for_in: join_positional,
};
