use crate::placeholders::{join_positional, renumber_positional, write_positional};
use crate::reserved::{MYSQL_KEYWORDS, is_keyword};

use super::{DialectCaps, IdRetrieval, IdentityDefault, PlaceholderStyle};

fn is_reserved(word: &str) -> bool {
    is_keyword(&MYSQL_KEYWORDS, word)
}

pub(super) static CAPS: DialectCaps = DialectCaps {
    name: "MySQL",
    placeholder_style: PlaceholderStyle::Positional,
    identifier_quote: '`',
    supports_backslash_escape: true,
    // AUTO_INCREMENT fills the column when it is absent from the column list.
    identity_default: IdentityDefault::Omitted,
    insert_suffix: "",
    id_retrieval: IdRetrieval::LastInsertId,
    is_reserved,
    write_placeholder: write_positional,
    renumber_where_clause: renumber_positional,
    join_for_in: join_positional,
};
