//! Person names and bibliographic references.

use serde::{Deserialize, Serialize};

use crate::{field::FieldOperation, vocabulary::Logic, wire};

/// Query against a person's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Given name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    given: Vec<FieldOperation>,
    /// Family name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    family: Vec<FieldOperation>,
    /// Title, e.g. "Dr.".
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    title: Vec<FieldOperation>,
    /// Suffix, e.g. "Jr.".
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    suffix: Vec<FieldOperation>,
}

impl NameQuery {
    /// Creates an empty name query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        given @ given: FieldOperation => set_given, add_given, push_given, has_given;
        family @ family: FieldOperation => set_family, add_family, push_family, has_family;
        title @ title: FieldOperation => set_title, add_title, push_title, has_title;
        suffix @ suffix: FieldOperation => set_suffix, add_suffix, push_suffix, has_suffix;
    }
}

/// Query against a bibliographic reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Digital object identifier.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    doi: Vec<FieldOperation>,
    /// Book number.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    isbn: Vec<FieldOperation>,
    /// Serial number.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    issn: Vec<FieldOperation>,
    /// Link to the reference.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    url: Vec<FieldOperation>,
    /// Title of the work.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    title: Vec<FieldOperation>,
    /// Publisher name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    publisher: Vec<FieldOperation>,
    /// Journal name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    journal: Vec<FieldOperation>,
    /// Journal volume.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    volume: Vec<FieldOperation>,
    /// Journal issue.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    issue: Vec<FieldOperation>,
    /// Publication year.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    year: Vec<FieldOperation>,
    /// Page range.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    pages: Vec<FieldOperation>,
    /// Authors of the reference.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    authors: Vec<NameQuery>,
    /// Editors of the reference.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    editors: Vec<NameQuery>,
}

impl ReferenceQuery {
    /// Creates an empty reference query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        doi @ doi: FieldOperation => set_doi, add_doi, push_doi, has_doi;
        isbn @ isbn: FieldOperation => set_isbn, add_isbn, push_isbn, has_isbn;
        issn @ issn: FieldOperation => set_issn, add_issn, push_issn, has_issn;
        url @ url: FieldOperation => set_url, add_url, push_url, has_url;
        title @ title: FieldOperation => set_title, add_title, push_title, has_title;
        publisher @ publisher: FieldOperation => set_publisher, add_publisher, push_publisher, has_publisher;
        journal @ journal: FieldOperation => set_journal, add_journal, push_journal, has_journal;
        volume @ volume: FieldOperation => set_volume, add_volume, push_volume, has_volume;
        issue @ issue: FieldOperation => set_issue, add_issue, push_issue, has_issue;
        year @ year: FieldOperation => set_year, add_year, push_year, has_year;
        pages @ pages: FieldOperation => set_pages, add_pages, push_pages, has_pages;
        authors @ authors: NameQuery => set_authors, add_authors, push_authors, has_authors;
        editors @ editors: NameQuery => set_editors, add_editors, push_editors, has_editors;
    }
}
