//! The physical system: the root record of a PIF.

use serde::{Deserialize, Serialize};

use super::{
    composition::CompositionQuery,
    reference::{NameQuery, ReferenceQuery},
    value::{ProcessStepQuery, PropertiesQuery},
};
use crate::{field::FieldOperation, vocabulary::Logic, wire};

/// Query against a physical system and, recursively, its sub-systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Record identifier.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    uid: Vec<FieldOperation>,
    /// Common names of the system.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    names: Vec<FieldOperation>,
    /// Chemical formula, e.g. "PbTe".
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    chemical_formula: Vec<FieldOperation>,
    /// Elemental composition entries.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    composition: Vec<CompositionQuery>,
    /// Measured or computed properties.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    properties: Vec<PropertiesQuery>,
    /// Preparation steps.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    preparation: Vec<ProcessStepQuery>,
    /// Publications describing the system.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    references: Vec<ReferenceQuery>,
    /// People who contributed the record.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    contacts: Vec<NameQuery>,
    /// Free-form tags.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    tags: Vec<FieldOperation>,
    /// Nested systems.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    sub_systems: Vec<Self>,
}

impl SystemQuery {
    /// Creates an empty system query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        uid @ uid: FieldOperation => set_uid, add_uid, push_uid, has_uid;
        names @ names: FieldOperation => set_names, add_names, push_names, has_names;
        chemical_formula @ chemical_formula: FieldOperation => set_chemical_formula, add_chemical_formula, push_chemical_formula, has_chemical_formula;
        composition @ composition: CompositionQuery => set_composition, add_composition, push_composition, has_composition;
        properties @ properties: PropertiesQuery => set_properties, add_properties, push_properties, has_properties;
        preparation @ preparation: ProcessStepQuery => set_preparation, add_preparation, push_preparation, has_preparation;
        references @ references: ReferenceQuery => set_references, add_references, push_references, has_references;
        contacts @ contacts: NameQuery => set_contacts, add_contacts, push_contacts, has_contacts;
        tags @ tags: FieldOperation => set_tags, add_tags, push_tags, has_tags;
        sub_systems @ sub_systems: Self => set_sub_systems, add_sub_systems, push_sub_systems, has_sub_systems;
    }
}
