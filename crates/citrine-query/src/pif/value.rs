//! Named values, properties and processing steps.

use serde::{Deserialize, Serialize};

use super::reference::ReferenceQuery;
use crate::{field::FieldOperation, vocabulary::Logic, wire};

/// Query against a named value with units.
///
/// Used directly for property conditions and process step details, and composed
/// into [`PropertiesQuery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Name of the value, e.g. "Band gap".
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    name: Vec<FieldOperation>,
    /// The value itself.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    value: Vec<FieldOperation>,
    /// Units of the value.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    units: Vec<FieldOperation>,
    /// Declared data type (experimental, computational, ...).
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    data_type: Vec<FieldOperation>,
}

impl ValueQuery {
    /// Creates an empty value query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        name @ name: FieldOperation => set_name, add_name, push_name, has_name;
        value @ value: FieldOperation => set_value, add_value, push_value, has_value;
        units @ units: FieldOperation => set_units, add_units, push_units, has_units;
        data_type @ data_type: FieldOperation => set_data_type, add_data_type, push_data_type, has_data_type;
    }
}

/// Query against a measured or computed property.
///
/// The name/value/units part is a [`ValueQuery`] flattened into the same JSON
/// object; conditions, method and references are specific to properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertiesQuery {
    /// Name, value, units, data type and logic.
    #[serde(flatten)]
    value: ValueQuery,
    /// Conditions under which the property was measured.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    conditions: Vec<ValueQuery>,
    /// Measurement or computation method.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    method: Vec<FieldOperation>,
    /// References reporting the property.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    references: Vec<ReferenceQuery>,
}

impl PropertiesQuery {
    /// Creates an empty property query.
    pub fn new() -> Self {
        Self::default()
    }

    /// The composed name/value part.
    pub fn value_query(&self) -> &ValueQuery {
        &self.value
    }

    logic_accessors!(value.logic);

    list_accessors! {
        name @ value.name: FieldOperation => set_name, add_name, push_name, has_name;
        value @ value.value: FieldOperation => set_value, add_value, push_value, has_value;
        units @ value.units: FieldOperation => set_units, add_units, push_units, has_units;
        data_type @ value.data_type: FieldOperation => set_data_type, add_data_type, push_data_type, has_data_type;
        conditions @ conditions: ValueQuery => set_conditions, add_conditions, push_conditions, has_conditions;
        method @ method: FieldOperation => set_method, add_method, push_method, has_method;
        references @ references: ReferenceQuery => set_references, add_references, push_references, has_references;
    }
}

impl From<ValueQuery> for PropertiesQuery {
    fn from(value: ValueQuery) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

/// Query against a preparation or processing step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessStepQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Name of the step, e.g. "Annealing".
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    name: Vec<FieldOperation>,
    /// Parameters of the step.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    details: Vec<ValueQuery>,
}

impl ProcessStepQuery {
    /// Creates an empty process step query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        name @ name: FieldOperation => set_name, add_name, push_name, has_name;
        details @ details: ValueQuery => set_details, add_details, push_details, has_details;
    }
}
