//! Elemental composition.

use serde::{Deserialize, Serialize};

use crate::{
    field::FieldOperation,
    vocabulary::{Logic, Units},
    wire,
};

/// Query against one element of a system's composition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompositionQuery {
    /// How this node combines with its siblings.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    logic: Option<Logic>,
    /// Element symbol or name.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    element: Vec<FieldOperation>,
    /// Amount of the element, expressed in `units`.
    #[serde(with = "wire::list", skip_serializing_if = "Vec::is_empty")]
    amount: Vec<FieldOperation>,
    /// Basis of `amount` bounds.
    #[serde(
        deserialize_with = "wire::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    units: Option<Units>,
}

impl CompositionQuery {
    /// Creates an empty composition query.
    pub fn new() -> Self {
        Self::default()
    }

    logic_accessors!(logic);

    list_accessors! {
        element @ element: FieldOperation => set_element, add_element, push_element, has_element;
        amount @ amount: FieldOperation => set_amount, add_amount, push_amount, has_amount;
    }

    /// The basis of amount bounds, if any.
    pub fn units(&self) -> Option<Units> {
        self.units
    }

    /// Sets the basis of amount bounds.
    #[must_use]
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::filter::Filter;

    #[test]
    fn element_with_amount_and_units() {
        let query = CompositionQuery::new()
            .add_element(Filter::exact("Fe"))
            .add_amount(Filter::min("50"))
            .with_units(Units::AtomicPercent);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "element": [{"filter": [{"equal": "Fe", "exact": true}]}],
                "amount": [{"filter": [{"min": "50"}]}],
                "units": "atomicPercent"
            })
        );
    }

    #[test]
    fn unknown_units_read_as_unset() {
        let query: CompositionQuery =
            serde_json::from_value(json!({"units": "furlongs"})).unwrap();
        assert_eq!(query.units(), None);
    }
}
