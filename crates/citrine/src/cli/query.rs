//! Translating command-line flags into a [`PifQuery`].

use citrine_query::{
    DataQuery, DatasetQuery, FieldOperation, Filter, HistogramAnalysis, PifQuery, PropertiesQuery,
    ReturningQuery, StatisticsAnalysis, SystemQuery,
};

use super::args::QueryArgs;

/// Alias under which the chemical formula is extracted.
const FORMULA_ALIAS: &str = "formula";

/// A `--property` flag: a property name with an optional value constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Property name, matched exactly.
    pub name: String,
    /// Constraint on the property value.
    pub value: Option<Filter>,
}

impl PropertyFilter {
    /// Parses `NAME`, `NAME=VALUE` or `NAME=MIN..MAX`.
    pub fn parse(input: &str) -> Result<Self, String> {
        let (name, value) = match input.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (input.trim(), None),
        };
        if name.is_empty() {
            return Err(format!("missing property name in '{input}'"));
        }

        let value = match value {
            None => None,
            Some("") => return Err(format!("missing value after '=' in '{input}'")),
            Some(value) => Some(parse_value(value).ok_or_else(|| {
                format!("range '{value}' needs at least one bound, e.g. 1.0..2.5")
            })?),
        };

        Ok(Self {
            name: name.to_string(),
            value,
        })
    }

    /// The properties query selecting this property and extracting its value.
    pub fn to_query(&self) -> PropertiesQuery {
        let mut value = FieldOperation::extract_as(&self.name);
        if let Some(ref filter) = self.value {
            value = value.add_filter(filter.clone());
        }
        PropertiesQuery::new()
            .add_name(FieldOperation::filtered(Filter::exact(&self.name)))
            .add_value(value)
    }
}

/// Parses `VALUE`, `MIN..MAX`, `MIN..` or `..MAX`.
fn parse_value(value: &str) -> Option<Filter> {
    let Some((min, max)) = value.split_once("..") else {
        return Some(Filter::equal(value));
    };
    match (min.trim(), max.trim()) {
        ("", "") => None,
        (min, "") => Some(Filter::min(min)),
        ("", max) => Some(Filter::max(max)),
        (min, max) => Some(Filter::range(min, max)),
    }
}

impl QueryArgs {
    /// Builds the query these flags describe.
    pub fn to_query(&self) -> PifQuery {
        let mut system = SystemQuery::new();
        if let Some(ref formula) = self.formula {
            system.push_chemical_formula(FieldOperation::new(
                FORMULA_ALIAS,
                Filter::equal(formula),
            ));
        }
        for property in &self.properties {
            system.push_properties(property.to_query());
        }

        let mut scope = DataQuery::new();
        if let Some(ref text) = self.text {
            scope = scope.with_simple(text);
        }
        if system != SystemQuery::default() {
            scope.push_system(system);
        }
        for id in &self.datasets {
            scope.push_dataset(DatasetQuery::new().add_id(Filter::equal(id)));
        }

        let mut query = PifQuery::new();
        if scope != DataQuery::default() {
            query = query.add_query(scope);
        }
        if let Some(from) = self.from {
            query = query.with_from(from);
        }
        if let Some(size) = self.size {
            query = query.with_size(size);
        }
        if self.return_system {
            query = query.with_return_system(true);
        }
        for path in &self.histograms {
            query = query.add_analysis(
                format!("histogram:{path}"),
                HistogramAnalysis::new(path, self.interval),
            );
        }
        for path in &self.statistics {
            query = query.add_analysis(format!("statistics:{path}"), StatisticsAnalysis::new(path));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_bare_name() {
        let filter = PropertyFilter::parse("Band gap").unwrap();
        assert_eq!(filter.name, "Band gap");
        assert_eq!(filter.value, None);
    }

    #[test]
    fn parses_ranges() {
        let cases = [
            ("gap=1.0..2.5", Filter::range("1.0", "2.5")),
            ("gap=1.0..", Filter::min("1.0")),
            ("gap=..2.5", Filter::max("2.5")),
            ("gap = 1.4", Filter::equal("1.4")),
        ];
        for (input, expected) in cases {
            let filter = PropertyFilter::parse(input).unwrap();
            assert_eq!(filter.name, "gap", "{input}");
            assert_eq!(filter.value, Some(expected), "{input}");
        }
    }

    #[test]
    fn rejects_malformed_properties() {
        assert!(PropertyFilter::parse("=1..2").is_err());
        assert!(PropertyFilter::parse("gap=").is_err());
        assert!(
            PropertyFilter::parse("gap=..")
                .unwrap_err()
                .contains("at least one bound")
        );
    }

    #[test]
    fn empty_flags_give_empty_query() {
        assert_eq!(QueryArgs::default().to_query(), PifQuery::new());
    }

    #[test]
    fn flags_build_one_scope_entry() {
        let args = QueryArgs {
            formula: Some("PbTe".to_string()),
            datasets: vec!["150".to_string()],
            properties: vec![PropertyFilter::parse("Seebeck coefficient=100..").unwrap()],
            size: Some(5),
            ..QueryArgs::default()
        };
        let json = serde_json::to_value(args.to_query()).unwrap();

        assert_eq!(json["size"], 5);
        let scopes = json["query"].as_array().unwrap();
        assert_eq!(scopes.len(), 1);
        let system = &scopes[0]["system"][0];
        assert_eq!(
            system["chemicalFormula"],
            json!([{"extractAs": "formula", "filter": [{"equal": "PbTe"}]}])
        );
        assert_eq!(
            system["properties"][0]["value"],
            json!([{"extractAs": "Seebeck coefficient", "filter": [{"min": "100"}]}])
        );
        assert_eq!(scopes[0]["dataset"][0]["id"][0]["filter"][0]["equal"], "150");
    }

    #[test]
    fn analyses_are_named_by_kind_and_path() {
        let args = QueryArgs {
            histograms: vec!["properties.value".to_string()],
            interval: 0.5,
            statistics: vec!["properties.value".to_string(), "composition.amount".to_string()],
            ..QueryArgs::default()
        };
        let json = serde_json::to_value(args.to_query()).unwrap();
        let analysis = json["analysis"].as_object().unwrap();
        assert_eq!(analysis.len(), 3);
        assert_eq!(analysis["histogram:properties.value"]["interval"], 0.5);
        assert_eq!(analysis["statistics:properties.value"]["type"], "statistics");
        assert_eq!(analysis["statistics:composition.amount"]["path"], "composition.amount");
    }
}
