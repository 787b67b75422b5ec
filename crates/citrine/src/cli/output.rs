//! Plain-text rendering of search results.

use serde_json::Value;

use citrine_result::{AnalysisResult, PifSearchHit, PifSearchResult};

/// Renders a PIF result as one line per hit, followed by analyses and a summary.
pub fn render_pif_result(result: &PifSearchResult) -> String {
    let mut out = String::new();
    for hit in result {
        out.push_str(&render_hit(hit));
        out.push('\n');
    }

    for (name, analysis) in result.analysis() {
        out.push_str(&format!("{name}: {}\n", render_analysis(analysis)));
    }

    let total = result
        .total_num_hits()
        .map_or_else(|| "?".to_string(), |total| total.to_string());
    out.push_str(&format!("{} of {total} hits", result.len()));
    if let Some(took) = result.took() {
        out.push_str(&format!(" ({took} ms)"));
    }
    out.push('\n');
    out
}

/// One hit: id, score, then extracted values in alias order.
fn render_hit(hit: &PifSearchHit) -> String {
    let mut line = hit.id.clone();
    if let Some(score) = hit.score {
        line.push_str(&format!("  score={score:.3}"));
    }
    for (alias, value) in &hit.extracted {
        line.push_str(&format!("  {alias}={}", render_value(value)));
    }
    line
}

/// Strings without quotes, everything else as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A one-line summary of an analysis result.
fn render_analysis(analysis: &AnalysisResult) -> String {
    match analysis {
        AnalysisResult::Statistics(stats) => {
            let fields = [
                ("count", stats.count.map(|c| c as f64)),
                ("min", stats.min),
                ("max", stats.max),
                ("avg", stats.avg),
            ];
            fields
                .iter()
                .filter_map(|(label, value)| value.map(|v| format!("{label}={v}")))
                .collect::<Vec<_>>()
                .join(" ")
        }
        AnalysisResult::Histogram(histogram) => histogram
            .buckets
            .iter()
            .map(|b| format!("{}:{}", b.key.map_or_else(String::new, |k| k.to_string()), b.count))
            .collect::<Vec<_>>()
            .join(" "),
        AnalysisResult::Ranges(ranges) => ranges
            .buckets
            .iter()
            .map(|b| format!("{}:{}", b.key.as_deref().unwrap_or("-"), b.count))
            .collect::<Vec<_>>()
            .join(" "),
        AnalysisResult::Categorical(values) => values
            .buckets
            .iter()
            .map(|b| format!("{}:{}", b.value, b.count))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_hits_and_summary() {
        let result: PifSearchResult = serde_json::from_value(json!({
            "took": 12,
            "totalNumHits": 40,
            "hits": [{"id": "1/2/3", "score": 0.5, "extracted": {"formula": "PbTe", "gap": 0.3}}],
            "analysis": {"statistics:gap": {"type": "statistics", "count": 40, "min": 0.1}}
        }))
        .unwrap();

        assert_eq!(
            render_pif_result(&result),
            "1/2/3  score=0.500  formula=PbTe  gap=0.3\n\
             statistics:gap: count=40 min=0.1\n\
             1 of 40 hits (12 ms)\n"
        );
    }

    #[test]
    fn unknown_total_is_marked() {
        let output = render_pif_result(&PifSearchResult::default());
        assert_eq!(output, "0 of ? hits\n");
    }
}
