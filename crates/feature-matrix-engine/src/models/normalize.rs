use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::tables::{TableInstance, TableKind};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Unknown table structure for category: {name}")]
    UnknownTableStructure { name: String },

    #[error("Invalid {kind} for category {name}: {source}")]
    InvalidRecord {
        name: String,
        kind: TableKind,
        source: serde_json::Error,
    },
}

/// Classifies a raw record by which recognized key it carries.
///
/// Keys are checked in order `features`, `resources`, `meta`; the first one
/// present wins. Records that are not JSON objects match nothing.
pub fn classify(record: &Value) -> Option<TableKind> {
    let obj = record.as_object()?;
    if obj.contains_key("features") {
        Some(TableKind::Feature)
    } else if obj.contains_key("resources") {
        Some(TableKind::Resource)
    } else if obj.contains_key("meta") {
        Some(TableKind::Meta)
    } else {
        None
    }
}

/// Normalizes raw records into typed tables, keeping their order.
///
/// The first record that matches no known shape, or whose fields do not fit
/// its shape, fails the whole call.
pub fn process_feature_data<I>(records: I) -> Result<Vec<TableInstance>, NormalizeError>
where
    I: IntoIterator<Item = Value>,
{
    records.into_iter().map(normalize_record).collect()
}

fn normalize_record(record: Value) -> Result<TableInstance, NormalizeError> {
    let name = record_name(&record);
    let Some(kind) = classify(&record) else {
        return Err(NormalizeError::UnknownTableStructure { name });
    };
    log::debug!("category {name:?} is a {kind}");

    Ok(match kind {
        TableKind::Feature => TableInstance::FeatureTable(decode(record, name, kind)?),
        TableKind::Resource => TableInstance::ResourceTable(decode(record, name, kind)?),
        TableKind::Meta => TableInstance::MetaInformation(decode(record, name, kind)?),
    })
}

fn decode<T: DeserializeOwned>(
    record: Value,
    name: String,
    kind: TableKind,
) -> Result<T, NormalizeError> {
    serde_json::from_value(record)
        .map_err(|source| NormalizeError::InvalidRecord { name, kind, source })
}

fn record_name(record: &Value) -> String {
    match record.get("name") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "<unnamed>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Feature, FeatureTable, Meta, MetaInformation, Resource, ResourceTable, SupportStatus,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"name": "a", "features": []}), Some(TableKind::Feature))]
    #[case(json!({"name": "a", "resources": []}), Some(TableKind::Resource))]
    #[case(json!({"name": "a", "meta": {}}), Some(TableKind::Meta))]
    #[case(json!({"name": "a", "meta": {}, "features": []}), Some(TableKind::Feature))]
    #[case(json!({"name": "a", "resources": [], "meta": {}}), Some(TableKind::Resource))]
    #[case(json!({"name": "a"}), None)]
    #[case(json!(["features"]), None)]
    #[case(json!("features"), None)]
    fn classify_by_key_presence(#[case] record: Value, #[case] expected: Option<TableKind>) {
        assert_eq!(classify(&record), expected);
    }

    #[test]
    fn normalizes_all_three_shapes_in_order() {
        let raw = vec![
            json!({"name": "Updated", "meta": {"last_update": "2025-06-01"}}),
            json!({
                "name": "Flight",
                "features": [
                    {"name": "Orbits", "core": "ok", "mod": "wip", "comment": "see [docs](https://x.dev)"}
                ]
            }),
            json!({
                "name": "Links",
                "resources": [
                    {"name": "Wiki", "url": "https://wiki.example", "url_name": "wiki"}
                ]
            }),
        ];

        let tables = process_feature_data(raw).unwrap();

        assert_eq!(
            tables,
            vec![
                TableInstance::MetaInformation(MetaInformation {
                    name: "Updated".into(),
                    meta: Meta {
                        last_update: "2025-06-01".into()
                    },
                }),
                TableInstance::FeatureTable(FeatureTable {
                    name: "Flight".into(),
                    features: vec![Feature {
                        name: "Orbits".into(),
                        core: SupportStatus::Ok,
                        r#mod: SupportStatus::Wip,
                        comment: "see [docs](https://x.dev)".into(),
                    }],
                }),
                TableInstance::ResourceTable(ResourceTable {
                    name: "Links".into(),
                    resources: vec![Resource {
                        name: "Wiki".into(),
                        url: "https://wiki.example".into(),
                        url_name: Some("wiki".into()),
                    }],
                }),
            ]
        );
    }

    #[test]
    fn unknown_record_fails_whole_call() {
        let raw = vec![
            json!({"name": "Good", "features": []}),
            json!({"name": "Mystery", "rows": []}),
        ];

        let err = process_feature_data(raw).unwrap_err();

        assert!(matches!(err, NormalizeError::UnknownTableStructure { ref name } if name == "Mystery"));
        assert_eq!(
            err.to_string(),
            "Unknown table structure for category: Mystery"
        );
    }

    #[test]
    fn unknown_record_without_name() {
        let err = process_feature_data(vec![json!(42)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown table structure for category: <unnamed>"
        );
    }

    #[test]
    fn bad_status_names_the_record() {
        let raw = vec![json!({
            "name": "Flight",
            "features": [{"name": "Orbits", "core": "done"}]
        })];

        let err = process_feature_data(raw).unwrap_err();

        match err {
            NormalizeError::InvalidRecord { name, kind, .. } => {
                assert_eq!(name, "Flight");
                assert_eq!(kind, TableKind::Feature);
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(process_feature_data(Vec::<Value>::new()).unwrap().is_empty());
    }
}
