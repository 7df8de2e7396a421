//! Catalog aggregation - groups stored endpoint records by API name
//! for browsing.

use std::collections::HashMap;

use crate::registry::wire::StoredApi;

/// One browsable API: every stored record sharing a name, in the order
/// the registry returned them.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogGroup {
    pub name: String,
    /// Display base URI. When records disagree (a data anomaly) the one
    /// on the first record of the name is kept, nothing is reconciled.
    pub base_uri: String,
    pub records: Vec<StoredApi>,
}

impl CatalogGroup {
    /// Total endpoint count across the group's records.
    pub fn endpoint_count(&self) -> usize {
        self.records.iter().map(|r| r.end_uris.len()).sum()
    }
}

/// Bucket records by name in a single pass. Buckets appear in
/// first-sight order and keep their elements in input order, so
/// aggregating the same input twice yields identical output.
pub fn aggregate(records: &[StoredApi]) -> Vec<CatalogGroup> {
    let mut groups: Vec<CatalogGroup> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        match by_name.get(&record.name) {
            Some(&i) => groups[i].records.push(record.clone()),
            None => {
                by_name.insert(record.name.clone(), groups.len());
                groups.push(CatalogGroup {
                    name: record.name.clone(),
                    base_uri: record.base_uri.clone(),
                    records: vec![record.clone()],
                });
            }
        }
    }

    groups
}

/// The group for one API name, used by the per-API detail view.
pub fn group_named<'a>(groups: &'a [CatalogGroup], name: &str) -> Option<&'a CatalogGroup> {
    groups.iter().find(|g| g.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::wire::WirePoint;
    use std::collections::BTreeMap;

    fn record(name: &str, base_uri: &str, end_uri: &str) -> StoredApi {
        StoredApi {
            id: None,
            name: name.into(),
            base_uri: base_uri.into(),
            end_uris: vec![WirePoint {
                end_uri: end_uri.into(),
                method: "GET".into(),
                headers: BTreeMap::new(),
                body_type: None,
                content_type: "application/json".into(),
                body_content: None,
            }],
        }
    }

    #[test]
    fn test_same_name_lands_in_one_bucket_in_input_order() {
        let records = vec![
            record("Weather", "https://api.example.com", "/v1/now"),
            record("Weather", "https://api.example.com", "/v1/soon"),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Weather");
        assert_eq!(groups[0].records[0].end_uris[0].end_uri, "/v1/now");
        assert_eq!(groups[0].records[1].end_uris[0].end_uri, "/v1/soon");
        assert_eq!(groups[0].endpoint_count(), 2);
    }

    #[test]
    fn test_buckets_keep_first_sight_order() {
        let records = vec![
            record("Zoo", "https://zoo.example.com", "/animals"),
            record("Weather", "https://api.example.com", "/v1/now"),
            record("Zoo", "https://zoo.example.com", "/keepers"),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups[0].name, "Zoo");
        assert_eq!(groups[1].name, "Weather");
        assert_eq!(groups[0].records.len(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![
            record("Weather", "https://api.example.com", "/v1/now"),
            record("Zoo", "https://zoo.example.com", "/animals"),
            record("Weather", "https://api.example.com", "/v1/soon"),
        ];
        let first = aggregate(&records);
        let second = aggregate(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_inconsistent_base_uri_keeps_first() {
        let records = vec![
            record("Weather", "https://api.example.com", "/v1/now"),
            record("Weather", "https://other.example.com", "/v1/soon"),
        ];
        let groups = aggregate(&records);
        assert_eq!(groups[0].base_uri, "https://api.example.com");
        // both records themselves are kept untouched
        assert_eq!(groups[0].records[1].base_uri, "https://other.example.com");
    }

    #[test]
    fn test_group_named_finds_bucket() {
        let groups = aggregate(&[record("Weather", "https://api.example.com", "/v1/now")]);
        assert!(group_named(&groups, "Weather").is_some());
        assert!(group_named(&groups, "Zoo").is_none());
    }
}
