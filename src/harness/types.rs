// Connector listing wire types
use serde::Serialize;

/// Optional filters for a connector listing. `None` and an empty list both
/// mean "do not filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorFilter {
    pub names: Option<Vec<String>>,
    pub identifiers: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
}

impl ConnectorFilter {
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_identifiers<I, S>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers = Some(identifiers.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }
}

/// Body of `POST /ng/api/connectors/listV2`.
///
/// Filter keys are left out entirely when unused; the API treats an explicit
/// `null` differently from an absent key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConnectorsBody {
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_identifiers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    pub filter_type: String,
}

impl ListConnectorsBody {
    pub fn new(filter: &ConnectorFilter, category: &str) -> Self {
        Self {
            categories: vec![category.to_string()],
            connector_names: non_empty(&filter.names),
            connector_identifiers: non_empty(&filter.identifiers),
            types: non_empty(&filter.types),
            filter_type: "Connector".to_string(),
        }
    }
}

fn non_empty(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    values.as_ref().filter(|v| !v.is_empty()).cloned()
}
