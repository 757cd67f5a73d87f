use serde::{Deserialize, Serialize};

use crate::{
    Entity,
    validate::{Check, Field, STRING, STRING_LIST},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfoRequest {}

impl Entity for ServiceInfoRequest {
    const NAME: &'static str = "ServiceInfoRequest";
    const FIELDS: &'static [Field] = &[];
}

/// Description of the service and the storage it can reach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: Option<String>,
    pub doc: Option<String>,
    pub storage: Option<Vec<String>>,
}

impl Entity for ServiceInfo {
    const NAME: &'static str = "ServiceInfo";
    const FIELDS: &'static [Field] = &[
        Field::new("name", Check::Optional(&STRING)),
        Field::new("doc", Check::Optional(&STRING)),
        Field::new("storage", Check::Optional(&STRING_LIST)),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextOptions;

    #[test]
    fn empty_request_parses() {
        assert_eq!(ServiceInfoRequest::from_text("{}").unwrap(), ServiceInfoRequest {});
    }

    #[test]
    fn info_pretty_text() {
        let info = ServiceInfo {
            name: Some("tes".into()),
            storage: Some(vec!["s3://bucket".into()]),
            ..Default::default()
        };
        let text = info.as_text(&TextOptions::default().with_indent(2)).unwrap();
        assert_eq!(
            text,
            "{\n  \"name\": \"tes\",\n  \"storage\": [\n    \"s3://bucket\"\n  ]\n}"
        );
    }
}
