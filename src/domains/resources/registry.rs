//! Resource registry: the fixed list of resources this server serves.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{ApiInfoResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Build the listed resource and its content provider from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// All resources, in listing order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<ApiInfoResource>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_api_info() {
        let resources = get_all_resources();
        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, vec![ApiInfoResource::URI]);
    }

    #[test]
    fn test_resource_metadata() {
        let entry = build_resource::<ApiInfoResource>();
        assert_eq!(entry.resource.raw.mime_type.as_deref(), Some("text/plain"));
        assert!(entry.resource.raw.description.is_some());
    }
}
