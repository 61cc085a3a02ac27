//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::definitions::ApiInfoResource;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::UpstreamConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Upstream settings, used to render dynamic resources.
    upstream: UpstreamConfig,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy)]
pub enum DynamicResourceType {
    /// Upstream API and tool overview.
    ApiInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given upstream configuration.
    pub fn new(upstream: UpstreamConfig) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources();
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self {
            upstream,
            resources,
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, *dynamic_type)
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> ResourceContents {
        match dynamic_type {
            DynamicResourceType::ApiInfo => {
                ResourceContents::text(ApiInfoResource::render(&self.upstream), uri)
            }
        }
    }
}
