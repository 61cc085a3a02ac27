//! Resource definitions.
//!
//! A resource is a URI plus metadata and a content provider. New resources
//! implement [`ResourceDefinition`] in their own file and are added to
//! `get_all_resources()` in `registry.rs`.

pub mod api_info;

pub use api_info::ApiInfoResource;

use super::service::ResourceContent;

/// Static metadata and content source of one resource.
pub trait ResourceDefinition {
    /// URI clients pass to `resources/read`.
    const URI: &'static str;

    /// Display name.
    const NAME: &'static str;

    const DESCRIPTION: &'static str;

    const MIME_TYPE: &'static str;

    /// Where the text comes from when the resource is read.
    fn content() -> ResourceContent;
}
