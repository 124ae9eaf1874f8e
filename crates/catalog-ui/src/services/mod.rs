//! Browser-side collaborators: REST client.
pub(crate) mod api;
