//! OAuth connector stand-ins.
//!
//! Placeholders for backend data sources whose OAuth flows are not wired up
//! yet; every entry point fails with an unauthorized error.

use std::future::Future;

use crate::error::ActivitiesResult;

mod salesconnect;
mod stripes;

pub use salesconnect::SalesconnectConnector;
pub use stripes::StripesConnector;

/// A pluggable backend data-source connector.
pub trait Connector {
    /// Stable identifier of the connector.
    fn id(&self) -> &'static str;

    /// Human-readable label shown by the pipeline tool.
    fn label(&self) -> &'static str;

    /// Callback for the OAuth authentication protocol.
    fn auth_callback(
        &self,
        oauth_code: &str,
        pipe_id: &str,
    ) -> impl Future<Output = ActivitiesResult<()>> + Send;

    /// Connects to the backend data source behind the given login url.
    fn connect_data_source(
        &self,
        pipe_id: &str,
        login_url: &str,
    ) -> impl Future<Output = ActivitiesResult<()>> + Send;
}
