use crate::connectors::Connector;
use crate::error::{ActivitiesError, ActivitiesResult, ErrorKind};

/// Connector stand-in for the Sugar CRM Salesconnect source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SalesconnectConnector;

impl Connector for SalesconnectConnector {
    fn id(&self) -> &'static str {
        "salesconnect"
    }

    fn label(&self) -> &'static str {
        "Sugar CRM Salesconnect"
    }

    async fn auth_callback(&self, _oauth_code: &str, _pipe_id: &str) -> ActivitiesResult<()> {
        crate::bail!(ErrorKind::Unauthorized, "401 Unauthorized");
    }

    async fn connect_data_source(&self, _pipe_id: &str, _login_url: &str) -> ActivitiesResult<()> {
        crate::bail!(ErrorKind::Unauthorized, "401 Unauthorized");
    }
}
