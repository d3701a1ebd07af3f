use crate::connectors::Connector;
use crate::error::{ActivitiesError, ActivitiesResult, ErrorKind};

/// Connector stand-in for the Stripes source.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripesConnector;

impl Connector for StripesConnector {
    fn id(&self) -> &'static str {
        "stripes"
    }

    fn label(&self) -> &'static str {
        "Stripes"
    }

    async fn auth_callback(&self, _oauth_code: &str, _pipe_id: &str) -> ActivitiesResult<()> {
        crate::bail!(ErrorKind::Unauthorized, "401 Unauthorized");
    }

    async fn connect_data_source(&self, _pipe_id: &str, _login_url: &str) -> ActivitiesResult<()> {
        crate::bail!(ErrorKind::Unauthorized, "401 Unauthorized");
    }
}
