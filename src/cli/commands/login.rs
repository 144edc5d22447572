//! Login command - validate the credential pair

use crate::api::{DirectoryApi, ForgeClient};
use crate::config::Config;
use crate::error::{AnvilError, AnvilResult};
use crate::session::Session;
use crate::ui::{TaskSpinner, UiContext};

/// Execute the login command
pub async fn execute(session: &mut Session, config: &Config) -> AnvilResult<()> {
    let ctx = UiContext::detect();
    let credential = super::acquire_credential(&ctx, session).await?;
    let client = ForgeClient::new(&config.server.base_url);

    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Validating credential pair...");

    match client.validate(&credential).await {
        Ok(true) => {
            spinner.stop(&format!("Signed in as {}", credential.identity()));
            Ok(())
        }
        Ok(false) => {
            spinner.stop_error("Credential pair rejected");
            session.sign_out();
            Err(AnvilError::CredentialRejected)
        }
        Err(e) => {
            spinner.stop_error("Could not reach the forge");
            Err(e)
        }
    }
}
