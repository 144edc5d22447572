//! CLI command implementations

pub mod completions;
pub mod config;
pub mod create;
pub mod groups;
pub mod login;

pub use completions::execute as completions;
pub use config::execute as config;
pub use create::execute as create;
pub use groups::execute as groups;
pub use login::execute as login;

use crate::error::{AnvilError, AnvilResult};
use crate::session::{Credential, Session};
use crate::ui::{self, UiContext};

/// Resolve a credential for a remote command
///
/// Uses the session's credential when present; otherwise prompts once in
/// interactive mode and stores the pair for the rest of the invocation.
pub(crate) async fn acquire_credential(
    ctx: &UiContext,
    session: &mut Session,
) -> AnvilResult<Credential> {
    if let Ok(credential) = session.credential() {
        return Ok(credential.clone());
    }

    if !ctx.is_interactive() {
        return Err(AnvilError::NotAuthenticated);
    }

    let identity = ui::input(ctx, "Forge identity", None, true).await?;
    let secret = ui::password(ctx, "Forge secret").await?;
    let credential = Credential::new(identity, secret);
    session.sign_in(credential.clone());
    Ok(credential)
}
