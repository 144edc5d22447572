//! Interactive prompts with CI/non-interactive fallback

use super::context::UiContext;
use crate::error::{AnvilError, AnvilResult};

/// Prompt for confirmation, returns default if non-interactive or auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> AnvilResult<bool> {
    // Auto-yes mode bypasses prompts
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    // Non-interactive mode returns default
    if !ctx.is_interactive() {
        return Ok(default);
    }

    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message)
            .initial_value(default)
            .interact()
    })
    .await
    .map_err(|e| AnvilError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| AnvilError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for selection from a list of options
/// Returns the selected value or the first option if non-interactive
pub async fn select<T: Clone + Send + Eq + 'static>(
    ctx: &UiContext,
    message: &str,
    options: &[(T, &str, &str)], // (value, label, hint)
) -> AnvilResult<T> {
    if !ctx.is_interactive() || ctx.auto_yes() {
        return Ok(options[0].0.clone());
    }

    let message = message.to_string();
    let items: Vec<(T, String, String)> = options
        .iter()
        .map(|(v, l, h)| (v.clone(), l.to_string(), h.to_string()))
        .collect();

    let result = tokio::task::spawn_blocking(move || {
        let mut select = cliclack::select(&message);
        for (value, label, hint) in items {
            select = select.item(value, label, hint);
        }
        select.interact()
    })
    .await
    .map_err(|e| AnvilError::User(format!("Select task failed: {}", e)))?;

    result.map_err(|e| AnvilError::User(format!("Select failed: {}", e)))
}

/// Prompt for any number of choices from a list of options
/// Returns `initial` unchanged if non-interactive
pub async fn multi_select<T: Clone + Send + Eq + 'static>(
    ctx: &UiContext,
    message: &str,
    options: &[(T, &str, &str)],
    initial: &[T],
) -> AnvilResult<Vec<T>> {
    if !ctx.is_interactive() || ctx.auto_yes() {
        return Ok(initial.to_vec());
    }

    let message = message.to_string();
    let items: Vec<(T, String, String)> = options
        .iter()
        .map(|(v, l, h)| (v.clone(), l.to_string(), h.to_string()))
        .collect();
    let initial = initial.to_vec();

    let result = tokio::task::spawn_blocking(move || {
        let mut select = cliclack::multiselect(&message).required(false);
        for (value, label, hint) in items {
            select = select.item(value, label, hint);
        }
        select.initial_values(initial).interact()
    })
    .await
    .map_err(|e| AnvilError::User(format!("Select task failed: {}", e)))?;

    result.map_err(|e| AnvilError::User(format!("Select failed: {}", e)))
}

/// Prompt for a line of text
/// Returns `initial` if non-interactive; errors if required with no fallback
pub async fn input(
    ctx: &UiContext,
    message: &str,
    initial: Option<&str>,
    required: bool,
) -> AnvilResult<String> {
    if !ctx.is_interactive() {
        return match initial {
            Some(value) => Ok(value.to_string()),
            None if !required => Ok(String::new()),
            None => Err(AnvilError::User(format!(
                "'{}' requires an interactive terminal or a flag",
                message
            ))),
        };
    }

    let message = message.to_string();
    let initial = initial.map(str::to_string);
    let result = tokio::task::spawn_blocking(move || {
        let mut prompt = cliclack::input(&message);
        if let Some(initial) = initial {
            prompt = prompt.default_input(&initial);
        }
        if required {
            prompt = prompt.validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            });
        } else {
            prompt = prompt.required(false);
        }
        prompt.interact::<String>()
    })
    .await
    .map_err(|e| AnvilError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| AnvilError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for a masked secret
pub async fn password(ctx: &UiContext, message: &str) -> AnvilResult<String> {
    if !ctx.is_interactive() {
        return Err(AnvilError::User(format!(
            "'{}' requires an interactive terminal",
            message
        )));
    }

    let message = message.to_string();
    let result =
        tokio::task::spawn_blocking(move || cliclack::password(&message).mask('▪').interact())
            .await
            .map_err(|e| AnvilError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| AnvilError::User(format!("Prompt failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn confirm_auto_yes() {
        let ctx = UiContext::non_interactive().with_auto_yes(true);
        let result = confirm(&ctx, "Create project?", false).await.unwrap();
        assert!(result);
    }

    #[tokio::test]
    async fn confirm_non_interactive_default() {
        let ctx = UiContext::non_interactive();
        assert!(confirm(&ctx, "Create project?", true).await.unwrap());
        assert!(!confirm(&ctx, "Create project?", false).await.unwrap());
    }

    #[tokio::test]
    async fn select_non_interactive_first() {
        let ctx = UiContext::non_interactive();
        let options = vec![
            ("service".to_string(), "Service", "Deployable application"),
            ("library".to_string(), "Library", "Shared code"),
        ];
        let result = select(&ctx, "Project type", &options).await.unwrap();
        assert_eq!(result, "service");
    }

    #[tokio::test]
    async fn multi_select_non_interactive_keeps_initial() {
        let ctx = UiContext::non_interactive();
        let options = vec![("dev", "Dev", ""), ("staging", "Staging", "")];
        let result = multi_select(&ctx, "Targets", &options, &["staging"])
            .await
            .unwrap();
        assert_eq!(result, vec!["staging"]);
    }

    #[tokio::test]
    async fn input_non_interactive_uses_initial() {
        let ctx = UiContext::non_interactive();
        let value = input(&ctx, "Project name", Some("billing"), true)
            .await
            .unwrap();
        assert_eq!(value, "billing");
    }

    #[tokio::test]
    async fn required_input_without_fallback_errors() {
        let ctx = UiContext::non_interactive();
        assert!(input(&ctx, "Project name", None, true).await.is_err());
    }

    #[tokio::test]
    async fn password_requires_terminal() {
        let ctx = UiContext::non_interactive();
        assert!(password(&ctx, "Secret").await.is_err());
    }
}
