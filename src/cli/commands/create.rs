//! Create command - interactive project creation

use tracing::warn;

use crate::api::{DirectoryApi, ForgeClient, Group, ProjectSpec};
use crate::cli::args::CreateArgs;
use crate::config::Config;
use crate::error::{AnvilError, AnvilResult};
use crate::form::{DeployTarget, ProjectForm, ProjectType, TechStack};
use crate::search::GroupAutocomplete;
use crate::session::{Credential, Session};
use crate::ui::{self, picker, TaskSpinner, UiContext};

/// Execute the create command
pub async fn execute(args: CreateArgs, session: &mut Session, config: &Config) -> AnvilResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);

    ui::intro(&ctx, "anvil create");

    let credential = super::acquire_credential(&ctx, session).await?;
    let client = ForgeClient::new(&config.server.base_url);

    let mut form = ProjectForm::new();
    seed_form(&mut form, &args, config);

    let Some(group) = resolve_group(&ctx, &client, &credential, &args, config).await? else {
        ui::outro_warn(&ctx, "Cancelled");
        return Ok(());
    };
    form.set_group(group);

    fill_missing_fields(&ctx, &mut form).await?;

    let issues = form.validate();
    if !issues.is_empty() {
        for issue in &issues {
            ui::step_error(&ctx, &format!("{}: {}", issue.field, issue.reason));
        }
        let first = &issues[0];
        return Err(AnvilError::field(first.field, first.reason.clone()));
    }

    // Failed submissions keep every entered value; the user decides
    // whether to try again.
    loop {
        let spec = form.build_spec()?;
        show_summary(&ctx, &form, &spec);

        if !ui::confirm(&ctx, "Create project?", true).await? {
            ui::outro_warn(&ctx, "Cancelled");
            return Ok(());
        }

        let mut spinner = TaskSpinner::new(&ctx);
        spinner.start("Creating project...");

        match client.create_project(&credential, &spec).await {
            Ok(_) => {
                spinner.stop(&format!("Project '{}' created", spec.name));
                form.reset();
                ui::outro_success(&ctx, "Done");
                return Ok(());
            }
            Err(e) => {
                spinner.stop_error("Project creation failed");
                warn!(error = %e, "create-project request failed");

                let retry = ctx.is_interactive()
                    && !ctx.auto_yes()
                    && ui::confirm(&ctx, "Try again with the same values?", false).await?;
                if retry {
                    continue;
                }
                return Err(AnvilError::User(
                    "Project creation failed - check configuration".into(),
                ));
            }
        }
    }
}

/// Pre-fill the form from flags and config defaults
fn seed_form(form: &mut ProjectForm, args: &CreateArgs, config: &Config) {
    if let Some(name) = &args.name {
        form.set_name(name.clone());
    }
    if let Some(project_type) = args.project_type.or(config.project.default_type) {
        form.set_project_type(project_type);
    }
    if let Some(stack) = args.stack.or(config.project.default_stack) {
        form.set_stack(stack);
    }
    for (target, namespace) in &args.namespaces {
        form.set_namespace(*target, namespace.clone());
    }
}

/// Resolve the target group, via flag or the interactive picker
///
/// Returns `None` when the user cancels the picker.
async fn resolve_group(
    ctx: &UiContext,
    client: &ForgeClient,
    credential: &Credential,
    args: &CreateArgs,
    config: &Config,
) -> AnvilResult<Option<Group>> {
    if let Some(id) = args.group_id {
        let mut spinner = TaskSpinner::new(ctx);
        spinner.start(&format!("Resolving group {}...", id));
        let groups = client.groups(credential).await?;
        return match groups.into_iter().find(|g| g.id == id) {
            Some(group) => {
                spinner.stop(&format!("Group {}", group.path));
                Ok(Some(group))
            }
            None => {
                spinner.stop_error("Group not found");
                Err(AnvilError::User(format!("No group with id {}", id)))
            }
        };
    }

    let mut engine = GroupAutocomplete::new(config.groups.debounce(), config.groups.search_limit);
    let mut spinner = TaskSpinner::new(ctx);
    spinner.start("Loading groups...");
    engine
        .load_common(client, credential, config.groups.common_limit)
        .await;
    if engine.is_degraded() {
        spinner.stop_warn("Forge unreachable - showing an offline group list");
    } else {
        spinner.stop("Groups loaded");
    }

    let chosen = picker::pick_group(ctx, client, credential, &mut engine).await?;
    if let Some(group) = &chosen {
        ui::step_ok(ctx, &format!("Group {}", group.path));
    }
    Ok(chosen)
}

/// Prompt for whatever the flags did not provide
async fn fill_missing_fields(ctx: &UiContext, form: &mut ProjectForm) -> AnvilResult<()> {
    if form.name().trim().is_empty() && ctx.is_interactive() {
        let name = ui::input(ctx, "Project name", None, true).await?;
        form.set_name(name);
    }

    if form.project_type().is_none() && ctx.is_interactive() {
        let options: Vec<(ProjectType, &str, &str)> = ProjectType::ALL
            .iter()
            .map(|t| (*t, t.as_str(), t.hint()))
            .collect();
        let project_type = ui::select(ctx, "Project type", &options).await?;
        form.set_project_type(project_type);
    }

    if form.stack_required() && form.stack().is_none() && ctx.is_interactive() {
        let options: Vec<(TechStack, &str, &str)> =
            TechStack::ALL.iter().map(|s| (*s, s.as_str(), "")).collect();
        let stack = ui::select(ctx, "Technology stack", &options).await?;
        form.set_stack(stack);
    }

    if form.deployments_visible() && ctx.is_interactive() {
        let enabled: Vec<DeployTarget> = form.deployments().keys().copied().collect();
        let options: Vec<(DeployTarget, &str, &str)> = DeployTarget::ALL
            .iter()
            .map(|t| (*t, t.as_str(), ""))
            .collect();
        let selected =
            ui::multi_select(ctx, "Deployment targets", &options, &enabled).await?;

        for target in DeployTarget::ALL {
            form.toggle_deployment(target, selected.contains(&target));
        }
        for target in selected {
            let initial = form.namespace(target).map(str::to_string);
            let namespace = ui::input(
                ctx,
                &format!("Namespace for {}", target),
                initial.as_deref(),
                false,
            )
            .await?;
            form.set_namespace(target, namespace);
        }
    }

    Ok(())
}

fn show_summary(ctx: &UiContext, form: &ProjectForm, spec: &ProjectSpec) {
    ui::key_value(ctx, "name", &spec.name);
    if let Some(group) = form.group() {
        ui::key_value(ctx, "group", &group.path);
    }
    ui::key_value(ctx, "type", spec.project_type.as_str());
    if let Some(stack) = spec.stack {
        ui::key_value(ctx, "stack", stack.as_str());
    }
    for (target, deployment) in &spec.deployments {
        ui::key_value(
            ctx,
            &format!("namespace.{}", target),
            &deployment.namespace,
        );
    }
}
