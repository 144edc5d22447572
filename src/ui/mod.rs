//! UI module for consistent, modern CLI experience
//!
//! Uses `cliclack` (Rust port of @clack/prompts) for interactive prompts
//! with automatic fallback to plain output in CI/non-interactive
//! environments, plus a raw-mode incremental picker for group search.
//!
//! # Example
//!
//! ```rust,ignore
//! use anvil::ui::{self, UiContext, TaskSpinner};
//!
//! let ctx = UiContext::detect().with_auto_yes(args.yes);
//!
//! ui::intro(&ctx, "anvil create");
//!
//! let mut spinner = TaskSpinner::new(&ctx);
//! spinner.start("Loading groups...");
//! // ... remote call ...
//! spinner.stop("Groups loaded");
//!
//! let confirmed = ui::confirm(&ctx, "Create project?", true).await?;
//!
//! ui::outro_success(&ctx, "Project created");
//! ```

mod context;
mod output;
pub mod picker;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, outro_error, outro_success, outro_warn, remark, step_error,
    step_info, step_ok, step_warn, step_warn_hint,
};
pub use progress::TaskSpinner;
pub use prompts::{confirm, input, multi_select, password, select};
pub use theme::{init_theme, AnvilTheme};
