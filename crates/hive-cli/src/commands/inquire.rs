use hive_core::entities::Inquiry;
use hive_core::forms::{BUDGET_RANGES, is_known_budget_range};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InquireArgs;
use crate::commands::shared::submit;
use crate::context::AppContext;

/// Handle `hive inquire`.
pub async fn handle(
    args: &InquireArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let inquiry = build(args)?;
    let outcome = submit::send(&ctx.service, &inquiry, "Sending inquiry...").await?;
    submit::report(&outcome, flags)
}

fn build(args: &InquireArgs) -> anyhow::Result<Inquiry> {
    if !args.budget_range.is_empty() && !is_known_budget_range(&args.budget_range) {
        let known = BUDGET_RANGES
            .iter()
            .map(|(value, _)| format!("'{value}'"))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!(
            "unknown budget range '{}'; expected one of {known}",
            args.budget_range
        );
    }

    Ok(Inquiry {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        project_type: args.project_type.clone(),
        budget_range: args.budget_range.clone(),
        message: args.message.clone(),
    })
}
