use hive_core::entities::ContributionApplication;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplyArgs;
use crate::commands::shared::submit;
use crate::context::AppContext;

/// Handle `hive apply`.
pub async fn handle(
    args: &ApplyArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let application = ContributionApplication {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        expertise: args.expertise.clone(),
        portfolio_url: args.portfolio_url.trim().to_string(),
        message: args.message.clone(),
    };
    let outcome = submit::send(&ctx.service, &application, "Sending application...").await?;
    submit::report(&outcome, flags)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hive_core::enums::Collection;
    use hive_store::MemoryStore;
    use pretty_assertions::assert_eq;

    use super::{ApplyArgs, handle};
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    fn args(message: &str) -> ApplyArgs {
        ApplyArgs {
            name: "Linus".into(),
            email: "linus@example.com".into(),
            expertise: "DevOps".into(),
            portfolio_url: String::new(),
            message: message.into(),
        }
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            skill_preview: 3,
        }
    }

    #[tokio::test]
    async fn application_lands_in_contributions() {
        let store = Arc::new(MemoryStore::new());
        let ctx = AppContext::with_store(store.clone());

        handle(&args("Happy to help"), &ctx, &flags()).await.expect("should succeed");

        let rows = store.rows(Collection::Contributions);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["expertise"], "DevOps");
        assert_eq!(rows[0]["portfolio_url"], "");
    }

    #[tokio::test]
    async fn blank_message_is_rejected_locally() {
        let store = Arc::new(MemoryStore::new());
        let ctx = AppContext::with_store(store.clone());

        assert!(handle(&args("  "), &ctx, &flags()).await.is_err());
        assert_eq!(store.insert_calls(), 0);
    }

    #[tokio::test]
    async fn failure_surfaces_generic_message() {
        let store = Arc::new(MemoryStore::new());
        store.fail_writes(Collection::Contributions, "policy");
        let ctx = AppContext::with_store(store);

        let err = handle(&args("Hi"), &ctx, &flags()).await.expect_err("should fail");
        assert_eq!(err.to_string(), "Failed to submit application. Please try again.");
    }
}
