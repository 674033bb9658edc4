use anyhow::Context;
use hive_core::entities::Submission;
use hive_site::SiteService;
use hive_site::view::FormOutcome;

use crate::cli::GlobalFlags;
use crate::output::{Table, output};
use crate::progress::Progress;

/// Validate `record`, send it once, and map the result to what the form
/// shows.
///
/// # Errors
///
/// Fails before any remote call if a required field is blank.
pub async fn send<S: Submission>(
    service: &SiteService,
    record: &S,
    sending: &str,
) -> anyhow::Result<FormOutcome> {
    record.validate().context("submission not sent")?;

    let progress = Progress::spinner(sending);
    let result = service.submit(record).await;
    progress.finish_clear();

    Ok(FormOutcome::from_submission(S::COLLECTION, result))
}

/// Print the outcome; a failed submission becomes a non-zero exit.
pub fn report(outcome: &FormOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !outcome.is_sent() {
        anyhow::bail!("{}", outcome.message());
    }
    if flags.quiet {
        return Ok(());
    }
    output(outcome, flags.format, |outcome| {
        Table::new(&["status"]).with_row(vec![outcome.message().to_string()])
    })
}
