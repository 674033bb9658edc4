use std::time::Duration;

use hive_core::counter::{CounterTrigger, MetricFrame, MetricRamp, is_visible};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MetricsArgs;
use crate::output::{Table, output};
use crate::progress::Progress;

/// Handle `hive metrics`.
pub async fn handle(args: &MetricsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ramp = MetricRamp::default();
    let mut trigger = CounterTrigger::default();
    let started = trigger.observe(is_visible(args.visibility));

    // Off-screen counters never start and stay at zero.
    let frames = match (started, args.animate) {
        (false, _) => vec![ramp.frame(0)],
        (true, true) => vec![animate(ramp).await],
        (true, false) => ramp.frames().collect(),
    };

    output(&frames, flags.format, |frames| frames_table(frames))
}

/// Play the ramp in real time, one tick per step, and return the last frame.
async fn animate(ramp: MetricRamp) -> MetricFrame {
    let progress = Progress::ramp(u64::from(ramp.steps()));
    let mut ticker = tokio::time::interval(ramp.tick_interval().max(Duration::from_millis(1)));
    let started = tokio::time::Instant::now();

    loop {
        ticker.tick().await;
        let frame = ramp.frame(ramp.step_after(started.elapsed()));
        progress.update(u64::from(frame.step), &frame_label(&frame));
        if ramp.is_complete(frame.step) {
            progress.finish_ok(&frame_label(&frame));
            return frame;
        }
    }
}

fn frame_label(frame: &MetricFrame) -> String {
    format!(
        "{}% client satisfaction  {}x productivity",
        frame.satisfaction, frame.productivity
    )
}

fn frames_table(frames: &[MetricFrame]) -> Table {
    let mut table = Table::new(&["step", "satisfaction", "productivity"]);
    for frame in frames {
        table.row(vec![
            frame.step.to_string(),
            format!("{}%", frame.satisfaction),
            format!("{}x", frame.productivity),
        ]);
    }
    table
}
