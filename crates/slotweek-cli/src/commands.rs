//! `preview` and `draft` commands.

use slotweek_editor::{ExtendPolicy, RecordingHost};
use slotweek_schedule::{AvailabilityForm, MockSubmitter};
use std::path::Path;

use crate::cli::Command;
use crate::config::SlotweekConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use crate::events::{load_events, replay};
use crate::form_file::FormFile;

/// Placeholder printed when nothing is selected.
pub const EMPTY_PREVIEW: &str = "(no slots selected)";

/// Runs one parsed command.
pub async fn run(command: Command, config_path: Option<&str>, config: &SlotweekConfig) -> Result<()> {
    match command {
        Command::Preview { events, policy } => {
            let policy = effective_policy(config, policy.as_deref())?;
            println!("{}", preview(&events, policy)?);
            Ok(())
        }
        Command::Draft {
            events,
            form,
            pretty,
            dry_run,
            policy,
        } => {
            let options = DraftOptions {
                policy: effective_policy(config, policy.as_deref())?,
                pretty: pretty || config.output.pretty,
                dry_run,
            };
            println!("{}", draft(&events, &form, options).await?);
            Ok(())
        }
        Command::Config { action } => handle_config_command(config_path, action),
    }
}

/// The command-line override if given, else the configured policy.
pub fn effective_policy(config: &SlotweekConfig, cli: Option<&str>) -> Result<ExtendPolicy> {
    match cli {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(config.editor.extend_policy),
    }
}

/// Replays an event file onto an empty form.
pub fn replay_file(events: &Path, policy: ExtendPolicy) -> Result<AvailabilityForm<RecordingHost>> {
    let events = load_events(events)?;
    let mut form = AvailabilityForm::new(RecordingHost::new()).with_policy(policy);
    replay(&mut form, &events);
    Ok(form)
}

/// Preview text for an event file, one line per selected day.
pub fn preview(events: &Path, policy: ExtendPolicy) -> Result<String> {
    let form = replay_file(events, policy)?;
    let lines = form.preview();
    if lines.is_empty() {
        return Ok(EMPTY_PREVIEW.to_string());
    }
    Ok(lines.join("\n"))
}

/// Knobs for [`draft`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftOptions {
    /// Drag behaviour during replay
    pub policy: ExtendPolicy,
    /// Indent the JSON
    pub pretty: bool,
    /// Submit through [`MockSubmitter`] after rendering
    pub dry_run: bool,
}

/// Request JSON for an event file plus a form file.
pub async fn draft(events: &Path, form_file: &Path, options: DraftOptions) -> Result<String> {
    let fields = FormFile::load(form_file)?.to_builder()?;
    let mut form = replay_file(events, options.policy)?.with_fields(fields);

    let request = form.draft()?.to_request();
    let json = if options.pretty {
        request.to_json_pretty()?
    } else {
        request.to_json()?
    };

    if options.dry_run {
        let receipt = form.submit(&MockSubmitter::new()).await?;
        tracing::info!(schedule_id = ?receipt.schedule_id, "Dry run accepted");
    }
    Ok(json)
}
