//! One editing session of the weekly availability form.

use slotweek_core::{preview_lines, SlotBitmap};
use slotweek_editor::{ExtendPolicy, GridHost, PointerEvent, SelectionController};

use crate::builder::ScheduleBuilder;
use crate::draft::ScheduleDraft;
use crate::error::{Result, ValidationError};
use crate::payload::CreateScheduleRequest;
use crate::submit::{ScheduleSubmitter, SubmissionReceipt};

/// The availability form: grid selection plus metadata fields.
///
/// The bitmap starts empty, is painted through the editor, and is cleared
/// again on [`reset`](Self::reset) or after a successful
/// [`submit`](Self::submit).
#[derive(Debug)]
pub struct AvailabilityForm<H: GridHost> {
    editor: SelectionController<H>,
    fields: ScheduleBuilder,
}

impl<H: GridHost> AvailabilityForm<H> {
    /// Creates an empty form.
    pub fn new(host: H) -> Self {
        Self {
            editor: SelectionController::new(host),
            fields: ScheduleBuilder::new(),
        }
    }

    /// Opens a stored schedule for editing.
    pub fn from_request(host: H, request: &CreateScheduleRequest) -> Result<Self> {
        let bitmap = request.to_bitmap()?;
        let fields = ScheduleBuilder::new()
            .with_organization(request.organization.clone())
            .with_facility(request.facility_id)
            .with_schedule_type(request.schedule_type)
            .with_validity(request.valid_start_date, request.valid_end_date);
        Ok(Self {
            editor: SelectionController::with_bitmap(host, bitmap),
            fields,
        })
    }

    /// Sets the editor's extend policy.
    pub fn with_policy(mut self, policy: ExtendPolicy) -> Self {
        self.editor = self.editor.with_policy(policy);
        self
    }

    /// Replaces the metadata fields.
    pub fn with_fields(mut self, fields: ScheduleBuilder) -> Self {
        self.fields = fields;
        self
    }

    /// The grid editor.
    pub fn editor(&self) -> &SelectionController<H> {
        &self.editor
    }

    /// Mutable access to the grid editor.
    pub fn editor_mut(&mut self) -> &mut SelectionController<H> {
        &mut self.editor
    }

    /// The metadata fields.
    pub fn fields(&self) -> &ScheduleBuilder {
        &self.fields
    }

    /// Mutable access to the metadata fields.
    pub fn fields_mut(&mut self) -> &mut ScheduleBuilder {
        &mut self.fields
    }

    /// Current selection.
    pub fn bitmap(&self) -> &SlotBitmap {
        self.editor.bitmap()
    }

    /// Forwards a pointer event to the editor.
    pub fn dispatch(&mut self, event: PointerEvent) {
        self.editor.dispatch(event);
    }

    /// Live preview, one line per day with a selection.
    pub fn preview(&self) -> Vec<String> {
        preview_lines(self.editor.bitmap())
    }

    /// Builds a draft from the current state without side effects.
    pub fn draft(&self) -> std::result::Result<ScheduleDraft, ValidationError> {
        self.fields.build(self.editor.bitmap())
    }

    /// Validates, submits, and clears the form once the endpoint accepts.
    ///
    /// An invalid form never reaches `submitter`. When the submitter fails
    /// the selection is kept so the caller can retry.
    pub async fn submit(&mut self, submitter: &dyn ScheduleSubmitter) -> Result<SubmissionReceipt> {
        let request = self.draft()?.to_request();

        match submitter.create_schedule(&request).await {
            Ok(receipt) => {
                tracing::info!(
                    facility_id = %request.facility_id,
                    entries = request.schedules.len(),
                    schedule_id = ?receipt.schedule_id,
                    "Schedule submitted"
                );
                self.reset();
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "Schedule submission failed; selection kept"
                );
                Err(err)
            }
        }
    }

    /// Clears the selection and the metadata fields.
    pub fn reset(&mut self) {
        self.editor.reset();
        self.fields = ScheduleBuilder::new();
    }
}
