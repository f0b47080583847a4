use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{error::AppError, validate};

/// Raw leave form input. Validated and displayed only; the drafts never
/// wired a submit call to the API, so no server contract exists for it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeaveApplication {
    pub leave_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The same application once validation has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidLeave<'a> {
    pub leave_type: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LeaveApplication {
    pub fn validate(&self) -> Result<ValidLeave<'_>, AppError> {
        let mut missing = Vec::new();
        let leave_type = match self.leave_type.as_deref() {
            Some(t) if !t.is_empty() => Some(t),
            _ => {
                missing.push("leave_type".to_string());
                None
            }
        };
        if self.start_date.is_none() {
            missing.push("start_date".to_string());
        }
        if self.end_date.is_none() {
            missing.push("end_date".to_string());
        }
        match (leave_type, self.start_date, self.end_date) {
            (Some(leave_type), Some(start_date), Some(end_date)) => {
                validate::check_date_order(start_date, end_date)?;
                Ok(ValidLeave {
                    leave_type,
                    start_date,
                    end_date,
                })
            }
            _ => Err(AppError::MissingFields(missing)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeaveFormState {
    #[default]
    Idle,
    Validating,
    Rejected(String),
    Submitted,
}

/// Leave form lifecycle: `Idle → Validating → {Rejected | Submitted}`.
/// A rejection returns to `Idle` once its reason has been redisplayed;
/// a submission is terminal, there is no retry path.
#[derive(Debug, Default)]
pub struct LeaveForm {
    state: LeaveFormState,
}

impl LeaveForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LeaveFormState {
        &self.state
    }

    /// Runs the submission flow and returns the status line to display.
    pub fn submit(&mut self, application: &LeaveApplication) -> String {
        self.state = LeaveFormState::Validating;
        match application.validate() {
            Ok(valid) => {
                self.state = LeaveFormState::Submitted;
                format!(
                    "Leave application submitted for {} from {} to {}.",
                    valid.leave_type, valid.start_date, valid.end_date
                )
            }
            Err(err) => {
                let reason = err.to_string();
                self.state = LeaveFormState::Rejected(reason.clone());
                reason
            }
        }
    }

    /// Called after a rejection has been shown to the user.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, LeaveFormState::Rejected(_)) {
            self.state = LeaveFormState::Idle;
        }
    }
}
