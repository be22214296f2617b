//! Creating this week's Tidy Tuesday notebook.
//!
//! Resolves the reference date to its week's Tuesday, builds the substitution
//! data, derives the file name, and hands off to [`materialize`].

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::ResolvedConfig;
use crate::config::types::{DEFAULT_AUTHOR, DEFAULT_EXTENSION};
use crate::confirm::Confirm;
use crate::dates::{
    DateError, ISO_DATE, current_tuesday, default_file_name, parse_reference_date,
};
use crate::error::{Result, TidyError};
use crate::materialize::{MaterializeOutcome, TemplateRequest, materialize};
use crate::open::Opener;
use crate::templates::{LoadedTemplate, RenderContext};

/// The date whose week is being scaffolded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Date(NaiveDate),
    /// User input such as `2024-06-05` or `today - 1w`.
    Expr(String),
}

#[derive(Debug, Clone)]
pub struct WeeklyOptions {
    /// Output file name; derived from the Tuesday when absent.
    pub name: Option<PathBuf>,
    pub open_after_write: bool,
    /// Defaults to today.
    pub reference: Option<Reference>,
    pub overwrite: bool,
    pub output_dir: PathBuf,
    pub extension: String,
    pub author: String,
}

impl Default for WeeklyOptions {
    fn default() -> Self {
        Self {
            name: None,
            open_after_write: true,
            reference: None,
            overwrite: false,
            output_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl WeeklyOptions {
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self {
            output_dir: cfg.output_dir.clone(),
            extension: cfg.extension.clone(),
            author: cfg.author.clone(),
            ..Self::default()
        }
    }
}

/// Everything decided before touching the filesystem.
#[derive(Debug, Clone)]
pub struct WeeklyPlan {
    pub reference: NaiveDate,
    pub tuesday: NaiveDate,
    pub request: TemplateRequest,
}

pub fn resolve_reference(reference: Option<&Reference>, today: NaiveDate) -> Result<NaiveDate> {
    Ok(match reference {
        None => today,
        Some(Reference::Date(date)) => *date,
        Some(Reference::Expr(text)) => parse_reference_date(text, today)?,
    })
}

/// Tuesday of `reference`'s week, or `InvalidArgument` when that Tuesday
/// falls outside the representable calendar.
pub fn tuesday_for(reference: NaiveDate) -> Result<NaiveDate> {
    current_tuesday(reference)
        .ok_or_else(|| TidyError::InvalidArgument(DateError::OutOfRange(reference.to_string())))
}

pub fn plan_weekly(options: &WeeklyOptions, today: NaiveDate) -> Result<WeeklyPlan> {
    let reference = resolve_reference(options.reference.as_ref(), today)?;
    let tuesday = tuesday_for(reference)?;

    let name = options
        .name
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_file_name(tuesday, &options.extension)));
    let destination = options.output_dir.join(name);

    let mut data = RenderContext::new();
    data.insert("call_date".into(), today.format(ISO_DATE).to_string());
    data.insert("call_tuesday".into(), tuesday.format(ISO_DATE).to_string());
    data.insert("author".into(), options.author.clone());

    debug!("Reference {} resolves to Tuesday {}", reference, tuesday);

    Ok(WeeklyPlan {
        reference,
        tuesday,
        request: TemplateRequest {
            destination,
            data,
            overwrite: options.overwrite,
            open_after_write: options.open_after_write,
        },
    })
}

/// Create the notebook for the week of `options.reference` (or `today`).
///
/// `today` fills `call_date` and anchors relative references.
pub fn create_weekly_template(
    options: &WeeklyOptions,
    today: NaiveDate,
    template: &LoadedTemplate,
    confirm: &mut dyn Confirm,
    opener: &mut dyn Opener,
) -> Result<MaterializeOutcome> {
    let plan = plan_weekly(options, today)?;
    materialize(&plan.request, template, confirm, opener)
}
