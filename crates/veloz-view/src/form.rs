//! Form state controller.
//!
//! ```text
//! idle ──edit──▶ editing ──submit (valid)──▶ submitting ──ok──▶ idle (fields reset)
//!                   ▲  │                          │
//!                   │  └─submit (invalid): stays  └──err──▶ editing (fields kept)
//! ```
//!
//! The persistence collaborator is called only on entry to `submitting`, and
//! at most one submission is outstanding per controller. A submission dropped
//! before the collaborator answers falls back to `editing` with values kept.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use veloz_core::permission::require_permission;
use veloz_core::store::RecordStore;
use veloz_core::{Identity, Permission};

use crate::error::{FormError, ValidationError};

// ---------------------------------------------------------------------------
// Field schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Parsed as a decimal number; a required amount must be > 0.
    Amount,
    /// One of a fixed set of labels.
    Choice(&'static [&'static str]),
}

/// Declaration of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: &'static str,
    /// Editing this field needs the permission.
    pub edit_permission: Option<Permission>,
}

impl FieldSpec {
    #[must_use]
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: false,
            default: "",
            edit_permission: None,
        }
    }

    #[must_use]
    pub const fn amount(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Amount,
            default: "0",
            ..Self::text(name, label)
        }
    }

    #[must_use]
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self {
            kind: FieldKind::Choice(options),
            default,
            ..Self::text(name, label)
        }
    }

    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    #[must_use]
    pub const fn gated(self, permission: Permission) -> Self {
        Self {
            edit_permission: Some(permission),
            ..self
        }
    }
}

/// Raw field values as entered, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    /// Every field of `D` at its declared default.
    #[must_use]
    pub fn defaults<D: Draft>() -> Self {
        Self(
            D::FIELDS
                .iter()
                .map(|field| (field.name, field.default.to_string()))
                .collect(),
        )
    }

    /// The value of `name`, or `""` if never set.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map_or("", String::as_str)
    }

    /// The trimmed value of `name`.
    #[must_use]
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }

    /// Trimmed value parsed as an amount.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when the value is not a number.
    pub fn amount(&self, name: &'static str) -> Result<f64, ValidationError> {
        parse_amount(name, self.trimmed(name))
    }

    /// Trimmed value parsed with `FromStr`, `None` when blank.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Invalid`] when a non-blank value does not parse.
    pub fn parsed<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>, ValidationError> {
        let raw = self.trimmed(name);
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(|_| ValidationError::Invalid {
            field: name,
            value: raw.to_string(),
        })
    }

    /// Owned trimmed value.
    #[must_use]
    pub fn string(&self, name: &str) -> String {
        self.trimmed(name).to_string()
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::Invalid {
            field,
            value: raw.to_string(),
        })
}

/// A typed payload built from form values.
pub trait Draft: Sized + Send + Sync {
    const FIELDS: &'static [FieldSpec];

    /// Permission needed to open the form at all.
    const CREATE_PERMISSION: Option<Permission> = None;

    /// Build the payload. Only called after the required-field check passed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a value does not parse.
    fn from_values(values: &FormValues) -> Result<Self, ValidationError>;

    #[must_use]
    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// Check required fields and amounts, then build the payload.
///
/// # Errors
///
/// Returns the first class of problem found: missing required fields (all of
/// them, in declaration order), then non-positive required amounts, then
/// unparseable values.
pub fn validate<D: Draft>(values: &FormValues) -> Result<D, ValidationError> {
    let missing: Vec<&'static str> = D::FIELDS
        .iter()
        .filter(|field| field.required && values.trimmed(field.name).is_empty())
        .map(|field| field.name)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::Missing(missing));
    }

    for field in D::FIELDS {
        let raw = values.trimmed(field.name);
        match field.kind {
            FieldKind::Amount if field.required || !raw.is_empty() => {
                let amount = parse_amount(field.name, raw)?;
                if field.required && amount <= 0.0 {
                    return Err(ValidationError::NonPositive { field: field.name });
                }
            }
            FieldKind::Choice(options)
                if !raw.is_empty() && !options.iter().any(|o| o.eq_ignore_ascii_case(raw)) =>
            {
                return Err(ValidationError::Invalid {
                    field: field.name,
                    value: raw.to_string(),
                });
            }
            _ => {}
        }
    }

    D::from_values(values)
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

const ABANDONED: &str = "submission cancelled before the store answered";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Submitting,
}

impl FormState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing => "editing",
            Self::Submitting => "submitting",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controlled-input state for one form instance.
#[derive(Debug, Clone)]
pub struct FormController<D: Draft> {
    state: FormState,
    values: FormValues,
    last_error: Option<String>,
    _draft: PhantomData<fn() -> D>,
}

impl<D: Draft> Default for FormController<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> FormController<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(FormValues::defaults::<D>())
    }

    /// Start from existing values, e.g. a saved record being edited.
    #[must_use]
    pub const fn with_values(values: FormValues) -> Self {
        Self {
            state: FormState::Idle,
            values,
            last_error: None,
            _draft: PhantomData,
        }
    }

    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Message of the last failed submission, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Set one field and move to `editing`.
    ///
    /// # Errors
    ///
    /// - [`FormError::Busy`] while a submission is in flight
    /// - [`FormError::UnknownField`] for a name not in the schema
    /// - [`FormError::Denied`] when the field is gated and not held
    pub fn set(
        &mut self,
        identity: &Identity,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        let field = D::field(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        if let Some(permission) = field.edit_permission {
            require_permission(identity, permission)?;
        }
        self.values.set(field.name, value);
        self.state = FormState::Editing;
        Ok(())
    }

    /// Validate and enter `submitting`, handing back the payload to persist.
    ///
    /// # Errors
    ///
    /// [`FormError::Busy`] if already submitting (nothing changes), or
    /// [`FormError::Validation`] after which the form is in `editing`.
    pub fn begin_submit(&mut self) -> Result<D, FormError> {
        if self.state == FormState::Submitting {
            tracing::debug!("submit ignored: already submitting");
            return Err(FormError::Busy);
        }
        match validate::<D>(&self.values) {
            Ok(draft) => {
                self.state = FormState::Submitting;
                tracing::debug!("form submitting");
                Ok(draft)
            }
            Err(error) => {
                self.state = FormState::Editing;
                Err(error.into())
            }
        }
    }

    /// Settle the in-flight submission.
    ///
    /// Success resets every field to its default and returns to `idle`.
    /// Failure returns to `editing` with the entered values untouched.
    ///
    /// # Errors
    ///
    /// Passes a failed outcome through as [`FormError::Store`].
    pub fn complete<T, E>(&mut self, outcome: Result<T, E>) -> Result<T, FormError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match outcome {
            Ok(value) => {
                self.values = FormValues::defaults::<D>();
                self.last_error = None;
                self.state = FormState::Idle;
                tracing::debug!("form submitted");
                Ok(value)
            }
            Err(error) => {
                self.last_error = Some(error.to_string());
                self.state = FormState::Editing;
                tracing::debug!(%error, "form submission failed");
                Err(FormError::Store(Box::new(error)))
            }
        }
    }

    /// Validate, persist through `store`, and settle.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_submit`] and [`Self::complete`].
    pub async fn submit<R, S>(&mut self, store: &S) -> Result<R, FormError>
    where
        R: Send + Sync,
        S: RecordStore<R, Draft = D> + ?Sized,
    {
        let draft = self.begin_submit()?;
        let mut pending = PendingSubmit {
            form: self,
            settled: false,
        };
        let outcome = store.create(&draft).await;
        pending.settled = true;
        pending.form.complete(outcome)
    }

    /// Give up on the in-flight submission without an outcome.
    ///
    /// Returns to `editing` with the entered values kept. A no-op unless
    /// submitting.
    pub fn abandon(&mut self) {
        if self.state != FormState::Submitting {
            return;
        }
        self.last_error = Some(ABANDONED.to_string());
        self.state = FormState::Editing;
        tracing::debug!("form submission abandoned");
    }

    /// Drop entered values and return to `idle`.
    ///
    /// # Errors
    ///
    /// [`FormError::Busy`] while a submission is in flight.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        self.values = FormValues::defaults::<D>();
        self.last_error = None;
        self.state = FormState::Idle;
        Ok(())
    }
}

/// Settles a [`FormController::submit`] whose future is dropped mid-await.
struct PendingSubmit<'a, D: Draft> {
    form: &'a mut FormController<D>,
    settled: bool,
}

impl<D: Draft> Drop for PendingSubmit<'_, D> {
    fn drop(&mut self) {
        if !self.settled {
            self.form.abandon();
        }
    }
}
