//! Form controller flows against a recording persistence collaborator.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use veloz_core::enums::Role;
use veloz_core::store::RecordStore;
use veloz_core::{Identity, PermissionSet};
use veloz_view::{Draft, FieldSpec, FormController, FormError, FormState, FormValues, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Contact {
    name: String,
    city: String,
}

impl Draft for Contact {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("city", "City").required(),
    ];

    fn from_values(values: &FormValues) -> Result<Self, ValidationError> {
        Ok(Self {
            name: values.string("name"),
            city: values.string("city"),
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("backend unavailable")]
struct Unavailable;

#[derive(Default)]
struct RecordingStore {
    calls: AtomicUsize,
    fail: bool,
    saved: Mutex<Vec<Contact>>,
}

impl RecordingStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore<Contact> for RecordingStore {
    type Draft = Contact;
    type Error = Unavailable;

    async fn list(&self) -> Result<Vec<Contact>, Unavailable> {
        Ok(self.saved.lock().unwrap().clone())
    }

    async fn create(&self, draft: &Contact) -> Result<Contact, Unavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Unavailable);
        }
        self.saved.lock().unwrap().push(draft.clone());
        Ok(draft.clone())
    }

    async fn delete(&self, _id: u64) -> Result<(), Unavailable> {
        Ok(())
    }
}

/// A backend that never answers.
struct SilentStore;

#[async_trait]
impl RecordStore<Contact> for SilentStore {
    type Draft = Contact;
    type Error = Unavailable;

    async fn list(&self) -> Result<Vec<Contact>, Unavailable> {
        Ok(Vec::new())
    }

    async fn create(&self, _draft: &Contact) -> Result<Contact, Unavailable> {
        std::future::pending().await
    }

    async fn delete(&self, _id: u64) -> Result<(), Unavailable> {
        Ok(())
    }
}

fn anyone() -> Identity {
    Identity::new(2, "Karen", Role::Worker, PermissionSet::new())
}

#[tokio::test]
async fn empty_required_field_blocks_submission_locally() {
    let store = RecordingStore::default();
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();

    let err = form.submit(&store).await.unwrap_err();
    assert!(matches!(
        err,
        FormError::Validation(ValidationError::Missing(ref fields)) if fields == &vec!["name"]
    ));
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(store.calls(), 0);
    assert_eq!(form.values().get("city"), "Lima");
}

#[tokio::test]
async fn whitespace_only_counts_as_empty() {
    let store = RecordingStore::default();
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "   ").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();
    assert!(form.submit(&store).await.is_err());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn second_submit_while_in_flight_is_a_no_op() {
    let store = RecordingStore::default();
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "Juan").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();

    let in_flight = form.begin_submit().unwrap();
    assert_eq!(form.state(), FormState::Submitting);

    let second = form.submit(&store).await;
    assert!(matches!(second, Err(FormError::Busy)));
    assert!(matches!(form.set(&anyone(), "city", "Cusco"), Err(FormError::Busy)));
    assert_eq!(form.state(), FormState::Submitting);

    let outcome = store.create(&in_flight).await;
    form.complete(outcome).unwrap();
    assert_eq!(store.calls(), 1);
    assert_eq!(form.state(), FormState::Idle);
}

#[tokio::test]
async fn success_resets_fields_to_defaults() {
    let store = RecordingStore::default();
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", " Juan ").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();

    let saved = form.submit(&store).await.unwrap();
    assert_eq!(
        saved,
        Contact {
            name: "Juan".into(),
            city: "Lima".into()
        }
    );
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(form.values(), &FormValues::defaults::<Contact>());
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn transport_failure_keeps_entered_values() {
    let store = RecordingStore::failing();
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "Juan").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();

    let err = form.submit(&store).await.unwrap_err();
    assert_eq!(err.to_string(), "could not save: backend unavailable");
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.values().get("name"), "Juan");
    assert_eq!(form.last_error(), Some("backend unavailable"));
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn submitting_from_idle_is_validated_the_same_way() {
    let store = RecordingStore::default();
    let mut form = FormController::<Contact>::new();
    assert_eq!(form.state(), FormState::Idle);

    assert!(form.submit(&store).await.is_err());
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(store.calls(), 0);
}

#[test]
fn unknown_field_is_rejected() {
    let mut form = FormController::<Contact>::new();
    let err = form.set(&anyone(), "country", "PE").unwrap_err();
    assert!(matches!(err, FormError::UnknownField(ref name) if name == "country"));
    assert_eq!(form.state(), FormState::Idle);
}

#[tokio::test]
async fn timed_out_submit_leaves_form_editable() {
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "Juan").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();

    let timed_out = tokio::time::timeout(Duration::from_millis(20), form.submit(&SilentStore)).await;
    assert!(timed_out.is_err());

    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.values().get("name"), "Juan");
    assert!(form.last_error().is_some());
    form.set(&anyone(), "city", "Cusco").unwrap();

    let store = RecordingStore::default();
    let saved = form.submit(&store).await.unwrap();
    assert_eq!(saved.city, "Cusco");
    assert_eq!(form.state(), FormState::Idle);
}

#[test]
fn abandon_releases_a_manual_submission() {
    let mut form = FormController::<Contact>::new();
    form.set(&anyone(), "name", "Juan").unwrap();
    form.set(&anyone(), "city", "Lima").unwrap();
    form.begin_submit().unwrap();
    assert!(matches!(form.reset(), Err(FormError::Busy)));

    form.abandon();
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.values().get("city"), "Lima");
    form.reset().unwrap();
    assert_eq!(form.state(), FormState::Idle);
}
