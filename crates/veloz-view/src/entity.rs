//! The list-with-inline-create view, shared by every record kind.

use std::marker::PhantomData;

use veloz_core::permission::require_permission;
use veloz_core::store::RecordStore;
use veloz_core::{CoreError, Identity};

use crate::error::FormError;
use crate::form::{Draft, FormController};
use crate::record::{Record, find_visible, scope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Create,
}

/// List state (mode and search term) plus the create form.
#[derive(Debug, Clone)]
pub struct EntityView<R: Record, D: Draft> {
    mode: ViewMode,
    search: String,
    form: FormController<D>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, D: Draft> Default for EntityView<R, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record, D: Draft> EntityView<R, D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: ViewMode::List,
            search: String::new(),
            form: FormController::new(),
            _record: PhantomData,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    #[must_use]
    pub const fn form(&self) -> &FormController<D> {
        &self.form
    }

    /// Rows for the current search term.
    #[must_use]
    pub fn rows(&self, identity: &Identity, records: &[R]) -> Vec<R::View> {
        scope(identity, records, &self.search)
    }

    /// Switch to the create form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Denied`] when the create permission is not
    /// held; the view stays in list mode.
    pub fn open_create(&mut self, identity: &Identity) -> Result<(), FormError> {
        if let Some(permission) = D::CREATE_PERMISSION {
            require_permission(identity, permission)?;
        }
        self.mode = ViewMode::Create;
        Ok(())
    }

    /// Leave the create form, discarding entered values.
    ///
    /// # Errors
    ///
    /// [`FormError::Busy`] while a submission is in flight.
    pub fn cancel_create(&mut self) -> Result<(), FormError> {
        self.form.reset()?;
        self.mode = ViewMode::List;
        Ok(())
    }

    /// Set a field of the open create form.
    ///
    /// # Errors
    ///
    /// [`FormError::Closed`] in list mode, otherwise as
    /// [`FormController::set`].
    pub fn set_field(
        &mut self,
        identity: &Identity,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.mode != ViewMode::Create {
            return Err(FormError::Closed);
        }
        self.form.set(identity, name, value)
    }

    /// Persist the form through `store`. Success returns to list mode.
    ///
    /// # Errors
    ///
    /// [`FormError::Closed`] in list mode, [`FormError::Denied`] if the
    /// create permission is not held, otherwise as [`FormController::submit`].
    pub async fn submit<S>(&mut self, identity: &Identity, store: &S) -> Result<R, FormError>
    where
        S: RecordStore<R, Draft = D> + ?Sized,
    {
        if self.mode != ViewMode::Create {
            return Err(FormError::Closed);
        }
        if let Some(permission) = D::CREATE_PERMISSION {
            require_permission(identity, permission)?;
        }
        let record = self.form.submit(store).await?;
        self.mode = ViewMode::List;
        tracing::info!(entity = R::ENTITY, id = record.id(), "record created");
        Ok(record)
    }

    /// Delete one record the identity can see.
    ///
    /// # Errors
    ///
    /// [`FormError::Denied`] for a missing delete permission or a record
    /// outside the identity's scope, [`FormError::Store`] if the collaborator
    /// fails.
    pub async fn delete<S>(
        &self,
        identity: &Identity,
        store: &S,
        records: &[R],
        id: u64,
    ) -> Result<(), FormError>
    where
        S: RecordStore<R> + ?Sized,
    {
        if let Some(permission) = R::DELETE_PERMISSION {
            require_permission(identity, permission)?;
        }
        if find_visible(identity, records, id).is_none() {
            return Err(FormError::Denied(CoreError::NotFound {
                entity_type: R::ENTITY.to_string(),
                id: id.to_string(),
            }));
        }
        store
            .delete(id)
            .await
            .map_err(|error| FormError::Store(Box::new(error)))?;
        tracing::info!(entity = R::ENTITY, id, "record deleted");
        Ok(())
    }
}
