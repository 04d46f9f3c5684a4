use async_trait::async_trait;
use thiserror::Error;

use postfix_access_utils::debug;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::form::{AccessActionForm, CleanedAccessAction, FormError};
use crate::options::FormOptions;

/// Where cleaned entries end up.
///
/// Implement this for whatever persists access map entries, e.g. a database
/// table or a generated map file.
#[async_trait]
pub trait AccessActionStore: Send {
    /// A user error that might be returned while saving
    type Error: Send;

    /// Persist a cleaned entry
    async fn save(&mut self, entry: &CleanedAccessAction) -> Result<(), Self::Error>;
}

/// Everything that can go wrong submitting a form
#[derive(Debug, Error)]
pub enum SubmitError<StoreError> {
    /// The form was refused, nothing was saved
    #[error(transparent)]
    Form(#[from] FormError),

    /// The store implementation returned an error.
    /// This is plumbed through and returned to the call site.
    #[error(transparent)]
    Store {
        /// The store error patched through
        source: StoreError,
    },
}

impl<StoreError> SubmitError<StoreError> {
    fn from_store_error(source: StoreError) -> Self {
        Self::Store { source }
    }
}

/// Clean `form` and save the result to `store`.
///
/// Returns the cleaned entry that was saved.
///
/// # Errors
/// Fails with [`SubmitError::Form`] without touching the store if cleaning
/// fails, or with [`SubmitError::Store`] if saving fails.
#[cfg_attr(feature = "tracing", instrument(skip_all))]
pub async fn submit<S: AccessActionStore>(
    form: &AccessActionForm,
    options: &FormOptions,
    store: &mut S,
) -> Result<CleanedAccessAction, SubmitError<S::Error>> {
    let entry = form.clean(options)?;
    store
        .save(&entry)
        .await
        .map_err(SubmitError::from_store_error)?;
    debug!("Saved action '{}'", entry.normalized());

    Ok(entry)
}
