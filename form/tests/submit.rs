use assert_matches::assert_matches;
use async_trait::async_trait;
use miette::{miette, ErrReport};
use pretty_assertions::assert_eq;

use postfix_access_common::Reason;
use postfix_access_form::{
    submit, AccessActionForm, AccessActionStore, CleanedAccessAction, FormError, FormOptions,
    SubmitError,
};

#[derive(Debug, Default)]
struct MemoryStore {
    entries: Vec<(String, String)>,
}

#[async_trait]
impl AccessActionStore for MemoryStore {
    type Error = ErrReport;

    async fn save(&mut self, entry: &CleanedAccessAction) -> Result<(), Self::Error> {
        self.entries
            .push((entry.normalized().to_owned(), entry.notes().to_owned()));
        Ok(())
    }
}

struct ReadOnlyStore;

#[async_trait]
impl AccessActionStore for ReadOnlyStore {
    type Error = ErrReport;

    async fn save(&mut self, _entry: &CleanedAccessAction) -> Result<(), Self::Error> {
        Err(miette!("Store is read only"))
    }
}

#[tokio::test]
async fn test_submit_saves_normalized() {
    let mut store = MemoryStore::default();
    let options = FormOptions::default_postfix();

    for (action, notes) in [
        ("ok", "trusted relay"),
        ("  redirect   postmaster@example.com", "catch all"),
        ("permit_mynetworks   reject_unauth_destination", ""),
        ("PREPEND X-Checked:  yes", "tagging"),
    ] {
        submit(&AccessActionForm::new(action, notes), &options, &mut store)
            .await
            .expect("Failed submitting form");
    }

    assert_eq!(
        store.entries,
        vec![
            ("OK".to_owned(), "trusted relay".to_owned()),
            (
                "REDIRECT postmaster@example.com".to_owned(),
                "catch all".to_owned()
            ),
            (
                "permit_mynetworks reject_unauth_destination".to_owned(),
                String::new()
            ),
            ("PREPEND X-Checked:  yes".to_owned(), "tagging".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_submit_invalid_is_not_saved() {
    let mut store = MemoryStore::default();
    let form = AccessActionForm::new("%%%", "");

    let error = submit(&form, &FormOptions::default_postfix(), &mut store)
        .await
        .expect_err("Invalid form was saved");

    assert_matches!(
        error,
        SubmitError::Form(FormError::Invalid(ref e)) if e.reason == Reason::UnknownKeyword
    );
    assert!(store.entries.is_empty());
}

#[tokio::test]
async fn test_submit_store_error() {
    let form = AccessActionForm::new("DUNNO", "");

    let error = submit(&form, &FormOptions::default_postfix(), &mut ReadOnlyStore)
        .await
        .expect_err("Read only store accepted entry");

    assert_matches!(error, SubmitError::Store { .. });
    assert_eq!(error.to_string(), "Store is read only");
}
