//! "Add New User" form session
//!
//! A [`UserForm`] owns the single draft record for as long as the form is
//! open. Each input event replaces the draft through the merge engine.
//! Submitting assigns an identifier, hands the record to the caller's
//! acceptance callback exactly once, then closes the form whether or not
//! acceptance succeeded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::result::{Error, Result, Submission};
use crate::domain::{FieldPath, User, UserData};
use crate::services::merge::apply_edit;

/// Hands out record identifiers, unique for the lifetime of the allocator
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Start allocating at `first`
    pub fn new(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Allocate the next identifier
    ///
    /// Never wraps: once the counter reaches `u64::MAX` every further call
    /// fails with [`Error::IdsExhausted`].
    pub fn next_id(&self) -> Result<u64> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| Error::IdsExhausted)
    }

    /// Make sure no future identifier is below `floor`
    pub fn reserve_below(&self, floor: u64) {
        self.next.fetch_max(floor, Ordering::Relaxed);
    }

    /// The identifier the next call to `next_id` would return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new(1)
    }
}

/// An open form editing one draft user
#[derive(Debug)]
pub struct UserForm {
    draft: UserData,
    ids: Arc<IdAllocator>,
}

impl UserForm {
    /// Open the form with an all-empty draft
    pub fn open(ids: Arc<IdAllocator>) -> Self {
        Self {
            draft: UserData::empty(),
            ids,
        }
    }

    /// Current draft
    pub fn draft(&self) -> &UserData {
        &self.draft
    }

    /// Apply one input event
    pub fn edit(&mut self, path: FieldPath, value: impl Into<String>) {
        self.draft = apply_edit(&self.draft, path, value);
    }

    /// Apply one input event addressed by a dotted path string
    pub fn edit_str(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        let path: FieldPath = path.parse()?;
        self.edit(path, value);
        Ok(())
    }

    /// Finalize the draft and hand it to `accept`, then call `close`
    ///
    /// No field is required. `accept` runs exactly once; `close` runs after
    /// it regardless of its outcome. There is no rollback. If no identifier
    /// can be allocated the form still closes, `accept` is skipped and the
    /// allocation error is returned.
    pub fn submit<A, C>(self, accept: A, close: C) -> Result<Submission<User>>
    where
        A: FnOnce(User) -> anyhow::Result<()>,
        C: FnOnce(),
    {
        let id = match self.ids.next_id() {
            Ok(id) => id,
            Err(e) => {
                close();
                return Err(e);
            }
        };
        let user = self.draft.with_id(id);

        let outcome = accept(user.clone());
        close();

        Ok(match outcome {
            Ok(()) => Submission::accepted(user),
            Err(e) => Submission::rejected(user, format!("{:#}", e)),
        })
    }

    /// Dismiss the form without submitting
    pub fn cancel<C: FnOnce()>(self, close: C) {
        close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use crate::domain::{AddressField, CompanyField, GeoField, TopLevelField};

    fn form() -> UserForm {
        UserForm::open(Arc::new(IdAllocator::default()))
    }

    #[test]
    fn test_open_starts_empty() {
        assert_eq!(form().draft(), &UserData::empty());
    }

    #[test]
    fn test_ada_scenario() {
        let mut form = form();
        form.edit_str("name", "Ada").unwrap();
        form.edit_str("address.city", "London").unwrap();
        form.edit_str("address.lat", "51.5").unwrap();

        let accepted = RefCell::new(Vec::new());
        let submission = form.submit(
            |user| {
                accepted.borrow_mut().push(user);
                Ok(())
            },
            || {},
        )
        .unwrap();

        let accepted = accepted.into_inner();
        assert_eq!(accepted.len(), 1);
        let user = &accepted[0];
        assert_eq!(user, &submission.record);

        assert_eq!(user.data.name, "Ada");
        assert_eq!(user.data.address.city, "London");
        assert_eq!(user.data.address.geo.lat, "51.5");

        let set = [
            FieldPath::Top(TopLevelField::Name),
            FieldPath::Address(AddressField::City),
            FieldPath::Geo(GeoField::Lat),
        ];
        for path in FieldPath::ALL {
            if !set.contains(&path) {
                assert_eq!(path.read(&user.data), "", "{} should be empty", path);
            }
        }
    }

    #[test]
    fn test_empty_draft_submits() {
        let calls = Cell::new(0);
        let submission = form().submit(
            |_| {
                calls.set(calls.get() + 1);
                Ok(())
            },
            || {},
        )
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert!(submission.accepted);
        assert_eq!(submission.record.data, UserData::empty());
    }

    #[test]
    fn test_close_runs_after_accept() {
        let order = RefCell::new(Vec::new());
        form().submit(
            |_| {
                order.borrow_mut().push("accept");
                Ok(())
            },
            || order.borrow_mut().push("close"),
        )
        .unwrap();
        assert_eq!(order.into_inner(), vec!["accept", "close"]);
    }

    #[test]
    fn test_close_runs_when_accept_fails() {
        let closed = Cell::new(false);
        let submission = form()
            .submit(|_| anyhow::bail!("rejected"), || closed.set(true))
            .unwrap();

        assert!(closed.get());
        assert!(!submission.accepted);
        assert_eq!(submission.error.as_deref(), Some("rejected"));
    }

    #[test]
    fn test_cancel_only_closes() {
        let closed = Cell::new(false);
        let mut form = form();
        form.edit(FieldPath::Company(CompanyField::Name), "Acme");
        form.cancel(|| closed.set(true));
        assert!(closed.get());
    }

    #[test]
    fn test_successive_submissions_get_distinct_ids() {
        let ids = Arc::new(IdAllocator::default());
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let submission = UserForm::open(Arc::clone(&ids)).submit(|_| Ok(()), || {})
                .unwrap();
            assert!(seen.insert(submission.record.id));
        }
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_unknown_path_leaves_draft_untouched() {
        let mut form = form();
        form.edit_str("name", "Ada").unwrap();
        assert!(form.edit_str("company.ceo", "Grace").is_err());
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.draft().company.name, "");
    }

    #[test]
    fn test_allocator_reserve() {
        let ids = IdAllocator::new(1);
        ids.reserve_below(11);
        assert_eq!(ids.next_id().unwrap(), 11);
        ids.reserve_below(5);
        assert_eq!(ids.next_id().unwrap(), 12);
        assert_eq!(ids.peek(), 13);
    }

    #[test]
    fn test_allocator_never_wraps() {
        let ids = IdAllocator::new(u64::MAX - 1);
        assert_eq!(ids.next_id().unwrap(), u64::MAX - 1);
        assert!(matches!(ids.next_id(), Err(Error::IdsExhausted)));
        assert!(matches!(ids.next_id(), Err(Error::IdsExhausted)));
        assert_eq!(ids.peek(), u64::MAX);
    }

    #[test]
    fn test_submit_closes_when_ids_exhausted() {
        let accepted = Cell::new(false);
        let closed = Cell::new(false);
        let form = UserForm::open(Arc::new(IdAllocator::new(u64::MAX)));

        let result = form.submit(
            |_| {
                accepted.set(true);
                Ok(())
            },
            || closed.set(true),
        );

        assert!(matches!(result, Err(Error::IdsExhausted)));
        assert!(!accepted.get());
        assert!(closed.get());
    }
}
