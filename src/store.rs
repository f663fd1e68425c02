//! State behind the transaction view and the operations that change it.
//!
//! The list is only ever replaced wholesale by a successful fetch. Create and
//! delete never touch it directly: they refetch once the server has accepted
//! the change.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::FinanceApi;
use crate::error::{FinanceError, ValidationError};
use crate::ledger::{self, Totals};
use crate::models::{Draft, NewTransaction, Transaction};
use crate::notify::Toast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Fetch,
    Create,
    Delete,
}

#[derive(Debug)]
pub enum Action {
    Started(Op),
    Loaded(Vec<Transaction>),
    Succeeded(Op),
    Failed(Op),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionState {
    pub transactions: Vec<Transaction>,
    pub totals: Totals,
    pub fetch: OpStatus,
    pub create: OpStatus,
    pub delete: OpStatus,
}

impl TransactionState {
    fn status_mut(&mut self, op: Op) -> &mut OpStatus {
        match op {
            Op::Fetch => &mut self.fetch,
            Op::Create => &mut self.create,
            Op::Delete => &mut self.delete,
        }
    }

    pub fn status(&self, op: Op) -> OpStatus {
        match op {
            Op::Fetch => self.fetch,
            Op::Create => self.create,
            Op::Delete => self.delete,
        }
    }
}

impl Reducible for TransactionState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Action::Started(op) => *next.status_mut(op) = OpStatus::Loading,
            Action::Loaded(mut list) => {
                ledger::sort_by_date_desc(&mut list);
                next.totals = ledger::totals(&list);
                next.transactions = list;
                next.fetch = OpStatus::Succeeded;
            }
            Action::Succeeded(op) => *next.status_mut(op) = OpStatus::Succeeded,
            Action::Failed(op) => *next.status_mut(op) = OpStatus::Failed,
        }
        Rc::new(next)
    }
}

pub enum DraftAction {
    Edit(Draft),
    /// Resets the form after a save, unless the user kept typing meanwhile.
    ClearIfUnchanged(Draft),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftState {
    pub draft: Draft,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Edit(draft) => Rc::new(Self { draft }),
            DraftAction::ClearIfUnchanged(submitted) if self.draft == submitted => {
                Rc::new(Self::default())
            }
            DraftAction::ClearIfUnchanged(_) => self,
        }
    }
}

/// Where the operations report to. The view wires this to its reducers;
/// tests record into plain vectors.
pub trait ViewSink {
    fn dispatch(&self, action: Action);

    fn notify(&self, toast: Toast);
}

pub async fn load_transactions<A>(api: &A) -> Result<Vec<Transaction>, FinanceError>
where
    A: FinanceApi + ?Sized,
{
    let mut list = api.list_transactions().await?;
    ledger::sort_by_date_desc(&mut list);
    Ok(list)
}

pub async fn refresh<A, S>(api: &A, sink: &S)
where
    A: FinanceApi + ?Sized,
    S: ViewSink + ?Sized,
{
    sink.dispatch(Action::Started(Op::Fetch));
    match load_transactions(api).await {
        Ok(list) => sink.dispatch(Action::Loaded(list)),
        Err(err) => {
            log::error!("loading transactions failed: {}", err);
            sink.dispatch(Action::Failed(Op::Fetch));
            sink.notify(Toast::error("Error loading transactions"));
        }
    }
}

fn validation_toast(err: &ValidationError) -> Toast {
    match err {
        ValidationError::MissingAmount | ValidationError::MissingDescription => {
            Toast::warning("Required fields").with_description("Please fill in all fields.")
        }
        ValidationError::InvalidAmount(_) => Toast::warning("Invalid amount")
            .with_description("Amount must be a non-negative number."),
    }
}

async fn submit<A, S>(api: &A, draft: &Draft, sink: &S) -> Result<NewTransaction, FinanceError>
where
    A: FinanceApi + ?Sized,
    S: ViewSink + ?Sized,
{
    let payload = draft.validate()?;
    sink.dispatch(Action::Started(Op::Create));
    api.create_transaction(&payload).await?;
    Ok(payload)
}

/// Validates and submits a draft. Returns `true` once the server accepted it,
/// which is the caller's cue to reset the form.
pub async fn create_transaction<A, S>(api: &A, draft: &Draft, sink: &S) -> bool
where
    A: FinanceApi + ?Sized,
    S: ViewSink + ?Sized,
{
    match submit(api, draft, sink).await {
        Ok(payload) => {
            log::info!("created {} transaction of {}", payload.kind, payload.amount);
            sink.dispatch(Action::Succeeded(Op::Create));
            sink.notify(Toast::success("Transaction added!"));
            refresh(api, sink).await;
            true
        }
        Err(FinanceError::Validation(err)) => {
            log::debug!("draft rejected: {}", err);
            sink.notify(validation_toast(&err));
            false
        }
        Err(err) => {
            log::error!("creating transaction failed: {}", err);
            sink.dispatch(Action::Failed(Op::Create));
            sink.notify(Toast::error("Error adding transaction"));
            false
        }
    }
}

pub async fn delete_transaction<A, S>(api: &A, id: i64, sink: &S)
where
    A: FinanceApi + ?Sized,
    S: ViewSink + ?Sized,
{
    sink.dispatch(Action::Started(Op::Delete));
    match api.delete_transaction(id).await {
        Ok(()) => {
            log::info!("deleted transaction {}", id);
            sink.dispatch(Action::Succeeded(Op::Delete));
            sink.notify(Toast::success("Transaction removed!"));
            refresh(api, sink).await;
        }
        Err(err) => {
            log::error!("deleting transaction {} failed: {}", id, err);
            sink.dispatch(Action::Failed(Op::Delete));
            sink.notify(Toast::error("Error removing transaction"));
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
