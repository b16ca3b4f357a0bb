use shared::errors::RpcError;
use tracing::trace;

use crate::abstract_trait::DynProductGrpcClient;
use crate::controller::form::ProductDraft;
use crate::controller::state::{FormState, ProductListState};
use crate::domain::requests::product::{
    CreateProductRequest, ListProductsQuery, UpdateProductRequest,
};
use crate::domain::response::api::ApiResponse;
use crate::domain::response::product::{DeleteResponse, ProductPage, ProductResponse};

/// Handed out by `begin_*` and checked by `apply_*`. A ticket from a
/// superseded operation no longer matches the controller's sequence
/// number, so its result is dropped instead of clobbering newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpTicket(u64);

/// What the caller should do after applying a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Reload,
}

/// The call a validated submit resolves to.
#[derive(Debug, Clone)]
pub enum SubmitAction {
    Create(CreateProductRequest),
    Update(UpdateProductRequest),
}

/// Owns the product list state and decides every transition on it.
/// Each operation is split into a `begin_*` step that mutates state and
/// returns a ticket, and an `apply_*` step that folds the call result
/// back in. The `load`/`submit`/`delete` methods wire the two halves to
/// the gRPC client for callers that do not need the split.
pub struct ProductListController {
    service: DynProductGrpcClient,
    pub state: ProductListState,
    op_seq: u64,
}

impl ProductListController {
    pub fn new(service: DynProductGrpcClient) -> Self {
        Self {
            service,
            state: ProductListState::default(),
            op_seq: 0,
        }
    }

    fn next_ticket(&mut self) -> OpTicket {
        self.op_seq += 1;
        OpTicket(self.op_seq)
    }

    fn is_stale(&self, ticket: OpTicket) -> bool {
        ticket.0 != self.op_seq
    }

    // ---- load ----

    pub fn begin_load(&mut self) -> (OpTicket, i32, i32) {
        let ticket = self.next_ticket();
        self.state.loading = true;
        self.state.error = None;
        (ticket, self.state.pagination.page, self.state.pagination.size)
    }

    /// Replaces the items and total on success; the page and size stay
    /// whatever the controller last set them to. On failure the previous
    /// items stay visible under the error banner.
    pub fn apply_load(&mut self, ticket: OpTicket, result: Result<ProductPage, RpcError>) {
        if self.is_stale(ticket) {
            trace!("Discarding stale load result (ticket {:?})", ticket);
            return;
        }

        self.state.loading = false;

        match result {
            Ok(page) => {
                self.state.items = page.data;
                self.state.pagination.total = page.pagination.total;
                self.state.error = None;
            }
            Err(e) => {
                self.state.error = Some(format!("Failed to load products: {e}"));
            }
        }
    }

    pub async fn load(&mut self) {
        let (ticket, page, size) = self.begin_load();
        let result = self.service.list(&ListProductsQuery { page, size }).await;
        self.apply_load(ticket, result);
    }

    // ---- submit ----

    /// Validates the draft and, if it passes, starts the create or
    /// update the open form maps to. A validation failure surfaces on
    /// the error banner without starting anything.
    pub fn begin_submit(&mut self) -> Option<(OpTicket, SubmitAction)> {
        self.state.error = None;

        let input = match self.state.form.draft.validate() {
            Ok(input) => input,
            Err(e) => {
                self.state.error = Some(e.to_string());
                return None;
            }
        };

        let action = match &self.state.form.editing {
            Some(product) => SubmitAction::Update(input.as_update_request(product.id)),
            None => SubmitAction::Create(input.as_create_request()),
        };

        let ticket = self.next_ticket();
        self.state.loading = true;
        Some((ticket, action))
    }

    /// On success the form closes and the list wants a reload. On
    /// failure the form stays open with the draft intact so the user
    /// can correct and resubmit.
    pub fn apply_submit(
        &mut self,
        ticket: OpTicket,
        result: Result<ApiResponse<ProductResponse>, RpcError>,
    ) -> Effect {
        if self.is_stale(ticket) {
            trace!("Discarding stale submit result (ticket {:?})", ticket);
            return Effect::None;
        }

        self.state.loading = false;

        match result {
            Ok(_) => {
                self.state.form = FormState::default();
                Effect::Reload
            }
            Err(e) => {
                self.state.error = Some(format!("Operation failed: {e}"));
                Effect::None
            }
        }
    }

    pub async fn submit(&mut self) {
        let Some((ticket, action)) = self.begin_submit() else {
            return;
        };

        let result = match &action {
            SubmitAction::Create(req) => self.service.create(req).await,
            SubmitAction::Update(req) => self.service.update(req).await,
        };

        if self.apply_submit(ticket, result) == Effect::Reload {
            self.load().await;
        }
    }

    // ---- delete ----

    pub fn begin_delete(&mut self) -> OpTicket {
        let ticket = self.next_ticket();
        self.state.loading = true;
        self.state.error = None;
        ticket
    }

    /// A delete only triggers a reload when the backend confirmed it.
    /// A completed call with `success` unset means nothing was removed,
    /// so the message is surfaced and the list left alone.
    pub fn apply_delete(&mut self, ticket: OpTicket, result: Result<DeleteResponse, RpcError>) -> Effect {
        if self.is_stale(ticket) {
            trace!("Discarding stale delete result (ticket {:?})", ticket);
            return Effect::None;
        }

        self.state.loading = false;

        match result {
            Ok(resp) if resp.success => Effect::Reload,
            Ok(resp) => {
                self.state.error = Some(resp.message);
                Effect::None
            }
            Err(e) => {
                self.state.error = Some(format!("Delete failed: {e}"));
                Effect::None
            }
        }
    }

    pub async fn delete(&mut self, id: i64) {
        let ticket = self.begin_delete();
        let result = self.service.delete(id).await;

        if self.apply_delete(ticket, result) == Effect::Reload {
            self.load().await;
        }
    }

    // ---- form ----

    pub fn open_create_form(&mut self) {
        self.state.form.visible = true;
        self.state.form.editing = None;
        self.state.form.draft.clear();
    }

    /// Prefills the form from the product on the current page. Returns
    /// false when the id is not on this page, leaving the form as it was.
    pub fn open_edit_form(&mut self, id: i64) -> bool {
        let Some(product) = self.state.items.iter().find(|p| p.id == id).cloned() else {
            return false;
        };

        self.state.form.draft = ProductDraft::from_product(&product);
        self.state.form.editing = Some(product);
        self.state.form.visible = true;
        true
    }

    pub fn cancel_form(&mut self) {
        self.state.form = FormState::default();
    }

    // ---- pagination ----

    pub fn can_prev_page(&self) -> bool {
        self.state.pagination.page > 0
    }

    pub fn can_next_page(&self) -> bool {
        let p = self.state.pagination;
        (p.page as i64 + 1) * (p.size as i64) < p.total as i64
    }

    /// Moves to the previous page if there is one. The caller reloads
    /// when this returns true.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev_page() {
            return false;
        }
        self.state.pagination.page -= 1;
        true
    }

    /// Moves to the next page if the last known total says one exists.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.state.pagination.page += 1;
        true
    }

    pub fn page_count(&self) -> i32 {
        let p = self.state.pagination;
        if p.size <= 0 {
            return 1;
        }
        ((p.total + p.size - 1) / p.size).max(1)
    }
}

#[cfg(test)]
#[path = "tests/product_list_tests.rs"]
mod tests;
