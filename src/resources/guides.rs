use log::debug;

use crate::core::{InvoicexpressError, Result};
use crate::http::{ApiClient, RequestOptions, Transport};
use crate::models::{Guide, GuideKind, GuideState, Message, Output};

/// Operations on one kind of guide.
///
/// Every method is a single request. Arguments of the wrong guide kind are
/// rejected before anything is sent.
#[derive(Debug)]
pub struct GuideResource<'a, T> {
    client: &'a ApiClient<T>,
    kind: GuideKind,
}

impl<'a, T: Transport> GuideResource<'a, T> {
    pub fn new(client: &'a ApiClient<T>, kind: GuideKind) -> Self {
        Self { client, kind }
    }

    pub fn kind(&self) -> GuideKind {
        self.kind
    }

    /// Fetch a guide with all its fields, client, items and totals.
    ///
    /// `GET /{kind}s/{id}.xml`
    pub fn fetch(&self, id: u64, options: &RequestOptions) -> Result<Guide> {
        let path = format!("{}/{id}.xml", self.kind.endpoint());
        self.client
            .get(&path, options)
            .map_err(|e| e.with_resource_id(id))
    }

    /// Create a guide from its base fields.
    ///
    /// Unknown client names create a new client; item names that do not
    /// exist create items and existing ones are updated. An item whose tax
    /// name is unknown gets no tax.
    ///
    /// `POST /{kind}s.xml`
    pub fn create(&self, guide: &Guide, options: &RequestOptions) -> Result<Guide> {
        if guide.kind != self.kind {
            return Err(self.wrong_kind(self.kind.label(), guide.kind));
        }
        let path = format!("{}.xml", self.kind.endpoint());
        debug!("creating {}", self.kind);
        self.client.post(&path, guide, options)
    }

    /// Request a state change. Legality is decided by the server.
    ///
    /// `PUT /{kind}s/{id}/change-state.xml`
    pub fn change_state(
        &self,
        id: u64,
        state: &GuideState,
        options: &RequestOptions,
    ) -> Result<Guide> {
        if state.kind != self.kind {
            return Err(self.wrong_kind(&format!("{} state", self.kind.label()), state.kind));
        }
        let path = format!("{}/{id}/change-state.xml", self.kind.endpoint());
        self.client
            .put(&path, state, options)
            .map_err(|e| e.with_resource_id(id))
    }

    /// Email the guide.
    ///
    /// `PUT /{kind}s/{id}/email-document.xml`
    pub fn send_by_mail(&self, id: u64, message: &Message, options: &RequestOptions) -> Result<()> {
        let path = format!("{}/{id}/email-document.xml", self.kind.endpoint());
        self.client
            .put_ack(&path, message, options)
            .map_err(|e| e.with_resource_id(id))
    }

    /// Ask the server to render the guide's PDF and return its location.
    ///
    /// `GET /api/pdf/{id}.xml`
    pub fn pdf_url(&self, id: u64, options: &RequestOptions) -> Result<Output> {
        let path = format!("api/pdf/{id}.xml");
        self.client
            .get(&path, options)
            .map_err(|e| e.with_resource_id(id))
    }

    fn wrong_kind(&self, expected: &str, got: GuideKind) -> InvoicexpressError {
        InvoicexpressError::Argument(format!(
            "{expected} has the wrong type: expected <{}>, got <{}>",
            self.kind.tag(),
            got.tag()
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn guides(&self, kind: GuideKind) -> GuideResource<'_, T> {
        GuideResource::new(self, kind)
    }

    pub fn transport_guides(&self) -> GuideResource<'_, T> {
        self.guides(GuideKind::Transport)
    }

    pub fn shipping_guides(&self) -> GuideResource<'_, T> {
        self.guides(GuideKind::Shipping)
    }

    pub fn devolution_guides(&self) -> GuideResource<'_, T> {
        self.guides(GuideKind::Devolution)
    }

    /// Fetch a transport guide by id.
    pub fn transport_guide(&self, id: u64, options: &RequestOptions) -> Result<Guide> {
        self.transport_guides().fetch(id, options)
    }

    /// Create a transport guide; `guide.kind` must be [`GuideKind::Transport`].
    pub fn create_transport_guide(&self, guide: &Guide, options: &RequestOptions) -> Result<Guide> {
        self.transport_guides().create(guide, options)
    }

    pub fn update_transport_guide_state(
        &self,
        id: u64,
        state: &GuideState,
        options: &RequestOptions,
    ) -> Result<Guide> {
        self.transport_guides().change_state(id, state, options)
    }

    pub fn transport_guide_mail(
        &self,
        id: u64,
        message: &Message,
        options: &RequestOptions,
    ) -> Result<()> {
        self.transport_guides().send_by_mail(id, message, options)
    }

    pub fn transport_guide_pdf_url(&self, id: u64, options: &RequestOptions) -> Result<Output> {
        self.transport_guides().pdf_url(id, options)
    }
}
