//! Admin access facade.
//!
//! [`AdminConsole`] is the only component that calls the transport. Each
//! method drives one network operation end to end: flip the kind's
//! loading flag, issue the request, write the outcome into the
//! [`AdminStore`], and publish (or clear) the shared error message.
//!
//! Methods return `bool` so a caller knows whether to proceed; the
//! reactive store is the source of truth for rendering, and no failure
//! ever escapes as a panic or `Err`.

use std::sync::Arc;

use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use pawhub_core::{ClinicId, PetshopId, ShelterId, UserId};

use crate::config::AdminApiConfig;
use crate::models::{
    AdminRecord, ClinicPatch, Patchable, PetshopPatch, PlatformStats, ShelterPatch, UserPatch,
};
use crate::normalize::normalize_error;
use crate::store::{AdminStore, ResourceCell};
use crate::transport::{HttpTransport, Transport, TransportError};
use crate::view::PAGE_SIZE;

const USERS_PATH: &str = "admin/users";
const SHELTERS_PATH: &str = "admin/shelters";
const PETSHOPS_PATH: &str = "admin/petshops";
const CLINICS_PATH: &str = "admin/clinics";
const TRANSACTIONS_PATH: &str = "admin/transactions";
const STATS_PATH: &str = "admin/stats";

/// Pagination and filter parameters for list fetches.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
    /// Restrict to verified records only, where the kind supports it.
    pub verified_only: Option<bool>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            verified_only: None,
        }
    }
}

impl ListQuery {
    /// Query for the given 1-based page with the default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Restrict to verified (or unverified) records.
    #[must_use]
    pub fn verified_only(mut self, value: bool) -> Self {
        self.verified_only = Some(value);
        self
    }

    fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page.to_string());
        serializer.append_pair("page_size", &self.page_size.to_string());
        if let Some(verified) = self.verified_only {
            serializer.append_pair("verified", if verified { "true" } else { "false" });
        }
        serializer.finish()
    }
}

/// Wire shape of every list endpoint.
///
/// A response missing either field is malformed and is treated as a
/// transport failure; the store is never updated with partial data.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    items: Vec<T>,
    total: u64,
}

/// Coordinating access layer for all admin list views.
#[derive(Clone)]
pub struct AdminConsole {
    transport: Arc<dyn Transport>,
    store: Arc<AdminStore>,
}

impl std::fmt::Debug for AdminConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConsole").finish_non_exhaustive()
    }
}

impl AdminConsole {
    /// Create a console over an existing transport and store.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, store: Arc<AdminStore>) -> Self {
        Self { transport, store }
    }

    /// Create a console with an HTTP transport and a fresh store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &AdminApiConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Arc::new(transport), Arc::new(AdminStore::new())))
    }

    /// The store this console writes into.
    #[must_use]
    pub fn store(&self) -> &Arc<AdminStore> {
        &self.store
    }

    // =========================================================================
    // Fetch methods
    // =========================================================================

    /// Fetch a page of users.
    #[instrument(skip(self))]
    pub async fn fetch_users(&self, query: &ListQuery) -> bool {
        self.fetch_list(USERS_PATH, self.store.users(), query).await
    }

    /// Fetch a page of shelters.
    #[instrument(skip(self))]
    pub async fn fetch_shelters(&self, query: &ListQuery) -> bool {
        self.fetch_list(SHELTERS_PATH, self.store.shelters(), query)
            .await
    }

    /// Fetch a page of pet shops.
    #[instrument(skip(self))]
    pub async fn fetch_petshops(&self, query: &ListQuery) -> bool {
        self.fetch_list(PETSHOPS_PATH, self.store.petshops(), query)
            .await
    }

    /// Fetch a page of clinics.
    #[instrument(skip(self))]
    pub async fn fetch_clinics(&self, query: &ListQuery) -> bool {
        self.fetch_list(CLINICS_PATH, self.store.clinics(), query)
            .await
    }

    /// Fetch a page of transactions.
    #[instrument(skip(self))]
    pub async fn fetch_transactions(&self, query: &ListQuery) -> bool {
        self.fetch_list(TRANSACTIONS_PATH, self.store.transactions(), query)
            .await
    }

    /// Fetch the platform stats singleton.
    #[instrument(skip(self))]
    pub async fn fetch_stats(&self) -> bool {
        let cell = self.store.stats();
        cell.set_loading(true);
        let result = self
            .transport
            .request(Method::GET, STATS_PATH, None)
            .await
            .and_then(|value| {
                serde_json::from_value::<PlatformStats>(value).map_err(TransportError::from)
            });
        cell.set_loading(false);

        match result {
            Ok(stats) => {
                cell.set(stats);
                self.store.clear_error();
                true
            }
            Err(error) => self.record_failure(STATS_PATH, &error),
        }
    }

    // =========================================================================
    // Mutation methods
    // =========================================================================

    /// Patch a user's flag fields.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> bool {
        self.update_one(format!("{USERS_PATH}/{id}"), self.store.users(), id, patch)
            .await
    }

    /// Patch a shelter's flag fields.
    #[instrument(skip(self), fields(shelter_id = %id))]
    pub async fn update_shelter(&self, id: ShelterId, patch: ShelterPatch) -> bool {
        self.update_one(
            format!("{SHELTERS_PATH}/{id}"),
            self.store.shelters(),
            id,
            patch,
        )
        .await
    }

    /// Patch a pet shop's flag fields.
    #[instrument(skip(self), fields(petshop_id = %id))]
    pub async fn update_petshop(&self, id: PetshopId, patch: PetshopPatch) -> bool {
        self.update_one(
            format!("{PETSHOPS_PATH}/{id}"),
            self.store.petshops(),
            id,
            patch,
        )
        .await
    }

    /// Patch a clinic's flag fields.
    #[instrument(skip(self), fields(clinic_id = %id))]
    pub async fn update_clinic(&self, id: ClinicId, patch: ClinicPatch) -> bool {
        self.update_one(
            format!("{CLINICS_PATH}/{id}"),
            self.store.clinics(),
            id,
            patch,
        )
        .await
    }

    /// Delete a user.
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: UserId) -> bool {
        self.delete_one(format!("{USERS_PATH}/{id}"), self.store.users(), id)
            .await
    }

    /// Delete a shelter.
    #[instrument(skip(self), fields(shelter_id = %id))]
    pub async fn delete_shelter(&self, id: ShelterId) -> bool {
        self.delete_one(format!("{SHELTERS_PATH}/{id}"), self.store.shelters(), id)
            .await
    }

    /// Delete a pet shop.
    #[instrument(skip(self), fields(petshop_id = %id))]
    pub async fn delete_petshop(&self, id: PetshopId) -> bool {
        self.delete_one(format!("{PETSHOPS_PATH}/{id}"), self.store.petshops(), id)
            .await
    }

    /// Delete a clinic.
    #[instrument(skip(self), fields(clinic_id = %id))]
    pub async fn delete_clinic(&self, id: ClinicId) -> bool {
        self.delete_one(format!("{CLINICS_PATH}/{id}"), self.store.clinics(), id)
            .await
    }

    // =========================================================================
    // Generic engine
    // =========================================================================

    /// One GET, one wholesale store write.
    ///
    /// On failure the kind's previous page stays visible; only the
    /// error slot changes.
    async fn fetch_list<T>(&self, path: &str, cell: &ResourceCell<T>, query: &ListQuery) -> bool
    where
        T: AdminRecord + DeserializeOwned,
    {
        cell.set_loading(true);
        let result = self
            .transport
            .request(
                Method::GET,
                &format!("{path}?{}", query.query_string()),
                None,
            )
            .await
            .and_then(|value| {
                serde_json::from_value::<ListResponse<T>>(value).map_err(TransportError::from)
            });
        cell.set_loading(false);

        match result {
            Ok(page) => {
                cell.set_collection(page.items, page.total);
                self.store.clear_error();
                true
            }
            Err(error) => self.record_failure(path, &error),
        }
    }

    /// One PATCH carrying exactly the changed flags; the store is
    /// patched only after the server confirms.
    async fn update_one<T>(
        &self,
        path: String,
        cell: &ResourceCell<T>,
        id: T::Id,
        patch: T::Patch,
    ) -> bool
    where
        T: Patchable,
    {
        cell.set_loading(true);
        let result = match serde_json::to_value(&patch) {
            Ok(body) => self.transport.request(Method::PATCH, &path, Some(body)).await,
            Err(error) => Err(TransportError::from(error)),
        };
        cell.set_loading(false);

        match result {
            Ok(_) => {
                cell.update_record(id, &patch);
                self.store.clear_error();
                true
            }
            Err(error) => self.record_failure(&path, &error),
        }
    }

    /// One DELETE; the row is spliced out after the server confirms.
    /// Deleting an id no longer present locally is a silent no-op.
    async fn delete_one<T>(&self, path: String, cell: &ResourceCell<T>, id: T::Id) -> bool
    where
        T: AdminRecord,
    {
        cell.set_loading(true);
        let result = self.transport.request(Method::DELETE, &path, None).await;
        cell.set_loading(false);

        match result {
            Ok(_) => {
                cell.remove_record(id);
                self.store.clear_error();
                true
            }
            Err(error) => self.record_failure(&path, &error),
        }
    }

    fn record_failure(&self, path: &str, error: &TransportError) -> bool {
        warn!(%error, path, "admin operation failed");
        self.store.set_error(normalize_error(error));
        false
    }
}
