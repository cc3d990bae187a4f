//! Organization -> store selection cascade.
//!
//! Loading organizations auto-selects the first one, which starts a store
//! load; loading stores auto-selects the first store, which is then emitted
//! to the dashboard. Changing organization clears the store selection and
//! list before the new list is requested, and a store response for anything
//! but the latest request of the currently selected organization is ignored.

use crate::load::{RequestSeq, Ticket};
use log::{info, warn};
use sa_api::{ErrorKind, FetchError, Organization, Store};

pub const ORGANIZATIONS_FAILED: &str = "Failed to load organizations. Please try again.";
pub const STORES_FAILED: &str = "Failed to load stores. Please try again.";
pub const ORGANIZATIONS_EMPTY_BODY: &str = "Invalid response format from server";
pub const STORES_EMPTY_BODY: &str = "Invalid store data format from server";
pub const NO_ORGANIZATIONS: &str = "No valid organizations found";
pub const NO_STORES_HINT: &str = "No stores found for this organization.";

/// A store list request the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoresRequest {
    pub ticket: Ticket,
    pub organization_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorState {
    pub organizations: Vec<Organization>,
    pub stores: Vec<Store>,
    pub selected_organization: Option<String>,
    pub selected_store: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    organization_seq: RequestSeq,
    store_seq: RequestSeq,
}

/// Error slot text for a failed dropdown load.
struct FailureMessages {
    what: &'static str,
    network: &'static str,
    empty_body: &'static str,
}

const ORGANIZATION_FAILURES: FailureMessages = FailureMessages {
    what: "organization",
    network: ORGANIZATIONS_FAILED,
    empty_body: ORGANIZATIONS_EMPTY_BODY,
};

const STORE_FAILURES: FailureMessages = FailureMessages {
    what: "store",
    network: STORES_FAILED,
    empty_body: STORES_EMPTY_BODY,
};

fn failure_message(err: &FetchError, messages: &FailureMessages) -> String {
    match (err.kind(), err) {
        (ErrorKind::NetworkFailure, _) => messages.network.to_string(),
        (ErrorKind::MalformedResponse, FetchError::Malformed(reason)) => {
            format!("Failed to process {} data: {}", messages.what, reason)
        }
        (ErrorKind::MalformedResponse, _) => messages.empty_body.to_string(),
    }
}

impl SelectorState {
    pub fn begin_organizations(&mut self) -> Ticket {
        self.loading = true;
        self.error = None;
        self.organization_seq.issue()
    }

    /// Apply the organizations response. When at least one organization is
    /// valid, the first is selected and its store request is returned.
    pub fn organizations_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Organization>, FetchError>,
    ) -> Option<StoresRequest> {
        if !self.organization_seq.is_current(ticket) {
            return None;
        }
        self.loading = false;

        match result {
            Ok(organizations) => {
                info!("Loaded {} organizations", organizations.len());
                self.organizations = organizations;
                let first = self.organizations.first().map(|org| org.id.clone());
                if first.is_none() {
                    self.error = Some(NO_ORGANIZATIONS.to_string());
                }
                first.and_then(|id| self.select_organization(Some(id)))
            }
            Err(err) => {
                warn!("Error loading organizations: {}", err);
                self.organizations.clear();
                self.error = Some(failure_message(&err, &ORGANIZATION_FAILURES));
                None
            }
        }
    }

    /// Change the selected organization.
    ///
    /// The store selection and store list are cleared right away. Any
    /// in-flight store request is superseded. Returns the store request to
    /// issue, or `None` when the selection was cleared.
    pub fn select_organization(&mut self, organization_id: Option<String>) -> Option<StoresRequest> {
        let organization_id = organization_id.filter(|id| !id.is_empty());
        self.selected_organization = organization_id.clone();
        self.selected_store = None;
        self.stores.clear();
        let ticket = self.store_seq.issue();

        let organization_id = organization_id?;
        self.loading = true;
        self.error = None;
        Some(StoresRequest {
            ticket,
            organization_id,
        })
    }

    /// Apply a stores response. Returns the auto-selected store id to emit.
    pub fn stores_loaded(
        &mut self,
        request: &StoresRequest,
        result: Result<Vec<Store>, FetchError>,
    ) -> Option<String> {
        let for_selected =
            self.selected_organization.as_deref() == Some(request.organization_id.as_str());
        if !self.store_seq.is_current(request.ticket) || !for_selected {
            return None;
        }
        self.loading = false;

        match result {
            Ok(stores) => {
                info!(
                    "Loaded {} stores for organization {}",
                    stores.len(),
                    request.organization_id
                );
                self.stores = stores;
                let first = self.stores.first().map(|store| store.id.clone());
                self.selected_store = first.clone();
                first
            }
            Err(err) => {
                warn!("Error loading stores: {}", err);
                self.stores.clear();
                self.error = Some(failure_message(&err, &STORE_FAILURES));
                None
            }
        }
    }

    /// Change the selected store. Returns the id to emit when it names a
    /// store of the current list.
    pub fn select_store(&mut self, store_id: Option<String>) -> Option<String> {
        let store_id = store_id.filter(|id| self.stores.iter().any(|store| &store.id == id));
        self.selected_store = store_id.clone();
        store_id
    }

    /// Whether to show the "no stores" hint under the store dropdown.
    pub fn show_no_stores_hint(&self) -> bool {
        self.stores.is_empty() && self.selected_organization.is_some() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sa_api::NamedEntity;

    fn named(id: &str, name: &str) -> NamedEntity {
        NamedEntity {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn loaded_with_org_a() -> (SelectorState, StoresRequest) {
        let mut state = SelectorState::default();
        let ticket = state.begin_organizations();
        let request = state
            .organizations_loaded(ticket, Ok(vec![named("a", "Org A"), named("b", "Org B")]))
            .unwrap();
        (state, request)
    }

    #[test]
    fn cascade_selects_first_org_then_first_store() {
        let (mut state, request) = loaded_with_org_a();
        assert_eq!(request.organization_id, "a");
        assert_eq!(state.selected_organization.as_deref(), Some("a"));
        assert!(state.loading);

        let emitted = state.stores_loaded(&request, Ok(vec![named("s1", "One"), named("s2", "Two")]));
        assert_eq!(emitted.as_deref(), Some("s1"));
        assert_eq!(state.selected_store.as_deref(), Some("s1"));
        assert!(!state.loading);
    }

    #[test]
    fn org_change_resets_store_before_list_arrives() {
        let (mut state, request) = loaded_with_org_a();
        state.stores_loaded(&request, Ok(vec![named("s1", "One")]));

        let request_b = state.select_organization(Some("b".to_string())).unwrap();
        assert_eq!(state.selected_store, None);
        assert!(state.stores.is_empty());

        let emitted = state.stores_loaded(&request_b, Ok(vec![named("t1", "Harbor")]));
        assert_eq!(emitted.as_deref(), Some("t1"));
        assert_eq!(state.selected_store.as_deref(), Some("t1"));
    }

    #[test]
    fn late_store_list_from_previous_org_is_ignored() {
        let (mut state, request_a) = loaded_with_org_a();
        let request_b = state.select_organization(Some("b".to_string())).unwrap();

        // Org B answers first, then Org A's slow response arrives.
        state.stores_loaded(&request_b, Ok(vec![named("t1", "Harbor")]));
        let emitted = state.stores_loaded(&request_a, Ok(vec![named("s1", "One")]));

        assert_eq!(emitted, None);
        assert_eq!(state.selected_store.as_deref(), Some("t1"));
        assert_eq!(state.stores, vec![named("t1", "Harbor")]);
    }

    #[test]
    fn clearing_org_clears_stores_without_request() {
        let (mut state, request) = loaded_with_org_a();
        state.stores_loaded(&request, Ok(vec![named("s1", "One")]));

        assert_eq!(state.select_organization(Some(String::new())), None);
        assert_eq!(state.selected_organization, None);
        assert!(state.stores.is_empty());
        assert_eq!(state.selected_store, None);
    }

    #[test]
    fn empty_org_list_is_an_error() {
        let mut state = SelectorState::default();
        let ticket = state.begin_organizations();
        assert_eq!(state.organizations_loaded(ticket, Ok(Vec::new())), None);
        assert_eq!(state.error.as_deref(), Some(NO_ORGANIZATIONS));
        assert!(!state.loading);
    }

    #[test]
    fn org_failures_map_to_messages() {
        let mut state = SelectorState::default();
        let ticket = state.begin_organizations();
        state.organizations_loaded(ticket, Err(FetchError::Network("refused".into())));
        assert_eq!(state.error.as_deref(), Some(ORGANIZATIONS_FAILED));

        let ticket = state.begin_organizations();
        state.organizations_loaded(
            ticket,
            Err(FetchError::Malformed("Response is not an array".into())),
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to process organization data: Response is not an array")
        );
    }

    #[test]
    fn empty_dropdown_bodies_map_to_format_messages() {
        let mut state = SelectorState::default();
        let ticket = state.begin_organizations();
        state.organizations_loaded(ticket, Err(FetchError::EmptyBody));
        assert_eq!(state.error.as_deref(), Some(ORGANIZATIONS_EMPTY_BODY));

        let (mut state, request) = loaded_with_org_a();
        state.stores_loaded(&request, Err(FetchError::EmptyBody));
        assert_eq!(state.error.as_deref(), Some(STORES_EMPTY_BODY));
        assert!(state.stores.is_empty());
    }

    #[test]
    fn dropdown_body_errors_from_parser() {
        use sa_api::parse::{named_list, ORGANIZATIONS_NOT_ARRAY, STORES_NOT_ARRAY};

        let mut state = SelectorState::default();
        let ticket = state.begin_organizations();
        state.organizations_loaded(ticket, named_list("null", ORGANIZATIONS_NOT_ARRAY));
        assert_eq!(state.error.as_deref(), Some("Invalid response format from server"));

        let ticket = state.begin_organizations();
        state.organizations_loaded(ticket, named_list("<html>", ORGANIZATIONS_NOT_ARRAY));
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to process organization data: Response is not an array")
        );

        let (mut state, request) = loaded_with_org_a();
        state.stores_loaded(&request, named_list("{}", STORES_NOT_ARRAY));
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to process store data: Stores response is not an array")
        );
    }

    #[test]
    fn store_failure_sets_error_and_clears_list() {
        let (mut state, request) = loaded_with_org_a();
        let emitted = state.stores_loaded(
            &request,
            Err(FetchError::Rejected {
                status: 500,
                message: None,
            }),
        );
        assert_eq!(emitted, None);
        assert_eq!(state.error.as_deref(), Some(STORES_FAILED));
        assert!(state.stores.is_empty());
    }

    #[test]
    fn empty_store_list_shows_hint_not_error() {
        let (mut state, request) = loaded_with_org_a();
        assert_eq!(state.stores_loaded(&request, Ok(Vec::new())), None);
        assert_eq!(state.error, None);
        assert!(state.show_no_stores_hint());
    }

    #[test]
    fn select_store_only_accepts_listed_stores() {
        let (mut state, request) = loaded_with_org_a();
        state.stores_loaded(&request, Ok(vec![named("s1", "One"), named("s2", "Two")]));

        assert_eq!(state.select_store(Some("s2".into())).as_deref(), Some("s2"));
        assert_eq!(state.select_store(Some("zz".into())), None);
        assert_eq!(state.selected_store, None);
    }
}
