//! Organization and store dropdowns.
//!
//! On mount the organization list is fetched and the first organization is
//! selected, which loads its stores; the first store is then emitted through
//! `on_store_change`. The cascade itself lives in [`SelectorState`].

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use log::info;
use sa_api::ApiClient;
use sa_data::load::Ticket;
use sa_data::selector::{SelectorState, StoresRequest, NO_STORES_HINT};

#[derive(Props, Clone, PartialEq)]
pub struct StoreSelectorProps {
    /// Called with the id of every store that becomes selected
    pub on_store_change: EventHandler<String>,
}

async fn load_organizations(
    api: ApiClient,
    mut selector: Signal<SelectorState>,
    ticket: Ticket,
    on_store_change: EventHandler<String>,
) {
    info!("Loading organizations");
    let result = api.organizations().await;
    let request = selector.write().organizations_loaded(ticket, result);
    if let Some(request) = request {
        load_stores(api, selector, request, on_store_change).await;
    }
}

async fn load_stores(
    api: ApiClient,
    mut selector: Signal<SelectorState>,
    request: StoresRequest,
    on_store_change: EventHandler<String>,
) {
    info!("Loading stores for organization {}", request.organization_id);
    let result = api.stores(&request.organization_id).await;
    let emitted = selector.write().stores_loaded(&request, result);
    if let Some(store_id) = emitted {
        on_store_change.call(store_id);
    }
}

#[component]
pub fn StoreSelector(props: StoreSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let mut selector = use_signal(SelectorState::default);
    let on_store_change = props.on_store_change;

    use_effect(move || {
        let api = state.api.peek().clone();
        let ticket = selector.write().begin_organizations();
        spawn(load_organizations(api, selector, ticket, on_store_change));
    });

    let on_organization_change = move |evt: Event<FormData>| {
        let request = selector.write().select_organization(Some(evt.value()));
        if let Some(request) = request {
            let api = state.api.peek().clone();
            spawn(load_stores(api, selector, request, on_store_change));
        }
    };

    let on_store_select = move |evt: Event<FormData>| {
        let store_id = selector.write().select_store(Some(evt.value()));
        if let Some(store_id) = store_id {
            on_store_change.call(store_id);
        }
    };

    let current = selector.read();
    let selected_organization = current.selected_organization.clone().unwrap_or_default();
    let selected_store = current.selected_store.clone().unwrap_or_default();

    rsx! {
        div {
            style: "background: #fff; border: 1px solid #dee2e6; border-radius: 6px; margin-bottom: 16px;",
            div {
                style: "padding: 10px 16px; border-bottom: 1px solid #dee2e6; background: #f8f9fa; font-weight: 600;",
                "Select Organization and Store"
            }
            div {
                style: "padding: 16px;",
                if current.loading {
                    LoadingSpinner { message: "Loading organizations...".to_string() }
                } else if let Some(error) = current.error.clone() {
                    ErrorDisplay { message: error }
                } else {
                    div {
                        style: "margin-bottom: 12px;",
                        label {
                            r#for: "organization-select",
                            style: "display: block; font-weight: bold; margin-bottom: 4px;",
                            "Organization"
                        }
                        select {
                            id: "organization-select",
                            style: "width: 100%; padding: 4px;",
                            onchange: on_organization_change,
                            option { value: "", selected: selected_organization.is_empty(), "Select an organization" }
                            for organization in current.organizations.iter() {
                                option {
                                    key: "{organization.id}",
                                    value: "{organization.id}",
                                    selected: organization.id == selected_organization,
                                    "{organization.name}"
                                }
                            }
                        }
                    }
                    div {
                        label {
                            r#for: "store-select",
                            style: "display: block; font-weight: bold; margin-bottom: 4px;",
                            "Store"
                        }
                        select {
                            id: "store-select",
                            style: "width: 100%; padding: 4px;",
                            disabled: current.stores.is_empty(),
                            onchange: on_store_select,
                            option { value: "", selected: selected_store.is_empty(), "Select a store" }
                            for store in current.stores.iter() {
                                option {
                                    key: "{store.id}",
                                    value: "{store.id}",
                                    selected: store.id == selected_store,
                                    "{store.name}"
                                }
                            }
                        }
                        if current.show_no_stores_hint() {
                            small {
                                style: "color: #dc3545;",
                                "{NO_STORES_HINT}"
                            }
                        }
                    }
                }
            }
        }
    }
}
