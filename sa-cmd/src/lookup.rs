//! Organization and store listings.

use anyhow::Context;
use log::info;
use sa_api::{ApiClient, NamedEntity};

/// One `id<TAB>name` line per entity.
pub fn format_entities(entities: &[NamedEntity]) -> String {
    entities
        .iter()
        .map(|entity| format!("{}\t{}\n", entity.id, entity.name))
        .collect()
}

pub async fn run_orgs(client: &ApiClient) -> anyhow::Result<()> {
    let organizations = client
        .organizations()
        .await
        .context("failed to load organizations")?;
    info!("Fetched {} organizations", organizations.len());
    if organizations.is_empty() {
        anyhow::bail!("No valid organizations found");
    }
    print!("{}", format_entities(&organizations));
    Ok(())
}

pub async fn run_stores(client: &ApiClient, organization_id: &str) -> anyhow::Result<()> {
    let stores = client
        .stores(organization_id)
        .await
        .with_context(|| format!("failed to load stores for organization {}", organization_id))?;
    info!(
        "Fetched {} stores for organization {}",
        stores.len(),
        organization_id
    );
    if stores.is_empty() {
        println!("No stores found for this organization.");
    } else {
        print!("{}", format_entities(&stores));
    }
    Ok(())
}
