//! Command handlers
//!
//! Every handler returns the text to print on stdout. Questions and outcomes of
//! mutating commands go through the dialog broker.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use serde::Serialize;
use stockroom_lib::InventoryClient;
use stockroom_lib::api::Collection;
use stockroom_lib::config::ResourceKind;
use stockroom_lib::dialog::DialogBroker;
use stockroom_lib::dialog::Severity;
use stockroom_lib::model::Named;
use stockroom_lib::router::Router;

use crate::cli::Command;

/// What a command needs to do its work.
pub struct App {
    pub client: InventoryClient,
    pub dialogs: DialogBroker,
    pub router: Router,
}

impl App {
    /// Runs `command`, reporting a failure through a danger alert before
    /// returning it.
    pub async fn execute(&self, command: Command) -> Result<String> {
        match self.run(command).await {
            Ok(output) => Ok(output),
            Err(e) => {
                log::error!("{:#}", e);
                if let Err(dialog) = self
                    .dialogs
                    .alert("Error", format!("{:#}", e), Severity::Danger)
                    .await
                {
                    log::warn!("error alert not shown: {}", dialog);
                }
                Err(e)
            }
        }
    }

    pub async fn run(&self, command: Command) -> Result<String> {
        match command {
            Command::Routes => Ok(self.routes()),
            Command::View { path } => self.view(&path).await,
            Command::List { resource } => {
                let records = self.client.records(resource).list().await?;
                to_json(&records)
            }
            Command::Get { resource, id } => {
                let record = self.client.records(resource).get(id).await?;
                to_json(&record)
            }
            Command::Create { resource, name } => self.create(resource, name).await,
            Command::Delete { resource, id, yes } => self.delete(resource, id, yes).await,
            Command::Items { order_id } => {
                let items = self.client.orders().items(order_id).await?;
                to_json(&items)
            }
            Command::Search { name } => {
                let products = self.client.products().search_by_name(&name).await?;
                to_json(&products)
            }
            Command::Sku { sku } => {
                let product = self.client.products().get_by_sku(&sku).await?;
                to_json(&product)
            }
        }
    }

    fn routes(&self) -> String {
        self.router
            .routes()
            .iter()
            .map(|route| {
                let resource = route.view.resource().map(|r| r.as_str()).unwrap_or("-");
                format!(
                    "{:<26} {:<24} {:<22} {}",
                    route.path,
                    route.name,
                    route.view.title(),
                    resource
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn view(&self, path: &str) -> Result<String> {
        let Some(route) = self.router.resolve(path) else {
            bail!("no screen at '{}'", path);
        };
        log::info!("view: {} -> {}", path, route.name);

        let header = format!("# {}", route.view.title());
        match route.view.resource() {
            Some(kind) => {
                let records = self.client.records(kind).list().await?;
                Ok(format!("{}\n{}", header, to_json(&records)?))
            }
            None => Ok(header),
        }
    }

    async fn create(&self, kind: ResourceKind, name: Option<String>) -> Result<String> {
        if !is_named(kind) {
            bail!("{} cannot be created from just a name", kind);
        }

        let name = match name {
            Some(name) => name,
            None => {
                let answer = self
                    .dialogs
                    .prompt(format!("New {}", kind.singular()), "Name", "", Severity::Info)
                    .await?;
                match answer {
                    Some(name) => name,
                    None => return Ok("cancelled".to_string()),
                }
            }
        };

        let name = name.trim().to_string();
        if name.is_empty() {
            bail!("a name is required");
        }

        let created = match kind {
            ResourceKind::Categories => create_named(self.client.categories(), name).await?,
            ResourceKind::Colors => create_named(self.client.colors(), name).await?,
            ResourceKind::Sizes => create_named(self.client.sizes(), name).await?,
            ResourceKind::Genders => create_named(self.client.genders(), name).await?,
            ResourceKind::States => create_named(self.client.states(), name).await?,
            ResourceKind::OrderEmails => create_named(self.client.order_emails(), name).await?,
            other => bail!("{} cannot be created from just a name", other),
        };

        self.dialogs
            .alert(
                "Created",
                format!("New {} saved", kind.singular()),
                Severity::Success,
            )
            .await?;
        to_json(&created)
    }

    async fn delete(&self, kind: ResourceKind, id: i64, skip_confirm: bool) -> Result<String> {
        if !skip_confirm {
            let confirmed = self
                .dialogs
                .confirm(
                    "Delete?",
                    format!("Remove {} {}? This cannot be undone.", kind.singular(), id),
                    Severity::Warning,
                )
                .await?;
            if !confirmed {
                return Ok(format!("kept {} {}", kind.singular(), id));
            }
        }

        self.client
            .records(kind)
            .delete(id)
            .await
            .with_context(|| format!("deleting {} {}", kind.singular(), id))?;

        self.dialogs
            .alert(
                "Deleted",
                format!("{} {} removed", kind.singular(), id),
                Severity::Success,
            )
            .await?;
        Ok(format!("deleted {} {}", kind.singular(), id))
    }
}

/// Catalogs whose records are just a name.
fn is_named(kind: ResourceKind) -> bool {
    matches!(
        kind,
        ResourceKind::Categories
            | ResourceKind::Colors
            | ResourceKind::Sizes
            | ResourceKind::Genders
            | ResourceKind::States
            | ResourceKind::OrderEmails
    )
}

async fn create_named<T: Named>(
    collection: Collection<'_, T>,
    name: String,
) -> Result<serde_json::Value> {
    let created = collection.create(&T::draft(name)).await?;
    Ok(serde_json::to_value(created)?)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
