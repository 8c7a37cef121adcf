//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Settings;
use crate::cursor::{decode_cursor, encode_cursor};
use crate::error::Result;
use crate::pagination::{FetchFoldersRequest, FolderPager, PageRequest, PageResponse};
use crate::source::{load_catalog, sample_catalog, InMemoryCatalog};
use serde_json::{json, Value};
use uuid::Uuid;

/// CLI runner
pub struct Runner {
    cli: Cli,
    settings: Settings,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli, settings: Settings) -> Self {
        Self { cli, settings }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{}", self.render(&output)?);
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<Value> {
        match &self.cli.command {
            Commands::List { org } => self.list(*org),
            Commands::Page { org, limit, cursor } => self.page(*org, *limit, cursor),
            Commands::Walk { org, limit } => self.walk(*org, *limit),
            Commands::Orgs => self.orgs(),
            Commands::EncodeCursor { offset } => Ok(json!({ "cursor": encode_cursor(*offset) })),
            Commands::DecodeCursor { cursor } => {
                Ok(json!({ "offset": decode_cursor(cursor)? }))
            }
        }
    }

    fn render(&self, output: &Value) -> Result<String> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
        };
        Ok(text)
    }

    /// Load the catalog named on the command line, in settings, or the sample
    fn load_catalog(&self) -> Result<InMemoryCatalog> {
        match self.cli.catalog.as_ref().or(self.settings.catalog.as_ref()) {
            Some(path) => load_catalog(path),
            None => {
                tracing::debug!("No catalog configured, using sample catalog");
                sample_catalog()
            }
        }
    }

    fn pager(&self) -> Result<FolderPager<InMemoryCatalog>> {
        Ok(FolderPager::new(self.load_catalog()?))
    }

    fn list(&self, org: Uuid) -> Result<Value> {
        let response = self
            .pager()?
            .get_all(Some(&FetchFoldersRequest::new(org)))?;
        Ok(serde_json::to_value(response)?)
    }

    fn page(&self, org: Uuid, limit: Option<i64>, cursor: &str) -> Result<Value> {
        let limit = limit.unwrap_or(self.settings.page_size);
        let request = PageRequest::new(org, limit).with_cursor(cursor);
        let response = self.pager()?.get_page(Some(&request))?;
        Ok(serde_json::to_value(response)?)
    }

    fn walk(&self, org: Uuid, limit: Option<i64>) -> Result<Value> {
        let limit = limit.unwrap_or(self.settings.page_size);
        let pager = self.pager()?;
        let pages = pager
            .pages(org, limit)
            .collect::<Result<Vec<PageResponse>>>()?;
        Ok(json!({ "pages": pages }))
    }

    fn orgs(&self) -> Result<Value> {
        let orgs: Vec<Value> = self
            .load_catalog()?
            .organizations()
            .into_iter()
            .map(|(id, folders)| json!({ "organization_id": id, "folders": folders }))
            .collect();
        Ok(json!({ "organizations": orgs }))
    }
}
