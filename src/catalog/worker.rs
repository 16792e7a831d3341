//! Background executor for store requests.
//!
//! Each command runs in its own task, so completions arrive in whatever
//! order the network produces them. Ordering is resolved by the receiver
//! using the command's ticket.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::images::ImageSource;

use super::client::CatalogApi;
use super::model::CategoryFilter;
use super::request::{FetchCommand, FetchOutcome};

pub type FetchSender = mpsc::UnboundedSender<FetchCommand>;

pub struct CatalogWorker;

impl CatalogWorker {
    /// Starts the command loop on `handle` and returns the sender the UI
    /// submits commands through. The loop ends once every sender is dropped.
    pub fn spawn<F>(
        handle: &Handle,
        api: Arc<dyn CatalogApi>,
        images: Arc<dyn ImageSource>,
        deliver: F,
    ) -> FetchSender
    where
        F: Fn(FetchOutcome) + Send + Sync + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<FetchCommand>();
        let deliver = Arc::new(deliver);
        let task_handle = handle.clone();

        handle.spawn(async move {
            while let Some(command) = rx.recv().await {
                let api = Arc::clone(&api);
                let images = Arc::clone(&images);
                let deliver = Arc::clone(&deliver);
                task_handle.spawn(async move {
                    let outcome = execute(command, api.as_ref(), images.as_ref()).await;
                    deliver(outcome);
                });
            }
            tracing::debug!("Catalog worker stopped: all senders dropped");
        });

        tx
    }
}

async fn execute(
    command: FetchCommand,
    api: &dyn CatalogApi,
    images: &dyn ImageSource,
) -> FetchOutcome {
    match command {
        FetchCommand::Categories { ticket } => {
            let result = api.categories().await;
            FetchOutcome::Categories { ticket, result }
        }
        FetchCommand::Products { ticket, filter } => {
            let result = match &filter {
                CategoryFilter::All => api.all_products().await,
                CategoryFilter::Named(name) => api.products_in(name).await,
            };
            FetchOutcome::Products {
                ticket,
                filter,
                result,
            }
        }
        FetchCommand::Image { url } => {
            let result = images.load(&url).await;
            FetchOutcome::Image { url, result }
        }
    }
}
