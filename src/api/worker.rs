//! Background request executor.
//!
//! The UI thread never blocks on the network. It pushes [`ApiRequest`]s into
//! a bounded channel; this worker runs each one on its own task and reports
//! the outcome back through the UI event channel, tagged with the view
//! generation that asked for it.

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::page::Page;
use crate::api::query::{DeviceQuery, RecordQuery};
use crate::api::scope::ViewScope;
use crate::domain::{
    Device, DeviceId, DevicePayload, DeviceSummary, Document, MaintenanceRecord, Statistics,
};

/// Capacity of the UI-to-worker channel.
pub const REQUEST_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub scope: ViewScope,
    pub command: ApiCommand,
}

#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// `seq` is echoed back so the list can drop superseded responses.
    ListDevices { seq: u64, query: DeviceQuery },
    GetDevice { id: DeviceId },
    CreateDevice { payload: DevicePayload },
    UpdateDevice { id: DeviceId, payload: DevicePayload },
    DeleteDevice { id: DeviceId },
    LoadStatistics,
    ListMaintenance { device: DeviceId },
    ListDocuments { device: DeviceId },
}

impl ApiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ApiCommand::ListDevices { .. } => "list_devices",
            ApiCommand::GetDevice { .. } => "get_device",
            ApiCommand::CreateDevice { .. } => "create_device",
            ApiCommand::UpdateDevice { .. } => "update_device",
            ApiCommand::DeleteDevice { .. } => "delete_device",
            ApiCommand::LoadStatistics => "device_statistics",
            ApiCommand::ListMaintenance { .. } => "list_maintenance",
            ApiCommand::ListDocuments { .. } => "list_documents",
        }
    }
}

#[derive(Debug)]
pub struct ApiEvent {
    pub generation: u64,
    pub outcome: ApiOutcome,
}

#[derive(Debug)]
pub enum ApiOutcome {
    DevicesListed {
        seq: u64,
        result: Result<Page<DeviceSummary>, ApiError>,
    },
    DeviceLoaded(Result<Device, ApiError>),
    DeviceSaved(Result<Device, ApiError>),
    DeviceDeleted {
        id: DeviceId,
        result: Result<(), ApiError>,
    },
    StatisticsLoaded(Result<Statistics, ApiError>),
    MaintenanceListed(Result<Page<MaintenanceRecord>, ApiError>),
    DocumentsListed(Result<Page<Document>, ApiError>),
}

/// Serve requests until every sender is dropped.
pub async fn run<E>(
    client: ApiClient,
    mut requests: mpsc::Receiver<ApiRequest>,
    events: std_mpsc::Sender<E>,
) where
    E: From<ApiEvent> + Send + 'static,
{
    tracing::debug!(base_url = client.base_url(), "API worker started");

    while let Some(request) = requests.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(serve(client, request, events));
    }

    tracing::debug!("API worker stopped: request channel closed");
}

async fn serve<E>(client: ApiClient, request: ApiRequest, events: std_mpsc::Sender<E>)
where
    E: From<ApiEvent> + Send + 'static,
{
    let ApiRequest { scope, command } = request;
    let generation = scope.generation();
    let name = command.name();

    if scope.is_cancelled() {
        tracing::trace!(generation, command = name, "Skipping request for a closed view");
        return;
    }

    tokio::select! {
        _ = scope.token().cancelled() => {
            tracing::debug!(generation, command = name, "Request cancelled with its view");
        }
        outcome = execute(&client, command) => {
            let event = ApiEvent { generation, outcome };
            if events.send(E::from(event)).is_err() {
                tracing::trace!(command = name, "UI event channel closed, dropping result");
            }
        }
    }
}

async fn execute(client: &ApiClient, command: ApiCommand) -> ApiOutcome {
    match command {
        ApiCommand::ListDevices { seq, query } => ApiOutcome::DevicesListed {
            seq,
            result: client.list_devices(&query).await,
        },
        ApiCommand::GetDevice { id } => ApiOutcome::DeviceLoaded(client.get_device(id).await),
        ApiCommand::CreateDevice { payload } => {
            ApiOutcome::DeviceSaved(client.create_device(&payload).await)
        }
        ApiCommand::UpdateDevice { id, payload } => {
            ApiOutcome::DeviceSaved(client.update_device(id, &payload).await)
        }
        ApiCommand::DeleteDevice { id } => ApiOutcome::DeviceDeleted {
            id,
            result: client.delete_device(id).await,
        },
        ApiCommand::LoadStatistics => {
            ApiOutcome::StatisticsLoaded(client.device_statistics().await)
        }
        ApiCommand::ListMaintenance { device } => ApiOutcome::MaintenanceListed(
            client
                .list_maintenance(&RecordQuery::for_device(device))
                .await,
        ),
        ApiCommand::ListDocuments { device } => ApiOutcome::DocumentsListed(
            client.list_documents(&RecordQuery::for_device(device)).await,
        ),
    }
}
