use crate::api::{ApiCommand, ApiEvent, ApiOutcome, ApiRequest, ViewScope};
use crate::domain::DeviceId;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::device_detail::{DeviceDetailIntent, DeviceDetailReducer, DeviceDetailState};
use crate::ui::device_form::{
    build_payload, DeviceFormIntent, DeviceFormReducer, DeviceFormState, FormMode, FormPhase,
};
use crate::ui::device_list::{DeviceListIntent, DeviceListReducer, DeviceListState};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// Screen currently shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Dashboard,
    Devices,
    NewDevice,
    EditDevice(DeviceId),
    DeviceDetail(DeviceId),
}

impl Route {
    /// Where Esc leads from this screen.
    pub fn parent(self) -> Option<Route> {
        match self {
            Route::Dashboard => None,
            Route::Devices | Route::NewDevice => Some(Route::Dashboard),
            Route::EditDevice(id) => Some(Route::DeviceDetail(id)),
            Route::DeviceDetail(_) => Some(Route::Devices),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Devices => "Devices",
            Route::NewDevice => "New Device",
            Route::EditDevice(_) => "Edit Device",
            Route::DeviceDetail(_) => "Device Details",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient message; expires after a number of ticks or on the next key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    expires_at: u64,
}

pub type ApiRequestSender = mpsc::Sender<ApiRequest>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    /// Scope of the current screen instance; renewed on every navigation.
    scope: ViewScope,
    api_sender: Option<ApiRequestSender>,
    device_list: DeviceListState,
    device_form: DeviceFormState,
    device_detail: DeviceDetailState,
    dashboard: DashboardState,
    notice: Option<Notice>,
    notice_ticks: u32,
    ticks: u64,
    list_seq: u64,
}

impl App {
    pub fn new(notice_ticks: u32) -> Self {
        Self {
            should_quit: false,
            route: Route::Dashboard,
            scope: ViewScope::root(),
            api_sender: None,
            device_list: DeviceListState::default(),
            device_form: DeviceFormState::default(),
            device_detail: DeviceDetailState::default(),
            dashboard: DashboardState::default(),
            notice: None,
            notice_ticks,
            ticks: 0,
            list_seq: 0,
        }
    }

    pub fn set_command_sender(&mut self, sender: ApiRequestSender) {
        self.api_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn scope_generation(&self) -> u64 {
        self.scope.generation()
    }

    pub fn device_list(&self) -> &DeviceListState {
        &self.device_list
    }

    pub fn device_form(&self) -> &DeviceFormState {
        &self.device_form
    }

    pub fn device_detail(&self) -> &DeviceDetailState {
        &self.device_detail
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Enter `route` with fresh state.
    ///
    /// The previous screen's scope is cancelled first, so its outstanding
    /// requests are aborted and any late results are ignored.
    pub fn navigate(&mut self, route: Route) {
        self.scope.renew();
        self.route = route;
        tracing::debug!(?route, generation = self.scope.generation(), "Entering screen");

        match route {
            Route::Dashboard => {
                self.dashboard = DashboardState::default();
                self.send(ApiCommand::LoadStatistics);
            }
            Route::Devices => {
                self.device_list = DeviceListState::default();
                self.request_device_list();
            }
            Route::NewDevice => {
                self.device_form = DeviceFormState::create();
            }
            Route::EditDevice(id) => {
                self.device_form = DeviceFormState::edit(id);
                self.send(ApiCommand::GetDevice { id });
            }
            Route::DeviceDetail(id) => {
                self.device_detail = DeviceDetailState::default();
                self.send(ApiCommand::GetDevice { id });
                self.send(ApiCommand::ListMaintenance { device: id });
                self.send(ApiCommand::ListDocuments { device: id });
            }
        }
    }

    pub fn navigate_back(&mut self) {
        if let Some(parent) = self.route.parent() {
            self.navigate(parent);
        }
    }

    // ========================================================================
    // Device list (MVI pattern)
    // ========================================================================

    /// Dispatch to the list reducer; a changed query triggers exactly one load.
    pub fn dispatch_list(&mut self, intent: DeviceListIntent) {
        let before = self.device_list.query();
        dispatch_mvi!(self, device_list, DeviceListReducer, intent);
        if self.device_list.query() != before {
            self.request_device_list();
        }
    }

    pub fn request_device_list(&mut self) {
        self.list_seq += 1;
        let seq = self.list_seq;
        dispatch_mvi!(
            self,
            device_list,
            DeviceListReducer,
            DeviceListIntent::LoadStarted { seq }
        );
        let query = self.device_list.query();
        self.send(ApiCommand::ListDevices { seq, query });
    }

    pub fn open_selected_device(&mut self) {
        if let Some(id) = self.device_list.selected_device().map(|d| d.id) {
            self.navigate(Route::DeviceDetail(id));
        }
    }

    pub fn edit_selected_device(&mut self) {
        if let Some(id) = self.device_list.selected_device().map(|d| d.id) {
            self.navigate(Route::EditDevice(id));
        }
    }

    pub fn confirm_list_delete(&mut self) {
        let Some(id) = self.device_list.pending_delete else {
            return;
        };
        dispatch_mvi!(
            self,
            device_list,
            DeviceListReducer,
            DeviceListIntent::DeleteConfirmed
        );
        self.send(ApiCommand::DeleteDevice { id });
    }

    // ========================================================================
    // Device form (MVI pattern)
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: DeviceFormIntent) {
        dispatch_mvi!(self, device_form, DeviceFormReducer, intent);
    }

    /// Validate locally and send the create/update request if valid.
    pub fn submit_form(&mut self) {
        if self.device_form.phase != FormPhase::Editing {
            return;
        }
        match build_payload(&self.device_form.form) {
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "Form blocked by validation");
                self.dispatch_form(DeviceFormIntent::ValidationFailed(errors));
            }
            Ok(payload) => {
                self.dispatch_form(DeviceFormIntent::SubmitStarted);
                let command = match self.device_form.mode {
                    FormMode::Create => ApiCommand::CreateDevice { payload },
                    FormMode::Edit(id) => ApiCommand::UpdateDevice { id, payload },
                };
                if !self.send(command) {
                    self.dispatch_form(DeviceFormIntent::SubmitFailed);
                }
            }
        }
    }

    // ========================================================================
    // Device detail (MVI pattern)
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DeviceDetailIntent) {
        dispatch_mvi!(self, device_detail, DeviceDetailReducer, intent);
    }

    pub fn confirm_detail_delete(&mut self) {
        if !self.device_detail.confirm_delete {
            return;
        }
        let Some(id) = self.device_detail.device.loaded().map(|d| d.id) else {
            return;
        };
        self.dispatch_detail(DeviceDetailIntent::CancelDelete);
        self.send(ApiCommand::DeleteDevice { id });
    }

    // ========================================================================
    // Dashboard (MVI pattern)
    // ========================================================================

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    pub fn open_selected_activity(&mut self) {
        if let Some(id) = self.dashboard.selected_activity() {
            self.navigate(Route::DeviceDetail(id));
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_tick(&mut self) {
        self.ticks += 1;
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| self.ticks >= notice.expires_at)
        {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.set_notice(NoticeKind::Info, message.into());
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.set_notice(NoticeKind::Error, message.into());
    }

    fn set_notice(&mut self, kind: NoticeKind, message: String) {
        self.notice = Some(Notice {
            kind,
            message,
            expires_at: self.ticks + u64::from(self.notice_ticks),
        });
    }

    /// Apply an API result to the screen that requested it.
    ///
    /// Results from an older screen instance are dropped.
    pub fn on_api_event(&mut self, event: ApiEvent) {
        if event.generation != self.scope.generation() {
            tracing::trace!(
                event_generation = event.generation,
                current_generation = self.scope.generation(),
                "Dropping result for a closed screen"
            );
            return;
        }

        match event.outcome {
            ApiOutcome::DevicesListed { seq, result } => match result {
                Ok(page) => self.dispatch_list(DeviceListIntent::Loaded { seq, page }),
                Err(err) => {
                    tracing::warn!(error = %err, "Error loading devices");
                    self.dispatch_list(DeviceListIntent::LoadFailed { seq });
                    self.show_error("Failed to load devices");
                }
            },
            ApiOutcome::DeviceLoaded(result) => match (self.route, result) {
                (Route::EditDevice(_), Ok(device)) => {
                    self.dispatch_form(DeviceFormIntent::Loaded(device));
                }
                (Route::EditDevice(_), Err(err)) => {
                    tracing::warn!(error = %err, "Error loading device for edit");
                    self.show_error("Failed to load device");
                    self.navigate(Route::Devices);
                }
                (Route::DeviceDetail(_), Ok(device)) => {
                    self.dispatch_detail(DeviceDetailIntent::DeviceLoaded(device));
                }
                (Route::DeviceDetail(_), Err(err)) => {
                    tracing::warn!(error = %err, "Error loading device");
                    let message = if err.status() == Some(404) {
                        "Device not found".to_string()
                    } else {
                        format!("Failed to load device: {}", err.user_message())
                    };
                    self.dispatch_detail(DeviceDetailIntent::DeviceFailed(message));
                }
                _ => {}
            },
            ApiOutcome::DeviceSaved(result) => match result {
                Ok(device) => {
                    let message = match self.device_form.mode {
                        FormMode::Create => format!("Device '{}' registered", device.name),
                        FormMode::Edit(_) => format!("Device '{}' updated", device.name),
                    };
                    tracing::info!(id = %device.id, "Device saved");
                    self.show_info(message);
                    self.navigate(Route::Devices);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Error saving device");
                    match err.field_errors() {
                        Some(errors) => {
                            self.dispatch_form(DeviceFormIntent::SubmitRejected(errors));
                        }
                        None => {
                            self.dispatch_form(DeviceFormIntent::SubmitFailed);
                            self.show_error("Failed to save device");
                        }
                    }
                }
            },
            ApiOutcome::DeviceDeleted { id, result } => match result {
                Ok(()) => {
                    tracing::info!(%id, "Device deleted");
                    self.show_info("Device deleted");
                    match self.route {
                        Route::Devices => self.request_device_list(),
                        _ => self.navigate(Route::Devices),
                    }
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "Error deleting device");
                    self.show_error("Failed to delete device");
                }
            },
            ApiOutcome::StatisticsLoaded(result) => match result {
                Ok(stats) => self.dispatch_dashboard(DashboardIntent::Loaded(stats)),
                Err(err) => {
                    tracing::warn!(error = %err, "Error loading statistics");
                    self.dispatch_dashboard(DashboardIntent::Failed(format!(
                        "Failed to load statistics: {}",
                        err.user_message()
                    )));
                }
            },
            ApiOutcome::MaintenanceListed(result) => match result {
                Ok(page) => {
                    self.dispatch_detail(DeviceDetailIntent::MaintenanceLoaded(page.items));
                }
                Err(err) => tracing::warn!(error = %err, "Error loading maintenance records"),
            },
            ApiOutcome::DocumentsListed(result) => match result {
                Ok(page) => self.dispatch_detail(DeviceDetailIntent::DocumentsLoaded(page.items)),
                Err(err) => tracing::warn!(error = %err, "Error loading documents"),
            },
        }
    }

    fn send(&mut self, command: ApiCommand) -> bool {
        let name = command.name();
        let request = ApiRequest {
            scope: self.scope.clone(),
            command,
        };
        let result = match &self.api_sender {
            Some(sender) => sender.try_send(request),
            None => return false,
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(command = name, error = %err, "API request not sent");
                self.show_error(format!("Request not sent: {}", err));
                false
            }
        }
    }
}
