use crate::domain::{Device, Document, MaintenanceRecord};
use crate::ui::loadable::Loadable;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Specifications,
    Maintenance,
    Documents,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Specifications,
        DetailTab::Maintenance,
        DetailTab::Documents,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailTab::Specifications => "Specifications",
            DetailTab::Maintenance => "Maintenance",
            DetailTab::Documents => "Documents",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DetailTab::Specifications => DetailTab::Maintenance,
            DetailTab::Maintenance => DetailTab::Documents,
            DetailTab::Documents => DetailTab::Specifications,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailTab::Specifications => DetailTab::Documents,
            DetailTab::Maintenance => DetailTab::Specifications,
            DetailTab::Documents => DetailTab::Maintenance,
        }
    }
}

/// Detail screen state. The three loads land independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceDetailState {
    pub device: Loadable<Device>,
    /// Empty until loaded, and stays empty if that load fails.
    pub maintenance: Vec<MaintenanceRecord>,
    pub documents: Vec<Document>,
    pub tab: DetailTab,
    pub confirm_delete: bool,
}

impl UiState for DeviceDetailState {}
