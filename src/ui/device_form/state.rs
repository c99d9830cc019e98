use crate::domain::{Device, DeviceId, DeviceStatus, DeviceType, FieldErrors};
use crate::ui::mvi::UiState;

/// Editable fields in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Name,
    DeviceType,
    Manufacturer,
    ModelNumber,
    SerialNumber,
    Location,
    Status,
    AcquisitionDate,
    WarrantyExpiration,
    LastMaintenanceDate,
    NextMaintenanceDate,
    Description,
    PurchasePrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Date,
    Amount,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::Name,
        FormField::DeviceType,
        FormField::Manufacturer,
        FormField::ModelNumber,
        FormField::SerialNumber,
        FormField::Location,
        FormField::Status,
        FormField::AcquisitionDate,
        FormField::WarrantyExpiration,
        FormField::LastMaintenanceDate,
        FormField::NextMaintenanceDate,
        FormField::Description,
        FormField::PurchasePrice,
    ];

    /// Payload key; server-side errors come back under the same name.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::DeviceType => "device_type",
            FormField::Manufacturer => "manufacturer",
            FormField::ModelNumber => "model_number",
            FormField::SerialNumber => "serial_number",
            FormField::Location => "location",
            FormField::Status => "status",
            FormField::AcquisitionDate => "acquisition_date",
            FormField::WarrantyExpiration => "warranty_expiration",
            FormField::LastMaintenanceDate => "last_maintenance_date",
            FormField::NextMaintenanceDate => "next_maintenance_date",
            FormField::Description => "description",
            FormField::PurchasePrice => "purchase_price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Device Name",
            FormField::DeviceType => "Device Type",
            FormField::Manufacturer => "Manufacturer",
            FormField::ModelNumber => "Model Number",
            FormField::SerialNumber => "Serial Number",
            FormField::Location => "Location",
            FormField::Status => "Current Status",
            FormField::AcquisitionDate => "Acquisition Date",
            FormField::WarrantyExpiration => "Warranty Expiration",
            FormField::LastMaintenanceDate => "Last Maintenance Date",
            FormField::NextMaintenanceDate => "Next Scheduled Maintenance",
            FormField::Description => "Description",
            FormField::PurchasePrice => "Purchase Price",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::DeviceType | FormField::Status => FieldKind::Select,
            FormField::AcquisitionDate
            | FormField::WarrantyExpiration
            | FormField::LastMaintenanceDate
            | FormField::NextMaintenanceDate => FieldKind::Date,
            FormField::PurchasePrice => FieldKind::Amount,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Name
                | FormField::DeviceType
                | FormField::Manufacturer
                | FormField::SerialNumber
        )
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Raw form values as typed. Dates are `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceForm {
    pub name: String,
    pub device_type: Option<DeviceType>,
    pub manufacturer: String,
    pub model_number: String,
    pub serial_number: String,
    pub location: String,
    pub status: DeviceStatus,
    pub acquisition_date: String,
    pub warranty_expiration: String,
    pub last_maintenance_date: String,
    pub next_maintenance_date: String,
    pub description: String,
    pub purchase_price: String,
}

impl DeviceForm {
    pub fn from_device(device: &Device) -> Self {
        let date = |value: Option<chrono::NaiveDate>| {
            value
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            name: device.name.clone(),
            device_type: Some(device.device_type),
            manufacturer: device.manufacturer.clone(),
            model_number: device.model_number.clone(),
            serial_number: device.serial_number.clone(),
            location: device.location.clone(),
            status: device.status,
            acquisition_date: date(device.acquisition_date),
            warranty_expiration: date(device.warranty_expiration),
            last_maintenance_date: date(device.last_maintenance_date),
            next_maintenance_date: date(device.next_maintenance_date),
            description: device.description.clone(),
            purchase_price: device
                .purchase_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
        }
    }

    /// Text buffer behind a typed field. Select fields have none.
    pub fn text(&self, field: FormField) -> Option<&String> {
        Some(match field {
            FormField::Name => &self.name,
            FormField::Manufacturer => &self.manufacturer,
            FormField::ModelNumber => &self.model_number,
            FormField::SerialNumber => &self.serial_number,
            FormField::Location => &self.location,
            FormField::AcquisitionDate => &self.acquisition_date,
            FormField::WarrantyExpiration => &self.warranty_expiration,
            FormField::LastMaintenanceDate => &self.last_maintenance_date,
            FormField::NextMaintenanceDate => &self.next_maintenance_date,
            FormField::Description => &self.description,
            FormField::PurchasePrice => &self.purchase_price,
            FormField::DeviceType | FormField::Status => return None,
        })
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        Some(match field {
            FormField::Name => &mut self.name,
            FormField::Manufacturer => &mut self.manufacturer,
            FormField::ModelNumber => &mut self.model_number,
            FormField::SerialNumber => &mut self.serial_number,
            FormField::Location => &mut self.location,
            FormField::AcquisitionDate => &mut self.acquisition_date,
            FormField::WarrantyExpiration => &mut self.warranty_expiration,
            FormField::LastMaintenanceDate => &mut self.last_maintenance_date,
            FormField::NextMaintenanceDate => &mut self.next_maintenance_date,
            FormField::Description => &mut self.description,
            FormField::PurchasePrice => &mut self.purchase_price,
            FormField::DeviceType | FormField::Status => return None,
        })
    }

    /// Value as displayed in the form.
    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::DeviceType => self
                .device_type
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            FormField::Status => self.status.label().to_string(),
            other => self.text(other).cloned().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(DeviceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Waiting for the device being edited.
    Loading,
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceFormState {
    pub mode: FormMode,
    pub phase: FormPhase,
    pub form: DeviceForm,
    pub errors: FieldErrors,
    pub focused: FormField,
}

impl UiState for DeviceFormState {}

impl DeviceFormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(id: DeviceId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            phase: FormPhase::Loading,
            ..Self::default()
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    pub fn is_editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }
}
