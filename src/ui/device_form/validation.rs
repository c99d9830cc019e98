//! Local form checks and payload coercion.
//!
//! Everything here is synchronous and pure. A form that fails validation
//! never reaches the network.

use chrono::NaiveDate;

use crate::domain::{DevicePayload, FieldErrors};
use crate::ui::device_form::state::{DeviceForm, FieldKind, FormField};

const NOT_SET: &str = "Not set";
const MISSING: &str = "Missing";

fn required_message(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Device name is required.",
        FormField::DeviceType => "Device type is required.",
        FormField::Manufacturer => "Manufacturer is required.",
        FormField::SerialNumber => "Serial number is required.",
        _ => "This field is required.",
    }
}

/// Field-keyed problems with the form; empty when it can be submitted.
pub fn validate(form: &DeviceForm) -> FieldErrors {
    build_payload(form).err().unwrap_or_default()
}

/// Coerce the form into a request body, or report every invalid field.
pub fn build_payload(form: &DeviceForm) -> Result<DevicePayload, FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in FormField::ALL.into_iter().filter(|f| f.is_required()) {
        let present = match field {
            FormField::DeviceType => form.device_type.is_some(),
            other => form
                .text(other)
                .is_some_and(|value| !value.trim().is_empty()),
        };
        if !present {
            errors.insert(field.key().to_string(), required_message(field).to_string());
        }
    }

    let mut date = |field: FormField| -> Option<NaiveDate> {
        let raw = form.text(field).map(|v| v.trim()).unwrap_or_default();
        match parse_date(raw) {
            Ok(value) => value,
            Err(message) => {
                errors.insert(field.key().to_string(), message);
                None
            }
        }
    };
    let acquisition_date = date(FormField::AcquisitionDate);
    let warranty_expiration = date(FormField::WarrantyExpiration);
    let last_maintenance_date = date(FormField::LastMaintenanceDate);
    let next_maintenance_date = date(FormField::NextMaintenanceDate);

    let purchase_price = match parse_amount(form.purchase_price.trim()) {
        Ok(value) => value,
        Err(message) => {
            errors.insert(FormField::PurchasePrice.key().to_string(), message);
            None
        }
    };

    let Some(device_type) = form.device_type.filter(|_| errors.is_empty()) else {
        return Err(errors);
    };

    Ok(DevicePayload {
        name: form.name.trim().to_string(),
        device_type,
        manufacturer: form.manufacturer.trim().to_string(),
        model_number: form.model_number.trim().to_string(),
        serial_number: form.serial_number.trim().to_string(),
        location: form.location.trim().to_string(),
        status: form.status,
        acquisition_date,
        warranty_expiration,
        last_maintenance_date,
        next_maintenance_date,
        description: form.description.trim().to_string(),
        purchase_price,
    })
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "Enter a valid date (YYYY-MM-DD).".to_string())
}

fn parse_amount(raw: &str) -> Result<Option<f64>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err("Enter a valid amount.".to_string()),
    }
}

/// Live preview shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSummary {
    pub name: String,
    pub device_type: String,
    pub serial_number: String,
    pub status: String,
    /// Required fields still empty.
    pub missing_required: usize,
}

pub fn summarize(form: &DeviceForm) -> FormSummary {
    let or = |value: &str, fallback: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.to_string()
        }
    };
    let missing_required = FormField::ALL
        .into_iter()
        .filter(|f| f.is_required())
        .filter(|f| match f.kind() {
            FieldKind::Select => form.device_type.is_none(),
            _ => form.text(*f).map_or(true, |v| v.trim().is_empty()),
        })
        .count();

    FormSummary {
        name: or(&form.name, NOT_SET),
        device_type: form
            .device_type
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
        serial_number: or(&form.serial_number, MISSING),
        status: form.status.label().to_string(),
        missing_required,
    }
}
