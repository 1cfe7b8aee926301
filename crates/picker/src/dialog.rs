//! Picker dialog controller.
//!
//! The host runtime owns the DOM, the picker widget, and the modal API. The
//! adapter reaches them only through [`DialogHost`], so the controller can
//! run against any host implementation, including in-memory test hosts.
//!
//! # Flow
//!
//! 1. The field editor calls [`open_dialog`], which asks the host to open the
//!    app's modal with fixed layout options
//! 2. Inside the modal, [`render_dialog`] prepares the container and hands
//!    the host picker a [`ProductCatalog`] wired to the installation
//! 3. When the editor confirms, the host closes the modal with the selected
//!    SKUs, which [`open_dialog`] returns

use std::future::Future;
use std::sync::Arc;

use sku_picker_core::FieldType;

use crate::catalog::ProductCatalog;
use crate::error::{HostError, PickerError};
use crate::params::InstallationParameters;

/// ID of the element the picker renders into.
pub const DIALOG_CONTAINER_ID: &str = "sku-picker-dialog";

/// Width of the picker modal, in pixels.
pub const DIALOG_WIDTH: u32 = 1400;

/// Layout forced onto the dialog container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLayout {
    /// `display: flex; flex-direction: column`
    FlexColumn,
}

/// Where the host places the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPosition {
    Center,
}

/// Options passed to the host when opening the picker modal.
#[derive(Debug, Clone)]
pub struct DialogOptions {
    pub title: String,
    pub position: DialogPosition,
    pub width: u32,
    pub allow_height_overflow: bool,
    pub should_close_on_overlay_click: bool,
    pub should_close_on_escape_press: bool,
    /// Parameters the dialog instance needs to build its own catalog.
    pub parameters: InstallationParameters,
    pub field_type: FieldType,
}

/// Everything the host picker widget needs to render.
#[derive(Clone)]
pub struct PickerOptions {
    pub catalog: Arc<dyn ProductCatalog>,
    /// Label for the picker's confirm button.
    pub make_cta_text: fn(&FieldType) -> &'static str,
    /// Whether the field should refuse further selections.
    pub is_disabled: fn(&[String], &InstallationParameters) -> bool,
}

impl std::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerOptions").finish_non_exhaustive()
    }
}

/// Capabilities the host runtime provides to the dialog.
pub trait DialogHost: Send + Sync {
    /// Find the container element and apply `layout` to it.
    ///
    /// # Errors
    ///
    /// Returns `HostError::ContainerNotFound` if no element has that ID.
    fn prepare_container(&self, container_id: &str, layout: ContainerLayout)
    -> Result<(), HostError>;

    /// Render the host picker widget into the container.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Render` if the widget fails to mount.
    fn render_picker(&self, container_id: &str, options: PickerOptions) -> Result<(), HostError>;

    /// Keep the host window sized to the dialog's content.
    fn start_auto_resizer(&self);

    /// Open this app in a modal and resolve with whatever it closes with.
    fn open_current_app(
        &self,
        options: DialogOptions,
    ) -> impl Future<Output = Result<serde_json::Value, HostError>> + Send;
}

/// Label for the picker's confirm button.
#[must_use]
pub const fn make_cta_text(field_type: &FieldType) -> &'static str {
    if field_type.accepts_multiple() {
        "Select products"
    } else {
        "Select a product"
    }
}

/// Whether the field is disabled. The picker never restricts selection.
#[must_use]
pub const fn is_disabled(_current_value: &[String], _parameters: &InstallationParameters) -> bool {
    false
}

/// Render the picker dialog into the host.
///
/// # Errors
///
/// Returns `PickerError::Host` if the container is missing or the picker
/// fails to render. Auto-resize is only started after a successful render.
#[tracing::instrument(skip_all)]
pub fn render_dialog<H>(host: &H, catalog: Arc<dyn ProductCatalog>) -> Result<(), PickerError>
where
    H: DialogHost,
{
    host.prepare_container(DIALOG_CONTAINER_ID, ContainerLayout::FlexColumn)?;
    host.render_picker(
        DIALOG_CONTAINER_ID,
        PickerOptions {
            catalog,
            make_cta_text,
            is_disabled,
        },
    )?;
    host.start_auto_resizer();
    Ok(())
}

/// Open the picker modal and return the SKUs the editor selected.
///
/// A dismissed dialog, or any result that is not a list, yields an empty
/// list. Non-string entries in a list are skipped.
///
/// # Errors
///
/// Returns `PickerError::Host` if the host fails to open the modal.
#[tracing::instrument(skip(host, parameters))]
pub async fn open_dialog<H>(
    host: &H,
    parameters: &InstallationParameters,
    field_type: &FieldType,
) -> Result<Vec<String>, PickerError>
where
    H: DialogHost,
{
    let options = DialogOptions {
        title: make_cta_text(field_type).to_string(),
        position: DialogPosition::Center,
        width: DIALOG_WIDTH,
        allow_height_overflow: true,
        should_close_on_overlay_click: true,
        should_close_on_escape_press: true,
        parameters: parameters.clone(),
        field_type: field_type.clone(),
    };

    let result = host.open_current_app(options).await?;
    Ok(selected_skus(result))
}

/// Normalize a modal result into a list of SKUs.
fn selected_skus(result: serde_json::Value) -> Vec<String> {
    match result {
        serde_json::Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::String(sku) => Some(sku),
                _ => None,
            })
            .collect(),
        _ => {
            tracing::debug!("Dialog closed without a selection");
            Vec::new()
        }
    }
}
