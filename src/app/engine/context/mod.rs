use std::collections::HashSet;
use std::ffi::CStr;
use std::os::raw::{c_char, c_void};

use anyhow::{Result, anyhow};
use thiserror::Error;
use vulkanalia::Version;
use vulkanalia::loader::{LIBRARY, LibloadingLoader};
use vulkanalia::prelude::v1_0::*;
use vulkanalia::vk::ExtDebugUtilsExtension;
use vulkanalia::window as vk_window;
use winit::window::Window;

use crate::app::engine::context::result::result_name;

mod result;

/// Validation layers and the debug messenger are compiled in for debug
/// builds only.
const VALIDATION_ENABLED: bool = cfg!(debug_assertions);

// Statics rather than consts: we hand out pointers into these names, so
// they need stable addresses.
static VALIDATION_LAYER: vk::ExtensionName =
    vk::ExtensionName::from_bytes(b"VK_LAYER_KHRONOS_validation");

static DEBUG_UTILS_EXTENSION_NAME: vk::ExtensionName =
    vk::ExtensionName::from_bytes(b"VK_EXT_debug_utils");

/// MoltenVK requires the portability enumeration extension from this SDK
/// version onwards.
const PORTABILITY_MACOS_VERSION: Version = Version::new(1, 3, 216);

const EXTENSION_NOT_PRESENT: i32 = -7;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("validation layers requested but not supported")]
    LayersUnsupported,
    #[error("failed to create Vulkan instance: {}", result_name(*.0))]
    InstanceCreation(i32),
    #[error("failed to set up debug messenger: {}", result_name(*.0))]
    MessengerCreation(i32),
}

/// The Vulkan side of the bootstrap: loader, instance, and (in debug
/// builds) the validation messenger.
pub struct Context {
    // The entry owns the loaded Vulkan library and must outlive the
    // instance.
    entry: Entry,
    instance: Instance,
    messenger: Option<vk::DebugUtilsMessengerEXT>,
}

impl Context {
    /// # Safety
    ///
    /// The window must outlive the returned context.
    pub unsafe fn create(window: &Window) -> Result<Self> {
        let loader = LibloadingLoader::new(LIBRARY)?;
        let entry = unsafe { Entry::new(loader) }.map_err(|e| anyhow!("{}", e))?;

        let instance = unsafe { Self::create_instance(window, &entry)? };
        let mut context = Self {
            entry,
            instance,
            messenger: None,
        };

        let available = unsafe {
            context
                .entry
                .enumerate_instance_extension_properties(None)?
        };
        report_extensions(&available);

        // If this fails the partially built context is dropped, which still
        // destroys the instance.
        context.messenger = unsafe { Self::setup_debug_messenger(&context.instance, &available)? };

        Ok(context)
    }

    unsafe fn create_instance(window: &Window, entry: &Entry) -> Result<Instance> {
        let available_layers = unsafe { entry.enumerate_instance_layer_properties()? }
            .iter()
            .map(|l| l.layer_name)
            .collect::<HashSet<_>>();

        tracing::debug!("available layers:");
        for layer in &available_layers {
            let name = unsafe { CStr::from_ptr(layer.as_ptr()) };
            tracing::debug!("  {}", name.to_string_lossy());
        }

        if VALIDATION_ENABLED && !validation_layers_supported(&available_layers) {
            return Err(ContextError::LayersUnsupported.into());
        }

        let layers = enabled_layers(VALIDATION_ENABLED);

        let application_info = vk::ApplicationInfo::builder()
            .application_name(b"Hello Triangle\0")
            .application_version(vk::make_version(1, 0, 0))
            .engine_name(b"No Engine\0")
            .engine_version(vk::make_version(0, 0, 1))
            .api_version(vk::make_version(1, 0, 0));

        let mut extensions = instance_extensions(
            vk_window::get_required_instance_extensions(window),
            VALIDATION_ENABLED,
        );

        // MoltenVK only exposes Vulkan through the portability subset.
        let flags = if cfg!(target_os = "macos")
            && unsafe { entry.version()? } >= PORTABILITY_MACOS_VERSION
        {
            extensions.push(
                vk::KHR_GET_PHYSICAL_DEVICE_PROPERTIES2_EXTENSION
                    .name
                    .as_ptr(),
            );
            extensions.push(vk::KHR_PORTABILITY_ENUMERATION_EXTENSION.name.as_ptr());
            vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR
        } else {
            vk::InstanceCreateFlags::empty()
        };

        let info = vk::InstanceCreateInfo::builder()
            .application_info(&application_info)
            .enabled_layer_names(&layers)
            .enabled_extension_names(&extensions)
            .flags(flags);

        let instance = unsafe { entry.create_instance(&info, None) }
            .map_err(|e| ContextError::InstanceCreation(e.as_raw()))?;
        tracing::info!("Vulkan instance created");

        Ok(instance)
    }

    unsafe fn setup_debug_messenger(
        instance: &Instance,
        available: &[vk::ExtensionProperties],
    ) -> Result<Option<vk::DebugUtilsMessengerEXT>> {
        if !VALIDATION_ENABLED {
            return Ok(None);
        }

        // The messenger functions come from an extension and may be absent
        // even on platforms where instance creation succeeds.
        if !debug_utils_available(available) {
            return Err(ContextError::MessengerCreation(EXTENSION_NOT_PRESENT).into());
        }

        let info = messenger_create_info();
        let messenger = unsafe { instance.create_debug_utils_messenger_ext(&info, None) }
            .map_err(|e| ContextError::MessengerCreation(e.as_raw()))?;
        tracing::info!("debug messenger installed");

        Ok(Some(messenger))
    }

    extern "system" fn debug_callback(
        severity: vk::DebugUtilsMessageSeverityFlagsEXT,
        type_: vk::DebugUtilsMessageTypeFlagsEXT,
        data: *const vk::DebugUtilsMessengerCallbackDataEXT,
        _: *mut c_void,
    ) -> vk::Bool32 {
        let data = unsafe { *data };
        let message = unsafe { CStr::from_ptr(data.message) }.to_string_lossy();

        if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::ERROR {
            tracing::error!("({:?}) {}", type_, message);
        } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::WARNING {
            tracing::warn!("({:?}) {}", type_, message);
        } else if severity >= vk::DebugUtilsMessageSeverityFlagsEXT::INFO {
            tracing::debug!("({:?}) {}", type_, message);
        } else {
            tracing::trace!("({:?}) {}", type_, message);
        }

        vk::FALSE
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        // Messenger before instance; the reverse order is undefined
        // behavior in the driver.
        unsafe {
            if let Some(messenger) = self.messenger.take() {
                self.instance
                    .destroy_debug_utils_messenger_ext(messenger, None);
            }
            self.instance.destroy_instance(None);
        }
        tracing::debug!("Vulkan context destroyed");
    }
}

/// True when every layer the bootstrap requests is present in the
/// platform's layer enumeration.
fn validation_layers_supported(available: &HashSet<vk::ExtensionName>) -> bool {
    available.contains(&VALIDATION_LAYER)
}

fn enabled_layers(validation: bool) -> Vec<*const c_char> {
    if validation {
        vec![VALIDATION_LAYER.as_ptr()]
    } else {
        Vec::new()
    }
}

/// Platform-mandated instance extensions plus, when validation is on, the
/// debug utilities extension.
fn instance_extensions(
    platform: &[&vk::ExtensionName],
    validation: bool,
) -> Vec<*const c_char> {
    let mut extensions = platform.iter().map(|e| e.as_ptr()).collect::<Vec<_>>();
    if validation {
        extensions.push(DEBUG_UTILS_EXTENSION_NAME.as_ptr());
    }
    extensions
}

fn debug_utils_available(extensions: &[vk::ExtensionProperties]) -> bool {
    extensions
        .iter()
        .any(|e| e.extension_name == DEBUG_UTILS_EXTENSION_NAME)
}

fn messenger_create_info() -> vk::DebugUtilsMessengerCreateInfoEXTBuilder<'static> {
    vk::DebugUtilsMessengerCreateInfoEXT::builder()
        .message_severity(
            vk::DebugUtilsMessageSeverityFlagsEXT::VERBOSE
                | vk::DebugUtilsMessageSeverityFlagsEXT::WARNING
                | vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
        )
        .message_type(
            vk::DebugUtilsMessageTypeFlagsEXT::GENERAL
                | vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION
                | vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE,
        )
        .user_callback(Some(Context::debug_callback))
}

/// Diagnostic listing of everything the instance could have enabled.
fn report_extensions(extensions: &[vk::ExtensionProperties]) {
    println!("Available extensions:");
    for extension in extensions {
        let name = unsafe { CStr::from_ptr(extension.extension_name.as_ptr()) };
        println!("  :: {}", name.to_string_lossy());
    }
}
