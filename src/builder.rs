//=========================================================================
// Device Builder
//
// Fluent configuration of `CreationParameters` and device construction.
//
// Architecture:
// ```text
//     DeviceBuilder  ──build()──>  WinitDevice  ──run()──>  [frame loop]
//         │
//         ├─ with_driver()
//         ├─ with_window_size() / with_fullscreen()
//         ├─ with_bits() / with_z_buffer_bits() / with_stencil_buffer()
//         ├─ with_anti_alias() / with_alpha_channel() / with_vsync()
//         └─ with_title()
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::device::DeviceError;
use crate::core::params::{CreationParameters, DriverType};
use crate::platform::WinitDevice;

//=== DeviceBuilder =======================================================

/// Builder for configuring and constructing a [`WinitDevice`].
///
/// # Default Values
///
/// - **Driver**: OpenGL ES 2.0
/// - **Window**: 800x600, windowed, titled "Untitled"
/// - **Framebuffer**: 32 bit colour, 24 bit depth, stencil, no alpha
/// - **Anti-aliasing**: off; **vsync**: off
///
/// # Examples
///
/// ```no_run
/// use aetheric_device::prelude::*;
///
/// let mut device = DeviceBuilder::new()
///     .with_driver(DriverType::OpenGl)
///     .with_window_size(1280, 720)
///     .with_anti_alias(4)
///     .with_title("Viewer")
///     .build()?;
///
/// while device.run() {
///     // draw, then swap through the context manager
/// }
/// # Ok::<(), DeviceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceBuilder {
    params: CreationParameters,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing parameters.
    pub fn from_params(params: CreationParameters) -> Self {
        Self { params }
    }

    pub fn with_driver(mut self, driver: DriverType) -> Self {
        self.params.driver_type = driver;
        self
    }

    /// Sets the inner window size in physical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be non-zero, got {}x{}",
            width,
            height
        );
        self.params.window_size = (width, height);
        self
    }

    /// Colour depth: 16 or 32.
    ///
    /// # Panics
    ///
    /// Panics on any other value.
    pub fn with_bits(mut self, bits: u8) -> Self {
        assert!(bits == 16 || bits == 32, "Colour depth must be 16 or 32, got {}", bits);
        self.params.bits = bits;
        self
    }

    pub fn with_z_buffer_bits(mut self, bits: u8) -> Self {
        self.params.z_buffer_bits = bits;
        self
    }

    pub fn with_stencil_buffer(mut self, stencil: bool) -> Self {
        self.params.stencil_buffer = stencil;
        self
    }

    /// Requested multisample count; 0 or 1 turns anti-aliasing off.
    pub fn with_anti_alias(mut self, samples: u8) -> Self {
        self.params.anti_alias = samples;
        self
    }

    pub fn with_alpha_channel(mut self, alpha: bool) -> Self {
        self.params.with_alpha_channel = alpha;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.params.fullscreen = fullscreen;
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.params.vsync = vsync;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.params.window_title = title.into();
        self
    }

    pub fn params(&self) -> &CreationParameters {
        &self.params
    }

    /// Creates the device.
    ///
    /// # Errors
    ///
    /// See [`WinitDevice::new`].
    pub fn build(self) -> Result<WinitDevice, DeviceError> {
        WinitDevice::new(self.params)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = DeviceBuilder::new();
        assert_eq!(builder.params(), &CreationParameters::default());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = DeviceBuilder::new()
            .with_driver(DriverType::OpenGl)
            .with_window_size(1024, 768)
            .with_bits(16)
            .with_z_buffer_bits(16)
            .with_stencil_buffer(false)
            .with_anti_alias(8)
            .with_alpha_channel(true)
            .with_fullscreen(true)
            .with_vsync(true)
            .with_title("Test");

        let params = builder.params();
        assert_eq!(params.driver_type, DriverType::OpenGl);
        assert_eq!(params.window_size, (1024, 768));
        assert_eq!(params.bits, 16);
        assert_eq!(params.z_buffer_bits, 16);
        assert!(!params.stencil_buffer);
        assert_eq!(params.anti_alias, 8);
        assert!(params.with_alpha_channel);
        assert!(params.fullscreen);
        assert!(params.vsync);
        assert_eq!(params.window_title, "Test");
    }

    #[test]
    fn builder_from_params_keeps_values() {
        let params = CreationParameters {
            window_title: "Kept".into(),
            ..CreationParameters::default()
        };
        assert_eq!(DeviceBuilder::from_params(params.clone()).params(), &params);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_window_size_panics_on_zero() {
        DeviceBuilder::new().with_window_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Colour depth must be 16 or 32")]
    fn builder_with_bits_panics_on_odd_depth() {
        DeviceBuilder::new().with_bits(24);
    }

    #[test]
    fn direct3d_is_rejected_before_touching_the_platform() {
        let result = DeviceBuilder::new().with_driver(DriverType::Direct3D9).build();
        assert!(matches!(result, Err(DeviceError::Unsupported(_))));
    }
}
