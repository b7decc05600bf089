//=========================================================================
// Creation Parameters
//
// Everything the device needs to know before it opens a window: which
// driver family will render into it, the framebuffer layout and the
// initial window configuration.
//
// Usually filled in through `DeviceBuilder`; constructing the struct
// directly is fine for tests and tools.
//
//=========================================================================

//=== DriverType ==========================================================

/// Rendering driver the engine intends to use.
///
/// The device only cares about the family: GL drivers get a glutin
/// context, `Null` gets no window at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverType {
    /// Headless driver; no window is created.
    Null,
    /// Engine's own software rasteriser.
    Software,
    /// Engine's higher-quality software rasteriser.
    BurningsVideo,
    /// Desktop OpenGL.
    OpenGl,
    /// OpenGL ES 1.x.
    OglEs1,
    /// OpenGL ES 2.0.
    OglEs2,
    /// WebGL 1 (OpenGL ES 2.0 semantics).
    WebGl1,
    /// Direct3D 9; not available through this device.
    Direct3D9,
}

impl DriverType {
    /// Returns `true` for drivers that render through an OpenGL context.
    pub const fn is_gl(self) -> bool {
        matches!(self, Self::OpenGl | Self::OglEs1 | Self::OglEs2 | Self::WebGl1)
    }

    /// Returns `true` for the CPU rasterisers.
    pub const fn is_software(self) -> bool {
        matches!(self, Self::Software | Self::BurningsVideo)
    }

    /// Returns `true` for the OpenGL ES family.
    pub const fn is_gles(self) -> bool {
        matches!(self, Self::OglEs1 | Self::OglEs2 | Self::WebGl1)
    }

    /// Returns `true` if the device opens a window for this driver.
    pub const fn needs_window(self) -> bool {
        !matches!(self, Self::Null)
    }
}

//=== CreationParameters ==================================================

/// Device configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationParameters {
    pub driver_type: DriverType,
    /// Inner window size in physical pixels.
    pub window_size: (u32, u32),
    /// Colour bits per pixel (16 or 32).
    pub bits: u8,
    pub z_buffer_bits: u8,
    pub stencil_buffer: bool,
    /// Requested multisample count; 0 or 1 disables anti-aliasing.
    pub anti_alias: u8,
    pub with_alpha_channel: bool,
    pub fullscreen: bool,
    pub vsync: bool,
    pub window_title: String,
}

impl Default for CreationParameters {
    fn default() -> Self {
        Self {
            driver_type: DriverType::OglEs2,
            window_size: (800, 600),
            bits: 32,
            z_buffer_bits: 24,
            stencil_buffer: true,
            anti_alias: 0,
            with_alpha_channel: false,
            fullscreen: false,
            vsync: false,
            window_title: String::from("Untitled"),
        }
    }
}

impl CreationParameters {
    /// Stencil bits to request from the GL config.
    pub const fn stencil_bits(&self) -> u8 {
        if self.stencil_buffer {
            8
        } else {
            0
        }
    }

    /// Alpha bits to request from the GL config.
    pub const fn alpha_bits(&self) -> u8 {
        match (self.with_alpha_channel, self.bits) {
            (false, _) => 0,
            (true, 16) => 1,
            (true, _) => 8,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_families() {
        assert!(DriverType::OpenGl.is_gl());
        assert!(DriverType::OglEs2.is_gles());
        assert!(!DriverType::OpenGl.is_gles());
        assert!(DriverType::BurningsVideo.is_software());
        assert!(!DriverType::Null.needs_window());
        assert!(DriverType::Software.needs_window());
        assert!(!DriverType::Direct3D9.is_gl());
    }

    #[test]
    fn defaults_match_gles2_window() {
        let params = CreationParameters::default();
        assert_eq!(params.driver_type, DriverType::OglEs2);
        assert_eq!(params.window_size, (800, 600));
        assert_eq!(params.z_buffer_bits, 24);
        assert_eq!(params.stencil_bits(), 8);
        assert!(!params.vsync);
    }

    #[test]
    fn alpha_bits_depend_on_depth() {
        let mut params = CreationParameters::default();
        assert_eq!(params.alpha_bits(), 0);

        params.with_alpha_channel = true;
        assert_eq!(params.alpha_bits(), 8);

        params.bits = 16;
        assert_eq!(params.alpha_bits(), 1);
    }
}
