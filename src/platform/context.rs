//=========================================================================
// GL Context Manager
//=========================================================================
//
// Creates, activates and tears down the OpenGL / OpenGL ES context the
// engine's GL drivers render into, and presents frames by swapping the
// window surface.
//
// Architecture:
// ```text
//  DisplayBuilder (glutin-winit)
//     ├─ Window            ──► shared with WinitDevice (Arc)
//     └─ Config            ──► picked by sample count
//           ↓
//  GlutinContextManager
//     ├─ generate_surface()  → Surface<WindowSurface>
//     ├─ generate_context()  → PossiblyCurrentContext (made current)
//     └─ swap_buffers()      → present
// ```
//
// The surface must exist before the context is made current, and the
// context is dropped before the surface on teardown.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ffi::{c_void, CStr};
use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

//=== External Dependencies ===============================================

use glutin::{
    config::{Api, ColorBufferType, Config, ConfigTemplateBuilder, GlConfig},
    context::{
        ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext,
        PossiblyCurrentGlContext, Version,
    },
    display::{GetGlDisplay, GlDisplay},
    surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, info, warn};
use raw_window_handle::HasWindowHandle;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::core::device::DeviceError;
use crate::core::params::{CreationParameters, DriverType};

//=== ContextManager ======================================================

/// Graphics context lifecycle as seen by the engine's GL drivers.
pub trait ContextManager {
    fn generate_surface(&mut self) -> Result<(), DeviceError>;

    fn destroy_surface(&mut self);

    /// Creates the context and makes it current on the surface.
    fn generate_context(&mut self) -> Result<(), DeviceError>;

    fn destroy_context(&mut self);

    /// Makes the context current on the calling thread.
    fn activate_context(&mut self) -> Result<(), DeviceError>;

    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), DeviceError>;

    /// Resizes the drawable; zero sizes are ignored.
    fn resize(&mut self, width: u32, height: u32);

    /// Looks up a GL function for loaders such as `glow`.
    fn proc_address(&self, name: &CStr) -> *const c_void;
}

//=== Context Selection ===================================================

/// Context API requested for a driver type.
pub(crate) fn context_api_for(driver: DriverType) -> ContextApi {
    match driver {
        DriverType::OglEs1 => ContextApi::Gles(Some(Version::new(1, 1))),
        DriverType::OglEs2 | DriverType::WebGl1 => ContextApi::Gles(Some(Version::new(2, 0))),
        _ => ContextApi::OpenGl(None),
    }
}

/// Config template for the creation parameters.
///
/// Multisampling is not part of the template; `best_sample_index` picks
/// the sample count from the matching configs.
pub(crate) fn config_template(params: &CreationParameters) -> ConfigTemplateBuilder {
    let api = match params.driver_type {
        DriverType::OglEs1 => Api::GLES1,
        DriverType::OglEs2 | DriverType::WebGl1 => Api::GLES2,
        _ => Api::OPENGL,
    };

    ConfigTemplateBuilder::new()
        .with_api(api)
        .with_alpha_size(params.alpha_bits())
        .with_depth_size(params.z_buffer_bits)
        .with_stencil_size(params.stencil_bits())
}

/// Index of the config with the most samples not above `requested`.
///
/// Ties keep the earliest config (the platform's preferred order). When
/// every config exceeds the request, the one with the fewest samples wins.
pub(crate) fn best_sample_index(samples: &[u8], requested: u8) -> usize {
    let limit = if requested > 1 { requested } else { 0 };

    let within = samples
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, s)| s <= limit)
        .fold(None::<(usize, u8)>, |best, (i, s)| match best {
            Some((_, best_s)) if best_s >= s => best,
            _ => Some((i, s)),
        });

    match within {
        Some((idx, _)) => idx,
        None => samples
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, s)| s)
            .map(|(i, _)| i)
            .unwrap_or(0),
    }
}

//=== GlAttributes ========================================================

/// Summary of a chosen config, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct GlAttributes {
    pub rgb: Option<(u8, u8, u8)>,
    pub alpha: u8,
    pub depth: u8,
    pub stencil: u8,
    pub samples: u8,
}

impl GlAttributes {
    fn from_config(config: &Config) -> Self {
        let rgb = match config.color_buffer_type() {
            Some(ColorBufferType::Rgb { r_size, g_size, b_size }) => Some((r_size, g_size, b_size)),
            _ => None,
        };
        Self {
            rgb,
            alpha: config.alpha_size(),
            depth: config.depth_size(),
            stencil: config.stencil_size(),
            samples: config.num_samples(),
        }
    }
}

impl fmt::Display for GlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GL attribs:")?;
        if let Some((r, g, b)) = self.rgb {
            write!(f, " r:{} g:{} b:{}", r, g, b)?;
        }
        write!(
            f,
            " a:{} depth:{} stencil:{} aa:{} aa-samples:{}",
            self.alpha,
            self.depth,
            self.stencil,
            u8::from(self.samples > 1),
            self.samples
        )
    }
}

//=== GlutinContextManager ================================================

/// [`ContextManager`] backed by glutin.
pub struct GlutinContextManager {
    window: Arc<Window>,
    config: Config,
    context_api: ContextApi,
    vsync: bool,
    // Field order matters for drop: context before surface.
    context: Option<PossiblyCurrentContext>,
    surface: Option<Surface<WindowSurface>>,
}

impl GlutinContextManager {
    //--- Construction -----------------------------------------------------

    /// Creates the window together with a matching GL config, then the
    /// surface and a current context.
    pub(crate) fn create_window(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        params: &CreationParameters,
    ) -> Result<(Arc<Window>, Self), DeviceError> {
        let requested = params.anti_alias;

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, config_template(params), |configs| {
                let mut configs: Vec<Config> = configs.collect();
                let samples: Vec<u8> = configs.iter().map(|c| c.num_samples()).collect();
                let idx = best_sample_index(&samples, requested);
                if requested > 1 && samples.get(idx).copied().unwrap_or(0) <= 1 {
                    warn!(target: "device::context", "AntiAliasing disabled due to lack of support!");
                }
                // glutin only calls the picker with a non-empty config set.
                configs.swap_remove(idx)
            })
            .map_err(|e| DeviceError::Context(e.to_string()))?;

        let window = window
            .map(Arc::new)
            .ok_or_else(|| DeviceError::Context("display builder returned no window".into()))?;

        info!(target: "device::context", "{}", GlAttributes::from_config(&config));

        let mut manager = Self {
            window: Arc::clone(&window),
            config,
            context_api: context_api_for(params.driver_type),
            vsync: params.vsync,
            context: None,
            surface: None,
        };
        manager.generate_surface()?;
        manager.generate_context()?;

        Ok((window, manager))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn is_current(&self) -> bool {
        self.context.as_ref().is_some_and(|c| c.is_current())
    }

    //--- Internal Helpers -------------------------------------------------

    fn parts(&self) -> Result<(&PossiblyCurrentContext, &Surface<WindowSurface>), DeviceError> {
        match (&self.context, &self.surface) {
            (Some(context), Some(surface)) => Ok((context, surface)),
            _ => Err(DeviceError::Context("context or surface not created".into())),
        }
    }
}

impl ContextManager for GlutinContextManager {
    fn generate_surface(&mut self) -> Result<(), DeviceError> {
        if self.surface.is_some() {
            return Ok(());
        }

        let attributes = self
            .window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .map_err(|e| DeviceError::Context(e.to_string()))?;

        // SAFETY: the window behind `attributes` is kept alive by
        // `self.window` for as long as the surface exists.
        let surface = unsafe {
            self.config
                .display()
                .create_window_surface(&self.config, &attributes)?
        };

        debug!(target: "device::context", "Window surface created");
        self.surface = Some(surface);
        Ok(())
    }

    fn destroy_surface(&mut self) {
        if self.surface.take().is_some() {
            debug!(target: "device::context", "Window surface destroyed");
        }
    }

    fn generate_context(&mut self) -> Result<(), DeviceError> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| DeviceError::Context("surface must exist before the context".into()))?;

        let raw_handle = self.window.window_handle().ok().map(|h| h.as_raw());
        let attributes = ContextAttributesBuilder::new()
            .with_context_api(self.context_api)
            .build(raw_handle);

        // SAFETY: the raw window handle stays valid while `self.window` lives.
        let not_current = unsafe {
            self.config
                .display()
                .create_context(&self.config, &attributes)?
        };
        let context = not_current.make_current(surface)?;

        let interval = if self.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            warn!(target: "device::context", "Could not set swap interval: {}", e);
        }

        info!(target: "device::context", "GL context created ({:?})", self.context_api);
        self.context = Some(context);
        Ok(())
    }

    fn destroy_context(&mut self) {
        if self.context.take().is_some() {
            debug!(target: "device::context", "GL context destroyed");
        }
    }

    fn activate_context(&mut self) -> Result<(), DeviceError> {
        let (context, surface) = self.parts()?;
        context.make_current(surface)?;
        Ok(())
    }

    fn swap_buffers(&mut self) -> Result<(), DeviceError> {
        let (context, surface) = self.parts()?;
        surface.swap_buffers(context)?;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if let Ok((context, surface)) = self.parts() {
            surface.resize(context, width, height);
        }
    }

    fn proc_address(&self, name: &CStr) -> *const c_void {
        self.config.display().get_proc_address(name)
    }
}

impl Drop for GlutinContextManager {
    fn drop(&mut self) {
        self.destroy_context();
        self.destroy_surface();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gles_drivers_request_gles_contexts() {
        assert_eq!(
            context_api_for(DriverType::OglEs2),
            ContextApi::Gles(Some(Version::new(2, 0)))
        );
        assert_eq!(
            context_api_for(DriverType::WebGl1),
            ContextApi::Gles(Some(Version::new(2, 0)))
        );
        assert_eq!(
            context_api_for(DriverType::OglEs1),
            ContextApi::Gles(Some(Version::new(1, 1)))
        );
        assert_eq!(context_api_for(DriverType::OpenGl), ContextApi::OpenGl(None));
    }

    #[test]
    fn sample_choice_without_anti_alias_prefers_zero() {
        assert_eq!(best_sample_index(&[4, 0, 8], 0), 1);
    }

    #[test]
    fn sample_choice_takes_highest_within_request() {
        assert_eq!(best_sample_index(&[0, 2, 4, 8, 16], 8), 3);
        assert_eq!(best_sample_index(&[0, 2, 16], 8), 1);
    }

    #[test]
    fn sample_choice_keeps_earliest_on_ties() {
        assert_eq!(best_sample_index(&[4, 4, 0], 4), 0);
    }

    #[test]
    fn sample_choice_falls_back_to_fewest() {
        assert_eq!(best_sample_index(&[8, 4, 16], 0), 1);
        assert_eq!(best_sample_index(&[], 4), 0);
    }

    #[test]
    fn attributes_display() {
        let attrs = GlAttributes {
            rgb: Some((8, 8, 8)),
            alpha: 0,
            depth: 24,
            stencil: 8,
            samples: 4,
        };
        assert_eq!(
            attrs.to_string(),
            "GL attribs: r:8 g:8 b:8 a:0 depth:24 stencil:8 aa:1 aa-samples:4"
        );
    }
}
