use tracing::debug;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::particles::{ParticleConfig, ParticleSystem};
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

use super::validation::validate_viewport;

/// Full-surface confetti overlay driven by host ticks.
pub struct ConfettiView<R: Renderer> {
    renderer: R,
    system: ParticleSystem,
}

impl<R: Renderer> ConfettiView<R> {
    pub fn new(renderer: R, config: ParticleConfig, viewport: Viewport) -> ChartResult<Self> {
        let viewport = validate_viewport(viewport)?;
        Ok(Self {
            renderer,
            system: ParticleSystem::new(config, viewport),
        })
    }

    /// Seeded variant for reproducible output.
    pub fn with_seed(
        renderer: R,
        config: ParticleConfig,
        viewport: Viewport,
        seed: u64,
    ) -> ChartResult<Self> {
        let viewport = validate_viewport(viewport)?;
        Ok(Self {
            renderer,
            system: ParticleSystem::with_seed(config, viewport, seed),
        })
    }

    #[must_use]
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn start(&mut self) {
        self.system.start();
    }

    pub fn stop(&mut self) {
        self.system.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.system.is_running()
    }

    pub fn tick(&mut self, delta_ms: f64) -> bool {
        self.system.tick(delta_ms)
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.system.resize(validate_viewport(viewport)?);
        Ok(())
    }

    /// Stops the simulation. Safe to call repeatedly.
    pub fn detach(&mut self) {
        self.system.stop();
        debug!("detach confetti view");
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.system.viewport());
        self.system
            .append_primitives(frame.layer_mut(CanvasLayerKind::Overlay));
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
