//! Figure window harness
//!
//! Runs a winit event loop that draws an egui UI onto a wgpu surface. Each
//! exercise implements [`Figure`] and hands it to [`run_figure`]. Redraws only
//! happen on input, resize, or when egui asks for one, so static charts cost
//! nothing while the window sits open.

use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

use crate::error::GraphicsError;
use crate::graphics::GraphicsContext;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.05,
    g: 0.05,
    b: 0.08,
    a: 1.0,
};

/// Something that draws itself into an egui context once per frame.
pub trait Figure {
    fn show(&mut self, ctx: &egui::Context);
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct FigureWindow<F> {
    gfx: GraphicsContext,
    egui: EguiState,
    figure: F,
}

impl<F: Figure> FigureWindow<F> {
    fn new(gfx: GraphicsContext, figure: F) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &gfx.window,
            Some(gfx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&gfx.device, gfx.config.format, None, 1);

        Self {
            gfx,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            figure,
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> egui_winit::EventResponse {
        self.egui.state.on_window_event(&self.gfx.window, event)
    }

    /// Draw one frame. Returns whether egui wants another frame right away.
    fn render(&mut self) -> Result<bool, wgpu::SurfaceError> {
        let output = self.gfx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui.state.take_egui_input(&self.gfx.window);
        let figure = &mut self.figure;
        let full_output = self.egui.ctx.run(raw_input, |ctx| figure.show(ctx));

        let repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map_or(false, |viewport| viewport.repaint_delay.is_zero());

        self.egui
            .state
            .handle_platform_output(&self.gfx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.gfx.device, &self.gfx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gfx.size.width, self.gfx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .gfx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Figure Encoder"),
            });

        let user_buffers = self.egui.renderer.update_buffers(
            &self.gfx.device,
            &self.gfx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.gfx.queue.submit(
            user_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(repaint)
    }
}

/// Open a window showing `figure` and block until the user closes it.
pub fn run_figure<F: Figure + 'static>(
    title: &str,
    width: u32,
    height: u32,
    figure: F,
) -> Result<(), GraphicsError> {
    let (gfx, event_loop) = pollster::block_on(GraphicsContext::new(title, width, height))?;
    log::info!("Opened figure window \"{title}\" ({width}x{height})");

    let mut app = FigureWindow::new(gfx, figure);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        if let Event::WindowEvent { ref event, .. } = event {
            let response = app.handle_window_event(event);
            if response.repaint {
                app.gfx.window.request_redraw();
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(KeyCode::Escape),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } if !response.consumed => elwt.exit(),
                WindowEvent::Resized(size) => {
                    app.gfx.resize(*size);
                    app.gfx.window.request_redraw();
                }
                WindowEvent::RedrawRequested => match app.render() {
                    Ok(true) => app.gfx.window.request_redraw(),
                    Ok(false) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = app.gfx.size;
                        app.gfx.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory, closing figure");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("Render error: {e:?}"),
                },
                _ => {}
            }
        }
    })?;

    Ok(())
}
