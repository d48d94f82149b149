//! Atomic Orbital Electron Density Visualization
//!
//! Renders s, p, and d orbital shapes as a vibrating 3D point cloud.
//!
//! Controls:
//! - S/X/Y/D/Z: select orbital (s, px, py, dx2-y2, dz2)
//! - Arrow keys / mouse drag: rotate the view
//! - Space: pause the vibration animation

use orbital_sim::constants::{GRID_SIZE, PROJECTION_SCALE, ROTATE_STEP};
use orbital_sim::equations_ui::{draw_equations_sidebar, ORBITAL_EQUATIONS, ORBITAL_VARIABLES};
use orbital_sim::field::Orbital;
use orbital_sim::graphics::GraphicsContext;
use orbital_sim::projection::{ScreenProjector, ViewRotation};
use orbital_sim::renderer::{field_to_points, OrbitalRenderer};
use orbital_sim::simulation::OrbitalSimulation;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Held arrow keys, applied every frame
#[derive(Default)]
struct KeyState {
    rotate_left: bool,
    rotate_right: bool,
    rotate_up: bool,
    rotate_down: bool,
}

struct App {
    ctx: GraphicsContext,
    renderer: OrbitalRenderer,
    simulation: OrbitalSimulation,
    view: ViewRotation,
    keys: KeyState,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    paused: bool,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = OrbitalRenderer::new(&ctx, GRID_SIZE * GRID_SIZE);
        let simulation = OrbitalSimulation::new(Orbital::S);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &ctx.device,
            ctx.config.format,
            None,
            1,
        );

        Self {
            ctx,
            renderer,
            simulation,
            view: ViewRotation::new(),
            keys: KeyState::default(),
            mouse_pressed: false,
            last_mouse_pos: None,
            paused: false,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    fn update(&mut self, dt: f32) {
        // Held arrows turn the view by a fixed step per frame
        if self.keys.rotate_left {
            self.view.turn(0.0, -ROTATE_STEP);
        }
        if self.keys.rotate_right {
            self.view.turn(0.0, ROTATE_STEP);
        }
        if self.keys.rotate_up {
            self.view.turn(-ROTATE_STEP, 0.0);
        }
        if self.keys.rotate_down {
            self.view.turn(ROTATE_STEP, 0.0);
        }

        if !self.paused {
            self.simulation.step(dt);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .update_screen(&self.ctx.queue, self.ctx.size.width, self.ctx.size.height);

        let projector = ScreenProjector::new(
            self.ctx.size.width as f32,
            self.ctx.size.height as f32,
            PROJECTION_SCALE,
        );
        let points = field_to_points(&self.simulation.render_data(), &self.view, &projector);
        self.renderer.update_points(&self.ctx.queue, &points);

        // Build egui UI
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(
                ctx,
                "Atomic Orbitals",
                ORBITAL_EQUATIONS,
                ORBITAL_VARIABLES,
            );

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Mode: {}-orbital (press S, X, Y, D, Z)",
                        self.simulation.orbital.name()
                    ));
                    ui.separator();
                    ui.label(format!(
                        "View: {:.0}° / {:.0}°",
                        self.view.angle_x.to_degrees(),
                        self.view.angle_y.to_degrees()
                    ));
                    ui.separator();
                    ui.label(format!("Points: {}", points.len()));
                    if self.paused {
                        ui.label(egui::RichText::new("PAUSED").color(egui::Color32::YELLOW));
                    }
                });
            });
        });

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render_background(&mut encoder, &view);
        self.renderer
            .render_points(&mut encoder, &view, points.len() as u32);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
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
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn set_orbital(&mut self, orbital: Orbital) {
        self.simulation.set_orbital(orbital);
        log::info!("Orbital mode: {}", orbital.name());
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => self.keys.rotate_left = pressed,
            KeyCode::ArrowRight => self.keys.rotate_right = pressed,
            KeyCode::ArrowUp => self.keys.rotate_up = pressed,
            KeyCode::ArrowDown => self.keys.rotate_down = pressed,

            _ if pressed => match key {
                KeyCode::KeyS => self.set_orbital(Orbital::S),
                KeyCode::KeyX => self.set_orbital(Orbital::Px),
                KeyCode::KeyY => self.set_orbital(Orbital::Py),
                KeyCode::KeyD => self.set_orbital(Orbital::Dx2y2),
                KeyCode::KeyZ => self.set_orbital(Orbital::Dz2),
                KeyCode::Space => self.paused = !self.paused,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if self.mouse_pressed {
            if let Some((last_x, last_y)) = self.last_mouse_pos {
                let dx = (x - last_x) as f32 * 0.01;
                let dy = (y - last_y) as f32 * 0.01;
                self.view.turn(dy, dx);
            }
            self.last_mouse_pos = Some((x, y));
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Atomic Orbitals - Electron Density Visualization",
        800,
        800,
    ));

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::MouseInput { state, button, .. } => {
                                if *button == MouseButton::Left {
                                    app.mouse_pressed = *state == ElementState::Pressed;
                                    if !app.mouse_pressed {
                                        app.last_mouse_pos = None;
                                    }
                                }
                            }
                            WindowEvent::CursorMoved { position, .. } => {
                                app.handle_mouse_move(position.x, position.y);
                            }
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.handle_key(*key, *state),
                            WindowEvent::RedrawRequested => {
                                let now = std::time::Instant::now();
                                let dt = (now - last_time).as_secs_f32().min(0.1);
                                last_time = now;

                                app.update(dt);
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => log::warn!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
