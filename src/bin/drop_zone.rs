//! Drop Zone
//!
//! Run with: `cargo run --bin drop-zone`
//!
//! Steer a craft across a 50x50 field while cubes fall toward the camera
//! out of the fog. Close passes score as hits (10 points), wide ones as
//! avoids (5); higher levels pull the fog in, spawn faster and fall
//! faster.
//!
//! Controls:
//! - W/A/S/D: steer the craft
//! - Mouse: nudge the view around the craft
//! - F1/F2/F3: start level 1/2/3
//! - ESC: exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec3;
use rand::Rng;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use drop_zone_engine::camera::{Camera, ViewRotation};
use drop_zone_engine::game::{
    BACKGROUND_SHADER, BackgroundUniforms, GameConfig, GameState, Hud, Level, Mesh, Phase,
    SCENE_SHADER, SceneUniforms, UI_SHADER, Vertex, build_background_quad, build_scene_mesh,
    generate_game_over_mesh, generate_menu_mesh,
};
use drop_zone_engine::input::{KeyMap, MoveKey, PointerTracker};
use drop_zone_engine::render::{GpuContext, GpuContextConfig, Texture};

/// Backdrop texture, required at startup.
const STARFIELD_PATH: &str = "assets/starfield.png";

/// Initial capacity of the per-frame scene mesh buffers.
const INITIAL_SCENE_BUFFER_SIZE: u64 = 256 * 1024;

/// Initial capacity of the per-frame UI mesh buffers.
const INITIAL_UI_BUFFER_SIZE: u64 = 128 * 1024;

// ============================================================================
// APP STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,

    // Render pipelines
    scene_pipeline: wgpu::RenderPipeline,
    background_pipeline: wgpu::RenderPipeline,
    ui_pipeline: wgpu::RenderPipeline,

    // Scene resources (rebuilt every frame)
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    scene_vertex_buffer: wgpu::Buffer,
    scene_index_buffer: wgpu::Buffer,

    // Backdrop resources (static quad)
    background_uniform_buffer: wgpu::Buffer,
    background_bind_group: wgpu::BindGroup,
    background_vertex_buffer: wgpu::Buffer,
    background_index_buffer: wgpu::Buffer,
    background_index_count: u32,
    #[allow(dead_code)]
    starfield: Texture,

    // UI resources (rebuilt every frame)
    ui_vertex_buffer: wgpu::Buffer,
    ui_index_buffer: wgpu::Buffer,

    // World
    game: GameState,
    camera: Camera,
    rotation: ViewRotation,
    keys: KeyMap,
    pointer: PointerTracker,
    hud: Hud,

    // Timing
    last_frame_time: Instant,
}

impl AppState {
    fn new(window: Arc<Window>, config: GameConfig) -> Self {
        let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());

        let starfield = match Texture::from_file(&gpu.device, &gpu.queue, Path::new(STARFIELD_PATH))
        {
            Ok(texture) => texture,
            Err(e) => {
                log::error!("[Assets] Cannot load {}: {}", STARFIELD_PATH, e);
                std::process::exit(1);
            }
        };

        // Scene bind group: one uniform buffer
        let scene_bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let scene_uniform_buffer =
            gpu.create_uniform_buffer("Scene Uniform Buffer", &SceneUniforms::default());

        let scene_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });

        // Backdrop bind group: uniforms + starfield texture + sampler
        let background_bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Background Bind Group Layout"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: None,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 2,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let background_uniform_buffer =
            gpu.create_uniform_buffer("Background Uniform Buffer", &BackgroundUniforms::default());

        let background_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Background Bind Group"),
            layout: &background_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: background_uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&starfield.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&starfield.sampler),
                },
            ],
        });

        // Pipelines
        let scene_pipeline =
            gpu.create_scene_pipeline("Scene", SCENE_SHADER, &scene_bind_group_layout);
        let background_pipeline = gpu.create_background_pipeline(
            "Background",
            BACKGROUND_SHADER,
            &background_bind_group_layout,
        );
        let ui_pipeline = gpu.create_ui_pipeline("UI", UI_SHADER);

        // The backdrop quad never changes: it sits on the far fog wall,
        // centered on the camera axis, oversized to overfill the frustum.
        let camera = Camera::default();
        let (center_x, center_y) = config.field.center();
        let quad = build_background_quad(center_x, center_y, config.field.depth, camera.fov);
        let background_vertex_buffer =
            gpu.create_vertex_buffer("Background Vertex Buffer", &quad.vertices);
        let background_index_buffer =
            gpu.create_index_buffer("Background Index Buffer", &quad.indices);
        let background_index_count = quad.indices.len() as u32;

        // Per-frame mesh buffers, grown on demand
        let scene_vertex_buffer =
            gpu.create_dynamic_vertex_buffer("Scene Vertex Buffer", INITIAL_SCENE_BUFFER_SIZE);
        let scene_index_buffer =
            gpu.create_dynamic_index_buffer("Scene Index Buffer", INITIAL_SCENE_BUFFER_SIZE);
        let ui_vertex_buffer =
            gpu.create_dynamic_vertex_buffer("UI Vertex Buffer", INITIAL_UI_BUFFER_SIZE);
        let ui_index_buffer =
            gpu.create_dynamic_index_buffer("UI Index Buffer", INITIAL_UI_BUFFER_SIZE);

        let seed = rand::rng().random::<u64>();
        log::info!("[Game] Spawn seed {seed:#018x}");

        let rotation = ViewRotation::new(config.view.sensitivity, config.view.rotation_damping);
        let game = GameState::new(&config, seed);

        Self {
            window,
            gpu,
            scene_pipeline,
            background_pipeline,
            ui_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            scene_vertex_buffer,
            scene_index_buffer,
            background_uniform_buffer,
            background_bind_group,
            background_vertex_buffer,
            background_index_buffer,
            background_index_count,
            starfield,
            ui_vertex_buffer,
            ui_index_buffer,
            game,
            camera,
            rotation,
            keys: KeyMap::new(),
            pointer: PointerTracker::new(),
            hud: Hud::new(),
            last_frame_time: Instant::now(),
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
    }

    /// Per-frame world step: poll held keys, then drain the cadences.
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.game.apply_input(&self.keys);
        self.game.update(dt);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // View rotates about the craft, not the eye
        let pivot = Vec3::new(
            self.game.player.x,
            self.game.player.y,
            self.game.config.field.player_z,
        );
        let view_matrix = self.camera.get_view_matrix() * self.rotation.pivot_matrix(pivot);
        let view_proj =
            self.camera.get_projection_matrix(self.gpu.aspect_ratio()) * view_matrix;

        let fog = self.game.fog_color();
        let (fog_start, fog_end) = self
            .game
            .level
            .as_ref()
            .map_or((self.camera.far, self.camera.far), |l| {
                (l.fog_start, l.fog_end)
            });

        let scene_uniforms = SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: self.camera.position.into(),
            time: self.game.elapsed,
            fog_color: fog,
            fog_start,
            fog_end,
            ..Default::default()
        };
        self.gpu
            .write_buffer(&self.scene_uniform_buffer, &[scene_uniforms]);

        // The backdrop dims with the level mood
        let background_uniforms = BackgroundUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            tint: [fog[0], fog[1], fog[2], 1.0],
        };
        self.gpu
            .write_buffer(&self.background_uniform_buffer, &[background_uniforms]);

        // Rebuild the frame's meshes
        let scene_index_count = if self.game.phase == Phase::Level {
            let mesh = build_scene_mesh(&self.game);
            upload_mesh(
                &self.gpu,
                "Scene",
                &mut self.scene_vertex_buffer,
                &mut self.scene_index_buffer,
                &mesh,
            )
        } else {
            0
        };

        let (width, height) = self.gpu.dimensions();
        let ui_mesh = match self.game.phase {
            Phase::Menu => generate_menu_mesh(width as f32, height as f32),
            Phase::Level => match &self.game.level {
                Some(level) => self.hud.generate_ui_mesh(
                    width as f32,
                    height as f32,
                    &self.game.player,
                    level,
                ),
                None => Mesh::new(),
            },
            Phase::GameOver => {
                generate_game_over_mesh(width as f32, height as f32, self.game.player.score)
            }
        };
        let ui_index_count = upload_mesh(
            &self.gpu,
            "UI",
            &mut self.ui_vertex_buffer,
            &mut self.ui_index_buffer,
            &ui_mesh,
        );

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Frame Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: fog[0] as f64,
                            g: fog[1] as f64,
                            b: fog[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.game.phase == Phase::Level {
                // Backdrop first; it neither tests nor writes depth
                render_pass.set_pipeline(&self.background_pipeline);
                render_pass.set_bind_group(0, &self.background_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.background_vertex_buffer.slice(..));
                render_pass.set_index_buffer(
                    self.background_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..self.background_index_count, 0, 0..1);

                render_pass.set_pipeline(&self.scene_pipeline);
                render_pass.set_bind_group(0, &self.scene_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.scene_vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.scene_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..scene_index_count, 0, 0..1);
            }

            if ui_index_count > 0 {
                render_pass.set_pipeline(&self.ui_pipeline);
                render_pass.set_vertex_buffer(0, self.ui_vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(self.ui_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..ui_index_count, 0, 0..1);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.keys.handle_key(MoveKey::Up, pressed),
            KeyCode::KeyS => self.keys.handle_key(MoveKey::Down, pressed),
            KeyCode::KeyA => self.keys.handle_key(MoveKey::Left, pressed),
            KeyCode::KeyD => self.keys.handle_key(MoveKey::Right, pressed),
            KeyCode::F1 if pressed => self.game.select_level(Level::One),
            KeyCode::F2 if pressed => self.game.select_level(Level::Two),
            KeyCode::F3 if pressed => self.game.select_level(Level::Three),
            _ => {}
        }
    }
}

/// Upload a rebuilt mesh into its dynamic buffer pair, growing the buffers
/// when the mesh outgrows them. Returns the index count to draw.
fn upload_mesh(
    gpu: &GpuContext,
    label: &str,
    vertex_buffer: &mut wgpu::Buffer,
    index_buffer: &mut wgpu::Buffer,
    mesh: &Mesh,
) -> u32 {
    if mesh.vertices.is_empty() {
        return 0;
    }

    let vertex_bytes = (mesh.vertices.len() * std::mem::size_of::<Vertex>()) as u64;
    if vertex_bytes > vertex_buffer.size() {
        *vertex_buffer = gpu.create_dynamic_vertex_buffer(
            &format!("{} Vertex Buffer", label),
            vertex_bytes.next_power_of_two(),
        );
    }
    let index_bytes = (mesh.indices.len() * std::mem::size_of::<u32>()) as u64;
    if index_bytes > index_buffer.size() {
        *index_buffer = gpu.create_dynamic_index_buffer(
            &format!("{} Index Buffer", label),
            index_bytes.next_power_of_two(),
        );
    }

    gpu.write_buffer(vertex_buffer, &mesh.vertices);
    gpu.write_buffer(index_buffer, &mesh.indices);
    mesh.indices.len() as u32
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    state: Option<AppState>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = GameConfig::default();
        let window_attrs = WindowAttributes::default()
            .with_title(config.window.title)
            .with_inner_size(PhysicalSize::new(config.window.width, config.window.height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());
        self.state = Some(AppState::new(window, config));

        log::info!("[Game] Ready: WASD steer, mouse look, F1/F2/F3 start a level, Esc quits");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;

                if key == KeyCode::Escape && pressed {
                    event_loop.exit();
                    return;
                }

                state.handle_key(key, pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (dx, dy) = state.pointer.motion(position.x, position.y);
                state.rotation.track(dx, dy);
            }
            WindowEvent::CursorLeft { .. } => {
                state.pointer.reset();
            }
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.window.inner_size();
                        state.gpu.resize(size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[GpuContext] Out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("[GpuContext] Dropped frame: {e:?}"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App { state: None };
    event_loop.run_app(&mut app).unwrap();
}
