//! trirast: minimal software 3D rasterizer
//!
//! One triangle, a fly-through camera, and a CPU framebuffer:
//! - model -> view -> projection transform with perspective divide
//! - per-pixel point-in-triangle fill (edge function or barycentric)
//! - macroquad window presenting the framebuffer as a texture

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod scene;

use macroquad::prelude::*;

use rasterizer::{
    project_triangle, render_triangle, Framebuffer, RasterSettings, Vec3, HEIGHT, WIDTH,
};
use scene::{load_scene, save_scene, Scene};

const SCENE_PATH: &str = "assets/scenes/default.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Software Rasterizer v{}", VERSION),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut scene = match load_scene(SCENE_PATH) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Could not load {}: {} - using built-in scene", SCENE_PATH, e);
            Scene::default()
        }
    };

    if scene.triangle.is_degenerate() {
        eprintln!("Scene triangle has zero area; nothing will be rasterized");
    }

    let mut fb = Framebuffer::new(WIDTH, HEIGHT);
    let mut settings = RasterSettings {
        fill_color: scene.fill_color,
        background: scene.background,
        ..Default::default()
    };

    // Reported once per offending camera state, not every frame
    let mut camera_warned = false;

    loop {
        let dt = get_frame_time();
        handle_input(&mut scene, &mut settings, dt);

        match scene.camera.validate() {
            Ok(()) => {
                camera_warned = false;

                let aspect = fb.width as f32 / fb.height as f32;
                let projection = scene.projection(aspect);
                let screen_triangle =
                    project_triangle(&scene.triangle, &scene.camera, &projection, fb.width, fb.height);

                fb.clear(settings.background);
                render_triangle(&mut fb, &screen_triangle, &settings);
            }
            Err(e) => {
                if !camera_warned {
                    eprintln!("Camera state invalid: {} - skipping render", e);
                    camera_warned = true;
                }
            }
        }

        present(&fb, &scene, &settings);
        next_frame().await;
    }
}

/// Camera movement (WASD along world X/Z, Q/E along world Y), fill-rule
/// toggle, and scene saving.
fn handle_input(scene: &mut Scene, settings: &mut RasterSettings, dt: f32) {
    let step = scene.move_speed * dt;

    if is_key_down(KeyCode::W) {
        scene.camera.translate(Vec3::new(0.0, 0.0, step));
    }
    if is_key_down(KeyCode::S) {
        scene.camera.translate(Vec3::new(0.0, 0.0, -step));
    }
    if is_key_down(KeyCode::A) {
        scene.camera.translate(Vec3::new(-step, 0.0, 0.0));
    }
    if is_key_down(KeyCode::D) {
        scene.camera.translate(Vec3::new(step, 0.0, 0.0));
    }
    if is_key_down(KeyCode::Q) {
        scene.camera.translate(Vec3::new(0.0, -step, 0.0));
    }
    if is_key_down(KeyCode::E) {
        scene.camera.translate(Vec3::new(0.0, step, 0.0));
    }

    if is_key_pressed(KeyCode::B) {
        settings.fill_rule = settings.fill_rule.toggled();
        println!("Fill rule: {}", settings.fill_rule.label());
    }

    if is_key_pressed(KeyCode::F5) {
        let _ = std::fs::create_dir_all("assets/scenes");
        match save_scene(scene, SCENE_PATH) {
            Ok(()) => println!("Saved scene to {}", SCENE_PATH),
            Err(e) => eprintln!("Save failed: {}", e),
        }
    }
}

/// Upload the framebuffer and draw it centered, aspect-preserving, with a
/// small HUD underneath.
fn present(fb: &Framebuffer, scene: &Scene, settings: &RasterSettings) {
    clear_background(Color::from_rgba(30, 30, 35, 255));

    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    let screen_w = screen_width();
    let screen_h = screen_height();
    let scale = (screen_w / fb.width as f32).min(screen_h / fb.height as f32);
    let draw_w = fb.width as f32 * scale;
    let draw_h = fb.height as f32 * scale;
    let draw_x = (screen_w - draw_w) * 0.5;
    let draw_y = (screen_h - draw_h) * 0.5;

    draw_texture_ex(
        &texture,
        draw_x,
        draw_y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(draw_w, draw_h)),
            ..Default::default()
        },
    );

    let hud = Color::from_rgba(200, 200, 200, 255);
    draw_text(
        &format!(
            "Cam: ({:.0}, {:.0}, {:.0}) | Fill: {}",
            scene.camera.position.x,
            scene.camera.position.y,
            scene.camera.position.z,
            settings.fill_rule.label()
        ),
        draw_x + 5.0,
        draw_y + draw_h - 20.0,
        14.0,
        hud,
    );
    draw_text(
        "WASD move, Q/E height, B fill rule, F5 save scene",
        draw_x + 5.0,
        draw_y + draw_h - 5.0,
        14.0,
        hud,
    );
}
