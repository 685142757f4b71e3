use clap::Parser;
use glam::DVec3;
use image::{Rgba, RgbaImage};
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use lumaray::intersectable::Scene;
use lumaray::renderer::Renderer;
use lumaray::shader::{Light, Shader};
use lumaray::sphere::Sphere;
use output::save_png;

/// The fixed scene: one sphere at the world origin.
fn create_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Box::new(Sphere::new(DVec3::ZERO, 3.0)));
    scene
}

/// The fixed shading setup: a red base color and one point light.
fn create_shader() -> Shader {
    Shader::new(
        DVec3::new(244.0, 67.0, 54.0),
        Light {
            origin: DVec3::new(-6.0, -5.0, -10.0),
            power: 150.0,
        },
    )
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("lumaray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, scale: {}, fov: {} degrees",
        args.width, args.height, args.scale, args.fov
    );

    let mut renderer = Renderer::new(args.width, args.height, args.scale);
    renderer.fov = args.fov.to_radians();

    let scene = create_scene();
    let shader = create_shader();

    // The surface starts fully opaque; the render overwrites the RGB
    // channels of every pixel and leaves alpha untouched.
    let mut surface = RgbaImage::from_pixel(
        renderer.image_width,
        renderer.image_height,
        Rgba([255, 255, 255, 255]),
    );

    if let Err(e) = renderer.render(&scene, &shader, &mut surface) {
        log::error!("Render failed: {}", e);
        std::process::exit(1);
    }

    save_png(&surface, &args.output);
}
