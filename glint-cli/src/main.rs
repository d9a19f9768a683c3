mod argparse;
mod samplescenes;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use glint_core::postprocess::{self, PostProcessConfig};
use glint_core::renderer::{self, ProgressMode, RenderConfig};
use glint_core::resolution::Resolution;
use glint_core::sampler::SamplePattern;
use glint_core::shading::{
    BlinnPhongShader, CurvatureShader, DepthShader, DotProductShader, NormalShader, Shader,
};

fn main() {
    println!("glint 0.1 [detected {} cores]", num_cpus::get());
    let matches = argparse::parse_args();

    let log_level = if matches.is_present("verbose") {
        "glint=debug,glint_core=debug"
    } else {
        "glint=info,glint_core=info"
    };
    flexi_logger::Logger::try_with_env_or_str(log_level)
        .unwrap()
        .start()
        .unwrap_or_else(|e| panic!("failed to initialize logger: {}", e));

    if let Err(ref e) = run(&matches) {
        eprintln!("application error: {:#}", e);
        std::process::exit(1);
    }
}

fn parse_or<T: std::str::FromStr>(matches: &ArgMatches<'_>, name: &str, default: T) -> T {
    matches
        .value_of(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn run(matches: &ArgMatches<'_>) -> Result<()> {
    let resolution = Resolution::new(
        parse_or(matches, "width", Resolution::R360P.width),
        parse_or(matches, "height", Resolution::R360P.height),
    );

    let upscale: u32 = parse_or(matches, "upscale", 1);
    let config = RenderConfig {
        resolution,
        samples_per_pixel: parse_or(matches, "spp", 4),
        max_depth: parse_or(matches, "depth", 5),
        sample_pattern: SamplePattern::UniformJitter,
        progress: match matches.value_of("progress") {
            Some("none") => ProgressMode::None,
            Some("preview") => ProgressMode::Preview,
            _ => ProgressMode::Bar,
        },
        post_process: PostProcessConfig {
            enabled: upscale > 1,
            scale_factor: upscale,
        },
        ..RenderConfig::default()
    };

    let scene_name = matches.value_of("scene").unwrap_or("cornell");
    let mut scene = samplescenes::by_name(scene_name, resolution);
    if let Some(path) = matches.value_of("skybox") {
        scene.set_skybox(path);
    }

    let shader: Box<dyn Shader> = match matches.value_of("shader") {
        Some("normal") => Box::new(NormalShader::default()),
        Some("depth") => Box::new(DepthShader::default()),
        Some("dot") => Box::new(DotProductShader::default()),
        Some("curvature") => Box::new(CurvatureShader::default()),
        _ => Box::new(BlinnPhongShader::default()),
    };

    let start = Instant::now();
    let film = if matches.is_present("serial") {
        renderer::render(&scene, shader.as_ref(), &config)?
    } else {
        renderer::parallel_render(&scene, shader.as_ref(), &config)?
    };
    info!(
        "rendered scene '{}' in {:.2}s",
        scene_name,
        start.elapsed().as_secs_f32()
    );

    let (rgb, width, height) =
        postprocess::apply(&config.post_process, film.to_rgb8(), film.width(), film.height())?;

    let output = matches.value_of("output").unwrap_or("image.png");
    glint_core::imageio::write_image(output, &rgb, width, height, None)
        .with_context(|| format!("failed to write {}", output))?;
    info!("wrote {}", output);

    Ok(())
}
