//! The render drivers: a single-threaded reference loop and a pull-based
//! parallel loop over image rows. Both produce identical pixels for the
//! same configuration.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use anyhow::{bail, ensure, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::display::DisplayUpdater;
use crate::film::Film;
use crate::integrator::cast_ray;
use crate::postprocess::PostProcessConfig;
use crate::resolution::Resolution;
use crate::sampler::SamplePattern;
use crate::scene::Scene;
use crate::shading::Shader;
use crate::spectrum::Spectrum;

/// How render progress is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    None,
    /// Console progress bar, one tick per finished row.
    Bar,
    /// Live preview window, refreshed every `preview_refresh_rows` rows.
    Preview,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub resolution: Resolution,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub sample_pattern: SamplePattern,
    pub progress: ProgressMode,
    pub preview_refresh_rows: u32,
    pub post_process: PostProcessConfig,
    /// Base seed for per-row sampling RNGs.
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            resolution: Resolution::default(),
            samples_per_pixel: 4,
            max_depth: 5,
            sample_pattern: SamplePattern::UniformJitter,
            progress: ProgressMode::Bar,
            preview_refresh_rows: 10,
            post_process: PostProcessConfig::default(),
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce an image. Runs once at
    /// render start so bad setups fail before any pixel work.
    pub fn validate(&self, scene: &Scene) -> Result<()> {
        ensure!(
            self.samples_per_pixel > 0,
            "samples_per_pixel must be positive"
        );
        ensure!(self.max_depth > 0, "max_depth must be positive");
        ensure!(
            self.resolution.width > 0 && self.resolution.height > 0,
            "resolution must be positive in both dimensions"
        );
        ensure!(
            self.preview_refresh_rows > 0,
            "preview_refresh_rows must be positive"
        );
        ensure!(!scene.lights.is_empty(), "scene has no lights");
        ensure!(!scene.primitives.is_empty(), "scene has no primitives");
        Ok(())
    }
}

/// Render one row of pixels into `row`. Pixel (i, j) maps to normalized
/// image-plane coordinates with row 0 at the top of the image.
fn render_row(
    j: u32,
    scene: &Scene,
    shader: &dyn Shader,
    config: &RenderConfig,
    row: &mut [Spectrum],
) {
    let width = config.resolution.width;
    let height = config.resolution.height;
    let pixel_w = if width > 1 {
        1.0 / (width - 1) as f32
    } else {
        1.0
    };
    let pixel_h = if height > 1 {
        1.0 / (height - 1) as f32
    } else {
        1.0
    };

    // Row-seeded RNG: rows sample independently of each other and the
    // parallel driver reproduces the linear one exactly.
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(u64::from(j)));

    let v_base = (height - 1 - j) as f32 * pixel_h - 0.5;
    for (i, out) in row.iter_mut().enumerate() {
        let u_base = i as f32 * pixel_w - 0.5;

        let mut acc = Spectrum::black();
        for s in 0..config.samples_per_pixel {
            let (du, dv) = config.sample_pattern.offset(s, pixel_w, pixel_h, &mut rng);
            let ray = scene.camera.make_ray(u_base + du, v_base + dv);
            acc += cast_ray(&ray, config.max_depth, shader, scene);
        }

        *out = acc / config.samples_per_pixel as f32;
    }
}

fn make_progress_bar(config: &RenderConfig) -> Option<indicatif::ProgressBar> {
    if config.progress != ProgressMode::Bar {
        return None;
    }
    let pb = indicatif::ProgressBar::new(u64::from(config.resolution.height));
    pb.set_style(
        indicatif::ProgressStyle::default_bar()
            .progress_chars("=>-")
            .template("[{elapsed_precise}] [{wide_bar}] {percent}% [{pos}/{len}] {eta}"),
    );
    pb.tick();
    Some(pb)
}

fn make_display_updater(config: &RenderConfig) -> Option<Box<dyn DisplayUpdater + Send>> {
    if config.progress != ProgressMode::Preview {
        return None;
    }
    #[cfg(feature = "display")]
    return Some(Box::new(crate::display::MinifbDisplayUpdater::new(
        config.resolution.width,
        config.resolution.height,
    )));
    #[cfg(not(feature = "display"))]
    {
        log::warn!("preview requested but the display feature is not compiled in");
        None
    }
}

/// Single-threaded reference driver.
pub fn render(scene: &Scene, shader: &dyn Shader, config: &RenderConfig) -> Result<Film> {
    config.validate(scene)?;
    let Resolution { width, height } = config.resolution;
    info!(
        "rendering {} at {} spp, depth {} (single-threaded)",
        config.resolution, config.samples_per_pixel, config.max_depth
    );

    let pb = make_progress_bar(config);
    let mut updater = make_display_updater(config);

    let mut film = Film::new(width, height);
    let mut row = vec![Spectrum::black(); width as usize];
    for j in 0..height {
        render_row(j, scene, shader, config, &mut row);
        film.set_row(j, &row);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
        if let Some(up) = updater.as_mut() {
            if (j + 1) % config.preview_refresh_rows == 0 || j + 1 == height {
                up.update(&film);
            }
        }
    }
    if let Some(pb) = pb {
        pb.finish();
    }

    Ok(film)
}

/// Pull-based queue of row indices shared by the render workers.
struct RowQueue {
    counter: AtomicU32,
    rows: u32,
}

impl RowQueue {
    fn new(rows: u32) -> RowQueue {
        RowQueue {
            counter: AtomicU32::new(0),
            rows,
        }
    }

    fn next(&self) -> Option<u32> {
        let row = self.counter.fetch_add(1, Ordering::AcqRel);
        if row < self.rows {
            Some(row)
        } else {
            None
        }
    }
}

/// Parallel driver: a worker pool claims rows off a shared queue, finished
/// rows are merged into the film (and the progress display) on the calling
/// thread. The pixel output is identical to [`render`].
pub fn parallel_render(scene: &Scene, shader: &dyn Shader, config: &RenderConfig) -> Result<Film> {
    parallel_render_cancellable(scene, shader, config, &AtomicBool::new(false))
}

/// [`parallel_render`] with a cooperative cancellation flag, checked
/// between rows. A cancelled render discards all partial output.
pub fn parallel_render_cancellable(
    scene: &Scene,
    shader: &dyn Shader,
    config: &RenderConfig,
    cancel: &AtomicBool,
) -> Result<Film> {
    config.validate(scene)?;
    let Resolution { width, height } = config.resolution;

    let num_threads = num_cpus::get().max(1);
    info!(
        "rendering {} at {} spp, depth {} on {} threads",
        config.resolution, config.samples_per_pixel, config.max_depth, num_threads
    );

    let pb = make_progress_bar(config);
    let mut updater = make_display_updater(config);

    let queue = RowQueue::new(height);
    let (tx, rx) = crossbeam::channel::unbounded::<(u32, Vec<Spectrum>)>();

    let mut film = Film::new(width, height);

    crossbeam::scope(|scope| {
        let queue = &queue;
        for _ in 0..num_threads {
            let tx = tx.clone();
            scope.spawn(move |_| {
                while let Some(j) = queue.next() {
                    if cancel.load(Ordering::Relaxed) {
                        break;
                    }
                    let mut row = vec![Spectrum::black(); width as usize];
                    render_row(j, scene, shader, config, &mut row);
                    if tx.send((j, row)).is_err() {
                        break;
                    }
                }
            });
        }
        // The workers hold the remaining senders; the channel closes when
        // the last of them finishes.
        drop(tx);

        let mut merged = 0u32;
        for (j, row) in rx.iter() {
            film.set_row(j, &row);
            merged += 1;
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            if let Some(up) = updater.as_mut() {
                if merged % config.preview_refresh_rows == 0 || merged == height {
                    up.update(&film);
                }
            }
        }
    })
    .unwrap();

    if let Some(pb) = pb {
        pb.finish();
    }

    if cancel.load(Ordering::Relaxed) {
        bail!("render cancelled");
    }
    Ok(film)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::geometry::{Point3, Vector3};
    use crate::light::Light;
    use crate::material::PhongMaterial;
    use crate::primitive::Primitive;
    use crate::shading::BlinnPhongShader;
    use crate::shapes::{Shape, Sphere};

    fn tiny_scene() -> Scene {
        let camera = Camera::new(
            Point3::new(0.0, 0.0, 4.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
            Resolution::new(16, 9),
        );
        let mut scene = Scene::new(camera);
        scene.add_primitive(Primitive::new(
            Shape::Sphere(Sphere::new(Point3::origin(), 1.0)),
            PhongMaterial::matte(Spectrum::grey(0.7)).into(),
        ));
        scene.add_light(Light::point(Point3::new(2.0, 4.0, 2.0), 300.0));
        scene.add_light(Light::ambient(0.1));
        scene
    }

    fn tiny_config() -> RenderConfig {
        RenderConfig {
            resolution: Resolution::new(16, 9),
            samples_per_pixel: 2,
            max_depth: 3,
            progress: ProgressMode::None,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn rejects_empty_scenes_and_bad_settings() {
        let scene = tiny_scene();
        let mut config = tiny_config();
        config.samples_per_pixel = 0;
        assert!(config.validate(&scene).is_err());

        let config = tiny_config();
        let empty = Scene::new(scene.camera.clone());
        assert!(config.validate(&empty).is_err());
    }

    #[test]
    fn renders_something_nonzero() {
        let scene = tiny_scene();
        let film = render(&scene, &BlinnPhongShader::default(), &tiny_config()).unwrap();
        let bright = film.to_rgb8().iter().any(|&v| v > 10);
        assert!(bright, "a lit sphere must leave non-black pixels");
    }

    #[test]
    fn cancelled_render_discards_output() {
        let scene = tiny_scene();
        let cancel = AtomicBool::new(true);
        let result = parallel_render_cancellable(
            &scene,
            &BlinnPhongShader::default(),
            &tiny_config(),
            &cancel,
        );
        assert!(result.is_err());
    }
}
