//! Live preview of an in-progress render.

use crate::film::Film;

pub trait DisplayUpdater {
    fn update(&mut self, film: &Film);
}

/// Updater used when no preview is wanted.
pub struct NoopDisplayUpdater;

impl DisplayUpdater for NoopDisplayUpdater {
    fn update(&mut self, _film: &Film) {}
}

#[cfg(feature = "display")]
pub use self::minifb_display::MinifbDisplayUpdater;

#[cfg(feature = "display")]
mod minifb_display {
    use log::warn;

    use super::DisplayUpdater;
    use crate::film::Film;

    pub struct MinifbDisplayUpdater {
        window: minifb::Window,
    }

    impl MinifbDisplayUpdater {
        pub fn new(width: u32, height: u32) -> MinifbDisplayUpdater {
            MinifbDisplayUpdater {
                window: minifb::Window::new(
                    "glint",
                    width as usize,
                    height as usize,
                    minifb::WindowOptions::default(),
                )
                .expect("unable to open a preview window"),
            }
        }
    }

    impl DisplayUpdater for MinifbDisplayUpdater {
        fn update(&mut self, film: &Film) {
            let buffer: Vec<u32> = film
                .to_rgb8()
                .chunks(3)
                .map(|rgb| {
                    (u32::from(rgb[0]) << 16) | (u32::from(rgb[1]) << 8) | u32::from(rgb[2])
                })
                .collect();

            if let Err(e) = self.window.update_with_buffer(
                &buffer,
                film.width() as usize,
                film.height() as usize,
            ) {
                warn!("preview window update failed: {}", e);
            }
        }
    }

    // minifb::Window is not Send because of a callback it holds, but the
    // updater is moved to the merge thread exactly once at render start and
    // only ever used from there.
    unsafe impl Send for MinifbDisplayUpdater {}
}
