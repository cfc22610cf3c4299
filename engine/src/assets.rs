//! Images and fonts from disk.
//!
//! Nothing here is fatal: the caller logs the error and draws without the asset.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use interface::game::ImageId;
use log::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot load image {path:?}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("cannot parse font {0:?}")]
    Font(PathBuf),
}

/// Decoded image, 4 bytes per pixel, row by row.
#[derive(Clone, PartialEq, Eq)]
pub struct Rgba {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self,  f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Rgba({}x{})", self.width, self.height)
    }
}

pub fn load_rgba(path: &Path) -> Result<Rgba, AssetError> {
    let image = image::open(path).map_err(|source| AssetError::Image {
        path: path.to_owned(),
        source,
    })?;
    let image = image.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(Rgba { width, height, pixels: image.into_raw() })
}

pub fn read_font(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|source| AssetError::Io { path: path.to_owned(), source })
}

/// Decode the images on another thread and hand each one to `deliver`
/// as it becomes ready.
/// Images that fail to load are skipped with a warning.
/// Stops early if `deliver` returns false.
pub fn load_in_background(
        paths: Vec<PathBuf>,
        mut deliver: impl FnMut(ImageId, Rgba) -> bool + Send + 'static,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for (index, path) in paths.iter().enumerate() {
            match load_rgba(path) {
                Ok(image) => {
                    info!("loaded {:?} ({}x{})", path, image.width, image.height);
                    if !deliver(ImageId(index), image) {
                        return;
                    }
                }
                Err(e) => warn!("{}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::mpsc;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("engine-assets-{}-{}", std::process::id(), name))
    }

    #[test]
    fn missing_image_is_an_error() {
        let path = temp_path("does-not-exist.png");
        match load_rgba(&path) {
            Err(AssetError::Image { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected image error, got {:?}", other),
        }
    }

    #[test]
    fn missing_font_is_an_error() {
        let path = temp_path("does-not-exist.ttf");
        assert!(matches!(read_font(&path), Err(AssetError::Io { .. })));
    }

    #[test]
    fn background_loading_skips_broken_images() {
        let good = temp_path("good.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 4]))
            .save(&good)
            .unwrap();
        let broken = temp_path("broken.png");
        fs::write(&broken, b"not a png").unwrap();

        let (tx, rx) = mpsc::channel();
        load_in_background(vec![broken.clone(), good.clone()], move |id, image| {
            tx.send((id, image)).is_ok()
        }).join().unwrap();
        let loaded: Vec<(ImageId, Rgba)> = rx.iter().collect();
        let _ = fs::remove_file(&good);
        let _ = fs::remove_file(&broken);

        assert_eq!(loaded.len(), 1);
        let (id, image) = &loaded[0];
        assert_eq!(*id, ImageId(1));
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(&image.pixels[..4], &[1, 2, 3, 4]);
    }
}
