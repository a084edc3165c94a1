use crate::solar_system::BodyImage;
use glium::backend::Facade;
use glium::texture::{ClientFormat, RawImage2d, SrgbTexture2d};
use std::borrow::Cow;
use std::error::Error;
use std::path::Path;

/// One GPU texture per catalog entry, addressed by `BodyImage::index()`.
pub struct TextureSet {
    textures: Vec<SrgbTexture2d>,
}

impl TextureSet {
    /// Loads every body texture from `assets_dir`. A missing or unreadable
    /// image is replaced by a flat-color placeholder so the scene still
    /// renders without assets.
    pub fn load<F: ?Sized + Facade>(
        facade: &F,
        assets_dir: &Path,
    ) -> Result<TextureSet, Box<dyn Error>> {
        let mut textures = Vec::new();
        for image in BodyImage::values() {
            let path = assets_dir.join(image.file_name());
            let raw = match load_image(&path) {
                Ok(raw) => {
                    info!("loaded {}", path.display());
                    raw
                }
                Err(err) => {
                    warn!("could not load {}: {}; using a flat color", path.display(), err);
                    flat_color(image.fallback_color())
                }
            };
            textures.push(SrgbTexture2d::new(facade, raw)?);
        }
        Ok(TextureSet { textures })
    }

    pub fn get(&self, slot: usize) -> &SrgbTexture2d {
        &self.textures[slot]
    }
}

fn load_image(path: &Path) -> Result<RawImage2d<'static, u8>, Box<dyn Error>> {
    let image = image::open(path)?.to_rgba();
    let (width, height) = image.dimensions();
    Ok(RawImage2d {
        data: Cow::Owned(image.into_raw()),
        width,
        height,
        format: ClientFormat::U8U8U8U8,
    })
}

fn flat_color(color: [u8; 3]) -> RawImage2d<'static, u8> {
    let pixel = [color[0], color[1], color[2], 255];
    let mut data = Vec::with_capacity(4 * pixel.len());
    for _ in 0..4 {
        data.extend_from_slice(&pixel);
    }
    RawImage2d {
        data: Cow::Owned(data),
        width: 2,
        height: 2,
        format: ClientFormat::U8U8U8U8,
    }
}
