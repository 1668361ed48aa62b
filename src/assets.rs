use std::path::PathBuf;

use iced::widget::image::Handle;

use crate::error::AssetError;

/// File name the résumé is saved under.
pub const RESUME_FILE_NAME: &str = "Benyamin_Plaksienko_Website_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Institution {
    Njit,
    Rutgers,
}

/// Stable identifiers for static media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Headshot,
    Photo(u32),
    Logo(Institution),
    Resume,
}

impl AssetId {
    pub fn relative_path(self) -> PathBuf {
        match self {
            AssetId::Headshot => PathBuf::from("headshot.jpg"),
            AssetId::Photo(n) => PathBuf::from("photos").join(format!("{n}.jpg")),
            AssetId::Logo(Institution::Njit) => PathBuf::from("logos").join("njit.png"),
            AssetId::Logo(Institution::Rutgers) => PathBuf::from("logos").join("rutgers.png"),
            AssetId::Resume => PathBuf::from("resume.pdf"),
        }
    }
}

/// Resolves asset ids under one root directory.
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, id: AssetId) -> PathBuf {
        self.root.join(id.relative_path())
    }
}

/// Read and fully decode one image. Each image fails on its own, so a
/// truncated or corrupt file falls back to the placeholder.
pub async fn load_image(path: PathBuf) -> Result<Handle, AssetError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| AssetError::io(&path, e))?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| AssetError::Decode {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let (width, height) = (img.width(), img.height());
    tracing::debug!("Loaded {} ({width}x{height})", path.display());
    Ok(Handle::from_rgba(width, height, img.to_rgba8().into_vec()))
}

const PLACEHOLDER_W: u32 = 160;
const PLACEHOLDER_H: u32 = 120;

/// Neutral striped image shown in place of anything that failed to load.
pub fn placeholder() -> Handle {
    let mut pixels = Vec::with_capacity((PLACEHOLDER_W * PLACEHOLDER_H * 4) as usize);
    for y in 0..PLACEHOLDER_H {
        for x in 0..PLACEHOLDER_W {
            let shade = if (x + y) / 12 % 2 == 0 { 0xcc } else { 0xbb };
            pixels.extend_from_slice(&[shade, shade, shade, 0xff]);
        }
    }
    Handle::from_rgba(PLACEHOLDER_W, PLACEHOLDER_H, pixels)
}

/// Where downloads go: the user's download directory, else home.
pub fn download_dir() -> Result<PathBuf, AssetError> {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or(AssetError::NoDownloadDir)
}

/// Copy the résumé into `target_dir` under [`RESUME_FILE_NAME`].
pub async fn download_resume(source: PathBuf, target_dir: PathBuf) -> Result<PathBuf, AssetError> {
    let dest = target_dir.join(RESUME_FILE_NAME);
    tokio::fs::copy(&source, &dest)
        .await
        .map_err(|e| AssetError::io(&source, e))?;
    Ok(dest)
}
