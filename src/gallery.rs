use crate::assets::AssetId;

#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: u32,
    pub asset: AssetId,
    pub title: &'static str,
    /// Local UI state only; reset on restart.
    pub liked: bool,
}

impl Photo {
    const fn new(id: u32, title: &'static str, liked: bool) -> Self {
        Self { id, asset: AssetId::Photo(id), title, liked }
    }
}

/// The photo grid plus the optional full-view overlay.
#[derive(Debug, Clone)]
pub struct Gallery {
    photos: Vec<Photo>,
    /// The overlay keeps its own copy; [`Gallery::toggle_like`] keeps both in sync.
    expanded: Option<Photo>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(vec![
            Photo::new(1, "Paterson Falls Star Trail", false),
            Photo::new(2, "Sleepy Hollow Star Trail", false),
            Photo::new(3, "Statue Of Liberty / Empire State Building", true),
            Photo::new(4, "Rome", false),
            Photo::new(5, "Amalfi", false),
            Photo::new(6, "Vessel / Empire State Building", false),
        ])
    }
}

impl Gallery {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos, expanded: None }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn expanded(&self) -> Option<&Photo> {
        self.expanded.as_ref()
    }

    pub fn photo(&self, id: u32) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Flip the liked flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_like(&mut self, id: u32) -> Option<bool> {
        let photo = self.photos.iter_mut().find(|p| p.id == id)?;
        photo.liked = !photo.liked;
        let liked = photo.liked;
        if let Some(open) = self.expanded.as_mut().filter(|p| p.id == id) {
            open.liked = liked;
        }
        Some(liked)
    }

    /// Open the overlay for `id`. Unknown ids leave it unchanged.
    pub fn expand(&mut self, id: u32) -> bool {
        match self.photo(id) {
            Some(photo) => {
                self.expanded = Some(photo.clone());
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.expanded = None;
    }
}
