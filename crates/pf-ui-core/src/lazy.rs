//! One-shot lazy image sources.

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LazyImage {
    Pending { staged: String },
    Loaded,
}

impl LazyImage {
    /// Build from the `data-src` attribute. Missing or empty means there is
    /// nothing to load.
    pub fn from_staged(staged: Option<String>) -> Option<Self> {
        staged
            .filter(|s| !s.is_empty())
            .map(|staged| LazyImage::Pending { staged })
    }

    /// Handle an intersection report. Returns the source to swap in the
    /// first time the image intersects; afterwards always `None`.
    pub fn intersect(&mut self, is_intersecting: bool) -> Option<String> {
        if !is_intersecting {
            return None;
        }
        match std::mem::replace(self, LazyImage::Loaded) {
            LazyImage::Pending { staged } => Some(staged),
            LazyImage::Loaded => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LazyImage::Loaded)
    }
}

/// Every observed image, indexed in document order. Images without a staged
/// source hold `None` and never load.
#[derive(Clone, Debug, Default)]
pub struct LazyImages {
    images: Vec<Option<LazyImage>>,
}

impl LazyImages {
    pub fn new<I>(staged: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            images: staged.into_iter().map(LazyImage::from_staged).collect(),
        }
    }

    /// Intersection report for image `index`. Returns the source to swap in
    /// at most once per image.
    pub fn intersect(&mut self, index: usize, is_intersecting: bool) -> Option<String> {
        let src = self.images.get_mut(index)?.as_mut()?.intersect(is_intersecting)?;
        debug!(index, %src, "lazy image loaded");
        Some(src)
    }

    /// Whether image `index` has nothing left to load, so it can stop being
    /// observed. Unknown indices count as done.
    pub fn is_done(&self, index: usize) -> bool {
        match self.images.get(index) {
            Some(Some(image)) => image.is_loaded(),
            _ => true,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_once_on_first_intersection() {
        let mut img = LazyImage::from_staged(Some("/img/a.webp".to_owned())).unwrap();

        assert_eq!(img.intersect(false), None);
        assert!(!img.is_loaded());
        assert_eq!(img.intersect(true), Some("/img/a.webp".to_owned()));
        assert!(img.is_loaded());
        assert_eq!(img.intersect(true), None);
    }

    #[test]
    fn no_staged_source_means_nothing_to_observe() {
        assert!(LazyImage::from_staged(None).is_none());
        assert!(LazyImage::from_staged(Some(String::new())).is_none());
    }

    #[test]
    fn registry_keeps_state_across_reports() {
        let mut images = LazyImages::new([
            Some("/img/a.webp".to_owned()),
            None,
            Some("/img/c.webp".to_owned()),
        ]);
        assert_eq!(images.len(), 3);

        assert_eq!(images.intersect(0, false), None);
        assert!(!images.is_done(0));
        assert_eq!(images.intersect(0, true), Some("/img/a.webp".to_owned()));
        assert!(images.is_done(0));
        // a later report for the same image (observer fires again) is ignored
        assert_eq!(images.intersect(0, true), None);

        assert_eq!(images.intersect(1, true), None);
        assert!(images.is_done(1));
        assert!(!images.is_done(2));
        assert_eq!(images.intersect(7, true), None);
        assert!(images.is_done(7));
    }
}
