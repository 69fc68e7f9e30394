/// Image shown in the lightbox.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
    pub title: String,
}

/// Single shared modal. The web layer mirrors `is_open` into the DOM.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    current: Option<LightboxImage>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, image: LightboxImage) {
        log::debug!("[lightbox] open {}", image.src);
        self.current = Some(image);
    }

    /// Returns true if the modal was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&LightboxImage> {
        self.current.as_ref()
    }

    /// Escape closes an open modal. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "Escape" | "Esc" => self.close(),
            _ => false,
        }
    }
}
