//! Custom face images for the glider
//!
//! Hosts register decoded images as opaque handles; the renderer asks for
//! the current [`Face`] once per frame. An empty set degrades to the
//! default drawn face.

/// Opaque handle to a host-decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u32);

/// What the renderer should draw for the glider's face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Built-in gradient body with an eye
    Default,
    Custom(ImageHandle),
}

/// A registered avatar image with its display name
#[derive(Debug, Clone)]
pub struct AvatarEntry {
    pub image: ImageHandle,
    pub name: String,
}

/// Host-registered avatar faces with a current selection
#[derive(Debug, Clone, Default)]
pub struct AvatarSet {
    entries: Vec<AvatarEntry>,
    current: usize,
}

impl AvatarSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, image: ImageHandle, name: impl Into<String>) {
        let name = name.into();
        log::info!("avatar registered: {}", name);
        self.entries.push(AvatarEntry { image, name });
    }

    /// The face to draw this frame
    pub fn current_face(&self) -> Face {
        match self.entries.get(self.current) {
            Some(entry) => Face::Custom(entry.image),
            None => Face::Default,
        }
    }

    pub fn current_name(&self) -> &str {
        self.entries
            .get(self.current)
            .map_or("Default", |e| e.name.as_str())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Switch to the next avatar, wrapping. No-op on an empty set.
    pub fn cycle(&mut self) {
        if self.entries.is_empty() {
            log::debug!("no avatars to cycle");
            return;
        }
        self.current = (self.current + 1) % self.entries.len();
        log::info!("avatar: {}", self.current_name());
    }

    /// Switch to a specific avatar; returns false for an out-of-range index
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.current = index;
            log::info!("avatar: {}", self.current_name());
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> &[AvatarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_degrades_to_default() {
        let mut set = AvatarSet::new();
        assert_eq!(set.current_face(), Face::Default);
        assert_eq!(set.current_name(), "Default");
        set.cycle();
        assert_eq!(set.current_face(), Face::Default);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut set = AvatarSet::new();
        set.register(ImageHandle(0), "ada");
        set.register(ImageHandle(1), "grace");

        assert_eq!(set.current_face(), Face::Custom(ImageHandle(0)));
        set.cycle();
        assert_eq!(set.current_face(), Face::Custom(ImageHandle(1)));
        assert_eq!(set.current_name(), "grace");
        set.cycle();
        assert_eq!(set.current_face(), Face::Custom(ImageHandle(0)));
    }

    #[test]
    fn test_select_bounds() {
        let mut set = AvatarSet::new();
        set.register(ImageHandle(0), "ada");
        assert!(set.select(0));
        assert!(!set.select(3));
        assert_eq!(set.current_index(), 0);
    }
}
