use std::sync::Arc;

use super::shape::ShapeVariant;

pub type ShapeObserver = Arc<dyn Fn(ShapeVariant) + Send + Sync>;

/// One skin texture plus the metadata the pack stores for it.
#[derive(Clone)]
pub struct SkinEntry {
    texture_bytes: Vec<u8>,
    texture_name: String,
    display_name: String,
    shape_variant: ShapeVariant,
    shape_observer: Option<ShapeObserver>,
}

impl SkinEntry {
    pub fn new(texture_name: impl Into<String>, texture_bytes: Vec<u8>) -> Self {
        Self {
            texture_bytes,
            texture_name: texture_name.into(),
            display_name: String::new(),
            shape_variant: ShapeVariant::default(),
            shape_observer: None,
        }
    }

    pub fn with_details(
        texture_name: impl Into<String>,
        texture_bytes: Vec<u8>,
        display_name: impl Into<String>,
        shape_variant: ShapeVariant,
    ) -> Self {
        Self {
            display_name: display_name.into().trim().to_string(),
            shape_variant,
            ..Self::new(texture_name, texture_bytes)
        }
    }

    pub fn texture_bytes(&self) -> &[u8] {
        &self.texture_bytes
    }

    pub fn texture_name(&self) -> &str {
        &self.texture_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn shape_variant(&self) -> ShapeVariant {
        self.shape_variant
    }

    /// Stored trimmed, matching what an imported lang file yields.
    pub fn set_display_name(&mut self, value: impl Into<String>) {
        self.display_name = value.into().trim().to_string();
    }

    pub fn set_shape_variant(&mut self, value: ShapeVariant) {
        if self.shape_variant == value {
            return;
        }
        self.shape_variant = value;
        if let Some(observer) = self.shape_observer.as_ref() {
            observer(value);
        }
    }

    pub fn on_shape_change<F>(&mut self, observer: F)
    where
        F: Fn(ShapeVariant) + Send + Sync + 'static,
    {
        self.shape_observer = Some(Arc::new(observer));
    }

    pub fn clear_shape_observer(&mut self) {
        self.shape_observer = None;
    }
}

impl std::fmt::Debug for SkinEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkinEntry")
            .field("texture_name", &self.texture_name)
            .field("texture_len", &self.texture_bytes.len())
            .field("display_name", &self.display_name)
            .field("shape_variant", &self.shape_variant)
            .field("has_shape_observer", &self.shape_observer.is_some())
            .finish()
    }
}
