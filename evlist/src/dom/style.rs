/// Inline style properties the page behaviours touch.
///
/// `None` means "not set inline", i.e. whatever the stylesheet says.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub transform: Option<Transform>,
    pub opacity: Option<f32>,
    pub z_index: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Vertical offset in pixels (negative lifts the element)
    TranslateY(i16),
    Scale(f32),
}

impl Style {
    /// Stylesheet resting state for cards before they scroll into view
    pub fn hidden_card() -> Self {
        Self {
            transform: Some(Transform::TranslateY(20)),
            opacity: Some(0.0),
            z_index: None,
        }
    }

    /// Whether the element is offset upwards
    pub fn is_lifted(&self) -> bool {
        matches!(self.transform, Some(Transform::TranslateY(dy)) if dy < 0)
    }

    /// Whether the element is scaled below its natural size
    pub fn is_pressed(&self) -> bool {
        matches!(self.transform, Some(Transform::Scale(s)) if s < 1.0)
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity.is_some_and(|o| o <= 0.0)
    }
}
