use std::cell::Cell;
use std::rc::Rc;

/// Vertical shift applied to the content region while the soft keyboard is
/// shown. Positive values move content up.
///
/// Set by the keyboard/IME collaborator, read during nav bar layout.
#[derive(Clone, Debug, Default)]
pub struct KeyboardAvoidance {
    offset: Rc<Cell<f32>>,
}

impl KeyboardAvoidance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offset(&self, offset: f32) {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        self.offset.set(offset);
    }

    pub fn offset(&self) -> f32 {
        self.offset.get()
    }
}
