//! Render output
//!
//! Plain data describing one frame of a field. Hosts map these onto their own
//! drawing primitives.

use labelfield_core::Color;

/// Child drawn at an offset, overlaying its siblings rather than displacing them
#[derive(Clone, Debug, PartialEq)]
pub struct Positioned<C> {
    pub top: f32,
    pub left: f32,
    pub opacity: f32,
    pub z_index: i32,
    pub absolute: bool,
    pub child: C,
}

/// Child pushed down by a leading-edge inset
#[derive(Clone, Debug, PartialEq)]
pub struct Inset<C> {
    pub padding_top: f32,
    pub child: C,
}

/// The label text drawn by the floating label
#[derive(Clone, Debug, PartialEq)]
pub struct LabelText {
    /// `None` while the field is empty: the input shows the label as its placeholder
    pub text: Option<String>,
    pub color: Color,
    pub font_size: f32,
    pub height: f32,
}

/// Attributes handed to the input primitive
#[derive(Clone, Debug, PartialEq)]
pub struct InputView {
    /// Displayed value; always present, empty for an absent text
    pub value: String,
    pub placeholder: Option<String>,
    pub default_value: Option<String>,
    pub max_length: Option<usize>,
    pub horizontal_padding: f32,
    pub font_size: f32,
    pub color: Color,
    pub height: f32,
}

/// Bottom border line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Floating label and input, stacked inside the holder
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBody {
    pub label: Positioned<LabelText>,
    pub input: InputView,
}

/// A full frame of a label field
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFieldView {
    pub height: f32,
    pub border: Option<Border>,
    pub content: Inset<FieldBody>,
}

impl LabelFieldView {
    pub fn label(&self) -> &Positioned<LabelText> {
        &self.content.child.label
    }

    pub fn input(&self) -> &InputView {
        &self.content.child.input
    }

    /// Current holder inset above the input
    pub fn holder_offset(&self) -> f32 {
        self.content.padding_top
    }
}
