//! Line type patterns

/// Line type element (dash, dot, space)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTypeElement {
    /// Length of the element (positive = dash, negative = space, 0 = dot)
    pub length: f64,
}

impl LineTypeElement {
    /// Create a dash element
    pub fn dash(length: f64) -> Self {
        LineTypeElement { length: length.abs() }
    }

    /// Create a space element
    pub fn space(length: f64) -> Self {
        LineTypeElement { length: -length.abs() }
    }

    /// Create a dot element
    pub fn dot() -> Self {
        LineTypeElement { length: 0.0 }
    }

    /// Check if this is a dash
    pub fn is_dash(&self) -> bool {
        self.length > 0.0
    }

    /// Check if this is a space
    pub fn is_space(&self) -> bool {
        self.length < 0.0
    }

    /// Check if this is a dot
    pub fn is_dot(&self) -> bool {
        self.length == 0.0
    }
}

/// Total length of a pattern: the sum of the absolute element lengths.
pub fn pattern_length(pattern: &[f64]) -> f64 {
    pattern.iter().map(|length| length.abs()).sum()
}

/// Builder for the signed-length sequence passed to
/// [`DxfWriter::line_type`](crate::DxfWriter::line_type).
///
/// ```
/// use minidxf::tables::LineTypePattern;
///
/// let dash_dot = LineTypePattern::new().dash(0.5).space(0.25).dot().space(0.25);
/// assert_eq!(dash_dot.lengths(), &[0.5, -0.25, 0.0, -0.25]);
/// assert_eq!(dash_dot.pattern_length(), 1.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTypePattern {
    lengths: Vec<f64>,
}

impl LineTypePattern {
    /// Create an empty (continuous) pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dash
    pub fn dash(self, length: f64) -> Self {
        self.push(LineTypeElement::dash(length))
    }

    /// Append a space
    pub fn space(self, length: f64) -> Self {
        self.push(LineTypeElement::space(length))
    }

    /// Append a dot
    pub fn dot(self) -> Self {
        self.push(LineTypeElement::dot())
    }

    /// Append an arbitrary element
    pub fn push(mut self, element: LineTypeElement) -> Self {
        self.lengths.push(element.length);
        self
    }

    /// Signed element lengths in pattern order
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Elements in pattern order
    pub fn elements(&self) -> impl Iterator<Item = LineTypeElement> + '_ {
        self.lengths
            .iter()
            .map(|&length| LineTypeElement { length })
    }

    /// Sum of absolute element lengths, recomputed on every call
    pub fn pattern_length(&self) -> f64 {
        pattern_length(&self.lengths)
    }

    /// Check if this is a continuous line type
    pub fn is_continuous(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl From<Vec<f64>> for LineTypePattern {
    fn from(lengths: Vec<f64>) -> Self {
        LineTypePattern { lengths }
    }
}

impl AsRef<[f64]> for LineTypePattern {
    fn as_ref(&self) -> &[f64] {
        &self.lengths
    }
}
