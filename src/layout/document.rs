use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Rect, Size},
    foundation::error::{WeightboxError, WeightboxResult},
    layout::engine::{BoxLayout, LayoutChild, LayoutReport},
    layout::host::LayoutHost,
    layout::measure::MeasureSpec,
    layout::model::{ChildSpec, LayoutConfig},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A self-contained layout scene: one container and its children.
///
/// This is the JSON boundary used by the CLI and by tests. A host toolkit would normally
/// implement [`LayoutHost`] over its own view tree instead.
pub struct BoxDocument {
    /// Container style.
    #[serde(default)]
    pub container: LayoutConfig,
    /// Outer size the container is measured with (exact constraints).
    pub size: Size,
    /// Children in stacking order.
    #[serde(default)]
    pub children: Vec<ChildNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One child of a [`BoxDocument`].
pub struct ChildNode {
    /// Optional identifier echoed back in layout results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Layout request.
    #[serde(flatten)]
    pub spec: ChildSpec,
    /// Content size the child reports when measured without bounds.
    #[serde(default)]
    pub content: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Result of laying out a [`BoxDocument`].
pub struct DocumentLayout {
    /// Resolved container size.
    pub size: Size,
    /// Pass diagnostics.
    pub report: LayoutReport,
    /// Placed children, in document order.
    pub children: Vec<PlacedChild>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A placed child.
pub struct PlacedChild {
    /// Identifier copied from [`ChildNode::id`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Natural size reported by the measurement pass.
    pub natural: Size,
    /// Final container-local rectangle.
    pub rect: Rect,
}

impl DocumentLayout {
    /// Child rectangles in document order.
    pub fn rects(&self) -> Vec<Rect> {
        self.children.iter().map(|c| c.rect).collect()
    }
}

impl BoxDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WeightboxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WeightboxError::serde(format!("parse layout document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> WeightboxResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WeightboxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WeightboxError::validation(format!(
                "open layout document '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate numeric ranges of the container and every child.
    pub fn validate(&self) -> WeightboxResult<()> {
        self.container.validate()?;
        for (name, v) in [("width", self.size.width), ("height", self.size.height)] {
            if !v.is_finite() || v < 0.0 {
                return Err(WeightboxError::validation(format!(
                    "size.{name} must be finite and >= 0"
                )));
            }
        }
        for (idx, child) in self.children.iter().enumerate() {
            let ctx = match &child.id {
                Some(id) => format!("children[{idx}] ('{id}')"),
                None => format!("children[{idx}]"),
            };
            child.spec.validate(&ctx)?;
            if !child.content.width.is_finite()
                || !child.content.height.is_finite()
                || child.content.width < 0.0
                || child.content.height < 0.0
            {
                return Err(WeightboxError::validation(format!(
                    "{ctx}.content must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    /// Validate, then run the measure and layout passes with exact container constraints.
    #[tracing::instrument(skip(self), fields(children = self.children.len()))]
    pub fn layout(&self) -> WeightboxResult<DocumentLayout> {
        self.validate()?;
        let mut host = DocumentHost::new(self);
        let mut engine = BoxLayout::new(self.container);
        let size = engine.measure(
            &mut host,
            MeasureSpec::exactly(self.size.width),
            MeasureSpec::exactly(self.size.height),
        );
        let report = engine.layout(&mut host, size);

        let children = self
            .children
            .iter()
            .zip(host.natural)
            .zip(host.placed)
            .map(|((node, natural), rect)| {
                rect.map(|rect| PlacedChild {
                    id: node.id.clone(),
                    natural,
                    rect,
                })
                .ok_or_else(|| WeightboxError::validation("child was not placed by layout pass"))
            })
            .collect::<WeightboxResult<Vec<_>>>()?;

        Ok(DocumentLayout {
            size,
            report,
            children,
        })
    }
}

/// [`LayoutHost`] over a [`BoxDocument`]: children size themselves to their content, bounded by
/// the constraints they receive.
struct DocumentHost<'a> {
    doc: &'a BoxDocument,
    natural: Vec<Size>,
    placed: Vec<Option<Rect>>,
}

impl<'a> DocumentHost<'a> {
    fn new(doc: &'a BoxDocument) -> Self {
        Self {
            doc,
            natural: vec![Size::ZERO; doc.children.len()],
            placed: vec![None; doc.children.len()],
        }
    }
}

impl LayoutHost for DocumentHost<'_> {
    fn measure_self(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            width.resolve(self.doc.size.width),
            height.resolve(self.doc.size.height),
        )
    }

    fn child_count(&self) -> usize {
        self.doc.children.len()
    }

    fn child(&self, index: usize) -> Option<LayoutChild> {
        let node = self.doc.children.get(index)?;
        Some(LayoutChild {
            spec: node.spec,
            natural: self.natural.get(index).copied().unwrap_or(Size::ZERO),
        })
    }

    fn measure_child(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size {
        let Some(node) = self.doc.children.get(index) else {
            return Size::ZERO;
        };
        let natural = Size::new(
            width.resolve(node.content.width),
            height.resolve(node.content.height),
        );
        if let Some(slot) = self.natural.get_mut(index) {
            *slot = natural;
        }
        natural
    }

    fn place_child(&mut self, index: usize, rect: Rect) {
        if let Some(slot) = self.placed.get_mut(index) {
            *slot = Some(rect);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/document.rs"]
mod tests;
