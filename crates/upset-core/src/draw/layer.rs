//! Layer-based rendering system for SVG output.
//!
//! This module provides a type-safe layer system that allows drawable components
//! to specify which z-order layer their SVG elements should be rendered to.
//!
//! # Overview
//!
//! - [`RenderLayer`]: An enum defining available rendering layers in order
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use upset_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Circle, Line};
//!
//! let mut output = LayeredOutput::new();
//!
//! // Connector drawn first, circle second
//! output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Marks, Box::new(Circle::new()));
//!
//! // Marks render below connectors
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Axis lines, tick marks and tick labels - renders first
    Axis,
    /// Bars and matrix circles - default layer
    Marks,
    /// Vertical lines joining participating sets in the matrix
    Connector,
    /// Labels and captions
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Axis => "axis",
            Self::Marks => "marks",
            Self::Connector => "connector",
            Self::Text => "text",
        }
    }
}

/// Represents SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top). Within a
/// layer, nodes keep the order in which they were added.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes collected on `layer`.
    pub fn count_in_layer(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: nodes keep their insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }

    /// Renders all layers into `group`, returning the filled group.
    pub fn render_into(self, group: svg_element::Group) -> svg_element::Group {
        self.render()
            .into_iter()
            .fold(group, |group, node| group.add(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Circle, Group, Line, Rectangle};

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Marks, Box::new(Rectangle::new()));
        assert!(!output.is_empty());
        assert_eq!(output.count_in_layer(RenderLayer::Marks), 1);
        assert_eq!(output.count_in_layer(RenderLayer::Text), 0);
    }

    #[test]
    fn test_layered_output_merge() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Marks, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Axis, Box::new(Group::new()));

        output1.merge(output2);
        let nodes = output1.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Marks, Box::new(Circle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Marks, Box::new(Circle::new()));

        output1.merge(output2);
        assert_eq!(output1.render().len(), 1);
    }

    #[test]
    fn test_render_orders_layers_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Axis, Box::new(Group::new()));

        let group = output.render_into(Group::new());
        let rendered = group.to_string();

        let axis = rendered.find("data-layer=\"axis\"").unwrap();
        let connector = rendered.find("data-layer=\"connector\"").unwrap();
        let text = rendered.find("data-layer=\"text\"").unwrap();
        assert!(axis < connector && connector < text);
    }
}
