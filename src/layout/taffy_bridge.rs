//! Taffy Bridge - page geometry from a block blueprint
//!
//! Pages are laid out as a vertical flex column: top-level blocks (sections)
//! stack with a gap, and each block stacks its own children inside its
//! padding. A block with no explicit height grows to fit its children.
//!
//! Taffy reports positions relative to the parent; this module accumulates
//! them into document coordinates for every element.

use std::collections::HashMap;

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, NodeId, Rect, Size,
    Style, TaffyTree,
};

use crate::error::{Error, Result};
use crate::types::{Bounds, ElementId};

// =============================================================================
// BLUEPRINT
// =============================================================================

/// One element in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub element: ElementId,
    /// Fixed height, or `None` to fit children.
    pub height: Option<f32>,
    /// Uniform inner padding.
    pub padding: f32,
    /// Space between children.
    pub gap: f32,
    pub children: Vec<Block>,
}

impl Block {
    /// A fixed-height block with no children.
    pub fn leaf(element: ElementId, height: f32) -> Self {
        Self {
            element,
            height: Some(height),
            padding: 0.0,
            gap: 0.0,
            children: Vec::new(),
        }
    }

    /// A block sized by its children.
    pub fn container(element: ElementId, children: Vec<Block>) -> Self {
        Self {
            element,
            height: None,
            padding: 0.0,
            gap: 0.0,
            children,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }
}

/// The whole page: a column of top-level blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBlueprint {
    pub width: f32,
    /// Space between top-level blocks.
    pub gap: f32,
    pub blocks: Vec<Block>,
}

impl PageBlueprint {
    pub fn new(width: f32, blocks: Vec<Block>) -> Self {
        Self {
            width,
            gap: 0.0,
            blocks,
        }
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Computed document-space bounds for every block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageGeometry {
    pub document_height: f32,
    bounds: HashMap<ElementId, Bounds>,
}

impl PageGeometry {
    pub fn bounds(&self, element: ElementId) -> Option<Bounds> {
        self.bounds.get(&element).copied()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

// =============================================================================
// STYLE CONVERSION
// =============================================================================

fn length(v: f32) -> LengthPercentage {
    LengthPercentage::Length(v)
}

fn block_style(block: &Block) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        flex_shrink: 0.0,
        size: Size {
            width: Dimension::Auto,
            height: block.height.map(Dimension::Length).unwrap_or(Dimension::Auto),
        },
        padding: Rect {
            left: length(block.padding),
            right: length(block.padding),
            top: length(block.padding),
            bottom: length(block.padding),
        },
        gap: Size {
            width: length(0.0),
            height: length(block.gap),
        },
        ..Default::default()
    }
}

fn root_style(page: &PageBlueprint) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width: Dimension::Length(page.width),
            height: Dimension::Auto,
        },
        gap: Size {
            width: length(0.0),
            height: length(page.gap),
        },
        ..Default::default()
    }
}

// =============================================================================
// LAYOUT COMPUTATION
// =============================================================================

fn build_node(
    tree: &mut TaffyTree<()>,
    block: &Block,
    index: &mut HashMap<NodeId, ElementId>,
) -> Result<NodeId> {
    let mut children = Vec::with_capacity(block.children.len());
    for child in &block.children {
        children.push(build_node(tree, child, index)?);
    }

    let node = tree
        .new_with_children(block_style(block), &children)
        .map_err(|e| Error::Layout(e.to_string()))?;
    index.insert(node, block.element);
    Ok(node)
}

fn collect(
    tree: &TaffyTree<()>,
    node: NodeId,
    parent_top: f32,
    elements: &HashMap<NodeId, ElementId>,
    out: &mut HashMap<ElementId, Bounds>,
) -> Result<()> {
    let layout = tree.layout(node).map_err(|e| Error::Layout(e.to_string()))?;
    let top = parent_top + layout.location.y;

    if let Some(&element) = elements.get(&node) {
        out.insert(element, Bounds::new(top, layout.size.height));
    }

    let children = tree.children(node).map_err(|e| Error::Layout(e.to_string()))?;
    for child in children {
        collect(tree, child, top, elements, out)?;
    }
    Ok(())
}

/// Lay out the blueprint and return document-space bounds per element.
pub fn compute_page_geometry(page: &PageBlueprint) -> Result<PageGeometry> {
    let mut tree: TaffyTree<()> = TaffyTree::new();
    let mut index = HashMap::new();

    let mut top_level = Vec::with_capacity(page.blocks.len());
    for block in &page.blocks {
        top_level.push(build_node(&mut tree, block, &mut index)?);
    }

    let root = tree
        .new_with_children(root_style(page), &top_level)
        .map_err(|e| Error::Layout(e.to_string()))?;

    let available = Size {
        width: AvailableSpace::Definite(page.width),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available)
        .map_err(|e| Error::Layout(e.to_string()))?;

    let mut bounds = HashMap::with_capacity(index.len());
    collect(&tree, root, 0.0, &index, &mut bounds)?;

    let document_height = tree
        .layout(root)
        .map_err(|e| Error::Layout(e.to_string()))?
        .size
        .height;

    Ok(PageGeometry {
        document_height,
        bounds,
    })
}
