//! Presentation tree for decoded structures.
//!
//! Every decoded value becomes a [`TreeNode`] whose label follows the
//! dissector conventions: primitives render as `"<name> : <TYPE> (<value>)"`,
//! structures as `"<name> : <TYPE>"` and shape records by their record name.
//! Absent optional fields produce no child.

use oxiswf_core::{FileElement, Fixed8, Flag, FloatFBits, SBits, UBits, UInt8, UInt16};
use oxiswf_shape::{
    Color, CurvedEdgeRecord, EndShapeRecord, FillStyle, FillStyleArray, FillStyleKind,
    FocalGradient, Gradient, GradientRecord, LineStyle, LineStyle2, LineStyleArray,
    LineStyleRecord, Matrix, NewStyles, Rgb, Rgba, Shape, ShapeRecord, ShapeRecordList,
    ShapeWithStyle, StraightEdgeRecord, StyleChangeRecord,
};
use serde::Serialize;
use std::fmt;

/// One node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Field name, e.g. `ShapeRecord[3]`.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Absolute bit offset of the element.
    pub bit_position: u64,
    /// Bits occupied by the element.
    pub bit_length: u64,
    /// Child elements in stream order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(
        name: &str,
        label: String,
        element: &impl FileElement,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.to_string(),
            label,
            bit_position: element.bit_position(),
            bit_length: element.bit_length(),
            children,
        }
    }

    fn primitive(
        name: &str,
        type_name: &str,
        value: impl fmt::Display,
        element: &impl FileElement,
    ) -> Self {
        Self::new(
            name,
            format!("{} : {} ({})", name, type_name, value),
            element,
            Vec::new(),
        )
    }

    fn structure(
        name: &str,
        type_name: &str,
        element: &impl FileElement,
        children: Vec<TreeNode>,
    ) -> Self {
        Self::new(name, format!("{} : {}", name, type_name), element, children)
    }

    /// Find a direct child by name.
    #[cfg(test)]
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{}  [bit {}, {} bits]",
            "",
            self.label,
            self.bit_position,
            self.bit_length,
            indent = depth * 2
        )?;
        for child in &self.children {
            child.fmt_depth(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_depth(f, 0)
    }
}

/// Conversion of a decoded value into a presentation node.
pub trait ToTree {
    /// Build the node for this value under field name `name`.
    fn to_tree(&self, name: &str) -> TreeNode;
}

/// Child list builder.
#[derive(Default)]
struct Children(Vec<TreeNode>);

impl Children {
    fn new() -> Self {
        Self::default()
    }

    fn add(mut self, name: &str, value: &impl ToTree) -> Self {
        self.0.push(value.to_tree(name));
        self
    }

    fn add_opt<T: ToTree>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.add(name, value),
            None => self,
        }
    }

    fn add_list<T: ToTree>(mut self, name: &str, items: &[T]) -> Self {
        self.0.extend(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| item.to_tree(&format!("{}[{}]", name, i))),
        );
        self
    }

    fn extend(mut self, nodes: Vec<TreeNode>) -> Self {
        self.0.extend(nodes);
        self
    }

    fn build(self) -> Vec<TreeNode> {
        self.0
    }
}

impl ToTree for UBits {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "UBITS", self.value(), self)
    }
}

impl ToTree for SBits {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "SBITS", self.value(), self)
    }
}

impl ToTree for Flag {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "FLAG", self.value(), self)
    }
}

impl ToTree for FloatFBits {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "FLOATFBITS", format!("{:.6}", self.value()), self)
    }
}

impl ToTree for UInt8 {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "UINT8", self.value(), self)
    }
}

impl ToTree for UInt16 {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "UINT16", self.value(), self)
    }
}

impl ToTree for Fixed8 {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::primitive(name, "FIXED8", format!("{:.6}", self.value()), self)
    }
}

impl ToTree for Matrix {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("HasScale", &self.has_scale())
            .add_opt("NScaleBits", self.n_scale_bits().as_ref())
            .add_opt("ScaleX", self.scale_x().as_ref())
            .add_opt("ScaleY", self.scale_y().as_ref())
            .add("HasRotate", &self.has_rotate())
            .add_opt("NRotateBits", self.n_rotate_bits().as_ref())
            .add_opt("RotateSkew0", self.rotate_skew0().as_ref())
            .add_opt("RotateSkew1", self.rotate_skew1().as_ref())
            .add("NTranslateBits", &self.n_translate_bits())
            .add("TranslateX", &self.translate_x())
            .add("TranslateY", &self.translate_y())
            .build();
        TreeNode::structure(name, "MATRIX", self, children)
    }
}

impl ToTree for Rgb {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("Red", &self.red())
            .add("Green", &self.green())
            .add("Blue", &self.blue())
            .build();
        TreeNode::structure(name, "RGB", self, children)
    }
}

impl ToTree for Rgba {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("Red", &self.red())
            .add("Green", &self.green())
            .add("Blue", &self.blue())
            .add("Alpha", &self.alpha())
            .build();
        TreeNode::structure(name, "RGBA", self, children)
    }
}

impl ToTree for Color {
    fn to_tree(&self, name: &str) -> TreeNode {
        match self {
            Self::Rgb(c) => c.to_tree(name),
            Self::Rgba(c) => c.to_tree(name),
        }
    }
}

impl ToTree for GradientRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("Ratio", &self.ratio())
            .add("Color", self.color())
            .build();
        TreeNode::structure(name, "GRADRECORD", self, children)
    }
}

fn gradient_children(gradient: &Gradient) -> Children {
    Children::new()
        .add("SpreadMode", &gradient.spread_mode())
        .add("InterpolationMode", &gradient.interpolation_mode())
        .add("NumGradients", &gradient.num_gradients())
        .add_list("GradientRecords", gradient.records())
}

impl ToTree for Gradient {
    fn to_tree(&self, name: &str) -> TreeNode {
        TreeNode::structure(name, "GRADIENT", self, gradient_children(self).build())
    }
}

impl ToTree for FocalGradient {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = gradient_children(self.gradient())
            .add("FocalPoint", &self.focal_point())
            .build();
        TreeNode::structure(name, "FOCALGRADIENT", self, children)
    }
}

impl ToTree for FillStyle {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new().add("FillStyleType", &self.fill_style_type());
        let children = match self.kind() {
            FillStyleKind::Solid { color } => children.add("Color", color),
            FillStyleKind::Gradient { matrix, gradient } => children
                .add("GradientMatrix", matrix)
                .add("Gradient", gradient),
            FillStyleKind::FocalGradient { matrix, gradient } => children
                .add("GradientMatrix", matrix)
                .add("Gradient", gradient),
            FillStyleKind::Bitmap { bitmap_id, matrix } => children
                .add("BitmapId", bitmap_id)
                .add("BitmapMatrix", matrix),
        };
        TreeNode::structure(name, "FILLSTYLE", self, children.build())
    }
}

impl ToTree for FillStyleArray {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("FillStyleCount", &self.count())
            .add_opt("FillStyleCountExtended", self.count_extended().as_ref())
            .add_list("FillStyles", self.styles())
            .build();
        TreeNode::structure(name, "FILLSTYLEARRAY", self, children)
    }
}

impl ToTree for LineStyle {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("Width", &self.width())
            .add("Color", self.color())
            .build();
        TreeNode::structure(name, "LINESTYLE", self, children)
    }
}

impl ToTree for LineStyle2 {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("Width", &self.width())
            .add("StartCapStyle", &self.start_cap_style())
            .add("JoinStyle", &self.join_style())
            .add("HasFillFlag", &self.has_fill())
            .add("NoHScaleFlag", &self.no_h_scale())
            .add("NoVScaleFlag", &self.no_v_scale())
            .add("PixelHintingFlag", &self.pixel_hinting())
            .add("Reserved", &self.reserved())
            .add("NoClose", &self.no_close())
            .add("EndCapStyle", &self.end_cap_style())
            .add_opt("MiterLimitFactor", self.miter_limit_factor().as_ref())
            .add_opt("Color", self.color())
            .add_opt("FillType", self.fill_type())
            .build();
        TreeNode::structure(name, "LINESTYLE2", self, children)
    }
}

impl ToTree for LineStyleRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        match self {
            Self::LineStyle(style) => style.to_tree(name),
            Self::LineStyle2(style) => style.to_tree(name),
        }
    }
}

impl ToTree for LineStyleArray {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("LineStyleCount", &self.count())
            .add_opt("LineStyleCountExtended", self.count_extended().as_ref())
            .add_list("LineStyles", self.styles())
            .build();
        TreeNode::structure(name, "LINESTYLEARRAY", self, children)
    }
}

fn record_node(
    name: &str,
    record: &impl FileElement,
    kind: &str,
    children: Vec<TreeNode>,
) -> TreeNode {
    TreeNode::new(name, format!("{} : {}", name, kind), record, children)
}

impl ToTree for EndShapeRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("TypeFlag", &self.type_flag())
            .add("EndOfShape", &self.end_of_shape())
            .build();
        record_node(name, self, "EndShapeRecord", children)
    }
}

impl ToTree for StraightEdgeRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("TypeFlag", &self.type_flag())
            .add("StraightFlag", &self.straight_flag())
            .add("NumBits", &self.num_bits())
            .add("GeneralLineFlag", &self.general_line_flag())
            .add_opt("VertLineFlag", self.vert_line_flag().as_ref())
            .add_opt("DeltaX", self.delta_x().as_ref())
            .add_opt("DeltaY", self.delta_y().as_ref())
            .build();
        record_node(name, self, "StraightEdgeRecord", children)
    }
}

impl ToTree for CurvedEdgeRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("TypeFlag", &self.type_flag())
            .add("StraightFlag", &self.straight_flag())
            .add("NumBits", &self.num_bits())
            .add("ControlDeltaX", &self.control_delta_x())
            .add("ControlDeltaY", &self.control_delta_y())
            .add("AnchorDeltaX", &self.anchor_delta_x())
            .add("AnchorDeltaY", &self.anchor_delta_y())
            .build();
        record_node(name, self, "CurvedEdgeRecord", children)
    }
}

fn new_styles_children(styles: &NewStyles) -> Vec<TreeNode> {
    Children::new()
        .add("FillStyles", styles.fill_styles())
        .add("LineStyles", styles.line_styles())
        .add("NumFillBits", &styles.num_fill_bits())
        .add("NumLineBits", &styles.num_line_bits())
        .build()
}

impl ToTree for StyleChangeRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("TypeFlag", &self.type_flag())
            .add("StateNewStyles", &self.state_new_styles())
            .add("StateLineStyle", &self.state_line_style())
            .add("StateFillStyle1", &self.state_fill_style1())
            .add("StateFillStyle0", &self.state_fill_style0())
            .add("StateMoveTo", &self.state_move_to())
            .add_opt("MoveBits", self.move_bits().as_ref())
            .add_opt("MoveDeltaX", self.move_delta_x().as_ref())
            .add_opt("MoveDeltaY", self.move_delta_y().as_ref())
            .add_opt("FillStyle0", self.fill_style0().as_ref())
            .add_opt("FillStyle1", self.fill_style1().as_ref())
            .add_opt("LineStyle", self.line_style().as_ref())
            .extend(self.new_styles().map(new_styles_children).unwrap_or_default())
            .build();
        record_node(name, self, "StyleChangeRecord", children)
    }
}

impl ToTree for ShapeRecord {
    fn to_tree(&self, name: &str) -> TreeNode {
        match self {
            Self::EndShape(record) => record.to_tree(name),
            Self::StraightEdge(record) => record.to_tree(name),
            Self::CurvedEdge(record) => record.to_tree(name),
            Self::StyleChange(record) => record.to_tree(name),
        }
    }
}

impl ToTree for ShapeRecordList {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new().add_list(name, self.records()).build();
        TreeNode::structure(name, "SHAPERECORDLIST", self, children)
    }
}

impl ToTree for Shape {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("NumFillBits", &self.num_fill_bits())
            .add("NumLineBits", &self.num_line_bits())
            .add("ShapeRecord", self.records())
            .build();
        TreeNode::structure(name, "SHAPE", self, children)
    }
}

impl ToTree for ShapeWithStyle {
    fn to_tree(&self, name: &str) -> TreeNode {
        let children = Children::new()
            .add("FillStyles", self.fill_styles())
            .add("LineStyles", self.line_styles())
            .add("Shape", self.shape())
            .build();
        TreeNode::structure(name, "SHAPEWITHSTYLE", self, children)
    }
}
