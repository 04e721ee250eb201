// File: crates/trapviz-render-skia/src/text.rs
// Summary: Label shaping via Skia textlayout; places a paragraph by anchor and rotates it about the anchor point.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use skia_safe as skia;
use trapviz_core::{Anchor, DevicePoint, TextStyle as LabelStyle};

use crate::to_skia_color;

const FALLBACK_FAMILIES: [&str; 5] = ["DejaVu Sans", "Arial", "Helvetica", "Roboto", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    pub fn layout(&self, text: &str, style: &LabelStyle) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.font.size.max(1.0));
        ts.set_color(to_skia_color(style.color));
        let mut families: Vec<&str> = vec![style.font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != style.font.family));
        ts.set_font_families(&families);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of the laid-out label.
    pub fn measure(&self, text: &str, style: &LabelStyle) -> (f32, f32) {
        let p = self.layout(text, style);
        (p.longest_line(), p.height())
    }

    /// Draw `text` so that its `anchor` side sits on `pos`, rotated
    /// counter-clockwise by `style.angle` degrees around `pos`.
    pub fn draw(&self, canvas: &skia::Canvas, pos: DevicePoint, text: &str, style: &LabelStyle) {
        let paragraph = self.layout(text, style);
        let (dx, dy) = anchor_offset(style.anchor, paragraph.longest_line(), paragraph.height());

        canvas.save();
        canvas.translate((pos.x, pos.y));
        if style.angle != 0.0 {
            // device y points down, so a positive angle is a negative rotation
            canvas.rotate(-style.angle, None);
        }
        paragraph.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

/// Top-left corner of a `w` x `h` box relative to its anchor point.
pub fn anchor_offset(anchor: Anchor, w: f32, h: f32) -> (f32, f32) {
    match anchor {
        Anchor::Center => (-w / 2.0, -h / 2.0),
        Anchor::North => (-w / 2.0, 0.0),
        Anchor::South => (-w / 2.0, -h),
        Anchor::East => (-w, -h / 2.0),
        Anchor::West => (0.0, -h / 2.0),
    }
}
