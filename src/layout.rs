//! Sprite sheet layout - stacks sprites top to bottom in a single column
//!
//! Every sprite keeps its input position in the column. Magnified sprites are
//! separated from their neighbours by a gutter of transparent rows so that a
//! browser scaling the region back down never samples the adjacent sprite.
//! Two neighbours share one gutter, sized for the larger of their needs.

use image::RgbaImage;

use crate::magnification::{parse_sprite_name, Magnification};

/// A decoded sprite image and the name it was loaded under.
#[derive(Debug, Clone)]
pub struct NamedImage {
    /// Sprite name, including any `@<factor>x` suffix
    pub name: String,
    pub image: RgbaImage,
}

impl NamedImage {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self { name: name.into(), image }
    }
}

/// A rectangle in sheet pixel space, half-open on the max edges.
///
/// `min_y` can be -1 when the first sprite of a sheet is fudged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRect {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl SheetRect {
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }
}

/// Where one sprite sits in the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Base name with the magnification suffix stripped
    pub name: String,
    pub magnification: Magnification,
    /// Gutter rows above the sprite, after sharing with the previous sprite
    pub top_padding: u32,
    /// Gutter rows this sprite asks for below itself
    pub bottom_padding: u32,
    /// Whether the top edge was pulled up one row to round the height up
    pub fudged: bool,
    pub rect: SheetRect,
}

impl Placement {
    pub fn factor(&self) -> f64 {
        self.magnification.factor
    }
}

/// A sprite whose height is not a whole number of logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutWarning {
    pub sprite: String,
    pub height: u32,
    pub factor: f64,
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Height of sprite `{}` ({}px) is not a multiple of its magnification factor ({}x); \
             rounding up to avoid truncated pixels.",
            self.sprite, self.height, self.factor
        )
    }
}

/// Result of laying out a sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    /// Canvas width in pixels (widest sprite)
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// One placement per input image, in input order
    pub placements: Vec<Placement>,
    pub warnings: Vec<LayoutWarning>,
}

/// Lay out `images` as a single column, in order.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use spritestack::layout::{layout, NamedImage};
///
/// let images = vec![
///     NamedImage::new("a", RgbaImage::new(4, 10)),
///     NamedImage::new("b", RgbaImage::new(8, 20)),
/// ];
/// let sheet = layout(&images);
/// assert_eq!((sheet.width, sheet.height), (8, 30));
/// assert_eq!(sheet.placements[1].rect.min_y, 10);
/// ```
pub fn layout(images: &[NamedImage]) -> SheetLayout {
    let mut sheet = SheetLayout::default();
    let mut offset: i64 = 0;
    let mut prev_bottom: Option<u32> = None;

    for named in images {
        let sprite = parse_sprite_name(&named.name);
        let (width, height) = named.image.dimensions();
        let factor = sprite.factor();

        let bottom_padding = sprite.magnification.padding();
        let top_padding = match prev_bottom {
            Some(prev) => bottom_padding.max(prev),
            None => 0,
        };

        let fudged = f64::from(height) % factor != 0.0;
        if fudged {
            sheet.warnings.push(LayoutWarning { sprite: sprite.base.clone(), height, factor });
        }

        let top = offset + i64::from(top_padding);
        let rect = SheetRect {
            min_x: 0,
            min_y: top - i64::from(fudged),
            max_x: i64::from(width),
            max_y: top + i64::from(height),
        };

        sheet.placements.push(Placement {
            name: sprite.base,
            magnification: sprite.magnification,
            top_padding,
            bottom_padding,
            fudged,
            rect,
        });

        offset = rect.max_y;
        sheet.width = sheet.width.max(width);
        prev_bottom = Some(bottom_padding);
    }

    sheet.height = offset as u32;
    sheet
}
