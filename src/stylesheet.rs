//! Stylesheet generation for a sprite sheet
//!
//! Produces three independent artifacts from a laid-out sheet:
//! - SCSS variables: `$sheet-sprite-x`, `-y`, `-width`, `-height` per sprite
//! - SCSS mixins: one `@mixin sheet-sprite()` per sprite
//! - CSS classes: one `.sheet-sprite` rule per sprite
//!
//! Every number is in logical pixels (see [`crate::project`]).

use crate::layout::Placement;
use crate::project::{project, sheet_size};

/// Which stylesheet flavour to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFormat {
    /// Variables, mixins and classes
    #[default]
    Scss,
    /// Classes only
    Css,
}

impl StyleFormat {
    pub fn from_scss_flag(scss: bool) -> Self {
        if scss {
            StyleFormat::Scss
        } else {
            StyleFormat::Css
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            StyleFormat::Scss => "scss",
            StyleFormat::Css => "css",
        }
    }
}

/// Sheet-wide values every rule refers to.
#[derive(Debug, Clone)]
pub struct StyleContext<'a> {
    /// Sheet name, used as the identifier prefix and image file stem
    pub sheet_name: &'a str,
    /// URL folder the sheet image is served from
    pub url_prefix: &'a str,
    /// Sheet width in pixels
    pub width: u32,
    /// Sheet height in pixels
    pub height: u32,
}

impl StyleContext<'_> {
    fn image_url(&self) -> String {
        format!("{}/{}.png", self.url_prefix, self.sheet_name)
    }
}

/// Format a length in pixels with the shortest exact decimal form.
fn px(value: f64) -> String {
    // -0.0 would print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

/// Generate SCSS variable definitions for the sheet and each sprite.
pub fn scss_variables(ctx: &StyleContext, placements: &[Placement]) -> String {
    let name = ctx.sheet_name;
    let mut blocks = Vec::with_capacity(placements.len() + 2);

    blocks.push(format!("${}-url: url(\"{}\");\n", name, ctx.image_url()));
    blocks.push(format!(
        "${name}-width: {};\n${name}-height: {};\n",
        px(f64::from(ctx.width)),
        px(f64::from(ctx.height)),
    ));

    for placement in placements {
        let prefix = format!("{}-{}", name, placement.name);
        let r = project(placement);
        blocks.push(format!(
            "${prefix}-x: {};\n${prefix}-y: {};\n${prefix}-width: {};\n${prefix}-height: {};\n",
            px(r.x),
            px(r.y),
            px(r.width),
            px(r.height),
        ));
    }

    blocks.join("\n")
}

/// Generate one SCSS mixin per sprite.
pub fn scss_mixins(ctx: &StyleContext, placements: &[Placement]) -> String {
    placements
        .iter()
        .map(|p| {
            let size = background_size(ctx, p)
                .map(|(w, h)| format!("\n  @include background-size({} {});", w, h))
                .unwrap_or_default();
            rule_block(&format!("@mixin {}-{}()", ctx.sheet_name, p.name), ctx, p, &size)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate one CSS class per sprite.
pub fn css_classes(ctx: &StyleContext, placements: &[Placement]) -> String {
    placements
        .iter()
        .map(|p| {
            let size = background_size(ctx, p)
                .map(|(w, h)| format!("\n  background-size: {} {};", w, h))
                .unwrap_or_default();
            rule_block(&format!(".{}-{}", ctx.sheet_name, p.name), ctx, p, &size)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the full stylesheet text in the requested format.
pub fn render_stylesheet(ctx: &StyleContext, placements: &[Placement], format: StyleFormat) -> String {
    match format {
        StyleFormat::Scss => format!(
            "{}\n{}\n{}",
            scss_variables(ctx, placements),
            scss_mixins(ctx, placements),
            css_classes(ctx, placements)
        ),
        StyleFormat::Css => format!("{}\n", css_classes(ctx, placements)),
    }
}

/// Logical sheet size for a magnified sprite, `None` at 1x.
fn background_size(ctx: &StyleContext, placement: &Placement) -> Option<(String, String)> {
    if !placement.magnification.is_scaled() {
        return None;
    }
    let size = sheet_size(ctx.width, ctx.height, placement.factor());
    Some((px(size.width), px(size.height)))
}

fn rule_block(selector: &str, ctx: &StyleContext, placement: &Placement, extra: &str) -> String {
    let r = project(placement);
    format!(
        "{} {{\n  background: url(\"{}\") no-repeat {} {};{}\n  width: {};\n  height: {};\n}}\n",
        selector,
        ctx.image_url(),
        px(r.x),
        px(r.y),
        extra,
        px(r.width),
        px(r.height),
    )
}
