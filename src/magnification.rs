//! Sprite name parsing for high-density (`@2x`) variants
//!
//! A sprite stored at a higher pixel density than it is displayed carries its
//! magnification in its name: `icon@2x`, `logo@1.5x`. Anything that does not
//! match that shape is an ordinary 1x sprite whose name is used verbatim.

/// Magnification factor of a sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnification {
    /// Multiplier between sheet pixels and logical pixels. Always finite and > 0.
    pub factor: f64,
    /// Whether the factor came from an explicit `@<factor>x` suffix
    pub explicit: bool,
}

impl Magnification {
    /// The implicit 1x magnification.
    pub const NONE: Magnification = Magnification { factor: 1.0, explicit: false };

    /// Rows of padding a sprite of this magnification needs on each side.
    ///
    /// Unscaled sprites are never resampled, so they need no gutter.
    pub fn padding(&self) -> u32 {
        if self.is_scaled() {
            self.factor.ceil() as u32
        } else {
            0
        }
    }

    /// Whether sheet pixels and logical pixels differ for this sprite.
    pub fn is_scaled(&self) -> bool {
        self.factor != 1.0
    }
}

impl Default for Magnification {
    fn default() -> Self {
        Self::NONE
    }
}

/// A sprite name split into its base name and magnification.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteName {
    /// Name used in stylesheet identifiers
    pub base: String,
    pub magnification: Magnification,
}

impl SpriteName {
    /// Shorthand for `magnification.factor`.
    pub fn factor(&self) -> f64 {
        self.magnification.factor
    }
}

/// Parse a sprite name with an optional `@<factor>x` suffix.
///
/// The name must contain exactly one `@`, the part after it must end in `x`,
/// and the rest must parse as a positive finite number. Otherwise the sprite
/// is unmagnified and keeps its full name.
///
/// # Examples
///
/// ```
/// use spritestack::magnification::parse_sprite_name;
///
/// let retina = parse_sprite_name("icon@2x");
/// assert_eq!(retina.base, "icon");
/// assert_eq!(retina.factor(), 2.0);
/// assert!(retina.magnification.explicit);
///
/// let plain = parse_sprite_name("icon@2");
/// assert_eq!(plain.base, "icon@2");
/// assert_eq!(plain.factor(), 1.0);
/// ```
pub fn parse_sprite_name(name: &str) -> SpriteName {
    match parse_suffix(name) {
        Some((base, factor)) => SpriteName {
            base: base.to_string(),
            magnification: Magnification { factor, explicit: true },
        },
        None => SpriteName { base: name.to_string(), magnification: Magnification::NONE },
    }
}

fn parse_suffix(name: &str) -> Option<(&str, f64)> {
    let mut segments = name.split('@');
    let base = segments.next()?;
    let suffix = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let factor: f64 = suffix.strip_suffix('x')?.parse().ok()?;
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }

    Some((base, factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(name: &str) -> (bool, String, f64) {
        let n = parse_sprite_name(name);
        (n.magnification.explicit, n.base, n.magnification.factor)
    }

    #[test]
    fn test_retina_suffix() {
        assert_eq!(parsed("icon@2x"), (true, "icon".to_string(), 2.0));
    }

    #[test]
    fn test_plain_name() {
        assert_eq!(parsed("icon"), (false, "icon".to_string(), 1.0));
    }

    #[test]
    fn test_missing_trailing_x() {
        assert_eq!(parsed("icon@2"), (false, "icon@2".to_string(), 1.0));
    }

    #[test]
    fn test_fractional_factor() {
        assert_eq!(parsed("logo@1.5x"), (true, "logo".to_string(), 1.5));
    }

    #[test]
    fn test_non_numeric_factor() {
        assert_eq!(parsed("icon@bigx"), (false, "icon@bigx".to_string(), 1.0));
        assert_eq!(parsed("icon@x"), (false, "icon@x".to_string(), 1.0));
    }

    #[test]
    fn test_more_than_one_at() {
        assert_eq!(parsed("me@home@2x"), (false, "me@home@2x".to_string(), 1.0));
    }

    #[test]
    fn test_empty_suffix() {
        assert_eq!(parsed("icon@"), (false, "icon@".to_string(), 1.0));
    }

    #[test]
    fn test_factor_never_zero_or_negative() {
        assert_eq!(parsed("icon@0x").2, 1.0);
        assert_eq!(parsed("icon@-2x").2, 1.0);
        assert_eq!(parsed("icon@infx").2, 1.0);
        assert_eq!(parsed("icon@NaNx").2, 1.0);
    }

    #[test]
    fn test_padding_rounds_up() {
        assert_eq!(parse_sprite_name("a").magnification.padding(), 0);
        assert_eq!(parse_sprite_name("a@1x").magnification.padding(), 0);
        assert_eq!(parse_sprite_name("a@2x").magnification.padding(), 2);
        assert_eq!(parse_sprite_name("a@1.5x").magnification.padding(), 2);
        assert_eq!(parse_sprite_name("a@0.5x").magnification.padding(), 1);
    }

    #[test]
    fn test_explicit_one_is_not_scaled() {
        let n = parse_sprite_name("a@1x");
        assert!(n.magnification.explicit);
        assert!(!n.magnification.is_scaled());
    }
}
