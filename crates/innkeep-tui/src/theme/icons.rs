//! Glyphs with ASCII fallbacks

/// Icon set resolved from the `ui.ascii_icons` setting.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    ascii: bool,
}

impl IconSet {
    pub fn new(ascii: bool) -> Self {
        Self { ascii }
    }

    /// Marker in front of the focused field.
    pub fn focus(&self) -> &'static str {
        if self.ascii {
            ">"
        } else {
            "▸"
        }
    }

    /// Bullet for list-style lines.
    pub fn bullet(&self) -> &'static str {
        if self.ascii {
            "*"
        } else {
            "•"
        }
    }

    /// Marker for a picked calendar day.
    pub fn picked(&self) -> &'static str {
        if self.ascii {
            "x"
        } else {
            "●"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fallbacks() {
        let icons = IconSet::new(true);
        assert_eq!(icons.focus(), ">");
        assert_eq!(icons.bullet(), "*");

        let icons = IconSet::new(false);
        assert_eq!(icons.focus(), "▸");
    }
}
