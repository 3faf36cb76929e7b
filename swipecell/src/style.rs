//! Style fragments and the named slots a swipe cell exposes for overriding.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A partial style; unset fields leave whatever is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Overridable style slots of a swipe cell, supplied once at construction.
///
/// The button container's foreground paints the rule separating the button
/// from the content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeStyles {
    /// Outer container behind both layers.
    pub container: Style,
    /// Frame around the action button.
    pub button_container: Style,
    /// Action button body.
    pub button: Style,
    /// Action button label text.
    pub button_text: Style,
}

impl Default for SwipeStyles {
    fn default() -> Self {
        Self {
            container: Style::new(),
            button_container: Style::new().foreground(Rgb::new(0xe6, 0xe6, 0xe7)),
            button: Style::new().background(Rgb::new(0xf2, 0xf2, 0xf2)),
            button_text: Style::new()
                .foreground(Rgb::new(0x00, 0x00, 0x00))
                .background(Rgb::new(0xf2, 0xf2, 0xf2)),
        }
    }
}

impl SwipeStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, style: Style) -> Self {
        self.container = style;
        self
    }

    pub fn button_container(mut self, style: Style) -> Self {
        self.button_container = style;
        self
    }

    pub fn button(mut self, style: Style) -> Self {
        self.button = style;
        self
    }

    pub fn button_text(mut self, style: Style) -> Self {
        self.button_text = style;
        self
    }
}
