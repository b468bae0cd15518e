#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Infernal,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Infernal,
            Theme::Infernal => Theme::Dark,
        }
    }

    /// Body class applied while this theme is active.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Infernal => "infernal-theme",
        }
    }

    /// Indicator text names the theme the toggle switches *to*.
    pub fn indicator_text(self) -> &'static str {
        match self {
            Theme::Dark => "Tema Infernal",
            Theme::Infernal => "Tema Sombrio",
        }
    }

    pub fn icon_html(self) -> &'static str {
        match self {
            Theme::Dark => "<i class=\"fas fa-moon\"></i>",
            Theme::Infernal => "<i class=\"fas fa-sun\"></i>",
        }
    }
}
