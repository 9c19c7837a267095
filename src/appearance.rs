use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use strum::{AsRefStr, Display};
use time::Duration;

pub const BRAND_FONT_COOKIE: &str = "brand_font";
pub const HERO_FONT_COOKIE: &str = "hero_font";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum FontCategory {
    #[strum(serialize = "Sans-Serif")]
    SansSerif,
    Serif,
    Display,
    Script,
}

impl FontCategory {
    pub const ALL: [FontCategory; 4] = [
        FontCategory::SansSerif,
        FontCategory::Serif,
        FontCategory::Display,
        FontCategory::Script,
    ];
}

#[derive(Debug, PartialEq, Eq)]
pub struct FontOption {
    pub name: &'static str,
    pub stack: &'static str,
    pub category: FontCategory,
}

const fn font(name: &'static str, stack: &'static str, category: FontCategory) -> FontOption {
    FontOption {
        name,
        stack,
        category,
    }
}

pub static FONT_OPTIONS: [FontOption; 23] = [
    font("Inter", "Inter, sans-serif", FontCategory::SansSerif),
    font("Poppins", "Poppins, sans-serif", FontCategory::SansSerif),
    font("Montserrat", "Montserrat, sans-serif", FontCategory::SansSerif),
    font("Raleway", "Raleway, sans-serif", FontCategory::SansSerif),
    font("Work Sans", "Work Sans, sans-serif", FontCategory::SansSerif),
    font("DM Sans", "DM Sans, sans-serif", FontCategory::SansSerif),
    font("Playfair Display", "Playfair Display, serif", FontCategory::Serif),
    font("Merriweather", "Merriweather, serif", FontCategory::Serif),
    font("Lora", "Lora, serif", FontCategory::Serif),
    font("Crimson Pro", "Crimson Pro, serif", FontCategory::Serif),
    font("EB Garamond", "EB Garamond, serif", FontCategory::Serif),
    font("Cormorant", "Cormorant, serif", FontCategory::Serif),
    font("Bebas Neue", "Bebas Neue, sans-serif", FontCategory::Display),
    font("Orbitron", "Orbitron, sans-serif", FontCategory::Display),
    font("Space Grotesk", "Space Grotesk, sans-serif", FontCategory::Display),
    font("Righteous", "Righteous, sans-serif", FontCategory::Display),
    font("Russo One", "Russo One, sans-serif", FontCategory::Display),
    font("Anton", "Anton, sans-serif", FontCategory::Display),
    font("Pacifico", "Pacifico, cursive", FontCategory::Script),
    font("Dancing Script", "Dancing Script, cursive", FontCategory::Script),
    font("Great Vibes", "Great Vibes, cursive", FontCategory::Script),
    font("Satisfy", "Satisfy, cursive", FontCategory::Script),
    font("Caveat", "Caveat, cursive", FontCategory::Script),
];

pub fn find_font(name: &str) -> Option<&'static FontOption> {
    FONT_OPTIONS.iter().find(|font| font.name == name)
}

pub fn fonts_in(category: FontCategory) -> impl Iterator<Item = &'static FontOption> {
    FONT_OPTIONS
        .iter()
        .filter(move |font| font.category == category)
}

/// Fonts the visitor picked in the playground. Passed into every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub brand_font: &'static FontOption,
    pub hero_font: &'static FontOption,
}

pub static DEFAULT_APPEARANCE: Appearance = Appearance {
    brand_font: &FONT_OPTIONS[3],
    hero_font: &FONT_OPTIONS[10],
};

impl Default for Appearance {
    fn default() -> Self {
        DEFAULT_APPEARANCE
    }
}

impl Appearance {
    /// Unknown or missing cookies fall back to the defaults.
    pub fn from_jar(jar: &CookieJar) -> Self {
        let pick = |name: &str, fallback: &'static FontOption| {
            jar.get(name)
                .and_then(|cookie| find_font(cookie.value()))
                .unwrap_or(fallback)
        };

        Self {
            brand_font: pick(BRAND_FONT_COOKIE, DEFAULT_APPEARANCE.brand_font),
            hero_font: pick(HERO_FONT_COOKIE, DEFAULT_APPEARANCE.hero_font),
        }
    }

    pub fn save(&self, jar: CookieJar) -> CookieJar {
        jar.add(cookie(BRAND_FONT_COOKIE, self.brand_font.name))
            .add(cookie(HERO_FONT_COOKIE, self.hero_font.name))
    }

    pub fn clear(jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(BRAND_FONT_COOKIE).path("/"))
            .remove(Cookie::build(HERO_FONT_COOKIE).path("/"))
    }

    /// Google Fonts `family=` query for both fonts.
    pub fn font_query(&self) -> String {
        let mut families = vec![self.brand_font.name, self.hero_font.name];
        families.dedup();

        families
            .iter()
            .map(|name| format!("family={}", urlencoding::encode(name).replace("%20", "+")))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Stylesheet URL loading both fonts.
    pub fn font_href(&self) -> String {
        format!(
            "https://fonts.googleapis.com/css2?{}&display=swap",
            self.font_query()
        )
    }
}

fn cookie(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(365))
        .build()
}
