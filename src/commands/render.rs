use colored::{ColoredString, Colorize};
use crate::food::dish::Dish;
use crate::food::state::SearchState;
use crate::i18n::UiStrings;
use crate::preferences::Theme;
use crate::providers::utils::decode_data_uri;

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Rgb,
    pub heading: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub error: Rgb,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                accent: (244, 63, 94),
                heading: (255, 255, 255),
                text: (209, 213, 219),
                muted: (156, 163, 175),
                error: (248, 113, 113),
            },
            Theme::Light => Self {
                accent: (225, 29, 72),
                heading: (17, 24, 39),
                text: (55, 65, 81),
                muted: (107, 114, 128),
                error: (185, 28, 28),
            },
        }
    }

    fn paint(&self, text: &str, (r, g, b): Rgb) -> ColoredString {
        text.truecolor(r, g, b)
    }
}

pub fn print_header(strings: &UiStrings, palette: &Palette) {
    println!();
    println!("{}", palette.paint(strings.title, palette.accent).bold());
    println!("{}", palette.paint(strings.tagline, palette.muted));
    println!();
}

pub fn print_welcome(strings: &UiStrings, palette: &Palette) {
    println!("{}", palette.paint(strings.welcome_title, palette.heading).bold());
    println!("{}", palette.paint(strings.welcome_body, palette.text));
    println!("{}", palette.paint(strings.welcome_hint, palette.muted));
    println!();
}

pub fn print_dish(dish: &Dish, strings: &UiStrings, palette: &Palette) {
    println!();
    println!("{}", palette.paint(&dish.name, palette.heading).bold());
    println!("{}", palette.paint(&dish.description, palette.text));
    println!();

    println!("{}", palette.paint(strings.ingredients, palette.accent).bold());
    for ingredient in &dish.ingredients {
        println!("  • {}", palette.paint(ingredient, palette.text));
    }
    println!();

    println!("{}", palette.paint(strings.recipe, palette.accent).bold());
    for (index, step) in dish.recipe.iter().enumerate() {
        println!("  {}. {}", index + 1, palette.paint(step, palette.text));
    }
    println!();
}

pub fn print_images(state: &SearchState, strings: &UiStrings, palette: &Palette) {
    if state.images_loading {
        println!("🖼️  {}", palette.paint(strings.loading_images, palette.muted));
        return;
    }
    let Some(dish) = &state.dish else {
        return;
    };
    if state.images.is_empty() {
        if state.error.is_none() {
            println!("🖼️  {}", palette.paint(strings.no_images, palette.muted));
        }
        return;
    }
    for (index, uri) in state.images.iter().enumerate() {
        let alt = strings.image_alt_text(&dish.name, index);
        let detail = match decode_data_uri(uri) {
            Some((mime, bytes)) => format!("{}, {:.1} KB", mime, bytes.len() as f64 / 1024.0),
            None => "unreadable image".to_string(),
        };
        println!("🖼️  {} ({})", palette.paint(&alt, palette.text), palette.paint(&detail, palette.muted));
    }
    println!();
}

pub fn print_error(message: &str, strings: &UiStrings, palette: &Palette) {
    println!("❌ {}", palette.paint(strings.error_title, palette.error).bold());
    println!("   {}", palette.paint(message, palette.error));
    println!();
}

/// Full view of the current state.
pub fn print_state(state: &SearchState) {
    let strings = state.language.strings();
    let palette = Palette::for_theme(state.theme);

    if state.is_welcome() {
        print_welcome(strings, &palette);
        return;
    }
    if state.details_loading {
        println!("⏳ {}", palette.paint(strings.searching, palette.muted));
        return;
    }
    if let Some(dish) = &state.dish {
        print_dish(dish, strings, &palette);
    }
    print_images(state, strings, &palette);
    if let Some(error) = &state.error {
        print_error(error, strings, &palette);
    }
}

/// What is left to show once the dish itself has already been printed.
pub fn print_after_details(state: &SearchState) {
    let strings = state.language.strings();
    let palette = Palette::for_theme(state.theme);

    print_images(state, strings, &palette);
    if let Some(error) = &state.error {
        print_error(error, strings, &palette);
    }
}
