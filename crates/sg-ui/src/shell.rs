//! Top chrome: title, search, language and theme toggles, favorites badge

use egui::{Align, Button, Context, Layout, RichText, TextEdit, TopBottomPanel};

use sg_core::GuideState;
use sg_data::{label, Language, ThemeChoice, UiLabel};

use crate::icons;

/// Navigation the shell requested this frame
#[derive(Debug, Default)]
pub struct ShellAction {
    pub go_home: bool,
    pub go_favorites: bool,
}

/// Render the top bar. Language and theme switches are applied to `state`
/// directly; page navigation is returned to the router.
pub fn top_bar(ctx: &Context, state: &GuideState, search: &mut String) -> ShellAction {
    let mut action = ShellAction::default();
    let (language, theme) = {
        let settings = state.settings.read();
        (settings.language, settings.theme)
    };
    let favorite_count = state.favorites.read().len();

    TopBottomPanel::top("top_shell").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let title = ui.add(
                Button::new(
                    RichText::new(format!(
                        "{} {}",
                        icons::STORE,
                        label(language, UiLabel::AppTitle)
                    ))
                    .size(16.0)
                    .strong(),
                )
                .frame(false),
            );
            if title.clicked() {
                action.go_home = true;
            }

            ui.separator();
            ui.add(
                TextEdit::singleline(search)
                    .hint_text(label(language, UiLabel::SearchPlaceholder))
                    .desired_width(220.0),
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Favorites badge, hidden count at zero
                let favorites_text = if favorite_count > 0 {
                    format!("{} {}", icons::HEART, favorite_count)
                } else {
                    icons::HEART_OUTLINE.to_string()
                };
                if ui
                    .button(favorites_text)
                    .on_hover_text(label(language, UiLabel::Favorites))
                    .clicked()
                {
                    action.go_favorites = true;
                }

                ui.separator();

                let (theme_icon, next_theme) = match theme {
                    ThemeChoice::Light => (icons::MOON, ThemeChoice::Dark),
                    ThemeChoice::Dark => (icons::SUN, ThemeChoice::Light),
                };
                if ui.button(theme_icon).clicked() {
                    state.set_theme(next_theme);
                }

                for (lang, caption) in [(Language::Ru, "Ру"), (Language::Ar, "ع")] {
                    if ui.selectable_label(language == lang, caption).clicked() {
                        state.set_language(lang);
                    }
                }
            });
        });
    });

    action
}
