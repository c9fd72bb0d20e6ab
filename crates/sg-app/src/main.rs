//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use parking_lot::RwLock;
use tracing::{error, info};

use sg_core::events::{events, handler_from_fn};
use sg_core::{CarouselContext, CarouselSubscriber, DetailSession, GuideState};
use sg_data::{builtin_catalog, label, PrefStore, Store, StoreId, ThemeChoice, UiLabel};
use sg_ui::{apply_theme, carousel_ui, category_chip, icons, shell, store_card};

/// Pages reachable from the shell
#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Home,
    Favorites,
    Detail,
}

/// Keeps the UI fresh when the carousel commits a change
struct RepaintSubscriber {
    ctx: Context,
}

impl CarouselSubscriber for RepaintSubscriber {
    fn on_carousel_change(&self, _context: &CarouselContext) {
        self.ctx.request_repaint();
    }
}

/// What the detail page asked for this frame
#[derive(Default)]
struct DetailAction {
    back: bool,
    open: Option<StoreId>,
}

/// Main application state
struct GuideApp {
    state: GuideState,

    /// Current page
    page: Page,

    /// Session behind the open detail view, if any
    detail: Option<DetailSession>,

    /// Search box contents
    search: String,

    /// Active category filter; None shows everything
    selected_category: Option<String>,

    /// Theme currently applied to the egui context
    applied_theme: ThemeChoice,

    /// Kept alive so the carousel's weak reference stays valid
    repaint: Arc<RepaintSubscriber>,
}

impl GuideApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = PrefStore::open_default();

        let state = GuideState::new(builtin_catalog());
        *state.favorites.write() = prefs.favorites();
        {
            let mut settings = state.settings.write();
            settings.language = prefs.language();
            settings.theme = prefs.theme();
        }

        let applied_theme = state.settings.read().theme;
        apply_theme(&cc.egui_ctx, applied_theme);

        wire_persistence(&state, prefs);

        state
            .event_bus
            .subscribe::<events::StoreOpened>(handler_from_fn(|event| {
                if let Some(opened) = event.as_any().downcast_ref::<events::StoreOpened>() {
                    info!("opened store {}", opened.store_id);
                }
            }));

        Self {
            state,
            page: Page::Home,
            detail: None,
            search: String::new(),
            selected_category: None,
            applied_theme,
            repaint: Arc::new(RepaintSubscriber {
                ctx: cc.egui_ctx.clone(),
            }),
        }
    }

    /// Build the detail session for a store and switch to it
    fn open_detail(&mut self, ctx: &Context, id: &StoreId) {
        let viewport_width = ctx.screen_rect().width();
        if let Some(session) = self.state.open_detail(id, viewport_width) {
            session.carousel.add_subscriber(self.repaint.clone());
            self.detail = Some(session);
            self.page = Page::Detail;
        }
    }

    fn home_page(&mut self, ui: &mut egui::Ui) -> Option<StoreId> {
        let language = self.state.settings.read().language;
        let catalog = self.state.catalog.clone();

        ui.heading(label(language, UiLabel::BrowseByCategory));
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            let all = ui.selectable_label(
                self.selected_category.is_none(),
                format!("{} {}", icons::STORE, label(language, UiLabel::AllCategories)),
            );
            if all.clicked() {
                self.selected_category = None;
                self.state
                    .event_bus
                    .publish(events::CategorySelected { category_id: None });
            }
            for category in catalog.categories() {
                let active = self.selected_category.as_deref() == Some(category.id.as_str());
                if category_chip(ui, category, language, active) {
                    self.selected_category = Some(category.id.clone());
                    self.state.event_bus.publish(events::CategorySelected {
                        category_id: Some(category.id.clone()),
                    });
                }
            }
        });

        ui.add_space(10.0);
        ui.heading(label(language, UiLabel::FeaturedStores));
        ui.add_space(4.0);

        let stores = catalog.filtered(
            self.selected_category.as_deref(),
            &self.search,
            language,
        );
        if stores.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(label(language, UiLabel::NoStores));
            });
            return None;
        }

        let mut open = None;
        egui::ScrollArea::vertical()
            .id_source("stores_scroll")
            .show(ui, |ui| {
                open = self.store_grid(ui, &stores);
            });
        open
    }

    fn favorites_page(&mut self, ui: &mut egui::Ui) -> Option<StoreId> {
        let language = self.state.settings.read().language;
        let catalog = self.state.catalog.clone();

        ui.heading(label(language, UiLabel::Favorites));
        ui.add_space(4.0);

        let ids = self.state.favorites.read().sorted_ids();
        let stores: Vec<&Store> = ids.iter().filter_map(|id| catalog.get(id)).collect();
        if stores.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(label(language, UiLabel::NoFavorites));
            });
            return None;
        }

        let mut open = None;
        egui::ScrollArea::vertical()
            .id_source("favorites_scroll")
            .show(ui, |ui| {
                open = self.store_grid(ui, &stores);
            });
        open
    }

    fn detail_page(&mut self, ui: &mut egui::Ui) -> DetailAction {
        let mut action = DetailAction::default();
        let language = self.state.settings.read().language;
        let catalog = self.state.catalog.clone();

        let session = match &self.detail {
            Some(session) => session,
            None => {
                action.back = true;
                return action;
            }
        };
        let store = match catalog.get(&session.store_id) {
            Some(store) => store,
            None => {
                action.back = true;
                return action;
            }
        };

        if ui
            .button(format!("{} {}", icons::BACK, label(language, UiLabel::Back)))
            .clicked()
        {
            action.back = true;
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.heading(store.name.get(language));
            let favorited = self.state.favorites.read().contains(&store.id);
            let heart = if favorited {
                icons::HEART
            } else {
                icons::HEART_OUTLINE
            };
            if ui.button(heart).clicked() {
                self.state.toggle_favorite(&store.id);
            }
        });
        ui.label(
            egui::RichText::new(format!("{} {:.1}", icons::STAR, store.rating))
                .color(sg_ui::rating_color()),
        );
        ui.add_space(4.0);
        ui.label(store.description.get(language));
        ui.hyperlink_to(label(language, UiLabel::VisitStore), &store.url);

        let similar = session.similar_stores(&catalog);
        if !similar.is_empty() {
            ui.add_space(16.0);
            ui.separator();
            ui.heading(label(language, UiLabel::SimilarStores));
            ui.add_space(4.0);
            let response = carousel_ui(ui, &session.carousel, &similar, language);
            if let Some(id) = response.activated {
                action.open = Some(id);
            }
        }

        action
    }

    /// Wrapped grid of store cards shared by the home and favorites pages
    fn store_grid(&self, ui: &mut egui::Ui, stores: &[&Store]) -> Option<StoreId> {
        let language = self.state.settings.read().language;
        let mut open = None;
        ui.horizontal_wrapped(|ui| {
            for store in stores {
                let favorited = self.state.favorites.read().contains(&store.id);
                let response = store_card(ui, store, language, favorited);
                if response.favorite_toggled {
                    self.state.toggle_favorite(&store.id);
                }
                if response.activated {
                    open = Some(store.id.clone());
                }
            }
        });
        open
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Re-apply visuals when the theme preference changed
        let theme = self.state.settings.read().theme;
        if theme != self.applied_theme {
            apply_theme(ctx, theme);
            self.applied_theme = theme;
        }

        let shell_action = shell::top_bar(ctx, &self.state, &mut self.search);
        if shell_action.go_home {
            self.page = Page::Home;
            self.detail = None;
        }
        if shell_action.go_favorites {
            self.page = Page::Favorites;
            self.detail = None;
        }

        let mut open = None;
        let mut back = false;
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => open = self.home_page(ui),
            Page::Favorites => open = self.favorites_page(ui),
            Page::Detail => {
                let action = self.detail_page(ui);
                open = action.open;
                back = action.back;
            }
        });

        if back {
            self.page = Page::Home;
            self.detail = None;
        }
        if let Some(id) = open {
            self.open_detail(ctx, &id);
        }
    }
}

/// Persist favorites, language and theme through the event bus
fn wire_persistence(state: &GuideState, prefs: PrefStore) {
    let prefs = Arc::new(RwLock::new(prefs));

    let favorites = state.favorites.clone();
    let prefs_for_favorites = prefs.clone();
    state
        .event_bus
        .subscribe::<events::FavoriteToggled>(handler_from_fn(move |_event| {
            let mut prefs = prefs_for_favorites.write();
            prefs.set_favorites(&favorites.read());
            if let Err(e) = prefs.save() {
                error!("failed to save favorites: {}", e);
            }
        }));

    let prefs_for_language = prefs.clone();
    state
        .event_bus
        .subscribe::<events::LanguageChanged>(handler_from_fn(move |event| {
            if let Some(changed) = event.as_any().downcast_ref::<events::LanguageChanged>() {
                let mut prefs = prefs_for_language.write();
                prefs.set_language(changed.language);
                if let Err(e) = prefs.save() {
                    error!("failed to save language: {}", e);
                }
            }
        }));

    let prefs_for_theme = prefs;
    state
        .event_bus
        .subscribe::<events::ThemeChanged>(handler_from_fn(move |event| {
            if let Some(changed) = event.as_any().downcast_ref::<events::ThemeChanged>() {
                let mut prefs = prefs_for_theme.write();
                prefs.set_theme(changed.theme);
                if let Err(e) = prefs.save() {
                    error!("failed to save theme: {}", e);
                }
            }
        }));
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting the store guide");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Store Guide",
        options,
        Box::new(|cc| Box::new(GuideApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
