//! The similar-stores carousel widget
//!
//! All interaction policy lives in the engine; this widget only feeds it
//! pointer and resize commands and paints the resulting context.

use egui::{pos2, vec2, Rect, Sense, Ui};
use tracing::debug;

use sg_core::{CarouselCommand, CarouselEngine};
use sg_data::{Language, Store, StoreId};

use crate::cards::{self, CARD_HEIGHT, CARD_WIDTH};
use crate::theme;
use crate::widget_utils::WidgetId;

/// What the user did inside the carousel this frame
#[derive(Debug, Default)]
pub struct CarouselResponse {
    /// A card was activated: navigate to that store's detail view
    pub activated: Option<StoreId>,
}

/// Show the carousel for `items`, driven by `engine`
pub fn carousel_ui(
    ui: &mut Ui,
    engine: &CarouselEngine,
    items: &[&Store],
    language: Language,
) -> CarouselResponse {
    let mut out = CarouselResponse::default();
    if items.is_empty() {
        // Optional chrome: no items means no carousel at all
        debug!("carousel skipped, nothing similar to show");
        return out;
    }

    let width = ui.available_width();
    if width <= 0.0 {
        return out;
    }
    engine.apply(CarouselCommand::Resize {
        viewport_width: width,
    });

    // Track with continuous drag feedback
    let (response, painter) =
        ui.allocate_painter(vec2(width, CARD_HEIGHT + 8.0), Sense::drag());
    let track_rect = response.rect;

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            engine.apply(CarouselCommand::DragStart { pointer_x: pos.x });
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            engine.apply(CarouselCommand::DragMove { pointer_x: pos.x });
        }
    }
    if response.drag_released() {
        engine.apply(CarouselCommand::DragEnd);
    }

    let context = engine.context();
    let origin_x = track_rect.left() + context.translate;
    for (index, store) in items.iter().enumerate() {
        let card_rect = Rect::from_min_size(
            pos2(
                origin_x + index as f32 * context.layout.item_span,
                track_rect.top() + 4.0,
            ),
            vec2(CARD_WIDTH, CARD_HEIGHT),
        );
        if !card_rect.intersects(track_rect) {
            continue;
        }

        let id = WidgetId::new("carousel_card").with(store.id.as_str()).id();
        let hit = ui.interact(card_rect.intersect(track_rect), id, Sense::click());
        cards::paint_store_card(&painter, ui.visuals(), card_rect, store, language, hit.hovered());
        if hit.clicked() {
            out.activated = Some(store.id.clone());
        }
    }

    indicator_dots(ui, engine, context.total_slides, context.current_slide);

    out
}

/// One dot per slide; clicking a dot navigates directly
fn indicator_dots(ui: &mut Ui, engine: &CarouselEngine, total: usize, current: usize) {
    if total == 0 {
        return;
    }

    const DOT_SPACING: f32 = 18.0;
    let (row_rect, _) =
        ui.allocate_exact_size(vec2(ui.available_width(), 22.0), Sense::hover());
    let start_x = row_rect.center().x - (total as f32 - 1.0) * DOT_SPACING / 2.0;

    for i in 0..total {
        let center = pos2(start_x + i as f32 * DOT_SPACING, row_rect.center().y);
        let dot_rect = Rect::from_center_size(center, vec2(14.0, 14.0));
        let id = WidgetId::new("carousel_dot").index(i).id();
        let dot = ui.interact(dot_rect, id, Sense::click());

        let (radius, color) = if i == current {
            (5.0, theme::accent_color())
        } else if dot.hovered() {
            (4.0, ui.visuals().widgets.hovered.fg_stroke.color)
        } else {
            (3.5, ui.visuals().weak_text_color())
        };
        ui.painter().circle_filled(center, radius, color);

        if dot.clicked() {
            engine.apply(CarouselCommand::GoToSlide(i));
        }
    }
}
