//! Store and category cards

use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect, Rounding, Sense, Stroke, Ui, Visuals};

use sg_core::carousel::ITEM_WIDTH;
use sg_data::{Category, Language, Store};

use crate::widget_utils::WidgetId;
use crate::{icons, theme};

/// Card content width; the carousel track is laid out around this
pub const CARD_WIDTH: f32 = ITEM_WIDTH;
pub const CARD_HEIGHT: f32 = 110.0;

/// What the user did to a store card this frame
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreCardResponse {
    /// Card body was clicked: open the detail view
    pub activated: bool,
    /// The heart was clicked: flip favorite status
    pub favorite_toggled: bool,
}

/// A store card in the listing grid, with a favorite toggle
pub fn store_card(
    ui: &mut Ui,
    store: &Store,
    language: Language,
    favorited: bool,
) -> StoreCardResponse {
    let mut out = StoreCardResponse::default();
    let (rect, response) = ui.allocate_exact_size(vec2(CARD_WIDTH, CARD_HEIGHT), Sense::click());
    if !ui.is_rect_visible(rect) {
        return out;
    }

    paint_store_card(ui.painter(), ui.visuals(), rect, store, language, response.hovered());

    // The heart sits on top of the card's click area
    let heart_rect = Rect::from_min_size(
        pos2(rect.right() - 32.0, rect.top() + 6.0),
        vec2(26.0, 26.0),
    );
    let heart_id = WidgetId::new("store_fav").with(store.id.as_str()).id();
    let heart = ui.interact(heart_rect, heart_id, Sense::click());
    let (heart_icon, heart_color) = if favorited {
        (icons::HEART, theme::favorite_color())
    } else if heart.hovered() {
        (icons::HEART_OUTLINE, theme::favorite_color())
    } else {
        (icons::HEART_OUTLINE, ui.visuals().weak_text_color())
    };
    ui.painter().text(
        heart_rect.center(),
        Align2::CENTER_CENTER,
        heart_icon,
        FontId::proportional(16.0),
        heart_color,
    );

    if heart.clicked() {
        out.favorite_toggled = true;
    } else if response.clicked() {
        out.activated = true;
    }
    out
}

/// Paint a card body into `rect`. Interaction is the caller's business,
/// which lets the carousel reuse the same card under its drag handling.
pub fn paint_store_card(
    painter: &Painter,
    visuals: &Visuals,
    rect: Rect,
    store: &Store,
    language: Language,
    hovered: bool,
) {
    let fill = if hovered {
        visuals.widgets.hovered.bg_fill
    } else {
        visuals.faint_bg_color
    };
    painter.rect_filled(rect, Rounding::same(8.0), fill);
    painter.rect_stroke(
        rect,
        Rounding::same(8.0),
        if hovered {
            Stroke::new(1.0, theme::accent_color())
        } else {
            visuals.widgets.noninteractive.bg_stroke
        },
    );

    // Logo placeholder: a colored monogram circle
    let monogram_center = pos2(rect.left() + 28.0, rect.top() + 30.0);
    painter.circle_filled(monogram_center, 18.0, monogram_color(store));
    let initial = store
        .name
        .get(language)
        .chars()
        .next()
        .unwrap_or('?')
        .to_string();
    painter.text(
        monogram_center,
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(16.0),
        Color32::WHITE,
    );

    let text_color = visuals.widgets.noninteractive.fg_stroke.color;
    painter.text(
        pos2(rect.left() + 54.0, rect.top() + 22.0),
        Align2::LEFT_CENTER,
        store.name.get(language),
        FontId::proportional(15.0),
        text_color,
    );
    painter.text(
        pos2(rect.left() + 54.0, rect.top() + 42.0),
        Align2::LEFT_CENTER,
        format!("{} {:.1}", icons::STAR, store.rating),
        FontId::proportional(12.0),
        theme::rating_color(),
    );

    // Description, wrapped to the card width
    let description = painter.layout(
        store.description.get(language).to_string(),
        FontId::proportional(12.0),
        visuals.weak_text_color(),
        rect.width() - 20.0,
    );
    painter.galley(pos2(rect.left() + 10.0, rect.top() + 60.0), description);
}

/// A category filter chip; returns true when clicked
pub fn category_chip(ui: &mut Ui, category: &Category, language: Language, active: bool) -> bool {
    ui.selectable_label(
        active,
        format!("{} {}", category.icon, category.name.get(language)),
    )
    .clicked()
}

fn monogram_color(store: &Store) -> Color32 {
    const PALETTE: [Color32; 5] = [
        Color32::from_rgb(186, 85, 160),
        Color32::from_rgb(90, 120, 220),
        Color32::from_rgb(80, 160, 120),
        Color32::from_rgb(210, 130, 60),
        Color32::from_rgb(150, 90, 200),
    ];
    let sum: usize = store.id.as_str().bytes().map(|b| b as usize).sum();
    PALETTE[sum % PALETTE.len()]
}
