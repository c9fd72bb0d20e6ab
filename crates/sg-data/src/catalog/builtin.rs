//! Built-in seed catalog shipped with the application

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{Catalog, Category, Store, StoreId};
use crate::i18n::LocalizedText;

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(build()));

/// The catalog every session starts from
pub fn builtin_catalog() -> Arc<Catalog> {
    BUILTIN.clone()
}

fn category(id: &str, ar: &str, ru: &str, icon: &str) -> Category {
    Category {
        id: id.to_string(),
        name: LocalizedText::new(ar, ru),
        icon: icon.to_string(),
    }
}

fn store(
    id: &str,
    name_ar: &str,
    name_ru: &str,
    desc_ar: &str,
    desc_ru: &str,
    category: &str,
    rating: f32,
    url: &str,
) -> Store {
    Store {
        id: StoreId::new(id),
        name: LocalizedText::new(name_ar, name_ru),
        description: LocalizedText::new(desc_ar, desc_ru),
        category: category.to_string(),
        rating,
        url: url.to_string(),
        image: format!("{}.png", id),
    }
}

fn build() -> Catalog {
    let categories = vec![
        category("makeup", "مكياج", "Макияж", "💄"),
        category("skincare", "العناية بالبشرة", "Уход за кожей", "🧴"),
        category("perfume", "عطور", "Парфюмерия", "🌸"),
        category("haircare", "العناية بالشعر", "Уход за волосами", "💇"),
    ];

    let stores = vec![
        store(
            "sephora",
            "سيفورا",
            "Сефора",
            "أحمر شفاه، كريمات، فرش",
            "Помада, кремы, кисти",
            "makeup",
            4.5,
            "https://www.sephora.com",
        ),
        store(
            "huda-beauty",
            "هدى بيوتي",
            "Худа Бьюти",
            "مستحضرات تجميل فاخرة",
            "Премиальная косметика",
            "makeup",
            4.8,
            "https://hudabeauty.com",
        ),
        store(
            "mac",
            "ماك",
            "МАК",
            "مكياج احترافي",
            "Профессиональный макияж",
            "makeup",
            4.6,
            "https://www.maccosmetics.com",
        ),
        store(
            "maybelline",
            "ميبيلين",
            "Мэйбеллин",
            "مكياج يومي بأسعار مناسبة",
            "Повседневный макияж по доступной цене",
            "makeup",
            4.2,
            "https://www.maybelline.com",
        ),
        store(
            "nyx",
            "نيكس",
            "НИКС",
            "ألوان جريئة للمكياج",
            "Смелые цвета для макияжа",
            "makeup",
            4.3,
            "https://www.nyxcosmetics.com",
        ),
        store(
            "charlotte-tilbury",
            "شارلوت تيلبوري",
            "Шарлотта Тилбери",
            "مكياج فاخر وإطلالات مشهورة",
            "Люксовый макияж и звёздные образы",
            "makeup",
            4.7,
            "https://www.charlottetilbury.com",
        ),
        store(
            "rare-beauty",
            "رير بيوتي",
            "Рэйр Бьюти",
            "أحمر خدود سائل ومكياج طبيعي",
            "Жидкие румяна и естественный макияж",
            "makeup",
            4.6,
            "https://www.rarebeauty.com",
        ),
        store(
            "benefit",
            "بينيفيت",
            "Бенефит",
            "منتجات الحواجب والماسكارا",
            "Средства для бровей и тушь",
            "makeup",
            4.4,
            "https://www.benefitcosmetics.com",
        ),
        store(
            "the-ordinary",
            "ذا أورديناري",
            "Зе Ординари",
            "مستحضرات علاجية بأسعار منخفضة",
            "Активные средства по низкой цене",
            "skincare",
            4.5,
            "https://theordinary.com",
        ),
        store(
            "cerave",
            "سيرافي",
            "Сераве",
            "مرطبات وغسولات للبشرة",
            "Увлажняющие кремы и очищающие гели",
            "skincare",
            4.4,
            "https://www.cerave.com",
        ),
        store(
            "la-roche-posay",
            "لاروش بوزيه",
            "Ля Рош-Позе",
            "عناية بالبشرة الحساسة",
            "Уход за чувствительной кожей",
            "skincare",
            4.6,
            "https://www.laroche-posay.com",
        ),
        store(
            "kiehls",
            "كيلز",
            "Килс",
            "وصفات عناية كلاسيكية",
            "Классические рецепты ухода",
            "skincare",
            4.3,
            "https://www.kiehls.com",
        ),
        store(
            "ajmal",
            "أجمل",
            "Аджмал",
            "عطور شرقية أصيلة",
            "Подлинные восточные ароматы",
            "perfume",
            4.7,
            "https://www.ajmalperfume.com",
        ),
        store(
            "arabian-oud",
            "العربية للعود",
            "Арабиан Уд",
            "عود وبخور فاخر",
            "Роскошный уд и благовония",
            "perfume",
            4.8,
            "https://www.arabianoud.com",
        ),
        store(
            "jo-malone",
            "جو مالون",
            "Джо Малон",
            "عطور إنجليزية راقية",
            "Изысканные английские ароматы",
            "perfume",
            4.5,
            "https://www.jomalone.com",
        ),
        store(
            "moroccanoil",
            "مروكان أويل",
            "Мороканойл",
            "زيوت الأرغان للشعر",
            "Аргановые масла для волос",
            "haircare",
            4.6,
            "https://www.moroccanoil.com",
        ),
        store(
            "olaplex",
            "أولابلكس",
            "Олаплекс",
            "إصلاح الشعر التالف",
            "Восстановление повреждённых волос",
            "haircare",
            4.5,
            "https://olaplex.com",
        ),
        store(
            "kerastase",
            "كيراستاس",
            "Керастаз",
            "عناية صالونات احترافية",
            "Профессиональный салонный уход",
            "haircare",
            4.4,
            "https://www.kerastase.com",
        ),
    ];

    Catalog::new(categories, stores)
}
