//! Two-language localization: Arabic (default) and Russian

use serde::{Deserialize, Serialize};

/// Languages the guide ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    Ru,
}

impl Language {
    /// Two-letter code used for persistence and display
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Ru => "ru",
        }
    }

    /// Whether text in this language reads right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// A string carried in both supported languages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ar: String,
    pub ru: String,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            ru: ru.into(),
        }
    }

    /// The text in the requested language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.ar,
            Language::Ru => &self.ru,
        }
    }
}

/// Chrome strings that are not part of catalog data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLabel {
    AppTitle,
    BrowseByCategory,
    FeaturedStores,
    SimilarStores,
    Favorites,
    NoStores,
    NoFavorites,
    SearchPlaceholder,
    AllCategories,
    Back,
    VisitStore,
}

/// Look up a chrome label in the given language
pub fn label(language: Language, label: UiLabel) -> &'static str {
    match (language, label) {
        (Language::Ar, UiLabel::AppTitle) => "دليل الجمال",
        (Language::Ru, UiLabel::AppTitle) => "Гид красоты",

        (Language::Ar, UiLabel::BrowseByCategory) => "تصفح حسب الفئة",
        (Language::Ru, UiLabel::BrowseByCategory) => "Просмотр по категориям",

        (Language::Ar, UiLabel::FeaturedStores) => "أفضل المتاجر المميزة",
        (Language::Ru, UiLabel::FeaturedStores) => "Лучшие магазины",

        (Language::Ar, UiLabel::SimilarStores) => "متاجر مشابهة",
        (Language::Ru, UiLabel::SimilarStores) => "Похожие магазины",

        (Language::Ar, UiLabel::Favorites) => "المفضلة",
        (Language::Ru, UiLabel::Favorites) => "Избранное",

        (Language::Ar, UiLabel::NoStores) => "لا توجد متاجر",
        (Language::Ru, UiLabel::NoStores) => "Магазины не найдены",

        (Language::Ar, UiLabel::NoFavorites) => "لا توجد عناصر مفضلة",
        (Language::Ru, UiLabel::NoFavorites) => "Нет избранного",

        (Language::Ar, UiLabel::SearchPlaceholder) => "ابحث عن متجر...",
        (Language::Ru, UiLabel::SearchPlaceholder) => "Поиск магазина...",

        (Language::Ar, UiLabel::AllCategories) => "الكل",
        (Language::Ru, UiLabel::AllCategories) => "Все",

        (Language::Ar, UiLabel::Back) => "رجوع",
        (Language::Ru, UiLabel::Back) => "Назад",

        (Language::Ar, UiLabel::VisitStore) => "زيارة المتجر",
        (Language::Ru, UiLabel::VisitStore) => "Посетить магазин",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text_lookup() {
        let text = LocalizedText::new("مكياج", "Макияж");
        assert_eq!(text.get(Language::Ar), "مكياج");
        assert_eq!(text.get(Language::Ru), "Макияж");
    }

    #[test]
    fn test_all_labels_translated() {
        let labels = [
            UiLabel::AppTitle,
            UiLabel::BrowseByCategory,
            UiLabel::FeaturedStores,
            UiLabel::SimilarStores,
            UiLabel::Favorites,
            UiLabel::NoStores,
            UiLabel::NoFavorites,
            UiLabel::SearchPlaceholder,
            UiLabel::AllCategories,
            UiLabel::Back,
            UiLabel::VisitStore,
        ];
        for l in labels {
            assert!(!label(Language::Ar, l).is_empty());
            assert!(!label(Language::Ru, l).is_empty());
            assert_ne!(label(Language::Ar, l), label(Language::Ru, l));
        }
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"ru\"").unwrap(),
            Language::Ru
        );
    }

    #[test]
    fn test_default_language_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
        assert!(Language::default().is_rtl());
    }
}
