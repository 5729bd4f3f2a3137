use serde::{Serialize, Deserialize};

/// Languages the widget ships with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ms,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ms,
            Language::Ms => Language::En,
        }
    }

    /// Short code stored in localStorage and mirrored to `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ms => "ms",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ms" => Some(Language::Ms),
            _ => None,
        }
    }
}

/// The full set of strings the widget renders.
pub struct UiText {
    pub title: &'static str,
    pub spin_button: &'static str,
    pub spinning: &'static str,
    pub won_prefix: &'static str,
    pub no_prize: &'static str,
    pub loading: &'static str,
    pub load_error: &'static str,
    pub language_toggle: &'static str,
}

const EN: UiText = UiText {
    title: "Spin Wheel Game",
    spin_button: "Spin the Wheel",
    spinning: "Spinning...",
    won_prefix: "You won: ",
    no_prize: "No prize available. Try again next time!",
    loading: "Loading...",
    load_error: "Could not load the prize catalog.",
    language_toggle: "Bahasa Melayu",
};

const MS: UiText = UiText {
    title: "Permainan Roda Bertuah",
    spin_button: "Putar Roda",
    spinning: "Sedang berputar...",
    won_prefix: "Anda menang: ",
    no_prize: "Tiada hadiah tersedia. Cuba lagi!",
    loading: "Memuatkan...",
    load_error: "Katalog hadiah tidak dapat dimuatkan.",
    language_toggle: "English",
};

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::En => &EN,
            Language::Ms => &MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Language::En.toggle(), Language::Ms);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
    }

    #[test]
    fn test_code_round_trip() {
        for language in [Language::En, Language::Ms] {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_texts_differ_between_languages() {
        let en = UiText::for_language(Language::En);
        let ms = UiText::for_language(Language::Ms);
        assert_ne!(en.spin_button, ms.spin_button);
        assert_ne!(en.no_prize, ms.no_prize);
    }
}
