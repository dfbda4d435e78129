use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ur,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Ur];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ur => "ur",
        }
    }

    /// Label shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Ur => "اردو",
        }
    }

    /// Name used when asking the model to answer in this language.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ur => "Urdu",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ur)
    }

    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Ur => &UR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            "ur" | "urdu" => Ok(Language::Ur),
            other => Err(format!("Unsupported language: {}. Available: en, hi, ur", other)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UiStrings {
    pub title: &'static str,
    pub tagline: &'static str,
    pub welcome_title: &'static str,
    pub welcome_body: &'static str,
    pub welcome_hint: &'static str,
    pub placeholder: &'static str,
    pub search: &'static str,
    pub searching: &'static str,
    pub ingredients: &'static str,
    pub recipe: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub error_title: &'static str,
    pub loading_images: &'static str,
    pub no_images: &'static str,
    pub image_alt: &'static str,
    pub footer: &'static str,
}

impl UiStrings {
    /// Alt text for the `index`-th (0-based) image of a dish.
    pub fn image_alt_text(&self, dish_name: &str, index: usize) -> String {
        format!("{} - {} {}", dish_name, self.image_alt, index + 1)
    }
}

static EN: UiStrings = UiStrings {
    title: "Rescort",
    tagline: "Your AI Culinary Companion",
    welcome_title: "Welcome to Rescort!",
    welcome_body: "Discover delicious recipes from around the world.",
    welcome_hint: "Enter a dish name above to get started.",
    placeholder: "e.g., Spaghetti Carbonara",
    search: "Search",
    searching: "Searching...",
    ingredients: "Ingredients",
    recipe: "Recipe",
    copy: "Copy",
    copied: "Copied!",
    error_title: "Error",
    loading_images: "Generating images...",
    no_images: "No images available.",
    image_alt: "Image",
    footer: "Powered by Google Gemini. Created for you.",
};

static HI: UiStrings = UiStrings {
    title: "Rescort",
    tagline: "आपका एआई पाक साथी",
    welcome_title: "Rescort में आपका स्वागत है!",
    welcome_body: "दुनिया भर के स्वादिष्ट व्यंजन खोजें।",
    welcome_hint: "शुरू करने के लिए ऊपर किसी व्यंजन का नाम लिखें।",
    placeholder: "जैसे, पनीर टिक्का",
    search: "खोजें",
    searching: "खोज रहे हैं...",
    ingredients: "सामग्री",
    recipe: "विधि",
    copy: "कॉपी करें",
    copied: "कॉपी हो गया!",
    error_title: "त्रुटि",
    loading_images: "चित्र बनाए जा रहे हैं...",
    no_images: "कोई चित्र उपलब्ध नहीं है।",
    image_alt: "चित्र",
    footer: "Google Gemini द्वारा संचालित। आपके लिए बनाया गया।",
};

static UR: UiStrings = UiStrings {
    title: "Rescort",
    tagline: "آپ کا اے آئی کھانا ساتھی",
    welcome_title: "Rescort میں خوش آمدید!",
    welcome_body: "دنیا بھر کے مزیدار پکوان دریافت کریں۔",
    welcome_hint: "شروع کرنے کے لیے اوپر کسی ڈش کا نام لکھیں۔",
    placeholder: "مثلاً، چکن بریانی",
    search: "تلاش کریں",
    searching: "تلاش جاری ہے...",
    ingredients: "اجزاء",
    recipe: "ترکیب",
    copy: "کاپی کریں",
    copied: "کاپی ہو گیا!",
    error_title: "خرابی",
    loading_images: "تصاویر بنائی جا رہی ہیں...",
    no_images: "کوئی تصویر دستیاب نہیں۔",
    image_alt: "تصویر",
    footer: "Google Gemini کی مدد سے۔ آپ کے لیے تیار کیا گیا۔",
};
