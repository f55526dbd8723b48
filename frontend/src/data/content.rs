//! Static copy for the page sections.

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "דף הבית" },
    NavItem { id: "about", label: "אודות" },
    NavItem { id: "services", label: "שירותים" },
    NavItem { id: "products", label: "מוצרים" },
    NavItem { id: "portfolio", label: "תיק עבודות" },
    NavItem { id: "testimonials", label: "המלצות" },
    NavItem { id: "faq", label: "שאלות נפוצות" },
    NavItem { id: "contact", label: "צור קשר" },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { value: "25+", label: "שנות פעילות" },
    Stat { value: "40", label: "מדינות לקוח" },
    Stat { value: "300+", label: "עסקאות שהושלמו" },
    Stat { value: "100%", label: "עמידה ברגולציה" },
];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        icon: "fa-shield-halved",
        title: "ייבוא נשק וציוד ביטחוני",
        body: "ייבוא מערכות נשק מתקדמות וציוד ביטחוני איכותי ממיטב היצרנים בעולם, תוך הקפדה על עמידה בכל דרישות הרגולציה.",
    },
    Service {
        icon: "fa-right-left",
        title: "ייצוא מערכות לחימה",
        body: "ייצוא מערכות לחימה ישראליות מתקדמות לגורמי ביטחון מורשים ברחבי העולם, בהתאם לחוקי הייצוא הבינלאומיים.",
    },
    Service {
        icon: "fa-user-tie",
        title: "ייעוץ ביטחוני",
        body: "שירותי ייעוץ מקצועיים בתחום הביטחון והאבטחה, המותאמים לצרכים הספציפיים של כל לקוח ומבוססים על ניסיון מבצעי עשיר.",
    },
    Service {
        icon: "fa-handshake",
        title: "תיווך בין יצרנים לממשלות",
        body: "גישור אפקטיבי בין יצרני נשק וציוד ביטחוני לבין ממשלות וגופי ביטחון, תוך יצירת שיתופי פעולה אסטרטגיים ארוכי טווח.",
    },
    Service {
        icon: "fa-microchip",
        title: "אספקת פתרונות טכנולוגיים מתקדמים",
        body: "אספקת טכנולוגיות חדשניות בתחום הביטחון, כולל מערכות מודיעין, סייבר, תקשורת מאובטחת ומערכות הגנה מתקדמות.",
    },
    Service {
        icon: "fa-list-check",
        title: "ניהול פרויקטים ביטחוניים",
        body: "ניהול מקצועי של פרויקטים ביטחוניים מורכבים, מהתכנון ועד הביצוע, תוך הקפדה על עמידה בלוחות זמנים ובתקציב.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseKind {
    Defense,
    Consulting,
    Import,
    Export,
}

impl CaseKind {
    pub fn icon(&self) -> &'static str {
        match self {
            CaseKind::Defense => "fa-shield-halved",
            CaseKind::Consulting => "fa-screwdriver-wrench",
            CaseKind::Import => "fa-arrow-left",
            CaseKind::Export => "fa-earth-asia",
        }
    }
}

pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub region: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub outcome: &'static str,
    pub photo: &'static str,
    pub kind: CaseKind,
}

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "europe-defense-supply",
        title: "אספקת מערכות הגנה למדינה באירופה",
        region: "אירופה",
        challenge: "אספקת מערכות הגנה מתקדמות תוך עמידה בדרישות רגולטוריות מחמירות ולוחות זמנים קצרים",
        solution: "פיתוח מערך לוגיסטי ייעודי ושיתוף פעולה עם גורמי ממשל לקיצור תהליכי אישור",
        outcome: "אספקה מוצלחת של המערכות בזמן, תוך יצירת בסיס לשיתוף פעולה ארוך טווח",
        photo: "photo-1507608616759-54f48f0af0ee",
        kind: CaseKind::Defense,
    },
    CaseStudy {
        id: "middle-east-consulting",
        title: "ייעוץ ביטחוני לארגון ממשלתי במזרח התיכון",
        region: "מזרח תיכון",
        challenge: "שדרוג מערך האבטחה של מתקנים אסטרטגיים תוך התמודדות עם איומים מתפתחים",
        solution: "ניתוח מקיף של פערי אבטחה ופיתוח תכנית הגנה רב-שכבתית מותאמת לאיומים הספציפיים",
        outcome: "שיפור משמעותי ברמת האבטחה וצמצום אירועי חדירה ב-85%",
        photo: "photo-1577017040065-650ee4d43339",
        kind: CaseKind::Consulting,
    },
    CaseStudy {
        id: "tactical-import",
        title: "ייבוא ציוד טקטי מתקדם",
        region: "גלובלי",
        challenge: "רכישה והבאת ציוד טקטי מתקדם ממספר מקורות בינלאומיים תוך עמידה בדרישות רגולטוריות מורכבות",
        solution: "יצירת רשת ספקים אמינה ופיתוח מערכת ניהול שרשרת אספקה ייעודית",
        outcome: "הקמת ערוץ אספקה יציב המאפשר גישה לטכנולוגיות מתקדמות בזמן קצר ובעלות אופטימלית",
        photo: "photo-1542451313056-b7c8e626645f",
        kind: CaseKind::Import,
    },
    CaseStudy {
        id: "africa-secure-comms",
        title: "אספקת מערכות תקשורת מאובטחות",
        region: "אפריקה",
        challenge: "פריסת מערכות תקשורת מאובטחות באזורים מרוחקים עם תשתית מוגבלת",
        solution: "פיתוח פתרון תקשורת היברידי המשלב טכנולוגיות לוויין וסלולר עם הצפנה מתקדמת",
        outcome: "הקמת רשת תקשורת אמינה ומאובטחת המאפשרת פעילות מבצעית רציפה בתנאי שטח מאתגרים",
        photo: "photo-1569017388730-020b5f80a004",
        kind: CaseKind::Defense,
    },
    CaseStudy {
        id: "south-america-training",
        title: "הדרכות מבצעיות לכוחות ביטחון",
        region: "דרום אמריקה",
        challenge: "הכשרת יחידות מיוחדות בטכניקות מתקדמות תוך התאמה לאיומים מקומיים ייחודיים",
        solution: "פיתוח תכנית הדרכה מודולרית המשלבת סימולציות מתקדמות ותרגול מעשי",
        outcome: "שיפור משמעותי ביכולות המבצעיות ובמוכנות הכוחות להתמודדות עם מגוון איומים",
        photo: "photo-1517256064527-09c73fc73e38",
        kind: CaseKind::Consulting,
    },
    CaseStudy {
        id: "asia-tech-export",
        title: "ייצוא טכנולוגיות הגנה מתקדמות",
        region: "אסיה",
        challenge: "העברת טכנולוגיות הגנה מתקדמות תוך שמירה על סודיות ועמידה במגבלות ייצוא ביטחוני",
        solution: "פיתוח מודל העברת ידע מדורג ומאובטח בשיתוף עם רשויות רגולטוריות",
        outcome: "יצירת שותפות אסטרטגית ארוכת טווח המאפשרת העברת טכנולוגיה בטוחה ויעילה",
        photo: "photo-1624969862293-b749659a180b",
        kind: CaseKind::Export,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub role: &'static str,
    pub region: Option<&'static str>,
    /// Out of five, in half-star steps.
    pub rating: f32,
    pub photo: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "שיתוף הפעולה עם ש.י הוביל לשדרוג משמעותי של יכולות האבטחה שלנו. המקצועיות והדיוק בהתאמת הציוד לצרכים שלנו היו ללא דופי.",
        role: "קצין בכיר בארגון ביטחוני",
        region: Some("מזרח תיכון"),
        rating: 5.0,
        photo: "photo-1507003211169-0a1dd7228f2d",
    },
    Testimonial {
        quote: "האמינות והמחויבות של ש.י לעמידה בכל התקנות הבינלאומיות הופכת אותם לשותף אסטרטגי אידיאלי. הם מבינים את המורכבות של הסחר הבינלאומי בתחום הביטחוני.",
        role: "נציג ממשלתי",
        region: Some("אירופה"),
        rating: 4.5,
        photo: "photo-1500648767791-00dcc994a43e",
    },
    Testimonial {
        quote: "איכות השירות והמוצרים שמספקת ש.י עולה על כל הציפיות. הם מבינים את הצרכים המיוחדים שלנו ומספקים פתרונות מותאמים אישית.",
        role: "מנהל בכיר בחברת אבטחה",
        region: None,
        rating: 5.0,
        photo: "photo-1472099645785-5658abf4ff4e",
    },
    Testimonial {
        quote: "המומחיות הטכנית והידע העמוק של צוות ש.י בתחום הציוד הביטחוני מרשימים ביותר. הם תמיד מעודכנים בטכנולוגיות החדשות ביותר.",
        role: "ראש מחלקת רכש בארגון ביטחוני",
        region: Some("צפון אמריקה"),
        rating: 5.0,
        photo: "photo-1566492031773-4f4e44671857",
    },
];

pub struct CompliancePoint {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static COMPLIANCE: &[CompliancePoint] = &[
    CompliancePoint {
        icon: "fa-id-card",
        title: "רישיון סחר ביטחוני",
        body: "החברה רשומה בפנקס יצואנים ביטחוניים ומחזיקה רישיונות שיווק ויצוא בתוקף.",
    },
    CompliancePoint {
        icon: "fa-user-check",
        title: "תעודות משתמש קצה",
        body: "כל עסקה מלווה בתעודת משתמש קצה מאומתת ובבדיקת רקע ללקוח.",
    },
    CompliancePoint {
        icon: "fa-scale-balanced",
        title: "אמנות בינלאומיות",
        body: "עבודה בהתאם לאמנת סחר הנשק ולמשטרי אמברגו של האו\"ם.",
    },
    CompliancePoint {
        icon: "fa-magnifying-glass",
        title: "ביקורת פנימית",
        body: "ממונה ציות ייעודי וביקורת חיצונית שנתית על כל תהליכי הסחר.",
    },
];

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: &[FaqEntry] = &[
    FaqEntry {
        id: "licensing",
        question: "מהם התנאים לרכישת ציוד ביטחוני?",
        answer: "רכישת ציוד ביטחוני מחברת ש.י דורשת עמידה בתנאי רישוי מחמירים. על הלקוחות להציג אישורים רשמיים ממשרד הביטחון או גוף ממשלתי מוסמך, להוכיח זהות ארגונית מאומתת, ולעמוד בכל דרישות החוק המקומי והבינלאומי. תהליך האימות כולל בדיקת רקע מקיפה וחתימה על הסכמי שימוש נאות.",
    },
    FaqEntry {
        id: "compliance",
        question: "כיצד מבטיחים עמידה ברגולציה?",
        answer: "חברת ש.י מקפידה על עמידה מלאה בכל תקנות הסחר הבינלאומי בנשק. אנו מעסיקים צוות מומחי רגולציה המתעדכן באופן שוטף בשינויי חקיקה, מנהלים מערכת תיעוד ובקרה מתקדמת, ועובדים בשיתוף פעולה הדוק עם רשויות פיקוח בינלאומיות. כל עסקה עוברת בדיקת תאימות מקיפה טרם אישורה.",
    },
    FaqEntry {
        id: "approval",
        question: "מהו תהליך האישור?",
        answer: "תהליך האישור בחברת ש.י כולל מספר שלבים: 1) הגשת בקשה רשמית הכוללת פרטי הלקוח ומפרט הציוד המבוקש, 2) בדיקת זכאות ואימות זהות, 3) בחינת עמידה בדרישות רגולטוריות, 4) קבלת אישורים ממשרד הביטחון והרשויות הרלוונטיות, 5) חתימה על הסכמי שימוש והתחייבויות, 6) אישור סופי והוצאת היתרי ייבוא/ייצוא. התהליך אורך בין 30-90 יום בהתאם למורכבות העסקה.",
    },
    FaqEntry {
        id: "countries",
        question: "לאילו מדינות אתם מספקים?",
        answer: "חברת ש.י מספקת ציוד ביטחוני למדינות המאושרות על ידי משרד הביטחון הישראלי ובהתאם להסכמי סחר בינלאומיים. אנו פועלים בעיקר במדינות נאט\"ו, האיחוד האירופי, ומדינות בעלות ברית אסטרטגיות של ישראל. חשוב לציין כי אנו מקפידים על מדיניות אתית ולא מספקים למדינות תחת סנקציות בינלאומיות או כאלה המפרות זכויות אדם.",
    },
    FaqEntry {
        id: "clients",
        question: "מיהם הלקוחות הטיפוסיים שלכם?",
        answer: "לקוחותינו העיקריים כוללים גופי ביטחון ממשלתיים, צבאות וכוחות משטרה, סוכנויות אבטחה לאומיות, חברות אבטחה פרטיות מורשות, וארגונים בינלאומיים העוסקים בשמירת שלום. אנו עובדים אך ורק עם גופים מוסמכים ומאושרים, ומקפידים על בדיקות נאותות מקיפות לכל לקוח פוטנציאלי.",
    },
    FaqEntry {
        id: "delivery",
        question: "מהם זמני האספקה הצפויים?",
        answer: "זמני האספקה משתנים בהתאם לסוג המוצר, היקף ההזמנה, והמורכבות הלוגיסטית. עבור ציוד סטנדרטי, זמן האספקה נע בין 30-60 יום מרגע קבלת כל האישורים הנדרשים. עבור מערכות מורכבות או הזמנות מותאמות אישית, זמן האספקה עשוי להגיע ל-120 יום או יותר. אנו מספקים מעקב מאובטח אחר משלוחים ועדכונים שוטפים ללקוחותינו.",
    },
    FaqEntry {
        id: "payment",
        question: "מהם תנאי התשלום?",
        answer: "תנאי התשלום בחברת ש.י כוללים מקדמה של 30-50% עם אישור ההזמנה, והיתרה לפני המשלוח. אנו מקבלים העברות בנקאיות בינלאומיות מאובטחות, מכתבי אשראי, ובמקרים מסוימים הסכמי מימון ממשלתיים. כל העסקאות מתבצעות בהתאם לתקנות הפיננסיות הבינלאומיות ודרישות איסור הלבנת הון.",
    },
    FaqEntry {
        id: "support",
        question: "מהו השירות שניתן לאחר המכירה?",
        answer: "חברת ש.י מציעה מערך תמיכה מקיף לאחר המכירה הכולל: הדרכה טכנית מקצועית, תמיכה טלפונית 24/7, שירותי תחזוקה ותיקונים, אחריות יצרן מורחבת, עדכוני תוכנה ושדרוגים, וייעוץ טכני שוטף. בנוסף, אנו מציעים חוזי שירות ארוכי טווח המותאמים לצרכי הלקוח ומבטיחים את אורך חיי המוצר ויעילותו המבצעית.",
    },
];

pub struct ContactLine {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static CONTACT: &[ContactLine] = &[
    ContactLine { icon: "fa-location-dot", text: "מגדל הביטחון, רחוב הברזל 12, תל אביב" },
    ContactLine { icon: "fa-phone", text: "03-555-0142" },
    ContactLine { icon: "fa-clock", text: "א'-ה', 08:30-17:30" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_ids_are_unique() {
        let ids: HashSet<_> = NAV_ITEMS.iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn faq_and_case_study_ids_are_unique() {
        let faq: HashSet<_> = FAQ.iter().map(|f| f.id).collect();
        assert_eq!(faq.len(), FAQ.len());
        let cases: HashSet<_> = CASE_STUDIES.iter().map(|c| c.id).collect();
        assert_eq!(cases.len(), CASE_STUDIES.len());
    }

    #[test]
    fn four_testimonials_rotate() {
        assert_eq!(TESTIMONIALS.len(), 4);
    }

    #[test]
    fn ratings_are_half_star_steps_out_of_five() {
        for t in TESTIMONIALS {
            assert!((0.0..=5.0).contains(&t.rating), "{} out of range", t.rating);
            assert_eq!((t.rating * 2.0).fract(), 0.0);
        }
    }
}
