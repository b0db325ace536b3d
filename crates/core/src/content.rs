//! Factory-default site content for Peekaboo Irbid.
//!
//! These seeds populate the session store on first run and are what the staff
//! portal's "reset to defaults" restores.

use crate::types::{
    ContactInfo, LocalizedText, PartyPackage, PartyTheme, PlayZone, SiteContent, TicketItem,
};

pub fn default_site_content() -> SiteContent {
    SiteContent {
        hours: LocalizedText::new(
            "Daily 08:00 AM – 12:00 Midnight",
            "يومياً من ٨:٠٠ صباحاً – ١٢:٠٠ منتصف الليل",
        ),
        contact: ContactInfo {
            manager: "Dina".to_string(),
            phone: "0798636031".to_string(),
            location: LocalizedText::new(
                "Irbid, Al Seif Commercial Complex (Opposite Arafa Restaurant)",
                "إربد، مجمع السيف التجاري (مقابل مطعم عرفة)",
            ),
        },
        tickets: default_tickets(),
        parties: default_parties(),
    }
}

pub fn default_tickets() -> Vec<TicketItem> {
    vec![
        TicketItem {
            name: LocalizedText::new("Morning Joy", "بهجة الصباح"),
            price: "3.50 JD".to_string(),
            numeric_price: 3.5,
            desc: LocalizedText::new("08:00 AM - 01:00 PM", "٠٨:٠٠ ص - ٠١:٠٠ م"),
            color: "#F7941D".to_string(),
            features_en: vec![
                "1 Hour Play".to_string(),
                "Guided Art Activity".to_string(),
                "Free Gift".to_string(),
                "Sun-Thu Only".to_string(),
            ],
            features_ar: vec![
                "ساعة لعب واحدة".to_string(),
                "نشاط فني موجه".to_string(),
                "هدية مجانية".to_string(),
                "الأحد - الخميس فقط".to_string(),
            ],
        },
        TicketItem {
            name: LocalizedText::new("Evening Solo", "بهجة المساء"),
            price: "7.00 JD".to_string(),
            numeric_price: 7.0,
            desc: LocalizedText::new("1 Hour • All Access", "ساعة واحدة • دخول كامل"),
            color: "#E41E26".to_string(),
            features_en: vec![
                "Full Zone Access".to_string(),
                "Interactive Trampoline".to_string(),
                "Add extra hour for 3 JD".to_string(),
            ],
            features_ar: vec![
                "دخول كامل لجميع المناطق".to_string(),
                "ترامبولين تفاعلي".to_string(),
                "إضافة ساعة بـ ٣ دنانير".to_string(),
            ],
        },
        TicketItem {
            name: LocalizedText::new("Siblings Squad", "عرض الإخوة"),
            price: "12.00 JD".to_string(),
            numeric_price: 12.0,
            desc: LocalizedText::new("2 Kids • 1 Hour", "طفلان • ساعة واحدة"),
            color: "#00ADEF".to_string(),
            features_en: vec![
                "Save 2 JD instantly".to_string(),
                "2 Kids Entry".to_string(),
                "Add 3rd kid for 5 JD".to_string(),
            ],
            features_ar: vec![
                "وفر دينارين فوراً".to_string(),
                "دخول طفلين".to_string(),
                "إضافة طفل ثالث بـ ٥ دنانير".to_string(),
            ],
        },
    ]
}

pub fn default_parties() -> Vec<PartyPackage> {
    vec![
        PartyPackage {
            name: LocalizedText::new("Mini Mushroom", "المشروم الصغير"),
            price: "80 JD".to_string(),
            numeric_price: 80.0,
            color: "#8CC63F".to_string(),
            includes_en: vec![
                "Up to 10 Kids".to_string(),
                "Dedicated Party Host".to_string(),
                "Decorated Private Room".to_string(),
                "Popcorn & Juice".to_string(),
            ],
            includes_ar: vec![
                "حتى ١٠ أطفال".to_string(),
                "منظم حفلات مخصص".to_string(),
                "غرفة خاصة مزينة".to_string(),
                "فشار وعصير".to_string(),
            ],
        },
        PartyPackage {
            name: LocalizedText::new("Wonderland Bash", "حفلة بلاد العجائب"),
            price: "150 JD".to_string(),
            numeric_price: 150.0,
            color: "#00ADEF".to_string(),
            includes_en: vec![
                "Up to 20 Kids".to_string(),
                "2 Hours Playtime".to_string(),
                "Mascot Appearance".to_string(),
                "Meal for Every Kid".to_string(),
            ],
            includes_ar: vec![
                "حتى ٢٠ طفلاً".to_string(),
                "ساعتان من اللعب".to_string(),
                "ظهور التميمة (المسكوت)".to_string(),
                "وجبة لكل طفل".to_string(),
            ],
        },
        PartyPackage {
            name: LocalizedText::new("Peekaboo Royal", "الملكي بيكابو"),
            price: "280 JD".to_string(),
            numeric_price: 280.0,
            color: "#E41E26".to_string(),
            includes_en: vec![
                "Up to 35 Kids".to_string(),
                "Unlimited Play".to_string(),
                "Full Buffet Catering".to_string(),
                "Professional Photographer".to_string(),
            ],
            includes_ar: vec![
                "حتى ٣٥ طفلاً".to_string(),
                "لعب غير محدود".to_string(),
                "بوفيه طعام كامل".to_string(),
                "مصور فوتوغرافي محترف".to_string(),
            ],
        },
    ]
}

pub fn default_zones() -> Vec<PlayZone> {
    vec![
        PlayZone {
            id: "1".to_string(),
            name: "Ball Pit Galaxy".to_string(),
            category: "Active Play".to_string(),
            age_group: "All Ages".to_string(),
            image: "https://images.unsplash.com/photo-1596464716127-f2a82984de30?q=80&w=1000&auto=format&fit=crop".to_string(),
            description: "A sea of colorful balls with interactive lighting.".to_string(),
        },
        PlayZone {
            id: "2".to_string(),
            name: "Action Trampoline".to_string(),
            category: "Jumping".to_string(),
            age_group: "3+ Years".to_string(),
            image: "https://images.unsplash.com/photo-154433334d-0683030368a5?q=80&w=1000&auto=format&fit=crop".to_string(),
            description: "Safe jumping zone for high energy.".to_string(),
        },
        PlayZone {
            id: "3".to_string(),
            name: "Art Corner".to_string(),
            category: "Creative".to_string(),
            age_group: "2-10 Years".to_string(),
            image: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?q=80&w=1000&auto=format&fit=crop".to_string(),
            description: "Arts and crafts for young creators.".to_string(),
        },
    ]
}

pub fn default_themes() -> Vec<PartyTheme> {
    vec![
        PartyTheme {
            id: "pawpatrol".to_string(),
            name: LocalizedText::new("Paw Patrol", "باو باترول"),
            color: "#00ADEF".to_string(),
        },
        PartyTheme {
            id: "princess".to_string(),
            name: LocalizedText::new("Princess Dream", "حلم الأميرات"),
            color: "#E41E26".to_string(),
        },
        PartyTheme {
            id: "hellokitty".to_string(),
            name: LocalizedText::new("Hello Kitty", "هالو كيتي"),
            color: "#F7941D".to_string(),
        },
        PartyTheme {
            id: "safari".to_string(),
            name: LocalizedText::new("Safari Jungle", "سفاري الأدغال"),
            color: "#8CC63F".to_string(),
        },
        PartyTheme {
            id: "donuts".to_string(),
            name: LocalizedText::new("Sweet Donuts", "عالم الحلويات"),
            color: "#FFD900".to_string(),
        },
        PartyTheme {
            id: "space".to_string(),
            name: LocalizedText::new("Space Adventure", "مغامرة الفضاء"),
            color: "#00ADEF".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_content_has_full_catalog() {
        let content = default_site_content();
        assert_eq!(content.tickets.len(), 3);
        assert_eq!(content.parties.len(), 3);
        assert_eq!(content.contact.manager, "Dina");
    }

    #[test]
    fn ticket_prices_are_consistent() {
        for ticket in default_tickets() {
            assert!(ticket.numeric_price > 0.0);
            assert!(ticket.price.ends_with("JD"));
        }
    }

    #[test]
    fn six_party_themes_seeded() {
        assert_eq!(default_themes().len(), 6);
    }
}
