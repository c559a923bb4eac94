#![forbid(unsafe_code)]

//! Built-in site copy for English and Dutch.

use crate::catalog::Dictionary;
use crate::language::{Language, TextDirection};

/// Dictionary shipped with the site for `lang`.
#[must_use]
pub fn dictionary(lang: Language) -> Dictionary {
    match lang {
        Language::En => Dictionary::from_pairs(TextDirection::Ltr, EN),
        Language::Nl => Dictionary::from_pairs(TextDirection::Ltr, NL),
    }
}

const EN: &[(&str, &str)] = &[
    ("title", "Document"),
    ("heading", "Welcome"),
    ("welcome", "Welcome to the site."),
    ("button", "Click me"),
    ("tagline", "Helping companies find innovative solutions."),
    ("footer_copyright", "© 2025 Your Company. All rights reserved."),
    ("nav_home", "Home"),
    ("nav_about", "About"),
    ("nav_portfolio", "Portfolio"),
    ("nav_reserve", "Reserve"),
    ("nav_contact", "Contact"),
    ("nav_terms", "Terms"),
    ("about_heading", "About Us"),
    (
        "about_intro",
        "We help companies find innovative solutions. This page will list experiences and CVs when available.",
    ),
    ("cv_section", "Experiences & CVs"),
    ("contact_heading", "Contact"),
    (
        "contact_intro",
        "You can reach us via the following channels. For reservations use the reservation form.",
    ),
    ("contact_email_label", "Email:"),
    ("contact_phone_label", "Phone:"),
    ("contact_address_label", "Address:"),
    ("reserve_title", "Reserve"),
    ("reserve_heading", "Reserve / Request a callback"),
    (
        "reserve_instructions",
        "Terugbel afspraak: leave a voicemail with instructions to visit our website. Voorkeurstijden worden afgestemd. Admin zal voorsteltijden en locatie (Doppio) voorstellen.",
    ),
    ("form_name", "Name"),
    ("form_contact", "Phone or Email"),
    ("form_prefs", "Preferred times (voorkeurstijden)"),
    ("form_voicemail", "Voicemail with instructions to the website"),
    ("form_admin", "Let admin propose times and location (Doppio)"),
    ("form_submit", "Submit reservation"),
    ("reserve_error_required", "Please provide name and contact."),
    (
        "reserve_success",
        "Reservation received — the admin will propose times and location (Doppio).",
    ),
    ("terms_title", "Terms"),
    ("terms_heading", "Terms & Conditions"),
    (
        "terms_intro",
        "Below are the standard terms and conditions. Replace with the final legal text when available.",
    ),
    ("terms_section_booking", "Booking & Reservations"),
    (
        "terms_booking",
        "Reservations are made via our reservation form. Preference times are arranged between client and admin. Admin will propose times and location (Doppio).",
    ),
    ("terms_section_cancellation", "Cancellation"),
    (
        "terms_cancellation",
        "Cancellations should be made at least 24 hours in advance. Specifics to be filled by the company.",
    ),
    ("portfolio_title", "Portfolio"),
    ("portfolio_heading", "Portfolio"),
    (
        "portfolio_intro",
        "Projects are displayed below. Click a card to learn more.",
    ),
    ("project_title_1", "Project 1"),
    ("project_desc_1", "Short description — to be added."),
    ("project_title_2", "Project 2"),
    ("project_desc_2", "Short description — to be added."),
    ("project_title_3", "Project 3"),
    ("project_desc_3", "Short description — to be added."),
    ("learn_more", "Learn more"),
];

const NL: &[(&str, &str)] = &[
    ("title", "Document"),
    ("heading", "Welkom"),
    ("welcome", "Welkom op de site."),
    ("button", "Klik mij"),
    ("tagline", "We helpen bedrijven innovatieve oplossingen te vinden."),
    (
        "footer_copyright",
        "© 2025 Uw Bedrijf. Alle rechten voorbehouden.",
    ),
    ("nav_home", "Home"),
    ("nav_about", "Over"),
    ("nav_portfolio", "Portfolio"),
    ("nav_reserve", "Reserveren"),
    ("nav_contact", "Contact"),
    ("nav_terms", "Algemene voorwaarden"),
    ("about_heading", "Over ons"),
    (
        "about_intro",
        "We helpen bedrijven innovatieve oplossingen te vinden. Deze pagina zal ervaringen en CV's bevatten zodra beschikbaar.",
    ),
    ("cv_section", "Ervaringen & CV's"),
    ("contact_heading", "Contact"),
    (
        "contact_intro",
        "U kunt ons bereiken via de volgende kanalen. Voor reserveringen, gebruik het reserveringsformulier.",
    ),
    ("contact_email_label", "E-mail:"),
    ("contact_phone_label", "Telefoon:"),
    ("contact_address_label", "Adres:"),
    ("reserve_title", "Reserveren"),
    ("reserve_heading", "Reserveren / Terugbellen"),
    (
        "reserve_instructions",
        "Terugbel afspraak: laat een voicemail achter met instructies om onze website te bezoeken. Voorkeurstijden worden afgestemd. Admin zal voorsteltijden en locatie (Doppio) voorstellen.",
    ),
    ("form_name", "Naam"),
    ("form_contact", "Telefoon of E-mail"),
    ("form_prefs", "Voorkeurstijden"),
    ("form_voicemail", "Voicemail met instructies naar de website"),
    ("form_admin", "Laat admin tijden en locatie (Doppio) voorstellen"),
    ("form_submit", "Verstuur reservering"),
    ("reserve_error_required", "Vul alstublieft naam en contact in."),
    (
        "reserve_success",
        "Reservering ontvangen — de admin zal tijden en locatie (Doppio) voorstellen.",
    ),
    ("terms_title", "Algemene voorwaarden"),
    ("terms_heading", "Algemene voorwaarden"),
    (
        "terms_intro",
        "Hieronder staan de standaard algemene voorwaarden. Vervang door definitieve juridische tekst wanneer beschikbaar.",
    ),
    ("terms_section_booking", "Boekingen & Reserveringen"),
    (
        "terms_booking",
        "Reserveringen worden gemaakt via ons reserveringsformulier. Voorkeurstijden worden afgestemd tussen klant en admin. Admin zal voorsteltijden en locatie (Doppio) voorstellen.",
    ),
    ("terms_section_cancellation", "Annulering"),
    (
        "terms_cancellation",
        "Annuleringen dienen minimaal 24 uur van tevoren te gebeuren. Details worden door het bedrijf ingevuld.",
    ),
    ("portfolio_title", "Portfolio"),
    ("portfolio_heading", "Portfolio"),
    (
        "portfolio_intro",
        "Projecten worden hieronder weergegeven. Klik op een kaart om meer te weten te komen.",
    ),
    ("project_title_1", "Project 1"),
    ("project_desc_1", "Korte beschrijving — nog toe te voegen."),
    ("project_title_2", "Project 2"),
    ("project_desc_2", "Korte beschrijving — nog toe te voegen."),
    ("project_title_3", "Project 3"),
    ("project_desc_3", "Korte beschrijving — nog toe te voegen."),
    ("learn_more", "Lees meer"),
];
