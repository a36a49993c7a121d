use super::Localized;

/// Interface strings shared by all pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_treatments: &'static str,
    pub nav_rates: &'static str,
    pub nav_reviews: &'static str,
    pub nav_blog: &'static str,
    pub nav_contact: &'static str,
    /// Label of the link to the other language.
    pub switch_language: &'static str,
    pub loading: &'static str,

    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_phone: &'static str,
    pub form_message: &'static str,
    pub form_newsletter: &'static str,
    pub form_submit: &'static str,
    pub form_submitting: &'static str,
    pub form_success: &'static str,
    pub form_error: &'static str,
    pub form_name_required: &'static str,
    pub form_email_invalid: &'static str,
    pub form_message_required: &'static str,

    pub blog_read_more: &'static str,
    pub blog_previous: &'static str,
    pub blog_next: &'static str,
    pub blog_page: &'static str,
    pub blog_empty: &'static str,
    pub blog_error: &'static str,
    pub blog_search_placeholder: &'static str,
    pub blog_search: &'static str,
    pub blog_back: &'static str,
    pub blog_not_found_title: &'static str,
    pub blog_not_found_body: &'static str,
    pub blog_minutes_read: &'static str,
    pub blog_by: &'static str,

    pub reviews_heading: &'static str,
    pub footer_contact: &'static str,
    pub footer_hours: &'static str,
    pub footer_kvk: &'static str,
    pub footer_privacy: &'static str,
}

pub static UI: Localized<UiText> = Localized::new(
    UiText {
        nav_home: "Home",
        nav_about: "Over mij",
        nav_treatments: "Behandelingen",
        nav_rates: "Tarieven",
        nav_reviews: "Ervaringen",
        nav_blog: "Blog",
        nav_contact: "Contact",
        switch_language: "English",
        loading: "Laden...",

        form_name: "Naam",
        form_email: "E-mailadres",
        form_phone: "Telefoonnummer",
        form_message: "Bericht",
        form_newsletter: "Ja, ik ontvang graag de nieuwsbrief",
        form_submit: "Versturen",
        form_submitting: "Bezig met versturen...",
        form_success: "Bedankt! Je bericht is verstuurd.",
        form_error: "Er ging iets mis bij het versturen. Probeer het opnieuw.",
        form_name_required: "Vul je naam in.",
        form_email_invalid: "Vul een geldig e-mailadres in.",
        form_message_required: "Schrijf een kort bericht.",

        blog_read_more: "Lees verder",
        blog_previous: "Vorige",
        blog_next: "Volgende",
        blog_page: "Pagina",
        blog_empty: "Er zijn nog geen artikelen.",
        blog_error: "De artikelen konden niet worden geladen. Probeer het later opnieuw.",
        blog_search_placeholder: "Zoek in artikelen",
        blog_search: "Zoeken",
        blog_back: "Terug naar het blog",
        blog_not_found_title: "Artikel niet gevonden",
        blog_not_found_body: "Dit artikel bestaat niet (meer).",
        blog_minutes_read: "min lezen",
        blog_by: "door",

        reviews_heading: "Wat cliënten zeggen",
        footer_contact: "Contact",
        footer_hours: "Openingstijden",
        footer_kvk: "KvK",
        footer_privacy: "Privacy",
    },
    UiText {
        nav_home: "Home",
        nav_about: "About me",
        nav_treatments: "Treatments",
        nav_rates: "Rates",
        nav_reviews: "Reviews",
        nav_blog: "Blog",
        nav_contact: "Contact",
        switch_language: "Nederlands",
        loading: "Loading...",

        form_name: "Name",
        form_email: "E-mail address",
        form_phone: "Phone number",
        form_message: "Message",
        form_newsletter: "Yes, I would like to receive the newsletter",
        form_submit: "Send",
        form_submitting: "Sending...",
        form_success: "Thank you! Your message has been sent.",
        form_error: "Something went wrong while sending. Please try again.",
        form_name_required: "Please enter your name.",
        form_email_invalid: "Please enter a valid e-mail address.",
        form_message_required: "Please write a short message.",

        blog_read_more: "Read more",
        blog_previous: "Previous",
        blog_next: "Next",
        blog_page: "Page",
        blog_empty: "There are no articles yet.",
        blog_error: "The articles could not be loaded. Please try again later.",
        blog_search_placeholder: "Search articles",
        blog_search: "Search",
        blog_back: "Back to the blog",
        blog_not_found_title: "Article not found",
        blog_not_found_body: "This article does not exist (anymore).",
        blog_minutes_read: "min read",
        blog_by: "by",

        reviews_heading: "What clients say",
        footer_contact: "Contact",
        footer_hours: "Opening hours",
        footer_kvk: "Chamber of Commerce",
        footer_privacy: "Privacy",
    },
);
