use super::{CallToAction, Highlight, Localized, PageContent, Section};
use crate::routes::PageId;

const BOOK_NL: Option<CallToAction> = Some(CallToAction {
    label: "Plan een afspraak",
    target: PageId::Contact,
});

const BOOK_EN: Option<CallToAction> = Some(CallToAction {
    label: "Book an appointment",
    target: PageId::Contact,
});

static HOME: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Praktijk voor lichaam en rust in Utrecht",
        description: "Praktijk Lichtpunt in Utrecht helpt bij rug- en nekklachten, stress, hoofdpijn en slaapproblemen met massage en acupunctuur.",
        heading: "Weer lekker in je lijf",
        intro: "Persoonlijke behandelingen voor lichaam en geest, met aandacht en zonder haast.",
        sections: &[
            Section {
                heading: "Waarmee ik je help",
                paragraphs: &[
                    "Of je nu vastzit in je nek, slecht slaapt of al maanden onder spanning staat: samen zoeken we uit wat jouw lichaam nodig heeft.",
                ],
            },
            Section {
                heading: "Zo werk ik",
                paragraphs: &[
                    "Elke eerste afspraak begint met een uitgebreid intakegesprek. Daarna stellen we samen een behandelplan op dat past bij jouw klachten en agenda.",
                ],
            },
        ],
        highlights: &[
            Highlight { label: "Ervaring", value: "15 jaar" },
            Highlight { label: "Vergoeding", value: "Via aanvullende verzekering" },
        ],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Wellness practice for body and calm in Utrecht",
        description: "Praktijk Lichtpunt in Utrecht helps with back and neck pain, stress, headaches and sleep problems through massage and acupuncture.",
        heading: "Feel at home in your body again",
        intro: "Personal treatments for body and mind, with attention and without rushing.",
        sections: &[
            Section {
                heading: "How I can help",
                paragraphs: &[
                    "Whether your neck is stuck, you sleep badly or you have been under pressure for months: together we find out what your body needs.",
                ],
            },
            Section {
                heading: "How I work",
                paragraphs: &[
                    "Every first appointment starts with a thorough intake. Afterwards we draw up a treatment plan that fits your complaints and your schedule.",
                ],
            },
        ],
        highlights: &[
            Highlight { label: "Experience", value: "15 years" },
            Highlight { label: "Reimbursement", value: "Through supplementary insurance" },
        ],
        cta: BOOK_EN,
    },
);

static ABOUT: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Over mij",
        description: "Maak kennis met Sanne de Vries, massagetherapeut en acupuncturist met vijftien jaar ervaring in Utrecht.",
        heading: "Over Sanne",
        intro: "Ik ben Sanne de Vries, massagetherapeut en acupuncturist.",
        sections: &[Section {
            heading: "Mijn achtergrond",
            paragraphs: &[
                "Na mijn opleiding fysiotherapie specialiseerde ik me in klassieke massage en Chinese geneeskunde.",
                "Sinds 2010 behandel ik cliënten in mijn eigen praktijk aan de Oudegracht.",
            ],
        }],
        highlights: &[
            Highlight { label: "Lid van", value: "NVA en NGS" },
            Highlight { label: "Registratie", value: "RBCZ" },
        ],
        cta: BOOK_NL,
    },
    PageContent {
        title: "About me",
        description: "Meet Sanne de Vries, massage therapist and acupuncturist with fifteen years of experience in Utrecht.",
        heading: "About Sanne",
        intro: "I am Sanne de Vries, massage therapist and acupuncturist.",
        sections: &[Section {
            heading: "My background",
            paragraphs: &[
                "After training as a physiotherapist I specialised in classical massage and Chinese medicine.",
                "Since 2010 I have been treating clients in my own practice on the Oudegracht.",
            ],
        }],
        highlights: &[
            Highlight { label: "Member of", value: "NVA and NGS" },
            Highlight { label: "Registration", value: "RBCZ" },
        ],
        cta: BOOK_EN,
    },
);

static TREATMENTS: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Behandelingen",
        description: "Een overzicht van alle behandelingen: massage, acupunctuur en begeleiding bij stress, pijn en slaapproblemen.",
        heading: "Behandelingen",
        intro: "Kies het onderwerp dat bij jouw klacht past, of neem contact op als je twijfelt.",
        sections: &[],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Treatments",
        description: "An overview of all treatments: massage, acupuncture and support for stress, pain and sleep problems.",
        heading: "Our treatments",
        intro: "Pick the topic that matches your complaint, or get in touch if you are unsure.",
        sections: &[],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static BACK_NECK: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Rug- en nekproblemen",
        description: "Last van je rug of een stijve nek? Gerichte massage en acupunctuur verminderen spierspanning en pijn.",
        heading: "Rug- en nekproblemen",
        intro: "Lang zitten, tillen of stress: rug- en nekklachten hebben vaak meerdere oorzaken.",
        sections: &[Section {
            heading: "De behandeling",
            paragraphs: &[
                "Met diepe weefselmassage en triggerpointtherapie maken we verkrampte spieren los.",
                "Je krijgt eenvoudige oefeningen mee om thuis verder te werken.",
            ],
        }],
        highlights: &[Highlight { label: "Duur", value: "60 minuten" }],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Back and neck problems",
        description: "Suffering from back pain or a stiff neck? Targeted massage and acupuncture reduce muscle tension and pain.",
        heading: "Back and neck problems",
        intro: "Sitting for long hours, lifting or stress: back and neck complaints often have several causes.",
        sections: &[Section {
            heading: "The treatment",
            paragraphs: &[
                "Deep tissue massage and trigger point therapy release cramped muscles.",
                "You take home a few simple exercises to keep working on it.",
            ],
        }],
        highlights: &[Highlight { label: "Duration", value: "60 minutes" }],
        cta: BOOK_EN,
    },
);

static STRESS_BURNOUT: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Stress en burn-out",
        description: "Ondersteuning bij stress en burn-out met ontspanningsmassage, ademwerk en acupunctuur in Utrecht.",
        heading: "Stress en burn-out",
        intro: "Als spanning blijft hangen, raakt je lichaam uit balans.",
        sections: &[Section {
            heading: "Rust terugvinden",
            paragraphs: &[
                "We combineren rustige massage met ademhalingsoefeningen zodat je zenuwstelsel tot rust kan komen.",
            ],
        }],
        highlights: &[Highlight { label: "Traject", value: "4 tot 6 sessies" }],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Stress and burnout",
        description: "Support for stress and burnout with relaxation massage, breathwork and acupuncture in Utrecht.",
        heading: "Stress and burnout",
        intro: "When tension lingers, your body loses its balance.",
        sections: &[Section {
            heading: "Finding calm again",
            paragraphs: &[
                "We combine gentle massage with breathing exercises so your nervous system can settle.",
            ],
        }],
        highlights: &[Highlight { label: "Programme", value: "4 to 6 sessions" }],
        cta: BOOK_EN,
    },
);

static HEADACHE: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Hoofdpijn en migraine",
        description: "Minder vaak hoofdpijn of migraine door ontspanning van nek, kaak en schouders en gerichte acupunctuur.",
        heading: "Hoofdpijn en migraine",
        intro: "Spanningshoofdpijn begint vaak in je nek en schouders.",
        sections: &[Section {
            heading: "Aanpak",
            paragraphs: &[
                "We behandelen de spieren rond nek en kaak en gebruiken acupunctuurpunten die bekend zijn bij hoofdpijnklachten.",
            ],
        }],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Headache and migraine",
        description: "Fewer headaches or migraines by relaxing the neck, jaw and shoulders combined with targeted acupuncture.",
        heading: "Headache and migraine",
        intro: "Tension headaches often start in your neck and shoulders.",
        sections: &[Section {
            heading: "Approach",
            paragraphs: &[
                "We treat the muscles around the neck and jaw and use acupuncture points known for headache relief.",
            ],
        }],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static SLEEP: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Slaapproblemen",
        description: "Slecht inslapen of vaak wakker? Ontspanningsbehandelingen en acupunctuur helpen je weer uitgerust wakker te worden.",
        heading: "Slaapproblemen",
        intro: "Goede slaap begint met een ontspannen lichaam.",
        sections: &[Section {
            heading: "Wat je kunt verwachten",
            paragraphs: &[
                "Na de intake krijg je een behandeling gericht op ontspanning en advies over je avondritme.",
            ],
        }],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Sleep problems",
        description: "Trouble falling asleep or waking up often? Relaxation treatments and acupuncture help you wake up rested again.",
        heading: "Sleep problems",
        intro: "Good sleep starts with a relaxed body.",
        sections: &[Section {
            heading: "What to expect",
            paragraphs: &[
                "After the intake you receive a treatment focused on relaxation and advice on your evening routine.",
            ],
        }],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static SPORTS_INJURIES: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Sportblessures",
        description: "Sneller herstel van sportblessures en overbelasting met sportmassage en triggerpointtherapie.",
        heading: "Sportblessures",
        intro: "Overbelaste spieren herstellen beter met de juiste behandeling.",
        sections: &[Section {
            heading: "Sportmassage",
            paragraphs: &[
                "Sportmassage bevordert de doorbloeding en helpt verklevingen los te maken.",
            ],
        }],
        highlights: &[Highlight { label: "Duur", value: "45 of 60 minuten" }],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Sports injuries",
        description: "Faster recovery from sports injuries and overuse with sports massage and trigger point therapy.",
        heading: "Sports injuries",
        intro: "Overworked muscles recover better with the right treatment.",
        sections: &[Section {
            heading: "Sports massage",
            paragraphs: &[
                "Sports massage improves circulation and helps release adhesions.",
            ],
        }],
        highlights: &[Highlight { label: "Duration", value: "45 or 60 minutes" }],
        cta: BOOK_EN,
    },
);

static PREGNANCY: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Zwangerschapsmassage",
        description: "Veilige en ontspannende massage tijdens de zwangerschap, in zijligging en afgestemd op elk trimester.",
        heading: "Zwangerschapsmassage",
        intro: "Een moment voor jezelf tijdens een bijzondere periode.",
        sections: &[Section {
            heading: "Veilig en comfortabel",
            paragraphs: &[
                "Je ligt comfortabel op je zij met voldoende kussens. De massage is afgestemd op jouw trimester.",
            ],
        }],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Pregnancy massage",
        description: "Safe and relaxing massage during pregnancy, lying on your side and adapted to each trimester.",
        heading: "Pregnancy massage",
        intro: "A moment for yourself during a special time.",
        sections: &[Section {
            heading: "Safe and comfortable",
            paragraphs: &[
                "You lie comfortably on your side with plenty of cushions. The massage is adapted to your trimester.",
            ],
        }],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static MASSAGE: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Ontspanningsmassage",
        description: "Een ontspanningsmassage met warme olie voor diepe rust en soepele spieren.",
        heading: "Ontspanningsmassage",
        intro: "Even helemaal niets hoeven.",
        sections: &[],
        highlights: &[Highlight { label: "Duur", value: "60 of 90 minuten" }],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Relaxation massage",
        description: "A relaxation massage with warm oil for deep rest and supple muscles.",
        heading: "Relaxation massage",
        intro: "A moment of doing absolutely nothing.",
        sections: &[],
        highlights: &[Highlight { label: "Duration", value: "60 or 90 minutes" }],
        cta: BOOK_EN,
    },
);

static ACUPUNCTURE: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Acupunctuur",
        description: "Acupunctuur volgens de Chinese geneeskunde bij pijn, stress en slaapproblemen. Erkend door de meeste verzekeraars.",
        heading: "Acupunctuur",
        intro: "Met dunne, steriele naalden brengen we je lichaam terug in balans.",
        sections: &[Section {
            heading: "Doet het pijn?",
            paragraphs: &[
                "De meeste mensen voelen alleen een lichte prik of een zwaar gevoel rond het punt.",
            ],
        }],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Acupuncture",
        description: "Acupuncture based on Chinese medicine for pain, stress and sleep problems. Recognised by most insurers.",
        heading: "Acupuncture treatment",
        intro: "Thin, sterile needles bring your body back into balance.",
        sections: &[Section {
            heading: "Does it hurt?",
            paragraphs: &[
                "Most people only feel a slight prick or a heavy sensation around the point.",
            ],
        }],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static RATES: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Tarieven",
        description: "Tarieven voor massage en acupunctuur bij Praktijk Lichtpunt, en informatie over vergoeding door je zorgverzekeraar.",
        heading: "Tarieven",
        intro: "Alle tarieven zijn inclusief btw. Annuleren kan kosteloos tot 24 uur van tevoren.",
        sections: &[Section {
            heading: "Vergoeding",
            paragraphs: &[
                "Veel aanvullende verzekeringen vergoeden acupunctuur en massage geheel of gedeeltelijk. Check je polis.",
            ],
        }],
        highlights: &[
            Highlight { label: "Intake en behandeling (90 min)", value: "€ 95" },
            Highlight { label: "Behandeling (60 min)", value: "€ 75" },
            Highlight { label: "Ontspanningsmassage (90 min)", value: "€ 105" },
        ],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Rates",
        description: "Rates for massage and acupuncture at Praktijk Lichtpunt, and information on reimbursement by your health insurer.",
        heading: "Rates and reimbursement",
        intro: "All rates include VAT. Cancellation is free up to 24 hours in advance.",
        sections: &[Section {
            heading: "Reimbursement",
            paragraphs: &[
                "Many supplementary insurance plans cover acupuncture and massage in full or in part. Check your policy.",
            ],
        }],
        highlights: &[
            Highlight { label: "Intake and treatment (90 min)", value: "€ 95" },
            Highlight { label: "Treatment (60 min)", value: "€ 75" },
            Highlight { label: "Relaxation massage (90 min)", value: "€ 105" },
        ],
        cta: BOOK_EN,
    },
);

static REVIEWS: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Ervaringen",
        description: "Lees wat cliënten zeggen over hun behandeling bij Praktijk Lichtpunt in Utrecht.",
        heading: "Ervaringen van cliënten",
        intro: "Eerlijke reacties van mensen die je voorgingen.",
        sections: &[],
        highlights: &[],
        cta: BOOK_NL,
    },
    PageContent {
        title: "Reviews",
        description: "Read what clients say about their treatment at Praktijk Lichtpunt in Utrecht.",
        heading: "What clients say",
        intro: "Honest feedback from people who came before you.",
        sections: &[],
        highlights: &[],
        cta: BOOK_EN,
    },
);

static CONTACT: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Contact",
        description: "Neem contact op met Praktijk Lichtpunt voor een afspraak of een vraag. Je krijgt binnen één werkdag antwoord.",
        heading: "Neem contact op",
        intro: "Stuur een bericht en ik neem binnen één werkdag contact met je op.",
        sections: &[],
        highlights: &[],
        cta: None,
    },
    PageContent {
        title: "Contact",
        description: "Contact Praktijk Lichtpunt to book an appointment or ask a question. You will hear back within one working day.",
        heading: "Get in touch",
        intro: "Send a message and I will get back to you within one working day.",
        sections: &[],
        highlights: &[],
        cta: None,
    },
);

static THANK_YOU: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Bedankt voor je bericht",
        description: "Je bericht is verstuurd. Je hoort binnen één werkdag van ons.",
        heading: "Bedankt!",
        intro: "Je bericht is goed ontvangen. Ik neem binnen één werkdag contact met je op.",
        sections: &[],
        highlights: &[],
        cta: Some(CallToAction {
            label: "Terug naar de homepage",
            target: PageId::Home,
        }),
    },
    PageContent {
        title: "Thank you for your message",
        description: "Your message has been sent. You will hear from us within one working day.",
        heading: "Thank you!",
        intro: "Your message was received. I will get back to you within one working day.",
        sections: &[],
        highlights: &[],
        cta: Some(CallToAction {
            label: "Back to the home page",
            target: PageId::Home,
        }),
    },
);

static BLOG: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Blog",
        description: "Artikelen over ontspanning, slaap, houding en gezond leven van Praktijk Lichtpunt.",
        heading: "Blog & inspiratie",
        intro: "Praktische tips en achtergrondverhalen.",
        sections: &[],
        highlights: &[],
        cta: None,
    },
    PageContent {
        title: "Blog",
        description: "Articles on relaxation, sleep, posture and healthy living from Praktijk Lichtpunt.",
        heading: "Blog & inspiration",
        intro: "Practical tips and background stories.",
        sections: &[],
        highlights: &[],
        cta: None,
    },
);

static PRIVACY: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Privacyverklaring",
        description: "Hoe Praktijk Lichtpunt omgaat met je persoonsgegevens.",
        heading: "Privacyverklaring",
        intro: "Ik ga zorgvuldig om met je gegevens en deel ze nooit met derden voor marketing.",
        sections: &[
            Section {
                heading: "Welke gegevens",
                paragraphs: &[
                    "Via het contactformulier ontvang ik je naam, e-mailadres, telefoonnummer en bericht.",
                ],
            },
            Section {
                heading: "Bewaartermijn",
                paragraphs: &[
                    "Berichten die niet tot een behandeling leiden worden na zes maanden verwijderd.",
                ],
            },
        ],
        highlights: &[],
        cta: None,
    },
    PageContent {
        title: "Privacy statement",
        description: "How Praktijk Lichtpunt handles your personal data.",
        heading: "Privacy statement",
        intro: "I handle your data with care and never share it with third parties for marketing.",
        sections: &[
            Section {
                heading: "Which data",
                paragraphs: &[
                    "Through the contact form I receive your name, e-mail address, phone number and message.",
                ],
            },
            Section {
                heading: "Retention",
                paragraphs: &[
                    "Messages that do not lead to a treatment are deleted after six months.",
                ],
            },
        ],
        highlights: &[],
        cta: None,
    },
);

static INTRO_OFFER: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Gratis kennismakingsgesprek",
        description: "Plan een gratis kennismakingsgesprek van 20 minuten en ontdek wat een behandeling voor jou kan doen.",
        heading: "Gratis kennismaken",
        intro: "Twintig minuten, vrijblijvend, om je klachten en wensen te bespreken.",
        sections: &[],
        highlights: &[
            Highlight { label: "Duur", value: "20 minuten" },
            Highlight { label: "Kosten", value: "Gratis" },
        ],
        cta: None,
    },
    PageContent {
        title: "Free introduction call",
        description: "Book a free 20-minute introduction and find out what a treatment can do for you.",
        heading: "Free introduction",
        intro: "Twenty minutes, no strings attached, to talk about your complaints and wishes.",
        sections: &[],
        highlights: &[
            Highlight { label: "Duration", value: "20 minutes" },
            Highlight { label: "Cost", value: "Free" },
        ],
        cta: None,
    },
);

static BACK_PAIN_OFFER: Localized<PageContent> = Localized::new(
    PageContent {
        title: "Actie: rugpijn aanpakken",
        description: "Drie behandelingen tegen rugpijn voor een vast pakkettarief. Alleen deze maand.",
        heading: "Van rugpijn af in drie sessies",
        intro: "Een gericht traject van drie behandelingen, met oefeningen voor thuis.",
        sections: &[],
        highlights: &[Highlight { label: "Pakketprijs", value: "€ 199" }],
        cta: None,
    },
    PageContent {
        title: "Offer: tackle back pain",
        description: "Three back pain treatments for one fixed package price. This month only.",
        heading: "Relief from back pain in three sessions",
        intro: "A focused programme of three treatments, with exercises for at home.",
        sections: &[],
        highlights: &[Highlight { label: "Package price", value: "€ 199" }],
        cta: None,
    },
);

pub(super) fn lookup(page: PageId) -> Option<&'static Localized<PageContent>> {
    let content = match page {
        PageId::Home => &HOME,
        PageId::About => &ABOUT,
        PageId::Treatments => &TREATMENTS,
        PageId::BackNeck => &BACK_NECK,
        PageId::StressBurnout => &STRESS_BURNOUT,
        PageId::Headache => &HEADACHE,
        PageId::Sleep => &SLEEP,
        PageId::SportsInjuries => &SPORTS_INJURIES,
        PageId::Pregnancy => &PREGNANCY,
        PageId::Massage => &MASSAGE,
        PageId::Acupuncture => &ACUPUNCTURE,
        PageId::Rates => &RATES,
        PageId::Reviews => &REVIEWS,
        PageId::Contact => &CONTACT,
        PageId::ThankYou => &THANK_YOU,
        PageId::Blog => &BLOG,
        PageId::Privacy => &PRIVACY,
        PageId::IntroOffer => &INTRO_OFFER,
        PageId::BackPainOffer => &BACK_PAIN_OFFER,
        PageId::BlogPost => return None,
    };
    Some(content)
}
