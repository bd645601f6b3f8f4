// Copy and asset lists for the home page.

pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section: "home", label: "Home" },
    NavLink { section: "about", label: "About" },
    NavLink { section: "services", label: "Services" },
    NavLink { section: "clients", label: "Clients" },
    NavLink { section: "gallery", label: "Gallery" },
    NavLink { section: "contact", label: "Contact" },
];

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICES: &[Card] = &[
    Card {
        icon: "⚓",
        title: "Marine Logistics",
        body: "Crew boats, supply vessels and barges for offshore and inland water operations.",
    },
    Card {
        icon: "🛢",
        title: "Oil Field Support",
        body: "Well site services, manpower supply and field maintenance for upstream operators.",
    },
    Card {
        icon: "⚙",
        title: "Equipment Supply",
        body: "Procurement of certified valves, pumps, safety gear and spare parts.",
    },
    Card {
        icon: "🚚",
        title: "Haulage & Logistics",
        body: "Heavy-lift haulage and project cargo moved safely from port to site.",
    },
];

pub const VALUES: &[Card] = &[
    Card { icon: "🛡", title: "Safety", body: "Zero harm to people, assets and the environment." },
    Card { icon: "🤝", title: "Integrity", body: "Transparent dealings with every client and partner." },
    Card { icon: "⏱", title: "Reliability", body: "On time, on spec, every mobilisation." },
    Card { icon: "🌍", title: "Local Content", body: "Growing local talent and suppliers in the Niger Delta." },
];

pub const VISION_MISSION: &[Card] = &[
    Card {
        icon: "🔭",
        title: "Our Vision",
        body: "To be the most trusted indigenous marine and oil field services partner in West Africa.",
    },
    Card {
        icon: "🎯",
        title: "Our Mission",
        body: "Deliver safe, efficient and cost-effective solutions through skilled people and well-kept assets.",
    },
];

pub const CLIENTS: &[&str] = &[
    "Shell Petroleum Development Company",
    "Nigerian Agip Oil Company",
    "Total Energies",
    "NNPC Limited",
];

pub struct GalleryItem {
    pub image: Option<&'static str>,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem { image: Some("/assets/gallery/supply-vessel.jpg"), caption: "Supply vessel on charter" },
    GalleryItem { image: Some("/assets/gallery/crew-boat.jpg"), caption: "Crew change run" },
    GalleryItem { image: Some("/assets/gallery/well-site.jpg"), caption: "Well site support" },
    GalleryItem { image: Some("/assets/gallery/haulage.jpg"), caption: "Project cargo haulage" },
    GalleryItem { image: Some("/assets/gallery/warehouse.jpg"), caption: "Equipment yard" },
    GalleryItem { image: None, caption: "More projects coming soon" },
];

/// Options of the quote form's service select. The first entry is the
/// empty placeholder the form resets to.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a service"),
    ("marine-logistics", "Marine Logistics"),
    ("oil-field-support", "Oil Field Support"),
    ("equipment-supply", "Equipment Supply"),
    ("haulage", "Haulage & Logistics"),
    ("other", "Other"),
];

pub const COMPANY_NAME: &str = "Fan-Tek Ventures Limited";
