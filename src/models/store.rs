use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A participating merchant. `website` and `telefono` are optional and
/// carried as empty strings when absent, matching the exported CSV shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub address: String,
    pub comune: String,
    pub position: Position,
    pub website: String,
    pub telefono: String,
}

impl Store {
    pub fn has_website(&self) -> bool {
        !self.website.is_empty()
    }
}

/// The seven demo merchants the site ships with. The directory is seeded
/// from this list; nothing is persisted across sessions.
pub fn demo_stores() -> Vec<Store> {
    let rows: [(u32, &str, &str, &str, &str, &str, f64, f64, &str, &str); 7] = [
        (
            1,
            "Bar Centrale",
            "Bar & Caffe",
            "Caffetteria storica in centro. Colazioni, pranzi veloci e aperitivi.",
            "Via Roma 12, Borgotaro",
            "Borgotaro",
            44.488,
            9.779,
            "https://example.com",
            "+39 0525 000000",
        ),
        (
            2,
            "Alimentari Rossi",
            "Alimentari",
            "Prodotti tipici della Valtaro: salumi, formaggi e confetture.",
            "Piazza Garibaldi 3, Borgotaro",
            "Borgotaro",
            44.49,
            9.783,
            "",
            "+39 0525 111111",
        ),
        (
            3,
            "Bottega Verde",
            "Abbigliamento",
            "Abbigliamento e accessori sostenibili.",
            "Corso XX Settembre 45, Borgotaro",
            "Borgotaro",
            44.4915,
            9.7775,
            "https://example.com",
            "+39 0525 222222",
        ),
        (
            4,
            "Panificio Bedoniese",
            "Panetteria",
            "Pane e focacce a lievitazione naturale.",
            "Via Trieste 8, Bedonia",
            "Bedonia",
            44.4987,
            9.6305,
            "",
            "+39 0525 333333",
        ),
        (
            5,
            "Trattoria La Quiete",
            "Ristorazione",
            "Cucina tipica con funghi e tartufi di stagione.",
            "Viale Rimembranze 2, Bedonia",
            "Bedonia",
            44.5012,
            9.6368,
            "https://example.com",
            "+39 0525 444444",
        ),
        (
            6,
            "Enoteca del Castello",
            "Enoteca",
            "Selezione di vini regionali e nazionali.",
            "Piazza del Castello, Compiano",
            "Compiano",
            44.5,
            9.7,
            "",
            "+39 0525 555555",
        ),
        (
            7,
            "Agriturismo Val di Taro",
            "Agriturismo",
            "Prodotti a km0 e ospitalita rurale.",
            "Strada Provinciale, Albareto",
            "Albareto",
            44.45,
            9.7,
            "https://example.com",
            "+39 0525 666666",
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, category, description, address, comune, lat, lon, website, telefono)| {
                Store {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    description: description.to_string(),
                    address: address.to_string(),
                    comune: comune.to_string(),
                    position: Position::new(lat, lon),
                    website: website.to_string(),
                    telefono: telefono.to_string(),
                }
            },
        )
        .collect()
}
