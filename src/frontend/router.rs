/// Pages the site can show. Navigation swaps a single current-view value;
/// there is no history integration, the graph is cyclic and fully
/// in-memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Map,
    Purchase,
    Enroll,
    Contact,
    Rules,
    Privacy,
    Terms,
    Admin,
}

impl Route {
    /// Links shown as buttons in the desktop header.
    pub const HEADER_LINKS: [Route; 5] = [
        Route::Home,
        Route::Map,
        Route::Purchase,
        Route::Enroll,
        Route::Contact,
    ];

    /// Document links in the footer.
    pub const FOOTER_DOCS: [Route; 3] = [Route::Rules, Route::Privacy, Route::Terms];

    /// Every route, in the order the mobile select menu lists them.
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Map,
        Route::Purchase,
        Route::Enroll,
        Route::Contact,
        Route::Rules,
        Route::Privacy,
        Route::Terms,
        Route::Admin,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Map => "mappa",
            Route::Purchase => "acquista",
            Route::Enroll => "aderisci",
            Route::Contact => "contatti",
            Route::Rules => "regolamento",
            Route::Privacy => "privacy",
            Route::Terms => "termini",
            Route::Admin => "admin",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Route::Home => "Cosa è Tarocard",
            Route::Map => "Mappa negozi",
            Route::Purchase => "Acquista",
            Route::Enroll => "Aderisci",
            Route::Contact => "Contatti",
            Route::Rules => "Regolamento d'uso",
            Route::Privacy => "Privacy e Cookie",
            Route::Terms => "Termini del servizio",
            Route::Admin => "Area riservata",
        }
    }

    pub fn from_key(key: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.key() == key)
    }
}
