/// The fixed set of boot animations this tool maintains.
use crate::models::CatalogEntry;

pub static CATALOG: &[CatalogEntry] = &[
    // SONY
    CatalogEntry::new("ps1", "https://steamdeckrepo.com/post/QEzrE/playstation_1"),
    CatalogEntry::new("ps_abstract", "https://steamdeckrepo.com/post/nvMx8/playstation_abstract"),
    CatalogEntry::new("ps2", "https://www.youtube.com/watch?v=y9Ln-qyvX_I"),
    // NINTENDO
    CatalogEntry::new("snes", "https://www.youtube.com/watch?v=QNwOaGLG8CI"),
    CatalogEntry::new("gba", "https://steamdeckrepo.com/post/1E1Ln/gameboy_advance"),
    CatalogEntry::new("gamecube", "https://steamdeckrepo.com/post/E1Zza/gamecube"),
    // OTHER
    CatalogEntry::new(
        "pokemon_firered",
        "https://steamdeckrepo.com/post/Y6D4n/pokemon_opening_animation_on_steam_deck",
    ),
];
