//! Compiled-in catalog contents

use std::time::Duration;

use super::catalog::{Catalog, Cover, Playlist, Track};

fn t(id: &str, title: &str, artists: &str, m: u64, s: u64) -> Track {
    Track::new(id, title, artists, Duration::from_secs(m * 60 + s))
}

fn t_local(id: &str, title: &str, artists: &str, m: u64, s: u64, audio: &str) -> Track {
    t(id, title, artists, m, s).with_audio(audio)
}

fn playlist(
    id: &str,
    title: &str,
    curator: &str,
    saves: u64,
    description: &str,
    cover: Cover,
    tracks: Vec<Track>,
) -> Playlist {
    Playlist {
        id: id.to_string(),
        title: title.to_string(),
        curator: curator.to_string(),
        saves,
        description: description.to_string(),
        cover: Some(cover),
        tracks,
    }
}

pub fn catalog() -> Catalog {
    Catalog::new(vec![
        playlist(
            "deja_vu_playlist",
            "Deja Vu",
            "Takumi Fujiwara",
            1986,
            "Initial D Eurobeat",
            Cover::Local("deja_vu".to_string()),
            vec![t_local("deja_vu_track", "DEJA VU", "DAVE RODGERS", 4, 22, "dejabu_music")],
        ),
        playlist(
            "gas_gas_gas_playlist",
            "Gas Gas Gas",
            "Manuel",
            2000,
            "I'm gonna step on the gas!",
            Cover::Local("gas_gas_gas".to_string()),
            vec![t_local("gas_gas_gas_track", "GAS GAS GAS", "MANUEL", 3, 21, "gas_gas_gas")],
        ),
        playlist(
            "todays_top_hits",
            "Today's Top Hits",
            "Spotify",
            55_242_100,
            "The hottest 60 Cover: Sabrina Carpenter",
            Cover::Remote("https://i.scdn.co/image/ab67706f00000003b0c6f2283038686604245f06".to_string()),
            vec![
                t("busy_woman", "Busy Woman", "Sabrina Carpenter", 3, 5),
                t("die_with_smile", "Die With A Smile", "Lady Gaga, Bruno Mars", 4, 2),
                t("luther", "luther (with sza)", "Kendrick Lamar, SZA", 3, 45),
                t("messy", "Messy", "Lolo Young", 2, 58),
                t("midnight_city", "Midnight City", "M83", 4, 18),
                t("sunset_drive", "Sunset Drive", "Neon Vibes", 3, 12),
                t("golden_hour", "Golden Hour", "JVKE", 3, 29),
                t("ocean_eyes", "Ocean Eyes", "Billie Eilish", 3, 15),
            ],
        ),
        playlist(
            "viva_latino",
            "Viva Latino",
            "Spotify",
            169_693_200,
            "Top Latin hits elevando nuestra música.",
            Cover::Remote("https://i.scdn.co/image/ab67706f000000037344c26447594943f59043c9".to_string()),
            vec![
                t("morena", "Morena", "Peso Pluma", 3, 22),
                t("7_dias", "7 Días", "El Caballo Dorado", 2, 49),
                t("bailenolvidable", "BAILE INeOlVIDABLE", "Bad Bunny", 3, 55),
                t("khe", "Khe?", "Nuevo Alejandro, Romeo Santos", 3, 31),
                t("calor", "Calor", "Karol G", 3, 11),
                t("fuego", "Fuego", "Rosalía", 2, 59),
                t("sabor", "Sabor", "J Balvin", 3, 9),
                t("noches", "Noches", "Ozuna", 2, 54),
            ],
        ),
        playlist(
            "rapcaviar",
            "RapCaviar",
            "Spotify",
            153_328_300,
            "New music from Drake, Offset and Young Nudy.",
            Cover::Remote("https://i.scdn.co/image/ab67706f00000003c535444e21b03831ed7324ab".to_string()),
            vec![
                t("gimme_a_hug", "GIMME A HUG", "Drake", 3, 36),
                t("tv_off", "TV off (feat. leafy gunplay)", "Kendrick Lamar, Leafy Gunplay", 4, 1),
                t("dumb_dumb", "Dum, Dumb, and Dumber (with Young Future)", "Drake, Young Future", 3, 57),
                t("brian", "BRIAN STEELE", "El Drake", 2, 52),
                t("storm", "Storm", "Lil Vibes", 3, 15),
                t("echo", "Echo", "Offset", 2, 49),
                t("rhythm", "Rhythm", "Young Nudy", 3, 5),
                t("night_flow", "Night Flow", "Metro Boomin", 2, 59),
            ],
        ),
    ])
}
