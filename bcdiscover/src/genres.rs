use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::LazyLock;

/// Genres and their subgenres as offered by the Bandcamp discover page.
/// Subgenres keep the order the site lists them in.
const GENRE_TABLE: &[(&str, &[&str])] = &[
    (
        "acoustic",
        &[
            "all-acoustic",
            "folk",
            "singer-songwriter",
            "rock",
            "pop",
            "guitar",
            "americana",
            "electro-acoustic",
            "instrumental",
            "piano",
            "bluegrass",
            "roots",
        ],
    ),
    (
        "alternative",
        &[
            "all-alternative",
            "indie-rock",
            "industrial",
            "shoegaze",
            "grunge",
            "goth",
            "dream-pop",
            "emo",
            "math-rock",
            "britpop",
            "jangle-pop",
        ],
    ),
    (
        "ambient",
        &[
            "all-ambient",
            "chill-out",
            "drone",
            "dark-ambient",
            "electronic",
            "soundscapes",
            "field-recordings",
            "atmospheric",
            "meditation",
            "noise",
            "new-age",
            "idm",
            "industrial",
        ],
    ),
    (
        "blues",
        &[
            "all-blues",
            "rhythm-blues",
            "blues-rock",
            "country-blues",
            "boogie-woogie",
            "delta-blues",
            "americana",
            "electric-blues",
            "gospel",
            "bluegrass",
        ],
    ),
    (
        "classical",
        &[
            "all-classical",
            "orchestral",
            "neo-classical",
            "chamber-music",
            "classical-piano",
            "contemporary-classical",
            "baroque",
            "opera",
            "choral",
            "modern-classical",
            "avant-garde",
        ],
    ),
    (
        "comedy",
        &[
            "all-comedy",
            "improv",
            "stand-up",
        ],
    ),
    (
        "country",
        &[
            "all-country",
            "bluegrass",
            "country-rock",
            "americana",
            "country-folk",
            "alt-country",
            "country-blues",
            "western",
            "singer-songwriter",
            "outlaw",
            "honky-tonk",
            "roots",
            "hillbilly",
        ],
    ),
    (
        "devotional",
        &[
            "all-devotional",
            "christian",
            "gospel",
            "meditation",
            "spiritual",
            "worship",
            "inspirational",
        ],
    ),
    (
        "electronic",
        &[
            "all-electronic",
            "house",
            "electronica",
            "downtempo",
            "techno",
            "electro",
            "dubstep",
            "beats",
            "dance",
            "idm",
            "drum-bass",
            "breaks",
            "trance",
            "glitch",
            "chiptune",
            "chillwave",
            "dub",
            "edm",
            "instrumental",
            "witch-house",
            "garage",
            "juke",
            "footwork",
            "vaporwave",
            "synthwave",
        ],
    ),
    (
        "experimental",
        &[
            "all-experimental",
            "noise",
            "drone",
            "avant-garde",
            "experimental-rock",
            "improvisation",
            "sound-art",
            "musique-concrete",
        ],
    ),
    (
        "folk",
        &[
            "all-folk",
            "singer-songwriter",
            "folk-rock",
            "indie-folk",
            "pop-folk",
            "traditional",
            "experimental-folk",
            "roots",
        ],
    ),
    (
        "funk",
        &[
            "all-funk",
            "funk-jam",
            "deep-funk",
            "funk-rock",
            "jazz-funk",
            "boogie",
            "g-funk",
            "rare-groove",
            "electro",
            "go-go",
        ],
    ),
    (
        "hip-hop-rap",
        &[
            "all-hip-hop-rap",
            "rap",
            "underground-hip-hop",
            "instrumental-hip-hop",
            "trap",
            "conscious-hip-hop",
            "boom-bap",
            "beat-tape",
            "hardcore",
            "grime",
        ],
    ),
    (
        "jazz",
        &[
            "all-jazz",
            "fusion",
            "big-band",
            "nu-jazz",
            "modern-jazz",
            "swing",
            "free-jazz",
            "soul-jazz",
            "latin-jazz",
            "vocal-jazz",
            "bebop",
            "spiritual-jazz",
        ],
    ),
    (
        "kids",
        &[
            "all-kids",
            "family-music",
            "educational",
            "music-therapy",
            "lullaby",
            "baby",
        ],
    ),
    (
        "latin",
        &[
            "all-latin",
            "brazilian",
            "cumbia",
            "tango",
            "latin-rock",
            "flamenco",
            "salsa",
            "reggaeton",
            "merengue",
            "bolero",
            "méxico-d.f.",
            "bachata",
        ],
    ),
    (
        "metal",
        &[
            "all-metal",
            "hardcore",
            "black-metal",
            "death-metal",
            "thrash-metal",
            "grindcore",
            "doom",
            "post-hardcore",
            "progressive-metal",
            "metalcore",
            "sludge-metal",
            "heavy-metal",
            "deathcore",
            "noise",
        ],
    ),
    (
        "pop",
        &[
            "all-pop",
            "indie-pop",
            "synth-pop",
            "power-pop",
            "new-wave",
            "dream-pop",
            "noise-pop",
            "experimental-pop",
            "electro-pop",
            "adult-contemporary",
            "jangle-pop",
            "j-pop",
        ],
    ),
    (
        "punk",
        &[
            "all-punk",
            "hardcore-punk",
            "garage",
            "pop-punk",
            "punk-rock",
            "post-punk",
            "post-hardcore",
            "thrash",
            "crust-punk",
            "folk-punk",
            "emo",
            "ska",
            "no-wave",
        ],
    ),
    (
        "r-b-soul",
        &[
            "all-r-b-soul",
            "soul",
            "r-b",
            "neo-soul",
            "gospel",
            "contemporary-r-b",
            "motown",
            "urban",
        ],
    ),
    (
        "reggae",
        &[
            "all-reggae",
            "dub",
            "ska",
            "roots",
            "dancehall",
            "rocksteady",
            "ragga",
            "lovers-rock",
        ],
    ),
    (
        "rock",
        &[
            "all-rock",
            "indie",
            "prog-rock",
            "post-rock",
            "rock-roll",
            "psychedelic-rock",
            "hard-rock",
            "garage-rock",
            "surf-rock",
            "instrumental",
            "math-rock",
            "rockabilly",
        ],
    ),
    (
        "soundtrack",
        &[
            "all-soundtrack",
            "film-music",
            "video-game-music",
        ],
    ),
    (
        "spoken-word",
        &[
            "all-spoken-word",
            "poetry",
            "inspirational",
            "storytelling",
            "self-help",
        ],
    ),
    (
        "world",
        &[
            "all-world",
            "latin",
            "roots",
            "african",
            "tropical",
            "tribal",
            "brazilian",
            "celtic",
            "world-fusion",
            "cumbia",
            "gypsy",
            "new-age",
            "balkan",
            "reggaeton",
        ],
    ),
];

static GENRES: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| GENRE_TABLE.iter().copied().collect());

/// The catch-all genre the API accepts in addition to the table.
pub const ALL_GENRES: &str = "all";

pub fn is_known_genre(genre: &str) -> bool {
    genre == ALL_GENRES || GENRES.contains_key(genre)
}

pub fn is_known_subgenre(genre: &str, subgenre: &str) -> bool {
    GENRES
        .get(genre)
        .is_some_and(|subgenres| subgenres.iter().any(|s| *s == subgenre))
}

/// Prints genres in lexicographic order, each followed by its subgenres
/// indented by two spaces.
pub fn print_genres<W: Write>(w: &mut W) -> io::Result<()> {
    for (genre, subgenres) in GENRES.iter() {
        writeln!(w, "{genre}")?;
        for subgenre in subgenres.iter() {
            writeln!(w, "  {subgenre}")?;
        }
    }
    Ok(())
}
