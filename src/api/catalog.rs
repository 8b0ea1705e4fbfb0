//! Static, pre-loaded catalog. Read-only for the life of the page.

use crate::api::models::{Language, Playlist, Track};
use once_cell::sync::Lazy;

const SOUNDHELIX_BASE: &str = "https://www.soundhelix.com/examples/mp3";
const UNSPLASH_COVER_QUERY: &str = "q=80&w=400&h=400&auto=format&fit=crop";

pub const GENRE_TILES: [&str; 6] = [
    "Hyperpop",
    "Glitch",
    "Industrial",
    "Doom Metal",
    "Vaporwave",
    "Phonk",
];

fn picsum_cover(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/400/400")
}

fn unsplash_cover(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?{UNSPLASH_COVER_QUERY}")
}

fn soundhelix(song: u32) -> String {
    format!("{SOUNDHELIX_BASE}/SoundHelix-Song-{song}.mp3")
}

#[allow(clippy::too_many_arguments)]
fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    cover_url: String,
    duration: &str,
    audio_url: String,
    genre: &str,
    language: Language,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        cover_url,
        duration: duration.to_string(),
        audio_url,
        genre: genre.to_string(),
        language: Some(language),
    }
}

static TRACKS: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        track(
            "1",
            "Toxic Sludge",
            "The Hazmat Crew",
            "Corrosive Beats",
            picsum_cover("toxic1"),
            "3:45",
            soundhelix(1),
            "Techno",
            Language::English,
        ),
        track(
            "2",
            "Neon Nights",
            "Cyber Runner",
            "Digital Abyss",
            picsum_cover("toxic2"),
            "4:12",
            soundhelix(2),
            "Synthwave",
            Language::English,
        ),
        track(
            "h1",
            "Tum Hi Ho",
            "Arijit Singh",
            "Aashiqui 2",
            unsplash_cover("1493225255756-d9584f8606e9"),
            "4:22",
            soundhelix(3),
            "Romantic",
            Language::Hindi,
        ),
        track(
            "h2",
            "Kesariya",
            "Arijit Singh",
            "Brahmastra",
            unsplash_cover("1459749411177-042180ce673c"),
            "4:28",
            soundhelix(4),
            "Pop",
            Language::Hindi,
        ),
        track(
            "h3",
            "Raataan Lambiyan",
            "Jubin Nautiyal",
            "Shershaah",
            unsplash_cover("1514525253361-bee8718a300c"),
            "3:50",
            soundhelix(5),
            "Pop",
            Language::Hindi,
        ),
        track(
            "b1",
            "Lollipop Lagelu",
            "Pawan Singh",
            "Bhojpuri Dhamaka",
            unsplash_cover("1511671782779-c97d3d27a1d4"),
            "4:10",
            soundhelix(8),
            "Folk/Dance",
            Language::Bhojpuri,
        ),
        track(
            "b2",
            "Pudina Ae Haseena",
            "Khesari Lal Yadav",
            "Khesari Hits",
            unsplash_cover("1470225620780-dba8ba36b745"),
            "3:45",
            soundhelix(9),
            "Modern Bhojpuri",
            Language::Bhojpuri,
        ),
        track(
            "b3",
            "Coolar Kurti Me",
            "Khesari Lal Yadav",
            "Deewanapan",
            unsplash_cover("1508700115892-45ecd05ae2ad"),
            "3:55",
            soundhelix(10),
            "Bhojpuri Dance",
            Language::Bhojpuri,
        ),
    ]
});

static PLAYLISTS: Lazy<Vec<Playlist>> = Lazy::new(|| {
    vec![
        Playlist {
            id: "p1".to_string(),
            name: "Toxic Essentials".to_string(),
            description: "The tracks that define our corrosive sound.".to_string(),
            cover_url: picsum_cover("playlist1"),
            songs: vec!["1".to_string(), "2".to_string(), "h1".to_string()],
        },
        Playlist {
            id: "p2".to_string(),
            name: "Desi Melt".to_string(),
            description: "Hindi and Bhojpuri bangers for the soul.".to_string(),
            cover_url: picsum_cover("desi"),
            songs: vec![
                "h2".to_string(),
                "h3".to_string(),
                "b1".to_string(),
                "b2".to_string(),
            ],
        },
    ]
});

/// Every track, in the fixed order used for next/previous.
pub fn tracks() -> &'static [Track] {
    &TRACKS
}

pub fn default_playlists() -> &'static [Playlist] {
    &PLAYLISTS
}

pub fn genres() -> &'static [&'static str] {
    &GENRE_TILES
}

pub fn find_track(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|track| track.id == id)
}

pub fn find_default_playlist(id: &str) -> Option<&'static Playlist> {
    PLAYLISTS.iter().find(|playlist| playlist.id == id)
}

/// Case-insensitive substring match on title or artist. A blank query matches nothing.
pub fn search_tracks(query: &str) -> Vec<&'static Track> {
    filter_tracks(tracks(), query)
}

pub fn filter_tracks<'a>(source: &'a [Track], query: &str) -> Vec<&'a Track> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    source
        .iter()
        .filter(|track| {
            track.title.to_lowercase().contains(&needle)
                || track.artist.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolve ids in the given order, silently dropping ids the catalog doesn't know.
pub fn resolve_tracks<'a, I, S>(ids: I) -> Vec<&'static Track>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + 'a + ?Sized,
{
    ids.into_iter()
        .filter_map(|id| find_track(id.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for track in tracks() {
            assert!(seen.insert(track.id.as_str()), "duplicate id {}", track.id);
        }
    }

    #[test]
    fn every_track_has_a_parseable_duration() {
        for track in tracks() {
            assert!(track.duration_secs().is_some(), "{}", track.duration);
        }
    }

    #[test]
    fn search_matches_title_or_artist_case_insensitively() {
        let by_artist = search_tracks("ARIJIT");
        assert_eq!(
            by_artist.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["h1", "h2"]
        );

        let by_title = search_tracks("neon");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");
    }

    #[test]
    fn blank_search_returns_nothing() {
        assert!(search_tracks("   ").is_empty());
    }

    #[test]
    fn resolve_drops_dangling_ids_and_keeps_duplicates() {
        let ids = vec!["h1".to_string(), "nope".to_string(), "h1".to_string()];
        let resolved = resolve_tracks(&ids);
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|t| t.id == "h1"));
    }

    #[test]
    fn default_playlists_resolve_fully() {
        for playlist in default_playlists() {
            assert_eq!(resolve_tracks(&playlist.songs).len(), playlist.songs.len());
        }
        assert!(find_default_playlist("p2").is_some());
    }
}
