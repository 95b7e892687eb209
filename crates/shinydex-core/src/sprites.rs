//! Static sprite-asset resolution.
//!
//! Pure display-string functions only; fetching the assets is the frontend's
//! problem.

use crate::models::Member;
use crate::names::{normalize_member, normalize_species};

/// Base URL for animated shiny sprites.
const SPECIES_GIF_BASE: &str = "https://img.pokemondb.net/sprites/black-white/anim/shiny";

/// Fallback image for members without a sprite of their own.
const DEFAULT_MEMBER_SPRITE: &str = "/img/membersprites/examplesprite.png";

/// Sprite filenames that keep the dash the normalizer would otherwise have
/// produced anyway, looked up by the fully stripped spelling.
const SPECIES_GIF_OVERRIDES: &[(&str, &str)] = &[
    ("mrmime", "mr-mime"),
    ("mimejr", "mime-jr"),
    ("nidoranf", "nidoran-f"),
    ("nidoranm", "nidoran-m"),
    ("typenull", "type-null"),
    ("porygonz", "porygon-z"),
];

/// URL of the animated shiny GIF for a species.
pub fn species_gif_url(name: &str) -> String {
    let stripped: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '\'' | '’' | '-'))
        .collect();

    let key = SPECIES_GIF_OVERRIDES
        .iter()
        .find(|(k, _)| *k == stripped)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| normalize_species(name));

    format!("{}/{}.gif", SPECIES_GIF_BASE, key)
}

/// Path to a member's sprite, falling back to the example sprite when the
/// member is unknown or has no sprite format tag.
pub fn member_sprite_path(member_name: &str, members: &[Member]) -> String {
    let key = normalize_member(member_name);

    let entry = members.iter().find(|m| m.key == key);
    match entry.and_then(|m| m.sprite.as_deref()) {
        Some(ext) if ext != "none" => format!("/img/membersprites/{}sprite.{}", key, ext),
        _ => DEFAULT_MEMBER_SPRITE.to_string(),
    }
}
