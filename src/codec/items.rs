//! Item list encoding
//!
//! Items are stored as a space-separated token stream. Each item writes its
//! code, with `-<slot>` appended when equipped. A gun with a finite clip that
//! is loaded or reloading is followed by the clip's code, so the magazine
//! survives a save.

use crate::items::{ItemResolver, SolItem};

/// Encode `items` in order. Every token is followed by a space.
pub fn encode_items<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a SolItem>,
{
    let mut out = String::new();
    for item in items {
        out.push_str(&item.code);
        if item.is_equipped() {
            out.push('-');
            out.push_str(&item.equipped.to_string());
        }
        out.push(' ');
        if let Some(gun) = item.as_gun() {
            if gun.has_saved_clip() {
                out.push_str(&gun.clip.code);
                out.push(' ');
            }
        }
    }
    out
}

/// Decode a token stream back into items using `resolver`.
///
/// Every known token becomes one item, clips included: a loaded gun comes
/// back empty next to its clip and is reloaded when the ship is spawned
/// (see `ItemContainer::reload_guns`). Unknown codes are skipped.
pub fn decode_items<R: ItemResolver + ?Sized>(text: &str, resolver: &R) -> Vec<SolItem> {
    text.split_whitespace()
        .filter_map(|token| {
            let (code, slot) = split_token(token);
            let Some(mut item) = resolver.resolve(code) else {
                log::warn!("Unknown item code in save: {}", code);
                return None;
            };
            item.equipped = slot;
            Some(item)
        })
        .collect()
}

/// Split `code-slot`; a suffix that is not a slot number stays in the code
fn split_token(token: &str) -> (&str, u8) {
    if let Some((code, slot)) = token.rsplit_once('-') {
        if let Ok(slot) = slot.parse::<u8>() {
            if !code.is_empty() {
                return (code, slot);
            }
        }
    }
    (token, 0)
}
