//! Deterministic choice selection from a seed hash.
//!
//! One 32-bit hash drives four independent reductions: face type, palette
//! color, rotation pose, and (separately, from the seed text itself) the
//! initial glyph. The reductions are intentionally uncorrelated - changing
//! the seed may change any subset of them.

use super::face::{FACE_TYPES, FaceType};
use super::hash::seed_hash;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// The nine rotation poses, in hash-reduction order.
///
/// This exact ordering is a compatibility contract shared with the browser
/// runtime: `hash % 9` must land on the same pose everywhere. Never reorder.
pub const LATTICE: [Rotation; 9] = [
    Rotation { x: -1, y: 1 },
    Rotation { x: 1, y: 1 },
    Rotation { x: 1, y: 0 },
    Rotation { x: 0, y: 1 },
    Rotation { x: -1, y: 0 },
    Rotation { x: 0, y: 0 },
    Rotation { x: 0, y: -1 },
    Rotation { x: -1, y: -1 },
    Rotation { x: 1, y: -1 },
];

/// A pose on the 3x3 rotation lattice.
///
/// Doubles as a subtle positional offset in the static render and as the
/// `data-facehash-rotation-x/y` attributes the hover-tilt runtime reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    pub x: i8,
    pub y: i8,
}

/// Everything the seed decides, computed once per render.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedChoice {
    pub face: FaceType,
    /// One entry of the request palette.
    pub color: String,
    pub rotation: Rotation,
    /// First grapheme of the seed, uppercased; `"?"` when there is none.
    pub initial: String,
}

/// Derive the discrete choices for a seed.
///
/// Total over any seed, including the empty string. An empty palette is a
/// caller contract violation, not an input error.
pub fn derive(seed: &str, palette: &[String]) -> DerivedChoice {
    assert!(!palette.is_empty(), "palette must contain at least one color");

    let h = seed_hash(seed) as usize;
    DerivedChoice {
        face: FACE_TYPES[h % FACE_TYPES.len()],
        color: palette[h % palette.len()].clone(),
        rotation: LATTICE[h % LATTICE.len()],
        initial: initial_for(seed),
    }
}

/// First grapheme cluster of the seed, uppercased.
fn initial_for(seed: &str) -> String {
    match seed.graphemes(true).next() {
        Some(g) => g.to_uppercase(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec!["#111111".into(), "#222222".into(), "#333333".into()]
    }

    #[test]
    fn test_lattice_order_is_frozen() {
        // Compatibility contract: this table must never be reordered.
        let expected = [
            (-1, 1),
            (1, 1),
            (1, 0),
            (0, 1),
            (-1, 0),
            (0, 0),
            (0, -1),
            (-1, -1),
            (1, -1),
        ];
        for (pose, (x, y)) in LATTICE.iter().zip(expected) {
            assert_eq!((pose.x, pose.y), (x, y));
        }
    }

    #[test]
    fn test_derive_alice() {
        // seed_hash("alice") = 92903040: % 4 = 0, % 3 = 0, % 9 = 0.
        let choice = derive("alice", &palette());
        assert_eq!(choice.face, FaceType::Round);
        assert_eq!(choice.color, "#111111");
        assert_eq!(choice.rotation, Rotation { x: -1, y: 1 });
        assert_eq!(choice.initial, "A");
    }

    #[test]
    fn test_derive_bob() {
        // seed_hash("bob") = 97717: % 4 = 1, % 3 = 1, % 9 = 4.
        let choice = derive("bob", &palette());
        assert_eq!(choice.face, FaceType::Cross);
        assert_eq!(choice.color, "#222222");
        assert_eq!(choice.rotation, Rotation { x: -1, y: 0 });
        assert_eq!(choice.initial, "B");
    }

    #[test]
    fn test_seed_sensitivity() {
        let a = derive("alice", &palette());
        let b = derive("bob", &palette());
        assert!(a.face != b.face || a.color != b.color || a.rotation != b.rotation);
    }

    #[test]
    fn test_empty_seed_falls_back() {
        let choice = derive("", &palette());
        assert_eq!(choice.initial, "?");
        // seed_hash("") = 0, so every reduction lands on index 0.
        assert_eq!(choice.face, FaceType::Round);
        assert_eq!(choice.color, "#111111");
        assert_eq!(choice.rotation, Rotation { x: -1, y: 1 });
    }

    #[test]
    fn test_initial_is_grapheme_aware() {
        let choice = derive("éva", &palette());
        assert_eq!(choice.initial, "É");

        // Combining mark stays attached to its base character.
        let choice = derive("e\u{301}va", &palette());
        assert_eq!(choice.initial, "E\u{301}");

        let choice = derive("日本", &palette());
        assert_eq!(choice.initial, "日");
    }

    #[test]
    fn test_color_follows_palette_length() {
        let two: Vec<String> = vec!["#aa0000".into(), "#00aa00".into()];
        // 92903040 % 2 = 0
        assert_eq!(derive("alice", &two).color, "#aa0000");
    }

    #[test]
    #[should_panic(expected = "palette must contain at least one color")]
    fn test_empty_palette_is_contract_violation() {
        derive("alice", &[]);
    }
}
