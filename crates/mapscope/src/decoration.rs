//! Dynamic decorations anchored to the bounding cube.
//!
//! Axis labels, grids, and similar decorations track the plot's bounding
//! cube as it rotates. Each is registered against either one or more of the
//! six cube faces, or a single (edge, position) slot out of the 12 cube edges
//! and 6 positions along an edge. External placement logic walks the buckets
//! whenever the cube's orientation changes.

use mapscope_core::error::{MapscopeError, Result};

use crate::element::ElementId;

/// Face tokens in bucket order.
pub const FACE_TOKENS: [&str; 6] = ["x+", "y+", "z+", "x-", "y-", "z-"];

/// Edge signatures in bucket order.
///
/// Each signature fixes two axes at an end of their range and leaves one
/// free, selecting one of the cube's 12 edges.
pub const EDGE_CODES: [&str; 12] = [
    "x--", "x-+", "x++", "x+-", "-y-", "-y+", "+y+", "+y-", "--z", "-+z", "++z", "+-z",
];

/// Position letters along an edge, in slot order.
///
/// The numeric slots are load-bearing for placement; the directional meaning
/// of the letters is not documented consistently upstream, so only the
/// letter-to-slot mapping is guaranteed here.
pub const POSITION_CODES: [char; 6] = ['r', 'u', 'f', 'l', 'd', 'b'];

/// Decodes an edge signature to its bucket index.
pub fn decode_edge(code: &str) -> Result<usize> {
    EDGE_CODES
        .iter()
        .position(|&e| e == code)
        .ok_or_else(|| MapscopeError::DecorationCode(code.to_string()))
}

/// Decodes a position letter to its slot index.
pub fn decode_position(code: char) -> Result<usize> {
    POSITION_CODES
        .iter()
        .position(|&p| p == code)
        .ok_or_else(|| MapscopeError::DecorationCode(code.to_string()))
}

/// Decodes a 4-character corner code to an (edge, position) pair.
pub fn decode_corner(code: &str) -> Result<(usize, usize)> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 4 {
        return Err(MapscopeError::DecorationCode(code.to_string()));
    }
    let edge_code: String = chars[..3].iter().collect();
    let edge = decode_edge(&edge_code)?;
    let pos = decode_position(chars[3])?;
    Ok((edge, pos))
}

/// Spatial buckets of dynamically placed elements.
#[derive(Debug, Default)]
pub struct DecorationBuckets {
    faces: [Vec<ElementId>; 6],
    edges: [[Vec<ElementId>; 6]; 12],
}

impl DecorationBuckets {
    /// Creates empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element against every face token its `faces` string
    /// contains.
    ///
    /// A string containing no face token fails rather than silently placing
    /// the element nowhere.
    pub fn place_faces(&mut self, faces: &str, element: ElementId) -> Result<()> {
        let mut matched = false;
        for (bucket, token) in self.faces.iter_mut().zip(FACE_TOKENS) {
            if faces.contains(token) {
                bucket.push(element);
                matched = true;
            }
        }
        if matched {
            Ok(())
        } else {
            Err(MapscopeError::DecorationCode(faces.to_string()))
        }
    }

    /// Registers an element into the single slot its corner code decodes to.
    pub fn place_corner(&mut self, code: &str, element: ElementId) -> Result<()> {
        let (edge, pos) = decode_corner(code)?;
        self.edges[edge][pos].push(element);
        Ok(())
    }

    /// Elements registered against a face bucket.
    pub fn face(&self, index: usize) -> &[ElementId] {
        &self.faces[index]
    }

    /// Elements registered in an (edge, position) slot.
    pub fn edge(&self, edge: usize, pos: usize) -> &[ElementId] {
        &self.edges[edge][pos]
    }

    /// Total number of registrations across all buckets.
    pub fn len(&self) -> usize {
        self.faces.iter().map(Vec::len).sum::<usize>()
            + self
                .edges
                .iter()
                .flat_map(|e| e.iter())
                .map(Vec::len)
                .sum::<usize>()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn element() -> ElementId {
        // Buckets only store handles; build one from a throwaway viewer state.
        use mapscope_core::plot::{PlotKind, PlotObject, PlotProperties};
        let mut scene = mapscope_core::Scene::new();
        let mut store = crate::element::ElementStore::new();
        let obj = PlotObject {
            kind: PlotKind::Point,
            ids: vec![1],
            properties: PlotProperties::default(),
            highlight: None,
            group: None,
            coords: vec![vec![0.0, 0.0, 0.0]],
            text: Vec::new(),
        };
        crate::element::build(&obj, &mut scene, &mut store)
    }

    #[test]
    fn test_face_tokens_are_independent() {
        let mut buckets = DecorationBuckets::new();
        let e = element();
        buckets.place_faces("x+y-", e).unwrap();
        assert_eq!(buckets.face(0), &[e]); // x+
        assert_eq!(buckets.face(4), &[e]); // y-
        for index in [1, 2, 3, 5] {
            assert!(buckets.face(index).is_empty());
        }
    }

    #[test]
    fn test_unmatched_faces_fail_fast() {
        let mut buckets = DecorationBuckets::new();
        let err = buckets.place_faces("northwest", element()).unwrap_err();
        assert!(matches!(err, MapscopeError::DecorationCode(_)));
    }

    #[test]
    fn test_corner_decode_is_total_and_collision_free() {
        let mut seen = HashSet::new();
        for edge_code in EDGE_CODES {
            for pos_code in POSITION_CODES {
                let code = format!("{edge_code}{pos_code}");
                let slot = decode_corner(&code).unwrap();
                assert!(seen.insert(slot), "slot collision for '{code}'");
            }
        }
        assert_eq!(seen.len(), 72);
    }

    #[test]
    fn test_corner_index_mapping() {
        assert_eq!(decode_corner("x--r").unwrap(), (0, 0));
        assert_eq!(decode_corner("x--u").unwrap(), (0, 1));
        assert_eq!(decode_corner("+-zb").unwrap(), (11, 5));
        assert_eq!(decode_corner("-y+d").unwrap(), (5, 4));
    }

    #[test]
    fn test_bad_corner_codes_fail() {
        assert!(decode_corner("q--r").is_err());
        assert!(decode_corner("x--q").is_err());
        assert!(decode_corner("x-").is_err());
        assert!(decode_corner("").is_err());
    }

    proptest! {
        #[test]
        fn prop_arbitrary_corner_codes_never_panic(code in "\\PC{0,6}") {
            // Either decodes into the 12x6 matrix or errors, never panics.
            if let Ok((edge, pos)) = decode_corner(&code) {
                prop_assert!(edge < 12 && pos < 6);
            }
        }
    }
}
