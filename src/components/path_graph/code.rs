use super::types::{Node, NodeId};

const COLORS: [&str; 13] = [
	"azure", "crimson", "emerald", "golden", "indigo", "lavender", "midnight", "olive", "purple",
	"ruby", "sapphire", "teal", "violet",
];

const NATURE: [&str; 13] = [
	"arrow", "beacon", "crystal", "diamond", "echo", "flame", "glacier", "horizon", "island",
	"jungle", "kingdom", "lagoon", "mountain",
];

const ABSTRACT: [&str; 13] = [
	"adventure",
	"butterfly",
	"cascade",
	"discovery",
	"enchanted",
	"freedom",
	"guardian",
	"harmony",
	"infinity",
	"journey",
	"kaleidoscope",
	"labyrinth",
	"mystical",
];

pub const PLACEHOLDER: &str = "(Select nodes to generate)";

/// 32-bit `h * 31 + c` rolling hash over UTF-16 code units, wrapping on overflow.
pub fn string_hash(s: &str) -> i32 {
	s.encode_utf16()
		.fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

fn pick(list: &[&'static str; 13], value: i32) -> &'static str {
	// |v % n| == |v| % n, without overflowing on i32::MIN.
	list[(value % list.len() as i32).unsigned_abs() as usize]
}

/// Three-word code for the set of selected nodes; traversal order does not matter.
pub fn code(path: &[NodeId], nodes: &[Node]) -> String {
	if path.is_empty() {
		return String::new();
	}
	let mut ids = path.to_vec();
	ids.sort_unstable();
	ids.dedup();
	let labels: String = ids
		.iter()
		.filter_map(|&id| nodes.iter().find(|n| n.id == id).map(|n| n.label))
		.collect();

	let hash = string_hash(&labels);
	format!(
		"{}-{}-{}",
		pick(&COLORS, hash),
		pick(&NATURE, hash >> 4),
		pick(&ABSTRACT, hash >> 8)
	)
}

#[cfg(test)]
mod tests {
	use super::super::graph::{CircleLayout, generate};
	use super::*;

	fn nodes() -> Vec<Node> {
		generate(&CircleLayout::default()).nodes
	}

	#[test]
	fn empty_path_has_no_code() {
		assert_eq!(code(&[], &nodes()), "");
	}

	#[test]
	fn known_codes() {
		let nodes = nodes();
		assert_eq!(string_hash("AC"), 2082);
		assert_eq!(code(&[0, 2], &nodes), "emerald-arrow-infinity");
		assert_eq!(code(&[0], &nodes), "azure-echo-adventure");
	}

	#[test]
	fn hash_wraps_like_32_bit_ints() {
		let long = "ABCDEFGHIJ";
		let mut wide: i64 = 0;
		for c in long.chars() {
			wide = ((wide * 31 + c as i64) as i32) as i64;
		}
		assert_eq!(string_hash(long) as i64, wide);
		assert_eq!(string_hash(""), 0);
	}

	#[test]
	fn negative_hashes_pick_valid_words() {
		// Every word index stays in range even for i32::MIN.
		for value in [i32::MIN, -1, -13, -14, i32::MAX] {
			assert!(COLORS.contains(&pick(&COLORS, value)));
		}
		assert_eq!(pick(&COLORS, -14), "crimson");
	}

	#[test]
	fn code_ignores_order_and_repeats() {
		let nodes = nodes();
		let expected = code(&[1, 4, 7, 9], &nodes);
		assert_eq!(code(&[9, 7, 4, 1], &nodes), expected);
		assert_eq!(code(&[4, 1, 9, 7], &nodes), expected);
		assert_eq!(code(&[4, 1, 4, 9, 7, 1], &nodes), expected);
	}

	#[test]
	fn code_is_stable_across_runs() {
		let nodes = nodes();
		let first = code(&[2, 5, 3], &nodes);
		for _ in 0..10 {
			assert_eq!(code(&[3, 2, 5], &nodes), first);
		}
		assert_eq!(first.split('-').count(), 3);
	}
}
