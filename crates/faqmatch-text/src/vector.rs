/// Sparse vector over the index vocabulary: `(term index, weight)` pairs
/// sorted by term index, weights non-negative, zero weights omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
	entries: Vec<(u32, f64)>,
}

impl TermVector {
	/// Builds an L2-normalized vector from raw weights. Zero-magnitude input
	/// gives the empty vector.
	pub(crate) fn normalized(mut entries: Vec<(u32, f64)>) -> Self {
		entries.retain(|&(_, w)| w > 0.0);
		entries.sort_unstable_by_key(|&(t, _)| t);
		let norm = entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
		if norm == 0.0 { return Self::default(); }
		for (_, w) in &mut entries { *w /= norm; }
		Self { entries }
	}

	pub fn is_empty(&self) -> bool { self.entries.is_empty() }

	/// Number of non-zero components.
	pub fn len(&self) -> usize { self.entries.len() }

	pub fn weight(&self, term: u32) -> f64 {
		self.entries.binary_search_by_key(&term, |&(t, _)| t).map_or(0.0, |i| self.entries[i].1)
	}

	pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ { self.entries.iter().copied() }

	pub fn norm(&self) -> f64 { self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt() }

	/// Walks the shorter vector and looks each term up in the longer one.
	pub fn dot(&self, other: &TermVector) -> f64 {
		let (short, long) = if self.len() <= other.len() { (self, other) } else { (other, self) };
		short.entries.iter().map(|&(t, w)| w * long.weight(t)).sum()
	}

	/// Cosine similarity in [0, 1]; 0 when either side has zero magnitude.
	pub fn cosine(&self, other: &TermVector) -> f64 {
		let denom = self.norm() * other.norm();
		if denom == 0.0 { return 0.0; }
		(self.dot(other) / denom).clamp(0.0, 1.0)
	}
}
