/// Suffixes the chooser suggests and the controller enforces.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".fasta", ".fa", ".fas"];

/// Case-sensitive filename suffix filter.
///
/// `reads.FASTA` is rejected; `reads.fasta` is accepted. A name that is only
/// the extension (".fa") passes too, since nothing else is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionFilter {
	extensions: Vec<String>,
}

impl ExtensionFilter {
	pub fn new<I, S>(extensions: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			extensions: extensions.into_iter().map(Into::into).collect(),
		}
	}

	pub fn accepts(&self, name: &str) -> bool {
		self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
	}

	/// Value for the chooser's `accept` attribute, e.g. ".fasta,.fa,.fas".
	pub fn accept_attr(&self) -> String {
		self.extensions.join(",")
	}
}

impl Default for ExtensionFilter {
	fn default() -> Self {
		Self::new(DEFAULT_EXTENSIONS.iter().copied())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accepts_default_suffixes() {
		let filter = ExtensionFilter::default();
		assert!(filter.accepts("sample.fasta"));
		assert!(filter.accepts("sample.fa"));
		assert!(filter.accepts("sample.fas"));
	}

	#[test]
	fn test_rejects_other_suffixes() {
		let filter = ExtensionFilter::default();
		assert!(!filter.accepts("sample.fastq"));
		assert!(!filter.accepts("sample.txt"));
		assert!(!filter.accepts("fasta"));
		assert!(!filter.accepts("sample.fasta.gz"));
	}

	#[test]
	fn test_match_is_case_sensitive() {
		let filter = ExtensionFilter::default();
		assert!(!filter.accepts("SAMPLE.FASTA"));
		assert!(!filter.accepts("sample.Fa"));
	}

	#[test]
	fn test_accept_attr() {
		assert_eq!(ExtensionFilter::default().accept_attr(), ".fasta,.fa,.fas");
	}
}
